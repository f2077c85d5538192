//! Boundary stroke settings
//!
//! Strokes are stored per row (`top`/`bottom`) and per column (`left`/`right`).
//! Row `r`'s bottom and row `r + 1`'s top describe the same boundary; the
//! serializer resolves the overlap.

use serde::{Deserialize, Serialize};

/// Stroke intensity along a boundary: `"none"` or a width in pt
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "StrokeRepr", into = "StrokeRepr")]
pub enum StrokeValue {
    None,
    Points(f64),
}

impl StrokeValue {
    /// Discard non-positive and non-finite widths
    pub(crate) fn normalized(self) -> Option<Self> {
        match self {
            StrokeValue::None => Some(StrokeValue::None),
            StrokeValue::Points(pt) if pt.is_finite() && pt > 0.0 => Some(self),
            StrokeValue::Points(pt) => {
                log::debug!("discarding stroke value {pt}");
                None
            }
        }
    }

    /// Width in pt when the stroke draws a line
    pub fn points(&self) -> Option<f64> {
        match self {
            StrokeValue::None => None,
            StrokeValue::Points(pt) => Some(*pt),
        }
    }
}

#[derive(Serialize, Deserialize)]
#[serde(untagged)]
enum StrokeRepr {
    Keyword(String),
    Whole(i64),
    Points(f64),
}

impl TryFrom<StrokeRepr> for StrokeValue {
    type Error = String;

    fn try_from(repr: StrokeRepr) -> Result<Self, Self::Error> {
        match repr {
            StrokeRepr::Keyword(word) if word == "none" => Ok(StrokeValue::None),
            StrokeRepr::Keyword(word) => Err(format!(
                "unknown stroke '{word}', expected \"none\" or a number"
            )),
            StrokeRepr::Whole(whole) => Ok(StrokeValue::Points(whole as f64)),
            StrokeRepr::Points(pt) => Ok(StrokeValue::Points(pt)),
        }
    }
}

impl From<StrokeValue> for StrokeRepr {
    fn from(value: StrokeValue) -> Self {
        match value {
            StrokeValue::None => StrokeRepr::Keyword("none".to_string()),
            StrokeValue::Points(pt) => match super::whole_points(pt) {
                Some(whole) => StrokeRepr::Whole(whole),
                None => StrokeRepr::Points(pt),
            },
        }
    }
}

/// Horizontal stroke settings for one row
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct RowStroke {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub top: Option<StrokeValue>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bottom: Option<StrokeValue>,
}

impl RowStroke {
    pub fn top(pt: f64) -> Self {
        RowStroke {
            top: Some(StrokeValue::Points(pt)),
            bottom: None,
        }
    }

    pub fn bottom(pt: f64) -> Self {
        RowStroke {
            top: None,
            bottom: Some(StrokeValue::Points(pt)),
        }
    }

    pub fn has_values(&self) -> bool {
        self.top.is_some() || self.bottom.is_some()
    }

    pub(crate) fn normalized(&self) -> Self {
        RowStroke {
            top: self.top.and_then(StrokeValue::normalized),
            bottom: self.bottom.and_then(StrokeValue::normalized),
        }
    }
}

/// Vertical stroke settings for one column
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct ColumnStroke {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub left: Option<StrokeValue>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub right: Option<StrokeValue>,
}

impl ColumnStroke {
    pub fn left(pt: f64) -> Self {
        ColumnStroke {
            left: Some(StrokeValue::Points(pt)),
            right: None,
        }
    }

    pub fn right(pt: f64) -> Self {
        ColumnStroke {
            left: None,
            right: Some(StrokeValue::Points(pt)),
        }
    }

    pub fn has_values(&self) -> bool {
        self.left.is_some() || self.right.is_some()
    }

    pub(crate) fn normalized(&self) -> Self {
        ColumnStroke {
            left: self.left.and_then(StrokeValue::normalized),
            right: self.right.and_then(StrokeValue::normalized),
        }
    }
}

/// Aggregate stroke configuration of a normalized table
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TableStrokes {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rows: Option<Vec<RowStroke>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub columns: Option<Vec<ColumnStroke>>,
}

/// Loose stroke input: entries may be `null` and lengths may not match the table
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TableStrokesInit {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rows: Option<Vec<Option<RowStroke>>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub columns: Option<Vec<Option<ColumnStroke>>>,
}

impl From<TableStrokes> for TableStrokesInit {
    fn from(strokes: TableStrokes) -> Self {
        TableStrokesInit {
            rows: strokes
                .rows
                .map(|rows| rows.into_iter().map(Some).collect()),
            columns: strokes
                .columns
                .map(|columns| columns.into_iter().map(Some).collect()),
        }
    }
}

/// Resize loose entries to `len`, normalizing each one; `None` when no input was given
pub(crate) fn fit_strokes<T, F>(entries: Option<&[Option<T>]>, len: usize, normalize: F) -> Option<Vec<T>>
where
    T: Default,
    F: Fn(&T) -> T,
{
    let entries = entries.filter(|e| !e.is_empty())?;
    if entries.len() != len {
        log::debug!("resizing stroke entries from {} to {len}", entries.len());
    }
    Some(
        (0..len)
            .map(|i| match entries.get(i) {
                Some(Some(entry)) => normalize(entry),
                _ => T::default(),
            })
            .collect(),
    )
}
