//! Cell types and alignment for the table model

use serde::{Deserialize, Deserializer, Serialize};

/// Horizontal alignment options
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Align {
    Left,
    Center,
    Right,
}

impl Align {
    /// Alignment used by columns without an explicit hint
    pub const DEFAULT: Align = Align::Left;

    /// Convert to Typst alignment string
    pub fn to_typst(&self) -> &'static str {
        match self {
            Align::Left => "left",
            Align::Center => "center",
            Align::Right => "right",
        }
    }
}

/// A single table cell: verbatim text plus optional style overrides
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Cell {
    /// Cell text, stored as typed (escaping happens at export time)
    #[serde(default, deserialize_with = "text_or_empty")]
    pub text: String,
    /// Per-cell alignment override
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub align: Option<Align>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bold: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub italic: Option<bool>,
}

/// Missing or `null` text reads as blank
fn text_or_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

impl Cell {
    /// Create a cell with plain text
    pub fn new(text: impl Into<String>) -> Self {
        Cell {
            text: text.into(),
            ..Default::default()
        }
    }

    /// Create a blank cell
    pub fn empty() -> Self {
        Cell::default()
    }

    pub fn with_align(mut self, align: Align) -> Self {
        self.align = Some(align);
        self
    }

    pub fn bold(mut self) -> Self {
        self.bold = Some(true);
        self
    }

    pub fn italic(mut self) -> Self {
        self.italic = Some(true);
        self
    }

    pub fn is_bold(&self) -> bool {
        self.bold.unwrap_or(false)
    }

    pub fn is_italic(&self) -> bool {
        self.italic.unwrap_or(false)
    }

    /// Apply a shallow patch: every field set in `patch` replaces the current one
    pub fn apply(mut self, patch: &CellPatch) -> Self {
        if let Some(text) = &patch.text {
            self.text = text.clone();
        }
        if let Some(align) = patch.align {
            self.align = Some(align);
        }
        if let Some(bold) = patch.bold {
            self.bold = Some(bold);
        }
        if let Some(italic) = patch.italic {
            self.italic = Some(italic);
        }
        self
    }
}

/// Partial cell update used by `TableModel::patch_cell` and range patches
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CellPatch {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub align: Option<Align>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bold: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub italic: Option<bool>,
}

impl CellPatch {
    pub fn text(text: impl Into<String>) -> Self {
        CellPatch {
            text: Some(text.into()),
            ..Default::default()
        }
    }

    pub fn align(align: Align) -> Self {
        CellPatch {
            align: Some(align),
            ..Default::default()
        }
    }

    pub fn bold(bold: bool) -> Self {
        CellPatch {
            bold: Some(bold),
            ..Default::default()
        }
    }

    pub fn italic(italic: bool) -> Self {
        CellPatch {
            italic: Some(italic),
            ..Default::default()
        }
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_none() && self.align.is_none() && self.bold.is_none() && self.italic.is_none()
    }
}

/// Ensure a row has exactly `column_count` cells by truncating or padding with blanks
pub(crate) fn fit_row(mut row: Vec<Cell>, column_count: usize) -> Vec<Cell> {
    row.resize_with(column_count, Cell::empty);
    row
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_apply_patch_keeps_unset_fields() {
        let cell = Cell::new("a").with_align(Align::Right).bold();
        let patched = cell.apply(&CellPatch::text("b"));
        assert_eq!(patched.text, "b");
        assert_eq!(patched.align, Some(Align::Right));
        assert!(patched.is_bold());
        assert!(!patched.is_italic());
    }

    #[test]
    fn test_fit_row() {
        let padded = fit_row(vec![Cell::new("x")], 3);
        assert_eq!(padded.len(), 3);
        assert_eq!(padded[2], Cell::empty());

        let truncated = fit_row(vec![Cell::new("x"), Cell::new("y")], 1);
        assert_eq!(truncated, vec![Cell::new("x")]);
    }

    #[test]
    fn test_cell_json_shape() {
        let json = serde_json::to_string(&Cell::new("v").bold()).unwrap();
        assert_eq!(json, r#"{"text":"v","bold":true}"#);

        let cell: Cell = serde_json::from_str(r#"{"align":"center"}"#).unwrap();
        assert_eq!(cell.text, "");
        assert_eq!(cell.align, Some(Align::Center));
    }

    #[test]
    fn test_null_text_reads_as_blank() {
        let cell: Cell = serde_json::from_str(r#"{"text":null,"bold":true}"#).unwrap();
        assert_eq!(cell, Cell::empty().bold());
        assert!(serde_json::from_str::<Cell>(r#"{"text":3}"#).is_err());
    }
}
