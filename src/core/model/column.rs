//! Column specifications (width and default alignment)

use serde::{Deserialize, Serialize};

use super::cell::Align;

/// Column width: `"auto"` or a width in pt
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "WidthRepr", into = "WidthRepr")]
pub enum ColumnWidth {
    Auto,
    Points(f64),
}

impl ColumnWidth {
    /// Drop non-positive and non-finite widths
    pub(crate) fn normalized(self) -> Option<Self> {
        match self {
            ColumnWidth::Auto => Some(ColumnWidth::Auto),
            ColumnWidth::Points(pt) if pt.is_finite() && pt > 0.0 => Some(self),
            ColumnWidth::Points(pt) => {
                log::debug!("dropping column width {pt}");
                None
            }
        }
    }
}

#[derive(Serialize, Deserialize)]
#[serde(untagged)]
enum WidthRepr {
    Keyword(String),
    Whole(i64),
    Points(f64),
}

impl TryFrom<WidthRepr> for ColumnWidth {
    type Error = String;

    fn try_from(repr: WidthRepr) -> Result<Self, Self::Error> {
        match repr {
            WidthRepr::Keyword(word) if word == "auto" => Ok(ColumnWidth::Auto),
            WidthRepr::Keyword(word) => Err(format!(
                "unknown column width '{word}', expected \"auto\" or a number"
            )),
            WidthRepr::Whole(whole) => Ok(ColumnWidth::Points(whole as f64)),
            WidthRepr::Points(pt) => Ok(ColumnWidth::Points(pt)),
        }
    }
}

impl From<ColumnWidth> for WidthRepr {
    fn from(width: ColumnWidth) -> Self {
        match width {
            ColumnWidth::Auto => WidthRepr::Keyword("auto".to_string()),
            ColumnWidth::Points(pt) => match super::whole_points(pt) {
                Some(whole) => WidthRepr::Whole(whole),
                None => WidthRepr::Points(pt),
            },
        }
    }
}

/// Per-column rendering defaults
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ColumnSpec {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub width: Option<ColumnWidth>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub align: Option<Align>,
}

impl ColumnSpec {
    pub fn auto() -> Self {
        ColumnSpec {
            width: Some(ColumnWidth::Auto),
            align: None,
        }
    }

    pub fn points(pt: f64) -> Self {
        ColumnSpec {
            width: Some(ColumnWidth::Points(pt)),
            align: None,
        }
    }

    pub fn with_align(mut self, align: Align) -> Self {
        self.align = Some(align);
        self
    }

    pub fn has_values(&self) -> bool {
        self.width.is_some() || self.align.is_some()
    }

    pub(crate) fn normalized(&self) -> Self {
        ColumnSpec {
            width: self.width.and_then(ColumnWidth::normalized),
            align: self.align,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_width_json() {
        let spec: ColumnSpec = serde_json::from_str(r#"{"width":"auto"}"#).unwrap();
        assert_eq!(spec.width, Some(ColumnWidth::Auto));

        let spec: ColumnSpec = serde_json::from_str(r#"{"width":48,"align":"right"}"#).unwrap();
        assert_eq!(spec.width, Some(ColumnWidth::Points(48.0)));
        assert_eq!(spec.align, Some(Align::Right));

        assert!(serde_json::from_str::<ColumnSpec>(r#"{"width":"wide"}"#).is_err());
    }

    #[test]
    fn test_whole_widths_export_without_fraction() {
        assert_eq!(serde_json::to_string(&ColumnSpec::points(48.0)).unwrap(), r#"{"width":48}"#);
        assert_eq!(serde_json::to_string(&ColumnSpec::points(12.5)).unwrap(), r#"{"width":12.5}"#);

        let spec: ColumnSpec = serde_json::from_str(r#"{"width":48.0}"#).unwrap();
        assert_eq!(spec.width, Some(ColumnWidth::Points(48.0)));
    }

    #[test]
    fn test_normalized_drops_bad_widths() {
        assert_eq!(ColumnSpec::points(0.0).normalized(), ColumnSpec::default());
        assert_eq!(ColumnSpec::points(-3.0).normalized(), ColumnSpec::default());
        assert_eq!(ColumnSpec::points(12.5).normalized(), ColumnSpec::points(12.5));
        assert!(!ColumnSpec::points(f64::NAN).normalized().has_values());
    }
}
