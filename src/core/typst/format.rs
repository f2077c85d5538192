//! Formatting helpers for Typst values

use crate::core::model::{ColumnWidth, StrokeValue};

/// Format a magnitude: whole numbers without decimals, otherwise rounded to
/// three decimals with trailing zeros trimmed
///
/// Values exactly halfway between two thousandths round away from zero
/// (`0.0625` -> `0.063`).
pub fn format_numeric(value: f64) -> String {
    if value.fract() == 0.0 && value.abs() < 1e15 {
        return format!("{}", value as i64);
    }
    let magnitude = value.abs();
    let fixed = if is_halfway(magnitude) {
        format!("{:.3}", magnitude + 0.00025)
    } else {
        format!("{magnitude:.3}")
    };
    let trimmed = fixed.trim_end_matches('0').trim_end_matches('.');
    if value < 0.0 && trimmed != "0" {
        format!("-{trimmed}")
    } else {
        trimmed.to_string()
    }
}

/// An exact tie at three decimals is an odd multiple of 1/16
fn is_halfway(magnitude: f64) -> bool {
    let sixteenths = magnitude * 16.0;
    sixteenths.fract() == 0.0 && sixteenths % 2.0 == 1.0
}

/// Format a length in pt
pub fn format_points(value: f64) -> String {
    format!("{}pt", format_numeric(value))
}

pub fn format_width(width: ColumnWidth) -> String {
    match width {
        ColumnWidth::Auto => "auto".to_string(),
        ColumnWidth::Points(pt) => format_points(pt),
    }
}

pub fn format_stroke(stroke: StrokeValue) -> String {
    match stroke {
        StrokeValue::None => "none".to_string(),
        StrokeValue::Points(pt) => format_points(pt),
    }
}

/// Format items as a Typst array literal
///
/// A single item keeps a trailing comma, since `(x)` is a parenthesized
/// expression rather than an array.
pub fn format_array(items: &[String]) -> String {
    match items {
        [] => "()".to_string(),
        [only] => format!("({only},)"),
        _ => format!("({})", items.join(", ")),
    }
}

pub fn indent_lines(lines: Vec<String>, indent: &str) -> Vec<String> {
    lines
        .into_iter()
        .map(|line| format!("{indent}{line}"))
        .collect()
}
