//! Property-based tests for tytable.
//!
//! Random models and random edit sequences must keep every table invariant,
//! and normalization, escaping and rendering must be stable.

use proptest::prelude::*;

use tytable::{
    create_table_model, escape_typst_inline, normalize_table_model, render_table_model_to_typst,
    table_from_json, table_to_json, Align, Cell, CellPatch, CellPosition, ColumnSpec,
    ColumnStroke, RowStroke, StrokeValue, TableModel, TableModelInit, TableStrokesInit,
    TypstExportOptions,
};

// ============================================================================
// Custom Strategies
// ============================================================================

/// Cell text without characters that start Typst markup of their own.
fn safe_text() -> impl Strategy<Value = String> {
    "[a-zA-Z0-9 #\\[\\],.]{0,12}"
}

fn align() -> impl Strategy<Value = Align> {
    prop_oneof![Just(Align::Left), Just(Align::Center), Just(Align::Right)]
}

fn cell() -> impl Strategy<Value = Cell> {
    (
        safe_text(),
        prop::option::of(align()),
        prop::option::of(any::<bool>()),
        prop::option::of(any::<bool>()),
    )
        .prop_map(|(text, align, bold, italic)| Cell {
            text,
            align,
            bold,
            italic,
        })
}

fn stroke_value() -> impl Strategy<Value = StrokeValue> {
    prop_oneof![
        Just(StrokeValue::None),
        (-1.0f64..3.0).prop_map(StrokeValue::Points),
    ]
}

fn row_stroke() -> impl Strategy<Value = RowStroke> {
    (prop::option::of(stroke_value()), prop::option::of(stroke_value()))
        .prop_map(|(top, bottom)| RowStroke { top, bottom })
}

fn column_stroke() -> impl Strategy<Value = ColumnStroke> {
    (prop::option::of(stroke_value()), prop::option::of(stroke_value()))
        .prop_map(|(left, right)| ColumnStroke { left, right })
}

fn column_spec() -> impl Strategy<Value = ColumnSpec> {
    (prop::option::of(-10.0f64..200.0), prop::option::of(align())).prop_map(|(width, align)| {
        let spec = match width {
            Some(pt) => ColumnSpec::points(pt),
            None => ColumnSpec::default(),
        };
        ColumnSpec { align, ..spec }
    })
}

/// Loose, possibly ragged input with at least one cell.
fn loose_init() -> impl Strategy<Value = TableModelInit> {
    (
        prop::collection::vec(prop::collection::vec(cell(), 0..5), 1..6),
        prop::option::of(-3i64..10),
        prop::option::of("[a-z ]{0,8}"),
        prop::option::of(prop::collection::vec(prop::option::of(column_spec()), 0..7)),
        prop::option::of(prop::collection::vec(prop::option::of(row_stroke()), 0..8)),
        prop::option::of(prop::collection::vec(prop::option::of(column_stroke()), 0..7)),
    )
        .prop_filter("needs a cell", |(rows, ..)| rows.iter().any(|r| !r.is_empty()))
        .prop_map(|(rows, header_rows, caption, column_specs, row_strokes, column_strokes)| {
            let strokes = (row_strokes.is_some() || column_strokes.is_some()).then(|| {
                TableStrokesInit {
                    rows: row_strokes,
                    columns: column_strokes,
                }
            });
            TableModelInit {
                rows,
                header_rows,
                caption,
                column_specs,
                strokes,
            }
        })
}

fn table_model() -> impl Strategy<Value = TableModel> {
    loose_init().prop_map(|init| create_table_model(init).unwrap())
}

#[derive(Debug, Clone)]
enum Edit {
    InsertRow(usize),
    RemoveRow(usize),
    InsertColumn(usize),
    RemoveColumn(usize),
    Patch(usize, usize, bool),
    HeaderRows(usize),
    RowStroke(usize, RowStroke),
    ColumnSpec(usize, ColumnSpec),
}

fn edit() -> impl Strategy<Value = Edit> {
    prop_oneof![
        (0usize..8).prop_map(Edit::InsertRow),
        (0usize..8).prop_map(Edit::RemoveRow),
        (0usize..8).prop_map(Edit::InsertColumn),
        (0usize..8).prop_map(Edit::RemoveColumn),
        (0usize..8, 0usize..8, any::<bool>()).prop_map(|(r, c, b)| Edit::Patch(r, c, b)),
        (0usize..10).prop_map(Edit::HeaderRows),
        (0usize..8, row_stroke()).prop_map(|(i, s)| Edit::RowStroke(i, s)),
        (0usize..8, column_spec()).prop_map(|(i, s)| Edit::ColumnSpec(i, s)),
    ]
}

/// Apply an edit; failed edits leave the model as it was.
fn apply(model: &TableModel, edit: &Edit) -> TableModel {
    let result = match edit {
        Edit::InsertRow(i) => model.insert_row(*i, None),
        Edit::RemoveRow(i) => model.remove_row(*i),
        Edit::InsertColumn(i) => model.insert_column(*i, None),
        Edit::RemoveColumn(i) => model.remove_column(*i),
        Edit::Patch(r, c, bold) => model.patch_cell(CellPosition::new(*r, *c), &CellPatch::bold(*bold)),
        Edit::HeaderRows(n) => Ok(model.set_header_rows(*n)),
        Edit::RowStroke(i, s) => model.update_row_stroke(*i, Some(*s)),
        Edit::ColumnSpec(i, s) => model.update_column_spec(*i, Some(s.clone())),
    };
    result.unwrap_or_else(|_| model.clone())
}

fn assert_invariants(model: &TableModel) {
    let dims = model.dimensions();
    assert!(dims.row_count >= 1);
    assert!(dims.column_count >= 1);
    assert!(model.rows().iter().all(|row| row.len() == dims.column_count));
    assert!(model.header_rows() <= dims.row_count);
    assert_ne!(model.caption(), Some(""));
    if let Some(specs) = model.column_specs() {
        assert_eq!(specs.len(), dims.column_count);
    }
    if let Some(rows) = model.row_strokes() {
        assert_eq!(rows.len(), dims.row_count);
    }
    if let Some(columns) = model.column_strokes() {
        assert_eq!(columns.len(), dims.column_count);
    }
}

// ============================================================================
// Model Properties
// ============================================================================

proptest! {
    #[test]
    fn prop_normalized_models_hold_invariants(model in table_model()) {
        assert_invariants(&model);
    }

    #[test]
    fn prop_edit_sequences_hold_invariants(
        model in table_model(),
        edits in prop::collection::vec(edit(), 0..20),
    ) {
        let mut current = model;
        for edit in &edits {
            current = apply(&current, edit);
            assert_invariants(&current);
        }
    }

    #[test]
    fn prop_normalization_is_idempotent(model in table_model()) {
        let again = normalize_table_model(model.to_init()).unwrap();
        prop_assert_eq!(&again, &model);

        let json = table_to_json(&model).unwrap();
        let reparsed = table_from_json(&json).unwrap();
        prop_assert_eq!(&reparsed, &model);
        prop_assert_eq!(table_to_json(&reparsed).unwrap(), json);
    }

    #[test]
    fn prop_insert_then_remove_row_restores(model in table_model(), index in 0usize..8) {
        let index = index % (model.row_count() + 1);
        let grown = model.insert_row(index, None).unwrap();
        prop_assert_eq!(grown.row_count(), model.row_count() + 1);
        prop_assert_eq!(grown.remove_row(index).unwrap(), model);
    }

    #[test]
    fn prop_insert_then_remove_column_restores(model in table_model(), index in 0usize..8) {
        let index = index % (model.column_count() + 1);
        let grown = model.insert_column(index, None).unwrap();
        prop_assert_eq!(grown.column_count(), model.column_count() + 1);
        prop_assert_eq!(grown.remove_column(index).unwrap(), model);
    }

    #[test]
    fn prop_header_shift_law(model in table_model(), index in 0usize..8) {
        let header = model.header_rows();

        let insert_at = index % (model.row_count() + 1);
        let inserted = model.insert_row(insert_at, None).unwrap().header_rows();
        let expected = if header > 0 && insert_at <= header { header + 1 } else { header };
        prop_assert_eq!(inserted, expected);

        if model.row_count() > 1 {
            let remove_at = index % model.row_count();
            let removed = model.remove_row(remove_at).unwrap().header_rows();
            let expected = if remove_at < header { header - 1 } else { header };
            prop_assert_eq!(removed, expected);
        }
    }
}

// ============================================================================
// Serializer Properties
// ============================================================================

proptest! {
    #[test]
    fn prop_escape_is_idempotent(text in "[a-z#\\[\\]\\\\ ]{0,20}") {
        let once = escape_typst_inline(&text);
        prop_assert_eq!(escape_typst_inline(&once), once);
    }

    #[test]
    fn prop_escape_leaves_plain_text(text in "[a-zA-Z0-9 ,.]{0,30}") {
        prop_assert_eq!(escape_typst_inline(&text), text);
    }

    #[test]
    fn prop_rendered_tables_parse(model in table_model(), wrap_figure in any::<bool>()) {
        let options = TypstExportOptions {
            wrap_figure,
            ..Default::default()
        };
        let typst = render_table_model_to_typst(&model, &options);
        let root = typst_syntax::parse(&typst);
        prop_assert!(!root.erroneous(), "errors {:?} in:\n{}", root.errors(), typst);
    }

    #[test]
    fn prop_one_content_block_per_cell(model in table_model()) {
        let typst = render_table_model_to_typst(&model, &TypstExportOptions::table_only());
        let body_lines = typst
            .lines()
            .filter(|line| line.trim_start().starts_with('[') || line.trim_start().starts_with("table.cell("))
            .count();
        prop_assert_eq!(body_lines, model.row_count());
    }

    #[test]
    fn prop_align_only_when_a_column_deviates(model in table_model()) {
        let typst = render_table_model_to_typst(&model, &TypstExportOptions::table_only());
        let deviates = (0..model.column_count()).any(|i| {
            model
                .column_spec(i)
                .and_then(|spec| spec.align)
                .is_some_and(|align| align != Align::Left)
        });
        prop_assert_eq!(typst.contains("\n  align: ("), deviates);
    }
}
