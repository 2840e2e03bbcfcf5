use crate::data::model::{AxisField, Record};

// ---------------------------------------------------------------------------
// Axis labels and hover tooltip text
// ---------------------------------------------------------------------------

/// The label text shown in the clickable axis stack.
pub fn display_label(field: AxisField) -> &'static str {
    match field {
        AxisField::Poverty => "In Poverty (%)",
        AxisField::Age => "Age (Median)",
        AxisField::Income => "Household Income (Median)",
    }
}

/// The label used inside the hover tooltip, keyed by the active axis.
///
/// The source chart compared the chosen axis against a misspelled field
/// name ("proverty"), so its poverty branch was unreachable and poverty
/// fell through to the income label. `legacy` reproduces that behavior;
/// the default is the corrected label (see DESIGN.md migration note).
pub fn axis_label(field: AxisField, legacy: bool) -> &'static str {
    if legacy && field == AxisField::Poverty {
        return display_label(AxisField::Income);
    }
    display_label(field)
}

/// The three-line hover text: state name, outcome value, and the active
/// field's value. Re-derived on every hover, so it always reflects the
/// current axis selection.
pub fn tooltip_text(record: &Record, field: AxisField, legacy: bool) -> String {
    format!(
        "{}\nHealthcare: {}%\n{}: {}",
        record.state,
        record.healthcare,
        axis_label(field, legacy),
        field.value(record),
    )
}

// ---------------------------------------------------------------------------
