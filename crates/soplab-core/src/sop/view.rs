//! View assembly: flatten a [`SopDocument`] into a render-ready record
//!
//! Sequence fields become HTML fragments here (steps → `<li>` items,
//! change history → `<tr>` rows, multi-line sections → `<br>`-joined text).
//! Cell text is escaped in this layer because the corresponding record
//! keys are on the engine's raw-markup allow-list and pass through
//! substitution untouched.

use crate::record::DataRecord;
use crate::sop::model::{ChangeHistoryEntry, SopDocument};
use crate::template::engine::escape::escape_html;

/// Build the flat record a render call consumes
///
/// Disabled sections and fields contribute empty values, which both blanks
/// their placeholders and makes the surrounding `{{#if}}` blocks falsy.
pub fn build_record(doc: &SopDocument) -> DataRecord {
    let mut record = DataRecord::new();

    record
        .set("institute", doc.institute.clone())
        .set("department", doc.department.clone())
        .set("title", doc.title.clone());

    // Header fields honor the per-field toggles
    record
        .set("sopNumber", gated(doc.fields.sop_number, &doc.sop_number))
        .set("revisionNo", doc.revision_no.clone())
        .set(
            "effectiveDate",
            gated(doc.fields.effective_date, &doc.effective_date),
        )
        .set(
            "revisionDate",
            gated(doc.fields.revision_date, &doc.revision_date),
        )
        .set("nextReviewDate", doc.next_review_date.clone())
        .set("copyType", gated(doc.fields.copy_type, &doc.copy_type));

    record
        .set("purpose", doc.purpose.clone())
        .set("scope", doc.scope.clone())
        .set("responsibility", doc.responsibility.clone())
        .set("procedure", step_items(&doc.procedure))
        .set("precautions", doc.precautions.clone());

    // Optional sections honor the section toggles
    record
        .set(
            "applicability",
            gated(doc.sections.applicability, &doc.applicability),
        )
        .set(
            "abbreviations",
            gated_br(doc.sections.abbreviations, &doc.abbreviations),
        )
        .set(
            "references",
            gated_br(doc.sections.references, &doc.references),
        )
        .set(
            "annexures",
            gated_br(doc.sections.annexures, &doc.annexures),
        );

    record.set(
        "changeHistoryRows",
        if doc.sections.change_history {
            history_rows(&doc.change_history)
        } else {
            String::new()
        },
    );

    record
        .set("preparedBy", doc.prepared.name.clone())
        .set("preparedDesig", doc.prepared.designation.clone())
        .set("preparedDate", doc.prepared.date.clone())
        .set("checkedBy", doc.checked.name.clone())
        .set("checkedDesig", doc.checked.designation.clone())
        .set("checkedDate", doc.checked.date.clone())
        .set("approvedBy", doc.approved.name.clone())
        .set("approvedDesig", doc.approved.designation.clone())
        .set("approvedDate", doc.approved.date.clone());

    record
}

/// The field value if enabled, else empty (blanking the placeholder)
fn gated(enabled: bool, value: &str) -> String {
    if enabled {
        value.to_string()
    } else {
        String::new()
    }
}

/// Escaped, `<br>`-joined multi-line section text, gated by its toggle
fn gated_br(enabled: bool, value: &str) -> String {
    if !enabled {
        return String::new();
    }
    value
        .split('\n')
        .map(escape_html)
        .collect::<Vec<_>>()
        .join("<br>")
}

/// Procedure steps as `<li>` items with escaped text
fn step_items(steps: &[String]) -> String {
    steps
        .iter()
        .map(|step| format!("<li>{}</li>", escape_html(step)))
        .collect()
}

/// Change-history entries as `<tr>` rows with escaped cells
fn history_rows(entries: &[ChangeHistoryEntry]) -> String {
    entries
        .iter()
        .map(|entry| {
            format!(
                "<tr><td>{}</td><td>{}</td><td>{}</td></tr>",
                escape_html(&entry.revision),
                escape_html(&entry.date),
                escape_html(&entry.details),
            )
        })
        .collect()
}
