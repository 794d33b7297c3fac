//! Shared test helpers for template engine tests

use crate::record::DataRecord;

/// Record with the scalar fields most templates reference
pub(super) fn simple_record() -> DataRecord {
    let mut record = DataRecord::new();
    record
        .set("title", "pH Meter Calibration")
        .set("revisionNo", "00")
        .set("count", 42i64)
        .set("enabled", true);
    record
}

/// Record mixing escaped text, pre-rendered fragments, and empty fields
pub(super) fn document_record() -> DataRecord {
    let mut record = DataRecord::new();
    record
        .set("title", "Cleaning & Maintenance")
        .set("procedure", "<li>Rinse electrode</li><li>Blot dry</li>")
        .set(
            "changeHistoryRows",
            "<tr><td>00</td><td>2026-01-10</td><td>Initial issue</td></tr>",
        )
        .set("notes", "")
        .set("precautions", "Do not touch the <glass> bulb");
    record
}
