use serde::{Deserialize, Serialize};

use crate::catalog::RawSop;
use crate::config::DocumentConfig;

/// A fully-editable SOP document
///
/// Constructed from a catalog entry via [`SopDocument::from_raw`], then
/// mutated field-by-field as the user edits; every field maps to one or
/// more placeholders in the document templates.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SopDocument {
    pub institute: String,
    pub department: String,
    pub title: String,
    pub sop_number: String,

    pub revision_no: String,
    pub effective_date: String,
    pub revision_date: String,
    pub next_review_date: String,
    pub copy_type: String,

    pub purpose: String,
    pub scope: String,
    pub responsibility: String,
    /// One entry per procedure step; rendered as `<li>` items
    pub procedure: Vec<String>,
    pub precautions: String,

    pub applicability: String,
    pub abbreviations: String,
    pub references: String,
    pub annexures: String,

    /// Rendered as table rows in the change-history section
    pub change_history: Vec<ChangeHistoryEntry>,

    pub prepared: SignOff,
    pub checked: SignOff,
    pub approved: SignOff,

    #[serde(default)]
    pub sections: SectionToggles,
    #[serde(default)]
    pub fields: FieldToggles,
}

/// One row of the document change-history table
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ChangeHistoryEntry {
    pub revision: String,
    pub date: String,
    pub details: String,
}

impl ChangeHistoryEntry {
    /// Parse a `revision|date|details` line (the form-input row format);
    /// missing cells default to empty
    pub fn parse(line: &str) -> Self {
        let mut parts = line.splitn(3, '|');
        Self {
            revision: parts.next().unwrap_or("").trim().to_string(),
            date: parts.next().unwrap_or("").trim().to_string(),
            details: parts.next().unwrap_or("").trim().to_string(),
        }
    }
}

/// Prepared-by / checked-by / approved-by sign-off row
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SignOff {
    pub name: String,
    pub designation: String,
    pub date: String,
}

/// Optional document sections the user can switch on or off
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SectionToggles {
    pub doc_control: bool,
    pub applicability: bool,
    pub abbreviations: bool,
    pub references: bool,
    pub annexures: bool,
    pub change_history: bool,
}

impl Default for SectionToggles {
    fn default() -> Self {
        Self {
            doc_control: true,
            applicability: false,
            abbreviations: false,
            references: false,
            annexures: false,
            change_history: false,
        }
    }
}

/// Individual header fields the user can switch on or off
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FieldToggles {
    pub sop_number: bool,
    pub effective_date: bool,
    pub revision_date: bool,
    pub copy_type: bool,
}

impl Default for FieldToggles {
    fn default() -> Self {
        Self {
            sop_number: true,
            effective_date: true,
            revision_date: true,
            copy_type: true,
        }
    }
}

impl SopDocument {
    /// Build a fresh document from a catalog entry, applying the configured
    /// defaults (revision number, copy type, responsibility boilerplate)
    pub fn from_raw(department: &str, raw: RawSop, defaults: &DocumentConfig) -> Self {
        Self {
            institute: String::new(),
            department: department.to_string(),
            title: raw.meta.title,
            sop_number: String::new(),

            revision_no: defaults.default_revision.clone(),
            effective_date: String::new(),
            revision_date: String::new(),
            next_review_date: String::new(),
            copy_type: defaults.default_copy_type.clone(),

            purpose: raw.sections.purpose,
            scope: raw.sections.scope,
            responsibility: defaults.default_responsibility.clone(),
            procedure: raw.sections.procedure,
            precautions: raw.sections.precautions,

            applicability: String::new(),
            abbreviations: String::new(),
            references: String::new(),
            annexures: String::new(),

            change_history: Vec::new(),

            prepared: SignOff::default(),
            checked: SignOff::default(),
            approved: SignOff::default(),

            sections: SectionToggles::default(),
            fields: FieldToggles::default(),
        }
    }

    /// Apply a `field=value` override from the command line
    ///
    /// Unknown field names are reported back so the caller can surface
    /// them; sequence fields split their value on newlines.
    pub fn set_field(&mut self, field: &str, value: &str) -> Result<(), String> {
        match field {
            "institute" => self.institute = value.to_string(),
            "department" => self.department = value.to_string(),
            "title" => self.title = value.to_string(),
            "sopNumber" => self.sop_number = value.to_string(),
            "revisionNo" => self.revision_no = value.to_string(),
            "effectiveDate" => self.effective_date = value.to_string(),
            "revisionDate" => self.revision_date = value.to_string(),
            "nextReviewDate" => self.next_review_date = value.to_string(),
            "copyType" => self.copy_type = value.to_string(),
            "purpose" => self.purpose = value.to_string(),
            "scope" => self.scope = value.to_string(),
            "responsibility" => self.responsibility = value.to_string(),
            "precautions" => self.precautions = value.to_string(),
            "applicability" => {
                self.applicability = value.to_string();
                self.sections.applicability = true;
            }
            "abbreviations" => {
                self.abbreviations = value.to_string();
                self.sections.abbreviations = true;
            }
            "references" => {
                self.references = value.to_string();
                self.sections.references = true;
            }
            "annexures" => {
                self.annexures = value.to_string();
                self.sections.annexures = true;
            }
            "procedure" => {
                self.procedure = split_lines(value);
            }
            "changeHistory" => {
                self.change_history =
                    split_lines(value).iter().map(|l| ChangeHistoryEntry::parse(l)).collect();
                self.sections.change_history = true;
            }
            "preparedBy" => self.prepared.name = value.to_string(),
            "preparedDesig" => self.prepared.designation = value.to_string(),
            "preparedDate" => self.prepared.date = value.to_string(),
            "checkedBy" => self.checked.name = value.to_string(),
            "checkedDesig" => self.checked.designation = value.to_string(),
            "checkedDate" => self.checked.date = value.to_string(),
            "approvedBy" => self.approved.name = value.to_string(),
            "approvedDesig" => self.approved.designation = value.to_string(),
            "approvedDate" => self.approved.date = value.to_string(),
            other => return Err(format!("unknown field '{}'", other)),
        }
        Ok(())
    }
}

/// Split a multi-line value, dropping empty lines
fn split_lines(value: &str) -> Vec<String> {
    value
        .split('\n')
        .map(str::trim)
        .filter(|l| !l.is_empty())
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{RawSop, RawSopMeta, RawSopSections};

    fn raw() -> RawSop {
        RawSop {
            meta: RawSopMeta {
                title: "pH Meter".to_string(),
            },
            sections: RawSopSections {
                purpose: "Define calibration".to_string(),
                scope: "All lab users".to_string(),
                procedure: vec!["Switch on".to_string(), "Calibrate".to_string()],
                precautions: "Handle electrode with care".to_string(),
            },
        }
    }

    #[test]
    fn test_from_raw_applies_defaults() {
        let doc = SopDocument::from_raw("chemistry", raw(), &DocumentConfig::default());
        assert_eq!(doc.department, "chemistry");
        assert_eq!(doc.title, "pH Meter");
        assert_eq!(doc.revision_no, "00");
        assert_eq!(doc.copy_type, "CONTROLLED");
        assert!(!doc.responsibility.is_empty());
        assert!(doc.sections.doc_control);
        assert!(!doc.sections.change_history);
        assert!(doc.fields.sop_number);
    }

    #[test]
    fn test_change_history_parse() {
        let entry = ChangeHistoryEntry::parse("01 | 2026-02-01 | Revised limits");
        assert_eq!(entry.revision, "01");
        assert_eq!(entry.date, "2026-02-01");
        assert_eq!(entry.details, "Revised limits");

        let partial = ChangeHistoryEntry::parse("02");
        assert_eq!(partial.revision, "02");
        assert_eq!(partial.date, "");
        assert_eq!(partial.details, "");
    }

    #[test]
    fn test_set_field_overrides() {
        let mut doc = SopDocument::from_raw("chemistry", raw(), &DocumentConfig::default());
        doc.set_field("sopNumber", "SOP/CHEM/001").unwrap();
        doc.set_field("procedure", "One\n\nTwo\n").unwrap();
        assert_eq!(doc.sop_number, "SOP/CHEM/001");
        assert_eq!(doc.procedure, ["One", "Two"]);

        assert!(doc.set_field("notAField", "x").is_err());
    }

    #[test]
    fn test_set_optional_section_enables_it() {
        let mut doc = SopDocument::from_raw("chemistry", raw(), &DocumentConfig::default());
        assert!(!doc.sections.references);
        doc.set_field("references", "IS 2720").unwrap();
        assert!(doc.sections.references);
    }
}
