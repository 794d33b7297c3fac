//! Document assembly - load, merge, and write finished SOP documents

use std::io::Write;
use std::path::Path;

use crate::catalog::Catalog;
use crate::config::Config;
use crate::error::{Result, SoplabError};
use crate::sop::{build_record, SopDocument};
use crate::store::TemplateStore;
use crate::template::TemplateEngine;

/// Render one SOP document to final HTML
///
/// # Steps
/// 1. Load raw SOP data from the catalog
/// 2. Build the typed document with configured defaults
/// 3. Apply `field=value` overrides
/// 4. Flatten to a record and merge into the template
pub fn generate_document(
    catalog: &Catalog,
    store: &mut TemplateStore,
    config: &Config,
    department: &str,
    sop: &str,
    template_name: &str,
    overrides: &[(String, String)],
) -> Result<String> {
    let raw = catalog.load_sop(department, sop)?;
    let mut doc = SopDocument::from_raw(department, raw, &config.document);

    for (field, value) in overrides {
        doc.set_field(field, value)
            .map_err(SoplabError::Generic)?;
    }

    let record = build_record(&doc);
    let engine = TemplateEngine::with_raw_fields(config.render.raw_fields.iter().cloned());
    let template = store.load(template_name)?;

    Ok(engine.render(template, &record))
}

/// Write rendered HTML to disk via a temp file and atomic persist
///
/// Readers of `path` never observe a half-written document.
pub fn write_output(path: &Path, html: &str) -> Result<()> {
    let dir = path.parent().filter(|p| !p.as_os_str().is_empty());
    let mut temp = match dir {
        Some(dir) => tempfile::NamedTempFile::new_in(dir),
        None => tempfile::NamedTempFile::new(),
    }
    .map_err(|e| SoplabError::OutputWriteError {
        path: path.to_path_buf(),
        reason: e.to_string(),
    })?;

    temp.write_all(html.as_bytes())
        .map_err(|e| SoplabError::OutputWriteError {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })?;

    temp.persist(path).map_err(|e| SoplabError::OutputWriteError {
        path: path.to_path_buf(),
        reason: e.to_string(),
    })?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use soplab_testkit::fixtures::write_catalog;
    use soplab_testkit::temp_dir_in_workspace;

    #[test]
    fn test_generate_document_end_to_end() {
        let temp = temp_dir_in_workspace();
        write_catalog(temp.path()).unwrap();

        let catalog = Catalog::new(temp.path().join("data"));
        let mut store = TemplateStore::new(temp.path().join("templates"));
        let config = Config::default();

        let html = generate_document(
            &catalog,
            &mut store,
            &config,
            "chemistry",
            "ph-meter",
            "standard",
            &[],
        )
        .unwrap();

        assert!(html.contains("pH Meter Operation &amp; Calibration"));
        assert!(html.contains("<li>"));
        assert!(!html.contains("{{"), "unresolved tokens in: {}", html);
    }

    #[test]
    fn test_generate_with_overrides() {
        let temp = temp_dir_in_workspace();
        write_catalog(temp.path()).unwrap();

        let catalog = Catalog::new(temp.path().join("data"));
        let mut store = TemplateStore::new(temp.path().join("templates"));
        let config = Config::default();

        let overrides = vec![
            ("sopNumber".to_string(), "SOP/CHEM/001".to_string()),
            ("effectiveDate".to_string(), "2026-09-01".to_string()),
        ];
        let html = generate_document(
            &catalog,
            &mut store,
            &config,
            "chemistry",
            "ph-meter",
            "standard",
            &overrides,
        )
        .unwrap();

        assert!(html.contains("SOP/CHEM/001"));
        assert!(html.contains("2026-09-01"));
    }

    #[test]
    fn test_generate_unknown_override_field() {
        let temp = temp_dir_in_workspace();
        write_catalog(temp.path()).unwrap();

        let catalog = Catalog::new(temp.path().join("data"));
        let mut store = TemplateStore::new(temp.path().join("templates"));
        let config = Config::default();

        let overrides = vec![("bogus".to_string(), "x".to_string())];
        let err = generate_document(
            &catalog,
            &mut store,
            &config,
            "chemistry",
            "ph-meter",
            "standard",
            &overrides,
        )
        .unwrap_err();
        assert!(err.to_string().contains("unknown field"));
    }

    #[test]
    fn test_write_output_atomic() {
        let temp = temp_dir_in_workspace();
        let out = temp.path().join("sop.html");
        write_output(&out, "<html>doc</html>").unwrap();
        assert_eq!(std::fs::read_to_string(&out).unwrap(), "<html>doc</html>");

        // Overwrite keeps the newest content
        write_output(&out, "<html>v2</html>").unwrap();
        assert_eq!(std::fs::read_to_string(&out).unwrap(), "<html>v2</html>");
    }
}
