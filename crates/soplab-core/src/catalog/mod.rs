//! Static JSON catalog of departments and instrument SOPs
//!
//! Directory layout, relative to the configured data directory:
//!
//! ```text
//! departments.json          # {"departments": [{"key", "name"}, ...]}
//! <dept>/index.json         # {"instruments": [{"key", "name"}, ...]}
//! <dept>/<sop>.json         # {"meta": {...}, "sections": {...}}
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{Result, SoplabError};

/// A department entry from `departments.json`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Department {
    pub key: String,
    pub name: String,
}

/// An instrument/SOP entry from a department's `index.json`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Instrument {
    pub key: String,
    pub name: String,
}

/// Raw SOP data as stored in the catalog
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RawSop {
    #[serde(default)]
    pub meta: RawSopMeta,
    #[serde(default)]
    pub sections: RawSopSections,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RawSopMeta {
    #[serde(default)]
    pub title: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RawSopSections {
    #[serde(default)]
    pub purpose: String,
    #[serde(default)]
    pub scope: String,
    #[serde(default)]
    pub procedure: Vec<String>,
    #[serde(default)]
    pub precautions: String,
}

#[derive(Debug, Deserialize)]
struct DepartmentsFile {
    departments: Vec<Department>,
}

#[derive(Debug, Deserialize)]
struct IndexFile {
    instruments: Vec<Instrument>,
}

/// Catalog reader rooted at the data directory
#[derive(Debug)]
pub struct Catalog {
    root: PathBuf,
}

impl Catalog {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// List departments from `departments.json`
    pub fn departments(&self) -> Result<Vec<Department>> {
        let path = self.root.join("departments.json");
        let file: DepartmentsFile = self.read_json(&path)?;
        Ok(file.departments)
    }

    /// List instruments for a department from its `index.json`
    pub fn instruments(&self, department: &str) -> Result<Vec<Instrument>> {
        let path = self.root.join(department).join("index.json");
        if !path.exists() {
            return Err(SoplabError::DepartmentNotFound(department.to_string()));
        }
        let file: IndexFile = self.read_json(&path)?;
        Ok(file.instruments)
    }

    /// Load the raw SOP data for one instrument
    pub fn load_sop(&self, department: &str, sop: &str) -> Result<RawSop> {
        let dept_dir = self.root.join(department);
        if !dept_dir.is_dir() {
            return Err(SoplabError::DepartmentNotFound(department.to_string()));
        }
        let path = dept_dir.join(format!("{}.json", sop));
        if !path.exists() {
            return Err(SoplabError::SopNotFound {
                department: department.to_string(),
                sop: sop.to_string(),
            });
        }
        self.read_json(&path)
    }

    fn read_json<T: serde::de::DeserializeOwned>(&self, path: &Path) -> Result<T> {
        let text = fs::read_to_string(path).map_err(|e| SoplabError::CatalogReadError {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })?;
        serde_json::from_str(&text).map_err(|e| SoplabError::CatalogParseError {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use soplab_testkit::fixtures::write_catalog;
    use soplab_testkit::temp_dir_in_workspace;

    #[test]
    fn test_departments_listing() {
        let temp = temp_dir_in_workspace();
        write_catalog(temp.path()).unwrap();

        let catalog = Catalog::new(temp.path().join("data"));
        let departments = catalog.departments().unwrap();
        assert!(departments.iter().any(|d| d.key == "chemistry"));
    }

    #[test]
    fn test_instruments_listing() {
        let temp = temp_dir_in_workspace();
        write_catalog(temp.path()).unwrap();

        let catalog = Catalog::new(temp.path().join("data"));
        let instruments = catalog.instruments("chemistry").unwrap();
        assert!(instruments.iter().any(|i| i.key == "ph-meter"));
    }

    #[test]
    fn test_unknown_department() {
        let temp = temp_dir_in_workspace();
        write_catalog(temp.path()).unwrap();

        let catalog = Catalog::new(temp.path().join("data"));
        let err = catalog.instruments("astrology").unwrap_err();
        assert!(matches!(err, SoplabError::DepartmentNotFound(_)));
    }

    #[test]
    fn test_load_sop() {
        let temp = temp_dir_in_workspace();
        write_catalog(temp.path()).unwrap();

        let catalog = Catalog::new(temp.path().join("data"));
        let raw = catalog.load_sop("chemistry", "ph-meter").unwrap();
        assert_eq!(raw.meta.title, "pH Meter Operation & Calibration");
        assert!(!raw.sections.procedure.is_empty());
    }

    #[test]
    fn test_unknown_sop() {
        let temp = temp_dir_in_workspace();
        write_catalog(temp.path()).unwrap();

        let catalog = Catalog::new(temp.path().join("data"));
        let err = catalog.load_sop("chemistry", "warp-drive").unwrap_err();
        assert!(matches!(err, SoplabError::SopNotFound { .. }));
    }

    #[test]
    fn test_sop_with_missing_sections_defaults() {
        let temp = temp_dir_in_workspace();
        let dept_dir = temp.path().join("data/chemistry");
        std::fs::create_dir_all(&dept_dir).unwrap();
        std::fs::write(
            dept_dir.join("bare.json"),
            r#"{"meta": {"title": "Bare"}}"#,
        )
        .unwrap();

        let catalog = Catalog::new(temp.path().join("data"));
        let raw = catalog.load_sop("chemistry", "bare").unwrap();
        assert_eq!(raw.meta.title, "Bare");
        assert_eq!(raw.sections.purpose, "");
        assert!(raw.sections.procedure.is_empty());
    }
}
