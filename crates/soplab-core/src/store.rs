//! Template store: loads and caches HTML template files by name
//!
//! A template is loaded once per selection and held in memory until a
//! different one is requested; re-renders during editing hit the cache.

use std::collections::HashMap;
use std::path::{Component, Path, PathBuf};

use walkdir::WalkDir;

use crate::error::{Result, SoplabError};

/// Template file store rooted at the templates directory
#[derive(Debug)]
pub struct TemplateStore {
    dir: PathBuf,
    cache: HashMap<String, String>,
}

impl TemplateStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self {
            dir: dir.into(),
            cache: HashMap::new(),
        }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Load a template by name, reading from disk on first use
    ///
    /// Accepts the name with or without the `.html` extension.
    pub fn load(&mut self, name: &str) -> Result<&str> {
        if !self.cache.contains_key(name) {
            let text = self.read_template(name)?;
            self.cache.insert(name.to_string(), text);
        }
        Ok(self.cache.get(name).map(String::as_str).unwrap_or(""))
    }

    /// List template names (`*.html` files, extension stripped)
    pub fn list(&self) -> Result<Vec<String>> {
        let mut names = Vec::new();
        for entry in WalkDir::new(&self.dir).min_depth(1).max_depth(1) {
            let entry = entry.map_err(|e| SoplabError::Generic(e.to_string()))?;
            let path = entry.path();
            if path.extension().is_some_and(|ext| ext == "html") {
                if let Some(stem) = path.file_stem().and_then(|s| s.to_str()) {
                    names.push(stem.to_string());
                }
            }
        }
        names.sort();
        Ok(names)
    }

    fn read_template(&self, name: &str) -> Result<String> {
        let file_name = if Path::new(name).extension().is_some() {
            name.to_string()
        } else {
            format!("{}.html", name)
        };

        // Reject anything that could resolve outside the templates dir
        let relative = Path::new(&file_name);
        let escapes = relative.components().any(|c| {
            matches!(
                c,
                Component::ParentDir | Component::RootDir | Component::Prefix(_)
            )
        });
        if escapes || relative.components().count() != 1 {
            return Err(SoplabError::TemplatePathEscape(name.to_string()));
        }

        let path = self.dir.join(relative);
        if !path.is_file() {
            return Err(SoplabError::TemplateNotFound(name.to_string()));
        }
        std::fs::read_to_string(&path).map_err(SoplabError::from)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use soplab_testkit::fixtures::write_catalog;
    use soplab_testkit::temp_dir_in_workspace;

    #[test]
    fn test_load_by_name_and_cache() {
        let temp = temp_dir_in_workspace();
        write_catalog(temp.path()).unwrap();

        let mut store = TemplateStore::new(temp.path().join("templates"));
        let first = store.load("standard").unwrap().to_string();
        assert!(first.contains("{{title}}"));

        // Cached copy survives file deletion
        std::fs::remove_file(temp.path().join("templates/standard.html")).unwrap();
        assert_eq!(store.load("standard").unwrap(), first);
    }

    #[test]
    fn test_load_with_extension() {
        let temp = temp_dir_in_workspace();
        write_catalog(temp.path()).unwrap();

        let mut store = TemplateStore::new(temp.path().join("templates"));
        assert!(store.load("standard.html").is_ok());
    }

    #[test]
    fn test_missing_template() {
        let temp = temp_dir_in_workspace();
        write_catalog(temp.path()).unwrap();

        let mut store = TemplateStore::new(temp.path().join("templates"));
        let err = store.load("nonexistent").unwrap_err();
        assert!(matches!(err, SoplabError::TemplateNotFound(_)));
    }

    #[test]
    fn test_path_escape_rejected() {
        let temp = temp_dir_in_workspace();
        write_catalog(temp.path()).unwrap();

        let mut store = TemplateStore::new(temp.path().join("templates"));
        for name in ["../secrets", "/etc/passwd", "a/b"] {
            let err = store.load(name).unwrap_err();
            assert!(
                matches!(err, SoplabError::TemplatePathEscape(_)),
                "expected path escape for {:?}",
                name
            );
        }
    }

    #[test]
    fn test_list_templates() {
        let temp = temp_dir_in_workspace();
        write_catalog(temp.path()).unwrap();

        let store = TemplateStore::new(temp.path().join("templates"));
        let names = store.list().unwrap();
        assert!(names.contains(&"standard".to_string()));
        assert!(names.contains(&"compact".to_string()));
    }
}
