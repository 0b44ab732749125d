//! Temporary translation source trees

use std::fs;
use std::path::Path;
use tempfile::TempDir;
use translations_import::config::SourceConfig;

/// A `lang/` directory living as long as the fixture
pub struct LangFixture {
    dir: TempDir,
}

#[allow(dead_code)]
impl LangFixture {
    pub fn new() -> Self {
        Self {
            dir: tempfile::tempdir().expect("Failed to create temp dir"),
        }
    }

    /// Write `<locale>/<group>.json`
    pub fn group(self, locale: &str, group: &str, json: serde_json::Value) -> Self {
        let path = self.dir.path().join(locale).join(format!("{}.json", group));
        fs::create_dir_all(path.parent().expect("group file has a parent"))
            .expect("Failed to create locale dir");
        fs::write(&path, serde_json::to_string_pretty(&json).expect("valid json"))
            .expect("Failed to write group file");
        self
    }

    /// Write raw file content at a path relative to the root
    pub fn raw(self, relative: &str, content: &str) -> Self {
        let path = self.dir.path().join(relative);
        fs::create_dir_all(path.parent().expect("file has a parent")).expect("Failed to create dir");
        fs::write(path, content).expect("Failed to write file");
        self
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    pub fn source_config(&self) -> SourceConfig {
        SourceConfig {
            lang_path: self.path().to_string_lossy().into_owned(),
            ..SourceConfig::default()
        }
    }
}
