#![allow(dead_code)]

use std::fs;
use std::path::{Path, PathBuf};

use tempfile::TempDir;

/// Creates an `assert_cmd` Command for the svg-to-xaml binary.
#[macro_export]
macro_rules! svg_to_xaml {
    () => {
        assert_cmd::Command::new(assert_cmd::cargo::cargo_bin!("svg-to-xaml"))
    };
}

pub const SINGLE_PATH_SVG: &str =
    r#"<svg xmlns="http://www.w3.org/2000/svg"><path d="M0 0L10 10"/></svg>"#;

pub const TWO_COLOR_SVG: &str = r##"<svg xmlns="http://www.w3.org/2000/svg">
  <g>
    <path d="M1 1" style="fill:#ff0000"/>
    <path d="M2 2" fill="#00FF00"/>
  </g>
</svg>"##;

pub const SHAPE_SVG: &str =
    r#"<svg xmlns="http://www.w3.org/2000/svg"><rect width="4" height="4"/><path d="M3 3"/></svg>"#;

/// Creates a temporary directory with test fixtures for integration tests.
pub struct TestFixture {
    pub dir: TempDir,
}

impl TestFixture {
    /// Creates a new test fixture with an empty temp directory.
    pub fn new() -> Self {
        Self {
            dir: TempDir::new().expect("Failed to create temp directory"),
        }
    }

    /// Creates a file with the given content in the temp directory.
    pub fn create_file(&self, relative_path: &str, content: &str) -> PathBuf {
        let path = self.dir.path().join(relative_path);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).expect("Failed to create parent directories");
        }
        fs::write(&path, content).expect("Failed to write file");
        path
    }

    /// Returns the path to the temp directory.
    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    /// Creates a local svg-to-xaml config file.
    pub fn create_config(&self, content: &str) -> PathBuf {
        self.create_file(".svg-to-xaml.toml", content)
    }
}

impl Default for TestFixture {
    fn default() -> Self {
        Self::new()
    }
}
