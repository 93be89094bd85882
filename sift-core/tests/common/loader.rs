//! Fixture loading from YAML files

use serde::Deserialize;

use std::path::Path;

/// A single splitting case from a fixture file
#[derive(Debug, Clone, Deserialize)]
pub struct SplitCase {
    pub id: String,
    pub desc: String,
    pub line: String,
    pub delimiters: Vec<String>,
    /// Group cap; absent means unlimited.
    #[serde(default)]
    pub max_groups: Option<usize>,
    pub groups: Vec<String>,
}

/// Load all cases from a YAML fixture file
pub fn load_fixtures(path: &Path) -> Vec<SplitCase> {
    let content = std::fs::read_to_string(path)
        .unwrap_or_else(|e| panic!("Failed to read fixture file {:?}: {}", path, e));
    serde_yaml::from_str(&content)
        .unwrap_or_else(|e| panic!("Failed to parse fixture file {:?}: {}", path, e))
}

/// Load fixtures from the standard fixtures directory
pub fn load_fixtures_by_name(name: &str) -> Vec<SplitCase> {
    let path = Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join(format!("{}.yaml", name));
    load_fixtures(&path)
}
