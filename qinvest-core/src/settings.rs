//! Clap-free settings for the plan pipeline.

use camino::Utf8PathBuf;

/// Settings for the plan pipeline.
#[derive(Debug, Clone)]
pub struct PlanSettings {
    pub root: Utf8PathBuf,
    pub analysis_path: Utf8PathBuf,
    pub out_dir: Utf8PathBuf,

    // Request
    pub base_package: String,
    pub budget_minutes: i64,

    // Rendering
    pub source_extension: String,
}

impl PlanSettings {
    /// Default layout under `root`: `artifacts/analysis.json` in, `artifacts/qinvest` out.
    pub fn for_root(root: impl Into<Utf8PathBuf>) -> Self {
        let root = root.into();
        Self {
            analysis_path: root.join("artifacts").join("analysis.json"),
            out_dir: root.join("artifacts").join("qinvest"),
            root,
            ..Self::default()
        }
    }
}

impl Default for PlanSettings {
    fn default() -> Self {
        Self {
            root: Utf8PathBuf::from("."),
            analysis_path: Utf8PathBuf::from("artifacts/analysis.json"),
            out_dir: Utf8PathBuf::from("artifacts/qinvest"),
            base_package: String::new(),
            budget_minutes: 0,
            source_extension: "java".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn for_root_places_artifacts_under_root() {
        let s = PlanSettings::for_root("/work/repo");
        assert_eq!(s.analysis_path, "/work/repo/artifacts/analysis.json");
        assert_eq!(s.out_dir, "/work/repo/artifacts/qinvest");
        assert_eq!(s.source_extension, "java");
        assert!(s.base_package.is_empty());
    }
}
