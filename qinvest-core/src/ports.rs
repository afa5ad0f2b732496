//! Port traits abstracting all I/O away from the pipeline.

use camino::Utf8Path;
use qinvest_analysis::LoadedAnalysis;

/// Source of the quality analysis to plan against.
pub trait AnalysisSource {
    fn load_analysis(&self) -> anyhow::Result<LoadedAnalysis>;
}

/// File-system write operations.
pub trait WritePort {
    fn write_file(&self, path: &Utf8Path, contents: &[u8]) -> anyhow::Result<()>;
    fn create_dir_all(&self, path: &Utf8Path) -> anyhow::Result<()>;
}
