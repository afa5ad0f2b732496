//! Default filesystem-backed port implementations.

use crate::ports::{AnalysisSource, WritePort};
use anyhow::Context;
use camino::{Utf8Path, Utf8PathBuf};
use fs_err as fs;
use qinvest_analysis::{sha256_hex, LoadedAnalysis};
use qinvest_types::analysis::QualityAnalysis;

/// Loads the analysis from disk via `qinvest_analysis::load_analysis`.
#[derive(Debug, Clone)]
pub struct FsAnalysisSource {
    pub path: Utf8PathBuf,
}

impl FsAnalysisSource {
    pub fn new(path: Utf8PathBuf) -> Self {
        Self { path }
    }
}

impl AnalysisSource for FsAnalysisSource {
    fn load_analysis(&self) -> anyhow::Result<LoadedAnalysis> {
        qinvest_analysis::load_analysis(&self.path)
            .with_context(|| format!("load analysis from {}", self.path))
    }
}

/// In-memory analysis source for embedding and testing.
///
/// The digest is taken over the compact JSON serialization, so equal analyses
/// get equal plan ids.
#[derive(Debug, Clone)]
pub struct InMemoryAnalysisSource {
    path: Utf8PathBuf,
    analysis: QualityAnalysis,
}

impl InMemoryAnalysisSource {
    pub fn new(path: impl Into<Utf8PathBuf>, analysis: QualityAnalysis) -> Self {
        Self {
            path: path.into(),
            analysis,
        }
    }
}

impl AnalysisSource for InMemoryAnalysisSource {
    fn load_analysis(&self) -> anyhow::Result<LoadedAnalysis> {
        let bytes = serde_json::to_vec(&self.analysis).context("serialize in-memory analysis")?;
        Ok(LoadedAnalysis {
            path: self.path.clone(),
            sha256: sha256_hex(&bytes),
            analysis: self.analysis.clone(),
        })
    }
}

/// Filesystem write operations.
#[derive(Debug, Clone, Default)]
pub struct FsWritePort;

impl WritePort for FsWritePort {
    fn write_file(&self, path: &Utf8Path, contents: &[u8]) -> anyhow::Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("create parent dir for {}", path))?;
        }
        fs::write(path, contents).with_context(|| format!("write {}", path))
    }

    fn create_dir_all(&self, path: &Utf8Path) -> anyhow::Result<()> {
        fs::create_dir_all(path).with_context(|| format!("create_dir_all {}", path))
    }
}
