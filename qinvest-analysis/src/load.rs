use camino::{Utf8Path, Utf8PathBuf};
use fs_err as fs;
use qinvest_types::analysis::QualityAnalysis;
use sha2::{Digest, Sha256};
use thiserror::Error;
use tracing::debug;

#[derive(Debug, Clone)]
pub struct LoadedAnalysis {
    pub path: Utf8PathBuf,
    /// Hex sha256 of the raw file bytes.
    pub sha256: String,
    pub analysis: QualityAnalysis,
}

#[derive(Debug, Error, Clone)]
pub enum AnalysisLoadError {
    #[error("io error reading {path}: {message}")]
    Io { path: Utf8PathBuf, message: String },

    #[error("json parse error in {path}: {message}")]
    Json { path: Utf8PathBuf, message: String },
}

pub fn load_analysis(path: &Utf8Path) -> Result<LoadedAnalysis, AnalysisLoadError> {
    debug!(path = %path, "loading analysis");

    let bytes = fs::read(path).map_err(|e| AnalysisLoadError::Io {
        path: path.to_path_buf(),
        message: e.to_string(),
    })?;

    let analysis = parse_analysis(&bytes).map_err(|e| AnalysisLoadError::Json {
        path: path.to_path_buf(),
        message: e.to_string(),
    })?;

    debug!(
        path = %path,
        violations = analysis.violations.len(),
        status = ?analysis.status,
        "loaded analysis"
    );

    Ok(LoadedAnalysis {
        path: path.to_path_buf(),
        sha256: sha256_hex(&bytes),
        analysis,
    })
}

pub fn parse_analysis(bytes: &[u8]) -> Result<QualityAnalysis, serde_json::Error> {
    serde_json::from_slice(bytes)
}

pub fn sha256_hex(bytes: &[u8]) -> String {
    let mut hasher = Sha256::new();
    hasher.update(bytes);
    hex::encode(hasher.finalize())
}
