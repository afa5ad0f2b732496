//! Analysis ingestion utilities.
//!
//! qinvest consumes analyses produced by an upstream quality run. Strict schema validation is the
//! job of `qinvest validate`; the loader is tolerant so a plan can still be computed when an
//! analysis carries extra fields or omits optional ones.

mod load;

pub use load::{load_analysis, parse_analysis, sha256_hex, AnalysisLoadError, LoadedAnalysis};
