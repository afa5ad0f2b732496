//! Embeddable core library for qinvest.
//!
//! Provides a clap-free, I/O-abstracted entry point suitable for linking
//! into other host processes.
//!
//! # Port traits
//!
//! All I/O is abstracted behind port traits in [`ports`]:
//! - [`AnalysisSource`](ports::AnalysisSource): load the quality analysis
//! - [`WritePort`](ports::WritePort): write files and create directories
//!
//! The [`adapters`] module provides default filesystem-backed implementations.
//!
//! # Entry points
//!
//! - [`run_plan`](pipeline::run_plan): compute a plan artifact
//! - [`write_plan_artifacts`](pipeline::write_plan_artifacts): persist `plan.json` and `plan.md`

pub mod adapters;
pub mod pipeline;
pub mod ports;
pub mod settings;

// Re-exports so embedders don't need the domain and analysis crates directly.
pub use qinvest_analysis::{AnalysisLoadError, LoadedAnalysis};
pub use qinvest_domain::{InvestmentPlanner, ProfitCalculator, RecordedProfit};
