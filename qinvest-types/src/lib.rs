//! Shared DTOs (schemas-as-code) for the qinvest workspace.
//!
//! # Design constraints
//! - Analysis types are read from disk and must stay tolerant of extra fields.
//! - Plan types are written to disk; prefer adding optional fields over changing semantics.

pub mod analysis;
pub mod artefact;
pub mod artifact;
pub mod plan;
pub mod violation;

/// Schema identifiers.
pub mod schema {
    pub const QINVEST_ANALYSIS_V1: &str = "qinvest.analysis.v1";
    pub const QINVEST_PLAN_V1: &str = "qinvest.plan.v1";
}
