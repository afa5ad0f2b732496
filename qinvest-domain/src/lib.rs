//! Domain logic: turn one analysis + one budget into a ranked quality investment plan.
//!
//! This crate owns *which* violations are worth fixing first. It does not own how a violation is
//! valued (that's the [`ProfitCalculator`] collaborator) and performs no I/O.

mod aggregator;
mod allocator;
mod error;
mod filter;
mod planner;
mod ports;
mod ranker;

pub use aggregator::aggregate;
pub use allocator::allocate;
pub use error::{PlanError, PlanResult};
pub use filter::{include, ArtefactFilter};
pub use planner::InvestmentPlanner;
pub use ports::{ProfitCalculator, RecordedProfit};
pub use ranker::{compare_candidates, rank, RankedCandidate};
