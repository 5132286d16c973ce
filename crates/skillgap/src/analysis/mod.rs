//! Gap analysis: scoring, banding, recommendations, and report assembly.

pub mod gap;
pub mod proficiency;
pub mod recommendations;
pub mod report;

pub use gap::{CategoryStats, GapAnalyzer, GapReport, ScoringPolicy};
pub use report::{AnalysisResponse, ReportAssembler};
