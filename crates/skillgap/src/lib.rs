//! Skill gap analysis engine.
//!
//! Extracts a normalized skill profile from unstructured resume text,
//! compares it against a role's required-skill profile, and produces a
//! quantified gap report. The engine is a constrained lexical matcher over
//! a fixed skill vocabulary, not a general-purpose NLU system. After the
//! one-time taxonomy load there is no I/O and no shared mutable state.
//!
//! Pipeline: raw text -> [`SkillExtractor`] -> extracted skills ->
//! [`GapAnalyzer`] (against a [`SkillTaxonomy`] role) -> [`GapReport`] ->
//! [`ReportAssembler`] -> serializable [`AnalysisResponse`].

pub mod analysis;
pub mod errors;
pub mod extraction;
pub mod models;
pub mod taxonomy;

pub use analysis::gap::{CategoryStats, GapAnalyzer, GapReport, ScoringPolicy};
pub use analysis::report::{AnalysisResponse, ReportAssembler};
pub use errors::EngineError;
pub use extraction::{ExtractedSkill, ExtractionPolicy, SkillExtractor};
pub use models::{ExperienceLevel, GrowthPotential, JobRole, SkillEntry, SkillLevel};
pub use taxonomy::{SkillTaxonomy, UNCATEGORIZED};
