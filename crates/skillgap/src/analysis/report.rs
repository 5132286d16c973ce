//! Final response assembly for rendering collaborators.
//!
//! Pure composition over [`GapAnalyzer`] and the category rollup; no
//! additional scoring policy lives here.

use std::sync::Arc;

use indexmap::IndexMap;
use serde::Serialize;

use crate::analysis::gap::{GapAnalyzer, GapReport};
use crate::errors::EngineError;
use crate::extraction::{self, ExtractedSkill};
use crate::models::SkillLevel;
use crate::taxonomy::SkillTaxonomy;

/// Everything a rendering collaborator needs, in one serializable value:
/// the gap report plus the skill mappings it was computed from and the
/// category grouping of the extracted set.
#[derive(Debug, Clone, Serialize)]
pub struct AnalysisResponse {
    #[serde(flatten)]
    pub report: GapReport,
    pub resume_skills: IndexMap<String, ExtractedSkill>,
    pub required_skills: IndexMap<String, SkillLevel>,
    pub skill_categories: IndexMap<String, Vec<String>>,
}

/// Merges gap analysis output with category rollups into the final
/// response object consumed by UI and chart collaborators.
pub struct ReportAssembler {
    taxonomy: Arc<SkillTaxonomy>,
    analyzer: GapAnalyzer,
}

impl ReportAssembler {
    pub fn new(taxonomy: Arc<SkillTaxonomy>) -> Self {
        let analyzer = GapAnalyzer::new(taxonomy.clone());
        Self { taxonomy, analyzer }
    }

    /// Runs the gap analysis for `role_name` and packages the response.
    pub fn assemble(
        &self,
        extracted: &IndexMap<String, ExtractedSkill>,
        role_name: &str,
    ) -> Result<AnalysisResponse, EngineError> {
        let report = self.analyzer.analyze_role(extracted, role_name)?;
        let required_skills = self.taxonomy.required_skills(role_name)?.clone();
        let skill_categories =
            extraction::categorize(&self.taxonomy, extracted.keys().map(String::as_str));

        Ok(AnalysisResponse {
            report,
            resume_skills: extracted.clone(),
            required_skills,
            skill_categories,
        })
    }
}
