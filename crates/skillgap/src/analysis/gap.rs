//! Gap scoring: measures an extracted skill set against a role's
//! requirements and produces the structured [`GapReport`].

use std::collections::HashMap;
use std::sync::Arc;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::analysis::{proficiency, recommendations};
use crate::errors::EngineError;
use crate::extraction::ExtractedSkill;
use crate::models::SkillLevel;
use crate::taxonomy::{normalize_key, SkillTaxonomy};

// ────────────────────────────────────────────────────────────────────────────
// Policy and output data models
// ────────────────────────────────────────────────────────────────────────────

/// Weights of the two similarity terms. Both default to 0.5: breadth of
/// overlap and depth of proficiency count equally.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScoringPolicy {
    /// Weight of the Jaccard overlap term.
    pub overlap_weight: f64,
    /// Weight of the level-depth term, which penalizes matches where the
    /// demonstrated level falls short of the required one.
    pub depth_weight: f64,
}

impl Default for ScoringPolicy {
    fn default() -> Self {
        Self {
            overlap_weight: 0.5,
            depth_weight: 0.5,
        }
    }
}

/// Per-category rollup within the required skill set.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoryStats {
    pub matched: usize,
    pub required: usize,
    pub percentage: f64,
}

/// Structured result of one gap analysis. Immutable once returned; field
/// names are the stable wire contract for rendering collaborators.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GapReport {
    pub match_percentage: f64,
    pub similarity_score: f64,
    pub proficiency_level: String,
    pub proficiency_color: String,
    pub total_matched_skills: usize,
    pub total_required_skills: usize,
    /// Matched skill to the level the candidate demonstrated (not the
    /// required level), in requirement order.
    pub matched_skills: IndexMap<String, SkillLevel>,
    /// Required skills absent from the extraction, highest required level
    /// first, ties in requirement order.
    pub missing_skills: Vec<String>,
    pub recommendations: Vec<String>,
    pub category_analysis: IndexMap<String, CategoryStats>,
}

// ────────────────────────────────────────────────────────────────────────────
// Analyzer
// ────────────────────────────────────────────────────────────────────────────

/// Scores extracted skills against required skills. Stateless per call;
/// one analyzer serves any number of concurrent analyses.
pub struct GapAnalyzer {
    taxonomy: Arc<SkillTaxonomy>,
    policy: ScoringPolicy,
}

impl GapAnalyzer {
    pub fn new(taxonomy: Arc<SkillTaxonomy>) -> Self {
        Self::with_policy(taxonomy, ScoringPolicy::default())
    }

    pub fn with_policy(taxonomy: Arc<SkillTaxonomy>, policy: ScoringPolicy) -> Self {
        Self { taxonomy, policy }
    }

    /// Analyzes extracted skills against the named role's requirements.
    pub fn analyze_role(
        &self,
        extracted: &IndexMap<String, ExtractedSkill>,
        role_name: &str,
    ) -> Result<GapReport, EngineError> {
        let required = self.taxonomy.required_skills(role_name)?;
        self.compute(extracted, required, role_name)
    }

    /// Analyzes extracted skills against an explicit requirement mapping.
    pub fn analyze(
        &self,
        extracted: &IndexMap<String, ExtractedSkill>,
        required: &IndexMap<String, SkillLevel>,
    ) -> Result<GapReport, EngineError> {
        self.compute(extracted, required, "the requirement set")
    }

    fn compute(
        &self,
        extracted: &IndexMap<String, ExtractedSkill>,
        required: &IndexMap<String, SkillLevel>,
        subject: &str,
    ) -> Result<GapReport, EngineError> {
        if required.is_empty() {
            return Err(EngineError::EmptyRequirement(subject.to_string()));
        }

        // Case-insensitive view of the extracted set. Extraction emits
        // canonical names, but explicit requirement mappings may differ in
        // case or spacing.
        let extracted_by_key: HashMap<String, SkillLevel> = extracted
            .iter()
            .map(|(name, skill)| (normalize_key(name), skill.level))
            .collect();

        let mut matched_skills: IndexMap<String, SkillLevel> = IndexMap::new();
        let mut missing: Vec<(String, SkillLevel)> = Vec::new();
        let mut depth_sum = 0.0_f64;

        for (req_name, req_level) in required {
            match extracted_by_key.get(&normalize_key(req_name)) {
                Some(&demonstrated) => {
                    depth_sum += f64::from(demonstrated.rank())
                        .min(f64::from(req_level.rank()))
                        / f64::from(req_level.rank());
                    matched_skills.insert(req_name.clone(), demonstrated);
                }
                None => missing.push((req_name.clone(), *req_level)),
            }
        }

        // Severity first; the stable sort keeps requirement order for ties.
        missing.sort_by_key(|(_, level)| std::cmp::Reverse(level.rank()));

        let matched_count = matched_skills.len();
        let required_count = required.len();

        let match_percentage = 100.0 * matched_count as f64 / required_count as f64;

        // The matched set is a subset of the required set, so its union
        // with the required set is the required set itself.
        let jaccard = matched_count as f64 / required_count as f64;
        let depth = if matched_count == 0 {
            0.0
        } else {
            depth_sum / matched_count as f64
        };
        let similarity_score = (self.policy.overlap_weight * jaccard
            + self.policy.depth_weight * depth)
            .clamp(0.0, 1.0);

        let (proficiency_level, proficiency_color) = proficiency::band_for(similarity_score);

        let category_analysis = self.rollup_categories(required, &matched_skills);

        let missing_with_categories: Vec<(String, String)> = missing
            .iter()
            .map(|(name, _)| (name.clone(), self.taxonomy.category_of(name).to_string()))
            .collect();
        let recommendations = recommendations::recommend(&missing_with_categories);

        debug!(
            matched = matched_count,
            required = required_count,
            similarity = similarity_score,
            "gap analysis complete"
        );

        Ok(GapReport {
            match_percentage,
            similarity_score,
            proficiency_level: proficiency_level.to_string(),
            proficiency_color: proficiency_color.to_string(),
            total_matched_skills: matched_count,
            total_required_skills: required_count,
            matched_skills,
            missing_skills: missing.into_iter().map(|(name, _)| name).collect(),
            recommendations,
            category_analysis,
        })
    }

    /// Matched/required/percentage per category of the required set.
    /// Categories with zero required skills never appear by construction.
    fn rollup_categories(
        &self,
        required: &IndexMap<String, SkillLevel>,
        matched_skills: &IndexMap<String, SkillLevel>,
    ) -> IndexMap<String, CategoryStats> {
        let mut rollup: IndexMap<String, CategoryStats> = IndexMap::new();

        for req_name in required.keys() {
            let category = self.taxonomy.category_of(req_name).to_string();
            let stats = rollup.entry(category).or_insert(CategoryStats {
                matched: 0,
                required: 0,
                percentage: 0.0,
            });
            stats.required += 1;
            if matched_skills.contains_key(req_name) {
                stats.matched += 1;
            }
        }

        for stats in rollup.values_mut() {
            stats.percentage = 100.0 * stats.matched as f64 / stats.required as f64;
        }
        rollup
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────
