//! Skill extraction: turns unstructured resume text into a scored skill set.
//!
//! The extractor is a constrained lexical matcher over the taxonomy's fixed
//! vocabulary. Candidates come from one leftmost-longest Aho-Corasick scan
//! over normalized text and must pass a word-boundary check; proficiency is
//! then inferred from evidence counts alone.

pub mod normalizer;

use std::collections::HashSet;
use std::sync::Arc;

use aho_corasick::{AhoCorasick, MatchKind};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::errors::EngineError;
use crate::models::SkillLevel;
use crate::taxonomy::{SkillTaxonomy, UNCATEGORIZED};

// ────────────────────────────────────────────────────────────────────────────
// Data models and policy
// ────────────────────────────────────────────────────────────────────────────

/// A skill detected in resume text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExtractedSkill {
    pub level: SkillLevel,
    /// Independent textual occurrences backing the detection. Always >= 1.
    pub evidence_count: u32,
}

/// Evidence-count thresholds for level inference.
///
/// The mapping is deterministic and monotonic, and it is policy: 1
/// occurrence reads as Beginner, 2-3 as Intermediate, 4-6 as Advanced, 7+
/// as Expert. Kept in one place so nothing else hardcodes the cut points.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExtractionPolicy {
    pub intermediate_at: u32,
    pub advanced_at: u32,
    pub expert_at: u32,
}

impl Default for ExtractionPolicy {
    fn default() -> Self {
        Self {
            intermediate_at: 2,
            advanced_at: 4,
            expert_at: 7,
        }
    }
}

impl ExtractionPolicy {
    pub fn level_for(&self, evidence_count: u32) -> SkillLevel {
        if evidence_count >= self.expert_at {
            SkillLevel::Expert
        } else if evidence_count >= self.advanced_at {
            SkillLevel::Advanced
        } else if evidence_count >= self.intermediate_at {
            SkillLevel::Intermediate
        } else {
            SkillLevel::Beginner
        }
    }
}

/// Fraction of non-whitespace control characters above which input is
/// treated as undecoded binary rather than prose.
const MAX_CONTROL_CHAR_RATIO: f64 = 0.15;

// ────────────────────────────────────────────────────────────────────────────
// Extractor
// ────────────────────────────────────────────────────────────────────────────

/// Extracts skills from raw text against a shared taxonomy.
///
/// Construction builds one case-folded automaton over every canonical name
/// and alias; extraction itself allocates only the result mapping, so one
/// extractor can serve arbitrarily many concurrent calls.
pub struct SkillExtractor {
    taxonomy: Arc<SkillTaxonomy>,
    automaton: AhoCorasick,
    /// pattern id -> canonical skill name, parallel to the automaton.
    pattern_skill: Vec<String>,
    policy: ExtractionPolicy,
}

impl SkillExtractor {
    pub fn new(taxonomy: Arc<SkillTaxonomy>) -> Result<Self, EngineError> {
        Self::with_policy(taxonomy, ExtractionPolicy::default())
    }

    pub fn with_policy(
        taxonomy: Arc<SkillTaxonomy>,
        policy: ExtractionPolicy,
    ) -> Result<Self, EngineError> {
        let mut patterns: Vec<String> = Vec::new();
        let mut pattern_skill: Vec<String> = Vec::new();
        let mut seen: HashSet<String> = HashSet::new();

        for entry in taxonomy.skills() {
            for token in std::iter::once(&entry.canonical_name).chain(entry.aliases.iter()) {
                let normalized = normalizer::normalize(token);
                if normalized.is_empty() || !seen.insert(normalized.clone()) {
                    continue;
                }
                patterns.push(normalized);
                pattern_skill.push(entry.canonical_name.clone());
            }
        }

        // Leftmost-longest: when one skill's name is a prefix of another's
        // ("java" / "javascript"), the longer registered pattern wins.
        let automaton = AhoCorasick::builder()
            .match_kind(MatchKind::LeftmostLongest)
            .build(&patterns)
            .map_err(|e| EngineError::TaxonomyLoad(format!("cannot build matcher: {e}")))?;

        debug!(patterns = patterns.len(), "skill matcher built");

        Ok(Self {
            taxonomy,
            automaton,
            pattern_skill,
            policy,
        })
    }

    /// Extracts a canonical-skill to [`ExtractedSkill`] mapping from raw
    /// resume text, in first-occurrence order.
    ///
    /// Empty text and text with no recognizable tokens both yield an empty
    /// mapping. Only evidently non-textual input is an error.
    pub fn extract(
        &self,
        text: &str,
    ) -> Result<IndexMap<String, ExtractedSkill>, EngineError> {
        validate_text(text)?;

        let normalized = normalizer::normalize(text);
        let bytes = normalized.as_bytes();

        let mut evidence: IndexMap<String, u32> = IndexMap::new();
        for mat in self.automaton.find_iter(normalized.as_str()) {
            if !on_word_boundary(bytes, mat.start(), mat.end()) {
                continue;
            }
            let canonical = &self.pattern_skill[mat.pattern().as_usize()];
            *evidence.entry(canonical.clone()).or_insert(0) += 1;
        }

        let skills: IndexMap<String, ExtractedSkill> = evidence
            .into_iter()
            .map(|(name, evidence_count)| {
                let level = self.policy.level_for(evidence_count);
                (
                    name,
                    ExtractedSkill {
                        level,
                        evidence_count,
                    },
                )
            })
            .collect();

        debug!(
            chars = text.len(),
            skills = skills.len(),
            "extraction complete"
        );
        Ok(skills)
    }

    /// Groups skill names by taxonomy category; see [`categorize`].
    pub fn categorize<'a, I>(&self, skill_names: I) -> IndexMap<String, Vec<String>>
    where
        I: IntoIterator<Item = &'a str>,
    {
        categorize(&self.taxonomy, skill_names)
    }

    pub fn policy(&self) -> &ExtractionPolicy {
        &self.policy
    }
}

/// Groups skill names by category in first-seen order, with the
/// [`UNCATEGORIZED`] bucket always last.
pub fn categorize<'a, I>(
    taxonomy: &SkillTaxonomy,
    skill_names: I,
) -> IndexMap<String, Vec<String>>
where
    I: IntoIterator<Item = &'a str>,
{
    let mut groups: IndexMap<String, Vec<String>> = IndexMap::new();
    let mut uncategorized: Vec<String> = Vec::new();

    for name in skill_names {
        let category = taxonomy.category_of(name);
        if category == UNCATEGORIZED {
            uncategorized.push(name.to_string());
        } else {
            groups
                .entry(category.to_string())
                .or_default()
                .push(name.to_string());
        }
    }

    if !uncategorized.is_empty() {
        groups.insert(UNCATEGORIZED.to_string(), uncategorized);
    }
    groups
}

/// Rejects input that is evidently not decoded prose: NUL bytes, or a high
/// ratio of non-whitespace control characters.
fn validate_text(text: &str) -> Result<(), EngineError> {
    if text.contains('\0') {
        return Err(EngineError::InvalidInput(
            "text contains NUL bytes; is this decoded text?".to_string(),
        ));
    }
    let total = text.chars().count();
    if total == 0 {
        return Ok(());
    }
    let control = text
        .chars()
        .filter(|c| c.is_control() && !c.is_whitespace())
        .count();
    if control as f64 / total as f64 > MAX_CONTROL_CHAR_RATIO {
        return Err(EngineError::InvalidInput(format!(
            "{control} of {total} characters are unprintable; is this decoded text?"
        )));
    }
    Ok(())
}

/// A hit only counts when the characters adjacent to the matched span are
/// not alphanumeric, so substrings of unrelated words never match.
fn on_word_boundary(bytes: &[u8], start: usize, end: usize) -> bool {
    let before_ok = start == 0 || !bytes[start - 1].is_ascii_alphanumeric();
    let after_ok = end == bytes.len() || !bytes[end].is_ascii_alphanumeric();
    before_ok && after_ok
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────
