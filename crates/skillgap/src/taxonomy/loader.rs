//! Taxonomy source parsing and validation.
//!
//! Loading is all-or-nothing: a document that parses as JSON but violates a
//! semantic invariant (duplicate canonical names, alias collisions,
//! out-of-range weights, empty skills database) is rejected with
//! `EngineError::TaxonomyLoad` before any taxonomy is handed out.

use indexmap::IndexMap;
use serde::Deserialize;
use std::collections::HashMap;
use tracing::warn;

use crate::errors::EngineError;
use crate::models::{ExperienceLevel, GrowthPotential, JobRole, SkillEntry, SkillLevel};
use crate::taxonomy::normalize_key;

/// Top-level shape of the taxonomy source document.
#[derive(Debug, Deserialize)]
pub(crate) struct TaxonomyDocument {
    pub job_roles: IndexMap<String, RoleSpec>,
    pub technical_skills_database: IndexMap<String, SkillSpec>,
}

/// A job role as it appears in the source, keyed externally by name.
#[derive(Debug, Deserialize)]
pub(crate) struct RoleSpec {
    pub description: String,
    pub experience_level: ExperienceLevel,
    pub salary_range: String,
    pub growth_potential: GrowthPotential,
    #[serde(default)]
    pub required_skills: IndexMap<String, SkillLevel>,
}

/// A skills-database entry as it appears in the source, keyed externally by
/// canonical name.
#[derive(Debug, Deserialize)]
pub(crate) struct SkillSpec {
    pub category: String,
    #[serde(default)]
    pub aliases: Vec<String>,
    #[serde(default = "default_weight")]
    pub weight: f32,
}

fn default_weight() -> f32 {
    1.0
}

/// Validated output of a load: ordered roles, ordered skill entries, and the
/// normalized token index (canonical names and aliases alike) used for
/// alias resolution.
#[derive(Debug)]
pub(crate) struct ValidatedTaxonomy {
    pub roles: IndexMap<String, JobRole>,
    pub skills: IndexMap<String, SkillEntry>,
    pub alias_index: HashMap<String, String>,
}

pub(crate) fn validate(doc: TaxonomyDocument) -> Result<ValidatedTaxonomy, EngineError> {
    if doc.technical_skills_database.is_empty() {
        return Err(EngineError::TaxonomyLoad(
            "technical_skills_database is empty".to_string(),
        ));
    }

    let mut skills: IndexMap<String, SkillEntry> = IndexMap::new();
    // normalized token -> canonical name, across canonicals and aliases
    let mut alias_index: HashMap<String, String> = HashMap::new();

    for (canonical_name, spec) in doc.technical_skills_database {
        let canonical_key = normalize_key(&canonical_name);
        if canonical_key.is_empty() {
            return Err(EngineError::TaxonomyLoad(
                "skill with blank canonical name".to_string(),
            ));
        }
        if let Some(existing) = alias_index.get(&canonical_key) {
            return Err(EngineError::TaxonomyLoad(format!(
                "canonical name '{canonical_name}' collides with '{existing}'"
            )));
        }
        if !(spec.weight > 0.0 && spec.weight <= 1.0) {
            return Err(EngineError::TaxonomyLoad(format!(
                "skill '{canonical_name}' has weight {} outside (0, 1]",
                spec.weight
            )));
        }
        alias_index.insert(canonical_key, canonical_name.clone());

        for alias in &spec.aliases {
            let alias_key = normalize_key(alias);
            if alias_key.is_empty() {
                return Err(EngineError::TaxonomyLoad(format!(
                    "skill '{canonical_name}' has a blank alias"
                )));
            }
            match alias_index.get(&alias_key) {
                Some(owner) if owner == &canonical_name => {
                    // Alias repeats the canonical spelling; harmless.
                    warn!(skill = %canonical_name, alias = %alias, "redundant alias");
                }
                Some(owner) => {
                    return Err(EngineError::TaxonomyLoad(format!(
                        "alias '{alias}' of '{canonical_name}' collides with '{owner}'"
                    )));
                }
                None => {
                    alias_index.insert(alias_key, canonical_name.clone());
                }
            }
        }

        skills.insert(
            canonical_name.clone(),
            SkillEntry {
                canonical_name,
                category: spec.category,
                aliases: spec.aliases,
                weight: spec.weight,
            },
        );
    }

    let roles = doc
        .job_roles
        .into_iter()
        .map(|(name, spec)| {
            let role = JobRole {
                name: name.clone(),
                description: spec.description,
                experience_level: spec.experience_level,
                salary_range: spec.salary_range,
                growth_potential: spec.growth_potential,
                required_skills: spec.required_skills,
            };
            (name, role)
        })
        .collect();

    Ok(ValidatedTaxonomy {
        roles,
        skills,
        alias_index,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(json: &str) -> Result<ValidatedTaxonomy, EngineError> {
        let doc: TaxonomyDocument = serde_json::from_str(json)?;
        validate(doc)
    }

    #[test]
    fn test_minimal_document_validates() {
        let out = parse(
            r#"{
                "job_roles": {},
                "technical_skills_database": {
                    "Python": {"category": "Programming Languages", "aliases": ["python3"]}
                }
            }"#,
        )
        .unwrap();
        assert_eq!(out.skills.len(), 1);
        assert_eq!(out.alias_index.get("python3"), Some(&"Python".to_string()));
        // Omitted weight defaults to 1.0
        assert_eq!(out.skills["Python"].weight, 1.0);
    }

    #[test]
    fn test_empty_skills_database_rejected() {
        let err = parse(r#"{"job_roles": {}, "technical_skills_database": {}}"#).unwrap_err();
        assert!(matches!(err, EngineError::TaxonomyLoad(_)), "got {err:?}");
    }

    #[test]
    fn test_case_folded_canonical_collision_rejected() {
        let err = parse(
            r#"{
                "job_roles": {},
                "technical_skills_database": {
                    "Java": {"category": "Programming Languages"},
                    "java": {"category": "Programming Languages"}
                }
            }"#,
        )
        .unwrap_err();
        assert!(
            err.to_string().contains("collides"),
            "Expected collision error, got: {err}"
        );
    }

    #[test]
    fn test_alias_colliding_with_other_skill_rejected() {
        let err = parse(
            r#"{
                "job_roles": {},
                "technical_skills_database": {
                    "JavaScript": {"category": "Programming Languages", "aliases": ["js"]},
                    "Java": {"category": "Programming Languages", "aliases": ["JS"]}
                }
            }"#,
        )
        .unwrap_err();
        assert!(
            err.to_string().contains("alias 'JS'"),
            "Expected alias collision, got: {err}"
        );
    }

    #[test]
    fn test_weight_out_of_range_rejected() {
        for bad in ["0.0", "1.5", "-0.2"] {
            let err = parse(&format!(
                r#"{{
                    "job_roles": {{}},
                    "technical_skills_database": {{
                        "Go": {{"category": "Programming Languages", "weight": {bad}}}
                    }}
                }}"#
            ))
            .unwrap_err();
            assert!(
                err.to_string().contains("weight"),
                "weight {bad} should be rejected, got: {err}"
            );
        }
    }

    #[test]
    fn test_blank_alias_rejected() {
        let err = parse(
            r#"{
                "job_roles": {},
                "technical_skills_database": {
                    "Go": {"category": "Programming Languages", "aliases": ["  "]}
                }
            }"#,
        )
        .unwrap_err();
        assert!(err.to_string().contains("blank alias"), "got: {err}");
    }

    #[test]
    fn test_unknown_level_string_rejected() {
        let err = parse(
            r#"{
                "job_roles": {
                    "Backend Developer": {
                        "description": "d",
                        "experience_level": "Mid",
                        "salary_range": "n/a",
                        "growth_potential": "High",
                        "required_skills": {"Python": "Wizard"}
                    }
                },
                "technical_skills_database": {
                    "Python": {"category": "Programming Languages"}
                }
            }"#,
        )
        .unwrap_err();
        assert!(matches!(err, EngineError::TaxonomyLoad(_)), "got {err:?}");
    }

    #[test]
    fn test_role_order_preserved() {
        let out = parse(
            r#"{
                "job_roles": {
                    "Zeta Role": {"description": "d", "experience_level": "Entry", "salary_range": "n/a", "growth_potential": "Low", "required_skills": {}},
                    "Alpha Role": {"description": "d", "experience_level": "Lead", "salary_range": "n/a", "growth_potential": "High", "required_skills": {}}
                },
                "technical_skills_database": {
                    "Python": {"category": "Programming Languages"}
                }
            }"#,
        )
        .unwrap();
        let names: Vec<_> = out.roles.keys().cloned().collect();
        assert_eq!(names, vec!["Zeta Role", "Alpha Role"]);
    }
}
