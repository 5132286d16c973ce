//! Immutable skill taxonomy: job roles plus the technical skills database.
//!
//! Loaded once from a structured JSON source, validated all-or-nothing, and
//! shared read-only across every extraction and analysis call.

mod loader;
pub mod shared;

use std::collections::HashMap;
use std::path::Path;

use indexmap::IndexMap;
use tracing::info;

use crate::errors::EngineError;
use crate::models::{JobRole, SkillEntry, SkillLevel};

/// Category reported for skills the database does not know.
/// Categorization is best-effort and never fails.
pub const UNCATEGORIZED: &str = "Uncategorized";

/// Case-insensitive, whitespace-normalized form used for every skill-name
/// lookup (canonical names, aliases, and requirement keys).
pub(crate) fn normalize_key(s: &str) -> String {
    s.split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
        .to_lowercase()
}

/// Immutable in-memory model of job roles and the skill vocabulary.
///
/// Constructed once via one of the load constructors and never mutated;
/// wrap it in an `Arc` to share across threads.
#[derive(Debug, Clone)]
pub struct SkillTaxonomy {
    roles: IndexMap<String, JobRole>,
    skills: IndexMap<String, SkillEntry>,
    alias_index: HashMap<String, String>,
}

impl SkillTaxonomy {
    /// Parses and validates a taxonomy from a JSON string.
    pub fn from_json_str(json: &str) -> Result<Self, EngineError> {
        let doc: loader::TaxonomyDocument = serde_json::from_str(json)?;
        let validated = loader::validate(doc)?;
        let taxonomy = SkillTaxonomy {
            roles: validated.roles,
            skills: validated.skills,
            alias_index: validated.alias_index,
        };
        info!(
            roles = taxonomy.role_count(),
            skills = taxonomy.skill_count(),
            "taxonomy loaded"
        );
        Ok(taxonomy)
    }

    /// Reads and parses a taxonomy source file. The only I/O in the crate;
    /// it happens once, outside the per-request hot path.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, EngineError> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json_str(&json)
    }

    /// Parses the compiled-in default dataset (`data/job_skills.json`).
    pub fn bundled() -> Result<Self, EngineError> {
        Self::from_json_str(include_str!("../../data/job_skills.json"))
    }

    /// Role names in source insertion order.
    pub fn roles(&self) -> impl Iterator<Item = &str> {
        self.roles.keys().map(String::as_str)
    }

    /// Full role record, for the role-details surface collaborators render.
    pub fn role(&self, role_name: &str) -> Result<&JobRole, EngineError> {
        self.roles
            .get(role_name)
            .ok_or_else(|| EngineError::UnknownRole(role_name.to_string()))
    }

    /// The role's skill-name to required-level mapping, in source order.
    pub fn required_skills(
        &self,
        role_name: &str,
    ) -> Result<&IndexMap<String, SkillLevel>, EngineError> {
        self.role(role_name).map(|role| &role.required_skills)
    }

    /// Category of a skill, or [`UNCATEGORIZED`] when the skill is unknown.
    /// Lookup is alias-aware and case-insensitive.
    pub fn category_of(&self, skill_name: &str) -> &str {
        self.resolve_alias(skill_name)
            .and_then(|canonical| self.skills.get(canonical))
            .map(|entry| entry.category.as_str())
            .unwrap_or(UNCATEGORIZED)
    }

    /// Resolves a token to its canonical skill name across canonical names
    /// and aliases. Case-insensitive, whitespace-normalized.
    pub fn resolve_alias(&self, token: &str) -> Option<&str> {
        self.alias_index
            .get(&normalize_key(token))
            .map(String::as_str)
    }

    /// Every entry in the skills database, in source order.
    pub fn skills(&self) -> impl Iterator<Item = &SkillEntry> {
        self.skills.values()
    }

    pub fn skill_count(&self) -> usize {
        self.skills.len()
    }

    pub fn role_count(&self) -> usize {
        self.roles.len()
    }
}
