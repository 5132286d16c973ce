use std::fmt;

use serde::{Deserialize, Serialize};

/// Ordinal proficiency tier for a detected or required skill.
///
/// Ordering is part of the contract: `Beginner < Intermediate < Advanced < Expert`.
/// Serializes as the capitalized variant name, which is the stable wire form.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub enum SkillLevel {
    #[default]
    Beginner,
    Intermediate,
    Advanced,
    Expert,
}

impl SkillLevel {
    /// Numeric rank used by the similarity formula: Beginner..Expert map to 1..4.
    pub fn rank(self) -> u8 {
        match self {
            SkillLevel::Beginner => 1,
            SkillLevel::Intermediate => 2,
            SkillLevel::Advanced => 3,
            SkillLevel::Expert => 4,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            SkillLevel::Beginner => "Beginner",
            SkillLevel::Intermediate => "Intermediate",
            SkillLevel::Advanced => "Advanced",
            SkillLevel::Expert => "Expert",
        }
    }
}

impl fmt::Display for SkillLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One entry in the technical skills database.
///
/// `canonical_name` is the single authoritative identifier; every alias
/// resolves to it. Uniqueness across the taxonomy (canonical names and
/// aliases alike, after case/whitespace normalization) is enforced at load.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SkillEntry {
    pub canonical_name: String,
    pub category: String,
    pub aliases: Vec<String>,
    /// Relative importance in (0, 1]. Sources that omit it get 1.0.
    pub weight: f32,
}
