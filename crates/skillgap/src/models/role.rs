use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::models::skill::SkillLevel;

/// Seniority band a role is pitched at.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ExperienceLevel {
    Entry,
    Mid,
    Senior,
    Lead,
}

/// Market growth outlook for a role. Presentation metadata, not scored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GrowthPotential {
    Low,
    Medium,
    High,
}

/// A target job role and its skill requirements.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JobRole {
    pub name: String,
    pub description: String,
    pub experience_level: ExperienceLevel,
    pub salary_range: String,
    pub growth_potential: GrowthPotential,
    /// Skill name to required proficiency, in source order. Source order is
    /// the tie-break when missing skills are ranked by severity.
    pub required_skills: IndexMap<String, SkillLevel>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_role_round_trips_through_json() {
        let json = r#"{
            "name": "Backend Developer",
            "description": "Builds services",
            "experience_level": "Mid",
            "salary_range": "$90k - $130k",
            "growth_potential": "High",
            "required_skills": {"Python": "Advanced", "SQL": "Intermediate"}
        }"#;

        let role: JobRole = serde_json::from_str(json).unwrap();
        assert_eq!(role.experience_level, ExperienceLevel::Mid);
        assert_eq!(role.growth_potential, GrowthPotential::High);
        assert_eq!(
            role.required_skills.get("Python"),
            Some(&SkillLevel::Advanced)
        );
        // IndexMap preserves source order
        let names: Vec<_> = role.required_skills.keys().collect();
        assert_eq!(names, vec!["Python", "SQL"]);
    }
}
