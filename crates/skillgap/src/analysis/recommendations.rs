//! Deterministic recommendation text generation.
//!
//! One recommendation per missing skill, in priority order, rendered from a
//! category-to-template table. No randomness and no external services, so
//! identical inputs always produce identical output.

/// Per-category template overrides. `{skill}` and `{category}` are the only
/// placeholders. Categories not listed use [`FALLBACK_TEMPLATE`].
const CATEGORY_TEMPLATES: &[(&str, &str)] = &[
    (
        "Soft Skills",
        "Practice {skill} to strengthen your {category} profile.",
    ),
    (
        "Certifications",
        "Earn {skill} to strengthen your {category} profile.",
    ),
];

const FALLBACK_TEMPLATE: &str = "Learn {skill} to strengthen your {category} profile.";

/// The single entry produced when nothing is missing.
const CONGRATULATORY: &str =
    "Excellent! You already demonstrate every skill this role requires.";

fn template_for(category: &str) -> &'static str {
    CATEGORY_TEMPLATES
        .iter()
        .find(|(c, _)| *c == category)
        .map(|(_, t)| *t)
        .unwrap_or(FALLBACK_TEMPLATE)
}

/// Renders recommendations for `(skill, category)` pairs already in
/// priority order. An empty slice yields the congratulatory entry.
pub fn recommend(missing: &[(String, String)]) -> Vec<String> {
    if missing.is_empty() {
        return vec![CONGRATULATORY.to_string()];
    }
    missing
        .iter()
        .map(|(skill, category)| {
            template_for(category)
                .replace("{skill}", skill)
                .replace("{category}", category)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pair(skill: &str, category: &str) -> (String, String) {
        (skill.to_string(), category.to_string())
    }

    #[test]
    fn test_one_recommendation_per_missing_skill_in_order() {
        let missing = vec![
            pair("Kubernetes", "DevOps Tools"),
            pair("PostgreSQL", "Databases"),
        ];
        let recs = recommend(&missing);
        assert_eq!(
            recs,
            vec![
                "Learn Kubernetes to strengthen your DevOps Tools profile.",
                "Learn PostgreSQL to strengthen your Databases profile.",
            ]
        );
    }

    #[test]
    fn test_category_override_changes_the_verb() {
        let recs = recommend(&[pair("Communication", "Soft Skills")]);
        assert_eq!(
            recs,
            vec!["Practice Communication to strengthen your Soft Skills profile."]
        );
    }

    #[test]
    fn test_empty_missing_yields_single_congratulatory_entry() {
        let recs = recommend(&[]);
        assert_eq!(recs.len(), 1);
        assert!(recs[0].contains("Excellent"), "got: {}", recs[0]);
    }

    #[test]
    fn test_output_is_reproducible() {
        let missing = vec![pair("AWS", "Cloud Platforms")];
        assert_eq!(recommend(&missing), recommend(&missing));
    }
}
