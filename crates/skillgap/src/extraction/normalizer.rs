//! Resume text normalization.
//!
//! The matching automaton scans normalized text only, and every registered
//! pattern is normalized with the same function, so the two sides always
//! agree on spelling.

/// Punctuation that survives normalization because it occurs inside
/// registered skill tokens: "c++", "c#", ".net", "node.js", "ci/cd",
/// "scikit-learn". Everything else non-alphanumeric becomes a space.
const KEPT_PUNCTUATION: &[char] = &['+', '#', '.', '-', '/'];

/// Lowercases, collapses whitespace, and strips punctuation not on the
/// exception list.
pub fn normalize(text: &str) -> String {
    let lowered = text.to_lowercase();
    let mut out = String::with_capacity(lowered.len());
    let mut pending_space = false;

    for c in lowered.chars() {
        let keep = c.is_alphanumeric() || KEPT_PUNCTUATION.contains(&c);
        if keep {
            if pending_space && !out.is_empty() {
                out.push(' ');
            }
            pending_space = false;
            out.push(c);
        } else {
            pending_space = true;
        }
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lowercases_and_collapses_whitespace() {
        assert_eq!(normalize("  Senior   Python\tDeveloper \n"), "senior python developer");
    }

    #[test]
    fn test_skill_relevant_punctuation_survives() {
        assert_eq!(normalize("C++ and C# on .NET"), "c++ and c# on .net");
        assert_eq!(normalize("Node.js, CI/CD!"), "node.js ci/cd");
        assert_eq!(normalize("scikit-learn"), "scikit-learn");
    }

    #[test]
    fn test_other_punctuation_becomes_a_separator() {
        assert_eq!(normalize("python,java;go"), "python java go");
        assert_eq!(normalize("(rust)"), "rust");
    }

    #[test]
    fn test_empty_and_symbol_only_input() {
        assert_eq!(normalize(""), "");
        assert_eq!(normalize("!?@ %^&*"), "");
    }

    #[test]
    fn test_idempotent() {
        let once = normalize("React & Vue.js, plus C++17");
        assert_eq!(normalize(&once), once);
    }
}
