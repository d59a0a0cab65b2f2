//! Token-level skill extraction against the static catalog

use crate::processing::catalog::SkillCatalog;
use crate::processing::tokenizer::Token;
use std::collections::BTreeSet;

/// Finds catalog skills mentioned in tokenized text.
///
/// Matching is exact and case-insensitive on single tokens. Multi-word
/// catalog terms ("machine learning", "power bi") are never produced by this
/// pass since no single token equals them; they still influence role scoring,
/// which searches the whole text instead. The two passes are intentionally
/// separate.
pub struct SkillExtractor {
    catalog: SkillCatalog,
}

impl SkillExtractor {
    pub fn new(catalog: SkillCatalog) -> Self {
        Self { catalog }
    }

    /// Return the set of catalog terms present in `tokens`, lowercased.
    /// The same token sequence always yields the same set.
    pub fn extract(&self, tokens: &[Token]) -> BTreeSet<String> {
        let mut skills = BTreeSet::new();

        for token in tokens {
            let normalized = token.text.to_lowercase();
            if self.catalog.contains(&normalized) {
                skills.insert(normalized);
            }
        }

        skills
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::processing::tokenizer::Tokenizer;

    fn extract(text: &str) -> BTreeSet<String> {
        let extractor = SkillExtractor::new(SkillCatalog::new());
        let tokens = Tokenizer::new().tokenize(text);
        extractor.extract(&tokens)
    }

    #[test]
    fn test_finds_skills_regardless_of_casing() {
        let skills = extract("Experienced with Python, Pandas and TensorFlow for deep learning projects.");

        assert!(skills.contains("python"));
        assert!(skills.contains("pandas"));
        assert!(skills.contains("tensorflow"));
    }

    #[test]
    fn test_multi_word_terms_are_not_found_token_by_token() {
        let skills = extract("deep learning and machine learning experience");

        // "deep", "learning", and "machine" are not catalog members on
        // their own, so the phrase terms never surface here
        assert!(skills.is_empty());
    }

    #[test]
    fn test_result_is_subset_of_catalog() {
        let catalog = SkillCatalog::new();
        let skills = extract("python react cobol fortran docker excel word");

        for skill in &skills {
            assert!(catalog.contains(skill));
        }
        assert!(skills.contains("python"));
        assert!(skills.contains("react"));
        assert!(skills.contains("docker"));
        assert!(!skills.contains("cobol"));
        assert!(!skills.contains("excel"));
    }

    #[test]
    fn test_extraction_is_idempotent() {
        let extractor = SkillExtractor::new(SkillCatalog::new());
        let tokens = Tokenizer::new().tokenize("Python and Docker, plus more Python.");

        let first = extractor.extract(&tokens);
        let second = extractor.extract(&tokens);

        assert_eq!(first, second);
    }

    #[test]
    fn test_duplicate_mentions_collapse() {
        let skills = extract("python Python PYTHON");

        assert_eq!(skills.len(), 1);
        assert!(skills.contains("python"));
    }

    #[test]
    fn test_empty_input() {
        assert!(extract("").is_empty());
    }
}
