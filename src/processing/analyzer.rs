//! Analysis engine combining skill extraction and role scoring

use crate::error::Result;
use crate::processing::catalog::SkillCatalog;
use crate::processing::extractor::SkillExtractor;
use crate::processing::profiles::RoleProfileTable;
use crate::processing::scorer::{RoleScore, RoleScorer};
use crate::processing::tokenizer::Token;
use serde::{Deserialize, Serialize};

pub const ANALYSIS_SUCCESS_MESSAGE: &str = "Analysis successful";

/// Combined result of one analysis call. Serializes to the wire shape
/// `{"roles": [...], "skills_found": [...], "message": "..."}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisReport {
    pub roles: Vec<RoleScore>,
    pub skills_found: Vec<String>,
    pub message: String,
}

/// Runs the skill extractor and role scorer over the same document text.
///
/// Holds only the read-only catalog, profile table, and match automaton, so
/// one engine can serve any number of concurrent calls behind an `Arc`.
pub struct AnalysisEngine {
    extractor: SkillExtractor,
    scorer: RoleScorer,
}

impl AnalysisEngine {
    pub fn new() -> Result<Self> {
        Self::with_tables(SkillCatalog::new(), RoleProfileTable::new())
    }

    pub fn with_tables(catalog: SkillCatalog, profiles: RoleProfileTable) -> Result<Self> {
        Ok(Self {
            extractor: SkillExtractor::new(catalog),
            scorer: RoleScorer::new(profiles)?,
        })
    }

    /// Analyze one document: the extractor works on its tokens, the scorer
    /// searches its raw text. Total over any input; never fails.
    pub fn analyze(&self, text: &str, tokens: &[Token]) -> AnalysisReport {
        let skills = self.extractor.extract(tokens);
        let roles = self.scorer.score(text);

        AnalysisReport {
            roles,
            skills_found: skills.into_iter().collect(),
            message: ANALYSIS_SUCCESS_MESSAGE.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::processing::scorer::NO_ROLE_MATCH;
    use crate::processing::tokenizer::Tokenizer;

    fn analyze(text: &str) -> AnalysisReport {
        let engine = AnalysisEngine::new().unwrap();
        let tokens = Tokenizer::new().tokenize(text);
        engine.analyze(text, &tokens)
    }

    #[test]
    fn test_combined_report_for_data_science_resume() {
        let report =
            analyze("Experienced with Python, Pandas and TensorFlow for deep learning projects.");

        assert_eq!(report.roles[0].role, "Data Scientist");
        assert_eq!(report.roles[0].confidence, 100.0);
        assert_eq!(report.message, ANALYSIS_SUCCESS_MESSAGE);

        // token-level skills only: "deep learning" raises the role score but
        // never shows up in skills_found
        assert_eq!(
            report.skills_found,
            vec!["pandas", "python", "tensorflow"]
        );
    }

    #[test]
    fn test_empty_document_report() {
        let report = analyze("");

        assert!(report.skills_found.is_empty());
        assert_eq!(report.roles.len(), 1);
        assert_eq!(report.roles[0].role, NO_ROLE_MATCH);
        assert_eq!(report.roles[0].confidence, 0.0);
    }

    #[test]
    fn test_skills_found_is_sorted() {
        let report = analyze("react docker angular python aws");

        let mut sorted = report.skills_found.clone();
        sorted.sort();
        assert_eq!(report.skills_found, sorted);
    }

    #[test]
    fn test_analyze_is_deterministic() {
        let text = "Python, Docker and Kubernetes with SQL on Linux.";
        let engine = AnalysisEngine::new().unwrap();
        let tokens = Tokenizer::new().tokenize(text);

        let first = engine.analyze(text, &tokens);
        let second = engine.analyze(text, &tokens);

        assert_eq!(first, second);
    }
}
