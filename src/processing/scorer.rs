//! Weighted role scoring over raw resume text

use crate::error::{Result, ResumeProfilerError};
use crate::processing::profiles::RoleProfileTable;
use aho_corasick::AhoCorasick;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Placeholder entry returned when no role scores above zero.
pub const NO_ROLE_MATCH: &str = "No relevant role found";

/// Ranked results are cut off after this many roles.
pub const MAX_RANKED_ROLES: usize = 3;

/// One ranked entry: a role name and its confidence percentage.
///
/// Confidence is relative to the best-scoring role, not an absolute
/// probability; the top role is always exactly 100.0, and two unrelated
/// roles can both rank high when their raw scores are close.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RoleScore {
    pub role: String,
    pub confidence: f64,
}

/// Scores resume text against every role profile.
///
/// Unlike the token-level skill extractor, matching here is substring search
/// over the whole text: profile keys may be multi-word phrases ("machine
/// learning", "power bi") that tokenization would split apart. The two
/// passes stay separate on purpose.
pub struct RoleScorer {
    profiles: RoleProfileTable,
    patterns: Vec<&'static str>,
    matcher: AhoCorasick,
}

impl RoleScorer {
    pub fn new(profiles: RoleProfileTable) -> Result<Self> {
        let patterns = profiles.distinct_skills();
        let matcher = AhoCorasick::builder()
            .ascii_case_insensitive(true)
            .build(&patterns)
            .map_err(|e| {
                ResumeProfilerError::Processing(format!("Failed to build role matcher: {}", e))
            })?;

        Ok(Self {
            profiles,
            patterns,
            matcher,
        })
    }

    /// Rank roles by weighted skill matches in `text`.
    ///
    /// Returns at most [`MAX_RANKED_ROLES`] entries ordered by confidence
    /// descending; ties keep profile declaration order. When nothing
    /// matches, a single sentinel entry is returned instead, so the result
    /// is never empty.
    pub fn score(&self, text: &str) -> Vec<RoleScore> {
        let matched = self.matched_skills(text);

        let mut scored: Vec<(&'static str, u32)> = Vec::new();
        for profile in self.profiles.profiles() {
            let raw: u32 = profile
                .skills
                .iter()
                .filter(|(skill, _)| matched.contains(*skill))
                .map(|(_, weight)| *weight)
                .sum();

            if raw > 0 {
                scored.push((profile.name, raw));
            }
        }

        if scored.is_empty() {
            return vec![RoleScore {
                role: NO_ROLE_MATCH.to_string(),
                confidence: 0.0,
            }];
        }

        // normalize against the best raw score
        let max_raw = scored.iter().map(|&(_, raw)| raw).max().unwrap_or(1);

        let mut roles: Vec<RoleScore> = scored
            .into_iter()
            .map(|(name, raw)| RoleScore {
                role: name.to_string(),
                confidence: round_one_decimal(raw as f64 / max_raw as f64 * 100.0),
            })
            .collect();

        // stable sort keeps declaration order on equal confidence
        roles.sort_by(|a, b| b.confidence.partial_cmp(&a.confidence).unwrap());
        roles.truncate(MAX_RANKED_ROLES);
        roles
    }

    /// Which profile skill keys occur anywhere in `text`. Overlapping
    /// matches are reported, so "java" and "javascript" are both found in
    /// the same span.
    fn matched_skills(&self, text: &str) -> HashSet<&'static str> {
        self.matcher
            .find_overlapping_iter(text)
            .map(|m| self.patterns[m.pattern().as_usize()])
            .collect()
    }
}

fn round_one_decimal(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}
