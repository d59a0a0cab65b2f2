//! Role profiles: weighted skill mappings for each known job role

/// Role definitions in declaration order. The order is significant: ranking
/// ties are broken by position in this table, so reordering entries changes
/// output.
const ROLE_PROFILES: &[(&str, &[(&str, u32)])] = &[
    (
        "Data Scientist",
        &[
            ("python", 2),
            ("pandas", 2),
            ("numpy", 2),
            ("tensorflow", 3),
            ("pytorch", 3),
            ("machine learning", 3),
            ("deep learning", 3),
            ("scikit-learn", 2),
        ],
    ),
    (
        "Data Analyst",
        &[
            ("python", 1),
            ("sql", 2),
            ("tableau", 2),
            ("power bi", 2),
            ("excel", 2),
            ("pandas", 1),
            ("data visualization", 2),
        ],
    ),
    (
        "Frontend Developer",
        &[
            ("javascript", 2),
            ("html", 2),
            ("css", 2),
            ("react", 3),
            ("angular", 3),
            ("bootstrap", 1),
        ],
    ),
    (
        "Backend Developer",
        &[
            ("java", 2),
            ("c#", 2),
            ("spring", 2),
            (".net", 2),
            ("flask", 3),
            ("django", 3),
            ("sql", 2),
        ],
    ),
    (
        "DevOps Engineer",
        &[
            ("aws", 2),
            ("azure", 2),
            ("docker", 2),
            ("kubernetes", 2),
            ("ci/cd", 2),
            ("jenkins", 2),
            ("linux", 1),
        ],
    ),
];

/// A named role with its weighted skill mapping. Skill keys are lowercased
/// phrases and may span multiple words; weights are positive integers,
/// static for the process lifetime.
#[derive(Debug, Clone, PartialEq)]
pub struct RoleProfile {
    pub name: &'static str,
    pub skills: &'static [(&'static str, u32)],
}

/// Ordered, immutable table of role profiles built once at startup.
pub struct RoleProfileTable {
    profiles: Vec<RoleProfile>,
}

impl RoleProfileTable {
    pub fn new() -> Self {
        Self {
            profiles: ROLE_PROFILES
                .iter()
                .map(|&(name, skills)| RoleProfile { name, skills })
                .collect(),
        }
    }

    /// Profiles in declaration order.
    pub fn profiles(&self) -> &[RoleProfile] {
        &self.profiles
    }

    pub fn len(&self) -> usize {
        self.profiles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.profiles.is_empty()
    }

    /// Distinct skill keys across all profiles, first-seen order preserved.
    pub fn distinct_skills(&self) -> Vec<&'static str> {
        let mut seen = std::collections::HashSet::new();
        let mut skills = Vec::new();

        for profile in &self.profiles {
            for &(skill, _) in profile.skills {
                if seen.insert(skill) {
                    skills.push(skill);
                }
            }
        }

        skills
    }
}

impl Default for RoleProfileTable {
    fn default() -> Self {
        Self::new()
    }
}
