//! Fixed keyword taxonomies used by the extractor and matcher.
//!
//! Everything here is immutable lookup data. The pattern trial order and
//! list order are load-bearing: downstream consumers report missing
//! keywords in list order and stop on the first matching degree, so
//! reordering these tables changes output on ambiguous input.

/// Skill keyword taxonomy, grouped by category.
pub const SKILL_CATEGORIES: &[(&str, &[&str])] = &[
    (
        "programming",
        &[
            "python", "java", "javascript", "c++", "c#", "html", "css", "ruby", "php",
            "golang", "rust", "swift", "kotlin",
        ],
    ),
    (
        "web",
        &[
            "react", "angular", "vue", "nodejs", "express", "django", "flask", "spring",
            "laravel", "asp.net", "fastapi",
        ],
    ),
    (
        "mobile",
        &["flutter", "dart", "react native", "android", "ios", "xamarin", "swift"],
    ),
    (
        "data",
        &[
            "python", "r", "sql", "mysql", "postgresql", "mongodb", "nosql", "hadoop",
            "spark", "tableau", "power bi",
        ],
    ),
    (
        "ml_ai",
        &[
            "machine learning", "deep learning", "tensorflow", "pytorch", "keras",
            "scikit-learn", "nlp", "computer vision", "artificial intelligence",
        ],
    ),
    (
        "cloud",
        &[
            "aws", "azure", "gcp", "google cloud", "docker", "kubernetes", "jenkins",
            "ci/cd", "terraform",
        ],
    ),
    (
        "security",
        &[
            "cybersecurity", "security", "penetration testing", "network security",
            "ethical hacking", "firewall", "siem", "encryption",
        ],
    ),
    (
        "blockchain",
        &["blockchain", "solidity", "ethereum", "web3", "smart contracts", "cryptocurrency"],
    ),
    (
        "devops",
        &["devops", "docker", "kubernetes", "jenkins", "ansible", "terraform", "linux", "git"],
    ),
    (
        "database",
        &["sql", "mongodb", "postgresql", "mysql", "oracle", "dynamodb", "redis", "cassandra"],
    ),
    (
        "soft_skills",
        &[
            "leadership", "communication", "teamwork", "problem solving",
            "critical thinking", "project management", "agile", "scrum",
        ],
    ),
];

/// Industry keyword sets for missing-keyword analysis, keyed by category.
pub const INDUSTRY_KEYWORDS: &[(&str, &[&str])] = &[
    (
        "Technical",
        &[
            "python", "java", "javascript", "sql", "aws", "docker", "react", "node.js",
            "mongodb", "git",
        ],
    ),
    (
        "Management",
        &[
            "leadership", "strategy", "budget", "team", "project", "agile", "scrum",
            "stakeholder", "roadmap",
        ],
    ),
    (
        "Creative",
        &[
            "design", "creative", "photoshop", "illustrator", "ui/ux", "figma", "adobe",
            "sketch", "prototype",
        ],
    ),
    (
        "General",
        &[
            "communication", "teamwork", "problem solving", "deadline", "organization",
            "time management", "adaptability",
        ],
    ),
];

/// Spoken languages recognised by the extractor.
pub const LANGUAGES: &[&str] = &[
    "english", "hindi", "spanish", "french", "german", "mandarin", "japanese", "arabic",
    "portuguese",
];

/// Degree keywords in priority order. First match wins.
pub const DEGREES: &[&str] = &[
    "bachelor", "master", "phd", "mba", "b.tech", "m.tech", "bsc", "msc", "diploma",
];

/// Programming-language keywords scanned against raw text when the profile
/// carries no explicit skills (lexical fallback in the ranker).
pub const FALLBACK_SCAN_KEYWORDS: &[&str] = &[
    "python", "java", "javascript", "c++", "c", "c#", "go", "golang", "rust", "sql",
    "php", "ruby",
];

/// Skill-bucketing lists for `categorize_skills`.
pub const CATEGORY_TECHNICAL: &[&str] = &[
    "python", "java", "javascript", "sql", "aws", "docker", "react", "node", "html",
    "css", "c++", "ruby",
];
pub const CATEGORY_SOFT: &[&str] = &[
    "communication", "leadership", "teamwork", "problem solving", "critical thinking",
    "adaptability", "creativity",
];
pub const CATEGORY_DOMAIN: &[&str] = &[
    "machine learning", "data science", "cloud computing", "devops", "agile", "scrum",
    "project management",
];

/// Career-path trigger lists. Each flavour of skill unlocks a fixed set of
/// suggested paths in `matching::career`.
pub const CAREER_TECHNICAL_TRIGGERS: &[&str] =
    &["python", "java", "javascript", "sql", "react", "node"];

/// Every skill keyword across all categories, deduplicated, preserving
/// first-occurrence order.
pub fn all_skill_keywords() -> Vec<&'static str> {
    let mut seen = std::collections::HashSet::new();
    let mut keywords = Vec::new();
    for (_, skills) in SKILL_CATEGORIES {
        for skill in *skills {
            if seen.insert(*skill) {
                keywords.push(*skill);
            }
        }
    }
    keywords
}

/// Industry keyword list for a category, falling back to General for
/// unrecognised names.
pub fn industry_keywords(category: &str) -> &'static [&'static str] {
    INDUSTRY_KEYWORDS
        .iter()
        .find(|(name, _)| *name == category)
        .or_else(|| INDUSTRY_KEYWORDS.iter().find(|(name, _)| *name == "General"))
        .map(|(_, keywords)| *keywords)
        .unwrap_or(&[])
}
