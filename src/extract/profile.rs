//! Structured profile produced by the extractor and consumed by the matcher.

use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Sentinel used when no name line is found.
pub const NAME_NOT_FOUND: &str = "Name not found";
/// Sentinel used when no email matches.
pub const EMAIL_NOT_FOUND: &str = "Email not found";
/// Sentinel used when no phone pattern matches.
pub const PHONE_NOT_FOUND: &str = "Phone not found";
/// Placeholder description when no experience section parses.
pub const EXPERIENCE_PLACEHOLDER: &str = "Experience information extracted";
/// Placeholder degree and description when no education section parses.
pub const EDUCATION_PLACEHOLDER_DEGREE: &str = "Graduate";
pub const EDUCATION_PLACEHOLDER_DESCRIPTION: &str = "Education details extracted";

/// Structured extraction result for one resume.
///
/// Every field is always populated with either a real value or a documented
/// sentinel/placeholder, so scoring never has to branch on a missing field.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StructuredProfile {
    pub name: String,
    pub email: String,
    pub phone: String,
    /// LinkedIn profile path, empty when absent.
    pub linkedin: String,
    /// Professional summary, at most 300 characters, empty when absent.
    pub summary: String,
    /// Lowercase skill keywords, deduplicated.
    pub skills: HashSet<String>,
    /// Never empty: a placeholder entry is substituted when nothing parses.
    pub experience: Vec<ExperienceEntry>,
    /// Never empty, same placeholder rule.
    pub education: Vec<EducationEntry>,
    /// At most 5 entries.
    pub certifications: Vec<String>,
    /// Capitalized language names, defaults to ["English"].
    pub languages: Vec<String>,
    /// Original input text, kept for lexical fallback matching.
    pub raw_text: String,
    /// Source file name, attached by the caller. Also used for fallback
    /// matching when structured extraction yields little signal.
    pub filename: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExperienceEntry {
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EducationEntry {
    pub degree: String,
    pub description: String,
}

impl StructuredProfile {
    pub fn has_email(&self) -> bool {
        !self.email.is_empty() && self.email != EMAIL_NOT_FOUND
    }

    pub fn has_phone(&self) -> bool {
        !self.phone.is_empty() && self.phone != PHONE_NOT_FOUND
    }
}
