//! Resume text extraction.
//!
//! Every rule here is a bounded-window heuristic with an explicit fallback:
//! the contract is "never fails, always degrades to a sentinel", not
//! linguistically perfect parsing.

pub mod profile;
pub mod sections;

use crate::error::{MatcherError, Result};
use crate::taxonomy;
use aho_corasick::AhoCorasick;
use log::debug;
use regex::Regex;
use sections::{split_items, SectionPattern};
use std::collections::HashSet;

pub use profile::{
    EducationEntry, ExperienceEntry, StructuredProfile, EDUCATION_PLACEHOLDER_DEGREE,
    EDUCATION_PLACEHOLDER_DESCRIPTION, EMAIL_NOT_FOUND, EXPERIENCE_PLACEHOLDER, NAME_NOT_FOUND,
    PHONE_NOT_FOUND,
};

const SUMMARY_LIMIT: usize = 500;
const SKILLS_LIMIT: usize = 1000;
const EXPERIENCE_LIMIT: usize = 3000;
const EDUCATION_LIMIT: usize = 1000;
const CERTIFICATIONS_LIMIT: usize = 500;
const SUMMARY_MAX_CHARS: usize = 300;
const SUMMARY_MIN_CHARS: usize = 20;
const MAX_CERTIFICATIONS: usize = 5;

/// Converts normalized resume text into a [`StructuredProfile`].
///
/// All patterns are compiled once at construction; extraction itself is
/// infallible and side-effect free, so a single `Extractor` can be shared
/// across threads.
pub struct Extractor {
    skill_scanner: AhoCorasick,
    skill_keywords: Vec<&'static str>,
    email: Regex,
    phone_patterns: Vec<Regex>,
    linkedin: Regex,
    year: Regex,
    summary_section: SectionPattern,
    heading_strip: Regex,
    skills_section: SectionPattern,
    experience_section: SectionPattern,
    education_section: SectionPattern,
    certifications_section: SectionPattern,
}

impl Extractor {
    pub fn new() -> Result<Self> {
        let skill_keywords = taxonomy::all_skill_keywords();
        let skill_scanner = AhoCorasick::builder()
            .ascii_case_insensitive(true)
            .build(&skill_keywords)
            .map_err(|e| {
                MatcherError::PatternCompilation(format!("Failed to build skill scanner: {}", e))
            })?;

        let email = Regex::new(r"[a-zA-Z0-9._%+-]+@[a-zA-Z0-9.-]+\.[a-zA-Z]{2,}")?;
        // Trial order is significant: country-code-91, generic
        // international, then US 3-3-4. First match wins.
        let phone_patterns = vec![
            Regex::new(r"\+?91[-.\s]?\d{10}")?,
            Regex::new(r"\+\d{1,3}[-.\s]?\d{9,}")?,
            Regex::new(r"\b\d{3}[-.\s]?\d{3}[-.\s]?\d{4}\b")?,
        ];
        let linkedin = Regex::new(r"linkedin\.com/in/[\w-]+")?;
        let year = Regex::new(r"\d{4}")?;

        let summary_section = SectionPattern::new(
            &["professional summary", "summary", "objective", "about me", "about"],
            &["experience", "skills", "education", "expertise"],
            SUMMARY_LIMIT,
        )?;
        let heading_strip =
            Regex::new("professional summary|summary|objective|about me|about")?;
        let skills_section = SectionPattern::new(
            &["skills", "technical skills", "competencies"],
            &["experience", "education", "projects", "certifications"],
            SKILLS_LIMIT,
        )?;
        let experience_section = SectionPattern::new(
            &["experience", "work experience", "professional experience"],
            &["education", "skills", "projects", "certifications"],
            EXPERIENCE_LIMIT,
        )?;
        let education_section = SectionPattern::new(
            &["education", "academic", "qualifications"],
            &["experience", "skills", "projects"],
            EDUCATION_LIMIT,
        )?;
        let certifications_section = SectionPattern::new(
            &["certificates", "certifications", "training"],
            &["experience", "skills", "education"],
            CERTIFICATIONS_LIMIT,
        )?;

        Ok(Self {
            skill_scanner,
            skill_keywords,
            email,
            phone_patterns,
            linkedin,
            year,
            summary_section,
            heading_strip,
            skills_section,
            experience_section,
            education_section,
            certifications_section,
        })
    }

    /// Extract a structured profile. Never fails: fields that don't parse
    /// come back as sentinels or placeholders.
    pub fn extract(&self, text: &str) -> StructuredProfile {
        let lowered = text.to_lowercase();

        let profile = StructuredProfile {
            name: self.extract_name(&lowered),
            email: self.extract_email(&lowered),
            phone: self.extract_phone(&lowered),
            linkedin: self.extract_linkedin(&lowered),
            summary: self.extract_summary(&lowered),
            skills: self.extract_skills(&lowered),
            experience: self.extract_experience(&lowered),
            education: self.extract_education(&lowered),
            certifications: self.extract_certifications(&lowered),
            languages: self.extract_languages(&lowered),
            raw_text: text.to_string(),
            filename: String::new(),
        };
        debug!(
            "extracted profile: {} skills, {} experience entries",
            profile.skills.len(),
            profile.experience.len()
        );
        profile
    }

    /// First plausible name line among the first five: 4..=49 chars,
    /// digit-free, at least two words. The first two words are title-cased.
    fn extract_name(&self, text: &str) -> String {
        for line in text.lines().take(5) {
            let line = line.trim();
            let len = line.chars().count();
            if len > 3 && len < 50 && !line.chars().any(|c| c.is_numeric()) {
                let words: Vec<&str> = line.split_whitespace().collect();
                if words.len() >= 2 {
                    return words[..2]
                        .iter()
                        .map(|w| title_case(w))
                        .collect::<Vec<_>>()
                        .join(" ");
                }
            }
        }
        NAME_NOT_FOUND.to_string()
    }

    fn extract_email(&self, text: &str) -> String {
        self.email
            .find(text)
            .map(|m| m.as_str().to_string())
            .unwrap_or_else(|| EMAIL_NOT_FOUND.to_string())
    }

    fn extract_phone(&self, text: &str) -> String {
        for pattern in &self.phone_patterns {
            if let Some(m) = pattern.find(text) {
                return m.as_str().to_string();
            }
        }
        PHONE_NOT_FOUND.to_string()
    }

    fn extract_linkedin(&self, text: &str) -> String {
        self.linkedin
            .find(text)
            .map(|m| m.as_str().to_string())
            .unwrap_or_default()
    }

    /// Summary window with heading tokens stripped and whitespace
    /// collapsed. Discarded entirely below 20 characters.
    fn extract_summary(&self, text: &str) -> String {
        let Some(section) = self.summary_section.locate(text) else {
            return String::new();
        };
        let stripped = self.heading_strip.replace_all(section.body, "");
        let collapsed = stripped.split_whitespace().collect::<Vec<_>>().join(" ");
        if collapsed.chars().count() <= SUMMARY_MIN_CHARS {
            return String::new();
        }
        collapsed.chars().take(SUMMARY_MAX_CHARS).collect()
    }

    /// Union of taxonomy keywords found anywhere in the text and
    /// taxonomy-backed items from an explicit skills section.
    fn extract_skills(&self, text: &str) -> HashSet<String> {
        // Overlapping scan: "javascript" must register both "java" and
        // "javascript", same as testing each keyword for substring presence.
        let mut found: HashSet<String> = self
            .skill_scanner
            .find_overlapping_iter(text)
            .map(|m| self.skill_keywords[m.pattern().as_usize()].to_string())
            .collect();

        if let Some(section) = self.skills_section.locate(text) {
            for item in split_items(section.body) {
                let len = item.chars().count();
                if len > 2 && len < 50 && self.skill_scanner.is_match(item) {
                    found.insert(item.to_string());
                }
            }
        }

        found
    }

    /// Lines carrying a 4-digit year open a new entry; following lines
    /// accumulate into its description. Lines before the first dated line
    /// are dropped.
    fn extract_experience(&self, text: &str) -> Vec<ExperienceEntry> {
        let mut entries = Vec::new();

        if let Some(section) = self.experience_section.locate(text) {
            let mut current: Option<String> = None;
            for line in section.body.lines() {
                let line = line.trim();
                if self.year.is_match(line) {
                    if let Some(description) = current.take() {
                        entries.push(ExperienceEntry { description });
                    }
                    current = Some(line.to_string());
                } else if !line.is_empty() {
                    if let Some(description) = current.as_mut() {
                        description.push(' ');
                        description.push_str(line);
                    }
                }
            }
            if let Some(description) = current {
                entries.push(ExperienceEntry { description });
            }
        }

        if entries.is_empty() {
            entries.push(ExperienceEntry {
                description: EXPERIENCE_PLACEHOLDER.to_string(),
            });
        }
        entries
    }

    /// One entry for the first degree keyword present, in taxonomy priority
    /// order. Placeholder entry when no section or no keyword is found.
    fn extract_education(&self, text: &str) -> Vec<EducationEntry> {
        if let Some(section) = self.education_section.locate(text) {
            for degree in taxonomy::DEGREES {
                if section.body.contains(degree) {
                    return vec![EducationEntry {
                        degree: degree.to_uppercase(),
                        description: section.body.chars().take(200).collect(),
                    }];
                }
            }
        }
        vec![EducationEntry {
            degree: EDUCATION_PLACEHOLDER_DEGREE.to_string(),
            description: EDUCATION_PLACEHOLDER_DESCRIPTION.to_string(),
        }]
    }

    fn extract_certifications(&self, text: &str) -> Vec<String> {
        let Some(section) = self.certifications_section.locate(text) else {
            return Vec::new();
        };
        split_items(section.body)
            .into_iter()
            .filter(|item| item.chars().count() > 3)
            .take(MAX_CERTIFICATIONS)
            .map(str::to_string)
            .collect()
    }

    fn extract_languages(&self, text: &str) -> Vec<String> {
        let found: Vec<String> = taxonomy::LANGUAGES
            .iter()
            .filter(|lang| text.contains(*lang))
            .map(|lang| title_case(lang))
            .collect();
        if found.is_empty() {
            vec!["English".to_string()]
        } else {
            found
        }
    }
}

fn title_case(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
