//! Bounded-window section location.
//!
//! Resume sections are found by heading keyword, then cut at the next known
//! heading or at a fixed character limit, whichever comes first. The
//! `regex` crate has no lookahead, so the terminator is searched explicitly
//! inside the window instead of being part of the pattern.

use crate::error::Result;
use regex::Regex;

/// A located section: the heading token that matched plus the body that
/// follows it, up to the window cut.
#[derive(Debug)]
pub struct Section<'a> {
    pub heading: &'a str,
    pub body: &'a str,
}

/// Heading-bounded window over resume text.
pub struct SectionPattern {
    heading: Regex,
    terminator: Option<Regex>,
    limit: usize,
}

impl SectionPattern {
    /// Build a pattern from heading alternatives, terminator heading
    /// alternatives, and a maximum body length in bytes. Alternative order
    /// is preserved; it decides ties at the same position.
    pub fn new(headings: &[&str], terminators: &[&str], limit: usize) -> Result<Self> {
        let heading = Regex::new(&format!("(?:{})", headings.join("|")))?;
        let terminator = if terminators.is_empty() {
            None
        } else {
            Some(Regex::new(&format!(r"\n(?:{})", terminators.join("|")))?)
        };
        Ok(Self { heading, terminator, limit })
    }

    /// Locate the first occurrence of the section in `text`.
    pub fn locate<'a>(&self, text: &'a str) -> Option<Section<'a>> {
        let matched = self.heading.find(text)?;
        let body_start = matched.end();
        let window_end = floor_char_boundary(text, body_start.saturating_add(self.limit));
        let window = &text[body_start..window_end];

        let cut = self
            .terminator
            .as_ref()
            .and_then(|t| t.find(window))
            .map(|m| m.start())
            .unwrap_or(window.len());

        Some(Section {
            heading: matched.as_str(),
            body: &window[..cut],
        })
    }
}

/// Split a section body into candidate items on commas, bullets, pipes,
/// dashes, and newlines. Items come back trimmed; empties are dropped.
pub fn split_items(body: &str) -> Vec<&str> {
    body.split(['\n', ',', '•', '|', '–', '-'])
        .map(str::trim)
        .filter(|item| !item.is_empty())
        .collect()
}

fn floor_char_boundary(s: &str, mut index: usize) -> usize {
    if index >= s.len() {
        return s.len();
    }
    while !s.is_char_boundary(index) {
        index -= 1;
    }
    index
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_locate_cuts_at_next_heading() {
        let pattern =
            SectionPattern::new(&["summary"], &["experience", "education"], 500).unwrap();
        let text = "summary\nseasoned engineer with ten years of rust\nexperience\nacme corp";
        let section = pattern.locate(text).unwrap();
        assert_eq!(section.heading, "summary");
        assert!(section.body.contains("seasoned engineer"));
        assert!(!section.body.contains("acme corp"));
    }

    #[test]
    fn test_locate_respects_limit() {
        let pattern = SectionPattern::new(&["skills"], &["education"], 10).unwrap();
        let text = format!("skills\n{}", "x".repeat(100));
        let section = pattern.locate(&text).unwrap();
        assert!(section.body.len() <= 10);
    }

    #[test]
    fn test_locate_runs_to_end_without_terminator() {
        let pattern = SectionPattern::new(&["certifications"], &["experience"], 500).unwrap();
        let text = "certifications\naws solutions architect";
        let section = pattern.locate(text).unwrap();
        assert!(section.body.contains("aws solutions architect"));
    }

    #[test]
    fn test_missing_heading() {
        let pattern = SectionPattern::new(&["summary"], &[], 500).unwrap();
        assert!(pattern.locate("no sections here").is_none());
    }

    #[test]
    fn test_split_items() {
        let items = split_items("python, java • rust\nsql | go");
        assert_eq!(items, vec!["python", "java", "rust", "sql", "go"]);
    }
}
