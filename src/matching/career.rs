//! Career-oriented auxiliaries: skill bucketing, experience-year
//! estimation, and rule-based career path suggestions.

use crate::extract::ExperienceEntry;
use crate::taxonomy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SkillCategories {
    pub technical: Vec<String>,
    pub soft: Vec<String>,
    pub domain: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CareerPath {
    pub role: String,
    /// Relative market demand, 1-5.
    pub demand: u8,
    /// Projected growth, percent.
    pub growth: u8,
    pub description: String,
}

fn path(role: &str, demand: u8, growth: u8, description: &str) -> CareerPath {
    CareerPath {
        role: role.to_string(),
        demand,
        growth,
        description: description.to_string(),
    }
}

/// Bucket skills into Technical/Soft/Domain by substring match against the
/// fixed category lists. Unmatched skills default to Domain. Output order
/// is alphabetical within each bucket.
pub fn categorize_skills(skills: &HashSet<String>) -> SkillCategories {
    let mut sorted: Vec<&String> = skills.iter().collect();
    sorted.sort();

    let mut categories = SkillCategories::default();
    for skill in sorted {
        let lower = skill.to_lowercase();
        if taxonomy::CATEGORY_TECHNICAL.iter().any(|t| lower.contains(t)) {
            categories.technical.push(skill.clone());
        } else if taxonomy::CATEGORY_SOFT.iter().any(|s| lower.contains(s)) {
            categories.soft.push(skill.clone());
        } else {
            // CATEGORY_DOMAIN membership and the unmatched default land in
            // the same bucket.
            categories.domain.push(skill.clone());
        }
    }
    categories
}

/// Total years of experience: the first "N years" mention per entry, or an
/// estimate of 2 years per role when an entry carries no count.
pub fn experience_years(experience: &[ExperienceEntry]) -> u32 {
    // Static pattern, compiled per call; this is a low-stakes path.
    let years_pattern = Regex::new(r"(\d+)\s*years?").expect("years pattern is valid");

    experience
        .iter()
        .map(|entry| {
            years_pattern
                .captures(&entry.description)
                .and_then(|cap| cap[1].parse::<u32>().ok())
                .unwrap_or(2)
        })
        .sum()
}

/// Rule-based career suggestions: each flavour of skill present unlocks a
/// fixed block of three paths; a generic block covers profiles that match
/// nothing.
pub fn suggest_career_paths(skills: &HashSet<String>) -> Vec<CareerPath> {
    let lowered: Vec<String> = skills.iter().map(|s| s.to_lowercase()).collect();

    let has_technical = lowered
        .iter()
        .any(|s| taxonomy::CAREER_TECHNICAL_TRIGGERS.contains(&s.as_str()));
    let has_management = lowered
        .iter()
        .any(|s| s.contains("leadership") || s.contains("management"));
    let has_creative = lowered
        .iter()
        .any(|s| s.contains("design") || s.contains("creative") || s.contains("ui") || s.contains("ux"));
    let has_data = lowered
        .iter()
        .any(|s| s.contains("data") || s.contains("analytics") || s.contains("machine learning"));

    let mut paths = Vec::new();

    if has_technical {
        paths.push(path("Technical Lead", 5, 15, "Lead technical teams and architecture decisions"));
        paths.push(path("Solutions Architect", 4, 12, "Design and oversee complex technical solutions"));
        paths.push(path("Engineering Manager", 4, 10, "Manage engineering teams and drive technical strategy"));
    }
    if has_management {
        paths.push(path("Project Manager", 4, 10, "Manage project timelines and team coordination"));
        paths.push(path("Product Manager", 5, 18, "Drive product strategy and development"));
        paths.push(path("Program Manager", 3, 12, "Oversee multiple related projects and initiatives"));
    }
    if has_creative {
        paths.push(path("Creative Director", 3, 8, "Lead creative vision and design strategy"));
        paths.push(path("UX Lead", 4, 15, "Guide user experience design and research"));
        paths.push(path("Art Director", 3, 10, "Direct visual design and creative projects"));
    }
    if has_data {
        paths.push(path("Data Scientist", 5, 20, "Analyze complex data and build predictive models"));
        paths.push(path("Data Engineer", 4, 18, "Build and maintain data infrastructure"));
        paths.push(path("ML Engineer", 5, 25, "Develop and deploy machine learning models"));
    }

    if paths.is_empty() {
        paths.push(path("Senior Specialist", 4, 10, "Advance in your current field with deeper expertise"));
        paths.push(path("Team Lead", 3, 8, "Move into leadership and mentoring roles"));
        paths.push(path("Consultant", 3, 12, "Provide expert advice in your domain"));
    }

    paths
}

#[cfg(test)]
mod tests {
    use super::*;

    fn skill_set(skills: &[&str]) -> HashSet<String> {
        skills.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_categorize_skills_buckets() {
        let categories =
            categorize_skills(&skill_set(&["python", "leadership", "machine learning", "qgis"]));
        assert_eq!(categories.technical, vec!["python"]);
        assert_eq!(categories.soft, vec!["leadership"]);
        // Known domain skill and unknown skill both land in Domain.
        assert_eq!(categories.domain, vec!["machine learning", "qgis"]);
    }

    #[test]
    fn test_categorize_substring_matching() {
        // "reactjs" matches technical via the "react" substring.
        let categories = categorize_skills(&skill_set(&["reactjs"]));
        assert_eq!(categories.technical, vec!["reactjs"]);
    }

    #[test]
    fn test_experience_years_parses_mentions() {
        let experience = vec![
            ExperienceEntry {
                description: "5 years building backend services".to_string(),
            },
            ExperienceEntry {
                description: "platform work at acme".to_string(),
            },
        ];
        assert_eq!(experience_years(&experience), 7);
    }

    #[test]
    fn test_experience_years_defaults_per_entry() {
        let experience = vec![
            ExperienceEntry { description: "role one".to_string() },
            ExperienceEntry { description: "role two".to_string() },
            ExperienceEntry { description: "role three".to_string() },
        ];
        assert_eq!(experience_years(&experience), 6);
        assert_eq!(experience_years(&[]), 0);
    }

    #[test]
    fn test_career_paths_technical_trigger() {
        let paths = suggest_career_paths(&skill_set(&["python", "sql"]));
        assert_eq!(paths.len(), 3);
        assert_eq!(paths[0].role, "Technical Lead");
        assert_eq!(paths[0].demand, 5);
        assert_eq!(paths[0].growth, 15);
    }

    #[test]
    fn test_career_paths_stack_per_category() {
        let paths = suggest_career_paths(&skill_set(&["python", "leadership", "ui design", "data analytics"]));
        // technical + management + creative + data = 12 suggestions.
        assert_eq!(paths.len(), 12);
        assert_eq!(paths[3].role, "Project Manager");
        assert_eq!(paths[9].role, "Data Scientist");
    }

    #[test]
    fn test_career_paths_generic_fallback() {
        let paths = suggest_career_paths(&skill_set(&["carpentry"]));
        assert_eq!(paths.len(), 3);
        assert_eq!(paths[0].role, "Senior Specialist");
    }
}
