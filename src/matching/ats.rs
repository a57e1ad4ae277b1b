//! ATS-style quality scoring.
//!
//! Four sub-scores blended by fixed weights, a qualitative grade band,
//! missing industry keywords, and capped improvement recommendations. All
//! of it is deterministic and total: an empty profile scores the bottom
//! bands instead of failing.

use crate::config::ScoringConfig;
use crate::extract::StructuredProfile;
use crate::taxonomy;
use serde::{Deserialize, Serialize};

const MAX_MISSING_KEYWORDS: usize = 10;
const MAX_RECOMMENDATIONS: usize = 5;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AtsReport {
    /// Weighted total, rounded to the nearest integer.
    pub score: u32,
    pub grade: String,
    pub keywords_score: u32,
    pub format_score: u32,
    pub experience_score: u32,
    pub education_score: u32,
    /// Up to 10, in industry-list order.
    pub missing_keywords: Vec<String>,
    /// Up to 5, in generation order.
    pub recommendations: Vec<String>,
}

pub(crate) fn score(
    profile: &StructuredProfile,
    category: &str,
    scoring: &ScoringConfig,
) -> AtsReport {
    let keywords_score = scoring.keyword_score(profile.skills.len());
    let format_score = format_score(profile);
    let experience_score = experience_score(profile);
    let education_score = education_score(profile);

    let total = keywords_score * scoring.keywords_weight
        + format_score * scoring.formatting_weight
        + experience_score * scoring.experience_weight
        + education_score * scoring.education_weight;

    AtsReport {
        score: total.round() as u32,
        grade: grade(total).to_string(),
        keywords_score: keywords_score.round() as u32,
        format_score: format_score.round() as u32,
        experience_score: experience_score.round() as u32,
        education_score: education_score.round() as u32,
        missing_keywords: missing_keywords(profile, category),
        recommendations: recommendations(profile, keywords_score, format_score, experience_score),
    }
}

/// Base 70, +5 for each of: summary, experience, education, valid email,
/// valid phone. Capped at 100.
fn format_score(profile: &StructuredProfile) -> f32 {
    let mut score: f32 = 70.0;
    if !profile.summary.is_empty() {
        score += 5.0;
    }
    if !profile.experience.is_empty() {
        score += 5.0;
    }
    if !profile.education.is_empty() {
        score += 5.0;
    }
    if profile.has_email() {
        score += 5.0;
    }
    if profile.has_phone() {
        score += 5.0;
    }
    score.min(100.0)
}

/// Entry-count base plus a bonus for any substantive description. The
/// empty-list branch is kept for parity with the upstream behavior even
/// though the extractor always substitutes a placeholder entry.
fn experience_score(profile: &StructuredProfile) -> f32 {
    if profile.experience.is_empty() {
        return 30.0;
    }
    let mut score: f32 = match profile.experience.len() {
        n if n >= 3 => 80.0,
        2 => 70.0,
        _ => 60.0,
    };
    let has_detail = profile
        .experience
        .iter()
        .any(|entry| entry.description.chars().count() > 50);
    if has_detail {
        score += 15.0;
    }
    score.min(100.0)
}

/// Degree-level score over the concatenated degree text,
/// case-insensitive, first match wins: PhD beats Master beats Bachelor.
fn education_score(profile: &StructuredProfile) -> f32 {
    let degree_text = profile
        .education
        .iter()
        .map(|entry| entry.degree.to_lowercase())
        .collect::<Vec<_>>()
        .join(" ");

    if degree_text.contains("phd") || degree_text.contains("doctor") {
        95.0
    } else if degree_text.contains("master") || degree_text.contains("m.") {
        90.0
    } else if degree_text.contains("bachelor") || degree_text.contains("b.") {
        85.0
    } else {
        70.0
    }
}

/// Grade bands on the unrounded total: [90,100] / [75,90) / [60,75) / rest.
fn grade(total: f32) -> &'static str {
    if total >= 90.0 {
        "Excellent! Your resume is highly optimized"
    } else if total >= 75.0 {
        "Good - Minor improvements needed"
    } else if total >= 60.0 {
        "Average - Several improvements recommended"
    } else {
        "Needs significant improvement"
    }
}

fn missing_keywords(profile: &StructuredProfile, category: &str) -> Vec<String> {
    taxonomy::industry_keywords(category)
        .iter()
        .filter(|keyword| !profile.skills.contains(**keyword))
        .take(MAX_MISSING_KEYWORDS)
        .map(|keyword| keyword.to_string())
        .collect()
}

fn recommendations(
    profile: &StructuredProfile,
    keywords_score: f32,
    format_score: f32,
    experience_score: f32,
) -> Vec<String> {
    let mut recommendations = Vec::new();

    if keywords_score < 70.0 {
        recommendations.push("Add more industry-specific keywords and skills".to_string());
        recommendations.push("Include both technical and soft skills".to_string());
        recommendations
            .push("Use action verbs like 'developed', 'implemented', 'led'".to_string());
    }
    if format_score < 70.0 {
        recommendations.push("Improve resume formatting with clear sections".to_string());
        recommendations.push("Ensure contact information is prominently displayed".to_string());
        recommendations.push("Use bullet points for better readability".to_string());
        recommendations.push("Keep consistent font sizes and styles".to_string());
    }
    if experience_score < 70.0 {
        recommendations.push("Add more quantifiable achievements in experience".to_string());
        recommendations.push(
            "Include specific metrics and results (e.g., 'increased sales by 20%')".to_string(),
        );
        recommendations.push("Use action verbs to describe responsibilities".to_string());
        recommendations.push("Focus on accomplishments rather than just duties".to_string());
    }
    if profile.summary.is_empty() {
        recommendations.push("Add a professional summary at the top".to_string());
    }
    if profile.skills.len() < 10 {
        recommendations.push("Expand skills section with more relevant technologies".to_string());
    }

    recommendations.truncate(MAX_RECOMMENDATIONS);
    recommendations
}
