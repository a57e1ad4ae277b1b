//! Hybrid lexical + semantic job ranking.

use crate::config::ScoringConfig;
use crate::extract::StructuredProfile;
use crate::matching::catalog::JobPosting;
use crate::matching::semantic::SimilarityProvider;
use crate::taxonomy;
use log::debug;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// A catalog entry scored against one profile. Built fresh per request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScoredJob {
    #[serde(flatten)]
    pub job: JobPosting,
    /// Blended score, 0-100.
    pub match_score: u32,
    /// Skills present in both the profile and the posting, in posting
    /// order.
    pub matched_skills: Vec<String>,
}

pub(crate) fn rank(
    profile: &StructuredProfile,
    catalog: &[JobPosting],
    preferences: Option<&HashSet<String>>,
    provider: &dyn SimilarityProvider,
    scoring: &ScoringConfig,
) -> Vec<ScoredJob> {
    let (resume_skills, resume_text) = resume_features(profile);
    debug!(
        "ranking {} jobs against {} resume skills",
        catalog.len(),
        resume_skills.len()
    );

    let mut scored: Vec<(i64, ScoredJob)> = catalog
        .iter()
        .map(|job| {
            let score = score_job(job, &resume_skills, &resume_text, preferences, provider, scoring);
            let matched_skills = job
                .skills
                .iter()
                .filter(|skill| resume_skills.contains(skill.as_str()))
                .cloned()
                .collect();
            (
                score,
                ScoredJob {
                    job: job.clone(),
                    match_score: score.max(0) as u32,
                    matched_skills,
                },
            )
        })
        .collect();

    // Stable sort: catalog insertion order breaks ties deterministically.
    scored.sort_by(|a, b| b.0.cmp(&a.0));
    scored
        .into_iter()
        .filter(|(score, _)| *score >= scoring.min_match_score)
        .map(|(_, job)| job)
        .collect()
}

/// Profile skill set plus the concatenated lexical fallback text.
///
/// The text folds in summary, experience descriptions, the skill set, and
/// the caller-attached filename and raw text, so resumes without an
/// explicit skills heading still carry signal. When no skills parsed at
/// all, a short programming-language scan over that text seeds the set.
fn resume_features(profile: &StructuredProfile) -> (HashSet<String>, String) {
    let mut parts: Vec<&str> = Vec::new();
    parts.push(&profile.summary);
    for entry in &profile.experience {
        parts.push(&entry.description);
    }

    let skills_joined = profile
        .skills
        .iter()
        .map(String::as_str)
        .collect::<Vec<_>>()
        .join(" ");
    let resume_text = format!(
        "{} {} {} {}",
        parts.join(" "),
        skills_joined,
        profile.filename,
        profile.raw_text
    )
    .to_lowercase();

    let mut resume_skills: HashSet<String> =
        profile.skills.iter().map(|s| s.to_lowercase()).collect();

    if resume_skills.is_empty() {
        for keyword in taxonomy::FALLBACK_SCAN_KEYWORDS {
            if resume_text.contains(keyword) {
                resume_skills.insert(keyword.to_string());
            }
        }
    }

    // c++ resumes also match postings that spell it cpp.
    if resume_skills.contains("c++") && !resume_skills.contains("cpp") {
        resume_skills.insert("cpp".to_string());
    }

    (resume_skills, resume_text)
}

fn score_job(
    job: &JobPosting,
    resume_skills: &HashSet<String>,
    resume_text: &str,
    preferences: Option<&HashSet<String>>,
    provider: &dyn SimilarityProvider,
    scoring: &ScoringConfig,
) -> i64 {
    let total_skills = job.skills.len();

    // Exact set intersection, plus a half-weighted count of job skills
    // that merely appear somewhere in the resume text. The double count
    // against the intersection is intentional: substring presence is a
    // weaker, separately weighted signal.
    let skill_score = if total_skills > 0 {
        let exact = job
            .skills
            .iter()
            .filter(|skill| resume_skills.contains(skill.as_str()))
            .count();
        let substring_hits = job
            .skills
            .iter()
            .filter(|skill| resume_text.contains(skill.as_str()))
            .count();
        let raw = (exact as f32 + 0.5 * substring_hits as f32) / total_skills as f32 * 100.0;
        raw.min(100.0)
    } else {
        0.0
    };

    let job_text = format!(
        "{} {} {}",
        job.title,
        job.description,
        job.skills.join(" ")
    )
    .to_lowercase();
    let semantic_score = provider.similarity(resume_text, &job_text) * 100.0;

    let mut final_score = skill_score * scoring.skill_blend_weight
        + semantic_score * scoring.semantic_blend_weight;

    if let Some(preferred) = preferences {
        if !preferred.contains(&job.job_type) {
            final_score *= scoring.preference_penalty;
        }
    }

    final_score.round() as i64
}
