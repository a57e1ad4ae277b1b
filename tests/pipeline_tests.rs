//! End-to-end tests: raw resume text through extraction, ATS scoring, and
//! job ranking against the built-in catalog, lexical-only.

use resume_matcher::matching::{categorize_skills, experience_years, suggest_career_paths};
use resume_matcher::{Config, Extractor, Matcher};
use std::collections::HashSet;

const SAMPLE_RESUME: &str = include_str!("fixtures/sample_resume.txt");

fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

fn pipeline() -> (Extractor, Matcher) {
    init_logging();
    let extractor = Extractor::new().expect("extractor construction");
    let matcher = Matcher::new(&Config::default());
    (extractor, matcher)
}

#[test]
fn extracts_full_profile_from_sample_resume() {
    let (extractor, _) = pipeline();
    let profile = extractor.extract(SAMPLE_RESUME);

    assert_eq!(profile.name, "John Doe");
    assert_eq!(profile.email, "john.doe@example.com");
    assert_eq!(profile.phone, "+91-9876543210");
    assert_eq!(profile.linkedin, "linkedin.com/in/john-doe");
    assert!(profile.summary.contains("devops engineer"));

    for skill in ["python", "aws", "docker", "kubernetes", "jenkins", "terraform", "linux"] {
        assert!(profile.skills.contains(skill), "missing {}", skill);
    }

    assert_eq!(profile.experience.len(), 2);
    assert!(profile.experience[0].description.contains("acme corp"));
    assert_eq!(profile.education[0].degree, "B.TECH");
    assert!(profile
        .certifications
        .iter()
        .any(|c| c.contains("aws solutions architect")));
    assert_eq!(profile.languages, vec!["English", "Hindi"]);
}

#[test]
fn ats_report_for_sample_resume() {
    let (extractor, matcher) = pipeline();
    let profile = extractor.extract(SAMPLE_RESUME);
    let report = matcher.ats_score(&profile, None);

    // 13 distinct taxonomy skills land in the 10..15 keyword band.
    assert_eq!(report.keywords_score, 85);
    // Summary, experience, education, email, and phone all present.
    assert_eq!(report.format_score, 95);
    // Two detailed entries.
    assert_eq!(report.experience_score, 85);
    // B.TECH matches the "b." degree tier.
    assert_eq!(report.education_score, 85);
    assert_eq!(report.score, 87);
    assert_eq!(report.grade, "Good - Minor improvements needed");
    assert!(report.missing_keywords.len() <= 10);
    assert!(report.recommendations.len() <= 5);
}

#[test]
fn ranking_favors_matching_jobs() {
    let (extractor, matcher) = pipeline();
    let profile = extractor.extract(SAMPLE_RESUME);
    let ranked = matcher.rank(&profile, None);

    assert!(!ranked.is_empty());
    // Both fully-covered postings hit the lexical cap; the tie keeps
    // catalog order.
    assert_eq!(ranked[0].job.id, 1);
    assert_eq!(ranked[0].match_score, 70);
    assert_eq!(ranked[1].job.id, 4);
    assert_eq!(ranked[1].match_score, 70);
    assert!(ranked[1].matched_skills.contains(&"terraform".to_string()));

    let scores: Vec<u32> = ranked.iter().map(|j| j.match_score).collect();
    let mut sorted = scores.clone();
    sorted.sort_unstable_by(|a, b| b.cmp(a));
    assert_eq!(scores, sorted);
    assert!(scores.iter().all(|s| *s >= 10));
}

#[test]
fn score_and_rank_returns_both_outputs() {
    let (extractor, matcher) = pipeline();
    let profile = extractor.extract(SAMPLE_RESUME);
    let (report, jobs) = matcher.score_and_rank(&profile, Some("Technical"), None);

    assert!(report.score > 0);
    // Technical keywords the profile lacks, in list order.
    assert!(report.missing_keywords.contains(&"java".to_string()));
    assert!(!jobs.is_empty());
}

#[test]
fn outputs_serialize_to_json() {
    let (extractor, matcher) = pipeline();
    let profile = extractor.extract(SAMPLE_RESUME);
    let (report, jobs) = matcher.score_and_rank(&profile, None, None);

    let profile_json = serde_json::to_value(&profile).unwrap();
    assert_eq!(profile_json["name"], "John Doe");

    let report_json = serde_json::to_value(&report).unwrap();
    assert!(report_json["score"].is_u64());
    assert!(report_json["recommendations"].is_array());

    // ScoredJob flattens the posting, with the employment type under
    // "type" for the HTTP layer.
    let jobs_json = serde_json::to_value(&jobs).unwrap();
    assert!(jobs_json[0]["match_score"].is_u64());
    assert!(jobs_json[0]["type"].is_string());
    assert!(jobs_json[0]["title"].is_string());
}

#[test]
fn extraction_is_case_insensitive_for_skills() {
    let (extractor, _) = pipeline();
    let lower = extractor.extract(SAMPLE_RESUME);
    let upper = extractor.extract(&SAMPLE_RESUME.to_uppercase());
    assert_eq!(lower.skills, upper.skills);
}

#[test]
fn lexical_ranking_is_stable_across_calls() {
    let (extractor, matcher) = pipeline();
    let profile = extractor.extract(SAMPLE_RESUME);

    let first: Vec<(u32, u32)> = matcher
        .rank(&profile, None)
        .iter()
        .map(|j| (j.job.id, j.match_score))
        .collect();
    let second: Vec<(u32, u32)> = matcher
        .rank(&profile, None)
        .iter()
        .map(|j| (j.job.id, j.match_score))
        .collect();
    assert_eq!(first, second);
}

#[test]
fn preference_filter_penalizes_without_excluding() {
    let (extractor, matcher) = pipeline();
    let profile = extractor.extract(SAMPLE_RESUME);

    let preferences: HashSet<String> = ["Remote".to_string()].into_iter().collect();
    let unfiltered = matcher.rank(&profile, None);
    let filtered = matcher.rank(&profile, Some(&preferences));

    let full_time_before = unfiltered.iter().find(|j| j.job.id == 1).unwrap();
    let full_time_after = filtered.iter().find(|j| j.job.id == 1).unwrap();
    assert!(full_time_after.match_score < full_time_before.match_score);
}

#[test]
fn career_auxiliaries_through_public_api() {
    let (extractor, _) = pipeline();
    let profile = extractor.extract(SAMPLE_RESUME);

    let categories = categorize_skills(&profile.skills);
    assert!(categories.technical.contains(&"python".to_string()));
    assert!(categories.soft.contains(&"leadership".to_string()));

    // First entry carries no "N years" mention (estimated at 2), the
    // second says "3 years".
    assert_eq!(experience_years(&profile.experience), 5);

    let paths = suggest_career_paths(&profile.skills);
    assert!(paths.iter().any(|p| p.role == "Technical Lead"));
}

#[test]
fn empty_input_degrades_gracefully_end_to_end() {
    let (extractor, matcher) = pipeline();
    let profile = extractor.extract("");
    let (report, _jobs) = matcher.score_and_rank(&profile, None, None);

    assert_eq!(profile.languages, vec!["English"]);
    assert_eq!(report.grade, "Needs significant improvement");
    assert_eq!(report.keywords_score, 30);
}
