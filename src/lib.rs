//! Resume extraction, ATS scoring, and job ranking core.
//!
//! Two components evaluated in sequence per request: the [`Extractor`]
//! turns raw resume text into a [`StructuredProfile`], and the [`Matcher`]
//! turns that profile into an ATS quality report plus a ranked job list.
//! Document decoding, persistence, and the HTTP surface live in external
//! collaborators; this crate only ever sees plain text and hands back
//! JSON-serializable structures.
//!
//! ```
//! use resume_matcher::{Config, Extractor, Matcher};
//!
//! let extractor = Extractor::new().unwrap();
//! let matcher = Matcher::new(&Config::default());
//!
//! let profile = extractor.extract("jane smith\nskills\npython, aws, docker");
//! let (report, jobs) = matcher.score_and_rank(&profile, None, None);
//! assert!(report.score <= 100);
//! assert!(jobs.iter().all(|job| job.match_score >= 10));
//! ```

pub mod config;
pub mod error;
pub mod extract;
pub mod matching;
pub mod taxonomy;

pub use config::Config;
pub use error::{MatcherError, Result};
pub use extract::{EducationEntry, ExperienceEntry, Extractor, StructuredProfile};
pub use matching::{
    builtin_catalog, AtsReport, CareerPath, JobPosting, Matcher, ScoredJob, SkillCategories,
};
