//! Job postings and the built-in catalog used as the ranking corpus.

use serde::{Deserialize, Serialize};

/// One catalog entry. Immutable for the process lifetime once built.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JobPosting {
    pub id: u32,
    pub title: String,
    pub company: String,
    pub description: String,
    /// Lowercase skill requirements.
    pub skills: Vec<String>,
    /// Free-text experience requirement, e.g. "3+ years".
    pub experience: String,
    pub location: String,
    pub salary: String,
    #[serde(rename = "type")]
    pub job_type: String,
}

fn posting(
    id: u32,
    title: &str,
    company: &str,
    description: &str,
    skills: &[&str],
    experience: &str,
    location: &str,
    salary: &str,
    job_type: &str,
) -> JobPosting {
    JobPosting {
        id,
        title: title.to_string(),
        company: company.to_string(),
        description: description.to_string(),
        skills: skills.iter().map(|s| s.to_string()).collect(),
        experience: experience.to_string(),
        location: location.to_string(),
        salary: salary.to_string(),
        job_type: job_type.to_string(),
    }
}

/// The static in-memory job catalog of the reference deployment.
pub fn builtin_catalog() -> Vec<JobPosting> {
    vec![
        posting(
            1,
            "Senior Software Engineer",
            "Google",
            "Looking for experienced software engineer with Python, Java, and cloud expertise",
            &["python", "java", "aws", "docker", "kubernetes"],
            "5+ years",
            "Bengaluru",
            "₹32 LPA",
            "Full-time",
        ),
        posting(
            2,
            "Data Scientist",
            "Netflix",
            "Data scientist with ML, Python, and statistical analysis skills",
            &["python", "machine learning", "statistics", "sql", "tensorflow"],
            "3+ years",
            "Mumbai",
            "₹45 LPA",
            "Full-time",
        ),
        posting(
            3,
            "Product Manager",
            "Zomato",
            "Product manager with agile experience and technical background",
            &["agile", "scrum", "product strategy", "roadmap planning", "stakeholder management"],
            "4+ years",
            "Gurugram",
            "₹18 LPA",
            "Remote",
        ),
        posting(
            4,
            "DevOps Engineer",
            "Tesla",
            "DevOps engineer with CI/CD, containerization, and cloud experience",
            &["docker", "kubernetes", "jenkins", "aws", "terraform", "linux"],
            "3+ years",
            "Remote",
            "₹28 LPA",
            "Hybrid",
        ),
        posting(
            5,
            "Frontend Developer",
            "Adobe",
            "Frontend developer with React, TypeScript, and modern CSS",
            &["react", "typescript", "javascript", "html", "css", "redux"],
            "2+ years",
            "Noida",
            "₹22 LPA",
            "On-site",
        ),
        posting(
            6,
            "Backend Developer",
            "Microsoft",
            "Backend developer with Node.js, databases, and microservices",
            &["nodejs", "express", "mongodb", "postgresql", "microservices", "rest api"],
            "3+ years",
            "Hyderabad",
            "₹35 LPA",
            "Full-time",
        ),
        posting(
            7,
            "Mobile App Developer",
            "Swiggy",
            "Mobile developer with Flutter, React Native or native development",
            &["flutter", "dart", "react native", "android", "ios", "firebase"],
            "2+ years",
            "Bengaluru",
            "₹20 LPA",
            "Full-time",
        ),
        posting(
            8,
            "UI/UX Designer",
            "Figma",
            "Designer with strong UI/UX skills and prototyping experience",
            &["figma", "sketch", "adobe xd", "prototyping", "user research", "wireframing"],
            "2+ years",
            "Remote",
            "₹18 LPA",
            "Remote",
        ),
        posting(
            9,
            "Cybersecurity Analyst",
            "Cisco",
            "Cybersecurity analyst with experience in threat detection, penetration testing, and security protocols",
            &["cybersecurity", "penetration testing", "network security", "ethical hacking", "siem", "firewall"],
            "3+ years",
            "Bengaluru",
            "₹30 LPA",
            "Full-time",
        ),
        posting(
            10,
            "Information Security Engineer",
            "IBM",
            "Security engineer specializing in vulnerability assessment and security architecture",
            &["cybersecurity", "vulnerability assessment", "security architecture", "compliance", "incident response"],
            "4+ years",
            "Pune",
            "₹35 LPA",
            "Full-time",
        ),
        posting(
            11,
            "Cloud Security Specialist",
            "Amazon",
            "Cloud security specialist with AWS/Azure security expertise",
            &["cloud security", "aws security", "azure security", "iam", "encryption", "compliance"],
            "3+ years",
            "Hyderabad",
            "₹38 LPA",
            "Full-time",
        ),
        posting(
            12,
            "Full Stack Developer",
            "Flipkart",
            "Full stack developer with expertise in MERN/MEAN stack",
            &["react", "nodejs", "mongodb", "express", "javascript", "typescript", "rest api"],
            "3+ years",
            "Bengaluru",
            "₹25 LPA",
            "Full-time",
        ),
        posting(
            13,
            "AI/ML Engineer",
            "OpenAI",
            "AI/ML engineer working on deep learning and NLP projects",
            &["machine learning", "deep learning", "python", "tensorflow", "pytorch", "nlp", "computer vision"],
            "4+ years",
            "Remote",
            "₹50 LPA",
            "Remote",
        ),
        posting(
            14,
            "Blockchain Developer",
            "Coinbase",
            "Blockchain developer with smart contract and DApp development experience",
            &["blockchain", "solidity", "ethereum", "smart contracts", "web3", "cryptocurrency"],
            "2+ years",
            "Remote",
            "₹40 LPA",
            "Remote",
        ),
        posting(
            15,
            "QA Automation Engineer",
            "Salesforce",
            "QA automation engineer with Selenium, API testing experience",
            &["selenium", "automation testing", "api testing", "python", "java", "ci/cd", "jenkins"],
            "3+ years",
            "Hyderabad",
            "₹22 LPA",
            "Full-time",
        ),
        posting(
            16,
            "Python Developer",
            "TechCorp",
            "Backend developer focused on Python applications and APIs",
            &["python", "django", "flask", "rest api", "sql"],
            "1+ years",
            "Remote",
            "₹12 LPA",
            "Full-time",
        ),
        posting(
            17,
            "Java Developer",
            "EnterpriseSoft",
            "Java developer experienced with Spring and backend systems",
            &["java", "spring", "maven", "sql"],
            "2+ years",
            "Pune",
            "₹14 LPA",
            "Full-time",
        ),
        posting(
            18,
            "C Developer",
            "EmbeddedSystems Inc",
            "Developer for embedded C projects and low-level systems",
            &["c", "embedded", "rtos", "firmware"],
            "2+ years",
            "Chennai",
            "₹11 LPA",
            "On-site",
        ),
        posting(
            19,
            "C++ Developer",
            "GraphicsLabs",
            "C++ developer for high-performance and systems programming",
            &["c++", "stl", "multithreading", "performance"],
            "2+ years",
            "Bengaluru",
            "₹16 LPA",
            "Full-time",
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_catalog_size_and_unique_ids() {
        let catalog = builtin_catalog();
        assert_eq!(catalog.len(), 19);
        let ids: HashSet<u32> = catalog.iter().map(|job| job.id).collect();
        assert_eq!(ids.len(), catalog.len());
    }

    #[test]
    fn test_catalog_skills_are_lowercase() {
        for job in builtin_catalog() {
            for skill in &job.skills {
                assert_eq!(skill, &skill.to_lowercase());
            }
        }
    }

    #[test]
    fn test_job_type_serializes_as_type() {
        let job = &builtin_catalog()[0];
        let value = serde_json::to_value(job).unwrap();
        assert_eq!(value["type"], "Full-time");
        assert!(value.get("job_type").is_none());
    }
}
