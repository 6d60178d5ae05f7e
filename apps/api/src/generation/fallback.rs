//! Fallback Generator: deterministic stand-in results, no I/O.
//!
//! Output depends only on the task, the region's formats and a few echoed
//! fields (name, email, headline, target). Each template satisfies the same
//! required-key contract the normalizer enforces.

use serde_json::{json, Value};

use crate::generation::prompt_builder::{DEFAULT_HEADLINE, DEFAULT_TARGET_ROLE};
use crate::generation::region::RegionProfile;
use crate::generation::task::{non_blank, GenerationRequest, TaskKind};

pub fn fallback_result(request: &GenerationRequest, region: &RegionProfile) -> Value {
    match request.task {
        TaskKind::Resume => fallback_resume(request, region),
        TaskKind::ProfileOptimization => fallback_profile_optimization(request),
        TaskKind::NetworkingSuggestions => fallback_networking(request, region),
        TaskKind::ConnectionMessage => fallback_connection_messages(request),
    }
}

fn fallback_resume(request: &GenerationRequest, region: &RegionProfile) -> Value {
    let profile = &request.profile;
    json!({
        "contact": {
            "name": non_blank(&profile.full_name).unwrap_or("Student Name"),
            "email": non_blank(&profile.email).unwrap_or("student@example.com"),
            "phone": region.phone_format,
            "linkedin": "https://linkedin.com/in/profile",
            "location": region.location_format,
        },
        "summary": "Motivated Computer Science student with passion for technology and problem-solving. \
                    Seeking opportunities to apply academic knowledge in real-world projects.",
        "education": [{
            "institution": "University Name",
            "degree": "Bachelor of Technology",
            "field": "Computer Science Engineering",
            "duration": "2021 - 2025",
            "gpa": "8.0/10",
        }],
        "experience": [],
        "skills": {
            "technical": ["JavaScript", "Python", "Java", "HTML/CSS", "Git"],
            "soft": ["Problem Solving", "Team Collaboration", "Communication"],
        },
        "projects": [],
        "certifications": [],
    })
}

fn fallback_profile_optimization(request: &GenerationRequest) -> Value {
    let profile = &request.profile;
    let target_role = non_blank(&profile.target_role).unwrap_or(DEFAULT_TARGET_ROLE);
    json!({
        "profileScore": 60,
        "headline": {
            "current": non_blank(&profile.headline).unwrap_or("Student"),
            "improved": format!("{DEFAULT_HEADLINE} | Full Stack Developer | Seeking {target_role} Opportunities"),
            "reason": "Added specific skills and career intent",
        },
        "summary": {
            "issues": ["Too generic", "No achievements mentioned"],
            "improved": "Passionate Computer Science student with hands-on experience in web development. \
                         Built multiple projects using modern technologies. Seeking software development opportunities.",
            "tips": ["Add specific technologies", "Include project achievements", "Mention career goals"],
        },
        "skills": {
            "missingSkills": ["React", "Node.js", "MongoDB", "AWS"],
            "skillsToHighlight": ["JavaScript", "Problem Solving"],
        },
        "quickWins": [
            "Add professional photo",
            "Update headline with target role",
            "Get recommendations from professors",
        ],
    })
}

fn fallback_networking(request: &GenerationRequest, region: &RegionProfile) -> Value {
    let target_role = non_blank(&request.profile.target_role).unwrap_or(DEFAULT_TARGET_ROLE);
    let companies: Vec<Value> = region
        .companies
        .iter()
        .take(2)
        .map(|name| {
            json!({
                "name": name,
                "role": target_role,
                "why": "Structured graduate programs and mentoring for freshers",
                "approach": "Highlight academic projects and learning attitude",
            })
        })
        .collect();

    json!({
        "targetCompanies": companies,
        "connectionMessages": [{
            "type": "General",
            "template": "Hi [Name], I'm a Computer Science student interested in learning about the industry. Would love to connect!",
            "personalization": "Mention their current role or company",
        }],
        "communities": ["Local developer groups", "College alumni networks"],
    })
}

fn fallback_connection_messages(request: &GenerationRequest) -> Value {
    let recipient = request
        .options
        .target
        .as_ref()
        .map(|t| t.name.trim())
        .filter(|n| !n.is_empty())
        .unwrap_or("[Name]");
    let company = request
        .options
        .target
        .as_ref()
        .and_then(|t| non_blank(&t.company))
        .unwrap_or("[Company]");
    let text = format!(
        "Hi {recipient}, I'm a CS student interested in your work at {company}. Would love to connect and learn!"
    );
    let length = text.chars().count();

    json!({
        "messages": [{
            "type": "Professional",
            "text": text,
            "length": length,
        }],
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generation::normalizer::check_shape;
    use crate::generation::task::{ConnectionTarget, ProfileInput};

    fn request(task: TaskKind) -> GenerationRequest {
        GenerationRequest::new(task, ProfileInput::default())
    }

    #[test]
    fn test_every_fallback_satisfies_its_shape_contract() {
        let region = RegionProfile::global();
        for task in TaskKind::ALL {
            let value = fallback_result(&request(task), region);
            let object = value.as_object().expect("fallback must be an object");
            check_shape(task, object).unwrap_or_else(|e| panic!("{task:?}: {e}"));
        }
    }

    #[test]
    fn test_resume_fallback_echoes_name_and_uses_region_phone() {
        let profile = ProfileInput {
            full_name: Some("Asha Rao".to_string()),
            ..Default::default()
        };
        let value = fallback_result(
            &GenerationRequest::new(TaskKind::Resume, profile),
            RegionProfile::resolve(Some("IN")),
        );
        assert_eq!(value["contact"]["name"], "Asha Rao");
        assert!(value["contact"]["phone"].as_str().unwrap().starts_with("+91"));
        assert_eq!(value["contact"]["location"], "City, State, India");
        assert!(!value["summary"].as_str().unwrap().is_empty());
    }

    #[test]
    fn test_resume_fallback_placeholder_name_when_missing() {
        let value = fallback_result(&request(TaskKind::Resume), RegionProfile::global());
        assert_eq!(value["contact"]["name"], "Student Name");
    }

    #[test]
    fn test_profile_score_is_numeric() {
        let value = fallback_result(
            &request(TaskKind::ProfileOptimization),
            RegionProfile::global(),
        );
        assert_eq!(value["profileScore"].as_u64(), Some(60));
    }

    #[test]
    fn test_networking_fallback_uses_regional_companies() {
        let value = fallback_result(
            &request(TaskKind::NetworkingSuggestions),
            RegionProfile::resolve(Some("IN")),
        );
        let companies = value["targetCompanies"].as_array().unwrap();
        assert_eq!(companies.len(), 2);
        assert_eq!(companies[0]["name"], "TCS");
    }

    #[test]
    fn test_connection_message_length_matches_text() {
        let request = GenerationRequest::connection_message(
            ProfileInput::default(),
            ConnectionTarget {
                name: "Meera".to_string(),
                role: None,
                company: Some("Razorpay".to_string()),
            },
            None,
        );
        let value = fallback_result(&request, RegionProfile::global());
        let message = &value["messages"][0];
        let text = message["text"].as_str().unwrap();
        assert!(text.starts_with("Hi Meera,"));
        assert!(text.contains("Razorpay"));
        assert_eq!(message["length"].as_u64(), Some(text.chars().count() as u64));
        assert!(text.chars().count() <= 300);
    }

    #[test]
    fn test_fallback_is_deterministic() {
        let region = RegionProfile::resolve(Some("US"));
        for task in TaskKind::ALL {
            let a = serde_json::to_string(&fallback_result(&request(task), region)).unwrap();
            let b = serde_json::to_string(&fallback_result(&request(task), region)).unwrap();
            assert_eq!(a, b);
        }
    }
}
