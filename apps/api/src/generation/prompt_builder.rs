//! Prompt Builder: renders one natural-language prompt per task.
//!
//! User data is embedded verbatim (the consumer is a model, not a shell).
//! Missing optional fields become a placeholder string or an empty JSON
//! container so the rendered prompt never has holes. Every template ends with
//! an explicit example of the JSON shape the normalizer expects back.

use serde_json::Value;

use crate::generation::prompts::{
    CONNECTION_MESSAGE_PROMPT_TEMPLATE, JSON_ONLY_INSTRUCTION, NETWORKING_PROMPT_TEMPLATE,
    PROFILE_OPTIMIZATION_PROMPT_TEMPLATE, RESUME_PROMPT_TEMPLATE,
};
use crate::generation::region::RegionProfile;
use crate::generation::task::{non_blank, GenerationRequest, ProfileInput, TaskKind};

pub const DEFAULT_TARGET_ROLE: &str = "Software Developer";
pub const DEFAULT_HEADLINE: &str = "Computer Science Student";
pub const DEFAULT_INDUSTRY: &str = "Technology";
const NOT_PROVIDED: &str = "Not provided";

/// Builds the full prompt for `request`, formatted for `region`.
pub fn build_prompt(request: &GenerationRequest, region: &RegionProfile) -> String {
    let profile = &request.profile;
    let companies = region.companies_list();

    let experience = json_or_empty(&profile.experience);
    let education = json_or_empty(&profile.education);
    let skills = json_or_empty(&profile.skills);
    let projects = json_or_empty(&profile.projects);
    let target_role = non_blank(&profile.target_role).unwrap_or(DEFAULT_TARGET_ROLE);
    let headline = non_blank(&profile.headline).unwrap_or(DEFAULT_HEADLINE);
    let industry = non_blank(&profile.industry).unwrap_or(DEFAULT_INDUSTRY);

    let mut values: Vec<(&str, &str)> = vec![
        ("json_only", JSON_ONLY_INSTRUCTION),
        ("market_name", region.market_name),
        ("phone_format", region.phone_format),
        ("location_format", region.location_format),
        ("resume_style", region.resume_style),
        ("companies", companies.as_str()),
        ("experience", experience.as_str()),
        ("education", education.as_str()),
        ("skills", skills.as_str()),
        ("projects", projects.as_str()),
        ("target_role", target_role),
        ("headline", headline),
        ("industry", industry),
        ("email", non_blank(&profile.email).unwrap_or("student@example.com")),
        ("phone", non_blank(&profile.phone).unwrap_or(NOT_PROVIDED)),
        ("linkedin", non_blank(&profile.linkedin).unwrap_or(NOT_PROVIDED)),
        (
            "location",
            non_blank(&profile.location).unwrap_or(region.location_format),
        ),
    ];

    let template = match request.task {
        TaskKind::Resume => {
            values.push(("full_name", display_name(profile, "Student Name")));
            values.push((
                "summary",
                non_blank(&profile.summary).unwrap_or("Motivated student seeking opportunities"),
            ));
            RESUME_PROMPT_TEMPLATE
        }
        TaskKind::ProfileOptimization => {
            values.push(("full_name", display_name(profile, "Student")));
            values.push((
                "summary",
                non_blank(&profile.summary).unwrap_or("No summary provided"),
            ));
            PROFILE_OPTIMIZATION_PROMPT_TEMPLATE
        }
        TaskKind::NetworkingSuggestions => {
            values.push(("full_name", display_name(profile, "Student")));
            NETWORKING_PROMPT_TEMPLATE
        }
        TaskKind::ConnectionMessage => {
            values.push(("full_name", display_name(profile, "Student")));
            let target = request.options.target.as_ref();
            values.push((
                "target_name",
                target
                    .map(|t| t.name.trim())
                    .filter(|n| !n.is_empty())
                    .unwrap_or("Professional"),
            ));
            values.push((
                "target_title",
                target.and_then(|t| non_blank(&t.role)).unwrap_or("Professional"),
            ));
            values.push((
                "target_company",
                target.and_then(|t| non_blank(&t.company)).unwrap_or("Company"),
            ));
            values.push((
                "context",
                non_blank(&request.options.context).unwrap_or("general"),
            ));
            CONNECTION_MESSAGE_PROMPT_TEMPLATE
        }
    };

    render_template(template, &values)
}

fn display_name<'a>(profile: &'a ProfileInput, placeholder: &'a str) -> &'a str {
    non_blank(&profile.full_name).unwrap_or(placeholder)
}

/// Compact JSON for the value, or `[]` when absent.
fn json_or_empty(value: &Option<Value>) -> String {
    match value {
        Some(Value::Null) | None => "[]".to_string(),
        Some(v) => v.to_string(),
    }
}

/// Single-pass `{key}` substitution.
///
/// Substituted text is never rescanned, so user data containing `{name}`
/// stays literal. Braces that don't form a known `{key}` are copied through.
pub fn render_template(template: &str, values: &[(&str, &str)]) -> String {
    let mut out = String::with_capacity(template.len() + 512);
    let mut rest = template;

    while let Some(start) = rest.find('{') {
        out.push_str(&rest[..start]);
        let after = &rest[start + 1..];
        let key_len = after
            .find(|c: char| !(c.is_ascii_alphanumeric() || c == '_'))
            .unwrap_or(after.len());

        if key_len > 0 && after[key_len..].starts_with('}') {
            let key = &after[..key_len];
            if let Some((_, value)) = values.iter().find(|(k, _)| *k == key) {
                out.push_str(value);
                rest = &after[key_len + 1..];
                continue;
            }
        }

        out.push('{');
        rest = after;
    }

    out.push_str(rest);
    out
}
