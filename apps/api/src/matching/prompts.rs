// Prompt text a model-backed `MatchScorer` would receive. The weighted scorer never
// sends it; the recommendation assembler logs it at debug level.

use crate::models::job::Job;
use crate::models::profile::Profile;

/// Replace `{profile}` and `{jobs}` before sending.
pub const MATCH_PROMPT_TEMPLATE: &str = r#"User Profile:
{profile}

Available Jobs:
{jobs}

Based on the user's profile, analyze each job and:
1. Calculate a match score (0-100) considering skills match, location preference, and job type
2. Provide a brief explanation of why each job would be a good match
3. Return the top 3 most suitable jobs for this candidate"#;

pub fn build_match_prompt(profile: &Profile, jobs: &[Job]) -> String {
    MATCH_PROMPT_TEMPLATE
        .replace("{profile}", &render_profile(profile))
        .replace("{jobs}", &render_jobs(jobs))
}

fn render_profile(profile: &Profile) -> String {
    let mut lines = vec![
        format!("- Name: {}", profile.name),
        format!("- Location: {}", profile.location),
        format!("- Years of Experience: {}", profile.years_of_experience),
        format!("- Skills: {}", profile.skills.join(", ")),
        format!(
            "- Preferred Job Type: {}",
            profile.preferred_job_type.as_str()
        ),
    ];
    if let Some(bio) = profile.bio.as_deref().filter(|b| !b.trim().is_empty()) {
        lines.push(format!("- Bio: {bio}"));
    }
    lines.join("\n")
}

fn render_jobs(jobs: &[Job]) -> String {
    jobs.iter()
        .map(|job| {
            format!(
                "Job ID: {}\nTitle: {}\nCompany: {}\nLocation: {}\nJob Type: {}\nSkills Required: {}\n",
                job.id,
                job.title,
                job.company,
                job.location,
                job.job_type.as_str(),
                job.skills.join(", ")
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}
