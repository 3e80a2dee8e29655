//! Seed records loaded into the in-memory store at startup.

use chrono::NaiveDate;

use crate::models::job::{Job, JobType};
use crate::models::profile::{PreferredJobType, Profile};
use crate::models::user::User;

pub fn users() -> Vec<User> {
    vec![
        User {
            id: "1".to_string(),
            name: "Test User".to_string(),
            email: "test@example.com".to_string(),
            profile_completed: true,
        },
        User {
            id: "2".to_string(),
            name: "Jane Doe".to_string(),
            email: "jane@example.com".to_string(),
            profile_completed: false,
        },
    ]
}

pub fn profiles() -> Vec<Profile> {
    vec![Profile {
        user_id: "1".to_string(),
        name: "Test User".to_string(),
        location: "San Francisco, CA".to_string(),
        years_of_experience: 3,
        skills: strings(&["JavaScript", "React", "Node.js", "TypeScript", "Tailwind CSS"]),
        preferred_job_type: PreferredJobType::Remote,
        bio: Some(
            "Full-stack developer with 3 years of experience building web applications."
                .to_string(),
        ),
    }]
}

pub fn jobs() -> Vec<Job> {
    vec![
        job(JobSeed {
            id: "1",
            title: "Frontend Developer",
            company: "TechCorp",
            location: "San Francisco, CA",
            description: "We are looking for a Frontend Developer to join our team and help build modern web applications.",
            requirements: &[
                "Proficiency in JavaScript and React",
                "Experience with modern CSS frameworks",
                "Good understanding of responsive design",
            ],
            skills: &["JavaScript", "React", "HTML", "CSS", "Tailwind"],
            job_type: JobType::Remote,
            salary: "$90,000 - $120,000",
            posted: (2023, 5, 15),
        }),
        job(JobSeed {
            id: "2",
            title: "Backend Developer",
            company: "ServerSolutions",
            location: "New York, NY",
            description: "Join our backend team to develop scalable and efficient server-side applications.",
            requirements: &[
                "Strong knowledge of Node.js or Python",
                "Experience with databases (SQL and NoSQL)",
                "Understanding of RESTful APIs",
            ],
            skills: &["Node.js", "Express", "MongoDB", "REST API", "PostgreSQL"],
            job_type: JobType::Hybrid,
            salary: "$100,000 - $130,000",
            posted: (2023, 5, 10),
        }),
        job(JobSeed {
            id: "3",
            title: "Full Stack Developer",
            company: "WebWizards",
            location: "Remote",
            description: "Looking for a versatile developer who can work on both frontend and backend technologies.",
            requirements: &[
                "Experience with JavaScript, React, and Node.js",
                "Knowledge of databases and RESTful APIs",
                "Ability to work independently",
            ],
            skills: &["JavaScript", "React", "Node.js", "MongoDB", "Express"],
            job_type: JobType::Remote,
            salary: "$110,000 - $140,000",
            posted: (2023, 5, 5),
        }),
        job(JobSeed {
            id: "4",
            title: "UI/UX Designer",
            company: "DesignMasters",
            location: "Los Angeles, CA",
            description: "Join our creative team to design beautiful and intuitive user interfaces.",
            requirements: &[
                "Strong portfolio showcasing UI/UX design skills",
                "Proficiency in design tools like Figma or Sketch",
                "Understanding of user-centered design principles",
            ],
            skills: &["UI Design", "UX Design", "Figma", "Sketch", "User Research"],
            job_type: JobType::Onsite,
            salary: "$85,000 - $110,000",
            posted: (2023, 5, 1),
        }),
        job(JobSeed {
            id: "5",
            title: "DevOps Engineer",
            company: "CloudNine",
            location: "Seattle, WA",
            description: "We need a DevOps engineer to help automate our deployment processes and manage our cloud infrastructure.",
            requirements: &[
                "Experience with AWS or Azure",
                "Knowledge of containerization (Docker, Kubernetes)",
                "CI/CD pipeline setup and management",
            ],
            skills: &["AWS", "Docker", "Kubernetes", "CI/CD", "Linux"],
            job_type: JobType::Hybrid,
            salary: "$120,000 - $150,000",
            posted: (2023, 4, 28),
        }),
        job(JobSeed {
            id: "6",
            title: "Data Scientist",
            company: "DataMinds",
            location: "Boston, MA",
            description: "Join our data science team to extract insights from complex datasets and build predictive models.",
            requirements: &[
                "Strong background in statistics and machine learning",
                "Experience with Python and data science libraries",
                "Ability to communicate technical concepts to non-technical stakeholders",
            ],
            skills: &["Python", "Machine Learning", "SQL", "Data Visualization", "Statistics"],
            job_type: JobType::Onsite,
            salary: "$115,000 - $145,000",
            posted: (2023, 4, 25),
        }),
        job(JobSeed {
            id: "7",
            title: "Mobile Developer (React Native)",
            company: "AppArtisans",
            location: "Remote",
            description: "Develop cross-platform mobile applications using React Native for iOS and Android.",
            requirements: &[
                "Experience with React Native development",
                "Understanding of mobile UI/UX principles",
                "Knowledge of mobile app deployment processes",
            ],
            skills: &["React Native", "JavaScript", "TypeScript", "Mobile Development", "Redux"],
            job_type: JobType::Remote,
            salary: "$95,000 - $125,000",
            posted: (2023, 4, 20),
        }),
    ]
}

struct JobSeed {
    id: &'static str,
    title: &'static str,
    company: &'static str,
    location: &'static str,
    description: &'static str,
    requirements: &'static [&'static str],
    skills: &'static [&'static str],
    job_type: JobType,
    salary: &'static str,
    posted: (i32, u32, u32),
}

fn job(seed: JobSeed) -> Job {
    let (y, m, d) = seed.posted;
    Job {
        id: seed.id.to_string(),
        title: seed.title.to_string(),
        company: seed.company.to_string(),
        location: seed.location.to_string(),
        description: seed.description.to_string(),
        requirements: strings(seed.requirements),
        skills: strings(seed.skills),
        job_type: seed.job_type,
        salary: Some(seed.salary.to_string()),
        posted_date: NaiveDate::from_ymd_opt(y, m, d).unwrap_or_default(),
    }
}

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}
