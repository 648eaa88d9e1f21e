//! A fully populated example résumé, used by the `sample` command and tests.

use crate::models::resume::{
    Education, EntryId, Experience, PersonalInfo, Project, ResumeData, Skill, SkillCategory,
    SkillLevel,
};

fn lines(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

fn skill(name: &str, level: SkillLevel, category: SkillCategory) -> Skill {
    Skill {
        id: EntryId::new(),
        name: name.to_string(),
        level,
        category,
    }
}

impl ResumeData {
    pub fn sample() -> Self {
        use SkillCategory::{Language, Soft, Technical};
        use SkillLevel::{Advanced, Expert, Intermediate};

        ResumeData {
            personal_info: PersonalInfo {
                name: "Alex Johnson".to_string(),
                email: "alex.johnson@email.com".to_string(),
                phone: "+1 (555) 123-4567".to_string(),
                location: "San Francisco, CA".to_string(),
                linked_in: Some("linkedin.com/in/alexjohnson".to_string()),
                github: Some("github.com/alexjohnson".to_string()),
                website: Some("alexjohnson.dev".to_string()),
            },
            summary: "Experienced Full Stack Developer with 5+ years of expertise in building \
                scalable web applications using React, Node.js, and cloud technologies. Proven \
                track record of leading cross-functional teams and delivering high-impact \
                projects that improve user experience and drive business growth."
                .to_string(),
            experience: vec![
                Experience {
                    company: "Tech Innovations Inc.".to_string(),
                    position: "Senior Full Stack Developer".to_string(),
                    start_date: "2022-01".to_string(),
                    current: true,
                    description: "Lead development of enterprise-level web applications serving \
                        100K+ users daily."
                        .to_string(),
                    achievements: lines(&[
                        "Architected and built a microservices platform that improved system performance by 40%",
                        "Led a team of 5 developers to deliver 3 major product releases on time",
                        "Implemented CI/CD pipelines reducing deployment time from hours to minutes",
                    ]),
                    ..Experience::default()
                },
                Experience {
                    company: "StartupXYZ".to_string(),
                    position: "Frontend Developer".to_string(),
                    start_date: "2020-06".to_string(),
                    end_date: "2021-12".to_string(),
                    description: "Developed responsive web applications using React and modern \
                        JavaScript technologies."
                        .to_string(),
                    achievements: lines(&[
                        "Built and launched 3 customer-facing applications with 99.9% uptime",
                        "Optimized application performance resulting in 50% faster load times",
                    ]),
                    ..Experience::default()
                },
            ],
            education: vec![Education {
                institution: "University of California, Berkeley".to_string(),
                degree: "Bachelor of Science".to_string(),
                field: "Computer Science".to_string(),
                start_date: "2016-08".to_string(),
                end_date: "2020-05".to_string(),
                gpa: Some("3.8".to_string()),
                achievements: lines(&["Magna Cum Laude", "Dean's List for 6 semesters"]),
                ..Education::default()
            }],
            skills: vec![
                skill("TypeScript", Advanced, Technical),
                skill("React", Expert, Technical),
                skill("PostgreSQL", Advanced, Technical),
                skill("Docker", Intermediate, Technical),
                skill("Leadership", Advanced, Soft),
                skill("Communication", Expert, Soft),
                skill("English", Expert, Language),
                skill("Spanish", Intermediate, Language),
            ],
            projects: vec![
                Project {
                    name: "E-Commerce Platform".to_string(),
                    description: "Full-stack e-commerce platform with authentication, payment \
                        processing and an admin dashboard."
                        .to_string(),
                    technologies: lines(&["React", "Node.js", "PostgreSQL", "Stripe API"]),
                    start_date: "2023-01".to_string(),
                    end_date: "2023-06".to_string(),
                    url: Some("https://ecommerce-demo.alexjohnson.dev".to_string()),
                    github: Some("https://github.com/alexjohnson/ecommerce-platform".to_string()),
                    ..Project::default()
                },
                Project {
                    name: "AI-Powered Analytics Dashboard".to_string(),
                    description: "Analytics dashboard using machine learning to surface user \
                        behavior insights with real-time visualizations."
                        .to_string(),
                    technologies: lines(&["React", "D3.js", "Python", "FastAPI"]),
                    start_date: "2023-07".to_string(),
                    github: Some("https://github.com/alexjohnson/analytics-dashboard".to_string()),
                    ..Project::default()
                },
            ],
        }
    }
}
