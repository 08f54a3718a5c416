// which glyph the about page shows next to an entry
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ExperienceIcon {
    Briefcase,
    Code,
    Award,
}

impl ExperienceIcon {
    pub fn glyph(self) -> &'static str {
        match self {
            ExperienceIcon::Briefcase => "💼",
            ExperienceIcon::Code => "⌨",
            ExperienceIcon::Award => "🏅",
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct ExperienceEntry {
    pub id: &'static str,
    pub icon: ExperienceIcon,
    pub title: &'static str,
    pub company: &'static str,
    pub period: &'static str,
    pub location: &'static str,
    pub kind: &'static str,
    // one-liner for the about page listing
    pub summary: &'static str,
    pub description: &'static str,
    pub responsibilities: &'static [&'static str],
    pub achievements: &'static [&'static str],
    pub skills: &'static [&'static str],
    pub tools: &'static [&'static str],
}

/// Exact match on `id`; there is no prefix or case-insensitive matching.
pub fn find_experience<'a>(entries: &'a [ExperienceEntry], id: &str) -> Option<&'a ExperienceEntry> {
    entries.iter().find(|e| e.id == id)
}

pub static EXPERIENCE: &[ExperienceEntry] = &[
    ExperienceEntry {
        id: "tech-innovators",
        icon: ExperienceIcon::Briefcase,
        title: "Freelance UI/UX Designer",
        company: "Independent",
        period: "2024 - Present",
        location: "Remote",
        kind: "Freelance",
        summary: "Designing user interfaces and experiences for various clients",
        description: "Providing UI/UX design services for various clients including startups and small businesses, creating user-centered digital experiences from concept to final design.",
        responsibilities: &[
            "Collaborated with clients to understand business goals and user needs",
            "Designed user interfaces and wireframes for web and mobile applications",
            "Created interactive prototypes in Figma for client presentations",
            "Conducted user research and usability testing for project validation",
            "Delivered design systems and component libraries for client projects",
        ],
        achievements: &[
            "Successfully completed 8+ client projects with positive feedback",
            "Designed and delivered 2 complete mobile app interfaces",
            "Created reusable design components that reduced client revision time by 30%",
        ],
        skills: &[
            "Figma",
            "Wireframing",
            "Prototyping",
            "User Research",
            "Design Systems",
            "Client Communication",
        ],
        tools: &["Figma", "Adobe XD", "Miro", "Notion", "Slack", "Zoom"],
    },
    ExperienceEntry {
        id: "digital-solutions",
        icon: ExperienceIcon::Code,
        title: "Freelance React Developer",
        company: "Independent",
        period: "2024 - Present",
        location: "Remote",
        kind: "Freelance",
        summary: "Building responsive web applications for startups and businesses",
        description: "Building modern, responsive web applications for clients using React and modern JavaScript technologies, focusing on clean code and optimal performance.",
        responsibilities: &[
            "Developed custom web applications based on client requirements",
            "Implemented responsive designs using React and Tailwind CSS",
            "Integrated third-party APIs and services for enhanced functionality",
            "Optimized application performance and load times",
            "Provided ongoing maintenance and support for delivered projects",
        ],
        achievements: &[
            "Built and deployed 5+ production-ready web applications",
            "Achieved average PageSpeed score of 90+ for all client projects",
            "Reduced development time by 40% using reusable component patterns",
        ],
        skills: &[
            "React",
            "TypeScript",
            "Next.js",
            "Tailwind CSS",
            "API Integration",
            "Performance Optimization",
        ],
        tools: &["VS Code", "Git", "GitHub", "Vercel", "Netlify", "Postman"],
    },
    ExperienceEntry {
        id: "freelance-creative",
        icon: ExperienceIcon::Award,
        title: "Freelance Creative",
        company: "Independent",
        period: "2022 - Present",
        location: "Global",
        kind: "Freelance",
        summary: "Photography and content creation for various brands",
        description: "Photography and content creation for various brands, specializing in urban landscape photography, product photography, and creative content writing for digital platforms.",
        responsibilities: &[
            "Captured high-quality photos for commercial clients and personal projects",
            "Created engaging content for blogs, social media, and marketing materials",
            "Edited photos and videos using professional tools and techniques",
            "Managed client relationships and delivered projects on time",
            "Built personal brand and portfolio showcasing diverse creative work",
        ],
        achievements: &[
            "Completed 50+ successful projects with 5-star client ratings",
            "Featured in local photography exhibitions and online publications",
            "Grew Instagram following to 10K+ with consistent quality content",
        ],
        skills: &[
            "Photography",
            "Lightroom",
            "Content Writing",
            "Video Editing",
            "Social Media",
        ],
        tools: &["Sony A7III", "Lightroom", "Photoshop", "Premiere Pro", "Notion"],
    },
];

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    #[test]
    fn every_known_id_finds_its_own_record() {
        for entry in EXPERIENCE {
            let found = find_experience(EXPERIENCE, entry.id).unwrap();
            assert_eq!(found, entry);
        }
    }

    #[test]
    fn unknown_ids_are_absent() {
        for id in ["unknown-id", "", "Tech-Innovators", "tech-innovator", "tech-innovators/"] {
            assert!(find_experience(EXPERIENCE, id).is_none(), "{id}");
        }
    }

    #[test]
    fn ids_are_unique() {
        let unique: HashSet<&str> = EXPERIENCE.iter().map(|e| e.id).collect();

        assert_eq!(unique.len(), EXPERIENCE.len());
    }

    #[test]
    fn every_entry_has_detail_sections() {
        for entry in EXPERIENCE {
            assert!(!entry.responsibilities.is_empty(), "{}", entry.id);
            assert!(!entry.achievements.is_empty(), "{}", entry.id);
            assert!(!entry.skills.is_empty(), "{}", entry.id);
            assert!(!entry.tools.is_empty(), "{}", entry.id);
        }
    }
}
