// hero cards on the home page
#[derive(Clone, Debug, PartialEq)]
pub struct Highlight {
    pub title: &'static str,
    pub count: &'static str,
}

pub static HIGHLIGHTS: &[Highlight] = &[
    Highlight { title: "UI/UX Design", count: "10+ Projects" },
    Highlight { title: "React Dev", count: "10+ Apps" },
    Highlight { title: "Photography", count: "500+ Shots" },
    Highlight { title: "Writing", count: "50+ Articles" },
    Highlight { title: "Video Editing", count: "80+ Videos" },
];

#[derive(Clone, Debug, PartialEq)]
pub struct SkillGroup {
    pub category: &'static str,
    pub glyph: &'static str,
    pub items: &'static [&'static str],
}

pub static SKILL_GROUPS: &[SkillGroup] = &[
    SkillGroup {
        category: "Design",
        glyph: "🎨",
        items: &["Figma", "Adobe XD", "Sketch", "Photoshop", "Illustrator"],
    },
    SkillGroup {
        category: "Development",
        glyph: "⌨",
        items: &["React", "TypeScript", "Next.js", "Tailwind CSS", "Node.js"],
    },
    SkillGroup {
        category: "Photography",
        glyph: "📷",
        items: &["Sony A7III", "Lightroom", "Capture One", "Portrait", "Landscape"],
    },
    SkillGroup {
        category: "Video Editing",
        glyph: "🎬",
        items: &[
            "Premiere Pro",
            "After Effects",
            "DaVinci Resolve",
            "Final Cut Pro",
            "Motion Graphics",
        ],
    },
    SkillGroup {
        category: "Writing",
        glyph: "✒",
        items: &[
            "UX Writing",
            "Technical Writing",
            "Content Strategy",
            "SEO",
            "Blogging",
        ],
    },
];

#[derive(Clone, Debug, PartialEq)]
pub struct ContactInfo {
    pub label: &'static str,
    pub glyph: &'static str,
    pub value: &'static str,
}

pub static CONTACT_INFO: &[ContactInfo] = &[
    ContactInfo { label: "Location", glyph: "📍", value: "Bandung, Indonesia" },
    ContactInfo { label: "Phone", glyph: "📞", value: "+62 821-8727-0634" },
];

// shared by the footer (glyph only) and the contact page (glyph, label, handle)
#[derive(Clone, Debug, PartialEq)]
pub struct SocialLink {
    pub label: &'static str,
    pub glyph: &'static str,
    pub handle: &'static str,
    pub href: &'static str,
}

impl SocialLink {
    // mailto links open in place, everything else gets a new tab
    pub fn opens_new_tab(&self) -> bool {
        !self.href.starts_with("mailto:")
    }
}

pub static SOCIAL_LINKS: &[SocialLink] = &[
    SocialLink {
        label: "Email",
        glyph: "✉",
        handle: "Irsalshydiq@gmail.com",
        href: "mailto:Irsalshydiq@gmail.com",
    },
    SocialLink {
        label: "LinkedIn",
        glyph: "in",
        handle: "LmIrsalshydiq",
        href: "https://linkedin.com/in/LmIrsalshydiq",
    },
    SocialLink {
        label: "GitHub",
        glyph: "⌥",
        handle: "@irsalshydiq",
        href: "https://github.com/irsalshydiq",
    },
    SocialLink {
        label: "Instagram",
        glyph: "◎",
        handle: "@irsalshydiq",
        href: "https://instagram.com/irsalshydiq",
    },
];

// case study
#[derive(Clone, Debug, PartialEq)]
pub struct ProcessStep {
    pub step: &'static str,
    pub title: &'static str,
    pub description: &'static str,
}

pub static PROCESS_STEPS: &[ProcessStep] = &[
    ProcessStep {
        step: "01",
        title: "Research & Discovery",
        description: "Conducted user interviews, competitive analysis, and market research to understand pain points and opportunities.",
    },
    ProcessStep {
        step: "02",
        title: "Ideation & Sketching",
        description: "Explored multiple design directions through rapid sketching and low-fidelity wireframes.",
    },
    ProcessStep {
        step: "03",
        title: "Prototyping",
        description: "Created interactive prototypes to test user flows and validate design decisions.",
    },
    ProcessStep {
        step: "04",
        title: "Testing & Refinement",
        description: "Conducted usability testing sessions and iterated based on user feedback.",
    },
];

pub static SOLUTION_FEATURES: &[&str] = &[
    "Intuitive Navigation",
    "Responsive Design",
    "Accessibility First",
    "Performance Optimized",
    "Modern Aesthetics",
    "Scalable Architecture",
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_mail_links_stay_in_the_tab() {
        let in_tab: Vec<&str> = SOCIAL_LINKS
            .iter()
            .filter(|l| !l.opens_new_tab())
            .map(|l| l.label)
            .collect();

        assert_eq!(in_tab, vec!["Email"]);
    }

    #[test]
    fn process_steps_are_numbered_in_order() {
        let steps: Vec<&str> = PROCESS_STEPS.iter().map(|s| s.step).collect();

        assert_eq!(steps, vec!["01", "02", "03", "04"]);
    }
}
