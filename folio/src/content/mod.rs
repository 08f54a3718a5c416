// static content
//
// all of the site's text lives in these tables.  they are built once at load time
// and never change, so everything hands out &'static references and nothing is
// cloned on the render path
mod experience;
mod profile;
mod projects;

pub use experience::{EXPERIENCE, ExperienceEntry, ExperienceIcon, find_experience};
pub use profile::{
    CONTACT_INFO, ContactInfo, HIGHLIGHTS, Highlight, PROCESS_STEPS, ProcessStep, SKILL_GROUPS,
    SOCIAL_LINKS, SOLUTION_FEATURES, SkillGroup, SocialLink,
};
pub use projects::{Category, CategoryFilter, PROJECTS, Project, filter_projects};

// the tables bundled together, so that route resolution can be tested against
// something other than the real site content
#[derive(Clone, Copy, Debug)]
pub struct Content {
    pub projects: &'static [Project],
    pub experience: &'static [ExperienceEntry],
}

impl Content {
    pub fn site() -> Self {
        Content {
            projects: PROJECTS,
            experience: EXPERIENCE,
        }
    }
}
