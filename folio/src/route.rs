use std::fmt;

use tracing::debug;

use crate::content::{Content, ExperienceEntry, Project, find_experience};

// the navigable pages of the site
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum Page {
    Home,
    Portfolio,
    CaseStudy,
    About,
    Contact,
    Experience(String),
}

impl Page {
    /// Maps a url path onto a page; anything the site does not serve is `None`.
    pub fn parse(path: &str) -> Option<Page> {
        let path = path.split(['?', '#']).next().unwrap_or_default();
        let trimmed = path.trim_end_matches('/');

        let page = match trimmed {
            "" => Page::Home,
            "/portfolio" => Page::Portfolio,
            "/case-study" => Page::CaseStudy,
            "/about" => Page::About,
            "/contact" => Page::Contact,
            other => {
                let id = other.strip_prefix("/experience/")?;
                if id.is_empty() || id.contains('/') {
                    return None;
                }
                Page::Experience(id.to_owned())
            }
        };

        Some(page)
    }

    pub fn path(&self) -> String {
        match self {
            Page::Home => String::from("/"),
            Page::Portfolio => String::from("/portfolio"),
            Page::CaseStudy => String::from("/case-study"),
            Page::About => String::from("/about"),
            Page::Contact => String::from("/contact"),
            Page::Experience(id) => format!("/experience/{id}"),
        }
    }

    pub fn resolve<'a>(&self, content: &Content, handoff: &'a Handoff<Project>) -> Resolved<'a> {
        let resolved = match self {
            Page::Home => Resolved::Home,
            Page::Portfolio => Resolved::Portfolio,
            Page::About => Resolved::About,
            Page::Contact => Resolved::Contact,
            Page::CaseStudy => match handoff.peek() {
                Some(project) => Resolved::CaseStudy(project),
                None => Resolved::Fallback(Fallback::ProjectMissing),
            },
            Page::Experience(id) => match find_experience(content.experience, id) {
                Some(entry) => Resolved::Experience(entry),
                None => Resolved::Fallback(Fallback::ExperienceMissing),
            },
        };

        if let Resolved::Fallback(fallback) = &resolved {
            debug!({ page = %self, fallback = ?fallback }, "referenced entity absent");
        }

        resolved
    }
}

impl fmt::Display for Page {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.path())
    }
}

// what a page turned out to show once its references were looked up
#[derive(Clone, Debug, PartialEq)]
pub enum Resolved<'a> {
    Home,
    Portfolio,
    About,
    Contact,
    CaseStudy(&'a Project),
    Experience(&'a ExperienceEntry),
    Fallback(Fallback),
}

// the only error the site has: something referenced by the url or by the previous
// page is not there.  every variant knows which listing leads back to valid content
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Fallback {
    ProjectMissing,
    ExperienceMissing,
}

impl Fallback {
    pub fn title(self) -> &'static str {
        match self {
            Fallback::ProjectMissing => "Project not found",
            Fallback::ExperienceMissing => "Experience not found",
        }
    }

    pub fn back_to(self) -> Page {
        match self {
            Fallback::ProjectMissing => Page::Portfolio,
            Fallback::ExperienceMissing => Page::About,
        }
    }

    pub fn back_label(self) -> &'static str {
        match self {
            Fallback::ProjectMissing => "Back to Portfolio",
            Fallback::ExperienceMissing => "Back to About",
        }
    }
}

// selection handoff
//
// carries the project picked on the portfolio over to the case study page, the
// way history state would.  it is never filled from the url, so opening
// /case-study directly finds it empty and the page shows its fallback
#[derive(Clone, Debug, PartialEq)]
pub struct Handoff<T> {
    slot: Option<T>,
}

impl<T> Handoff<T> {
    pub fn empty() -> Self {
        Handoff { slot: None }
    }

    pub fn offer(&mut self, value: T) {
        self.slot = Some(value);
    }

    pub fn peek(&self) -> Option<&T> {
        self.slot.as_ref()
    }
}

impl<T> Default for Handoff<T> {
    fn default() -> Self {
        Handoff::empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::{EXPERIENCE, PROJECTS};

    #[test]
    fn parses_every_served_path() {
        assert_eq!(Page::parse("/"), Some(Page::Home));
        assert_eq!(Page::parse(""), Some(Page::Home));
        assert_eq!(Page::parse("/portfolio"), Some(Page::Portfolio));
        assert_eq!(Page::parse("/portfolio/"), Some(Page::Portfolio));
        assert_eq!(Page::parse("/case-study"), Some(Page::CaseStudy));
        assert_eq!(Page::parse("/about?from=nav"), Some(Page::About));
        assert_eq!(Page::parse("/contact#form"), Some(Page::Contact));
        assert_eq!(
            Page::parse("/experience/freelance-creative"),
            Some(Page::Experience(String::from("freelance-creative")))
        );
    }

    #[test]
    fn unknown_paths_do_not_parse() {
        for path in ["/blog", "/experience", "/experience/", "/experience/a/b", "/Portfolio"] {
            assert_eq!(Page::parse(path), None, "{path}");
        }
    }

    #[test]
    fn paths_round_trip() {
        let pages = [
            Page::Home,
            Page::Portfolio,
            Page::CaseStudy,
            Page::About,
            Page::Contact,
            Page::Experience(String::from("tech-innovators")),
        ];

        for page in pages {
            assert_eq!(Page::parse(&page.path()), Some(page));
        }
    }

    #[test]
    fn unknown_experience_resolves_to_fallback() {
        let page = Page::parse("/experience/unknown-id").unwrap();
        let handoff = Handoff::empty();
        let resolved = page.resolve(&Content::site(), &handoff);

        assert_eq!(resolved, Resolved::Fallback(Fallback::ExperienceMissing));
        assert_eq!(Fallback::ExperienceMissing.back_to(), Page::About);
    }

    #[test]
    fn known_experience_resolves_to_its_record() {
        let page = Page::parse("/experience/digital-solutions").unwrap();

        match page.resolve(&Content::site(), &Handoff::empty()) {
            Resolved::Experience(entry) => assert_eq!(entry, &EXPERIENCE[1]),
            other => panic!("unexpected {other:?}"),
        }
    }

    #[test]
    fn case_study_without_selection_falls_back() {
        let handoff = Handoff::empty();
        let resolved = Page::CaseStudy.resolve(&Content::site(), &handoff);

        assert_eq!(resolved, Resolved::Fallback(Fallback::ProjectMissing));
        assert_eq!(Fallback::ProjectMissing.back_to(), Page::Portfolio);
    }

    #[test]
    fn case_study_shows_the_handed_off_project() {
        let content = Content::site();
        let mut handoff = Handoff::empty();
        handoff.offer(PROJECTS[2].clone());

        let resolved = Page::CaseStudy.resolve(&content, &handoff);
        assert_eq!(resolved, Resolved::CaseStudy(&PROJECTS[2]));

        // a later pick replaces the earlier one
        handoff.offer(PROJECTS[6].clone());
        assert_eq!(
            Page::CaseStudy.resolve(&content, &handoff),
            Resolved::CaseStudy(&PROJECTS[6])
        );
    }
}
