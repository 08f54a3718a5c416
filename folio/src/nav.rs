use tracing::trace;

use crate::route::Page;

#[derive(Clone, Debug, PartialEq)]
pub struct NavItem {
    pub page: Page,
    pub label: &'static str,
}

pub fn nav_items() -> Vec<NavItem> {
    vec![
        NavItem { page: Page::Home, label: "Home" },
        NavItem { page: Page::Portfolio, label: "Portfolio" },
        NavItem { page: Page::About, label: "About" },
        NavItem { page: Page::Contact, label: "Contact" },
    ]
}

impl NavItem {
    // exact match only, so /experience/... and /case-study highlight nothing
    pub fn is_active(&self, current: &Page) -> bool {
        self.page == *current
    }
}

// nav bar style switch
//
// tracks whether the page has scrolled past the threshold.  scroll events arrive
// far more often than the flag changes, so update() reports whether anything
// changed and the caller only writes its signal when it did
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScrollState {
    threshold: f64,
    scrolled: bool,
}

impl ScrollState {
    pub fn new(threshold: f64) -> Self {
        ScrollState {
            threshold,
            scrolled: false,
        }
    }

    pub fn scrolled(&self) -> bool {
        self.scrolled
    }

    pub fn update(&mut self, offset: f64) -> bool {
        let scrolled = offset > self.threshold;
        if scrolled == self.scrolled {
            return false;
        }

        trace!(offset, scrolled, "scroll threshold crossed");
        self.scrolled = scrolled;
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_the_exact_page_is_active() {
        let items = nav_items();

        let active: Vec<&str> = items
            .iter()
            .filter(|i| i.is_active(&Page::Portfolio))
            .map(|i| i.label)
            .collect();
        assert_eq!(active, vec!["Portfolio"]);

        let experience = Page::Experience(String::from("tech-innovators"));
        assert!(items.iter().all(|i| !i.is_active(&experience)));
        assert!(items.iter().all(|i| !i.is_active(&Page::CaseStudy)));
    }

    #[test]
    fn scroll_flag_flips_at_threshold() {
        let mut scroll = ScrollState::new(50.0);

        assert!(!scroll.update(10.0));
        assert!(!scroll.update(50.0));
        assert!(!scroll.scrolled());

        assert!(scroll.update(50.5));
        assert!(scroll.scrolled());
        assert!(!scroll.update(400.0));

        assert!(scroll.update(0.0));
        assert!(!scroll.scrolled());
    }
}
