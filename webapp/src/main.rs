#![allow(non_snake_case)]
use dioxus::prelude::*;
use dioxus_router::prelude::*;

use folio::{
    config::{SiteConfig, read_config},
    route::Page,
};

mod common;

mod components;
use components::navigation::NavBar;

mod home;
use home::Home;

mod portfolio;
use portfolio::Portfolio;

mod case_study;
use case_study::CaseStudy;

mod about;
use about::About;

mod contact;
use contact::Contact;

mod experience;
use experience::ExperienceDetail;

const SITE_TOML: &str = include_str!("../site.toml");

fn main() {
    // the logger needs the configured level, so a parse failure can only be
    // reported once the logger is running on the defaults
    let (config, parse_err) = match read_config(SITE_TOML) {
        Ok(config) => (config, None),
        Err(err) => (SiteConfig::default(), Some(err)),
    };

    dioxus_logger::init(config.level()).expect("failed to init logger");

    if let Some(err) = parse_err {
        tracing::error!("{err}, using default site config");
    }

    dioxus::LaunchBuilder::new().with_context(config).launch(App);
}

#[derive(Clone, PartialEq, Routable)]
#[rustfmt::skip]
enum Route {
    #[layout(NavBar)]
        #[route("/")]
        Home {},
        #[route("/portfolio")]
        Portfolio {},
        #[route("/case-study")]
        CaseStudy {},
        #[route("/about")]
        About {},
        #[route("/contact")]
        Contact {},
        #[route("/experience/:id")]
        ExperienceDetail { id: String },
}

impl From<&Route> for Page {
    fn from(route: &Route) -> Self {
        match route {
            Route::Home {} => Page::Home,
            Route::Portfolio {} => Page::Portfolio,
            Route::CaseStudy {} => Page::CaseStudy,
            Route::About {} => Page::About,
            Route::Contact {} => Page::Contact,
            Route::ExperienceDetail { id } => Page::Experience(id.clone()),
        }
    }
}

impl From<Page> for Route {
    fn from(page: Page) -> Self {
        match page {
            Page::Home => Route::Home {},
            Page::Portfolio => Route::Portfolio {},
            Page::CaseStudy => Route::CaseStudy {},
            Page::About => Route::About {},
            Page::Contact => Route::Contact {},
            Page::Experience(id) => Route::ExperienceDetail { id },
        }
    }
}

#[component]
pub fn App() -> Element {
    common::context::provide_site_context();

    rsx! {
        style { "{common::style::SITE_STYLES}" }
        Router::<Route> { config: RouterConfig::default }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // the router and folio's path model are written separately, so every page
    // must survive a trip through both
    #[test]
    fn router_paths_match_the_page_model() {
        let pages = [
            Page::Home,
            Page::Portfolio,
            Page::CaseStudy,
            Page::About,
            Page::Contact,
            Page::Experience(String::from("tech-innovators")),
            Page::Experience(String::from("freelance-creative")),
        ];

        for page in pages {
            let route = Route::from(page.clone());
            let path = route.to_string();

            assert_eq!(path, page.path());
            assert_eq!(Page::parse(&path), Some(page.clone()));
            assert_eq!(Page::from(&route), page);
        }
    }
}
