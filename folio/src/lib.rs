// folio
//
// everything the site needs that is not markup lives here: the theme owner, the
// static content tables, the contact form state machine, the navigation and route
// models, and the configuration.  the webapp crate only renders what this crate
// decides, which keeps all of the behavior testable without a browser
pub mod assets;
pub mod config;
pub mod contact;
pub mod content;
pub mod motion;
pub mod nav;
pub mod route;
pub mod surface;
pub mod theme;
