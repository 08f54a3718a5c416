use dioxus::prelude::*;

use folio::{
    content::SOCIAL_LINKS,
    surface::{Surface, classes},
};

use crate::common::context::{use_config, use_theme};

#[component]
pub fn Footer() -> Element {
    let theme = use_theme();
    let config = use_config();

    rsx! {
        footer { class: classes(Surface::Footer, theme),
            div { class: "footer-container",
                span { "© {config.copyright_year} {config.owner}" }
                div { class: "footer-links",
                    for link in SOCIAL_LINKS.iter() {
                        a {
                            key: "{link.label}",
                            href: link.href,
                            target: if link.opens_new_tab() { "_blank" } else { "_self" },
                            rel: "noopener noreferrer",
                            aria_label: link.label,
                            title: link.label,
                            "{link.glyph}"
                        }
                    }
                }
            }
        }
    }
}
