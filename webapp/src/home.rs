use dioxus::prelude::*;
use dioxus_router::prelude::*;

use folio::{
    content::HIGHLIGHTS,
    motion::{Effect, Motion},
    surface::{ButtonVariant, Surface, Tone, classes},
};

use crate::{
    Route,
    common::context::{use_config, use_theme},
    components::{
        glass::{GlassButton, GlassCard},
        reveal::Reveal,
    },
};

const DISCIPLINES: &str = "UI/UX Design · React Development · Photography · Writing · Video Editing";

#[component]
pub fn Home() -> Element {
    let theme = use_theme();
    let config = use_config();

    let heading = classes(Surface::Text(Tone::Heading), theme);
    let body = classes(Surface::Text(Tone::Body), theme);
    let muted = classes(Surface::Text(Tone::Muted), theme);
    let pill = classes(Surface::Pill, theme);

    rsx! {
        div { class: "page home-page",
            div { class: "home-orbs {theme}",
                div { class: "orb orb-one" }
                div { class: "orb orb-two" }
                div { class: "orb orb-three" }
            }

            section { class: "hero",
                Reveal { motion: Motion::new(Effect::Scale, 500),
                    div { class: "{pill} hero-badge",
                        span { class: "pulse-dot" }
                        "Available for work"
                    }
                }

                Reveal { motion: Motion::new(Effect::Rise, 800).delayed(200),
                    h1 { class: "{heading} hero-title", "{config.owner}" }
                    p { class: "{body} hero-role",
                        "{config.role}"
                    }
                    p { class: "{muted} hero-disciplines", "{DISCIPLINES}" }
                }

                Reveal {
                    motion: Motion::new(Effect::Rise, 800).delayed(400),
                    class: "hero-actions",
                    GlassButton {
                        onclick: move |_| {
                            navigator().push(Route::Portfolio {});
                        },
                        "View My Work →"
                    }
                    GlassButton {
                        variant: ButtonVariant::Secondary,
                        onclick: move |_| {
                            navigator().push(Route::Contact {});
                        },
                        "Get In Touch"
                    }
                }
            }

            section { class: "highlights",
                for (i, highlight) in HIGHLIGHTS.iter().enumerate() {
                    Reveal {
                        key: "{highlight.title}",
                        motion: Motion::new(Effect::Rise, 500).staggered(700, i, 100),
                        GlassCard { hover: true, class: "highlight-card",
                            h3 { class: "{heading} highlight-count", "{highlight.count}" }
                            p { class: "{muted}", "{highlight.title}" }
                        }
                    }
                }
            }
        }
    }
}
