use dioxus::prelude::*;
use dioxus_router::prelude::*;

use folio::{
    content::{Content, PROCESS_STEPS, SOLUTION_FEATURES},
    motion::{Effect, Motion},
    route::{Fallback, Page, Resolved},
    surface::{PanelKind, Surface, Tone, classes},
};

use crate::{
    Route,
    common::context::{use_handoff, use_theme},
    components::{
        fallback::FallbackCard,
        glass::{GlassButton, GlassCard},
        image::FallbackImage,
        reveal::Reveal,
    },
};

// every case study is dated the same; projects carry no year of their own
const CASE_STUDY_YEAR: &str = "2024";

#[component]
pub fn CaseStudy() -> Element {
    let theme = use_theme();
    let handoff = use_handoff();

    let project = match Page::CaseStudy.resolve(&Content::site(), &handoff.read()) {
        Resolved::CaseStudy(project) => project.clone(),
        Resolved::Fallback(fallback) => return rsx! { FallbackCard { fallback } },
        _ => return rsx! { FallbackCard { fallback: Fallback::ProjectMissing } },
    };

    let heading = classes(Surface::Text(Tone::Heading), theme);
    let body = classes(Surface::Text(Tone::Body), theme);
    let muted = classes(Surface::Text(Tone::Muted), theme);
    let pill = classes(Surface::Pill, theme);
    let skill_tag = classes(Surface::SkillTag, theme);
    let category = project.category.label().to_lowercase();

    rsx! {
        div { class: "page page-medium case-study-page",
            Reveal { motion: Motion::new(Effect::Fade, 400),
                button {
                    class: classes(Surface::BackButton, theme),
                    onclick: move |_| {
                        navigator().push(Route::Portfolio {});
                    },
                    "← Back to Portfolio"
                }
            }

            Reveal {
                GlassCard { class: "case-header",
                    h1 { class: "{heading}", "{project.title}" }
                    p { class: "{body}", "{project.description}" }
                    div { class: "case-meta",
                        span { class: "{pill}", "{CASE_STUDY_YEAR}" }
                        span { class: "{pill}", "{project.category}" }
                    }
                    div { class: "tag-row",
                        for tag in project.tags.iter() {
                            span { key: "{tag}", class: "{skill_tag}", "{tag}" }
                        }
                    }
                }
            }

            Reveal { motion: Motion::new(Effect::Scale, 800).delayed(200),
                GlassCard { class: "flush case-hero",
                    FallbackImage { asset: project.image, alt: project.title.to_owned() }
                }
            }

            Reveal { motion: Motion::default().delayed(300),
                GlassCard { class: "case-section",
                    h2 { class: "{heading}", "Overview" }
                    p { class: "{body}",
                        "This project showcases a comprehensive approach to {category} that combines modern design principles with user-centered methodologies. The goal was to create an experience that is both aesthetically pleasing and highly functional."
                    }
                    p { class: "{body}",
                        "Through careful research, iterative design, and continuous refinement, we achieved a solution that not only meets but exceeds user expectations while maintaining brand consistency and accessibility standards."
                    }
                }
            }

            Reveal { motion: Motion::default().delayed(400),
                GlassCard { class: "case-section",
                    h2 { class: "{heading}", "Problem Statement" }
                    p { class: "{body}",
                        "Users were facing challenges with existing solutions that lacked intuitive navigation and modern design patterns. The interface needed to be reimagined to provide a seamless experience across all touchpoints."
                    }
                    div { class: classes(Surface::Panel(PanelKind::Quote), theme),
                        p { class: "{heading}",
                            "\"How might we create a solution that balances simplicity with powerful functionality while maintaining visual appeal?\""
                        }
                    }
                }
            }

            Reveal { motion: Motion::default().delayed(500),
                GlassCard { class: "case-section",
                    h2 { class: "{heading}", "Design Process" }
                    div { class: "stack",
                        for step in PROCESS_STEPS.iter() {
                            div { key: "{step.step}", class: "process-step",
                                div { class: classes(Surface::IconBadge, theme), "{step.step}" }
                                div {
                                    h4 { class: "{heading}", "{step.title}" }
                                    p { class: "{muted}", "{step.description}" }
                                }
                            }
                        }
                    }
                }
            }

            Reveal { motion: Motion::default().delayed(600),
                GlassCard { class: "case-section",
                    h2 { class: "{heading}", "Final Solution" }
                    p { class: "{body}",
                        "The final solution delivers a polished, intuitive experience that aligns with user needs and business objectives. Key features include:"
                    }
                    div { class: "feature-grid",
                        for feature in SOLUTION_FEATURES.iter() {
                            div {
                                key: "{feature}",
                                class: classes(Surface::Panel(PanelKind::Feature), theme),
                                span { class: "{heading}", "✓ {feature}" }
                            }
                        }
                    }
                }
            }

            Reveal { motion: Motion::default().delayed(700), class: "case-cta",
                GlassButton {
                    onclick: move |_| {
                        navigator().push(Route::Contact {});
                    },
                    "Discuss Your Project"
                }
            }
        }
    }
}
