use dioxus::prelude::*;
use dioxus_router::prelude::*;
use tracing::debug;

use folio::{
    content::{EXPERIENCE, ExperienceEntry, find_experience},
    motion::{Effect, Motion},
    route::Fallback,
    surface::{PanelKind, Surface, Tone, classes},
};

use crate::{
    Route,
    common::context::use_theme,
    components::{fallback::FallbackCard, glass::GlassCard, reveal::Reveal, tags::SkillTag},
};

#[derive(Clone, PartialEq, Props)]
pub struct ExperienceDetailProps {
    id: String,
}

#[component]
pub fn ExperienceDetail(props: ExperienceDetailProps) -> Element {
    // keyed by the url alone; the project handoff plays no part here
    let Some(entry) = find_experience(EXPERIENCE, &props.id).cloned() else {
        debug!({ id = %props.id }, "experience not found");
        return rsx! { FallbackCard { fallback: Fallback::ExperienceMissing } };
    };

    rsx! {
        ExperienceView { entry }
    }
}

#[derive(Clone, PartialEq, Props)]
struct ExperienceViewProps {
    entry: ExperienceEntry,
}

#[component]
fn ExperienceView(props: ExperienceViewProps) -> Element {
    let theme = use_theme();
    let entry = props.entry;

    let heading = classes(Surface::Text(Tone::Heading), theme);
    let body = classes(Surface::Text(Tone::Body), theme);
    let muted = classes(Surface::Text(Tone::Muted), theme);
    let accent = classes(Surface::Text(Tone::Accent), theme);
    let achievement = classes(Surface::Panel(PanelKind::Achievement), theme);
    let badge = classes(Surface::IconBadge, theme);

    rsx! {
        div { class: "page page-medium experience-page",
            Reveal { motion: Motion::new(Effect::SlideLeft, 400),
                button {
                    class: classes(Surface::BackButton, theme),
                    onclick: move |_| {
                        navigator().push(Route::About {});
                    },
                    "← Back to About"
                }
            }

            Reveal {
                GlassCard {
                    div { class: "experience-header",
                        div { class: "{badge} large", "{entry.icon.glyph()}" }
                        div {
                            h1 { class: "{heading}", "{entry.title}" }
                            p { class: "{accent}", "{entry.company}" }
                        }
                    }
                    div { class: "experience-meta {muted}",
                        span { "📅 {entry.period}" }
                        span { "📍 {entry.location}" }
                        span { "💼 {entry.kind}" }
                    }
                    p { class: "{body}", "{entry.description}" }
                }
            }

            Reveal { motion: Motion::default().delayed(200),
                GlassCard {
                    h2 { class: "{heading}", "Key Responsibilities" }
                    ul { class: "check-list",
                        for (i, item) in entry.responsibilities.iter().enumerate() {
                            li { key: "{i}", class: "{body}",
                                span { class: "{accent}", "✓" }
                                span { "{item}" }
                            }
                        }
                    }
                }
            }

            Reveal { motion: Motion::default().delayed(300),
                GlassCard {
                    h2 { class: "{heading}", "Key Achievements" }
                    div { class: "achievement-grid",
                        for (i, item) in entry.achievements.iter().enumerate() {
                            div { key: "{i}", class: "{achievement}",
                                p { class: "{body}", "{item}" }
                            }
                        }
                    }
                }
            }

            Reveal { motion: Motion::default().delayed(400),
                GlassCard {
                    div { class: "skills-tools",
                        div {
                            h3 { class: "{heading}", "Skills" }
                            div { class: "tag-row",
                                for skill in entry.skills.iter() {
                                    SkillTag { key: "{skill}", label: skill.to_string() }
                                }
                            }
                        }
                        div {
                            h3 { class: "{heading}", "Tools" }
                            div { class: "tag-row",
                                for tool in entry.tools.iter() {
                                    SkillTag { key: "{tool}", label: tool.to_string() }
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}
