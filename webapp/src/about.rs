use dioxus::prelude::*;
use dioxus_router::prelude::*;

use folio::{
    assets::AssetId,
    content::{EXPERIENCE, ExperienceEntry, SKILL_GROUPS},
    motion::{Effect, Motion},
    surface::{Surface, Tone, classes},
};

use crate::{
    Route,
    common::context::{use_config, use_theme},
    components::{glass::GlassCard, image::FallbackImage, reveal::Reveal, tags::SkillTag},
};

const PROFILE_IMAGE: AssetId = AssetId::Bundled("profile.png");

const BIO: [&str; 3] = [
    "I'm a multidisciplinary creative with a passion for crafting beautiful and functional digital experiences. With 1 year of experience in UI/UX design and React development, I bring a unique perspective that connects design and code.",
    "Beyond digital work, I've spent the past 2 years exploring creativity through photography and content writing. This combination allows me to approach problems from different angles and deliver more holistic solutions.",
    "When I'm not designing or coding, you'll find me capturing urban landscapes through my camera, writing about design and technology, or experimenting with new creative tools.",
];

#[derive(Clone, PartialEq, Props)]
struct ExperienceCardProps {
    entry: ExperienceEntry,
}

#[component]
fn ExperienceCard(props: ExperienceCardProps) -> Element {
    let theme = use_theme();
    let entry = props.entry;
    let id = entry.id;

    rsx! {
        GlassCard {
            hover: true,
            onclick: move |_| {
                navigator().push(Route::ExperienceDetail { id: id.to_owned() });
            },
            div { class: "experience-row",
                div { class: classes(Surface::IconBadge, theme), "{entry.icon.glyph()}" }
                div { class: "experience-text",
                    div { class: "experience-heading",
                        div {
                            h4 { class: classes(Surface::Text(Tone::Heading), theme), "{entry.title}" }
                            p { class: classes(Surface::Text(Tone::Muted), theme), "{entry.company}" }
                        }
                        span { class: classes(Surface::Pill, theme), "{entry.period}" }
                    }
                    p { class: classes(Surface::Text(Tone::Body), theme), "{entry.summary}" }
                }
            }
        }
    }
}

#[component]
pub fn About() -> Element {
    let theme = use_theme();
    let config = use_config();

    let heading = classes(Surface::Text(Tone::Heading), theme);
    let body = classes(Surface::Text(Tone::Body), theme);
    let accent = classes(Surface::Text(Tone::Accent), theme);
    let pill = classes(Surface::Pill, theme);

    rsx! {
        div { class: "page page-wide about-page",
            Reveal { class: "page-header",
                h1 { class: "{heading}", "About Me" }
                p { class: classes(Surface::Text(Tone::Muted), theme),
                    "Multidisciplinary creative passionate about crafting exceptional experiences"
                }
            }

            Reveal { motion: Motion::default().delayed(200),
                GlassCard { class: "profile-card",
                    div { class: "profile-photo",
                        div { class: "profile-frame {theme}",
                            FallbackImage {
                                asset: PROFILE_IMAGE,
                                alt: config.owner.clone(),
                                class: "profile-image",
                            }
                        }
                        div { class: "{pill} status-badge",
                            span { class: "pulse-dot" }
                            "Available for work"
                        }
                    }
                    div { class: "profile-bio",
                        h2 { class: "{heading}", "{config.owner}" }
                        for paragraph in BIO {
                            p { key: "{paragraph}", class: "{body}", "{paragraph}" }
                        }
                    }
                }
            }

            section { class: "about-section",
                Reveal { motion: Motion::default().delayed(300),
                    h2 { class: "{heading} section-title", "Skills & Tools" }
                }
                div { class: "skill-grid",
                    for (i, group) in SKILL_GROUPS.iter().enumerate() {
                        Reveal {
                            key: "{group.category}",
                            motion: Motion::new(Effect::Rise, 500).staggered(400, i, 100),
                            GlassCard {
                                div { class: "skill-group-heading",
                                    span { class: "{accent}", "{group.glyph}" }
                                    h3 { class: "{heading}", "{group.category}" }
                                }
                                div { class: "tag-row",
                                    for item in group.items.iter() {
                                        SkillTag { key: "{item}", label: item.to_string() }
                                    }
                                }
                            }
                        }
                    }
                }
            }

            section { class: "about-section",
                Reveal { motion: Motion::default().delayed(400),
                    h2 { class: "{heading} section-title", "Experience" }
                }
                div { class: "stack",
                    for (i, entry) in EXPERIENCE.iter().enumerate() {
                        Reveal {
                            key: "{entry.id}",
                            motion: Motion::new(Effect::SlideLeft, 500).staggered(500, i, 100),
                            ExperienceCard { entry: entry.clone() }
                        }
                    }
                }
            }
        }
    }
}
