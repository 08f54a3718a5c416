use dioxus::prelude::*;
use dioxus_router::prelude::*;
use gloo_timers::callback::Timeout;
use tracing::debug;

use folio::{
    content::{CategoryFilter, PROJECTS, Project, filter_projects},
    motion::{EXIT_MS, Effect, Motion},
    surface::{Surface, Tone, classes},
};

use crate::{
    Route,
    common::context::{use_handoff, use_theme},
    components::{
        glass::GlassCard, image::FallbackImage, reveal::Reveal, tags::TagList,
    },
};

#[derive(Clone, PartialEq, Props)]
struct FilterTabsProps {
    selected: Signal<CategoryFilter>,
}

#[component]
fn FilterTabs(props: FilterTabsProps) -> Element {
    let theme = use_theme();
    let mut selected = props.selected;

    rsx! {
        div { class: "filter-tabs",
            for filter in CategoryFilter::all() {
                button {
                    key: "{filter.label()}",
                    class: classes(Surface::FilterTab { active: selected() == filter }, theme),
                    onclick: move |_| {
                        debug!({ filter = filter.label() }, "portfolio filter selected");
                        selected.set(filter);
                    },
                    "{filter.label()}"
                }
            }
        }
    }
}

#[derive(Clone, PartialEq, Props)]
struct ProjectCardProps {
    project: Project,
}

// clicking a card hands the project to the case study page through the handoff
// slot; the url carries nothing
#[component]
fn ProjectCard(props: ProjectCardProps) -> Element {
    let theme = use_theme();
    let mut handoff = use_handoff();
    let project = props.project;
    let selected = project.clone();
    let pill = classes(Surface::Pill, theme);

    rsx! {
        GlassCard {
            hover: true,
            class: "flush project-card",
            onclick: move |_| {
                handoff.write().offer(selected.clone());
                navigator().push(Route::CaseStudy {});
            },
            div { class: "project-image",
                FallbackImage {
                    asset: project.image,
                    alt: project.title.to_owned(),
                }
                span { class: "{pill} project-category",
                    "{project.category}"
                }
            }
            div { class: "project-body",
                h3 { class: classes(Surface::Text(Tone::Heading), theme), "{project.title}" }
                p { class: classes(Surface::Text(Tone::Muted), theme), "{project.description}" }
                TagList { tags: project.tags.to_vec() }
            }
        }
    }
}

#[component]
pub fn Portfolio() -> Element {
    let theme = use_theme();
    let selected = use_signal(CategoryFilter::default);
    let mut shown = use_signal(CategoryFilter::default);
    let mut swap = use_signal(|| None::<Timeout>);

    // the grid keeps the old selection while the cards that are leaving play their
    // exit, then swaps in the new one.  picking the shown filter again before the
    // swap cancels it
    use_effect(move || {
        let target = selected();
        if target == *shown.peek() {
            swap.set(None);
            return;
        }

        swap.set(Some(Timeout::new(EXIT_MS, move || shown.set(target))));
    });

    let visible = use_memo(move || {
        filter_projects(shown(), PROJECTS)
            .into_iter()
            .cloned()
            .collect::<Vec<Project>>()
    });

    rsx! {
        div { class: "page page-wide portfolio-page",
            Reveal { class: "page-header",
                h1 { class: classes(Surface::Text(Tone::Heading), theme), "Portfolio" }
                p { class: classes(Surface::Text(Tone::Muted), theme),
                    "A selection of work across design, development, photography, writing and video."
                }
            }

            Reveal { motion: Motion::new(Effect::Fade, 600).delayed(200),
                FilterTabs { selected }
            }

            div { class: "project-grid",
                for (i, project) in visible().into_iter().enumerate() {
                    Reveal {
                        key: "{project.id}",
                        motion: Motion::default().staggered(0, i, 100),
                        dismissed: !selected().matches(project.category),
                        ProjectCard { project: project.clone() }
                    }
                }
            }
        }
    }
}
