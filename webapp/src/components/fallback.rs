use dioxus::prelude::*;
use dioxus_router::prelude::*;

use folio::{
    route::Fallback,
    surface::{Surface, Tone, classes},
};

use crate::{Route, common::context::use_theme, components::glass::GlassCard};

#[derive(Clone, PartialEq, Props)]
pub struct FallbackCardProps {
    fallback: Fallback,
}

// shown whenever a page cannot find what it was asked to show; the only way out is
// back to the listing the missing thing would have come from
#[component]
pub fn FallbackCard(props: FallbackCardProps) -> Element {
    let theme = use_theme();
    let fallback = props.fallback;
    let back = classes(Surface::BackButton, theme);

    rsx! {
        div { class: "page fallback-page",
            GlassCard {
                div { class: "fallback-body",
                    h2 { class: classes(Surface::Text(Tone::Heading), theme), "{fallback.title()}" }
                    button {
                        class: "{back} fallback-action",
                        onclick: move |_| {
                            navigator().push(Route::from(fallback.back_to()));
                        },
                        "← {fallback.back_label()}"
                    }
                }
            }
        }
    }
}
