use dioxus::prelude::*;

use folio::surface::{Surface, classes};

use crate::common::context::use_theme;

#[derive(Clone, PartialEq, Props)]
pub struct SkillTagProps {
    label: String,
}

#[component]
pub fn SkillTag(props: SkillTagProps) -> Element {
    let theme = use_theme();

    rsx! {
        div { class: classes(Surface::SkillTag, theme),
            span { "{props.label}" }
        }
    }
}

#[derive(Clone, PartialEq, Props)]
pub struct TagListProps {
    tags: Vec<&'static str>,
}

// the small pills under project titles
#[component]
pub fn TagList(props: TagListProps) -> Element {
    let theme = use_theme();
    let pill = classes(Surface::Pill, theme);

    rsx! {
        div { class: "tag-row",
            for tag in props.tags.into_iter() {
                span { key: "{tag}", class: "{pill}", "{tag}" }
            }
        }
    }
}
