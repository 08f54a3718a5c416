use dioxus::prelude::*;

use folio::{
    contact::Field,
    surface::{ButtonVariant, Surface, classes},
};

use crate::common::context::use_theme;

#[derive(Clone, PartialEq, Props)]
pub struct GlassCardProps {
    #[props(default)]
    hover: bool,
    #[props(default)]
    class: String,
    onclick: Option<EventHandler<MouseEvent>>,
    children: Element,
}

#[component]
pub fn GlassCard(props: GlassCardProps) -> Element {
    let theme = use_theme();
    let surface = classes(Surface::Card { hover: props.hover }, theme);
    let onclick = props.onclick;

    rsx! {
        div {
            class: "{surface} {props.class}",
            onclick: move |evt| {
                if let Some(handler) = onclick {
                    handler.call(evt);
                }
            },
            {props.children}
        }
    }
}

#[derive(Clone, PartialEq, Props)]
pub struct GlassButtonProps {
    #[props(default)]
    variant: ButtonVariant,
    // submit buttons hand the click to the enclosing form
    #[props(default)]
    submit: bool,
    #[props(default)]
    class: String,
    onclick: Option<EventHandler<MouseEvent>>,
    children: Element,
}

#[component]
pub fn GlassButton(props: GlassButtonProps) -> Element {
    let theme = use_theme();
    let surface = classes(Surface::Button(props.variant), theme);
    let button_type = if props.submit { "submit" } else { "button" };
    let onclick = props.onclick;

    rsx! {
        button {
            r#type: button_type,
            class: "{surface} {props.class}",
            onclick: move |evt| {
                if let Some(handler) = onclick {
                    handler.call(evt);
                }
            },
            {props.children}
        }
    }
}

#[derive(Clone, PartialEq, Props)]
pub struct GlassInputProps {
    field: Field,
    placeholder: String,
    value: String,
    oninput: EventHandler<(Field, String)>,
    #[props(default = "text".to_owned())]
    input_type: String,
    // renders a textarea with this many rows instead of an input
    rows: Option<u32>,
}

#[component]
pub fn GlassInput(props: GlassInputProps) -> Element {
    let theme = use_theme();
    let surface = classes(Surface::Input, theme);
    let field = props.field;
    let oninput = props.oninput;

    match props.rows {
        Some(rows) => rsx! {
            textarea {
                class: "{surface}",
                name: field.name(),
                placeholder: "{props.placeholder}",
                rows: "{rows}",
                required: true,
                value: "{props.value}",
                oninput: move |evt| oninput.call((field, evt.value())),
            }
        },
        None => rsx! {
            input {
                class: "{surface}",
                r#type: "{props.input_type}",
                name: field.name(),
                placeholder: "{props.placeholder}",
                required: true,
                value: "{props.value}",
                oninput: move |evt| oninput.call((field, evt.value())),
            }
        },
    }
}
