use dioxus::prelude::*;
use dioxus_router::prelude::*;

use folio::{
    nav::{NavItem, ScrollState, nav_items},
    route::Page,
    surface::{Surface, classes},
    theme::ThemeMode,
};

use crate::{
    Route,
    common::{
        context::{use_config, use_document_theme, use_theme, use_theme_state, use_theme_sync},
        listener::use_window_listener,
    },
    components::footer::Footer,
};

#[derive(Clone, PartialEq, Props)]
struct NavBarButtonProps {
    item: NavItem,
}

#[component]
fn NavBarButton(props: NavBarButtonProps) -> Element {
    let theme = use_theme();
    let item = props.item;

    let current_route: Route = use_route();
    let active = item.is_active(&Page::from(&current_route));

    rsx! {
        Link {
            class: classes(Surface::NavLink { active }, theme),
            to: Route::from(item.page.clone()),
            "{item.label}"
            if active {
                span { class: "underline" }
            }
        }
    }
}

#[component]
fn ThemeToggle() -> Element {
    let mut theme_state = use_theme_state();
    let theme = use_theme();

    let (glyph, label) = match theme {
        ThemeMode::Light => ("☾", "Switch to dark mode"),
        ThemeMode::Dark => ("☀", "Switch to light mode"),
    };

    rsx! {
        button {
            class: classes(Surface::ThemeToggle, theme),
            aria_label: label,
            title: label,
            onclick: move |_| {
                theme_state.write().toggle();
            },
            "{glyph}"
        }
    }
}

// reports threshold crossings of the window scroll offset through the returned
// signal, for as long as the nav bar is mounted
fn use_scrolled(threshold: f64) -> Signal<bool> {
    let mut scrolled = use_signal(|| false);
    let mut state = ScrollState::new(threshold);

    use_window_listener("scroll", move |_| {
        let offset = web_sys::window()
            .and_then(|w| w.scroll_y().ok())
            .unwrap_or_default();

        if state.update(offset) {
            scrolled.set(state.scrolled());
        }
    });

    scrolled
}

#[component]
fn NavBarInner() -> Element {
    let theme = use_theme();
    let config = use_config();
    let scrolled = use_scrolled(config.scroll_threshold_px);

    rsx! {
        nav { class: classes(Surface::NavBar { scrolled: scrolled() }, theme),
            div { class: "nav-container",
                Link { class: "nav-brand", to: Route::Home {}, "{config.owner}" }

                div { class: "nav-links",
                    for item in nav_items() {
                        NavBarButton { key: "{item.label}", item }
                    }
                    ThemeToggle {}
                }
            }
        }
    }
}

// layout for every route: fixed bar on top, the routed page, then the footer
#[component]
pub fn NavBar() -> Element {
    let theme = use_theme();
    use_document_theme();
    use_theme_sync();

    rsx! {
        div { class: classes(Surface::Backdrop, theme),
            NavBarInner {}
            div { class: "nav-spacer" }
            main { class: "site-main", Outlet::<Route> {} }
            Footer {}
        }
    }
}
