use std::{cell::Cell, rc::Rc};

use dioxus::prelude::*;
use tracing::{debug, info, warn};
use wasm_bindgen::JsCast;
use web_sys::StorageEvent;

use folio::{
    assets::{AssetId, AssetResolver, BundledAssets},
    config::SiteConfig,
    content::Project,
    route::Handoff,
    theme::{SubscriptionId, ThemeMode, ThemeState},
};

use crate::common::{
    listener::use_window_listener,
    storage::{set_local_storage, storage_key, try_local_storage},
};

const THEME_KEY: &str = "theme";

// site context
//
// App calls this once; everything below reads it back through the use_* helpers.
// the config itself is injected by the launcher in main()
pub fn provide_site_context() {
    let config = use_context::<SiteConfig>();

    let assets = BundledAssets::new(&config.asset_root);
    use_context_provider(move || assets);

    let theme_config = config.clone();
    use_context_provider(move || Signal::new(init_theme(&theme_config)));

    use_context_provider(|| Signal::new(Handoff::<Project>::empty()));
}

fn init_theme(config: &SiteConfig) -> ThemeState {
    let mode = match config.persist_theme {
        true => try_local_storage::<ThemeMode>(THEME_KEY).unwrap_or(config.default_theme),
        false => config.default_theme,
    };

    let mut state = ThemeState::new(mode);

    state.subscribe(|mode| info!({ mode = %mode }, "theme changed"));
    if config.persist_theme {
        state.subscribe(|mode| set_local_storage(THEME_KEY, mode));
    }

    state
}

// follows theme changes made in other tabs of the site
//
// the browser only fires "storage" for writes from other documents, so the set() here
// cannot bounce back into this tab's own persistence subscriber
pub fn use_theme_sync() {
    let config = use_config();
    let mut theme_state = use_theme_state();
    let key = storage_key(THEME_KEY);

    use_window_listener("storage", move |evt| {
        if !config.persist_theme {
            return;
        }

        let Ok(evt) = evt.dyn_into::<StorageEvent>() else {
            return;
        };

        if evt.key().as_deref() != Some(key.as_str()) {
            return;
        }

        if let Some(mode) = try_local_storage::<ThemeMode>(THEME_KEY) {
            debug!({ mode = %mode }, "theme changed in another tab");
            theme_state.write().set(mode);
        }
    });
}

// mirrors the mode onto <html data-theme=...> so the page behind the app shell
// (overscroll, scrollbars) matches it
//
// registered as a ThemeState subscriber while the calling component is mounted
pub fn use_document_theme() {
    let mut theme_state = use_theme_state();
    let subscription = use_hook(|| Rc::new(Cell::new(None::<SubscriptionId>)));

    let registered = subscription.clone();
    use_effect(move || {
        if registered.get().is_some() {
            return;
        }

        apply_document_theme(theme_state.peek().mode());
        let id = theme_state.write().subscribe(apply_document_theme);
        registered.set(Some(id));
    });

    use_drop(move || {
        if let Some(id) = subscription.take() {
            // the context may already be gone when the whole app unmounts
            if let Ok(mut state) = theme_state.try_write() {
                state.unsubscribe(id);
            }
        }
    });
}

fn apply_document_theme(mode: ThemeMode) {
    let Some(root) = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.document_element())
    else {
        warn!("no document element to theme");
        return;
    };

    if let Err(err) = root.set_attribute("data-theme", &mode.to_string()) {
        warn!("failed to set document theme: {err:?}");
    }
}

pub fn use_config() -> SiteConfig {
    use_context::<SiteConfig>()
}

pub fn use_theme_state() -> Signal<ThemeState> {
    use_context::<Signal<ThemeState>>()
}

// reading the mode through the signal subscribes the calling component, so it
// re-renders on every toggle
pub fn use_theme() -> ThemeMode {
    use_theme_state().read().mode()
}

pub fn use_handoff() -> Signal<Handoff<Project>> {
    use_context::<Signal<Handoff<Project>>>()
}

pub fn use_asset(asset: AssetId) -> String {
    use_context::<BundledAssets>().resolve(&asset)
}
