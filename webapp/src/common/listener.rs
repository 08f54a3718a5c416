use std::rc::Rc;

use dioxus::prelude::*;
use tracing::warn;
use wasm_bindgen::{JsCast, JsValue, closure::Closure};
use web_sys::Event;

// window event listener scoped to the calling component
//
// the handler is registered on the first render and removed again when the component
// is dropped.  later renders do not replace it, so anything it needs to see change
// has to be a signal
pub fn use_window_listener<F>(event: &'static str, handler: F)
where
    F: FnMut(Event) + 'static,
{
    let listener = use_hook(move || {
        let closure = Closure::<dyn FnMut(Event)>::new(handler);

        match web_sys::window() {
            Some(window) => {
                if let Err(err) =
                    window.add_event_listener_with_callback(event, closure.as_ref().unchecked_ref())
                {
                    warn!(event, "failed to register window listener: {err:?}");
                }
            }
            None => warn!(event, "no window to listen on"),
        }

        Rc::new(closure)
    });

    use_drop(move || {
        if let Some(window) = web_sys::window() {
            let callback: &JsValue = (*listener).as_ref();
            let _ = window.remove_event_listener_with_callback(event, callback.unchecked_ref());
        }
    });
}
