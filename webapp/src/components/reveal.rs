use std::rc::Rc;

use dioxus::prelude::*;
use gloo_timers::callback::Timeout;

use folio::motion::{Motion, Phase, Trigger};

#[derive(Clone, PartialEq, Props)]
pub struct RevealProps {
    #[props(default)]
    motion: Motion,
    #[props(default)]
    class: String,
    // set by the parent shortly before it drops this element
    #[props(default)]
    dismissed: bool,
    children: Element,
}

// entrance animation wrapper
//
// mounts its children in the entering phase and settles them once the motion's
// delay has passed; the css transition does the rest.  the timeout is owned by the
// hook, so unmounting before it fires cancels it.  a dismissed element shows its
// exit until the parent removes it, and comes back if the dismissal is withdrawn
#[component]
pub fn Reveal(props: RevealProps) -> Element {
    let motion = props.motion;
    let mut phase = use_signal(|| Phase::default().next(Trigger::Mounted));

    use_hook(move || {
        // one frame at minimum, or the entering styles never get painted
        let delay = motion.delay_ms.max(16);
        Rc::new(Timeout::new(delay, move || {
            phase.set(phase().next(Trigger::Settled));
        }))
    });

    let current = match props.dismissed {
        true => phase().next(Trigger::Dismissed),
        false => phase(),
    };

    rsx! {
        div {
            class: "{motion.classes(current)} {props.class}",
            style: "{motion.style(current)}",
            {props.children}
        }
    }
}
