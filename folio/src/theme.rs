use std::fmt;

use serde::{Deserialize, Serialize};
use tracing::debug;

// display mode
//
// every themed surface picks its classes from this value, see surface.rs
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeMode {
    #[default]
    Light,
    Dark,
}

impl ThemeMode {
    pub fn toggled(self) -> Self {
        match self {
            ThemeMode::Light => ThemeMode::Dark,
            ThemeMode::Dark => ThemeMode::Light,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            ThemeMode::Light => "light",
            ThemeMode::Dark => "dark",
        }
    }

    pub fn is_dark(self) -> bool {
        self == ThemeMode::Dark
    }
}

impl fmt::Display for ThemeMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl From<String> for ThemeMode {
    fn from(value: String) -> Self {
        match value.as_str() {
            "dark" | "Dark" => ThemeMode::Dark,
            _ => ThemeMode::Light,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

type Subscriber = Box<dyn FnMut(ThemeMode)>;

// theme owner
//
// there is exactly one of these per running site.  the webapp wraps it in a signal
// and hands it out through context, so rendering picks up changes on its own; the
// subscribers here are for the side effects that live outside of rendering (storage,
// logging).  subscribers are called in registration order
pub struct ThemeState {
    mode: ThemeMode,
    next_id: u64,
    subscribers: Vec<(SubscriptionId, Subscriber)>,
}

impl ThemeState {
    pub fn new(mode: ThemeMode) -> Self {
        ThemeState {
            mode,
            next_id: 0,
            subscribers: Vec::new(),
        }
    }

    pub fn mode(&self) -> ThemeMode {
        self.mode
    }

    pub fn toggle(&mut self) -> ThemeMode {
        self.mode = self.mode.toggled();
        debug!({ mode = %self.mode }, "theme toggled");
        self.notify();
        self.mode
    }

    /// Replace the mode, notifying subscribers only if it actually changed.
    pub fn set(&mut self, mode: ThemeMode) {
        if self.mode != mode {
            self.mode = mode;
            self.notify();
        }
    }

    pub fn subscribe<F>(&mut self, f: F) -> SubscriptionId
    where
        F: FnMut(ThemeMode) + 'static,
    {
        let id = SubscriptionId(self.next_id);
        self.next_id += 1;
        self.subscribers.push((id, Box::new(f)));
        id
    }

    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.subscribers.len();
        self.subscribers.retain(|(sid, _)| *sid != id);
        before != self.subscribers.len()
    }

    fn notify(&mut self) {
        let mode = self.mode;
        for (_, f) in self.subscribers.iter_mut() {
            f(mode);
        }
    }
}

impl fmt::Debug for ThemeState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ThemeState")
            .field("mode", &self.mode)
            .field("subscribers", &self.subscribers.len())
            .finish()
    }
}

impl Default for ThemeState {
    fn default() -> Self {
        ThemeState::new(ThemeMode::default())
    }
}

#[cfg(test)]
mod tests {
    use std::{cell::RefCell, rc::Rc};

    use super::*;

    #[test]
    fn toggle_flips_between_modes() {
        let mut state = ThemeState::new(ThemeMode::Light);

        assert_eq!(state.toggle(), ThemeMode::Dark);
        assert_eq!(state.toggle(), ThemeMode::Light);
        assert_eq!(state.mode(), ThemeMode::Light);
    }

    #[test]
    fn subscribers_see_every_toggle() {
        let seen = Rc::new(RefCell::new(Vec::new()));
        let mut state = ThemeState::new(ThemeMode::Light);

        let sink = seen.clone();
        state.subscribe(move |mode| sink.borrow_mut().push(mode));

        state.toggle();
        state.toggle();

        assert_eq!(*seen.borrow(), vec![ThemeMode::Dark, ThemeMode::Light]);
    }

    #[test]
    fn unsubscribed_listeners_are_not_called() {
        let count = Rc::new(RefCell::new(0));
        let mut state = ThemeState::default();

        let sink = count.clone();
        let id = state.subscribe(move |_| *sink.borrow_mut() += 1);

        state.toggle();
        assert!(state.unsubscribe(id));
        assert!(!state.unsubscribe(id));
        state.toggle();

        assert_eq!(*count.borrow(), 1);
    }

    #[test]
    fn set_only_notifies_on_change() {
        let count = Rc::new(RefCell::new(0));
        let mut state = ThemeState::new(ThemeMode::Dark);

        let sink = count.clone();
        state.subscribe(move |_| *sink.borrow_mut() += 1);

        state.set(ThemeMode::Dark);
        assert_eq!(*count.borrow(), 0);

        state.set(ThemeMode::Light);
        assert_eq!(*count.borrow(), 1);
        assert_eq!(state.mode(), ThemeMode::Light);
    }

    #[test]
    fn parses_from_stored_strings() {
        assert_eq!(ThemeMode::from(String::from("dark")), ThemeMode::Dark);
        assert_eq!(ThemeMode::from(String::from("light")), ThemeMode::Light);
        assert_eq!(ThemeMode::from(String::from("sepia")), ThemeMode::Light);
    }
}
