use crate::theme::ThemeMode;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum ButtonVariant {
    #[default]
    Primary,
    Secondary,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Tone {
    Heading,
    Body,
    Muted,
    Accent,
}

// tinted blocks inside cards
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PanelKind {
    Success,
    Quote,
    Achievement,
    Feature,
}

// themed surfaces
//
// every primitive the pages render goes through Surface::classes(), so the light and
// dark looks are decided in exactly one place.  the output is a plain class list:
// the primitive's own class, its state modifiers, and the theme modifier last.  the
// matching rules live in the webapp stylesheet
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Surface {
    Card { hover: bool },
    Button(ButtonVariant),
    Input,
    SkillTag,
    Pill,
    FilterTab { active: bool },
    NavBar { scrolled: bool },
    NavLink { active: bool },
    ThemeToggle,
    BackButton,
    IconBadge,
    Panel(PanelKind),
    Backdrop,
    Footer,
    Text(Tone),
}

impl Surface {
    pub fn classes(self, mode: ThemeMode) -> String {
        let (base, modifier) = match self {
            Surface::Card { hover } => ("glass-card", hover.then_some("hoverable")),
            Surface::Button(ButtonVariant::Primary) => ("glass-button", Some("primary")),
            Surface::Button(ButtonVariant::Secondary) => ("glass-button", Some("secondary")),
            Surface::Input => ("glass-input", None),
            Surface::SkillTag => ("skill-tag", None),
            Surface::Pill => ("tag-pill", None),
            Surface::FilterTab { active } => ("filter-tab", active.then_some("active")),
            Surface::NavBar { scrolled } => ("site-nav", scrolled.then_some("scrolled")),
            Surface::NavLink { active } => ("nav-link", active.then_some("active")),
            Surface::ThemeToggle => ("theme-toggle", None),
            Surface::BackButton => ("back-button", None),
            Surface::IconBadge => ("icon-badge", None),
            Surface::Panel(PanelKind::Success) => ("panel", Some("success")),
            Surface::Panel(PanelKind::Quote) => ("panel", Some("quote")),
            Surface::Panel(PanelKind::Achievement) => ("panel", Some("achievement")),
            Surface::Panel(PanelKind::Feature) => ("panel", Some("feature")),
            Surface::Backdrop => ("site-backdrop", None),
            Surface::Footer => ("site-footer", None),
            Surface::Text(Tone::Heading) => ("text", Some("heading")),
            Surface::Text(Tone::Body) => ("text", Some("body")),
            Surface::Text(Tone::Muted) => ("text", Some("muted")),
            Surface::Text(Tone::Accent) => ("text", Some("accent")),
        };

        match modifier {
            Some(modifier) => format!("{base} {modifier} {mode}"),
            None => format!("{base} {mode}"),
        }
    }

    // every surface in every state, for checks that have to hold across the board
    pub fn catalog() -> Vec<Surface> {
        let mut all = vec![
            Surface::Input,
            Surface::SkillTag,
            Surface::Pill,
            Surface::ThemeToggle,
            Surface::BackButton,
            Surface::IconBadge,
            Surface::Backdrop,
            Surface::Footer,
            Surface::Button(ButtonVariant::Primary),
            Surface::Button(ButtonVariant::Secondary),
        ];
        for flag in [false, true] {
            all.push(Surface::Card { hover: flag });
            all.push(Surface::FilterTab { active: flag });
            all.push(Surface::NavBar { scrolled: flag });
            all.push(Surface::NavLink { active: flag });
        }
        for kind in [
            PanelKind::Success,
            PanelKind::Quote,
            PanelKind::Achievement,
            PanelKind::Feature,
        ] {
            all.push(Surface::Panel(kind));
        }
        for tone in [Tone::Heading, Tone::Body, Tone::Muted, Tone::Accent] {
            all.push(Surface::Text(tone));
        }
        all
    }
}

// shorthand for the one call every component makes
pub fn classes(surface: Surface, mode: ThemeMode) -> String {
    surface.classes(mode)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::theme::ThemeState;

    fn snapshot(mode: ThemeMode) -> Vec<String> {
        Surface::catalog().into_iter().map(|s| s.classes(mode)).collect()
    }

    #[test]
    fn double_toggle_restores_every_surface() {
        let mut state = ThemeState::new(ThemeMode::Light);
        let before = snapshot(state.mode());

        state.toggle();
        let toggled = snapshot(state.mode());
        state.toggle();

        assert_eq!(snapshot(state.mode()), before);
        assert_ne!(toggled, before);
    }

    #[test]
    fn every_surface_differs_between_themes() {
        for surface in Surface::catalog() {
            assert_ne!(
                surface.classes(ThemeMode::Light),
                surface.classes(ThemeMode::Dark),
                "{surface:?}"
            );
        }
    }

    #[test]
    fn state_modifiers_come_before_theme() {
        assert_eq!(
            Surface::Card { hover: true }.classes(ThemeMode::Dark),
            "glass-card hoverable dark"
        );
        assert_eq!(Surface::Card { hover: false }.classes(ThemeMode::Light), "glass-card light");
        assert_eq!(
            classes(Surface::FilterTab { active: true }, ThemeMode::Light),
            "filter-tab active light"
        );
        assert_eq!(
            Surface::Button(ButtonVariant::Secondary).classes(ThemeMode::Dark),
            "glass-button secondary dark"
        );
    }
}
