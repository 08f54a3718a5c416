// entrance transitions
//
// an animated element is always in one of three phases, and only moves between
// them on an explicit trigger.  the webapp turns phase + effect into css classes and
// lets the stylesheet do the actual animating
// exits are quicker than entrances, the caller removes the element after this long
pub const EXIT_MS: u32 = 300;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Phase {
    #[default]
    Entering,
    Visible,
    Exiting,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Trigger {
    // the element was (re)inserted
    Mounted,
    // its entrance delay elapsed
    Settled,
    // it is about to be removed
    Dismissed,
}

impl Phase {
    pub fn next(self, trigger: Trigger) -> Phase {
        match (self, trigger) {
            (_, Trigger::Dismissed) => Phase::Exiting,
            (Phase::Entering, Trigger::Settled) => Phase::Visible,
            (Phase::Exiting, Trigger::Mounted) => Phase::Entering,
            (phase, _) => phase,
        }
    }

    pub fn class(self) -> &'static str {
        match self {
            Phase::Entering => "entering",
            Phase::Visible => "visible",
            Phase::Exiting => "exiting",
        }
    }
}

// where the element comes from while entering
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Effect {
    Fade,
    #[default]
    Rise,
    SlideLeft,
    SlideRight,
    Scale,
}

impl Effect {
    pub fn class(self) -> &'static str {
        match self {
            Effect::Fade => "fx-fade",
            Effect::Rise => "fx-rise",
            Effect::SlideLeft => "fx-slide-left",
            Effect::SlideRight => "fx-slide-right",
            Effect::Scale => "fx-scale",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Motion {
    pub effect: Effect,
    pub duration_ms: u32,
    pub delay_ms: u32,
}

impl Motion {
    pub const fn new(effect: Effect, duration_ms: u32) -> Self {
        Motion {
            effect,
            duration_ms,
            delay_ms: 0,
        }
    }

    pub const fn delayed(self, delay_ms: u32) -> Self {
        Motion { delay_ms, ..self }
    }

    /// Delay for the `index`-th element of a list: `base + index * step`.
    pub fn staggered(self, base_ms: u32, index: usize, step_ms: u32) -> Self {
        let index = u32::try_from(index).unwrap_or(u32::MAX);
        self.delayed(base_ms.saturating_add(index.saturating_mul(step_ms)))
    }

    pub fn classes(&self, phase: Phase) -> String {
        format!("reveal {} {}", self.effect.class(), phase.class())
    }

    pub fn style(&self, phase: Phase) -> String {
        let duration = match phase {
            Phase::Exiting => self.duration_ms.min(EXIT_MS),
            _ => self.duration_ms,
        };
        format!("transition-duration: {duration}ms;")
    }
}

impl Default for Motion {
    fn default() -> Self {
        Motion::new(Effect::default(), 600)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn enters_then_settles() {
        let phase = Phase::default();

        assert_eq!(phase, Phase::Entering);
        assert_eq!(phase.next(Trigger::Mounted), Phase::Entering);
        assert_eq!(phase.next(Trigger::Settled), Phase::Visible);
        assert_eq!(Phase::Visible.next(Trigger::Settled), Phase::Visible);
    }

    #[test]
    fn dismissal_wins_from_any_phase() {
        for phase in [Phase::Entering, Phase::Visible, Phase::Exiting] {
            assert_eq!(phase.next(Trigger::Dismissed), Phase::Exiting);
        }
    }

    #[test]
    fn remount_restarts_an_exit() {
        assert_eq!(Phase::Exiting.next(Trigger::Mounted), Phase::Entering);
        assert_eq!(Phase::Exiting.next(Trigger::Settled), Phase::Exiting);
    }

    #[test]
    fn stagger_offsets_by_index() {
        let motion = Motion::new(Effect::Scale, 400);

        assert_eq!(motion.staggered(700, 0, 100).delay_ms, 700);
        assert_eq!(motion.staggered(700, 3, 100).delay_ms, 1000);
        assert_eq!(motion.staggered(u32::MAX, 2, 100).delay_ms, u32::MAX);
    }

    #[test]
    fn classes_follow_phase() {
        let motion = Motion::new(Effect::SlideLeft, 500);

        assert_eq!(motion.classes(Phase::Entering), "reveal fx-slide-left entering");
        assert_eq!(motion.classes(Phase::Visible), "reveal fx-slide-left visible");
    }

    #[test]
    fn dismissed_elements_exit_within_the_removal_delay() {
        let motion = Motion::default().delayed(400);
        let leaving = Phase::Visible.next(Trigger::Dismissed);

        assert_eq!(motion.classes(leaving), "reveal fx-rise exiting");
        assert_eq!(motion.style(leaving), format!("transition-duration: {EXIT_MS}ms;"));
        assert_eq!(motion.style(Phase::Visible), "transition-duration: 600ms;");

        let quick = Motion::new(Effect::Fade, 150);
        assert_eq!(quick.style(leaving), "transition-duration: 150ms;");
    }
}
