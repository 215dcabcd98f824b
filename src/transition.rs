use crate::{Easing, Tween};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum Direction {
    Open,
    Close,
}

#[derive(Clone, Copy, Debug, PartialEq)]
enum Phase {
    /// Start state is written; the tween begins on the next frame.
    Pending,
    Running(Tween),
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub(crate) enum Step {
    Height(f32),
    Done,
}

/// The height animation of one panel.
///
/// A panel has at most one live transition. Starting another one requires completing the
/// previous first, so two completions can never race.
#[derive(Clone, Copy, Debug, PartialEq)]
pub(crate) struct PanelTransition {
    pub(crate) index: usize,
    pub(crate) direction: Direction,
    from: f32,
    to: f32,
    phase: Phase,
}

impl PanelTransition {
    pub(crate) fn new(index: usize, direction: Direction, from: f32, to: f32) -> Self {
        Self {
            index,
            direction,
            from,
            to,
            phase: Phase::Pending,
        }
    }

    pub(crate) fn advance(&mut self, now_ms: u64, duration_ms: u64, easing: Easing) -> Step {
        let tween = match self.phase {
            Phase::Pending => {
                let tween = Tween::new(self.from, self.to, now_ms, duration_ms, easing);
                self.phase = Phase::Running(tween);
                return Step::Height(self.from);
            }
            Phase::Running(tween) => tween,
        };
        if tween.is_done(now_ms) {
            Step::Done
        } else {
            Step::Height(tween.sample(now_ms))
        }
    }
}

/// The compensating scroll animation of the controller's scroll container.
#[derive(Clone, Copy, Debug, PartialEq)]
pub(crate) struct ScrollAnimation {
    pub(crate) to: f32,
    tween: Option<Tween>,
}

impl ScrollAnimation {
    pub(crate) fn new(to: f32) -> Self {
        Self { to, tween: None }
    }

    /// Returns the scroll position for this frame and whether the animation has finished.
    ///
    /// `current` is only read on the first frame, so a replaced animation continues from
    /// wherever the previous one left the container.
    pub(crate) fn advance(
        &mut self,
        now_ms: u64,
        current: f32,
        duration_ms: u64,
        easing: Easing,
    ) -> (f32, bool) {
        let to = self.to;
        let tween = *self
            .tween
            .get_or_insert_with(|| Tween::new(current, to, now_ms, duration_ms, easing));
        if tween.is_done(now_ms) {
            (to, true)
        } else {
            (tween.sample(now_ms), false)
        }
    }
}
