//! Pure step sequencer for the setup wizard. No I/O.

use serde::{Deserialize, Serialize};

/// Steps in the setup wizard, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WizardStep {
    Welcome,
    Context,
    Objectives,
    Features,
    Identity,
    Languages,
    Integrations,
    Finalize,
}

impl WizardStep {
    pub const ALL: [Self; 8] = [
        Self::Welcome,
        Self::Context,
        Self::Objectives,
        Self::Features,
        Self::Identity,
        Self::Languages,
        Self::Integrations,
        Self::Finalize,
    ];
    /// Number of steps (`N`).
    pub const COUNT: usize = Self::ALL.len();

    /// 1-based position.
    pub fn ordinal(self) -> usize {
        self as usize + 1
    }

    pub fn from_ordinal(ordinal: usize) -> Option<Self> {
        ordinal
            .checked_sub(1)
            .and_then(|i| Self::ALL.get(i).copied())
    }

    pub fn title(self) -> &'static str {
        match self {
            Self::Welcome => "Welcome",
            Self::Context => "Your business",
            Self::Objectives => "Objectives",
            Self::Features => "Features",
            Self::Identity => "Identity",
            Self::Languages => "Languages",
            Self::Integrations => "Integrations",
            Self::Finalize => "Review",
        }
    }

    pub fn subtitle(self) -> &'static str {
        match self {
            Self::Welcome => "Let's set up your support agent in a few steps.",
            Self::Context => "Tell us about your business, team and request volume.",
            Self::Objectives => "Pick up to 3 goals for your agent.",
            Self::Features => "Choose what your agent is allowed to do.",
            Self::Identity => "Set the tone and teach your agent its first answers.",
            Self::Languages => "Which languages should your agent speak?",
            Self::Integrations => "Connect the tools your team already uses.",
            Self::Finalize => "Check everything before creating your agent.",
        }
    }
}

impl std::fmt::Display for WizardStep {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}/{} {}", self.ordinal(), Self::COUNT, self.title())
    }
}

/// Result of a forward or backward move.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transition {
    Moved { from: WizardStep, to: WizardStep },
    /// `advance` on the last step.
    Complete,
    /// `retreat` on the first step.
    Cancel,
}

/// Tracks the visible step. The stored step is always a real step; leaving
/// either end is reported as a [`Transition`] instead.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Sequencer {
    current: WizardStep,
}

impl Default for Sequencer {
    fn default() -> Self {
        Self::new()
    }
}

impl Sequencer {
    pub fn new() -> Self {
        Self {
            current: WizardStep::Welcome,
        }
    }

    pub fn current(&self) -> WizardStep {
        self.current
    }

    pub fn ordinal(&self) -> usize {
        self.current.ordinal()
    }

    pub fn is_first(&self) -> bool {
        self.ordinal() == 1
    }

    pub fn is_last(&self) -> bool {
        self.ordinal() == WizardStep::COUNT
    }

    /// Next step, or `Complete` on the last one (which stays current).
    pub fn advance(&mut self) -> Transition {
        if self.is_last() {
            return Transition::Complete;
        }
        match WizardStep::from_ordinal(self.ordinal() + 1) {
            Some(next) => self.move_to(next),
            None => Transition::Complete,
        }
    }

    /// Previous step, or `Cancel` on the first one (which stays current).
    pub fn retreat(&mut self) -> Transition {
        if self.is_first() {
            return Transition::Cancel;
        }
        match WizardStep::from_ordinal(self.ordinal() - 1) {
            Some(prev) => self.move_to(prev),
            None => Transition::Cancel,
        }
    }

    /// Jump to `ordinal` (1-based). Out-of-range ordinals leave the step
    /// unchanged and return `None`. There is no completeness gate.
    pub fn go_to(&mut self, ordinal: usize) -> Option<Transition> {
        WizardStep::from_ordinal(ordinal).map(|step| self.move_to(step))
    }

    /// Percentage of the way through the wizard: 0 on the first step, 100 on
    /// the last.
    pub fn progress(&self) -> u8 {
        let done = (self.ordinal() - 1) * 100 / (WizardStep::COUNT - 1);
        u8::try_from(done).unwrap_or(100)
    }

    fn move_to(&mut self, to: WizardStep) -> Transition {
        let from = std::mem::replace(&mut self.current, to);
        Transition::Moved { from, to }
    }
}

#[cfg(test)]
mod tests {
    use {super::*, rstest::rstest};

    #[test]
    fn full_forward_flow() {
        let mut s = Sequencer::new();
        assert_eq!(s.current(), WizardStep::Welcome);

        for expected in &WizardStep::ALL[1..] {
            let t = s.advance();
            assert!(matches!(t, Transition::Moved { to, .. } if to == *expected));
        }
        assert!(s.is_last());
        assert_eq!(s.advance(), Transition::Complete);
        assert_eq!(s.current(), WizardStep::Finalize);
        assert_eq!(s.advance(), Transition::Complete);
    }

    #[test]
    fn retreat_from_first_cancels_without_moving() {
        let mut s = Sequencer::new();
        assert!(s.is_first());
        assert_eq!(s.retreat(), Transition::Cancel);
        assert_eq!(s.ordinal(), 1);
        assert!(s.is_first());

        s.advance();
        assert!(!s.is_first());
    }

    #[test]
    fn retreat_walks_back() {
        let mut s = Sequencer::new();
        s.go_to(4);
        assert_eq!(
            s.retreat(),
            Transition::Moved {
                from: WizardStep::Features,
                to: WizardStep::Objectives,
            }
        );
    }

    #[rstest]
    #[case(0)]
    #[case(9)]
    #[case(usize::MAX)]
    fn go_to_out_of_range_is_noop(#[case] ordinal: usize) {
        let mut s = Sequencer::new();
        s.go_to(3);
        assert_eq!(s.go_to(ordinal), None);
        assert_eq!(s.ordinal(), 3);
    }

    #[test]
    fn go_to_any_valid_ordinal() {
        let mut s = Sequencer::new();
        for k in (1..=WizardStep::COUNT).rev() {
            assert!(s.go_to(k).is_some());
            assert_eq!(s.ordinal(), k);
        }
    }

    #[test]
    fn ordinals_round_trip() {
        for step in WizardStep::ALL {
            assert_eq!(WizardStep::from_ordinal(step.ordinal()), Some(step));
        }
        assert_eq!(WizardStep::COUNT, 8);
    }

    #[test]
    fn progress_bounds() {
        let mut s = Sequencer::new();
        assert_eq!(s.progress(), 0);
        s.go_to(WizardStep::COUNT);
        assert_eq!(s.progress(), 100);
    }
}
