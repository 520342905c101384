//! The question asked once the maze is solved.
//!
//! The prompt offers a "Yes" and a "No" button. Reaching for "No" makes it jump somewhere else
//! inside the prompt and leaves the focus on "Yes", so only "Yes" can ever be confirmed.

use log::debug;
use rand::Rng;

/// Where the "No" button sits inside the prompt, as percentages of the free space.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) struct Anchor {
    /// Horizontal offset, from 0 (left) to 100 (right).
    pub(crate) x_percent: u16,
    /// Vertical offset, from 0 (top) to 100 (bottom).
    pub(crate) y_percent: u16,
}

/// State of the proposal prompt.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub(crate) struct Proposal {
    /// Relocated position of the "No" button, `None` while it sits beside "Yes".
    no_anchor: Option<Anchor>,
    /// Number of times the "No" button has run away.
    evasions: u32,
    /// Whether "Yes" has been confirmed.
    accepted: bool,
}

impl Proposal {
    /// Opens a fresh prompt with both buttons side by side.
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// Relocated position of the "No" button, if it has moved.
    pub(crate) const fn no_anchor(&self) -> Option<Anchor> {
        self.no_anchor
    }

    /// Number of times the "No" button has run away.
    pub(crate) const fn evasions(&self) -> u32 {
        self.evasions
    }

    /// Reacts to the focus approaching the "No" button by moving it to a random spot.
    pub(crate) fn on_proximity<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        let anchor = Anchor {
            x_percent: rng.gen_range(0..=100),
            y_percent: rng.gen_range(0..=100),
        };
        self.no_anchor = Some(anchor);
        self.evasions = self.evasions.saturating_add(1);
        debug!("no button evaded to {anchor:?}");
    }

    /// Puts the "No" button back beside "Yes".
    pub(crate) fn reset_no(&mut self) {
        self.no_anchor = None;
    }

    /// Confirms "Yes".
    ///
    /// Returns `true` only the first time, so the celebration fires once per prompt.
    pub(crate) fn accept(&mut self) -> bool {
        if self.accepted {
            return false;
        }

        self.accepted = true;
        true
    }
}

#[cfg(test)]
mod tests {
    use rand::{rngs::StdRng, SeedableRng as _};

    use super::*;

    #[test]
    fn test_new_prompt_has_buttons_side_by_side() {
        let proposal = Proposal::new();

        assert_eq!(proposal.no_anchor(), None);
        assert_eq!(proposal.evasions(), 0);
        assert!(!proposal.accepted);
    }

    #[test]
    fn test_no_button_evades() {
        let mut rng = StdRng::seed_from_u64(5);
        let mut proposal = Proposal::new();

        for _ in 0..50 {
            proposal.on_proximity(&mut rng);
            let anchor = proposal
                .no_anchor()
                .expect("the no button should have moved");
            assert!(anchor.x_percent <= 100);
            assert!(anchor.y_percent <= 100);
        }

        assert_eq!(proposal.evasions(), 50);
        assert!(!proposal.accepted);
    }

    #[test]
    fn test_reset_no_returns_button() {
        let mut proposal = Proposal::new();
        proposal.on_proximity(&mut StdRng::seed_from_u64(1));

        proposal.reset_no();

        assert_eq!(proposal.no_anchor(), None);
        assert_eq!(proposal.evasions(), 1);
    }

    #[test]
    fn test_accept_fires_once() {
        let mut proposal = Proposal::new();

        assert!(proposal.accept());
        assert!(!proposal.accept());
        assert!(proposal.accepted);
    }
}
