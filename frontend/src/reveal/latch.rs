use std::rc::Rc;

use yew::Reducible;

use crate::config;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RevealConfig {
    /// Latch on the first visible reading and ignore everything after it.
    pub once: bool,
    /// Grows (positive) or shrinks (negative) the viewport used for the test.
    pub margin_px: i32,
}

impl Default for RevealConfig {
    fn default() -> Self {
        Self {
            once: true,
            margin_px: 0,
        }
    }
}

impl RevealConfig {
    /// Whole-section trigger: fires once the section is well inside the viewport.
    pub fn section() -> Self {
        Self {
            once: true,
            margin_px: config::SECTION_MARGIN_PX,
        }
    }

    pub fn root_margin(&self) -> String {
        format!("{}px", self.margin_px)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RevealState {
    Entry,
    Revealed,
}

/// Folds a stream of visibility readings into a reveal state.
#[derive(Debug, Clone, PartialEq)]
pub struct RevealLatch {
    config: RevealConfig,
    state: RevealState,
}

impl RevealLatch {
    pub fn new(config: RevealConfig) -> Self {
        Self {
            config,
            state: RevealState::Entry,
        }
    }

    #[cfg(test)]
    pub fn state(&self) -> RevealState {
        self.state
    }

    pub fn is_revealed(&self) -> bool {
        self.state == RevealState::Revealed
    }

    /// No reading can change the state any more; observation can stop.
    pub fn is_settled(&self) -> bool {
        self.config.once && self.is_revealed()
    }

    /// Applies one reading. Returns whether the state changed.
    pub fn observe(&mut self, visible: bool) -> bool {
        if self.is_settled() {
            return false;
        }
        let next = if visible {
            RevealState::Revealed
        } else {
            RevealState::Entry
        };
        if next == self.state {
            return false;
        }
        self.state = next;
        true
    }
}

impl Reducible for RevealLatch {
    type Action = bool;

    fn reduce(self: Rc<Self>, visible: bool) -> Rc<Self> {
        let mut next = (*self).clone();
        if next.observe(visible) {
            Rc::new(next)
        } else {
            self
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_visible_reading_reveals() {
        let mut latch = RevealLatch::new(RevealConfig::section());
        assert!(!latch.observe(false));
        assert_eq!(latch.state(), RevealState::Entry);
        assert!(latch.observe(true));
        assert!(latch.is_revealed());
    }

    #[test]
    fn once_latch_never_reverts() {
        let mut latch = RevealLatch::new(RevealConfig::default());
        latch.observe(true);
        for visible in [false, true, false, false, true, false] {
            assert!(!latch.observe(visible));
            assert!(latch.is_revealed());
        }
    }

    #[test]
    fn triggers_exactly_once_over_repeated_crossings() {
        let mut latch = RevealLatch::new(RevealConfig::default());
        let transitions = [true, false, true, false, true]
            .into_iter()
            .filter(|visible| latch.observe(*visible))
            .count();
        assert_eq!(transitions, 1);
    }

    #[test]
    fn non_latching_config_follows_visibility() {
        let mut latch = RevealLatch::new(RevealConfig {
            once: false,
            margin_px: 0,
        });
        assert!(latch.observe(true));
        assert!(latch.observe(false));
        assert_eq!(latch.state(), RevealState::Entry);
        assert!(!latch.is_settled());
    }

    #[test]
    fn reducer_keeps_the_same_rc_when_nothing_changes() {
        let latch = Rc::new(RevealLatch::new(RevealConfig::default()));
        let revealed = latch.clone().reduce(true);
        assert!(!Rc::ptr_eq(&latch, &revealed));

        let again = revealed.clone().reduce(false);
        assert!(Rc::ptr_eq(&revealed, &again));
    }

    #[test]
    fn root_margin_is_in_pixels() {
        assert_eq!(RevealConfig::section().root_margin(), "-100px");
        assert_eq!(RevealConfig::default().root_margin(), "0px");
    }
}
