//! Active tab plus the enter/exit sequencing of the content panel.
//!
//! The outgoing block finishes its exit before the incoming block enters.
//! Timers are owned by the caller: every phase with a duration hands back a
//! [`Schedule`], and the caller reports completion through [`ViewState::advance`]
//! with the schedule's epoch. Completions carrying an old epoch are ignored.

use std::time::Duration;

use crate::config::MotionConfig;
use crate::content::ContentBlock;
use crate::nav::{nav_items, NavItem};
use crate::tab::ActiveTab;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Entering,
    Visible,
    Exiting { next: ActiveTab },
}

impl Phase {
    pub fn css_class(&self) -> &'static str {
        match self {
            Phase::Entering => "tab-enter",
            Phase::Visible => "tab-visible",
            Phase::Exiting { .. } => "tab-exit",
        }
    }
}

/// A timer the caller must arm; fire `advance(epoch)` after `delay`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Schedule {
    pub epoch: u64,
    pub delay: Duration,
}

#[derive(Debug, Clone)]
pub struct ViewState {
    active: ActiveTab,
    shown: ActiveTab,
    phase: Phase,
    epoch: u64,
    motion: MotionConfig,
}

impl Default for ViewState {
    fn default() -> Self {
        Self::new(MotionConfig::default())
    }
}

impl ViewState {
    /// Starts on `Home`, with the home block animating in.
    pub fn new(motion: MotionConfig) -> Self {
        Self {
            active: ActiveTab::default(),
            shown: ActiveTab::default(),
            phase: Phase::Entering,
            epoch: 0,
            motion,
        }
    }

    pub fn active(&self) -> ActiveTab {
        self.active
    }

    /// The tab whose block is on screen. Lags `active` while a block exits.
    pub fn shown(&self) -> ActiveTab {
        self.shown
    }

    pub fn shown_block(&self) -> ContentBlock {
        ContentBlock::for_tab(self.shown)
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn motion(&self) -> &MotionConfig {
        &self.motion
    }

    pub fn nav_items(&self) -> Vec<NavItem> {
        nav_items(self.active)
    }

    /// Timer for the phase currently running, if it has one.
    pub fn pending(&self) -> Option<Schedule> {
        self.motion.duration(self.phase).map(|delay| Schedule {
            epoch: self.epoch,
            delay,
        })
    }

    /// Replaces the active tab. Returns a timer to arm when a new phase started.
    pub fn select(&mut self, tab: ActiveTab) -> Option<Schedule> {
        tracing::debug!(from = %self.active, to = %tab, "tab selected");
        self.active = tab;

        match self.phase {
            // Back to the block that is leaving: bring it in again.
            Phase::Exiting { .. } if tab == self.shown => self.start(Phase::Entering),
            // Exit already running; only the destination changes.
            Phase::Exiting { .. } => {
                self.phase = Phase::Exiting { next: tab };
                None
            }
            Phase::Entering | Phase::Visible if tab == self.shown => None,
            Phase::Entering | Phase::Visible => self.start(Phase::Exiting { next: tab }),
        }
    }

    /// Completes the running phase if `epoch` belongs to it.
    pub fn advance(&mut self, epoch: u64) -> Option<Schedule> {
        if epoch != self.epoch {
            tracing::trace!(epoch, current = self.epoch, "stale transition timer");
            return None;
        }

        match self.phase {
            Phase::Exiting { next } => {
                self.shown = next;
                self.start(Phase::Entering)
            }
            Phase::Entering => {
                tracing::debug!(tab = %self.shown, "tab visible");
                self.phase = Phase::Visible;
                None
            }
            Phase::Visible => None,
        }
    }

    fn start(&mut self, phase: Phase) -> Option<Schedule> {
        self.phase = phase;
        self.epoch += 1;
        tracing::debug!(tab = %self.shown, phase = phase.css_class(), epoch = self.epoch, "transition started");
        self.pending()
    }
}
