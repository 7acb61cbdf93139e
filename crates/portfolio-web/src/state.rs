use leptos::prelude::*;
use portfolio_core::{ActiveTab, MotionConfig, NavItem, Phase, Schedule, ViewState};

/// Page-wide view state, shared through context.
#[derive(Clone, Copy)]
pub struct PortfolioState {
    view: RwSignal<ViewState>,
}

impl PortfolioState {
    pub fn new(motion: MotionConfig) -> Self {
        let state = Self {
            view: RwSignal::new(ViewState::new(motion)),
        };
        if let Some(schedule) = state.view.with_untracked(|view| view.pending()) {
            state.arm(schedule);
        }
        state
    }

    pub fn shown(&self) -> ActiveTab {
        self.view.with(|view| view.shown())
    }

    pub fn phase(&self) -> Phase {
        self.view.with(|view| view.phase())
    }

    pub fn nav_items(&self) -> Vec<NavItem> {
        self.view.with(|view| view.nav_items())
    }

    pub fn motion(&self) -> MotionConfig {
        self.view.with_untracked(|view| *view.motion())
    }

    pub fn select(&self, tab: ActiveTab) {
        if let Some(schedule) = self.view.try_update(|view| view.select(tab)).flatten() {
            self.arm(schedule);
        }
    }

    fn arm(self, schedule: Schedule) {
        set_timeout(
            move || {
                // None once the signal is disposed, or when the timer went stale.
                if let Some(next) = self.view.try_update(|view| view.advance(schedule.epoch)).flatten() {
                    self.arm(next);
                }
            },
            schedule.delay,
        );
    }
}
