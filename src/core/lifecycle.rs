//! Activation state machine, free of any browser types.
//!
//! The browser layer feeds it [`Signal`]s and performs the returned [`Action`].

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Phase {
    Uninitialized,
    Running,
    TornDown,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Signal {
    /// DOM ready (after the deferred delay, when there is one) or an explicit start.
    Ready { home: bool },
    /// Hash route changed.
    Navigated { home: bool },
    /// Page unload or an explicit stop.
    Unload,
    /// Activation was attempted but the page could not host the canvas.
    Failed,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Action {
    None,
    /// Build the canvas, traces and particles, start the frame loop.
    Activate,
    /// Cancel the pending frame and remove what activation added to the page.
    Teardown,
}

#[derive(Clone, Debug)]
pub struct Lifecycle {
    phase: Phase,
    follows_route: bool,
    // Set by Unload; only an explicit Ready brings the effect back
    stopped: bool,
}

impl Lifecycle {
    pub fn new(follows_route: bool) -> Self {
        Self {
            phase: Phase::Uninitialized,
            follows_route,
            stopped: false,
        }
    }

    #[inline]
    pub fn phase(&self) -> Phase {
        self.phase
    }

    #[inline]
    pub fn is_running(&self) -> bool {
        self.phase == Phase::Running
    }

    pub fn on(&mut self, signal: Signal) -> Action {
        use Phase::*;
        let (next, action) = match (self.phase, signal) {
            (phase, Signal::Navigated { .. }) if self.stopped => (phase, Action::None),
            (Uninitialized | TornDown, Signal::Ready { home }) => {
                if home || !self.follows_route {
                    (Running, Action::Activate)
                } else {
                    // Off the home route: wait for navigation back
                    (TornDown, Action::None)
                }
            }
            (Running, Signal::Ready { .. }) => (Running, Action::None),

            // Route changes before DOM ready are picked up by the Ready check
            (Uninitialized, Signal::Navigated { .. }) => (Uninitialized, Action::None),
            (phase, Signal::Navigated { .. }) if !self.follows_route => (phase, Action::None),
            (Running, Signal::Navigated { home: false }) => (TornDown, Action::Teardown),
            (Running, Signal::Navigated { home: true }) => (Running, Action::None),
            (TornDown, Signal::Navigated { home: true }) => (Running, Action::Activate),
            (TornDown, Signal::Navigated { home: false }) => (TornDown, Action::None),

            (Running, Signal::Unload) => (TornDown, Action::Teardown),
            (_, Signal::Unload) => (TornDown, Action::None),

            (_, Signal::Failed) => (TornDown, Action::None),
        };
        match signal {
            Signal::Ready { .. } => self.stopped = false,
            Signal::Unload => self.stopped = true,
            _ => {}
        }
        if next != self.phase {
            log::debug!("[lifecycle] {:?} -> {:?} on {:?}", self.phase, next, signal);
        }
        self.phase = next;
        action
    }
}
