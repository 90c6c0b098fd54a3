use crate::config;
use crate::motion::timer::{TimerId, TimerSlot};

/// Decides whether the desktop navigation bar is shown.
///
/// Pointer movement anywhere shows the bar and hides it again after
/// `idle_hide_ms` without movement. Hovering the bar pins it open; leaving
/// the bar starts the longer `leave_hide_ms` grace period. All hide requests
/// share one [`TimerSlot`], so a newer event always replaces the pending one.
///
/// `H` is the handle type of the host's timers (see [`TimerSlot`]). Methods
/// that may start a countdown take a `schedule` closure which is called with
/// the new timer id and the delay in milliseconds; when the host timer
/// expires it must call [`VisibilityController::timer_fired`] with that id.
pub struct VisibilityController<H> {
    visible: bool,
    hovered: bool,
    hide_timer: TimerSlot<H>,
    idle_hide_ms: u32,
    leave_hide_ms: u32,
}

impl<H> Default for VisibilityController<H> {
    fn default() -> Self {
        Self::new()
    }
}

impl<H> VisibilityController<H> {
    pub fn new() -> Self {
        Self::with_delays(config::NAV_IDLE_HIDE_MS, config::NAV_LEAVE_HIDE_MS)
    }

    pub fn with_delays(idle_hide_ms: u32, leave_hide_ms: u32) -> Self {
        Self {
            visible: false,
            hovered: false,
            hide_timer: TimerSlot::new(),
            idle_hide_ms,
            leave_hide_ms,
        }
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    #[cfg(test)]
    pub fn has_pending_hide(&self) -> bool {
        self.hide_timer.is_armed()
    }

    /// Pointer moved somewhere on the page. Returns whether visibility changed.
    pub fn pointer_moved(&mut self, schedule: impl FnOnce(TimerId, u32) -> H) -> bool {
        let changed = !self.visible;
        self.visible = true;
        // While hovered the bar stays pinned and nothing is pending.
        if !self.hovered {
            let delay = self.idle_hide_ms;
            self.hide_timer.arm(|id| schedule(id, delay));
        }
        changed
    }

    /// Pointer entered the navigation container.
    pub fn nav_entered(&mut self) -> bool {
        let changed = !self.visible;
        self.hovered = true;
        self.visible = true;
        self.hide_timer.cancel();
        changed
    }

    /// Pointer left the navigation container. Visibility does not change yet.
    pub fn nav_left(&mut self, schedule: impl FnOnce(TimerId, u32) -> H) {
        self.hovered = false;
        let delay = self.leave_hide_ms;
        self.hide_timer.arm(|id| schedule(id, delay));
    }

    /// A host timer expired. Returns whether the bar was hidden by it.
    pub fn timer_fired(&mut self, id: TimerId) -> bool {
        if !self.hide_timer.fire(id) || self.hovered || !self.visible {
            return false;
        }
        self.visible = false;
        true
    }

    /// Cancels any pending hide. Call when the view goes away.
    pub fn teardown(&mut self) {
        self.hide_timer.cancel();
    }
}

/// Window scroll state as seen by the navigation, the corner logo and the
/// progress bar.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ScrollMetrics {
    pub scroll_y: f64,
    pub viewport_height: f64,
    pub document_height: f64,
}

impl ScrollMetrics {
    /// Switches the nav to its light-background colour scheme.
    pub fn past_hero(&self) -> bool {
        self.scroll_y > self.viewport_height * config::PAST_HERO_RATIO
    }

    /// Whether the corner logo should still show.
    pub fn in_hero(&self) -> bool {
        self.scroll_y < self.viewport_height - config::HERO_LOGO_MARGIN_PX
    }

    /// Fraction of the scrollable distance covered, in [0, 1].
    pub fn progress(&self) -> f64 {
        let scrollable = self.document_height - self.viewport_height;
        if scrollable <= 0.0 {
            return 0.0;
        }
        (self.scroll_y / scrollable).clamp(0.0, 1.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    type Queue = Rc<RefCell<Vec<(TimerId, u64)>>>;

    /// Drives a controller against a virtual clock.
    struct Harness {
        now: u64,
        ctrl: VisibilityController<()>,
        queue: Queue,
        hidden_events: u32,
    }

    impl Harness {
        fn new() -> Self {
            Self {
                now: 0,
                ctrl: VisibilityController::with_delays(2000, 5000),
                queue: Rc::new(RefCell::new(Vec::new())),
                hidden_events: 0,
            }
        }

        fn pointer_moved(&mut self) {
            let queue = self.queue.clone();
            let now = self.now;
            self.ctrl
                .pointer_moved(move |id, delay| queue.borrow_mut().push((id, now + u64::from(delay))));
        }

        fn nav_left(&mut self) {
            let queue = self.queue.clone();
            let now = self.now;
            self.ctrl
                .nav_left(move |id, delay| queue.borrow_mut().push((id, now + u64::from(delay))));
        }

        /// Moves the clock forward, firing every host timer that comes due.
        fn advance(&mut self, ms: u64) {
            let until = self.now + ms;
            loop {
                let next = {
                    let mut queue = self.queue.borrow_mut();
                    queue.sort_by_key(|(_, due)| *due);
                    match queue.first() {
                        Some(&(_, due)) if due <= until => Some(queue.remove(0)),
                        _ => None,
                    }
                };
                let Some((id, due)) = next else { break };
                self.now = due;
                if self.ctrl.timer_fired(id) {
                    self.hidden_events += 1;
                }
            }
            self.now = until;
        }
    }

    #[test]
    fn starts_hidden() {
        let harness = Harness::new();
        assert!(!harness.ctrl.is_visible());
        assert!(!harness.ctrl.has_pending_hide());
    }

    #[test]
    fn steady_movement_never_flickers() {
        let mut h = Harness::new();
        h.pointer_moved();
        for _ in 0..50 {
            h.advance(1999);
            assert!(h.ctrl.is_visible());
            h.pointer_moved();
        }
        assert_eq!(h.hidden_events, 0);
    }

    #[test]
    fn idle_hides_exactly_once() {
        let mut h = Harness::new();
        h.pointer_moved();
        h.pointer_moved();
        h.pointer_moved();
        h.advance(2001);
        assert!(!h.ctrl.is_visible());
        h.advance(60_000);
        assert_eq!(h.hidden_events, 1);
    }

    #[test]
    fn hover_pins_visibility() {
        let mut h = Harness::new();
        h.pointer_moved();
        assert!(!h.ctrl.nav_entered());
        // Movement over the bar keeps arriving as window mousemove events.
        for _ in 0..10 {
            h.pointer_moved();
            h.advance(3000);
        }
        h.advance(30_000);
        assert!(h.ctrl.is_visible());
        assert!(!h.ctrl.has_pending_hide());
        assert_eq!(h.hidden_events, 0);
    }

    #[test]
    fn leaving_uses_longer_grace() {
        let mut h = Harness::new();
        h.ctrl.nav_entered();
        h.nav_left();
        h.advance(4999);
        assert!(h.ctrl.is_visible());
        h.advance(2);
        assert!(!h.ctrl.is_visible());
        assert_eq!(h.hidden_events, 1);
    }

    #[test]
    fn newer_event_replaces_pending_hide() {
        let mut h = Harness::new();
        h.ctrl.nav_entered();
        h.nav_left();
        h.advance(1000);
        h.pointer_moved();
        // Only the idle countdown from the last movement is live.
        h.advance(2001);
        assert!(!h.ctrl.is_visible());
        h.advance(10_000);
        assert_eq!(h.hidden_events, 1);
    }

    #[test]
    fn entering_cancels_pending_hide() {
        let mut h = Harness::new();
        h.pointer_moved();
        h.ctrl.nav_entered();
        h.advance(10_000);
        assert!(h.ctrl.is_visible());
    }

    #[test]
    fn teardown_cancels() {
        let mut h = Harness::new();
        h.pointer_moved();
        h.ctrl.teardown();
        assert!(!h.ctrl.has_pending_hide());
        h.advance(10_000);
        assert!(h.ctrl.is_visible());
        assert_eq!(h.hidden_events, 0);
    }

    #[test]
    fn scroll_thresholds() {
        let metrics = |scroll_y| ScrollMetrics {
            scroll_y,
            viewport_height: 1000.0,
            document_height: 5000.0,
        };
        assert!(!metrics(800.0).past_hero());
        assert!(metrics(800.5).past_hero());
        assert!(metrics(899.0).in_hero());
        assert!(!metrics(900.0).in_hero());
        assert_eq!(metrics(2000.0).progress(), 0.5);
        assert_eq!(metrics(9000.0).progress(), 1.0);
    }

    #[test]
    fn short_page_has_no_progress() {
        let metrics = ScrollMetrics {
            scroll_y: 10.0,
            viewport_height: 1000.0,
            document_height: 900.0,
        };
        assert_eq!(metrics.progress(), 0.0);
    }
}
