use crate::config;

/// Measures the time between frames of a hand-driven animation loop.
///
/// The first tick after [`FrameClock::new`] or [`FrameClock::pause`] reports
/// zero, so a loop restarted after sitting idle does not feed the whole idle
/// gap into its springs as one frame.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct FrameClock {
    last: Option<f64>,
}

impl FrameClock {
    pub fn new() -> Self {
        Self::default()
    }

    /// Milliseconds since the previous tick.
    pub fn tick(&mut self, now: f64) -> f64 {
        let elapsed = self.last.map_or(0.0, |last| (now - last).max(0.0));
        self.last = Some(now);
        elapsed
    }

    pub fn pause(&mut self) {
        self.last = None;
    }
}

/// Period to hand `use_interval`: one frame while something moves, and 0,
/// which stops the interval, once everything is at rest.
pub fn frame_interval(moving: bool) -> u32 {
    if moving {
        config::FRAME_MS
    } else {
        0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::motion::spring::{Spring, SpringConfig};

    #[test]
    fn first_tick_is_zero() {
        let mut clock = FrameClock::new();
        assert_eq!(clock.tick(1_000.0), 0.0);
        assert_eq!(clock.tick(1_016.0), 16.0);
        assert_eq!(clock.tick(1_040.0), 24.0);
    }

    #[test]
    fn pause_forgets_idle_gap() {
        let mut clock = FrameClock::new();
        clock.tick(0.0);
        clock.tick(16.0);
        clock.pause();
        assert_eq!(clock.tick(60_000.0), 0.0);
        assert_eq!(clock.tick(60_016.0), 16.0);
    }

    #[test]
    fn clock_going_backwards_reads_zero() {
        let mut clock = FrameClock::new();
        clock.tick(500.0);
        assert_eq!(clock.tick(400.0), 0.0);
    }

    #[test]
    fn interval_stops_when_settled() {
        assert_eq!(frame_interval(true), 16);
        assert_eq!(frame_interval(false), 0);
    }

    #[test]
    fn loop_redraws_the_resting_value() {
        let mut spring = Spring::new(SpringConfig::new(100.0, 30.0, 1.0), 0.0);
        let mut clock = FrameClock::new();
        spring.set_target(1.0);

        // Same shape as the component loop: draw on every step that moved,
        // stop once the spring is at rest.
        let mut drawn = spring.value();
        let mut now = 0.0;
        while frame_interval(!spring.is_settled()) > 0 {
            now += 16.0;
            let elapsed = clock.tick(now);
            if spring.step(elapsed) {
                drawn = spring.value();
            }
            if spring.is_settled() {
                clock.pause();
            }
            assert!(now < 10_000.0, "spring never settled");
        }
        assert_eq!(drawn, 1.0);
        assert_eq!(clock, FrameClock::new());
    }
}
