use std::num::NonZeroUsize;

use rand::Rng;
use thiserror::Error;

use crate::motion::easing::{ease_in_out_cubic, lerp};
use crate::nav::particles::{ParticleBurst, ParticleFrame};

/// Axis-aligned box in the nav container's coordinate space.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self { x, y, width, height }
    }

    pub fn center(&self) -> (f64, f64) {
        (self.x + self.width / 2.0, self.y + self.height / 2.0)
    }

    pub fn lerp(&self, to: &Rect, t: f64) -> Rect {
        Rect {
            x: lerp(self.x, to.x, t),
            y: lerp(self.y, to.y, t),
            width: lerp(self.width, to.width, t),
            height: lerp(self.height, to.height, t),
        }
    }
}

/// Caller-supplied tuning of the indicator.
#[derive(Debug, Clone, PartialEq)]
pub struct GooeyConfig {
    /// Centre of the blob tween duration band, ms.
    pub animation_time_ms: u32,
    /// Half-width of the duration band, ms.
    pub time_variance_ms: u32,
    pub particle_count: usize,
    /// Radial travel range of particles, px. Order does not matter.
    pub particle_distances: (f64, f64),
    /// Controls how much particles spin.
    pub particle_radius: f64,
    pub angular_spread_deg: f64,
    /// Opaque palette indices, sampled with repetition.
    pub colors: Vec<u8>,
}

impl Default for GooeyConfig {
    fn default() -> Self {
        Self {
            animation_time_ms: 600,
            time_variance_ms: 300,
            particle_count: 15,
            particle_distances: (90.0, 10.0),
            particle_radius: 100.0,
            angular_spread_deg: 360.0,
            colors: vec![1, 2, 3, 1, 2, 3, 1, 4],
        }
    }
}

impl GooeyConfig {
    pub fn duration_band(&self) -> (u32, u32) {
        (
            self.animation_time_ms.saturating_sub(self.time_variance_ms),
            self.animation_time_ms.saturating_add(self.time_variance_ms),
        )
    }

    pub fn distance_range(&self) -> (f64, f64) {
        let (a, b) = self.particle_distances;
        (a.min(b), a.max(b))
    }

    pub fn particle_lifetime_ms(&self) -> f64 {
        f64::from(self.animation_time_ms) * 2.0 + f64::from(self.time_variance_ms)
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum IndicatorError {
    #[error("nav index {index} is outside 0..{len}")]
    OutOfRange { index: usize, len: usize },
}

/// Falls back to the first item when the requested index is missing or
/// does not address an item.
pub fn clamp_index(requested: Option<usize>, item_count: usize) -> usize {
    match requested {
        Some(i) if i < item_count => i,
        _ => 0,
    }
}

#[derive(Debug, Clone, PartialEq)]
struct BlobTween {
    from: Rect,
    to: Rect,
    started_at: f64,
    duration_ms: f64,
}

impl BlobTween {
    fn progress(&self, now: f64) -> f64 {
        if self.duration_ms <= 0.0 {
            return 1.0;
        }
        ((now - self.started_at) / self.duration_ms).clamp(0.0, 1.0)
    }

    fn at(&self, now: f64) -> Rect {
        self.from.lerp(&self.to, ease_in_out_cubic(self.progress(now)))
    }

    fn is_done(&self, now: f64) -> bool {
        self.progress(now) >= 1.0
    }
}

#[derive(Debug, Clone, PartialEq)]
enum Blob {
    /// No measurement available; render without a blob.
    Unmeasured,
    Resting(Rect),
    Moving(BlobTween),
}

/// Outcome of [`GooeyIndicator::activate`].
#[derive(Debug, Clone, PartialEq)]
pub struct Activation {
    pub index: usize,
    /// New resting geometry of the blob, when the activation moved it.
    pub geometry_change: Option<Rect>,
    /// Length of the blob tween, when one was started.
    pub duration_ms: Option<f64>,
    pub particles_spawned: usize,
}

/// Highlight blob and particle bursts behind a row of nav items.
///
/// Geometry comes from the host's layout measurements; time is whatever
/// monotonic millisecond clock the host uses. `R` is the random source, a
/// seeded generator in tests.
pub struct GooeyIndicator<R> {
    item_count: usize,
    active: usize,
    blob: Blob,
    bursts: Vec<ParticleBurst>,
    config: GooeyConfig,
    rng: R,
}

impl<R: Rng> GooeyIndicator<R> {
    pub fn new(
        item_count: NonZeroUsize,
        initial: Option<usize>,
        config: GooeyConfig,
        rng: R,
    ) -> Self {
        let item_count = item_count.get();
        Self {
            item_count,
            active: clamp_index(initial, item_count),
            blob: Blob::Unmeasured,
            bursts: Vec::new(),
            config,
            rng,
        }
    }

    pub fn active_index(&self) -> usize {
        self.active
    }

    /// Makes `index` the active item.
    ///
    /// `target` is the measured box of that item, `None` when measurement
    /// failed. Re-activating the active item leaves the blob alone and only
    /// replays the particle burst.
    pub fn activate(
        &mut self,
        index: usize,
        target: Option<Rect>,
        now: f64,
    ) -> Result<Activation, IndicatorError> {
        if index >= self.item_count {
            return Err(IndicatorError::OutOfRange {
                index,
                len: self.item_count,
            });
        }
        self.prune(now);

        let mut activation = Activation {
            index,
            geometry_change: None,
            duration_ms: None,
            particles_spawned: 0,
        };

        if index == self.active {
            if let Some(rest) = self.resting_target().or(target) {
                activation.particles_spawned = self.spawn_burst(rest, now);
            }
            return Ok(activation);
        }

        self.active = index;
        let Some(target) = target else {
            self.blob = Blob::Unmeasured;
            return Ok(activation);
        };

        match self.blob_at(now) {
            Some(from) => {
                let duration = self.pick_duration();
                self.blob = Blob::Moving(BlobTween {
                    from,
                    to: target,
                    started_at: now,
                    duration_ms: duration,
                });
                activation.duration_ms = Some(duration);
            }
            None => self.blob = Blob::Resting(target),
        }
        activation.geometry_change = Some(target);
        activation.particles_spawned = self.spawn_burst(target, now);
        Ok(activation)
    }

    /// Re-measured geometry of the active item, e.g. after a viewport
    /// resize. Moves the blob there immediately with no animation.
    pub fn resize(&mut self, target: Option<Rect>) {
        self.blob = match target {
            Some(rect) => Blob::Resting(rect),
            None => Blob::Unmeasured,
        };
    }

    /// Blob geometry to draw at `now`.
    pub fn blob_at(&self, now: f64) -> Option<Rect> {
        match &self.blob {
            Blob::Unmeasured => None,
            Blob::Resting(rect) => Some(*rect),
            Blob::Moving(tween) => Some(tween.at(now)),
        }
    }

    /// Where the blob will come to rest.
    pub fn resting_target(&self) -> Option<Rect> {
        match &self.blob {
            Blob::Unmeasured => None,
            Blob::Resting(rect) => Some(*rect),
            Blob::Moving(tween) => Some(tween.to),
        }
    }

    /// Live particles at `now`, with their burst origin.
    pub fn particle_frames(&self, now: f64) -> Vec<((f64, f64), ParticleFrame)> {
        self.bursts
            .iter()
            .flat_map(|burst| burst.frames(now).map(move |f| (burst.origin, f)))
            .collect()
    }

    pub fn is_animating(&self, now: f64) -> bool {
        let moving = matches!(&self.blob, Blob::Moving(t) if !t.is_done(now));
        moving || self.bursts.iter().any(|b| !b.is_expired(now))
    }

    /// Settles a finished tween and discards expired bursts. Call once per
    /// frame. Returns whether either happened, since the host must then draw
    /// one more frame even though nothing is animating any more.
    pub fn tick(&mut self, now: f64) -> bool {
        let mut settled = false;
        if let Blob::Moving(tween) = &self.blob {
            if tween.is_done(now) {
                self.blob = Blob::Resting(tween.to);
                settled = true;
            }
        }
        self.prune(now) || settled
    }

    fn prune(&mut self, now: f64) -> bool {
        let before = self.bursts.len();
        self.bursts.retain(|b| !b.is_expired(now));
        self.bursts.len() != before
    }

    fn pick_duration(&mut self) -> f64 {
        let (lo, hi) = self.config.duration_band();
        f64::from(self.rng.gen_range(lo..=hi))
    }

    fn spawn_burst(&mut self, at: Rect, now: f64) -> usize {
        let burst = ParticleBurst::spawn(&self.config, at.center(), now, &mut self.rng);
        let spawned = burst.particles.len();
        self.bursts.push(burst);
        spawned
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn item_box(i: usize) -> Rect {
        Rect::new(20.0 + 110.0 * i as f64, 8.0, 60.0 + 5.0 * i as f64, 32.0)
    }

    const FIVE: NonZeroUsize = match NonZeroUsize::new(5) {
        Some(n) => n,
        None => unreachable!(),
    };

    fn indicator(initial: Option<usize>) -> GooeyIndicator<StdRng> {
        GooeyIndicator::new(FIVE, initial, GooeyConfig::default(), StdRng::seed_from_u64(11))
    }

    fn measured(initial: usize) -> GooeyIndicator<StdRng> {
        let mut ind = indicator(Some(initial));
        ind.resize(Some(item_box(initial)));
        ind
    }

    #[test]
    fn initial_index_falls_back_to_first() {
        assert_eq!(indicator(Some(3)).active_index(), 3);
        assert_eq!(indicator(Some(5)).active_index(), 0);
        assert_eq!(indicator(Some(usize::MAX)).active_index(), 0);
        assert_eq!(indicator(None).active_index(), 0);
    }

    #[test]
    fn single_item_navigation() {
        let mut ind = GooeyIndicator::new(
            NonZeroUsize::MIN,
            Some(3),
            GooeyConfig::default(),
            StdRng::seed_from_u64(0),
        );
        assert_eq!(ind.active_index(), 0);
        assert!(ind.activate(1, None, 0.0).is_err());
    }

    #[test]
    fn out_of_range_activation_is_rejected() {
        let mut ind = measured(1);
        let err = ind.activate(5, Some(item_box(4)), 0.0).unwrap_err();
        assert_eq!(err, IndicatorError::OutOfRange { index: 5, len: 5 });
        assert_eq!(ind.active_index(), 1);
        assert_eq!(ind.blob_at(0.0), Some(item_box(1)));
    }

    #[test]
    fn every_item_ends_under_the_blob() {
        let mut ind = measured(0);
        let mut now = 0.0;
        for i in [1, 2, 3, 4, 0, 3] {
            let activation = ind.activate(i, Some(item_box(i)), now).unwrap();
            assert_eq!(activation.geometry_change, Some(item_box(i)));
            now += 1_000.0;
            ind.tick(now);
            assert_eq!(ind.blob_at(now), Some(item_box(i)));
            assert_eq!(ind.active_index(), i);
        }
    }

    #[test]
    fn durations_stay_in_band() {
        let mut ind = measured(0);
        let mut now = 0.0;
        for round in 0..100 {
            let i = 1 + round % 4;
            let duration = ind
                .activate(i, Some(item_box(i)), now)
                .unwrap()
                .duration_ms
                .expect("blob was measured");
            assert!((300.0..=900.0).contains(&duration), "{duration}");
            now += 2_000.0;
            ind.tick(now);
        }
    }

    #[test]
    fn reactivation_only_bursts() {
        let mut ind = measured(2);
        let activation = ind.activate(2, Some(item_box(2)), 50.0).unwrap();
        assert_eq!(activation.geometry_change, None);
        assert_eq!(activation.duration_ms, None);
        assert_eq!(activation.particles_spawned, 15);
        assert_eq!(ind.blob_at(50.0), Some(item_box(2)));
        assert!(ind.is_animating(51.0));
    }

    #[test]
    fn particle_count_matches_config() {
        let config = GooeyConfig {
            particle_count: 7,
            ..GooeyConfig::default()
        };
        let mut ind = GooeyIndicator::new(FIVE, Some(0), config, StdRng::seed_from_u64(5));
        ind.resize(Some(item_box(0)));
        let activation = ind.activate(3, Some(item_box(3)), 0.0).unwrap();
        assert_eq!(activation.particles_spawned, 7);
        assert_eq!(ind.particle_frames(10.0).len(), 7);
    }

    #[test]
    fn rapid_switch_ends_on_latest_item() {
        let mut ind = measured(0);
        ind.activate(2, Some(item_box(2)), 0.0).unwrap();
        let mid = ind.blob_at(100.0).unwrap();
        assert_ne!(mid, item_box(2));

        ind.activate(4, Some(item_box(4)), 100.0).unwrap();
        // The new tween starts where the old one was, with no jump.
        assert_eq!(ind.blob_at(100.0), Some(mid));
        assert_eq!(ind.resting_target(), Some(item_box(4)));

        let mut now = 100.0;
        while ind.is_animating(now) {
            now += 16.0;
            ind.tick(now);
        }
        assert_eq!(ind.blob_at(now), Some(item_box(4)));
        assert!(now <= 100.0 + 1_500.0 + 16.0);
    }

    #[test]
    fn resize_snaps_without_animation() {
        let mut ind = measured(1);
        ind.activate(3, Some(item_box(3)), 0.0).unwrap();
        let wider = Rect::new(400.0, 10.0, 90.0, 40.0);
        ind.resize(Some(wider));
        assert_eq!(ind.blob_at(1.0), Some(wider));
        assert_eq!(ind.active_index(), 3);
    }

    #[test]
    fn failed_measurement_degrades_to_static() {
        let mut ind = measured(0);
        let activation = ind.activate(2, None, 0.0).unwrap();
        assert_eq!(activation.geometry_change, None);
        assert_eq!(activation.particles_spawned, 0);
        assert_eq!(ind.active_index(), 2);
        assert_eq!(ind.blob_at(0.0), None);

        // First successful measurement places the blob without a tween.
        let activation = ind.activate(4, Some(item_box(4)), 10.0).unwrap();
        assert_eq!(activation.duration_ms, None);
        assert_eq!(ind.blob_at(10.0), Some(item_box(4)));
    }

    #[test]
    fn bursts_are_discarded_after_lifetime() {
        let mut ind = measured(0);
        ind.activate(1, Some(item_box(1)), 0.0).unwrap();
        ind.activate(1, Some(item_box(1)), 200.0).unwrap();
        assert_eq!(ind.particle_frames(300.0).len(), 30);
        ind.tick(1_600.0);
        assert_eq!(ind.particle_frames(1_600.0).len(), 15);
        ind.tick(1_700.0);
        assert!(ind.particle_frames(1_700.0).is_empty());
        assert!(!ind.is_animating(1_700.0));
    }

    #[test]
    fn tick_reports_settling_once() {
        let mut ind = measured(0);
        let duration = ind
            .activate(3, Some(item_box(3)), 0.0)
            .unwrap()
            .duration_ms
            .expect("blob was measured");
        assert!(!ind.tick(duration - 1.0));
        assert!(ind.tick(duration));
        assert!(!ind.tick(duration + 16.0));

        // Lifetime is 1500 ms from the activation.
        assert!(ind.tick(1_500.0));
        assert!(!ind.tick(1_516.0));
    }

    #[test]
    fn frame_loop_draws_the_settled_state() {
        let mut ind = measured(0);
        ind.activate(1, Some(item_box(1)), 0.0).unwrap();

        // Redraw whenever something moved or settled during the frame.
        let mut drawn = (ind.blob_at(0.0), ind.particle_frames(0.0).len());
        let mut now = 0.0;
        while now < 3_000.0 {
            now += 16.0;
            let animating = ind.is_animating(now);
            if ind.tick(now) || animating {
                drawn = (ind.blob_at(now), ind.particle_frames(now).len());
            }
        }
        assert_eq!(drawn, (Some(item_box(1)), 0));
        assert!(!ind.is_animating(now));
    }
}
