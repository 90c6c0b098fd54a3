use std::f64::consts::PI;

use rand::Rng;

use crate::motion::easing::ease_out_cubic;
use crate::nav::gooey::GooeyConfig;

/// Angular jitter applied to each particle's slot, in degrees.
const ANGLE_JITTER_DEG: f64 = 8.0;
const SCALE_JITTER: f64 = 0.2;

/// Symmetric noise in `[-n/2, n/2)`.
fn noise<R: Rng>(rng: &mut R, n: f64) -> f64 {
    n / 2.0 - rng.gen::<f64>() * n
}

#[derive(Debug, Clone, PartialEq)]
pub struct Particle {
    /// Direction of travel, radians.
    pub angle: f64,
    /// How far from the burst origin the particle travels, px.
    pub distance: f64,
    /// Opaque index into the stylesheet's particle palette.
    pub color_index: u8,
    /// Clock time the particle was created, ms.
    pub start_time: f64,
    pub scale: f64,
    /// Total spin over the lifetime, degrees.
    pub rotation: f64,
}

/// Where a particle is drawn on a given frame, relative to its burst origin.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ParticleFrame {
    pub dx: f64,
    pub dy: f64,
    pub opacity: f64,
    pub scale: f64,
    pub rotation: f64,
    pub color_index: u8,
}

impl Particle {
    fn spawn<R: Rng>(config: &GooeyConfig, slot: usize, now: f64, rng: &mut R) -> Self {
        let count = config.particle_count.max(1) as f64;
        let spread = config.angular_spread_deg;
        let step = (spread + noise(rng, ANGLE_JITTER_DEG)) / count;
        let angle_deg = (step * (count - slot as f64)).clamp(0.0, spread);

        let (lo, hi) = config.distance_range();
        let distance = if hi > lo { rng.gen_range(lo..=hi) } else { lo };

        let color_index = if config.colors.is_empty() {
            0
        } else {
            config.colors[rng.gen_range(0..config.colors.len())]
        };

        let r = config.particle_radius;
        let spin = noise(rng, r / 10.0);
        let rotation = if spin > 0.0 {
            (spin + r / 20.0) * 10.0
        } else {
            (spin - r / 20.0) * 10.0
        };

        Self {
            angle: angle_deg * PI / 180.0,
            distance,
            color_index,
            start_time: now,
            scale: 1.0 + noise(rng, SCALE_JITTER),
            rotation,
        }
    }

    /// `None` once the particle has outlived `lifetime_ms`.
    pub fn frame(&self, now: f64, lifetime_ms: f64) -> Option<ParticleFrame> {
        if lifetime_ms <= 0.0 {
            return None;
        }
        let t = ((now - self.start_time) / lifetime_ms).max(0.0);
        if t >= 1.0 {
            return None;
        }
        let travel = ease_out_cubic(t);
        // Full opacity for the first half, then a linear fade.
        let opacity = if t < 0.5 { 1.0 } else { 1.0 - (t - 0.5) * 2.0 };
        Some(ParticleFrame {
            dx: self.angle.cos() * self.distance * travel,
            dy: self.angle.sin() * self.distance * travel,
            opacity,
            scale: self.scale * (1.0 - 0.5 * t),
            rotation: self.rotation * travel,
            color_index: self.color_index,
        })
    }
}

/// A fire-and-forget group of particles spawned by one activation.
#[derive(Debug, Clone, PartialEq)]
pub struct ParticleBurst {
    /// Centre of the activated item, in container coordinates.
    pub origin: (f64, f64),
    pub particles: Vec<Particle>,
    pub started_at: f64,
    pub lifetime_ms: f64,
}

impl ParticleBurst {
    pub fn spawn<R: Rng>(config: &GooeyConfig, origin: (f64, f64), now: f64, rng: &mut R) -> Self {
        let particles = (0..config.particle_count)
            .map(|slot| Particle::spawn(config, slot, now, rng))
            .collect();
        Self {
            origin,
            particles,
            started_at: now,
            lifetime_ms: config.particle_lifetime_ms(),
        }
    }

    pub fn is_expired(&self, now: f64) -> bool {
        now - self.started_at >= self.lifetime_ms
    }

    pub fn frames(&self, now: f64) -> impl Iterator<Item = ParticleFrame> + '_ {
        self.particles
            .iter()
            .filter_map(move |p| p.frame(now, self.lifetime_ms))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn burst(seed: u64, config: &GooeyConfig) -> ParticleBurst {
        let mut rng = StdRng::seed_from_u64(seed);
        ParticleBurst::spawn(config, (50.0, 20.0), 1_000.0, &mut rng)
    }

    #[test]
    fn spawns_configured_count() {
        let config = GooeyConfig::default();
        assert_eq!(burst(1, &config).particles.len(), 15);

        let config = GooeyConfig {
            particle_count: 4,
            ..GooeyConfig::default()
        };
        assert_eq!(burst(1, &config).particles.len(), 4);
    }

    #[test]
    fn particles_stay_inside_configured_ranges() {
        let config = GooeyConfig::default();
        for seed in 0..20 {
            for p in burst(seed, &config).particles {
                assert!((10.0..=90.0).contains(&p.distance), "{}", p.distance);
                assert!((0.0..=2.0 * PI + 1e-9).contains(&p.angle));
                assert!(config.colors.contains(&p.color_index));
                assert!((0.9..=1.1).contains(&p.scale));
                assert!((50.0..=100.0).contains(&p.rotation.abs()));
                assert_eq!(p.start_time, 1_000.0);
            }
        }
    }

    #[test]
    fn same_seed_same_burst() {
        let config = GooeyConfig::default();
        assert_eq!(burst(42, &config), burst(42, &config));
        assert_ne!(burst(42, &config), burst(43, &config));
    }

    #[test]
    fn empty_palette_uses_index_zero() {
        let config = GooeyConfig {
            colors: Vec::new(),
            ..GooeyConfig::default()
        };
        assert!(burst(3, &config).particles.iter().all(|p| p.color_index == 0));
    }

    #[test]
    fn particles_move_out_and_fade() {
        let config = GooeyConfig::default();
        let b = burst(7, &config);
        let lifetime = b.lifetime_ms;
        assert_eq!(lifetime, 1_500.0);

        let start: Vec<_> = b.frames(1_000.0).collect();
        assert_eq!(start.len(), 15);
        assert!(start.iter().all(|f| f.dx == 0.0 && f.dy == 0.0 && f.opacity == 1.0));

        let late: Vec<_> = b.frames(1_000.0 + lifetime * 0.9).collect();
        for (frame, particle) in late.iter().zip(&b.particles) {
            let travelled = (frame.dx * frame.dx + frame.dy * frame.dy).sqrt();
            assert!(travelled <= particle.distance + 1e-9);
            assert!(travelled > particle.distance * 0.9);
            assert!(frame.opacity < 0.25);
        }

        assert!(!b.is_expired(1_000.0 + lifetime - 1.0));
        assert!(b.is_expired(1_000.0 + lifetime));
        assert_eq!(b.frames(1_000.0 + lifetime).count(), 0);
    }
}
