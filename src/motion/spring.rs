/// Parameters of a damped spring, in the units framer-style springs use:
/// stiffness and damping per unit mass, seconds as the time base.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpringConfig {
    pub stiffness: f64,
    pub damping: f64,
    pub mass: f64,
    /// Distance from the target under which the spring may settle.
    pub rest_delta: f64,
    /// Speed under which the spring may settle.
    pub rest_speed: f64,
}

impl SpringConfig {
    pub const fn new(stiffness: f64, damping: f64, mass: f64) -> Self {
        Self {
            stiffness,
            damping,
            mass,
            rest_delta: 0.01,
            rest_speed: 0.01,
        }
    }

    pub const fn with_rest_delta(mut self, rest_delta: f64) -> Self {
        self.rest_delta = rest_delta;
        self
    }
}

// Integration step cap. Larger frame gaps are split so the spring stays stable.
const MAX_STEP_SECS: f64 = 0.004;
// A backgrounded tab can hand us a huge gap; past this we just settle.
const MAX_FRAME_SECS: f64 = 0.25;

/// A one-dimensional spring that chases a target value.
#[derive(Debug, Clone)]
pub struct Spring {
    config: SpringConfig,
    value: f64,
    velocity: f64,
    target: f64,
}

impl Spring {
    pub fn new(config: SpringConfig, initial: f64) -> Self {
        Self {
            config,
            value: initial,
            velocity: 0.0,
            target: initial,
        }
    }

    pub fn set_target(&mut self, target: f64) {
        self.target = target;
    }

    /// Jumps straight to `value` with no motion.
    pub fn snap(&mut self, value: f64) {
        self.value = value;
        self.target = value;
        self.velocity = 0.0;
    }

    pub fn value(&self) -> f64 {
        self.value
    }

    pub fn is_settled(&self) -> bool {
        self.velocity == 0.0 && self.value == self.target
    }

    /// Advances the spring by `elapsed_ms`. Returns whether the value moved.
    pub fn step(&mut self, elapsed_ms: f64) -> bool {
        if self.is_settled() {
            return false;
        }
        let secs = elapsed_ms / 1000.0;
        if secs.is_nan() || secs <= 0.0 {
            return false;
        }
        if secs > MAX_FRAME_SECS {
            self.snap(self.target);
            return true;
        }

        let SpringConfig {
            stiffness,
            damping,
            mass,
            rest_delta,
            rest_speed,
        } = self.config;
        let steps = (secs / MAX_STEP_SECS).ceil().max(1.0) as u32;
        let dt = secs / f64::from(steps);
        for _ in 0..steps {
            let force = -stiffness * (self.value - self.target) - damping * self.velocity;
            self.velocity += force / mass * dt;
            self.value += self.velocity * dt;
        }

        if (self.value - self.target).abs() < rest_delta && self.velocity.abs() < rest_speed {
            self.snap(self.target);
        }
        true
    }
}
