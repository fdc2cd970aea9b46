//! Deterministic, host-stepped transitions.
//!
//! Nothing here touches a wall clock: the host pumps `step` with explicit
//! time deltas, so transition state is reproducible in tests. Retargeting a
//! live tween restarts it from the in-flight interpolated value, which is
//! the standard transition-interrupt behavior of animated charts.

/// Default transition length for axis toggles.
pub const DEFAULT_TRANSITION_SECONDS: f64 = 1.0;

/// Linear interpolation of one scalar from `start` to `target`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Tween {
    start: f64,
    target: f64,
    elapsed_s: f64,
    duration_s: f64,
}

impl Tween {
    /// A tween already resting at `value`.
    #[must_use]
    pub fn settled(value: f64) -> Self {
        Self {
            start: value,
            target: value,
            elapsed_s: 0.0,
            duration_s: 0.0,
        }
    }

    /// Begins a new transition toward `target` from the current displayed
    /// value.
    pub fn retarget(&mut self, target: f64, duration_s: f64) {
        self.start = self.value();
        self.target = target;
        self.elapsed_s = 0.0;
        self.duration_s = duration_s.max(0.0);
    }

    pub fn step(&mut self, delta_s: f64) {
        self.elapsed_s = (self.elapsed_s + delta_s).min(self.duration_s);
    }

    #[must_use]
    pub fn is_active(&self) -> bool {
        self.elapsed_s < self.duration_s
    }

    /// Current displayed value; completed tweens report the exact target.
    #[must_use]
    pub fn value(&self) -> f64 {
        if !self.is_active() {
            return self.target;
        }
        let progress = self.elapsed_s / self.duration_s;
        self.start + (self.target - self.start) * progress
    }

    #[must_use]
    pub fn target(&self) -> f64 {
        self.target
    }
}

/// Per-chart animation registry: displayed circle coordinates plus the
/// displayed domain endpoints of both axes.
#[derive(Debug, Clone, PartialEq)]
pub struct MotionState {
    circles_x: Vec<Tween>,
    circles_y: Vec<Tween>,
    x_domain: (Tween, Tween),
    y_domain: (Tween, Tween),
}

impl MotionState {
    /// Seeds all tweens at rest: the initial render is not animated.
    #[must_use]
    pub fn settled(
        circle_xs: &[f64],
        circle_ys: &[f64],
        x_domain: (f64, f64),
        y_domain: (f64, f64),
    ) -> Self {
        Self {
            circles_x: circle_xs.iter().copied().map(Tween::settled).collect(),
            circles_y: circle_ys.iter().copied().map(Tween::settled).collect(),
            x_domain: (Tween::settled(x_domain.0), Tween::settled(x_domain.1)),
            y_domain: (Tween::settled(y_domain.0), Tween::settled(y_domain.1)),
        }
    }

    /// Starts X-side transitions toward new circle positions and a new axis
    /// domain. In-flight transitions continue from their displayed values.
    pub fn retarget_x(&mut self, circle_targets: &[f64], domain: (f64, f64), duration_s: f64) {
        debug_assert_eq!(self.circles_x.len(), circle_targets.len());
        for (tween, target) in self.circles_x.iter_mut().zip(circle_targets) {
            tween.retarget(*target, duration_s);
        }
        self.x_domain.0.retarget(domain.0, duration_s);
        self.x_domain.1.retarget(domain.1, duration_s);
    }

    /// Y-side counterpart of `retarget_x`.
    pub fn retarget_y(&mut self, circle_targets: &[f64], domain: (f64, f64), duration_s: f64) {
        debug_assert_eq!(self.circles_y.len(), circle_targets.len());
        for (tween, target) in self.circles_y.iter_mut().zip(circle_targets) {
            tween.retarget(*target, duration_s);
        }
        self.y_domain.0.retarget(domain.0, duration_s);
        self.y_domain.1.retarget(domain.1, duration_s);
    }

    /// Advances all live tweens and reports whether anything is still
    /// animating.
    pub fn step(&mut self, delta_s: f64) -> bool {
        for tween in self
            .circles_x
            .iter_mut()
            .chain(self.circles_y.iter_mut())
            .chain([&mut self.x_domain.0, &mut self.x_domain.1])
            .chain([&mut self.y_domain.0, &mut self.y_domain.1])
        {
            tween.step(delta_s);
        }
        self.is_animating()
    }

    #[must_use]
    pub fn is_animating(&self) -> bool {
        self.circles_x
            .iter()
            .chain(self.circles_y.iter())
            .chain([&self.x_domain.0, &self.x_domain.1])
            .chain([&self.y_domain.0, &self.y_domain.1])
            .any(Tween::is_active)
    }

    #[must_use]
    pub fn displayed_circle(&self, index: usize) -> Option<(f64, f64)> {
        Some((
            self.circles_x.get(index)?.value(),
            self.circles_y.get(index)?.value(),
        ))
    }

    #[must_use]
    pub fn target_circle(&self, index: usize) -> Option<(f64, f64)> {
        Some((
            self.circles_x.get(index)?.target(),
            self.circles_y.get(index)?.target(),
        ))
    }

    #[must_use]
    pub fn circle_count(&self) -> usize {
        self.circles_x.len()
    }

    /// Displayed (possibly mid-transition) X axis domain.
    #[must_use]
    pub fn displayed_x_domain(&self) -> (f64, f64) {
        (self.x_domain.0.value(), self.x_domain.1.value())
    }

    /// Displayed (possibly mid-transition) Y axis domain.
    #[must_use]
    pub fn displayed_y_domain(&self) -> (f64, f64) {
        (self.y_domain.0.value(), self.y_domain.1.value())
    }
}
