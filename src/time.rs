//! Frame timing and fixed-step scheduling.
//!
//! The renderer calls [`Clock::update`] once per frame with the frame's
//! duration. The clock advances the animation time that drives cloud motion
//! and reports how many whole physics ticks are due, carrying any remainder
//! into the next frame.
//!
//! # Example
//!
//! ```
//! use orrery::time::Clock;
//!
//! let mut clock = Clock::new(0.25);
//! assert_eq!(clock.update(0.625), 2);
//! assert_eq!(clock.update(0.125), 1); // 0.125 carried + 0.125 = one more step
//! assert_eq!(clock.frame(), 2);
//! ```

use std::time::Instant;

/// Default cap on physics steps returned by one [`Clock::update`].
pub const DEFAULT_MAX_STEPS_PER_UPDATE: u32 = 8;

/// Animation time plus a fixed-step accumulator.
#[derive(Debug, Clone)]
pub struct Clock {
    /// Scaled animation time in seconds.
    elapsed: f64,
    /// Time of the most recent update, in seconds.
    delta: f64,
    /// Unconsumed time towards the next fixed step.
    accumulator: f64,
    /// Length of one fixed step in seconds.
    fixed_step: f64,
    /// Steps beyond this per update are dropped.
    max_steps_per_update: u32,
    frame_count: u64,
    steps_total: u64,
    paused: bool,
    /// Time scale multiplier (1.0 = normal speed).
    time_scale: f64,
    /// Last wall-clock sample for [`update_from_wall`](Clock::update_from_wall).
    last_instant: Option<Instant>,
}

impl Clock {
    /// Create a clock that schedules steps of `fixed_step` seconds.
    pub fn new(fixed_step: f64) -> Self {
        Self {
            elapsed: 0.0,
            delta: 0.0,
            accumulator: 0.0,
            fixed_step: fixed_step.max(f64::EPSILON),
            max_steps_per_update: DEFAULT_MAX_STEPS_PER_UPDATE,
            frame_count: 0,
            steps_total: 0,
            paused: false,
            time_scale: 1.0,
            last_instant: None,
        }
    }

    /// Set the cap on steps returned by one update. At least 1.
    pub fn with_max_steps_per_update(mut self, max: u32) -> Self {
        self.max_steps_per_update = max.max(1);
        self
    }

    /// Advance by `delta_secs` of frame time and return the number of fixed
    /// steps now due.
    ///
    /// While paused nothing advances and 0 is returned. If more steps are due
    /// than the per-update cap allows, the backlog is dropped.
    pub fn update(&mut self, delta_secs: f64) -> u32 {
        if self.paused {
            self.delta = 0.0;
            return 0;
        }

        let delta = delta_secs.max(0.0) * self.time_scale;
        self.delta = delta;
        self.elapsed += delta;
        self.accumulator += delta;
        self.frame_count += 1;

        let due = (self.accumulator / self.fixed_step).floor();
        let steps = if due > self.max_steps_per_update as f64 {
            log::debug!(
                "Clock dropping {} overdue steps",
                due as u64 - self.max_steps_per_update as u64
            );
            self.accumulator = 0.0;
            self.max_steps_per_update
        } else {
            self.accumulator -= due * self.fixed_step;
            due as u32
        };

        self.steps_total += steps as u64;
        steps
    }

    /// Advance by the wall-clock time since the previous call.
    ///
    /// The first call only records the starting instant and returns 0.
    pub fn update_from_wall(&mut self) -> u32 {
        let now = Instant::now();
        match self.last_instant.replace(now) {
            Some(prev) => self.update(now.duration_since(prev).as_secs_f64()),
            None => 0,
        }
    }

    /// Total scaled time in seconds.
    #[inline]
    pub fn elapsed(&self) -> f64 {
        self.elapsed
    }

    /// Scaled duration of the last update in seconds.
    #[inline]
    pub fn delta(&self) -> f64 {
        self.delta
    }

    /// Number of updates applied while running.
    #[inline]
    pub fn frame(&self) -> u64 {
        self.frame_count
    }

    /// Total fixed steps handed out.
    #[inline]
    pub fn steps_total(&self) -> u64 {
        self.steps_total
    }

    #[inline]
    pub fn fixed_step(&self) -> f64 {
        self.fixed_step
    }

    /// Fraction of a fixed step currently accumulated, 0.0-1.0.
    #[inline]
    pub fn alpha(&self) -> f64 {
        self.accumulator / self.fixed_step
    }

    #[inline]
    pub fn is_paused(&self) -> bool {
        self.paused
    }

    #[inline]
    pub fn time_scale(&self) -> f64 {
        self.time_scale
    }

    /// Pause time progression.
    pub fn pause(&mut self) {
        self.paused = true;
    }

    /// Resume after pausing. Wall time spent paused is not counted.
    pub fn resume(&mut self) {
        if self.paused {
            self.paused = false;
            if self.last_instant.is_some() {
                self.last_instant = Some(Instant::now());
            }
        }
    }

    pub fn toggle_pause(&mut self) {
        if self.paused {
            self.resume();
        } else {
            self.pause();
        }
    }

    /// Set time scale multiplier.
    ///
    /// - `1.0` = normal speed
    /// - `0.5` = half speed
    /// - `2.0` = double speed
    pub fn set_time_scale(&mut self, scale: f64) {
        self.time_scale = scale.max(0.0);
    }

    /// Reset all counters, keeping step length, cap and scale.
    pub fn reset(&mut self) {
        self.elapsed = 0.0;
        self.delta = 0.0;
        self.accumulator = 0.0;
        self.frame_count = 0;
        self.steps_total = 0;
        self.paused = false;
        self.last_instant = None;
    }
}
