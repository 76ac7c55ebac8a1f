//! Frame timing and periodic timers.
//!
//! `draw_web()` calls at ~60fps with variable delta. The economy is
//! continuous, so instead of discrete ticks `FrameClock` just reports the
//! milliseconds between frames and the engine scales income by it.

/// Turns successive frame timestamps into elapsed milliseconds.
pub struct FrameClock {
    /// Timestamp of the last update (ms), None if first frame
    last_timestamp: Option<f64>,
}

impl FrameClock {
    pub fn new() -> Self {
        Self {
            last_timestamp: None,
        }
    }

    /// Feed a monotonic timestamp (from `performance.now()` or similar).
    /// Returns the milliseconds since the previous call; 0 on the first
    /// frame and whenever the timestamp goes backwards.
    pub fn update(&mut self, now_ms: f64) -> f64 {
        let delta = match self.last_timestamp {
            Some(prev) => (now_ms - prev).max(0.0),
            None => 0.0,
        };
        self.last_timestamp = Some(now_ms);
        delta
    }
}

/// Fires once every `period_ms` of accumulated time.
pub struct Interval {
    period_ms: f64,
    accumulator: f64,
}

impl Interval {
    pub fn new(period_ms: f64) -> Self {
        Self {
            period_ms,
            accumulator: 0.0,
        }
    }

    /// Add elapsed time. Returns true when the period has been reached.
    /// A long gap fires once, not once per missed period.
    pub fn advance(&mut self, elapsed_ms: f64) -> bool {
        if !elapsed_ms.is_finite() || elapsed_ms <= 0.0 {
            return false;
        }
        self.accumulator += elapsed_ms;
        if self.accumulator < self.period_ms {
            return false;
        }
        self.accumulator %= self.period_ms;
        true
    }

    /// Restart the period, e.g. after a manual save.
    pub fn reset(&mut self) {
        self.accumulator = 0.0;
    }
}

/// Wall-clock ms since the Unix epoch (`Date.now()` in the browser).
pub fn wall_clock_ms() -> f64 {
    #[cfg(target_arch = "wasm32")]
    {
        js_sys::Date::now()
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .map(|d| d.as_secs_f64() * 1000.0)
            .unwrap_or(0.0)
    }
}

/// Monotonic ms for frame deltas (`performance.now()` in the browser).
/// Falls back to the wall clock when no performance timer exists.
pub fn monotonic_ms() -> f64 {
    #[cfg(target_arch = "wasm32")]
    {
        web_sys::window()
            .and_then(|w| w.performance())
            .map(|p| p.now())
            .unwrap_or_else(wall_clock_ms)
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        wall_clock_ms()
    }
}
