//! Profiling instrumentation for the pointer handlers.
//!
//! Pointer-move fires for every mouse sample during a drag, so the handlers
//! carry `profile_scope!` markers. They compile to nothing unless the
//! `profiling` feature is enabled:
//!
//! ```toml
//! [dependencies]
//! area-selector = { features = ["profiling"] }
//! ```

use std::time::Instant;
use tracing::warn;

/// Budget for a single pointer event before it is reported as slow
pub const HANDLER_BUDGET_MS: f64 = 4.0;

/// Profile a scope with the given name. Zero-cost when profiling is disabled.
#[macro_export]
macro_rules! profile_scope {
    ($name:expr) => {
        #[cfg(feature = "profiling")]
        let _timer = $crate::perf::ScopedTimer::new($name, $crate::perf::HANDLER_BUDGET_MS);
        #[cfg(not(feature = "profiling"))]
        let _ = $name;
    };
    ($name:expr, $threshold_ms:expr) => {
        #[cfg(feature = "profiling")]
        let _timer = $crate::perf::ScopedTimer::new($name, $threshold_ms);
        #[cfg(not(feature = "profiling"))]
        let _ = ($name, $threshold_ms);
    };
}

/// Logs a warning on drop when the scope ran longer than its threshold.
pub struct ScopedTimer {
    name: &'static str,
    start: Instant,
    threshold_ms: f64,
}

impl ScopedTimer {
    pub fn new(name: &'static str, threshold_ms: f64) -> Self {
        Self {
            name,
            start: Instant::now(),
            threshold_ms,
        }
    }

    pub fn elapsed_ms(&self) -> f64 {
        self.start.elapsed().as_secs_f64() * 1000.0
    }

    pub fn name(&self) -> &'static str {
        self.name
    }
}

impl Drop for ScopedTimer {
    fn drop(&mut self) {
        let elapsed_ms = self.elapsed_ms();
        if elapsed_ms > self.threshold_ms {
            warn!(
                operation = self.name,
                elapsed_ms = format!("{:.2}", elapsed_ms),
                threshold_ms = format!("{:.2}", self.threshold_ms),
                "Slow operation"
            );
        }
    }
}

/// Run a closure and return its result with the elapsed time in milliseconds.
#[inline]
pub fn measure<T, F: FnOnce() -> T>(f: F) -> (T, f64) {
    let start = Instant::now();
    let result = f();
    (result, start.elapsed().as_secs_f64() * 1000.0)
}
