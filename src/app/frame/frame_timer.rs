/// Milliseconds on a monotonic-enough clock for the current target
#[cfg(target_arch = "wasm32")]
fn now_ms() -> f64 {
    js_sys::Date::now()
}

#[cfg(not(target_arch = "wasm32"))]
fn now_ms() -> f64 {
    use std::sync::OnceLock;
    use std::time::Instant;

    static EPOCH: OnceLock<Instant> = OnceLock::new();
    EPOCH.get_or_init(Instant::now).elapsed().as_secs_f64() * 1000.0
}

/// Wall time spent inside one frame step
#[derive(Clone, Copy, Debug)]
pub(crate) struct FrameTimer {
    started_ms: f64,
}

impl FrameTimer {
    pub(crate) fn start() -> Self {
        Self { started_ms: now_ms() }
    }

    pub(crate) fn elapsed_ms(&self) -> f64 {
        (now_ms() - self.started_ms).max(0.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn elapsed_is_never_negative() {
        let timer = FrameTimer::start();
        assert!(timer.elapsed_ms() >= 0.0);
    }
}
