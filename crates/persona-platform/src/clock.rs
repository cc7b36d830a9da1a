use persona_core::ports::ClockPort;

/// Wall clock. On wasm32 chrono reads `Date.now()` through its `wasmbind` feature.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl ClockPort for SystemClock {
    fn now_millis(&self) -> i64 {
        chrono::Utc::now().timestamp_millis()
    }
}
