use std::time::{Duration, Instant};

/// Minimum spacing between gated backend calls.
pub const COOLDOWN: Duration = Duration::from_millis(3000);

/// Time source for the gate. Injectable so tests don't sleep.
pub trait Clock {
    fn now(&self) -> Instant;
}

/// Wall-clock time, the production source.
#[derive(Debug, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> Instant {
        Instant::now()
    }
}

// ---------------------------------------------------------------------------
// Cooldown gate
// ---------------------------------------------------------------------------

/// Rate limiter holding the single timestamp of the last permitted call.
///
/// Call sites must check the gate before issuing any gated network action.
/// State lives for the process only; nothing is persisted.
pub struct CooldownGate<C: Clock = SystemClock> {
    clock: C,
    last_call: Option<Instant>,
    period: Duration,
}

impl CooldownGate<SystemClock> {
    pub fn new() -> Self {
        Self::with_clock(SystemClock)
    }
}

impl Default for CooldownGate<SystemClock> {
    fn default() -> Self {
        Self::new()
    }
}

impl<C: Clock> CooldownGate<C> {
    pub fn with_clock(clock: C) -> Self {
        CooldownGate {
            clock,
            last_call: None,
            period: COOLDOWN,
        }
    }

    /// Check the gate. `Ok(())` permits the action and records the
    /// timestamp; `Err(remaining)` rejects it with the wait left in whole
    /// seconds (rounded up) and leaves the timestamp untouched.
    pub fn check(&mut self) -> Result<(), u64> {
        let now = self.clock.now();
        if let Some(last) = self.last_call {
            let elapsed = now.duration_since(last);
            if elapsed < self.period {
                let remaining = self.period - elapsed;
                return Err(remaining.as_secs_f64().ceil() as u64);
            }
        }
        self.last_call = Some(now);
        Ok(())
    }

    /// Timestamp of the last permitted call, if any.
    pub fn last_call(&self) -> Option<Instant> {
        self.last_call
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
