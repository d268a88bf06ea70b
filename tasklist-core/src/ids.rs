//! Clock-derived task id allocation.

use std::time::{SystemTime, UNIX_EPOCH};

use crate::task::TaskId;

/// Source of wall-clock time in milliseconds since the Unix epoch.
pub trait Clock {
    /// Returns the current time in milliseconds since epoch.
    fn now_ms(&self) -> u64;
}

/// [`Clock`] backed by [`SystemTime`].
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now_ms(&self) -> u64 {
        u64::try_from(
            SystemTime::now()
                .duration_since(UNIX_EPOCH)
                .unwrap_or_default()
                .as_millis(),
        )
        .unwrap_or(u64::MAX)
    }
}

impl<F> Clock for F
where
    F: Fn() -> u64,
{
    fn now_ms(&self) -> u64 {
        self()
    }
}

/// Hands out strictly increasing [`TaskId`]s derived from a [`Clock`].
///
/// Ids follow the clock while it moves forward. Two creations within the
/// same millisecond (or a clock that steps backwards) get `last + 1`.
#[derive(Debug, Clone)]
pub struct IdAllocator<C = SystemClock> {
    clock: C,
    last: Option<u64>,
}

impl<C: Clock> IdAllocator<C> {
    /// Creates an allocator reading from `clock`.
    pub const fn new(clock: C) -> Self {
        Self { clock, last: None }
    }

    /// Returns the next id.
    pub fn next_id(&mut self) -> TaskId {
        let now = self.clock.now_ms();
        let id = match self.last {
            Some(last) if now <= last => last.saturating_add(1),
            _ => now,
        };
        self.last = Some(id);
        TaskId::from_millis(id)
    }
}

impl Default for IdAllocator<SystemClock> {
    fn default() -> Self {
        Self::new(SystemClock)
    }
}
