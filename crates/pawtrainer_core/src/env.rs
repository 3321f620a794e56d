//! Impure inputs to state transitions: fresh ids and the current time.
//!
//! # Responsibility
//! - Issue numeric ids that are creation-time derived yet strictly unique.
//! - Produce ISO-8601 UTC timestamps for practice stamping.
//!
//! # Invariants
//! - `IdGenerator::next_id` is strictly increasing for the generator
//!   lifetime, including calls within the same millisecond.
//! - Timestamps use millisecond precision and a `Z` suffix.

use log::warn;
use std::sync::atomic::{AtomicI64, Ordering};
use time::format_description::well_known::Rfc3339;
use time::macros::format_description;
use time::OffsetDateTime;

/// Supplies the side-effecting inputs a transition needs.
///
/// Keeping these behind a trait lets the reducer stay deterministic under
/// test while production wiring reads the real clock.
pub trait TransitionEnv {
    /// Returns an id never returned before by this environment.
    fn fresh_id(&self) -> i64;
    /// Returns the current instant as an ISO-8601 string.
    fn now_timestamp(&self) -> String;
    /// Records an id already in use so later fresh ids exceed it.
    fn observe_id(&self, _id: i64) {}
}

/// Monotonic id source seeded from wall-clock milliseconds.
#[derive(Debug, Default)]
pub struct IdGenerator {
    last: AtomicI64,
}

impl IdGenerator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Raises the floor if `floor` exceeds the last issued id.
    pub fn observe(&self, floor: i64) {
        self.last.fetch_max(floor, Ordering::SeqCst);
    }

    /// Issues the next id for the current wall-clock millisecond.
    pub fn next_id(&self) -> i64 {
        self.next_id_at(current_epoch_ms())
    }

    /// Issues `max(now_ms, last + 1)`.
    pub fn next_id_at(&self, now_ms: i64) -> i64 {
        let mut issued = now_ms;
        // fetch_update only fails when the closure returns None.
        let _ = self
            .last
            .fetch_update(Ordering::SeqCst, Ordering::SeqCst, |last| {
                issued = now_ms.max(last.saturating_add(1));
                Some(issued)
            });
        issued
    }
}

/// Production environment: system clock plus monotonic ids and stamps.
#[derive(Debug, Default)]
pub struct SystemEnv {
    ids: IdGenerator,
    /// Epoch-ms of practice stamps; same `max(now, last + 1)` rule as ids so
    /// two stamps never share a millisecond.
    stamps: IdGenerator,
}

impl SystemEnv {
    pub fn new() -> Self {
        Self::default()
    }
}

impl TransitionEnv for SystemEnv {
    fn fresh_id(&self) -> i64 {
        self.ids.next_id()
    }

    fn now_timestamp(&self) -> String {
        let stamp_ms = self.stamps.next_id();
        let at = OffsetDateTime::from_unix_timestamp_nanos(i128::from(stamp_ms) * 1_000_000)
            .unwrap_or_else(|_| OffsetDateTime::now_utc());
        format_timestamp(at)
    }

    fn observe_id(&self, id: i64) {
        self.ids.observe(id);
    }
}

/// Formats `at` as `YYYY-MM-DDTHH:MM:SS.mmmZ` in UTC.
pub fn format_timestamp(at: OffsetDateTime) -> String {
    let at = at.to_offset(time::UtcOffset::UTC);
    let format =
        format_description!("[year]-[month]-[day]T[hour]:[minute]:[second].[subsecond digits:3]Z");
    match at.format(format) {
        Ok(value) => value,
        Err(err) => {
            warn!("event=timestamp_format module=env status=fallback error={err}");
            at.format(&Rfc3339).unwrap_or_default()
        }
    }
}

/// Parses a persisted practice timestamp.
pub fn parse_timestamp(value: &str) -> Option<OffsetDateTime> {
    OffsetDateTime::parse(value, &Rfc3339).ok()
}

fn current_epoch_ms() -> i64 {
    let nanos = OffsetDateTime::now_utc().unix_timestamp_nanos();
    i64::try_from(nanos / 1_000_000).unwrap_or(i64::MAX)
}
