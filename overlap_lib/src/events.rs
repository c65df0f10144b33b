use crate::errors::Error;
use std::cmp::Ordering;

/// A single event, which spans the half-open interval `[start, stop)` and
/// carries arbitrary data (a name, a description, a setpoint,...).
///
/// Events are immutable once created.  The data never takes part in
/// comparisons: two events with the same start and stop are equal.
#[derive(Debug, Clone)]
pub struct Interval<T, D> {
    start: T,
    stop: T,
    data: D,
}

impl<T: Ord, D> Interval<T, D> {
    /// Create a new event.  Its stop time must be strictly after its start
    /// time, otherwise [`Error::InvalidRange`] is returned.
    pub fn new(start: T, stop: T, data: D) -> Result<Self, Error> {
        if stop <= start {
            return Err(Error::InvalidRange);
        }
        Ok(Self { start, stop, data })
    }

    /// Whether the event is already finished at ts.
    #[must_use]
    pub fn is_passed(&self, ts: &T) -> bool {
        *ts >= self.stop
    }

    /// Whether the event is in progress at ts.  The stop time itself is not
    /// part of the event.
    #[must_use]
    pub fn is_running(&self, ts: &T) -> bool {
        self.start <= *ts && *ts < self.stop
    }

    /// Whether the event only starts after ts.
    #[must_use]
    pub fn is_coming(&self, ts: &T) -> bool {
        *ts < self.start
    }

    /// Whether other lies entirely inside self, without sharing either its
    /// start or its stop.
    #[must_use]
    pub fn strictly_contains(&self, other: &Self) -> bool {
        self.start < other.start && other.stop < self.stop
    }
}

impl<T, D> Interval<T, D> {
    /// The event start time
    #[must_use]
    pub fn start(&self) -> &T {
        &self.start
    }

    /// The event stop time
    #[must_use]
    pub fn stop(&self) -> &T {
        &self.stop
    }

    #[must_use]
    pub fn data(&self) -> &D {
        &self.data
    }
}

impl<T: Ord + Clone, D: Clone> Interval<T, D> {
    /// A copy of self that stops at an earlier time.
    /// The caller must ensure stop is still after the start time.
    pub(crate) fn truncated(&self, stop: T) -> Self {
        debug_assert!(self.start < stop);
        Self {
            start: self.start.clone(),
            stop,
            data: self.data.clone(),
        }
    }
}

impl<T: PartialEq, D> PartialEq for Interval<T, D> {
    fn eq(&self, other: &Self) -> bool {
        self.start == other.start && self.stop == other.stop
    }
}

impl<T: Eq, D> Eq for Interval<T, D> {}

impl<T: Ord, D> PartialOrd for Interval<T, D> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<T: Ord, D> Ord for Interval<T, D> {
    /// Events are ordered by start time.  When they start at the same time,
    /// the longest one comes first.
    fn cmp(&self, other: &Self) -> Ordering {
        self.start
            .cmp(&other.start)
            .then_with(|| other.stop.cmp(&self.stop))
    }
}

impl<T: std::fmt::Display, D: std::fmt::Display> std::fmt::Display
    for Interval<T, D>
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}-{}: {}", self.start, self.stop, self.data)
    }
}
