use crate::errors::Error;
use crate::events::Interval;
use itertools::Itertools;
use log::{debug, trace};

/// Configures how the resolver validates new events.
#[derive(Debug, Clone, Copy, Default)]
pub struct Settings {
    /// If true, adding an event that strictly contains (or is strictly
    /// contained in) an already known event fails with
    /// [`Error::NestedInterval`].  Events sharing a start or a stop time are
    /// always accepted.
    pub reject_nested: bool,
}

/// Finds which event is active at any given time, when multiple events
/// overlap.  Only one event can be active at any moment.
///
/// If there are several events present at a given time, the following rules
/// determine which one is used:
///
/// - the event which started last;
/// - if multiple events start at the same time, the event ending first.
///
/// Events should never fully overlap one another, although this is only
/// checked when [`Settings::reject_nested`] is set.
///
/// No ordering is maintained between calls, every query scans all known
/// events.  Use [`OverlapResolver::expire_before`] to drop the events that
/// can no longer matter.
#[derive(Debug, Clone)]
pub struct OverlapResolver<T, D> {
    events: Vec<Interval<T, D>>,
    settings: Settings,
}

impl<T, D> Default for OverlapResolver<T, D> {
    fn default() -> Self {
        Self::with_settings(Settings::default())
    }
}

impl<T, D> OverlapResolver<T, D> {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_settings(settings: Settings) -> Self {
        Self {
            events: Vec::new(),
            settings,
        }
    }

    /// Number of known events
    #[must_use]
    pub fn len(&self) -> usize {
        self.events.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    /// All known events, in no specific order
    pub fn iter(&self) -> impl Iterator<Item = &Interval<T, D>> + '_ {
        self.events.iter()
    }
}

impl<T: Ord, D> OverlapResolver<T, D> {
    /// Register a new event.  Its start and stop times must be unique among
    /// known events, otherwise [`Error::DuplicateInterval`] is returned.
    pub fn add(&mut self, event: Interval<T, D>) -> Result<(), Error> {
        if self.contains(&event) {
            return Err(Error::DuplicateInterval);
        }
        if self.settings.reject_nested
            && self.events.iter().any(|e| {
                e.strictly_contains(&event) || event.strictly_contains(e)
            })
        {
            return Err(Error::NestedInterval);
        }
        self.events.push(event);
        debug!("added event, {} now known", self.events.len());
        Ok(())
    }

    /// Register multiple events, stopping at the first one that cannot be
    /// added.  Events added before the error are kept.
    pub fn extend_checked<I>(&mut self, events: I) -> Result<(), Error>
    where
        I: IntoIterator<Item = Interval<T, D>>,
    {
        events.into_iter().try_for_each(|e| self.add(e))
    }

    /// Forget about the event with the same start and stop times as the
    /// given one, and return it.
    pub fn remove(
        &mut self,
        event: &Interval<T, D>,
    ) -> Result<Interval<T, D>, Error> {
        match self.events.iter().position(|e| e == event) {
            None => Err(Error::NotFound),
            Some(idx) => {
                let removed = self.events.swap_remove(idx);
                debug!("removed event, {} now known", self.events.len());
                Ok(removed)
            }
        }
    }

    /// Whether an event with the same start and stop times is known
    #[must_use]
    pub fn contains(&self, event: &Interval<T, D>) -> bool {
        self.events.iter().any(|e| e == event)
    }

    /// The event active at ts, if any.
    /// Among all running events, this is the one that started last, or if
    /// several started at the same time the one that stops first.  This is
    /// the greatest running event in the order defined on [`Interval`].
    #[must_use]
    pub fn active_at(&self, ts: &T) -> Option<&Interval<T, D>> {
        let active = self.events.iter().filter(|e| e.is_running(ts)).max();
        trace!("active_at: found={}", active.is_some());
        active
    }

    /// The event that will be active when the next coming event starts.
    /// This is not necessarily the next coming event itself, since another
    /// event starting at the same time could take priority.
    #[must_use]
    pub fn next_active(&self, ts: &T) -> Option<&Interval<T, D>> {
        self.events
            .iter()
            .filter(|e| e.is_coming(ts))
            .min()
            .and_then(|first| self.active_at(first.start()))
    }

    /// Time and event for the next change of the active event: either when
    /// the active event stops, or when a new event kicks in.
    ///
    /// Returns `(None, None)` when no event is active and none is coming.
    /// When the active event stops with nothing else running at that time,
    /// the returned event is None.
    ///
    /// If a coming event starts while the active one is still running, its
    /// start time is reported even though it might be dominated when it
    /// starts.
    #[must_use]
    pub fn next_change(
        &self,
        ts: &T,
    ) -> (Option<&T>, Option<&Interval<T, D>>) {
        let change = match (self.active_at(ts), self.next_active(ts)) {
            (None, None) => (None, None),
            (Some(active), None) => {
                (Some(active.stop()), self.active_at(active.stop()))
            }
            (None, Some(next)) => (Some(next.start()), Some(next)),
            (Some(active), Some(next)) => {
                if active.stop() < next.start() {
                    (Some(active.stop()), self.active_at(active.stop()))
                } else {
                    (Some(next.start()), Some(next))
                }
            }
        };
        trace!(
            "next_change: at={} event={}",
            change.0.is_some(),
            change.1.is_some()
        );
        change
    }

    /// Successive changes of the active event, starting after ts.
    /// Each returned time is fed back into [`OverlapResolver::next_change`],
    /// until nothing else ever happens.
    pub fn changes<'a>(&'a self, ts: &'a T) -> Changes<'a, T, D> {
        Changes {
            resolver: self,
            ts: Some(ts),
        }
    }

    /// Drop all events that are finished at ts.
    /// This only saves memory and processing time: queries for any time at or
    /// after ts return the same results as before.
    pub fn expire_before(&mut self, ts: &T) {
        let before = self.events.len();
        self.events.retain(|e| !e.is_passed(ts));
        if self.events.len() != before {
            debug!(
                "expired {} events, {} still known",
                before - self.events.len(),
                self.events.len()
            );
        }
    }
}

impl<T: Ord + Clone, D: Clone> OverlapResolver<T, D> {
    /// A copy of the event active at ts, whose stop time is the next change
    /// time, i.e. when it stops or when another event takes priority.
    /// The returned event is not registered in the resolver.
    #[must_use]
    pub fn active_clipped_at(&self, ts: &T) -> Option<Interval<T, D>> {
        let active = self.active_at(ts)?;
        let (stop, _) = self.next_change(ts);
        // An active event always stops, so stop is known here
        stop.map(|stop| active.truncated(stop.clone()))
    }
}

impl<T, D> std::fmt::Display for OverlapResolver<T, D>
where
    T: Ord + std::fmt::Display,
    D: std::fmt::Display,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.events.iter().sorted().format(", "))
    }
}

/// Iterator returned by [`OverlapResolver::changes`]
pub struct Changes<'a, T, D> {
    resolver: &'a OverlapResolver<T, D>,
    ts: Option<&'a T>,
}

impl<'a, T: Ord, D> Iterator for Changes<'a, T, D> {
    type Item = (&'a T, Option<&'a Interval<T, D>>);

    fn next(&mut self) -> Option<Self::Item> {
        let (at, event) = self.resolver.next_change(self.ts?);
        self.ts = at;
        at.map(|at| (at, event))
    }
}
