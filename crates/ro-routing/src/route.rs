//! Concrete routes: segments with all three weights and derived totals.

use ro_core::Criterion;
use ro_network::{Road, RoadGraph};

use crate::{RoutingError, RoutingResult};

// ── RouteSegment ──────────────────────────────────────────────────────────────

/// One traversed road, carrying all three weights regardless of which
/// criterion chose it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RouteSegment {
    pub from:   String,
    pub to:     String,
    pub length: u32,
    pub time:   u32,
    pub cost:   u32,
}

impl RouteSegment {
    fn along(from: &str, to: &str, road: &Road) -> Self {
        Self {
            from:   from.to_owned(),
            to:     to.to_owned(),
            length: road.length,
            time:   road.time,
            cost:   road.cost,
        }
    }

    #[inline]
    pub fn weight(&self, criterion: Criterion) -> u32 {
        match criterion {
            Criterion::Length => self.length,
            Criterion::Time   => self.time,
            Criterion::Cost   => self.cost,
        }
    }
}

// ── Route ─────────────────────────────────────────────────────────────────────

/// The result of routing one criterion: an ordered list of segments.
///
/// An empty route means "no path found".  This includes a request whose
/// origin equals its destination: no road is traversed, so there is
/// nothing to report.
#[derive(Clone, Debug, PartialEq, Eq, Default)]
pub struct Route {
    segments: Vec<RouteSegment>,
}

impl Route {
    /// "No path exists".
    pub fn not_found() -> Self {
        Self::default()
    }

    /// A route over `segments`, which must chain (`segments[i].to ==
    /// segments[i + 1].from`).  An empty list yields [`Route::not_found`].
    pub fn from_segments(segments: Vec<RouteSegment>) -> Self {
        debug_assert!(segments.windows(2).all(|w| w[0].to == w[1].from));
        Self { segments }
    }

    pub fn is_found(&self) -> bool {
        !self.segments.is_empty()
    }

    /// `true` if no path was found.
    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    pub fn segments(&self) -> &[RouteSegment] {
        &self.segments
    }

    /// Visited cities: the first segment's origin followed by every
    /// segment's destination.  Empty when no path was found.
    pub fn cities(&self) -> Vec<&str> {
        self.segments
            .first()
            .map(|s| s.from.as_str())
            .into_iter()
            .chain(self.segments.iter().map(|s| s.to.as_str()))
            .collect()
    }

    // ── Totals ────────────────────────────────────────────────────────────

    pub fn total(&self, criterion: Criterion) -> u64 {
        self.segments.iter().map(|s| u64::from(s.weight(criterion))).sum()
    }

    pub fn total_length(&self) -> u64 {
        self.total(Criterion::Length)
    }

    pub fn total_time(&self) -> u64 {
        self.total(Criterion::Time)
    }

    pub fn total_cost(&self) -> u64 {
        self.total(Criterion::Cost)
    }

    /// `(length, time, cost)`.
    pub fn totals(&self) -> (u64, u64, u64) {
        (self.total_length(), self.total_time(), self.total_cost())
    }
}

// ── Building ──────────────────────────────────────────────────────────────────

/// Turn a city path into a [`Route`], taking for each step the first road
/// in the step's incidence list that joins the two cities.
///
/// A path of fewer than two cities yields a not-found route.  A step with no
/// road behind it is [`RoutingError::Reconstruction`].
///
/// Parallel roads are not compared: when the search reached a city over a
/// lighter parallel road that comes later in the incidence list, the route
/// reports the first road's weights.
pub fn build_route<S: AsRef<str>>(graph: &RoadGraph, path: &[S]) -> RoutingResult<Route> {
    let mut segments = Vec::with_capacity(path.len().saturating_sub(1));
    for step in path.windows(2) {
        let (a, b) = (step[0].as_ref(), step[1].as_ref());
        let road = graph
            .neighbors(a)?
            .iter()
            .find(|r| r.connects(a, b))
            .ok_or_else(|| RoutingError::Reconstruction {
                from: a.to_owned(),
                to:   b.to_owned(),
            })?;
        segments.push(RouteSegment::along(a, b, road));
    }
    Ok(Route::from_segments(segments))
}
