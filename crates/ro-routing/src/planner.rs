//! Per-request orchestration: three searches, three routes, one compromise.

use std::fmt;

use ro_core::{Criterion, Request};
use ro_network::RoadGraph;
use tracing::{debug, debug_span};

use crate::{DijkstraSearch, PathSearch, Route, RoutingResult, build_route, select_compromise};

// ── RouteKind ─────────────────────────────────────────────────────────────────

/// Which of the four answers to a request a route is.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
pub enum RouteKind {
    Optimal(Criterion),
    Compromise,
}

impl RouteKind {
    /// All kinds in reporting order.
    pub const ALL: [RouteKind; 4] = [
        RouteKind::Optimal(Criterion::Length),
        RouteKind::Optimal(Criterion::Time),
        RouteKind::Optimal(Criterion::Cost),
        RouteKind::Compromise,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            RouteKind::Optimal(c)  => c.as_str(),
            RouteKind::Compromise  => "compromise",
        }
    }
}

impl fmt::Display for RouteKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ── RouteSet ──────────────────────────────────────────────────────────────────

/// The four routes answering one request.
#[derive(Clone, Debug, PartialEq, Eq, Default)]
pub struct RouteSet {
    pub length:     Route,
    pub time:       Route,
    pub cost:       Route,
    pub compromise: Route,
}

impl RouteSet {
    /// The single-criterion optimum for `criterion`.
    pub fn optimal(&self, criterion: Criterion) -> &Route {
        match criterion {
            Criterion::Length => &self.length,
            Criterion::Time   => &self.time,
            Criterion::Cost   => &self.cost,
        }
    }

    pub fn get(&self, kind: RouteKind) -> &Route {
        match kind {
            RouteKind::Optimal(c) => self.optimal(c),
            RouteKind::Compromise => &self.compromise,
        }
    }

    /// `(kind, route)` pairs in reporting order.
    pub fn iter(&self) -> impl Iterator<Item = (RouteKind, &Route)> + '_ {
        RouteKind::ALL.into_iter().map(move |k| (k, self.get(k)))
    }
}

// ── RoutePlanner ──────────────────────────────────────────────────────────────

/// Answers [`Request`]s against a shared, read-only [`RoadGraph`].
///
/// # Example
///
/// ```
/// use ro_core::{Criterion, Priorities, Request, RequestId};
/// use ro_network::{City, Road, RoadGraph};
/// use ro_routing::RoutePlanner;
///
/// let mut g = RoadGraph::new();
/// g.add_city(City::new(1, "A")).unwrap();
/// g.add_city(City::new(2, "B")).unwrap();
/// g.add_road(Road::new("A", "B", 10, 5, 3)).unwrap();
///
/// let p = Priorities::new([Criterion::Time, Criterion::Length, Criterion::Cost]).unwrap();
/// let set = RoutePlanner::new().plan(&g, &Request::new(RequestId(0), "A", "B", p)).unwrap();
/// assert_eq!(set.compromise.cities(), ["A", "B"]);
/// ```
#[derive(Clone, Debug, Default)]
pub struct RoutePlanner<S: PathSearch = DijkstraSearch> {
    search: S,
}

impl RoutePlanner<DijkstraSearch> {
    pub fn new() -> Self {
        Self { search: DijkstraSearch }
    }
}

impl<S: PathSearch> RoutePlanner<S> {
    pub fn with_search(search: S) -> Self {
        Self { search }
    }

    /// Route one criterion.
    pub fn optimal(
        &self,
        graph:     &RoadGraph,
        from:      &str,
        to:        &str,
        criterion: Criterion,
    ) -> RoutingResult<Route> {
        let path = self.search.find_path(graph, from, to, criterion)?;
        build_route(graph, &path)
    }

    /// Answer one request: the three single-criterion optima plus the
    /// compromise among them.
    pub fn plan(&self, graph: &RoadGraph, request: &Request) -> RoutingResult<RouteSet> {
        let _span = debug_span!("plan", request = %request.id).entered();
        let (from, to) = (request.from.as_str(), request.to.as_str());

        let length = self.optimal(graph, from, to, Criterion::Length)?;
        let time   = self.optimal(graph, from, to, Criterion::Time)?;
        let cost   = self.optimal(graph, from, to, Criterion::Cost)?;
        let compromise = select_compromise([&length, &time, &cost], &request.priorities);

        debug!(
            found = compromise.is_found(),
            priorities = %request.priorities,
            "compromise selected"
        );
        Ok(RouteSet { length, time, cost, compromise })
    }

    /// Plan every request in order.  A failing request yields an `Err` in its
    /// slot and does not stop the batch.
    pub fn plan_all(&self, graph: &RoadGraph, requests: &[Request]) -> Vec<RoutingResult<RouteSet>> {
        requests.iter().map(|r| self.plan(graph, r)).collect()
    }

    /// [`plan_all`](Self::plan_all) on the global Rayon pool.  Results keep
    /// request order.
    #[cfg(feature = "parallel")]
    pub fn plan_all_parallel(
        &self,
        graph:    &RoadGraph,
        requests: &[Request],
    ) -> Vec<RoutingResult<RouteSet>> {
        use rayon::prelude::*;

        requests.par_iter().map(|r| self.plan(graph, r)).collect()
    }
}
