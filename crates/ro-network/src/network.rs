//! Road graph representation.
//!
//! # Data layout
//!
//! Every distinct city name gets a dense [`NodeIx`] slot in registration
//! order.  Per-slot data lives in parallel vectors:
//!
//! ```text
//! cities[n]       the City registered under slot n
//! incident[n]     roads leaving n, oriented so road.city_a == cities[n].name
//! targets[n][k]   slot of incident[n][k].city_b
//! ```
//!
//! `targets` is redundant with the road's `city_b` name but lets the search
//! relax edges without a hash lookup per edge.
//!
//! An undirected road between A and B is stored twice: once in A's list and
//! once, mirrored, in B's list.  Both copies carry identical weights.

use ro_core::{CityId, Criterion, NodeIx};

use crate::{NetworkError, NetworkResult};

#[cfg(feature = "fx-hash")]
type NameIndex = rustc_hash::FxHashMap<String, NodeIx>;
#[cfg(not(feature = "fx-hash"))]
type NameIndex = std::collections::HashMap<String, NodeIx>;

// ── City ──────────────────────────────────────────────────────────────────────

/// A named city.  The graph identifies cities by `name`; `id` is carried
/// through from the scenario file untouched.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct City {
    pub id:   CityId,
    pub name: String,
}

impl City {
    pub fn new(id: u32, name: impl Into<String>) -> Self {
        Self { id: CityId(id), name: name.into() }
    }
}

// ── Road ──────────────────────────────────────────────────────────────────────

/// An undirected road with three independent non-negative weights.
///
/// Inside a [`RoadGraph`] incidence list the road is *oriented*: `city_a` is
/// the owning city and `city_b` the neighbour.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Road {
    pub city_a: String,
    pub city_b: String,
    pub length: u32,
    pub time:   u32,
    pub cost:   u32,
}

impl Road {
    pub fn new(
        city_a: impl Into<String>,
        city_b: impl Into<String>,
        length: u32,
        time:   u32,
        cost:   u32,
    ) -> Self {
        Self { city_a: city_a.into(), city_b: city_b.into(), length, time, cost }
    }

    /// The same road seen from the other endpoint.
    pub fn reversed(&self) -> Road {
        Road {
            city_a: self.city_b.clone(),
            city_b: self.city_a.clone(),
            length: self.length,
            time:   self.time,
            cost:   self.cost,
        }
    }

    /// `true` if the road joins `x` and `y`, in either orientation.
    pub fn connects(&self, x: &str, y: &str) -> bool {
        (self.city_a == x && self.city_b == y) || (self.city_a == y && self.city_b == x)
    }

    #[inline]
    pub fn weight(&self, criterion: Criterion) -> u32 {
        weight(self, criterion)
    }
}

/// Edge weight of `road` under `criterion`.
#[inline]
pub fn weight(road: &Road, criterion: Criterion) -> u32 {
    match criterion {
        Criterion::Length => road.length,
        Criterion::Time   => road.time,
        Criterion::Cost   => road.cost,
    }
}

// ── RoadGraph ─────────────────────────────────────────────────────────────────

/// Cities plus per-city incidence lists.
///
/// Populated through [`add_city`](Self::add_city) and
/// [`add_road`](Self::add_road), then shared by reference with the search.
/// Nothing in the routing crates takes `&mut RoadGraph`.
#[derive(Clone, Debug, Default)]
pub struct RoadGraph {
    index:      NameIndex,
    cities:     Vec<City>,
    incident:   Vec<Vec<Road>>,
    targets:    Vec<Vec<NodeIx>>,
    road_count: usize,
}

impl RoadGraph {
    pub fn new() -> Self {
        Self::default()
    }

    // ── Mutation ──────────────────────────────────────────────────────────

    /// Register `city`, overwriting any city already registered under the
    /// same name.  Overwriting keeps the existing slot and incidence list.
    ///
    /// Fails with [`NetworkError::TooManyCities`] once every `NodeIx` below
    /// the `INVALID` sentinel is taken.
    pub fn add_city(&mut self, city: City) -> NetworkResult<NodeIx> {
        if let Some(&ix) = self.index.get(&city.name) {
            self.cities[ix.index()] = city;
            return Ok(ix);
        }
        let ix = slot(self.cities.len())?;
        self.index.insert(city.name.clone(), ix);
        self.cities.push(city);
        self.incident.push(Vec::new());
        self.targets.push(Vec::new());
        Ok(ix)
    }

    /// Register an undirected road.  Both endpoints must already exist.
    ///
    /// The road is appended to `city_a`'s incidence list and its mirror to
    /// `city_b`'s.  A self-loop is stored twice in the same list.
    pub fn add_road(&mut self, road: Road) -> NetworkResult<()> {
        let a = self.node(&road.city_a)?;
        let b = self.node(&road.city_b)?;

        let mirrored = road.reversed();
        self.incident[a.index()].push(road);
        self.targets[a.index()].push(b);
        self.incident[b.index()].push(mirrored);
        self.targets[b.index()].push(a);
        self.road_count += 1;
        Ok(())
    }

    // ── Dimensions ────────────────────────────────────────────────────────

    pub fn city_count(&self) -> usize {
        self.cities.len()
    }

    /// Number of undirected roads (each stored as two oriented copies).
    pub fn road_count(&self) -> usize {
        self.road_count
    }

    pub fn is_empty(&self) -> bool {
        self.cities.is_empty()
    }

    // ── Lookups ───────────────────────────────────────────────────────────

    /// All cities in registration order.
    pub fn cities(&self) -> impl Iterator<Item = &City> + '_ {
        self.cities.iter()
    }

    pub fn city(&self, name: &str) -> Option<&City> {
        self.index.get(name).map(|ix| &self.cities[ix.index()])
    }

    pub fn contains(&self, name: &str) -> bool {
        self.index.contains_key(name)
    }

    /// Slot of a registered city.
    pub fn node(&self, name: &str) -> NetworkResult<NodeIx> {
        self.index
            .get(name)
            .copied()
            .ok_or_else(|| NetworkError::unknown_city(name))
    }

    /// Name of the city in slot `node`.
    ///
    /// # Panics
    /// Panics if `node` did not come from this graph.
    #[inline]
    pub fn name(&self, node: NodeIx) -> &str {
        &self.cities[node.index()].name
    }

    /// Roads leaving `name`, in insertion order.
    pub fn neighbors(&self, name: &str) -> NetworkResult<&[Road]> {
        let ix = self.node(name)?;
        Ok(&self.incident[ix.index()])
    }

    // ── Traversal ─────────────────────────────────────────────────────────

    /// `(neighbour slot, oriented road)` pairs leaving `node`, in insertion
    /// order.
    #[inline]
    pub fn out_edges(&self, node: NodeIx) -> impl Iterator<Item = (NodeIx, &Road)> + '_ {
        self.targets[node.index()]
            .iter()
            .copied()
            .zip(self.incident[node.index()].iter())
    }
}

/// The `NodeIx` for the `len`-th city.
pub(crate) fn slot(len: usize) -> NetworkResult<NodeIx> {
    NodeIx::try_from(len)
        .ok()
        .filter(|&ix| ix != NodeIx::INVALID)
        .ok_or(NetworkError::TooManyCities { limit: NodeIx::INVALID.index() })
}
