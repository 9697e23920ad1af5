//! `ro-routing` — the routing engine.
//!
//! # Crate layout
//!
//! | Module         | Contents                                                |
//! |----------------|---------------------------------------------------------|
//! | [`search`]     | `PathSearch` trait, `DijkstraSearch`, `find_path`       |
//! | [`route`]      | `RouteSegment`, `Route`, `build_route`                  |
//! | [`compromise`] | `compare_by_keys`, `select_compromise`                  |
//! | [`planner`]    | `RoutePlanner`, `RouteSet`, `RouteKind`                 |
//! | [`error`]      | `RoutingError`, `RoutingResult<T>`                      |
//!
//! # Per-request flow
//!
//! ```text
//! RoadGraph ──find_path×3──▶ city paths ──build_route──▶ 3 Routes
//!                                                          │
//!                      priorities ──select_compromise◀─────┘
//!                                          │
//!                                          ▼
//!                               RouteSet { length, time, cost, compromise }
//! ```
//!
//! # Feature flags
//!
//! | Flag       | Effect                                                  |
//! |------------|---------------------------------------------------------|
//! | `parallel` | Adds `RoutePlanner::plan_all_parallel` (Rayon).         |

pub mod compromise;
pub mod error;
pub mod planner;
pub mod route;
pub mod search;


pub use compromise::{compare_by_keys, select_compromise};
pub use error::{RoutingError, RoutingResult};
pub use planner::{RouteKind, RoutePlanner, RouteSet};
pub use route::{Route, RouteSegment, build_route};
pub use search::{DijkstraSearch, PathSearch, find_path};
