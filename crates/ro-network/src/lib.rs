//! `ro-network` — cities, roads, and the road graph.
//!
//! # Crate layout
//!
//! | Module      | Contents                                   |
//! |-------------|--------------------------------------------|
//! | [`network`] | `City`, `Road`, `RoadGraph`, `weight`      |
//! | [`error`]   | `NetworkError`, `NetworkResult<T>`         |
//!
//! # Feature flags
//!
//! | Flag      | Effect                                             |
//! |-----------|----------------------------------------------------|
//! | `fx-hash` | FxHash instead of SipHash for the name index.      |
//! | `serde`   | Derives `Serialize`/`Deserialize` on public types. |

pub mod error;
pub mod network;


pub use error::{NetworkError, NetworkResult};
pub use network::{City, Road, RoadGraph, weight};
