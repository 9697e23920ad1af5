//! `ro-input` — scenario loading.
//!
//! | Module     | Contents                                                  |
//! |------------|-----------------------------------------------------------|
//! | [`loader`] | `load_scenario`, `load_scenario_reader`, `parse_scenario` |
//! | [`error`]  | `InputError`, `InputResult<T>`                            |

pub mod error;
pub mod loader;


pub use error::{InputError, InputResult};
pub use loader::{RejectedRequest, Scenario, load_scenario, load_scenario_reader, parse_scenario};
