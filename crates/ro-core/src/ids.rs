//! Strongly typed identifier wrappers.
//!
//! `CityId` is the numeric id a scenario file assigns to a city; the engine
//! never looks cities up by it.  `NodeIx` is the dense slot a `RoadGraph`
//! gives each distinct city name, suitable for direct `Vec` indexing inside
//! the search.  `RequestId` numbers requests in file order.

use std::fmt;

/// Generate a typed ID wrapper around a primitive integer.
macro_rules! typed_id {
    ($(#[$attr:meta])* $vis:vis struct $name:ident($inner:ty);) => {
        $(#[$attr])*
        #[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug)]
        #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
        $vis struct $name(pub $inner);

        impl $name {
            /// Sentinel meaning "no valid ID".
            pub const INVALID: $name = $name(<$inner>::MAX);

            /// Cast to `usize` for direct use as a `Vec` index.
            #[inline(always)]
            pub fn index(self) -> usize {
                self.0 as usize
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}({})", stringify!($name), self.0)
            }
        }

        impl TryFrom<usize> for $name {
            type Error = std::num::TryFromIntError;
            fn try_from(n: usize) -> Result<$name, Self::Error> {
                <$inner>::try_from(n).map($name)
            }
        }
    };
}

typed_id! {
    /// Numeric city id as written in the scenario file.  Metadata only.
    pub struct CityId(u32);
}

typed_id! {
    /// Dense per-graph slot of a city, assigned in registration order.
    pub struct NodeIx(u32);
}

typed_id! {
    /// Position of a request in its scenario, starting at 0.
    pub struct RequestId(u32);
}
