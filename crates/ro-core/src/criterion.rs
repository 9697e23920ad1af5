//! Routing criteria and caller-supplied priority orderings.

use std::fmt;
use std::str::FromStr;

use crate::{CoreError, CoreResult};

// ── Criterion ─────────────────────────────────────────────────────────────────

/// One of the three independent edge-weight dimensions.
///
/// Lower is always better for every criterion.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Criterion {
    /// Road length.
    Length,
    /// Travel time.
    Time,
    /// Monetary cost (tolls, fuel).
    Cost,
}

impl Criterion {
    /// All criteria in canonical order.
    pub const ALL: [Criterion; 3] = [Criterion::Length, Criterion::Time, Criterion::Cost];

    /// Lower-case label, used for CSV column values and log fields.
    pub fn as_str(self) -> &'static str {
        match self {
            Criterion::Length => "length",
            Criterion::Time   => "time",
            Criterion::Cost   => "cost",
        }
    }

    /// Single-letter symbol used in scenario files and text results.
    pub fn symbol(self) -> char {
        match self {
            Criterion::Length => 'Д',
            Criterion::Time   => 'В',
            Criterion::Cost   => 'С',
        }
    }
}

impl fmt::Display for Criterion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Parses a priority token.
///
/// | Token                       | Criterion |
/// |-----------------------------|-----------|
/// | `Д`, `L`, `length`          | `Length`  |
/// | `В`, `T`, `time`            | `Time`    |
/// | `С` (Cyrillic), `C`, `cost` | `Cost`    |
///
/// Latin tokens are case-insensitive.
impl FromStr for Criterion {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let token = s.trim();
        match token {
            "Д" | "д" => return Ok(Criterion::Length),
            "В" | "в" => return Ok(Criterion::Time),
            "С" | "с" => return Ok(Criterion::Cost),
            _ => {}
        }
        match token.to_ascii_lowercase().as_str() {
            "l" | "length" => Ok(Criterion::Length),
            "t" | "time"   => Ok(Criterion::Time),
            "c" | "cost"   => Ok(Criterion::Cost),
            _ => Err(CoreError::UnknownCriterion(token.to_owned())),
        }
    }
}

// ── Priorities ────────────────────────────────────────────────────────────────

/// A validated permutation of the three criteria, most important first.
///
/// The only ways to obtain one are [`Priorities::new`] and `TryFrom`, both of
/// which reject short lists and duplicates, so code downstream of a
/// `Priorities` value never re-validates it.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "Vec<Criterion>", into = "Vec<Criterion>"))]
pub struct Priorities([Criterion; 3]);

impl Priorities {
    /// Validate an ordered triple.
    pub fn new(order: [Criterion; 3]) -> CoreResult<Self> {
        for (i, c) in order.iter().enumerate() {
            if order[..i].contains(c) {
                return Err(CoreError::DuplicateCriterion(*c));
            }
        }
        Ok(Self(order))
    }

    #[inline]
    pub fn as_slice(&self) -> &[Criterion] {
        &self.0
    }

    pub fn iter(&self) -> impl Iterator<Item = Criterion> + '_ {
        self.0.iter().copied()
    }

    /// The same ordering with the first two criteria exchanged.
    pub fn swap_leading(self) -> Self {
        let [a, b, c] = self.0;
        Self([b, a, c])
    }
}

impl Default for Priorities {
    fn default() -> Self {
        Self(Criterion::ALL)
    }
}

impl TryFrom<&[Criterion]> for Priorities {
    type Error = CoreError;

    fn try_from(list: &[Criterion]) -> CoreResult<Self> {
        let order: [Criterion; 3] = list
            .try_into()
            .map_err(|_| CoreError::PriorityCount(list.len()))?;
        Self::new(order)
    }
}

impl TryFrom<Vec<Criterion>> for Priorities {
    type Error = CoreError;

    fn try_from(list: Vec<Criterion>) -> CoreResult<Self> {
        Self::try_from(list.as_slice())
    }
}

impl From<Priorities> for Vec<Criterion> {
    fn from(p: Priorities) -> Vec<Criterion> {
        p.0.to_vec()
    }
}

/// Parses `"(Д, В, С)"`; parentheses are optional but must come in a pair.
impl FromStr for Priorities {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let unbalanced = || CoreError::UnbalancedParentheses(trimmed.to_owned());
        let inner = match trimmed.strip_prefix('(') {
            Some(rest) => rest.strip_suffix(')').ok_or_else(unbalanced)?,
            None if trimmed.ends_with(')') => return Err(unbalanced()),
            None => trimmed,
        };
        let list = inner
            .split(',')
            .filter(|t| !t.trim().is_empty())
            .map(str::parse)
            .collect::<CoreResult<Vec<Criterion>>>()?;
        Self::try_from(list)
    }
}

/// Renders as `(Д,В,С)`.
impl fmt::Display for Priorities {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let [a, b, c] = self.0;
        write!(f, "({},{},{})", a.symbol(), b.symbol(), c.symbol())
    }
}
