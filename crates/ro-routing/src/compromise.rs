//! Compromise selection among the single-criterion optima.
//!
//! The compromise is the lexicographic minimum of the candidates under the
//! caller's priority ordering: compare by the first criterion's total, fall
//! through to the second on a tie, then the third.
//!
//! # Limitation
//!
//! Only the given candidates are ranked (in practice the length-, time- and
//! cost-optimal routes).  A route that is good on all three criteria but
//! optimal on none is never considered; this is a ranking, not a
//! multi-objective search.

use std::cmp::Ordering;

use ro_core::Priorities;

use crate::Route;

/// Compare `a` and `b` key by key, in the order `keys` yields them; the
/// first key on which they differ decides.
///
/// ```
/// use std::cmp::Ordering;
/// use ro_routing::compare_by_keys;
///
/// let a = (1, 9);
/// let b = (1, 3);
/// let ord = compare_by_keys(&a, &b, [0usize, 1], |t, k| if k == 0 { t.0 } else { t.1 });
/// assert_eq!(ord, Ordering::Greater);
/// ```
pub fn compare_by_keys<T, I, K, F>(a: &T, b: &T, keys: I, key: F) -> Ordering
where
    T: ?Sized,
    I: IntoIterator,
    I::Item: Copy,
    K: Ord,
    F: Fn(&T, I::Item) -> K,
{
    keys.into_iter()
        .map(|k| key(a, k).cmp(&key(b, k)))
        .find(|o| o.is_ne())
        .unwrap_or(Ordering::Equal)
}

/// Pick the compromise route.
///
/// Not-found candidates are discarded; if none remain the result is
/// [`Route::not_found`].  On a full tie the earliest candidate wins.
pub fn select_compromise<'r, I>(candidates: I, priorities: &Priorities) -> Route
where
    I: IntoIterator<Item = &'r Route>,
{
    candidates
        .into_iter()
        .filter(|r| r.is_found())
        .min_by(|a, b| compare_by_keys(*a, *b, priorities.iter(), Route::total))
        .cloned()
        .unwrap_or_default()
}
