//! Ordering rules
//!
//! A queue decides priority through a single injected [`Comparator`].
//! `compare(a, b) == Ordering::Less` means `a` is dequeued before `b`.
//!
//! Any closure `Fn(&T, &T) -> Ordering` is a comparator. The named rules
//! below cover the common cases:
//!
//! | Rule | Dequeues first |
//! |------|----------------|
//! | [`NaturalOrder`] | smallest (`Ord`) |
//! | [`ReverseOrder`] | largest (`Ord`) |
//! | [`TotalOrder`] | smallest float (`total_cmp`) |
//! | [`OrderingRule`] | chosen at runtime, e.g. from a string |
//! | [`Signed`] | per the sign of an integer-valued rule |
//! | [`ByKey`] | smallest extracted key |
//!
//! # Example
//!
//! ```rust
//! use comparator_heap::compare::{Comparator, OrderingRule, Signed};
//! use std::cmp::Ordering;
//!
//! let max_first = Signed(|a: &i64, b: &i64| b - a);
//! assert_eq!(max_first.compare(&8, &5), Ordering::Less);
//!
//! let rule: OrderingRule = "desc".parse().unwrap();
//! assert_eq!(rule, OrderingRule::Descending);
//! assert!("42".parse::<OrderingRule>().is_err());
//! ```

use crate::traits::QueueError;
use std::cmp::Ordering;
use std::fmt;
use std::marker::PhantomData;
use std::str::FromStr;

/// A comparison that defines relative priority between two elements
///
/// Implementations should behave like a total order; the queue makes no
/// ordering guarantees for rules that do not.
pub trait Comparator<T> {
    /// Compares two elements; `Less` means `a` has strictly higher priority
    fn compare(&self, a: &T, b: &T) -> Ordering;
}

impl<T, F> Comparator<T> for F
where
    F: Fn(&T, &T) -> Ordering,
{
    #[inline]
    fn compare(&self, a: &T, b: &T) -> Ordering {
        self(a, b)
    }
}

/// Ascending order: the smallest element has the highest priority
///
/// Requires `Ord`, so it does not apply to `f32`/`f64`; use [`TotalOrder`]
/// for floating-point elements.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct NaturalOrder;

impl<T: Ord> Comparator<T> for NaturalOrder {
    #[inline]
    fn compare(&self, a: &T, b: &T) -> Ordering {
        a.cmp(b)
    }
}

/// Descending order: the largest element has the highest priority
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct ReverseOrder;

impl<T: Ord> Comparator<T> for ReverseOrder {
    #[inline]
    fn compare(&self, a: &T, b: &T) -> Ordering {
        b.cmp(a)
    }
}

/// Ascending IEEE 754 total order for floating-point elements
///
/// Follows `f64::total_cmp`: `-0.0` sorts before `+0.0` and NaNs sort to
/// the ends by sign, so every value has a well-defined position.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct TotalOrder;

impl Comparator<f64> for TotalOrder {
    #[inline]
    fn compare(&self, a: &f64, b: &f64) -> Ordering {
        a.total_cmp(b)
    }
}

impl Comparator<f32> for TotalOrder {
    #[inline]
    fn compare(&self, a: &f32, b: &f32) -> Ordering {
        a.total_cmp(b)
    }
}

/// Adapter for rules that return a signed integer
///
/// Negative maps to `Less`, zero to `Equal`, positive to `Greater`, so
/// `Signed(|a, b| a - b)` is ascending and `Signed(|a, b| b - a)` is
/// descending.
#[derive(Debug, Clone, Copy)]
pub struct Signed<F>(pub F);

impl<T, F> Comparator<T> for Signed<F>
where
    F: Fn(&T, &T) -> i64,
{
    #[inline]
    fn compare(&self, a: &T, b: &T) -> Ordering {
        (self.0)(a, b).cmp(&0)
    }
}

/// Ascending order of a key extracted from each element
///
/// ```rust
/// use comparator_heap::compare::{ByKey, Comparator};
/// use std::cmp::Ordering;
///
/// let by_len = ByKey::new(|s: &&str| s.len());
/// assert_eq!(by_len.compare(&"ab", &"abc"), Ordering::Less);
/// ```
#[derive(Debug, Clone, Copy)]
pub struct ByKey<F, K> {
    key_fn: F,
    _key: PhantomData<fn() -> K>,
}

impl<F, K> ByKey<F, K> {
    /// Wraps a key extraction function
    pub fn new<T>(key_fn: F) -> Self
    where
        F: Fn(&T) -> K,
    {
        Self {
            key_fn,
            _key: PhantomData,
        }
    }
}

impl<T, K, F> Comparator<T> for ByKey<F, K>
where
    F: Fn(&T) -> K,
    K: Ord,
{
    #[inline]
    fn compare(&self, a: &T, b: &T) -> Ordering {
        (self.key_fn)(a).cmp(&(self.key_fn)(b))
    }
}

/// A named ordering rule, selectable at runtime
///
/// Parsing accepts `ascending`, `asc`, `min`, `descending`, `desc` and
/// `max`, ignoring ASCII case and surrounding whitespace.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OrderingRule {
    /// Smallest first
    #[default]
    Ascending,
    /// Largest first
    Descending,
}

impl<T: Ord> Comparator<T> for OrderingRule {
    #[inline]
    fn compare(&self, a: &T, b: &T) -> Ordering {
        match self {
            OrderingRule::Ascending => a.cmp(b),
            OrderingRule::Descending => b.cmp(a),
        }
    }
}

impl FromStr for OrderingRule {
    type Err = QueueError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let name = s.trim();
        if ["ascending", "asc", "min"]
            .iter()
            .any(|n| name.eq_ignore_ascii_case(n))
        {
            Ok(OrderingRule::Ascending)
        } else if ["descending", "desc", "max"]
            .iter()
            .any(|n| name.eq_ignore_ascii_case(n))
        {
            Ok(OrderingRule::Descending)
        } else {
            log::debug!("rejecting ordering rule {:?}", s);
            Err(QueueError::InvalidArgument(s.to_string()))
        }
    }
}

impl fmt::Display for OrderingRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OrderingRule::Ascending => f.write_str("ascending"),
            OrderingRule::Descending => f.write_str("descending"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_natural_and_reverse() {
        assert_eq!(NaturalOrder.compare(&1, &2), Ordering::Less);
        assert_eq!(ReverseOrder.compare(&1, &2), Ordering::Greater);
        assert_eq!(NaturalOrder.compare(&"b", &"b"), Ordering::Equal);
    }

    #[test]
    fn test_closure_is_comparator() {
        let by_len = |a: &&str, b: &&str| a.len().cmp(&b.len());
        assert_eq!(by_len.compare(&"aaa", &"b"), Ordering::Greater);
    }

    #[test]
    fn test_total_order_floats() {
        assert_eq!(TotalOrder.compare(&-1.5f64, &0.25), Ordering::Less);
        assert_eq!(TotalOrder.compare(&-0.0f64, &0.0), Ordering::Less);
        assert_eq!(TotalOrder.compare(&f64::NAN, &f64::INFINITY), Ordering::Greater);
        assert_eq!(TotalOrder.compare(&2.0f32, &2.0), Ordering::Equal);
    }

    #[test]
    fn test_signed_maps_sign() {
        let asc = Signed(|a: &i64, b: &i64| a - b);
        assert_eq!(asc.compare(&-5, &3), Ordering::Less);
        assert_eq!(asc.compare(&3, &3), Ordering::Equal);
        assert_eq!(asc.compare(&9, &3), Ordering::Greater);
    }

    #[test]
    fn test_by_key() {
        let by_second = ByKey::new(|pair: &(u8, u8)| pair.1);
        assert_eq!(by_second.compare(&(9, 1), &(0, 2)), Ordering::Less);
    }

    #[test]
    fn test_parse_rule_names() {
        for name in ["ascending", "ASC", " min "] {
            assert_eq!(name.parse::<OrderingRule>(), Ok(OrderingRule::Ascending));
        }
        for name in ["Descending", "desc", "MAX"] {
            assert_eq!(name.parse::<OrderingRule>(), Ok(OrderingRule::Descending));
        }
    }

    #[test]
    fn test_parse_rejects_non_rules() {
        for name in ["42", "", "ascend", "a - b"] {
            assert_eq!(
                name.parse::<OrderingRule>(),
                Err(QueueError::InvalidArgument(name.to_string()))
            );
        }
    }

    #[test]
    fn test_display_round_trips() {
        for rule in [OrderingRule::Ascending, OrderingRule::Descending] {
            assert_eq!(rule.to_string().parse::<OrderingRule>(), Ok(rule));
        }
    }
}
