// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Coordinate ordering used by every axis comparison in the tree.

use core::cmp::Ordering;
use core::fmt::{self, Debug, Display};

/// Strict total order over a coordinate type.
///
/// The tree never compares coordinates with relational operators directly;
/// every partitioning decision goes through [`Coordinate::is_less_than`], so any
/// type with a sensible order can be stored.
///
/// Equality (used to decide whether two points are the same point) comes from
/// `PartialEq` and must agree with the order: `a == b` implies neither
/// `a.is_less_than(&b)` nor `b.is_less_than(&a)`.
///
/// Types whose order is only partial mark the values outside it through
/// [`Coordinate::is_ordered`]; the tree refuses points holding such values.
pub trait Coordinate: Clone + PartialEq + Debug {
    /// Whether `self` sorts strictly before `other`.
    fn is_less_than(&self, other: &Self) -> bool;

    /// Whether `self` takes part in the order. `false` only for float NaN.
    #[inline]
    fn is_ordered(&self) -> bool {
        true
    }
}

macro_rules! impl_coordinate_ord {
    ($($t:ty),* $(,)?) => {
        $(
            impl Coordinate for $t {
                #[inline]
                fn is_less_than(&self, other: &Self) -> bool {
                    self < other
                }
            }
        )*
    };
}

impl_coordinate_ord!(
    i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize
);

// NaN is unordered: it never sorts before anything and nothing sorts before it.
// Trees reject it at the boundary, so stored floats are totally ordered.
macro_rules! impl_coordinate_float {
    ($($t:ty),* $(,)?) => {
        $(
            impl Coordinate for $t {
                #[inline]
                fn is_less_than(&self, other: &Self) -> bool {
                    lt(self, other)
                }

                #[inline]
                fn is_ordered(&self) -> bool {
                    !self.is_nan()
                }
            }
        )*
    };
}

impl_coordinate_float!(f32, f64);

#[inline]
fn lt<T: PartialOrd>(a: &T, b: &T) -> bool {
    a.partial_cmp(b)
        .map(|o| o == Ordering::Less)
        .unwrap_or(false)
}

/// A mixed numeric coordinate: either an integer or a float.
///
/// Same-kind pairs use the integer or float order. Mixed pairs are compared
/// exactly, without rounding the integer through `f64`, so `Int(i64::MAX)` and
/// `Float(9.223372036854775807e18)` still order correctly.
#[derive(Copy, Clone, Debug)]
pub enum Number {
    /// A signed integer coordinate.
    Int(i64),
    /// A floating-point coordinate.
    Float(f64),
}

// 2^63 as f64; every float at or above this exceeds every i64.
const I64_BOUND: f64 = 9_223_372_036_854_775_808.0;

fn int_lt_float(i: i64, f: f64) -> bool {
    if f.is_nan() || f < -I64_BOUND {
        return false;
    }
    if f >= I64_BOUND {
        return true;
    }
    #[allow(
        clippy::cast_possible_truncation,
        reason = "f is integral after ceil and within i64 range, so the cast is exact."
    )]
    let ceil = f.ceil() as i128;
    i128::from(i) < ceil
}

fn float_lt_int(f: f64, i: i64) -> bool {
    if f.is_nan() || f >= I64_BOUND {
        return false;
    }
    if f < -I64_BOUND {
        return true;
    }
    #[allow(
        clippy::cast_possible_truncation,
        reason = "f is integral after floor and within i64 range, so the cast is exact."
    )]
    let floor = f.floor() as i128;
    floor < i128::from(i)
}

fn int_eq_float(i: i64, f: f64) -> bool {
    !int_lt_float(i, f) && !float_lt_int(f, i) && !f.is_nan()
}

impl Coordinate for Number {
    fn is_less_than(&self, other: &Self) -> bool {
        match (*self, *other) {
            (Self::Int(a), Self::Int(b)) => a.is_less_than(&b),
            (Self::Float(a), Self::Float(b)) => a.is_less_than(&b),
            (Self::Int(a), Self::Float(b)) => int_lt_float(a, b),
            (Self::Float(a), Self::Int(b)) => float_lt_int(a, b),
        }
    }

    fn is_ordered(&self) -> bool {
        match self {
            Self::Int(_) => true,
            Self::Float(v) => !v.is_nan(),
        }
    }
}

impl PartialEq for Number {
    fn eq(&self, other: &Self) -> bool {
        match (*self, *other) {
            (Self::Int(a), Self::Int(b)) => a == b,
            (Self::Float(a), Self::Float(b)) => a == b,
            (Self::Int(a), Self::Float(b)) | (Self::Float(b), Self::Int(a)) => int_eq_float(a, b),
        }
    }
}

impl From<i64> for Number {
    fn from(v: i64) -> Self {
        Self::Int(v)
    }
}

impl From<i32> for Number {
    fn from(v: i32) -> Self {
        Self::Int(v.into())
    }
}

impl From<f64> for Number {
    fn from(v: f64) -> Self {
        Self::Float(v)
    }
}

impl From<f32> for Number {
    fn from(v: f32) -> Self {
        Self::Float(v.into())
    }
}

impl Display for Number {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Int(v) => Display::fmt(v, f),
            Self::Float(v) => Display::fmt(v, f),
        }
    }
}
