//! Plain generic functions for the standard operators.
//!
//! These coerce to `fn` pointers, which is how the operator sugar and the
//! default `delta` name their combining function: the resulting type stays
//! nameable, `Copy` and comparable.

use std::ops::{Add, BitAnd, BitOr, BitXor, Div, Mul, Neg, Not, Rem, Sub};

macro_rules! binary_functor {
    ($($name:ident => $tr:ident, $op:tt;)*) => {
        $(
            #[inline]
            pub fn $name<A: $tr<B>, B>(a: A, b: B) -> A::Output {
                a $op b
            }
        )*
    };
}

binary_functor! {
    add => Add, +;
    sub => Sub, -;
    mul => Mul, *;
    div => Div, /;
    rem => Rem, %;
    bitand => BitAnd, &;
    bitor => BitOr, |;
    bitxor => BitXor, ^;
}

#[inline]
pub fn neg<A: Neg>(a: A) -> A::Output {
    -a
}

#[inline]
pub fn not<A: Not>(a: A) -> A::Output {
    !a
}

macro_rules! comparison_functor {
    ($($name:ident => $op:tt;)*) => {
        $(
            #[inline]
            pub fn $name<A: PartialOrd<B>, B>(a: A, b: B) -> bool {
                a $op b
            }
        )*
    };
}

comparison_functor! {
    lt => <;
    le => <=;
    gt => >;
    ge => >=;
}

#[inline]
pub fn eq<A: PartialEq<B>, B>(a: A, b: B) -> bool {
    a == b
}

#[inline]
pub fn ne<A: PartialEq<B>, B>(a: A, b: B) -> bool {
    a != b
}

#[inline]
pub fn and(a: bool, b: bool) -> bool {
    a && b
}

#[inline]
pub fn or(a: bool, b: bool) -> bool {
    a || b
}

/// `max(cur - prev, 0)`.
pub fn uptick<T>(cur: T, prev: T) -> T
where
    T: Sub<Output = T> + PartialOrd + Default,
{
    let d = cur - prev;
    let zero = T::default();
    if d > zero {
        d
    } else {
        zero
    }
}

/// `min(cur - prev, 0)`.
pub fn downtick<T>(cur: T, prev: T) -> T
where
    T: Sub<Output = T> + PartialOrd + Default,
{
    let d = cur - prev;
    let zero = T::default();
    if d < zero {
        d
    } else {
        zero
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_arithmetic() {
        assert_eq!(add(2, 3), 5);
        assert_eq!(sub(2, 3), -1);
        assert_eq!(mul(2.5, 2.0), 5.0);
        assert_eq!(div(7, 2), 3);
        assert_eq!(rem(7, 2), 1);
        assert_eq!(neg(4), -4);
    }

    #[test]
    fn test_bitwise_and_logic() {
        assert_eq!(bitand(0b1100, 0b1010), 0b1000);
        assert_eq!(bitor(0b1100, 0b1010), 0b1110);
        assert_eq!(bitxor(0b1100, 0b1010), 0b0110);
        assert!(not(false));
        assert!(and(true, true));
        assert!(!or(false, false));
    }

    #[test]
    fn test_comparisons() {
        assert!(lt(1, 2));
        assert!(le(2, 2));
        assert!(gt(3.0, 2.0));
        assert!(ge(2, 2));
        assert!(eq("a", "a"));
        assert!(ne(1, 2));
    }

    #[test]
    fn test_ticks_split_the_difference() {
        for (cur, prev) in [(5, 2), (2, 5), (3, 3)] {
            assert_eq!(uptick(cur, prev) + downtick(cur, prev), cur - prev);
        }
        assert_eq!(uptick(5, 2), 3);
        assert_eq!(downtick(5, 2), 0);
        assert_eq!(uptick(2, 5), 0);
        assert_eq!(downtick(2, 5), -3);
    }
}
