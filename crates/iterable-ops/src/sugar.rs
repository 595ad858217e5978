//! Operator overloads on sequences.
//!
//! `a + b` is `binop(add, a, b)` and `-a` is `apply(neg, a)` for any two
//! sequences whose items support the operator. Both operands must be
//! sequences; lift a scalar with `constant(x)`.
//!
//! Comparisons and boolean logic cannot be overloaded to return a sequence
//! (`PartialOrd::lt` must return `bool`), so they live on
//! [`IterableExt`](crate::ext::IterableExt) as `lt`, `below`, `and`, ...
//!
//! The impls are stamped out per type, because a blanket
//! `impl<S: Iterable> Add for S` is not allowed. Downstream crates call the
//! macro for their own sequence types:
//!
//! ```ignore
//! iterable_ops::impl_sequence_ops! {
//!     [T] Power<T>;
//! }
//! ```

/// Implement `Add`, `Sub`, `Mul`, `Div`, `Rem`, `BitAnd`, `BitOr`, `BitXor`,
/// `Neg` and `Not` for sequence types. Each entry is `[generics] Type;`,
/// with `[]` for a non-generic type, which gets the binary operators only.
#[macro_export]
macro_rules! impl_sequence_ops {
    (@binary [] $ty:ty, $tr:ident, $f:ident) => {
        $crate::impl_sequence_ops!(@binary_impl [__J] $ty, $tr, $f);
    };

    (@binary [$($g:tt)+] $ty:ty, $tr:ident, $f:ident) => {
        $crate::impl_sequence_ops!(@binary_impl [$($g)+, __J] $ty, $tr, $f);
    };

    (@binary_impl [$($g:tt)*] $ty:ty, $tr:ident, $f:ident) => {
        impl<$($g)*> ::core::ops::$tr<__J> for $ty
        where
            Self: $crate::Iterable,
            __J: $crate::Iterable,
            <Self as $crate::Iterable>::Item:
                ::core::ops::$tr<<__J as $crate::Iterable>::Item>,
        {
            type Output = $crate::binop::Binop<
                fn(
                    <Self as $crate::Iterable>::Item,
                    <__J as $crate::Iterable>::Item,
                ) -> <<Self as $crate::Iterable>::Item as ::core::ops::$tr<
                    <__J as $crate::Iterable>::Item,
                >>::Output,
                Self,
                __J,
            >;

            fn $f(self, rhs: __J) -> Self::Output {
                let op: fn(
                    <Self as $crate::Iterable>::Item,
                    <__J as $crate::Iterable>::Item,
                ) -> <<Self as $crate::Iterable>::Item as ::core::ops::$tr<
                    <__J as $crate::Iterable>::Item,
                >>::Output = $crate::functor::$f;
                $crate::binop::Binop::new(op, self, rhs)
            }
        }
    };

    (@unary [$($g:tt)*] $ty:ty, $tr:ident, $f:ident) => {
        impl<$($g)*> ::core::ops::$tr for $ty
        where
            Self: $crate::Iterable,
            <Self as $crate::Iterable>::Item: ::core::ops::$tr,
        {
            type Output = $crate::apply::Apply<
                fn(
                    <Self as $crate::Iterable>::Item,
                ) -> <<Self as $crate::Iterable>::Item as ::core::ops::$tr>::Output,
                Self,
            >;

            fn $f(self) -> Self::Output {
                let op: fn(
                    <Self as $crate::Iterable>::Item,
                ) -> <<Self as $crate::Iterable>::Item as ::core::ops::$tr>::Output =
                    $crate::functor::$f;
                $crate::apply::Apply::new(op, self)
            }
        }
    };

    (@binaries [$($g:tt)*] $ty:ty) => {
        $crate::impl_sequence_ops!(@binary [$($g)*] $ty, Add, add);
        $crate::impl_sequence_ops!(@binary [$($g)*] $ty, Sub, sub);
        $crate::impl_sequence_ops!(@binary [$($g)*] $ty, Mul, mul);
        $crate::impl_sequence_ops!(@binary [$($g)*] $ty, Div, div);
        $crate::impl_sequence_ops!(@binary [$($g)*] $ty, Rem, rem);
        $crate::impl_sequence_ops!(@binary [$($g)*] $ty, BitAnd, bitand);
        $crate::impl_sequence_ops!(@binary [$($g)*] $ty, BitOr, bitor);
        $crate::impl_sequence_ops!(@binary [$($g)*] $ty, BitXor, bitxor);
    };

    // A non-generic type has a fixed item type, so a unary bound such as
    // `u64: Neg` would be checked eagerly and could fail. Binary only.
    (@entry [] $ty:ty) => {
        $crate::impl_sequence_ops!(@binaries [] $ty);
    };

    (@entry [$($g:tt)+] $ty:ty) => {
        $crate::impl_sequence_ops!(@binaries [$($g)+] $ty);
        $crate::impl_sequence_ops!(@unary [$($g)+] $ty, Neg, neg);
        $crate::impl_sequence_ops!(@unary [$($g)+] $ty, Not, not);
    };

    ($([$($g:tt)*] $ty:ty;)*) => {
        $(
            $crate::impl_sequence_ops!(@entry [$($g)*] $ty);
        )*
    };
}

use crate::apply::Apply;
use crate::binop::Binop;
use crate::concatenate::Concatenate;
use crate::cycle::Cycle;
use crate::delta::Delta;
use crate::filter::{Filter, Mask};
use crate::fold::Fold;
use crate::merge::Merge;
use crate::producer::{
    Call, Constant, Empty, Interval, Iota, IotaRange, NullTerminated, Once, Pointer,
};
use crate::take::Take;
use crate::until::Until;

impl_sequence_ops! {
    [T] Constant<T>;
    [T] Iota<T>;
    [T] IotaRange<T>;
    [T] Once<T>;
    [T] Empty<T>;
    ['a, T] Pointer<'a, T>;
    ['a, T] NullTerminated<'a, T>;
    [F] Call<F>;
    [I: Iterator] Interval<I>;
    [F, S] Apply<F, S>;
    [F, S0, S1] Binop<F, S0, S1>;
    [S0, S1] Concatenate<S0, S1>;
    [S] Cycle<S>;
    [S, D, T] Delta<S, D, T>;
    [P, S] Filter<P, S>;
    [S, M] Mask<S, M>;
    [F, S, T] Fold<F, S, T>;
    [S0, S1] Merge<S0, S1>;
    [S] Take<S>;
    [P, S] Until<P, S>;
}
