//! Slice-backed cursors.
//!
//! `Pointer` is the unbounded primitive: it never reports exhaustion, and
//! reading past the end of the slice panics. Pair it with a bound, as
//! `array` does, before handing it out.

use std::fmt;

use crate::take::Take;
use crate::Iterable;

pub struct Pointer<'a, T> {
    slice: &'a [T],
    pos: usize,
}

pub fn pointer<T: Clone>(slice: &[T]) -> Pointer<'_, T> {
    Pointer { slice, pos: 0 }
}

/// All elements of `slice`.
pub fn array<T: Clone>(slice: &[T]) -> Take<Pointer<'_, T>> {
    Take::new(slice.len(), pointer(slice))
}

impl<T> Clone for Pointer<'_, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for Pointer<'_, T> {}

/// Same buffer, same offset.
impl<T> PartialEq for Pointer<'_, T> {
    fn eq(&self, other: &Self) -> bool {
        std::ptr::eq(self.slice.as_ptr(), other.slice.as_ptr()) && self.pos == other.pos
    }
}

impl<T> fmt::Debug for Pointer<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Pointer")
            .field("ptr", &self.slice.as_ptr())
            .field("pos", &self.pos)
            .finish()
    }
}

impl<T: Clone> Iterable for Pointer<'_, T> {
    type Item = T;

    fn has_current(&self) -> bool {
        true
    }

    fn current(&self) -> T {
        self.slice[self.pos].clone()
    }

    fn advance(&mut self) -> &mut Self {
        self.pos += 1;
        self
    }
}

/// Ends at the first `T::default()` (`0`, `'\0'`, ...) or at the slice end.
pub struct NullTerminated<'a, T> {
    slice: &'a [T],
    pos: usize,
}

pub fn null_terminated<T>(slice: &[T]) -> NullTerminated<'_, T>
where
    T: Clone + Default + PartialEq,
{
    NullTerminated { slice, pos: 0 }
}

impl<T> Clone for NullTerminated<'_, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for NullTerminated<'_, T> {}

impl<T> PartialEq for NullTerminated<'_, T> {
    fn eq(&self, other: &Self) -> bool {
        std::ptr::eq(self.slice.as_ptr(), other.slice.as_ptr()) && self.pos == other.pos
    }
}

impl<T> fmt::Debug for NullTerminated<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NullTerminated")
            .field("ptr", &self.slice.as_ptr())
            .field("pos", &self.pos)
            .finish()
    }
}

impl<T> Iterable for NullTerminated<'_, T>
where
    T: Clone + Default + PartialEq,
{
    type Item = T;

    fn has_current(&self) -> bool {
        self.slice
            .get(self.pos)
            .map(|t| *t != T::default())
            .unwrap_or(false)
    }

    fn current(&self) -> T {
        self.slice[self.pos].clone()
    }

    fn advance(&mut self) -> &mut Self {
        if self.has_current() {
            self.pos += 1;
        }
        self
    }
}
