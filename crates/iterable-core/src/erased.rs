//! Type-erased sequences for runtime-polymorphic API boundaries.
//!
//! Composition stays static everywhere else; `Erased` is the opt-in for
//! places that need a single nameable type (heterogeneous collections,
//! trait-object style returns). It keeps value semantics: cloning clones
//! the boxed traversal state.

use std::fmt;

use crate::iterable::Iterable;

/// Object-safe mirror of `Iterable` (which returns `&mut Self` and so cannot
/// be a trait object itself).
trait DynIterable<'a, T> {
    fn dyn_has_current(&self) -> bool;
    fn dyn_current(&self) -> T;
    fn dyn_advance(&mut self);
    fn dyn_clone(&self) -> Box<dyn DynIterable<'a, T> + 'a>;
}

impl<'a, S> DynIterable<'a, S::Item> for S
where
    S: Iterable + Clone + 'a,
{
    fn dyn_has_current(&self) -> bool {
        self.has_current()
    }

    fn dyn_current(&self) -> S::Item {
        self.current()
    }

    fn dyn_advance(&mut self) {
        self.advance();
    }

    fn dyn_clone(&self) -> Box<dyn DynIterable<'a, S::Item> + 'a> {
        Box::new(self.clone())
    }
}

/// A boxed sequence of `T`.
pub struct Erased<'a, T> {
    inner: Box<dyn DynIterable<'a, T> + 'a>,
}

impl<'a, T> Erased<'a, T> {
    pub fn new<S>(seq: S) -> Self
    where
        S: Iterable<Item = T> + Clone + 'a,
    {
        Self {
            inner: Box::new(seq),
        }
    }
}

impl<T> Clone for Erased<'_, T> {
    fn clone(&self) -> Self {
        Self {
            inner: self.inner.dyn_clone(),
        }
    }
}

impl<T> fmt::Debug for Erased<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Erased")
            .field("has_current", &self.inner.dyn_has_current())
            .finish()
    }
}

impl<T> Iterable for Erased<'_, T> {
    type Item = T;

    fn has_current(&self) -> bool {
        self.inner.dyn_has_current()
    }

    fn current(&self) -> T {
        self.inner.dyn_current()
    }

    fn advance(&mut self) -> &mut Self {
        self.inner.dyn_advance();
        self
    }
}
