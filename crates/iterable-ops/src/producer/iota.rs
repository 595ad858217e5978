//! Arithmetic progressions.
//!
//! - `iota(t)`: `t, t + 1, t + 2, ...` (never ends)
//! - `iota_step(t, s)`: `t, t + s, t + 2s, ...` (never ends)
//! - `iota_range(b, e)`: `b, b + 1, ..., e - 1` (ends when `b` reaches `e`)

use std::ops::Add;

use crate::Iterable;

/// Multiplicative identity for the numeric types progressions run over.
pub trait One {
    fn one() -> Self;
}

macro_rules! impl_one {
    ($($t:ty => $v:expr),* $(,)?) => {
        $(
            impl One for $t {
                fn one() -> Self {
                    $v
                }
            }
        )*
    };
}

impl_one!(
    i8 => 1, i16 => 1, i32 => 1, i64 => 1, i128 => 1, isize => 1,
    u8 => 1, u16 => 1, u32 => 1, u64 => 1, u128 => 1, usize => 1,
    f32 => 1.0, f64 => 1.0,
);

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Iota<T> {
    t: T,
    step: T,
}

impl<T> Iota<T> {
    pub fn with_step(t: T, step: T) -> Self {
        Self { t, step }
    }
}

pub fn iota<T: One>(t: T) -> Iota<T> {
    Iota::with_step(t, T::one())
}

pub fn iota_step<T>(t: T, step: T) -> Iota<T> {
    Iota::with_step(t, step)
}

impl<T> Iterable for Iota<T>
where
    T: Clone + Add<Output = T>,
{
    type Item = T;

    fn has_current(&self) -> bool {
        true
    }

    fn current(&self) -> T {
        self.t.clone()
    }

    fn advance(&mut self) -> &mut Self {
        self.t = self.t.clone() + self.step.clone();
        self
    }
}

/// Half-open `[b, e)`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct IotaRange<T> {
    b: T,
    e: T,
}

impl<T> IotaRange<T> {
    pub fn new(b: T, e: T) -> Self {
        Self { b, e }
    }

    /// The same progression, fully advanced.
    pub fn end(&self) -> Self
    where
        T: Clone,
    {
        Self::new(self.e.clone(), self.e.clone())
    }
}

pub fn iota_range<T>(b: T, e: T) -> IotaRange<T> {
    IotaRange::new(b, e)
}

impl<T> Iterable for IotaRange<T>
where
    T: Clone + PartialOrd + One + Add<Output = T>,
{
    type Item = T;

    fn has_current(&self) -> bool {
        self.b < self.e
    }

    fn current(&self) -> T {
        self.b.clone()
    }

    fn advance(&mut self) -> &mut Self {
        if self.has_current() {
            self.b = self.b.clone() + T::one();
        }
        self
    }
}
