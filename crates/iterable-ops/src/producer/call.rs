//! `f(), f(), f(), ...`

use crate::Iterable;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Call<F> {
    f: F,
}

pub fn call<F, T>(f: F) -> Call<F>
where
    F: Fn() -> T,
{
    Call { f }
}

impl<F, T> Iterable for Call<F>
where
    F: Fn() -> T,
{
    type Item = T;

    fn has_current(&self) -> bool {
        true
    }

    fn current(&self) -> T {
        (self.f)()
    }

    fn advance(&mut self) -> &mut Self {
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_call() {
        let mut c = call(|| 7);
        assert_eq!(c.current(), 7);
        c.advance();
        assert!(c.has_current());
        assert_eq!(c.current(), 7);
    }

    #[test]
    fn test_call_with_fn_pointer_compares() {
        fn two() -> u8 {
            2
        }
        let f: fn() -> u8 = two;
        assert_eq!(call(f), call(f));
    }
}
