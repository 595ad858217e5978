//! Property tests for the combinator laws.

use iterable::prelude::*;
use proptest::prelude::*;

fn small_vec() -> impl Strategy<Value = Vec<i32>> {
    prop::collection::vec(-50i32..50, 0..40)
}

fn sorted_vec() -> impl Strategy<Value = Vec<i32>> {
    small_vec().prop_map(|mut v| {
        v.sort();
        v
    })
}

fn drain<S: Iterable>(s: S) -> Vec<S::Item> {
    s.iter().collect()
}

proptest! {
    /// length(s, length(t)) == length(s) + length(t)
    #[test]
    fn prop_length_additive(a in small_vec(), b in small_vec()) {
        let nested = length(array(&a), length(array(&b), 0));
        prop_assert_eq!(nested, count(array(&a)) + count(array(&b)));
        prop_assert_eq!(count(array(&a)), a.len());
    }

    /// take(n, s) has min(n, len(s)) elements, the prefix of s
    #[test]
    fn prop_take_bounded(a in small_vec(), n in 0usize..60) {
        let t = drain(take(n, array(&a)));
        prop_assert_eq!(t.len(), n.min(a.len()));
        prop_assert_eq!(&t[..], &a[..t.len()]);
    }

    /// empty is an identity for concatenation on both sides
    #[test]
    fn prop_concatenate_identity(a in small_vec()) {
        prop_assert!(equal(concatenate(array(&a), empty()), array(&a)));
        prop_assert!(equal(concatenate(empty(), array(&a)), array(&a)));
    }

    /// concatenation length is additive and order-preserving
    #[test]
    fn prop_concatenate_length(a in small_vec(), b in small_vec()) {
        let c = drain(concatenate(array(&a), array(&b)));
        prop_assert_eq!(c.len(), a.len() + b.len());
        let mut expected = a.clone();
        expected.extend_from_slice(&b);
        prop_assert_eq!(c, expected);
    }

    /// merge of sorted inputs is sorted and a multiset union
    #[test]
    fn prop_merge_sorted_union(a in sorted_vec(), b in sorted_vec()) {
        let m = drain(merge(array(&a), array(&b)));
        prop_assert!(m.windows(2).all(|w| w[0] <= w[1]));

        let mut expected = a.clone();
        expected.extend_from_slice(&b);
        expected.sort();
        prop_assert_eq!(m, expected);
    }

    /// merge emits each input element exactly once even when unsorted
    #[test]
    fn prop_merge_unsorted_is_permutation(a in small_vec(), b in small_vec()) {
        let mut m = drain(merge(array(&a), array(&b)));
        let mut expected = a.clone();
        expected.extend_from_slice(&b);
        m.sort();
        expected.sort();
        prop_assert_eq!(m, expected);
    }

    /// filter yields exactly the matching elements, in order
    #[test]
    fn prop_filter_correct(a in small_vec(), k in 1i32..7) {
        let pred = |x: &i32| x.rem_euclid(k) == 0;
        let f = drain(filter(pred, array(&a)));
        prop_assert!(f.iter().all(pred));
        let expected: Vec<i32> = a.iter().copied().filter(pred).collect();
        prop_assert_eq!(f, expected);
    }

    /// mask agrees with filter when the mask is the predicate applied
    #[test]
    fn prop_mask_matches_filter(a in small_vec()) {
        let flags: Vec<bool> = a.iter().map(|x| *x > 0).collect();
        let masked = drain(mask(array(&a), array(&flags)));
        let filtered = drain(filter(|x: &i32| *x > 0, array(&a)));
        prop_assert_eq!(masked, filtered);
    }

    /// until yields the prefix before the first match
    #[test]
    fn prop_until_truncates(a in small_vec(), t in -50i32..50) {
        let u = drain(until(|x: &i32| *x > t, array(&a)));
        let expected: Vec<i32> = a.iter().copied().take_while(|x| *x <= t).collect();
        prop_assert_eq!(u, expected);
    }

    /// last fold value equals the eager left fold; n + 1 values
    #[test]
    fn prop_fold_matches_eager(a in small_vec(), seed in -100i64..100) {
        let fs = drain(fold(|t: i64, x: i32| t * 2 - i64::from(x), array(&a), seed));
        prop_assert_eq!(fs.len(), a.len() + 1);
        let eager = a.iter().fold(seed, |t, x| t * 2 - i64::from(*x));
        prop_assert_eq!(fs.last().copied(), Some(eager));
        prop_assert_eq!(
            sum_from(array(&a).apply(i64::from), seed),
            a.iter().map(|x| i64::from(*x)).sum::<i64>() + seed
        );
    }

    /// uptick + downtick == delta, element-wise
    #[test]
    fn prop_ticks_partition_delta(a in small_vec()) {
        let split = uptick(array(&a)) + downtick(array(&a));
        prop_assert!(equal(split, delta(array(&a))));
        prop_assert_eq!(count(delta(array(&a))), a.len().saturating_sub(1));
    }

    /// compare agrees with slice ordering
    #[test]
    fn prop_compare_lexicographic(a in small_vec(), b in small_vec()) {
        prop_assert_eq!(compare(array(&a), array(&b)), a.cmp(&b));
        prop_assert_eq!(equal(array(&a), array(&b)), a == b);
    }

    /// drop(s, n) skips min(n, len) elements
    #[test]
    fn prop_drop_skips(a in small_vec(), n in 0usize..60) {
        let rest = drain(drop(array(&a), n));
        prop_assert_eq!(&rest[..], &a[n.min(a.len())..]);
    }

    /// advancing an exhausted sequence changes nothing
    #[test]
    fn prop_advance_past_end_is_noop(a in small_vec()) {
        let mut e = end(filter(|x: &i32| *x != 0, array(&a)));
        prop_assert!(!e.has_current());
        e.advance().advance();
        prop_assert!(!e.has_current());
    }
}
