//! Report ordering for the account ledger
//!
//! The ledger is small and usually close to sorted between reports, so it is ordered
//! in place with an insertion sort: one forward pass, and whenever an adjacent pair is
//! out of order the smaller element is swapped back toward the front until it rests.
//! Equal elements are never swapped, which keeps the sort stable.

use crate::account::Account;
use std::cmp::Ordering;

/// Account type label first (lexicographic), then holder
pub fn compare_accounts(a: &Account, b: &Account) -> Ordering {
    a.type_label()
        .cmp(b.type_label())
        .then_with(|| a.holder().compare(b.holder()))
}

/// Stable in-place insertion sort by adjacent swaps
pub fn insertion_sort_by<T, F>(items: &mut [T], mut compare: F)
where
    F: FnMut(&T, &T) -> Ordering,
{
    for i in 1..items.len() {
        if compare(&items[i - 1], &items[i]) == Ordering::Greater {
            items.swap(i - 1, i);
            settle_backward(items, i - 1, &mut compare);
        }
    }
}

/// Move the element at `pos` toward the front while it sorts before its neighbor
fn settle_backward<T, F>(items: &mut [T], mut pos: usize, compare: &mut F)
where
    F: FnMut(&T, &T) -> Ordering,
{
    while pos > 0 && compare(&items[pos], &items[pos - 1]) == Ordering::Less {
        items.swap(pos, pos - 1);
        pos -= 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sorts_integers() {
        let mut values = vec![5, 3, 9, 1, 1, 7, 0];
        insertion_sort_by(&mut values, |a, b| a.cmp(b));
        assert_eq!(values, vec![0, 1, 1, 3, 5, 7, 9]);
    }

    #[test]
    fn test_stable() {
        let mut pairs = vec![(2, 'a'), (1, 'b'), (2, 'c'), (1, 'd')];
        insertion_sort_by(&mut pairs, |a, b| a.0.cmp(&b.0));
        assert_eq!(pairs, vec![(1, 'b'), (1, 'd'), (2, 'a'), (2, 'c')]);
    }

    #[test]
    fn test_empty_and_single() {
        let mut empty: Vec<i32> = Vec::new();
        insertion_sort_by(&mut empty, |a, b| a.cmp(b));
        assert!(empty.is_empty());

        let mut one = vec![42];
        insertion_sort_by(&mut one, |a, b| a.cmp(b));
        assert_eq!(one, vec![42]);
    }

    #[test]
    fn test_label_order() {
        let mut labels = vec!["Savings", "Money Market", "College Checking", "Checking"];
        insertion_sort_by(&mut labels, |a, b| a.cmp(b));
        assert_eq!(labels, vec!["Checking", "College Checking", "Money Market", "Savings"]);
    }
}
