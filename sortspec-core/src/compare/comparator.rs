//! Multi-key comparator compiled from an [`OrderingSpec`]

use super::ordering::{OrderKey, OrderingSpec};
use super::record::SortRecord;
use super::rule::{DeclarativeRule, OrderRule};
use std::cmp::Ordering;
use std::fmt;
use tracing::trace;

/// Comparator over records, borrowing the spec it was compiled from
pub struct Comparator<'a, T> {
    keys: Vec<&'a OrderKey<T>>,
}

impl<T> fmt::Debug for Comparator<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Comparator")
            .field("key_count", &self.keys.len())
            .finish()
    }
}

impl<T> Clone for Comparator<'_, T> {
    fn clone(&self) -> Self {
        Self {
            keys: self.keys.clone(),
        }
    }
}

impl<'a, T: SortRecord> Comparator<'a, T> {
    /// Compare two records key by key
    ///
    /// A custom rule returns its result straight away. Declarative keys that
    /// tie fall through to the next key; when every key ties the records are
    /// equal.
    pub fn compare(&self, a: &T, b: &T) -> Ordering {
        for key in &self.keys {
            match &key.rule {
                OrderRule::Custom(compare) => return compare(a, b),
                OrderRule::Declarative(rule) => {
                    let ord = compare_declared(a, b, key, rule);
                    if ord != Ordering::Equal {
                        return ord;
                    }
                }
            }
        }
        Ordering::Equal
    }

    /// The comparator as a closure for `sort_by` and friends
    pub fn into_fn(self) -> impl Fn(&T, &T) -> Ordering + 'a {
        move |a, b| self.compare(a, b)
    }
}

fn compare_declared<T: SortRecord>(
    a: &T,
    b: &T,
    key: &OrderKey<T>,
    rule: &DeclarativeRule,
) -> Ordering {
    if a.is_absent() || b.is_absent() {
        return Ordering::Equal;
    }

    let (Some(value_a), Some(value_b)) =
        (a.field(&key.path), b.field(&key.path))
    else {
        return Ordering::Equal;
    };

    match rule.kind.compare(&value_a, &value_b) {
        Some(ord) => rule.direction.apply(ord),
        None => {
            trace!(
                "Values at {} do not compare as {}, treating as tie",
                key.path, rule.kind
            );
            Ordering::Equal
        }
    }
}

/// Compile `spec` into a comparator
pub fn compile_comparator<T: SortRecord>(
    spec: &OrderingSpec<T>,
) -> Comparator<'_, T> {
    Comparator {
        keys: spec.keys().collect(),
    }
}

/// Sort `items` in place by the keys of `spec`
///
/// The sort is stable, so records that tie on every key keep their
/// relative order. Missing values tie with everything, so the comparator
/// need not be a total order; such inputs get a deterministic order and
/// never a panic.
pub fn sort_by_keys<T: SortRecord>(items: &mut [T], spec: &OrderingSpec<T>) {
    let comparator = compile_comparator(spec);
    let order = merge_sort_indices(items.len(), |left, right| {
        comparator.compare(&items[right], &items[left]) == Ordering::Less
    });
    apply_order(items, &order);
}

/// Sorted copy of `items`
pub fn sorted_by_keys<T: SortRecord>(
    mut items: Vec<T>,
    spec: &OrderingSpec<T>,
) -> Vec<T> {
    sort_by_keys(&mut items, spec);
    items
}

/// Bottom-up merge sort over positions `0..len`
///
/// `right_first(l, r)` says whether the element at `r` must come before
/// the element at `l`. Returns `order` where `order[i]` is the position
/// of the element that ends up at `i`.
fn merge_sort_indices(
    len: usize,
    mut right_first: impl FnMut(usize, usize) -> bool,
) -> Vec<usize> {
    let mut order: Vec<usize> = (0..len).collect();
    let mut buffer = vec![0; len];
    let mut width = 1;

    while width < len {
        let mut start = 0;
        while start < len {
            let mid = (start + width).min(len);
            let end = (start + 2 * width).min(len);
            merge_runs(
                &order[start..mid],
                &order[mid..end],
                &mut buffer[start..end],
                &mut right_first,
            );
            start = end;
        }
        std::mem::swap(&mut order, &mut buffer);
        width *= 2;
    }
    order
}

fn merge_runs(
    left: &[usize],
    right: &[usize],
    out: &mut [usize],
    right_first: &mut impl FnMut(usize, usize) -> bool,
) {
    let (mut l, mut r) = (0, 0);
    for slot in out.iter_mut() {
        let take_right = match (left.get(l), right.get(r)) {
            (Some(&a), Some(&b)) => right_first(a, b),
            (None, Some(_)) => true,
            _ => false,
        };
        if take_right {
            *slot = right[r];
            r += 1;
        } else {
            *slot = left[l];
            l += 1;
        }
    }
}

/// Move `items[order[i]]` to position `i` for every `i`
fn apply_order<T>(items: &mut [T], order: &[usize]) {
    for i in 0..items.len() {
        // earlier swaps moved the wanted element along its cycle
        let mut source = order[i];
        while source < i {
            source = order[source];
        }
        items.swap(i, source);
    }
}
