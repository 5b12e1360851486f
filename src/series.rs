//! Ranked series and the top-K selection feeding them.

use std::cmp::Ordering;
use log::debug;

/// A labelled value.
#[derive(Clone, Debug, PartialEq)]
pub struct Entry {
    pub label: String,
    pub value: f64,
}

impl Entry {
    pub fn new(label: impl Into<String>, value: f64) -> Self {
        Entry { label: label.into(), value }
    }
}

impl<L: Into<String>> From<(L, f64)> for Entry {
    fn from((label, value): (L, f64)) -> Self { Entry::new(label, value) }
}

/// Entries ordered by rank, the first one being the top one.
///
/// The order is taken as given: colors depend on the position of an
/// entry, never on its value.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct RankedSeries {
    entries: Vec<Entry>,
}

impl RankedSeries {
    /// Wrap entries already sorted by decreasing value.
    pub fn from_sorted(entries: Vec<Entry>) -> Self {
        RankedSeries { entries }
    }

    /// Sort `entries` by decreasing value.  The sort is stable: equal
    /// values keep their relative order.  NaN values come last.
    pub fn rank(mut entries: Vec<Entry>) -> Self {
        entries.sort_by(|e0, e1| descending(e0.value, e1.value));
        RankedSeries { entries }
    }

    pub fn len(&self) -> usize { self.entries.len() }

    pub fn is_empty(&self) -> bool { self.entries.is_empty() }

    pub fn entries(&self) -> &[Entry] { &self.entries }

    pub fn labels(&self) -> impl Iterator<Item = &str> + '_ {
        self.entries.iter().map(|e| e.label.as_str())
    }

    /// Position of the first entry labelled `label`.
    pub fn position(&self, label: &str) -> Option<usize> {
        self.entries.iter().position(|e| e.label == label)
    }

    pub fn into_entries(self) -> Vec<Entry> { self.entries }
}

impl FromIterator<Entry> for RankedSeries {
    /// Collect entries already in rank order.
    fn from_iter<I: IntoIterator<Item = Entry>>(iter: I) -> Self {
        RankedSeries::from_sorted(iter.into_iter().collect())
    }
}

impl<'a> IntoIterator for &'a RankedSeries {
    type Item = &'a Entry;
    type IntoIter = std::slice::Iter<'a, Entry>;

    fn into_iter(self) -> Self::IntoIter { self.entries.iter() }
}

fn descending(x: f64, y: f64) -> Ordering {
    match (x.is_nan(), y.is_nan()) {
        (false, false) => y.partial_cmp(&x).unwrap_or(Ordering::Equal),
        (true, false) => Ordering::Greater,
        (false, true) => Ordering::Less,
        (true, true) => Ordering::Equal,
    }
}

/// Rank `entries` and keep the first `k`.  If `forced` labels an entry
/// outside of them, that entry is appended at the end, after the top
/// `k`, whatever its rank.
///
/// ```
/// use rank_palette::{select_top_k_with_forced, Entry};
/// let all = vec![Entry::new("A", 0.30), Entry::new("B", 0.25),
///                Entry::new("C", 0.20), Entry::new("D", 0.15),
///                Entry::new("E", 0.05)];
/// let top = select_top_k_with_forced(all, 3, Some("E"));
/// assert!(top.labels().eq(["A", "B", "C", "E"]));
/// ```
pub fn select_top_k_with_forced(
    entries: Vec<Entry>, k: usize, forced: Option<&str>,
) -> RankedSeries {
    let mut ranked = RankedSeries::rank(entries).into_entries();
    let extra = forced.and_then(|label| {
        match ranked.iter().position(|e| e.label == label) {
            Some(i) if i >= k => Some(ranked.swap_remove(i)),
            Some(_) => None,
            None => {
                debug!("forced label {label:?} not in the data");
                None
            }
        }
    });
    ranked.truncate(k);
    ranked.extend(extra);
    RankedSeries::from_sorted(ranked)
}


#[cfg(test)]
mod tests {
    use super::*;

    fn entries(v: &[(&str, f64)]) -> Vec<Entry> {
        v.iter().map(|&(l, x)| Entry::new(l, x)).collect()
    }

    fn labels(s: &RankedSeries) -> Vec<&str> { s.labels().collect() }

    #[test]
    fn rank_is_stable() {
        let s = RankedSeries::rank(entries(&[("a", 1.), ("b", 2.), ("c", 1.),
                                             ("d", 2.), ("e", 0.)]));
        assert_eq!(labels(&s), ["b", "d", "a", "c", "e"]);
    }

    #[test]
    fn nan_last() {
        let s = RankedSeries::rank(entries(&[("nan", f64::NAN), ("neg", -3.),
                                             ("zero", 0.)]));
        assert_eq!(labels(&s), ["zero", "neg", "nan"]);
    }

    #[test]
    fn forced_appended_last() {
        let all = entries(&[("D", 0.15), ("A", 0.30), ("E", 0.05),
                            ("C", 0.20), ("B", 0.25)]);
        let s = select_top_k_with_forced(all, 3, Some("E"));
        assert_eq!(labels(&s), ["A", "B", "C", "E"]);
        assert_eq!(s.entries()[3].value, 0.05);
    }

    #[test]
    fn forced_already_in_top() {
        let all = entries(&[("A", 3.), ("B", 2.), ("C", 1.)]);
        let s = select_top_k_with_forced(all, 2, Some("B"));
        assert_eq!(labels(&s), ["A", "B"]);
    }

    #[test]
    fn forced_missing() {
        let all = entries(&[("A", 3.), ("B", 2.), ("C", 1.)]);
        let s = select_top_k_with_forced(all, 2, Some("Z"));
        assert_eq!(labels(&s), ["A", "B"]);
    }

    #[test]
    fn k_larger_than_data() {
        let all = entries(&[("A", 1.), ("B", 2.)]);
        let s = select_top_k_with_forced(all, 10, Some("A"));
        assert_eq!(labels(&s), ["B", "A"]);
    }

    #[test]
    fn k_zero_keeps_only_forced() {
        let all = entries(&[("A", 1.), ("B", 2.)]);
        assert_eq!(labels(&select_top_k_with_forced(all.clone(), 0, Some("A"))),
                   ["A"]);
        assert!(select_top_k_with_forced(all, 0, None).is_empty());
    }

    #[test]
    fn ties_at_the_cut_keep_input_order() {
        let all = entries(&[("x", 1.), ("y", 5.), ("z", 1.), ("w", 1.)]);
        let s = select_top_k_with_forced(all, 2, Some("w"));
        assert_eq!(labels(&s), ["y", "x", "w"]);
    }

    #[test]
    fn forced_duplicate_label_takes_first() {
        let all = entries(&[("A", 5.), ("K", 1.), ("B", 4.), ("K", 0.5)]);
        let s = select_top_k_with_forced(all, 2, Some("K"));
        assert_eq!(s.entries().last(), Some(&Entry::new("K", 1.)));
    }
}
