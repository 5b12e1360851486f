//! Colors from ranks.

use log::{debug, trace};
use crate::{Error, Palette, RankedSeries, Result};

/// Which entry of a series gets the highlight color.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum Highlight {
    /// The top ranked entry.
    #[default]
    Top,
    /// The first entry with this label, if any.
    Label(String),
    /// No entry; all of them are shaded along the palette.
    Nothing,
}

impl Highlight {
    /// Highlight the entry labelled `key` when given, the top one
    /// otherwise.
    pub fn key(key: Option<&str>) -> Self {
        match key {
            Some(k) => Highlight::Label(k.to_string()),
            None => Highlight::Top,
        }
    }

    fn index(&self, series: &RankedSeries) -> Option<usize> {
        match self {
            Highlight::Top => Some(0),
            Highlight::Label(label) => {
                let i = series.position(label);
                if i.is_none() {
                    debug!("highlight label {label:?} matches no entry");
                }
                i
            }
            Highlight::Nothing => None,
        }
    }
}

/// How the palette is sampled by the entries that are not
/// highlighted.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Sampling {
    /// The palette is stretched (or compressed) so that the first
    /// entry gets the first stop and the last entry the last stop.
    #[default]
    Stretch,
    /// The `i`th entry gets the `i`th stop; entries past the end of
    /// the palette get its last stop.
    Prefix,
}

impl Sampling {
    /// Index of the stop for the entry of rank `i` among `n` entries
    /// shaded with a palette of `m` stops.
    fn stop(self, i: usize, n: usize, m: usize) -> usize {
        match self {
            Sampling::Stretch => {
                if n <= 1 { return 0 }
                // round(i (m-1) / (n-1)), halves rounded up.
                let (num, den) = (i * (m - 1), n - 1);
                (2 * num + den) / (2 * den)
            }
            Sampling::Prefix => i.min(m - 1),
        }
    }
}

/// Assigns a color to each entry of a [`RankedSeries`]: a reserved
/// highlight color to one entry (the top one by default), and palette
/// colors, from the first stop to the last one, to the others in rank
/// order.
///
/// ```
/// use rank_palette::{Colorizer, Entry, Palette, RankedSeries};
/// let series: RankedSeries = ["ENFP", "INFP", "ENFJ", "INFJ"].into_iter()
///     .zip([0.12, 0.09, 0.07, 0.03])
///     .map(Entry::from)
///     .collect();
/// let colors = Colorizer::new(Palette::new(vec!["dark", "mid", "light"])?, "red")
///     .colorize(&series)?;
/// assert_eq!(colors, ["red", "dark", "mid", "light"]);
/// # Ok::<(), rank_palette::Error>(())
/// ```
#[derive(Clone, Debug)]
pub struct Colorizer<Color> {
    palette: Palette<Color>,
    highlight_color: Color,
    highlight: Highlight,
    sampling: Sampling,
}

impl<Color: Clone> Colorizer<Color> {
    /// Colorizer highlighting the top entry with `highlight_color` and
    /// stretching `palette` over the other ones.
    pub fn new(palette: Palette<Color>, highlight_color: Color) -> Self {
        Colorizer { palette, highlight_color,
                    highlight: Highlight::Top,
                    sampling: Sampling::Stretch }
    }

    /// Choose the highlighted entry.
    pub fn highlight(mut self, highlight: Highlight) -> Self {
        self.highlight = highlight;
        self
    }

    /// Highlight the entry labelled `label` instead of the top one.
    pub fn highlight_label(self, label: impl Into<String>) -> Self {
        self.highlight(Highlight::Label(label.into()))
    }

    /// Shade all entries, none is highlighted.
    pub fn no_highlight(self) -> Self { self.highlight(Highlight::Nothing) }

    pub fn sampling(mut self, sampling: Sampling) -> Self {
        self.sampling = sampling;
        self
    }

    pub fn palette(&self) -> &Palette<Color> { &self.palette }

    pub fn highlight_color(&self) -> &Color { &self.highlight_color }

    /// Returns one color per entry of `series`, in the same order.
    /// Fails with [`Error::EmptySeries`] if `series` is empty.
    pub fn colorize(&self, series: &RankedSeries) -> Result<Vec<Color>> {
        if series.is_empty() {
            return Err(Error::EmptySeries)
        }
        let n = series.len();
        let highlighted = self.highlight.index(series);
        let shaded = n - usize::from(highlighted.is_some());
        let m = self.palette.len();
        trace!("colorize: {n} entries, highlighted {highlighted:?}, \
                {m} stops, {:?}", self.sampling);
        let mut rank = 0;
        let colors = (0 .. n).map(|k| {
            if Some(k) == highlighted {
                self.highlight_color.clone()
            } else {
                let i = self.sampling.stop(rank, shaded, m);
                rank += 1;
                self.palette.stop(i).clone()
            }
        }).collect();
        Ok(colors)
    }
}

/// Color `series` with `palette`, the entry labelled `highlight_key`
/// (or the top entry if no key is given) receiving `highlight_color`.
///
/// See [`Colorizer`] for more options.
pub fn colorize<Color: Clone>(
    series: &RankedSeries,
    palette: &Palette<Color>,
    highlight_color: &Color,
    highlight_key: Option<&str>,
) -> Result<Vec<Color>> {
    Colorizer::new(palette.clone(), highlight_color.clone())
        .highlight(Highlight::key(highlight_key))
        .colorize(series)
}


#[cfg(test)]
mod tests {
    use super::*;
    use crate::Entry;

    fn series(n: usize) -> RankedSeries {
        (0 .. n).map(|i| Entry::new(format!("e{i}"), (n - i) as f64)).collect()
    }

    fn stops(m: usize) -> Palette<usize> {
        Palette::new((0 .. m).collect()).unwrap()
    }

    const HL: usize = usize::MAX;

    #[test]
    fn stretch_stops() {
        let s = Sampling::Stretch;
        assert_eq!((0 .. 5).map(|i| s.stop(i, 5, 5)).collect::<Vec<_>>(),
                   [0, 1, 2, 3, 4]);
        // 0, .57, 1.14, 1.71, 2.29, 2.86, 3.43, 4
        assert_eq!((0 .. 8).map(|i| s.stop(i, 8, 5)).collect::<Vec<_>>(),
                   [0, 1, 1, 2, 2, 3, 3, 4]);
        // Halves round up: 0, 0.5, 1, 1.5, 2
        assert_eq!((0 .. 5).map(|i| s.stop(i, 5, 3)).collect::<Vec<_>>(),
                   [0, 1, 1, 2, 2]);
        assert_eq!(s.stop(0, 1, 9), 0);
        assert_eq!(s.stop(1, 2, 9), 8);
    }

    #[test]
    fn prefix_stops() {
        let s = Sampling::Prefix;
        assert_eq!((0 .. 5).map(|i| s.stop(i, 5, 3)).collect::<Vec<_>>(),
                   [0, 1, 2, 2, 2]);
    }

    #[test]
    fn empty_series() {
        let c = Colorizer::new(stops(3), HL);
        assert_eq!(c.colorize(&RankedSeries::default()), Err(Error::EmptySeries));
    }

    #[test]
    fn single_entry() {
        let c = Colorizer::new(stops(3), HL);
        assert_eq!(c.colorize(&series(1)).unwrap(), [HL]);
        assert_eq!(c.clone().no_highlight().colorize(&series(1)).unwrap(), [0]);
        assert_eq!(c.highlight_label("nope").colorize(&series(1)).unwrap(), [0]);
    }

    #[test]
    fn top_highlighted_by_default() {
        let c = Colorizer::new(stops(5), HL);
        assert_eq!(c.colorize(&series(9)).unwrap(),
                   [HL, 0, 1, 1, 2, 2, 3, 3, 4]);
    }

    #[test]
    fn label_highlight_keeps_position() {
        let c = Colorizer::new(stops(9), HL).highlight_label("e2");
        assert_eq!(c.colorize(&series(4)).unwrap(), [0, 4, HL, 8]);
    }

    #[test]
    fn only_first_matching_label() {
        let s: RankedSeries = vec![Entry::new("a", 3.), Entry::new("b", 2.),
                                   Entry::new("b", 1.)].into_iter().collect();
        let c = Colorizer::new(stops(2), HL).highlight_label("b");
        assert_eq!(c.colorize(&s).unwrap(), [0, HL, 1]);
    }

    #[test]
    fn two_entries_one_highlighted() {
        let c = Colorizer::new(stops(9), HL);
        assert_eq!(c.colorize(&series(2)).unwrap(), [HL, 0]);
    }

    #[test]
    fn prefix_like_a_ridership_chart() {
        let c = Colorizer::new(stops(9), HL).sampling(Sampling::Prefix);
        assert_eq!(c.colorize(&series(12)).unwrap(),
                   [HL, 0, 1, 2, 3, 4, 5, 6, 7, 8, 8, 8]);
    }

    #[test]
    fn free_function() {
        let p = Palette::new(vec!["p0", "p1", "p2", "p3", "p4"]).unwrap();
        let s = series(5);
        assert_eq!(colorize(&s, &p, &"red", None).unwrap(),
                   ["red", "p0", "p1", "p3", "p4"]);
        assert_eq!(colorize(&s, &p, &"red", Some("e4")).unwrap(),
                   ["p0", "p1", "p3", "p4", "red"]);
    }
}
