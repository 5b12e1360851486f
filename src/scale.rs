//! Colors and sizes from values, for map markers.

use log::debug;
use crate::{ColorRange, Error, Range, Result};

/// Maps values onto a [`ColorRange`] after normalizing them against
/// the smallest and largest value of the data.
///
/// ```
/// use rank_palette::{RGB8, RGBColor, ValueScale};
/// let damages = [1_000_000., 250_000_000., 2_000_000_000.];
/// let yellow_red = RGB8::new(255, 255, 0).linear(&RGB8::new(255, 0, 0));
/// let scale = ValueScale::fit(damages, yellow_red)?;
/// assert_eq!(scale.color(2_000_000_000.), RGB8::new(255, 0, 0));
/// # Ok::<(), rank_palette::Error>(())
/// ```
pub struct ValueScale<R> {
    range: R,
    min: f64,
    max: f64,
}

impl<R> ValueScale<R> {
    /// Fit the scale to the finite numbers among `values`.  Fails with
    /// [`Error::EmptySeries`] if there are none.
    pub fn fit(values: impl IntoIterator<Item = f64>, range: R) -> Result<Self> {
        let (min, max) = values.into_iter()
            .filter(|v| v.is_finite())
            .fold(None, |acc, v| match acc {
                None => Some((v, v)),
                Some((lo, hi)) => Some((f64::min(lo, v), f64::max(hi, v))),
            })
            .ok_or(Error::EmptySeries)?;
        if min == max {
            debug!("value scale fitted to the single value {min}");
        }
        Ok(ValueScale { range, min, max })
    }

    pub fn min(&self) -> f64 { self.min }

    pub fn max(&self) -> f64 { self.max }

    /// Position of `v` in \[0, 1\]: 0 for the minimum, 1 for the
    /// maximum.  When all data are equal, every value maps to 1.
    pub fn normalize(&self, v: f64) -> f64 {
        if self.max > self.min {
            ((v - self.min) / (self.max - self.min)).clamp(0., 1.)
        } else {
            1.
        }
    }

    /// The color of `v`.
    pub fn color<Color>(&self, v: f64) -> Color
    where R: ColorRange<Color> {
        self.range.rgb(self.normalize(v))
    }

    /// `n` evenly spaced values from the minimum to the maximum,
    /// together with their colors, e.g. to draw a legend.
    pub fn legend<Color>(&self, n: usize) -> Range<&R, Color>
    where R: ColorRange<Color> {
        (&self.range).range(self.min, self.max, n)
    }
}

/// Radius of a marker growing with the square root of its value:
/// `sqrt(value * factor) + base`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RadiusScale {
    pub factor: f64,
    pub base: f64,
}

impl Default for RadiusScale {
    /// 10 million gives a radius of 15, 1 billion about 105.
    fn default() -> Self { RadiusScale { factor: 1e-5, base: 5. } }
}

impl RadiusScale {
    /// Negative values are treated as 0.
    pub fn radius(&self, value: f64) -> f64 {
        (value.max(0.) * self.factor).sqrt() + self.base
    }
}
