//! Rank-based color assignment for charts and maps.
//!
//! A chart of a ranked series (countries by share of an MBTI type,
//! subway stations by ridership, …) usually wants the top entry, or
//! one chosen entry, in a reserved highlight color and the others
//! shaded along a palette from most to least intense.
//!
//! - [`select_top_k_with_forced`] builds the [`RankedSeries`] to draw:
//!   the top `k` entries, plus a chosen label appended at the end when
//!   it did not make the cut.
//! - [`Colorizer`] (or the function [`colorize`]) turns it into one
//!   color per entry, stretching the [`Palette`] over the ranks.
//! - [`ValueScale`] maps values (rather than ranks) onto a continuous
//!   [`ColorRange`], the way damage amounts are colored on a map.
//!
//! Palettes hold colors of any type: [`RGB8`], CSS strings (see
//! [`css`]), … Sequential palettes by [Cynthia
//! Brewer](https://colorbrewer2.org/) are provided through
//! [`RGBColor`].
//!
//! ```
//! use rank_palette::{select_top_k_with_forced, Colorizer, Entry, Palette};
//! let shares = vec![Entry::new("Peru", 0.31), Entry::new("Chile", 0.29),
//!                   Entry::new("Japan", 0.22), Entry::new("South Korea", 0.12)];
//! let top = select_top_k_with_forced(shares, 2, Some("South Korea"));
//! let palette = Palette::new(vec!["#08306b", "#4292c6", "#c6dbef"])?;
//! let colors = Colorizer::new(palette, "red")
//!     .highlight_label("South Korea")
//!     .colorize(&top)?;
//! assert_eq!(colors, ["#08306b", "#c6dbef", "red"]);
//! # Ok::<(), rank_palette::Error>(())
//! ```

use std::f64::consts::PI;
use std::marker::PhantomData;
pub use rgb::{RGBA, RGB8, RGBA8};

mod error;
mod palettes;
mod palette;
mod series;
mod colorize;
mod scale;
pub mod css;
mod source;

pub use error::{Error, Result};
pub use palette::{Palette, PaletteGradient};
pub use series::{Entry, RankedSeries, select_top_k_with_forced};
pub use colorize::{colorize, Colorizer, Highlight, Sampling};
pub use scale::{RadiusScale, ValueScale};
pub use source::{Embedded, Memoized, SeriesSource};

/// A “continuous” range of colors parametrized by reals in \[0, 1\].
pub trait ColorRange<Color> {
    /// Returns the color corresponding to `t` ∈ \[0., 1.\].
    fn rgb(&self, t: f64) -> Color;

    /// Return an iterator yielding uniform sampling of `n` points
    /// between `a` and `b` (both included) together with their
    /// colors.  It is not required that `a <= b`.
    fn range(self, a: f64, b: f64, n: usize) -> Range<Self, Color>
    where Self: Sized {
        let a = a.clamp(f64::MIN, f64::MAX);
        let b = b.clamp(f64::MIN, f64::MAX);
        Range { range: self, color: PhantomData, a, b,
                last: n.saturating_sub(1), i: 0, end: n }
    }
}

impl<Color, R> ColorRange<Color> for &R
where R: ColorRange<Color> + ?Sized {
    #[inline]
    fn rgb(&self, t: f64) -> Color { <R as ColorRange<Color>>::rgb(self, t) }
}

/// An iterator yielding `f64` in a given range together with colors.
///
/// Created by [`ColorRange::range`].
pub struct Range<R, Color> {
    range: R,
    color: PhantomData<Color>,
    a: f64, // finite or NaN
    b: f64, // finite or NaN
    last: usize,
    i: usize, // first position to be consumed
    end: usize, // position after the last one to be consumed
}

impl<R, Color> Range<R, Color> where R: ColorRange<Color> {
    /// Return the float and color of the position `k` ∈ `0 ..= last`.
    fn at(&self, k: usize) -> (f64, Color) {
        if k == 0 {
            (self.a, self.range.rgb(0.))
        } else if k == self.last {
            (self.b, self.range.rgb(1.))
        } else {
            let t = k as f64 / self.last as f64;
            let mut x = ((self.last - k) as f64 * self.a
                         + k as f64 * self.b) / self.last as f64;
            if x.is_infinite() {
                x = (1. - t) * self.a + t * self.b;
            }
            (x, self.range.rgb(t))
        }
    }
}

impl<R, Color> Iterator for Range<R, Color>
where R: ColorRange<Color> {
    type Item = (f64, Color);

    fn next(&mut self) -> Option<Self::Item> {
        if self.i >= self.end { return None }
        let item = self.at(self.i);
        self.i += 1;
        Some(item)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let len = self.end - self.i;
        (len, Some(len))
    }
}

impl<R, Color> ExactSizeIterator for Range<R, Color>
where R: ColorRange<Color> {}

impl<R, Color> DoubleEndedIterator for Range<R, Color>
where R: ColorRange<Color> {
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.i >= self.end { return None }
        self.end -= 1;
        Some(self.at(self.end))
    }
}

/// Specifies the methods a RGB color encoding must provide.
pub trait RGBColor: Sized {
    /// Return the red, green, blue and alpha components of the color
    /// (in \[0, 255\]).
    fn to_rgba(&self) -> RGBA<f64>;

    /// Create a color from its RGBA components (in \[0, 255\]).
    fn from_rgba(rgba: RGBA<f64>) -> Self;

    /// Return a perceptual gradient (in CIE LCh) from color `c0` to
    /// color `c1`.
    ///
    /// # Example
    ///
    /// ```
    /// use rank_palette::{RGB8, RGBColor, ColorRange};
    /// let red = RGB8::new(255, 0, 0);
    /// let blue = RGB8::new(0, 0, 255);
    /// let grad = red.gradient(&blue);
    /// assert_eq!(grad.rgb(0.), red);
    /// ```
    fn gradient(&self, c1: &Self) -> Gradient<Self> {
        let lch0 = Lch::from_rgb(self.to_rgba());
        let lch1 = Lch::from_rgb(c1.to_rgba());
        let h0 = lch0.h;
        let h1 = lch1.h;
        let dh = {
            if h1 > h0 && h1 - h0 > PI { h1 - (h0 + TWO_PI) }
            else if h1 < h0 && h0 - h1 > PI { h1 + TWO_PI - h0 }
            else { h1 - h0 } };
        Gradient { c0: lch0,
                   dc: Lch { l: lch1.l - lch0.l, c: lch1.c - lch0.c,
                             h: dh, a: lch1.a - lch0.a },
                   color: PhantomData }
    }

    /// Return the straight RGB interpolation from `self` to `c1`.
    ///
    /// ```
    /// use rank_palette::{RGB8, RGBColor, ColorRange};
    /// let yellow_red = RGB8::new(255, 255, 0).linear(&RGB8::new(255, 0, 0));
    /// assert_eq!(yellow_red.rgb(1.), RGB8::new(255, 0, 0));
    /// ```
    fn linear(&self, c1: &Self) -> Linear<Self> {
        Linear { c0: self.to_rgba(), c1: c1.to_rgba(), color: PhantomData }
    }

    /// Brewer "Light to dark blue" sequential scheme (9 colors).
    #[inline]
    fn blues() -> Palette<Self> { Palette::builtin(&palettes::BLUES) }

    /// Brewer "Light to dark green" sequential scheme (9 colors).
    #[inline]
    fn greens() -> Palette<Self> { Palette::builtin(&palettes::GREENS) }

    /// Brewer "Light to dark gray" sequential scheme (9 colors).
    #[inline]
    fn greys() -> Palette<Self> { Palette::builtin(&palettes::GREYS) }

    /// Brewer "Light to dark orange" sequential scheme (9 colors).
    #[inline]
    fn oranges() -> Palette<Self> { Palette::builtin(&palettes::ORANGES) }

    /// Brewer "Light to dark purple" sequential scheme (9 colors).
    #[inline]
    fn purples() -> Palette<Self> { Palette::builtin(&palettes::PURPLES) }

    /// Brewer "Light to dark red" sequential scheme (9 colors).
    #[inline]
    fn reds() -> Palette<Self> { Palette::builtin(&palettes::REDS) }

    /// Brewer "Light yellow to orange to dark red" sequential scheme
    /// (9 colors).
    #[inline]
    fn ylorrd() -> Palette<Self> { Palette::builtin(&palettes::YLORRD) }
}

impl RGBColor for RGBA<f64> {
    #[inline]
    fn to_rgba(&self) -> RGBA<f64> { *self }

    #[inline]
    fn from_rgba(c: RGBA<f64>) -> Self { c }
}

impl RGBColor for RGB8 {
    #[inline]
    fn to_rgba(&self) -> RGBA<f64> {
        RGBA{ r: self.r as f64, g: self.g as f64, b: self.b as f64, a: 255. }
    }

    #[inline]
    fn from_rgba(c: RGBA<f64>) -> Self {
        RGB8 { r: c.r.round() as u8, g: c.g.round() as u8,
               b: c.b.round() as u8 }
    }
}

impl RGBColor for RGBA8 {
    #[inline]
    fn to_rgba(&self) -> RGBA<f64> {
        RGBA{ r: self.r as f64, g: self.g as f64, b: self.b as f64,
              a: self.a as f64 }
    }

    #[inline]
    fn from_rgba(c: RGBA<f64>) -> Self {
        RGBA8 { r: c.r.round() as u8, g: c.g.round() as u8,
                b: c.b.round() as u8, a: c.a.round() as u8 }
    }
}

/// The type for colors in the CIE L*C*h*_ab color space with a D50
/// reference white point and an alpha component.  This color space is
/// CIE L*a*b* with polar coordinates.
#[derive(Clone, Copy)]
struct Lch {
    l: f64,
    c: f64,
    /// The hue in radians in the range 0. to 2π.
    h: f64,
    a: f64,
}

const EPS0: f64 = 6. / 29.;
const EPS: f64 = EPS0 * EPS0 * EPS0;
const TWO_PI: f64 = 2. * PI;

impl Lch {
    fn from_rgb(c: RGBA<f64>) -> Lch {
        // See https://github.com/dbuenzli/gg/blob/b8704687d669d139bb4ac7a54115afc7e5caaa55/src/gg.ml#L2926
        const C0: f64 = 1. / 3.;
        const C1: f64 = 841. / 108.;
        const C2: f64 = 4. / 29.;
        let f = |t: f64| if t > EPS { t.powf(C0) } else { C1 * t + C2 };
        let fx = f(0.4522795 * c.r + 0.3993744 * c.g + 0.1483460 * c.b);
        let fy = f(0.2225105 * c.r + 0.7168863 * c.g + 0.0606032 * c.b);
        let fz = f(0.0168820 * c.r + 0.1176865 * c.g + 0.8654315 * c.b);
        let a = 500. * (fx - fy);
        let b = 200. * (fy - fz);
        let h = b.atan2(a);
        Lch { l: 116. * fy - 16., c: a.hypot(b),
              h: if h < 0. { h + TWO_PI } else { h },
              a: c.a }
    }

    fn to_rgb(self) -> RGBA<f64> {
        const C0: f64 = 108. / 841.;
        const C1: f64 = 4. / 29.;
        let finv = |t: f64| if t > EPS0 { t * t * t } else { C0 * (t - C1) };
        let fy = (self.l + 16.) / 116.;
        let x = finv(self.c * self.h.cos() / 500. + fy);
        let y = finv(fy);
        let z = finv(fy - self.c * self.h.sin() / 200.);
        RGBA { r: 3.0215932 * x - 1.6168777 * y - 0.4047152 * z,
               g: -0.9437222 * x + 1.9161365 * y + 0.0275856 * z,
               b: 0.0693906 * x - 0.2290271 * y + 1.1596365 * z,
               a: self.a }
    }
}

/// Perceptual gradient between two colors.
///
/// Created by [`RGBColor::gradient`].  See the [`ColorRange`] trait
/// for methods.
pub struct Gradient<Color> {
    c0: Lch, // first color
    dc: Lch, // last - first color
    color: PhantomData<Color>,
}

impl<Color> Gradient<Color>
where Color: RGBColor {
    /// Returns the color corresponding to `t` ∈ \[0., 1.\] but does
    /// not check the later condition.
    #[inline]
    pub(crate) fn rgb_unchecked(&self, t: f64) -> Color {
        let lch = Lch { l: self.c0.l + t * self.dc.l,
                        c: self.c0.c + t * self.dc.c,
                        h: self.c0.h + t * self.dc.h,
                        a: self.c0.a + t * self.dc.a };
        Color::from_rgba(lch.to_rgb())
    }
}

impl<Color> ColorRange<Color> for Gradient<Color>
where Color: RGBColor {
    /// Returns the color corresponding to `t` ∈ \[0., 1.\], where
    /// `t == 0.` returns the first color provided in the gradient and
    /// `t == 1.` the second.
    fn rgb(&self, t: f64) -> Color { self.rgb_unchecked(t.clamp(0., 1.)) }
}

/// Straight interpolation of the RGBA components between two colors.
///
/// Created by [`RGBColor::linear`].
pub struct Linear<Color> {
    c0: RGBA<f64>,
    c1: RGBA<f64>,
    color: PhantomData<Color>,
}

impl<Color> ColorRange<Color> for Linear<Color>
where Color: RGBColor {
    fn rgb(&self, t: f64) -> Color {
        let t = t.clamp(0., 1.);
        let lerp = |x0: f64, x1: f64| x0 + t * (x1 - x0);
        Color::from_rgba(RGBA { r: lerp(self.c0.r, self.c1.r),
                                g: lerp(self.c0.g, self.c1.g),
                                b: lerp(self.c0.b, self.c1.b),
                                a: lerp(self.c0.a, self.c1.a) })
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn linear_range() {
        let g = RGB8::new(0, 0, 0).linear(&RGB8::new(200, 100, 0));
        for (i, (x, c)) in (&g).range(0., 1., 11).enumerate() {
            assert!((x - 0.1 * i as f64).abs() <= 1e-15,
                    "{} ≉ {}", x, 0.1 * i as f64);
            assert_eq!(g.rgb(x), c);
        }
    }

    #[test]
    fn range_back_and_forth() {
        let g = RGB8::new(0, 0, 0).linear(&RGB8::new(100, 100, 100));
        let mut r = g.range(10., 20., 3);
        assert_eq!(r.len(), 3);
        assert_eq!(r.next_back(), Some((20., RGB8::new(100, 100, 100))));
        assert_eq!(r.next(), Some((10., RGB8::new(0, 0, 0))));
        assert_eq!(r.next(), Some((15., RGB8::new(50, 50, 50))));
        assert_eq!(r.next(), None);
        assert_eq!(r.next_back(), None);
    }

    #[test]
    fn empty_range() {
        let g = RGB8::new(0, 0, 0).linear(&RGB8::new(1, 1, 1));
        assert_eq!(g.range(0., 1., 0).count(), 0);
    }

    #[test]
    fn single_point_range() {
        let g = RGB8::new(0, 0, 0).linear(&RGB8::new(1, 1, 1));
        let v: Vec<_> = g.range(3., 7., 1).collect();
        assert_eq!(v, [(3., RGB8::new(0, 0, 0))]);
    }

    #[test]
    fn linear_clamps() {
        let g = RGB8::new(255, 255, 0).linear(&RGB8::new(255, 0, 0));
        assert_eq!(g.rgb(-1.), RGB8::new(255, 255, 0));
        assert_eq!(g.rgb(2.), RGB8::new(255, 0, 0));
        assert_eq!(g.rgb(0.5), RGB8::new(255, 128, 0));
    }

    #[test]
    fn gradient_endpoints() {
        let c0 = RGB8::new(94, 0, 99);
        let c1 = RGB8::new(255, 235, 170);
        let g = c0.gradient(&c1);
        assert_eq!(g.rgb(0.), c0);
        assert_eq!(g.rgb(1.), c1);
    }
}
