//! Ordered color stops.

use crate::palettes::{self, ty::PaletteData};
use crate::{ColorRange, Error, Gradient, RGBColor, Result};

/// A fixed ordered sequence of at least 2 colors.
///
/// The colors may be of any type: [`rgb::RGB8`], CSS strings, … When
/// given to a [`Colorizer`](crate::Colorizer), the first stop is the
/// most intense one.  Built-in palettes run from light to dark; use
/// [`Palette::reversed`] to rank with them.
#[derive(Clone, Debug, PartialEq)]
pub struct Palette<Color> {
    stops: Vec<Color>, // Invariant: length ≥ 2
}

impl<Color> Palette<Color> {
    /// Create a palette from its stops.  Fails with
    /// [`Error::PaletteTooShort`] if there are less than 2 of them.
    pub fn new(stops: Vec<Color>) -> Result<Self> {
        if stops.len() < 2 {
            return Err(Error::PaletteTooShort(stops.len()))
        }
        Ok(Palette { stops })
    }

    /// Returns the number of colors in the palette (at least 2).
    #[allow(clippy::len_without_is_empty)]
    pub fn len(&self) -> usize { self.stops.len() }

    /// Returns the colors of the palette.
    pub fn colors(&self) -> &[Color] { &self.stops }

    /// Returns the `i`th stop, if any.
    pub fn get(&self, i: usize) -> Option<&Color> { self.stops.get(i) }

    /// The first (most intense when ranking) stop.
    pub fn first(&self) -> &Color { &self.stops[0] }

    /// The last (least intense when ranking) stop.
    pub fn last(&self) -> &Color { &self.stops[self.stops.len() - 1] }

    /// Returns the palette with its stops in the opposite order.
    pub fn reversed(mut self) -> Self {
        self.stops.reverse();
        self
    }

    /// Convert each stop, e.g. to the string format a chart renderer
    /// expects.
    ///
    /// ```
    /// use rank_palette::{css, RGB8, RGBColor};
    /// let blues = RGB8::blues().map(css::hex);
    /// assert_eq!(blues.last(), "#08306b");
    /// ```
    pub fn map<C>(self, f: impl FnMut(Color) -> C) -> Palette<C> {
        Palette { stops: self.stops.into_iter().map(f).collect() }
    }

    pub(crate) fn stop(&self, i: usize) -> &Color { &self.stops[i] }
}

impl<Color: RGBColor> Palette<Color> {
    pub(crate) fn builtin(data: &'static PaletteData) -> Self {
        Palette { stops: data.rgb.iter().map(|&c| Color::from_rgba(c)).collect() }
    }

    /// Look up a built-in palette by name (case insensitive), e.g.
    /// `"blues"` or `"YlOrRd"`.
    pub fn named(name: &str) -> Result<Self> {
        palettes::ALL_PALETTES.iter()
            .find(|p| p.name.eq_ignore_ascii_case(name))
            .map(|&p| Self::builtin(p))
            .ok_or_else(|| Error::UnknownPalette(name.to_string()))
    }

    /// Names of the built-in palettes.
    pub fn names() -> impl Iterator<Item = &'static str> {
        palettes::ALL_PALETTES.iter().map(|p| p.name)
    }

    /// Returns a gradient constructed from the palette.
    /// It only makes sense for sequential and some diverging palettes.
    pub fn gradient(&self) -> PaletteGradient<Color> {
        PaletteGradient {
            gradients: self.stops.windows(2)
                .map(|c| c[0].gradient(&c[1]))
                .collect() }
    }
}

/// A gradient based on a [`Palette`], going through all its stops.
pub struct PaletteGradient<Color> {
    gradients: Vec<Gradient<Color>>, // Invariant: non-empty
}

impl<Color> ColorRange<Color> for PaletteGradient<Color>
where Color: RGBColor {
    fn rgb(&self, t: f64) -> Color {
        let n = self.gradients.len();
        let tn = t.clamp(0., 1.) * n as f64;
        let i = tn.trunc() as usize;
        if i < n { self.gradients[i].rgb_unchecked(tn.fract()) }
        else { self.gradients[n-1].rgb_unchecked(1.) }
    }
}
