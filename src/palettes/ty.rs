pub(crate) use rgb::RGBA;

/// A built-in sequential colormap, from light (low data values) to
/// dark (high data values).
pub(crate) struct PaletteData {
    pub(crate) name: &'static str,
    pub(crate) rgb: Vec<RGBA<f64>>, // Invariant: length ≥ 2
}
