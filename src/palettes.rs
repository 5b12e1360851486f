// Brewer 9-class sequential colormaps — see http://colorbrewer2.org/
// Colors run from light (low data values) to dark (high data values).

use lazy_static::lazy_static;
pub(crate) mod ty;
use ty::*;

lazy_static! {
  pub(crate) static ref BLUES: PaletteData = PaletteData {
    name: "blues",
    rgb: vec![
      RGBA{r: 247., g: 251., b: 255., a: 255.},
      RGBA{r: 222., g: 235., b: 247., a: 255.},
      RGBA{r: 198., g: 219., b: 239., a: 255.},
      RGBA{r: 158., g: 202., b: 225., a: 255.},
      RGBA{r: 107., g: 174., b: 214., a: 255.},
      RGBA{r:  66., g: 146., b: 198., a: 255.},
      RGBA{r:  33., g: 113., b: 181., a: 255.},
      RGBA{r:   8., g:  81., b: 156., a: 255.},
      RGBA{r:   8., g:  48., b: 107., a: 255.},
    ]};
}

lazy_static! {
  pub(crate) static ref GREENS: PaletteData = PaletteData {
    name: "greens",
    rgb: vec![
      RGBA{r: 247., g: 252., b: 245., a: 255.},
      RGBA{r: 229., g: 245., b: 224., a: 255.},
      RGBA{r: 199., g: 233., b: 192., a: 255.},
      RGBA{r: 161., g: 217., b: 155., a: 255.},
      RGBA{r: 116., g: 196., b: 118., a: 255.},
      RGBA{r:  65., g: 171., b:  93., a: 255.},
      RGBA{r:  35., g: 139., b:  69., a: 255.},
      RGBA{r:   0., g: 109., b:  44., a: 255.},
      RGBA{r:   0., g:  68., b:  27., a: 255.},
    ]};
}

lazy_static! {
  pub(crate) static ref GREYS: PaletteData = PaletteData {
    name: "greys",
    rgb: vec![
      RGBA{r: 255., g: 255., b: 255., a: 255.},
      RGBA{r: 240., g: 240., b: 240., a: 255.},
      RGBA{r: 217., g: 217., b: 217., a: 255.},
      RGBA{r: 189., g: 189., b: 189., a: 255.},
      RGBA{r: 150., g: 150., b: 150., a: 255.},
      RGBA{r: 115., g: 115., b: 115., a: 255.},
      RGBA{r:  82., g:  82., b:  82., a: 255.},
      RGBA{r:  37., g:  37., b:  37., a: 255.},
      RGBA{r:   0., g:   0., b:   0., a: 255.},
    ]};
}

lazy_static! {
  pub(crate) static ref ORANGES: PaletteData = PaletteData {
    name: "oranges",
    rgb: vec![
      RGBA{r: 255., g: 245., b: 235., a: 255.},
      RGBA{r: 254., g: 230., b: 206., a: 255.},
      RGBA{r: 253., g: 208., b: 162., a: 255.},
      RGBA{r: 253., g: 174., b: 107., a: 255.},
      RGBA{r: 253., g: 141., b:  60., a: 255.},
      RGBA{r: 241., g: 105., b:  19., a: 255.},
      RGBA{r: 217., g:  72., b:   1., a: 255.},
      RGBA{r: 166., g:  54., b:   3., a: 255.},
      RGBA{r: 127., g:  39., b:   4., a: 255.},
    ]};
}

lazy_static! {
  pub(crate) static ref PURPLES: PaletteData = PaletteData {
    name: "purples",
    rgb: vec![
      RGBA{r: 252., g: 251., b: 253., a: 255.},
      RGBA{r: 239., g: 237., b: 245., a: 255.},
      RGBA{r: 218., g: 218., b: 235., a: 255.},
      RGBA{r: 188., g: 189., b: 220., a: 255.},
      RGBA{r: 158., g: 154., b: 200., a: 255.},
      RGBA{r: 128., g: 125., b: 186., a: 255.},
      RGBA{r: 106., g:  81., b: 163., a: 255.},
      RGBA{r:  84., g:  39., b: 143., a: 255.},
      RGBA{r:  63., g:   0., b: 125., a: 255.},
    ]};
}

lazy_static! {
  pub(crate) static ref REDS: PaletteData = PaletteData {
    name: "reds",
    rgb: vec![
      RGBA{r: 255., g: 245., b: 240., a: 255.},
      RGBA{r: 254., g: 224., b: 210., a: 255.},
      RGBA{r: 252., g: 187., b: 161., a: 255.},
      RGBA{r: 252., g: 146., b: 114., a: 255.},
      RGBA{r: 251., g: 106., b:  74., a: 255.},
      RGBA{r: 239., g:  59., b:  44., a: 255.},
      RGBA{r: 203., g:  24., b:  29., a: 255.},
      RGBA{r: 165., g:  15., b:  21., a: 255.},
      RGBA{r: 103., g:   0., b:  13., a: 255.},
    ]};
}

lazy_static! {
  pub(crate) static ref YLORRD: PaletteData = PaletteData {
    name: "ylorrd",
    rgb: vec![
      RGBA{r: 255., g: 255., b: 204., a: 255.},
      RGBA{r: 255., g: 237., b: 160., a: 255.},
      RGBA{r: 254., g: 217., b: 118., a: 255.},
      RGBA{r: 254., g: 178., b:  76., a: 255.},
      RGBA{r: 253., g: 141., b:  60., a: 255.},
      RGBA{r: 252., g:  78., b:  42., a: 255.},
      RGBA{r: 227., g:  26., b:  28., a: 255.},
      RGBA{r: 189., g:   0., b:  38., a: 255.},
      RGBA{r: 128., g:   0., b:  38., a: 255.},
    ]};
}

lazy_static! {
  pub(crate) static ref ALL_PALETTES: [&'static PaletteData; 7] = [
    &*BLUES, &*GREENS, &*GREYS, &*ORANGES, &*PURPLES, &*REDS, &*YLORRD];
}
