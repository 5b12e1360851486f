use std::{env,
          io::{BufWriter, Write},
          fs::File};
use anyhow::Result;
use rank_palette::{css, select_top_k_with_forced, ColorRange, Colorizer,
                   Entry, Palette, RadiusScale, RankedSeries, RGB8, RGBColor,
                   Sampling, ValueScale};

fn swatches(fh: &mut impl Write, colors: &[RGB8], width: u32,
            comment: &str) -> Result<()> {
    writeln!(fh, "<table style=\"border: 0px;  border-spacing: 0px\"><tr>")?;
    for &c in colors {
        writeln!(fh, "  <td style=\"width: {width}px; height: 30px; \
                      background-color: {}\"></td>",
                 css::hex(c))?;
    }
    writeln!(fh, "<td style=\"padding-left: 7px\">{comment}</td></tr>\
                  </table><br/>")?;
    Ok(())
}

fn escape(s: &str) -> String {
    s.replace('&', "&amp;").replace('<', "&lt;").replace('>', "&gt;")
        .replace('"', "&quot;")
}

fn bars(fh: &mut impl Write, series: &RankedSeries, colors: &[RGB8],
        comment: &str) -> Result<()> {
    let max = series.entries().iter().map(|e| e.value).fold(0., f64::max);
    writeln!(fh, "<p>{}</p>\n<table style=\"border-spacing: 2px\">", escape(comment))?;
    for (e, &c) in series.entries().iter().zip(colors) {
        writeln!(fh, "  <tr><td style=\"text-align: right\">{}</td>\
                      <td><div style=\"width: {:.0}px; height: 16px; \
                      background-color: {}\"></div></td></tr>",
                 escape(&e.label), 400. * e.value / max, css::hex(c))?;
    }
    writeln!(fh, "</table>")?;
    Ok(())
}

/// Shares of the 16 types in one country.
fn mbti_shares() -> Vec<Entry> {
    let types = ["INFJ", "INFP", "INTJ", "INTP", "ISFJ", "ISFP", "ISTJ",
                 "ISTP", "ENFJ", "ENFP", "ENTJ", "ENTP", "ESFJ", "ESFP",
                 "ESTJ", "ESTP"];
    let shares = [0.021, 0.117, 0.032, 0.048, 0.042, 0.071, 0.036, 0.034,
                  0.024, 0.138, 0.022, 0.044, 0.052, 0.063, 0.030, 0.026];
    types.into_iter().zip(shares).map(Entry::from).collect()
}

/// Share of one type in several countries.
fn country_shares() -> Vec<Entry> {
    ["Brazil", "Peru", "Chile", "Mexico", "Spain", "Italy", "Greece",
     "Portugal", "Colombia", "Argentina", "France", "Japan", "Germany",
     "South Korea", "Sweden"].into_iter().enumerate()
        .map(|(i, c)| Entry::new(c, 0.19 - 0.008 * i as f64))
        .collect()
}

fn main() -> Result<()> {
    let mut fh = BufWriter::new(File::create("ranked.html")?);
    writeln!(fh, "<html>\n\
                  <head>\n\
                  <title>rank-palette: {}</title>\n\
                  </head>\n\
                  <body>",
             env::args().next().unwrap_or_default())?;
    let red = RGB8::new(255, 0, 0);
    let blues = RGB8::blues().reversed();

    writeln!(fh, "<h3>Top entry highlighted</h3>")?;
    let series = RankedSeries::rank(mbti_shares());
    let colors = Colorizer::new(blues.clone(), red).colorize(&series)?;
    bars(&mut fh, &series, &colors, "Palette stretched over 15 entries")?;

    writeln!(fh, "<h3>Forced entry highlighted</h3>")?;
    let series = select_top_k_with_forced(country_shares(), 10,
                                          Some("South Korea"));
    let colors = Colorizer::new(blues.clone(), red)
        .highlight_label("South Korea")
        .colorize(&series)?;
    bars(&mut fh, &series, &colors, "Top 10, then South Korea")?;

    writeln!(fh, "<h3>Palette taken in order</h3>")?;
    let series = RankedSeries::rank(vec![
        Entry::new("Jamsil", 91_544.), Entry::new("Gangnam", 120_871.),
        Entry::new("Seolleung", 70_112.), Entry::new("Hongik Univ.", 102_310.),
        Entry::new("Sindorim", 84_008.)]);
    let colors = Colorizer::new(blues.clone(), red)
        .sampling(Sampling::Prefix)
        .colorize(&series)?;
    bars(&mut fh, &series, &colors, "Darkest stops only")?;

    writeln!(fh, "<h3>Value scale</h3>")?;
    let damages = [12_000_000., 480_000_000., 2_300_000_000., 95_000_000.];
    let scale = ValueScale::fit(damages,
        RGB8::new(255, 255, 0).linear(&RGB8::new(255, 0, 0)))?;
    let radius = RadiusScale::default();
    for d in damages {
        let c: RGB8 = scale.color(d);
        writeln!(fh, "<span style=\"display: inline-block; \
                      width: {r:.0}px; height: {r:.0}px; border-radius: 50%; \
                      background-color: {}\"></span>",
                 css::hex(c), r = 2. * radius.radius(d))?;
    }
    let legend: Vec<RGB8> = scale.legend(20).map(|(_, c)| c).collect();
    swatches(&mut fh, &legend, 20, "Legend, yellow to red")?;
    let ylorrd = RGB8::ylorrd().gradient();
    let colors: Vec<RGB8> = ylorrd.range(0., 1., 100).map(|(_, c)| c).collect();
    swatches(&mut fh, &colors, 4, "ylorrd (interpolated)")?;

    writeln!(fh, "<h3>Palettes</h3>")?;
    for name in Palette::<RGB8>::names() {
        let p = Palette::<RGB8>::named(name)?;
        swatches(&mut fh, p.colors(), 40, name)?;
    }

    writeln!(fh, "</body>\n\
                  </html>")?;
    fh.flush()?;
    Ok(())
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bar_labels_escaped() -> Result<()> {
        let series = RankedSeries::rank(vec![Entry::new("<b>A</b> & B", 2.),
                                             Entry::new("C", 1.)]);
        let colors = Colorizer::new(RGB8::blues().reversed(), RGB8::new(255, 0, 0))
            .colorize(&series)?;
        let mut html = Vec::new();
        bars(&mut html, &series, &colors, "a < b")?;
        let html = String::from_utf8(html)?;
        assert!(!html.contains("<b>"), "{html}");
        assert!(html.contains("&lt;b&gt;A&lt;/b&gt; &amp; B"), "{html}");
        assert!(html.contains("<p>a &lt; b</p>"), "{html}");
        Ok(())
    }
}
