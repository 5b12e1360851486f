// Color a ranked series read from an Hjson file, e.g.
//
//     [
//       { label: "Peru", value: 0.31 }
//       ["South Korea", 0.12]
//     ]
//
// Prints one "label<TAB>value<TAB>color" line per charted entry and,
// with --html, writes a bar chart of the colors.

use std::{string::String,
          fs::File,
          io::{self, BufWriter, prelude::*},
          path::PathBuf};
use anyhow::{anyhow, bail, Context, Result};
use clap::Parser;
use rank_palette::{css, select_top_k_with_forced, Colorizer, Entry,
                   Highlight, Palette, RankedSeries, RGB8, Sampling};
use serde_hjson::Value::{self, *};

#[derive(Parser, Debug)]
#[command(name = "rank-colors")]
#[command(version, about = "Color the top entries of a series, highlighting one")]
struct Args {
    /// Hjson file holding an array of { label, value } or [label, value]
    input: PathBuf,

    /// Number of top entries to chart (default: all)
    #[arg(short = 'k', long)]
    top: Option<usize>,

    /// Label to append after the top entries when it is not among them
    #[arg(short, long)]
    force: Option<String>,

    /// Built-in palette (blues, greens, greys, oranges, purples, reds, ylorrd)
    #[arg(short, long, default_value = "blues")]
    palette: String,

    /// Shade from the light end of the palette instead of the dark one
    #[arg(short, long)]
    reverse: bool,

    /// Color of the highlighted entry, passed as is to the output
    #[arg(long, default_value = "red")]
    highlight_color: String,

    /// Label to highlight (default: the forced label, or the top entry)
    #[arg(long, conflicts_with = "no_highlight")]
    highlight: Option<String>,

    /// Do not highlight any entry
    #[arg(long)]
    no_highlight: bool,

    /// Take the palette colors in order instead of stretching them
    #[arg(long)]
    prefix: bool,

    /// Write an HTML bar chart to this file
    #[arg(long)]
    html: Option<PathBuf>,
}

fn number(v: &Value) -> Option<f64> {
    match v {
        I64(i) => Some(*i as f64),
        U64(u) => Some(*u as f64),
        F64(x) => Some(*x),
        _ => None,
    }
}

fn entry(i: usize, v: &Value) -> Result<Entry> {
    let (label, value) = match v {
        Object(m) => (m.get("label"), m.get("value")),
        Array(a) if a.len() == 2 => (a.first(), a.get(1)),
        _ => bail!("item {i}: expected {{ label, value }} or [label, value]"),
    };
    let label = match label {
        Some(String(s)) => s.clone(),
        Some(I64(n)) => n.to_string(),
        Some(U64(n)) => n.to_string(),
        Some(F64(x)) => x.to_string(),
        _ => bail!("item {i}: missing or invalid label"),
    };
    let value = value.and_then(number)
        .ok_or_else(|| anyhow!("item {i} ({label}): missing or invalid value"))?;
    Ok(Entry::new(label, value))
}

fn parse_entries(json: &Value) -> Result<Vec<Entry>> {
    match json {
        Array(items) => items.iter().enumerate()
            .map(|(i, v)| entry(i, v))
            .collect(),
        _ => bail!("expected an array of entries"),
    }
}

/// Escape the characters HTML gives a meaning to in text and attributes.
fn escape(s: &str) -> String {
    let mut e = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => e.push_str("&amp;"),
            '<' => e.push_str("&lt;"),
            '>' => e.push_str("&gt;"),
            '"' => e.push_str("&quot;"),
            _ => e.push(c),
        }
    }
    e
}

fn bar_chart(fh: &mut impl Write, series: &RankedSeries,
             colors: &[String]) -> io::Result<()> {
    let max = series.entries().iter().map(|e| e.value.abs())
        .fold(0., f64::max);
    writeln!(fh, "<table style=\"border: 0px; border-spacing: 4px\">")?;
    for (e, c) in series.entries().iter().zip(colors) {
        let width = if max > 0. { (400. * e.value.abs() / max).round() }
                    else { 0. };
        writeln!(fh, "  <tr><td style=\"text-align: right\">{}</td>\
                      <td><div style=\"width: {width}px; height: 20px; \
                      background-color: {}\"></div></td>\
                      <td>{}</td></tr>",
                 escape(&e.label), escape(c), e.value)?;
    }
    writeln!(fh, "</table>")?;
    Ok(())
}

/// Read `args.input`, color the selected entries and print them to
/// `out`, one "label<TAB>value<TAB>color" line each.
fn run(args: &Args, out: &mut impl Write) -> Result<()> {
    let fh = File::open(&args.input)
        .with_context(|| format!("cannot open {}", args.input.display()))?;
    let json: Value = serde_hjson::from_reader(fh)
        .with_context(|| format!("cannot parse {}", args.input.display()))?;
    let entries = parse_entries(&json)?;
    let k = args.top.unwrap_or(entries.len());
    let series = select_top_k_with_forced(entries, k, args.force.as_deref());

    let mut palette = Palette::<RGB8>::named(&args.palette)?;
    if !args.reverse {
        palette = palette.reversed();
    }
    css::parse(&args.highlight_color)?;
    let highlight = if args.no_highlight { Highlight::Nothing }
        else { Highlight::key(args.highlight.as_deref()
                              .or(args.force.as_deref())) };
    let sampling = if args.prefix { Sampling::Prefix } else { Sampling::Stretch };
    let colors = Colorizer::new(palette.map(css::hex), args.highlight_color.clone())
        .highlight(highlight)
        .sampling(sampling)
        .colorize(&series)?;

    for (e, c) in series.entries().iter().zip(&colors) {
        writeln!(out, "{}\t{}\t{c}", e.label, e.value)?;
    }
    out.flush()?;

    if let Some(path) = &args.html {
        let mut fh = BufWriter::new(File::create(path)
            .with_context(|| format!("cannot create {}", path.display()))?);
        writeln!(fh, "<html>\n<head>\n<title>{}</title>\n</head>\n<body>",
                 escape(&args.input.display().to_string()))?;
        bar_chart(&mut fh, &series, &colors)?;
        writeln!(fh, "</body>\n</html>")?;
        fh.flush()?;
    }
    Ok(())
}

fn main() -> Result<()> {
    run(&Args::parse(), &mut BufWriter::new(io::stdout().lock()))
}
