// File: crates/demo/src/main.rs
// Summary: Demo loads a name/time/amount CSV and renders the small-multiples grid to SVG and PNG.

use anyhow::{Context, Result};
use chart_core::{ChartElement, Diagnostics, LogDiagnostics, SvgRenderer};
use chart_render_skia::{RasterOptions, SkiaRenderer};
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::Arc;

const DEFAULT_WIDTH: f64 = 900.0;
const COLUMNS: [&str; 3] = ["name", "time", "amount"];

fn main() -> Result<()> {
    env_logger::init();

    let mut args = std::env::args().skip(1);
    let input = args
        .next()
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from(concat!(env!("CARGO_MANIFEST_DIR"), "/data/sample.csv")));
    let width = match args.next() {
        Some(w) => w.parse::<f64>().with_context(|| format!("width '{w}' is not a number"))?,
        None => DEFAULT_WIDTH,
    };
    let out_dir = args.next().map(PathBuf::from).unwrap_or_else(|| PathBuf::from("target/out"));
    log::info!("Using input file: {}", input.display());

    let rows = load_rows(&input).with_context(|| format!("failed to load CSV '{}'", input.display()))?;
    log::info!("Loaded {} rows", rows.len());

    let container = HashMap::from([("text".to_string(), stem(&input).to_string())]);
    let diagnostics: Arc<dyn Diagnostics> = Arc::new(LogDiagnostics);
    let mut element = ChartElement::connect(&container, &rows, Some(diagnostics));
    if element.records().is_empty() {
        log::warn!("no usable records; output will be blank");
    }
    let plan = element
        .on_layout(width)?
        .context("first layout did not render")?;

    std::fs::create_dir_all(&out_dir).with_context(|| format!("creating {}", out_dir.display()))?;
    let out_svg = out_dir.join(format!("multi_{}.svg", stem(&input)));
    std::fs::write(&out_svg, SvgRenderer::default().render_string(plan)?)?;
    log::info!("Wrote {}", out_svg.display());

    let out_png = out_svg.with_extension("png");
    SkiaRenderer::new(RasterOptions::default()).render_to_png(plan, &out_png)?;
    log::info!("Wrote {}", out_png.display());
    Ok(())
}

fn stem(path: &Path) -> &str {
    path.file_stem().and_then(|s| s.to_str()).unwrap_or("chart")
}

/// Read each row into an attribute bag keyed by the lowercase column names
/// the extractor looks for. Other columns are ignored.
fn load_rows(path: &Path) -> Result<Vec<HashMap<String, String>>> {
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(true)
        .trim(csv::Trim::All)
        .flexible(true)
        .from_path(path)
        .with_context(|| format!("opening {}", path.display()))?;

    let headers = rdr.headers()?.iter().map(|h| h.to_lowercase()).collect::<Vec<_>>();
    log::debug!("Headers: {:?}", headers);

    let idx: Vec<(&str, usize)> = COLUMNS
        .iter()
        .filter_map(|want| headers.iter().position(|h| h == want).map(|i| (*want, i)))
        .collect();
    if idx.len() < COLUMNS.len() {
        anyhow::bail!("header must name columns {COLUMNS:?}; found {headers:?}");
    }

    let mut out = Vec::new();
    for rec in rdr.records() {
        let rec = rec?;
        let row = idx
            .iter()
            .filter_map(|&(key, i)| rec.get(i).map(|v| (key.to_string(), v.to_string())))
            .collect::<HashMap<_, _>>();
        out.push(row);
    }
    Ok(out)
}
