// File: crates/chart-examples/src/bin/themes.rs
// Summary: Minimal example that renders the same small-multiples grid once per theme preset to SVG.

use anyhow::Result;
use chart_core::theme::presets;
use chart_core::{Chart, PlanOptions, Record, SvgRenderer};

fn main() -> Result<()> {
    // Three short series, five samples each, one minute apart
    let mut records = Vec::new();
    for (name, base) in [("api", 12.0), ("db", 30.0), ("cache", 4.0)] {
        for (i, bump) in [1.0, 3.0, 2.0, 5.0, 4.0].into_iter().enumerate() {
            records.push(Record::new(name, 1_600_000_000 + 60 * i as i64, base + bump));
        }
    }

    let out_dir = std::path::PathBuf::from("target/out");
    std::fs::create_dir_all(&out_dir)?;
    for theme in presets() {
        let name = theme.name;
        let chart = Chart::with_options(PlanOptions { theme, ..PlanOptions::default() });
        let plan = chart.plan(&records, 720.0)?;
        let out = out_dir.join(format!("example_{name}.svg"));
        std::fs::write(&out, SvgRenderer::default().render_string(&plan)?)?;
        println!("Wrote {}", out.display());
    }
    Ok(())
}
