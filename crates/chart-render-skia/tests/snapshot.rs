// File: crates/chart-render-skia/tests/snapshot.rs
// Purpose: Golden raster snapshot with bless flow.
// Behavior:
// - Renders a deterministic small grid to PNG bytes (labels off).
// - If env UPDATE_SNAPSHOTS=1, (re)writes the snapshot file.
// - Else, if snapshot exists, compares decoded pixels for exact match.
// - Else, logs a note and returns (skips) without failing to ease first run.

use chart_core::{render, Record};
use chart_render_skia::{RasterOptions, SkiaRenderer};

fn render_bytes() -> Vec<u8> {
    let records = vec![
        Record::new("cpu", 1000, 10.0),
        Record::new("cpu", 2000, 30.0),
        Record::new("mem", 1000, 5.0),
        Record::new("mem", 1500, 20.0),
        Record::new("disk", 2000, 12.0),
    ];
    let plan = render(&records, 900.0).expect("plan");
    let opts = RasterOptions { draw_labels: false, ..RasterOptions::default() }; // avoid text nondeterminism across platforms
    SkiaRenderer::new(opts).render_to_png_bytes(&plan).expect("render bytes")
}

#[test]
fn golden_three_panels() {
    let bytes = render_bytes();
    let snap_dir = std::path::PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests/__snapshots__");
    let snap_path = snap_dir.join("three_panels.png");

    let update = std::env::var("UPDATE_SNAPSHOTS").ok().map(|v| v == "1" || v.eq_ignore_ascii_case("true"))
        .unwrap_or(false);

    if update {
        std::fs::create_dir_all(&snap_dir).expect("create snapshots dir");
        std::fs::write(&snap_path, &bytes).expect("write snapshot");
        eprintln!("[snapshot] Updated {} ({} bytes)", snap_path.display(), bytes.len());
        return;
    }

    if snap_path.exists() {
        let want = std::fs::read(&snap_path).expect("read snapshot");
        // Compare decoded pixel buffers to avoid PNG encoder variance
        let got_img = image::load_from_memory(&bytes).expect("decode got").to_rgba8();
        let want_img = image::load_from_memory(&want).expect("decode want").to_rgba8();
        assert_eq!(got_img.as_raw(), want_img.as_raw(), "rendered pixels differ from golden snapshot: {}", snap_path.display());
    } else {
        eprintln!("[snapshot] Missing snapshot {}; set UPDATE_SNAPSHOTS=1 to bless.", snap_path.display());
    }
}
