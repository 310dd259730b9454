// File: crates/chart-dioxus/src/bin/desktop_demo.rs
// Purpose: Minimal launcher for the Dioxus desktop MultiSeriesChart demo.

fn main() {
    if let Err(e) = chart_dioxus::run_demo_ui() {
        eprintln!("chart-dioxus demo error: {e}");
    }
}
