// File: crates/chart-render-skia/build.rs
// Summary: Links the Windows system libraries Skia's font manager and ICU need when targeting Windows.

fn main() {
    println!("cargo:rerun-if-changed=build.rs");
    // Build scripts run on the host; ask Cargo for the target instead of using cfg.
    if std::env::var("CARGO_CFG_TARGET_OS").as_deref() == Ok("windows") {
        // RegOpenKeyExW, RegQueryInfoKeyW, etc.
        println!("cargo:rustc-link-lib=advapi32");
    }
}
