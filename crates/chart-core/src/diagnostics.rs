// File: crates/chart-core/src/diagnostics.rs
// Summary: Optional diagnostics sink that receives the records a chart extracted.

use crate::record::Record;

/// Receives the extracted record list once per connect. Implementations must
/// not influence rendering.
pub trait Diagnostics {
    fn trace(&self, component: &str, records: &[Record]);
}

impl<F> Diagnostics for F
where
    F: Fn(&str, &[Record]),
{
    fn trace(&self, component: &str, records: &[Record]) { self(component, records) }
}

/// Reports through the `log` facade: a summary at debug level, each record at trace level.
#[derive(Clone, Copy, Debug, Default)]
pub struct LogDiagnostics;

impl Diagnostics for LogDiagnostics {
    fn trace(&self, component: &str, records: &[Record]) {
        log::debug!(target: "chart_core::diagnostics", "{component}: extracted {} records", records.len());
        for (i, r) in records.iter().enumerate() {
            log::trace!(
                target: "chart_core::diagnostics",
                "{component}[{i}] name={} time={} amount={}",
                r.name, r.time, r.amount
            );
        }
    }
}
