// File: crates/chart-core/src/grid.rs
// Summary: Nice tick steps and tick positions for linear domains.

const E10: f64 = 7.0710678118654755; // sqrt(50)
const E5: f64 = 3.1622776601683795; // sqrt(10)
const E2: f64 = 1.4142135623730951; // sqrt(2)

/// Integer tick indices plus increment. A negative `inc` means ticks are
/// `i / -inc`, which keeps sub-unit steps free of float drift.
#[derive(Clone, Copy, Debug, PartialEq)]
struct TickSpec {
    i1: f64,
    i2: f64,
    inc: f64,
}

fn tick_spec(start: f64, stop: f64, count: f64) -> TickSpec {
    let step = (stop - start) / count.max(0.0);
    let power = step.log10().floor();
    let error = step / 10f64.powf(power);
    let factor = if error >= E10 { 10.0 } else if error >= E5 { 5.0 } else if error >= E2 { 2.0 } else { 1.0 };
    let (mut i1, mut i2, inc);
    if power < 0.0 {
        let inv = 10f64.powf(-power) / factor;
        i1 = (start * inv).round();
        i2 = (stop * inv).round();
        if i1 / inv < start { i1 += 1.0; }
        if i2 / inv > stop { i2 -= 1.0; }
        inc = -inv;
    } else {
        inc = 10f64.powf(power) * factor;
        i1 = (start / inc).round();
        i2 = (stop / inc).round();
        if i1 * inc < start { i1 += 1.0; }
        if i2 * inc > stop { i2 -= 1.0; }
    }
    if i2 < i1 && (0.5..2.0).contains(&count) {
        return tick_spec(start, stop, count * 2.0);
    }
    TickSpec { i1, i2, inc }
}

/// Roughly `count` evenly spaced, human-friendly values inside `[start, stop]`.
/// Steps are 1, 2 or 5 times a power of ten. Reversed domains yield
/// descending ticks.
pub fn ticks(start: f64, stop: f64, count: usize) -> Vec<f64> {
    if count == 0 || !start.is_finite() || !stop.is_finite() { return Vec::new(); }
    let count = count as f64;
    if start == stop { return vec![start]; }
    let reverse = stop < start;
    let TickSpec { i1, i2, inc } = if reverse { tick_spec(stop, start, count) } else { tick_spec(start, stop, count) };
    if !(i2 >= i1) { return Vec::new(); }
    let n = (i2 - i1) as usize + 1;
    let value = |i: f64| if inc < 0.0 { i / -inc } else { i * inc };
    (0..n)
        .map(|k| if reverse { value(i2 - k as f64) } else { value(i1 + k as f64) })
        .collect()
}

/// Signed increment between ticks; negative values are inverted steps (`-10` means 0.1).
pub fn tick_increment(start: f64, stop: f64, count: usize) -> f64 {
    tick_spec(start, stop, count as f64).inc
}

/// Absolute distance between adjacent ticks for the given domain.
pub fn tick_step(start: f64, stop: f64, count: usize) -> f64 {
    let reverse = stop < start;
    let inc = if reverse { tick_increment(stop, start, count) } else { tick_increment(start, stop, count) };
    let step = if inc < 0.0 { 1.0 / -inc } else { inc };
    if reverse { -step } else { step }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn single_tick_over_thirty() {
        assert_eq!(ticks(0.0, 30.0, 1), vec![0.0, 20.0]);
    }

    #[test]
    fn ten_ticks_unit_domain() {
        let t = ticks(0.0, 1.0, 10);
        assert_eq!(t.len(), 11);
        assert_eq!(t[3], 0.3);
        assert_eq!(t[10], 1.0);
    }

    #[test]
    fn reversed_and_degenerate() {
        assert_eq!(ticks(10.0, 0.0, 2), vec![10.0, 5.0, 0.0]);
        assert_eq!(ticks(4.0, 4.0, 5), vec![4.0]);
        assert!(ticks(0.0, 1.0, 0).is_empty());
    }

    #[test]
    fn steps() {
        assert_eq!(tick_step(0.0, 30.0, 1), 20.0);
        assert_eq!(tick_step(0.0, 1.0, 10), 0.1);
        assert_eq!(tick_step(100.0, 0.0, 5), -20.0);
    }
}
