// File: crates/chart-core/src/time.rs
// Summary: Calendar-aligned tick intervals and multi-scale tick labels for time axes (UTC).

use chrono::{DateTime, Datelike, Days, NaiveDate, Timelike, Utc, Weekday};

use crate::grid::tick_step;

const MS_SECOND: i64 = 1_000;
const MS_MINUTE: i64 = 60 * MS_SECOND;
const MS_HOUR: i64 = 60 * MS_MINUTE;
const MS_DAY: i64 = 24 * MS_HOUR;
const MS_WEEK: i64 = 7 * MS_DAY;
const MS_MONTH: i64 = 30 * MS_DAY;
const MS_YEAR: i64 = 365 * MS_DAY;
/// Largest instant a tick may sit on: 100,000,000 days either side of the epoch.
pub const MAX_TICK_MS: f64 = 8.64e15;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TimeUnit {
    Millisecond,
    Second,
    Minute,
    Hour,
    Day,
    Week,
    Month,
    Year,
}

/// A unit plus a stride; `Day` with step 2 keeps days 1, 3, 5, ... of each month.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TimeInterval {
    pub unit: TimeUnit,
    pub step: i64,
}

const TICK_INTERVALS: [(TimeUnit, i64, i64); 18] = [
    (TimeUnit::Second, 1, MS_SECOND),
    (TimeUnit::Second, 5, 5 * MS_SECOND),
    (TimeUnit::Second, 15, 15 * MS_SECOND),
    (TimeUnit::Second, 30, 30 * MS_SECOND),
    (TimeUnit::Minute, 1, MS_MINUTE),
    (TimeUnit::Minute, 5, 5 * MS_MINUTE),
    (TimeUnit::Minute, 15, 15 * MS_MINUTE),
    (TimeUnit::Minute, 30, 30 * MS_MINUTE),
    (TimeUnit::Hour, 1, MS_HOUR),
    (TimeUnit::Hour, 3, 3 * MS_HOUR),
    (TimeUnit::Hour, 6, 6 * MS_HOUR),
    (TimeUnit::Hour, 12, 12 * MS_HOUR),
    (TimeUnit::Day, 1, MS_DAY),
    (TimeUnit::Day, 2, 2 * MS_DAY),
    (TimeUnit::Week, 1, MS_WEEK),
    (TimeUnit::Month, 1, MS_MONTH),
    (TimeUnit::Month, 3, 3 * MS_MONTH),
    (TimeUnit::Year, 1, MS_YEAR),
];

impl TimeInterval {
    pub const fn new(unit: TimeUnit, step: i64) -> Self {
        Self { unit, step }
    }

    /// Interval whose spacing best matches `(stop - start) / count`, both in epoch ms.
    pub fn for_span(start: f64, stop: f64, count: usize) -> Option<Self> {
        let target = (stop - start).abs() / count as f64;
        let i = TICK_INTERVALS.partition_point(|&(_, _, dur)| (dur as f64) <= target);
        let interval = if i == TICK_INTERVALS.len() {
            let step = tick_step(start / MS_YEAR as f64, stop / MS_YEAR as f64, count);
            Self::new(TimeUnit::Year, step.abs().floor() as i64)
        } else if i == 0 {
            let step = tick_step(start, stop, count).abs().max(1.0);
            Self::new(TimeUnit::Millisecond, step.floor() as i64)
        } else {
            let (_, _, lo) = TICK_INTERVALS[i - 1];
            let (_, _, hi) = TICK_INTERVALS[i];
            let pick = if target / (lo as f64) < (hi as f64) / target { i - 1 } else { i };
            let (unit, step, _) = TICK_INTERVALS[pick];
            Self::new(unit, step)
        };
        (interval.step > 0).then_some(interval)
    }

    /// Boundaries of this interval in `[start, stop)`, epoch ms.
    pub fn range(&self, start: i64, stop: i64) -> Vec<i64> {
        match self.unit {
            TimeUnit::Millisecond => fixed_range(start, stop, self.step),
            TimeUnit::Second => fixed_range(start, stop, self.step * MS_SECOND),
            TimeUnit::Minute => fixed_range(start, stop, self.step * MS_MINUTE),
            TimeUnit::Hour => fixed_range(start, stop, self.step * MS_HOUR),
            TimeUnit::Day => {
                let step = self.step;
                calendar_range(start, stop, first_day_on_or_after, |d| d.succ_opt(), |d| (d.day0() as i64) % step == 0)
            }
            TimeUnit::Week => calendar_range(start, stop, first_sunday_on_or_after, |d| d.checked_add_days(Days::new(7)), |_| true),
            TimeUnit::Month => {
                let step = self.step;
                calendar_range(start, stop, first_month_on_or_after, next_month, |d| (d.month0() as i64) % step == 0)
            }
            TimeUnit::Year => year_range(start, stop, self.step),
        }
    }
}

/// Tick times for a time domain given in epoch ms. A reversed domain yields
/// descending ticks; an empty domain yields none. Only the part of the domain
/// within `±MAX_TICK_MS` gets ticks.
pub fn time_ticks(start: f64, stop: f64, count: usize) -> Vec<i64> {
    if count == 0 || !start.is_finite() || !stop.is_finite() { return Vec::new(); }
    let reverse = stop < start;
    let (lo, hi) = if reverse { (stop, start) } else { (start, stop) };
    let (lo, hi) = (lo.max(-MAX_TICK_MS), hi.min(MAX_TICK_MS));
    if lo > hi { return Vec::new(); }
    let Some(interval) = TimeInterval::for_span(lo, hi, count) else { return Vec::new(); };
    let mut out = interval.range(lo.ceil() as i64, hi.floor() as i64 + 1);
    if reverse { out.reverse(); }
    out
}

fn fixed_range(start: i64, stop: i64, stride: i64) -> Vec<i64> {
    if stride <= 0 { return Vec::new(); }
    let Some(mut t) = start.div_euclid(stride).checked_mul(stride) else { return Vec::new() };
    if t < start {
        let Some(next) = t.checked_add(stride) else { return Vec::new() };
        t = next;
    }
    let mut out = Vec::new();
    while t < stop {
        out.push(t);
        let Some(next) = t.checked_add(stride) else { break };
        t = next;
    }
    out
}

fn to_datetime(ms: i64) -> Option<DateTime<Utc>> {
    DateTime::<Utc>::from_timestamp_millis(ms)
}

fn midnight_ms(d: NaiveDate) -> Option<i64> {
    Some(d.and_hms_opt(0, 0, 0)?.and_utc().timestamp_millis())
}

fn first_day_on_or_after(ms: i64) -> Option<NaiveDate> {
    let dt = to_datetime(ms)?;
    let d = dt.date_naive();
    if midnight_ms(d)? < ms { d.succ_opt() } else { Some(d) }
}

fn first_sunday_on_or_after(ms: i64) -> Option<NaiveDate> {
    let mut d = first_day_on_or_after(ms)?;
    while d.weekday() != Weekday::Sun {
        d = d.succ_opt()?;
    }
    Some(d)
}

fn first_month_on_or_after(ms: i64) -> Option<NaiveDate> {
    let d = first_day_on_or_after(ms)?;
    if d.day() == 1 { Some(d) } else { next_month(d) }
}

fn next_month(d: NaiveDate) -> Option<NaiveDate> {
    let (y, m) = if d.month() == 12 { (d.year() + 1, 1) } else { (d.year(), d.month() + 1) };
    NaiveDate::from_ymd_opt(y, m, 1)
}

fn calendar_range(
    start: i64,
    stop: i64,
    first: impl Fn(i64) -> Option<NaiveDate>,
    next: impl Fn(NaiveDate) -> Option<NaiveDate>,
    keep: impl Fn(NaiveDate) -> bool,
) -> Vec<i64> {
    let mut out = Vec::new();
    let mut cur = first(start);
    while let Some(d) = cur {
        let Some(ms) = midnight_ms(d) else { break };
        if ms >= stop { break; }
        if keep(d) { out.push(ms); }
        cur = next(d);
    }
    out
}

fn year_range(start: i64, stop: i64, step: i64) -> Vec<i64> {
    let Some(first) = first_day_on_or_after(start) else { return Vec::new(); };
    let mut year = i64::from(first.year());
    if first.ordinal() != 1 { year += 1; }
    year = year.div_euclid(step) * step + if year.rem_euclid(step) == 0 { 0 } else { step };
    let mut out = Vec::new();
    while let Some(ms) = i32::try_from(year).ok().and_then(|y| NaiveDate::from_ymd_opt(y, 1, 1)).and_then(midnight_ms) {
        if ms >= stop { break; }
        out.push(ms);
        year += step;
    }
    out
}

/// Label a tick by the coarsest calendar boundary it sits on: `.000` for
/// sub-second ticks, `:SS`, `HH:MM`, `HH AM`, `Www DD`, `Mmm DD`, month name
/// or year.
pub fn format_tick(ms: i64) -> String {
    let Some(dt) = to_datetime(ms) else { return ms.to_string() };
    let date = dt.date_naive();
    let fmt = if dt.timestamp_subsec_millis() != 0 {
        "%.3f"
    } else if dt.second() != 0 {
        ":%S"
    } else if dt.minute() != 0 {
        "%I:%M"
    } else if dt.hour() != 0 {
        "%I %p"
    } else if date.day() != 1 {
        if date.weekday() != Weekday::Sun { "%a %d" } else { "%b %d" }
    } else if date.month() != 1 {
        "%B"
    } else {
        "%Y"
    };
    dt.format(fmt).to_string()
}
