// File: crates/chart-core/src/record.rs
// Summary: Data records and the extractor that scrapes them from child attribute bags.

use std::collections::{BTreeMap, HashMap};

/// One sample of a named series.
#[derive(Clone, Debug, PartialEq)]
pub struct Record {
    pub name: String,
    /// Unix seconds.
    pub time: i64,
    pub amount: f64,
}

impl Record {
    pub fn new(name: impl Into<String>, time: i64, amount: f64) -> Self {
        Self { name: name.into(), time, amount }
    }
}

/// String-valued attribute lookup, the shape of a child element's attributes.
pub trait AttributeBag {
    fn attribute(&self, key: &str) -> Option<&str>;
}

impl AttributeBag for HashMap<String, String> {
    fn attribute(&self, key: &str) -> Option<&str> { self.get(key).map(String::as_str) }
}

impl AttributeBag for BTreeMap<String, String> {
    fn attribute(&self, key: &str) -> Option<&str> { self.get(key).map(String::as_str) }
}

impl AttributeBag for [(&str, &str)] {
    fn attribute(&self, key: &str) -> Option<&str> {
        self.iter().find(|(k, _)| *k == key).map(|(_, v)| *v)
    }
}

impl<const N: usize> AttributeBag for [(&str, &str); N] {
    fn attribute(&self, key: &str) -> Option<&str> { self.as_slice().attribute(key) }
}

impl<T: AttributeBag + ?Sized> AttributeBag for &T {
    fn attribute(&self, key: &str) -> Option<&str> { (**self).attribute(key) }
}

/// Build records from child attribute bags, keeping input order.
///
/// A child is kept only when `name` is non-empty and both `time` and `amount`
/// parse to non-zero integers. Everything else is dropped without error, so a
/// literal zero reads the same as a missing value.
pub fn extract<I>(children: I) -> Vec<Record>
where
    I: IntoIterator,
    I::Item: AttributeBag,
{
    children.into_iter().filter_map(|child| extract_one(&child)).collect()
}

fn extract_one(child: &impl AttributeBag) -> Option<Record> {
    let name = child.attribute("name").filter(|n| !n.is_empty())?;
    let time = child.attribute("time").and_then(parse_int_prefix).filter(|t| *t != 0)?;
    let amount = child.attribute("amount").and_then(parse_int_prefix).filter(|a| *a != 0)?;
    Some(Record { name: name.to_string(), time, amount: amount as f64 })
}

/// Parse the leading base-10 integer of `s`.
///
/// Leading whitespace and a single sign are accepted, parsing stops at the
/// first non-digit (`"12.5"` is 12, `"7px"` is 7). Returns `None` when no digit
/// follows or the value does not fit in an `i64`.
pub fn parse_int_prefix(s: &str) -> Option<i64> {
    let s = s.trim_start();
    let (negative, rest) = match s.as_bytes().first() {
        Some(b'-') => (true, &s[1..]),
        Some(b'+') => (false, &s[1..]),
        _ => (false, s),
    };
    let digits = rest.bytes().take_while(u8::is_ascii_digit).count();
    if digits == 0 {
        return None;
    }
    let mut value: i64 = 0;
    for b in rest[..digits].bytes() {
        let d = i64::from(b - b'0');
        value = value.checked_mul(10)?;
        value = if negative { value.checked_sub(d)? } else { value.checked_add(d)? };
    }
    Some(value)
}
