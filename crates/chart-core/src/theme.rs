// File: crates/chart-core/src/theme.rs
// Summary: Colors, the ordinal series palette and built-in theme presets.

use std::collections::HashMap;
use std::fmt;

/// 8-bit RGBA color.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self { Self { r, g, b, a: 255 } }
    pub const fn from_argb(a: u8, r: u8, g: u8, b: u8) -> Self { Self { r, g, b, a } }

    /// Build from a 24-bit `0xRRGGBB` value.
    pub const fn hex(v: u32) -> Self {
        Self::rgb((v >> 16) as u8, (v >> 8) as u8, v as u8)
    }

    /// Parse `#rrggbb` or `rrggbb`.
    pub fn parse_hex(s: &str) -> Option<Self> {
        let s = s.strip_prefix('#').unwrap_or(s);
        if s.len() != 6 { return None; }
        u32::from_str_radix(s, 16).ok().map(Self::hex)
    }
}

impl fmt::Display for Color {
    /// `#rrggbb`; alpha is not printed.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

/// Series palette, in assignment order.
pub const PALETTE: [Color; 9] = [
    Color::hex(0x309fdb),
    Color::hex(0x81bb5f),
    Color::hex(0xed813e),
    Color::hex(0xe85d88),
    Color::hex(0x5a68ad),
    Color::hex(0x42c5d9),
    Color::hex(0x24a475),
    Color::hex(0xd9b13c),
    Color::hex(0x773492),
];

/// Assigns palette colors to keys in the order keys are first looked up,
/// wrapping once the palette is exhausted. The same key always gets the same color.
#[derive(Clone, Debug)]
pub struct OrdinalScale<'p> {
    palette: &'p [Color],
    index: HashMap<String, usize>,
}

impl<'p> OrdinalScale<'p> {
    pub fn new(palette: &'p [Color]) -> Self {
        Self { palette, index: HashMap::new() }
    }

    /// Color for `key`, registering it if unseen. Falls back to black for an empty palette.
    pub fn color(&mut self, key: &str) -> Color {
        if self.palette.is_empty() { return Color::rgb(0, 0, 0); }
        let next = self.index.len();
        let slot = *self.index.entry(key.to_string()).or_insert(next);
        self.palette[slot % self.palette.len()]
    }

    /// Number of distinct keys seen so far.
    pub fn len(&self) -> usize { self.index.len() }

    pub fn is_empty(&self) -> bool { self.index.is_empty() }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Theme {
    pub name: &'static str,
    pub background: Color,
    /// Axis lines, tick marks and tick labels.
    pub axis: Color,
    pub font_family: &'static str,
    pub font_size: f32,
    pub palette: Vec<Color>,
}

impl Theme {
    pub fn light() -> Self {
        Self {
            name: "light",
            background: Color::rgb(255, 255, 255),
            axis: Color::rgb(0, 0, 0),
            font_family: "sans-serif",
            font_size: 10.0,
            palette: PALETTE.to_vec(),
        }
    }

    pub fn dark() -> Self {
        Self {
            name: "dark",
            background: Color::rgb(18, 18, 20),
            axis: Color::rgb(180, 180, 190),
            font_family: "sans-serif",
            font_size: 10.0,
            palette: PALETTE.to_vec(),
        }
    }

    pub fn solarized_light() -> Self {
        Self {
            name: "solarized-light",
            background: Color::hex(0xfdf6e3), // base3
            axis: Color::hex(0x657b83),       // base00
            font_family: "sans-serif",
            font_size: 10.0,
            palette: vec![
                Color::hex(0x268bd2), // blue
                Color::hex(0x859900), // green
                Color::hex(0xcb4b16), // orange
                Color::hex(0xd33682), // magenta
                Color::hex(0x6c71c4), // violet
                Color::hex(0x2aa198), // cyan
                Color::hex(0xb58900), // yellow
                Color::hex(0xdc322f), // red
                Color::hex(0x586e75), // base01
            ],
        }
    }
}

impl Default for Theme {
    fn default() -> Self { Self::light() }
}

/// Return a list of built-in theme presets.
pub fn presets() -> Vec<Theme> {
    vec![Theme::light(), Theme::dark(), Theme::solarized_light()]
}

/// Find a theme by its `name`, falling back to light.
pub fn find(name: &str) -> Theme {
    presets().into_iter().find(|t| t.name.eq_ignore_ascii_case(name)).unwrap_or_default()
}
