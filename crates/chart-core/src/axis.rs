// File: crates/chart-core/src/axis.rs
// Summary: Axis model with labels, ranges and tick label styling.

/// Horizontal anchor of a tick label relative to its tick.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TickAnchor {
    Center,
    Right,
}

/// How numeric tick values are printed.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TickFormat {
    /// `150000`, `0.5`
    Plain,
    /// `150,000`
    Grouped,
}

impl TickFormat {
    pub fn format(&self, v: f64) -> String {
        let plain = format_plain(v);
        match self {
            TickFormat::Plain => plain,
            TickFormat::Grouped => group_thousands(&plain),
        }
    }
}

#[derive(Clone, Debug)]
pub struct Axis {
    pub label: String,
    pub min: f64,
    pub max: f64,
    /// Tick label rotation in degrees, counter-clockwise.
    pub tick_rotation: f32,
    pub tick_anchor: TickAnchor,
    pub tick_format: TickFormat,
}

impl Axis {
    pub fn new(label: impl Into<String>, min: f64, max: f64) -> Self {
        Self {
            label: label.into(),
            min,
            max,
            tick_rotation: 0.0,
            tick_anchor: TickAnchor::Center,
            tick_format: TickFormat::Plain,
        }
    }

    pub fn with_tick_rotation(mut self, degrees: f32, anchor: TickAnchor) -> Self {
        self.tick_rotation = degrees;
        self.tick_anchor = anchor;
        self
    }

    pub fn default_x() -> Self { Self::new("", 0.0, 1.0) }

    pub fn default_y() -> Self { Self::new("", 0.0, 1.0) }
}

/// Shortest decimal representation, dropping a trailing `.0`.
fn format_plain(v: f64) -> String {
    if v == 0.0 {
        return "0".to_string();
    }
    if v.fract().abs() < 1e-9 && v.abs() < 1e15 {
        return format!("{}", v.round() as i64);
    }
    let s = format!("{:.6}", v);
    s.trim_end_matches('0').trim_end_matches('.').to_string()
}

fn group_thousands(plain: &str) -> String {
    let (sign, rest) = match plain.strip_prefix('-') {
        Some(r) => ("-", r),
        None => ("", plain),
    };
    let (int_part, frac_part) = match rest.split_once('.') {
        Some((i, f)) => (i, Some(f)),
        None => (rest, None),
    };
    let mut grouped = String::with_capacity(int_part.len() + int_part.len() / 3);
    for (i, ch) in int_part.chars().enumerate() {
        if i > 0 && (int_part.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    match frac_part {
        Some(f) => format!("{sign}{grouped}.{f}"),
        None => format!("{sign}{grouped}"),
    }
}
