//! Output path templates.
//!
//! Users write destination layouts with percent symbols, e.g.
//! `dist/%Y/%m/%d-%H%M%S`. [`OutputTemplate::parse`] splits such a string
//! into literal text and date fields once per run; [`OutputTemplate::render`]
//! fills in the fields for each photo.
//!
//! | Symbol | Renders as |
//! |--------|------------|
//! | `%y`   | 4-digit year (`2023`) |
//! | `%Y`   | 2-digit year (`23`) |
//! | `%m`   | month, `01`-`12` |
//! | `%d`   | day, `01`-`31` |
//! | `%H`   | hour, `00`-`23` |
//! | `%M`   | minute |
//! | `%S`   | second |
//!
//! The two year symbols are swapped relative to strftime.

use chrono::NaiveDateTime;
use regex::Regex;
use std::sync::LazyLock;

static SYMBOL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"%[yYmdHMS]").expect("Invalid regex for template symbols"));

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DateField {
    Year,
    ShortYear,
    Month,
    Day,
    Hour,
    Minute,
    Second,
}

impl DateField {
    fn from_symbol(symbol: &str) -> Option<Self> {
        match symbol {
            "%y" => Some(DateField::Year),
            "%Y" => Some(DateField::ShortYear),
            "%m" => Some(DateField::Month),
            "%d" => Some(DateField::Day),
            "%H" => Some(DateField::Hour),
            "%M" => Some(DateField::Minute),
            "%S" => Some(DateField::Second),
            _ => None,
        }
    }

    /// chrono format item for this field.
    fn chrono_format(self) -> &'static str {
        match self {
            DateField::Year => "%Y",
            DateField::ShortYear => "%y",
            DateField::Month => "%m",
            DateField::Day => "%d",
            DateField::Hour => "%H",
            DateField::Minute => "%M",
            DateField::Second => "%S",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Segment {
    Literal(String),
    Field(DateField),
}

/// A translated output path template. Immutable once parsed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputTemplate {
    segments: Vec<Segment>,
}

impl OutputTemplate {
    /// Translate a user pattern. Never fails: text that is not one of the
    /// recognized symbols is kept as a literal, including other `%` sequences.
    pub fn parse(pattern: &str) -> Self {
        let mut segments = Vec::new();
        let mut last = 0;
        for m in SYMBOL.find_iter(pattern) {
            if m.start() > last {
                segments.push(Segment::Literal(pattern[last..m.start()].to_string()));
            }
            if let Some(field) = DateField::from_symbol(m.as_str()) {
                segments.push(Segment::Field(field));
            }
            last = m.end();
        }
        if last < pattern.len() {
            segments.push(Segment::Literal(pattern[last..].to_string()));
        }
        OutputTemplate { segments }
    }

    pub fn render(&self, ts: &NaiveDateTime) -> String {
        let mut out = String::new();
        for segment in &self.segments {
            match segment {
                Segment::Literal(text) => out.push_str(text),
                Segment::Field(field) => out.push_str(&ts.format(field.chrono_format()).to_string()),
            }
        }
        out
    }
}
