//! Field access for records shown in list screens.
//!
//! The engine never knows the concrete record type. Anything implementing
//! [`Fields`] can be searched, filtered and sorted by field name.

use std::borrow::Cow;
use std::cmp::Ordering;
use std::fmt::{Display, Formatter};

use chrono::{DateTime, NaiveDate, NaiveDateTime, Timelike};
use serde_json::{Map, Value};

const DATE_TIME_FORMATS: &[&str] = &[
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%d %H:%M:%S",
];

/// Value of one field of a record.
#[derive(Clone, Debug, PartialEq)]
pub enum FieldValue<'a> {
    Text(Cow<'a, str>),
    /// Whole numbers, kept exact beyond the `f64` mantissa.
    Integer(i128),
    Number(f64),
    Bool(bool),
    Date(NaiveDateTime),
}

impl<'a> FieldValue<'a> {
    /// Builds a text value from borrowed or owned string data.
    pub fn text(value: impl Into<Cow<'a, str>>) -> Self {
        FieldValue::Text(value.into())
    }

    /// Textual form used for search and filter matching.
    pub fn as_text(&self) -> Cow<'_, str> {
        match self {
            FieldValue::Text(text) => Cow::Borrowed(&**text),
            other => Cow::Owned(other.to_string()),
        }
    }

    /// Chronological reading of the value, if it has one.
    ///
    /// Text is accepted when it parses as an RFC 3339 timestamp, an ISO
    /// date-time or a plain `YYYY-MM-DD` date.
    pub fn as_date(&self) -> Option<NaiveDateTime> {
        match self {
            FieldValue::Date(date) => Some(*date),
            FieldValue::Text(text) => parse_date_like(text),
            _ => None,
        }
    }

    fn is_numeric(&self) -> bool {
        matches!(self, FieldValue::Integer(_) | FieldValue::Number(_))
    }
}

impl Display for FieldValue<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            FieldValue::Text(text) => write!(f, "{text}"),
            FieldValue::Integer(number) => write!(f, "{number}"),
            FieldValue::Number(number) => write!(f, "{number}"),
            FieldValue::Bool(flag) => write!(f, "{flag}"),
            FieldValue::Date(date)
                if date.time().num_seconds_from_midnight() == 0 && date.nanosecond() == 0 =>
            {
                write!(f, "{}", date.format("%Y-%m-%d"))
            }
            FieldValue::Date(date) => write!(f, "{}", date.format("%Y-%m-%dT%H:%M:%S")),
        }
    }
}

/// How the values of one field are compared when a collection is sorted.
///
/// The collation is chosen once for the whole field so that every pair of
/// values is compared the same way.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Collation {
    Numeric,
    Chronological,
    Boolean,
    /// Textual forms compared lexicographically; used for mixed fields.
    Lexicographic,
}

impl Collation {
    /// Picks the collation every present value supports.
    ///
    /// Numbers compare numerically, dates (and text that reads as a date)
    /// chronologically and booleans as `false < true`. As soon as the values
    /// disagree the whole field falls back to text.
    pub fn detect<'a, 'v, I>(values: I) -> Self
    where
        'v: 'a,
        I: IntoIterator<Item = &'a FieldValue<'v>>,
    {
        let mut numeric = true;
        let mut chronological = true;
        let mut boolean = true;

        for value in values {
            numeric &= value.is_numeric();
            boolean &= matches!(value, FieldValue::Bool(_));
            chronological = chronological && value.as_date().is_some();
            if !(numeric || chronological || boolean) {
                return Collation::Lexicographic;
            }
        }

        if numeric {
            Collation::Numeric
        } else if chronological {
            Collation::Chronological
        } else if boolean {
            Collation::Boolean
        } else {
            Collation::Lexicographic
        }
    }

    /// Owned sort key of `value` under this collation.
    pub fn key(self, value: &FieldValue<'_>) -> SortKey {
        match (self, value) {
            (Collation::Numeric, FieldValue::Integer(number)) => SortKey::Integer(*number),
            (Collation::Numeric, FieldValue::Number(number)) => SortKey::Float(*number),
            (Collation::Boolean, FieldValue::Bool(flag)) => SortKey::Bool(*flag),
            (Collation::Chronological, value) => match value.as_date() {
                Some(date) => SortKey::Date(date),
                None => SortKey::Text(value.as_text().into_owned()),
            },
            (_, value) => SortKey::Text(value.as_text().into_owned()),
        }
    }
}

/// Comparable form of a field value, detached from the record.
///
/// Keys of different kinds order numbers first, then dates, booleans and
/// text, so any mix of keys still forms a total order.
#[derive(Clone, Debug)]
pub enum SortKey {
    Integer(i128),
    Float(f64),
    Date(NaiveDateTime),
    Bool(bool),
    Text(String),
}

impl SortKey {
    fn rank(&self) -> u8 {
        match self {
            SortKey::Integer(_) | SortKey::Float(_) => 0,
            SortKey::Date(_) => 1,
            SortKey::Bool(_) => 2,
            SortKey::Text(_) => 3,
        }
    }
}

impl Ord for SortKey {
    fn cmp(&self, other: &Self) -> Ordering {
        match (self, other) {
            (SortKey::Integer(x), SortKey::Integer(y)) => x.cmp(y),
            (SortKey::Float(x), SortKey::Float(y)) => compare_floats(*x, *y),
            (SortKey::Integer(x), SortKey::Float(y)) => compare_integer_float(*x, *y),
            (SortKey::Float(x), SortKey::Integer(y)) => compare_integer_float(*y, *x).reverse(),
            (SortKey::Date(x), SortKey::Date(y)) => x.cmp(y),
            (SortKey::Bool(x), SortKey::Bool(y)) => x.cmp(y),
            (SortKey::Text(x), SortKey::Text(y)) => x.cmp(y),
            _ => self.rank().cmp(&other.rank()),
        }
    }
}

impl PartialOrd for SortKey {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for SortKey {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for SortKey {}

// NaN sorts above every number; `-0.0` equals `0.0`.
fn compare_floats(x: f64, y: f64) -> Ordering {
    match (x.is_nan(), y.is_nan()) {
        (true, true) => Ordering::Equal,
        (true, false) => Ordering::Greater,
        (false, true) => Ordering::Less,
        (false, false) => x.partial_cmp(&y).unwrap_or(Ordering::Equal),
    }
}

// Exact comparison; casting the integer to `f64` would merge neighbours above 2^53.
fn compare_integer_float(x: i128, y: f64) -> Ordering {
    if y.is_nan() {
        return Ordering::Less;
    }
    let whole = y.trunc();
    // Saturates for infinities and values outside the i128 range.
    let truncated = whole as i128;
    match x.cmp(&truncated) {
        Ordering::Equal => 0.0_f64.partial_cmp(&(y - whole)).unwrap_or(Ordering::Equal),
        ordering => ordering,
    }
}

/// Parses strings that look like dates or timestamps.
pub fn parse_date_like(value: &str) -> Option<NaiveDateTime> {
    let value = value.trim();
    if let Ok(parsed) = DateTime::parse_from_rfc3339(value) {
        return Some(parsed.naive_utc());
    }
    for format in DATE_TIME_FORMATS {
        if let Ok(parsed) = NaiveDateTime::parse_from_str(value, format) {
            return Some(parsed);
        }
    }
    NaiveDate::parse_from_str(value, "%Y-%m-%d")
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
}

/// Read access to named fields of a record.
///
/// Returning `None` means the record has no such field; callers treat that as
/// a non-match rather than an error.
pub trait Fields {
    fn field(&self, name: &str) -> Option<FieldValue<'_>>;
}

impl<T: Fields + ?Sized> Fields for &T {
    fn field(&self, name: &str) -> Option<FieldValue<'_>> {
        (**self).field(name)
    }
}

impl Fields for Map<String, Value> {
    fn field(&self, name: &str) -> Option<FieldValue<'_>> {
        self.get(name).and_then(json_field)
    }
}

impl Fields for Value {
    fn field(&self, name: &str) -> Option<FieldValue<'_>> {
        match self {
            Value::Object(map) => map.field(name),
            _ => None,
        }
    }
}

fn json_field(value: &Value) -> Option<FieldValue<'_>> {
    match value {
        Value::Null => None,
        Value::Bool(flag) => Some(FieldValue::Bool(*flag)),
        Value::Number(number) => number
            .as_i64()
            .map(i128::from)
            .or_else(|| number.as_u64().map(i128::from))
            .map(FieldValue::Integer)
            .or_else(|| number.as_f64().map(FieldValue::Number)),
        Value::String(text) => Some(FieldValue::text(text.as_str())),
        nested @ (Value::Array(_) | Value::Object(_)) => {
            Some(FieldValue::text(nested.to_string()))
        }
    }
}
