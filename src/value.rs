/// Cell values for entity fields.
///
/// Every field of the dashboard entities renders down to one of these
/// variants. `Null` covers optional fields the backend omits, such as a
/// missing payment proof or an unanswered consultation.

use std::cmp::Ordering;
use std::fmt;

use chrono::{DateTime, NaiveDate, Utc};

/// A single cell value.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Int(i64),
    Float(f64),
    Str(String),
    Bool(bool),
    Date(NaiveDate),
    DateTime(DateTime<Utc>),
    Null,
}

impl Value {
    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    pub fn as_i64(&self) -> Option<i64> {
        match self {
            Value::Int(v) => Some(*v),
            _ => None,
        }
    }

    /// Numeric view of the value. Ints widen to f64, like the aggregate paths.
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Value::Int(v) => Some(*v as f64),
            Value::Float(v) => Some(*v),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::Str(v) => Some(v),
            _ => None,
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Bool(v) => Some(*v),
            _ => None,
        }
    }

    /// Calendar-day view. Timestamps collapse to their UTC date.
    pub fn as_date(&self) -> Option<NaiveDate> {
        match self {
            Value::Date(d) => Some(*d),
            Value::DateTime(t) => Some(t.date_naive()),
            _ => None,
        }
    }

    /// Total ordering used by the sort pipeline.
    ///
    /// Numbers compare by magnitude regardless of int/float variant, strings
    /// lexicographically, dates chronologically. `Null` sorts after every
    /// non-null value in ascending order. Values of unrelated kinds fall back
    /// to a fixed kind rank so the ordering stays deterministic.
    pub fn compare(&self, other: &Value) -> Ordering {
        use Value::*;

        match (self, other) {
            (Null, Null) => Ordering::Equal,
            (Null, _) => Ordering::Greater,
            (_, Null) => Ordering::Less,
            (Int(a), Int(b)) => a.cmp(b),
            (Int(_) | Float(_), Int(_) | Float(_)) => {
                let a = self.as_f64().unwrap_or(0.0);
                let b = other.as_f64().unwrap_or(0.0);
                a.partial_cmp(&b).unwrap_or(Ordering::Equal)
            }
            (Str(a), Str(b)) => a.cmp(b),
            (Bool(a), Bool(b)) => a.cmp(b),
            (Date(a), Date(b)) => a.cmp(b),
            (DateTime(a), DateTime(b)) => a.cmp(b),
            (Date(_) | DateTime(_), Date(_) | DateTime(_)) => {
                self.as_date().cmp(&other.as_date())
            }
            _ => self.kind_rank().cmp(&other.kind_rank()),
        }
    }

    /// Case-insensitive substring match against the rendered value.
    /// An empty needle matches everything.
    pub fn contains_ci(&self, needle: &str) -> bool {
        if needle.is_empty() {
            return true;
        }
        self.to_string()
            .to_lowercase()
            .contains(&needle.to_lowercase())
    }

    /// Case-insensitive equality against the rendered value.
    pub fn equals_ci(&self, other: &str) -> bool {
        self.to_string().to_lowercase() == other.to_lowercase()
    }

    fn kind_rank(&self) -> u8 {
        match self {
            Value::Int(_) | Value::Float(_) => 0,
            Value::Str(_) => 1,
            Value::Bool(_) => 2,
            Value::Date(_) | Value::DateTime(_) => 3,
            Value::Null => 4,
        }
    }
}

impl fmt::Display for Value {
    /// Table/CSV rendering. Dates print as `DD-MM-YYYY`, the format the
    /// dashboard shows; `Null` prints empty.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Int(v) => write!(f, "{}", v),
            Value::Float(v) => write!(f, "{}", v),
            Value::Str(v) => write!(f, "{}", v),
            Value::Bool(v) => write!(f, "{}", v),
            Value::Date(d) => write!(f, "{}", d.format("%d-%m-%Y")),
            Value::DateTime(t) => write!(f, "{}", t.format("%d-%m-%Y")),
            Value::Null => Ok(()),
        }
    }
}

impl From<i64> for Value {
    fn from(v: i64) -> Self {
        Value::Int(v)
    }
}

impl From<f64> for Value {
    fn from(v: f64) -> Self {
        Value::Float(v)
    }
}

impl From<&str> for Value {
    fn from(v: &str) -> Self {
        Value::Str(v.to_string())
    }
}

impl From<String> for Value {
    fn from(v: String) -> Self {
        Value::Str(v)
    }
}

impl From<bool> for Value {
    fn from(v: bool) -> Self {
        Value::Bool(v)
    }
}

impl From<NaiveDate> for Value {
    fn from(v: NaiveDate) -> Self {
        Value::Date(v)
    }
}

impl From<DateTime<Utc>> for Value {
    fn from(v: DateTime<Utc>) -> Self {
        Value::DateTime(v)
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(v: Option<T>) -> Self {
        match v {
            Some(v) => v.into(),
            None => Value::Null,
        }
    }
}
