use std::fmt::Write;

use derive_more::{Display, From, IsVariant, TryInto};

/// A dynamically shaped value, as received from a loosely typed boundary such as a scripting layer
/// or decoded configuration.
///
/// Conversions in are provided through [`From`] (and [`FromIterator`] for sequences), conversions
/// out through [`TryFrom`], which fails with a [`TryIntoError`](derive_more::TryIntoError) holding
/// the original value when the shape doesn't match.
///
/// # Examples
/// ```
/// # use sequence_ops::seq::Value;
/// let value: Value = [1_i64, 2, 3].into_iter().collect();
/// assert!(value.is_seq());
/// assert_eq!(value.to_string(), "[1, 2, 3]");
///
/// assert_eq!(i64::try_from(Value::from(10_i64)).ok(), Some(10));
/// assert!(i64::try_from(Value::from("ten")).is_err());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Display, From, TryInto, IsVariant)]
pub enum Value {
    /// The absent value.
    #[default]
    #[display("nil")]
    #[from(ignore)]
    #[try_into(ignore)]
    Nil,
    Bool(bool),
    Int(i64),
    Float(f64),
    Str(String),
    #[display("[{}]", join(_0))]
    Seq(Vec<Value>),
}

impl Value {
    /// Builds a [`Value::Seq`] from anything convertible into values.
    pub fn seq<I>(items: I) -> Value
    where
        I: IntoIterator,
        I::Item: Into<Value>,
    {
        items.into_iter().collect()
    }

    /// Returns the elements if this value is a sequence.
    pub fn as_seq(&self) -> Option<&[Value]> {
        match self {
            Value::Seq(items) => Some(items),
            _ => None,
        }
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Value::Str(value.to_owned())
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(value: Option<T>) -> Self {
        value.map_or(Value::Nil, Into::into)
    }
}

impl<T: Into<Value>> FromIterator<T> for Value {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Value::Seq(iter.into_iter().map(Into::into).collect())
    }
}

fn join(items: &[Value]) -> String {
    let mut out = String::new();
    for (i, item) in items.iter().enumerate() {
        if i > 0 {
            out.push_str(", ");
        }
        // Writing into a String can't fail.
        let _ = write!(out, "{item}");
    }
    out
}

/// Returns true if `value` is present and holds a sequence. Absent values (`None` or
/// [`Value::Nil`]) and scalars are not sequences.
///
/// # Examples
/// ```
/// # use sequence_ops::seq::{is_slice, Value};
/// assert!(is_slice(&Value::seq([1_i64])));
/// assert!(is_slice(&Value::seq(Vec::<i64>::new())));
/// assert!(!is_slice(&Value::from(10_i64)));
/// assert!(!is_slice(&Value::Nil));
/// assert!(!is_slice(None::<&Value>));
/// ```
pub fn is_slice<'a>(value: impl Into<Option<&'a Value>>) -> bool {
    value.into().is_some_and(Value::is_seq)
}
