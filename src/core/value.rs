//! Typed log arguments and default rendering
//!
//! Leveled log calls take a slice of [`Value`]s instead of a variadic list.
//! Each value knows its default text form and whether it counts as a string
//! operand, which decides the spacing used by [`sprint`].

use super::level::Level;
use super::printf::{self, Spec};
use std::borrow::Cow;
use std::fmt::{self, Write};

/// One argument to a log call.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Str(String),
    Int(i64),
    Uint(u64),
    Float(f64),
    Bool(bool),
    /// A severity. Renders as its tag, but number verbs such as `%d`
    /// see the integer.
    Level(Level),
    /// Pre-rendered text of any [`fmt::Display`] value.
    ///
    /// Renders like a string but is not a string operand, so [`sprint`]
    /// spaces it from neighbouring non-string operands.
    Display {
        type_name: &'static str,
        text: String,
    },
}

impl Value {
    /// Capture a [`fmt::Display`] value by rendering it now.
    pub fn display<T: fmt::Display + ?Sized>(value: &T) -> Self {
        Value::Display {
            type_name: std::any::type_name::<T>(),
            text: value.to_string(),
        }
    }

    /// Whether this operand is a string for [`sprint`] spacing.
    #[must_use]
    pub fn is_string(&self) -> bool {
        matches!(self, Value::Str(_))
    }

    /// Type name shown in formatting diagnostics such as `%!d(string=hi)`.
    #[must_use]
    pub fn type_name(&self) -> &'static str {
        match self {
            Value::Str(_) => "string",
            Value::Int(_) => "int",
            Value::Uint(_) => "uint",
            Value::Float(_) => "float64",
            Value::Bool(_) => "bool",
            Value::Level(_) => std::any::type_name::<Level>(),
            Value::Display { type_name, .. } => type_name,
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Str(s) | Value::Display { text: s, .. } => f.write_str(s),
            Value::Int(n) => write!(f, "{}", n),
            Value::Uint(n) => write!(f, "{}", n),
            Value::Bool(b) => write!(f, "{}", b),
            Value::Level(level) => write!(f, "{}", level),
            Value::Float(_) => {
                f.write_str(&printf::format_value(self, 'v', &Spec::default()).unwrap_or_default())
            }
        }
    }
}

/// Concatenate default renderings of `args`.
///
/// A space goes between two adjacent operands only when neither is a
/// string: `("hello", "world")` gives `helloworld`, `(1, 12, "string")` gives
/// `1 12string`.
pub fn sprint(args: &[Value]) -> String {
    let mut out = String::new();
    sprint_into(&mut out, args);
    out
}

pub(crate) fn sprint_into(out: &mut String, args: &[Value]) {
    let mut prev_string = false;
    for (i, arg) in args.iter().enumerate() {
        let is_string = arg.is_string();
        if i > 0 && !is_string && !prev_string {
            out.push(' ');
        }
        let _ = write!(out, "{}", arg);
        prev_string = is_string;
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::Str(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::Str(s)
    }
}

impl From<&String> for Value {
    fn from(s: &String) -> Self {
        Value::Str(s.clone())
    }
}

impl From<Cow<'_, str>> for Value {
    fn from(s: Cow<'_, str>) -> Self {
        Value::Str(s.into_owned())
    }
}

macro_rules! value_from {
    ($variant:ident as $target:ty: $($t:ty),*) => {
        $(
            impl From<$t> for Value {
                fn from(v: $t) -> Self {
                    Value::$variant(v as $target)
                }
            }
        )*
    };
}

value_from!(Int as i64: i8, i16, i32, i64, isize);
value_from!(Uint as u64: u8, u16, u32, u64, usize);

/// Characters are carried as their scalar value.
impl From<char> for Value {
    fn from(c: char) -> Self {
        Value::Int(c as i64)
    }
}

impl From<f64> for Value {
    fn from(v: f64) -> Self {
        Value::Float(v)
    }
}

impl From<f32> for Value {
    fn from(v: f32) -> Self {
        // Widen through the shortest decimal form so 0.1f32 stays 0.1
        Value::Float(v.to_string().parse().unwrap_or(v as f64))
    }
}

impl From<bool> for Value {
    fn from(v: bool) -> Self {
        Value::Bool(v)
    }
}

impl From<Level> for Value {
    fn from(level: Level) -> Self {
        Value::Level(level)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strings_are_not_spaced() {
        let args: Vec<Value> = vec!["hello".into(), "world".into()];
        assert_eq!(sprint(&args), "helloworld");
    }

    #[test]
    fn test_non_strings_are_spaced() {
        let args: Vec<Value> = vec![1.into(), 12.into(), "string".into()];
        assert_eq!(sprint(&args), "1 12string");

        let args: Vec<Value> = vec![true.into(), 2.5.into(), 7u8.into()];
        assert_eq!(sprint(&args), "true 2.5 7");
    }

    #[test]
    fn test_string_between_numbers() {
        let args: Vec<Value> = vec![1.into(), "-".into(), 2.into()];
        assert_eq!(sprint(&args), "1-2");
    }

    #[test]
    fn test_format_directives_are_literal() {
        let args: Vec<Value> = vec!["%s %q".into(), "string".into(), "integer".into()];
        assert_eq!(sprint(&args), "%s %qstringinteger");
    }

    #[test]
    fn test_empty() {
        assert_eq!(sprint(&[]), "");
    }

    #[test]
    fn test_display_values_space_like_numbers() {
        let args = vec![Value::display(&Level::ERROR), Value::from(3)];
        assert_eq!(sprint(&args), "[ERROR]  3");
        assert!(!args[0].is_string());
    }

    #[test]
    fn test_level_renders_as_tag() {
        let args = vec![Value::from(Level::ERROR), Value::from(3)];
        assert_eq!(args[0], Value::Level(Level::ERROR));
        assert_eq!(sprint(&args), "[ERROR]  3");
        assert!(!args[0].is_string());
    }

    #[test]
    fn test_float_default_rendering() {
        assert_eq!(Value::from(3.25).to_string(), "3.25");
        assert_eq!(Value::from(100000.0).to_string(), "100000");
        assert_eq!(Value::from(1e6).to_string(), "1e+06");
        assert_eq!(Value::from(0.0001).to_string(), "0.0001");
        assert_eq!(Value::from(0.00001).to_string(), "1e-05");
        assert_eq!(Value::from(-2.0).to_string(), "-2");
        assert_eq!(Value::from(f64::INFINITY).to_string(), "+Inf");
        assert_eq!(Value::from(f64::NAN).to_string(), "NaN");
        assert_eq!(Value::from(0.1f32).to_string(), "0.1");
    }

    #[test]
    fn test_char_is_scalar_value() {
        assert_eq!(Value::from('A'), Value::Int(65));
    }

    #[test]
    fn test_type_names() {
        assert_eq!(Value::from("x").type_name(), "string");
        assert_eq!(Value::from(1).type_name(), "int");
        assert_eq!(Value::from(1u32).type_name(), "uint");
        assert_eq!(Value::from(1.0).type_name(), "float64");
        assert_eq!(Value::from(false).type_name(), "bool");
        assert!(Value::from(Level::INFO).type_name().ends_with("Level"));
    }
}
