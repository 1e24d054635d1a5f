//! printf-style template formatting
//!
//! Templates are only known at runtime, so `format!` cannot be used. This
//! module interprets `%` directives against a slice of [`Value`]s.
//!
//! Supported verbs:
//!
//! | Verb | Meaning |
//! |------|---------|
//! | `%v` | default rendering (`%#v` quotes strings, hex for unsigned) |
//! | `%s` `%q` | string, double-quoted string (`%#q` back-quoted) |
//! | `%d` `%b` `%o` `%O` `%x` `%X` | integer in base 10, 2, 8, 8 with `0o`, 16 |
//! | `%c` `%U` | character, `U+0041` code point |
//! | `%t` | boolean |
//! | `%e` `%E` `%f` `%F` `%g` `%G` | floating point |
//! | `%%` | literal percent sign |
//!
//! Flags `+ - # 0 space`, width, precision, `*` and explicit argument indexes
//! (`%[2]d`) are honoured. Formatting never fails; problems are written
//! inline:
//!
//! ```
//! use rust_level_logger::core::printf::sprintf;
//! use rust_level_logger::Value;
//!
//! assert_eq!(sprintf("%d, %o, %s", &[1.into(), 12.into(), "string".into()]), "1, 14, string");
//! assert_eq!(sprintf("%d", &["hi".into()]), "%!d(string=hi)");
//! assert_eq!(sprintf("%d %d", &[1.into()]), "1 %!d(MISSING)");
//! assert_eq!(sprintf("%d", &[1.into(), 2.into()]), "1%!(EXTRA int=2)");
//! ```

use super::value::Value;
use std::fmt::Write;

/// Widths, precisions and argument indexes above this are rejected.
const MAX_NUM: usize = 1_000_000;

/// Flags, width and precision of one directive.
#[derive(Debug, Clone, Copy, Default)]
pub(crate) struct Spec {
    pub minus: bool,
    pub plus: bool,
    pub sharp: bool,
    pub zero: bool,
    pub space: bool,
    pub width: Option<usize>,
    pub precision: Option<usize>,
}

/// Substitute `args` into `template`.
pub fn sprintf(template: &str, args: &[Value]) -> String {
    let mut out = String::with_capacity(template.len() + 16);
    sprintf_into(&mut out, template, args);
    out
}

pub(crate) fn sprintf_into(out: &mut String, template: &str, args: &[Value]) {
    Printer {
        out,
        args,
        arg_num: 0,
        reordered: false,
        good_arg_num: true,
    }
    .run(template);
}

struct Printer<'a> {
    out: &'a mut String,
    args: &'a [Value],
    arg_num: usize,
    /// An explicit `[n]` index was seen; unused arguments are not reported.
    reordered: bool,
    good_arg_num: bool,
}

impl Printer<'_> {
    fn run(mut self, format: &str) {
        let bytes = format.as_bytes();
        let end = bytes.len();
        let mut i = 0;

        while i < end {
            self.good_arg_num = true;
            let start = i;
            while i < end && bytes[i] != b'%' {
                i += 1;
            }
            if i > start {
                self.out.push_str(&format[start..i]);
            }
            if i >= end {
                break;
            }
            i += 1;

            let mut spec = Spec::default();
            while i < end {
                match bytes[i] {
                    b'#' => spec.sharp = true,
                    b'0' => spec.zero = !spec.minus,
                    b'+' => spec.plus = true,
                    b'-' => {
                        spec.minus = true;
                        spec.zero = false;
                    }
                    b' ' => spec.space = true,
                    _ => break,
                }
                i += 1;
            }

            let (next, mut after_index) = self.arg_number(bytes, i);
            i = next;

            // Width
            if i < end && bytes[i] == b'*' {
                i += 1;
                match self.int_from_arg() {
                    Some(width) => {
                        if width < 0 {
                            spec.minus = true;
                            spec.zero = false;
                        }
                        spec.width = Some(width.unsigned_abs() as usize);
                    }
                    None => self.out.push_str("%!(BADWIDTH)"),
                }
                after_index = false;
            } else {
                let (width, next) = parse_num(bytes, i);
                i = next;
                if width.is_some() && after_index {
                    // "%[3]2d"
                    self.good_arg_num = false;
                }
                spec.width = width;
            }

            // Precision
            if i < end && bytes[i] == b'.' {
                i += 1;
                if after_index {
                    // "%[3].2d"
                    self.good_arg_num = false;
                }
                let (next, found) = self.arg_number(bytes, i);
                i = next;
                after_index = found;
                if i < end && bytes[i] == b'*' {
                    i += 1;
                    match self.int_from_arg() {
                        Some(precision) if precision >= 0 => {
                            spec.precision = Some(precision as usize)
                        }
                        _ => self.out.push_str("%!(BADPREC)"),
                    }
                    after_index = false;
                } else {
                    let (precision, next) = parse_num(bytes, i);
                    i = next;
                    spec.precision = Some(precision.unwrap_or(0));
                }
            }

            if !after_index {
                let (next, _) = self.arg_number(bytes, i);
                i = next;
            }

            let Some(verb) = format.get(i..).and_then(|rest| rest.chars().next()) else {
                self.out.push_str("%!(NOVERB)");
                break;
            };
            i += verb.len_utf8();

            let args = self.args;
            if verb == '%' {
                self.out.push('%');
            } else if !self.good_arg_num {
                let _ = write!(self.out, "%!{}(BADINDEX)", verb);
            } else if self.arg_num >= args.len() {
                let _ = write!(self.out, "%!{}(MISSING)", verb);
            } else {
                let arg = &args[self.arg_num];
                self.arg_num += 1;
                self.print_arg(arg, verb, spec);
            }
        }

        if !self.reordered && self.arg_num < self.args.len() {
            self.out.push_str("%!(EXTRA ");
            for (n, arg) in self.args[self.arg_num..].iter().enumerate() {
                if n > 0 {
                    self.out.push_str(", ");
                }
                let _ = write!(self.out, "{}={}", arg.type_name(), arg);
            }
            self.out.push(')');
        }
    }

    /// Parse an optional `[n]` argument index at `i`.
    ///
    /// Returns the position after it and whether one was found.
    fn arg_number(&mut self, bytes: &[u8], i: usize) -> (usize, bool) {
        if i >= bytes.len() || bytes[i] != b'[' {
            return (i, false);
        }
        self.reordered = true;
        let (index, width) = parse_arg_index(&bytes[i..]);
        match index {
            Some(index) if index < self.args.len() => {
                self.arg_num = index;
                (i + width, true)
            }
            _ => {
                self.good_arg_num = false;
                (i + width, index.is_some())
            }
        }
    }

    /// Take the next argument as a `*` width or precision.
    fn int_from_arg(&mut self) -> Option<i64> {
        let args = self.args;
        let arg = args.get(self.arg_num)?;
        self.arg_num += 1;
        let n = match *arg {
            Value::Int(n) => n,
            Value::Uint(n) => i64::try_from(n).ok()?,
            _ => return None,
        };
        if n.unsigned_abs() > MAX_NUM as u64 {
            None
        } else {
            Some(n)
        }
    }

    fn print_arg(&mut self, arg: &Value, verb: char, mut spec: Spec) {
        let mut effective = verb;
        if verb == 'v' {
            spec.plus = false;
            if spec.sharp {
                spec.sharp = false;
                match arg {
                    Value::Str(_) => effective = 'q',
                    Value::Level(_) => effective = 'd',
                    Value::Uint(_) => {
                        spec.sharp = true;
                        effective = 'x';
                    }
                    _ => {}
                }
            }
        }

        match format_value(arg, effective, &spec) {
            Some(text) => self.out.push_str(&text),
            None => {
                let _ = write!(self.out, "%!{}({}={})", verb, arg.type_name(), arg);
            }
        }
    }
}

/// Render one argument for one verb, `None` when the verb does not apply.
pub(crate) fn format_value(arg: &Value, verb: char, spec: &Spec) -> Option<String> {
    match arg {
        Value::Str(s) | Value::Display { text: s, .. } => format_str(s, verb, spec),
        Value::Int(n) => format_int(n.unsigned_abs(), *n < 0, verb, spec),
        Value::Uint(n) => format_int(*n, false, verb, spec),
        Value::Float(f) => format_float(*f, verb, spec),
        Value::Level(level) => match verb {
            'v' | 's' | 'x' | 'X' | 'q' => format_str(&level.to_string(), verb, spec),
            _ => {
                let n = level.value();
                format_int(n.unsigned_abs(), n < 0, verb, spec)
            }
        },
        Value::Bool(b) => match verb {
            'v' | 't' => Some(pad(if *b { "true" } else { "false" }, spec)),
            _ => None,
        },
    }
}

fn parse_num(bytes: &[u8], start: usize) -> (Option<usize>, usize) {
    let mut i = start;
    let mut num = 0usize;
    while i < bytes.len() && bytes[i].is_ascii_digit() {
        num = num * 10 + usize::from(bytes[i] - b'0');
        if num > MAX_NUM {
            return (None, bytes.len());
        }
        i += 1;
    }
    if i == start {
        (None, start)
    } else {
        (Some(num), i)
    }
}

/// Parse `[n]` at the start of `bytes` into a zero-based index and its width.
fn parse_arg_index(bytes: &[u8]) -> (Option<usize>, usize) {
    if bytes.len() < 3 {
        return (None, 1);
    }
    match bytes.iter().skip(1).position(|&b| b == b']') {
        Some(offset) => {
            let close = offset + 1;
            match parse_num(&bytes[..close], 1) {
                (Some(n), end) if end == close && n >= 1 => (Some(n - 1), close + 1),
                _ => (None, close + 1),
            }
        }
        None => (None, 1),
    }
}

fn pad(text: &str, spec: &Spec) -> String {
    let len = text.chars().count();
    match spec.width {
        Some(width) if width > len => {
            let fill = " ".repeat(width - len);
            if spec.minus {
                format!("{}{}", text, fill)
            } else {
                format!("{}{}", fill, text)
            }
        }
        _ => text.to_string(),
    }
}

fn truncate(s: &str, precision: Option<usize>) -> &str {
    match precision.and_then(|p| s.char_indices().nth(p)) {
        Some((idx, _)) => &s[..idx],
        None => s,
    }
}

fn format_str(s: &str, verb: char, spec: &Spec) -> Option<String> {
    let text = match verb {
        'v' | 's' => truncate(s, spec.precision).to_string(),
        'q' => quote(truncate(s, spec.precision), spec.sharp),
        'x' | 'X' => hex_bytes(s.as_bytes(), verb == 'X', spec),
        _ => return None,
    };
    Some(pad(&text, spec))
}

fn quote(s: &str, backquote: bool) -> String {
    if backquote && !s.contains('`') && s.chars().all(|c| c == '\t' || !c.is_control()) {
        format!("`{}`", s)
    } else {
        format!("{:?}", s)
    }
}

fn hex_bytes(bytes: &[u8], upper: bool, spec: &Spec) -> String {
    let bytes = match spec.precision {
        Some(p) if p < bytes.len() => &bytes[..p],
        _ => bytes,
    };
    let mut out = String::with_capacity(bytes.len() * 2);
    for (i, b) in bytes.iter().enumerate() {
        if spec.space && i > 0 {
            out.push(' ');
        }
        if spec.sharp && (spec.space || i == 0) {
            out.push_str(if upper { "0X" } else { "0x" });
        }
        let _ = if upper {
            write!(out, "{:02X}", b)
        } else {
            write!(out, "{:02x}", b)
        };
    }
    out
}

fn to_char(magnitude: u64, negative: bool) -> char {
    if negative {
        return char::REPLACEMENT_CHARACTER;
    }
    u32::try_from(magnitude)
        .ok()
        .and_then(char::from_u32)
        .unwrap_or(char::REPLACEMENT_CHARACTER)
}

fn format_int(magnitude: u64, negative: bool, verb: char, spec: &Spec) -> Option<String> {
    let digits = match verb {
        'v' | 'd' => magnitude.to_string(),
        'b' => format!("{:b}", magnitude),
        'o' | 'O' => format!("{:o}", magnitude),
        'x' => format!("{:x}", magnitude),
        'X' => format!("{:X}", magnitude),
        'c' => return Some(pad(&to_char(magnitude, negative).to_string(), spec)),
        'q' => return Some(pad(&format!("{:?}", to_char(magnitude, negative)), spec)),
        'U' => {
            let mut text = format!("U+{:04X}", magnitude);
            let c = to_char(magnitude, negative);
            if spec.sharp && c != char::REPLACEMENT_CHARACTER && !c.is_control() {
                let _ = write!(text, " '{}'", c);
            }
            return Some(pad(&text, spec));
        }
        _ => return None,
    };

    if spec.precision == Some(0) && magnitude == 0 {
        return Some(pad("", spec));
    }

    let sign = if negative {
        "-"
    } else if spec.plus {
        "+"
    } else if spec.space {
        " "
    } else {
        ""
    };

    // Zero padding counts the sign but not the base prefix
    let min_digits = match spec.precision {
        Some(p) => p,
        None if spec.zero && !spec.minus => spec
            .width
            .map_or(0, |w| w.saturating_sub(sign.len())),
        None => 0,
    };

    let mut body = String::with_capacity(min_digits.max(digits.len()) + 4);
    if digits.len() < min_digits {
        body.push_str(&"0".repeat(min_digits - digits.len()));
    }
    body.push_str(&digits);

    let prefix = match verb {
        'b' if spec.sharp => "0b",
        'o' if spec.sharp && !body.starts_with('0') => "0",
        'O' => "0o",
        'x' if spec.sharp => "0x",
        'X' if spec.sharp => "0X",
        _ => "",
    };

    Some(pad(&format!("{}{}{}", sign, prefix, body), spec))
}

fn format_float(value: f64, verb: char, spec: &Spec) -> Option<String> {
    let upper = verb.is_ascii_uppercase();
    if !matches!(verb, 'v' | 'g' | 'G' | 'e' | 'E' | 'f' | 'F') {
        return None;
    }

    if value.is_nan() {
        let text = if spec.plus {
            "+NaN"
        } else if spec.space {
            " NaN"
        } else {
            "NaN"
        };
        return Some(pad(text, spec));
    }
    if value.is_infinite() {
        let text = if value < 0.0 {
            "-Inf"
        } else if spec.space && !spec.plus {
            " Inf"
        } else {
            "+Inf"
        };
        return Some(pad(text, spec));
    }

    let abs = value.abs();
    let body = match verb {
        'e' | 'E' => exponent(abs, spec.precision.unwrap_or(6), upper),
        'f' | 'F' => format!("{:.*}", spec.precision.unwrap_or(6), abs),
        _ => general(abs, spec.precision, upper),
    };

    let sign = if value.is_sign_negative() {
        "-"
    } else if spec.plus {
        "+"
    } else if spec.space {
        " "
    } else {
        ""
    };

    if spec.zero && !spec.minus {
        if let Some(width) = spec.width {
            let len = sign.len() + body.len();
            if width > len {
                return Some(format!("{}{}{}", sign, "0".repeat(width - len), body));
            }
        }
    }
    Some(pad(&format!("{}{}", sign, body), spec))
}

/// `%g`: shortest digits (or `precision` significant digits), exponent form
/// when the exponent is below -4 or at least the precision (6 when shortest).
fn general(abs: f64, precision: Option<usize>, upper: bool) -> String {
    let (sci, threshold) = match precision {
        None => (format!("{:e}", abs), 6),
        Some(p) => {
            let p = p.max(1);
            (format!("{:.*e}", p - 1, abs), p as i32)
        }
    };
    let (mantissa, exp) = split_exponent(&sci);

    if exp < -4 || exp >= threshold {
        join_exponent(trim_fraction(mantissa), exp, upper)
    } else if precision.is_none() {
        abs.to_string()
    } else {
        let decimals = (threshold - 1 - exp).max(0) as usize;
        trim_fraction(&format!("{:.*}", decimals, abs)).to_string()
    }
}

fn exponent(abs: f64, precision: usize, upper: bool) -> String {
    let sci = format!("{:.*e}", precision, abs);
    let (mantissa, exp) = split_exponent(&sci);
    join_exponent(mantissa, exp, upper)
}

fn split_exponent(sci: &str) -> (&str, i32) {
    match sci.split_once('e') {
        Some((mantissa, exp)) => (mantissa, exp.parse().unwrap_or(0)),
        None => (sci, 0),
    }
}

/// Two exponent digits minimum with an explicit sign: `1e+06`.
fn join_exponent(mantissa: &str, exp: i32, upper: bool) -> String {
    format!(
        "{}{}{}{:02}",
        mantissa,
        if upper { 'E' } else { 'e' },
        if exp < 0 { '-' } else { '+' },
        exp.unsigned_abs()
    )
}

fn trim_fraction(s: &str) -> &str {
    if s.contains('.') {
        s.trim_end_matches('0').trim_end_matches('.')
    } else {
        s
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fmt(template: &str, args: &[Value]) -> String {
        sprintf(template, args)
    }

    #[test]
    fn test_basic_substitution() {
        assert_eq!(
            fmt("%d, %o, %s", &[1.into(), 12.into(), "string".into()]),
            "1, 14, string"
        );
        assert_eq!(
            fmt("prefix: %s, %s", &["hello".into(), "world".into()]),
            "prefix: hello, world"
        );
        assert_eq!(fmt("%s suffix", &["-word".into()]), "-word suffix");
        assert_eq!(fmt("", &[]), "");
        assert_eq!(fmt("100%%", &[]), "100%");
    }

    #[test]
    fn test_quoting() {
        assert_eq!(
            fmt(
                "%s %s %q",
                &["%s %q".into(), "string".into(), "integer".into()]
            ),
            "%s %q string \"integer\""
        );
        assert_eq!(fmt("%q", &["a\"b".into()]), r#""a\"b""#);
        assert_eq!(fmt("%#q", &["plain".into()]), "`plain`");
        assert_eq!(fmt("%#v", &["hi".into()]), "\"hi\"");
    }

    #[test]
    fn test_diagnostics() {
        assert_eq!(fmt("%d", &["hi".into()]), "%!d(string=hi)");
        assert_eq!(fmt("%d %d", &[1.into()]), "1 %!d(MISSING)");
        assert_eq!(
            fmt("%d", &[1.into(), 2.into(), "a".into()]),
            "1%!(EXTRA int=2, string=a)"
        );
        assert_eq!(fmt("50%", &[]), "50%!(NOVERB)");
        assert_eq!(fmt("%z", &[1.into()]), "%!z(int=1)");
        assert_eq!(fmt("%s", &[true.into()]), "%!s(bool=true)");
        assert_eq!(fmt("%d", &[1.5.into()]), "%!d(float64=1.5)");
        assert_eq!(fmt("-- %s --", &[]), "-- %!s(MISSING) --");
    }

    #[test]
    fn test_width_and_flags() {
        assert_eq!(
            fmt("%5d|%-5d|%05d", &[42.into(), 42.into(), 42.into()]),
            "   42|42   |00042"
        );
        assert_eq!(fmt("%+d % d", &[5.into(), 5.into()]), "+5  5");
        assert_eq!(fmt("%05d", &[(-42).into()]), "-0042");
        assert_eq!(fmt("%5.2s|", &["abcdef".into()]), "   ab|");
        assert_eq!(fmt("%-4s|", &["ab".into()]), "ab  |");
        assert_eq!(fmt("%.0d", &[0.into()]), "");
        assert_eq!(fmt("%.3d", &[7.into()]), "007");
    }

    #[test]
    fn test_integer_bases() {
        assert_eq!(
            fmt(
                "%x %X %#x %o %#o %O %b %#b",
                &[
                    255.into(),
                    255.into(),
                    255.into(),
                    8.into(),
                    8.into(),
                    8.into(),
                    5.into(),
                    5.into()
                ]
            ),
            "ff FF 0xff 10 010 0o10 101 0b101"
        );
        assert_eq!(fmt("%x", &[(-255).into()]), "-ff");
        assert_eq!(fmt("%#v", &[255u8.into()]), "0xff");
        assert_eq!(fmt("%d", &[i64::MIN.into()]), "-9223372036854775808");
        assert_eq!(fmt("%d", &[u64::MAX.into()]), "18446744073709551615");
    }

    #[test]
    fn test_characters() {
        assert_eq!(fmt("%c %U", &['A'.into(), 0x1F600.into()]), "A U+1F600");
        assert_eq!(fmt("%q", &['x'.into()]), "'x'");
        assert_eq!(fmt("%#U", &['A'.into()]), "U+0041 'A'");
    }

    #[test]
    fn test_string_hex() {
        assert_eq!(fmt("%x", &["hi".into()]), "6869");
        assert_eq!(fmt("% x", &["hi".into()]), "68 69");
        assert_eq!(fmt("%#X", &["hi".into()]), "0X6869");
    }

    #[test]
    fn test_floats() {
        assert_eq!(fmt("%f", &[3.5.into()]), "3.500000");
        assert_eq!(fmt("%.2f", &[3.14159.into()]), "3.14");
        assert_eq!(fmt("%6.2f|", &[3.14159.into()]), "  3.14|");
        assert_eq!(fmt("%08.3f", &[3.14159.into()]), "0003.142");
        assert_eq!(fmt("%+.1f", &[2.0.into()]), "+2.0");
        assert_eq!(fmt("%e", &[1234.5678.into()]), "1.234568e+03");
        assert_eq!(fmt("%E", &[0.000123.into()]), "1.230000E-04");
        assert_eq!(fmt("%g", &[1e6.into()]), "1e+06");
        assert_eq!(fmt("%g", &[123456.0.into()]), "123456");
        assert_eq!(fmt("%.3g", &[3.14159.into()]), "3.14");
        assert_eq!(fmt("%.2g", &[1234.0.into()]), "1.2e+03");
        assert_eq!(fmt("%v", &[0.5.into()]), "0.5");
        assert_eq!(fmt("%f", &[f64::INFINITY.into()]), "+Inf");
        assert_eq!(fmt("%f", &[f64::NEG_INFINITY.into()]), "-Inf");
        assert_eq!(fmt("%5.1f", &[f64::NAN.into()]), "  NaN");
    }

    #[test]
    fn test_bool() {
        assert_eq!(fmt("%t %v", &[true.into(), false.into()]), "true false");
    }

    #[test]
    fn test_level_number_verbs_see_integer() {
        use crate::core::level::Level;

        let error: Value = Level::ERROR.into();
        assert_eq!(
            fmt("%d|%v|%s", &[error.clone(), error.clone(), error]),
            "3|[ERROR] |[ERROR] "
        );
        assert_eq!(fmt("%03d %b", &[Level::WARN.into(), Level::FATAL.into()]), "002 100");
        assert_eq!(fmt("%d %o", &[Level::new(-9).into(), Level::new(9).into()]), "-9 11");
        assert_eq!(fmt("%#v", &[Level::INFO.into()]), "1");
        assert_eq!(
            fmt("%f", &[Level::INFO.into()]),
            format!("%!f({}=[INFO ] )", std::any::type_name::<Level>())
        );
    }

    #[test]
    fn test_star_width_and_precision() {
        assert_eq!(fmt("%*d", &[5.into(), 42.into()]), "   42");
        assert_eq!(fmt("%-*d|", &[3.into(), 7.into()]), "7  |");
        assert_eq!(fmt("%*d|", &[(-3).into(), 7.into()]), "7  |");
        assert_eq!(fmt("%.*f", &[2.into(), 3.14159.into()]), "3.14");
        assert_eq!(fmt("%*d", &["x".into(), 1.into()]), "%!(BADWIDTH)1");
        assert_eq!(fmt("%.*d", &[(-1).into(), 1.into()]), "%!(BADPREC)1");
    }

    #[test]
    fn test_argument_indexes() {
        assert_eq!(fmt("%[2]d %[1]d", &[1.into(), 2.into()]), "2 1");
        assert_eq!(fmt("%[1]d %[1]x", &[255.into()]), "255 ff");
        assert_eq!(fmt("%[3]d", &[1.into()]), "%!d(BADINDEX)");
        assert_eq!(
            fmt("%[2]*[1]d", &[12.into(), 5.into()]),
            "   12"
        );
    }

    #[test]
    fn test_multibyte_template() {
        assert_eq!(fmt("héllo %s ✓", &["wörld".into()]), "héllo wörld ✓");
        assert_eq!(fmt("%ä", &[1.into()]), "%!ä(int=1)");
    }
}
