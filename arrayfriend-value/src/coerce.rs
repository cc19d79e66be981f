use crate::{classify, Kind, Value};

impl Value {
    /// Whether the value counts as true in a boolean context.
    ///
    /// `false`, `0`, `-0`, NaN, the empty string, null and undefined are
    /// falsy; everything else, including empty sequences and records, is
    /// truthy.
    pub fn is_truthy(&self) -> bool {
        match self {
            Value::Undefined | Value::Null => false,
            Value::Boolean(b) => *b,
            Value::Number(n) => !(n.is_nan() || *n == 0.0),
            Value::String(s) => !s.is_empty(),
            Value::Token(_) | Value::Callable(_) | Value::Sequence(_) | Value::Record(_) => true,
        }
    }

    /// Numeric conversion, NaN when there is no sensible number.
    pub fn to_number(&self) -> f64 {
        match classify(self) {
            Kind::Scalar(Value::Undefined) => f64::NAN,
            Kind::Scalar(Value::Null) => 0.0,
            Kind::Scalar(Value::Boolean(b)) => f64::from(u8::from(*b)),
            Kind::Scalar(Value::Number(n)) => *n,
            Kind::Scalar(Value::String(s)) => string_to_number(s),
            // a sequence converts through its text form: [] is 0, [7] is 7
            Kind::Sequence(_) => string_to_number(&self.to_text()),
            Kind::Scalar(_) | Kind::Record(_) | Kind::Token(_) | Kind::Callable(_) => f64::NAN,
        }
    }

    /// The text form of a value.
    ///
    /// Sequences join their items with `,` (null and undefined items become
    /// empty), records are `[object Object]`.
    pub fn to_text(&self) -> String {
        match self {
            Value::Undefined => "undefined".to_string(),
            Value::Null => "null".to_string(),
            Value::Boolean(b) => b.to_string(),
            Value::Number(n) => number_to_text(*n),
            Value::String(s) => s.to_string(),
            Value::Sequence(sequence) => sequence
                .borrow()
                .iter()
                .map(|item| {
                    if item.is_nullish() {
                        String::new()
                    } else {
                        item.to_text()
                    }
                })
                .collect::<Vec<_>>()
                .join(","),
            Value::Record(_) => "[object Object]".to_string(),
            Value::Token(token) => token.to_string(),
            Value::Callable(callable) => callable.to_string(),
        }
    }
}

/// Format a number the way it is shown as text: integers without a
/// fraction, `NaN`, `Infinity` and `-Infinity` spelled out.
///
/// Magnitudes from `1e21` up and below `1e-6` use exponent notation with a
/// signed exponent, such as `1e+21` and `1.5e-7`.
pub fn number_to_text(n: f64) -> String {
    if n.is_nan() {
        "NaN".to_string()
    } else if n.is_infinite() {
        if n.is_sign_positive() {
            "Infinity".to_string()
        } else {
            "-Infinity".to_string()
        }
    } else if n == 0.0 {
        "0".to_string()
    } else if n.abs() >= 1e21 || n.abs() < 1e-6 {
        // shortest round-trip digits, e.g. "1.5e-7"
        let text = format!("{:e}", n);
        match text.split_once('e') {
            Some((mantissa, exponent)) if !exponent.starts_with('-') => {
                format!("{mantissa}e+{exponent}")
            }
            _ => text,
        }
    } else {
        n.to_string()
    }
}

fn string_to_number(s: &str) -> f64 {
    let s = s.trim();
    if s.is_empty() {
        return 0.0;
    }
    let (sign, unsigned) = match s.strip_prefix('-') {
        Some(rest) => (-1.0, rest),
        None => (1.0, s.strip_prefix('+').unwrap_or(s)),
    };
    if unsigned == "Infinity" {
        return sign * f64::INFINITY;
    }
    for (prefix, radix) in [("0x", 16), ("0X", 16), ("0o", 8), ("0O", 8), ("0b", 2), ("0B", 2)] {
        if let Some(digits) = s.strip_prefix(prefix) {
            return u64::from_str_radix(digits, radix).map_or(f64::NAN, |n| n as f64);
        }
    }
    // Rust also accepts "inf" and "nan", which are not numbers here
    if unsigned.chars().any(|c| c.is_ascii_alphabetic() && c != 'e' && c != 'E') {
        return f64::NAN;
    }
    s.parse::<f64>().unwrap_or(f64::NAN)
}

/// Parse a leading integer from `text` in the given `radix`.
///
/// Leading whitespace and a sign are skipped, and with radix 16 an `0x`
/// prefix too. Parsing stops at the first character that is not a digit in
/// the radix. Returns NaN when no digit is found or when the radix is not in
/// `2..=36`.
pub fn parse_int(text: &str, radix: u32) -> f64 {
    if !(2..=36).contains(&radix) {
        return f64::NAN;
    }
    let text = text.trim_start();
    let (sign, mut digits) = match text.strip_prefix('-') {
        Some(rest) => (-1.0, rest),
        None => (1.0, text.strip_prefix('+').unwrap_or(text)),
    };
    if radix == 16 {
        digits = digits
            .strip_prefix("0x")
            .or_else(|| digits.strip_prefix("0X"))
            .unwrap_or(digits);
    }
    let mut result: Option<f64> = None;
    for c in digits.chars() {
        match c.to_digit(radix) {
            Some(digit) => {
                result = Some(result.unwrap_or(0.0) * f64::from(radix) + f64::from(digit));
            }
            None => break,
        }
    }
    result.map_or(f64::NAN, |n| sign * n)
}
