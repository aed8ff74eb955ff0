//! Numeric-literal recognition for text input
//!
//! The integer and float casts share one definition of "numeric text":
//! an optional sign, a decimal mantissa (leading or trailing dot allowed),
//! and an optional exponent. Nothing else. `inf`/`nan` words and hex
//! prefixes are not numeric text, even though Rust's own float parser
//! would accept the former.

/// A recognized numeric literal, classified by form.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) enum Numeric {
    /// Integer-form literal that fits i64
    Int(i64),
    /// Float-form literal, or an integer-form literal too large for i64
    Float(f64),
}

/// Recognize `text` (already trimmed) as a numeric literal.
///
/// Returns `None` when the text is not numeric. Integer-form literals that
/// overflow i64 are re-read as floats; the integer cast range-checks them
/// afterwards.
pub(crate) fn parse(text: &str) -> Option<Numeric> {
    if !is_numeric_literal(text) {
        return None;
    }
    let float_form = text.contains(['.', 'e', 'E']);
    if !float_form {
        if let Ok(int) = text.parse::<i64>() {
            return Some(Numeric::Int(int));
        }
    }
    text.parse::<f64>().ok().map(Numeric::Float)
}

/// Grammar check: `[+|-] (digits | digits . digits? | . digits) [(e|E) [+|-] digits]`
fn is_numeric_literal(text: &str) -> bool {
    let unsigned = text.strip_prefix(['+', '-']).unwrap_or(text);
    let (mantissa, exponent) = match unsigned.split_once(['e', 'E']) {
        Some((mantissa, exponent)) => (mantissa, Some(exponent)),
        None => (unsigned, None),
    };

    let mantissa_ok = match mantissa.split_once('.') {
        Some((int_part, frac_part)) => {
            (!int_part.is_empty() || !frac_part.is_empty())
                && int_part.bytes().all(|b| b.is_ascii_digit())
                && frac_part.bytes().all(|b| b.is_ascii_digit())
        }
        None => !mantissa.is_empty() && mantissa.bytes().all(|b| b.is_ascii_digit()),
    };
    if !mantissa_ok {
        return false;
    }

    match exponent {
        None => true,
        Some(exponent) => {
            let digits = exponent.strip_prefix(['+', '-']).unwrap_or(exponent);
            !digits.is_empty() && digits.bytes().all(|b| b.is_ascii_digit())
        }
    }
}
