//! Number formatting helpers for the presentation layer.
//!
//! These only render values; stored results keep full precision.
//! Fixed-decimal output always uses `.` as the decimal mark.

/// Locale used for grouping separators and magnitude words.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum NumberLocale {
    #[default]
    EnUs,
    PtBr,
}

impl NumberLocale {
    fn group_separator(&self) -> char {
        match self {
            NumberLocale::EnUs => ',',
            NumberLocale::PtBr => '.',
        }
    }

    fn magnitude_words(&self) -> [&'static str; 3] {
        match self {
            NumberLocale::EnUs => ["thousand", "million", "billion"],
            NumberLocale::PtBr => ["mil", "milhões", "bilhões"],
        }
    }
}

/// Format with precision that grows as the value shrinks.
///
/// - below 0.01: 4 decimals
/// - below 1: 3 decimals
/// - below 10: 2 decimals
/// - otherwise: 1 decimal
pub fn format_number(value: f64) -> String {
    if value < 0.01 {
        to_fixed(value, 4)
    } else if value < 1.0 {
        to_fixed(value, 3)
    } else if value < 10.0 {
        to_fixed(value, 2)
    } else {
        to_fixed(value, 1)
    }
}

/// Abbreviate large values with a magnitude word.
pub fn format_large_number(value: f64, locale: NumberLocale) -> String {
    let [thousand, million, billion] = locale.magnitude_words();
    if value >= 1_000_000_000.0 {
        format!("{} {}", to_fixed(value / 1_000_000_000.0, 2), billion)
    } else if value >= 1_000_000.0 {
        format!("{} {}", to_fixed(value / 1_000_000.0, 2), million)
    } else if value >= 1_000.0 {
        format!("{} {}", to_fixed(value / 1_000.0, 1), thousand)
    } else {
        to_fixed(value, 1)
    }
}

/// Fixed-point rendering where an exact halfway value rounds away from zero.
///
/// `{:.N}` resolves exact ties to the even digit; display output rounds
/// them up instead (`2.125` -> `"2.13"`).
pub fn to_fixed(value: f64, decimals: u32) -> String {
    let Some(units) = tie_rounded_up(value, decimals) else {
        return format!("{:.*}", decimals as usize, value);
    };

    let width = decimals as usize + 1;
    let digits = format!("{:0>width$}", units);
    let (whole, fraction) = digits.split_at(digits.len() - decimals as usize);
    let sign = if value < 0.0 { "-" } else { "" };
    if decimals == 0 {
        format!("{}{}", sign, whole)
    } else {
        format!("{}{}.{}", sign, whole, fraction)
    }
}

/// If `|value| * 10^decimals` is exactly `k + 0.5`, returns `k + 1`.
///
/// With `|value| = m * 2^e` and `m` odd, the product is a half-integer
/// exactly when `e == -(decimals + 1)`.
fn tie_rounded_up(value: f64, decimals: u32) -> Option<u128> {
    if !value.is_finite() || value == 0.0 || decimals > 20 {
        return None;
    }

    let bits = value.abs().to_bits();
    let biased = ((bits >> 52) & 0x7ff) as i32;
    let fraction = bits & ((1u64 << 52) - 1);
    let (mantissa, exponent) = if biased == 0 {
        (fraction, -1074)
    } else {
        (fraction | (1u64 << 52), biased - 1075)
    };

    let shift = mantissa.trailing_zeros() as i32;
    if shift + exponent + 1 + decimals as i32 != 0 {
        return None;
    }

    let odd = (mantissa >> shift) as u128 * 5u128.pow(decimals);
    Some((odd + 1) / 2)
}

/// Round to an integer and group thousands.
pub fn format_with_separator(value: f64, locale: NumberLocale) -> String {
    if !value.is_finite() {
        return value.to_string();
    }

    let rounded = value.round();
    let digits = format!("{:.0}", rounded.abs());
    let separator = locale.group_separator();

    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3 + 1);
    if rounded < 0.0 {
        grouped.push('-');
    }
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(separator);
        }
        grouped.push(c);
    }
    grouped
}
