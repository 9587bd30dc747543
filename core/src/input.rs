//! Parsing of raw input field values.
//!
//! The estimation engine assumes well-formed non-negative input. This module
//! is the boundary that turns text typed into the UI into that input:
//! negative values clamp to zero, anything else malformed is rejected.

use nom::{
    branch::alt,
    bytes::complete::{tag_no_case, take_while_m_n},
    character::complete::{digit1, multispace0, one_of},
    combinator::{map, opt, recognize, value},
    multi::many0,
    sequence::{pair, preceded},
    IResult, Parser,
};

use crate::error::InputError;
use crate::tiers::ImageQuality;

/// Characters accepted between groups of three digits.
const GROUP_SEPARATORS: &str = ",._ ";

/// Parse a non-negative count such as `"1,000"` or `"42"`.
///
/// Negative counts clamp to zero.
pub fn parse_count(raw: &str) -> Result<u32, InputError> {
    let input = raw.trim();
    if input.is_empty() {
        return Err(InputError::Empty);
    }

    let (negative, digits) = finish(input, parse_signed_digits(input))?;
    to_count(negative, digits)
}

/// Parse an assumed global user count, in millions.
///
/// Accepts a bare count (already millions) or a count followed by a
/// magnitude suffix: `"500m"`, `"500 million"`, `"1.2b"` is rejected but
/// `"2 billion"` becomes 2000.
pub fn parse_user_count_millions(raw: &str) -> Result<u32, InputError> {
    let input = raw.trim();
    if input.is_empty() {
        return Err(InputError::Empty);
    }

    let ((negative, digits), multiplier) = finish(
        input,
        pair(parse_signed_digits, opt(preceded(multispace0, parse_magnitude))).parse(input),
    )?;
    let count = to_count(negative, digits)?;
    count
        .checked_mul(multiplier.unwrap_or(1))
        .ok_or_else(|| InputError::OutOfRange(input.to_string()))
}

/// Parse an image quality level, case-insensitive.
pub fn parse_image_quality(raw: &str) -> Result<ImageQuality, InputError> {
    let input = raw.trim();
    if input.is_empty() {
        return Err(InputError::Empty);
    }

    match parse_quality(input) {
        Ok(("", quality)) => Ok(quality),
        _ => Err(InputError::UnknownQuality(input.to_string())),
    }
}

/// Clamp a numeric widget value into the count domain.
pub fn clamp_count(value: i64) -> u32 {
    if value < 0 {
        tracing::debug!(value, "negative count clamped to zero");
        return 0;
    }
    u32::try_from(value).unwrap_or_else(|_| {
        tracing::debug!(value, "count clamped to u32::MAX");
        u32::MAX
    })
}

fn finish<'a, O>(input: &'a str, result: IResult<&'a str, O>) -> Result<O, InputError> {
    match result {
        Ok((remaining, output)) => {
            if remaining.trim().is_empty() {
                Ok(output)
            } else {
                Err(InputError::Invalid {
                    position: offset(input, remaining),
                    message: format!("unexpected characters: '{}'", remaining),
                })
            }
        }
        Err(nom::Err::Error(e)) | Err(nom::Err::Failure(e)) => Err(InputError::Invalid {
            position: offset(input, e.input),
            message: format!("expected {:?}", e.code),
        }),
        Err(nom::Err::Incomplete(_)) => Err(InputError::Invalid {
            position: offset(input, ""),
            message: "incomplete input".to_string(),
        }),
    }
}

fn offset(input: &str, remaining: &str) -> u32 {
    u32::try_from(input.len() - remaining.len()).unwrap_or(u32::MAX)
}

fn to_count(negative: bool, digits: &str) -> Result<u32, InputError> {
    if negative {
        tracing::debug!(digits, "negative count clamped to zero");
        return Ok(0);
    }
    let plain: String = digits.chars().filter(|c| c.is_ascii_digit()).collect();
    plain
        .parse::<u32>()
        .map_err(|_| InputError::OutOfRange(digits.to_string()))
}

fn parse_signed_digits(input: &str) -> IResult<&str, (bool, &str)> {
    pair(
        map(opt(one_of("+-")), |sign: Option<char>| sign == Some('-')),
        parse_grouped_digits,
    )
    .parse(input)
}

fn parse_grouped_digits(input: &str) -> IResult<&str, &str> {
    recognize(pair(
        digit1,
        many0(preceded(
            one_of(GROUP_SEPARATORS),
            take_while_m_n(3, 3, |c: char| c.is_ascii_digit()),
        )),
    ))
    .parse(input)
}

fn parse_magnitude(input: &str) -> IResult<&str, u32> {
    alt((
        value(1_000, tag_no_case("billions")),
        value(1_000, tag_no_case("billion")),
        value(1_000, tag_no_case("b")),
        value(1, tag_no_case("millions")),
        value(1, tag_no_case("million")),
        value(1, tag_no_case("m")),
    ))
    .parse(input)
}

fn parse_quality(input: &str) -> IResult<&str, ImageQuality> {
    alt((
        value(ImageQuality::Low, tag_no_case("low")),
        value(ImageQuality::Medium, tag_no_case("medium")),
        value(ImageQuality::High, tag_no_case("high")),
    ))
    .parse(input)
}
