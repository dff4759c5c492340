use crate::types::length::Length;
use nom::{
    IResult,
    branch::alt,
    character::complete::{char, digit0, digit1, multispace0, one_of},
    combinator::{all_consuming, map_res, opt, recognize},
    sequence::{delimited, pair, tuple},
};

/// Recognize a decimal literal: `12`, `-3.5`, `.5`, `5.`, `1e3`, `+2.5E-1`.
fn decimal(input: &str) -> IResult<&str, &str> {
    recognize(tuple((
        opt(one_of("+-")),
        alt((
            recognize(pair(digit1, opt(pair(char('.'), digit0)))),
            recognize(pair(char('.'), digit1)),
        )),
        opt(tuple((one_of("eE"), opt(one_of("+-")), digit1))),
    )))(input)
}

/// Parse a number, allowing surrounding whitespace.
pub fn parse_number(input: &str) -> IResult<&str, f64> {
    map_res(delimited(multispace0, decimal, multispace0), |s: &str| {
        s.parse::<f64>()
    })(input)
}

/// Parse a string that must consist of a single number and nothing else.
///
/// Returns `None` for keywords, unit-suffixed values and expressions.
pub fn parse_numeric(input: &str) -> Option<f64> {
    all_consuming(parse_number)(input)
        .ok()
        .map(|(_, value)| value)
}

/// Whether the whole string is a number.
pub fn is_numeric(input: &str) -> bool {
    parse_numeric(input).is_some()
}

/// Remove every `px` occurrence from a value.
///
/// This is plain substring removal, so `"1.5em"` is untouched and
/// `"ppxx"` becomes `"px"`.
pub fn strip_px(input: &str) -> String {
    input.replace("px", "")
}

/// Parse a CSS length written as a bare number or a px value.
///
/// Anything else is kept as an opaque [`Length`] with no numeric value.
pub fn parse_length(input: &str) -> Length {
    let raw = strip_px(input);
    let value = parse_numeric(&raw);
    Length::new(raw, value)
}
