// Copyright (c) 2020 White Leaf
// 
// This software is released under the MIT License.
// https://opensource.org/licenses/MIT

use nom::bytes::complete::{tag, take_till1, take_while, take_while1};
use nom::character::complete::{char, digit1};
use nom::combinator::{map_res, opt, recognize};
use nom::sequence::pair;
use nom::{sequence::delimited, IResult};

pub(crate) fn parse_ident(input: &str) -> IResult<&str, &str> {
    take_while1(|c: char| c.is_alphanumeric() || c == '_' || c == '-')(input)
}

pub(crate) fn parse_string(input: &str) -> IResult<&str, &str> {
    delimited(char('\''), take_till1(|c: char| c == '\''), char('\''))(input)
}

pub(crate) fn parse_number(input: &str) -> IResult<&str, i64> {
    map_res(recognize(pair(opt(char('-')), digit1)), |s: &str| {
        s.parse::<i64>()
    })(input)
}

/// Everything up to the closing parenthesis, validated later
pub(crate) fn parse_raw(input: &str) -> IResult<&str, &str> {
    take_till1(|c: char| c == ')')(input)
}

pub(crate) fn parse_spaces(input: &str) -> IResult<&str, &str> {
    take_while(|c: char| c == ' ')(input)
}

pub(crate) fn parse_separator(input: &str) -> IResult<&str, &str> {
    delimited(parse_spaces, tag(","), parse_spaces)(input)
}
