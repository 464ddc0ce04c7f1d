// Copyright (c) 2020 White Leaf
//
// This software is released under the MIT License.
// https://opensource.org/licenses/MIT

mod basics;

use basics::{parse_ident, parse_number, parse_raw, parse_separator, parse_spaces, parse_string};
use engine::Axis;
use nom::{
    branch::alt,
    bytes::complete::tag,
    character::complete::char,
    combinator::{map, opt},
    error::ErrorKind,
    sequence::preceded,
    IResult,
};

#[derive(Debug, Clone, Eq, PartialEq)]
pub enum Statement {
    QueryUser(String),
    QueryItem(String),
    QueryRatings(String),
    Unrated(String),
    // target, count, explain
    RecommendUser(String, Option<i64>, bool),
    RecommendItem(String, Option<i64>, bool),
    Similarity(Axis),
    // item, user, raw value
    Rate(String, String, String),
}

type RecommendArgs = (String, Option<i64>, bool);

fn parse_recommend_args(input: &str) -> IResult<&str, RecommendArgs> {
    let (input, target) = parse_string(input)?;
    let (input, count) = opt(preceded(parse_separator, parse_number))(input)?;
    let (input, explain) = opt(preceded(parse_separator, tag("explain")))(input)?;

    Ok((input, (target.into(), count, explain.is_some())))
}

fn parse_axis(input: &str) -> IResult<&str, Axis> {
    let (input, axis) = alt((tag("users"), tag("items")))(input)?;

    let axis = match axis {
        "users" => Axis::Users,
        _ => Axis::Items,
    };

    Ok((input, axis))
}

fn parse_rate_args(input: &str) -> IResult<&str, Statement> {
    let (input, item) = parse_string(input)?;
    let (input, _) = parse_separator(input)?;
    let (input, user) = parse_string(input)?;
    let (input, _) = parse_separator(input)?;
    let (input, value) = parse_raw(input)?;

    Ok((
        input,
        Statement::Rate(item.into(), user.into(), value.trim().into()),
    ))
}

fn parse_statement(input: &str) -> IResult<&str, Statement> {
    let (input, function) = parse_ident(input)?;
    let (input, _) = preceded(char('('), parse_spaces)(input)?;

    let (input, statement) = match function {
        "query_user" => map(parse_string, |user| Statement::QueryUser(user.into()))(input)?,
        "query_item" => map(parse_string, |item| Statement::QueryItem(item.into()))(input)?,
        "query_ratings" => map(parse_string, |user| Statement::QueryRatings(user.into()))(input)?,
        "unrated" => map(parse_string, |user| Statement::Unrated(user.into()))(input)?,

        "recommend_user" => map(parse_recommend_args, |(user, count, explain)| {
            Statement::RecommendUser(user, count, explain)
        })(input)?,

        "recommend_item" => map(parse_recommend_args, |(item, count, explain)| {
            Statement::RecommendItem(item, count, explain)
        })(input)?,

        "similarity" => map(parse_axis, Statement::Similarity)(input)?,
        "rate" => parse_rate_args(input)?,

        _ => return Err(nom::Err::Error((input, ErrorKind::Tag))),
    };

    let (input, _) = preceded(parse_spaces, char(')'))(input)?;
    Ok((input, statement))
}

pub fn parse_line(input: &str) -> Option<Statement> {
    let input = input.trim();
    let (rest, statement) = parse_statement(input).ok()?;

    if rest.trim().is_empty() {
        Some(statement)
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn query_statements() {
        assert_eq!(
            parse_line("query_user('User1')"),
            Some(Statement::QueryUser("User1".into()))
        );

        assert_eq!(
            parse_line("query_item('The Dark Knight')"),
            Some(Statement::QueryItem("The Dark Knight".into()))
        );

        assert_eq!(
            parse_line("query_ratings( 'User2' )"),
            Some(Statement::QueryRatings("User2".into()))
        );

        assert_eq!(
            parse_line("unrated('User3')"),
            Some(Statement::Unrated("User3".into()))
        );
    }

    #[test]
    fn recommend_user_statement() {
        assert_eq!(
            parse_line("recommend_user('User1')"),
            Some(Statement::RecommendUser("User1".into(), None, false))
        );

        assert_eq!(
            parse_line("recommend_user('User1', 3)"),
            Some(Statement::RecommendUser("User1".into(), Some(3), false))
        );

        assert_eq!(
            parse_line("recommend_user('User1', 3, explain)"),
            Some(Statement::RecommendUser("User1".into(), Some(3), true))
        );

        assert_eq!(
            parse_line("recommend_user('User1', explain)"),
            Some(Statement::RecommendUser("User1".into(), None, true))
        );

        assert_eq!(
            parse_line("recommend_user('User1', -2)"),
            Some(Statement::RecommendUser("User1".into(), Some(-2), false))
        );
    }

    #[test]
    fn recommend_item_statement() {
        assert_eq!(
            parse_line("recommend_item('Inception', 2, explain)"),
            Some(Statement::RecommendItem("Inception".into(), Some(2), true))
        );
    }

    #[test]
    fn similarity_statement() {
        assert_eq!(
            parse_line("similarity(users)"),
            Some(Statement::Similarity(Axis::Users))
        );

        assert_eq!(
            parse_line("similarity(items)"),
            Some(Statement::Similarity(Axis::Items))
        );

        assert_eq!(parse_line("similarity(genres)"), None);
    }

    #[test]
    fn rate_statement() {
        assert_eq!(
            parse_line("rate('Interstellar', 'User1', 5)"),
            Some(Statement::Rate(
                "Interstellar".into(),
                "User1".into(),
                "5".into()
            ))
        );

        // Value is validated by the engine
        assert_eq!(
            parse_line("rate('Interstellar', 'User1', great )"),
            Some(Statement::Rate(
                "Interstellar".into(),
                "User1".into(),
                "great".into()
            ))
        );
    }

    #[test]
    fn parse_invalid_line() {
        assert!(parse_line("recommend_user(User1, 3)").is_none());
        assert!(parse_line("query_user('User1');").is_none());
        assert!(parse_line("knn('User1', 3)").is_none());
        assert!(parse_line("rate('Interstellar', 'User1')").is_none());
    }
}
