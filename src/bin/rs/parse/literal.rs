use crate::condition::Cond;
use crate::err::RsErr;
use crate::op::Arith;
use nom::branch::alt;
use nom::bytes::complete::tag;
use nom::character::complete::{char, i64 as integer, u32 as exponent};
use nom::combinator::{all_consuming, map, opt, verify};
use nom::error::context;
use nom::sequence::preceded;
use nom::{IResult, Parser};
use nom_language::error::{VerboseError, convert_error};
use rstream::Integer;

pub(crate) type ParserError<'a> = VerboseError<&'a str>;
pub(crate) type LiteralResult<'a, T> = IResult<&'a str, T, ParserError<'a>>;

/// 用`parser`完整解析参数值，失败时把nom的错误链转换为可读信息。
pub(in crate::parse) fn parse_literal<T>(
    cmd: &'static str, arg: &'static str, value: String, parser: impl FnOnce(&str) -> LiteralResult<'_, T>,
) -> Result<T, RsErr> {
    let result = match parser(value.as_str()) {
        Ok((_, literal)) => Ok(literal),
        Err(nom::Err::Error(err) | nom::Err::Failure(err)) => Err(convert_error(value.as_str(), err)),
        Err(nom::Err::Incomplete(_)) => Err("incomplete input".to_string()),
    };
    result.map_err(|error| RsErr::ArgParseErr { cmd, arg, arg_value: value, error })
}

fn parse_integer(input: &str) -> LiteralResult<'_, Integer> {
    context("integer", integer).parse(input)
}

fn parse_non_zero(input: &str) -> LiteralResult<'_, Integer> {
    context("non-zero integer", verify(integer, |n: &Integer| *n != 0)).parse(input)
}

/// 范围：`<start>[,[<end>][,<step>]]`
pub(in crate::parse) fn parse_gen(input: &str) -> LiteralResult<'_, (Integer, Option<Integer>, Option<Integer>)> {
    context(
        "Gen",
        all_consuming(map(
            (parse_integer, opt(preceded(char(','), (opt(parse_integer), opt(preceded(char(','), parse_integer)))))),
            |(start, rest)| match rest {
                Some((end, step)) => (start, end, step),
                None => (start, None, None),
            },
        )),
    )
    .parse(input)
}

/// 条件：`<n`、`<=n`、`>n`、`>=n`、`=n`、`!=n`、`%n`、`!%n`
pub(in crate::parse) fn parse_cond(input: &str) -> LiteralResult<'_, Cond> {
    context(
        "Cond",
        all_consuming(alt((
            map(preceded(tag("<="), parse_integer), Cond::Le),
            map(preceded(tag(">="), parse_integer), Cond::Ge),
            map(preceded(tag("!="), parse_integer), Cond::Ne),
            map(preceded(tag("!%"), parse_non_zero), Cond::NotDivisible),
            map(preceded(char('<'), parse_integer), Cond::Lt),
            map(preceded(char('>'), parse_integer), Cond::Gt),
            map(preceded(char('='), parse_integer), Cond::Eq),
            map(preceded(char('%'), parse_non_zero), Cond::Divisible),
        ))),
    )
    .parse(input)
}

/// 算术：`+n`、`-n`、`*n`、`/n`、`%n`、`^n`
pub(in crate::parse) fn parse_arith(input: &str) -> LiteralResult<'_, Arith> {
    context(
        "Arith",
        all_consuming(alt((
            map(preceded(char('+'), parse_integer), Arith::Add),
            map(preceded(char('-'), parse_integer), Arith::Sub),
            map(preceded(char('*'), parse_integer), Arith::Mul),
            map(preceded(char('/'), parse_non_zero), Arith::Div),
            map(preceded(char('%'), parse_non_zero), Arith::Rem),
            map(preceded(char('^'), context("exponent", exponent)), Arith::Pow),
        ))),
    )
    .parse(input)
}
