use crate::err::RsErr;
use crate::input::Input;
use crate::parse::literal::{parse_gen, parse_literal};
use crate::parse::{consume_if_some, parse_arg_as, parse_arg_or_arg1, require_arg};
use std::iter::Peekable;

pub(in crate::parse) fn parse_input(args: &mut Peekable<impl Iterator<Item = String>>) -> Result<Input, RsErr> {
    match args.peek().map(|cmd| cmd.to_ascii_lowercase()).as_deref() {
        Some(":gen") => parse_gen_input(args),
        Some(":of") => parse_of(args),
        Some(":repeat") => parse_repeat(args),
        _ => Err(RsErr::MissingInput { found: args.next() }),
    }
}

fn parse_gen_input(args: &mut Peekable<impl Iterator<Item = String>>) -> Result<Input, RsErr> {
    args.next();
    let range = require_arg(args, ":gen", "range")?;
    let (start, end, step) = parse_literal(":gen", "range", range, parse_gen)?;
    Ok(Input::new_gen(start, end, step))
}

fn parse_of(args: &mut Peekable<impl Iterator<Item = String>>) -> Result<Input, RsErr> {
    args.next();
    let values = parse_arg_or_arg1(args, ":of", "values")?
        .into_iter()
        .map(|value| parse_arg_as(":of", "values", value))
        .collect::<Result<Vec<_>, _>>()?;
    Ok(Input::new_of(values))
}

fn parse_repeat(args: &mut Peekable<impl Iterator<Item = String>>) -> Result<Input, RsErr> {
    args.next();
    let value = parse_arg_as(":repeat", "value", require_arg(args, ":repeat", "value")?)?;
    let count = consume_if_some(args, |s| s.parse::<usize>().ok());
    Ok(Input::new_repeat(value, count))
}
