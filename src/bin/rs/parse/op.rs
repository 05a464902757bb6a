use crate::err::RsErr;
use crate::op::Op;
use crate::parse::literal::{parse_arith, parse_cond, parse_literal};
use crate::parse::{parse_arg_as, require_arg};
use std::iter::Peekable;

pub(in crate::parse) fn parse_ops(args: &mut Peekable<impl Iterator<Item = String>>) -> Result<Vec<Op>, RsErr> {
    let mut ops = vec![];
    while let Some(op) = parse_op(args)? {
        ops.push(op);
    }
    Ok(ops)
}

fn parse_op(args: &mut Peekable<impl Iterator<Item = String>>) -> Result<Option<Op>, RsErr> {
    let cmd = match args.peek().map(|cmd| cmd.to_ascii_lowercase()) {
        Some(cmd) => cmd,
        None => return Ok(None),
    };
    let op = match cmd.as_str() {
        ":peek" => {
            args.next();
            Op::Peek
        }
        ":map" => {
            args.next();
            Op::Map(parse_literal(":map", "arith", require_arg(args, ":map", "arith")?, parse_arith)?)
        }
        ":skip" => {
            args.next();
            Op::Skip { count: parse_arg_as(":skip", "count", require_arg(args, ":skip", "count")?)? }
        }
        ":take" => {
            args.next();
            Op::Take { count: parse_arg_as(":take", "count", require_arg(args, ":take", "count")?)? }
        }
        ":filter" => {
            args.next();
            Op::Filter(parse_literal(":filter", "cond", require_arg(args, ":filter", "cond")?, parse_cond)?)
        }
        ":skipwhile" => {
            args.next();
            Op::SkipWhile(parse_literal(":skipwhile", "cond", require_arg(args, ":skipwhile", "cond")?, parse_cond)?)
        }
        ":takewhile" => {
            args.next();
            Op::TakeWhile(parse_literal(":takewhile", "cond", require_arg(args, ":takewhile", "cond")?, parse_cond)?)
        }
        _ => return Ok(None),
    };
    Ok(Some(op))
}
