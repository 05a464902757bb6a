use crate::err::RsErr;
use crate::input::Input;
use crate::op::Op;
use crate::output::Output;
use crate::parse::input::parse_input;
use crate::parse::op::parse_ops;
use crate::parse::output::parse_output;
use std::fmt::Display;
use std::iter::Peekable;
use std::str::FromStr;

mod config;
mod input;
mod literal;
mod op;
mod output;

pub(crate) use config::parse_configs;

pub(crate) fn parse(mut args: Peekable<impl Iterator<Item = String>>) -> Result<(Input, Vec<Op>, Output), RsErr> {
    let input = parse_input(&mut args)?;
    let ops = parse_ops(&mut args)?;
    let output = parse_output(&mut args)?;
    let remaining = args.collect::<Vec<_>>();
    if !remaining.is_empty() { Err(RsErr::UnknownArgs { args: remaining }) } else { Ok((input, ops, output)) }
}

/// 解析单个值`value`或者由中括号包围的多个值`[ value0 value1 ]`。
fn parse_arg_or_arg1(
    args: &mut Peekable<impl Iterator<Item = String>>, cmd: &'static str, arg: &'static str,
) -> Result<Vec<String>, RsErr> {
    match args.next() {
        // 至少有一个值，直接消耗
        Some(value) => {
            if value == "[" {
                // 多值开始
                let mut values = Vec::new();
                for value in args.by_ref() {
                    if value == "]" {
                        // 多值结束
                        return if values.is_empty() { Err(RsErr::ArgNotEnough { cmd, arg }) } else { Ok(values) };
                    }
                    values.push(value);
                }
                Err(RsErr::UnclosingMultiArg { cmd, arg })
            } else if value == "]" {
                // 未开启的多值结束
                Err(RsErr::UnexpectedClosingBracket { cmd, arg })
            } else {
                Ok(vec![value])
            }
        }
        None => Err(RsErr::MissingArg { cmd, arg }),
    }
}

/// 消耗必选参数。
fn require_arg(
    args: &mut Peekable<impl Iterator<Item = String>>, cmd: &'static str, arg: &'static str,
) -> Result<String, RsErr> {
    args.next().ok_or(RsErr::MissingArg { cmd, arg })
}

/// 下一个参数能被`m`接受时才消耗。
fn consume_if_some<M, U>(args: &mut Peekable<impl Iterator<Item = String>>, m: M) -> Option<U>
where
    M: FnOnce(&String) -> Option<U>,
{
    let option = m(args.peek()?);
    if option.is_some() {
        args.next();
    }
    option
}

fn parse_arg_as<T>(cmd: &'static str, arg: &'static str, value: String) -> Result<T, RsErr>
where
    T: FromStr,
    T::Err: Display,
{
    value.parse::<T>().map_err(|err| RsErr::ArgParseErr { cmd, arg, arg_value: value, error: err.to_string() })
}

#[cfg(test)]
fn build_args(args_line: &'static str) -> Peekable<impl Iterator<Item = String>> {
    args_line.split(' ').filter(|arg| !arg.is_empty()).map(String::from).peekable()
}
