use crate::condition::Cond;
use crate::err::RsErr;
use crate::output::Output;
use crate::parse::literal::{parse_cond, parse_literal};
use crate::parse::{parse_arg_as, require_arg};
use std::iter::Peekable;

pub(in crate::parse) fn parse_output(args: &mut Peekable<impl Iterator<Item = String>>) -> Result<Output, RsErr> {
    // 未知参数留给调用者处理
    let Some(cmd) = args.next_if(|cmd| Output::find_help(cmd).is_some()) else {
        return Ok(Output::Out);
    };
    Ok(match cmd.to_ascii_lowercase().as_str() {
        ":count" => Output::Count,
        ":sum" => Output::Sum,
        ":min" => Output::Min,
        ":max" => Output::Max,
        ":first" => Output::First,
        ":last" => Output::Last,
        ":nth" => Output::Nth { n: parse_arg_as(":nth", "n", require_arg(args, ":nth", "n")?)? },
        ":any" => Output::Any(parse_cond_arg(args, ":any")?),
        ":all" => Output::All(parse_cond_arg(args, ":all")?),
        ":find" => Output::Find(parse_cond_arg(args, ":find")?),
        ":pos" => Output::Pos(parse_cond_arg(args, ":pos")?),
        ":join" => Output::Join { separator: require_arg(args, ":join", "separator")? },
        _ => Output::Out,
    })
}

fn parse_cond_arg(args: &mut Peekable<impl Iterator<Item = String>>, cmd: &'static str) -> Result<Cond, RsErr> {
    parse_literal(cmd, "cond", require_arg(args, cmd, "cond")?, parse_cond)
}
