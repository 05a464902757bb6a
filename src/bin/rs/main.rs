use crate::condition::Cond;
use crate::config::Config;
use crate::err::RsErr;
use crate::input::Input;
use crate::op::Op;
use crate::output::Output;
use itertools::Itertools;

#[macro_use]
mod print;
mod condition;
mod config;
mod err;
mod input;
mod op;
mod output;
mod parse;
mod pipe;

const USAGE: &str = "Usage: rs [-h [<cmd>]] [-V] [-v] [-d] <input> [<op>...] [<output>]";

fn main() {
    if let Err(e) = run() {
        e.termination();
    }
}

fn run() -> Result<(), RsErr> {
    let mut args = std::env::args().skip(1).peekable();
    let configs = parse::parse_configs(&mut args);
    if configs.contains(&Config::Help) {
        return print_help(args.next());
    }
    if configs.contains(&Config::Version) {
        println!("rs {}", env!("CARGO_PKG_VERSION"));
        return Ok(());
    }
    let (input, ops, output) = parse::parse(args)?;
    if configs.contains(&Config::Verbose) {
        println_info!("Input:");
        println_info!("    {:?}", input);
        println_info!("Op:");
        println_info!("{}", ops.iter().map(|op| format!("    {:?}", op)).join("\n"));
        println_info!("Output:");
        println_info!("    {:?}", output);
    }
    if configs.contains(&Config::DryRun) {
        return Ok(());
    }
    let mut pipe = input.pipe()?;
    for op in ops {
        pipe = op.wrap(pipe);
    }
    output.handle(pipe, |line| println!("{line}"));
    Ok(())
}

fn print_help(topic: Option<String>) -> Result<(), RsErr> {
    match topic {
        None => {
            println!("{USAGE}");
            let sections = [("Input:", Input::all_help()), ("Op:", Op::all_help()), ("Output:", Output::all_help())];
            for (title, helps) in sections {
                println!();
                println_info!("{title}");
                for (_, help) in helps {
                    println!("{}", indent(help));
                }
            }
            Ok(())
        }
        Some(topic) if topic.eq_ignore_ascii_case("cond") => {
            for (_, help) in Cond::all_help() {
                println!("{}", indent(help));
            }
            Ok(())
        }
        Some(topic) => {
            let cmd = if topic.starts_with(':') { topic.clone() } else { format!(":{topic}") };
            match Input::find_help(&cmd).or_else(|| Op::find_help(&cmd)).or_else(|| Output::find_help(&cmd)) {
                Some(help) => {
                    println!("{help}");
                    Ok(())
                }
                None => Err(RsErr::UnknownHelp(topic)),
            }
        }
    }
}

fn indent(help: &str) -> String {
    help.lines().map(|line| format!("    {line}")).join("\n")
}
