use crate::err::RsErr;
use crate::pipe::Pipe;
use cmd_help::CmdHelp;
use rstream::Integer;
use rstream::from_iter;
use rstream::generate::{counter, range, repeat, repeat_n};

#[derive(Debug, PartialEq, CmdHelp)]
pub(crate) enum Input {
    /// :gen        生成整数作为输入。
    ///             :gen <start>[,[<end>][,<step>]]
    ///                 <start> 起始值，包含，必选。
    ///                 <end>   结束值，不包含，可选，未指定时沿步长方向一直生成。
    ///                 <step>  步长，不能为0，可选，未指定时为1。
    ///             未指定任何逗号时从<start>开始无限递增。
    ///             例如：
    ///                 :gen 0          生成：0 1 2 3 ...
    ///                 :gen 0,10       生成：0 1 2 ... 9
    ///                 :gen 0,10,3     生成：0 3 6 9
    ///                 :gen 10,0,-3    生成：10 7 4 1
    ///                 :gen 0,,2       生成：0 2 4 6 ...
    Gen { start: Integer, end: Option<Integer>, step: Option<Integer> },
    /// :of         以给定的整数作为输入。
    ///             :of <value>
    ///             :of [ <value> ... ]
    ///             例如：
    ///                 :of 7
    ///                 :of [ 3 1 4 1 5 ]
    Of { values: Vec<Integer> },
    /// :repeat     重复同一个整数作为输入。
    ///             :repeat <value>[ <count>]
    ///                 <value> 重复的值，必选。
    ///                 <count> 重复次数，可选，未指定时无限重复。
    ///             例如：
    ///                 :repeat 1
    ///                 :repeat 1 5
    Repeat { value: Integer, count: Option<usize> },
}

impl Input {
    pub(crate) fn new_gen(start: Integer, end: Option<Integer>, step: Option<Integer>) -> Input {
        Input::Gen { start, end, step }
    }

    pub(crate) fn new_of(values: Vec<Integer>) -> Input {
        Input::Of { values }
    }

    pub(crate) fn new_repeat(value: Integer, count: Option<usize>) -> Input {
        Input::Repeat { value, count }
    }

    pub(crate) fn pipe(self) -> Result<Pipe, RsErr> {
        Ok(match self {
            Input::Gen { start, end: None, step: None } => Pipe::new(counter(start)),
            Input::Gen { start, end, step } => {
                let step = step.unwrap_or(1);
                let end = end.unwrap_or(if step < 0 { Integer::MIN } else { Integer::MAX });
                Pipe::new(range(start, end, step)?)
            }
            Input::Of { values } => Pipe::new(from_iter(values)),
            Input::Repeat { value, count: Some(count) } => Pipe::new(repeat_n(value, count)),
            Input::Repeat { value, count: None } => Pipe::new(repeat(value)),
        })
    }
}
