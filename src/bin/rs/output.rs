use crate::condition::Cond;
use crate::pipe::Pipe;
use cmd_help::CmdHelp;
use rstream::Integer;

#[derive(Debug, Clone, PartialEq, CmdHelp)]
pub(crate) enum Output {
    /// :out        逐行输出每个数据，未指定输出时的默认输出。
    Out,
    /// :count      输出数据的数量。
    Count,
    /// :sum        输出数据之和，溢出时回绕。
    Sum,
    /// :min        输出最小值，没有数据时不输出。
    Min,
    /// :max        输出最大值，没有数据时不输出。
    Max,
    /// :first      输出第一个数据，没有数据时不输出。
    First,
    /// :last       输出最后一个数据，没有数据时不输出。
    Last,
    /// :nth        输出第N个数据，从0开始计数，不存在时不输出。
    ///             :nth <n>
    Nth { n: usize },
    /// :any        存在满足条件的数据时输出`true`，否则输出`false`。
    ///             :any <cond>
    Any(Cond),
    /// :all        所有数据都满足条件时输出`true`，否则输出`false`，没有数据时输出`true`。
    ///             :all <cond>
    All(Cond),
    /// :find       输出首个满足条件的数据，不存在时不输出。
    ///             :find <cond>
    Find(Cond),
    /// :pos        输出首个满足条件的数据的位置，从1开始计数，不存在时不输出。
    ///             :pos <cond>
    Pos(Cond),
    /// :join       以分隔符连接所有数据后输出。
    ///             :join <separator>
    ///             例如：
    ///                 :join ,
    Join { separator: String },
}

impl Output {
    /// 驱动流水线，把结果逐行交给`emit`。
    pub(crate) fn handle(self, pipe: Pipe, mut emit: impl FnMut(String)) {
        let mut stream = pipe.stream;
        let result = match self {
            Output::Out => {
                stream.for_each(|item| emit(item.to_string()));
                None
            }
            Output::Count => Some(stream.count().to_string()),
            Output::Sum => Some(stream.fold(0, |acc: Integer, item| acc.wrapping_add(*item)).to_string()),
            Output::Min => stream.min().map(|value| value.to_string()),
            Output::Max => stream.max().map(|value| value.to_string()),
            Output::First => stream.next().map(|value| value.to_string()),
            Output::Last => stream.last().map(|value| value.to_string()),
            Output::Nth { n } => stream.nth(n).map(|value| value.to_string()),
            Output::Any(cond) => Some(stream.any(|item| cond.test(*item)).to_string()),
            Output::All(cond) => Some(stream.all(|item| cond.test(*item)).to_string()),
            Output::Find(cond) => stream.find(|item| cond.test(*item)).map(|value| value.to_string()),
            Output::Pos(cond) => stream.position(|item| cond.test(*item)).map(|pos| pos.to_string()),
            Output::Join { separator } => Some(stream.join(&separator)),
        };
        if let Some(line) = result {
            emit(line);
        }
    }
}
