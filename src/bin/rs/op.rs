use crate::condition::Cond;
use crate::pipe::Pipe;
use cmd_help::CmdHelp;
use rstream::Integer;

#[derive(Debug, Clone, PartialEq, CmdHelp)]
pub(crate) enum Op {
    /* **************************************** 访问 **************************************** */
    /// :peek       打印每个经过的数据。
    ///             :peek
    Peek,
    /* **************************************** 转换 **************************************** */
    /// :map        对每个数据做算术运算，溢出时回绕。
    ///             :map <arith>
    ///                 <arith> 算术表达式：+n、-n、*n、/n、%n、^n，其中/和%的n不能为0，^的n不能为负。
    ///             例如：
    ///                 :map *2
    ///                 :map %7
    ///                 :map ^3
    Map(Arith),
    /* **************************************** 筛选 **************************************** */
    /// :skip       丢弃前N个数据。
    ///             :skip <count>
    ///             例如：
    ///                 :skip 10
    Skip { count: usize },
    /// :take       保留前N个数据，之后不再读取输入。
    ///             :take <count>
    ///             例如：
    ///                 :take 10
    Take { count: usize },
    /// :filter     保留满足条件的数据。
    ///             :filter <cond>
    ///                 <cond>  条件，参考`-h cond`。
    ///             例如：
    ///                 :filter %17
    ///                 :filter >=100
    Filter(Cond),
    /// :skipwhile  丢弃开头连续满足条件的数据。
    ///             :skipwhile <cond>
    ///                 <cond>  条件，参考`-h cond`。
    SkipWhile(Cond),
    /// :takewhile  保留开头连续满足条件的数据，首个不满足条件的数据之后结束。
    ///             :takewhile <cond>
    ///                 <cond>  条件，参考`-h cond`。
    TakeWhile(Cond),
}

/// 算术运算，溢出时回绕
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub(crate) enum Arith {
    Add(Integer),
    Sub(Integer),
    Mul(Integer),
    /// 除数不为0
    Div(Integer),
    /// 除数不为0
    Rem(Integer),
    Pow(u32),
}

impl Arith {
    pub(crate) fn apply(self, value: Integer) -> Integer {
        match self {
            Arith::Add(n) => value.wrapping_add(n),
            Arith::Sub(n) => value.wrapping_sub(n),
            Arith::Mul(n) => value.wrapping_mul(n),
            Arith::Div(n) => value.wrapping_div(n),
            Arith::Rem(n) => value.wrapping_rem(n),
            Arith::Pow(exp) => value.wrapping_pow(exp),
        }
    }
}

impl Op {
    pub(crate) fn wrap(self, pipe: Pipe) -> Pipe {
        match self {
            Op::Peek => pipe.op_inspect(|item| println_notice!("{item}")),
            Op::Map(arith) => pipe.op_map(move |item| arith.apply(*item)),
            Op::Skip { count } => pipe.op_skip(count),
            Op::Take { count } => pipe.op_take(count),
            Op::Filter(cond) => pipe.op_filter(move |item| cond.test(*item)),
            Op::SkipWhile(cond) => pipe.op_skip_while(move |item| cond.test(*item)),
            Op::TakeWhile(cond) => pipe.op_take_while(move |item| cond.test(*item)),
        }
    }
}
