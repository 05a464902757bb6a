use cmd_help::CmdHelp;
use rstream::Integer;

/// 整数条件
#[derive(Debug, Clone, Copy, Eq, PartialEq, CmdHelp)]
pub(crate) enum Cond {
    /// <n      小于n。
    Lt(Integer),
    /// <=n     小于等于n。
    Le(Integer),
    /// >n      大于n。
    Gt(Integer),
    /// >=n     大于等于n。
    Ge(Integer),
    /// =n      等于n。
    Eq(Integer),
    /// !=n     不等于n。
    Ne(Integer),
    /// %n      能被n整除，n不能为0。
    ///     例如：
    ///         %17
    Divisible(Integer),
    /// !%n     不能被n整除，n不能为0。
    NotDivisible(Integer),
}

impl Cond {
    pub(crate) fn test(&self, value: Integer) -> bool {
        match *self {
            Cond::Lt(n) => value < n,
            Cond::Le(n) => value <= n,
            Cond::Gt(n) => value > n,
            Cond::Ge(n) => value >= n,
            Cond::Eq(n) => value == n,
            Cond::Ne(n) => value != n,
            Cond::Divisible(n) => value.wrapping_rem(n) == 0,
            Cond::NotDivisible(n) => value.wrapping_rem(n) != 0,
        }
    }
}
