//! 生成器：不依赖已有集合的数据源。

use crate::Integer;
use crate::err::StreamErr;
use crate::source::{Counter, Range, Repeat};
use crate::stream::Stream;

/// 从`from`开始逐一递增的整数。
///
/// 实际上是无限的，但产出[`Integer::MAX`]之后即耗尽，不会溢出回绕。
pub fn counter(from: Integer) -> Stream<Counter> {
    Stream::new(Counter::new(from))
}

/// 从`start`（包含）到`end`（不包含）按`step`步进的整数，`step`为负时递减，为0时报错。
pub fn range(start: Integer, end: Integer, step: Integer) -> Result<Stream<Range>, StreamErr> {
    Ok(Stream::new(Range::new(start, end, step)?))
}

/// 无限重复同一个值。
pub fn repeat<T>(value: T) -> Stream<Repeat<T>> {
    Stream::new(Repeat::new(value, None))
}

/// 重复同一个值`count`次。
pub fn repeat_n<T>(value: T, count: usize) -> Stream<Repeat<T>> {
    Stream::new(Repeat::new(value, Some(count)))
}
