//! 惰性、拉取式的流水线库。
//!
//! 流水线由一串阶段组成，每个阶段都实现[`Extract`]协议（`advance`/`get`），
//! 中间操作只负责组装阶段，直到调用单步操作或终结操作时才逐个拉取元素。
//!
//! ```
//! use rstream::generate::counter;
//!
//! let sum = counter(0).take(99).filter(|n| n % 17 == 0).map(|n| n * n).fold(0, |acc, n| acc + n);
//! assert_eq!(15895, sum);
//! ```

pub mod err;
pub mod extract;
pub mod generate;
pub mod item;
pub mod source;
pub mod stage;
pub mod stream;

pub use err::StreamErr;
pub use extract::Extract;
pub use item::{Enumerated, Optional};
pub use source::Sequence;
pub use stream::{IntoIter, Stream};

/// 整数类型
pub type Integer = i64;

/// 以借用的集合为数据源构建流水线，元素为集合元素的引用。
pub fn from<'a, C>(collection: &'a C) -> Stream<Sequence<<&'a C as IntoIterator>::IntoIter>>
where
    C: ?Sized,
    &'a C: IntoIterator,
{
    Stream::new(Sequence::new(collection.into_iter()))
}

/// 以任意可迭代对象为数据源构建流水线，流水线持有该对象。
pub fn from_iter<I: IntoIterator>(iterable: I) -> Stream<Sequence<I::IntoIter>> {
    Stream::new(Sequence::new(iterable.into_iter()))
}
