//! 流水线的中间阶段：每个阶段持有上游提取器，并自身实现[`Extract`](crate::Extract)。

mod chain;
mod enumerate;
mod filter;
mod flat_map;
mod map;
mod peek;
mod purify;
mod skip;
mod take;
mod zip;

pub use chain::Chain;
pub use enumerate::Enumerate;
pub use filter::{Filter, FilterMap};
pub use flat_map::{FlatMap, Flatten};
pub use map::Map;
pub use peek::{Inspect, Spy};
pub use purify::Purify;
pub use skip::{Skip, SkipWhile};
pub use take::{Take, TakeWhile};
pub use zip::Zip;
