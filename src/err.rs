use crate::Integer;
use thiserror::Error;

#[derive(Error, Debug, Eq, PartialEq)]
pub enum StreamErr {
    #[error("[Range] Step of range `{start}..{end}` must not be zero")]
    ZeroStep { start: Integer, end: Integer },
}
