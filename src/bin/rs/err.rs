use rstream::StreamErr;
use std::process::{ExitCode, Termination};
use thiserror::Error;

#[derive(Error, Debug, Eq, PartialEq)]
pub(crate) enum RsErr {
    #[error("[Arg Parse Err] Unable to parse `{arg_value}` in argument `{arg}` of cmd `{cmd}`, error: {error}")]
    ArgParseErr { cmd: &'static str, arg: &'static str, arg_value: String, error: String },

    #[error("[Missing Arg] Missing argument `{arg}` of cmd `{cmd}`")]
    MissingArg { cmd: &'static str, arg: &'static str },

    #[error("[Missing Arg] At least one value for argument `{arg}` is required for cmd `{cmd}`")]
    ArgNotEnough { cmd: &'static str, arg: &'static str },

    #[error("[Bad Arg] Closing bracket (`]`) for argument `{arg}` is required for cmd `{cmd}`")]
    UnclosingMultiArg { cmd: &'static str, arg: &'static str },

    #[error("[Bad Arg] Unexpected closing bracket of argument `{arg}` for cmd `{cmd}`")]
    UnexpectedClosingBracket { cmd: &'static str, arg: &'static str },

    #[error("[Bad Arg] Unknown arguments: {args:?}")]
    UnknownArgs { args: Vec<String> },

    #[error("[Missing Input] An input cmd is required, found: {found:?}")]
    MissingInput { found: Option<String> },

    #[error("[Help] No help for `{0}`")]
    UnknownHelp(String),

    #[error(transparent)]
    Stream(#[from] StreamErr),
}

impl Termination for RsErr {
    fn report(self) -> ExitCode {
        println_err!("{}", self);
        ExitCode::from(self.exit_code())
    }
}

impl RsErr {
    pub(crate) fn termination(self) -> ! {
        let exit_code = self.exit_code();
        self.report();
        std::process::exit(exit_code as i32);
    }

    fn exit_code(&self) -> u8 {
        match self {
            RsErr::ArgParseErr { .. } => 1,
            RsErr::MissingArg { .. } => 2,
            RsErr::ArgNotEnough { .. } => 3,
            RsErr::UnclosingMultiArg { .. } => 4,
            RsErr::UnexpectedClosingBracket { .. } => 5,
            RsErr::UnknownArgs { .. } => 6,
            RsErr::MissingInput { .. } => 7,
            RsErr::UnknownHelp(_) => 8,
            RsErr::Stream(StreamErr::ZeroStep { .. }) => 9,
        }
    }
}
