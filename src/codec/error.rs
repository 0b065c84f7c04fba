use thiserror::Error;

/// What was wrong with a six-line input.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Fault {
    #[error("expected 6 lines, got {0}")]
    WrongLength(usize),
    #[error("line {} is {found:?}, expected one of 6, 7, 8, 9", .position + 1)]
    UnknownValue { position: usize, found: String },
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CodecError {
    #[error("invalid reading: {0}")]
    InvalidReading(Fault),
    #[error("invalid consultation code {code:?}: {fault}")]
    InvalidConsultationCode { code: String, fault: Fault },
}

/// A single value outside {6, 7, 8, 9}.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{0:?} is not a line value, expected one of 6, 7, 8, 9")]
pub struct UnknownLineValue(pub String);
