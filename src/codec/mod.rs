//! Hexagram codec: a cast reading, its consultation code, and everything
//! derived from it (binary lookup key, changing lines, transformed hexagram).
//!
//! Every function here is pure. Randomness and reference data live with the
//! callers.

pub mod derive;
pub mod error;
pub mod line;
pub mod reading;
pub mod trigram;

pub use derive::{
    changing_mask, derive_binary, derive_transformed, encode_consultation_code,
    reverse_for_display, Transformed,
};
pub use error::{CodecError, Fault, UnknownLineValue};
pub use line::{Age, LineValue, Polarity};
pub use reading::{Binary, ChangingMask, ConsultationCode, Reading};
pub use trigram::{hexagram_number, trigrams_for_number, Trigram};

/// Lines in a hexagram.
pub const LINE_COUNT: usize = 6;
