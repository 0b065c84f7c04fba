//! A consultation is one cast reading together with everything the UI and the
//! reference-data lookup need from it. Built once, never mutated.

pub mod browse;
pub mod source;

use std::str::FromStr;

use serde::Serialize;

use crate::codec::{
    changing_mask, derive_binary, derive_transformed, encode_consultation_code, Binary,
    ChangingMask, CodecError, ConsultationCode, Reading, Transformed,
};
use crate::log_debug;

pub use browse::{list_hexagrams, traditional_matrix, MatrixCell};
pub use source::{
    resolve, HexagramRecord, HexagramSource, LineText, ReadingSource, ResolvedConsultation,
};

const ENABLE_LOGS: bool = true;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Consultation {
    pub code: ConsultationCode,
    pub binary: Binary,
    pub changing: ChangingMask,
    pub transformed: Option<Transformed>,
    #[serde(skip)]
    reading: Reading,
}

impl Consultation {
    pub fn from_reading(reading: Reading) -> Self {
        let code = encode_consultation_code(&reading);
        Self::derive(code, reading)
    }

    /// Rehydrates a consultation from a stored code.
    pub fn from_code(raw: &str) -> Result<Self, CodecError> {
        let code = ConsultationCode::parse(raw)?;
        let reading = code.to_reading();
        Ok(Self::derive(code, reading))
    }

    fn derive(code: ConsultationCode, reading: Reading) -> Self {
        let binary = derive_binary(&code);
        let changing = changing_mask(&code);
        let transformed = derive_transformed(&code);

        log_debug!(
            "Consultation {} -> binary {} ({} changing, transformed {})",
            code,
            binary,
            changing.count(),
            transformed
                .as_ref()
                .map(|t| t.binary.as_str())
                .unwrap_or("none")
        );

        Self {
            code,
            binary,
            changing,
            transformed,
            reading,
        }
    }

    pub fn reading(&self) -> &Reading {
        &self.reading
    }

    pub fn has_transformation(&self) -> bool {
        self.transformed.is_some()
    }

    /// One-based line numbers of the changing lines, bottom first.
    pub fn changing_line_numbers(&self) -> Vec<u32> {
        self.changing
            .positions()
            .map(|index| index as u32 + 1)
            .collect()
    }

    /// Reference-data keys in query order: primary first, then the transformed
    /// hexagram if there is one.
    pub fn lookup_keys(&self) -> Vec<&Binary> {
        std::iter::once(&self.binary)
            .chain(self.transformed.as_ref().map(|t| &t.binary))
            .collect()
    }
}

impl From<Reading> for Consultation {
    fn from(reading: Reading) -> Self {
        Self::from_reading(reading)
    }
}

impl FromStr for Consultation {
    type Err = CodecError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_code(s)
    }
}
