use serde::Serialize;

use super::{
    reading::{Binary, ChangingMask, ConsultationCode, Reading},
    LINE_COUNT,
};

/// The hexagram a reading turns into once its changing lines settle.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Transformed {
    pub code: ConsultationCode,
    pub binary: Binary,
}

pub fn encode_consultation_code(reading: &Reading) -> ConsultationCode {
    ConsultationCode::from_reading(reading)
}

pub fn derive_binary(code: &ConsultationCode) -> Binary {
    let digits = code
        .as_str()
        .chars()
        .map(|c| if matches!(c, '7' | '9') { '1' } else { '0' })
        .collect();
    Binary::from_digits(digits)
}

pub fn changing_mask(code: &ConsultationCode) -> ChangingMask {
    let mut flags = [false; LINE_COUNT];
    for (flag, c) in flags.iter_mut().zip(code.as_str().chars()) {
        *flag = matches!(c, '6' | '9');
    }
    ChangingMask::new(flags)
}

/// `None` when no line is changing.
pub fn derive_transformed(code: &ConsultationCode) -> Option<Transformed> {
    if !changing_mask(code).any() {
        return None;
    }

    let settled = code.to_reading().settled();
    let code = encode_consultation_code(&settled);
    let binary = derive_binary(&code);
    Some(Transformed { code, binary })
}

/// Top line first. Line sequences are stored bottom first everywhere else,
/// so flip only at the point of rendering.
pub fn reverse_for_display<T: Clone>(sequence: &[T]) -> Vec<T> {
    sequence.iter().rev().cloned().collect()
}
