use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize, Serializer};

use super::{
    error::{CodecError, Fault},
    line::LineValue,
    trigram::{self, Trigram},
    LINE_COUNT,
};

/// Six cast lines, index 0 at the bottom.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "Vec<u8>", into = "Vec<u8>")]
pub struct Reading([LineValue; LINE_COUNT]);

impl Reading {
    pub fn new(lines: [LineValue; LINE_COUNT]) -> Self {
        Self(lines)
    }

    /// Builds a reading from raw digits as produced by a caster, bottom line first.
    pub fn from_values(values: &[u8]) -> Result<Self, CodecError> {
        let lines = collect_lines(values.iter().map(|&digit| {
            LineValue::from_digit(digit).ok_or_else(|| digit.to_string())
        }))
        .map_err(CodecError::InvalidReading)?;
        Ok(Self(lines))
    }

    pub fn lines(&self) -> &[LineValue; LINE_COUNT] {
        &self.0
    }

    pub fn has_changing_lines(&self) -> bool {
        self.0.iter().any(|line| line.is_changing())
    }

    /// Every line replaced by its stable counterpart.
    pub fn settled(&self) -> Reading {
        Reading(self.0.map(LineValue::transformed))
    }
}

impl From<Reading> for Vec<u8> {
    fn from(reading: Reading) -> Self {
        reading.0.iter().map(|line| line.as_digit()).collect()
    }
}

impl TryFrom<Vec<u8>> for Reading {
    type Error = CodecError;

    fn try_from(values: Vec<u8>) -> Result<Self, Self::Error> {
        Self::from_values(&values)
    }
}

fn collect_lines<I>(items: I) -> Result<[LineValue; LINE_COUNT], Fault>
where
    I: ExactSizeIterator<Item = Result<LineValue, String>>,
{
    if items.len() != LINE_COUNT {
        return Err(Fault::WrongLength(items.len()));
    }

    let mut lines = [LineValue::YoungYin; LINE_COUNT];
    for (position, (slot, item)) in lines.iter_mut().zip(items).enumerate() {
        *slot = item.map_err(|found| Fault::UnknownValue { position, found })?;
    }
    Ok(lines)
}

/// A reading written as six digits, bottom line first, e.g. `"789678"`.
///
/// Only ever holds six characters from `"6789"`; stored history codes go
/// through [`ConsultationCode::parse`] before use.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct ConsultationCode(String);

impl ConsultationCode {
    pub fn parse(raw: &str) -> Result<Self, CodecError> {
        let chars: Vec<char> = raw.chars().collect();
        collect_lines(chars.into_iter().map(|c| {
            LineValue::from_char(c).ok_or_else(|| c.to_string())
        }))
        .map_err(|fault| CodecError::InvalidConsultationCode {
            code: raw.to_string(),
            fault,
        })?;
        Ok(Self(raw.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn lines(&self) -> impl Iterator<Item = LineValue> + '_ {
        self.0.chars().filter_map(LineValue::from_char)
    }

    pub fn to_reading(&self) -> Reading {
        let mut lines = [LineValue::YoungYin; LINE_COUNT];
        for (slot, line) in lines.iter_mut().zip(self.lines()) {
            *slot = line;
        }
        Reading(lines)
    }

    pub(crate) fn from_reading(reading: &Reading) -> Self {
        Self(reading.0.iter().map(|line| line.as_char()).collect())
    }
}

impl FromStr for ConsultationCode {
    type Err = CodecError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<String> for ConsultationCode {
    type Error = CodecError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<ConsultationCode> for String {
    fn from(code: ConsultationCode) -> Self {
        code.0
    }
}

impl fmt::Display for ConsultationCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Static yin/yang shape of a hexagram: `'1'` for yang, `'0'` for yin,
/// bottom line first. This is the key the hexagram reference data is stored under.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Binary(String);

impl Binary {
    pub(crate) fn from_digits(digits: String) -> Self {
        Self(digits)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_yang(&self, index: usize) -> bool {
        self.0.as_bytes().get(index) == Some(&b'1')
    }

    /// Lines 1 to 3.
    pub fn lower_trigram(&self) -> Trigram {
        Trigram::from_lines(self.is_yang(0), self.is_yang(1), self.is_yang(2))
    }

    /// Lines 4 to 6.
    pub fn upper_trigram(&self) -> Trigram {
        Trigram::from_lines(self.is_yang(3), self.is_yang(4), self.is_yang(5))
    }

    pub fn from_trigrams(lower: Trigram, upper: Trigram) -> Self {
        Self(
            lower
                .lines()
                .into_iter()
                .chain(upper.lines())
                .map(|yang| if yang { '1' } else { '0' })
                .collect(),
        )
    }

    /// Key of the hexagram with the given King Wen number.
    pub fn for_number(number: u32) -> Option<Self> {
        trigram::trigrams_for_number(number)
            .map(|(lower, upper)| Self::from_trigrams(lower, upper))
    }

    /// King Wen number of this shape.
    pub fn hexagram_number(&self) -> u32 {
        trigram::hexagram_number(self.lower_trigram(), self.upper_trigram())
    }

    /// All 64 keys in King Wen order.
    pub fn all() -> impl Iterator<Item = Binary> {
        (1..=64).filter_map(Self::for_number)
    }
}

impl Serialize for Binary {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.0)
    }
}

impl fmt::Display for Binary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Which lines of a reading are changing, aligned with the reading.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
pub struct ChangingMask([bool; LINE_COUNT]);

impl ChangingMask {
    pub(crate) fn new(flags: [bool; LINE_COUNT]) -> Self {
        Self(flags)
    }

    pub fn is_changing(&self, index: usize) -> bool {
        self.0.get(index).copied().unwrap_or(false)
    }

    pub fn any(&self) -> bool {
        self.0.iter().any(|&flag| flag)
    }

    pub fn count(&self) -> usize {
        self.0.iter().filter(|&&flag| flag).count()
    }

    /// Zero-based indices of the changing lines, bottom first.
    pub fn positions(&self) -> impl Iterator<Item = usize> + '_ {
        self.0
            .iter()
            .enumerate()
            .filter_map(|(index, &flag)| flag.then_some(index))
    }

    pub fn as_array(&self) -> &[bool; LINE_COUNT] {
        &self.0
    }
}
