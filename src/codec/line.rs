use serde::{Deserialize, Serialize};

use super::error::UnknownLineValue;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Polarity {
    Yin,
    Yang,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Age {
    /// Changing line.
    Old,
    /// Stable line.
    Young,
}

/// One cast line. The discriminant is the traditional line number.
///
/// On the wire a line is its bare digit (`6`, `7`, `8` or `9`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub enum LineValue {
    OldYin = 6,
    YoungYang = 7,
    YoungYin = 8,
    OldYang = 9,
}

impl LineValue {
    pub const ALL: [LineValue; 4] = [
        LineValue::OldYin,
        LineValue::YoungYang,
        LineValue::YoungYin,
        LineValue::OldYang,
    ];

    pub fn from_digit(digit: u8) -> Option<Self> {
        match digit {
            6 => Some(LineValue::OldYin),
            7 => Some(LineValue::YoungYang),
            8 => Some(LineValue::YoungYin),
            9 => Some(LineValue::OldYang),
            _ => None,
        }
    }

    pub fn from_char(c: char) -> Option<Self> {
        match c {
            '6' => Some(LineValue::OldYin),
            '7' => Some(LineValue::YoungYang),
            '8' => Some(LineValue::YoungYin),
            '9' => Some(LineValue::OldYang),
            _ => None,
        }
    }

    pub fn as_digit(self) -> u8 {
        self as u8
    }

    pub fn as_char(self) -> char {
        match self {
            LineValue::OldYin => '6',
            LineValue::YoungYang => '7',
            LineValue::YoungYin => '8',
            LineValue::OldYang => '9',
        }
    }

    pub fn polarity(self) -> Polarity {
        match self {
            LineValue::YoungYang | LineValue::OldYang => Polarity::Yang,
            LineValue::OldYin | LineValue::YoungYin => Polarity::Yin,
        }
    }

    pub fn age(self) -> Age {
        match self {
            LineValue::OldYin | LineValue::OldYang => Age::Old,
            LineValue::YoungYang | LineValue::YoungYin => Age::Young,
        }
    }

    pub fn is_yang(self) -> bool {
        self.polarity() == Polarity::Yang
    }

    pub fn is_changing(self) -> bool {
        self.age() == Age::Old
    }

    /// The stable line an old line turns into. Young lines are returned unchanged.
    pub fn transformed(self) -> Self {
        match self {
            LineValue::OldYin => LineValue::YoungYang,
            LineValue::OldYang => LineValue::YoungYin,
            stable => stable,
        }
    }
}

impl From<LineValue> for u8 {
    fn from(value: LineValue) -> Self {
        value.as_digit()
    }
}

impl TryFrom<u8> for LineValue {
    type Error = UnknownLineValue;

    fn try_from(digit: u8) -> Result<Self, Self::Error> {
        LineValue::from_digit(digit).ok_or_else(|| UnknownLineValue(digit.to_string()))
    }
}

impl TryFrom<char> for LineValue {
    type Error = UnknownLineValue;

    fn try_from(c: char) -> Result<Self, Self::Error> {
        LineValue::from_char(c).ok_or_else(|| UnknownLineValue(c.to_string()))
    }
}

impl std::fmt::Display for LineValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_char())
    }
}
