use serde::{Deserialize, Serialize};

/// The eight three-line figures a hexagram is stacked from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Trigram {
    Qian,
    Zhen,
    Kan,
    Gen,
    Kun,
    Xun,
    Li,
    Dui,
}

/// King Wen numbers by lower trigram (row) and upper trigram (column), both in
/// [`Trigram::ALL`] order.
const KING_WEN: [[u32; 8]; 8] = [
    [1, 34, 5, 26, 11, 9, 14, 43],
    [25, 51, 3, 27, 24, 42, 21, 17],
    [6, 40, 29, 4, 7, 59, 64, 47],
    [33, 62, 39, 52, 15, 53, 56, 31],
    [12, 16, 8, 23, 2, 20, 35, 45],
    [44, 32, 48, 18, 46, 57, 50, 28],
    [13, 55, 63, 22, 36, 37, 30, 49],
    [10, 54, 60, 41, 19, 61, 38, 58],
];

/// Number (1 to 64) of the hexagram stacked from two trigrams.
pub fn hexagram_number(lower: Trigram, upper: Trigram) -> u32 {
    KING_WEN[lower.index()][upper.index()]
}

/// Lower and upper trigram of a hexagram number, `None` outside 1 to 64.
pub fn trigrams_for_number(number: u32) -> Option<(Trigram, Trigram)> {
    KING_WEN.iter().enumerate().find_map(|(row, numbers)| {
        numbers
            .iter()
            .position(|&n| n == number)
            .map(|column| (Trigram::ALL[row], Trigram::ALL[column]))
    })
}

impl Trigram {
    /// Ordered as the rows and columns of the traditional lookup matrix.
    pub const ALL: [Trigram; 8] = [
        Trigram::Qian,
        Trigram::Zhen,
        Trigram::Kan,
        Trigram::Gen,
        Trigram::Kun,
        Trigram::Xun,
        Trigram::Li,
        Trigram::Dui,
    ];

    /// Row or column in the lookup matrix.
    pub fn index(self) -> usize {
        match self {
            Trigram::Qian => 0,
            Trigram::Zhen => 1,
            Trigram::Kan => 2,
            Trigram::Gen => 3,
            Trigram::Kun => 4,
            Trigram::Xun => 5,
            Trigram::Li => 6,
            Trigram::Dui => 7,
        }
    }

    pub fn from_lines(bottom: bool, middle: bool, top: bool) -> Self {
        match (bottom, middle, top) {
            (true, true, true) => Trigram::Qian,
            (true, false, false) => Trigram::Zhen,
            (false, true, false) => Trigram::Kan,
            (false, false, true) => Trigram::Gen,
            (false, false, false) => Trigram::Kun,
            (false, true, true) => Trigram::Xun,
            (true, false, true) => Trigram::Li,
            (true, true, false) => Trigram::Dui,
        }
    }

    /// Yang flags bottom to top.
    pub fn lines(self) -> [bool; 3] {
        match self {
            Trigram::Qian => [true, true, true],
            Trigram::Zhen => [true, false, false],
            Trigram::Kan => [false, true, false],
            Trigram::Gen => [false, false, true],
            Trigram::Kun => [false, false, false],
            Trigram::Xun => [false, true, true],
            Trigram::Li => [true, false, true],
            Trigram::Dui => [true, true, false],
        }
    }

    pub fn symbol(self) -> char {
        match self {
            Trigram::Qian => '☰',
            Trigram::Zhen => '☳',
            Trigram::Kan => '☵',
            Trigram::Gen => '☶',
            Trigram::Kun => '☷',
            Trigram::Xun => '☴',
            Trigram::Li => '☲',
            Trigram::Dui => '☱',
        }
    }

    pub fn name_pinyin(self) -> &'static str {
        match self {
            Trigram::Qian => "Qián",
            Trigram::Zhen => "Zhèn",
            Trigram::Kan => "Kǎn",
            Trigram::Gen => "Gèn",
            Trigram::Kun => "Kūn",
            Trigram::Xun => "Xùn",
            Trigram::Li => "Lí",
            Trigram::Dui => "Duì",
        }
    }
}
