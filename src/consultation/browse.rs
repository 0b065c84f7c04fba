//! Browsing the whole reference table rather than one consultation.

use std::collections::HashSet;

use anyhow::{anyhow, ensure, Context, Result};
use serde::Serialize;

use super::source::{check_record, HexagramRecord, HexagramSource};
use crate::codec::{hexagram_number, Binary, Trigram};
use crate::log_info;

const ENABLE_LOGS: bool = true;

/// One square of the 8x8 trigram matrix.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MatrixCell {
    pub lower: Trigram,
    pub upper: Trigram,
    pub number: u32,
    pub binary: Binary,
}

/// Rows by lower trigram, columns by upper trigram, both in [`Trigram::ALL`] order.
pub fn traditional_matrix() -> Vec<Vec<MatrixCell>> {
    Trigram::ALL
        .iter()
        .map(|&lower| {
            Trigram::ALL
                .iter()
                .map(|&upper| MatrixCell {
                    lower,
                    upper,
                    number: hexagram_number(lower, upper),
                    binary: Binary::from_trigrams(lower, upper),
                })
                .collect()
        })
        .collect()
}

/// All 64 records sorted by number, each checked against the key its number
/// belongs under.
pub fn list_hexagrams<S>(source: &S) -> Result<Vec<HexagramRecord>>
where
    S: HexagramSource + ?Sized,
{
    let mut records = source
        .fetch_all_hexagram_records()
        .context("failed to list hexagrams")?;

    let mut seen = HashSet::new();
    for record in &records {
        let binary = Binary::for_number(record.number)
            .ok_or_else(|| anyhow!("hexagram number {} is out of range", record.number))?;
        check_record(record, &binary)?;
        ensure!(
            seen.insert(record.number),
            "hexagram {} is listed twice",
            record.number
        );
    }
    ensure!(
        records.len() == 64,
        "expected 64 hexagrams, got {}",
        records.len()
    );

    records.sort_by_key(|record| record.number);
    log_info!("Listed {} hexagrams", records.len());
    Ok(records)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consultation::LineText;

    struct Table(Vec<HexagramRecord>);

    impl HexagramSource for Table {
        fn fetch_hexagram_record(&self, binary: &Binary) -> Result<HexagramRecord> {
            self.0
                .iter()
                .find(|record| record.binary == binary.as_str())
                .cloned()
                .ok_or_else(|| anyhow!("no hexagram with binary {binary}"))
        }

        fn fetch_all_hexagram_records(&self) -> Result<Vec<HexagramRecord>> {
            Ok(self.0.clone())
        }
    }

    fn record(number: u32) -> HexagramRecord {
        HexagramRecord {
            id: number as i32,
            number,
            name_zh: String::new(),
            name_en: format!("Hexagram {number}"),
            name_es: String::new(),
            pinyin: String::new(),
            binary: Binary::for_number(number).unwrap().to_string(),
            judgment_zh: String::new(),
            judgment_en: String::new(),
            judgment_es: String::new(),
            judgment_pinyin: String::new(),
            lines: (1..=6)
                .map(|line_number| LineText {
                    line_number,
                    text_zh: String::new(),
                    text_en: String::new(),
                    text_es: String::new(),
                    text_pinyin: String::new(),
                })
                .collect(),
        }
    }

    fn full_table() -> Table {
        // Highest number first, so listing has to sort.
        Table((1..=64).rev().map(record).collect())
    }

    #[test]
    fn matrix_covers_each_hexagram_once() {
        let matrix = traditional_matrix();
        assert_eq!(matrix.len(), 8);

        let mut numbers: Vec<u32> = matrix
            .iter()
            .flatten()
            .map(|cell| {
                assert_eq!(cell.binary.hexagram_number(), cell.number);
                assert_eq!(cell.binary.lower_trigram(), cell.lower);
                assert_eq!(cell.binary.upper_trigram(), cell.upper);
                cell.number
            })
            .collect();
        numbers.sort_unstable();
        assert_eq!(numbers, (1..=64).collect::<Vec<_>>());

        assert_eq!(matrix[0][1].number, 34);
        assert_eq!(matrix[0][1].binary.as_str(), "111100");
    }

    #[test]
    fn listing_is_sorted_by_number() {
        let listed = list_hexagrams(&full_table()).unwrap();
        let numbers: Vec<u32> = listed.iter().map(|record| record.number).collect();
        assert_eq!(numbers, (1..=64).collect::<Vec<_>>());
        assert_eq!(listed[10].binary, "111000");
    }

    #[test]
    fn listing_rejects_incomplete_or_inconsistent_tables() {
        let mut missing = full_table();
        missing.0.pop();
        assert!(list_hexagrams(&missing).is_err());

        let mut duplicated = full_table();
        duplicated.0[0] = record(1);
        assert!(list_hexagrams(&duplicated).is_err());

        let mut swapped = full_table();
        swapped.0[0].binary = "000000".to_string();
        let err = list_hexagrams(&swapped).unwrap_err();
        assert!(format!("{err:#}").contains("000000"), "{err:#}");

        let mut short = full_table();
        short.0[3].lines.truncate(5);
        assert!(list_hexagrams(&short).is_err());
    }

    #[test]
    fn default_listing_goes_through_single_lookups() {
        struct Lookups(Table);

        impl HexagramSource for Lookups {
            fn fetch_hexagram_record(&self, binary: &Binary) -> Result<HexagramRecord> {
                self.0.fetch_hexagram_record(binary)
            }
        }

        let listed = list_hexagrams(&Lookups(full_table())).unwrap();
        assert_eq!(listed.len(), 64);
        assert_eq!(listed[62].number, 63);
        assert_eq!(listed[62].binary, "101010");
    }
}
