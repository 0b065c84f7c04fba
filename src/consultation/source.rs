//! Contracts with the collaborators on either side of the codec: whatever casts
//! readings, and whatever holds the hexagram reference data.

use anyhow::{ensure, Context, Result};
use serde::{Deserialize, Serialize};

use super::Consultation;
use crate::codec::{Binary, Reading, LINE_COUNT};
use crate::log_info;

const ENABLE_LOGS: bool = true;

/// Produces freshly cast readings (coins, yarrow stalks, a seeded test double).
pub trait ReadingSource {
    fn cast(&mut self) -> Result<Reading>;

    fn consult(&mut self) -> Result<Consultation> {
        let reading = self.cast().context("failed to cast a reading")?;
        Ok(Consultation::from_reading(reading))
    }
}

/// Looks up hexagram reference data by binary key.
pub trait HexagramSource {
    fn fetch_hexagram_record(&self, binary: &Binary) -> Result<HexagramRecord>;

    /// Every record, in any order. Stores that can list their table in one
    /// query should override this; the default looks up all 64 keys.
    fn fetch_all_hexagram_records(&self) -> Result<Vec<HexagramRecord>> {
        Binary::all()
            .map(|binary| self.fetch_hexagram_record(&binary))
            .collect()
    }
}

/// Commentary for one line of a hexagram.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LineText {
    pub line_number: u32,
    pub text_zh: String,
    pub text_en: String,
    pub text_es: String,
    #[serde(default)]
    pub text_pinyin: String,
}

/// Reference data for one of the 64 hexagrams, in the shape the backend
/// returns it. Records without all six `lines`, numbered 1 to 6 in order,
/// are rejected by [`resolve`] and the browse listing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HexagramRecord {
    pub id: i32,
    pub number: u32,
    pub name_zh: String,
    pub name_en: String,
    #[serde(default)]
    pub name_es: String,
    #[serde(alias = "name_pinyin")]
    pub pinyin: String,
    pub binary: String,
    pub judgment_zh: String,
    pub judgment_en: String,
    pub judgment_es: String,
    #[serde(default)]
    pub judgment_pinyin: String,
    #[serde(alias = "changing_lines")]
    pub lines: Vec<LineText>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ResolvedConsultation {
    pub consultation: Consultation,
    pub primary: HexagramRecord,
    pub transformed: Option<HexagramRecord>,
}

impl ResolvedConsultation {
    /// Line commentary of the primary hexagram restricted to the lines that
    /// are changing in this reading.
    pub fn changing_line_texts(&self) -> Vec<&LineText> {
        let numbers = self.consultation.changing_line_numbers();
        self.primary
            .lines
            .iter()
            .filter(|line| numbers.contains(&line.line_number))
            .collect()
    }
}

/// Fetches the primary record, and the transformed record when the reading
/// has changing lines.
pub fn resolve<S>(consultation: &Consultation, source: &S) -> Result<ResolvedConsultation>
where
    S: HexagramSource + ?Sized,
{
    let primary = fetch_checked(source, &consultation.binary)?;

    let transformed = match &consultation.transformed {
        Some(t) => Some(fetch_checked(source, &t.binary)?),
        None => None,
    };

    log_info!(
        "Resolved consultation {} to hexagram {}{}",
        consultation.code,
        primary.number,
        transformed
            .as_ref()
            .map(|record| format!(" -> {}", record.number))
            .unwrap_or_default()
    );

    Ok(ResolvedConsultation {
        consultation: consultation.clone(),
        primary,
        transformed,
    })
}

fn fetch_checked<S>(source: &S, binary: &Binary) -> Result<HexagramRecord>
where
    S: HexagramSource + ?Sized,
{
    let record = source
        .fetch_hexagram_record(binary)
        .with_context(|| format!("failed to fetch hexagram {binary}"))?;
    check_record(&record, binary)?;
    Ok(record)
}

/// A record must sit under the key it was asked for and carry one entry per line.
pub(crate) fn check_record(record: &HexagramRecord, binary: &Binary) -> Result<()> {
    ensure!(
        record.binary == binary.as_str(),
        "asked for hexagram {binary} but got {} (number {})",
        record.binary,
        record.number
    );

    let numbers: Vec<u32> = record.lines.iter().map(|line| line.line_number).collect();
    let in_order = numbers.iter().zip(1..).all(|(&n, expected)| n == expected);
    ensure!(
        numbers.len() == LINE_COUNT && in_order,
        "hexagram {} has line entries {:?}, expected 1 to {}",
        record.number,
        numbers,
        LINE_COUNT
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;
    use std::collections::HashMap;

    use anyhow::anyhow;
    use serde_json::json;

    use super::*;

    struct FakeDb {
        records: HashMap<String, HexagramRecord>,
        calls: RefCell<Vec<String>>,
    }

    impl FakeDb {
        fn new(entries: &[(u32, &str)]) -> Self {
            let records = entries
                .iter()
                .map(|&(number, binary)| (binary.to_string(), record(number, binary)))
                .collect();
            Self {
                records,
                calls: RefCell::new(Vec::new()),
            }
        }
    }

    impl HexagramSource for FakeDb {
        fn fetch_hexagram_record(&self, binary: &Binary) -> Result<HexagramRecord> {
            self.calls.borrow_mut().push(binary.to_string());
            self.records
                .get(binary.as_str())
                .cloned()
                .ok_or_else(|| anyhow!("no hexagram with binary {binary}"))
        }
    }

    fn record(number: u32, binary: &str) -> HexagramRecord {
        HexagramRecord {
            id: number as i32,
            number,
            name_zh: format!("卦{number}"),
            name_en: format!("Hexagram {number}"),
            name_es: format!("Hexagrama {number}"),
            pinyin: format!("gua {number}"),
            binary: binary.to_string(),
            judgment_zh: String::new(),
            judgment_en: format!("Judgment {number}"),
            judgment_es: String::new(),
            judgment_pinyin: String::new(),
            lines: (1..=6)
                .map(|line_number| LineText {
                    line_number,
                    text_zh: String::new(),
                    text_en: format!("{number}.{line_number}"),
                    text_es: String::new(),
                    text_pinyin: String::new(),
                })
                .collect(),
        }
    }

    struct Fixed(Vec<u8>);

    impl ReadingSource for Fixed {
        fn cast(&mut self) -> Result<Reading> {
            Ok(Reading::from_values(&self.0)?)
        }
    }

    #[test]
    fn stable_reading_queries_once() {
        let db = FakeDb::new(&[(1, "111111")]);
        let consultation = Consultation::from_code("777777").unwrap();

        let resolved = resolve(&consultation, &db).unwrap();
        assert_eq!(resolved.primary.number, 1);
        assert!(resolved.transformed.is_none());
        assert_eq!(db.calls.borrow().as_slice(), ["111111"]);
        assert!(resolved.changing_line_texts().is_empty());
    }

    #[test]
    fn changing_reading_queries_primary_then_transformed() {
        let db = FakeDb::new(&[(12, "000111"), (1, "111111")]);
        let consultation = Consultation::from_code("666777").unwrap();

        let resolved = resolve(&consultation, &db).unwrap();
        assert_eq!(resolved.primary.number, 12);
        assert_eq!(resolved.transformed.as_ref().map(|r| r.number), Some(1));
        assert_eq!(db.calls.borrow().as_slice(), ["000111", "111111"]);

        let texts: Vec<&str> = resolved
            .changing_line_texts()
            .iter()
            .map(|line| line.text_en.as_str())
            .collect();
        assert_eq!(texts, vec!["12.1", "12.2", "12.3"]);
    }

    #[test]
    fn missing_record_surfaces_the_key() {
        let db = FakeDb::new(&[]);
        let consultation = Consultation::from_code("787878").unwrap();
        let err = resolve(&consultation, &db).unwrap_err();
        assert!(format!("{err:#}").contains("101010"));
    }

    #[test]
    fn mismatched_record_is_rejected() {
        let mut db = FakeDb::new(&[]);
        db.records.insert("101010".to_string(), record(63, "010101"));
        let consultation = Consultation::from_code("787878").unwrap();
        assert!(resolve(&consultation, &db).is_err());
    }

    #[test]
    fn record_without_six_lines_is_rejected() {
        let consultation = Consultation::from_code("777777").unwrap();

        let mut short = record(1, "111111");
        short.lines.truncate(1);
        let mut db = FakeDb::new(&[]);
        db.records.insert("111111".to_string(), short);
        let err = resolve(&consultation, &db).unwrap_err();
        assert!(format!("{err:#}").contains("[1]"), "{err:#}");

        let mut shuffled = record(1, "111111");
        shuffled.lines.swap(0, 5);
        db.records.insert("111111".to_string(), shuffled);
        assert!(resolve(&consultation, &db).is_err());

        let mut doubled = record(1, "111111");
        doubled.lines.push(doubled.lines[5].clone());
        db.records.insert("111111".to_string(), doubled);
        assert!(resolve(&consultation, &db).is_err());
    }

    #[test]
    fn default_listing_asks_for_every_key() {
        let entries: Vec<(u32, Binary)> = (1..=64)
            .map(|number| (number, Binary::for_number(number).unwrap()))
            .collect();
        let pairs: Vec<(u32, &str)> = entries
            .iter()
            .map(|(number, binary)| (*number, binary.as_str()))
            .collect();
        let db = FakeDb::new(&pairs);

        let records = db.fetch_all_hexagram_records().unwrap();
        assert_eq!(records.len(), 64);
        assert_eq!(db.calls.borrow().len(), 64);
        assert_eq!(db.calls.borrow()[0], "111111");
    }

    #[test]
    fn reading_source_feeds_consultation() {
        let mut source = Fixed(vec![9, 7, 7, 7, 7, 7]);
        let consultation = source.consult().unwrap();
        assert_eq!(consultation.code.as_str(), "977777");
        assert_eq!(
            consultation.transformed.map(|t| t.binary.to_string()),
            Some("011111".to_string())
        );

        let mut broken = Fixed(vec![9, 7, 7]);
        assert!(broken.consult().is_err());
    }

    #[test]
    fn record_accepts_backend_field_names() {
        let record: HexagramRecord = serde_json::from_value(json!({
            "id": 1,
            "number": 1,
            "name_zh": "乾",
            "name_en": "The Creative",
            "name_pinyin": "qián",
            "binary": "111111",
            "judgment_zh": "元亨利貞",
            "judgment_en": "Sublime success.",
            "judgment_es": "Sublime éxito.",
            "changing_lines": [
                { "line_number": 1, "text_zh": "", "text_en": "Hidden dragon.", "text_es": "" }
            ]
        }))
        .unwrap();
        assert_eq!(record.pinyin, "qián");
        assert_eq!(record.lines.len(), 1);
        assert!(record.name_es.is_empty());
    }
}
