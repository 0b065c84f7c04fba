//! Reading-history records. Storage is the host's business; this module owns
//! the record shape, its ordering, and turning stored codes back into
//! consultations.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::codec::CodecError;
use crate::consultation::Consultation;
use crate::{log_debug, log_warn};

const ENABLE_LOGS: bool = true;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HistoryEntry {
    pub id: String,
    pub title: String,
    /// Kept as the raw stored string; it is only trusted after [`HistoryEntry::rehydrate`].
    pub consultation_code: String,
    pub timestamp: DateTime<Utc>,
}

impl HistoryEntry {
    pub fn record(title: impl Into<String>, consultation: &Consultation) -> Self {
        Self::record_at(title, consultation, Utc::now())
    }

    pub fn record_at(
        title: impl Into<String>,
        consultation: &Consultation,
        timestamp: DateTime<Utc>,
    ) -> Self {
        let entry = Self {
            id: Uuid::new_v4().to_string(),
            title: title.into(),
            consultation_code: consultation.code.to_string(),
            timestamp,
        };
        log_debug!(
            "Recorded history entry {} for {}",
            entry.id,
            entry.consultation_code
        );
        entry
    }

    pub fn rehydrate(&self) -> Result<Consultation, CodecError> {
        Consultation::from_code(&self.consultation_code)
    }
}

/// Newest first. Entries with the same timestamp are ordered by id so the
/// list is stable across reloads.
pub fn sort_newest_first(entries: &mut [HistoryEntry]) {
    entries.sort_by(|a, b| {
        b.timestamp
            .cmp(&a.timestamp)
            .then_with(|| a.id.cmp(&b.id))
    });
}

#[derive(Debug, Default)]
pub struct Rehydrated {
    pub consultations: Vec<(HistoryEntry, Consultation)>,
    pub rejected: Vec<(HistoryEntry, CodecError)>,
}

/// Rehydrates every entry, setting aside the ones whose stored code is corrupt
/// instead of failing the whole list.
pub fn rehydrate_all(entries: impl IntoIterator<Item = HistoryEntry>) -> Rehydrated {
    let mut out = Rehydrated::default();
    for entry in entries {
        match entry.rehydrate() {
            Ok(consultation) => out.consultations.push((entry, consultation)),
            Err(err) => {
                log_warn!("Skipping history entry {}: {}", entry.id, err);
                out.rejected.push((entry, err));
            }
        }
    }
    out
}
