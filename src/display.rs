//! Line-by-line view of a consultation, top line first, for the hexagram
//! components to render directly.

use serde::{Deserialize, Serialize};

use crate::codec::{reverse_for_display, LineValue, Reading};
use crate::consultation::Consultation;

/// Whether the transformed hexagram shows changing markers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum MarkerPolicy {
    /// Changing-ness belongs to the original reading only.
    #[default]
    Suppress,
    /// Mark the positions that changed.
    InheritOriginal,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DisplayLine {
    /// 1 is the bottom line.
    pub position: u8,
    pub value: LineValue,
    pub changing: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ConsultationView {
    pub consultation: Consultation,
    pub original: Vec<DisplayLine>,
    pub transformed: Option<Vec<DisplayLine>>,
}

impl ConsultationView {
    pub fn new(consultation: Consultation, policy: MarkerPolicy) -> Self {
        let original = display_lines(&consultation);
        let transformed = transformed_display_lines(&consultation, policy);
        Self {
            consultation,
            original,
            transformed,
        }
    }
}

pub fn display_lines(consultation: &Consultation) -> Vec<DisplayLine> {
    let mask = consultation.changing;
    lines_top_down(consultation.reading(), |index| mask.is_changing(index))
}

/// `None` when the reading has no changing lines.
pub fn transformed_display_lines(
    consultation: &Consultation,
    policy: MarkerPolicy,
) -> Option<Vec<DisplayLine>> {
    let transformed = consultation.transformed.as_ref()?;
    let reading = transformed.code.to_reading();
    let mask = consultation.changing;
    Some(lines_top_down(&reading, |index| match policy {
        MarkerPolicy::Suppress => false,
        MarkerPolicy::InheritOriginal => mask.is_changing(index),
    }))
}

// Pair each line with its flag while still bottom-first, then reverse once.
fn lines_top_down(reading: &Reading, changing: impl Fn(usize) -> bool) -> Vec<DisplayLine> {
    let bottom_up: Vec<DisplayLine> = reading
        .lines()
        .iter()
        .enumerate()
        .map(|(index, &value)| DisplayLine {
            position: index as u8 + 1,
            value,
            changing: changing(index),
        })
        .collect();
    reverse_for_display(&bottom_up)
}

/// Plain-text rendering of a single line, as printed in debug output.
pub fn line_glyph(value: LineValue) -> &'static str {
    match value {
        LineValue::YoungYin => "——— ——— 8",
        LineValue::YoungYang => "——————— 7",
        LineValue::OldYin => "———O——— 6",
        LineValue::OldYang => "———X——— 9",
    }
}

/// Whole hexagram as text, top line first.
pub fn render_text(lines: &[DisplayLine]) -> String {
    lines
        .iter()
        .map(|line| line_glyph(line.value))
        .collect::<Vec<_>>()
        .join("\n")
}
