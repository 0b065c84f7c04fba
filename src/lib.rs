pub mod codec;
pub mod consultation;
pub mod display;
pub mod history;
pub mod settings;
pub mod utils;

#[cfg(feature = "desktop")]
mod commands;
#[cfg(feature = "desktop")]
pub mod plugin;

pub use codec::{
    changing_mask, derive_binary, derive_transformed, encode_consultation_code,
    reverse_for_display, Binary, ChangingMask, CodecError, ConsultationCode, LineValue, Reading,
    Transformed,
};
pub use consultation::{
    list_hexagrams, traditional_matrix, Consultation, HexagramRecord, HexagramSource, MatrixCell,
    ReadingSource,
};
pub use display::{ConsultationView, DisplayLine, MarkerPolicy};
pub use history::HistoryEntry;
pub use settings::{Language, LanguagePreferences, SettingsStore};

#[cfg(feature = "desktop")]
/// State the desktop plugin keeps managed on the app handle.
pub struct PluginState {
    pub settings: SettingsStore,
}
