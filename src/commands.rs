//! Tauri commands exposed by the plugin.

use tauri::State;

use crate::{
    codec::Reading,
    consultation::{traditional_matrix, Consultation, MatrixCell},
    display::{ConsultationView, MarkerPolicy},
    settings::{Language, LanguagePreferences},
    PluginState,
};

#[tauri::command]
pub fn encode_reading(values: Vec<u8>) -> Result<Consultation, String> {
    let reading = Reading::from_values(&values).map_err(|e| e.to_string())?;
    Ok(Consultation::from_reading(reading))
}

#[tauri::command]
pub fn decode_consultation(code: String) -> Result<Consultation, String> {
    Consultation::from_code(&code).map_err(|e| e.to_string())
}

#[tauri::command]
pub fn display_consultation(
    code: String,
    state: State<PluginState>,
) -> Result<ConsultationView, String> {
    let consultation = Consultation::from_code(&code).map_err(|e| e.to_string())?;
    Ok(ConsultationView::new(
        consultation,
        state.settings.marker_policy(),
    ))
}

#[tauri::command]
pub fn hexagram_matrix() -> Vec<Vec<MatrixCell>> {
    traditional_matrix()
}

#[tauri::command]
pub fn get_language_preferences(state: State<PluginState>) -> Result<LanguagePreferences, String> {
    Ok(state.settings.languages())
}

#[tauri::command]
pub fn set_language(
    language: Language,
    enabled: bool,
    state: State<PluginState>,
) -> Result<LanguagePreferences, String> {
    state
        .settings
        .set_language(language, enabled)
        .map_err(|e| e.to_string())
}

#[tauri::command]
pub fn set_marker_policy(policy: MarkerPolicy, state: State<PluginState>) -> Result<(), String> {
    state
        .settings
        .update_marker_policy(policy)
        .map_err(|e| e.to_string())
}
