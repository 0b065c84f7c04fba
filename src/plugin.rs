use tauri::{
    plugin::{Builder, TauriPlugin},
    Manager, Runtime,
};

use crate::{commands, log_error, log_info, settings::SettingsStore, utils::logging, PluginState};

const ENABLE_LOGS: bool = true;

/// Registers the `iching` commands and loads settings from the app config dir.
pub fn init<R: Runtime>() -> TauriPlugin<R> {
    Builder::new("iching")
        .invoke_handler(tauri::generate_handler![
            commands::encode_reading,
            commands::decode_consultation,
            commands::display_consultation,
            commands::hexagram_matrix,
            commands::get_language_preferences,
            commands::set_language,
            commands::set_marker_policy,
        ])
        .setup(|app, _api| {
            logging::init();

            let config_dir = app.path().app_config_dir()?;
            let settings_path = config_dir.join("settings.json");
            let settings = SettingsStore::new(settings_path).map_err(|err| {
                log_error!("Failed to load settings: {err:#}");
                err
            })?;

            app.manage(PluginState { settings });
            log_info!("I Ching plugin ready");
            Ok(())
        })
        .build()
}
