#[cfg(feature = "desktop")]
const COMMANDS: &[&str] = &[
    "encode_reading",
    "decode_consultation",
    "display_consultation",
    "hexagram_matrix",
    "get_language_preferences",
    "set_language",
    "set_marker_policy",
];

fn main() {
    #[cfg(feature = "desktop")]
    {
        tauri_plugin::Builder::new(COMMANDS).build();
    }
}
