//! Copying the display to the system clipboard.

use arboard::Clipboard;

use super::formatting::format_raw;
use super::keypad::Keypad;

/// Copy text to the system clipboard.
///
/// Returns `Ok(())` on success, or an error message on failure.
pub fn copy_to_clipboard(text: &str) -> Result<(), String> {
    let mut clipboard =
        Clipboard::new().map_err(|e| format!("Failed to access clipboard: {}", e))?;

    clipboard
        .set_text(text.to_string())
        .map_err(|e| format!("Failed to copy to clipboard: {}", e))
}

/// The text `copy` puts on the clipboard: the display value without
/// grouping, or the display text itself when it is not a number.
pub fn clipboard_text(keypad: &Keypad) -> String {
    match keypad.display_value() {
        Some(value) => format_raw(value, keypad.format()),
        None => keypad.display().to_string(),
    }
}

/// Copy the keypad's current value to the clipboard.
pub fn copy_display(keypad: &Keypad) -> Result<String, String> {
    let text = clipboard_text(keypad);
    copy_to_clipboard(&text)?;
    Ok(text)
}
