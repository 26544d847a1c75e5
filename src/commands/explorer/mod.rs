pub mod icons;

pub use icons::{FileEntry, FileIconInfo};

/// Resolve the icon + color token for a single tree entry.
///
/// Infallible: unknown or extensionless names get the generic file token,
/// so the tree view never needs a failure branch for icon lookup.
#[tauri::command]
pub fn get_file_icon(file_name: String, is_directory: bool, is_expanded: bool) -> FileIconInfo {
    icons::file_icon(&file_name, is_directory, is_expanded)
}

/// Resolve icon tokens for a whole visible listing in one IPC round trip.
/// Output order matches input order, one token per entry.
#[tauri::command]
pub fn get_file_icons(entries: Vec<FileEntry>) -> Vec<FileIconInfo> {
    icons::file_icons(&entries)
}
