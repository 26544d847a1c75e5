pub mod templates;

pub use templates::StarterTemplates;

/// Return the starter documents for a new project.
///
/// The frontend scaffolding flow writes these verbatim as `index.html`,
/// `style.css` and `script.js`; repeated calls return identical content.
#[tauri::command]
pub fn get_starter_templates() -> StarterTemplates {
    templates::starter_templates()
}
