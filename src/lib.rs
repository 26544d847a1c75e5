use tauri_plugin_log::{Target, TargetKind};

pub mod commands;
pub mod types;

#[cfg_attr(mobile, tauri::mobile_entry_point)]
pub fn run() {
    tauri::Builder::default()
        .plugin(tauri_plugin_dialog::init())
        .plugin(tauri_plugin_fs::init())
        .plugin(tauri_plugin_opener::init())
        .plugin(
            tauri_plugin_log::Builder::default()
                .targets([
                    Target::new(TargetKind::Stdout),
                    Target::new(TargetKind::LogDir {
                        file_name: Some("webstudio.log".into()),
                    }),
                    Target::new(TargetKind::Webview),
                ])
                .build(),
        )
        .manage(commands::preview::server::PreviewState::new())
        .invoke_handler(tauri::generate_handler![
            commands::explorer::get_file_icon,
            commands::explorer::get_file_icons,
            commands::project::get_starter_templates,
            commands::preview::start_preview_server,
            commands::preview::stop_preview_server,
        ])
        .run(tauri::generate_context!())
        .expect("error while running tauri application");
}
