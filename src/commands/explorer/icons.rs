//! File icon resolution engine for the file tree sidebar.
//!
//! Maps a tree entry (name + directory state) to a visual token: an icon
//! id from a closed set plus a hex color. The frontend resolves icon ids
//! to actual glyph components; this module never touches the filesystem.
//!
//! Classification is total: every input, including empty or extensionless
//! names, resolves to a valid token. Unknown extensions fall back to the
//! generic file token.

use std::collections::HashMap;
use std::sync::LazyLock;

use serde::{Deserialize, Serialize};

/// The closed set of icon identifiers the frontend knows how to draw.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum IconId {
    FolderClosed,
    FolderOpen,
    GenericFile,
    TextFile,
    CodeFile,
    DataFile,
    StyleFile,
    WebFile,
}

impl IconId {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::FolderClosed => "folder-closed",
            Self::FolderOpen => "folder-open",
            Self::GenericFile => "generic-file",
            Self::TextFile => "text-file",
            Self::CodeFile => "code-file",
            Self::DataFile => "data-file",
            Self::StyleFile => "style-file",
            Self::WebFile => "web-file",
        }
    }
}

/// Visual token for one tree entry: icon id + hex RGB color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct FileIconInfo {
    pub icon: IconId,
    pub color: &'static str,
}

/// A tree entry as sent by the frontend for batch classification.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FileEntry {
    pub name: String,
    pub is_directory: bool,
    /// Only meaningful for directories; absent means collapsed.
    #[serde(default)]
    pub is_expanded: bool,
}

/// Directories use one color for both the open and closed state.
const FOLDER_COLOR: &str = "#dcb67a";

/// Neutral color shared by plain-text files and the generic fallback.
const DEFAULT_COLOR: &str = "#6d6d6d";

/// Extension rule groups. Color attaches to the group, not the icon:
/// the js and ts groups share the code-file icon but keep their own
/// language colors.
const ICON_RULES: &[(&[&str], IconId, &str)] = &[
    (&["html", "htm"], IconId::WebFile, "#e34c26"),
    (&["css", "scss", "sass", "less"], IconId::StyleFile, "#1572b6"),
    (&["js", "mjs", "jsx"], IconId::CodeFile, "#f7df1e"),
    (&["ts", "tsx"], IconId::CodeFile, "#3178c6"),
    (&["json", "jsonc"], IconId::DataFile, "#cbcb41"),
    (&["md", "markdown"], IconId::TextFile, "#083fa1"),
    (&["txt", "log"], IconId::TextFile, DEFAULT_COLOR),
];

/// Lookup table built once at first use. Keys are lowercase extensions
/// without the leading dot; each key maps to exactly one rule.
static EXTENSION_TABLE: LazyLock<HashMap<&'static str, FileIconInfo>> = LazyLock::new(|| {
    let mut table = HashMap::new();
    for &(extensions, icon, color) in ICON_RULES {
        for &ext in extensions {
            table.insert(ext, FileIconInfo { icon, color });
        }
    }
    table
});

const GENERIC_FILE: FileIconInfo = FileIconInfo {
    icon: IconId::GenericFile,
    color: DEFAULT_COLOR,
};

/// Resolve the visual token for a single tree entry.
///
/// Directory state takes absolute precedence over the name: directories
/// always get a folder token, open or closed depending on `is_expanded`.
/// Files are matched on the substring after the last `.` in the name,
/// lowercased; names without a dot match nothing and fall back to the
/// generic token.
pub fn file_icon(name: &str, is_directory: bool, is_expanded: bool) -> FileIconInfo {
    if is_directory {
        return FileIconInfo {
            icon: if is_expanded {
                IconId::FolderOpen
            } else {
                IconId::FolderClosed
            },
            color: FOLDER_COLOR,
        };
    }

    let ext = match name.rsplit_once('.') {
        Some((_, ext)) => ext.to_ascii_lowercase(),
        None => String::new(),
    };

    EXTENSION_TABLE
        .get(ext.as_str())
        .copied()
        .unwrap_or(GENERIC_FILE)
}

/// Resolve tokens for a whole listing, preserving input order.
pub fn file_icons(entries: &[FileEntry]) -> Vec<FileIconInfo> {
    entries
        .iter()
        .map(|e| file_icon(&e.name, e.is_directory, e.is_expanded))
        .collect()
}

#[cfg(test)]
#[path = "tests/icons_tests.rs"]
mod tests;
