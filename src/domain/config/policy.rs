use serde::Serialize;

pub const ALLOWED_EXTENSIONS: [&str; 5] = [".yaml", ".json", ".yml", ".txt", ".zip"];

pub const BANNED_EXTENSIONS: [&str; 9] = [
    ".sfc", ".z64", ".n64", ".nes", ".smc", ".sms", ".gb", ".gbc", ".gba",
];

pub const ARCHIVE_EXTENSION: &str = ".zip";

/// Multiworld save files. Finding one inside an upload means the user
/// meant to host a game rather than check options.
pub const SAVE_METADATA_EXTENSION: &str = ".archipelago";

/// Which filename suffixes an upload batch may contain. All matching is a
/// case-sensitive suffix test.
#[derive(Debug, Clone, Serialize)]
pub struct ExtensionPolicy {
    #[serde(rename = "allowedExtensions")]
    pub allowed: Vec<String>,
    #[serde(rename = "bannedExtensions")]
    pub banned: Vec<String>,
}

impl Default for ExtensionPolicy {
    fn default() -> Self {
        Self {
            allowed: ALLOWED_EXTENSIONS.iter().map(|s| s.to_string()).collect(),
            banned: BANNED_EXTENSIONS.iter().map(|s| s.to_string()).collect(),
        }
    }
}

impl ExtensionPolicy {
    pub fn is_allowed(&self, filename: &str) -> bool {
        self.allowed.iter().any(|ext| filename.ends_with(ext.as_str()))
    }

    pub fn is_banned(&self, filename: &str) -> bool {
        self.banned.iter().any(|ext| filename.ends_with(ext.as_str()))
    }

    /// The allow list as a quoted, parenthesised tuple, e.g. `('.yaml', '.zip')`.
    /// A single extension keeps its trailing comma.
    pub fn accepted_formats(&self) -> String {
        let quoted: Vec<String> = self.allowed.iter().map(|ext| format!("'{}'", ext)).collect();
        match quoted.as_slice() {
            [only] => format!("({},)", only),
            _ => format!("({})", quoted.join(", ")),
        }
    }
}

pub fn is_archive(filename: &str) -> bool {
    filename.ends_with(ARCHIVE_EXTENSION)
}

pub fn is_save_metadata(filename: &str) -> bool {
    filename.ends_with(SAVE_METADATA_EXTENSION)
}
