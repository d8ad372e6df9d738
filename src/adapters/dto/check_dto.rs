use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

use crate::domain::models::file::OptionsMap;

#[derive(Debug, Serialize)]
pub struct CheckedFile {
    #[serde(rename = "fileName")]
    pub file_name: String,
    pub size: u64,
}

#[derive(Debug, Serialize)]
pub struct CheckResponse {
    #[serde(rename = "checkId")]
    pub check_id: Uuid,
    #[serde(rename = "checkedAt")]
    pub checked_at: DateTime<Utc>,
    pub files: Vec<CheckedFile>,
}

impl From<OptionsMap> for CheckResponse {
    fn from(options: OptionsMap) -> Self {
        let mut files: Vec<CheckedFile> = options
            .into_iter()
            .map(|(file_name, content)| CheckedFile {
                file_name,
                size: content.len() as u64,
            })
            .collect();
        files.sort_by(|a, b| a.file_name.cmp(&b.file_name));

        Self {
            check_id: Uuid::new_v4(),
            checked_at: Utc::now(),
            files,
        }
    }
}
