use std::collections::HashMap;

/// Logical filename to raw content, as accepted from one upload batch.
pub type OptionsMap = HashMap<String, Vec<u8>>;

/// One part of a multipart upload. `filename` is empty when the browser
/// submitted a file picker that was never set.
#[derive(Debug, Clone)]
pub struct UploadedFile {
    pub filename: String,
    pub content: Vec<u8>,
}

impl UploadedFile {
    pub fn new(filename: impl Into<String>, content: Vec<u8>) -> Self {
        Self {
            filename: filename.into(),
            content,
        }
    }
}
