use thiserror::Error;

use crate::{application::error::ApplicationError, domain::models::rejection::RejectionMessage};

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum IngestError {
    #[error(
        "Uploaded data contained a rom file, which is likely to contain copyrighted material. \
         Your file was deleted."
    )]
    RomFile,

    #[error("No selected file.")]
    NoSelectedFile,

    #[error("Conflicting files named {0} submitted.")]
    ConflictingFiles(String),

    #[error("Uploaded file {0} is not a valid .zip file and cannot be opened.")]
    InvalidArchive(String),

    #[error(
        "Error: Your .zip file contains an .archipelago file. \
         Did you mean to <a href=\"/uploads\">host a game</a>?"
    )]
    SaveFileInArchive,

    #[error("Nested .zip files inside a .zip are not supported.")]
    NestedArchive,

    #[error("Did not find any valid files to process. Accepted formats: {0}")]
    NoValidFiles(String),
}

impl IngestError {
    pub fn message(&self) -> RejectionMessage {
        match self {
            IngestError::SaveFileInArchive => RejectionMessage::Markup(self.to_string()),
            _ => RejectionMessage::Plain(self.to_string()),
        }
    }
}

impl From<IngestError> for ApplicationError {
    fn from(error: IngestError) -> Self {
        ApplicationError::Rejected(error)
    }
}
