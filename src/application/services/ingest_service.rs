use crate::{
    domain::{
        config::policy::ExtensionPolicy,
        models::file::{OptionsMap, UploadedFile},
    },
    services::IngestError,
};

/// Turns one upload batch into the options files it contains, or the first
/// reason the batch cannot be accepted.
pub trait IngestService: Send + Sync {
    fn ingest(&self, files: Vec<UploadedFile>) -> Result<OptionsMap, IngestError>;
    fn policy(&self) -> &ExtensionPolicy;
}
