use std::io::{Cursor, Read};

use tracing::{debug, info, warn};
use zip::ZipArchive;

use crate::{
    application::services::IngestService,
    domain::{
        config::policy::{is_archive, is_save_metadata, ExtensionPolicy},
        models::file::{OptionsMap, UploadedFile},
    },
    services::IngestError,
};

/// What to do with one named item, whether a top-level upload or an entry
/// found inside an uploaded archive.
#[derive(Debug)]
enum Disposition {
    Accept,
    Skip,
    Reject(IngestError),
}

/// Strips any folder prefix from an archive entry name. Archives made on
/// macOS carry `__MACOSX/` entries, and entry names always use `/`.
fn base_name(stored_name: &str) -> &str {
    match stored_name.rfind('/') {
        Some(index) => &stored_name[index + 1..],
        None => stored_name,
    }
}

pub struct UploadIngestor {
    policy: ExtensionPolicy,
}

impl Default for UploadIngestor {
    fn default() -> Self {
        Self::new(ExtensionPolicy::default())
    }
}

impl UploadIngestor {
    pub fn new(policy: ExtensionPolicy) -> Self {
        Self { policy }
    }

    fn classify_upload(&self, filename: &str, options: &OptionsMap) -> Disposition {
        if self.policy.is_banned(filename) {
            Disposition::Reject(IngestError::RomFile)
        } else if filename.is_empty() {
            // An unset file picker is still submitted, with an empty name.
            Disposition::Reject(IngestError::NoSelectedFile)
        } else if options.contains_key(filename) {
            Disposition::Reject(IngestError::ConflictingFiles(filename.to_string()))
        } else if self.policy.is_allowed(filename) {
            Disposition::Accept
        } else {
            Disposition::Skip
        }
    }

    fn classify_entry(&self, base_name: &str) -> Disposition {
        if is_save_metadata(base_name) {
            Disposition::Reject(IngestError::SaveFileInArchive)
        } else if is_archive(base_name) {
            Disposition::Reject(IngestError::NestedArchive)
        } else if self.policy.is_banned(base_name) {
            Disposition::Reject(IngestError::RomFile)
        } else if !base_name.starts_with('.') && self.policy.is_allowed(base_name) {
            Disposition::Accept
        } else {
            Disposition::Skip
        }
    }

    fn extract_archive(
        &self,
        upload: &UploadedFile,
        options: &mut OptionsMap,
    ) -> Result<(), IngestError> {
        let invalid = || IngestError::InvalidArchive(upload.filename.clone());

        let mut archive =
            ZipArchive::new(Cursor::new(upload.content.as_slice())).map_err(|e| {
                debug!("Cannot open archive {}: {}", upload.filename, e);
                invalid()
            })?;

        for index in 0..archive.len() {
            // Only accepted entries are decompressed; skipped ones may be
            // encrypted or use methods we cannot read.
            let stored_name = archive
                .by_index_raw(index)
                .map_err(|e| {
                    debug!("Cannot read entry {} of {}: {}", index, upload.filename, e);
                    invalid()
                })?
                .name()
                .to_string();

            match self.classify_entry(base_name(&stored_name)) {
                Disposition::Accept => {
                    if options.contains_key(&stored_name) {
                        return Err(IngestError::ConflictingFiles(stored_name));
                    }
                    let mut entry = archive.by_index(index).map_err(|e| {
                        debug!("Cannot open {} in {}: {}", stored_name, upload.filename, e);
                        invalid()
                    })?;
                    // The declared size is uploader-controlled, so let the
                    // buffer grow with the data actually read.
                    let mut content = Vec::new();
                    entry.read_to_end(&mut content).map_err(|e| {
                        debug!("Cannot decompress {} in {}: {}", stored_name, upload.filename, e);
                        invalid()
                    })?;
                    options.insert(stored_name, content);
                }
                Disposition::Skip => {
                    debug!("Skipping archive entry {} in {}", stored_name, upload.filename);
                }
                Disposition::Reject(error) => return Err(error),
            }
        }

        Ok(())
    }

    fn collect(&self, files: Vec<UploadedFile>) -> Result<OptionsMap, IngestError> {
        let mut options = OptionsMap::new();

        for upload in files {
            match self.classify_upload(&upload.filename, &options) {
                Disposition::Accept if is_archive(&upload.filename) => {
                    self.extract_archive(&upload, &mut options)?;
                }
                Disposition::Accept => {
                    options.insert(upload.filename, upload.content);
                }
                Disposition::Skip => {
                    debug!("Skipping upload with unrecognized extension: {}", upload.filename);
                }
                Disposition::Reject(error) => return Err(error),
            }
        }

        if options.is_empty() {
            return Err(IngestError::NoValidFiles(self.policy.accepted_formats()));
        }
        Ok(options)
    }
}

impl IngestService for UploadIngestor {
    fn ingest(&self, files: Vec<UploadedFile>) -> Result<OptionsMap, IngestError> {
        let upload_count = files.len();
        match self.collect(files) {
            Ok(options) => {
                info!(
                    "Accepted {} options files from {} uploads",
                    options.len(),
                    upload_count
                );
                Ok(options)
            }
            Err(e) => {
                warn!("Rejected upload batch of {} files: {}", upload_count, e);
                Err(e)
            }
        }
    }

    fn policy(&self) -> &ExtensionPolicy {
        &self.policy
    }
}
