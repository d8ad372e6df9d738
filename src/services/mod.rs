mod error;
mod upload_ingestor;

pub use error::IngestError;
pub use upload_ingestor::UploadIngestor;
