use crate::services::IngestError;

#[derive(Debug)]
pub enum ApplicationError {
    InternalError(String),
    BadRequest(String),
    PayloadTooLarge,
    Rejected(IngestError),
}
