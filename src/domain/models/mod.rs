pub mod file;
pub mod rejection;
