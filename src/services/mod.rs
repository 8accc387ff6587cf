pub mod normalizer;
pub mod upload_guard;

pub use normalizer::ImportNormalizer;
pub use upload_guard::UploadFile;
