pub mod ingestion;
pub mod staging;

pub use ingestion::IngestionService;
pub use staging::StagedFile;
