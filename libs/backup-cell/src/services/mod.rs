pub mod backup;
pub mod export;

pub use backup::BackupService;
pub use export::ExportService;
