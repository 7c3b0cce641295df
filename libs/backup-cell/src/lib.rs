pub mod services;

pub use services::backup::{BackupError, BackupService};
pub use services::export::{ExportFilters, ExportService, Sheet, Workbook, EXPORT_HEADER};
