pub mod app;
pub mod console;
pub mod error;
pub mod logging;
pub mod scan;

// Re-export main types for easier access
pub use app::{App, Command, ScanCommand};
pub use error::{OsintError, OsintResult};
pub use scan::{ScanRequest, ScanStatus, ScanSummary};
