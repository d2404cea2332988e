//! Backup reports
//!
//! A report is a point-in-time copy of the run log's tail, preceded by a
//! two-line header and named after the second it was written in.

mod generator;

pub use generator::{
    generate_backup_report, report_filename, ReportGenerator, ReportInfo, HEADER_RULE,
    REPORT_PREFIX,
};
