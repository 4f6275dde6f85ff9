pub mod handler;
pub mod report;
