pub mod address;
pub mod config;
pub mod mvx;
pub mod writing;
