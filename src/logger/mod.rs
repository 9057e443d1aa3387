pub mod scan_logger;
pub mod wait_logger;
