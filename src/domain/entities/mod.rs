pub mod subscription;
pub mod system_log;
pub mod transaction;
