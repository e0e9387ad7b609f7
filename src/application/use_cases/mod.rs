pub mod admin;
pub mod collection;
pub mod subscription;
