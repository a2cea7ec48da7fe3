pub mod add;
pub mod dispatch;
pub mod get;
pub mod import;
pub mod init;
pub mod schema;
pub mod show;
