pub mod config;
pub mod db;
pub mod error;
pub mod handlers;
pub mod router;
pub mod service;

pub use db::Storage;
pub use error::AppError;
pub use service::mailer::Mailer;
