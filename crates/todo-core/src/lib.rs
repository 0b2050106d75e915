pub mod config;
pub mod error;
pub mod result;
pub mod traits;

pub use config::AppConfig;
pub use error::TodoError;
pub use result::TodoResult;
pub use traits::Dispatch;
