pub mod error;
pub mod locale;
pub mod types;

pub use error::ScaffoldError;
pub use locale::Locale;
pub use types::*;
