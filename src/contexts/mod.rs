// Context modules for application state management
pub mod error;
pub mod search;
pub mod settings;

pub use error::*;
pub use search::*;
pub use settings::*;
