pub mod client;
pub mod models;
pub mod query;
pub mod status;

pub use client::*;
pub use models::*;
pub use query::*;
pub use status::*;
