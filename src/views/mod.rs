//! The views module contains the components for all Layouts and Routes for our app.

mod consulta;
pub use consulta::Consulta;

mod navbar;
pub use navbar::Navbar;
