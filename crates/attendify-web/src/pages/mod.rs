/// Page components for the portal
///
/// Section panels rendered by the shell plus the standalone auth pages.

pub mod analytics;
pub mod attendance;
pub mod auth;
pub mod classes;
pub mod dashboard;
pub mod faculty;
pub mod not_found;
pub mod reports;
pub mod settings;
pub mod students;
