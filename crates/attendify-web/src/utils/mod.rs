/// Utility functions for the web portal
///
/// Display formatting, form validation, and time helpers.

pub mod format;
pub mod time;
pub mod validation;
