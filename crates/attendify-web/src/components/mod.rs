/// UI components for the portal
///
/// Layout chrome, the navigation sidebar, icons, and notifications.

pub mod footer;
pub mod header;
pub mod icons;
pub mod notifications;
pub mod shell;
pub mod sidebar;
