/// Type definitions for the Attendify web portal
///
/// Shared types for the session, the navigation data model, and form
/// validation.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Portal role. Closed set: navigation visibility is decided by exhaustive
/// membership checks against this enum, never by comparing free-form strings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Student,
    Faculty,
    Admin,
}

impl Role {
    /// Lowercase tag, the same spelling the serde representation uses.
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Student => "student",
            Role::Faculty => "faculty",
            Role::Admin => "admin",
        }
    }

    /// Capitalized label for display ("Student Portal", role badges).
    pub fn label(&self) -> &'static str {
        match self {
            Role::Student => "Student",
            Role::Faculty => "Faculty",
            Role::Admin => "Admin",
        }
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Role {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "student" => Ok(Role::Student),
            "faculty" => Ok(Role::Faculty),
            "admin" => Ok(Role::Admin),
            other => Err(ValidationError {
                field: "role".to_string(),
                message: format!("unknown role: {}", other),
            }),
        }
    }
}

/// Signed-in user as supplied by the auth context. Read-only everywhere
/// outside `auth`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub name: String,
    pub email: String,
    pub role: Role,
}

/// Active session. Owned by the auth context; views receive it through a
/// read signal and never mutate it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Session {
    pub user: User,
    pub signed_in_at: DateTime<Utc>,
}

impl Session {
    pub fn new(user: User) -> Self {
        Self {
            user,
            signed_in_at: Utc::now(),
        }
    }
}

/// Validation failure for a single form field.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ValidationError {
    pub field: String,
    pub message: String,
}

/// Toast notification shown by the notification system.
#[derive(Debug, Clone, PartialEq)]
pub struct Notification {
    pub id: Uuid,
    pub kind: NotificationKind,
    pub title: String,
    pub message: Option<String>,
    pub auto_dismiss: bool,
    pub duration_secs: Option<u32>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationKind {
    Success,
    Error,
    Info,
}

/// Glyphs used across the portal. The `Icon` component in
/// `components::icons` renders each of these as an outline SVG.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Glyph {
    Home,
    ClipboardCheck,
    Calendar,
    UserGroup,
    AcademicCap,
    DocumentText,
    ChartBar,
    Cog,
    ArrowRightOnRectangle,
    XMark,
    Bars3,
    CheckCircle,
    ExclamationTriangle,
    InformationCircle,
}

/// One entry of the navigation menu. The list itself is static: entries are
/// declared once in `NAV_ITEMS` and only ever filtered, never modified.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavItem {
    pub id: &'static str,
    pub label: &'static str,
    pub glyph: Glyph,
    pub roles: &'static [Role],
}

impl NavItem {
    pub fn allows(&self, role: Role) -> bool {
        self.roles.contains(&role)
    }
}

const ALL_ROLES: &[Role] = &[Role::Student, Role::Faculty, Role::Admin];
const STAFF: &[Role] = &[Role::Faculty, Role::Admin];
const ADMIN_ONLY: &[Role] = &[Role::Admin];

/// The navigation menu, in display order.
pub static NAV_ITEMS: [NavItem; 8] = [
    NavItem { id: "dashboard", label: "Dashboard", glyph: Glyph::Home, roles: ALL_ROLES },
    NavItem { id: "attendance", label: "Attendance", glyph: Glyph::ClipboardCheck, roles: ALL_ROLES },
    NavItem { id: "classes", label: "Classes", glyph: Glyph::Calendar, roles: STAFF },
    NavItem { id: "students", label: "Students", glyph: Glyph::UserGroup, roles: STAFF },
    NavItem { id: "faculty", label: "Faculty", glyph: Glyph::AcademicCap, roles: ADMIN_ONLY },
    NavItem { id: "reports", label: "Reports", glyph: Glyph::DocumentText, roles: STAFF },
    NavItem { id: "analytics", label: "Analytics", glyph: Glyph::ChartBar, roles: STAFF },
    NavItem { id: "settings", label: "Settings", glyph: Glyph::Cog, roles: ALL_ROLES },
];

/// The ordered subset of `NAV_ITEMS` visible to `role`. `None` (no
/// authenticated user) sees nothing.
pub fn visible_items(role: Option<Role>) -> Vec<&'static NavItem> {
    let Some(role) = role else {
        return Vec::new();
    };
    NAV_ITEMS.iter().filter(|item| item.allows(role)).collect()
}

/// Display label for a section id, if the id names a navigation entry.
pub fn section_label(id: &str) -> Option<&'static str> {
    NAV_ITEMS.iter().find(|item| item.id == id).map(|item| item.label)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn ids(items: &[&'static NavItem]) -> Vec<&'static str> {
        items.iter().map(|item| item.id).collect()
    }

    #[test]
    fn test_item_ids_are_unique() {
        let mut seen = Vec::new();
        for item in NAV_ITEMS.iter() {
            assert!(!seen.contains(&item.id), "duplicate id: {}", item.id);
            seen.push(item.id);
        }
        assert_eq!(seen.len(), 8);
    }

    #[test]
    fn test_student_sees_core_sections_in_order() {
        let visible = visible_items(Some(Role::Student));
        assert_eq!(ids(&visible), vec!["dashboard", "attendance", "settings"]);
    }

    #[test]
    fn test_faculty_sees_everything_but_faculty_management() {
        let visible = visible_items(Some(Role::Faculty));
        assert_eq!(
            ids(&visible),
            vec!["dashboard", "attendance", "classes", "students", "reports", "analytics", "settings"]
        );
    }

    #[test]
    fn test_admin_sees_every_section_in_declared_order() {
        let visible = visible_items(Some(Role::Admin));
        assert_eq!(ids(&visible), ids(&NAV_ITEMS.iter().collect::<Vec<_>>()));
        assert_eq!(visible.len(), 8);
    }

    #[test]
    fn test_filtering_is_exactly_role_membership() {
        for role in [Role::Student, Role::Faculty, Role::Admin] {
            let visible = visible_items(Some(role));
            for item in NAV_ITEMS.iter() {
                let shown = visible.iter().any(|v| v.id == item.id);
                assert_eq!(
                    shown,
                    item.allows(role),
                    "item {} wrong for role {}",
                    item.id,
                    role
                );
            }
        }
    }

    #[test]
    fn test_no_user_sees_nothing() {
        assert!(visible_items(None).is_empty());
    }

    #[test]
    fn test_section_labels_resolve() {
        assert_eq!(section_label("dashboard"), Some("Dashboard"));
        assert_eq!(section_label("faculty"), Some("Faculty"));
        assert_eq!(section_label("unknown"), None);
    }

    #[test]
    fn test_role_tags_round_trip() {
        for role in [Role::Student, Role::Faculty, Role::Admin] {
            let json = serde_json::to_string(&role).unwrap();
            assert_eq!(json, format!("\"{}\"", role.as_str()));
            let back: Role = serde_json::from_str(&json).unwrap();
            assert_eq!(back, role);
        }
    }

    #[test]
    fn test_role_parses_its_own_tag() {
        for role in [Role::Student, Role::Faculty, Role::Admin] {
            assert_eq!(Role::from_str(role.as_str()).unwrap(), role);
        }
    }

    #[test]
    fn test_unknown_role_is_rejected() {
        let err = Role::from_str("principal").unwrap_err();
        assert_eq!(err.field, "role");
        assert!(err.message.contains("principal"));
    }

    #[test]
    fn test_role_labels_are_capitalized() {
        assert_eq!(Role::Student.label(), "Student");
        assert_eq!(Role::Faculty.label(), "Faculty");
        assert_eq!(Role::Admin.label(), "Admin");
    }
}
