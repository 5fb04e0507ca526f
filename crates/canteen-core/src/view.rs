//! View selector
//!
//! Maps a role and a page identifier to the screen to display.

use crate::session::Role;
use serde::Serialize;

/// Screens available to students.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum StudentScreen {
    Home,
    History,
    Upcoming,
}

/// Screens available to staff.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum StaffScreen {
    Home,
    Products,
    Orders,
    Upcoming,
    Stats,
}

/// The screen shown in the body of the application.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(tag = "role", content = "page", rename_all = "lowercase")]
pub enum Screen {
    Student(StudentScreen),
    Staff(StaffScreen),
}

const STUDENT_NAV: [Screen; 3] = [
    Screen::Student(StudentScreen::Home),
    Screen::Student(StudentScreen::History),
    Screen::Student(StudentScreen::Upcoming),
];

const STAFF_NAV: [Screen; 5] = [
    Screen::Staff(StaffScreen::Home),
    Screen::Staff(StaffScreen::Products),
    Screen::Staff(StaffScreen::Orders),
    Screen::Staff(StaffScreen::Upcoming),
    Screen::Staff(StaffScreen::Stats),
];

impl Screen {
    /// Landing screen of a role.
    pub fn home(role: Role) -> Self {
        match role {
            Role::Student => Self::Student(StudentScreen::Home),
            Role::Staff => Self::Staff(StaffScreen::Home),
        }
    }

    pub fn role(self) -> Role {
        match self {
            Self::Student(_) => Role::Student,
            Self::Staff(_) => Role::Staff,
        }
    }

    /// Page identifier used for navigation.
    pub fn page_id(self) -> &'static str {
        match self {
            Self::Student(StudentScreen::Home) | Self::Staff(StaffScreen::Home) => "home",
            Self::Student(StudentScreen::History) => "history",
            Self::Student(StudentScreen::Upcoming) | Self::Staff(StaffScreen::Upcoming) => {
                "upcoming"
            }
            Self::Staff(StaffScreen::Products) => "products",
            Self::Staff(StaffScreen::Orders) => "orders",
            Self::Staff(StaffScreen::Stats) => "stats",
        }
    }

    /// Catalog key of the navigation label.
    pub fn label_key(self) -> &'static str {
        match self {
            Self::Staff(StaffScreen::Orders) => "allOrders",
            other => other.page_id(),
        }
    }
}

/// Pick the screen for `page_id`; unknown ids land on the role's home.
pub fn select_screen(role: Role, page_id: &str) -> Screen {
    nav_screens(role)
        .iter()
        .copied()
        .find(|screen| screen.page_id() == page_id)
        .unwrap_or_else(|| Screen::home(role))
}

/// Bottom navigation entries, in display order.
pub fn nav_screens(role: Role) -> &'static [Screen] {
    match role {
        Role::Student => &STUDENT_NAV,
        Role::Staff => &STAFF_NAV,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_pages() {
        assert_eq!(
            select_screen(Role::Student, "history"),
            Screen::Student(StudentScreen::History)
        );
        assert_eq!(
            select_screen(Role::Staff, "stats"),
            Screen::Staff(StaffScreen::Stats)
        );
        assert_eq!(
            select_screen(Role::Staff, "upcoming"),
            Screen::Staff(StaffScreen::Upcoming)
        );
    }

    #[test]
    fn test_unknown_page_falls_back_to_home() {
        assert_eq!(
            select_screen(Role::Student, "settings"),
            Screen::Student(StudentScreen::Home)
        );
        assert_eq!(select_screen(Role::Staff, ""), Screen::Staff(StaffScreen::Home));
    }

    #[test]
    fn test_pages_are_role_scoped() {
        // "products" is a staff page only
        assert_eq!(
            select_screen(Role::Student, "products"),
            Screen::Student(StudentScreen::Home)
        );
        assert_eq!(
            select_screen(Role::Staff, "history"),
            Screen::Staff(StaffScreen::Home)
        );
    }

    #[test]
    fn test_nav_round_trips_through_page_ids() {
        for role in [Role::Student, Role::Staff] {
            for screen in nav_screens(role) {
                assert_eq!(screen.role(), role);
                assert_eq!(select_screen(role, screen.page_id()), *screen);
            }
        }
        assert_eq!(nav_screens(Role::Staff).len(), 5);
    }

    #[test]
    fn test_label_keys() {
        assert_eq!(Screen::Staff(StaffScreen::Orders).label_key(), "allOrders");
        assert_eq!(Screen::Staff(StaffScreen::Stats).label_key(), "stats");
        assert_eq!(Screen::Student(StudentScreen::History).label_key(), "history");
    }
}
