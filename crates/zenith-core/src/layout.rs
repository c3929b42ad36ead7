//! Layout shell: sidebar vs. header navigation.

use crate::settings::{NavigationMode, Settings};
use crate::store::SettingsObserver;

/// A primary navigation entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavItem {
    pub href: &'static str,
    pub label: &'static str,
}

/// Primary navigation, in display order.
pub const NAV_ITEMS: [NavItem; 3] = [
    NavItem { href: "/", label: "Dashboard" },
    NavItem { href: "/team", label: "Team" },
    NavItem { href: "/settings", label: "Settings" },
];

impl NavItem {
    /// Whether this item is highlighted while `pathname` is shown.
    ///
    /// Project detail pages live under the dashboard.
    pub fn is_active(&self, pathname: &str) -> bool {
        match self.href {
            "/" => pathname == "/" || pathname.starts_with("/project"),
            "/settings" => pathname == "/settings",
            href => pathname.starts_with(href),
        }
    }
}

/// Navigation state derived from settings plus the user's own toggling.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LayoutShell {
    navigation_mode: Option<NavigationMode>,
    sidebar_open: bool,
}

impl Default for LayoutShell {
    fn default() -> Self {
        Self::new()
    }
}

impl LayoutShell {
    /// A shell that has not seen any settings yet.
    pub fn new() -> Self {
        Self {
            navigation_mode: None,
            sidebar_open: true,
        }
    }

    pub fn from_settings(settings: &Settings) -> Self {
        let mut shell = Self::new();
        shell.sync(settings);
        shell
    }

    /// Follows a settings change. The sidebar only resets when the
    /// navigation mode itself changes, so a manual toggle survives
    /// unrelated changes such as a new theme.
    pub fn sync(&mut self, settings: &Settings) {
        if self.navigation_mode == Some(settings.navigation_mode) {
            return;
        }
        self.navigation_mode = Some(settings.navigation_mode);
        self.sidebar_open = settings.navigation_mode == NavigationMode::Sidebar;
        tracing::debug!(
            "Navigation mode {}, sidebar open: {}",
            settings.navigation_mode.as_str(),
            self.sidebar_open
        );
    }

    pub fn navigation_mode(&self) -> NavigationMode {
        self.navigation_mode.unwrap_or_default()
    }

    pub fn sidebar_open(&self) -> bool {
        self.sidebar_open
    }

    pub fn set_sidebar_open(&mut self, open: bool) {
        self.sidebar_open = open;
    }

    pub fn toggle_sidebar(&mut self) {
        self.sidebar_open = !self.sidebar_open;
    }

    /// Header links are shown while the sidebar is collapsed.
    pub fn header_nav_visible(&self) -> bool {
        !self.sidebar_open
    }

    /// The nav item highlighted for `pathname`, if any.
    pub fn active_item(&self, pathname: &str) -> Option<&'static NavItem> {
        NAV_ITEMS.iter().find(|item| item.is_active(pathname))
    }
}

impl SettingsObserver for LayoutShell {
    fn settings_changed(&mut self, settings: &Settings) {
        self.sync(settings);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn settings(mode: NavigationMode) -> Settings {
        Settings {
            navigation_mode: mode,
            ..Default::default()
        }
    }

    #[test]
    fn test_sidebar_mode_opens_sidebar() {
        let shell = LayoutShell::from_settings(&settings(NavigationMode::Sidebar));
        assert!(shell.sidebar_open());
        assert!(!shell.header_nav_visible());
    }

    #[test]
    fn test_header_mode_collapses_sidebar() {
        let shell = LayoutShell::from_settings(&settings(NavigationMode::Header));
        assert!(!shell.sidebar_open());
        assert!(shell.header_nav_visible());
        assert_eq!(shell.navigation_mode(), NavigationMode::Header);
    }

    #[test]
    fn test_manual_toggle_survives_unrelated_change() {
        let mut shell = LayoutShell::from_settings(&settings(NavigationMode::Sidebar));
        shell.toggle_sidebar();
        assert!(!shell.sidebar_open());

        let mut themed = settings(NavigationMode::Sidebar);
        themed.theme = "rose".to_string();
        shell.sync(&themed);
        assert!(!shell.sidebar_open());
    }

    #[test]
    fn test_mode_change_resets_sidebar() {
        let mut shell = LayoutShell::from_settings(&settings(NavigationMode::Sidebar));
        shell.set_sidebar_open(false);

        shell.sync(&settings(NavigationMode::Header));
        assert!(!shell.sidebar_open());

        shell.set_sidebar_open(true);
        shell.sync(&settings(NavigationMode::Sidebar));
        assert!(shell.sidebar_open());
    }

    #[test]
    fn test_active_item() {
        let shell = LayoutShell::new();
        assert_eq!(shell.active_item("/").unwrap().label, "Dashboard");
        assert_eq!(shell.active_item("/project/proj-1").unwrap().label, "Dashboard");
        assert_eq!(shell.active_item("/team").unwrap().label, "Team");
        assert_eq!(shell.active_item("/settings").unwrap().label, "Settings");
        assert!(shell.active_item("/settings/advanced").is_none());
        assert!(shell.active_item("/unknown").is_none());
    }
}
