/// Type definitions for the appshell web interface
///
/// Navigation entries, user profile and icon identifiers shared across components.

/// Named icon rendered by `components::icons::Icon`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum IconName {
    Home,
    Info,
    Login,
    Logout,
    Menu,
    Account,
    Default,
}

impl IconName {
    pub fn as_str(&self) -> &'static str {
        match self {
            IconName::Home => "home",
            IconName::Info => "info",
            IconName::Login => "login",
            IconName::Logout => "logout",
            IconName::Menu => "menu",
            IconName::Account => "account",
            IconName::Default => "default",
        }
    }
}

/// A navigation entry: label, target path and optional icon
#[derive(Debug, Clone, PartialEq)]
pub struct LinkToPage {
    pub title: String,
    pub path: String,
    pub icon: Option<IconName>,
}

impl LinkToPage {
    pub fn new(title: impl Into<String>, path: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            path: path.into(),
            icon: None,
        }
    }

    pub fn with_icon(mut self, icon: IconName) -> Self {
        self.icon = Some(icon);
        self
    }
}

/// Display profile of the signed-in user
#[derive(Debug, Clone, PartialEq)]
pub struct UserProfile {
    pub name: String,
    pub email: Option<String>,
    pub avatar_url: Option<String>,
}

impl UserProfile {
    /// Uppercase first letter of the name, 'U' when the name is blank
    pub fn initial(&self) -> String {
        self.name
            .trim()
            .chars()
            .next()
            .unwrap_or('U')
            .to_uppercase()
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_link_builder() {
        let link = LinkToPage::new("Home", "/").with_icon(IconName::Home);
        assert_eq!(link.title, "Home");
        assert_eq!(link.path, "/");
        assert_eq!(link.icon, Some(IconName::Home));
    }

    #[test]
    fn test_user_initial() {
        let mut user = UserProfile {
            name: "  ada lovelace".to_string(),
            email: None,
            avatar_url: None,
        };
        assert_eq!(user.initial(), "A");

        user.name = String::new();
        assert_eq!(user.initial(), "U");
    }
}
