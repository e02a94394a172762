//! Signed-in account shown in the header and on the profile page.

#[cfg(test)]
#[path = "account_test.rs"]
mod account_test;

/// Display details for the current user.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AccountState {
    pub name: String,
    pub avatar_url: Option<String>,
    pub online: bool,
}

impl Default for AccountState {
    fn default() -> Self {
        Self { name: "Guest".to_owned(), avatar_url: None, online: true }
    }
}

impl AccountState {
    /// Up to two uppercase initials for the avatar fallback.
    pub fn initials(&self) -> String {
        self.name
            .split_whitespace()
            .filter_map(|word| word.chars().next())
            .take(2)
            .flat_map(char::to_uppercase)
            .collect()
    }

    pub fn status_label(&self) -> &'static str {
        if self.online { "Online" } else { "Offline" }
    }
}
