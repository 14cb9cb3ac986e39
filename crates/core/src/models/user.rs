use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Social sign-in providers offered on the login page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SocialProvider {
    Google,
    Github,
    Apple,
}

impl std::fmt::Display for SocialProvider {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SocialProvider::Google => write!(f, "google"),
            SocialProvider::Github => write!(f, "github"),
            SocialProvider::Apple => write!(f, "apple"),
        }
    }
}

/// An authenticated user as reported by the identity provider.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: Uuid,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub display_name: Option<String>,
    pub email_verified: bool,
}

impl User {
    pub fn with_email(email: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            email: Some(email.into()),
            phone: None,
            display_name: None,
            email_verified: false,
        }
    }

    pub fn with_phone(phone: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            email: None,
            phone: Some(phone.into()),
            display_name: None,
            email_verified: false,
        }
    }
}
