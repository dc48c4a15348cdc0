//! Application Configuration

use std::time::Duration;

use platform::cookie::CookieConfig;

/// Re-export SameSite from platform
pub use platform::cookie::SameSite;

/// Session cookie name, mirrored on every response that touches a session.
pub const SESSION_COOKIE_NAME: &str = "X-SESS-ID";

/// Auth application configuration
#[derive(Debug, Clone)]
pub struct AuthConfig {
    /// Session cookie name
    pub cookie_name: String,
    /// Cookie lifetime (24 hours); the only expiry this design models
    pub cookie_max_age: Duration,
    /// Whether to require Secure cookie
    pub cookie_secure: bool,
    /// SameSite policy
    pub cookie_same_site: SameSite,
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            cookie_name: SESSION_COOKIE_NAME.to_string(),
            cookie_max_age: Duration::from_secs(24 * 3600),
            cookie_secure: true,
            cookie_same_site: SameSite::Lax,
        }
    }
}

impl AuthConfig {
    /// Create config for development (insecure cookie, plain HTTP)
    pub fn development() -> Self {
        Self {
            cookie_secure: false,
            ..Default::default()
        }
    }

    /// Cookie settings for the session cookie.
    pub fn cookie_config(&self) -> CookieConfig {
        CookieConfig {
            name: self.cookie_name.clone(),
            secure: self.cookie_secure,
            http_only: true,
            same_site: self.cookie_same_site,
            path: "/".to_string(),
            max_age_secs: Some(self.cookie_max_age.as_secs() as i64),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_cookie_settings() {
        let config = AuthConfig::default();
        let cookie = config.cookie_config();

        assert_eq!(cookie.name, "X-SESS-ID");
        assert_eq!(cookie.path, "/");
        assert_eq!(cookie.max_age_secs, Some(86400));
        assert!(cookie.http_only);
    }

    #[test]
    fn test_development_disables_secure() {
        assert!(!AuthConfig::development().cookie_secure);
        assert!(AuthConfig::default().cookie_secure);
    }
}
