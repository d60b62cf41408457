//! Client configuration.
//!
//! A [`ClientConfig`] holds the base URL of each host class, the request
//! timeout, credentials and default headers. Build one with
//! [`ClientConfig::builder`] or load it from the environment with
//! [`ClientConfig::from_env`].

use std::env;
use std::fmt;
use std::time::Duration;

use reqwest::header::{HeaderName, HeaderValue};
use schematic_define::{AuthClass, AuthSet, HostClass};
use url::Url;

use crate::error::{AuthError, ConfigError};

/// Default base URL for RPC-style routes.
pub const DEFAULT_API_BASE: &str = "https://api.dropboxapi.com";
/// Default base URL for content upload and download routes.
pub const DEFAULT_CONTENT_BASE: &str = "https://content.dropboxapi.com";
/// Default base URL for long-poll notification routes.
pub const DEFAULT_NOTIFY_BASE: &str = "https://notify.dropboxapi.com";

/// Default request timeout in seconds.
const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Environment variables checked, in order, for an OAuth access token.
pub const TOKEN_ENV_VARS: &[&str] = &["DROPBOX_ACCESS_TOKEN", "DROPBOX_TOKEN"];
/// Environment variable holding the app key for app-authenticated routes.
pub const APP_KEY_ENV: &str = "DROPBOX_APP_KEY";
/// Environment variable holding the app secret for app-authenticated routes.
pub const APP_SECRET_ENV: &str = "DROPBOX_APP_SECRET";

/// App key and secret, sent as HTTP basic auth.
#[derive(Clone, PartialEq, Eq)]
pub struct AppCredentials {
    /// The app key.
    pub key: String,
    /// The app secret.
    pub secret: String,
}

impl fmt::Debug for AppCredentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AppCredentials")
            .field("key", &self.key)
            .field("secret", &"<redacted>")
            .finish()
    }
}

/// Credentials available to the transport.
#[derive(Clone, Default, PartialEq, Eq)]
pub struct Credentials {
    /// Bearer token used for user- and team-authenticated routes.
    pub access_token: Option<String>,
    /// App key/secret used for app-authenticated routes.
    pub app: Option<AppCredentials>,
}

impl Credentials {
    /// Credentials holding only an access token.
    pub fn token(token: impl Into<String>) -> Self {
        Self {
            access_token: Some(token.into()),
            app: None,
        }
    }

    /// Returns `true` if neither a token nor app credentials are present.
    pub fn is_empty(&self) -> bool {
        self.access_token.is_none() && self.app.is_none()
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("access_token", &self.access_token.as_ref().map(|_| "<redacted>"))
            .field("app", &self.app)
            .finish()
    }
}

/// Lists the environment variables that could satisfy a route accepting `auth`.
///
/// Used to build [`AuthError::MissingCredential`] when a call cannot be
/// authenticated.
pub fn credential_env_vars(auth: AuthSet) -> Vec<String> {
    let mut vars = Vec::new();
    if auth.contains(AuthClass::User) || auth.contains(AuthClass::Team) {
        vars.extend(TOKEN_ENV_VARS.iter().map(|v| (*v).to_string()));
    }
    if auth.contains(AuthClass::App) {
        vars.push(APP_KEY_ENV.to_string());
        vars.push(APP_SECRET_ENV.to_string());
    }
    vars
}

/// Resolved client configuration.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    api_base: Url,
    content_base: Url,
    notify_base: Url,
    timeout: Duration,
    credentials: Credentials,
    default_headers: Vec<(String, String)>,
}

impl ClientConfig {
    /// Creates a new builder with default hosts and timeout.
    pub fn builder() -> ClientConfigBuilder {
        ClientConfigBuilder::default()
    }

    /// Loads credentials from the environment, with default hosts and timeout.
    ///
    /// The access token is taken from the first set variable of
    /// [`TOKEN_ENV_VARS`]. App credentials are used only when both
    /// [`APP_KEY_ENV`] and [`APP_SECRET_ENV`] are set.
    ///
    /// ## Errors
    ///
    /// Returns [`ConfigError::Credentials`] wrapping
    /// [`AuthError::MissingCredential`] if neither a token nor a complete app
    /// key/secret pair is available.
    pub fn from_env() -> Result<Self, ConfigError> {
        let access_token = TOKEN_ENV_VARS
            .iter()
            .find_map(|var| env::var(var).ok().filter(|v| !v.is_empty()));

        let app = match (env::var(APP_KEY_ENV), env::var(APP_SECRET_ENV)) {
            (Ok(key), Ok(secret)) if !key.is_empty() && !secret.is_empty() => {
                Some(AppCredentials { key, secret })
            }
            _ => None,
        };

        let credentials = Credentials { access_token, app };
        if credentials.is_empty() {
            let env_vars = credential_env_vars(AuthSet::user().with(AuthClass::App));
            return Err(AuthError::MissingCredential { env_vars }.into());
        }

        Self::builder().credentials(credentials).build()
    }

    /// Returns the base URL serving routes of the given host class.
    pub fn base_url(&self, host: HostClass) -> &Url {
        match host {
            HostClass::Api => &self.api_base,
            HostClass::Content => &self.content_base,
            HostClass::Notify => &self.notify_base,
        }
    }

    /// Returns the request timeout.
    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    /// Returns the configured credentials.
    pub fn credentials(&self) -> &Credentials {
        &self.credentials
    }

    /// Returns headers sent with every request.
    pub fn default_headers(&self) -> &[(String, String)] {
        &self.default_headers
    }
}

/// Builder for configuring a [`ClientConfig`].
#[derive(Debug, Default)]
pub struct ClientConfigBuilder {
    api_base: Option<Url>,
    content_base: Option<Url>,
    notify_base: Option<Url>,
    timeout: Option<Duration>,
    credentials: Credentials,
    default_headers: Vec<(String, String)>,
}

impl ClientConfigBuilder {
    /// Overrides the base URL for RPC-style routes.
    pub fn api_base(mut self, url: Url) -> Self {
        self.api_base = Some(url);
        self
    }

    /// Overrides the base URL for content routes.
    pub fn content_base(mut self, url: Url) -> Self {
        self.content_base = Some(url);
        self
    }

    /// Overrides the base URL for notification routes.
    pub fn notify_base(mut self, url: Url) -> Self {
        self.notify_base = Some(url);
        self
    }

    /// Points every host class at the same base URL.
    ///
    /// ## Examples
    ///
    /// ```
    /// use schematic::ClientConfig;
    /// use schematic_define::HostClass;
    ///
    /// let base = url::Url::parse("http://127.0.0.1:8080").unwrap();
    /// let config = ClientConfig::builder().all_hosts(base.clone()).build().unwrap();
    /// assert_eq!(config.base_url(HostClass::Content), &base);
    /// ```
    pub fn all_hosts(self, url: Url) -> Self {
        self.api_base(url.clone())
            .content_base(url.clone())
            .notify_base(url)
    }

    /// Sets the request timeout.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Sets the OAuth access token.
    pub fn access_token(mut self, token: impl Into<String>) -> Self {
        self.credentials.access_token = Some(token.into());
        self
    }

    /// Sets the app key and secret.
    pub fn app_credentials(mut self, key: impl Into<String>, secret: impl Into<String>) -> Self {
        self.credentials.app = Some(AppCredentials {
            key: key.into(),
            secret: secret.into(),
        });
        self
    }

    /// Replaces all credentials.
    pub fn credentials(mut self, credentials: Credentials) -> Self {
        self.credentials = credentials;
        self
    }

    /// Adds a header sent with every request.
    ///
    /// Route-level headers with the same name (case-insensitive) win.
    pub fn default_header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.default_headers.push((name.into(), value.into()));
        self
    }

    /// Builds the [`ClientConfig`].
    ///
    /// ## Errors
    ///
    /// Returns an error if a default base URL fails to parse, a base URL
    /// cannot carry a path, or a default header is invalid.
    pub fn build(self) -> Result<ClientConfig, ConfigError> {
        let api_base = resolve_base(self.api_base, DEFAULT_API_BASE)?;
        let content_base = resolve_base(self.content_base, DEFAULT_CONTENT_BASE)?;
        let notify_base = resolve_base(self.notify_base, DEFAULT_NOTIFY_BASE)?;

        for (name, value) in &self.default_headers {
            HeaderName::try_from(name.as_str())
                .map_err(|e| ConfigError::invalid_header(name.as_str(), e))?;
            HeaderValue::try_from(value.as_str())
                .map_err(|e| ConfigError::invalid_header(name.as_str(), e))?;
        }

        Ok(ClientConfig {
            api_base,
            content_base,
            notify_base,
            timeout: self
                .timeout
                .unwrap_or(Duration::from_secs(DEFAULT_TIMEOUT_SECS)),
            credentials: self.credentials,
            default_headers: self.default_headers,
        })
    }
}

fn resolve_base(url: Option<Url>, default: &str) -> Result<Url, ConfigError> {
    let url = match url {
        Some(url) => url,
        None => Url::parse(default)?,
    };
    if url.cannot_be_a_base() {
        return Err(ConfigError::CannotBeABase {
            url: url.to_string(),
        });
    }
    Ok(url)
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Sets environment variables for the lifetime of the guard.
    ///
    /// Only use from `#[serial_test::serial]` tests.
    struct ScopedEnv {
        key: &'static str,
        original: Option<String>,
    }

    impl ScopedEnv {
        fn set(key: &'static str, value: &str) -> Self {
            let original = env::var(key).ok();
            unsafe { env::set_var(key, value) };
            Self { key, original }
        }

        fn unset(key: &'static str) -> Self {
            let original = env::var(key).ok();
            unsafe { env::remove_var(key) };
            Self { key, original }
        }
    }

    impl Drop for ScopedEnv {
        fn drop(&mut self) {
            match &self.original {
                Some(val) => unsafe { env::set_var(self.key, val) },
                None => unsafe { env::remove_var(self.key) },
            }
        }
    }

    fn clear_all() -> Vec<ScopedEnv> {
        TOKEN_ENV_VARS
            .iter()
            .chain([APP_KEY_ENV, APP_SECRET_ENV].iter())
            .map(|key| ScopedEnv::unset(*key))
            .collect()
    }

    #[test]
    fn defaults_point_at_dropbox_hosts() {
        let config = ClientConfig::builder().build().unwrap();
        assert_eq!(
            config.base_url(HostClass::Api).as_str(),
            "https://api.dropboxapi.com/"
        );
        assert_eq!(
            config.base_url(HostClass::Content).as_str(),
            "https://content.dropboxapi.com/"
        );
        assert_eq!(
            config.base_url(HostClass::Notify).as_str(),
            "https://notify.dropboxapi.com/"
        );
        assert_eq!(config.timeout(), Duration::from_secs(30));
        assert!(config.credentials().is_empty());
    }

    #[test]
    fn builder_overrides() {
        let api = Url::parse("http://localhost:9000").unwrap();
        let config = ClientConfig::builder()
            .api_base(api.clone())
            .timeout(Duration::from_secs(5))
            .access_token("tok")
            .app_credentials("key", "secret")
            .default_header("User-Agent", "schematic-tests")
            .build()
            .unwrap();

        assert_eq!(config.base_url(HostClass::Api), &api);
        assert_eq!(config.timeout(), Duration::from_secs(5));
        assert_eq!(config.credentials().access_token.as_deref(), Some("tok"));
        assert_eq!(
            config.default_headers(),
            &[("User-Agent".to_string(), "schematic-tests".to_string())]
        );
    }

    #[test]
    fn invalid_header_is_rejected() {
        let result = ClientConfig::builder()
            .default_header("Bad Header", "value")
            .build();
        assert!(matches!(result, Err(ConfigError::InvalidHeader { .. })));
    }

    #[test]
    fn non_base_url_is_rejected() {
        let url = Url::parse("mailto:someone@example.com").unwrap();
        let result = ClientConfig::builder().api_base(url).build();
        assert!(matches!(result, Err(ConfigError::CannotBeABase { .. })));
    }

    #[test]
    fn debug_redacts_secrets() {
        let credentials = Credentials {
            access_token: Some("sl.secret-token".to_string()),
            app: Some(AppCredentials {
                key: "app-key".to_string(),
                secret: "app-secret".to_string(),
            }),
        };
        let debug = format!("{credentials:?}");
        assert!(!debug.contains("sl.secret-token"));
        assert!(!debug.contains("app-secret"));
        assert!(debug.contains("app-key"));
    }

    #[test]
    fn env_vars_follow_auth_set() {
        assert_eq!(
            credential_env_vars(AuthSet::team()),
            vec!["DROPBOX_ACCESS_TOKEN", "DROPBOX_TOKEN"]
        );
        assert_eq!(
            credential_env_vars(AuthSet::empty().with(AuthClass::App)),
            vec!["DROPBOX_APP_KEY", "DROPBOX_APP_SECRET"]
        );
    }

    #[test]
    #[serial_test::serial]
    fn from_env_prefers_first_token_variable() {
        let _clear = clear_all();
        let _primary = ScopedEnv::set("DROPBOX_ACCESS_TOKEN", "primary");
        let _fallback = ScopedEnv::set("DROPBOX_TOKEN", "fallback");

        let config = ClientConfig::from_env().unwrap();
        assert_eq!(config.credentials().access_token.as_deref(), Some("primary"));
    }

    #[test]
    #[serial_test::serial]
    fn from_env_falls_back_to_second_token_variable() {
        let _clear = clear_all();
        let _fallback = ScopedEnv::set("DROPBOX_TOKEN", "fallback");

        let config = ClientConfig::from_env().unwrap();
        assert_eq!(config.credentials().access_token.as_deref(), Some("fallback"));
    }

    #[test]
    #[serial_test::serial]
    fn from_env_accepts_app_credentials_alone() {
        let _clear = clear_all();
        let _key = ScopedEnv::set(APP_KEY_ENV, "key");
        let _secret = ScopedEnv::set(APP_SECRET_ENV, "secret");

        let config = ClientConfig::from_env().unwrap();
        assert!(config.credentials().access_token.is_none());
        assert_eq!(
            config.credentials().app.as_ref().map(|a| a.key.as_str()),
            Some("key")
        );
    }

    #[test]
    #[serial_test::serial]
    fn from_env_without_credentials_fails() {
        let _clear = clear_all();
        let _half = ScopedEnv::set(APP_KEY_ENV, "key-without-secret");

        let err = ClientConfig::from_env().unwrap_err();
        match err {
            ConfigError::Credentials(AuthError::MissingCredential { env_vars }) => {
                assert_eq!(
                    env_vars,
                    vec![
                        "DROPBOX_ACCESS_TOKEN",
                        "DROPBOX_TOKEN",
                        "DROPBOX_APP_KEY",
                        "DROPBOX_APP_SECRET"
                    ]
                );
            }
            other => panic!("expected missing credential, got {other:?}"),
        }
    }
}
