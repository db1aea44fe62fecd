use domainboard_domain::config::{AuthConfig, OAuthProviderConfig};
use domainboard_domain::{AuthProvider, DomainError, OAuthProfile};
use reqwest::Url;
use serde::Deserialize;
use std::time::Duration;
use tracing::{debug, instrument};

const GITHUB_AUTHORIZE_URL: &str = "https://github.com/login/oauth/authorize";
const GITHUB_TOKEN_URL: &str = "https://github.com/login/oauth/access_token";
const GITHUB_USER_URL: &str = "https://api.github.com/user";

const GOOGLE_AUTHORIZE_URL: &str = "https://accounts.google.com/o/oauth2/v2/auth";
const GOOGLE_TOKEN_URL: &str = "https://oauth2.googleapis.com/token";
const GOOGLE_USERINFO_URL: &str = "https://www.googleapis.com/oauth2/v2/userinfo";

#[derive(Debug, Deserialize)]
struct TokenResponse {
    access_token: Option<String>,
}

#[derive(Debug, Deserialize)]
struct GithubUser {
    id: i64,
    login: String,
    name: Option<String>,
    email: Option<String>,
    avatar_url: Option<String>,
}

#[derive(Debug, Deserialize)]
struct GoogleUser {
    id: String,
    email: Option<String>,
    name: Option<String>,
    picture: Option<String>,
}

/// Authorization-code exchange against GitHub and Google.
pub struct OAuthClient {
    http: reqwest::Client,
    config: AuthConfig,
}

impl OAuthClient {
    pub fn new(config: AuthConfig) -> Self {
        let http = reqwest::Client::builder()
            .use_rustls_tls()
            .timeout(Duration::from_secs(10))
            .build()
            .unwrap_or_else(|_| reqwest::Client::new());

        Self { http, config }
    }

    fn provider_config(&self, provider: AuthProvider) -> Result<&OAuthProviderConfig, DomainError> {
        let cfg = match provider {
            AuthProvider::Github => &self.config.github,
            AuthProvider::Google => &self.config.google,
            AuthProvider::Local => {
                return Err(DomainError::Validation(
                    "Local strategy has no OAuth flow".to_string(),
                ))
            }
        };

        if !cfg.is_enabled() {
            return Err(DomainError::OAuthFailed(format!(
                "{} OAuth is not configured",
                provider
            )));
        }
        Ok(cfg)
    }

    /// Builds the redirect target starting the provider's consent flow.
    pub fn authorize_url(&self, provider: AuthProvider) -> Result<String, DomainError> {
        let url = match provider {
            AuthProvider::Github => {
                let cfg = self.provider_config(provider)?;
                Url::parse_with_params(
                    GITHUB_AUTHORIZE_URL,
                    &[
                        ("client_id", cfg.client_id.as_str()),
                        ("redirect_uri", cfg.callback_url.as_str()),
                        ("scope", "user:email"),
                    ],
                )
            }
            AuthProvider::Google => {
                let cfg = self.provider_config(provider)?;
                Url::parse_with_params(
                    GOOGLE_AUTHORIZE_URL,
                    &[
                        ("client_id", cfg.client_id.as_str()),
                        ("redirect_uri", cfg.callback_url.as_str()),
                        ("response_type", "code"),
                        ("scope", "openid email profile"),
                    ],
                )
            }
            AuthProvider::Local => {
                return Err(DomainError::Validation(
                    "Local strategy has no OAuth flow".to_string(),
                ))
            }
        }
        .map_err(|e| DomainError::OAuthFailed(e.to_string()))?;

        Ok(url.into())
    }

    /// Swaps an authorization code for the provider's profile.
    #[instrument(skip(self, code))]
    pub async fn exchange_code(
        &self,
        provider: AuthProvider,
        code: &str,
    ) -> Result<OAuthProfile, DomainError> {
        match provider {
            AuthProvider::Github => self.exchange_github(code).await,
            AuthProvider::Google => self.exchange_google(code).await,
            AuthProvider::Local => Err(DomainError::Validation(
                "Local strategy has no OAuth flow".to_string(),
            )),
        }
    }

    async fn fetch_token(
        &self,
        token_url: &str,
        params: &[(&str, &str)],
    ) -> Result<String, DomainError> {
        let response: TokenResponse = self
            .http
            .post(token_url)
            .header("Accept", "application/json")
            .form(params)
            .send()
            .await
            .map_err(|e| DomainError::OAuthFailed(format!("Token request failed: {}", e)))?
            .json()
            .await
            .map_err(|e| DomainError::OAuthFailed(format!("Malformed token response: {}", e)))?;

        response
            .access_token
            .ok_or_else(|| DomainError::OAuthFailed("Provider returned no access token".into()))
    }

    async fn exchange_github(&self, code: &str) -> Result<OAuthProfile, DomainError> {
        let cfg = self.provider_config(AuthProvider::Github)?;

        let token = self
            .fetch_token(
                GITHUB_TOKEN_URL,
                &[
                    ("client_id", cfg.client_id.as_str()),
                    ("client_secret", cfg.client_secret.as_str()),
                    ("code", code),
                    ("redirect_uri", cfg.callback_url.as_str()),
                ],
            )
            .await?;

        let user: GithubUser = self
            .http
            .get(GITHUB_USER_URL)
            .bearer_auth(&token)
            // GitHub's API rejects requests without a User-Agent.
            .header("User-Agent", "domainboard")
            .send()
            .await
            .map_err(|e| DomainError::OAuthFailed(format!("Profile request failed: {}", e)))?
            .json()
            .await
            .map_err(|e| DomainError::OAuthFailed(format!("Malformed profile: {}", e)))?;

        debug!(github_id = user.id, login = %user.login, "GitHub profile fetched");

        let email = user
            .email
            .unwrap_or_else(|| format!("{}@users.noreply.github.com", user.login));

        Ok(OAuthProfile {
            provider: AuthProvider::Github,
            provider_id: user.id.to_string(),
            email,
            name: user.name.unwrap_or(user.login),
            avatar_url: user.avatar_url,
        })
    }

    async fn exchange_google(&self, code: &str) -> Result<OAuthProfile, DomainError> {
        let cfg = self.provider_config(AuthProvider::Google)?;

        let token = self
            .fetch_token(
                GOOGLE_TOKEN_URL,
                &[
                    ("client_id", cfg.client_id.as_str()),
                    ("client_secret", cfg.client_secret.as_str()),
                    ("code", code),
                    ("redirect_uri", cfg.callback_url.as_str()),
                    ("grant_type", "authorization_code"),
                ],
            )
            .await?;

        let user: GoogleUser = self
            .http
            .get(GOOGLE_USERINFO_URL)
            .bearer_auth(&token)
            .send()
            .await
            .map_err(|e| DomainError::OAuthFailed(format!("Profile request failed: {}", e)))?
            .json()
            .await
            .map_err(|e| DomainError::OAuthFailed(format!("Malformed profile: {}", e)))?;

        let email = user
            .email
            .ok_or_else(|| DomainError::OAuthFailed("Google profile has no email".into()))?;

        Ok(OAuthProfile {
            provider: AuthProvider::Google,
            provider_id: user.id,
            name: user.name.unwrap_or_else(|| email.clone()),
            email,
            avatar_url: user.picture,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn enabled_config() -> AuthConfig {
        let mut config = AuthConfig::default();
        config.github.client_id = "Iv1.abcdef0123456789".to_string();
        config.github.client_secret = "secret".to_string();
        config
    }

    #[test]
    fn test_authorize_url_carries_client_and_callback() {
        let client = OAuthClient::new(enabled_config());
        let url = client.authorize_url(AuthProvider::Github).unwrap();

        assert!(url.starts_with(GITHUB_AUTHORIZE_URL));
        assert!(url.contains("client_id=Iv1.abcdef0123456789"));
        assert!(url.contains("scope=user%3Aemail"));
    }

    #[test]
    fn test_unconfigured_provider_is_rejected() {
        let client = OAuthClient::new(AuthConfig::default());
        assert!(client.authorize_url(AuthProvider::Github).is_err());
        assert!(client.authorize_url(AuthProvider::Google).is_err());
    }

    #[test]
    fn test_local_has_no_authorize_url() {
        let client = OAuthClient::new(enabled_config());
        assert!(client.authorize_url(AuthProvider::Local).is_err());
    }
}
