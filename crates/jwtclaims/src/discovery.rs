//! OpenID Connect discovery metadata
//!
//! Interprets `/.well-known/openid-configuration` documents as defined in
//! [OpenID Connect Discovery 1.0](https://openid.net/specs/openid-connect-discovery-1_0.html).
//! Only the members below are read; everything else is ignored.

use crate::error::{Error, Result};
use crate::remote::ConfigurationRetriever;
use miniserde::Deserialize;
use tracing::debug;

/// Provider metadata from a discovery document
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct OpenIdConfiguration {
    pub issuer: Option<String>,
    pub jwks_uri: Option<String>,
    pub authorization_endpoint: Option<String>,
    pub token_endpoint: Option<String>,
    pub userinfo_endpoint: Option<String>,
    pub end_session_endpoint: Option<String>,
    pub response_types_supported: Option<Vec<String>>,
    pub subject_types_supported: Option<Vec<String>>,
    pub id_token_signing_alg_values_supported: Option<Vec<String>>,
    pub scopes_supported: Option<Vec<String>>,
}

impl OpenIdConfiguration {
    /// Parse a discovery document
    pub fn from_json(document: &str) -> Result<Self> {
        let config: Self = miniserde::json::from_str(document)
            .map_err(|_| Error::ConfigurationInvalid("discovery: invalid discovery json".into()))?;

        debug!(issuer = config.issuer.as_deref(), "parsed discovery document");
        Ok(config)
    }
}

/// `ConfigurationRetriever` producing `OpenIdConfiguration`
#[derive(Debug, Clone, Copy, Default)]
pub struct OpenIdConfigurationRetriever;

impl ConfigurationRetriever for OpenIdConfigurationRetriever {
    type Configuration = OpenIdConfiguration;

    fn interpret(&self, document: &str) -> Result<OpenIdConfiguration> {
        OpenIdConfiguration::from_json(document)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::remote::{CancellationSignal, HttpDocumentRetriever, get_configuration};

    const DOCUMENT: &str = r#"{
        "issuer": "https://issuer.example",
        "jwks_uri": "https://issuer.example/.well-known/jwks.json",
        "authorization_endpoint": "https://issuer.example/authorize",
        "id_token_signing_alg_values_supported": ["RS256", "ES256"],
        "claims_supported": ["sub", "iss"]
    }"#;

    #[test]
    fn test_from_json() {
        let config = OpenIdConfiguration::from_json(DOCUMENT).unwrap();
        assert_eq!(config.issuer.as_deref(), Some("https://issuer.example"));
        assert_eq!(
            config.jwks_uri.as_deref(),
            Some("https://issuer.example/.well-known/jwks.json")
        );
        assert_eq!(
            config.id_token_signing_alg_values_supported,
            Some(vec!["RS256".to_string(), "ES256".to_string()])
        );
        assert_eq!(config.token_endpoint, None);
    }

    #[test]
    fn test_from_json_invalid() {
        assert!(matches!(
            OpenIdConfiguration::from_json("{ invalid json }"),
            Err(Error::ConfigurationInvalid(msg)) if msg.contains("invalid discovery json")
        ));
    }

    #[tokio::test]
    async fn test_get_configuration() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("GET", "/.well-known/openid-configuration")
            .with_status(200)
            .with_body(DOCUMENT)
            .create_async()
            .await;

        let address = format!("{}/.well-known/openid-configuration", server.url());
        let retriever = HttpDocumentRetriever::new().require_https(false);
        let config = get_configuration(
            &address,
            &retriever,
            &OpenIdConfigurationRetriever,
            &CancellationSignal::none(),
        )
        .await
        .expect("configuration");

        assert_eq!(config.issuer.as_deref(), Some("https://issuer.example"));
        mock.assert_async().await;
    }
}
