use base64::{Engine, engine::general_purpose::STANDARD};

use crate::{HostConfig, RequestOptionsProvider, StdResult};

/// Supplies `Basic` authorization headers built from a personal access token.
///
/// When the host config carries no credential, no headers are emitted and the
/// requests go out anonymously.
pub struct PatRequestOptionsProvider;

impl RequestOptionsProvider for PatRequestOptionsProvider {
    fn request_options(&self, config: &HostConfig) -> StdResult<Vec<(String, String)>> {
        match config.credential() {
            Some(token) => {
                let encoded = STANDARD.encode(format!(":{token}"));

                Ok(vec![(
                    "Authorization".to_string(),
                    format!("Basic {encoded}"),
                )])
            }
            None => Ok(vec![]),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn emits_basic_authorization_header_from_token() {
        let provider = PatRequestOptionsProvider;
        let config = HostConfig::new("azure.example.com", Some("secret"));

        let options = provider.request_options(&config).unwrap();

        assert_eq!(
            vec![(
                "Authorization".to_string(),
                "Basic OnNlY3JldA==".to_string()
            )],
            options
        );
    }

    #[test]
    fn emits_no_headers_without_credential() {
        let provider = PatRequestOptionsProvider;
        let config = HostConfig::new("azure.example.com", None);

        let options = provider.request_options(&config).unwrap();

        assert!(options.is_empty());
    }
}
