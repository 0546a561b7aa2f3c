/// Connection settings for a code search host.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HostConfig {
    /// The service host, without scheme.
    pub(crate) host: String,

    /// The personal access token used to authorize requests, if any.
    pub(crate) credential: Option<String>,
}

impl HostConfig {
    /// Creates a new `HostConfig` with the given host and optional credential.
    pub fn new(host: &str, credential: Option<&str>) -> Self {
        Self {
            host: host.to_string(),
            credential: credential.map(|credential| credential.to_string()),
        }
    }

    /// Retrieves the service host.
    pub fn host(&self) -> &str {
        &self.host
    }

    /// Retrieves the credential, if any.
    pub fn credential(&self) -> Option<&str> {
        self.credential.as_deref()
    }

    /// Creates a dummy `HostConfig` for testing purposes.
    #[cfg(test)]
    pub(crate) fn dummy() -> Self {
        Self::new("azure.example.com", None)
    }
}
