use crate::{HostConfig, StdResult};

/// A trait supplying the authorization headers attached to requests against a host.
#[cfg_attr(test, mockall::automock)]
pub trait RequestOptionsProvider: Sync + Send {
    /// Returns the header name/value pairs to attach to a request against the
    /// given host config.
    fn request_options(&self, config: &HostConfig) -> StdResult<Vec<(String, String)>>;
}
