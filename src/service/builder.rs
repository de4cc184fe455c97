//! Service construction.

use url::Url;

use crate::adapter::Adapter;
use crate::config::ServiceConfig;
use crate::error::BuildError;
use crate::http::Options;
use crate::service::Service;

/// Builder for `Service`.
///
/// ```
/// use pathwise::adapter::MockAdapter;
/// use pathwise::http::Options;
/// use pathwise::service::Service;
///
/// let service = Service::builder(MockAdapter::new())
///     .host("https://api.example.com/v1")?
///     .defaults(Options::new().raw_header("Accept", "application/json"))
///     .build();
/// assert_eq!(service.host().map(|h| h.as_str()), Some("https://api.example.com/v1/"));
/// # Ok::<(), pathwise::error::BuildError>(())
/// ```
#[derive(Debug)]
pub struct ServiceBuilder<A> {
    adapter: A,
    host: Option<Url>,
    defaults: Options,
}

impl<A: Adapter> ServiceBuilder<A> {
    pub(crate) fn new(adapter: A) -> Self {
        Self {
            adapter,
            host: None,
            defaults: Options::default(),
        }
    }

    /// Parse and set the host.
    pub fn host(self, host: &str) -> Result<Self, BuildError> {
        let url = Url::parse(host).map_err(|source| BuildError::InvalidHost {
            host: host.to_string(),
            source,
        })?;
        Ok(self.host_url(url))
    }

    /// Set an already-parsed host.
    pub fn host_url(mut self, host: Url) -> Self {
        self.host = Some(normalize_host(host));
        self
    }

    /// Options every call is merged over.
    pub fn defaults(mut self, defaults: Options) -> Self {
        self.defaults = defaults;
        self
    }

    /// Apply the `[service]` and `[defaults]` sections of a config.
    pub fn config(self, config: &ServiceConfig) -> Result<Self, BuildError> {
        let builder = match &config.service.host {
            Some(host) => self.host(host)?,
            None => self,
        };
        Ok(builder.defaults(config.defaults.clone()))
    }

    pub fn build(self) -> Service<A> {
        Service::from_parts(self.adapter, self.host, self.defaults)
    }
}

/// Make the host's path a directory so joined paths land beneath it.
pub(crate) fn normalize_host(mut host: Url) -> Url {
    if !host.cannot_be_a_base() && !host.path().ends_with('/') {
        let path = format!("{}/", host.path());
        host.set_path(&path);
    }
    host
}
