use crate::error::IttError;
use anyhow::Context;
use reqwest::blocking::Client;

/// Text of a package's install script and where it came from.
#[derive(Debug, Clone)]
pub struct InstallScript {
    pub url: String,
    pub text: String,
}

/// Remote script repository.
pub trait RemoteSource {
    /// Succeeds when `url` answers with a success status.
    fn probe(&self, name: &str, url: &str) -> Result<(), IttError>;
    fn fetch(&self, name: &str, url: &str) -> Result<InstallScript, IttError>;
}

pub struct HttpSource {
    client: Client,
}

impl HttpSource {
    pub fn new() -> anyhow::Result<Self> {
        let client = Client::builder()
            .user_agent(concat!("itt/", env!("CARGO_PKG_VERSION")))
            .build()
            .context("building http client")?;
        Ok(Self { client })
    }
}

impl RemoteSource for HttpSource {
    fn probe(&self, name: &str, url: &str) -> Result<(), IttError> {
        tracing::debug!("HEAD {url}");
        let resp = self.client.head(url).send().map_err(|source| IttError::Network {
            url: url.to_string(),
            source,
        })?;
        if !resp.status().is_success() {
            tracing::debug!("HEAD {url} -> {}", resp.status());
            return Err(IttError::NotFound { name: name.to_string(), url: url.to_string() });
        }
        Ok(())
    }

    fn fetch(&self, name: &str, url: &str) -> Result<InstallScript, IttError> {
        tracing::debug!("GET {url}");
        let network = |source| IttError::Network { url: url.to_string(), source };
        let resp = self.client.get(url).send().map_err(network)?;
        if !resp.status().is_success() {
            tracing::debug!("GET {url} -> {}", resp.status());
            return Err(IttError::NotFound { name: name.to_string(), url: url.to_string() });
        }
        let text = resp.text().map_err(network)?;
        Ok(InstallScript { url: url.to_string(), text })
    }
}
