use std::{
    fmt,
    path::{Path, PathBuf},
};

use anyhow::{anyhow, bail, Context, Result};
use bytes::Bytes;
use log::{debug, info};
use url::Url;

mod retry;
pub use retry::RetryPolicy;

/// Where the document comes from. Exactly one origin is used per run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Source {
    File(PathBuf),
    Url(Url),
}

impl Source {
    /// picks the origin from the command line inputs; a file always wins over a url
    ///
    /// ```
    /// # use fetch::Source;
    /// # use std::path::PathBuf;
    /// let url = url::Url::parse("https://example.com").unwrap();
    /// let src = Source::from_args(Some(PathBuf::from("index.html")), Some(url.clone()));
    /// assert_eq!(src, Some(Source::File("index.html".into())));
    /// assert_eq!(Source::from_args(None, Some(url.clone())), Some(Source::Url(url)));
    /// assert_eq!(Source::from_args(None, None), None);
    /// ```
    pub fn from_args(file: Option<PathBuf>, url: Option<Url>) -> Option<Self> {
        match (file, url) {
            (Some(file), _) => Some(Source::File(file)),
            (None, Some(url)) => Some(Source::Url(url)),
            (None, None) => None,
        }
    }
}

impl fmt::Display for Source {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Source::File(path) => write!(f, "{}", path.display()),
            Source::Url(url) => write!(f, "{url}"),
        }
    }
}

/// reads a document from disk
pub fn read_local(path: &Path) -> Result<Bytes> {
    let bytes = std::fs::read(path).with_context(|| format!("could not read {}", path.display()))?;
    debug!("read {} bytes from {}", bytes.len(), path.display());
    Ok(bytes.into())
}

#[derive(Clone)]
pub struct FetchContext {
    client: reqwest::Client,
    policy: RetryPolicy,
}

impl FetchContext {
    pub fn new(client: reqwest::Client, policy: RetryPolicy) -> Self {
        FetchContext { client, policy }
    }

    pub fn with_user_agent(user_agent: &str, policy: RetryPolicy) -> Result<Self> {
        let client = reqwest::ClientBuilder::new()
            .user_agent(user_agent)
            .build()
            .context("failed to build http client")?;
        Ok(Self::new(client, policy))
    }

    pub fn policy(&self) -> RetryPolicy {
        self.policy
    }

    /// GETs `url`, retrying failed attempts according to the context's [`RetryPolicy`].
    ///
    /// Transport errors and error statuses (4xx/5xx) both count as failures. Each one is logged at
    /// info level; once the policy is exhausted the last failure is returned.
    pub async fn fetch(&self, url: &Url) -> Result<Bytes> {
        if url.scheme() == "file" {
            let path = url
                .to_file_path()
                .map_err(|()| anyhow!("{url} does not name a local file"))?;
            return read_local(&path);
        }

        let mut failures = 0;
        loop {
            let err = match self.fetch_once(url).await {
                Ok(bytes) => return Ok(bytes),
                Err(e) => e,
            };
            failures += 1;
            info!("attempt {failures} on {url} failed: {err:#}");
            if !self.policy.wait_your_turn(failures).await {
                let attempts = if failures == 1 {
                    "1 attempt".to_owned()
                } else {
                    format!("{failures} attempts")
                };
                return Err(err.context(format!("giving up on {url} after {attempts}")));
            }
            info!(target: "progress", "retrying {url}");
        }
    }

    async fn fetch_once(&self, url: &Url) -> Result<Bytes> {
        info!(target: "progress", "fetching url {url}");
        let res = self.client.get(url.clone()).send().await;
        let resp = match res {
            Ok(succ) => succ,
            Err(e) if e.is_builder() => {
                bail!("malformed request for {url}: {e}")
            }
            Err(e) => {
                return Err(e.into());
            }
        };
        let resp = resp.error_for_status()?;
        let bytes = resp.bytes().await.context("failed to read response body")?;
        debug!("received {} bytes from {url}", bytes.len());
        Ok(bytes)
    }
}
