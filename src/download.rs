use crate::error::{InstallError, Result};
use clap::ValueEnum;
use reqwest::{StatusCode, blocking::Client};
use std::{fs, path::Path, process::Command};

/// Something that can place the file at `url` into `dir`.
pub trait Fetcher {
    fn fetch(&self, url: &str, dir: &Path) -> Result<()>;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, ValueEnum)]
pub enum FetcherKind {
    /// Shell out to `wget`.
    #[default]
    Wget,
    /// Download in-process over HTTP.
    Http,
}

impl FetcherKind {
    pub fn get(&self) -> &'static str {
        match *self {
            Self::Wget => "wget",
            Self::Http => "http",
        }
    }
}

/// Runs `<program> -q <url> -P <dir>` and trusts its exit status.
#[derive(Debug, Clone)]
pub struct WgetFetcher {
    pub program: String,
}

impl WgetFetcher {
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
        }
    }
}

impl Default for WgetFetcher {
    fn default() -> Self {
        Self::new("wget")
    }
}

impl Fetcher for WgetFetcher {
    fn fetch(&self, url: &str, dir: &Path) -> Result<()> {
        tracing::debug!("Exec: {} -q {url} -P {}", self.program, dir.display());

        let res = Command::new(&self.program)
            .arg("-q")
            .arg(url)
            .arg("-P")
            .arg(dir)
            .status()
            .map_err(|source| InstallError::Spawn {
                program: self.program.clone(),
                source,
            })?;

        tracing::debug!("{} exited with {res}", self.program);

        if !res.success() {
            return Err(InstallError::DownloadFailed {
                url: url.into(),
                reason: format!("{} exited with {res}", self.program),
            });
        }

        Ok(())
    }
}

#[derive(Debug, Clone)]
pub struct HttpFetcher {
    client: Client,
}

impl HttpFetcher {
    /// Builds a client without reqwest's default 30 second request timeout.
    pub fn new() -> Result<Self> {
        Ok(Self {
            client: Client::builder().timeout(None).build()?,
        })
    }
}

impl Fetcher for HttpFetcher {
    fn fetch(&self, url: &str, dir: &Path) -> Result<()> {
        let name = file_name(url).ok_or_else(|| InstallError::DownloadFailed {
            url: url.into(),
            reason: "URL has no file name".into(),
        })?;

        tracing::debug!("GET {url}");

        let req = self.client.get(url).send()?;

        if req.status() != StatusCode::OK {
            return Err(InstallError::DownloadFailed {
                url: url.into(),
                reason: format!("server responded with {}", req.status()),
            });
        }

        fs::write(dir.join(name), req.bytes()?)?;
        Ok(())
    }
}

/// Last non-empty path segment of `url`, ignoring any query or fragment.
pub fn file_name(url: &str) -> Option<&str> {
    url.split(['?', '#'])
        .next()?
        .rsplit('/')
        .next()
        .filter(|v| !v.is_empty() && !v.contains(':'))
}

pub fn fetcher_for(kind: FetcherKind, wget: impl Into<String>) -> Result<Box<dyn Fetcher>> {
    Ok(match kind {
        FetcherKind::Wget => Box::new(WgetFetcher::new(wget)),
        FetcherKind::Http => Box::new(HttpFetcher::new()?),
    })
}
