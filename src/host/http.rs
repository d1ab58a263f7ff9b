use std::io;
use std::time::Duration;

use anyhow::{Context, Result};
use tracing::debug;

use super::FsStorage;
use crate::platform::{HttpResponse, Network, SaveTarget, SavedFile, Storage};

/// WiFi stand-in over a blocking `reqwest` client. Saved downloads land in the same
/// directories the store reads from.
pub struct HttpNetwork {
    client: reqwest::blocking::Client,
    storage: FsStorage,
    online: bool,
}

impl HttpNetwork {
    pub fn new(storage: FsStorage, online: bool) -> Result<Self> {
        let client = reqwest::blocking::Client::builder()
            .user_agent(concat!("appstore/", env!("CARGO_PKG_VERSION")))
            .timeout(Duration::from_secs(30))
            .build()
            .context("build http client")?;
        Ok(Self {
            client,
            storage,
            online,
        })
    }
}

impl Network for HttpNetwork {
    fn connected(&self) -> bool {
        self.online
    }

    fn get(&mut self, url: &str) -> io::Result<HttpResponse> {
        let resp = self.client.get(url).send().map_err(io::Error::other)?;
        let status = resp.status().as_u16();
        let body = resp.bytes().map_err(io::Error::other)?.to_vec();
        Ok(HttpResponse { status, body })
    }

    fn save(&mut self, url: &str, target: SaveTarget<'_>) -> io::Result<SavedFile> {
        let resp = self.client.get(url).send().map_err(io::Error::other)?;
        let status = resp.status().as_u16();
        if status != 200 {
            return Ok(SavedFile { status, length: 0 });
        }
        let bytes = resp.bytes().map_err(io::Error::other)?;
        self.storage.write(target.backend, target.path, &bytes)?;
        debug!(%url, path = target.path, bytes = bytes.len(), "saved");
        Ok(SavedFile {
            status,
            length: bytes.len() as u64,
        })
    }
}
