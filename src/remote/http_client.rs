use serde::de::DeserializeOwned;
use tracing::debug;

use super::*;

/// Sends the URL through the first matching host redirect.
pub fn rewrite_url(url: &str, rules: &[UrlRewrite]) -> String {
    match rules.iter().find(|rule| url.contains(&rule.from)) {
        Some(rule) => url.replacen(&rule.from, &rule.to, 1),
        None => url.to_string(),
    }
}

pub fn encode_spaces(s: &str) -> String {
    s.replace(' ', "%20")
}

impl CatalogClient {
    pub(super) fn rewrite(&self, url: &str) -> String {
        rewrite_url(url, &self.rewrites)
    }

    pub(super) fn get_json<T: DeserializeOwned>(&mut self, url: &str) -> Result<T, FetchError> {
        let url = self.rewrite(url);
        let resp = self.network.get(&url)?;
        debug!(%url, status = resp.status, bytes = resp.body.len(), "fetch");
        if resp.status != 200 {
            return Err(FetchError::Status(resp.status));
        }
        Ok(serde_json::from_slice(&resp.body)?)
    }
}

#[cfg(test)]
#[path = "../tests/remote/http_client_tests.rs"]
mod tests;
