use reqwest::RequestBuilder;
use serde::{Deserialize, Serialize};

use crate::error::{Error, StatusCode};

#[derive(Debug, Deserialize)]
struct ErrorResponse {
    error: String,
}

pub(crate) struct BaseClient {
    api_url: String,
    client: reqwest::Client,
}

impl BaseClient {
    pub fn new(api_url: impl ToString) -> Self {
        let mut api_url = api_url.to_string();
        while api_url.ends_with('/') {
            api_url.pop();
        }
        Self {
            api_url,
            client: reqwest::Client::new(),
        }
    }

    async fn send<T: for<'de> Deserialize<'de>>(rb: RequestBuilder) -> Result<T, Error> {
        let resp = rb.send().await?;
        let status = resp.status();
        if status.is_success() {
            Ok(resp.json::<T>().await?)
        } else {
            Err(Self::api_error(status, resp).await)
        }
    }

    async fn api_error(status: StatusCode, resp: reqwest::Response) -> Error {
        let body = resp.text().await.unwrap_or_default();
        let message = serde_json::from_str::<ErrorResponse>(&body)
            .map(|e| e.error)
            .unwrap_or(body);
        Error::Api { status, message }
    }

    pub async fn get<T: for<'de> Deserialize<'de>>(&self, path: String) -> Result<T, Error> {
        let request_builder = self.client.get(format!("{}{}", self.api_url, path));
        Self::send(request_builder).await
    }

    pub async fn post<T: Serialize, U: for<'de> Deserialize<'de>>(
        &self,
        path: String,
        body: &T,
    ) -> Result<U, Error> {
        let request_builder = self
            .client
            .post(format!("{}{}", self.api_url, path))
            .json(body);
        Self::send(request_builder).await
    }

    /// For endpoints whose success body is not JSON (the server answers
    /// the delete-loan post with a redirect page). Only the status and,
    /// on failure, the `{"error"}` payload are inspected.
    pub async fn post_no_content<T: Serialize>(&self, path: String, body: &T) -> Result<(), Error> {
        let resp = self
            .client
            .post(format!("{}{}", self.api_url, path))
            .json(body)
            .send()
            .await?;
        let status = resp.status();
        if status.is_success() {
            Ok(())
        } else {
            Err(Self::api_error(status, resp).await)
        }
    }
}
