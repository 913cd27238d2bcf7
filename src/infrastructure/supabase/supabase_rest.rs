use anyhow::Result;
use reqwest::header::{AUTHORIZATION, CONTENT_TYPE};
use serde::Serialize;
use serde::de::DeserializeOwned;
use tracing::error;

/// PostgREST client for the managed store, authenticated with the service
/// role key. Constructed once at process start and passed down explicitly.
pub struct SupabaseRestClient {
    http: reqwest::Client,
    base_url: String,
    service_role_key: String,
}

impl SupabaseRestClient {
    pub fn new(base_url: String, service_role_key: String) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
            service_role_key,
        }
    }

    /// Fetches rows from `table`, filtered by PostgREST query pairs such as
    /// `("status", "eq.paid")`.
    pub async fn select<T: DeserializeOwned>(
        &self,
        table: &str,
        filters: &[(&str, String)],
    ) -> Result<Vec<T>> {
        let resp = self
            .http
            .get(format!("{}/rest/v1/{}", self.base_url, table))
            .query(&[("select", "*")])
            .query(filters)
            .header("apikey", &self.service_role_key)
            .header(
                AUTHORIZATION,
                format!("Bearer {}", self.service_role_key),
            )
            .send()
            .await?;
        let resp = Self::ensure_success(resp, table).await?;

        let rows: Vec<T> = resp.json().await?;
        Ok(rows)
    }

    /// Insert-or-update on `table` with the given conflict target, using
    /// PostgREST merge-duplicates resolution.
    pub async fn upsert<T: Serialize + Sync>(
        &self,
        table: &str,
        on_conflict: &str,
        record: &T,
    ) -> Result<()> {
        let resp = self
            .http
            .post(format!("{}/rest/v1/{}", self.base_url, table))
            .query(&[("on_conflict", on_conflict)])
            .header("apikey", &self.service_role_key)
            .header(
                AUTHORIZATION,
                format!("Bearer {}", self.service_role_key),
            )
            .header(CONTENT_TYPE, "application/json")
            .header("Prefer", "resolution=merge-duplicates")
            .json(record)
            .send()
            .await?;
        Self::ensure_success(resp, table).await?;

        Ok(())
    }

    async fn ensure_success(resp: reqwest::Response, context: &str) -> Result<reqwest::Response> {
        if resp.status().is_success() {
            return Ok(resp);
        }

        let status = resp.status();
        let body = match resp.text().await {
            Ok(text) if !text.is_empty() => text,
            Ok(_) => "<empty response body>".to_string(),
            Err(err) => format!("<failed to read response body: {err}>"),
        };

        error!(
            status = %status,
            response_body = %body,
            context = %context,
            "supabase rest request failed"
        );

        anyhow::bail!("Supabase request failed: {} (status {})", context, status);
    }
}
