//! myvariant.info client implementation.
//!
//! Two independent lookups per variant identifier: the snpEff effect
//! annotation (with one retry) and the ExAC allele frequency (single shot).
//! Both map every failure to absence; callers never see a network error.

use std::thread::sleep;
use std::time::Duration;

use anyhow::{Context, Result, anyhow};
use log::warn;

use crate::consts::{
    DEFAULT_FETCH_ATTEMPTS, DEFAULT_MYVARIANT_API, DEFAULT_RETRY_DELAY, EFFECT_FIELDS,
    FREQUENCY_FIELDS,
};
use crate::models::{EffectResponse, FrequencyResponse};

/// Builder for constructing a [`MyVariantClient`] with custom configuration.
///
/// # Examples
///
/// ```rust
/// use std::time::Duration;
/// use varimpact_core::client::MyVariantClient;
///
/// let client = MyVariantClient::builder()
///     .with_base_url("https://myvariant.info/v1".to_string())
///     .with_retry_delay(Duration::from_millis(500))
///     .finish();
/// ```
#[derive(Default)]
pub struct MyVariantClientBuilder {
    base_url: Option<String>,
    attempts: Option<u32>,
    retry_delay: Option<Duration>,
}

impl MyVariantClientBuilder {
    /// Creates a new, empty MyVariantClientBuilder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the API base URL, e.g. `https://myvariant.info/v1`.
    pub fn with_base_url(mut self, base_url: String) -> Self {
        self.base_url = Some(base_url);
        self
    }

    /// Sets the total attempt count for the effect-annotation lookup.
    pub fn with_attempts(mut self, attempts: u32) -> Self {
        self.attempts = Some(attempts);
        self
    }

    /// Sets the pause between effect-annotation attempts.
    pub fn with_retry_delay(mut self, retry_delay: Duration) -> Self {
        self.retry_delay = Some(retry_delay);
        self
    }

    /// Consumes the builder and creates a MyVariantClient.
    pub fn finish(self) -> MyVariantClient {
        MyVariantClient {
            base_url: self
                .base_url
                .unwrap_or_else(|| DEFAULT_MYVARIANT_API.to_string()),
            attempts: self.attempts.unwrap_or(DEFAULT_FETCH_ATTEMPTS).max(1),
            retry_delay: self.retry_delay.unwrap_or(DEFAULT_RETRY_DELAY),
        }
    }
}

/// Client for the myvariant.info variant annotation API.
pub struct MyVariantClient {
    /// API endpoint URL.
    pub base_url: String,
    /// Total attempts for the effect lookup.
    attempts: u32,
    /// Pause between effect lookup attempts.
    retry_delay: Duration,
}

impl Default for MyVariantClient {
    fn default() -> Self {
        Self::builder().finish()
    }
}

impl MyVariantClient {
    /// Creates a new builder for constructing a [`MyVariantClient`].
    pub fn builder() -> MyVariantClientBuilder {
        MyVariantClientBuilder::default()
    }

    /// Fetch the snpEff effect annotation for a variant identifier.
    ///
    /// An attempt fails on any transport error, non-2xx status, or body that
    /// does not decode as JSON. On failure the lookup is retried once after
    /// the configured delay; if the last attempt also fails the variant is
    /// given up on with a logged warning and `None` is returned. A 200
    /// response without a `snpeff` field is a success whose annotation list
    /// is simply empty.
    pub fn fetch_effect_annotation(&self, variant_id: &str) -> Option<EffectResponse> {
        let url = format!(
            "{}/variant/{}?fields={}",
            self.base_url, variant_id, EFFECT_FIELDS
        );

        for attempt in 1..=self.attempts {
            match self.request_effect(&url) {
                Ok(payload) => return Some(payload),
                Err(e) => {
                    warn!("Attempt {} failed for {}: {}", attempt, variant_id, e);
                    if attempt < self.attempts {
                        sleep(self.retry_delay);
                    }
                }
            }
        }

        warn!(
            "Skipping {} after {} failed attempts",
            variant_id, self.attempts
        );
        None
    }

    fn request_effect(&self, url: &str) -> Result<EffectResponse> {
        let response = ureq::get(url)
            .call()
            .map_err(|e| anyhow!("Request error: {}", e))?;
        response
            .into_json::<EffectResponse>()
            .context("Failed to decode annotation body")
    }

    /// Fetch the ExAC allele frequency for a variant identifier.
    ///
    /// Single attempt, no retry. Returns `Some` only when the response
    /// status is 200 and the `exac.af` field is structurally present; any
    /// failure is treated as "no frequency data", which downstream means
    /// the variant is novel. A recorded frequency of `0.0` is a value, not
    /// absence.
    pub fn fetch_frequency(&self, variant_id: &str) -> Option<f64> {
        let url = format!(
            "{}/variant/{}?fields={}",
            self.base_url, variant_id, FREQUENCY_FIELDS
        );

        let response = ureq::get(&url).call().ok()?;
        if response.status() != 200 {
            return None;
        }
        let payload: FrequencyResponse = response.into_json().ok()?;
        payload.allele_frequency()
    }
}
