use anyhow::{Context, Result};
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use super::selection::{SelectionError, SelectionOptions, WebhookScope};
use crate::symbols::*;

/// Options for the `webhook create` command
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CreateOptions {
    /// Which events the webhook is scoped to
    pub selection: SelectionOptions,
    /// Endpoint that receives deliveries
    pub url: String,
    /// Event names to deliver; empty means every event of the scope
    pub events: Vec<String>,
}

impl CreateOptions {
    /// Validate the options before any registration work happens
    pub fn validate(&self) -> Result<(), SelectionError> {
        self.selection.validate()
    }
}

/// Payload describing a webhook to register
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegistrationRequest {
    pub scope: WebhookScope,
    pub url: String,
    #[serde(default)]
    pub events: Vec<String>,
}

impl RegistrationRequest {
    /// Build a request from options, validating the selection first
    pub fn from_options(options: &CreateOptions) -> Result<Self, SelectionError> {
        Ok(Self {
            scope: options.selection.scope()?,
            url: options.url.clone(),
            events: options.events.clone(),
        })
    }
}

/// Backend that performs the actual webhook registration
#[async_trait]
pub trait WebhookRegistrar: Send + Sync {
    /// Short name used in log output
    fn name(&self) -> &str;

    /// Register the webhook described by `request`
    async fn register(&self, request: &RegistrationRequest) -> Result<()>;
}

/// Registrar that hands the request to the delivery service as JSON on stdout
#[derive(Debug, Default)]
pub struct StdoutRegistrar;

impl StdoutRegistrar {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl WebhookRegistrar for StdoutRegistrar {
    fn name(&self) -> &str {
        "stdout"
    }

    async fn register(&self, request: &RegistrationRequest) -> Result<()> {
        let payload = serde_json::to_string_pretty(request)
            .context("Failed to serialize registration request")?;
        println!("{payload}");
        Ok(())
    }
}

/// Validate `options` and register the resulting webhook.
///
/// The registrar is never called when the selection is invalid; the
/// [`SelectionError`] is returned as-is inside the `anyhow::Error`.
pub async fn create_webhook(
    options: &CreateOptions,
    registrar: &dyn WebhookRegistrar,
) -> Result<RegistrationRequest> {
    options.validate()?;
    let request = RegistrationRequest::from_options(options)?;

    debug!(
        "{} Registering webhook via {} registrar: {:?}",
        SYMBOL_ACTION_HOOK,
        registrar.name(),
        request
    );
    registrar
        .register(&request)
        .await
        .with_context(|| format!("Failed to register webhook for {}", request.scope))?;

    info!(
        "{} Registered webhook for {} -> {}",
        SYMBOL_INDICATOR_SUCCESS, request.scope, request.url
    );
    Ok(request)
}
