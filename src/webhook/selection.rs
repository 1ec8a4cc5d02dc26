use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors raised when the webhook target flags do not describe exactly one scope
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SelectionError {
    /// Both the CICD scope and an environment/service target were given
    #[error("Only one of 'cicd' or 'env-name/service-name' can be specified")]
    ConflictingSelection,

    /// Neither scope was given, or the environment/service pair is incomplete
    #[error("One of 'cicd' or 'env-name/service-name' must be specified")]
    IncompleteSelection,
}

impl SelectionError {
    /// The user-facing message, identical to the `Display` output
    pub fn message(&self) -> &'static str {
        match self {
            SelectionError::ConflictingSelection => {
                "Only one of 'cicd' or 'env-name/service-name' can be specified"
            }
            SelectionError::IncompleteSelection => {
                "One of 'cicd' or 'env-name/service-name' must be specified"
            }
        }
    }
}

/// Target selection flags as supplied on the command line.
///
/// Empty strings mean the flag was not supplied.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SelectionOptions {
    /// Deliver CICD events instead of targeting a single service
    pub cicd: bool,
    /// Environment that owns the target service
    pub env_name: String,
    /// Service within `env_name`
    pub service_name: String,
}

/// Where a webhook delivers from, once the selection has been validated
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum WebhookScope {
    /// All CICD events
    Cicd,
    /// Events of one service in one environment
    Service {
        env_name: String,
        service_name: String,
    },
}

impl std::fmt::Display for WebhookScope {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            WebhookScope::Cicd => write!(f, "cicd"),
            WebhookScope::Service {
                env_name,
                service_name,
            } => write!(f, "{env_name}/{service_name}"),
        }
    }
}

impl SelectionOptions {
    /// Options selecting the CICD scope
    pub fn cicd() -> Self {
        Self {
            cicd: true,
            ..Self::default()
        }
    }

    /// Options selecting one service in one environment
    pub fn service(env_name: impl Into<String>, service_name: impl Into<String>) -> Self {
        Self {
            cicd: false,
            env_name: env_name.into(),
            service_name: service_name.into(),
        }
    }

    /// Check that exactly one selection mode is active.
    ///
    /// The CICD flag conflicts with either name being set, and without it
    /// both the environment and the service name are required.
    pub fn validate(&self) -> Result<(), SelectionError> {
        let has_env = !self.env_name.is_empty();
        let has_service = !self.service_name.is_empty();

        if self.cicd && (has_service || has_env) {
            return Err(SelectionError::ConflictingSelection);
        }
        if !self.cicd && !(has_service && has_env) {
            return Err(SelectionError::IncompleteSelection);
        }
        Ok(())
    }

    /// Validate and resolve the selected scope
    pub fn scope(&self) -> Result<WebhookScope, SelectionError> {
        self.validate()?;
        if self.cicd {
            Ok(WebhookScope::Cicd)
        } else {
            Ok(WebhookScope::Service {
                env_name: self.env_name.clone(),
                service_name: self.service_name.clone(),
            })
        }
    }
}
