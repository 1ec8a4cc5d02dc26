//! Webhook selection and registration
pub mod registration;
pub mod selection;

pub use registration::{create_webhook, CreateOptions, RegistrationRequest, WebhookRegistrar};
pub use selection::{SelectionError, SelectionOptions, WebhookScope};
