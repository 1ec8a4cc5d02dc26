// Library interface for webhookctl
pub mod cli;
pub mod config;
pub mod symbols;
pub mod webhook;

// Re-export commonly used types
pub use crate::config::Config;
pub use crate::webhook::{SelectionError, SelectionOptions, WebhookScope};

// Re-export CLI types for testing
/// Target selection flags.
///
/// The flags are deliberately not tied together with clap groups or
/// conflicts; combinations are checked by [`SelectionOptions::validate`].
#[derive(clap::Parser, Clone, Debug, Default)]
pub struct SelectionArgs {
    /// Deliver CICD events
    #[arg(long)]
    pub cicd: bool,

    /// Environment of the target service
    #[arg(long)]
    pub env_name: Option<String>,

    /// Target service (requires --env-name)
    #[arg(long)]
    pub service_name: Option<String>,
}

impl From<SelectionArgs> for SelectionOptions {
    fn from(args: SelectionArgs) -> Self {
        SelectionOptions {
            cicd: args.cicd,
            env_name: args.env_name.unwrap_or_default(),
            service_name: args.service_name.unwrap_or_default(),
        }
    }
}

#[derive(clap::Parser, Debug)]
pub enum WebhookCommands {
    /// Register a webhook for CICD events or an environment service
    Create {
        /// Which events the webhook receives
        #[command(flatten)]
        selection: SelectionArgs,

        /// Endpoint receiving deliveries (overrides config file)
        #[arg(long, env = "WEBHOOKCTL_URL")]
        url: Option<String>,

        /// Event names to deliver (comma-separated, default: all)
        #[arg(long, value_delimiter = ',')]
        events: Vec<String>,
    },
}
