use anyhow::{anyhow, Result};
use tracing::{debug, info};

use crate::config::Config;
use crate::symbols::*;
use crate::webhook::{create_webhook, CreateOptions, SelectionOptions, WebhookRegistrar};
use crate::WebhookCommands;

/// Handle webhook subcommands
pub async fn handle_webhook_command(
    command: WebhookCommands,
    config: &Config,
    registrar: &dyn WebhookRegistrar,
) -> Result<()> {
    match command {
        WebhookCommands::Create {
            selection,
            url,
            events,
        } => {
            let options = build_create_options(selection.into(), url, events, config)?;
            handle_create_webhook(options, registrar).await
        }
    }
}

/// Merge command line values with config defaults.
///
/// The selection is validated first so a bad flag combination is reported
/// before any missing-URL error.
pub fn build_create_options(
    selection: SelectionOptions,
    url: Option<String>,
    events: Vec<String>,
    config: &Config,
) -> Result<CreateOptions> {
    selection.validate()?;

    let url = url
        .filter(|url| !url.is_empty())
        .or_else(|| config.get_webhook_url())
        .ok_or_else(|| {
            anyhow!("No webhook URL given. Use --url, WEBHOOKCTL_URL or [webhook] url in the config file")
        })?;

    let events = if events.is_empty() {
        config.get_webhook_events()
    } else {
        events
    };

    Ok(CreateOptions {
        selection,
        url,
        events,
    })
}

async fn handle_create_webhook(
    options: CreateOptions,
    registrar: &dyn WebhookRegistrar,
) -> Result<()> {
    debug!("Creating webhook with options: {:?}", options);

    let request = create_webhook(&options, registrar).await?;

    if request.events.is_empty() {
        info!("{} Subscribed to all events", SYMBOL_DOC_NOTE);
    } else {
        info!(
            "{} Subscribed to events: {}",
            SYMBOL_DOC_NOTE,
            request.events.join(", ")
        );
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::WebhookConfig;
    use crate::webhook::{RegistrationRequest, SelectionError, WebhookScope};
    use crate::SelectionArgs;
    use async_trait::async_trait;
    use std::sync::Mutex;

    #[derive(Default)]
    struct RecordingRegistrar {
        requests: Mutex<Vec<RegistrationRequest>>,
    }

    #[async_trait]
    impl WebhookRegistrar for RecordingRegistrar {
        fn name(&self) -> &str {
            "recording"
        }

        async fn register(&self, request: &RegistrationRequest) -> Result<()> {
            self.requests.lock().unwrap().push(request.clone());
            Ok(())
        }
    }

    fn config_with_webhook(url: &str, events: &[&str]) -> Config {
        Config {
            logging: None,
            webhook: Some(WebhookConfig {
                url: Some(url.to_string()),
                events: Some(events.iter().map(|e| e.to_string()).collect()),
            }),
        }
    }

    #[test]
    fn test_selection_args_conversion() {
        let args = SelectionArgs {
            cicd: false,
            env_name: Some("gau".to_string()),
            service_name: Some("foo".to_string()),
        };
        let options: SelectionOptions = args.into();
        assert_eq!(options, SelectionOptions::service("gau", "foo"));

        let options: SelectionOptions = SelectionArgs::default().into();
        assert_eq!(options, SelectionOptions::default());
    }

    #[test]
    fn test_build_create_options_prefers_cli_values() -> Result<()> {
        let config = config_with_webhook("https://config.example.com", &["from.config"]);
        let options = build_create_options(
            SelectionOptions::cicd(),
            Some("https://cli.example.com".to_string()),
            vec!["from.cli".to_string()],
            &config,
        )?;

        assert_eq!(options.url, "https://cli.example.com");
        assert_eq!(options.events, vec!["from.cli".to_string()]);
        Ok(())
    }

    #[test]
    fn test_build_create_options_falls_back_to_config() -> Result<()> {
        let config = config_with_webhook("https://config.example.com", &["from.config"]);
        let options =
            build_create_options(SelectionOptions::service("gau", "foo"), None, vec![], &config)?;

        assert_eq!(options.url, "https://config.example.com");
        assert_eq!(options.events, vec!["from.config".to_string()]);
        Ok(())
    }

    #[test]
    fn test_build_create_options_requires_url() {
        let err = build_create_options(SelectionOptions::cicd(), None, vec![], &Config::default())
            .unwrap_err();
        assert!(err.to_string().starts_with("No webhook URL given"));

        let err = build_create_options(
            SelectionOptions::cicd(),
            Some(String::new()),
            vec![],
            &Config::default(),
        )
        .unwrap_err();
        assert!(err.to_string().starts_with("No webhook URL given"));
    }

    /// Selection errors win over a missing URL
    #[test]
    fn test_build_create_options_reports_selection_first() {
        let err = build_create_options(
            SelectionOptions {
                cicd: true,
                env_name: "foo".to_string(),
                service_name: String::new(),
            },
            None,
            vec![],
            &Config::default(),
        )
        .unwrap_err();

        assert_eq!(
            err.downcast_ref::<SelectionError>(),
            Some(&SelectionError::ConflictingSelection)
        );
    }

    #[tokio::test]
    async fn test_handle_create_command() -> Result<()> {
        let registrar = RecordingRegistrar::default();
        let command = WebhookCommands::Create {
            selection: SelectionArgs {
                cicd: false,
                env_name: Some("gau".to_string()),
                service_name: Some("foo".to_string()),
            },
            url: Some("https://hooks.example.com".to_string()),
            events: vec![],
        };

        handle_webhook_command(command, &Config::default(), &registrar).await?;

        let requests = registrar.requests.lock().unwrap();
        assert_eq!(requests.len(), 1);
        assert_eq!(
            requests[0].scope,
            WebhookScope::Service {
                env_name: "gau".to_string(),
                service_name: "foo".to_string(),
            }
        );
        Ok(())
    }

    #[tokio::test]
    async fn test_handle_create_command_rejects_incomplete_selection() {
        let registrar = RecordingRegistrar::default();
        let command = WebhookCommands::Create {
            selection: SelectionArgs {
                cicd: false,
                env_name: None,
                service_name: Some("foo".to_string()),
            },
            url: Some("https://hooks.example.com".to_string()),
            events: vec![],
        };

        let err = handle_webhook_command(command, &Config::default(), &registrar)
            .await
            .unwrap_err();

        assert_eq!(
            err.to_string(),
            "One of 'cicd' or 'env-name/service-name' must be specified"
        );
        assert!(registrar.requests.lock().unwrap().is_empty());
    }
}
