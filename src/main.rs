use anyhow::{Context, Result};
use clap::{CommandFactory, Parser};
use clap_complete::{generate, Shell};
use clap_mangen::Man;
use std::io;
use std::path::PathBuf;
use tracing::info;

use webhookctl::cli::webhook::handle_webhook_command;
use webhookctl::config::{Config, DEFAULT_TIME_FORMAT};
use webhookctl::symbols::*;
use webhookctl::webhook::registration::StdoutRegistrar;
use webhookctl::WebhookCommands;

#[derive(Parser)]
#[command(name = "webhookctl")]
#[command(about = "A CLI utility to register webhooks for CICD events or environment services")]
#[command(version = env!("CARGO_PKG_VERSION"))]
struct Args {
    /// Path to config file
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Enable verbose logging (overrides config file)
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Generate shell completions for the specified shell
    #[arg(long, value_enum)]
    completions: Option<Shell>,

    /// Generate man page
    #[arg(long)]
    man: bool,

    /// Show detailed information about the tool
    #[arg(long)]
    info: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Parser)]
enum Commands {
    /// Manage webhook registrations
    Webhook {
        #[command(subcommand)]
        command: WebhookCommands,
    },
}

fn create_subscriber(
    verbose: bool,
    time_format: &str,
) -> Result<Box<dyn tracing::Subscriber + Send + Sync>> {
    let level = if verbose {
        tracing::Level::DEBUG
    } else {
        tracing::Level::INFO
    };

    let format_desc = match time::format_description::parse_owned::<1>(time_format) {
        Ok(format_desc) => format_desc,
        Err(_) => {
            eprintln!("Custom time format '{time_format}' not supported. Using default format.");
            time::format_description::parse_owned::<1>(DEFAULT_TIME_FORMAT)
                .context("Invalid default time format")?
        }
    };

    Ok(Box::new(
        tracing_subscriber::fmt()
            .with_max_level(level)
            .with_writer(io::stderr)
            .with_timer(tracing_subscriber::fmt::time::LocalTime::new(format_desc))
            .finish(),
    ))
}

fn print_info() {
    println!(
        "{} webhookctl v{}",
        SYMBOL_TOOL_CONFIG,
        env!("CARGO_PKG_VERSION")
    );
    println!("{} {}", SYMBOL_DOC_NOTE, env!("CARGO_PKG_DESCRIPTION"));
    println!("{} License: {}", SYMBOL_CONTENT_FILE, env!("CARGO_PKG_LICENSE"));
    println!();
    println!("{} Webhook scopes:", SYMBOL_SCOPE_GLOBAL);
    println!("  • --cicd                              CICD events");
    println!("  • --env-name <ENV> --service-name <SVC>  One service in one environment");
    println!();
    println!("{} Usage:", SYMBOL_ACTION_LAUNCH);
    println!("   webhookctl webhook create --cicd --url <URL>");
    println!("   webhookctl webhook create --env-name prod --service-name api --url <URL>");
    println!("   Use --help for detailed options");
    println!();
    println!("{} Shell Completions:", SYMBOL_TOOL_CONFIG);
    println!("   webhookctl --completions bash > /usr/local/etc/bash_completion.d/webhookctl");
    println!("   webhookctl --completions zsh > ~/.zfunc/_webhookctl");
    println!();
    println!("{} Man Page:", SYMBOL_DOC_BOOK);
    println!("   webhookctl --man > /usr/local/share/man/man1/webhookctl.1");
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    // Handle --completions flag early
    if let Some(shell) = args.completions {
        let mut app = Args::command();
        generate(shell, &mut app, "webhookctl", &mut io::stdout());
        return Ok(());
    }

    // Handle --man flag early
    if args.man {
        let app = Args::command();
        let man = Man::new(app);
        man.render(&mut io::stdout())?;
        return Ok(());
    }

    if args.info {
        print_info();
        return Ok(());
    }

    let config = if let Some(config_path) = &args.config {
        Config::load_from_file(config_path).await?
    } else {
        Config::load().await?
    };

    let verbose = args.verbose || config.is_verbose_default();
    let subscriber = create_subscriber(verbose, &config.get_time_format())?;
    tracing::subscriber::set_global_default(subscriber)
        .context("Failed to set default subscriber")?;

    if let Some(config_path) = &args.config {
        info!(
            "{} Using custom config file: {}",
            SYMBOL_INDICATOR_INFO,
            config_path.display()
        );
    }

    match args.command {
        Some(Commands::Webhook { command }) => {
            handle_webhook_command(command, &config, &StdoutRegistrar::new()).await
        }
        None => {
            Args::command().print_help()?;
            Ok(())
        }
    }
}
