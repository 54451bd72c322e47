//! kwnotify - Keyword notifications for chat messages
//!
//! Watches a message feed (Discord gateway or JSON lines on stdin) and
//! notifies when a configured keyword shows up.

mod config;
mod feed;
mod notify;

use anyhow::{bail, Context, Result};
use clap::{Args, Parser, Subcommand};
use colored::Colorize;
use dialoguer::Input;
use std::path::PathBuf;
use std::sync::Arc;
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing::warn;
use tracing_subscriber::EnvFilter;

use keyword_notifier::{
    Dispatcher, IncomingMessage, Keyword, KeywordMatcher, KeywordWatcher, MatchResult, Settings,
    SettingsField, SettingsService,
};
use keyword_notifier_integration_discord::{DiscordConfig, DiscordGateway, GatewayEventParser};

use config::FileSettingsStore;
use notify::NotifierKind;

#[derive(Parser)]
#[command(name = "kwnotify")]
#[command(about = "Get notified when keywords show up in chat", long_about = None)]
#[command(version)]
struct Cli {
    /// Settings file (defaults to the user config directory)
    #[arg(long, global = true, env = "KWNOTIFY_SETTINGS")]
    settings: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show or edit keyword and scope settings
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },

    /// Evaluate a single message against the current settings
    Check {
        /// Message content
        content: String,
        /// Server (guild) ID the message was posted in
        #[arg(short, long)]
        guild: Option<String>,
        /// Channel ID the message was posted in
        #[arg(short, long)]
        channel: Option<String>,
        /// Print the result as JSON
        #[arg(long)]
        json: bool,
    },

    /// Read JSON messages from stdin, one per line, and notify on matches
    Watch {
        #[command(flatten)]
        notify: NotifyArgs,
        /// Evaluate messages written by bots
        #[arg(long)]
        bots: bool,
    },

    /// Connect to the Discord gateway and notify on matches until Ctrl-C
    Run {
        /// Discord bot token
        #[arg(long, env = "DISCORD_TOKEN", hide_env_values = true)]
        token: Option<String>,
        #[command(flatten)]
        notify: NotifyArgs,
        /// Evaluate messages written by bots
        #[arg(long)]
        bots: bool,
        /// Ignore direct messages
        #[arg(long)]
        no_dms: bool,
    },
}

#[derive(Subcommand)]
enum ConfigAction {
    /// Show current settings
    Show,
    /// Set one field (keywords, servers, channels)
    Set {
        field: SettingsField,
        /// Comma-separated value; pass "" to clear
        value: String,
    },
    /// Edit all fields interactively, saving after each one
    Edit,
    /// Restore the default settings
    Reset,
    /// Print the settings file path
    Path,
}

#[derive(Args)]
struct NotifyArgs {
    /// How to present notifications
    #[arg(long, value_enum, default_value = "terminal")]
    notifier: NotifierKind,
    /// Don't play a sound
    #[arg(long)]
    no_sound: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    let cli = Cli::parse();

    init_tracing(default_log_level(&cli.command));

    let store = Arc::new(FileSettingsStore::open(cli.settings)?);

    match cli.command {
        Commands::Config { action } => cmd_config(store, action),
        Commands::Check { content, guild, channel, json } => {
            cmd_check(store, content, guild, channel, json)
        }
        Commands::Watch { notify, bots } => cmd_watch(store, notify, bots).await,
        Commands::Run { token, notify, bots, no_dms } => {
            cmd_run(store, token, notify, bots, no_dms).await
        }
    }
}

/// Long-running feeds log at info; one-shot commands keep stderr quiet
fn default_log_level(command: &Commands) -> &'static str {
    match command {
        Commands::Watch { .. } | Commands::Run { .. } => "info",
        Commands::Config { .. } | Commands::Check { .. } => "warn",
    }
}

fn init_tracing(default_level: &str) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn load_settings(store: Arc<FileSettingsStore>) -> Result<Arc<SettingsService>> {
    let service = SettingsService::load(store).context("Failed to load settings")?;
    Ok(Arc::new(service))
}

// ============================================
// Command Implementations
// ============================================

fn cmd_config(store: Arc<FileSettingsStore>, action: ConfigAction) -> Result<()> {
    let path = store.path().to_path_buf();
    let service = load_settings(store)?;

    match action {
        ConfigAction::Show => {
            print_settings(&service);
            println!("  Path: {:?}", path);
        }

        ConfigAction::Set { field, value } => {
            service.set(field, value)?;
            println!("{} {} saved", "✓".green(), field.label());
            print_warnings(&service);
        }

        ConfigAction::Edit => {
            println!("{}", "Keyword Notifier Settings".bold());
            println!("{}", "Configure which keywords to track and where to listen for them.".dimmed());

            for field in SettingsField::ALL {
                println!("\n{}", field.help().dimmed());
                let current = service.snapshot().get(field).to_string();
                let value: String = Input::new()
                    .with_prompt(format!("{} ({})", field.label(), field.placeholder()))
                    .with_initial_text(current)
                    .allow_empty(true)
                    .interact_text()
                    .context("Failed to read input")?;

                service.set(field, value)?;
                println!("{} {} saved", "✓".green(), field.label());
            }

            println!();
            print_settings(&service);
        }

        ConfigAction::Reset => {
            service.reset()?;
            println!("{} Settings restored to defaults", "✓".green());
            print_settings(&service);
        }

        ConfigAction::Path => {
            println!("{}", path.display());
        }
    }

    Ok(())
}

fn print_settings(service: &SettingsService) {
    let settings = service.snapshot();

    println!("{}", "Settings:".bold());
    for field in SettingsField::ALL {
        println!("  {}: {}", field.label(), format!("{:?}", settings.get(field)).cyan());
    }

    println!("\n{}", "Effective:".bold());
    println!("  Keywords: {}", effective_keywords(&settings));
    println!("  Servers: {}", describe_scope(settings.server_filter().ids()));
    println!("  Channels: {}", describe_scope(settings.channel_filter().ids()));

    print_warnings(service);
}

fn effective_keywords(settings: &Settings) -> String {
    let list = settings.keyword_list();
    let keywords: Vec<&str> = list.iter().map(Keyword::as_str).collect();
    keywords.join(", ")
}

fn describe_scope(ids: &[String]) -> String {
    if ids.is_empty() {
        "all".green().to_string()
    } else {
        ids.join(", ")
    }
}

fn print_warnings(service: &SettingsService) {
    for warning in service.warnings() {
        println!("{} {}", "!".yellow().bold(), warning.yellow());
    }
}

fn cmd_check(
    store: Arc<FileSettingsStore>,
    content: String,
    guild: Option<String>,
    channel: Option<String>,
    json: bool,
) -> Result<()> {
    let service = load_settings(store)?;
    let result = check_message(&service.snapshot(), content, guild, channel);
    println!("{}", format_check(&result, json)?);
    Ok(())
}

fn check_message(
    settings: &Settings,
    content: String,
    guild: Option<String>,
    channel: Option<String>,
) -> MatchResult {
    let message = IncomingMessage {
        content: Some(content),
        guild_id: guild,
        channel_id: channel,
        ..IncomingMessage::default()
    };
    KeywordMatcher::evaluate(settings, &message)
}

fn format_check(result: &MatchResult, json: bool) -> Result<String> {
    if json {
        return Ok(serde_json::to_string(result)?);
    }

    Ok(match result {
        MatchResult::Matched { keyword } => {
            format!("{} Keyword \"{}\" detected", "✓".green(), keyword.cyan())
        }
        MatchResult::NoMatch => "✗ No match".dimmed().to_string(),
    })
}

async fn cmd_watch(store: Arc<FileSettingsStore>, args: NotifyArgs, bots: bool) -> Result<()> {
    let service = load_settings(store)?;
    print_warnings(&service);

    let dispatcher = Arc::new(Dispatcher::new());
    let notifier = notify::build(args.notifier, !args.no_sound);
    let mut watcher = KeywordWatcher::start(dispatcher.clone(), service, notifier);

    let parser = GatewayEventParser::new(DiscordConfig::default().with_bots(bots));
    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    let mut line_no = 0usize;

    while let Some(line) = lines.next_line().await.context("Failed to read stdin")? {
        line_no += 1;
        if let Err(e) = feed::dispatch_line(&parser, &dispatcher, &line) {
            warn!(line = line_no, error = %e, "Skipping malformed line");
        }
    }

    watcher.stop();
    Ok(())
}

async fn cmd_run(
    store: Arc<FileSettingsStore>,
    token: Option<String>,
    args: NotifyArgs,
    bots: bool,
    no_dms: bool,
) -> Result<()> {
    let Some(token) = token.filter(|t| !t.trim().is_empty()) else {
        bail!("No Discord token. Pass --token or set DISCORD_TOKEN.");
    };

    let service = load_settings(store)?;
    print_warnings(&service);

    let config = DiscordConfig::new(token).with_bots(bots).with_dms(!no_dms);
    let gateway = DiscordGateway::new(config);
    let notifier = notify::build(args.notifier, !args.no_sound);
    let mut watcher = KeywordWatcher::start(gateway.dispatcher(), service, notifier);

    println!("{} Listening for keywords (Ctrl-C to stop)", "●".green());

    gateway
        .run(async {
            if let Err(e) = tokio::signal::ctrl_c().await {
                warn!(error = %e, "Failed to listen for Ctrl-C");
            }
        })
        .await?;

    watcher.stop();
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_check_reports_first_keyword_in_list_order() {
        let settings = Settings::new("DD,Dragon", "", "");
        let result = check_message(&settings, "dragon and dd".into(), None, None);

        assert_eq!(
            format_check(&result, true).unwrap(),
            r#"{"matched":true,"keyword":"DD"}"#
        );
    }

    #[test]
    fn test_check_respects_scope() {
        let settings = Settings::new("dragon", "100", "");
        let outside = check_message(&settings, "dragon".into(), Some("200".into()), None);
        let inside = check_message(&settings, "dragon".into(), Some("100".into()), None);

        assert_eq!(format_check(&outside, true).unwrap(), r#"{"matched":false}"#);
        assert_eq!(inside, MatchResult::matched("dragon"));
        assert!(format_check(&outside, false).unwrap().contains("No match"));
        assert!(format_check(&inside, false).unwrap().contains("dragon"));
    }

    #[test]
    fn test_effective_keywords_are_trimmed_in_order() {
        let settings = Settings::new(" XZ ,, DD,Dragon ", "", "");
        assert_eq!(effective_keywords(&settings), "XZ, DD, Dragon");
        assert_eq!(effective_keywords(&Settings::new(" , ", "", "")), "");
    }

    #[test]
    fn test_describe_scope() {
        assert!(describe_scope(&[]).contains("all"));
        assert_eq!(describe_scope(&["1".to_string(), "2".to_string()]), "1, 2");
    }

    #[test]
    fn test_default_log_level() {
        let cli = Cli::parse_from(["kwnotify", "config", "show"]);
        assert_eq!(default_log_level(&cli.command), "warn");

        let cli = Cli::parse_from(["kwnotify", "check", "hello"]);
        assert_eq!(default_log_level(&cli.command), "warn");

        let cli = Cli::parse_from(["kwnotify", "watch", "--notifier", "terminal"]);
        assert_eq!(default_log_level(&cli.command), "info");
    }

    #[test]
    fn test_config_set_parses_field_name() {
        let cli = Cli::parse_from(["kwnotify", "config", "set", "servers", "1,2"]);
        match cli.command {
            Commands::Config {
                action: ConfigAction::Set { field, value },
            } => {
                assert_eq!(field, SettingsField::Servers);
                assert_eq!(value, "1,2");
            }
            _ => panic!("Expected config set"),
        }
    }
}
