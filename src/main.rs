// Main entry point
use clap::Parser;
use colored::Colorize;
use lingo::application::translate::translate_text;
use lingo::domain::model::{DetectionRequest, TranslationOutcome, TranslationRequest};
use lingo::infrastructure::config::{self, load_config, Config};
use lingo::interfaces::cli::Cli;
use lingo::presentation::render::{format_failure, format_languages, format_outcome};
use lingo::presentation::theme::Theme;
use lingo::state::AppState;
use tokio::io::AsyncReadExt;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let config = load_config()?;

    // Initialize logging
    if config.logging.enable {
        init_logging(&config.logging)?;
    }

    let theme_name = cli.theme.as_deref().unwrap_or(config.theme.as_str());
    let theme = Theme::from_name(theme_name);

    if cli.generate_config {
        config::generate_config_sample()?;
        return Ok(());
    }
    if cli.list_languages {
        print!("{}", format_languages(&theme));
        return Ok(());
    }
    if cli.status {
        print_status(&config);
        return Ok(());
    }

    let text = if cli.text.is_empty() {
        read_stdin().await?
    } else {
        cli.text.join(" ")
    };
    if text.trim().is_empty() {
        eprintln!("{}", "Please provide text to translate".red());
        std::process::exit(1);
    }

    let state = match AppState::new(config.clone()) {
        Ok(state) => state,
        Err(e) => {
            eprintln!("{}", (theme.error)(&e.to_string()));
            eprintln!(
                "Set {} (or LINGO_API_KEY), or add api_key to the config file.",
                config.provider.api_key_env()
            );
            std::process::exit(1);
        }
    };

    if cli.detect_only {
        let request = DetectionRequest::new(text);
        let detection = tokio::select! {
            detection = state.service.detect_language_or_unknown(&request) => detection,
            _ = tokio::signal::ctrl_c() => {
                eprintln!("\nInterrupted");
                return Ok(());
            }
        };
        if cli.json {
            println!("{}", serde_json::to_string_pretty(&detection)?);
        } else {
            println!("{}", (theme.title)(&detection.language_name));
        }
        return Ok(());
    }

    let target = cli.to.clone().unwrap_or_else(|| config.default_target.clone());
    let request = TranslationRequest::new(text, target).from_language(cli.from.clone());

    // Stop waiting on the remote call if the user interrupts
    let outcome = tokio::select! {
        result = translate_text(&state, request, cli.detect) => result,
        _ = tokio::signal::ctrl_c() => {
            eprintln!("\nInterrupted");
            return Ok(());
        }
    };

    let outcome = match outcome {
        Ok(outcome) => outcome,
        Err(e) => {
            tracing::error!(kind = %e.kind, "Translation failed: {}", e.message);
            eprintln!("{}", format_failure(&e, &theme));
            std::process::exit(1);
        }
    };

    print_outcome(&cli, &outcome, &theme, config.enable_emoji)?;

    if let Some(path) = &cli.output {
        tokio::fs::write(path, format!("{}\n", outcome.translated_text)).await?;
        eprintln!("Saved translation to {}", path.display());
    }

    Ok(())
}

fn print_outcome(
    cli: &Cli,
    outcome: &TranslationOutcome,
    theme: &Theme,
    enable_emoji: bool,
) -> anyhow::Result<()> {
    if cli.json {
        println!("{}", serde_json::to_string_pretty(outcome)?);
    } else {
        print!("{}", format_outcome(outcome, theme, enable_emoji));
    }
    Ok(())
}

async fn read_stdin() -> anyhow::Result<String> {
    let mut buf = String::new();
    tokio::io::stdin().read_to_string(&mut buf).await?;
    Ok(buf)
}

/// Send tracing output to the configured log file, or stderr.
/// `RUST_LOG` overrides the configured level.
fn init_logging(logging: &config::Logging) -> anyhow::Result<()> {
    use tracing_subscriber::EnvFilter;

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(logging.filter_directive()));
    let builder = tracing_subscriber::fmt().with_env_filter(filter);

    match logging.path.as_deref().filter(|p| !p.is_empty()) {
        Some(path) => {
            let file = std::fs::OpenOptions::new()
                .create(true)
                .append(true)
                .open(path)?;
            builder
                .with_ansi(false)
                .with_writer(std::sync::Mutex::new(file))
                .init();
        }
        None => builder.with_writer(std::io::stderr).init(),
    }

    Ok(())
}

fn print_status(config: &Config) {
    println!("{}", "lingo Status".green().bold());
    println!("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━");

    println!(
        "Config: {}",
        config::get_config_path()
            .filter(|p| p.exists())
            .map(|p| p.display().to_string())
            .unwrap_or_else(|| "Not found (using defaults)".to_string())
    );
    println!("Provider: {:?}", config.provider);
    println!("Model: {}", config.model());
    println!("Endpoint: {}", config.base_url());
    println!("Timeout: {}s", config.timeout().as_secs());
    println!("Default target: {}", config.default_target);

    if config.has_api_key() {
        println!("API key: Configured");
    } else {
        println!("API key: Not configured ({})", config.provider.api_key_env());
    }
}
