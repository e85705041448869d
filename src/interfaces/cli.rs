use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "lingo")]
#[command(about = "Translate text with a hosted language model.")]
#[command(version)]
pub struct Cli {
    /// Target language (defaults to `default_target` in the config)
    #[arg(short = 't', long = "to")]
    pub to: Option<String>,

    /// Source language, or "auto" to let the model infer it
    #[arg(short = 'f', long = "from", default_value = "auto")]
    pub from: String,

    /// Also detect and show the source language
    #[arg(short = 'd', long)]
    pub detect: bool,

    /// Only detect the language, don't translate
    #[arg(long, conflicts_with = "detect")]
    pub detect_only: bool,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,

    /// Save the translation to a file
    #[arg(short = 'o', long, conflicts_with = "detect_only")]
    pub output: Option<PathBuf>,

    /// Choose color theme
    #[arg(short = 'T', long)]
    pub theme: Option<String>,

    /// List the suggested target languages
    #[arg(long)]
    pub list_languages: bool,

    /// Generate config sample
    #[arg(long)]
    pub generate_config: bool,

    /// Show status
    #[arg(long)]
    pub status: bool,

    /// Text to translate (read from stdin when omitted)
    #[arg(num_args = 1..)]
    pub text: Vec<String>,
}
