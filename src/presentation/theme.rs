use colored::Colorize;

pub struct Theme {
    pub title: fn(&str) -> String,
    pub label: fn(&str) -> String,
    pub line: fn(&str) -> String,
    pub text: fn(&str) -> String,
    pub notice: fn(&str) -> String,
    pub error: fn(&str) -> String,
}

impl Theme {
    /// Look a theme up by name, ignoring case. Empty means the default.
    pub fn named(name: &str) -> Option<Self> {
        match name.trim().to_ascii_lowercase().as_str() {
            "temp" | "" => Some(Self::temp()),
            "wudao" => Some(Self::wudao()),
            "canvas" => Some(Self::canvas()),
            _ => None,
        }
    }

    /// Like `named`, but an unknown name warns and uses the default theme.
    pub fn from_name(name: &str) -> Self {
        Self::named(name).unwrap_or_else(|| {
            eprintln!("{}", format!("✘ Unknown theme: {}, using temp", name).red());
            Self::temp()
        })
    }

    fn temp() -> Self {
        Self {
            title: |s| s.bright_magenta().italic().bold().to_string(),
            label: |s| s.cyan().to_string(),
            line: |s| s.bright_black().dimmed().to_string(),
            text: |s| s.white().to_string(),
            notice: |s| s.bright_white().dimmed().italic().to_string(),
            error: |s| s.red().bold().to_string(),
        }
    }

    fn wudao() -> Self {
        Self {
            title: |s| s.red().italic().bold().to_string(),
            label: |s| s.green().italic().to_string(),
            line: |s| s.bright_black().dimmed().to_string(),
            text: |s| s.bright_white().to_string(),
            notice: |s| s.bright_yellow().dimmed().italic().to_string(),
            error: |s| s.red().bold().to_string(),
        }
    }

    fn canvas() -> Self {
        Self {
            title: |s| s.blue().bold().underline().to_string(),
            label: |s| s.magenta().to_string(),
            line: |s| s.bright_black().dimmed().to_string(),
            text: |s| s.black().to_string(),
            notice: |s| s.bright_black().italic().to_string(),
            error: |s| s.red().bold().to_string(),
        }
    }
}
