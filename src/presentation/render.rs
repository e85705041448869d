use crate::domain::model::{TranslationOutcome, AUTO_LANGUAGE, SUPPORTED_LANGUAGES};
use crate::presentation::theme::Theme;
use std::fmt::Write;

/// Format a translation for the terminal.
pub fn format_outcome(outcome: &TranslationOutcome, theme: &Theme, enable_emoji: bool) -> String {
    let mut output = String::new();

    let source = if outcome.source_language.eq_ignore_ascii_case(AUTO_LANGUAGE) {
        "auto"
    } else {
        outcome.source_language.as_str()
    };
    let arrow = if enable_emoji { "🌐" } else { "->" };
    writeln!(
        output,
        "{} {} {}",
        (theme.label)(source),
        arrow,
        (theme.title)(&outcome.target_language)
    )
    .ok();

    if let Some(detected) = &outcome.detected_language {
        writeln!(output, "  {} {}", (theme.label)("Detected:"), (theme.notice)(detected)).ok();
    }

    writeln!(output, "  {}", (theme.line)(&"⸺".repeat(40))).ok();
    for line in outcome.translated_text.lines() {
        writeln!(output, "  {}", (theme.text)(line)).ok();
    }
    writeln!(output).ok();
    output
}

/// Format the language list, one per line.
pub fn format_languages(theme: &Theme) -> String {
    let mut output = String::new();
    for (i, lang) in SUPPORTED_LANGUAGES.iter().enumerate() {
        writeln!(output, "  {}. {}", i + 1, (theme.text)(lang)).ok();
    }
    writeln!(
        output,
        "  {}",
        (theme.notice)("Any other language name is accepted as well.")
    )
    .ok();
    output
}

/// The generic failure notice shown for any failed translation.
pub fn format_failure(error: &dyn std::fmt::Display, theme: &Theme) -> String {
    format!(
        "{} {}",
        (theme.error)("Translation failed."),
        (theme.notice)(&error.to_string())
    )
}
