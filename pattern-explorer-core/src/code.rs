// code renderer - hands example code to syntect and frames the result as a block

use syntect::easy::HighlightLines;
use syntect::highlighting::{Style, Theme, ThemeSet};
use syntect::parsing::{SyntaxReference, SyntaxSet};
use syntect::util::as_24_bit_terminal_escaped;

use crate::config::RenderOptions;

/// the examples are python unless told otherwise
pub const DEFAULT_LANGUAGE: &str = "python";

/// closest bundled theme to the dark "tomorrow" look
pub const DEFAULT_THEME: &str = "base16-eighties.dark";

const RESET: &str = "\x1b[0m";

/// renders code strings as read-only, optionally highlighted blocks
pub struct CodeRenderer {
    syntaxes: SyntaxSet,
    theme: Theme,
    language: String,
    line_numbers: bool,
    color: bool,
}

impl CodeRenderer {
    /// load syntax definitions and the configured theme
    pub fn new(options: &RenderOptions) -> Self {
        let syntaxes = SyntaxSet::load_defaults_newlines();
        let mut themes = ThemeSet::load_defaults();

        let theme = match themes.themes.remove(&options.theme) {
            Some(theme) => theme,
            None => {
                tracing::warn!(
                    theme = %options.theme,
                    fallback = DEFAULT_THEME,
                    "unknown highlight theme, using the default"
                );
                themes.themes.remove(DEFAULT_THEME).unwrap_or_default()
            }
        };

        Self {
            syntaxes,
            theme,
            language: options.language.clone(),
            line_numbers: options.line_numbers,
            color: options.color,
        }
    }

    /// names of the themes that can be configured
    pub fn available_themes() -> Vec<String> {
        ThemeSet::load_defaults().themes.into_keys().collect()
    }

    /// render `code` as a block; the code itself is never altered
    pub fn render(&self, code: &str, language: Option<&str>) -> String {
        if code.is_empty() {
            return String::new();
        }

        let language = language.unwrap_or(&self.language);
        let lines: Vec<&str> = code.split('\n').collect();

        let body: Vec<String> = if self.color {
            self.highlight(&lines, self.syntax_for(language))
        } else {
            lines.iter().map(|line| line.to_string()).collect()
        };

        if !self.line_numbers {
            return body.join("\n");
        }

        let digits = lines.len().to_string().len();
        body.iter()
            .enumerate()
            .map(|(i, line)| format!("{:>digits$} │ {}", i + 1, line))
            .collect::<Vec<_>>()
            .join("\n")
    }

    fn syntax_for(&self, language: &str) -> &SyntaxReference {
        self.syntaxes
            .find_syntax_by_token(language)
            .unwrap_or_else(|| {
                tracing::debug!(language, "no syntax for language tag, rendering as plain text");
                self.syntaxes.find_syntax_plain_text()
            })
    }

    fn highlight(&self, lines: &[&str], syntax: &SyntaxReference) -> Vec<String> {
        let mut highlighter = HighlightLines::new(syntax, &self.theme);

        lines
            .iter()
            .map(|line| {
                // the newlines syntax set expects each line to keep its terminator
                let with_newline = format!("{line}\n");
                match highlighter.highlight_line(&with_newline, &self.syntaxes) {
                    Ok(ranges) => {
                        let ranges: Vec<(Style, &str)> = ranges;
                        let escaped = as_24_bit_terminal_escaped(&ranges[..], true);
                        format!("{}{}", escaped.trim_end_matches('\n'), RESET)
                    }
                    Err(e) => {
                        tracing::debug!(error = %e, "highlighting failed, line left unstyled");
                        line.to_string()
                    }
                }
            })
            .collect()
    }
}
