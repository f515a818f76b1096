// pattern-explorer-core/src/lib.rs

// declare modules
pub mod card;
pub mod catalogue;
pub mod code;
pub mod config;
pub mod explorer;
pub mod logging;
pub mod page;

// re-export key structs/functions for the cli crate
pub use anyhow::{Context, Result}; // re-export for convenience
pub use clap::Parser; // re-export Parser for the cli crate
pub use console::style; // re-export for error printing in the binary

pub use crate::card::{render_detail, render_summary, CardState, Tab};
pub use crate::catalogue::{catalogue, find, resolve, slug, validate, Category, PatternEntry, PatternExample};
pub use crate::code::{CodeRenderer, DEFAULT_LANGUAGE, DEFAULT_THEME};
pub use crate::config::{terminal_width, Config, RenderOptions};
pub use crate::explorer::{DialogChoice, Prompter, TerminalPrompter};
pub use crate::logging::init_logging;
pub use crate::page::Page;

use clap::{Subcommand, ValueEnum};
use console::Term;
use dotenv::dotenv;
use indicatif::{ProgressBar, ProgressStyle};
use std::io::{self, Write};
use std::path::PathBuf;
use std::time::Duration;

// argument parsing struct - lives in core so the cli crate stays a thin wrapper
#[derive(Parser, Debug, Clone)]
#[command(name = "pattern-explorer")]
#[command(version)]
#[command(about = "browse design patterns with before and after code examples", long_about = None)]
pub struct CliArgs {
    #[command(subcommand)]
    pub command: Option<Command>,

    /// path to a toml config file (defaults to $PATTERN_EXPLORER_CONFIG)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// highlight theme for code blocks
    #[arg(long, global = true)]
    pub theme: Option<String>,

    /// language tag used to highlight the examples
    #[arg(long, global = true)]
    pub language: Option<String>,

    /// number the lines of code blocks
    #[arg(long, global = true)]
    pub line_numbers: bool,

    /// disable coloured output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// more log output on stderr (repeat for more)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// pick cards interactively (the default)
    Browse,
    /// print every category and its cards
    List,
    /// print one card's detail view
    Show {
        /// pattern name or slug, e.g. open-closed-principle
        pattern: String,
        /// which example to show
        #[arg(short, long, value_enum, default_value_t = TabArg::Before)]
        tab: TabArg,
    },
    /// print the catalogue as json
    Export,
    /// list the available highlight themes
    Themes,
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum TabArg {
    Before,
    After,
}

impl From<TabArg> for Tab {
    fn from(tab: TabArg) -> Self {
        match tab {
            TabArg::Before => Tab::Before,
            TabArg::After => Tab::After,
        }
    }
}

impl CliArgs {
    /// merge config file, environment and flags into render options
    pub fn render_options(&self, stdout_is_term: bool) -> Result<RenderOptions> {
        let config = Config::load(self.config.as_deref())?;
        let width = if stdout_is_term { terminal_width() } else { 80 };
        Ok(self.merge_flags(config, stdout_is_term, width))
    }

    /// command-line flags take precedence over whatever the config and environment said
    pub fn merge_flags(&self, mut config: Config, stdout_is_term: bool, width: usize) -> RenderOptions {
        if let Some(theme) = &self.theme {
            config.theme = theme.clone();
        }
        if let Some(language) = &self.language {
            config.language = language.clone();
        }
        if self.line_numbers {
            config.line_numbers = true;
        }

        let color = !self.no_color && config.color.unwrap_or(stdout_is_term);
        RenderOptions::resolve(&config, color, width)
    }
}

// the whole program: set up, then dispatch on the subcommand
pub fn execute_explorer_flow(args: CliArgs) -> Result<()> {
    dotenv().ok();
    init_logging(args.verbose);

    let categories = catalogue();
    validate(categories).context("built-in catalogue is invalid")?;

    let stdout = Term::stdout();
    let options = args.render_options(stdout.is_term())?;
    tracing::debug!(?options, "resolved render options");

    let command = args.command.unwrap_or(Command::Browse);
    let mut out = io::stdout().lock();

    match command {
        Command::Browse if stdout.is_term() => {
            let renderer = load_renderer(&options, true);
            let mut page = Page::new(categories);
            let mut prompter = TerminalPrompter::new();
            explorer::run(&mut page, &renderer, &options, &mut prompter, &mut out)?;
        }
        command => write_command(&command, categories, &options, &mut out)?,
    }

    out.flush()?;
    Ok(())
}

/// run a non-interactive command, writing its output to `out`
pub fn write_command<W: Write>(
    command: &Command,
    categories: &'static [Category],
    options: &RenderOptions,
    out: &mut W,
) -> Result<()> {
    match command {
        Command::Browse | Command::List => {
            tracing::info!("printing the page");
            write!(out, "{}", Page::new(categories).render(options))?;
        }
        Command::Show { pattern, tab } => {
            let (category, entry) = resolve(categories, pattern)?;
            let mut page = Page::new(categories);
            let index = page
                .index_of(category, entry)
                .context("pattern is missing from the page")?;
            page.open(index);
            page.select(index, (*tab).into());

            let renderer = load_renderer(options, false);
            if let Some(detail) = page.render_open(index, &renderer, options) {
                writeln!(out, "{detail}")?;
            }
        }
        Command::Export => {
            let json = serde_json::to_string_pretty(categories).context("failed to serialise catalogue")?;
            writeln!(out, "{json}")?;
        }
        Command::Themes => {
            for theme in CodeRenderer::available_themes() {
                let marker = if theme == options.theme { "*" } else { " " };
                writeln!(out, "{marker} {theme}")?;
            }
        }
    }
    Ok(())
}

// syntax definitions take a moment to load, so show a spinner when someone is watching
fn load_renderer(options: &RenderOptions, interactive: bool) -> CodeRenderer {
    if !interactive {
        return CodeRenderer::new(options);
    }

    let spinner = ProgressBar::new_spinner();
    if let Ok(spinner_style) = ProgressStyle::default_spinner()
        .tick_strings(&["📖 ⠋", "📖 ⠙", "📖 ⠹", "📖 ⠸", "📖 ⠼", "📖 ⠴", "📖 ⠦", "📖 ⠧", "📖 ⠇", "📖 ⠏"])
        .template("{spinner} loading syntax definitions...")
    {
        spinner.set_style(spinner_style);
    }
    spinner.enable_steady_tick(Duration::from_millis(120));

    let renderer = CodeRenderer::new(options);
    spinner.finish_and_clear();
    renderer
}
