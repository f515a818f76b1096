// interactive explorer - pick a card, flip between its tabs, close it, repeat

use anyhow::{Context, Result};
use console::Term;
use dialoguer::{theme::ColorfulTheme, Select};
use std::io::Write;

use crate::card::Tab;
use crate::code::CodeRenderer;
use crate::config::RenderOptions;
use crate::page::Page;

/// what the user asked for while a card's dialog is open
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DialogChoice {
    Show(Tab),
    Close,
}

/// source of user decisions for the explorer loop
pub trait Prompter {
    /// index of the card to open, or None to quit
    fn pick_card(&mut self, labels: &[String]) -> Result<Option<usize>>;

    /// next action inside an open dialog; `current` is the selected tab
    fn pick_tab(&mut self, name: &str, current: Tab) -> Result<DialogChoice>;
}

/// prompts on the terminal with dialoguer
pub struct TerminalPrompter {
    theme: ColorfulTheme,
    term: Term,
}

impl TerminalPrompter {
    pub fn new() -> Self {
        Self {
            theme: ColorfulTheme::default(),
            term: Term::stderr(),
        }
    }
}

impl Default for TerminalPrompter {
    fn default() -> Self {
        Self::new()
    }
}

impl Prompter for TerminalPrompter {
    fn pick_card(&mut self, labels: &[String]) -> Result<Option<usize>> {
        let mut items: Vec<&str> = labels.iter().map(String::as_str).collect();
        items.push("quit");

        let selection = Select::with_theme(&self.theme)
            .with_prompt("which pattern would you like to see? (esc to quit)")
            .default(0)
            .items(&items[..])
            .interact_on_opt(&self.term)
            .context("failed to read pattern selection")?;

        Ok(selection.filter(|&i| i < labels.len()))
    }

    fn pick_tab(&mut self, name: &str, current: Tab) -> Result<DialogChoice> {
        let mut items: Vec<&str> = Tab::ALL.iter().map(|tab| tab.label()).collect();
        items.push("Close");

        let selection = Select::with_theme(&self.theme)
            .with_prompt(format!("{name} (esc to close)"))
            .default(current.index())
            .items(&items[..])
            .interact_on_opt(&self.term)
            .context("failed to read tab selection")?;

        Ok(match selection {
            Some(i) if i < Tab::ALL.len() => DialogChoice::Show(Tab::ALL[i]),
            _ => DialogChoice::Close,
        })
    }
}

/// drive the page until the user quits, writing every view to `out`
pub fn run<P, W>(
    page: &mut Page,
    renderer: &CodeRenderer,
    options: &RenderOptions,
    prompter: &mut P,
    out: &mut W,
) -> Result<()>
where
    P: Prompter,
    W: Write,
{
    writeln!(out, "{}", page.render(options))?;
    let labels = page.labels();

    while let Some(index) = prompter.pick_card(&labels)? {
        let Some(entry) = page.entry(index) else {
            tracing::warn!(index, "prompter picked a card that isn't on the page");
            continue;
        };

        page.open(index);
        tracing::debug!(pattern = entry.name, "opened card");

        loop {
            if let Some(detail) = page.render_open(index, renderer, options) {
                writeln!(out, "\n{detail}\n")?;
            }

            let current = page.card(index).map(|c| c.selected()).unwrap_or_default();
            match prompter.pick_tab(entry.name, current)? {
                DialogChoice::Show(tab) => {
                    tracing::debug!(pattern = entry.name, tab = tab.label(), "switched tab");
                    page.select(index, tab);
                }
                DialogChoice::Close => {
                    page.close(index);
                    tracing::debug!(pattern = entry.name, "closed card");
                    break;
                }
            }
        }
    }

    out.flush()?;
    Ok(())
}
