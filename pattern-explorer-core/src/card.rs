// card renderer - the summary shown on the page and the before/after detail view

use console::{style, StyledObject};

use crate::catalogue::PatternEntry;
use crate::code::CodeRenderer;
use crate::config::RenderOptions;

/// the two views of a card's detail dialog
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Tab {
    #[default]
    Before,
    After,
}

impl Tab {
    pub const ALL: [Tab; 2] = [Tab::Before, Tab::After];

    pub fn label(self) -> &'static str {
        match self {
            Tab::Before => "Before Pattern",
            Tab::After => "After Pattern",
        }
    }

    /// position in the tab bar, also used as the prompt default
    pub fn index(self) -> usize {
        match self {
            Tab::Before => 0,
            Tab::After => 1,
        }
    }

    /// the example code this tab shows
    pub fn code(self, entry: &PatternEntry) -> &'static str {
        match self {
            Tab::Before => entry.example.before,
            Tab::After => entry.example.after,
        }
    }
}

/// per-card ui state: whether the detail dialog is open and which tab it shows
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CardState {
    open: bool,
    tab: Tab,
}

impl CardState {
    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn selected(&self) -> Tab {
        self.tab
    }

    /// open the dialog; it always starts on the before tab
    pub fn open(&mut self) {
        self.open = true;
        self.tab = Tab::Before;
    }

    pub fn close(&mut self) {
        *self = Self::default();
    }

    /// switch tabs; ignored while the dialog is closed
    pub fn select(&mut self, tab: Tab) {
        if self.open {
            self.tab = tab;
        }
    }
}

fn paint<D>(value: D, options: &RenderOptions) -> StyledObject<D> {
    style(value).force_styling(options.color)
}

/// name, description and the "view example" affordance
pub fn render_summary(entry: &PatternEntry, options: &RenderOptions) -> String {
    [
        format!("{} {}", paint("</>", options).magenta(), paint(entry.name, options).bold()),
        format!("    {}", paint(entry.description, options).dim()),
        format!("    {}", paint("[ View Example ]", options).cyan()),
    ]
    .join("\n")
}

/// the open dialog: title, explanation, tab bar and the selected tab's code.
/// a closed card has no detail view.
pub fn render_detail(
    entry: &PatternEntry,
    state: &CardState,
    renderer: &CodeRenderer,
    options: &RenderOptions,
) -> Option<String> {
    if !state.is_open() {
        return None;
    }

    let rule = "─".repeat(options.width);
    let mut lines = vec![
        paint(&rule, options).magenta().to_string(),
        format!("📖 {}", paint(entry.name, options).bold()),
        paint(&rule, options).magenta().to_string(),
        String::new(),
        paint(entry.example.explanation, options).dim().to_string(),
        String::new(),
        render_tab_bar(state.selected(), options),
        paint(&rule, options).dim().to_string(),
    ];

    let code = renderer.render(state.selected().code(entry), None);
    if !code.is_empty() {
        lines.push(code);
    }
    lines.push(paint(&rule, options).dim().to_string());

    Some(lines.join("\n"))
}

fn render_tab_bar(selected: Tab, options: &RenderOptions) -> String {
    Tab::ALL
        .iter()
        .map(|&tab| {
            if tab == selected {
                paint(format!("[ {} ]", tab.label()), options)
                    .magenta()
                    .bold()
                    .to_string()
            } else {
                paint(format!("  {}  ", tab.label()), options).dim().to_string()
            }
        })
        .collect::<Vec<_>>()
        .join("   ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalogue::{catalogue, find};

    fn single_responsibility() -> &'static PatternEntry {
        find(catalogue(), "Single Responsibility Principle").unwrap().1
    }

    #[test]
    fn new_card_is_closed_on_before() {
        let state = CardState::default();
        assert!(!state.is_open());
        assert_eq!(state.selected(), Tab::Before);
    }

    #[test]
    fn select_is_ignored_while_closed() {
        let mut state = CardState::default();
        state.select(Tab::After);
        assert_eq!(state.selected(), Tab::Before);
    }

    #[test]
    fn reopening_resets_to_before() {
        let mut state = CardState::default();
        state.open();
        state.select(Tab::After);
        assert_eq!(state.selected(), Tab::After);

        state.close();
        assert!(!state.is_open());
        state.open();
        assert_eq!(state.selected(), Tab::Before);
    }

    #[test]
    fn tab_labels_and_positions() {
        assert_eq!(Tab::Before.label(), "Before Pattern");
        assert_eq!(Tab::After.label(), "After Pattern");
        assert_eq!(Tab::ALL.map(Tab::index), [0, 1]);
    }

    #[test]
    fn summary_shows_name_and_description() {
        let entry = single_responsibility();
        let summary = render_summary(entry, &RenderOptions::plain());
        assert!(summary.contains(entry.name));
        assert!(summary.contains(entry.description));
        assert!(summary.contains("View Example"));
    }

    #[test]
    fn summary_is_three_lines_without_trailing_newline() {
        let entry = single_responsibility();
        let summary = render_summary(entry, &RenderOptions::plain());
        let lines: Vec<&str> = summary.lines().collect();
        assert_eq!(lines, [
            format!("</> {}", entry.name),
            format!("    {}", entry.description),
            "    [ View Example ]".to_string(),
        ]);
        assert!(!summary.ends_with('\n'));
    }

    #[test]
    fn detail_is_framed_by_rules() {
        let options = RenderOptions::plain();
        let renderer = CodeRenderer::new(&options);
        let mut state = CardState::default();
        state.open();

        let detail = render_detail(single_responsibility(), &state, &renderer, &options).unwrap();
        let lines: Vec<&str> = detail.lines().collect();
        let rule = "─".repeat(options.width);
        assert_eq!(lines[0], rule);
        assert_eq!(lines[1], "📖 Single Responsibility Principle");
        assert_eq!(lines[2], rule);
        assert_eq!(lines[3], "");
        assert_eq!(lines[6], "[ Before Pattern ]     After Pattern  ");
        assert_eq!(lines.last().copied(), Some(rule.as_str()));
        assert!(!detail.ends_with('\n'));
    }

    #[test]
    fn closed_card_has_no_detail() {
        let options = RenderOptions::plain();
        let renderer = CodeRenderer::new(&options);
        let detail = render_detail(single_responsibility(), &CardState::default(), &renderer, &options);
        assert!(detail.is_none());
    }

    #[test]
    fn detail_follows_the_selected_tab() {
        let options = RenderOptions::plain();
        let renderer = CodeRenderer::new(&options);
        let entry = single_responsibility();
        let mut state = CardState::default();
        state.open();

        let before = render_detail(entry, &state, &renderer, &options).unwrap();
        assert!(before.contains(entry.example.explanation));
        assert!(before.contains(entry.example.before));
        assert!(before.contains("[ Before Pattern ]"));
        assert!(!before.contains("class UserRepository:"));

        state.select(Tab::After);
        let after = render_detail(entry, &state, &renderer, &options).unwrap();
        assert!(after.contains(entry.example.after));
        assert!(after.contains("[ After Pattern ]"));
        assert!(after.contains("class UserRepository:"));
    }
}
