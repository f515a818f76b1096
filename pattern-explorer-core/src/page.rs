// page shell - header, one heading per category and one card per entry

use console::style;

use crate::card::{self, CardState, Tab};
use crate::catalogue::{Category, PatternEntry};
use crate::code::CodeRenderer;
use crate::config::RenderOptions;

pub const TITLE: &str = "Design Patterns Explorer";
pub const SUBTITLE: &str = "Discover and learn popular design patterns with practical Python examples. \
See how to improve your code quality with before and after examples.";

/// the rendered catalogue plus the ui state of every card on it
pub struct Page {
    categories: &'static [Category],
    cards: Vec<CardState>,
}

impl Page {
    pub fn new(categories: &'static [Category]) -> Self {
        let count = categories.iter().map(|c| c.entries.len()).sum();
        Self {
            categories,
            cards: vec![CardState::default(); count],
        }
    }

    /// every entry in display order, paired with its category
    pub fn entries(&self) -> impl Iterator<Item = (&'static Category, &'static PatternEntry)> {
        let categories = self.categories;
        categories
            .iter()
            .flat_map(|category| category.entries.iter().map(move |entry| (category, entry)))
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    pub fn entry(&self, index: usize) -> Option<&'static PatternEntry> {
        self.entries().nth(index).map(|(_, entry)| entry)
    }

    /// position of an entry on the page, matched by name within its category
    pub fn index_of(&self, category: &Category, entry: &PatternEntry) -> Option<usize> {
        self.entries()
            .position(|(c, e)| c.name == category.name && e.name == entry.name)
    }

    /// "category › name" labels, used by the card picker
    pub fn labels(&self) -> Vec<String> {
        self.entries()
            .map(|(category, entry)| format!("{} › {}", category.name, entry.name))
            .collect()
    }

    pub fn card(&self, index: usize) -> Option<&CardState> {
        self.cards.get(index)
    }

    pub fn open(&mut self, index: usize) -> bool {
        self.update(index, CardState::open)
    }

    pub fn close(&mut self, index: usize) -> bool {
        self.update(index, CardState::close)
    }

    pub fn select(&mut self, index: usize, tab: Tab) -> bool {
        self.update(index, |card| card.select(tab))
    }

    fn update(&mut self, index: usize, f: impl FnOnce(&mut CardState)) -> bool {
        match self.cards.get_mut(index) {
            Some(card) => {
                f(card);
                true
            }
            None => false,
        }
    }

    /// the page listing: header, then each category heading followed by its cards
    pub fn render(&self, options: &RenderOptions) -> String {
        let paint = |s: &str| style(s.to_string()).force_styling(options.color);
        let mut lines = vec![
            paint(TITLE).magenta().bold().to_string(),
            paint(SUBTITLE).dim().to_string(),
        ];

        for category in self.categories {
            lines.push(String::new());
            lines.push(format!("📖 {}", paint(category.name).bold().underlined()));
            for entry in category.entries {
                lines.push(String::new());
                lines.push(card::render_summary(entry, options));
            }
        }

        let mut out = lines.join("\n");
        out.push('\n');
        out
    }

    /// the detail view of card `index`, if that card is open
    pub fn render_open(&self, index: usize, renderer: &CodeRenderer, options: &RenderOptions) -> Option<String> {
        let entry = self.entry(index)?;
        let state = self.card(index)?;
        card::render_detail(entry, state, renderer, options)
    }
}
