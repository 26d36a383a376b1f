use crate::application::read_models::{
    OfferRowView, SearchViewModel, SelectorRowView, StatusView, SuggestionCardView,
    SEARCH_PLACEHOLDER,
};
use crate::ports::outbound::ViewFormatter;
use crate::shared::Result;
use owo_colors::{OwoColorize, Style};

/// Width of the id column in offer/product rows
const LABEL_WIDTH: usize = 14;

/// Horizontal rule between frames
const FRAME_RULE: &str = "────────────────────────────────────────";

/// TextFormatter adapter rendering the search view as a terminal frame
///
/// Layout, top to bottom: search field, the three selector rows, then the
/// results area (loading line, error banner, or result cards).
pub struct TextFormatter {
    color: bool,
}

impl TextFormatter {
    /// Coloured output for terminals
    pub fn new() -> Self {
        Self { color: true }
    }

    /// No escape codes; used when stdout is not a terminal
    pub fn plain() -> Self {
        Self { color: false }
    }

    fn paint(&self, text: &str, style: Style) -> String {
        if self.color {
            text.style(style).to_string()
        } else {
            text.to_string()
        }
    }
}

impl Default for TextFormatter {
    fn default() -> Self {
        Self::new()
    }
}

/// Helper methods for rendering sections
impl TextFormatter {
    fn render_search_field(&self, output: &mut String, query: &str) {
        if query.is_empty() {
            output.push_str(&format!(
                "🔍 {}\n",
                self.paint(SEARCH_PLACEHOLDER, Style::new().dimmed())
            ));
        } else {
            output.push_str(&format!("🔍 {}\n", query));
        }
    }

    fn render_selector_row(&self, output: &mut String, row: &SelectorRowView) {
        if row.options.is_empty() {
            return;
        }

        let buttons: Vec<String> = row
            .options
            .iter()
            .map(|button| {
                if button.selected {
                    self.paint(&format!("[{}]", button.label), Style::new().bold().blue())
                } else {
                    format!(" {} ", button.label)
                }
            })
            .collect();

        output.push_str(&format!("{:<10}{}\n", format!("{}:", row.label), buttons.join(" ")));
    }

    fn render_status(&self, output: &mut String, status: &StatusView) {
        match status {
            StatusView::Idle => {}
            StatusView::Loading { .. } => {
                output.push_str(&self.paint("Loading...", Style::new().yellow()));
                output.push('\n');
            }
            StatusView::Error { message } => {
                let banner = format!("Error: {}", message);
                output.push_str(&self.paint(&banner, Style::new().red().bold()));
                output.push('\n');
            }
            StatusView::Results { suggestions } => {
                output.push_str(&self.paint("Search Results:", Style::new().bold()));
                output.push('\n');
                if suggestions.is_empty() {
                    output.push_str("  (no suggestions)\n");
                }
                for card in suggestions {
                    self.render_card(output, card);
                }
            }
        }
    }

    fn render_card(&self, output: &mut String, card: &SuggestionCardView) {
        output.push('\n');
        output.push_str(&format!("┌ {}\n", self.paint(&card.salt, Style::new().bold())));
        output.push_str(&format!("│ Form: {}\n", card.form.as_deref().unwrap_or("")));
        output.push_str(&format!("│ Strength: {}\n", card.strength.as_deref().unwrap_or("")));
        output.push_str(&format!("│ Packing: {}\n", card.packing.as_deref().unwrap_or("")));

        for offer in &card.selected_offers {
            self.render_offer_row(output, offer);
        }

        let heading = self.paint("Available Products:", Style::new().bold());
        output.push_str(&format!("│ {}\n", heading));
        for product in &card.available_products {
            self.render_offer_row(output, product);
        }
        output.push_str("└\n");
    }

    fn render_offer_row(&self, output: &mut String, row: &OfferRowView) {
        let price = match row.price {
            Some(_) => row.display_price(),
            None => self.paint(&row.display_price(), Style::new().red()),
        };
        output.push_str(&format!("│   {:<width$}{}\n", row.label, price, width = LABEL_WIDTH));
    }
}

impl ViewFormatter for TextFormatter {
    fn format(&self, view: &SearchViewModel) -> Result<String> {
        let mut output = String::new();
        output.push_str(FRAME_RULE);
        output.push('\n');

        self.render_search_field(&mut output, &view.query);
        output.push('\n');

        for row in [&view.forms, &view.strengths, &view.packings] {
            self.render_selector_row(&mut output, row);
        }
        if ![&view.forms, &view.strengths, &view.packings]
            .iter()
            .all(|row| row.options.is_empty())
        {
            output.push('\n');
        }

        self.render_status(&mut output, &view.status);
        Ok(output)
    }
}
