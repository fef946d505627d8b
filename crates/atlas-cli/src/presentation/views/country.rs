use std::fmt;

use owo_colors::OwoColorize;

use crate::presentation::formatters::chip_rows;
use crate::presentation::view_models::{
    CountryCardViewModel, CountryListViewModel, CreateView, DisplayOptions,
};

const LABEL_WIDTH: usize = 11;
const FIELD_INDENT: usize = 2;

impl CreateView for CountryListViewModel {
    fn create_view<'a>(&'a self, options: &DisplayOptions) -> Box<dyn fmt::Display + 'a> {
        Box::new(CountryListView::new(self, options.clone()))
    }
}

impl CreateView for CountryCardViewModel {
    fn create_view<'a>(&'a self, options: &DisplayOptions) -> Box<dyn fmt::Display + 'a> {
        Box::new(CountryCardView::new(self, options.clone()))
    }
}

// --------------------------------------------------------
// Country Card View
// --------------------------------------------------------

pub struct CountryCardView<'a> {
    data: &'a CountryCardViewModel,
    options: DisplayOptions,
}

impl<'a> CountryCardView<'a> {
    pub fn new(data: &'a CountryCardViewModel, options: DisplayOptions) -> Self {
        Self { data, options }
    }

    fn label(&self, text: &str) -> String {
        let padded = format!("{:<width$}", text, width = LABEL_WIDTH);
        if self.options.enable_color {
            format!("{}", padded.dimmed())
        } else {
            padded
        }
    }

    fn field(&self, f: &mut fmt::Formatter, label: &str, value: &str) -> fmt::Result {
        writeln!(f, "{:indent$}{}{}", "", self.label(label), value, indent = FIELD_INDENT)
    }

    fn chip(&self, label: &str) -> String {
        let chip = format!("[{}]", label);
        if self.options.enable_color {
            format!("{}", chip.green())
        } else {
            chip
        }
    }

    fn render_languages(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let labels: Vec<&str> = self.data.languages.iter().map(|c| c.label.as_str()).collect();
        let indent = FIELD_INDENT + LABEL_WIDTH;
        let rows = chip_rows(&labels, self.options.width, indent);

        if rows.is_empty() {
            let label = if self.options.enable_color {
                format!("{}", "Languages".dimmed())
            } else {
                "Languages".to_string()
            };
            return writeln!(f, "{:indent$}{}", "", label, indent = FIELD_INDENT);
        }

        for (i, row) in rows.iter().enumerate() {
            let chips: Vec<String> = row.iter().map(|label| self.chip(label)).collect();
            if i == 0 {
                self.field(f, "Languages", &chips.join(" "))?;
            } else {
                writeln!(f, "{:indent$}{}", "", chips.join(" "), indent = indent)?;
            }
        }
        Ok(())
    }
}

impl<'a> fmt::Display for CountryCardView<'a> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let badge = format!("({})", self.data.code);
        if self.options.enable_color {
            writeln!(f, "{} {}", self.data.name.bold(), badge.cyan())?;
        } else {
            writeln!(f, "{} {}", self.data.name, badge)?;
        }

        self.field(f, "Continent", &self.data.continent)?;
        self.field(f, "Capital", &self.data.capital)?;
        self.field(f, "Currency", &self.data.currency)?;
        self.render_languages(f)
    }
}

// --------------------------------------------------------
// Country List View
// --------------------------------------------------------

pub struct CountryListView<'a> {
    data: &'a CountryListViewModel,
    options: DisplayOptions,
}

impl<'a> CountryListView<'a> {
    pub fn new(data: &'a CountryListViewModel, options: DisplayOptions) -> Self {
        Self { data, options }
    }
}

impl<'a> fmt::Display for CountryListView<'a> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for (i, card) in self.data.cards.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            write!(f, "{}", CountryCardView::new(card, self.options.clone()))?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::presentation::view_models::LanguageChip;

    fn card(code: &str, name: &str, languages: &[&str]) -> CountryCardViewModel {
        CountryCardViewModel {
            key: code.to_string(),
            code: code.to_string(),
            name: name.to_string(),
            capital: "N/A".to_string(),
            currency: "USD".to_string(),
            continent: "North America".to_string(),
            languages: languages
                .iter()
                .enumerate()
                .map(|(key, label)| LanguageChip {
                    key,
                    label: label.to_string(),
                })
                .collect(),
        }
    }

    #[test]
    fn test_card_plain() {
        let data = card("US", "United States", &["English"]);
        let output = CountryCardView::new(&data, DisplayOptions::plain()).to_string();

        insta::assert_snapshot!(output.trim_end(), @r"
        United States (US)
          Continent  North America
          Capital    N/A
          Currency   USD
          Languages  [English]
        ");
    }

    #[test]
    fn test_card_without_languages_has_no_chips() {
        let data = card("AQ", "Antarctica", &[]);
        let output = CountryCardView::new(&data, DisplayOptions::plain()).to_string();

        assert!(output.ends_with("  Languages\n"));
        assert!(!output.contains('['));
    }

    #[test]
    fn test_chips_wrap_under_first_chip() {
        let data = card("CH", "Switzerland", &["German", "French", "Italian"]);
        let options = DisplayOptions {
            enable_color: false,
            width: Some(32),
        };
        let output = CountryCardView::new(&data, options).to_string();

        let tail: Vec<&str> = output.lines().skip(4).collect();
        assert_eq!(
            tail,
            vec!["  Languages  [German] [French]", "             [Italian]"]
        );
    }

    #[test]
    fn test_list_separates_cards_with_blank_line() {
        let list = CountryListViewModel {
            cards: vec![card("US", "United States", &[]), card("MX", "Mexico", &[])],
        };
        let output = list.create_view(&DisplayOptions::plain()).to_string();

        let headers: Vec<&str> = output
            .lines()
            .filter(|line| !line.starts_with(' ') && !line.is_empty())
            .collect();
        assert_eq!(headers, vec!["United States (US)", "Mexico (MX)"]);
        assert_eq!(output.matches("\n\n").count(), 1);
    }

    #[test]
    fn test_color_only_when_enabled() {
        let data = card("US", "United States", &["English"]);
        let colored = CountryCardView::new(&data, DisplayOptions::default()).to_string();
        let plain = CountryCardView::new(&data, DisplayOptions::plain()).to_string();

        assert!(colored.contains('\u{1b}'));
        assert!(!plain.contains('\u{1b}'));
    }
}
