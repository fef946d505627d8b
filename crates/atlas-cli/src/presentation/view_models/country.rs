use serde::Serialize;

/// One card per country. Fields are already resolved for display
/// (`"N/A"` fallbacks applied), so JSON and text agree.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CountryCardViewModel {
    pub key: String,
    pub code: String,
    pub name: String,
    pub capital: String,
    pub currency: String,
    pub continent: String,
    pub languages: Vec<LanguageChip>,
}

/// Language names repeat within a country, so chips are keyed by position.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LanguageChip {
    pub key: usize,
    pub label: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct CountryListViewModel {
    pub cards: Vec<CountryCardViewModel>,
}

impl CountryListViewModel {
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }
}
