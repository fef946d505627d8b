use atlas_types::Country;

use crate::presentation::view_models::{CountryCardViewModel, CountryListViewModel, LanguageChip};

/// Shown in place of an empty capital or currency.
pub const NOT_AVAILABLE: &str = "N/A";

fn or_not_available(value: &str) -> String {
    if value.is_empty() {
        NOT_AVAILABLE.to_string()
    } else {
        value.to_string()
    }
}

pub fn present_country_card(country: &Country) -> CountryCardViewModel {
    let languages = country
        .languages
        .iter()
        .enumerate()
        .map(|(key, language)| LanguageChip {
            key,
            label: language.name.clone(),
        })
        .collect();

    CountryCardViewModel {
        key: country.code.to_string(),
        code: country.code.to_string(),
        name: country.name.clone(),
        capital: or_not_available(&country.capital),
        currency: or_not_available(&country.currency),
        continent: country.continent.name.clone(),
        languages,
    }
}

/// One card per country, in input order.
pub fn present_country_list(countries: &[Country]) -> CountryListViewModel {
    CountryListViewModel {
        cards: countries.iter().map(present_country_card).collect(),
    }
}
