use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;

/// ISO 3166 alpha-2 code, unique across a countries listing
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CountryCode(String);

impl CountryCode {
    pub fn new(code: impl Into<String>) -> Self {
        Self(code.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for CountryCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for CountryCode {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl From<String> for CountryCode {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl AsRef<str> for CountryCode {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Language {
    pub name: String,
}

impl Language {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Continent {
    pub name: String,
}

impl Continent {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

/// A country as returned by the countries GraphQL service.
///
/// `capital` and `currency` are empty strings when the service has no value
/// (it sends `null` for e.g. Antarctica), so callers test emptiness only.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Country {
    pub code: CountryCode,
    pub name: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub capital: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub currency: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub languages: Vec<Language>,
    pub continent: Continent,
}

impl Country {
    pub fn new(
        code: impl Into<CountryCode>,
        name: impl Into<String>,
        continent: impl Into<String>,
    ) -> Self {
        Self {
            code: code.into(),
            name: name.into(),
            capital: String::new(),
            currency: String::new(),
            languages: Vec::new(),
            continent: Continent::new(continent),
        }
    }

    pub fn with_capital(mut self, capital: impl Into<String>) -> Self {
        self.capital = capital.into();
        self
    }

    pub fn with_currency(mut self, currency: impl Into<String>) -> Self {
        self.currency = currency.into();
        self
    }

    pub fn with_language(mut self, name: impl Into<String>) -> Self {
        self.languages.push(Language::new(name));
        self
    }
}

/// The `data` payload of the countries query.
///
/// `countries` is `None` when the service answers with `null` or omits the
/// field; that is "no data", distinct from an empty listing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CountriesData {
    #[serde(default)]
    pub countries: Option<CountriesResult>,
}

impl CountriesData {
    pub fn new(countries: CountriesResult) -> Self {
        Self {
            countries: Some(countries),
        }
    }

    pub fn from_json(json: &str) -> crate::Result<Self> {
        Ok(serde_json::from_str(json)?)
    }
}

/// Ordered countries from a single query execution
pub type CountriesResult = Vec<Country>;

fn null_as_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}
