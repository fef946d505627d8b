pub mod country;
pub mod options;
pub mod page;

pub use country::{CountryCardViewModel, CountryListViewModel, LanguageChip};
pub use options::DisplayOptions;
pub use page::{BodyViewModel, PageViewModel};

use std::fmt;

/// Bridges a ViewModel to its text View.
pub trait CreateView {
    fn create_view<'a>(&'a self, options: &DisplayOptions) -> Box<dyn fmt::Display + 'a>;
}
