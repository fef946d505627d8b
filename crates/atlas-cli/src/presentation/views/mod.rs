pub mod country;
pub mod page;

pub use country::{CountryCardView, CountryListView};
pub use page::PageView;
