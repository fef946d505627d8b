pub mod country;
pub mod page;

pub use country::{NOT_AVAILABLE, present_country_card, present_country_list};
pub use page::{PAGE_SUBTITLE, PAGE_TITLE, present_fault, present_page};
