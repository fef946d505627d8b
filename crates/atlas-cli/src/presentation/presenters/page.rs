use atlas_client::FetchState;

use super::country::present_country_list;
use crate::presentation::view_models::{BodyViewModel, PageViewModel};

pub const PAGE_TITLE: &str = "Countries of the World";
pub const PAGE_SUBTITLE: &str = "Exploring countries using GraphQL";

fn page(body: BodyViewModel) -> PageViewModel {
    PageViewModel {
        title: PAGE_TITLE.to_string(),
        subtitle: PAGE_SUBTITLE.to_string(),
        body,
    }
}

pub fn present_page(state: &FetchState) -> PageViewModel {
    let body = match state {
        FetchState::Loading => BodyViewModel::Loading,
        FetchState::Failed { message } => BodyViewModel::Failed {
            message: message.clone(),
        },
        FetchState::Empty => BodyViewModel::Empty,
        FetchState::Ready { countries } => BodyViewModel::Ready(present_country_list(countries)),
    };
    page(body)
}

/// Fallback page shown once the error boundary has caught a fault.
pub fn present_fault(description: &str) -> PageViewModel {
    page(BodyViewModel::Fault {
        description: description.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use atlas_types::Country;

    #[test]
    fn test_header_is_static_across_states() {
        let states = [
            FetchState::Loading,
            FetchState::Empty,
            FetchState::Failed {
                message: "x".to_string(),
            },
            FetchState::Ready { countries: vec![] },
        ];

        for state in &states {
            let page = present_page(state);
            assert_eq!(page.title, PAGE_TITLE);
            assert_eq!(page.subtitle, PAGE_SUBTITLE);
        }
    }

    #[test]
    fn test_failed_page_carries_message_and_no_cards() {
        let page = present_page(&FetchState::Failed {
            message: "Response not successful: Received status code 500".to_string(),
        });

        assert_eq!(
            page.body,
            BodyViewModel::Failed {
                message: "Response not successful: Received status code 500".to_string()
            }
        );
    }

    #[test]
    fn test_ready_page_has_one_card_per_country() {
        let page = present_page(&FetchState::Ready {
            countries: vec![
                Country::new("FR", "France", "Europe"),
                Country::new("JP", "Japan", "Asia"),
            ],
        });

        match page.body {
            BodyViewModel::Ready(list) => assert_eq!(list.len(), 2),
            other => panic!("expected Ready, got {:?}", other),
        }
    }

    #[test]
    fn test_fault_page() {
        let page = present_fault("view exploded");
        assert_eq!(
            page.body,
            BodyViewModel::Fault {
                description: "view exploded".to_string()
            }
        );
    }
}
