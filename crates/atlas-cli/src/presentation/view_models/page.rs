use serde::Serialize;

use super::country::CountryListViewModel;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PageViewModel {
    pub title: String,
    pub subtitle: String,
    pub body: BodyViewModel,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum BodyViewModel {
    Loading,
    Failed { message: String },
    Empty,
    Ready(CountryListViewModel),
    /// The error boundary caught a rendering fault
    Fault { description: String },
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_body_serializes_with_state_tag() {
        let body = BodyViewModel::Failed {
            message: "boom".to_string(),
        };
        assert_eq!(
            serde_json::to_value(&body).unwrap(),
            json!({ "state": "failed", "message": "boom" })
        );

        let body = BodyViewModel::Ready(CountryListViewModel::default());
        assert_eq!(
            serde_json::to_value(&body).unwrap(),
            json!({ "state": "ready", "cards": [] })
        );
    }
}
