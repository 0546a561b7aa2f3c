use serde::Deserialize;

use super::ResultItem;

/// One page of results returned by the code search API.
#[derive(Deserialize, Debug, PartialEq, Eq)]
pub struct ResultPage {
    /// The total number of matches declared by the server for the whole search.
    pub(crate) count: u64,

    /// The matches carried by this page.
    pub(crate) results: Vec<ResultItem>,
}

impl ResultPage {
    /// Creates a new `ResultPage` instance with the given total count and matches.
    pub fn new(count: u64, results: Vec<ResultItem>) -> Self {
        Self { count, results }
    }

    /// Retrieves the total number of matches declared by the server.
    pub fn count(&self) -> u64 {
        self.count
    }

    /// Retrieves the matches carried by this page.
    pub fn results(&self) -> &[ResultItem] {
        &self.results
    }

    /// Consumes the page and returns its matches.
    pub(crate) fn into_results(self) -> Vec<ResultItem> {
        self.results
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn result_page_deserializes_from_wire_shape() {
        let json = r#"{
            "count": 2,
            "results": [
                {
                    "fileName": "catalog-info.yaml",
                    "path": "/catalog-info.yaml",
                    "repository": { "name": "repository-1" }
                },
                {
                    "fileName": "catalog-info.yaml",
                    "path": "/packages/app/catalog-info.yaml",
                    "repository": { "name": "repository-2" }
                }
            ]
        }"#;

        let page: ResultPage = serde_json::from_str(json).unwrap();

        assert_eq!(
            ResultPage::new(
                2,
                vec![
                    ResultItem::new("catalog-info.yaml", "/catalog-info.yaml", "repository-1"),
                    ResultItem::new(
                        "catalog-info.yaml",
                        "/packages/app/catalog-info.yaml",
                        "repository-2"
                    ),
                ]
            ),
            page
        );
    }
}
