//! Sparse search criteria for the catalog.

use serde::{Deserialize, Serialize};

/// Partial query criteria. Empty or absent fields mean "unconstrained",
/// never "match empty"; they are dropped before transmission.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchFilter {
    pub title: Option<String>,
    pub genre: Option<String>,
    pub director: Option<String>,
    pub year: Option<i32>,
}

impl SearchFilter {
    /// True when no criterion is set; such a filter is equivalent to a plain
    /// list of the full collection.
    pub fn is_empty(&self) -> bool {
        self.query_params().is_empty()
    }

    /// Project the filter onto query parameters, omitting empty values.
    pub fn query_params(&self) -> Vec<(&'static str, String)> {
        let mut params = Vec::new();

        for (key, value) in [
            ("title", &self.title),
            ("genre", &self.genre),
            ("director", &self.director),
        ] {
            if let Some(value) = value {
                let trimmed = value.trim();
                if !trimmed.is_empty() {
                    params.push((key, trimmed.to_string()));
                }
            }
        }

        if let Some(year) = self.year {
            params.push(("year", year.to_string()));
        }

        params
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_filter_is_empty() {
        assert!(SearchFilter::default().is_empty());
    }

    #[test]
    fn blank_strings_count_as_absent() {
        let filter = SearchFilter {
            title: Some("  ".to_string()),
            genre: Some(String::new()),
            ..Default::default()
        };
        assert!(filter.is_empty());
        assert!(filter.query_params().is_empty());
    }

    #[test]
    fn only_set_fields_become_params() {
        let filter = SearchFilter {
            title: Some("alien".to_string()),
            year: Some(1979),
            ..Default::default()
        };
        assert_eq!(
            filter.query_params(),
            vec![("title", "alien".to_string()), ("year", "1979".to_string())]
        );
    }

    #[test]
    fn values_are_trimmed() {
        let filter = SearchFilter {
            director: Some("  Scott ".to_string()),
            ..Default::default()
        };
        assert_eq!(filter.query_params(), vec![("director", "Scott".to_string())]);
    }
}
