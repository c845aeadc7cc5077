// src/catalog/query.rs
//
// Query-string assembly for catalog endpoints.

use url::form_urlencoded;

/// Ordered query parameters.
///
/// Absent values are left out entirely rather than sent empty, and boolean
/// flags only appear when set.
#[derive(Debug, Clone, Default)]
pub struct Query {
    pairs: Vec<(String, String)>,
}

impl Query {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn param(mut self, key: &str, value: impl ToString) -> Self {
        self.pairs.push((key.to_string(), value.to_string()));
        self
    }

    /// Adds `key` only when `value` is present and non-empty.
    pub fn optional(self, key: &str, value: Option<&str>) -> Self {
        match value {
            Some(v) if !v.is_empty() => self.param(key, v),
            _ => self,
        }
    }

    /// Adds `key=true` when `enabled`, nothing otherwise.
    pub fn flag(self, key: &str, enabled: bool) -> Self {
        if enabled {
            self.param(key, "true")
        } else {
            self
        }
    }

    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    /// `path` followed by `?query`, or `path` alone when there are no pairs.
    pub fn append_to(&self, path: &str) -> String {
        if self.is_empty() {
            return path.to_string();
        }

        let encoded = form_urlencoded::Serializer::new(String::new())
            .extend_pairs(self.pairs.iter())
            .finish();
        format!("{}?{}", path, encoded)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_query_leaves_path_alone() {
        assert_eq!(Query::new().append_to("/logistics/vehicles/"), "/logistics/vehicles/");
    }

    #[test]
    fn test_pairs_keep_insertion_order() {
        let path = Query::new()
            .param("lat", 30.2672)
            .param("lon", -97.7431)
            .param("state", "TX")
            .append_to("/analytics/recommend/shelter/");
        assert_eq!(
            path,
            "/analytics/recommend/shelter/?lat=30.2672&lon=-97.7431&state=TX"
        );
    }

    #[test]
    fn test_optional_skips_none_and_empty() {
        let path = Query::new()
            .optional("status", Some("active"))
            .optional("type", None)
            .optional("category", Some(""))
            .append_to("/x/");
        assert_eq!(path, "/x/?status=active");
    }

    #[test]
    fn test_flag_only_when_true() {
        let query = Query::new().flag("needs_ada", false).flag("has_pets", true);
        assert_eq!(query.append_to("/x/"), "/x/?has_pets=true");
    }

    #[test]
    fn test_values_are_encoded() {
        let path = Query::new().param("category", "first aid").append_to("/x/");
        assert_eq!(path, "/x/?category=first+aid");
    }
}
