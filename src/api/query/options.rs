//! Raw OData query options and their serialized form
//!
//! [`QueryOptions`] is the wire-level parameter set: whatever is present is
//! emitted, whatever is absent is omitted. Filter strings are opaque here;
//! the remote API is the sole arbiter of their validity.

/// Optional OData parameters for a list request.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QueryOptions {
    pub filter: Option<String>,
    pub select: Option<String>,
    pub expand: Option<String>,
    pub orderby: Option<String>,
    pub top: Option<u32>,
    pub skip: Option<u32>,
}

impl QueryOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.filter.is_none()
            && self.select.is_none()
            && self.expand.is_none()
            && self.orderby.is_none()
            && self.top.is_none()
            && self.skip.is_none()
    }

    /// Clone-and-modify helpers for deriving page variants of a base query.
    pub fn with_top(mut self, top: u32) -> Self {
        self.top = Some(top);
        self
    }

    pub fn with_skip(mut self, skip: u32) -> Self {
        self.skip = Some(skip);
        self
    }

    /// Serialize to a URL query string.
    ///
    /// Returns the empty string when no option is set, otherwise a
    /// `?`-prefixed, `&`-joined list of `$name=value` terms in the fixed
    /// order filter, select, expand, orderby, top, skip. String values are
    /// percent-encoded.
    pub fn to_query_string(&self) -> String {
        let mut parts = Vec::new();

        if let Some(filter) = &self.filter {
            parts.push(format!("$filter={}", urlencoding::encode(filter)));
        }
        if let Some(select) = &self.select {
            parts.push(format!("$select={}", urlencoding::encode(select)));
        }
        if let Some(expand) = &self.expand {
            parts.push(format!("$expand={}", urlencoding::encode(expand)));
        }
        if let Some(orderby) = &self.orderby {
            parts.push(format!("$orderby={}", urlencoding::encode(orderby)));
        }
        if let Some(top) = self.top {
            parts.push(format!("$top={}", top));
        }
        if let Some(skip) = self.skip {
            parts.push(format!("$skip={}", skip));
        }

        if parts.is_empty() {
            String::new()
        } else {
            format!("?{}", parts.join("&"))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_options_serialize_to_empty_string() {
        assert_eq!(QueryOptions::new().to_query_string(), "");
    }

    #[test]
    fn test_field_order_is_fixed() {
        let options = QueryOptions {
            filter: Some("Status eq 1".to_string()),
            select: Some("ID,Name".to_string()),
            expand: Some("Company".to_string()),
            orderby: Some("Name desc".to_string()),
            top: Some(25),
            skip: Some(50),
        };

        assert_eq!(
            options.to_query_string(),
            "?$filter=Status%20eq%201&$select=ID%2CName&$expand=Company&$orderby=Name%20desc&$top=25&$skip=50"
        );
    }

    #[test]
    fn test_absent_fields_are_omitted() {
        let options = QueryOptions::new().with_top(10);
        assert_eq!(options.to_query_string(), "?$top=10");

        let options = QueryOptions {
            select: Some("ID".to_string()),
            skip: Some(0),
            ..Default::default()
        };
        assert_eq!(options.to_query_string(), "?$select=ID&$skip=0");
    }

    #[test]
    fn test_filter_value_round_trips_through_encoding() {
        let filter = "FirstName eq 'John O''Brien' and State eq 'NSW'";
        let options = QueryOptions {
            filter: Some(filter.to_string()),
            ..Default::default()
        };

        let serialized = options.to_query_string();
        let encoded = serialized.strip_prefix("?$filter=").unwrap();
        assert_eq!(urlencoding::decode(encoded).unwrap(), filter);
    }

    #[test]
    fn test_serialization_is_idempotent() {
        let options = QueryOptions {
            filter: Some("contains(Name, 'Blinds & Shades')".to_string()),
            top: Some(5),
            ..Default::default()
        };

        assert_eq!(options.to_query_string(), options.to_query_string());
    }
}
