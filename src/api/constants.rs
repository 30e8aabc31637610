//! API constants and endpoint construction for the Insyte Web API

/// Default base URL for the hosted Insyte API
pub const DEFAULT_BASE_URL: &str = "https://new-api.insyteblinds.com";

/// Default API version
pub const DEFAULT_API_VERSION: &str = "v2";

/// API versions accepted by the remote service
pub const API_VERSIONS: [&str; 2] = ["v1", "v2"];

/// Page size used by the paginated fetcher when the caller sets no `$top`
pub const DEFAULT_PAGE_SIZE: u32 = 100;

/// Upper bound on pagination iterations against a misbehaving server
pub const DEFAULT_MAX_PAGES: u32 = 1000;

/// Result cap for single-page list requests without an explicit limit
pub const DEFAULT_LIST_LIMIT: u32 = 50;

/// Fixed headers sent on every request
pub mod headers {
    pub const ACCEPT_JSON: &str = "application/json";
    pub const CONTENT_TYPE_JSON: &str = "application/json";
}

/// Bespoke Live Diary endpoints (outside the resource collections)
pub mod endpoints {
    pub const AVAILABILITY: &str = "/LiveDiary/Sales/Availability";
    pub const BOOK_LEAD: &str = "/LiveDiary/Sales/BookLead";
}

/// Build the full URL for an API path: `{base_url}/{api_version}{path}`
pub fn api_url(base_url: &str, api_version: &str, path: &str) -> String {
    format!("{}/{}{}", base_url.trim_end_matches('/'), api_version, path)
}

/// Build the path addressing a single record: `{collection}({id})`
pub fn record_path(collection: &str, id: &str) -> String {
    format!("{}({})", collection, id)
}
