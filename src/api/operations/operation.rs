//! Single CRM operations
//!
//! Each variant resolves to one API interaction: a list (single page or
//! fully paginated), a record-level CRUD call, or one of the bespoke Live
//! Diary endpoints. `execute` returns the output records the operation
//! contributes to the run.

use anyhow::Result;
use reqwest::Method;
use serde_json::{Value, json};

use crate::api::client::InsyteClient;
use crate::api::constants::{DEFAULT_LIST_LIMIT, endpoints, record_path};
use crate::api::livediary::{AvailabilityRequest, BookLeadRequest};
use crate::api::query::QueryOptions;
use crate::api::resources::Resource;

#[derive(Debug, Clone)]
pub enum Operation {
    /// List records, either one page (capped at `limit`) or every page.
    List {
        resource: Resource,
        options: QueryOptions,
        return_all: bool,
        limit: Option<u32>,
    },
    /// Fetch a single record by ID.
    Get { resource: Resource, id: String },
    /// Create a record from a JSON object of fields.
    Create { resource: Resource, data: Value },
    /// Update a record by ID.
    Update {
        resource: Resource,
        id: String,
        data: Value,
    },
    /// Delete a record by ID.
    Delete { resource: Resource, id: String },
    /// Check available sales appointment slots.
    CheckAvailability(AvailabilityRequest),
    /// Book a sales appointment for a lead.
    BookLead(BookLeadRequest),
}

impl Operation {
    pub fn list(resource: Resource, options: QueryOptions) -> Self {
        Self::List {
            resource,
            options,
            return_all: false,
            limit: None,
        }
    }

    pub fn list_all(resource: Resource, options: QueryOptions) -> Self {
        Self::List {
            resource,
            options,
            return_all: true,
            limit: None,
        }
    }

    pub fn get(resource: Resource, id: impl Into<String>) -> Self {
        Self::Get {
            resource,
            id: id.into(),
        }
    }

    pub fn create(resource: Resource, data: Value) -> Self {
        Self::Create { resource, data }
    }

    pub fn update(resource: Resource, id: impl Into<String>, data: Value) -> Self {
        Self::Update {
            resource,
            id: id.into(),
            data,
        }
    }

    pub fn delete(resource: Resource, id: impl Into<String>) -> Self {
        Self::Delete {
            resource,
            id: id.into(),
        }
    }

    fn collection_path(resource: Resource) -> Result<&'static str> {
        resource.collection_path().ok_or_else(|| {
            anyhow::anyhow!(
                "Resource '{}' has no collection endpoint; use the live-diary operations",
                resource
            )
        })
    }

    /// Execute against the client, returning the operation's output records.
    pub async fn execute(&self, client: &InsyteClient) -> Result<Vec<Value>> {
        match self {
            Operation::List {
                resource,
                options,
                return_all,
                limit,
            } => {
                let path = Self::collection_path(*resource)?;
                if *return_all {
                    client
                        .fetch_all(Method::GET, path, None, options.clone())
                        .await
                } else {
                    let options = options
                        .clone()
                        .with_top(limit.unwrap_or(DEFAULT_LIST_LIMIT));
                    let paged_path = format!("{}{}", path, options.to_query_string());
                    let response = client.request(Method::GET, &paged_path, None, None).await?;
                    Ok(single_page_records(response))
                }
            }
            Operation::Get { resource, id } => {
                let path = record_path(Self::collection_path(*resource)?, id);
                let response = client.request(Method::GET, &path, None, None).await?;
                Ok(vec![response])
            }
            Operation::Create { resource, data } => {
                let path = Self::collection_path(*resource)?;
                let response = client.request(Method::POST, path, Some(data), None).await?;
                Ok(vec![response])
            }
            Operation::Update { resource, id, data } => {
                let path = record_path(Self::collection_path(*resource)?, id);
                let response = client
                    .request(Method::PATCH, &path, Some(data), None)
                    .await?;
                Ok(vec![response])
            }
            Operation::Delete { resource, id } => {
                let path = record_path(Self::collection_path(*resource)?, id);
                client.request(Method::DELETE, &path, None, None).await?;
                Ok(vec![json!({"success": true, "id": id})])
            }
            Operation::CheckAvailability(request) => {
                let body = serde_json::to_value(request)?;
                let response = client
                    .request(Method::POST, endpoints::AVAILABILITY, Some(&body), None)
                    .await?;
                Ok(vec![response])
            }
            Operation::BookLead(request) => {
                let body = serde_json::to_value(request)?;
                let response = client
                    .request(Method::POST, endpoints::BOOK_LEAD, Some(&body), None)
                    .await?;
                Ok(vec![response])
            }
        }
    }
}

/// Unwrap a single-page list response: envelope records, bare records, or
/// the raw response itself when it is neither.
fn single_page_records(response: Value) -> Vec<Value> {
    match response {
        Value::Array(records) => records,
        Value::Object(mut map) => match map.remove("value") {
            Some(Value::Array(records)) => records,
            Some(other) => {
                map.insert("value".to_string(), other);
                vec![Value::Object(map)]
            }
            None => vec![Value::Object(map)],
        },
        other => vec![other],
    }
}
