//! Heuristic natural-language query classification ("AI mode")
//!
//! A fixed cascade of regular expressions maps free text onto a resource,
//! an operation and a set of extracted parameters, and synthesizes an OData
//! filter for searches. This is a best-effort classifier, not a parser: it
//! never fails, and unmatched input falls back to searching contacts.

mod patterns;

use crate::api::operations::Operation;
use crate::api::query::{Filter, QueryOptions};
use crate::api::resources::Resource;

/// Operation intent detected from free text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AiOperation {
    CheckAvailability,
    BookLead,
    Search,
    Get,
}

impl AiOperation {
    pub fn as_str(&self) -> &'static str {
        match self {
            AiOperation::CheckAvailability => "checkAvailability",
            AiOperation::BookLead => "bookLead",
            AiOperation::Search => "search",
            AiOperation::Get => "get",
        }
    }
}

/// Parameters pulled out of the query text, independent of the detected
/// resource and operation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AiParameters {
    pub name: Option<String>,
    pub location: Option<String>,
    pub email: Option<String>,
    pub date_filter: Option<String>,
    /// Filter expression synthesized from the fields above; only set for
    /// search intents.
    pub filter: Option<String>,
}

/// Result of classifying one free-text query.
#[derive(Debug, Clone)]
pub struct AiQuery {
    pub resource: Resource,
    pub operation: AiOperation,
    pub parameters: AiParameters,
}

/// Classify a free-text query. Deterministic and total.
pub fn parse_query(query: &str) -> AiQuery {
    let resource = patterns::detect_resource(query);
    let operation = patterns::detect_operation(query);
    let mut parameters = patterns::extract_parameters(query);

    if operation == AiOperation::Search {
        parameters.filter = synthesize_filter(resource, &parameters);
    }

    AiQuery {
        resource,
        operation,
        parameters,
    }
}

/// Map a classified query onto an executable operation.
///
/// Search and get intents become a single-page list carrying the
/// synthesized filter. Diary intents need structured input (coordinates,
/// slot keys) that free text cannot supply, so they yield `None` and the
/// caller decides how to proceed; the same goes for resources without a
/// collection endpoint.
pub fn plan(query: &AiQuery) -> Option<Operation> {
    if query.resource.collection_path().is_none() {
        return None;
    }

    match query.operation {
        AiOperation::Search | AiOperation::Get => {
            let options = QueryOptions {
                filter: query.parameters.filter.clone(),
                ..Default::default()
            };
            Some(Operation::list(query.resource, options))
        }
        AiOperation::CheckAvailability | AiOperation::BookLead => None,
    }
}

/// Combine whichever of {name, location, email} were extracted into one
/// and-joined boolean expression with resource-appropriate field names.
fn synthesize_filter(resource: Resource, params: &AiParameters) -> Option<String> {
    let mut clauses = Vec::new();

    if let Some(name) = &params.name {
        let clause = if resource == Resource::Contact {
            Filter::or(vec![
                Filter::contains("FirstName", name.clone()),
                Filter::contains("LastName", name.clone()),
            ])
        } else {
            Filter::contains("Name", name.clone())
        };
        clauses.push(clause);
    }

    if let Some(location) = &params.location {
        clauses.push(Filter::or(vec![
            Filter::eq("State", location.clone()),
            Filter::eq("City", location.clone()),
        ]));
    }

    if let Some(email) = &params.email {
        clauses.push(Filter::eq("Email", email.clone()));
    }

    match clauses.len() {
        0 => None,
        1 => Some(clauses.remove(0).to_odata_string()),
        _ => Some(Filter::and(clauses).to_odata_string()),
    }
}
