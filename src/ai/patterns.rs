//! Regex cascades and parameter extraction
//!
//! Each cascade is a fixed ordered table evaluated first-match-wins, with an
//! explicit default. The tables are compiled once.

use once_cell::sync::Lazy;
use regex::Regex;

use super::{AiOperation, AiParameters};
use crate::api::resources::Resource;

static RESOURCE_PATTERNS: Lazy<Vec<(Regex, Resource)>> = Lazy::new(|| {
    // Live diary first: appointment phrasing would otherwise be swallowed
    // by the broader resource words.
    [
        (
            r"(?i)book.{0,20}appointment|schedule.{0,20}meeting|check.{0,20}availability|available.{0,20}slot|appointment.{0,20}time|sales.{0,20}appointment",
            Resource::LiveDiary,
        ),
        (r"(?i)contact|person|customer|client|lead", Resource::Contact),
        (r"(?i)company|business|organization|firm|corp", Resource::Company),
        (r"(?i)job|project|work|task", Resource::Job),
        (r"(?i)invoice|bill|payment due|billing", Resource::Invoice),
        (r"(?i)opportunity|deal|prospect|sale", Resource::Opportunity),
        (r"(?i)activity|task|todo|reminder|follow.?up", Resource::Activity),
        (r"(?i)payment|receipt|transaction|paid", Resource::Payment),
    ]
    .into_iter()
    .map(|(pattern, resource)| (Regex::new(pattern).expect("invalid resource pattern"), resource))
    .collect()
});

static OPERATION_PATTERNS: Lazy<Vec<(Regex, AiOperation)>> = Lazy::new(|| {
    [
        (
            r"(?i)check.{0,20}availability|available.{0,20}time|when.{0,20}available|find.{0,20}slot|available.{0,20}slot",
            AiOperation::CheckAvailability,
        ),
        (
            r"(?i)book.{0,20}appointment|schedule.{0,20}meeting|book.{0,20}lead|create.{0,20}appointment",
            AiOperation::BookLead,
        ),
        (
            r"(?i)find|search|look for|get all|list|show|retrieve",
            AiOperation::Search,
        ),
        (r"(?i)get|fetch|load|read", AiOperation::Get),
    ]
    .into_iter()
    .map(|(pattern, operation)| {
        (Regex::new(pattern).expect("invalid operation pattern"), operation)
    })
    .collect()
});

static NAME_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r#"(?i)(?:named?|called)\s+["']?([^"']+)["']?"#).unwrap());

// Case-sensitive on purpose: only a capitalized phrase reads as a location.
static LOCATION_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?:in|from|at)\s+([A-Z][A-Za-z\s]+)").unwrap());

static EMAIL_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"([a-zA-Z0-9._%+-]+@[a-zA-Z0-9.-]+\.[a-zA-Z]{2,})").unwrap());

static DATE_PATTERNS: Lazy<Vec<Regex>> = Lazy::new(|| {
    [
        r"(?i)(?:from|since|after)\s+(\d{4}-\d{2}-\d{2}|today|yesterday|last\s+\w+)",
        r"(?i)(?:before|until|by)\s+(\d{4}-\d{2}-\d{2}|today|tomorrow|next\s+\w+)",
    ]
    .into_iter()
    .map(|pattern| Regex::new(pattern).unwrap())
    .collect()
});

pub(super) fn detect_resource(query: &str) -> Resource {
    RESOURCE_PATTERNS
        .iter()
        .find(|(pattern, _)| pattern.is_match(query))
        .map(|(_, resource)| *resource)
        .unwrap_or(Resource::Contact)
}

pub(super) fn detect_operation(query: &str) -> AiOperation {
    OPERATION_PATTERNS
        .iter()
        .find(|(pattern, _)| pattern.is_match(query))
        .map(|(_, operation)| *operation)
        .unwrap_or(AiOperation::Search)
}

pub(super) fn extract_parameters(query: &str) -> AiParameters {
    let mut parameters = AiParameters::default();

    if let Some(captures) = NAME_PATTERN.captures(query) {
        parameters.name = Some(captures[1].trim().to_string());
    }

    if let Some(captures) = LOCATION_PATTERN.captures(query) {
        parameters.location = Some(captures[1].trim().to_string());
    }

    if let Some(captures) = EMAIL_PATTERN.captures(query) {
        parameters.email = Some(captures[1].to_string());
    }

    // Both ranges are tried; a "before" bound overrides a "from" bound when
    // the text mentions both.
    for pattern in DATE_PATTERNS.iter() {
        if let Some(captures) = pattern.captures(query) {
            parameters.date_filter = Some(captures[1].to_string());
        }
    }

    parameters
}
