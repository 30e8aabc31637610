use anyhow::{Context, Result};
use clap::{Args, Subcommand};
use log::info;
use serde::Deserialize;
use serde_json::Value;

use crate::ai;
use crate::api::operations::{Operation, Operations};
use crate::api::query::QueryOptions;
use crate::api::resources::Resource;

#[derive(Args)]
pub struct RecordCommands {
    #[command(subcommand)]
    pub command: RecordSubcommands,
}

#[derive(Subcommand)]
pub enum RecordSubcommands {
    /// List records with optional OData parameters
    List {
        /// Resource to list (contact, company, job, ...)
        resource: Resource,
        /// OData filter expression, e.g. "FirstName eq 'John'"
        #[arg(long)]
        filter: Option<String>,
        /// Comma-separated fields to select
        #[arg(long)]
        select: Option<String>,
        /// Related entities to include
        #[arg(long)]
        expand: Option<String>,
        /// OData orderby expression, e.g. "LastName desc"
        #[arg(long)]
        orderby: Option<String>,
        /// Fetch every page instead of the first one
        #[arg(long)]
        all: bool,
        /// Max number of results for single-page fetches
        #[arg(short, long)]
        limit: Option<u32>,
        /// Pretty print the output
        #[arg(short, long)]
        pretty: bool,
    },
    /// Get a single record by ID
    Get {
        resource: Resource,
        id: String,
        #[arg(short, long)]
        pretty: bool,
    },
    /// Create a record from a JSON object of fields
    Create {
        resource: Resource,
        /// Fields as JSON, e.g. '{"FirstName": "John", "LastName": "Doe"}'
        data: String,
        #[arg(short, long)]
        pretty: bool,
    },
    /// Update a record by ID
    Update {
        resource: Resource,
        id: String,
        /// Changed fields as JSON
        data: String,
        #[arg(short, long)]
        pretty: bool,
    },
    /// Delete a record by ID
    Delete { resource: Resource, id: String },
    /// Run a batch of operations from a JSON file ('-' for stdin)
    Batch {
        /// Path to a JSON array of operation items
        file: String,
        /// Capture per-operation errors as records instead of aborting
        #[arg(long)]
        continue_on_fail: bool,
        /// Pretty print the output
        #[arg(short, long)]
        pretty: bool,
    },
}

/// One entry of a batch file. `resource` may be the special tag "ai", in
/// which case `query` is classified instead of reading the other fields.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
struct BatchItem {
    resource: String,
    #[serde(default)]
    operation: Option<String>,
    #[serde(default)]
    id: Option<String>,
    #[serde(default)]
    fields: Option<Value>,
    #[serde(default)]
    filter: Option<String>,
    #[serde(default)]
    select: Option<String>,
    #[serde(default)]
    expand: Option<String>,
    #[serde(default)]
    orderby: Option<String>,
    #[serde(default)]
    return_all: bool,
    #[serde(default)]
    limit: Option<u32>,
    #[serde(default)]
    query: Option<String>,
}

impl BatchItem {
    fn into_operation(self, default_limit: u32) -> Result<Operation> {
        if self.resource == "ai" {
            let query = self
                .query
                .context("Batch items with resource 'ai' need a 'query' string")?;
            let ai_query = ai::parse_query(&query);
            return ai::plan(&ai_query).with_context(|| {
                format!(
                    "Query '{}' was classified as {}/{}, which needs structured parameters",
                    query,
                    ai_query.resource,
                    ai_query.operation.as_str()
                )
            });
        }

        let resource: Resource = self.resource.parse()?;
        let operation = self.operation.as_deref().unwrap_or("getAll");

        let require_id = |id: Option<String>| {
            id.with_context(|| format!("Operation '{}' needs an 'id'", operation))
        };
        let require_fields = |fields: Option<Value>| {
            fields.with_context(|| format!("Operation '{}' needs 'fields'", operation))
        };

        match operation {
            "getAll" | "search" | "list" => Ok(Operation::List {
                resource,
                options: QueryOptions {
                    filter: self.filter,
                    select: self.select,
                    expand: self.expand,
                    orderby: self.orderby,
                    top: None,
                    skip: None,
                },
                return_all: self.return_all,
                limit: Some(self.limit.unwrap_or(default_limit)),
            }),
            "get" => Ok(Operation::get(resource, require_id(self.id)?)),
            "create" => Ok(Operation::create(resource, require_fields(self.fields)?)),
            "update" => Ok(Operation::update(
                resource,
                require_id(self.id)?,
                require_fields(self.fields)?,
            )),
            "delete" => Ok(Operation::delete(resource, require_id(self.id)?)),
            other => anyhow::bail!(
                "Unknown operation '{}'. Expected getAll, search, get, create, update or delete",
                other
            ),
        }
    }
}

pub async fn handle(commands: RecordCommands) -> Result<()> {
    match commands.command {
        RecordSubcommands::List {
            resource,
            filter,
            select,
            expand,
            orderby,
            all,
            limit,
            pretty,
        } => list_command(resource, filter, select, expand, orderby, all, limit, pretty).await,
        RecordSubcommands::Get {
            resource,
            id,
            pretty,
        } => run_and_print(Operation::get(resource, id), pretty).await,
        RecordSubcommands::Create {
            resource,
            data,
            pretty,
        } => run_and_print(Operation::create(resource, parse_fields(&data)?), pretty).await,
        RecordSubcommands::Update {
            resource,
            id,
            data,
            pretty,
        } => run_and_print(Operation::update(resource, id, parse_fields(&data)?), pretty).await,
        RecordSubcommands::Delete { resource, id } => {
            run_and_print(Operation::delete(resource, id), false).await
        }
        RecordSubcommands::Batch {
            file,
            continue_on_fail,
            pretty,
        } => batch_command(file, continue_on_fail, pretty).await,
    }
}

async fn batch_command(file: String, continue_on_fail: bool, pretty: bool) -> Result<()> {
    let content = if file == "-" {
        std::io::read_to_string(std::io::stdin()).context("Failed to read batch from stdin")?
    } else {
        std::fs::read_to_string(&file)
            .with_context(|| format!("Failed to read batch file '{}'", file))?
    };

    let items: Vec<BatchItem> =
        serde_json::from_str(&content).context("Batch file must be a JSON array of operations")?;

    let (client, settings) = super::load_client()?;
    let operations = items
        .into_iter()
        .map(|item| item.into_operation(settings.default_list_limit))
        .collect::<Result<Vec<_>>>()?;

    info!("Running batch of {} operations", operations.len());
    let records = Operations::from_operations(operations)
        .execute(&client, continue_on_fail)
        .await?;
    super::print_records(&records, pretty)
}

#[allow(clippy::too_many_arguments)]
async fn list_command(
    resource: Resource,
    filter: Option<String>,
    select: Option<String>,
    expand: Option<String>,
    orderby: Option<String>,
    all: bool,
    limit: Option<u32>,
    pretty: bool,
) -> Result<()> {
    let (client, settings) = super::load_client()?;

    let options = QueryOptions {
        filter,
        select,
        expand,
        orderby,
        top: None,
        skip: None,
    };
    let operation = Operation::List {
        resource,
        options,
        return_all: all,
        limit: limit.or(Some(settings.default_list_limit)),
    };

    let records = operation.execute(&client).await?;
    info!("Fetched {} {} records", records.len(), resource);
    super::print_records(&records, pretty)
}

async fn run_and_print(operation: Operation, pretty: bool) -> Result<()> {
    let (client, _) = super::load_client()?;
    let records = operation.execute(&client).await?;
    super::print_records(&records, pretty)
}

fn parse_fields(data: &str) -> Result<Value> {
    let value: Value =
        serde_json::from_str(data).context("Fields must be a valid JSON document")?;
    if !value.is_object() {
        anyhow::bail!("Fields must be a JSON object, e.g. '{{\"FirstName\": \"John\"}}'");
    }
    Ok(value)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn item(value: Value) -> BatchItem {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn test_batch_item_defaults_to_get_all() {
        let operation = item(json!({"resource": "contact", "filter": "State eq 'NSW'"}))
            .into_operation(50)
            .unwrap();

        match operation {
            Operation::List {
                resource,
                options,
                return_all,
                limit,
            } => {
                assert_eq!(resource, Resource::Contact);
                assert_eq!(options.filter.as_deref(), Some("State eq 'NSW'"));
                assert!(!return_all);
                assert_eq!(limit, Some(50));
            }
            other => panic!("expected List, got {:?}", other),
        }
    }

    #[test]
    fn test_batch_item_requires_id_for_get() {
        let err = item(json!({"resource": "invoice", "operation": "get"}))
            .into_operation(50)
            .unwrap_err();
        assert!(err.to_string().contains("'id'"));
    }

    #[test]
    fn test_batch_item_rejects_unknown_operation() {
        let err = item(json!({"resource": "job", "operation": "upsert"}))
            .into_operation(50)
            .unwrap_err();
        assert!(err.to_string().contains("upsert"));
    }

    #[test]
    fn test_batch_item_ai_tag_plans_a_search() {
        let operation = item(json!({"resource": "ai", "query": "find all contacts in NSW"}))
            .into_operation(50)
            .unwrap();

        match operation {
            Operation::List { resource, options, .. } => {
                assert_eq!(resource, Resource::Contact);
                assert!(options.filter.unwrap().contains("NSW"));
            }
            other => panic!("expected List, got {:?}", other),
        }
    }

    #[test]
    fn test_parse_fields_rejects_non_objects() {
        assert!(parse_fields(r#"{"FirstName": "John"}"#).is_ok());
        assert!(parse_fields("[1, 2]").is_err());
        assert!(parse_fields("oops").is_err());
    }
}
