use anyhow::Result;
use colored::Colorize;
use log::info;
use serde_json::{Value, json};

use crate::ai;

/// Classify a free-text query, echo the interpretation, and execute the
/// resulting operation when the heuristics produced an executable one.
pub async fn ask_command(query: String, dry_run: bool, pretty: bool) -> Result<()> {
    let ai_query = ai::parse_query(&query);
    info!(
        "Interpreted query as {} / {}",
        ai_query.resource,
        ai_query.operation.as_str()
    );

    let interpretation = json!({
        "_aiInterpretation": {
            "query": query,
            "detectedResource": ai_query.resource.to_string(),
            "detectedOperation": ai_query.operation.as_str(),
            "extractedParameters": {
                "name": ai_query.parameters.name.clone(),
                "location": ai_query.parameters.location.clone(),
                "email": ai_query.parameters.email.clone(),
                "dateFilter": ai_query.parameters.date_filter.clone(),
                "filter": ai_query.parameters.filter.clone(),
            },
        }
    });

    let mut records: Vec<Value> = vec![interpretation];

    match ai::plan(&ai_query) {
        Some(operation) if !dry_run => {
            let (client, _) = super::load_client()?;
            records.extend(operation.execute(&client).await?);
        }
        Some(_) => {}
        None => {
            eprintln!(
                "{} This intent needs structured parameters; use 'insyte-cli diary availability' or 'insyte-cli diary book'.",
                "note:".yellow()
            );
        }
    }

    super::print_records(&records, pretty)
}
