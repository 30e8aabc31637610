//! Sequential execution of operation batches
//!
//! Operations run strictly in input order, one at a time. A failing
//! operation either aborts the whole run (default) or, with
//! continue-on-failure enabled, contributes an `{"error": …}` record while
//! the remaining operations still run.

use anyhow::Result;
use log::warn;
use serde_json::{Value, json};

use super::operation::Operation;
use crate::api::client::InsyteClient;

#[derive(Debug, Clone, Default)]
pub struct Operations {
    operations: Vec<Operation>,
}

impl Operations {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_operations(operations: Vec<Operation>) -> Self {
        Self { operations }
    }

    pub fn add(mut self, operation: Operation) -> Self {
        self.operations.push(operation);
        self
    }

    pub fn len(&self) -> usize {
        self.operations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.operations.is_empty()
    }

    pub fn operations(&self) -> &[Operation] {
        &self.operations
    }

    /// Execute all operations in order and collect their output records.
    pub async fn execute(
        &self,
        client: &InsyteClient,
        continue_on_fail: bool,
    ) -> Result<Vec<Value>> {
        let mut results = Vec::new();

        for operation in &self.operations {
            match operation.execute(client).await {
                Ok(records) => results.extend(records),
                Err(err) if continue_on_fail => {
                    warn!("Operation failed, continuing: {:#}", err);
                    results.push(json!({"error": format!("{:#}", err)}));
                }
                Err(err) => return Err(err),
            }
        }

        Ok(results)
    }
}

impl From<Operation> for Operations {
    fn from(operation: Operation) -> Self {
        Self::from_operations(vec![operation])
    }
}

impl From<Vec<Operation>> for Operations {
    fn from(operations: Vec<Operation>) -> Self {
        Self::from_operations(operations)
    }
}

impl IntoIterator for Operations {
    type Item = Operation;
    type IntoIter = std::vec::IntoIter<Operation>;

    fn into_iter(self) -> Self::IntoIter {
        self.operations.into_iter()
    }
}

impl<'a> IntoIterator for &'a Operations {
    type Item = &'a Operation;
    type IntoIter = std::slice::Iter<'a, Operation>;

    fn into_iter(self) -> Self::IntoIter {
        self.operations.iter()
    }
}
