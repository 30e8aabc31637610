use anyhow::Result;
use colored::Colorize;

use crate::api::resources::Resource;

/// Print the selectable fields of a resource, in registry order.
pub fn fields_command(resource: Resource) -> Result<()> {
    let fields = resource.fields();

    if fields.is_empty() {
        println!("No selectable fields defined for '{}'", resource);
        return Ok(());
    }

    for field in fields {
        println!("{:<16} {}", field.name.bold(), field.display_name.dimmed());
    }

    Ok(())
}
