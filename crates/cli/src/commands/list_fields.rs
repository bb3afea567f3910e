use anyhow::Result;
use pcokit_client::people::{PeopleClient, BUILT_IN_FIELDS};

use super::clip;

/// Execute the `list-fields` command: print built-in and custom field
/// definitions.
pub async fn execute() -> Result<()> {
    let client = PeopleClient::from_env()?;
    let custom_fields = client.field_definitions(&[]).await?;

    println!("Built-in Field Definitions:");
    println!("{:<30} {:<20} {:<15}", "Name", "Slug", "Data Type");
    println!("{}", "-".repeat(85));
    let mut built_in: Vec<_> = BUILT_IN_FIELDS.iter().collect();
    built_in.sort_by_key(|f| f.name);
    for field in built_in {
        println!(
            "{:<30} {:<20} {:<15}",
            clip(field.name, 28),
            clip(field.slug, 18),
            field.data_type
        );
    }

    println!();
    println!("Custom Field Definitions:");
    println!("{:<10} {:<30} {:<20} {:<15} {:<10}", "ID", "Name", "Slug", "Data Type", "Sequence");
    println!("{}", "-".repeat(85));
    if custom_fields.is_empty() {
        println!("No custom field definitions found.");
        return Ok(());
    }

    let mut custom_fields = custom_fields;
    custom_fields.sort_by_key(|f| {
        f.attr("sequence").and_then(serde_json::Value::as_i64).unwrap_or(0)
    });
    for field in &custom_fields {
        let sequence = field
            .attr("sequence")
            .and_then(serde_json::Value::as_i64)
            .map_or_else(|| "N/A".to_string(), |s| s.to_string());
        println!(
            "{:<10} {:<30} {:<20} {:<15} {:<10}",
            field.id_str(),
            clip(field.attr_str("name").unwrap_or(""), 28),
            clip(field.attr_str("slug").unwrap_or(""), 18),
            field.attr_str("data_type").unwrap_or(""),
            sequence
        );
    }

    Ok(())
}
