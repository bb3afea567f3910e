use anyhow::Result;
use pcokit_client::people::{built_in_field_by_name, PeopleClient};
use serde_json::Value;

/// Execute the `get-field-data` command: print every recorded value for a
/// built-in or custom field.
pub async fn execute(field_name: &str) -> Result<()> {
    let client = PeopleClient::from_env()?;

    if let Some(built_in) = built_in_field_by_name(field_name) {
        println!("Built-in field '{}' (slug: {})", field_name, built_in.slug);
        let people = client.people(&[]).await?;
        println!("Data for built-in field '{}':", field_name);
        for person in &people {
            let value = person.attr(built_in.slug).cloned().unwrap_or(Value::Null);
            println!(
                "Person ID: {}, Person Name: {}, Value: {}",
                person.id_str(),
                person.attr_str("name").unwrap_or(""),
                value
            );
        }
        return Ok(());
    }

    let field_id = client.field_definition_id(field_name).await?;
    println!("Custom field definition ID for '{}': {}", field_name, field_id);

    let field_data = client.field_data_by_definition(&field_id).await?;
    println!("Data for custom field '{}':", field_name);
    for entry in &field_data {
        let person_id = entry
            .relationships
            .as_ref()
            .and_then(|r| r.pointer("/customizable/data/id"))
            .and_then(Value::as_str)
            .unwrap_or("");
        println!(
            "Person ID: {}, Value: {}, Field Data ID: {}",
            person_id,
            entry.attr_str("value").unwrap_or(""),
            entry.id_str()
        );
    }

    Ok(())
}
