use anyhow::Result;
use pcokit_client::people::PeopleClient;

use super::confirm;

/// Execute the `delete-field` command: delete every datum recorded for one
/// custom field. Aborts on the first failed delete.
pub async fn execute(field_name: &str, assume_yes: bool) -> Result<()> {
    let client = PeopleClient::from_env()?;

    let field_id = client.field_definition_id(field_name).await?;
    let field_data = client.field_data_by_definition(&field_id).await?;
    let total = field_data.len();

    if total == 0 {
        println!("No data to delete for field '{}'.", field_name);
        return Ok(());
    }

    println!("Found {} field data entries to delete for '{}'.", total, field_name);
    if !confirm(
        &format!(
            "Are you sure you want to delete all data for field '{}'? This operation is irreversible!",
            field_name
        ),
        assume_yes,
    ) {
        println!("Aborted.");
        return Ok(());
    }

    for (i, entry) in field_data.iter().enumerate() {
        client.delete_field_datum(entry.id_str()).await?;
        println!("[{}/{}] Deleted field data ID {}", i + 1, total, entry.id_str());
    }

    Ok(())
}
