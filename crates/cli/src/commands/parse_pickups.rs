use anyhow::Result;
use pcokit_client::people::PeopleClient;

const PICKUPS_FIELD: &str = "Authorized Pickups";
const PICKUPS_PARSED_FIELD: &str = "Authorized Pickups Parsed";

/// Execute the `parse-authorized-pickups` command.
///
/// Reads a person's raw comma-separated pickup list, resolves each pickup's
/// email and phone from the directory, and writes the enriched
/// `name;email;phone|...` value into the parsed companion field (updating
/// an existing entry or creating a new one).
pub async fn execute(person_name: &str) -> Result<()> {
    let client = PeopleClient::from_env()?;

    let pickups_id = client.field_definition_id(PICKUPS_FIELD).await?;
    let parsed_id = client.field_definition_id(PICKUPS_PARSED_FIELD).await?;

    let people =
        client.people(&[("where[search_name]", person_name), ("per_page", "1")]).await?;
    let Some(person) = people.first() else {
        println!("No person found with name '{}'", person_name);
        return Ok(());
    };
    let person_id = person.id_str().to_string();

    let field_data = client
        .field_data_for_person(&person_id, &[("where[field_definition_id]", &pickups_id)])
        .await?;
    if field_data.is_empty() {
        println!(
            "No '{}' data found for person '{}' (ID: {})",
            PICKUPS_FIELD, person_name, person_id
        );
        return Ok(());
    }

    for entry in &field_data {
        let raw_value = entry.attr_str("value").unwrap_or("");
        let names: Vec<&str> =
            raw_value.split(',').map(str::trim).filter(|n| !n.is_empty()).collect();

        let mut processed = Vec::with_capacity(names.len());
        for name in names {
            let (email, phone) = client.search_contact(name).await?;
            // Missing contact details are rendered as a literal 0 so the
            // downstream check-in system sees an explicit placeholder.
            let email = if email.is_empty() { "0".to_string() } else { email };
            let phone = if phone.is_empty() { "0".to_string() } else { phone };
            processed.push(format!("{};{};{}", name, email, phone));
        }
        let mut entry_value = processed.join("|");
        if !entry_value.is_empty() && !entry_value.ends_with('|') {
            entry_value.push('|');
        }

        let existing_parsed = client
            .field_data_for_person(&person_id, &[("where[field_definition_id]", &parsed_id)])
            .await?;
        if let Some(existing) = existing_parsed.first() {
            client.update_field_datum(existing.id_str(), &parsed_id, &entry_value).await?;
            println!("Updated existing parsed entry for person {}: {}", person_id, entry_value);
        } else {
            client.create_field_datum(&person_id, &parsed_id, &entry_value).await?;
            println!("Created parsed entry for person {}: {}", person_id, entry_value);
        }
    }

    Ok(())
}
