use std::collections::HashSet;

use anyhow::Result;
use pcokit_client::people::PeopleClient;
use pcokit_domain::constants::PAGE_DELAY;

use tracing::debug;

use super::confirm;

/// Execute the `delete-all` command: delete every person except the listed
/// ids. Deletes run sequentially, pausing between calls to stay under the
/// rate limit, and abort on the first failure.
pub async fn execute(skip_ids: &[String], assume_yes: bool) -> Result<()> {
    let client = PeopleClient::from_env()?;

    let people_ids = client.all_person_ids().await?;
    let skip_set: HashSet<&str> = skip_ids.iter().map(String::as_str).collect();
    let to_delete: Vec<&String> =
        people_ids.iter().filter(|id| !skip_set.contains(id.as_str())).collect();
    let total = to_delete.len();

    if total == 0 {
        println!("No people to delete.");
        return Ok(());
    }

    println!("Found {} people to delete (skipping {}).", total, skip_set.len());
    if !confirm(
        "Are you sure you want to delete these people? This operation is irreversible and dangerous!",
        assume_yes,
    ) {
        println!("Aborted.");
        return Ok(());
    }

    debug!(total, skipped = skip_set.len(), "starting person deletion");
    for (i, person_id) in to_delete.iter().enumerate() {
        client.delete_person(person_id).await?;
        println!("[{}/{}] Deleted person ID {}", i + 1, total, person_id);
        tokio::time::sleep(PAGE_DELAY).await;
    }

    Ok(())
}
