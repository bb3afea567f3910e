use anyhow::Result;
use pcokit_client::publishing::PublishingClient;

/// Execute the `create-episode` command: create an episode under the first
/// publishing channel (ordered by name).
pub async fn execute(title: &str) -> Result<()> {
    let client = PublishingClient::from_env()?;

    let channel_id = client.first_channel_id().await?;
    let episode = client.create_episode(title, &channel_id, None).await?;

    println!(
        "Created episode '{}' (ID {}) under channel {}",
        episode.attr_str("title").unwrap_or(title),
        episode.id_str(),
        channel_id
    );

    Ok(())
}
