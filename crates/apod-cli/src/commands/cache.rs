use anyhow::Result;
use apod_core::record::RecordStore;
use colored::Colorize;

use super::AppContext;

pub async fn list(context: &AppContext) -> Result<()> {
    let store = context.record_store()?;
    let keys = store.list_keys().await?;

    if keys.is_empty() {
        println!("{}", "No cached dates".bright_black());
        return Ok(());
    }

    for key in keys {
        match store.get(&key).await {
            Some(record) => println!(
                "{}  {}  {}",
                key.to_string().cyan(),
                record.title,
                record.best_url().bright_black()
            ),
            None => println!("{}  {}", key.to_string().cyan(), "(unreadable)".red()),
        }
    }
    Ok(())
}

pub fn path(context: &AppContext) -> Result<()> {
    let store = context.record_store()?;
    println!("{}", store.root().display());
    Ok(())
}
