use anyhow::Result;
use apod_infrastructure::ConfigService;
use colored::Colorize;

use super::AppContext;

pub fn init(config_service: &ConfigService) -> Result<()> {
    let path = config_service.config_file().display();
    if config_service.init()? {
        println!("{} {}", "Created".green(), path);
    } else {
        println!("{} {}", "Already exists:".yellow(), path);
    }
    Ok(())
}

pub fn show(context: &AppContext) -> Result<()> {
    let mut config = context.config.clone();
    config.api.key = config.api.redacted_key();

    println!(
        "{}",
        format!("# {}", context.config_service.config_file().display()).bright_black()
    );
    print!("{}", toml::to_string_pretty(&config)?);
    if config.storage.cache_dir.is_none() {
        let records = context.config_service.records_dir(&context.config)?;
        println!(
            "{}",
            format!("# records: {}", records.display()).bright_black()
        );
    }
    Ok(())
}
