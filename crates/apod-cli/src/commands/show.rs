use std::sync::Arc;

use anyhow::Result;
use apod_core::record::DateKey;
use apod_core::resolution::{NoopObserver, ResolutionSnapshot};

use super::AppContext;
use crate::render;

pub async fn run(context: &AppContext, raw: &str, detail: bool) -> Result<()> {
    let Some(key) = DateKey::parse_input(raw, DateKey::today())? else {
        println!("{}", render::snapshot(&ResolutionSnapshot::unselected(), detail));
        return Ok(());
    };

    let resolver = context.resolver(Arc::new(NoopObserver))?;
    let snapshot = resolver.resolve(key).await;
    println!("{}", render::snapshot(&snapshot, detail));

    Ok(())
}
