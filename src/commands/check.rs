//! Validate the content store

use anyhow::{Context, Result};

use crate::content::check::{check_content, Severity};
use crate::Site;

/// Print every issue; fail when any of them is an error
pub async fn run(site: &Site) -> Result<()> {
    let issues = check_content(&site.store)
        .await
        .context("failed to load the content indices")?;

    for issue in &issues {
        println!("{}", issue);
    }

    let errors = issues
        .iter()
        .filter(|i| i.severity == Severity::Error)
        .count();
    let warnings = issues.len() - errors;

    if errors > 0 {
        anyhow::bail!("{} errors, {} warnings", errors, warnings);
    }

    println!("Content OK ({} warnings)", warnings);
    Ok(())
}
