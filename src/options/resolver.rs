//! Option resolution
//!
//! First match wins: the fetch-all flag, then statically configured
//! filters, then interactive prompts.

use super::prompt::OptionSource;
use super::types::{FetchOptions, FilterChoice};
use crate::config::{Config, AUTHOR_ID_ENV, ORGANIZATION_ID_ENV};
use crate::error::{Error, Result};
use tracing::{debug, warn};

/// Split a comma-separated id list, trimming and dropping empty segments
pub fn parse_id_list(input: &str) -> Vec<String> {
    input
        .split(',')
        .map(str::trim)
        .filter(|id| !id.is_empty())
        .map(String::from)
        .collect()
}

/// Resolve fetch options for this run
pub fn resolve_options(
    fetch_all: bool,
    config: &Config,
    source: &mut dyn OptionSource,
) -> Result<FetchOptions> {
    if fetch_all {
        debug!("Fetch-all requested, skipping filters");
        return FetchOptions::unfiltered(config.max_charts);
    }

    if config.has_static_filter() {
        debug!("Using statically configured filters");
        let organization = Some(config.organization_id.clone()).filter(|org| !org.is_empty());
        return FetchOptions::new(
            parse_id_list(&config.author_id),
            organization,
            config.max_charts,
        );
    }

    resolve_interactive(config, source)
}

/// [`resolve_options`] on the blocking thread pool, for sources that read
/// from a terminal while an async runtime is running
pub async fn resolve_options_blocking<S, F>(
    fetch_all: bool,
    config: Config,
    make_source: F,
) -> Result<FetchOptions>
where
    S: OptionSource,
    F: FnOnce() -> S + Send + 'static,
{
    tokio::task::spawn_blocking(move || {
        let mut source = make_source();
        resolve_options(fetch_all, &config, &mut source)
    })
    .await
    .map_err(|e| Error::prompt(format!("Prompt task failed: {e}")))?
}

fn resolve_interactive(config: &Config, source: &mut dyn OptionSource) -> Result<FetchOptions> {
    source.say("Chartfeed - Fetch Datawrapper Charts\n");
    source.say("How do you want to filter charts?\n");
    source.say("  1. By author ID(s) - your personal charts");
    source.say("  2. By organization - all team charts");
    source.say("  3. Both author(s) and organization");
    source.say("  4. Fetch all accessible charts\n");

    let choice = FilterChoice::from_input(&source.ask("Enter choice (1-4): ")?);

    let authors = if choice.wants_authors() {
        parse_id_list(&source.ask(
            "Author ID(s) - comma-separated for multiple (e.g., 508399,672102): ",
        )?)
    } else {
        Vec::new()
    };

    let organization = if choice.wants_organization() {
        Some(source.ask("Organization ID: ")?).filter(|org| !org.is_empty())
    } else {
        None
    };

    let limit_input = source.ask(&format!(
        "Max charts to fetch (default {}): ",
        config.max_charts
    ))?;
    let limit = parse_limit(&limit_input).unwrap_or_else(|| {
        if !limit_input.is_empty() {
            warn!(input = %limit_input, "Ignoring invalid limit, using {}", config.max_charts);
        }
        config.max_charts
    });

    let options = FetchOptions::new(authors, organization, limit)?;
    if let Some(tip) = persistence_tip(&options) {
        source.say(&tip);
    }
    Ok(options)
}

/// Parse a positive limit from the leading digits of the answer, so
/// `150 charts` reads as 150. No digits, or zero, yields `None`.
fn parse_limit(input: &str) -> Option<usize> {
    let input = input.trim();
    let digits = input
        .find(|c: char| !c.is_ascii_digit())
        .map_or(input, |end| &input[..end]);
    digits.parse::<usize>().ok().filter(|n| *n > 0)
}

/// Hint for making interactively chosen filters permanent
pub fn persistence_tip(options: &FetchOptions) -> Option<String> {
    if options.is_unfiltered() {
        return None;
    }

    let mut tip = String::from("\nTip: set these to skip prompts next time:");
    if !options.authors.is_empty() {
        tip.push_str(&format!(
            "\n  {AUTHOR_ID_ENV}={}",
            options.authors.join(",")
        ));
    }
    if let Some(org) = &options.organization {
        tip.push_str(&format!("\n  {ORGANIZATION_ID_ENV}={org}"));
    }
    tip.push('\n');
    Some(tip)
}
