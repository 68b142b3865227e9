//! Account identity lookup
//!
//! Reports the caller's author id and team memberships so they can be used
//! as `AUTHOR_ID` / `ORGANIZATION_ID` filters.

use crate::api::{Account, ChartSource, Team};
use crate::config::{AUTHOR_ID_ENV, ORGANIZATION_ID_ENV};
use crate::error::Result;
use std::fmt::Write as _;
use tracing::warn;

const RULE: &str = "═══════════════════════════════════════════════════════";

/// The caller's account and the teams it belongs to
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Identity {
    pub account: Account,
    pub teams: Vec<Team>,
}

impl Identity {
    /// First team, used in the usage hint
    pub fn first_team(&self) -> Option<&Team> {
        self.teams.first()
    }

    /// Human-readable report with usage hints
    pub fn render(&self) -> String {
        let id = self.account.id.as_deref().unwrap_or_default();
        let mut out = String::new();

        let _ = writeln!(out, "{RULE}\n  YOUR DATAWRAPPER ACCOUNT\n{RULE}\n");
        let _ = writeln!(
            out,
            "  Name:      {}",
            self.account
                .name
                .as_deref()
                .filter(|n| !n.is_empty())
                .unwrap_or("Not set")
        );
        let _ = writeln!(
            out,
            "  Email:     {}",
            self.account.email.as_deref().unwrap_or_default()
        );
        let _ = writeln!(out, "  Author ID: {id}\n");

        if !self.teams.is_empty() {
            let _ = writeln!(out, "  Teams/Organizations:");
            for team in &self.teams {
                let _ = writeln!(
                    out,
                    "    - {} (ID: {})",
                    team.name.as_deref().unwrap_or_default(),
                    team.id.as_deref().unwrap_or_default()
                );
            }
        }

        let _ = writeln!(out, "\n{RULE}\n  HOW TO USE THESE IDs\n{RULE}\n");
        let _ = writeln!(out, "  To fetch only YOUR charts:");
        let _ = writeln!(out, "    {AUTHOR_ID_ENV}={id} chartfeed fetch\n");

        if let Some(team_id) = self.first_team().and_then(|t| t.id.as_deref()) {
            let _ = writeln!(out, "  To fetch charts from a specific team:");
            let _ = writeln!(out, "    {ORGANIZATION_ID_ENV}={team_id} chartfeed fetch\n");
        }

        let _ = writeln!(
            out,
            "  Or set these in chartfeed.yaml for permanent configuration."
        );
        out
    }
}

/// Look up the caller's profile and teams.
///
/// A profile failure is fatal. A teams failure is logged and treated as no
/// teams, since the endpoint is not available to every account.
pub async fn lookup_identity(source: &dyn ChartSource) -> Result<Identity> {
    let account = source.fetch_me().await?;

    let listed = match source.fetch_teams().await {
        Ok(teams) => teams,
        Err(e) => {
            warn!(error = %e, "Teams lookup failed, continuing without teams");
            Vec::new()
        }
    };

    let teams = match &account.teams {
        Some(teams) if !teams.is_empty() => teams.clone(),
        _ => listed,
    };

    Ok(Identity { account, teams })
}
