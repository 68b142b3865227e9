//! Fetch option types

use crate::error::{Error, Result};

/// Parameters for one fetch run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchOptions {
    /// Author ids in fetch order; empty means no author filter
    pub authors: Vec<String>,
    /// Organization (team) filter
    pub organization: Option<String>,
    /// Record cap per author, always positive
    pub limit: usize,
}

impl FetchOptions {
    /// Create options, rejecting a zero limit
    pub fn new(authors: Vec<String>, organization: Option<String>, limit: usize) -> Result<Self> {
        if limit == 0 {
            return Err(Error::invalid_value("limit", "must be greater than 0"));
        }
        Ok(Self {
            authors,
            organization,
            limit,
        })
    }

    /// Options with no filters
    pub fn unfiltered(limit: usize) -> Result<Self> {
        Self::new(Vec::new(), None, limit)
    }

    /// True when neither authors nor an organization restrict the fetch
    pub fn is_unfiltered(&self) -> bool {
        self.authors.is_empty() && self.organization.is_none()
    }
}

/// Filter mode picked at the interactive prompt
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FilterChoice {
    /// Filter by one or more author ids
    Author,
    /// Filter by organization id
    Organization,
    /// Filter by authors within an organization
    Both,
    /// No filter
    All,
}

impl FilterChoice {
    /// Map a menu answer to a choice; anything unrecognised means `All`
    pub fn from_input(input: &str) -> Self {
        match input.trim() {
            "1" => Self::Author,
            "2" => Self::Organization,
            "3" => Self::Both,
            _ => Self::All,
        }
    }

    /// Whether author ids should be collected
    pub fn wants_authors(self) -> bool {
        matches!(self, Self::Author | Self::Both)
    }

    /// Whether an organization id should be collected
    pub fn wants_organization(self) -> bool {
        matches!(self, Self::Organization | Self::Both)
    }
}
