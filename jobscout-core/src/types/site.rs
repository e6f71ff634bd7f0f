//! Job-board site tokens and the scalar-or-list query union.

use std::fmt;

use serde::{Deserialize, Serialize};

/// A job board the scrape orchestrator knows how to search.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Site {
    /// indeed.com
    Indeed,
    /// linkedin.com
    Linkedin,
    /// ziprecruiter.com
    ZipRecruiter,
    /// glassdoor.com
    Glassdoor,
    /// Google Jobs
    Google,
    /// bayt.com
    Bayt,
    /// naukri.com
    Naukri,
    /// bdjobs.com
    Bdjobs,
}

impl Site {
    /// Canonical lowercase token, as used in cache keys and upstream calls.
    pub fn as_str(&self) -> &'static str {
        match self {
            Site::Indeed => "indeed",
            Site::Linkedin => "linkedin",
            Site::ZipRecruiter => "zip_recruiter",
            Site::Glassdoor => "glassdoor",
            Site::Google => "google",
            Site::Bayt => "bayt",
            Site::Naukri => "naukri",
            Site::Bdjobs => "bdjobs",
        }
    }
}

impl fmt::Display for Site {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A query value that accepts either a single element or a list.
///
/// Canonicalization always widens to a list, so `x` and `[x]` render (and
/// therefore fingerprint) identically.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum OneOrMany<T> {
    /// A single value.
    One(T),
    /// A list of values.
    Many(Vec<T>),
}

impl<T: Clone> OneOrMany<T> {
    /// Widens to a list.
    pub fn to_vec(&self) -> Vec<T> {
        match self {
            OneOrMany::One(value) => vec![value.clone()],
            OneOrMany::Many(values) => values.clone(),
        }
    }
}
