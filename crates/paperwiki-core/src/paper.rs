//! Paper records and the paper library
//!
//! The library is a YAML file listing the papers that filters select from.
//! Papers are read-only here: nothing in this crate mutates the library.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{PaperwikiError, Result};
use crate::filter::PaperFilter;

/// A single paper entry in the library
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Paper {
    /// The title of the paper, in full
    pub title: String,

    /// Short nickname, e.g. the name of the system
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub nickname: Option<String>,

    /// Authors, in order
    #[serde(default)]
    pub authors: Vec<String>,

    /// Where the paper was published, excluding year
    #[serde(default)]
    pub venue: String,

    /// Publication year, kept as a string
    #[serde(default)]
    pub year: String,
}

impl Paper {
    /// The reference naming this paper's wiki note: nickname when present,
    /// title otherwise.
    pub fn reference(&self) -> &str {
        self.nickname.as_deref().unwrap_or(&self.title)
    }
}

/// The set of papers selectable by filter
#[derive(Debug, Clone, Default)]
pub struct Library {
    pub papers: Vec<Paper>,
}

impl Library {
    /// Load the library from a YAML file
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                PaperwikiError::LibraryNotFound {
                    path: path.to_path_buf(),
                }
            } else {
                PaperwikiError::Io(e)
            }
        })?;

        let papers: Vec<Paper> =
            serde_yaml::from_str(&content).map_err(|e| PaperwikiError::InvalidLibrary {
                path: path.to_path_buf(),
                reason: e.to_string(),
            })?;

        Ok(Library { papers })
    }

    /// Papers matching the filter, in library order
    pub fn select(&self, filter: &PaperFilter) -> Vec<&Paper> {
        self.papers.iter().filter(|p| filter.matches(p)).collect()
    }
}
