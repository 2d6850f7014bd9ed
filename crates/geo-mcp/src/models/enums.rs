//! Enumeration types for API and tool parameters.

use std::fmt;

use serde::{Deserialize, Serialize};

/// GEO collection (Entrez database) targeted by a query.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Collection {
    /// GEO Profiles: gene expression and molecular abundance profiles.
    #[serde(rename = "geoprofiles")]
    GeoProfiles,
    /// GEO DataSets: curated series, platforms and samples.
    #[serde(rename = "gds")]
    DataSets,
}

impl Collection {
    /// Entrez database name sent as the `db` parameter.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::GeoProfiles => "geoprofiles",
            Self::DataSets => "gds",
        }
    }
}

impl fmt::Display for Collection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
