use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::error::CoreError;

/// One of the four published MCDA drug-harm studies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[serde(rename_all = "lowercase")]
#[ts(export)]
pub enum StudyId {
    /// Nutt et al. (2010), The Lancet.
    Uk2010,
    /// Bonomo et al. (2019).
    Australia2019,
    /// Crossin et al. (2023).
    NewZealand2023,
    /// van Amsterdam et al. (2015).
    Europe2015,
}

impl StudyId {
    /// Display order used by every multi-study view.
    pub const ALL: [StudyId; 4] = [
        StudyId::Uk2010,
        StudyId::Australia2019,
        StudyId::NewZealand2023,
        StudyId::Europe2015,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            StudyId::Uk2010 => "uk2010",
            StudyId::Australia2019 => "australia2019",
            StudyId::NewZealand2023 => "newzealand2023",
            StudyId::Europe2015 => "europe2015",
        }
    }

    /// URL-friendly slug used for routing.
    pub fn slug(&self) -> &'static str {
        match self {
            StudyId::Uk2010 => "uk-2010",
            StudyId::Australia2019 => "australia-2019",
            StudyId::NewZealand2023 => "new-zealand-2023",
            StudyId::Europe2015 => "europe-2015",
        }
    }

    pub fn from_slug(slug: &str) -> Option<StudyId> {
        StudyId::ALL.into_iter().find(|id| id.slug() == slug)
    }
}

impl fmt::Display for StudyId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Accepts either the id (`uk2010`) or the slug (`uk-2010`).
impl FromStr for StudyId {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        StudyId::ALL
            .into_iter()
            .find(|id| id.as_str() == s)
            .or_else(|| StudyId::from_slug(s))
            .ok_or_else(|| CoreError::UnknownStudy(s.to_string()))
    }
}

/// Citation and presentation metadata for a study.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct StudyInfo {
    pub name: String,
    pub full_name: String,
    pub journal: String,
    /// DOI link to the publication.
    pub link: String,
    pub color: String,
    pub description: String,
    /// Size of the expert panel that scored the drugs.
    pub experts: u32,
    /// Editorial confidence rating, 1–10.
    pub trust: u8,
}
