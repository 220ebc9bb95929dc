//! Comment period status helpers.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::lenient;

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct CommentPeriod {
    #[serde(rename = "_id", deserialize_with = "lenient::string")]
    pub id: Option<String>,
    #[serde(deserialize_with = "lenient::date")]
    pub start_date: Option<NaiveDate>,
    #[serde(deserialize_with = "lenient::date")]
    pub end_date: Option<NaiveDate>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CommentPeriodStatus {
    Open,
    NotOpen,
}

impl CommentPeriodStatus {
    pub fn code(self) -> &'static str {
        match self {
            Self::Open => "OP",
            Self::NotOpen => "NO",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Open => "Commenting Open",
            Self::NotOpen => "Not Open For Commenting",
        }
    }

    pub fn is_open(self) -> bool {
        self == Self::Open
    }
}

/// Only the first period is shown; several concurrent periods are not
/// supported.
pub fn current(periods: &[CommentPeriod]) -> Option<&CommentPeriod> {
    periods.first()
}

pub fn status(period: Option<&CommentPeriod>, today: NaiveDate) -> CommentPeriodStatus {
    let Some(CommentPeriod { start_date: Some(start), end_date: Some(end), .. }) = period else {
        return CommentPeriodStatus::NotOpen;
    };
    if *start <= today && today <= *end { CommentPeriodStatus::Open } else { CommentPeriodStatus::NotOpen }
}
