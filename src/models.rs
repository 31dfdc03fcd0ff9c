use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};
use time::Date;

time::serde::format_description!(iso_date, Date, "[year]-[month]-[day]");

/// Pipeline stage of a prospect. Any stage may move to any other stage.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ProspectStatus {
    Prospecting,
    Contacted,
    Qualified,
    Pitched,
    Closed,
    Cold,
}

impl ProspectStatus {
    pub const ALL: [ProspectStatus; 6] = [
        ProspectStatus::Prospecting,
        ProspectStatus::Contacted,
        ProspectStatus::Qualified,
        ProspectStatus::Pitched,
        ProspectStatus::Closed,
        ProspectStatus::Cold,
    ];

    /// `Closed` and `Cold` prospects are no longer followed up.
    pub fn is_terminal(self) -> bool {
        matches!(self, ProspectStatus::Closed | ProspectStatus::Cold)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            ProspectStatus::Prospecting => "Prospecting",
            ProspectStatus::Contacted => "Contacted",
            ProspectStatus::Qualified => "Qualified",
            ProspectStatus::Pitched => "Pitched",
            ProspectStatus::Closed => "Closed",
            ProspectStatus::Cold => "Cold",
        }
    }
}

impl fmt::Display for ProspectStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ProspectStatus {
    type Err = anyhow::Error;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        ProspectStatus::ALL
            .into_iter()
            .find(|status| status.as_str().eq_ignore_ascii_case(value.trim()))
            .ok_or_else(|| anyhow::anyhow!("Invalid prospect status: {}", value))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Prospect {
    pub id: String,
    pub business_name: String,
    #[serde(default)]
    pub contact_person: String,
    pub contact_info: String,
    pub status: ProspectStatus,
    #[serde(with = "iso_date")]
    pub last_contact_date: Date,
    #[serde(default)]
    pub notes: String,
}

/// Every prospect field except the id. Used both for creation and for
/// replacing the fields of an existing record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewProspect {
    pub business_name: String,
    pub contact_person: String,
    pub contact_info: String,
    pub status: ProspectStatus,
    pub last_contact_date: Date,
    pub notes: String,
}

impl NewProspect {
    pub(crate) fn into_prospect(self, id: String) -> Prospect {
        Prospect {
            id,
            business_name: self.business_name,
            contact_person: self.contact_person,
            contact_info: self.contact_info,
            status: self.status,
            last_contact_date: self.last_contact_date,
            notes: self.notes,
        }
    }
}

impl From<&Prospect> for NewProspect {
    fn from(prospect: &Prospect) -> Self {
        Self {
            business_name: prospect.business_name.clone(),
            contact_person: prospect.contact_person.clone(),
            contact_info: prospect.contact_info.clone(),
            status: prospect.status,
            last_contact_date: prospect.last_contact_date,
            notes: prospect.notes.clone(),
        }
    }
}

/// A salesperson's activity summary for one day.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Report {
    pub id: String,
    #[serde(with = "iso_date")]
    pub date: Date,
    pub contacted: u32,
    pub follow_ups: u32,
    pub positive: u32,
    pub calls: u32,
    pub closed: u32,
    #[serde(default)]
    pub challenges: String,
    #[serde(default)]
    pub plan: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewReport {
    pub date: Date,
    pub contacted: u32,
    pub follow_ups: u32,
    pub positive: u32,
    pub calls: u32,
    pub closed: u32,
    pub challenges: String,
    pub plan: String,
}

impl NewReport {
    pub(crate) fn into_report(self, id: String) -> Report {
        Report {
            id,
            date: self.date,
            contacted: self.contacted,
            follow_ups: self.follow_ups,
            positive: self.positive,
            calls: self.calls,
            closed: self.closed,
            challenges: self.challenges,
            plan: self.plan,
        }
    }
}
