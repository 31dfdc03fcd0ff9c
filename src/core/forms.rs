//! Typed form state for creating and editing records.
//!
//! Forms are where required fields are checked; the stores accept whatever
//! a form hands them.

use time::Date;

use crate::{
    error::FormError,
    models::{NewProspect, NewReport, Prospect, ProspectStatus},
};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProspectForm {
    business_name: String,
    contact_person: String,
    contact_info: String,
    status: ProspectStatus,
    last_contact_date: Date,
    notes: String,
}

impl ProspectForm {
    /// Blank form for a new prospect contacted `today`.
    pub fn new(today: Date) -> Self {
        Self {
            business_name: String::new(),
            contact_person: String::new(),
            contact_info: String::new(),
            status: ProspectStatus::Prospecting,
            last_contact_date: today,
            notes: String::new(),
        }
    }

    /// Form preloaded with an existing record, for editing.
    pub fn from_prospect(prospect: &Prospect) -> Self {
        Self {
            business_name: prospect.business_name.clone(),
            contact_person: prospect.contact_person.clone(),
            contact_info: prospect.contact_info.clone(),
            status: prospect.status,
            last_contact_date: prospect.last_contact_date,
            notes: prospect.notes.clone(),
        }
    }

    pub fn set_business_name(&mut self, value: impl Into<String>) -> &mut Self {
        self.business_name = value.into();
        self
    }

    pub fn set_contact_person(&mut self, value: impl Into<String>) -> &mut Self {
        self.contact_person = value.into();
        self
    }

    pub fn set_contact_info(&mut self, value: impl Into<String>) -> &mut Self {
        self.contact_info = value.into();
        self
    }

    pub fn set_status(&mut self, value: ProspectStatus) -> &mut Self {
        self.status = value;
        self
    }

    pub fn set_last_contact_date(&mut self, value: Date) -> &mut Self {
        self.last_contact_date = value;
        self
    }

    pub fn set_notes(&mut self, value: impl Into<String>) -> &mut Self {
        self.notes = value.into();
        self
    }

    pub fn validate(&self) -> Result<NewProspect, FormError> {
        if self.business_name.trim().is_empty() {
            return Err(FormError::Required("Business name"));
        }
        if self.contact_info.trim().is_empty() {
            return Err(FormError::Required("Contact info"));
        }
        Ok(NewProspect {
            business_name: self.business_name.clone(),
            contact_person: self.contact_person.clone(),
            contact_info: self.contact_info.clone(),
            status: self.status,
            last_contact_date: self.last_contact_date,
            notes: self.notes.clone(),
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportForm {
    date: Date,
    contacted: u32,
    follow_ups: u32,
    positive: u32,
    calls: u32,
    closed: u32,
    challenges: String,
    plan: String,
}

impl ReportForm {
    pub fn new(today: Date) -> Self {
        Self {
            date: today,
            contacted: 0,
            follow_ups: 0,
            positive: 0,
            calls: 0,
            closed: 0,
            challenges: String::new(),
            plan: String::new(),
        }
    }

    pub fn set_date(&mut self, value: Date) -> &mut Self {
        self.date = value;
        self
    }

    pub fn set_contacted(&mut self, value: u32) -> &mut Self {
        self.contacted = value;
        self
    }

    pub fn set_follow_ups(&mut self, value: u32) -> &mut Self {
        self.follow_ups = value;
        self
    }

    pub fn set_positive(&mut self, value: u32) -> &mut Self {
        self.positive = value;
        self
    }

    pub fn set_calls(&mut self, value: u32) -> &mut Self {
        self.calls = value;
        self
    }

    pub fn set_closed(&mut self, value: u32) -> &mut Self {
        self.closed = value;
        self
    }

    pub fn set_challenges(&mut self, value: impl Into<String>) -> &mut Self {
        self.challenges = value.into();
        self
    }

    pub fn set_plan(&mut self, value: impl Into<String>) -> &mut Self {
        self.plan = value.into();
        self
    }

    pub fn submit(&self) -> NewReport {
        NewReport {
            date: self.date,
            contacted: self.contacted,
            follow_ups: self.follow_ups,
            positive: self.positive,
            calls: self.calls,
            closed: self.closed,
            challenges: self.challenges.clone(),
            plan: self.plan.clone(),
        }
    }
}

/// Lenient counter input: an optional `+` then leading digits, saturating at
/// `u32::MAX`. Anything else reads as 0.
pub fn parse_count(input: &str) -> u32 {
    let input = input.trim();
    let input = input.strip_prefix('+').unwrap_or(input);
    input
        .bytes()
        .take_while(u8::is_ascii_digit)
        .fold(0u32, |n, d| n.saturating_mul(10).saturating_add(u32::from(d - b'0')))
}
