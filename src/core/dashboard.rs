use time::{OffsetDateTime, UtcOffset};

use crate::{
    core::followup::{self, FollowUp},
    models::{Prospect, ProspectStatus},
};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DueFollowUp<'a> {
    pub prospect: &'a Prospect,
    pub tier: FollowUp,
}

impl DueFollowUp<'_> {
    pub fn reason(&self) -> &'static str {
        self.tier.label().unwrap_or_default()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Dashboard<'a> {
    pub contacted_today: usize,
    pub closed_this_month: usize,
    pub total_active: usize,
    /// In prospect-list order.
    pub follow_ups_due: Vec<DueFollowUp<'a>>,
}

/// Daily counters and due follow-ups. `now` is read in UTC.
pub fn summarize(now: OffsetDateTime, prospects: &[Prospect]) -> Dashboard<'_> {
    let today = now.to_offset(UtcOffset::UTC).date();
    let mut dashboard = Dashboard::default();

    for prospect in prospects {
        let contacted = prospect.last_contact_date;
        if contacted == today {
            dashboard.contacted_today += 1;
        }
        if prospect.status == ProspectStatus::Closed
            && contacted.year() == today.year()
            && contacted.month() == today.month()
        {
            dashboard.closed_this_month += 1;
        }
        if !prospect.status.is_terminal() {
            dashboard.total_active += 1;
        }

        let tier = followup::classify(now, prospect);
        if tier.is_due() {
            dashboard.follow_ups_due.push(DueFollowUp { prospect, tier });
        }
    }

    dashboard
}
