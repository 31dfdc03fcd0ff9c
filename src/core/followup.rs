//! Follow-up scheduling.
//!
//! A prospect that is neither `Closed` nor `Cold` gets three reminders after
//! its last contact: the first from day 1, the second from day 3 and the third
//! from day 5. From day 10 on nothing is due; such prospects are expected to be
//! moved to `Cold` by hand.

use std::fmt;

use time::{Date, OffsetDateTime};

use crate::models::Prospect;

const SECONDS_PER_DAY: f64 = 86_400.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FollowUp {
    NotDue,
    FirstFollowUp,
    SecondFollowUp,
    ThirdFollowUp,
}

impl FollowUp {
    pub fn is_due(self) -> bool {
        self != FollowUp::NotDue
    }

    /// Human-readable tier name, `None` when nothing is due.
    pub fn label(self) -> Option<&'static str> {
        match self {
            FollowUp::NotDue => None,
            FollowUp::FirstFollowUp => Some("1st Follow-up (1 day)"),
            FollowUp::SecondFollowUp => Some("2nd Follow-up (3 days)"),
            FollowUp::ThirdFollowUp => Some("3rd Follow-up (5 days)"),
        }
    }
}

impl fmt::Display for FollowUp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label().unwrap_or("Not due"))
    }
}

/// Days since the start (UTC midnight) of `last_contact`, any partial day
/// rounded up. Negative when the contact date lies in the future.
pub fn elapsed_days(now: OffsetDateTime, last_contact: Date) -> i64 {
    let elapsed = now - last_contact.midnight().assume_utc();
    (elapsed.as_seconds_f64() / SECONDS_PER_DAY).ceil() as i64
}

/// Tier for a whole number of elapsed days. Ranges are half-open.
pub fn tier_for_elapsed_days(days: i64) -> FollowUp {
    match days {
        1..3 => FollowUp::FirstFollowUp,
        3..5 => FollowUp::SecondFollowUp,
        5..10 => FollowUp::ThirdFollowUp,
        _ => FollowUp::NotDue,
    }
}

pub fn classify(now: OffsetDateTime, prospect: &Prospect) -> FollowUp {
    if prospect.status.is_terminal() {
        return FollowUp::NotDue;
    }
    tier_for_elapsed_days(elapsed_days(now, prospect.last_contact_date))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ProspectStatus;
    use time::{
        Duration,
        macros::{date, datetime},
    };

    fn prospect(status: ProspectStatus, last_contact_date: Date) -> Prospect {
        Prospect {
            id: "p".to_string(),
            business_name: "Sunrise Cafe".to_string(),
            contact_person: String::new(),
            contact_info: "555-1234".to_string(),
            status,
            last_contact_date,
            notes: String::new(),
        }
    }

    #[test]
    fn test_whole_day_boundaries() {
        let expected = [
            (-1, FollowUp::NotDue),
            (0, FollowUp::NotDue),
            (1, FollowUp::FirstFollowUp),
            (2, FollowUp::FirstFollowUp),
            (3, FollowUp::SecondFollowUp),
            (4, FollowUp::SecondFollowUp),
            (5, FollowUp::ThirdFollowUp),
            (9, FollowUp::ThirdFollowUp),
            (10, FollowUp::NotDue),
            (45, FollowUp::NotDue),
        ];
        for (days, tier) in expected {
            assert_eq!(tier_for_elapsed_days(days), tier, "{} days", days);
        }
    }

    #[test]
    fn test_partial_days_round_up() {
        let last = date!(2024 - 06 - 10);
        let start = last.midnight().assume_utc();

        // 2.9 days counts as 3.
        let now = start + Duration::days(2) + Duration::minutes(1296);
        assert_eq!(elapsed_days(now, last), 3);
        assert_eq!(classify(now, &prospect(ProspectStatus::Contacted, last)), FollowUp::SecondFollowUp);

        // 4.99 days counts as 5.
        let now = start + Duration::days(4) + Duration::minutes(1426);
        assert_eq!(classify(now, &prospect(ProspectStatus::Contacted, last)), FollowUp::ThirdFollowUp);

        // 9.99 days counts as 10, past the last tier.
        let now = start + Duration::days(9) + Duration::minutes(1426);
        assert_eq!(classify(now, &prospect(ProspectStatus::Contacted, last)), FollowUp::NotDue);
    }

    #[test]
    fn test_same_day_contact_at_midnight_is_not_due() {
        let now = datetime!(2024 - 06 - 10 0:00 UTC);
        let p = prospect(ProspectStatus::Prospecting, date!(2024 - 06 - 10));
        assert_eq!(elapsed_days(now, p.last_contact_date), 0);
        assert_eq!(classify(now, &p), FollowUp::NotDue);
    }

    #[test]
    fn test_future_contact_date_is_not_due() {
        let now = datetime!(2024 - 06 - 10 0:00 UTC);
        let p = prospect(ProspectStatus::Qualified, date!(2024 - 06 - 14));
        assert_eq!(classify(now, &p), FollowUp::NotDue);
    }

    #[test]
    fn test_terminal_statuses_never_due() {
        let now = datetime!(2024 - 06 - 10 0:00 UTC);
        for days in 0..12 {
            let last = date!(2024 - 06 - 10) - Duration::days(days);
            for status in [ProspectStatus::Closed, ProspectStatus::Cold] {
                assert_eq!(classify(now, &prospect(status, last)), FollowUp::NotDue);
            }
        }
    }

    #[test]
    fn test_offset_now_is_measured_from_utc_midnight() {
        // 2024-06-13 01:00 at +02:00 is 2024-06-12 23:00 UTC: 2.96 days after the 10th.
        let now = datetime!(2024 - 06 - 13 1:00 +2);
        assert_eq!(elapsed_days(now, date!(2024 - 06 - 10)), 3);
    }

    #[test]
    fn test_labels() {
        assert_eq!(FollowUp::NotDue.label(), None);
        assert_eq!(FollowUp::SecondFollowUp.to_string(), "2nd Follow-up (3 days)");
        assert!(FollowUp::ThirdFollowUp.is_due());
    }
}
