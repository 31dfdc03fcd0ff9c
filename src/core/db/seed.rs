use time::{Date, Duration};

use crate::models::{Prospect, ProspectStatus, Report};

fn days_before(today: Date, days: i64) -> Date {
    today.saturating_sub(Duration::days(days))
}

/// Sample prospects used when nothing usable is stored.
pub fn seed_prospects(today: Date) -> Vec<Prospect> {
    vec![
        Prospect {
            id: "1".to_string(),
            business_name: "Innovate Tech".to_string(),
            contact_person: "John Doe".to_string(),
            contact_info: "john.doe@innovate.com".to_string(),
            status: ProspectStatus::Pitched,
            last_contact_date: days_before(today, 3),
            notes: "Interested in the premium package. Follow up on Friday.".to_string(),
        },
        Prospect {
            id: "2".to_string(),
            business_name: "Sunrise Cafe".to_string(),
            contact_person: "Jane Smith".to_string(),
            contact_info: "555-1234".to_string(),
            status: ProspectStatus::Contacted,
            last_contact_date: days_before(today, 1),
            notes: "Initial contact made. Sent brochure.".to_string(),
        },
        Prospect {
            id: "3".to_string(),
            business_name: "Apex Gym".to_string(),
            contact_person: "Mike Ross".to_string(),
            contact_info: "@apexgym".to_string(),
            status: ProspectStatus::Closed,
            last_contact_date: today,
            notes: "Closed the deal for social media management.".to_string(),
        },
    ]
}

pub fn seed_reports(today: Date) -> Vec<Report> {
    vec![Report {
        id: "1".to_string(),
        date: days_before(today, 1),
        contacted: 15,
        follow_ups: 5,
        positive: 3,
        calls: 2,
        closed: 1,
        challenges: "Client had budget concerns.".to_string(),
        plan: "Focus on value proposition tomorrow.".to_string(),
    }]
}
