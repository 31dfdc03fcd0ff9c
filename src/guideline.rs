//! Salesperson guideline: role, workflow, follow-up cadence and rules.

use std::fmt::Write;

use crate::outreach::base_script;

pub struct Section {
    pub title: &'static str,
    pub blocks: &'static [Block],
}

pub struct Block {
    pub heading: Option<&'static str>,
    pub intro: &'static [&'static str],
    pub items: &'static [&'static str],
    pub numbered: bool,
}

pub const SECTIONS: &[Section] = &[
    Section {
        title: "Role Overview & Expectations",
        blocks: &[
            Block {
                heading: None,
                intro: &[
                    "Primary Responsibility: Identify potential clients, reach out professionally, present our services, and handle onboarding.",
                    "This is a part-time, commission-based role.",
                ],
                items: &[],
                numbered: false,
            },
            Block {
                heading: Some("Daily Expectations"),
                intro: &[],
                items: &[
                    "Reach out to 2-4 prospects every day.",
                    "Follow up with previously contacted prospects.",
                    "Record all communication activities.",
                    "Submit a daily report every night (before 9:00 PM).",
                ],
                numbered: false,
            },
        ],
    },
    Section {
        title: "Commission & Sales Workflow",
        blocks: &[
            Block {
                heading: Some("Commission Structure"),
                intro: &[
                    "You get 10% commission from the total payment of each successfully closed project, paid after the initial payment is received.",
                ],
                items: &[],
                numbered: false,
            },
            Block {
                heading: Some("Sales Workflow"),
                intro: &[],
                items: &[
                    "Client Research & Prospecting: Look for businesses with poor/no social media presence (clinics, restaurants, real estate, gyms, etc.).",
                    "Initial Outreach: Use DMs, calls, or email. Introduce yourself, the agency, and the value you offer.",
                    "Lead Qualification: Check for interest, budget, and need.",
                    "Pitching Services: Explain benefits clearly, offer 2-3 packages, and don't over-promise.",
                    "Handling Objections: Respond calmly with value propositions, past examples, and industry data.",
                    "Closing the Client: Gather brand info, goals, and access, then inform the agency owner.",
                ],
                numbered: true,
            },
        ],
    },
    Section {
        title: "Onboarding & Follow-Up",
        blocks: &[
            Block {
                heading: Some("Onboarding Process"),
                intro: &[],
                items: &[
                    "Send onboarding questionnaire.",
                    "Create a shared client group (WhatsApp/Telegram).",
                    "Collect brand assets (logo, photos, etc.).",
                    "Confirm package & payment method.",
                ],
                numbered: false,
            },
            Block {
                heading: Some("Follow-Up Rules"),
                intro: &[],
                items: &[
                    "1st follow-up: Next day",
                    "2nd follow-up: After 2 days",
                    "3rd follow-up: After 5 days",
                    "If no reply after 3rd attempt, move to \"Cold\" list.",
                ],
                numbered: false,
            },
        ],
    },
    Section {
        title: "Rules & Scripts",
        blocks: &[Block {
            heading: Some("What You Must Not Do"),
            intro: &[],
            items: &[
                "Do NOT be rude.",
                "Do NOT promise unrealistic results.",
                "Do NOT discuss pricing discounts without approval.",
                "Do NOT use personal opinions.",
            ],
            numbered: false,
        }],
    },
];

/// Heading of the script block appended to the last section.
const SCRIPT_HEADING: &str = "Sales Script (Short Example)";

/// Renders every section, or only the `section`-th (1-based) when given.
/// Returns `None` for an out-of-range section.
pub fn render(agency: &str, section: Option<usize>) -> Option<String> {
    let selected: Vec<(usize, &Section)> = match section {
        Some(n) => vec![(n, SECTIONS.get(n.checked_sub(1)?)?)],
        None => SECTIONS.iter().enumerate().map(|(i, s)| (i + 1, s)).collect(),
    };

    let mut out = String::from("Digital Marketing Agency Salesperson Guideline\n");
    for (number, section) in selected {
        // Writing into a String cannot fail.
        let _ = write_section(&mut out, number, section, agency);
    }
    Some(out)
}

fn write_section(
    out: &mut String,
    number: usize,
    section: &Section,
    agency: &str,
) -> std::fmt::Result {
    writeln!(out, "\n{}. {}", number, section.title)?;
    for block in section.blocks {
        if let Some(heading) = block.heading {
            writeln!(out, "\n  {}", heading)?;
        }
        for line in block.intro {
            writeln!(out, "  {}", line)?;
        }
        for (i, item) in block.items.iter().enumerate() {
            if block.numbered {
                writeln!(out, "  {}. {}", i + 1, item)?;
            } else {
                writeln!(out, "  - {}", item)?;
            }
        }
    }
    if number == SECTIONS.len() {
        writeln!(out, "\n  {}", SCRIPT_HEADING)?;
        writeln!(out, "  {}", base_script(agency))?;
    }
    Ok(())
}
