//! Read-only projection of saved brews into labeled text.

use std::fmt;

use crate::api::Brew;
use crate::state::BrewFeed;

/// A saved brew as the feed shows it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BrewSummary {
    pub lines: Vec<String>,
}

impl BrewSummary {
    /// Labels are matched verbatim by UI tests; keep the order.
    pub fn of(brew: &Brew) -> Self {
        Self {
            lines: vec![
                format!("Origin: {}", brew.origin),
                format!("Roaster: {}", brew.roaster),
                format!("Technique: {}", brew.technique),
                format!("Water: {}", brew.water_dose),
                format!("Temperature: {}", brew.temperature),
                format!("Coffee Weight: {}", brew.coffee_weight),
                format!("Grind Size: {}", brew.grind_size),
            ],
        }
    }

    pub fn contains(&self, line: &str) -> bool {
        self.lines.iter().any(|l| l == line)
    }
}

impl fmt::Display for BrewSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.lines.join("\n"))
    }
}

/// Summaries for every brew in the feed, in feed order.
pub fn feed_view(feed: &BrewFeed) -> Vec<BrewSummary> {
    feed.brews.iter().map(BrewSummary::of).collect()
}
