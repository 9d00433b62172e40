//! Campaign goal tags and the user's goal selection.

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;

/// Goal a campaign can pursue.
///
/// Declaration order is the canonical display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum CampaignGoal {
    IncreaseSales,
    IncreaseDownloads,
    IncreaseViews,
    Other,
}

impl CampaignGoal {
    /// All goals in display order.
    pub const ALL: [CampaignGoal; 4] = [
        CampaignGoal::IncreaseSales,
        CampaignGoal::IncreaseDownloads,
        CampaignGoal::IncreaseViews,
        CampaignGoal::Other,
    ];

    /// Wire tag, e.g. `increase-sales`.
    pub fn tag(&self) -> &'static str {
        match self {
            CampaignGoal::IncreaseSales => "increase-sales",
            CampaignGoal::IncreaseDownloads => "increase-downloads",
            CampaignGoal::IncreaseViews => "increase-views",
            CampaignGoal::Other => "other",
        }
    }

    /// Human readable label.
    pub fn label(&self) -> &'static str {
        match self {
            CampaignGoal::IncreaseSales => "Increase Sales",
            CampaignGoal::IncreaseDownloads => "Increase Downloads",
            CampaignGoal::IncreaseViews => "Increase Views",
            CampaignGoal::Other => "Other",
        }
    }
}

impl fmt::Display for CampaignGoal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

impl FromStr for CampaignGoal {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        CampaignGoal::ALL
            .into_iter()
            .find(|goal| goal.tag() == s)
            .ok_or_else(|| format!("unknown campaign goal: {}", s))
    }
}

/// Selected goals plus the free-text label used when `Other` is selected.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GoalSelection {
    goals: BTreeSet<CampaignGoal>,
    other_label: String,
}

impl GoalSelection {
    /// Selects or deselects a goal.
    pub fn set(&mut self, goal: CampaignGoal, selected: bool) {
        if selected {
            self.goals.insert(goal);
        } else {
            self.goals.remove(&goal);
        }
    }

    pub fn set_other_label(&mut self, label: impl Into<String>) {
        self.other_label = label.into();
    }

    pub fn contains(&self, goal: CampaignGoal) -> bool {
        self.goals.contains(&goal)
    }

    pub fn is_empty(&self) -> bool {
        self.goals.is_empty()
    }

    /// Selected goals in canonical order.
    pub fn goals(&self) -> impl Iterator<Item = CampaignGoal> + '_ {
        self.goals.iter().copied()
    }

    pub fn other_label(&self) -> &str {
        &self.other_label
    }

    /// Labels for the brief: `Other` is replaced by the user's own label.
    pub fn display_labels(&self) -> Vec<String> {
        self.goals
            .iter()
            .map(|goal| match goal {
                CampaignGoal::Other => self.other_label.trim().to_string(),
                known => known.label().to_string(),
            })
            .filter(|label| !label.is_empty())
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn goal_tags_round_trip_through_from_str() {
        for goal in CampaignGoal::ALL {
            assert_eq!(goal.tag().parse::<CampaignGoal>(), Ok(goal));
        }
        assert!("increase-profit".parse::<CampaignGoal>().is_err());
    }

    #[test]
    fn goal_serializes_as_kebab_case_tag() {
        let json = serde_json::to_string(&CampaignGoal::IncreaseDownloads).unwrap();
        assert_eq!(json, "\"increase-downloads\"");
    }

    #[test]
    fn selecting_twice_keeps_one_entry() {
        let mut selection = GoalSelection::default();
        selection.set(CampaignGoal::IncreaseSales, true);
        selection.set(CampaignGoal::IncreaseSales, true);
        assert_eq!(selection.goals().count(), 1);

        selection.set(CampaignGoal::IncreaseSales, false);
        assert!(selection.is_empty());
    }

    #[test]
    fn display_labels_use_canonical_order_and_other_label() {
        let mut selection = GoalSelection::default();
        selection.set(CampaignGoal::Other, true);
        selection.set(CampaignGoal::IncreaseViews, true);
        selection.set_other_label("Brand awareness");

        assert_eq!(
            selection.display_labels(),
            vec!["Increase Views".to_string(), "Brand awareness".to_string()]
        );
    }

    #[test]
    fn blank_other_label_is_left_out_of_display_labels() {
        let mut selection = GoalSelection::default();
        selection.set(CampaignGoal::Other, true);
        selection.set_other_label("   ");
        assert!(selection.display_labels().is_empty());
    }
}
