//! Brief assembly: turns a completed session into the payload for the
//! document service.

use std::collections::BTreeMap;

use chrono::NaiveDate;

use super::session::WizardSession;

/// Placeholder tokens understood by the brief template.
pub mod placeholders {
    pub const COMPANY_NAME: &str = "{{bname}}";
    pub const COMPANY_DESCRIPTION: &str = "{{bdescription}}";
    pub const WEBSITE: &str = "{{website}}";
    pub const NAME: &str = "{{name}}";
    pub const EMAIL: &str = "{{email}}";
    pub const GOALS: &str = "{{goals}}";
    pub const DELIVERABLES: &str = "{{deliverables}}";
    pub const CREATORS: &str = "{{creators}}";
    pub const AUDIENCE: &str = "{{audience}}";
    pub const CALLOUTS: &str = "{{callouts}}";
    pub const DATE: &str = "{{date}}";
}

/// Everything the document service needs apart from deployment settings
/// (template and folder).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BriefDraft {
    pub title: String,
    pub replacements: BTreeMap<String, String>,
    pub user_email: String,
    pub logo_url: String,
    pub website: String,
}

impl BriefDraft {
    pub fn assemble(session: &WizardSession, date: NaiveDate) -> Self {
        let date = date.format("%Y-%m-%d").to_string();
        let website = session.company_website().trim().to_string();
        let company_name = session.company_name().trim();
        let title_subject = if company_name.is_empty() {
            website.as_str()
        } else {
            company_name
        };
        let title = format!("{} Campaign Brief - {}", title_subject, date);

        let entries = [
            (placeholders::COMPANY_NAME, session.company_name().to_string()),
            (
                placeholders::COMPANY_DESCRIPTION,
                session.company_description().to_string(),
            ),
            (placeholders::WEBSITE, website.clone()),
            (placeholders::NAME, session.identity().name.clone()),
            (placeholders::EMAIL, session.identity().email.clone()),
            (placeholders::GOALS, session.goals().display_labels().join(", ")),
            (placeholders::DELIVERABLES, session.deliverables().to_string()),
            (placeholders::CREATORS, session.creator_profiles().to_string()),
            (placeholders::AUDIENCE, session.target_audience().to_string()),
            (placeholders::CALLOUTS, session.key_callouts().to_string()),
            (placeholders::DATE, date),
        ];
        let replacements = entries
            .into_iter()
            .map(|(key, value)| (key.to_string(), value))
            .collect();

        Self {
            title,
            replacements,
            user_email: session.identity().email.trim().to_string(),
            logo_url: session.logo_reference().trim().to_string(),
            website,
        }
    }

    pub fn replacement(&self, key: &str) -> Option<&str> {
        self.replacements.get(key).map(String::as_str)
    }
}
