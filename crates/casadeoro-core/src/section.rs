//! Navigable page sections.
//!
//! Each section maps to exactly one anchor id on the page. The navigator
//! itself only deals in raw id strings so that stale or foreign ids can be
//! dropped without failing.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::SiteError;

/// A content region that navigation can target
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Section {
    Vision,
    Experience,
    Location,
    Financials,
    Contact,
}

impl Section {
    /// Every section, in page order
    pub const ALL: [Section; 5] = [
        Section::Vision,
        Section::Experience,
        Section::Location,
        Section::Financials,
        Section::Contact,
    ];

    /// Sections listed in the mobile menu overlay (the invest card is reached
    /// from the desktop call-to-action only)
    pub const MOBILE_MENU: [Section; 4] = [
        Section::Vision,
        Section::Experience,
        Section::Location,
        Section::Financials,
    ];

    /// Anchor id of the region in the document
    pub fn id(&self) -> &'static str {
        match self {
            Section::Vision => "vision",
            Section::Experience => "experience",
            Section::Location => "location",
            Section::Financials => "financials",
            Section::Contact => "contact",
        }
    }

    /// Link label shown in the navigation bar
    pub fn label(&self) -> &'static str {
        match self {
            Section::Vision => "The Vision",
            Section::Experience => "Experience",
            Section::Location => "Location",
            Section::Financials => "Financials",
            Section::Contact => "Invest",
        }
    }

    /// `#id` form used for link hrefs
    pub fn href(&self) -> String {
        format!("#{}", self.id())
    }
}

impl fmt::Display for Section {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

impl FromStr for Section {
    type Err = SiteError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim_start_matches('#');
        Section::ALL
            .into_iter()
            .find(|section| section.id() == trimmed)
            .ok_or_else(|| SiteError::UnknownSection(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ids_are_unique() {
        let mut ids: Vec<_> = Section::ALL.iter().map(Section::id).collect();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), Section::ALL.len());
    }

    #[test]
    fn parse_roundtrips_ids_and_hrefs() {
        for section in Section::ALL {
            assert_eq!(section.id().parse::<Section>().unwrap(), section);
            assert_eq!(section.href().parse::<Section>().unwrap(), section);
        }
    }

    #[test]
    fn parse_unknown_fails() {
        let err = "pricing".parse::<Section>().unwrap_err();
        assert!(matches!(err, SiteError::UnknownSection(ref s) if s == "pricing"));
    }

    #[test]
    fn mobile_menu_omits_contact() {
        assert!(!Section::MOBILE_MENU.contains(&Section::Contact));
        assert_eq!(Section::Contact.label(), "Invest");
    }

    #[test]
    fn serde_uses_anchor_ids() {
        let json = serde_json::to_string(&Section::Financials).unwrap();
        assert_eq!(json, "\"financials\"");
    }
}
