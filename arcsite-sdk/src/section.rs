//! Catalogue of the content sections a site document can carry.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A named top-level section of the site document.
///
/// Serialized with the same camelCase key the document uses, so a
/// `Section` can be used directly as a JSON map key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Section {
    Hero,
    About,
    Vision,
    Expertise,
    Approach,
    Services,
    Projects,
    Gallery,
    WhyChooseUs,
    Contact,
    Footer,
    PrivacyPolicy,
    TermsOfService,
}

impl Section {
    /// Every section, in the order the defaults table declares them.
    pub const ALL: [Section; 13] = [
        Section::Hero,
        Section::About,
        Section::Vision,
        Section::Expertise,
        Section::Approach,
        Section::Services,
        Section::Projects,
        Section::Gallery,
        Section::WhyChooseUs,
        Section::Contact,
        Section::Footer,
        Section::PrivacyPolicy,
        Section::TermsOfService,
    ];

    /// Sections rendered on the main page, top to bottom.
    ///
    /// Legal documents are opened as overlays and are not part of the flow.
    pub const PAGE_ORDER: [Section; 11] = [
        Section::Hero,
        Section::About,
        Section::Vision,
        Section::Expertise,
        Section::Approach,
        Section::Projects,
        Section::Services,
        Section::WhyChooseUs,
        Section::Gallery,
        Section::Contact,
        Section::Footer,
    ];

    /// The document key of this section.
    pub fn key(self) -> &'static str {
        match self {
            Section::Hero => "hero",
            Section::About => "about",
            Section::Vision => "vision",
            Section::Expertise => "expertise",
            Section::Approach => "approach",
            Section::Services => "services",
            Section::Projects => "projects",
            Section::Gallery => "gallery",
            Section::WhyChooseUs => "whyChooseUs",
            Section::Contact => "contact",
            Section::Footer => "footer",
            Section::PrivacyPolicy => "privacyPolicy",
            Section::TermsOfService => "termsOfService",
        }
    }

    /// The boolean flag controlling whether the section is shown.
    ///
    /// Hero, footer and the legal documents are always available and have
    /// no flag.
    pub fn visibility_flag(self) -> Option<&'static str> {
        match self {
            Section::About => Some("showAbout"),
            Section::Vision => Some("showVision"),
            Section::Expertise => Some("showExpertise"),
            Section::Approach => Some("showApproach"),
            Section::Services => Some("showServices"),
            Section::Projects => Some("showProjects"),
            Section::Gallery => Some("showGallery"),
            Section::WhyChooseUs => Some("showWhyChooseUs"),
            Section::Contact => Some("showContact"),
            Section::Hero
            | Section::Footer
            | Section::PrivacyPolicy
            | Section::TermsOfService => None,
        }
    }

    /// Whether this section is one of the legal documents.
    pub fn is_legal(self) -> bool {
        matches!(self, Section::PrivacyPolicy | Section::TermsOfService)
    }
}

impl fmt::Display for Section {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// Returned when a string does not name a known section.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown section: {0}")]
pub struct UnknownSection(pub String);

impl FromStr for Section {
    type Err = UnknownSection;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Section::ALL
            .into_iter()
            .find(|section| section.key() == s)
            .ok_or_else(|| UnknownSection(s.to_owned()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_key_round_trips_through_from_str() {
        for section in Section::ALL {
            assert_eq!(section.key().parse::<Section>(), Ok(section));
        }
        assert!("showAbout".parse::<Section>().is_err());
    }

    #[test]
    fn test_serde_uses_document_keys() {
        let json = serde_json::to_string(&Section::WhyChooseUs).unwrap();
        assert_eq!(json, "\"whyChooseUs\"");
        let parsed: Section = serde_json::from_str("\"termsOfService\"").unwrap();
        assert_eq!(parsed, Section::TermsOfService);
    }

    #[test]
    fn test_always_rendered_sections_have_no_flag() {
        assert_eq!(Section::Hero.visibility_flag(), None);
        assert_eq!(Section::Footer.visibility_flag(), None);
        assert_eq!(Section::Gallery.visibility_flag(), Some("showGallery"));
        let flagged = Section::ALL
            .iter()
            .filter(|s| s.visibility_flag().is_some())
            .count();
        assert_eq!(flagged, 9);
    }
}
