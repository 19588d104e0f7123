//! Public (read-only) API types consumed by display collaborators.

use serde::{Deserialize, Serialize};

use crate::section::Section;

/// Sections to render, in page order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SectionsResponse {
    pub sections: Vec<Section>,
}

/// Ready-to-use links derived from the contact section.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactLinks {
    /// `mailto:` link, preferred on mobile devices.
    pub mailto: Option<String>,
    /// Gmail compose URL, preferred on desktop.
    pub gmail_compose: Option<String>,
    /// `tel:` link.
    pub tel: Option<String>,
    /// `https://wa.me/...` chat link.
    pub whatsapp: Option<String>,
    /// The email link suited to the requesting device, when known.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub preferred_email: Option<String>,
}
