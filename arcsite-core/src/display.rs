//! Read-only helpers for display collaborators.

use arcsite_sdk::objects::ContactLinks;
use arcsite_sdk::{Section, SiteDocument};

const GMAIL_COMPOSE: &str = "https://mail.google.com/mail/?view=cm&fs=1&to=";

/// Sections to render, in page order.
///
/// Hero and footer are always present; every other section only when its
/// visibility flag is `true`.
pub fn visible_sections(doc: &SiteDocument) -> Vec<Section> {
    Section::PAGE_ORDER
        .into_iter()
        .filter(|section| doc.is_visible(*section))
        .collect()
}

/// Build contact links from the contact section. Empty fields give no link.
pub fn contact_links(doc: &SiteDocument) -> ContactLinks {
    let field = |name: &'static str| {
        doc.text(Section::Contact, name)
            .map(str::trim)
            .filter(|s| !s.is_empty())
    };

    let email = field("email");
    let phone = field("phone").map(|p| p.split_whitespace().collect::<String>());
    let whatsapp = field("whatsapp")
        .map(|w| w.chars().filter(char::is_ascii_digit).collect::<String>())
        .filter(|w| !w.is_empty());

    ContactLinks {
        mailto: email.map(|e| format!("mailto:{e}")),
        gmail_compose: email.map(|e| format!("{GMAIL_COMPOSE}{}", urlencoding::encode(e))),
        tel: phone.map(|p| format!("tel:{p}")),
        whatsapp: whatsapp.map(|w| format!("https://wa.me/{w}")),
        preferred_email: None,
    }
}

/// Whether a `User-Agent` belongs to a phone or tablet.
pub fn is_mobile_user_agent(user_agent: &str) -> bool {
    let ua = user_agent.to_ascii_lowercase();
    ["iphone", "ipad", "ipod", "android"]
        .iter()
        .any(|needle| ua.contains(needle))
}

/// The email link to offer: `mailto:` on mobile, Gmail compose elsewhere.
pub fn preferred_email_link(links: &ContactLinks, user_agent: &str) -> Option<String> {
    if is_mobile_user_agent(user_agent) {
        links.mailto.clone()
    } else {
        links.gmail_compose.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::defaults::defaults;
    use crate::merge::merge;
    use serde_json::json;

    #[test]
    fn test_all_sections_visible_by_default() {
        assert_eq!(visible_sections(defaults()), Section::PAGE_ORDER.to_vec());
    }

    #[test]
    fn test_hidden_and_malformed_flags() {
        let partial = json!({
            "showGallery": false,
            "showVision": "false",
            "showServices": null,
        });
        let doc = merge(defaults(), partial.as_object().unwrap());
        let sections = visible_sections(&doc);
        assert!(!sections.contains(&Section::Gallery));
        assert!(!sections.contains(&Section::Vision));
        assert!(!sections.contains(&Section::Services));
        assert_eq!(sections.first(), Some(&Section::Hero));
        assert_eq!(sections.last(), Some(&Section::Footer));
        assert_eq!(sections.len(), 8);
    }

    #[test]
    fn test_contact_links_from_defaults() {
        let links = contact_links(defaults());
        assert_eq!(links.mailto.as_deref(), Some("mailto:zionicarc@gmail.com"));
        assert_eq!(
            links.gmail_compose.as_deref(),
            Some("https://mail.google.com/mail/?view=cm&fs=1&to=zionicarc%40gmail.com")
        );
        assert_eq!(links.tel.as_deref(), Some("tel:+919986598000"));
        assert_eq!(links.whatsapp.as_deref(), Some("https://wa.me/919986598000"));
    }

    #[test]
    fn test_blank_contact_fields_give_no_links() {
        let doc = merge(
            defaults(),
            json!({ "contact": { "email": "  ", "phone": "", "whatsapp": "+" } })
                .as_object()
                .unwrap(),
        );
        let links = contact_links(&doc);
        assert_eq!(links.mailto, None);
        assert_eq!(links.gmail_compose, None);
        assert_eq!(links.tel, None);
        assert_eq!(links.whatsapp, None);
    }

    #[test]
    fn test_preferred_email_link() {
        let links = contact_links(defaults());
        let iphone = "Mozilla/5.0 (iPhone; CPU iPhone OS 17_0 like Mac OS X)";
        let desktop = "Mozilla/5.0 (X11; Linux x86_64) Firefox/128.0";
        assert_eq!(preferred_email_link(&links, iphone), links.mailto);
        assert_eq!(preferred_email_link(&links, desktop), links.gmail_compose);
        assert!(is_mobile_user_agent("Dalvik/2.1.0 (Linux; U; ANDROID 14)"));
    }
}
