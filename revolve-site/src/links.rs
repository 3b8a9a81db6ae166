//! Outbound links: WhatsApp booking, social profiles and section permalinks

use std::{fmt, str::FromStr};

use thiserror::Error;
use url::Url;

use crate::{error::Result, notify::Notification};

/// Booking line, digits only.
pub const CONSULTATION_PHONE: &str = "918050306510";
/// Prefilled booking message.
pub const CONSULTATION_MESSAGE: &str = "Hello *ELUNITE Team!*\nI’d like to schedule a one-on-one consultation session.\nLooking forward to your guidance.";

/// Link for an unknown social platform.
pub const PLACEHOLDER_LINK: &str = "#";

/// Click-to-chat link. Non-digits (`+`, spaces, dashes) are dropped from the
/// phone number.
pub fn whatsapp_url(phone: &str, message: &str) -> String {
    let digits: String = phone.chars().filter(char::is_ascii_digit).collect();
    format!(
        "https://wa.me/{digits}?text={}",
        urlencoding::encode(message)
    )
}

/// The "book now" link.
pub fn consultation_url() -> String {
    whatsapp_url(CONSULTATION_PHONE, CONSULTATION_MESSAGE)
}

/// A platform behind a footer social icon.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SocialPlatform {
    /// `facebook`
    Facebook,
    /// `instagram`
    Instagram,
    /// `linkedin`
    Linkedin,
    /// `twitter`
    Twitter,
}

impl SocialPlatform {
    /// Every known platform.
    pub const ALL: [Self; 4] =
        [Self::Facebook, Self::Instagram, Self::Linkedin, Self::Twitter];

    /// Company profile page.
    pub const fn profile_url(self) -> &'static str {
        match self {
            Self::Facebook => "https://www.facebook.com/elunite/",
            Self::Instagram => "https://www.instagram.com/elunite_education/",
            Self::Linkedin => "https://linkedin.com/company/elunite",
            Self::Twitter => "https://twitter.com/elunite",
        }
    }

    /// `data-platform` attribute value.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Facebook => "facebook",
            Self::Instagram => "instagram",
            Self::Linkedin => "linkedin",
            Self::Twitter => "twitter",
        }
    }
}

impl fmt::Display for SocialPlatform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A `data-platform` value that names no known platform.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown social platform '{0}'")]
pub struct UnknownPlatform(pub String);

impl FromStr for SocialPlatform {
    type Err = UnknownPlatform;

    fn from_str(value: &str) -> std::result::Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|platform| platform.as_str() == value)
            .ok_or_else(|| UnknownPlatform(value.to_string()))
    }
}

/// Profile link for a `data-platform` value, `#` when unrecognized.
pub fn social_url(platform: &str) -> &'static str {
    platform
        .parse::<SocialPlatform>()
        .map_or(PLACEHOLDER_LINK, SocialPlatform::profile_url)
}

/// `page_url` with its fragment replaced by `#id`.
pub fn section_permalink(page_url: &str, id: &str) -> Result<String> {
    let mut url = Url::parse(page_url)?;
    url.set_fragment(Some(id));
    Ok(url.into())
}

/// How a clipboard write ended, after any fallback was tried.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClipboardOutcome {
    /// The link reached the clipboard.
    Copied,
    /// Every copy method failed.
    Failed,
}

impl ClipboardOutcome {
    /// Toast to show for this outcome.
    pub fn notification(self) -> Notification {
        match self {
            Self::Copied => Notification::success("Link copied to clipboard!"),
            Self::Failed => Notification::error("Failed to copy link"),
        }
    }
}
