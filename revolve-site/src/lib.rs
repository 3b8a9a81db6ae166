//! Page behaviors that sit next to the carousels.
//!
//! Everything here is a pure state holder or a pure function over the values
//! a page would hand it (scroll offsets, hrefs, stored records). Rendering is
//! left to the caller.

pub mod accordion;
pub mod consent;
pub mod error;
pub mod links;
pub mod navigation;
pub mod notify;

pub use accordion::FaqAccordion;
pub use consent::{
    ConsentCategory, ConsentManager, CookiePreferences, JsonFileStore,
    MemoryStore, PREFERENCES_KEY, PreferenceStore,
};
pub use error::{Result, SiteError};
pub use links::{ClipboardOutcome, SocialPlatform};
pub use navigation::{NavState, SectionNavigation};
pub use notify::{Notification, NotificationCenter, NotificationKind, NotificationState};
