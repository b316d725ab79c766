//! Shared UI components for the site.

pub mod img;
pub mod layout;
pub mod link;
pub mod menu;
pub mod notice;

pub use img::Img;
pub use layout::{HtmlDocument, SiteLayout, SITE_CSS};
pub use link::{LinkRenderer, LinkSpec};
pub use menu::Menu;
pub use notice::ContentNotice;
