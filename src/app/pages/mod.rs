//! Page components rendered inside the site layout.

mod home;
mod section;

pub use home::{hero_sources, Home};
pub use section::{section_for, NotFound, Section};
