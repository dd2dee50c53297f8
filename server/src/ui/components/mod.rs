//! Reusable UI components

mod section_heading;
mod theme_toggle;

pub use section_heading::SectionHeading;
pub use theme_toggle::ThemeToggle;
