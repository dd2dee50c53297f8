//! Core library for folio
//!
//! This crate defines the view state, static content and class
//! composition shared by every section of the portfolio. It has no UI
//! framework dependency so all state transitions can be tested directly.

pub mod contact;
pub mod content;
pub mod error;
pub mod filter;
pub mod style;
pub mod theme;
pub mod view;

// Re-exports
pub use contact::{ContactForm, ContactState, Field, SubmissionStatus, SUBMIT_LATENCY, SUCCESS_NOTICE};
pub use content::{ExperienceEntry, NavLink, Profile, Project, Skill, SocialLink};
pub use error::{Error, Result, ValidationError};
pub use filter::{filter_projects, Category};
pub use theme::ThemeMode;
pub use view::{MobileMenu, RevealLatch, ScrollState, SCROLL_THRESHOLD};
