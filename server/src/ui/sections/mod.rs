//! Page sections, top to bottom

mod about;
mod contact;
mod experience;
mod footer;
mod header;
mod hero;
mod projects;
mod skills;

pub use about::About;
pub use contact::Contact;
pub use experience::Experience;
pub use footer::Footer;
pub use header::Header;
pub use hero::Hero;
pub use projects::{ProjectGrid, Projects};
pub use skills::Skills;
