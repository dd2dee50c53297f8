//! Centered section title with accent bar

use dioxus::prelude::*;
use folio_core::style::{self, Motion};
use folio_core::ThemeMode;

#[component]
pub fn SectionHeading(
    theme: ThemeMode,
    title: &'static str,
    visible: bool,
    #[props(default = "")] intro: &'static str,
) -> Element {
    let class = format!("section-heading {}", style::reveal(Motion::Up, visible));
    let intro_class = format!("section-intro {}", style::muted_text(theme));

    rsx! {
        div { class: "{class}",
            h2 { class: "section-title", "{title}" }
            div { class: style::accent_bar(theme) }
            if !intro.is_empty() {
                p { class: "{intro_class}", "{intro}" }
            }
        }
    }
}
