//! Experience timeline

use dioxus::prelude::*;
use folio_core::content::{ExperienceEntry, EXPERIENCE};
use folio_core::style::{self, ChipKind, Motion, Surface};
use folio_core::ThemeMode;

use crate::ui::components::SectionHeading;
use crate::ui::icons::{Icon, IconKind};
use crate::ui::platform::use_reveal;

#[component]
pub fn Experience(theme: ThemeMode) -> Element {
    let latch = use_reveal("experience");
    let visible = latch().is_revealed();

    rsx! {
        section { id: "experience", class: style::section(theme, Surface::Raised),
            div { class: "container",
                SectionHeading { theme, title: "Experience", visible }

                div { class: "timeline",
                    div { class: "timeline-line" }
                    for (index, entry) in EXPERIENCE.iter().enumerate() {
                        TimelineItem { key: "{index}", theme, entry: *entry, index, visible }
                    }
                }
            }
        }
    }
}

/// Even entries sit on the right of the line, odd ones on the left.
#[component]
fn TimelineItem(theme: ThemeMode, entry: ExperienceEntry, index: usize, visible: bool) -> Element {
    let item_class = style::join([
        "timeline-item",
        if index % 2 == 0 { "timeline-item--reversed" } else { "" },
        style::reveal(Motion::Up, visible).as_str(),
    ]);
    let card_class = format!("timeline-card {}", style::card(theme));
    let meta_class = format!("timeline-meta {}", style::muted_text(theme));
    let accent = style::accent_text(theme);
    let chip_class = style::chip(theme, ChipKind::Tech);
    let dot_side = if index % 2 == 0 { "left: -8px;" } else { "right: -8px;" };

    rsx! {
        div { class: "{item_class}", style: style::stagger(300, index),
            div { class: "{card_class}",
                div { class: "timeline-dot", style: dot_side }
                h3 { "{entry.title}" }
                div { class: "timeline-meta {accent}",
                    Icon { kind: IconKind::Building, size: 18 }
                    span { "{entry.organization}" }
                }
                div { class: "{meta_class}",
                    Icon { kind: IconKind::Calendar, size: 18 }
                    span { "{entry.period}" }
                }
                p { class: style::muted_text(theme), "{entry.description}" }
                div { class: "chips",
                    Icon { kind: IconKind::Briefcase, size: 16, class: "chips-icon" }
                    for skill in entry.skills {
                        span { key: "{skill}", class: "{chip_class}", "{skill}" }
                    }
                }
            }
        }
    }
}
