//! Project showcase with category filter

use dioxus::prelude::*;
use folio_core::content::{Project, PROJECTS, PROJECTS_INTRO};
use folio_core::style::{self, ChipKind, Motion, Surface};
use folio_core::{filter_projects, Category, ThemeMode};
use tracing::debug;

use crate::ui::components::SectionHeading;
use crate::ui::icons::{Icon, IconKind};
use crate::ui::platform::use_reveal;

#[component]
pub fn Projects(theme: ThemeMode) -> Element {
    let latch = use_reveal("projects");
    let visible = latch().is_revealed();
    let mut category = use_signal(Category::default);

    let filters_class = format!("filters {}", style::reveal(Motion::Up, visible));
    let active = category();

    rsx! {
        section { id: "projects", class: style::section(theme, Surface::Base),
            div { class: "container",
                SectionHeading { theme, title: "My Projects", intro: PROJECTS_INTRO, visible }

                div { class: "{filters_class}", style: "transition-delay: 200ms;",
                    for option in Category::ALL {
                        button {
                            key: "{option}",
                            class: style::filter_button(theme, option == active),
                            r#type: "button",
                            "aria-pressed": if option == active { "true" } else { "false" },
                            onclick: move |_| {
                                if category() != option {
                                    debug!(category = %option, "project filter changed");
                                }
                                category.set(option);
                            },
                            "{option}"
                        }
                    }
                }

                // Keyed by category so the cards replay their entrance.
                ProjectGrid { key: "{active}", theme, category: active }
            }
        }
    }
}

/// Cards for every project admitted by `category`.
#[component]
pub fn ProjectGrid(theme: ThemeMode, category: Category) -> Element {
    let visible = filter_projects(PROJECTS, category);

    if visible.is_empty() {
        let empty_class = format!("project-empty {}", style::muted_text(theme));
        return rsx! {
            p { class: "{empty_class}", "No projects in this category yet." }
        };
    }

    rsx! {
        div { class: "project-grid",
            for (index, project) in visible.into_iter().enumerate() {
                ProjectCard { key: "{project.id}", theme, project: *project, index }
            }
        }
    }
}

#[component]
fn ProjectCard(theme: ThemeMode, project: Project, index: usize) -> Element {
    let card_class = style::themed(theme, "project-card");
    let category_chip = style::chip(theme, ChipKind::Category);
    let tech_chip = style::chip(theme, ChipKind::Tech);

    rsx! {
        article {
            class: "{card_class}",
            style: style::animation_delay(100 * index as u32),
            div { class: "project-media",
                img { src: project.image, alt: project.title }
                div { class: "project-overlay",
                    if let Some(repository) = project.repository {
                        a {
                            href: repository,
                            target: "_blank",
                            rel: "noopener noreferrer",
                            "aria-label": "Source code",
                            Icon { kind: IconKind::Github, size: 20 }
                        }
                    }
                    if let Some(live) = project.live {
                        a {
                            href: live,
                            target: "_blank",
                            rel: "noopener noreferrer",
                            "aria-label": "Live demo",
                            Icon { kind: IconKind::ExternalLink, size: 20 }
                        }
                    }
                }
            }
            div { class: "project-body",
                h3 { "{project.title}" }
                p { class: style::muted_text(theme), "{project.description}" }
                div { class: "chips",
                    for label in project.categories {
                        span { key: "{label}", class: "{category_chip}", "{label}" }
                    }
                }
                div { class: "chips",
                    for tech in project.technologies {
                        span { key: "{tech}", class: "{tech_chip}", "{tech}" }
                    }
                }
            }
        }
    }
}
