//! About section

use dioxus::prelude::*;
use folio_core::content::ABOUT;
use folio_core::style::{self, Motion, Surface};
use folio_core::ThemeMode;

use crate::ui::components::SectionHeading;
use crate::ui::platform::use_reveal;

#[component]
pub fn About(theme: ThemeMode) -> Element {
    let latch = use_reveal("about");
    let visible = latch().is_revealed();

    let image_class = format!("about-image {}", style::reveal(Motion::FromLeft, visible));
    let copy_class = format!("about-copy {}", style::reveal(Motion::FromRight, visible));
    let heading_class = style::accent_text(theme);
    let text_class = style::muted_text(theme);
    let [degree, school] = ABOUT.education;
    let [town, remote] = ABOUT.location;

    rsx! {
        section { id: "about", class: style::section(theme, Surface::Raised),
            div { class: "container",
                SectionHeading { theme, title: "About Me", visible }

                div { class: "about-inner",
                    div { class: "{image_class}", style: "transition-delay: 200ms;",
                        img { src: ABOUT.image, alt: "Workspace" }
                    }

                    div { class: "{copy_class}", style: "transition-delay: 400ms;",
                        h3 { class: "{heading_class}", "{ABOUT.heading}" }
                        for (i, paragraph) in ABOUT.paragraphs.iter().enumerate() {
                            p { key: "{i}", class: "{text_class}", "{paragraph}" }
                        }

                        div { class: "about-facts",
                            div {
                                h4 { "Education" }
                                p { class: "{text_class}",
                                    "{degree}"
                                    br {}
                                    "{school}"
                                }
                            }
                            div {
                                h4 { "Location" }
                                p { class: "{text_class}",
                                    "{town}"
                                    br {}
                                    "{remote}"
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}
