//! Landing section

use dioxus::prelude::*;
use folio_core::content::PROFILE;
use folio_core::style::{self, ButtonKind, Surface};
use folio_core::ThemeMode;

use crate::ui::icons::{Icon, IconKind};

#[component]
pub fn Hero(theme: ThemeMode) -> Element {
    let section_class = format!("{} hero", style::section(theme, Surface::Base));
    let greeting_class = format!("hero-greeting intro {}", style::accent_text(theme));
    let tagline_class = format!("hero-tagline intro {}", style::muted_text(theme));
    let icon_class = style::icon_link(theme);
    let mailto = PROFILE.mailto();

    rsx! {
        section { id: "home", class: "{section_class}",
            div { class: "container hero-inner",
                div { class: "hero-copy",
                    h2 { class: "{greeting_class}", "{PROFILE.greeting}" }
                    h1 {
                        class: "hero-name intro",
                        style: style::animation_delay(200),
                        "{PROFILE.name}"
                    }
                    h3 {
                        class: "hero-role intro",
                        style: style::animation_delay(400),
                        "{PROFILE.role}"
                    }
                    if !PROFILE.tagline.is_empty() {
                        p {
                            class: "{tagline_class}",
                            style: style::animation_delay(600),
                            "{PROFILE.tagline}"
                        }
                    }

                    div {
                        class: "hero-actions intro",
                        style: style::animation_delay(800),
                        a { class: style::button(theme, ButtonKind::Primary), href: "#contact", "Get in Touch" }
                        a { class: style::button(theme, ButtonKind::Outline), href: "#projects", "View Projects" }
                    }

                    div {
                        class: "hero-socials intro",
                        style: style::animation_delay(1000),
                        a {
                            class: "{icon_class}",
                            href: "https://github.com/uditanolkha",
                            target: "_blank",
                            rel: "noopener noreferrer",
                            "aria-label": "GitHub",
                            Icon { kind: IconKind::Github, size: 24 }
                        }
                        a {
                            class: "{icon_class}",
                            href: "https://www.linkedin.com/in/udita-nolkha",
                            target: "_blank",
                            rel: "noopener noreferrer",
                            "aria-label": "LinkedIn",
                            Icon { kind: IconKind::Linkedin, size: 24 }
                        }
                        a {
                            class: "{icon_class}",
                            href: "{mailto}",
                            "aria-label": "Email",
                            Icon { kind: IconKind::Mail, size: 24 }
                        }
                    }
                }

                div {
                    class: "hero-portrait intro intro--zoom",
                    style: style::animation_delay(500),
                    img { src: PROFILE.portrait, alt: PROFILE.name }
                }
            }

            a {
                class: "scroll-hint {icon_class}",
                href: "#about",
                "aria-label": "Scroll to about",
                Icon { kind: IconKind::ArrowDown, size: 20 }
            }
        }
    }
}
