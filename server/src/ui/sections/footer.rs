//! Page footer

use chrono::Datelike;
use dioxus::prelude::*;
use folio_core::content::PROFILE;
use folio_core::style::{self, Surface};
use folio_core::ThemeMode;

use crate::ui::icons::{Icon, IconKind};
use crate::ui::platform;

#[component]
pub fn Footer(theme: ThemeMode) -> Element {
    let year = chrono::Local::now().year();
    let text_class = style::muted_text(theme);
    let link_class = style::icon_link(theme);
    let to_top_class = style::themed(theme, "to-top");

    rsx! {
        footer { class: style::section(theme, Surface::Footer),
            div { class: "container",
                div { class: "footer-top",
                    div {
                        h3 { "{PROFILE.name}" }
                        p { class: "{text_class}", "{PROFILE.role}" }
                    }
                    button {
                        class: "{to_top_class}",
                        r#type: "button",
                        "aria-label": "Scroll to top",
                        onclick: move |_| platform::scroll_to_top(),
                        Icon { kind: IconKind::ArrowUp, size: 20 }
                    }
                }

                div { class: "footer-bottom",
                    p { class: "{text_class}", "© {year} {PROFILE.name}. All rights reserved." }
                    div { class: "footer-links",
                        a { class: "{link_class}", href: "#", "Privacy Policy" }
                        a { class: "{link_class}", href: "#", "Terms of Service" }
                    }
                }
            }
        }
    }
}
