//! Fixed navigation bar

use dioxus::prelude::*;
use folio_core::content::{NAV_LINKS, PROFILE};
use folio_core::style;
use folio_core::{MobileMenu, ScrollState, ThemeMode};
use tracing::debug;

use crate::ui::components::ThemeToggle;
use crate::ui::icons::{Icon, IconKind};
use crate::ui::platform::use_window_scroll;

#[component]
pub fn Header(theme: ThemeMode, on_toggle: EventHandler<()>) -> Element {
    let mut scroll = use_signal(ScrollState::default);
    let mut menu = use_signal(MobileMenu::default);

    use_window_scroll(move |offset| {
        // Only a flip of the threshold flag re-renders the header.
        let mut next = *scroll.peek();
        if next.observe(offset) {
            debug!(scrolled = next.is_scrolled(), "header scroll state changed");
            scroll.set(next);
        }
    });

    let is_open = menu().is_open();
    let brand_class = format!("{} intro intro--left", style::brand(theme));
    let nav_class = style::nav_link(theme);
    let (menu_icon, menu_label) = if is_open {
        (IconKind::Close, "Close menu")
    } else {
        (IconKind::Menu, "Open menu")
    };

    rsx! {
        header { class: style::header(theme, scroll().is_scrolled()),
            div { class: "container header-bar",
                a {
                    class: "{brand_class}",
                    href: "#home",
                    "{PROFILE.name}"
                }

                // Desktop navigation
                nav {
                    class: "desktop-nav intro intro--down",
                    style: style::animation_delay(100),
                    for link in NAV_LINKS {
                        a { key: "{link.name}", class: "{nav_class}", href: link.href, "{link.name}" }
                    }
                    ThemeToggle { theme, on_toggle }
                }

                // Mobile bar
                div { class: "mobile-bar",
                    ThemeToggle { theme, on_toggle }
                    button {
                        class: style::brand(theme),
                        r#type: "button",
                        "aria-label": menu_label,
                        "aria-expanded": "{is_open}",
                        onclick: move |_| menu.write().toggle(),
                        Icon { kind: menu_icon, size: 24 }
                    }
                }
            }

            if is_open {
                div { class: style::mobile_menu(theme),
                    nav { class: "container mobile-nav",
                        for link in NAV_LINKS {
                            a {
                                key: "{link.name}",
                                class: "{nav_class}",
                                href: link.href,
                                onclick: move |_| menu.write().navigate(),
                                "{link.name}"
                            }
                        }
                    }
                }
            }
        }
    }
}
