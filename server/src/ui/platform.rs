//! Browser capabilities used by the sections
//!
//! Everything here talks to the page through `document::eval`. On a
//! renderer without a document (server-side rendering) the calls fail and
//! the callers keep their defaults: light theme, header not scrolled,
//! sections hidden until the client takes over.
//!
//! Subscriptions are acquired inside tasks owned by the calling component
//! and released with `use_drop`, so nothing fires into an unmounted view.

use std::time::Duration;

use dioxus::prelude::*;
use folio_core::RevealLatch;
use tracing::debug;

const PREFERS_DARK_JS: &str = r#"
return !!(window.matchMedia && window.matchMedia('(prefers-color-scheme: dark)').matches);
"#;

const SCROLL_LISTEN_JS: &str = r#"
const report = () => dioxus.send(window.scrollY);
window.__folioScroll = report;
window.addEventListener('scroll', report, { passive: true });
report();
"#;

const SCROLL_RELEASE_JS: &str = r#"
if (window.__folioScroll) {
    window.removeEventListener('scroll', window.__folioScroll);
    delete window.__folioScroll;
}
"#;

const REVEAL_OBSERVE_JS: &str = r#"
const target = document.getElementById("__TARGET__");
if (!target || !("IntersectionObserver" in window)) {
    dioxus.send(true);
    return;
}
window.__folioObservers = window.__folioObservers || {};
const observer = new IntersectionObserver((entries) => {
    if (entries.some((entry) => entry.isIntersecting)) {
        observer.disconnect();
        delete window.__folioObservers["__TARGET__"];
        dioxus.send(true);
    }
}, { threshold: 0.1 });
window.__folioObservers["__TARGET__"] = observer;
observer.observe(target);
"#;

const REVEAL_RELEASE_JS: &str = r#"
const observers = window.__folioObservers || {};
if (observers["__TARGET__"]) {
    observers["__TARGET__"].disconnect();
    delete observers["__TARGET__"];
}
"#;

const SCROLL_TO_TOP_JS: &str = "window.scrollTo({ top: 0, behavior: 'smooth' });";

/// Ask the platform for `prefers-color-scheme: dark`.
///
/// `None` when the platform cannot answer.
pub async fn prefers_dark() -> Option<bool> {
    match document::eval(PREFERS_DARK_JS).join::<bool>().await {
        Ok(prefers) => Some(prefers),
        Err(e) => {
            debug!(error = ?e, "color-scheme preference unavailable");
            None
        }
    }
}

/// Wait without blocking the UI thread.
pub async fn sleep(duration: Duration) {
    #[cfg(target_arch = "wasm32")]
    gloo_timers::future::sleep(duration).await;

    #[cfg(not(target_arch = "wasm32"))]
    tokio::time::sleep(duration).await;
}

/// Smoothly scroll the window back to the top.
pub fn scroll_to_top() {
    let _ = document::eval(SCROLL_TO_TOP_JS);
}

/// Call `on_scroll` with the vertical offset on every scroll event for as
/// long as the calling component is mounted.
pub fn use_window_scroll(on_scroll: impl FnMut(f64) + 'static) {
    use_hook(move || {
        let mut on_scroll = on_scroll;
        spawn(async move {
            let mut listener = document::eval(SCROLL_LISTEN_JS);
            while let Ok(offset) = listener.recv::<f64>().await {
                on_scroll(offset);
            }
        })
    });

    use_drop(|| {
        let _ = document::eval(SCROLL_RELEASE_JS);
    });
}

/// One-shot visibility latch for the element with id `target`.
///
/// Flips once the element is at least 10% inside the viewport and never
/// flips back. The observer is disconnected on first sight or on teardown.
pub fn use_reveal(target: &'static str) -> Signal<RevealLatch> {
    let mut latch = use_signal(RevealLatch::default);

    // Effects run after mount, when the element exists.
    use_effect(move || {
        spawn(async move {
            let mut observer = document::eval(&REVEAL_OBSERVE_JS.replace("__TARGET__", target));
            if let Ok(visible) = observer.recv::<bool>().await {
                if latch.write().observe(visible) {
                    debug!(section = target, "section revealed");
                }
            }
        });
    });

    use_drop(move || {
        let _ = document::eval(&REVEAL_RELEASE_JS.replace("__TARGET__", target));
    });

    latch
}

#[cfg(test)]
mod tests {
    use super::*;
    use folio_core::{SUBMIT_LATENCY, SUCCESS_NOTICE};
    use tokio::time::Instant;

    #[tokio::test(start_paused = true)]
    async fn test_sleep_waits_the_contact_delays() {
        let start = Instant::now();
        sleep(SUBMIT_LATENCY).await;
        assert!(start.elapsed() >= SUBMIT_LATENCY);

        sleep(SUCCESS_NOTICE).await;
        assert!(start.elapsed() >= SUBMIT_LATENCY + SUCCESS_NOTICE);
    }

    #[test]
    fn test_reveal_scripts_target_the_section() {
        let observe = REVEAL_OBSERVE_JS.replace("__TARGET__", "skills");
        assert!(observe.contains(r#"getElementById("skills")"#));
        assert!(observe.contains("threshold: 0.1"));
        assert!(!observe.contains("__TARGET__"));

        let release = REVEAL_RELEASE_JS.replace("__TARGET__", "skills");
        assert!(release.contains("disconnect()"));
        assert!(!release.contains("__TARGET__"));
    }
}
