//! Server-side rendering of the portfolio page

use dioxus::prelude::*;
use dioxus_ssr::Renderer;

use crate::ui::theme::NOSCRIPT_CSS;
use crate::ui::App;

#[component]
fn DocumentTitle(text: String) -> Element {
    rsx! {
        title { "{text}" }
    }
}

/// `<title>` element with `text` escaped like any other text node.
fn render_title(text: &str) -> String {
    let mut vdom = VirtualDom::new_with_props(
        DocumentTitle,
        DocumentTitleProps {
            text: text.to_string(),
        },
    );
    vdom.rebuild_in_place();
    dioxus_ssr::render(&vdom)
}

/// Render the full HTML document.
///
/// With `client_script` the markup carries hydration ids and the bundle is
/// loaded to take over; without it the page stays static and the
/// `<noscript>` styles keep every section visible.
pub fn render_document(title: &str, client_script: Option<&str>) -> String {
    let mut vdom = VirtualDom::new(App);
    vdom.rebuild_in_place();

    let mut renderer = Renderer::new();
    renderer.pre_render = client_script.is_some();
    let body = renderer.render(&vdom);
    let title = render_title(title);

    let (preload, script) = match client_script {
        Some(src) => (
            format!(r#"<link rel="preload" href="{src}" as="script" crossorigin="anonymous">"#),
            format!(r#"<script type="module" src="{src}"></script>"#),
        ),
        None => (String::new(), String::new()),
    };

    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    {title}
    {preload}
    <noscript><style>{NOSCRIPT_CSS}</style></noscript>
</head>
<body>
    <div id="main">{body}</div>
    {script}
</body>
</html>"#
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_static_document_has_page_and_no_script() {
        let html = render_document("Portfolio", None);
        assert!(html.starts_with("<!DOCTYPE html>"));
        assert!(html.contains("<title>Portfolio</title>"));
        assert!(html.contains(r#"<div id="main">"#));
        assert!(html.contains(r#"id="contact""#));
        assert!(html.contains("<noscript>"));
        assert!(!html.contains("<script"));
    }

    #[test]
    fn test_client_script_is_preloaded_and_loaded() {
        let html = render_document("Portfolio", Some("/assets/folio-site.js"));
        assert!(html.contains(r#"rel="preload" href="/assets/folio-site.js""#));
        assert!(html.contains(r#"<script type="module" src="/assets/folio-site.js">"#));
    }

    #[test]
    fn test_title_is_escaped() {
        let html = render_document("<script>alert(1)</script> & co", None);
        assert!(html.contains("<title>&lt;script&gt;alert(1)&lt;/script&gt; &amp; co</title>"));
        assert!(!html.contains("<script>alert"));
    }

    #[test]
    fn test_server_render_defaults_to_light_theme() {
        let html = render_document("Portfolio", None);
        assert!(html.contains(r#"class="app""#));
        assert!(!html.contains(r#"class="app dark""#));
    }
}
