//! Stylesheet for the class names composed in `folio_core::style`

use dioxus::prelude::*;

/// Global CSS: light rules first, `--dark` modifiers after them
pub const GLOBAL_CSS: &str = r#"
/* CSS Reset and Base Styles */
* {
    margin: 0;
    padding: 0;
    box-sizing: border-box;
}

html {
    scroll-behavior: smooth;
}

body {
    font-family: Inter, -apple-system, BlinkMacSystemFont, "Segoe UI", Roboto, sans-serif;
    font-size: 16px;
    line-height: 1.5;
}

a {
    color: inherit;
    text-decoration: none;
}

img {
    display: block;
    max-width: 100%;
}

.app {
    min-height: 100vh;
    color: #111827;
    transition: background-color 0.3s ease, color 0.3s ease;
}

.app.dark {
    color: #ffffff;
}

.container {
    width: 100%;
    max-width: 1200px;
    margin: 0 auto;
    padding: 0 24px;
}

/* Sections */
.section {
    padding: 80px 0;
    transition: background-color 0.3s ease;
}

.surface-base { background-color: #ffffff; color: #111827; }
.surface-base--dark { background-color: #111827; color: #ffffff; }
.surface-raised { background-color: #f3f4f6; color: #111827; }
.surface-raised--dark { background-color: #1f2937; color: #ffffff; }
.surface-footer { background-color: #f3f4f6; color: #111827; padding: 48px 0; }
.surface-footer--dark { background-color: #111827; color: #ffffff; }

.section-heading {
    text-align: center;
    margin-bottom: 64px;
}

.section-title {
    font-size: 2.25rem;
    font-weight: 700;
    margin-bottom: 8px;
}

.section-intro {
    max-width: 42rem;
    margin: 16px auto 0;
}

.accent-bar { width: 96px; height: 4px; margin: 0 auto; background-color: #0d9488; }
.accent-bar--dark { background-color: #2dd4bf; }

.text-muted { color: #4b5563; }
.text-muted--dark { color: #d1d5db; }
.text-accent { color: #0d9488; }
.text-accent--dark { color: #2dd4bf; }

/* Header */
.site-header {
    position: fixed;
    top: 0;
    left: 0;
    right: 0;
    z-index: 50;
    background-color: transparent;
    transition: all 0.3s ease-in-out;
}

.site-header--scrolled {
    background-color: rgba(255, 255, 255, 0.9);
    backdrop-filter: blur(12px);
    box-shadow: 0 10px 15px -3px rgba(0, 0, 0, 0.1);
}

.site-header--scrolled--dark { background-color: rgba(17, 24, 39, 0.9); }

.header-bar {
    display: flex;
    justify-content: space-between;
    align-items: center;
    padding-top: 16px;
    padding-bottom: 16px;
}

.brand { font-size: 1.5rem; font-weight: 700; color: #111827; background: none; border: none; cursor: pointer; }
.brand--dark { color: #ffffff; }

.desktop-nav { display: flex; align-items: center; gap: 32px; }
.mobile-bar { display: none; align-items: center; gap: 16px; }

.nav-link { color: #4b5563; transition: color 0.3s ease; }
.nav-link:hover { color: #111827; }
.nav-link--dark { color: #d1d5db; }
.nav-link--dark:hover { color: #ffffff; }

.mobile-menu { background-color: #ffffff; animation: intro-fade 0.3s ease both; }
.mobile-menu--dark { background-color: #111827; }
.mobile-nav { display: flex; flex-direction: column; gap: 16px; padding-top: 16px; padding-bottom: 16px; font-size: 1.125rem; }

.theme-toggle {
    display: inline-flex;
    align-items: center;
    justify-content: center;
    padding: 8px;
    border: none;
    border-radius: 9999px;
    cursor: pointer;
    background-color: #e5e7eb;
    color: #374151;
    transition: background-color 0.3s ease, color 0.3s ease, transform 0.1s ease;
}

.theme-toggle:active { transform: scale(0.9); }
.theme-toggle--dark { background-color: #1f2937; color: #fde047; }

/* Buttons */
.btn {
    display: inline-flex;
    align-items: center;
    gap: 8px;
    padding: 12px 24px;
    border-radius: 8px;
    font-weight: 500;
    border: 1px solid transparent;
    cursor: pointer;
    transition: background-color 0.3s ease, opacity 0.3s ease;
}

.btn-primary { background-color: #0d9488; color: #ffffff; }
.btn-primary:hover { background-color: #0f766e; }
.btn-primary--dark { background-color: #14b8a6; }
.btn-primary--dark:hover { background-color: #0d9488; }

.btn-outline { background-color: transparent; border-color: #111827; color: #111827; }
.btn-outline:hover { background-color: #f3f4f6; }
.btn-outline--dark { border-color: #ffffff; color: #ffffff; }
.btn-outline--dark:hover { background-color: #1f2937; }

.btn--busy { opacity: 0.75; cursor: not-allowed; }

.icon-link { color: #374151; transition: color 0.3s ease; }
.icon-link:hover { color: #0d9488; }
.icon-link--dark { color: #ffffff; }
.icon-link--dark:hover { color: #2dd4bf; }

/* Hero */
.hero {
    position: relative;
    min-height: 100vh;
    display: flex;
    align-items: center;
    padding-top: 96px;
}

.hero-inner { display: flex; align-items: center; gap: 48px; }
.hero-copy { flex: 1; }
.hero-greeting { font-size: 1.5rem; }
.hero-name { font-size: 3.75rem; font-weight: 700; margin: 8px 0 16px; }
.hero-role { font-size: 1.5rem; margin-bottom: 24px; }
.hero-tagline { font-size: 1.125rem; margin-bottom: 32px; }
.hero-actions { display: flex; flex-wrap: wrap; gap: 16px; margin-bottom: 32px; }
.hero-socials { display: flex; gap: 16px; }
.hero-portrait { flex: 1; display: flex; justify-content: center; }
.hero-portrait img { width: 320px; height: 320px; object-fit: cover; border-radius: 9999px; border: 4px solid #0d9488; }

.scroll-hint {
    position: absolute;
    bottom: 40px;
    left: 50%;
    transform: translateX(-50%);
    animation: bounce 1s ease-in-out 1.2s infinite alternate;
}

/* About */
.about-inner { display: flex; align-items: center; gap: 48px; }
.about-image { flex: 1; }
.about-image img { border-radius: 8px; box-shadow: 0 10px 15px -3px rgba(0, 0, 0, 0.2); }
.about-copy { flex: 1; }
.about-copy h3 { font-size: 1.5rem; font-weight: 600; margin-bottom: 16px; }
.about-copy p { margin-bottom: 16px; }
.about-facts { display: grid; grid-template-columns: 1fr 1fr; gap: 16px; }
.about-facts h4 { font-weight: 600; margin-bottom: 8px; }

/* Cards */
.card { background-color: #ffffff; border-radius: 8px; padding: 24px; box-shadow: 0 10px 15px -3px rgba(0, 0, 0, 0.1); }
.card--dark { background-color: #374151; }

/* Skills */
.skills-grid { display: grid; grid-template-columns: repeat(auto-fit, minmax(300px, 1fr)); gap: 24px; }
.skill-card { padding: 24px; border-radius: 8px; background-color: #f3f4f6; transition: background-color 0.3s ease, transform 0.2s ease; }
.skill-card:hover { background-color: #e5e7eb; transform: scale(1.03); }
.skill-card--dark { background-color: #1f2937; }
.skill-card--dark:hover { background-color: #374151; }
.skill-head { display: flex; justify-content: space-between; margin-bottom: 8px; font-weight: 600; }
.skill-track { width: 100%; height: 10px; border-radius: 9999px; background-color: #d1d5db; overflow: hidden; }
.skill-bar { height: 100%; width: 0; border-radius: 9999px; background-color: #0d9488; transition: width 1s ease; }
.skill-bar--dark { background-color: #2dd4bf; }
.skill-bar.is-visible { width: var(--level); }

/* Experience */
.timeline { position: relative; }
.timeline-line { position: absolute; left: 50%; transform: translateX(-50%); width: 4px; height: 100%; background-color: #d1d5db; }
.timeline-item { display: flex; margin-bottom: 48px; }
.timeline-item--reversed { flex-direction: row-reverse; }
.timeline-card { width: 50%; position: relative; }
.timeline-card h3 { font-size: 1.25rem; font-weight: 700; margin-bottom: 8px; }
.timeline-meta { display: flex; align-items: center; gap: 8px; margin-bottom: 8px; }
.timeline-dot { position: absolute; top: 24px; width: 16px; height: 16px; border-radius: 9999px; background-color: #0d9488; }

/* Projects */
.filters { display: flex; flex-wrap: wrap; justify-content: center; gap: 16px; margin-bottom: 48px; }
.filter-btn { padding: 8px 16px; border: none; border-radius: 9999px; font-size: 0.875rem; font-weight: 500; cursor: pointer; transition: background-color 0.3s ease; }
.filter-btn--active { background-color: #0d9488; color: #ffffff; }
.filter-btn--active--dark { background-color: #14b8a6; }
.filter-btn--idle { background-color: #e5e7eb; color: #374151; }
.filter-btn--idle:hover { background-color: #d1d5db; }
.filter-btn--idle--dark { background-color: #1f2937; color: #d1d5db; }
.filter-btn--idle--dark:hover { background-color: #374151; }

.project-grid { display: grid; grid-template-columns: repeat(auto-fill, minmax(320px, 1fr)); gap: 32px; }
.project-card { border-radius: 8px; overflow: hidden; background-color: #ffffff; box-shadow: 0 10px 15px -3px rgba(0, 0, 0, 0.1); transition: transform 0.3s ease; animation: intro-up 0.5s ease both; }
.project-card:hover { transform: translateY(-10px); }
.project-card--dark { background-color: #1f2937; }
.project-media { position: relative; height: 192px; overflow: hidden; }
.project-media img { width: 100%; height: 100%; object-fit: cover; transition: transform 0.5s ease; }
.project-media img:hover { transform: scale(1.1); }
.project-overlay { position: absolute; inset: 0; display: flex; align-items: center; justify-content: center; gap: 16px; opacity: 0; background-color: rgba(0, 0, 0, 0.2); transition: opacity 0.3s ease; }
.project-overlay:hover { opacity: 1; }
.project-overlay a { padding: 8px; border-radius: 9999px; background-color: #ffffff; color: #111827; }
.project-overlay a:hover { color: #0d9488; }
.project-body { padding: 24px; }
.project-body h3 { font-size: 1.25rem; font-weight: 700; margin-bottom: 8px; }
.project-body p { margin-bottom: 16px; }
.chips { display: flex; flex-wrap: wrap; gap: 8px; margin-bottom: 16px; }
.project-empty { text-align: center; padding: 48px 0; }

.chip { font-size: 0.75rem; padding: 4px 8px; border-radius: 9999px; }
.chip-category { background-color: #e5e7eb; color: #374151; }
.chip-category--dark { background-color: #374151; color: #d1d5db; }
.chip-tech { background-color: #ccfbf1; color: #115e59; }
.chip-tech--dark { background-color: #4b5563; color: #5eead4; }

/* Contact */
.contact-inner { display: flex; gap: 48px; }
.contact-info { flex: 1; display: flex; flex-direction: column; gap: 32px; }
.contact-form { flex: 2; }
.contact-line { display: flex; align-items: flex-start; gap: 16px; margin-bottom: 24px; }
.contact-line h4 { font-weight: 600; }
.card h3 { font-size: 1.25rem; font-weight: 700; margin-bottom: 24px; }
.socials { display: flex; gap: 16px; }
.social-btn { width: 40px; height: 40px; display: flex; align-items: center; justify-content: center; border-radius: 9999px; background-color: #e5e7eb; color: #ffffff; transition: background-color 0.3s ease; }
.social-btn:hover { background-color: #14b8a6; }
.social-btn--dark { background-color: #4b5563; }

.form-row { display: grid; grid-template-columns: 1fr 1fr; gap: 24px; margin-bottom: 24px; }
.form-group { margin-bottom: 24px; }
.form-group label { display: block; margin-bottom: 8px; font-weight: 500; }
.field { width: 100%; padding: 8px 16px; border-radius: 8px; border: 1px solid #d1d5db; background-color: #f3f4f6; color: #111827; font: inherit; }
.field:focus { outline: none; border-color: #0d9488; box-shadow: 0 0 0 2px rgba(13, 148, 136, 0.5); }
.field--dark { border-color: #374151; background-color: #1f2937; color: #ffffff; }
.field--dark:focus { border-color: #2dd4bf; box-shadow: 0 0 0 2px rgba(45, 212, 191, 0.5); }

.banner { margin-bottom: 24px; padding: 16px; border-radius: 8px; border: 1px solid; }
.banner-success { background-color: #dcfce7; border-color: #4ade80; color: #15803d; }
.banner-error { background-color: #fee2e2; border-color: #f87171; color: #b91c1c; }

.spinner { animation: spin 1s linear infinite; }

/* Footer */
.footer-top { display: flex; justify-content: space-between; align-items: center; }
.footer-top h3 { font-size: 1.5rem; font-weight: 700; margin-bottom: 8px; }
.footer-bottom { display: flex; justify-content: space-between; margin-top: 32px; padding-top: 32px; border-top: 1px solid #d1d5db; font-size: 0.875rem; }
.footer-links { display: flex; gap: 24px; }
.to-top { padding: 12px; border: none; border-radius: 9999px; cursor: pointer; background-color: #ffffff; color: #111827; box-shadow: 0 10px 15px -3px rgba(0, 0, 0, 0.1); }
.to-top:hover { background-color: #e5e7eb; }
.to-top--dark { background-color: #1f2937; color: #ffffff; }
.to-top--dark:hover { background-color: #374151; }

/* Entrance animations */
.reveal { opacity: 0; transition: opacity 0.6s ease, transform 0.6s ease; }
.reveal--up { transform: translateY(30px); }
.reveal--left { transform: translateX(-50px); }
.reveal--right { transform: translateX(50px); }
.reveal--zoom { transform: scale(0.8); }
.reveal.is-visible { opacity: 1; transform: none; }

.intro { animation: intro-up 0.5s ease both; }
.intro--left { animation-name: intro-left; }
.intro--down { animation-name: intro-down; }
.intro--fade { animation-name: intro-fade; }
.intro--zoom { animation-name: intro-zoom; }

@keyframes intro-up { from { opacity: 0; transform: translateY(20px); } to { opacity: 1; transform: none; } }
@keyframes intro-down { from { opacity: 0; transform: translateY(-10px); } to { opacity: 1; transform: none; } }
@keyframes intro-left { from { opacity: 0; transform: translateX(-20px); } to { opacity: 1; transform: none; } }
@keyframes intro-fade { from { opacity: 0; } to { opacity: 1; } }
@keyframes intro-zoom { from { opacity: 0; transform: scale(0.8); } to { opacity: 1; transform: none; } }
@keyframes bounce { from { transform: translate(-50%, 0); } to { transform: translate(-50%, 10px); } }
@keyframes spin { to { transform: rotate(360deg); } }

/* Responsive */
@media (max-width: 768px) {
    .desktop-nav { display: none; }
    .mobile-bar { display: flex; }
    .hero-inner, .about-inner, .contact-inner, .footer-top, .footer-bottom { flex-direction: column; }
    .hero-name { font-size: 2.5rem; }
    .form-row { grid-template-columns: 1fr; }
    .timeline-line, .timeline-dot { display: none; }
    .timeline-item, .timeline-item--reversed { flex-direction: column; }
    .timeline-card { width: 100%; }
}

@media (min-width: 769px) {
    .mobile-menu { display: none; }
}
"#;

/// Fallback for visitors without JavaScript: nothing stays hidden.
pub const NOSCRIPT_CSS: &str = ".reveal { opacity: 1 !important; transform: none !important; } \
.skill-bar { width: var(--level) !important; }";

/// Inject global CSS into the document
pub fn inject_global_css() -> Element {
    rsx! {
        style { dangerous_inner_html: GLOBAL_CSS }
    }
}
