//! CSS for the landing page.
//!
//! The page ships as one self-contained document, so the stylesheet is
//! inlined into `<head>`. Mobile first; the `768px` breakpoint switches the
//! grids to their desktop column counts.
//!
//! # Customization
//!
//! ```rust
//! use tcg_page::styles::PAGE_CSS;
//!
//! let my_css = ".pack-card { border-color: gold; }";
//! let combined = format!("{}\n{}", PAGE_CSS, my_css);
//! assert!(combined.contains("gold"));
//! ```

/// Complete stylesheet - navy/crimson card-game palette.
///
/// Hover states are the only interactive styling on the page.
pub const PAGE_CSS: &str = r#"
:root {
    --bg-page: #1a1a2e;
    --bg-panel: #16213e;
    --bg-accent: #0f3460;
    --accent: #e94560;
    --accent-hover: #d63850;
    --text: #e0e0e0;
    --text-muted: #a0a0a0;
    --border-subtle: #4a5568;
    --text-faint: #666666;
}

* { box-sizing: border-box; }

body {
    margin: 0;
    min-height: 100vh;
    background: var(--bg-page);
    color: var(--text);
    font-family: ui-sans-serif, system-ui, -apple-system, "Segoe UI", Roboto, sans-serif;
}

h1, h2, h3, p { margin: 0; }

button { font-family: inherit; cursor: pointer; }

.anchor-target {
    display: block;
    width: 0;
    height: 0;
    overflow: hidden;
}

/* Header */
.site-header {
    background: var(--bg-panel);
    border-bottom: 2px solid var(--bg-accent);
    padding: 16px;
    display: flex;
    justify-content: space-between;
    align-items: center;
}
.site-logo { display: flex; align-items: center; height: 40px; }
.site-logo img { height: 100%; }
.site-nav { display: flex; gap: 16px; }
.nav-link {
    color: var(--text);
    text-decoration: none;
    font-size: 14px;
    transition: color 0.15s;
}
.nav-link:hover { color: var(--accent); }

/* Hero */
.hero {
    background: var(--bg-accent);
    border: 2px solid var(--accent);
    padding: 32px 16px;
    display: flex;
    flex-direction: column;
    gap: 32px;
    align-items: center;
}
.hero-copy, .hero-art { flex: 1; width: 100%; }
.hero-art { display: flex; align-items: center; justify-content: center; }
.hero-art img {
    width: 100%;
    height: auto;
    max-height: 240px;
    object-fit: contain;
    border-radius: 8px;
}
.hero-title {
    font-size: 30px;
    font-weight: 700;
    line-height: 1.2;
    margin-bottom: 16px;
}
.hero-tagline {
    font-size: 16px;
    color: var(--text-muted);
    margin-bottom: 24px;
}
.text-line { display: block; }
.hero-actions { display: flex; flex-direction: column; gap: 16px; }
.btn {
    border: 2px solid var(--accent);
    border-radius: 6px;
    padding: 12px 32px;
    font-size: 14px;
    font-weight: 700;
    transition: background-color 0.15s, color 0.15s;
}
.btn-primary { background: var(--accent); color: #ffffff; }
.btn-primary:hover { background: var(--accent-hover); }
.btn-secondary {
    background: transparent;
    color: var(--text);
    border-color: var(--text);
}
.btn-secondary:hover { background: var(--text); color: var(--bg-accent); }

/* Shared section chrome */
.section {
    padding: 32px 16px;
    border: 2px solid var(--bg-accent);
}
.section-dark { background: var(--bg-page); }
.section-accent { background: var(--bg-accent); border-color: var(--bg-panel); }
.section-title {
    font-size: 24px;
    font-weight: 700;
    text-align: center;
    margin-bottom: 8px;
}
.section-rule {
    width: 200px;
    height: 2px;
    background: var(--accent);
    margin: 0 auto 32px;
}

/* Features */
.features-grid { display: grid; grid-template-columns: 1fr; gap: 24px; }
.feature-card {
    background: var(--bg-panel);
    border: 2px solid var(--bg-accent);
    border-radius: 8px;
    padding: 24px;
    text-align: center;
}
.feature-icon {
    width: 60px;
    height: 60px;
    border: 2px solid var(--accent);
    border-radius: 50%;
    margin: 0 auto 24px;
    display: flex;
    align-items: center;
    justify-content: center;
    font-size: 20px;
}
.card-title { font-size: 18px; font-weight: 700; margin-bottom: 12px; }
.card-text { font-size: 14px; color: var(--text-muted); }

/* Packs */
.packs-row {
    display: flex;
    flex-direction: column;
    gap: 24px;
    justify-content: center;
    align-items: center;
}
.pack-card {
    background: var(--bg-panel);
    border: 2px solid var(--accent);
    border-radius: 8px;
    padding: 16px;
    width: 100%;
    max-width: 250px;
    text-align: center;
}
.pack-art {
    height: 120px;
    margin-bottom: 12px;
    display: flex;
    align-items: center;
    justify-content: center;
    overflow: hidden;
}
.pack-art img { width: 100%; height: 100%; object-fit: cover; border-radius: 4px; }
.pack-price { color: var(--accent); font-weight: 700; }
.packs-more {
    display: none;
    border: 1px dashed var(--border-subtle);
    border-radius: 8px;
    width: 100px;
    height: 250px;
    align-items: center;
    justify-content: center;
    color: var(--text-faint);
    font-size: 24px;
}

/* Releases */
.releases-grid { display: grid; grid-template-columns: 1fr; gap: 24px; }
.release-card {
    background: var(--bg-panel);
    border: 2px solid var(--bg-accent);
    border-radius: 8px;
    padding: 16px;
}
.release-body { display: flex; gap: 12px; margin-bottom: 12px; }
.release-thumb {
    width: 64px;
    height: 64px;
    flex-shrink: 0;
    display: flex;
    align-items: center;
    justify-content: center;
    overflow: hidden;
    border-radius: 4px;
}
.release-thumb img { width: 100%; height: 100%; object-fit: cover; }
.release-date { font-size: 12px; color: var(--accent); margin-bottom: 4px; }
.release-cta {
    background: transparent;
    color: var(--accent);
    border: 2px solid var(--accent);
    border-radius: 4px;
    padding: 8px 16px;
    font-size: 12px;
    width: 100%;
    transition: background-color 0.15s, color 0.15s;
}
.release-cta:hover { background: var(--accent); color: #ffffff; }

/* Company info */
.info-grid { display: grid; grid-template-columns: 1fr; gap: 32px; }
.info-column { text-align: center; }
.info-text { font-size: 12px; color: var(--text-muted); }
.newsletter-input {
    display: block;
    background: var(--bg-panel);
    border: 1px solid var(--border-subtle);
    border-radius: 4px;
    padding: 8px;
    width: 100%;
    max-width: 200px;
    margin: 0 auto 8px;
    color: var(--text);
    font-size: 12px;
    text-align: center;
}
.newsletter-input::placeholder { color: var(--text-faint); }
.newsletter-button {
    background: var(--accent);
    color: #ffffff;
    border: 2px solid var(--accent);
    border-radius: 4px;
    padding: 8px 24px;
    font-size: 12px;
    font-weight: 700;
    width: 100%;
    max-width: 200px;
    transition: background-color 0.15s;
}
.newsletter-button:hover { background: var(--accent-hover); }

/* Footer */
.site-footer {
    background: var(--bg-panel);
    border: 2px solid var(--bg-accent);
    padding: 24px 16px;
    display: flex;
    flex-direction: column;
    gap: 16px;
    justify-content: space-between;
    align-items: center;
}
.footer-copyright { font-size: 12px; color: var(--text-muted); text-align: center; }
.footer-links { display: flex; gap: 16px; }
.footer-link {
    font-size: 12px;
    color: var(--text-muted);
    text-decoration: none;
    transition: color 0.15s;
}
.footer-link:hover { color: var(--accent); }

/* Placeholder variant */
.asset-placeholder {
    width: 100%;
    height: 100%;
    min-height: 40px;
    display: flex;
    align-items: center;
    justify-content: center;
    padding: 8px;
    border: 2px dashed var(--border-subtle);
    border-radius: 4px;
    color: var(--text-faint);
    font-size: 11px;
    text-align: center;
}
.asset-empty { width: 100%; height: 100%; }

@media (min-width: 768px) {
    .site-header { padding: 24px 48px; }
    .site-logo { height: 48px; }
    .site-nav { gap: 32px; }
    .nav-link { font-size: 16px; }
    .hero { flex-direction: row; padding: 80px 96px; gap: 64px; }
    .hero-art img { max-height: 340px; }
    .hero-title { font-size: 48px; margin-bottom: 24px; }
    .hero-tagline { font-size: 18px; margin-bottom: 40px; }
    .hero-actions { flex-direction: row; gap: 24px; }
    .btn { padding: 14px 40px; font-size: 16px; }
    .section { padding: 64px 96px; }
    .section-title { font-size: 36px; }
    .section-rule { width: 300px; margin-bottom: 48px; }
    .features-grid, .releases-grid { grid-template-columns: repeat(3, 1fr); gap: 32px; }
    .feature-card { padding: 40px; }
    .feature-icon { width: 70px; height: 70px; font-size: 24px; margin-bottom: 32px; }
    .packs-row { flex-direction: row; gap: 32px; }
    .pack-card { width: 250px; padding: 20px; }
    .pack-art { height: 150px; margin-bottom: 16px; }
    .packs-more { display: flex; }
    .release-card { padding: 24px; }
    .release-thumb { width: 80px; height: 80px; }
    .release-cta { width: 120px; font-size: 13px; }
    .info-grid { grid-template-columns: repeat(4, 1fr); gap: 48px; }
    .info-text { font-size: 13px; }
    .newsletter-input, .newsletter-button { width: 160px; }
    .site-footer { flex-direction: row; gap: 0; padding: 32px 96px; }
    .footer-copyright { text-align: left; }
    .footer-links { gap: 32px; }
}
"#;

/// Content Security Policy for the rendered document.
///
/// No scripts at all. Images may come from any origin: the manifest can
/// point at any base URL or override, so the policy must not block what it
/// resolves.
pub const CSP: &str = "default-src 'self'; img-src * data:; style-src 'self' 'unsafe-inline'; script-src 'none'; form-action 'none';";
