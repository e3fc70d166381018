//! CSS for the site.
//!
//! One stylesheet covers every component. The static exporter either inlines
//! it into each document or writes it once as `styles.css`.

/// Stylesheet file name used when CSS is not inlined.
pub const STYLESHEET_FILE: &str = "styles.css";

/// Complete CSS for the site.
///
/// Covers:
/// - Header bar with brand and anchor links
/// - Hero banner and call-to-action button
/// - Responsive three-column feature grid
/// - 404 view
pub const SITE_CSS: &str = r#"
:root {
    --brand: #0b3d91;
    --brand-light: #e8eef9;
    --accent: #f5a623;
    --text: #1d1d1f;
    --text-muted: #5a5a66;
    --surface: #ffffff;
    --radius: 12px;
    --font: "Inter", system-ui, -apple-system, "Segoe UI", Roboto, sans-serif;
}

* {
    box-sizing: border-box;
}

body {
    margin: 0;
    font-family: var(--font);
    color: var(--text);
    background: var(--surface);
}

.app {
    min-height: 100vh;
    display: flex;
    flex-direction: column;
}

main {
    flex: 1;
}

/* Navigation */
.nav {
    display: flex;
    align-items: center;
    justify-content: space-between;
    padding: 1rem 2rem;
    background: var(--brand);
    color: #fff;
}

.nav .logo h1 {
    margin: 0;
    font-size: 1.5rem;
}

.nav-links {
    display: flex;
    gap: 1.5rem;
    margin: 0;
    padding: 0;
    list-style: none;
}

.nav-links a {
    color: #fff;
    text-decoration: none;
    font-weight: 500;
}

.nav-links a:hover {
    text-decoration: underline;
}

/* Hero */
.hero {
    padding: 5rem 2rem;
    text-align: center;
    background: linear-gradient(135deg, var(--brand-light), #fff);
}

.hero h1 {
    margin: 0 0 1rem;
    font-size: 2.75rem;
    color: var(--brand);
}

.hero p {
    margin: 0 0 2rem;
    font-size: 1.25rem;
    color: var(--text-muted);
}

.cta-button {
    padding: 0.875rem 2rem;
    border: none;
    border-radius: var(--radius);
    background: var(--accent);
    color: var(--text);
    font-size: 1rem;
    font-weight: 600;
    cursor: pointer;
}

.cta-button:hover {
    filter: brightness(0.95);
}

/* Features */
.features {
    padding: 4rem 2rem;
}

.features-grid {
    display: grid;
    grid-template-columns: repeat(3, minmax(0, 1fr));
    gap: 2rem;
    max-width: 1100px;
    margin: 0 auto;
}

.feature-card {
    padding: 2rem;
    border-radius: var(--radius);
    background: var(--surface);
    box-shadow: 0 4px 16px rgba(11, 61, 145, 0.08);
}

.feature-card h3 {
    margin: 0 0 0.75rem;
    color: var(--brand);
}

.feature-card p {
    margin: 0;
    line-height: 1.6;
    color: var(--text-muted);
}

@media (max-width: 768px) {
    .features-grid {
        grid-template-columns: 1fr;
    }

    .hero h1 {
        font-size: 2rem;
    }
}

/* Home */
.home-page {
    display: flex;
    flex-direction: column;
}

/* 404 */
.not-found {
    padding: 6rem 2rem;
    text-align: center;
    color: var(--text-muted);
}
"#;
