use constcat::concat;

mod motion;
mod pages;
mod surfaces;
mod variables;

pub use motion::MOTION_STYLES;
pub use pages::PAGE_STYLES;
pub use surfaces::SURFACE_STYLES;
pub use variables::CSS_VARIABLES;

// everything the site renders with, bundled into the single style element in App
pub const SITE_STYLES: &str = concat!(
    r#"
/* Global resets and base styles */
html[data-theme="light"] {
  color-scheme: light;
  background: var(--light-background);
}

html[data-theme="dark"] {
  color-scheme: dark;
  background: var(--dark-background);
}

* {
  margin: 0;
  padding: 0;
  box-sizing: border-box;
}

body {
  font-family: system-ui, -apple-system, BlinkMacSystemFont, 'Segoe UI', Roboto, Oxygen, Ubuntu, Cantarell, sans-serif;
  line-height: 1.5;
}

a {
  color: inherit;
  text-decoration: none;
}

button {
  font: inherit;
}

h1 { font-size: 3rem; font-weight: 600; letter-spacing: -0.02em; }
h2 { font-size: 1.75rem; font-weight: 600; }
h3 { font-size: 1.25rem; font-weight: 600; }
h4 { font-size: 1.125rem; font-weight: 500; }
"#,
    CSS_VARIABLES,
    SURFACE_STYLES,
    MOTION_STYLES,
    PAGE_STYLES,
    r#"
/* Application shell */
.site-backdrop {
  position: relative;
  display: flex;
  flex-direction: column;
  min-height: 100vh;
  transition: background var(--transition-slow) var(--easing-standard),
              color var(--transition-slow) var(--easing-standard);
}

.site-backdrop.light {
  background: var(--light-background);
  color: var(--light-text-primary);
}

.site-backdrop.dark {
  background: var(--dark-background);
  color: var(--dark-text-primary);
}

.site-main {
  flex: 1;
}

.nav-spacer {
  height: var(--header-height);
}

.page {
  min-height: 100vh;
  padding: var(--space-16) var(--space-6);
}

.page-narrow { max-width: 896px; margin: 0 auto; }
.page-medium { max-width: 1152px; margin: 0 auto; }
.page-wide { max-width: 1280px; margin: 0 auto; }

.page-header {
  text-align: center;
  margin-bottom: var(--space-12);
}

.page-header h1 {
  margin-bottom: var(--space-4);
}

.section-title {
  text-align: center;
  margin-bottom: var(--space-8);
}

.stack > * + * {
  margin-top: var(--space-6);
}

.tag-row {
  display: flex;
  flex-wrap: wrap;
  gap: var(--space-2);
}
"#
);
