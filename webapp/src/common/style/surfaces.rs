// one block per folio::surface::Surface, light rules first
pub const SURFACE_STYLES: &str = r#"
/* Cards */
.glass-card {
  border-radius: var(--radius-xl);
  padding: var(--space-6);
  border: 1px solid;
  backdrop-filter: var(--blur-md);
  transition: all var(--transition-normal) var(--easing-standard);
}

.glass-card.hoverable { cursor: pointer; }
.glass-card.hoverable:hover { transform: translateY(-4px); }

.glass-card.light {
  background-color: var(--light-glass);
  border-color: rgba(255, 255, 255, 0.3);
  box-shadow: 0 10px 15px -3px rgba(0, 0, 0, 0.1);
}

.glass-card.hoverable.light:hover {
  background-color: var(--light-glass-strong);
  box-shadow: 0 20px 25px -5px rgba(59, 130, 246, 0.2);
}

.glass-card.dark {
  background-color: var(--dark-glass);
  border-color: rgba(255, 255, 255, 0.1);
  box-shadow: 0 25px 50px -12px rgba(0, 0, 0, 0.5);
}

.glass-card.hoverable.dark:hover {
  background-color: var(--dark-glass-strong);
  box-shadow: 0 0 30px rgba(6, 182, 212, 0.3);
}

.glass-card.flush {
  padding: 0;
  overflow: hidden;
}

/* Buttons */
.glass-button {
  display: inline-flex;
  align-items: center;
  justify-content: center;
  gap: var(--space-2);
  padding: var(--space-4) var(--space-8);
  border-radius: var(--radius-lg);
  border: 1px solid;
  backdrop-filter: var(--blur-sm);
  font-weight: 500;
  cursor: pointer;
  transition: all var(--transition-normal) var(--easing-standard);
}

.glass-button:hover { transform: scale(1.05); }
.glass-button.wide { width: 100%; }

.glass-button.primary.light {
  background-color: rgba(59, 130, 246, 0.8);
  border-color: rgba(255, 255, 255, 0.3);
  color: #FFFFFF;
  box-shadow: 0 10px 15px -3px rgba(0, 0, 0, 0.1);
}

.glass-button.primary.light:hover {
  background-color: rgba(37, 99, 235, 0.9);
  box-shadow: 0 10px 15px -3px rgba(59, 130, 246, 0.5);
}

.glass-button.primary.dark {
  background-color: var(--cyan-500);
  border-color: rgba(34, 211, 238, 0.3);
  color: #000000;
  box-shadow: var(--glow-cyan);
}

.glass-button.primary.dark:hover {
  background-color: var(--cyan-400);
  box-shadow: var(--glow-cyan-strong);
}

.glass-button.secondary.light {
  background-color: var(--light-glass);
  border-color: var(--light-border);
  color: var(--gray-800);
}

.glass-button.secondary.dark {
  background-color: rgba(255, 255, 255, 0.15);
  border-color: rgba(255, 255, 255, 0.3);
  color: #FFFFFF;
}

.glass-button.secondary.dark:hover {
  box-shadow: 0 0 20px rgba(255, 255, 255, 0.3);
}

/* Inputs */
.glass-input {
  width: 100%;
  padding: var(--space-4) var(--space-6);
  border-radius: var(--radius-lg);
  border: 1px solid;
  backdrop-filter: var(--blur-sm);
  outline: none;
  resize: none;
  font: inherit;
  transition: all var(--transition-normal) var(--easing-standard);
}

.glass-input.light {
  background-color: var(--light-glass-soft);
  border-color: var(--light-border);
  color: var(--gray-800);
}

.glass-input.light::placeholder { color: var(--gray-500); }

.glass-input.light:focus {
  background-color: var(--light-glass);
  border-color: var(--blue-400);
  box-shadow: 0 10px 15px -3px rgba(59, 130, 246, 0.2);
}

.glass-input.dark {
  background-color: var(--dark-glass);
  border-color: var(--dark-border);
  color: #FFFFFF;
}

.glass-input.dark::placeholder { color: var(--gray-400); }

.glass-input.dark:focus {
  background-color: var(--dark-glass-strong);
  border-color: var(--blue-400);
  box-shadow: var(--glow-blue);
}

/* Tags */
.skill-tag,
.tag-pill {
  display: inline-flex;
  align-items: center;
  gap: var(--space-2);
  border: 1px solid;
  backdrop-filter: var(--blur-sm);
  transition: all var(--transition-normal) var(--easing-standard);
}

.skill-tag {
  padding: var(--space-2) var(--space-4);
  border-radius: var(--radius-md);
}

.tag-pill {
  padding: var(--space-1) var(--space-3);
  border-radius: var(--radius-sm);
}

.skill-tag.light,
.tag-pill.light {
  background-color: var(--light-glass-soft);
  border-color: var(--light-border);
  color: var(--gray-800);
}

.skill-tag.dark,
.tag-pill.dark {
  background-color: var(--dark-glass-soft);
  border-color: var(--dark-border);
  color: #FFFFFF;
}

.tag-pill.dark { color: var(--gray-300); }

/* Filter tabs */
.filter-tab {
  padding: var(--space-3) var(--space-6);
  border-radius: var(--radius-lg);
  border: 1px solid;
  backdrop-filter: var(--blur-sm);
  cursor: pointer;
  transition: all var(--transition-normal) var(--easing-standard);
}

.filter-tab.light {
  background-color: var(--light-glass-soft);
  border-color: var(--light-border);
  color: var(--gray-800);
}

.filter-tab.dark {
  background-color: var(--dark-glass-soft);
  border-color: var(--dark-border);
  color: var(--gray-300);
}

.filter-tab.active.light {
  background-color: rgba(59, 130, 246, 0.8);
  border-color: rgba(255, 255, 255, 0.3);
  color: #FFFFFF;
  box-shadow: 0 10px 15px -3px rgba(59, 130, 246, 0.3);
}

.filter-tab.active.dark {
  background-color: var(--cyan-500);
  border-color: rgba(34, 211, 238, 0.3);
  color: #000000;
  box-shadow: var(--glow-cyan);
}

/* Navigation bar */
.site-nav {
  position: fixed;
  top: 0;
  left: 0;
  right: 0;
  z-index: 50;
  backdrop-filter: var(--blur-lg);
  border-bottom: 1px solid;
  transition: all var(--transition-slow) var(--easing-standard);
}

.site-nav.light {
  background-color: var(--light-glass);
  border-color: rgba(229, 231, 235, 0.5);
  box-shadow: 0 1px 2px 0 rgba(0, 0, 0, 0.05);
}

.site-nav.dark {
  background-color: rgba(0, 0, 0, 0.4);
  border-color: rgba(255, 255, 255, 0.1);
  box-shadow: 0 10px 15px -3px rgba(0, 0, 0, 0.3);
}

.site-nav.scrolled.light {
  background-color: rgba(255, 255, 255, 0.9);
  box-shadow: 0 10px 15px -3px rgba(0, 0, 0, 0.1);
}

.site-nav.scrolled.dark {
  background-color: rgba(0, 0, 0, 0.7);
}

.nav-container {
  display: flex;
  align-items: center;
  justify-content: space-between;
  max-width: 1280px;
  margin: 0 auto;
  padding: var(--space-4) var(--space-6);
}

.site-nav.scrolled .nav-container {
  padding-top: var(--space-3);
  padding-bottom: var(--space-3);
}

.nav-links {
  display: flex;
  align-items: center;
  gap: var(--space-8);
}

.nav-link {
  position: relative;
  padding-bottom: var(--space-1);
  font-size: 0.875rem;
  transition: all var(--transition-normal) var(--easing-standard);
}

.nav-link.light { color: var(--gray-600); }
.nav-link.light:hover { color: var(--gray-900); }
.nav-link.dark { color: var(--gray-400); }
.nav-link.dark:hover { color: #FFFFFF; }

.nav-link.active { font-weight: 500; }
.nav-link.active.light { color: var(--gray-900); }
.nav-link.active.dark { color: #FFFFFF; }

.nav-link .underline {
  position: absolute;
  left: 0;
  right: 0;
  bottom: -4px;
  height: 2px;
  border-radius: var(--radius-full);
}

.nav-link.light .underline { background-color: var(--gray-900); }
.nav-link.dark .underline { background-color: #FFFFFF; }

.theme-toggle {
  display: flex;
  align-items: center;
  justify-content: center;
  width: 36px;
  height: 36px;
  border: none;
  border-radius: var(--radius-full);
  cursor: pointer;
  transition: all var(--transition-normal) var(--easing-standard);
}

.theme-toggle.light { background-color: var(--gray-100); color: var(--gray-700); }
.theme-toggle.light:hover { background-color: var(--gray-200); }
.theme-toggle.dark { background-color: rgba(255, 255, 255, 0.1); color: #FFFFFF; }
.theme-toggle.dark:hover { background-color: rgba(255, 255, 255, 0.2); }

.back-button {
  display: inline-flex;
  align-items: center;
  gap: var(--space-2);
  margin-bottom: var(--space-8);
  padding: var(--space-2) var(--space-4);
  border-radius: var(--radius-md);
  border: 1px solid;
  backdrop-filter: var(--blur-sm);
  cursor: pointer;
  transition: all var(--transition-normal) var(--easing-standard);
}

.back-button.light {
  background-color: var(--light-glass-soft);
  border-color: var(--light-border);
  color: var(--gray-800);
}

.back-button.light:hover { background-color: var(--light-glass-strong); }

.back-button.dark {
  background-color: var(--dark-glass-soft);
  border-color: var(--dark-border);
  color: #FFFFFF;
}

.back-button.dark:hover { background-color: rgba(255, 255, 255, 0.15); }

/* Icon badges */
.icon-badge {
  display: flex;
  flex-shrink: 0;
  align-items: center;
  justify-content: center;
  width: 48px;
  height: 48px;
  border-radius: var(--radius-md);
  background-color: rgba(59, 130, 246, 0.2);
}

.icon-badge.small { width: 40px; height: 40px; border-radius: 10px; }
.icon-badge.large { width: 56px; height: 56px; font-size: 1.5rem; }
.icon-badge.light { color: var(--blue-600); }
.icon-badge.dark { color: var(--blue-400); }

/* Panels */
.panel {
  padding: var(--space-4);
  border-radius: var(--radius-md);
  border: 1px solid;
}

.panel.success { padding: var(--space-6); border-radius: var(--radius-lg); text-align: center; }
.panel.success.light { background-color: rgba(240, 253, 244, 0.5); border-color: rgba(187, 247, 208, 0.5); color: var(--green-800); }
.panel.success.dark { background-color: rgba(34, 197, 94, 0.1); border-color: rgba(34, 197, 94, 0.2); color: var(--green-400); }

.panel.quote { font-style: italic; }
.panel.quote.light { background-color: rgba(239, 246, 255, 0.5); border-color: rgba(191, 219, 254, 0.5); color: var(--gray-800); }
.panel.quote.dark { background-color: rgba(59, 130, 246, 0.1); border-color: rgba(59, 130, 246, 0.2); color: var(--gray-200); }

.panel.achievement { border-radius: var(--radius-lg); backdrop-filter: var(--blur-sm); }
.panel.achievement.light { background-color: rgba(59, 130, 246, 0.1); border-color: rgba(59, 130, 246, 0.2); color: var(--gray-700); }
.panel.achievement.dark { background-color: rgba(59, 130, 246, 0.1); border-color: rgba(59, 130, 246, 0.3); color: var(--gray-300); }

.panel.feature { backdrop-filter: var(--blur-sm); }
.panel.feature.light { background-color: var(--light-glass-soft); border-color: var(--light-border); color: var(--gray-800); }
.panel.feature.dark { background-color: var(--dark-glass-soft); border-color: var(--dark-border); color: var(--gray-200); }

/* Footer */
.site-footer {
  padding: var(--space-8) 0;
  border-top: 1px solid;
  backdrop-filter: var(--blur-sm);
}

.site-footer.light { background-color: var(--light-glass-soft); border-color: rgba(229, 231, 235, 0.5); color: var(--gray-600); }
.site-footer.dark { background-color: rgba(0, 0, 0, 0.4); border-color: rgba(255, 255, 255, 0.1); color: var(--gray-400); }

.footer-container {
  display: flex;
  flex-wrap: wrap;
  align-items: center;
  justify-content: center;
  gap: var(--space-6);
  font-size: 0.875rem;
}

.footer-links {
  display: flex;
  gap: var(--space-4);
}

.site-footer a { transition: color var(--transition-normal) var(--easing-standard); }
.site-footer.light a:hover { color: var(--gray-900); }
.site-footer.dark a:hover { color: #FFFFFF; }

/* Text tones */
.text.heading.light { color: var(--light-text-primary); }
.text.heading.dark { color: var(--dark-text-primary); }
.text.body.light { color: var(--light-text-body); }
.text.body.dark { color: var(--dark-text-body); }
.text.muted.light { color: var(--light-text-muted); }
.text.muted.dark { color: var(--dark-text-muted); }
.text.accent.light { color: var(--light-accent); }
.text.accent.dark { color: var(--dark-accent); }
"#;
