// layout for the individual pages; colors come from the surface classes
pub const PAGE_STYLES: &str = r#"
/* Navigation brand */
.nav-brand {
  font-weight: 600;
  font-size: 1.125rem;
}

/* Home */
.home-page {
  position: relative;
  display: flex;
  flex-direction: column;
  align-items: center;
  justify-content: center;
  overflow: hidden;
}

.home-orbs {
  position: absolute;
  inset: 0;
  pointer-events: none;
  z-index: 0;
}

.orb {
  position: absolute;
  width: 384px;
  height: 384px;
  border-radius: var(--radius-full);
  filter: blur(64px);
}

.orb-one { top: 10%; left: 10%; }
.orb-two { bottom: 10%; right: 10%; }
.orb-three { top: 50%; left: 50%; transform: translate(-50%, -50%); }

.home-orbs.light .orb-one { background-color: rgba(96, 165, 250, 0.2); }
.home-orbs.light .orb-two { background-color: rgba(192, 132, 252, 0.2); }
.home-orbs.light .orb-three { background-color: rgba(34, 211, 238, 0.15); }
.home-orbs.dark .orb-one { background-color: rgba(59, 130, 246, 0.1); }
.home-orbs.dark .orb-two { background-color: rgba(168, 85, 247, 0.1); }
.home-orbs.dark .orb-three { background-color: rgba(6, 182, 212, 0.08); }

.hero {
  position: relative;
  z-index: 1;
  max-width: 1024px;
  text-align: center;
}

.hero-badge {
  margin-bottom: var(--space-8);
  padding: var(--space-2) var(--space-4);
  border-radius: var(--radius-full);
}

.hero-title { font-size: 4rem; margin-bottom: var(--space-6); }
.hero-role { font-size: 1.5rem; margin-bottom: var(--space-4); }
.hero-disciplines { margin-bottom: var(--space-12); }

.hero-actions {
  display: flex;
  flex-wrap: wrap;
  justify-content: center;
  gap: var(--space-4);
}

.highlights {
  position: relative;
  z-index: 1;
  display: grid;
  grid-template-columns: repeat(auto-fit, minmax(160px, 1fr));
  gap: var(--space-4);
  width: 100%;
  max-width: 1024px;
  margin-top: var(--space-20);
}

.highlight-card { text-align: center; }
.highlight-count { margin-bottom: var(--space-2); }

/* Portfolio */
.filter-tabs {
  display: flex;
  flex-wrap: wrap;
  justify-content: center;
  gap: var(--space-3);
  margin-bottom: var(--space-12);
}

.project-grid {
  display: grid;
  grid-template-columns: repeat(auto-fill, minmax(320px, 1fr));
  gap: var(--space-6);
}

.project-image {
  position: relative;
  aspect-ratio: 16 / 10;
  overflow: hidden;
}

.project-image img {
  width: 100%;
  height: 100%;
  object-fit: cover;
  transition: transform var(--transition-slow) var(--easing-standard);
}

.project-card:hover .project-image img { transform: scale(1.05); }

.project-category {
  position: absolute;
  top: var(--space-4);
  left: var(--space-4);
}

.project-body { padding: var(--space-6); }
.project-body h3,
.project-body p { margin-bottom: var(--space-3); }

/* Case study */
.case-study-page > * + * { margin-top: var(--space-8); }

.case-header h1,
.case-header p { margin-bottom: var(--space-4); }

.case-meta {
  display: flex;
  gap: var(--space-3);
  margin-bottom: var(--space-4);
}

.case-hero img {
  display: block;
  width: 100%;
  aspect-ratio: 16 / 9;
  object-fit: cover;
}

.case-section h2 { margin-bottom: var(--space-4); }
.case-section p + p,
.case-section p + .panel { margin-top: var(--space-4); }

.process-step {
  display: flex;
  gap: var(--space-4);
}

.process-step .icon-badge { flex-shrink: 0; }
.process-step h4 { margin-bottom: var(--space-2); }

.feature-grid {
  display: grid;
  grid-template-columns: repeat(auto-fill, minmax(220px, 1fr));
  gap: var(--space-4);
  margin-top: var(--space-6);
}

.feature-grid .panel { padding: var(--space-4); border-radius: var(--radius-md); }

.case-cta { text-align: center; }

/* About */
.profile-card {
  display: grid;
  grid-template-columns: 300px 1fr;
  gap: var(--space-8);
  align-items: start;
  margin-bottom: var(--space-16);
}

.profile-photo { position: relative; }

.profile-frame {
  aspect-ratio: 1;
  border-radius: 20px;
  overflow: hidden;
  border: 4px solid;
  box-shadow: 0 20px 25px -5px rgba(0, 0, 0, 0.1);
}

.profile-frame.light { border-color: rgba(255, 255, 255, 0.5); }
.profile-frame.dark { border-color: rgba(255, 255, 255, 0.1); }

.profile-image {
  width: 100%;
  height: 100%;
  object-fit: cover;
}

.status-badge {
  position: absolute;
  bottom: calc(-1 * var(--space-4));
  left: 50%;
  transform: translateX(-50%);
  padding: var(--space-2) var(--space-4);
  border-radius: var(--radius-full);
  white-space: nowrap;
}

.profile-bio { padding-top: var(--space-4); }
.profile-bio h2,
.profile-bio p { margin-bottom: var(--space-4); }

.about-section { margin-bottom: var(--space-16); }

.skill-grid {
  display: grid;
  grid-template-columns: repeat(auto-fill, minmax(400px, 1fr));
  gap: var(--space-6);
}

.skill-group-heading {
  display: flex;
  align-items: center;
  gap: var(--space-3);
  margin-bottom: var(--space-4);
}

.experience-row {
  display: flex;
  gap: var(--space-4);
}

.experience-text { flex: 1; }

.experience-heading {
  display: flex;
  align-items: flex-start;
  justify-content: space-between;
  margin-bottom: var(--space-2);
}

/* Contact */
.contact-grid {
  display: grid;
  grid-template-columns: 1fr 400px;
  gap: var(--space-8);
}

.contact-grid h2 { margin-bottom: var(--space-6); }
.contact-grid h3 { margin-bottom: var(--space-4); }

.contact-form > * + * { margin-top: var(--space-6); }

.field-pair {
  display: grid;
  grid-template-columns: 1fr 1fr;
  gap: var(--space-6);
}

.sent-glyph { font-size: 3rem; margin-bottom: var(--space-4); }
.sent-panel h3 { margin-bottom: var(--space-2); }

.contact-row,
.social-row {
  display: flex;
  align-items: center;
  gap: var(--space-3);
}

.social-row.glass-card { padding: var(--space-3); border-radius: var(--radius-lg); }

.availability-card { text-align: center; }
.availability-card .icon-badge { margin: 0 auto var(--space-4); border-radius: var(--radius-full); }
.availability-card h4 { margin-bottom: var(--space-2); }

/* Experience detail */
.experience-page > * + * { margin-top: var(--space-8); }

.experience-header {
  display: flex;
  align-items: flex-start;
  gap: var(--space-4);
  margin-bottom: var(--space-4);
}

.experience-meta {
  display: flex;
  flex-wrap: wrap;
  gap: var(--space-6);
  margin-bottom: var(--space-6);
}

.experience-page h2 { margin-bottom: var(--space-6); }
.experience-page h3 { margin-bottom: var(--space-4); }

.check-list { list-style: none; }
.check-list li { display: flex; gap: var(--space-3); }
.check-list li + li { margin-top: var(--space-4); }

.achievement-grid {
  display: grid;
  grid-template-columns: repeat(auto-fill, minmax(260px, 1fr));
  gap: var(--space-4);
}

.achievement-grid .panel { padding: var(--space-4); }

.skills-tools {
  display: grid;
  grid-template-columns: 1fr 1fr;
  gap: var(--space-8);
}

/* Fallback */
.fallback-page {
  display: flex;
  align-items: center;
  justify-content: center;
}

.fallback-body { text-align: center; }
.fallback-action { margin-top: var(--space-6); }

@media (max-width: 768px) {
  .hero-title { font-size: 2.5rem; }
  .profile-card,
  .contact-grid,
  .field-pair,
  .skills-tools { grid-template-columns: 1fr; }
  .skill-grid { grid-template-columns: 1fr; }
  .nav-links { gap: var(--space-4); }
}
"#;
