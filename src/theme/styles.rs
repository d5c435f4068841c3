//! Global CSS styles for Casa De Oro.
//!
//! Cream paper, matte black and brushed gold. Reveal-on-scroll animations
//! key off the `in-view` class toggled by the webview bridge.

pub const GLOBAL_STYLES: &str = r#"
/* === CSS Custom Properties === */
:root {
  /* Palette */
  --casa-black: #0F0F0F;
  --casa-cream: #F9F8F4;
  --casa-sand: #F5F4F0;
  --casa-gold: #C5A059;
  --casa-gold-soft: rgba(197, 160, 89, 0.2);
  --stone-200: #E7E5E4;
  --stone-300: #D6D3D1;
  --stone-400: #A8A29E;
  --stone-500: #78716C;
  --stone-600: #57534E;
  --stone-700: #44403C;
  --stone-800: #292524;

  /* Typography */
  --font-serif: 'Playfair Display', 'Cormorant Garamond', Georgia, serif;
  --font-sans: 'Inter', 'Helvetica Neue', Arial, sans-serif;
  --font-mono: 'JetBrains Mono', 'SF Mono', 'Consolas', monospace;

  /* Transitions */
  --transition-fast: 150ms ease;
  --transition-normal: 300ms ease;
  --transition-slow: 500ms ease;
  --transition-reveal: 1s cubic-bezier(0.4, 0, 0.2, 1);

  --nav-height: 88px;
}

/* === Global Reset === */
*, *::before, *::after {
  box-sizing: border-box;
  margin: 0;
  padding: 0;
}

html {
  font-size: 16px;
  -webkit-font-smoothing: antialiased;
  -moz-osx-font-smoothing: grayscale;
}

body {
  font-family: var(--font-sans);
  background: var(--casa-cream);
  color: var(--stone-800);
  line-height: 1.6;
  overflow-x: hidden;
}

::selection {
  background: var(--casa-gold);
  color: #fff;
}

a {
  color: inherit;
  text-decoration: none;
  cursor: pointer;
}

ul { list-style: none; }

.scene-defs {
  position: absolute;
  width: 0;
  height: 0;
  overflow: hidden;
}

.container {
  width: 100%;
  max-width: 1200px;
  margin: 0 auto;
  padding: 0 1.5rem;
}

/* === Navigation === */
.site-nav {
  position: fixed;
  top: 0;
  left: 0;
  right: 0;
  z-index: 50;
  padding: 2rem 0;
  transition: all var(--transition-slow);
}

.site-nav.transparent {
  background: transparent;
}

.site-nav.solid {
  background: rgba(15, 15, 15, 0.95);
  backdrop-filter: blur(12px);
  box-shadow: 0 10px 30px rgba(0, 0, 0, 0.2);
  border-bottom: 1px solid var(--stone-800);
  padding: 1rem 0;
}

.nav-inner {
  max-width: 1200px;
  margin: 0 auto;
  padding: 0 1.5rem;
  display: flex;
  justify-content: space-between;
  align-items: center;
}

.nav-brand {
  font-family: var(--font-serif);
  font-weight: 700;
  font-size: 1.25rem;
  letter-spacing: 0.2em;
  cursor: pointer;
  color: var(--casa-black);
  transition: color var(--transition-normal);
}

.site-nav.solid .nav-brand { color: #fff; }

.nav-links {
  display: flex;
  align-items: center;
  gap: 2rem;
  font-size: 0.75rem;
  font-weight: 700;
  letter-spacing: 0.1em;
  text-transform: uppercase;
  color: var(--stone-600);
}

.site-nav.solid .nav-links { color: var(--stone-400); }

.nav-link {
  transition: color var(--transition-normal);
}

.nav-link:hover { color: var(--casa-gold); }

.nav-cta {
  padding: 0.5rem 1.5rem;
}

.nav-toggle {
  display: none;
  color: var(--casa-black);
}

.site-nav.solid .nav-toggle { color: #fff; }

/* === Buttons === */
.btn-solid, .btn-outline, .btn-gold, .btn-ghost, .icon-btn {
  font-family: var(--font-sans);
  background: none;
  border: none;
  cursor: pointer;
  transition: all var(--transition-normal);
}

.btn-solid {
  background: #000;
  color: #fff;
  font-weight: 700;
  text-transform: uppercase;
  letter-spacing: 0.1em;
  padding: 1rem;
}

.btn-solid:hover { background: #1c1917; }

.btn-outline {
  border: 1px solid var(--casa-black);
  color: var(--casa-black);
}

.btn-outline:hover {
  background: var(--casa-black);
  color: #fff;
}

.btn-gold {
  border: 1px solid var(--casa-gold);
  color: var(--casa-gold);
}

.btn-gold:hover {
  background: var(--casa-gold);
  color: var(--casa-black);
}

.btn-ghost { color: inherit; }

.icon-btn {
  display: inline-flex;
  align-items: center;
  justify-content: center;
  padding: 0.5rem;
  color: inherit;
}

/* === Mobile Menu === */
.mobile-menu {
  position: fixed;
  inset: 0;
  z-index: 40;
  background: var(--casa-cream);
  display: flex;
  flex-direction: column;
  align-items: center;
  justify-content: center;
  gap: 2rem;
  font-family: var(--font-serif);
  font-size: 1.25rem;
  animation: fade-in var(--transition-slow) both;
}

.mobile-menu-link {
  color: var(--casa-black);
  text-transform: uppercase;
  letter-spacing: 0.1em;
}

.mobile-menu-link:hover { color: var(--casa-gold); }

@keyframes fade-in {
  from { opacity: 0; }
  to { opacity: 1; }
}

/* === Hero === */
.hero {
  position: relative;
  height: 100vh;
  display: flex;
  align-items: center;
  justify-content: center;
  overflow: hidden;
  background: var(--casa-cream);
}

.hero-scene {
  position: absolute;
  inset: 0;
  opacity: 0.6;
  pointer-events: none;
}

.hero-scene-fade {
  position: absolute;
  inset: 0;
  pointer-events: none;
  background: radial-gradient(circle at center, rgba(249, 248, 244, 0) 0%, rgba(249, 248, 244, 0.4) 50%, rgba(249, 248, 244, 0.9) 100%);
}

.scene {
  width: 100%;
  height: 100%;
  display: block;
}

.hero-content {
  position: relative;
  z-index: 10;
  text-align: center;
  padding: 0 1.5rem;
}

.hero-badge {
  display: inline-block;
  margin-bottom: 1.5rem;
  padding: 0.25rem 1rem;
  border: 1px solid var(--casa-gold);
  color: var(--casa-gold);
  font-size: 0.75rem;
  font-weight: 700;
  letter-spacing: 0.3em;
  text-transform: uppercase;
  background: rgba(255, 255, 255, 0.5);
  backdrop-filter: blur(4px);
}

.hero-title {
  font-family: var(--font-serif);
  font-size: clamp(3rem, 9vw, 8rem);
  line-height: 1.1;
  color: var(--casa-black);
  margin-bottom: 1.5rem;
}

.hero-tagline {
  max-width: 42rem;
  margin: 0 auto 3rem;
  font-family: var(--font-serif);
  font-style: italic;
  font-size: 1.5rem;
  color: var(--stone-600);
}

.hero-explore-row {
  display: flex;
  justify-content: center;
}

.hero-explore {
  display: flex;
  flex-direction: column;
  align-items: center;
  gap: 0.75rem;
  font-size: 0.75rem;
  font-weight: 700;
  letter-spacing: 0.1em;
  color: var(--stone-400);
  transition: color var(--transition-normal);
}

.hero-explore:hover { color: var(--casa-gold); }

.hero-explore-ring {
  display: inline-flex;
  padding: 0.75rem;
  border: 1px solid var(--stone-300);
  border-radius: 9999px;
  background: rgba(255, 255, 255, 0.5);
  transition: border-color var(--transition-normal);
}

.hero-explore:hover .hero-explore-ring { border-color: var(--casa-gold); }

/* === Sections === */
.section {
  position: relative;
  padding: 6rem 0;
}

.section-white { background: #fff; }
.section-cream { background: var(--casa-cream); }
.section-bordered { border-bottom: 1px solid var(--stone-200); }

.section-dark {
  background: var(--casa-black);
  color: #fff;
  overflow: hidden;
}

.section-top-rule { border-top: 1px solid var(--stone-800); }

.section-intro {
  max-width: 48rem;
  margin: 0 auto 4rem;
  text-align: center;
}

.section-title {
  font-family: var(--font-serif);
  font-size: clamp(2.25rem, 4vw, 3rem);
  line-height: 1.2;
  color: var(--casa-black);
  margin-bottom: 1.5rem;
}

.section-dark .section-title,
.section-title-light { color: #fff; }

.section-title-xl { font-size: clamp(2.25rem, 5vw, 3.75rem); }

.section-lede {
  font-size: 1.125rem;
  color: var(--stone-400);
}

.section-lede-dark {
  font-size: 1.125rem;
  color: var(--stone-600);
  margin-bottom: 1.5rem;
}

.eyebrow {
  display: inline-block;
  margin-bottom: 0.75rem;
  font-size: 0.75rem;
  font-weight: 700;
  letter-spacing: 0.1em;
  text-transform: uppercase;
  color: var(--stone-500);
}

.eyebrow-gold { color: var(--casa-gold); }

.gold-rule {
  width: 6rem;
  height: 4px;
  background: var(--casa-gold);
  margin-bottom: 2rem;
}

.gold-dot {
  flex-shrink: 0;
  width: 6px;
  height: 6px;
  margin-top: 0.6rem;
  border-radius: 9999px;
  background: var(--casa-gold);
}

.pill {
  display: inline-flex;
  align-items: center;
  gap: 0.5rem;
  padding: 0.25rem 0.75rem;
  margin-bottom: 1.5rem;
  border-radius: 9999px;
  font-size: 0.75rem;
  font-weight: 700;
  letter-spacing: 0.1em;
  text-transform: uppercase;
}

.pill-dark {
  background: rgba(255, 255, 255, 0.1);
  border: 1px solid rgba(255, 255, 255, 0.2);
  color: var(--casa-gold);
}

.pill-light {
  background: #f5f5f4;
  border: 1px solid var(--stone-200);
  color: var(--stone-600);
}

.pill-gold {
  background: var(--casa-gold-soft);
  color: var(--casa-gold);
}

.icon-gold { color: var(--casa-gold); }
.muted { color: var(--stone-400); }

/* Reveal on scroll */
.reveal-fade {
  opacity: 0;
  transform: translateY(16px);
  transition: opacity var(--transition-reveal), transform var(--transition-reveal);
}

.reveal-fade.in-view {
  opacity: 1;
  transform: none;
}

/* === Vision === */
.vision-grid {
  display: grid;
  grid-template-columns: 5fr 7fr;
  gap: 4rem;
  align-items: start;
}

.vision-aside {
  position: sticky;
  top: 8rem;
}

.pull-quote {
  font-family: var(--font-serif);
  font-style: italic;
  font-size: 1.125rem;
  color: var(--stone-600);
}

.vision-body {
  display: flex;
  flex-direction: column;
  gap: 2rem;
  font-size: 1.125rem;
  color: var(--stone-600);
}

.vision-body strong { color: var(--casa-black); }

.audience-card {
  background: var(--casa-sand);
  padding: 2rem;
  border-radius: 0.75rem;
  border: 1px solid var(--stone-200);
}

.audience-card h3 {
  font-family: var(--font-serif);
  font-size: 1.5rem;
  color: var(--casa-black);
  margin-bottom: 1rem;
}

.dot-list li {
  display: flex;
  gap: 0.75rem;
  margin-bottom: 0.75rem;
}

/* === Experience === */
.experience-glow {
  position: absolute;
  inset: 0;
  opacity: 0.2;
  pointer-events: none;
}

.glow {
  position: absolute;
  width: 500px;
  height: 500px;
  border-radius: 9999px;
  filter: blur(150px);
}

.glow-gold {
  top: 0;
  right: 0;
  background: var(--casa-gold);
  transform: translate(50%, -50%);
}

.glow-stone {
  bottom: 0;
  left: 0;
  background: var(--stone-700);
  transform: translate(-50%, 50%);
}

.experience-inner {
  position: relative;
  z-index: 10;
}

.experience-grid {
  display: grid;
  grid-template-columns: 1fr 1fr;
  gap: 4rem;
  align-items: center;
}

.experience-copy {
  display: flex;
  flex-direction: column;
  gap: 2rem;
}

.feature-title {
  display: flex;
  align-items: center;
  gap: 0.75rem;
  font-family: var(--font-serif);
  font-size: 1.875rem;
  margin-bottom: 1rem;
}

.feature-divided {
  padding-top: 2rem;
  border-top: 1px solid rgba(255, 255, 255, 0.1);
}

.menu-grid {
  display: grid;
  grid-template-columns: repeat(2, 1fr);
  gap: 1rem;
}

.menu-card {
  padding: 1.5rem;
  background: rgba(255, 255, 255, 0.05);
  border: 1px solid rgba(255, 255, 255, 0.1);
  transition: border-color var(--transition-normal);
}

.menu-card:hover { border-color: var(--casa-gold); }

.menu-card-icon {
  color: var(--casa-gold);
  margin-bottom: 0.75rem;
}

.menu-card h4 {
  font-family: var(--font-serif);
  font-size: 1.125rem;
  margin-bottom: 0.25rem;
}

.menu-card p {
  font-size: 0.875rem;
  color: var(--stone-400);
}

.scene-panel {
  position: relative;
  aspect-ratio: 1 / 1;
  background: #111;
  border-radius: 1rem;
  overflow: hidden;
  border: 1px solid rgba(255, 255, 255, 0.1);
  box-shadow: 0 25px 50px rgba(0, 0, 0, 0.5);
}

.architecture-scene {
  position: absolute;
  inset: 0;
}

.scene-quote {
  position: absolute;
  left: 1.5rem;
  right: 1.5rem;
  bottom: 1.5rem;
  padding: 1.5rem;
  background: rgba(0, 0, 0, 0.8);
  backdrop-filter: blur(12px);
  border-radius: 0.75rem;
  border: 1px solid rgba(255, 255, 255, 0.1);
  font-family: var(--font-serif);
  font-style: italic;
  font-size: 0.875rem;
  color: var(--casa-gold);
}

/* === Location === */
.location-grid {
  display: grid;
  grid-template-columns: 1fr 1fr;
  gap: 4rem;
  align-items: center;
}

.location-corner {
  font-size: 1.25rem;
  font-weight: 700;
  color: var(--stone-500);
  margin-bottom: 1.5rem;
}

.check-list li {
  display: flex;
  gap: 0.75rem;
  margin-bottom: 1rem;
  color: var(--stone-600);
}

.check-badge {
  flex-shrink: 0;
  width: 1.5rem;
  height: 1.5rem;
  border-radius: 9999px;
  background: var(--casa-gold-soft);
  color: var(--casa-gold);
  display: flex;
  align-items: center;
  justify-content: center;
}

.location-viz {
  position: relative;
  aspect-ratio: 4 / 3;
  background: var(--casa-sand);
  border: 1px solid var(--stone-200);
  overflow: hidden;
}

.map-grid {
  position: absolute;
  inset: 0;
  display: grid;
  opacity: 0.5;
}

.map-cell { border: 1px solid var(--stone-200); }

.map-avenue {
  position: absolute;
  left: 0;
  right: 0;
  top: 50%;
  height: 3rem;
  transform: translateY(-50%);
  background: var(--stone-300);
  display: flex;
  align-items: center;
  justify-content: center;
  gap: 0.5rem;
  font-size: 0.625rem;
  font-weight: 700;
  letter-spacing: 0.1em;
  text-transform: uppercase;
  color: var(--stone-600);
}

.map-street {
  position: absolute;
  top: 0;
  bottom: 0;
  left: 50%;
  width: 3rem;
  transform: translateX(-50%);
  background: var(--stone-300);
  display: flex;
  flex-direction: column;
  align-items: center;
  justify-content: center;
  gap: 2rem;
  font-size: 0.625rem;
  font-weight: 700;
  letter-spacing: 0.1em;
  text-transform: uppercase;
  color: var(--stone-600);
}

.rotated {
  transform: rotate(90deg);
  white-space: nowrap;
}

.map-marker {
  position: absolute;
  top: calc(50% - 4.5rem);
  left: calc(50% + 2rem);
  z-index: 2;
  width: 3rem;
  height: 3rem;
  border-radius: 9999px;
  background: var(--casa-black);
  color: var(--casa-gold);
  border: 2px solid var(--casa-gold);
  display: flex;
  align-items: center;
  justify-content: center;
  font-family: var(--font-serif);
  font-weight: 700;
  cursor: pointer;
  transition: transform var(--transition-normal);
}

.map-marker.hovered { transform: scale(1.15); }

.map-callout {
  position: absolute;
  right: 1rem;
  bottom: 1rem;
  max-width: 16rem;
  padding: 1rem;
  background: rgba(255, 255, 255, 0.9);
  border-left: 3px solid var(--casa-gold);
  font-size: 0.75rem;
  color: var(--stone-600);
}

.map-callout h4 {
  font-family: var(--font-serif);
  font-size: 1rem;
  color: var(--casa-black);
  margin-bottom: 0.25rem;
}

.map-pulse {
  position: absolute;
  top: calc(50% - 4.5rem);
  left: calc(50% + 2rem);
  width: 3rem;
  height: 3rem;
  border-radius: 9999px;
  background: var(--casa-gold);
  opacity: 0.3;
  pointer-events: none;
  animation: pulse 2s cubic-bezier(0, 0, 0.2, 1) infinite;
}

@keyframes pulse {
  0% { transform: scale(1); opacity: 0.4; }
  100% { transform: scale(2.2); opacity: 0; }
}

/* === Financials === */
.financials-grid {
  display: grid;
  grid-template-columns: 1fr 1fr;
  gap: 3rem;
}

.financials-side {
  display: flex;
  flex-direction: column;
  justify-content: center;
}

.chart-card {
  padding: 2rem;
  background: #fff;
  border: 1px solid var(--stone-200);
  box-shadow: 0 1px 3px rgba(0, 0, 0, 0.05);
}

.chart-title {
  font-family: var(--font-serif);
  font-size: 1.5rem;
  color: var(--casa-black);
  margin-bottom: 0.5rem;
}

.chart-title.light { color: #fff; }

.chart-subtitle {
  font-size: 0.875rem;
  color: var(--stone-500);
  margin-bottom: 2rem;
}

.allocation-row { margin-bottom: 1rem; }

.allocation-labels {
  display: flex;
  justify-content: space-between;
  font-size: 0.875rem;
  margin-bottom: 0.25rem;
  color: var(--stone-600);
}

.allocation-labels span:last-child { font-family: var(--font-mono); }

.allocation-track {
  height: 0.5rem;
  background: #f5f5f4;
  overflow: hidden;
}

.allocation-bar {
  height: 100%;
  width: 0;
  transition: width var(--transition-reveal);
}

.allocation-bar.in-view { width: var(--bar-width); }

.chart-footer {
  display: flex;
  align-items: center;
  gap: 0.5rem;
  margin-top: 2rem;
  padding-top: 1rem;
  border-top: 1px solid var(--stone-200);
  font-size: 0.75rem;
  color: var(--stone-500);
}

.chart-footer .gold-dot { margin-top: 0; }

.revenue-chart {
  display: flex;
  gap: 2rem;
  align-items: center;
  background: var(--casa-black);
  border-color: var(--stone-800);
  color: #fff;
}

.revenue-copy { flex: 1; }

.revenue-blurb {
  font-size: 0.875rem;
  color: var(--stone-400);
  margin-bottom: 1.5rem;
}

.revenue-figures {
  display: flex;
  gap: 2rem;
}

.figure-label {
  font-size: 0.75rem;
  text-transform: uppercase;
  letter-spacing: 0.1em;
  color: var(--stone-500);
}

.figure-value {
  font-family: var(--font-serif);
  font-size: 1.875rem;
}

.figure-value.gold { color: var(--casa-gold); }

.donut {
  position: relative;
  width: 10rem;
  height: 10rem;
  flex-shrink: 0;
}

.donut-ring {
  width: 100%;
  height: 100%;
  transform: rotate(-90deg);
}

.donut-sweep {
  transition: stroke-dashoffset 1.5s ease-out;
}

.donut-sweep.in-view { stroke-dashoffset: var(--donut-revealed); }

.donut-center {
  position: absolute;
  inset: 0;
  display: flex;
  flex-direction: column;
  align-items: center;
  justify-content: center;
}

.donut-value {
  font-family: var(--font-serif);
  font-size: 2.25rem;
  color: var(--casa-gold);
}

.donut-label {
  font-size: 0.625rem;
  text-transform: uppercase;
  letter-spacing: 0.1em;
  color: var(--stone-500);
}

.growth-note {
  margin-top: 2rem;
  padding: 1.5rem;
  background: #fff;
  border-left: 4px solid var(--casa-gold);
  box-shadow: 0 1px 2px rgba(0, 0, 0, 0.05);
}

.growth-note h4 {
  font-family: var(--font-serif);
  font-size: 1.25rem;
  color: var(--casa-black);
  margin-bottom: 0.5rem;
}

.growth-note p {
  font-size: 0.875rem;
  color: var(--stone-600);
}

/* === Contact === */
.contact-grid {
  display: grid;
  grid-template-columns: 1fr 1fr;
  gap: 4rem;
  align-items: start;
}

.team-list {
  display: flex;
  flex-direction: column;
  gap: 1.5rem;
}

.team-card {
  padding: 1.5rem;
  background: #fff;
  border-left: 2px solid var(--casa-gold-soft);
  transition: border-color var(--transition-normal);
}

.team-card:hover { border-left-color: var(--casa-gold); }

.team-card h3 {
  font-family: var(--font-serif);
  font-size: 1.5rem;
  color: var(--casa-black);
  margin-bottom: 0.25rem;
}

.team-role {
  font-size: 0.75rem;
  font-weight: 700;
  letter-spacing: 0.1em;
  text-transform: uppercase;
  color: var(--casa-gold);
  margin-bottom: 0.75rem;
}

.team-desc {
  font-size: 0.875rem;
  color: var(--stone-500);
}

.invest-card {
  padding: 2rem;
  background: var(--casa-gold);
  color: var(--casa-black);
  border-radius: 0.75rem;
}

.invest-card h2 {
  font-family: var(--font-serif);
  font-size: 1.875rem;
  margin-bottom: 1rem;
}

.invest-lede {
  font-weight: 500;
  margin-bottom: 2rem;
}

.invest-terms {
  display: flex;
  flex-direction: column;
  gap: 1rem;
}

.invest-term {
  display: flex;
  justify-content: space-between;
  padding-bottom: 0.5rem;
  border-bottom: 1px solid rgba(0, 0, 0, 0.1);
}

.invest-term-label { font-weight: 700; }
.invest-term-value { font-family: var(--font-mono); }

.invest-button {
  width: 100%;
  margin-top: 2rem;
}

/* === Footer === */
.site-footer {
  background: var(--casa-black);
  color: var(--stone-500);
  padding: 4rem 0;
  border-top: 1px solid var(--stone-800);
}

.footer-inner {
  display: flex;
  justify-content: space-between;
  align-items: center;
  gap: 2rem;
}

.footer-logo {
  font-family: var(--font-serif);
  font-weight: 700;
  font-size: 1.5rem;
  letter-spacing: 0.1em;
  color: #fff;
  margin-bottom: 0.5rem;
}

.footer-brand p {
  font-size: 0.75rem;
  text-transform: uppercase;
  letter-spacing: 0.05em;
}

.footer-links {
  display: flex;
  gap: 2rem;
  font-size: 0.875rem;
}

.footer-links a:hover { color: var(--casa-gold); }

.footer-legal {
  text-align: center;
  margin-top: 3rem;
  font-size: 0.75rem;
  color: var(--stone-700);
}

/* === Responsive === */
@media (max-width: 1023px) {
  .experience-grid,
  .location-grid,
  .financials-grid {
    grid-template-columns: 1fr;
  }
}

@media (max-width: 767px) {
  .nav-links { display: none; }
  .nav-toggle { display: inline-flex; }

  .vision-grid,
  .contact-grid {
    grid-template-columns: 1fr;
  }

  .vision-aside { position: static; }

  .footer-inner {
    flex-direction: column;
    text-align: center;
  }

  .revenue-chart { flex-direction: column; }
}

@media (min-width: 768px) {
  .mobile-menu { display: none; }
}

@media (prefers-reduced-motion: reduce) {
  *, *::before, *::after {
    animation-duration: 0.01ms !important;
    transition-duration: 0.01ms !important;
  }
}
"#;
