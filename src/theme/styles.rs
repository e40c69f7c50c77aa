//! Global CSS styles for Holocard.
//!
//! Night-sky background with violet/pink/cyan holo-foil accents. The shading
//! overlays get their gradients inline; this sheet only positions them.

pub const GLOBAL_STYLES: &str = r#"
/* === CSS Custom Properties === */
:root {
  --night: #1a1a2e;
  --night-deep: #0f0f1a;
  --panel: rgba(0, 0, 0, 0.8);
  --border-soft: rgba(255, 255, 255, 0.1);
  --border-strong: rgba(255, 255, 255, 0.3);

  --violet: #8b5cf6;
  --pink: #ec4899;
  --cyan: #22d3ee;
  --gold: #facc15;

  --text-primary: #ffffff;
  --text-secondary: rgba(255, 255, 255, 0.7);
  --text-muted: rgba(255, 255, 255, 0.5);

  --font-sans: 'Geist', system-ui, -apple-system, sans-serif;
  --font-mono: 'Geist Mono', 'SF Mono', monospace;

  --transition-fast: 150ms ease;
  --transition-normal: 300ms ease;
}

/* === Global Reset === */
*, *::before, *::after {
  box-sizing: border-box;
  margin: 0;
  padding: 0;
}

html, body {
  min-height: 100%;
  background: var(--night);
  color: var(--text-primary);
  font-family: var(--font-sans);
  -webkit-font-smoothing: antialiased;
}

a { color: inherit; text-decoration: none; }

/* === Buttons === */
.btn-primary {
  padding: 0.75rem 1.5rem;
  border: none;
  border-radius: 0.75rem;
  background: linear-gradient(90deg, var(--violet), var(--pink));
  color: var(--text-primary);
  font-weight: 600;
  cursor: pointer;
  transition: filter var(--transition-fast);
}
.btn-primary:hover { filter: brightness(0.9); }

.btn-ghost {
  padding: 0.5rem 1rem;
  border: 1px solid var(--border-soft);
  border-radius: 0.75rem;
  background: transparent;
  color: var(--text-secondary);
  cursor: pointer;
}
.btn-ghost:hover:not(:disabled) { border-color: var(--border-strong); color: var(--text-primary); }
.btn-ghost:disabled { opacity: 0.4; cursor: default; }

.btn-motion {
  position: absolute;
  bottom: 2rem;
  left: 50%;
  transform: translateX(-50%);
  padding: 0.75rem 1.5rem;
  border: 1px solid rgba(255, 255, 255, 0.2);
  border-radius: 0.75rem;
  background: rgba(17, 24, 39, 0.9);
  backdrop-filter: blur(12px);
  color: var(--text-primary);
  font-size: 0.875rem;
  cursor: pointer;
}

/* === Inputs === */
.search-bar { display: flex; gap: 1rem; }
.input-field {
  flex: 1;
  padding: 0.75rem 1rem;
  border: 1px solid rgba(255, 255, 255, 0.2);
  border-radius: 0.75rem;
  background: rgba(255, 255, 255, 0.1);
  color: var(--text-primary);
}
.input-field::placeholder { color: var(--text-muted); }
.input-field:focus { outline: none; box-shadow: 0 0 0 2px var(--violet); }

/* === Type pills === */
.type-pills {
  display: flex;
  flex-wrap: wrap;
  justify-content: center;
  gap: 0.5rem;
  margin-top: 1rem;
}
.pill {
  padding: 0.35rem 0.9rem;
  border: 1px solid rgba(255, 255, 255, 0.2);
  border-radius: 999px;
  background: rgba(255, 255, 255, 0.05);
  color: var(--text-secondary);
  font-size: 0.75rem;
  cursor: pointer;
  transition: border-color var(--transition-fast), background var(--transition-fast);
}
.pill:hover { border-color: var(--border-strong); }
.pill.selected { background: var(--violet); border-color: var(--violet); color: var(--text-primary); }

/* === Gallery === */
.gallery-page {
  min-height: 100vh;
  background: linear-gradient(135deg, #581c87, #1e3a8a, #312e81);
}
.gallery-hero { position: relative; overflow: hidden; }
.gallery-hero__glow {
  position: absolute;
  inset: 0;
  background: linear-gradient(90deg, rgba(236, 72, 153, 0.2), rgba(168, 85, 247, 0.2), rgba(6, 182, 212, 0.2));
}
.gallery-hero__inner {
  position: relative;
  max-width: 80rem;
  margin: 0 auto;
  padding: 4rem 1rem;
  text-align: center;
}
.gallery-title {
  font-size: 4.5rem;
  font-weight: 700;
  margin-bottom: 1.5rem;
  background: linear-gradient(90deg, #f472b6, #c084fc, #22d3ee);
  -webkit-background-clip: text;
  background-clip: text;
  color: transparent;
}
.gallery-tagline { font-size: 1.5rem; color: var(--text-secondary); margin-bottom: 2rem; }
.gallery-controls { max-width: 42rem; margin: 0 auto; }
.gallery-results { max-width: 80rem; margin: 0 auto; padding: 2rem 1rem; }

.card-grid {
  display: grid;
  grid-template-columns: repeat(auto-fill, minmax(200px, 1fr));
  gap: 1.5rem;
}
.card-tile {
  position: relative;
  overflow: hidden;
  border: 1px solid var(--border-soft);
  border-radius: 0.75rem;
  background: linear-gradient(135deg, rgba(107, 33, 168, 0.5), rgba(30, 64, 175, 0.5));
  cursor: pointer;
  transition: transform var(--transition-normal), border-color var(--transition-normal);
}
.card-tile:hover { transform: scale(1.05); border-color: var(--border-strong); }
.card-tile__border {
  position: absolute;
  inset: 0;
  border-radius: inherit;
  opacity: 0 !important;
  transition: opacity var(--transition-normal);
}
.card-tile:hover .card-tile__border { opacity: 1 !important; }
.card-tile__body { position: relative; padding: 1rem; }
.card-tile__img { width: 100%; height: auto; border-radius: 0.5rem; }
.card-tile__meta { margin-top: 0.75rem; font-size: 0.75rem; }
.card-tile__name { font-size: 0.875rem; font-weight: 600; white-space: nowrap; overflow: hidden; text-overflow: ellipsis; }
.card-tile__stats { display: flex; justify-content: space-between; margin-top: 0.25rem; }
.card-tile__hp { color: #d8b4fe; }
.card-tile__type { color: #67e8f9; }
.card-tile__set { color: rgba(255, 255, 255, 0.6); white-space: nowrap; overflow: hidden; text-overflow: ellipsis; }
.card-tile__rarity { color: var(--gold); }

.pager {
  display: flex;
  justify-content: center;
  align-items: center;
  gap: 1rem;
  margin-top: 2rem;
}
.pager__step { min-width: 6rem; }
.pager__label { color: var(--text-secondary); font-size: 0.875rem; }

/* === States === */
.loading-state, .empty-state { text-align: center; padding: 4rem 0; color: var(--text-secondary); }
.loading-spinner {
  display: inline-block;
  width: 3rem;
  height: 3rem;
  border-radius: 50%;
  border-bottom: 2px solid var(--violet);
  animation: spin 1s linear infinite;
}
.loading-label { margin-top: 1rem; }
@keyframes spin { to { transform: rotate(360deg); } }

.site-footer {
  margin-top: 4rem;
  padding: 2rem 1rem;
  border-top: 1px solid var(--border-soft);
  text-align: center;
  color: rgba(255, 255, 255, 0.6);
}
.site-footer__hint { margin-top: 0.5rem; font-size: 0.875rem; }

/* === Holographic view === */
.holo-page {
  position: relative;
  display: flex;
  justify-content: center;
  align-items: center;
  width: 100%;
  height: 100vh;
  overflow: hidden;
  background: #171717;
}
.holo-back {
  position: absolute;
  top: 2rem;
  left: 2rem;
  color: var(--text-secondary);
  font-size: 0.875rem;
}
.holo-instructions {
  position: absolute;
  top: 2rem;
  left: 50%;
  transform: translateX(-50%);
  text-align: center;
  color: var(--text-secondary);
  font-size: 0.875rem;
  pointer-events: none;
}
.card-caption { margin-top: 0.5rem; font-size: 0.75rem; }

.holo-card {
  position: relative;
  width: 20rem;
  height: 28rem;
  border-radius: 1rem;
  overflow: hidden;
  box-shadow: 0 30px 60px rgba(0, 0, 0, 0.5), 0 0 100px rgba(150, 100, 255, 0.4);
  transition: all 200ms ease-out;
}
.holo-card__image {
  position: absolute;
  inset: 0;
  width: 100%;
  height: 100%;
  object-fit: cover;
  border-radius: inherit;
}
.holo-layer {
  position: absolute;
  inset: 0;
  border-radius: inherit;
  pointer-events: none;
}

.card-info {
  position: absolute;
  bottom: 2rem;
  left: 2rem;
  max-width: 24rem;
  padding: 1rem;
  border-radius: 0.5rem;
  background: var(--panel);
  backdrop-filter: blur(12px);
  font-size: 0.875rem;
}
.card-info__name { font-size: 1.125rem; font-weight: 700; margin-bottom: 0.5rem; }
.card-info__rows { display: flex; flex-direction: column; gap: 0.25rem; font-size: 0.75rem; }
.card-info__set { color: #9ca3af; }
"#;
