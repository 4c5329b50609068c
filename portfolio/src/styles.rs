//! Page CSS.
//!
//! Injected once by [`crate::App`]. Light theme, blue accent, cards on a
//! neutral background. Reveal and scroll-hint motion live here too.

/// Height of the fixed header. Anchor jumps land below it.
pub const HEADER_HEIGHT_PX: u32 = 80;

pub const PORTFOLIO_CSS: &str = r#"
:root {
    --bg-page: #f9fafb;
    --bg-band: #f3f4f6;
    --bg-card: #ffffff;
    --bg-footer: #e5e7eb;
    --text-strong: #111827;
    --text-body: #374151;
    --text-dim: #4b5563;
    --accent: #2563eb;
    --shadow-card: 0 4px 6px -1px rgba(0, 0, 0, 0.1), 0 2px 4px -2px rgba(0, 0, 0, 0.1);
    --header-height: 80px;
    --container-max: 1120px;
    --font-sans: 'Inter', system-ui, -apple-system, 'Segoe UI', sans-serif;
}

*, *::before, *::after {
    box-sizing: border-box;
}

html {
    scroll-behavior: smooth;
}

body {
    margin: 0;
    min-height: 100vh;
    background: var(--bg-page);
    color: var(--text-body);
    font-family: var(--font-sans);
    line-height: 1.5;
}

.container {
    max-width: var(--container-max);
    margin: 0 auto;
    padding: 0 16px;
}

/* Header */
.site-header {
    position: fixed;
    top: 0;
    left: 0;
    right: 0;
    z-index: 50;
    background: var(--bg-card);
    box-shadow: var(--shadow-card);
}

.nav {
    max-width: var(--container-max);
    margin: 0 auto;
    padding: 16px 24px;
}

.nav-links {
    display: flex;
    justify-content: center;
    gap: 32px;
    margin: 0;
    padding: 0;
    list-style: none;
}

.nav-link {
    font-size: 1.125rem;
    font-weight: 500;
    color: var(--text-dim);
    text-decoration: none;
    border-bottom: 2px solid transparent;
    transition: color 300ms, border-color 300ms;
}

.nav-link:hover {
    color: var(--accent);
}

.nav-link.active {
    color: var(--accent);
    border-bottom-color: var(--accent);
}

/* Sections */
main {
    padding-top: var(--header-height);
}

.section {
    padding: 80px 0;
    scroll-margin-top: var(--header-height);
}

.section.skills {
    background: var(--bg-band);
}

.section-title {
    margin: 0 0 48px;
    font-size: 1.875rem;
    font-weight: 700;
    text-align: center;
    color: var(--text-strong);
}

.profile {
    min-height: 100vh;
    display: flex;
    align-items: center;
    justify-content: center;
    background: var(--bg-band);
}

.profile-inner {
    padding: 0 16px;
    text-align: center;
}

.profile-name {
    margin: 0 0 16px;
    font-size: 3rem;
    font-weight: 700;
    color: var(--text-strong);
}

.profile-title {
    margin: 0 0 32px;
    font-size: 1.5rem;
    font-weight: 400;
    color: var(--text-dim);
}

.profile-summary {
    max-width: 42rem;
    margin: 0 auto;
    font-size: 1.25rem;
    line-height: 1.625;
}

.scroll-hint {
    margin-top: 48px;
    color: var(--accent);
    animation: hint-bounce 2s ease-in-out infinite;
}

@keyframes hint-bounce {
    0%, 100% { transform: translateY(0); }
    50% { transform: translateY(5px); }
}

/* Cards */
.card {
    padding: 24px;
    background: var(--bg-card);
    border-radius: 8px;
    box-shadow: var(--shadow-card);
}

.card-title {
    margin: 0 0 8px;
    font-size: 1.25rem;
    font-weight: 600;
    color: var(--text-strong);
}

.card-icon {
    margin-bottom: 16px;
    color: var(--accent);
}

.job-list {
    display: flex;
    flex-direction: column;
    gap: 32px;
}

.job-company {
    margin: 0 0 8px;
    font-size: 1.125rem;
}

.job-period {
    margin: 0;
    color: var(--text-dim);
}

.skills-grid,
.projects-grid {
    display: grid;
    grid-template-columns: 1fr;
    gap: 32px;
}

@media (min-width: 768px) {
    .skills-grid { grid-template-columns: repeat(3, 1fr); }
    .projects-grid { grid-template-columns: repeat(2, 1fr); }
}

.skill-list {
    margin: 0;
    padding: 0;
    list-style: none;
}

.skill {
    display: flex;
    align-items: center;
    margin-top: 8px;
}

.skill-dot {
    width: 8px;
    height: 8px;
    margin-right: 8px;
    border-radius: 9999px;
    background: var(--accent);
}

.project-tech {
    margin: 8px 0 0;
}

/* Reveal */
.reveal {
    opacity: 0;
    transform: translateY(20px);
    transition-property: opacity, transform;
    transition-timing-function: ease-out;
}

.reveal.revealed {
    opacity: 1;
    transform: none;
}

@media (prefers-reduced-motion: reduce) {
    .reveal { transition: none; opacity: 1; transform: none; }
    .scroll-hint { animation: none; }
    html { scroll-behavior: auto; }
}

/* Footer */
.footer {
    margin-top: 80px;
    padding: 24px 0;
    background: var(--bg-footer);
    text-align: center;
    color: var(--text-dim);
}

.footer-copyright {
    margin: 0;
}

.footer-build {
    margin: 4px 0 0;
    font-size: 0.75rem;
    opacity: 0.6;
}
"#;
