//! Global CSS styles for the clinic landing page.
//!
//! Clean medical palette: cyan primary, soft blue backgrounds, red for
//! emergency and errors.

pub const GLOBAL_STYLES: &str = r#"
/* === CSS Custom Properties === */
:root {
  /* PRIMARY (Actions, Links) */
  --primary: #0891b2;
  --primary-dark: #0e7490;
  --primary-light: #cffafe;
  --primary-glow: rgba(8, 145, 178, 0.25);

  /* SURFACES */
  --bg: #f8fafc;
  --surface: #ffffff;
  --border: #e2e8f0;

  /* TEXT */
  --text-primary: #0f172a;
  --text-secondary: #475569;
  --text-muted: #94a3b8;

  /* SEMANTIC */
  --success: #10b981;
  --danger: #ef4444;
  --warning: #f59e0b;
  --info: #3b82f6;

  /* Typography */
  --font-sans: 'Inter', 'Segoe UI', Roboto, sans-serif;

  /* Layout */
  --radius: 12px;
  --radius-lg: 20px;
  --shadow: 0 4px 20px rgba(15, 23, 42, 0.08);
  --shadow-lg: 0 20px 50px rgba(15, 23, 42, 0.18);
  --transition: all 0.3s ease;
}

/* === Reset === */
*, *::before, *::after { box-sizing: border-box; margin: 0; padding: 0; }

html { scroll-behavior: smooth; }

body {
  font-family: var(--font-sans);
  background: var(--bg);
  color: var(--text-primary);
  line-height: 1.6;
  -webkit-font-smoothing: antialiased;
}

a { color: var(--primary); text-decoration: none; }

.container { max-width: 1200px; margin: 0 auto; padding: 0 24px; }

.icon { display: inline-block; flex-shrink: 0; vertical-align: middle; }

/* === Accessibility === */
.skip-link {
  position: absolute;
  top: -48px;
  left: 16px;
  z-index: 3000;
  padding: 8px 16px;
  background: var(--primary);
  color: #fff;
  border-radius: 0 0 8px 8px;
  transition: top 0.2s ease;
}
.skip-link:focus { top: 0; }

.sr-only {
  position: absolute;
  width: 1px;
  height: 1px;
  padding: 0;
  margin: -1px;
  overflow: hidden;
  clip: rect(0, 0, 0, 0);
  white-space: nowrap;
  border: 0;
}

.startup-error { padding: 48px; text-align: center; color: var(--danger); }

/* === Scroll Progress === */
.scroll-progress {
  position: fixed;
  top: 0;
  left: 0;
  width: 100%;
  height: 3px;
  z-index: 1100;
  background: transparent;
}
.scroll-progress-bar {
  height: 100%;
  background: linear-gradient(90deg, var(--primary), var(--info));
  transition: width 0.1s linear;
}

/* === Buttons === */
.btn {
  display: inline-flex;
  align-items: center;
  justify-content: center;
  gap: 8px;
  padding: 12px 24px;
  border-radius: var(--radius);
  border: 2px solid transparent;
  font: inherit;
  font-weight: 600;
  cursor: pointer;
  transition: var(--transition);
}
.btn:disabled { opacity: 0.7; cursor: not-allowed; }

.btn-primary {
  background: linear-gradient(135deg, var(--primary), var(--primary-dark));
  color: #fff;
  box-shadow: 0 4px 14px var(--primary-glow);
}
.btn-primary:hover:not(:disabled) { transform: translateY(-2px); box-shadow: 0 8px 24px var(--primary-glow); }

.btn-outline { background: transparent; border-color: var(--primary); color: var(--primary); }
.btn-outline:hover { background: var(--primary); color: #fff; }

.btn-ghost { background: transparent; color: var(--text-secondary); }
.btn-ghost:hover { background: var(--border); }

.btn-emergency { background: var(--danger); color: #fff; }
.btn-emergency:hover { background: #dc2626; transform: translateY(-2px); }

.icon-btn {
  display: inline-flex;
  align-items: center;
  justify-content: center;
  width: 36px;
  height: 36px;
  border: none;
  border-radius: 50%;
  background: transparent;
  color: var(--text-secondary);
  cursor: pointer;
  transition: var(--transition);
}
.icon-btn:hover { background: var(--border); color: var(--text-primary); }

.spinner {
  width: 16px;
  height: 16px;
  border: 2px solid rgba(255, 255, 255, 0.4);
  border-top-color: #fff;
  border-radius: 50%;
  animation: spin 0.8s linear infinite;
}
@keyframes spin { to { transform: rotate(360deg); } }

/* === Navigation === */
.navbar {
  position: fixed;
  top: 0;
  left: 0;
  right: 0;
  z-index: 1000;
  backdrop-filter: blur(10px);
  transition: var(--transition);
}
.nav-container {
  max-width: 1200px;
  height: 80px;
  margin: 0 auto;
  padding: 0 24px;
  display: flex;
  align-items: center;
  justify-content: space-between;
}
.nav-logo { display: flex; align-items: center; gap: 8px; font-size: 1.4rem; font-weight: 700; color: var(--primary); }
.nav-menu { display: flex; align-items: center; gap: 32px; list-style: none; }
.nav-link { color: var(--text-secondary); font-weight: 500; transition: color 0.2s ease; }
.nav-link:hover { color: var(--primary); }
.nav-toggle { display: none; border: none; background: none; color: var(--text-primary); cursor: pointer; }

@media (max-width: 768px) {
  .nav-toggle { display: block; }
  .nav-menu {
    position: fixed;
    top: 80px;
    left: 0;
    right: 0;
    flex-direction: column;
    gap: 16px;
    padding: 24px;
    background: var(--surface);
    box-shadow: var(--shadow);
    transform: translateY(-150%);
    transition: transform 0.3s ease;
  }
  .nav-menu.active { transform: translateY(0); }
  .nav-toggle.active { color: var(--primary); }
}

/* === Hero === */
.hero {
  position: relative;
  min-height: 100vh;
  display: flex;
  align-items: center;
  padding: 120px 24px 80px;
  overflow: hidden;
  background: linear-gradient(135deg, #ecfeff 0%, #eff6ff 100%);
}
.hero-content { position: relative; z-index: 1; max-width: 1200px; margin: 0 auto; width: 100%; }
.hero-title { font-size: clamp(2.2rem, 5vw, 3.6rem); line-height: 1.15; max-width: 720px; }
.hero-title .highlight { color: var(--primary); }
.hero-subtitle { margin-top: 20px; max-width: 560px; font-size: 1.15rem; color: var(--text-secondary); }
.hero-actions { display: flex; flex-wrap: wrap; gap: 16px; margin-top: 36px; }

.hero-stats { display: flex; flex-wrap: wrap; gap: 48px; margin-top: 56px; }
.stat-item { display: flex; flex-direction: column; }
.stat-number { font-size: 2.4rem; font-weight: 800; color: var(--primary); font-variant-numeric: tabular-nums; }
.stat-label { color: var(--text-secondary); }

.hero-floating { position: absolute; inset: 0; pointer-events: none; }
.floating-icon {
  position: absolute;
  display: flex;
  align-items: center;
  justify-content: center;
  width: 72px;
  height: 72px;
  border-radius: 50%;
  background: var(--surface);
  color: var(--primary);
  box-shadow: var(--shadow);
  pointer-events: auto;
  animation: float 6s ease-in-out infinite;
}
.float-1 { top: 18%; right: 12%; }
.float-2 { top: 42%; right: 26%; }
.float-3 { bottom: 22%; right: 8%; }
.float-4 { bottom: 12%; right: 32%; }
@keyframes float {
  0%, 100% { transform: translateY(0); }
  50% { transform: translateY(-20px); }
}

/* === Sections === */
.section { padding: 96px 0; }
.section-header { text-align: center; margin-bottom: 56px; }
.section-title { font-size: 2.2rem; }
.section-subtitle { margin-top: 8px; color: var(--text-secondary); }

.fade-in { opacity: 0; transform: translateY(30px); transition: opacity 0.6s ease, transform 0.6s ease; }
.fade-in.visible { opacity: 1; transform: translateY(0); }

/* === Services === */
.services-grid { display: grid; grid-template-columns: repeat(auto-fit, minmax(300px, 1fr)); gap: 24px; }
.service-card {
  display: flex;
  flex-direction: column;
  gap: 16px;
  padding: 32px;
  background: var(--surface);
  border-radius: var(--radius-lg);
  box-shadow: var(--shadow);
}
.service-card:hover { box-shadow: var(--shadow-lg); }
.service-icon {
  display: flex;
  align-items: center;
  justify-content: center;
  width: 64px;
  height: 64px;
  border-radius: var(--radius);
  background: var(--primary-light);
  color: var(--primary);
}
.service-title { font-size: 1.3rem; }
.service-description { flex: 1; color: var(--text-secondary); }

/* === Doctors === */
.doctors { background: var(--surface); }
.doctors-grid { display: grid; grid-template-columns: repeat(auto-fit, minmax(280px, 1fr)); gap: 32px; }
.doctor-card { overflow: hidden; background: var(--bg); border-radius: var(--radius-lg); box-shadow: var(--shadow); }
.doctor-photo {
  position: relative;
  height: 220px;
  display: flex;
  align-items: center;
  justify-content: center;
  background: linear-gradient(135deg, var(--primary-light), #dbeafe);
}
.doctor-initials { font-size: 3rem; font-weight: 800; color: var(--primary-dark); }
.doctor-info { display: flex; flex-direction: column; gap: 8px; padding: 24px; }
.doctor-role { color: var(--text-secondary); margin-bottom: 8px; }

.doctor-status {
  position: absolute;
  top: 16px;
  right: 16px;
  display: flex;
  align-items: center;
  gap: 6px;
  padding: 4px 12px;
  border-radius: 999px;
  background: var(--surface);
  font-size: 0.85rem;
  font-weight: 600;
}
.status-dot { width: 8px; height: 8px; border-radius: 50%; }
.doctor-status.online { color: var(--success); }
.doctor-status.online .status-dot { background: var(--success); box-shadow: 0 0 0 3px rgba(16, 185, 129, 0.2); }
.doctor-status.busy { color: var(--warning); }
.doctor-status.busy .status-dot { background: var(--warning); }

/* === Contacts & Footer === */
.contacts-grid { display: grid; grid-template-columns: repeat(auto-fit, minmax(260px, 1fr)); gap: 24px; }
.contact-item {
  display: flex;
  gap: 16px;
  padding: 24px;
  background: var(--surface);
  border-radius: var(--radius);
  box-shadow: var(--shadow);
  color: var(--primary);
}
.contact-item h4 { color: var(--text-primary); }
.contact-item p { color: var(--text-secondary); }
.contact-item.emergency { color: var(--danger); }

.footer { padding: 40px 0; background: var(--text-primary); color: var(--text-muted); text-align: center; }
.footer-brand { font-size: 1.2rem; font-weight: 700; color: #fff; margin-bottom: 8px; }
.footer-note { font-size: 0.85rem; }

/* === Modal === */
.modal {
  position: fixed;
  inset: 0;
  z-index: 2000;
  display: flex;
  align-items: center;
  justify-content: center;
  padding: 24px;
  background: rgba(15, 23, 42, 0.6);
  opacity: 0;
  visibility: hidden;
  transition: opacity 0.3s ease, visibility 0.3s ease;
}
.modal.active { opacity: 1; visibility: visible; }
.modal-content {
  width: 100%;
  max-width: 640px;
  max-height: 90vh;
  overflow-y: auto;
  padding: 32px;
  background: var(--surface);
  border-radius: var(--radius-lg);
  box-shadow: var(--shadow-lg);
  transform: scale(0.95);
  transition: transform 0.3s ease;
}
.modal.active .modal-content { transform: scale(1); }
.modal-header { display: flex; align-items: center; justify-content: space-between; margin-bottom: 24px; }
.modal-title { font-size: 1.5rem; }
.modal-form { display: flex; flex-direction: column; gap: 16px; }
.modal-actions { display: flex; justify-content: flex-end; gap: 12px; margin-top: 8px; }

/* === Forms === */
.form-row { display: grid; grid-template-columns: 1fr 1fr; gap: 16px; }
@media (max-width: 640px) { .form-row { grid-template-columns: 1fr; } }
.form-group { display: flex; flex-direction: column; gap: 6px; }
.form-label { font-weight: 600; font-size: 0.9rem; }
.required-mark { color: var(--danger); }
.form-input {
  width: 100%;
  padding: 12px 14px;
  border: 2px solid var(--border);
  border-radius: var(--radius);
  background: var(--surface);
  color: var(--text-primary);
  font: inherit;
  transition: border-color 0.2s ease, box-shadow 0.2s ease;
}
.form-input:focus { outline: none; border-color: var(--primary); box-shadow: 0 0 0 4px var(--primary-glow); }
.form-input:disabled { background: var(--bg); color: var(--text-muted); }
.form-input.error { border-color: var(--danger); }
.form-input.error:focus { box-shadow: 0 0 0 4px rgba(239, 68, 68, 0.2); }
textarea.form-input { resize: vertical; }
.error-message { display: flex; align-items: center; gap: 6px; color: var(--danger); font-size: 0.85rem; }

/* === Notifications === */
.notification {
  position: fixed;
  top: 100px;
  right: 24px;
  z-index: 2500;
  max-width: 400px;
  padding: 16px 20px;
  border-radius: var(--radius);
  background: var(--surface);
  box-shadow: var(--shadow-lg);
  border-left: 4px solid var(--info);
  cursor: pointer;
  transform: translateX(120%);
  transition: transform 0.3s ease;
}
.notification.show { transform: translateX(0); }
.notification-success { border-left-color: var(--success); }
.notification-error { border-left-color: var(--danger); }
.notification-info { border-left-color: var(--info); }
.notification-content { display: flex; align-items: flex-start; gap: 12px; }
.notification-message { flex: 1; }

@media (prefers-reduced-motion: reduce) {
  *, *::before, *::after { animation: none !important; transition: none !important; }
}
"#;
