pub const NAVBAR_STYLES: &str = r#"
/* Desktop header */
.desktop-nav {
  position: fixed;
  top: 0;
  left: 0;
  right: 0;
  z-index: 50;
  background-color: var(--surface);
  backdrop-filter: blur(16px);
  -webkit-backdrop-filter: blur(16px);
  border-bottom: 1px solid var(--border);
}

.desktop-nav .nav-container {
  display: flex;
  height: var(--header-height);
  align-items: center;
  justify-content: space-between;
  padding: 0 var(--space-6);
}

.brand {
  font-size: 1.5rem;
  font-weight: 700;
  background: var(--gradient);
  background-size: 200% 200%;
  -webkit-background-clip: text;
  background-clip: text;
  color: transparent;
  cursor: pointer;
  transition: transform var(--transition-normal) var(--easing-standard);
}

.brand:hover {
  transform: scale(1.05);
}

.nav-links,
.nav-controls {
  display: flex;
  align-items: center;
  gap: var(--space-2);
}

.nav-link {
  display: flex;
  align-items: center;
  gap: var(--space-2);
  padding: var(--space-2) var(--space-4);
  border-radius: var(--radius-full);
  color: var(--text-secondary);
  font-size: 0.875rem;
  font-weight: 500;
  text-decoration: none;
  transition: all var(--transition-normal) var(--easing-standard);
}

.nav-link:hover {
  color: var(--primary);
  transform: scale(1.05);
}

.nav-link.active {
  background: var(--gradient);
  color: var(--text-inverse);
  box-shadow: var(--shadow-lg);
  transform: scale(1.05);
}

.icon-button {
  display: inline-flex;
  padding: var(--space-2);
  border: none;
  border-radius: var(--radius-full);
  background-color: var(--surface-button);
  color: var(--text-primary);
  cursor: pointer;
  transition: all var(--transition-normal) var(--easing-standard);
}

.icon-button:hover {
  background-color: var(--surface-button-hover);
  transform: scale(1.1);
}

.icon-button:disabled {
  opacity: 0.5;
  cursor: not-allowed;
}

.icon {
  width: 20px;
  height: 20px;
}

.nav-link .icon {
  width: 16px;
  height: 16px;
}

/* Mobile bottom bar */
.mobile-nav {
  display: none;
  position: fixed;
  bottom: var(--space-4);
  left: 50%;
  z-index: 50;
  transform: translate(-50%, 0);
  transition: transform var(--transition-normal) ease-in-out;
}

.mobile-nav.hidden {
  transform: translate(-50%, calc(100% + var(--space-4)));
}

.mobile-nav .nav-pill {
  display: flex;
  align-items: center;
  gap: var(--space-1);
  padding: var(--space-2);
  border: 1px solid var(--border);
  border-radius: var(--radius-full);
  background-color: var(--surface);
  backdrop-filter: blur(12px);
  box-shadow: var(--shadow-lg);
}

.mobile-nav .nav-link {
  flex-direction: column;
  padding: var(--space-2);
}

.mobile-nav .nav-link .icon {
  width: 20px;
  height: 20px;
}

.mobile-nav .nav-label {
  display: none;
  font-size: 0.75rem;
}

@media (min-width: 640px) {
  .mobile-nav .nav-label {
    display: block;
  }
}

@media (max-width: 767px) {
  .desktop-nav {
    display: none;
  }

  .mobile-nav {
    display: block;
  }
}
"#;
