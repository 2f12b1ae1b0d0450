pub const CSS_VARIABLES: &str = r#"
.themed-root {
  /* Color System */
  --primary: #2563EB;          /* Primary brand blue */
  --primary-light: #60A5FA;    /* Lighter blue for hover states */
  --accent: #9333EA;           /* Purple end of the brand gradient */
  --gradient: linear-gradient(to right, var(--primary), var(--accent));

  /* Neutrals */
  --neutral-50: #F8FAFC;
  --neutral-100: #F1F5F9;
  --neutral-200: #E2E8F0;
  --neutral-300: #CBD5E1;
  --neutral-600: #475569;
  --neutral-700: #334155;
  --neutral-800: #1E293B;
  --neutral-900: #0F172A;

  /* Background and Surface Colors */
  --background: var(--neutral-50);
  --surface: rgba(255, 255, 255, 0.9);
  --surface-button: var(--neutral-100);
  --surface-button-hover: var(--neutral-200);
  --border: rgba(226, 232, 240, 0.2);

  /* Text Colors */
  --text-primary: var(--neutral-900);
  --text-secondary: var(--neutral-600);
  --text-inverse: #FFFFFF;

  /* Layout */
  --header-height: 72px;
  --mobile-breakpoint: 768px;

  /* Spacing System */
  --space-1: 4px;
  --space-2: 8px;
  --space-3: 12px;
  --space-4: 16px;
  --space-6: 24px;
  --space-16: 64px;

  /* Border Radius */
  --radius-full: 9999px;

  /* Shadows */
  --shadow-lg: 0 10px 15px -3px rgba(0, 0, 0, 0.1), 0 4px 6px -2px rgba(0, 0, 0, 0.05);

  /* Animation */
  --transition-normal: 300ms;
  --easing-standard: cubic-bezier(0.4, 0.0, 0.2, 1);

  min-height: 100vh;
  color: var(--text-primary);
  background-color: var(--background);
}

.themed-root.dark {
  --background: var(--neutral-900);
  --surface: rgba(15, 23, 42, 0.9);
  --surface-button: var(--neutral-800);
  --surface-button-hover: var(--neutral-700);
  --border: rgba(51, 65, 85, 0.2);

  --text-primary: var(--neutral-100);
  --text-secondary: var(--neutral-300);
}"#;
