pub const HOME_STYLES: &str = r#"
/* Page sections */
.portfolio-section {
  min-height: 100vh;
  padding: calc(var(--header-height) + var(--space-16)) var(--space-6) var(--space-16);
  border-bottom: 1px solid var(--border);
}

.portfolio-section h2 {
  font-size: 2.25rem;
  margin-bottom: var(--space-4);
}

.portfolio-section p {
  max-width: 640px;
  color: var(--text-secondary);
}
"#;
