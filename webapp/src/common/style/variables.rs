// the root carries either `.light` or `.dark`; light values double as the
// defaults so the page is readable before the first marker lands
pub const CSS_VARIABLES: &str = r#"
:root,
:root.light {
  /* Brand */
  --brand-primary: #2F6B4F;          /* pine green */
  --brand-accent: #C2772E;           /* cedar orange */
  --brand-secondary: #E3F0E8;        /* pale moss, badge backgrounds */
  --brand-primary-foreground: #FFFFFF;

  /* Surfaces */
  --background: #FAFAF7;
  --surface: #FFFFFF;
  --surface-muted: #F1F3EF;
  --overlay: rgba(255, 255, 255, 0.8);

  /* Text */
  --text-primary: #14201A;
  --text-secondary: #4B5A52;
  --text-tertiary: #7A877F;
  --text-inverse: #FFFFFF;

  /* Borders */
  --border: #E2E6E1;

  /* Accents */
  --star: #EAB308;
  --heart: #EF4444;

  /* Shadows */
  --shadow-sm: 0 1px 2px rgba(20, 32, 26, 0.06);
  --shadow-md: 0 4px 12px rgba(20, 32, 26, 0.08);
  --shadow-lg: 0 12px 32px rgba(20, 32, 26, 0.12);

  color-scheme: light;
}

:root.dark {
  --brand-primary: #5FB98A;
  --brand-accent: #E39A52;
  --brand-secondary: #1C3A2B;
  --brand-primary-foreground: #0B1410;

  --background: #0E1411;
  --surface: #16201B;
  --surface-muted: #1D2A23;
  --overlay: rgba(14, 20, 17, 0.8);

  --text-primary: #EEF3EF;
  --text-secondary: #B3C1B8;
  --text-tertiary: #84948A;
  --text-inverse: #0B1410;

  --border: #2A3A31;

  --shadow-sm: 0 1px 2px rgba(0, 0, 0, 0.4);
  --shadow-md: 0 4px 12px rgba(0, 0, 0, 0.45);
  --shadow-lg: 0 12px 32px rgba(0, 0, 0, 0.5);

  color-scheme: dark;
}

:root {
  /* Layout */
  --container-width: 1200px;

  /* Spacing */
  --space-1: 4px;
  --space-2: 8px;
  --space-3: 12px;
  --space-4: 16px;
  --space-6: 24px;
  --space-8: 32px;
  --space-12: 48px;
  --space-16: 64px;
  --space-20: 80px;

  /* Radii */
  --radius-md: 8px;
  --radius-lg: 16px;
  --radius-full: 9999px;

  /* Motion */
  --transition-fast: 150ms;
  --transition-normal: 300ms;
  --transition-slow: 600ms;
  --easing-standard: cubic-bezier(0.4, 0, 0.2, 1);
}
"#;
