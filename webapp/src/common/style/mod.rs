use constcat::concat;

mod animations;
mod components;
mod home;
mod variables;

use animations::ANIMATIONS;
use components::BASE_COMPONENTS;
use home::HOME_STYLES;
use variables::CSS_VARIABLES;

// everything the page needs, injected once at the root
pub const SITE_STYLES: &str = concat!(
    r#"
/* Global resets and base styles */
* {
  margin: 0;
  padding: 0;
  box-sizing: border-box;
}

html {
  scroll-behavior: smooth;
}

body {
  font-family: 'Inter', system-ui, -apple-system, BlinkMacSystemFont, 'Segoe UI', Roboto, sans-serif;
  color: var(--text-primary);
  background-color: var(--background);
  line-height: 1.5;
  transition: background-color var(--transition-normal) var(--easing-standard),
              color var(--transition-normal) var(--easing-standard);
}

.landing {
  min-height: 100vh;
}
"#,
    CSS_VARIABLES,
    BASE_COMPONENTS,
    HOME_STYLES,
    ANIMATIONS,
);
