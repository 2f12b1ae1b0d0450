use constcat::concat;

mod home;
mod navbar;
mod variables;

use home::HOME_STYLES;
use navbar::NAVBAR_STYLES;
use variables::CSS_VARIABLES;

pub const PORTFOLIO_STYLES: &str = concat!(
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
  font-family: system-ui, -apple-system, BlinkMacSystemFont, 'Segoe UI', Roboto, Oxygen, Ubuntu, Cantarell, sans-serif;
  line-height: 1.5;
}

a {
  color: inherit;
  text-decoration: none;
}
"#,
    CSS_VARIABLES,
    NAVBAR_STYLES,
    HOME_STYLES,
);
