//! Document themes
//!
//! Each theme is a stylesheet embedded at compile time from `css/themes/`. The document shell
//! inlines the theme CSS first and any custom CSS after it, so custom rules win on equal
//! specificity.
//!
//! Every theme styles the same class vocabulary: `.code`, `.blockquote`, `.row`, `.col`,
//! `.card`, `.divider`, `.external-table`, `.table` with its `-striped`/`-bordered`/`-hover`
//! modifiers and `.alert` with `-info`/`-warning`/`-error`.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Available document themes
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    /// Light sans-serif theme
    #[default]
    Default,
    Dark,
}

impl Theme {
    /// Every theme, in listing order
    pub const ALL: [Theme; 2] = [Theme::Default, Theme::Dark];

    /// Look a theme up by name.
    ///
    /// Names are matched case-insensitively. Unknown names fall back to [`Theme::Default`].
    pub fn from_name(name: &str) -> Self {
        match name.trim().to_ascii_lowercase().as_str() {
            "dark" => Theme::Dark,
            _ => Theme::Default,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Theme::Default => "default",
            Theme::Dark => "dark",
        }
    }

    /// The theme's stylesheet
    pub fn css(self) -> &'static str {
        match self {
            Theme::Default => include_str!("../css/themes/theme-default.css"),
            Theme::Dark => include_str!("../css/themes/theme-dark.css"),
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
