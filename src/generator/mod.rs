//! Static site output.
//!
//! [`site::SiteGenerator`] renders every page of a [`crate::aggregate::DocSet`]
//! in memory and then writes them, together with the stylesheet, the client
//! script and the search index, into one output directory.

pub mod html;
pub mod site;

use clap::ValueEnum;

/// Stylesheet shared by all pages.
pub const STYLE_CSS: &str = include_str!("assets/style.css");
/// Theme toggle, search and navigation tabs.
pub const SCRIPT_JS: &str = include_str!("assets/script.js");

/// Theme used until the reader picks one in the browser.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    pub fn as_str(&self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }
}

#[derive(Debug, Clone)]
pub struct SiteOptions {
    /// Shown in every page header and in the overview title.
    pub title: String,
    pub theme: Theme,
}

impl Default for SiteOptions {
    fn default() -> Self {
        SiteOptions {
            title: "API Documentation".to_string(),
            theme: Theme::Light,
        }
    }
}
