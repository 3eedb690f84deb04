use anyhow::{Context, Result};

#[derive(Debug, Clone)]
pub struct Config {
    // Locale
    pub lang: String,

    // Documents
    pub documents_file: String,

    // Rendering
    pub template_file: Option<String>,
    pub output_file: Option<String>,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        Ok(Self {
            // Locale - validated against the registry at startup
            lang: std::env::var("PANEL_LANG").unwrap_or_else(|_| "en".to_string()),

            // Documents - path to the builder batch file
            documents_file: std::env::var("PANEL_DOCUMENTS")
                .context("PANEL_DOCUMENTS not set")?,

            // Rendering - template defaults to the built-in panel markup,
            // output defaults to stdout
            template_file: std::env::var("PANEL_TEMPLATE").ok(),
            output_file: std::env::var("PANEL_OUTPUT").ok(),
        })
    }
}
