use anyhow::{Context, Result};
use builder_info_panel::config::Config;
use builder_info_panel::documents;
use builder_info_panel::extract::PageInfo;
use builder_info_panel::i18n::Language;
use builder_info_panel::render::{self, HtmlPage};
use std::fs;
use std::path::Path;
use tracing::{info, warn};

fn main() -> Result<()> {
    // Load .env file (ignored in production)
    let _ = dotenvy::dotenv();

    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("builder_info_panel=info".parse()?),
        )
        .init();

    info!("Starting builder info panel render");

    // Load configuration from environment
    let config = Config::from_env()?;
    let language = Language::from_code(&config.lang)?;
    info!("Using language: {} ({})", language.name(), language.code());

    // Step 1: Load the batch documents
    let documents = documents::load_documents(Path::new(&config.documents_file))?;

    // Step 2: Extract the info fields
    let page_info = PageInfo::extract(language, &documents);
    info!("Area: {} by {}", page_info.name, page_info.author);

    // Step 3: Render into the panel template
    let template = match &config.template_file {
        Some(path) => fs::read_to_string(path)
            .with_context(|| format!("Failed to read template: {}", path))?,
        None => render::DEFAULT_TEMPLATE.to_string(),
    };

    let mut page = HtmlPage::new(&template);
    render::render(&page_info, documents.len(), &mut page);

    if !page.missing_ids().is_empty() {
        warn!(
            "Template is missing panel elements: {}",
            page.missing_ids().join(", ")
        );
    }

    // Step 4: Write the rendered panel
    let html = page.into_html();
    match &config.output_file {
        Some(path) => {
            fs::write(path, &html)
                .with_context(|| format!("Failed to write output: {}", path))?;
            info!("Panel written to {}", path);
        }
        None => print!("{}", html),
    }

    info!("Panel rendered successfully!");
    Ok(())
}
