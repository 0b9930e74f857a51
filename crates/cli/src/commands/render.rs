//! Render a page file to HTML.

use pagesmith_builder::catalog::WidgetCatalog;
use pagesmith_builder::render::Renderer;
use pagesmith_builder::serialize;

/// Render a page file to stdout.
///
/// With `full`, emits the publishable `body_html` (fragment plus the
/// embedded source island); otherwise just the fragment.
///
/// # Errors
///
/// Returns an error if the page file cannot be read or parsed.
#[allow(clippy::print_stdout)]
pub async fn page(input: &str, full: bool) -> Result<(), Box<dyn std::error::Error>> {
    let page = super::read_page(input).await?;
    let catalog = WidgetCatalog::builtin();

    let html = if full {
        serialize::serialize(&page, &catalog)
    } else {
        let renderer = Renderer::new(&catalog);
        page.content
            .elements()
            .iter()
            .map(|element| renderer.render(element))
            .collect::<Vec<_>>()
            .join("\n")
    };

    println!("{html}");
    Ok(())
}
