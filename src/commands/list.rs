//! List command - print one page of a catalog listing

use crate::{
    CatalogrError,
    api::ApiClient,
    output,
    pagination::Paginator,
    query::{QueryParams, StrategyRegistry},
};

type Result<T> = std::result::Result<T, CatalogrError>;

/// Execute the list command
///
/// Unknown scopes fall back to models, the same as in the browser.
///
/// # Errors
/// Returns an error if page or page size is 0, or the request fails.
pub async fn execute(
    client: &ApiClient,
    scope: &str,
    params: &QueryParams,
    quiet: bool,
) -> Result<()> {
    if params.page == 0 || params.page_size == 0 {
        return Err(CatalogrError::InvalidInput(
            "page and page size must be at least 1".to_string(),
        ));
    }

    let registry = StrategyRegistry::with_defaults(client);
    let resource = registry.resolve(scope);
    let page = resource.fetch_page(params).await?;
    let paginator = Paginator::new(params.page, params.page_size, page.total);

    if page.is_empty() {
        if !quiet {
            println!("No {} found.", resource.label().to_lowercase());
        }
        return Ok(());
    }

    if !quiet {
        println!("{} (page {} of {}):", resource.label(), params.page, paginator.total_pages());
    }
    for item in &page.items {
        println!("{}", output::item_line(item, quiet));
    }
    if !quiet && let Some(footer) = output::page_footer(&paginator) {
        println!("\n{footer}");
    }
    Ok(())
}
