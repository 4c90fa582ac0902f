//! Tags command - print the tags of one scope, grouped by category

use crate::{
    CatalogrError,
    api::ApiClient,
    output,
    query::normalize_scope,
    tags::group_tags,
};

type Result<T> = std::result::Result<T, CatalogrError>;

/// Execute the tags command
///
/// # Errors
/// Returns an error if the request fails or `category` does not exist for
/// the scope.
pub async fn execute(
    client: &ApiClient,
    scope: &str,
    category: Option<&str>,
    quiet: bool,
) -> Result<()> {
    let scope = normalize_scope(scope);
    let raw = client.tags().await?;
    let grouped = group_tags(&raw, &scope);

    if let Some(category) = category
        && !grouped.contains(category)
    {
        let known: Vec<&str> = grouped.categories().collect();
        return Err(CatalogrError::InvalidInput(format!(
            "no '{category}' tags for {scope}; categories: {}",
            if known.is_empty() { "none".to_string() } else { known.join(", ") }
        )));
    }

    if grouped.is_empty() {
        if !quiet {
            println!("No tags for {scope}.");
        }
        return Ok(());
    }

    if !quiet {
        println!("Tags for {scope} ({} in {} categories):", grouped.tag_count(), grouped.len());
    }
    for group in grouped.groups() {
        if category.is_none_or(|c| c == group.category) {
            println!("{}", output::tag_group(group, quiet));
        }
    }
    Ok(())
}
