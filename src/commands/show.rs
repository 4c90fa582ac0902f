//! Show command - print a model's detail page

use crate::{
    CatalogrError,
    api::{ApiClient, ApiError},
    output,
};
use colored::Colorize;

type Result<T> = std::result::Result<T, CatalogrError>;

/// Execute the show command
///
/// Detail, README and tree are fetched concurrently. A model without a
/// README (404) is not an error.
///
/// # Errors
/// Returns an error if the detail or tree request fails.
pub async fn execute(
    client: &ApiClient,
    path: &str,
    with_readme: bool,
    with_tree: bool,
    quiet: bool,
) -> Result<()> {
    let readme = async {
        if with_readme {
            client.model_readme(path).await.map(Some)
        } else {
            Ok(None)
        }
    };
    let tree = async {
        if with_tree {
            client.model_tree(path).await.map(Some)
        } else {
            Ok(None)
        }
    };
    let (detail, readme, tree) = tokio::join!(client.model_detail(path), readme, tree);

    let detail = detail?;
    let readme = match readme {
        Err(ApiError::Http { status: 404, .. }) => None,
        other => other?,
    };
    let tree = tree?;

    println!("{}", output::model_detail(&detail));

    if let Some(files) = tree {
        if !quiet {
            println!("\n{}", "Files".bold().underline());
        }
        for file in &files {
            println!("{}", output::file_entry(file));
        }
    }

    if let Some(text) = readme.filter(|t| !t.trim().is_empty()) {
        if !quiet {
            println!("\n{}", "README".bold().underline());
        }
        println!("{}", text.trim_end());
    }
    Ok(())
}
