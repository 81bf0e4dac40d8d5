use anyhow::Context;

use crate::catalog::{CatalogClient, CatalogSource};
use crate::favorites::FavoritesStore;
use crate::indicator;
use crate::render;

/// Single-book view with the plain-text download link when one exists.
pub async fn run(client: &CatalogClient, favorites: &FavoritesStore, id: i64) -> anyhow::Result<()> {
    let book = {
        let _loading = indicator::begin();
        client
            .fetch_one(id)
            .await
            .with_context(|| format!("fetch book {}", id))?
    };

    let item = render::project_one(&book, favorites);
    println!("{}", item.title);
    println!("Author: {}", item.author_name);
    println!("Genre: {}", item.genre);
    if let Some(cover) = &item.cover_url {
        println!("Cover: {}", cover);
    }
    if let Some(text) = &book.text_url {
        println!("Download: {}", text);
    }
    if item.is_favorite {
        println!("(on your wishlist)");
    }
    Ok(())
}
