use anyhow::Context;

use crate::catalog::{CatalogClient, CatalogSource};
use crate::domain::models::Book;
use crate::favorites::FavoritesStore;
use crate::indicator;
use crate::render;

use super::{format_item, read_command};

fn render_wishlist(books: &[Book], favorites: &FavoritesStore) {
    let wished: Vec<&Book> = books
        .iter()
        .filter(|book| favorites.is_favorite(book.id))
        .collect();
    let items = render::project(wished, favorites);
    for item in &items {
        println!("{}", format_item(item));
    }
    if items.is_empty() {
        println!("(wishlist is empty)");
    }
}

/// Favorited books out of the default catalog listing.
pub async fn run(client: &CatalogClient, favorites: &mut FavoritesStore) -> anyhow::Result<()> {
    let books = {
        let _loading = indicator::begin();
        client
            .fetch_all()
            .await
            .context("fetch catalog for wishlist")?
    };
    render_wishlist(&books, favorites);
    println!("commands: fav <id> | quit");

    while let Some(line) = read_command() {
        let (command, arg) = match line.split_once(' ') {
            Some((c, a)) => (c, a.trim()),
            None => (line.as_str(), ""),
        };
        match command {
            "fav" => match arg.parse::<i64>() {
                Ok(id) => {
                    favorites.toggle(id);
                    render_wishlist(&books, favorites);
                }
                Err(_) => println!("fav needs a numeric book id"),
            },
            "quit" | "q" => break,
            "" => {}
            _ => println!("commands: fav <id> | quit"),
        }
    }
    Ok(())
}
