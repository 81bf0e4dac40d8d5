use crate::catalog::CatalogClient;
use crate::favorites::FavoritesStore;
use crate::render;
use crate::view_state::{CatalogBrowser, FetchState, ViewState};

use super::{format_item, read_command};

fn render_screen(state: &ViewState, favorites: &FavoritesStore) {
    if state.fetch_state() == FetchState::Failed {
        println!("(fetch failed, showing the last loaded page)");
    }
    let items = render::project(state.visible_records(), favorites);
    for item in &items {
        println!("{}", format_item(item));
    }
    if items.is_empty() {
        println!("(no books match)");
    }
    if !state.search().is_empty() || !state.genre().is_empty() {
        println!(
            "(filters: search=\"{}\" genre=\"{}\")",
            state.search(),
            state.genre()
        );
    }
    println!("Page {}", state.page_index());
}

fn print_help() {
    println!("commands: next | prev | search [text] | genre [text] | fav <id> | quit");
}

/// Paged catalog browsing with filters and wishlist toggles.
pub async fn run(client: &CatalogClient, favorites: &mut FavoritesStore) -> anyhow::Result<()> {
    let mut browser = CatalogBrowser::new(client.clone());
    browser.set_page(1).await;
    render_screen(&browser.state, favorites);
    print_help();

    while let Some(line) = read_command() {
        if line.is_empty() {
            continue;
        }
        let (command, arg) = match line.split_once(' ') {
            Some((c, a)) => (c, a.trim()),
            None => (line.as_str(), ""),
        };
        match command {
            "next" => browser.next_page().await,
            "prev" => browser.prev_page().await,
            "search" => browser.state.set_search(arg),
            "genre" => browser.state.set_genre(arg),
            "fav" => match arg.parse::<i64>() {
                Ok(id) => favorites.toggle(id),
                Err(_) => {
                    println!("fav needs a numeric book id");
                    continue;
                }
            },
            "quit" | "q" => break,
            _ => {
                print_help();
                continue;
            }
        }
        render_screen(&browser.state, favorites);
    }
    Ok(())
}
