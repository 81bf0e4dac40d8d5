// One flow per page context; exactly one runs per invocation.

pub mod detail;
pub mod list;
pub mod wishlist;

use crate::render::DisplayItem;

fn format_item(item: &DisplayItem) -> String {
    let marker = if item.is_favorite { "*" } else { " " };
    format!(
        "[{}] {:>6}  {}  by {} ({})",
        marker, item.detail_link_id, item.title, item.author_name, item.genre
    )
}

fn read_command() -> Option<String> {
    use std::io::{BufRead, Write};

    let mut out = std::io::stdout();
    let _ = write!(out, "> ");
    let _ = out.flush();

    let mut line = String::new();
    match std::io::stdin().lock().read_line(&mut line) {
        Ok(0) => None,
        Ok(_) => Some(line.trim().to_string()),
        Err(_) => None,
    }
}
