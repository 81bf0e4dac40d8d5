#[derive(Debug, clap::Parser)]
#[command(name = "gutenshelf", version, about = "Browse a book catalog from the terminal")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, clap::Subcommand)]
pub enum Command {
    /// Browse the paged catalog with search and genre filters
    List,
    /// Show the books on your wishlist
    Wishlist,
    /// Show one book by its catalog id
    Detail {
        #[arg(long)]
        id: i64,
    },
}
