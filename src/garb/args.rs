use clap::{Parser, Subcommand};
use garb::model::Category;
use std::path::PathBuf;

/// Long help for `--category`, listing each id with the examples from the
/// category table.
fn category_help() -> String {
    let lines: Vec<String> = Category::ALL
        .iter()
        .map(|c| format!("  {} ({})", c.id(), c.examples()))
        .collect();
    format!("Category of the item:\n{}", lines.join("\n"))
}

#[derive(Parser, Debug)]
#[command(name = "garb")]
#[command(about = "Command-line wardrobe catalog with outfit suggestions", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Add a clothing item to your wardrobe
    #[command(alias = "a")]
    Add {
        /// Name of the item (defaults to "<Category> Item")
        #[arg(required = false)]
        name: Option<String>,

        /// Category: tops, bottoms, shoes, outerwear, accessories
        #[arg(short, long, long_help = category_help())]
        category: String,

        /// Color (defaults to "Mixed")
        #[arg(long)]
        color: Option<String>,

        /// Style, e.g. casual, formal, business (defaults to "casual")
        #[arg(long)]
        style: Option<String>,

        /// Path to a photo of the item
        #[arg(long)]
        image: Option<PathBuf>,
    },

    /// List wardrobe items
    #[command(alias = "ls")]
    List {
        /// Only show items in this category
        #[arg(short, long, long_help = category_help())]
        category: Option<String>,

        /// Search term matched against item names
        #[arg(short, long)]
        search: Option<String>,
    },

    /// Suggest outfits for your day
    #[command(alias = "gen")]
    Suggest {
        /// What are your plans for the day?
        #[arg(required = true, num_args = 1..)]
        plans: Vec<String>,

        /// Weather: hot, mild, cold, rainy
        #[arg(short, long, default_value = "mild")]
        weather: String,

        /// Skip the styling pause before results
        #[arg(long)]
        no_wait: bool,
    },

    /// List saved outfits
    Outfits,

    /// Remove a saved outfit
    #[command(alias = "rm")]
    Remove {
        /// Id of the saved outfit
        id: i64,

        /// Skip the confirmation prompt
        #[arg(short = 'y', long)]
        yes: bool,
    },

    /// Show wardrobe stats
    Stats,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn category_help_lists_every_id_with_examples() {
        let help = category_help();
        for category in Category::ALL {
            assert!(help.contains(category.id()));
            assert!(help.contains(category.examples()));
        }
    }
}
