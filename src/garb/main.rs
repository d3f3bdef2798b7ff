use clap::Parser;
use colored::Colorize;
use directories::ProjectDirs;
use garb::api::{GarbApi, ItemFilter};
use garb::error::{GarbError, Result};
use garb::image::encode_image;
use garb::model::{Category, ItemDraft, Weather};
use garb::store::fs::FileStore;
use std::io::{self, Write};
use std::path::PathBuf;
use std::time::Duration;
use tracing_subscriber::EnvFilter;

mod args;
mod print;

use args::{Cli, Commands};
use print::{print_items, print_messages, print_outfits, print_saved_outfits, print_stats};

/// Pause before revealing a generated batch. Cosmetic only; `--no-wait`
/// skips it.
const REVEAL_DELAY: Duration = Duration::from_millis(2500);

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

struct AppContext {
    api: GarbApi<FileStore>,
    data_dir: PathBuf,
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);
    let mut ctx = init_context();

    match cli.command {
        Some(Commands::Add {
            name,
            category,
            color,
            style,
            image,
        }) => handle_add(&mut ctx.api, name, category, color, style, image),
        Some(Commands::List { category, search }) => handle_list(&ctx.api, category, search),
        Some(Commands::Suggest {
            plans,
            weather,
            no_wait,
        }) => handle_suggest(&mut ctx.api, plans, weather, no_wait),
        Some(Commands::Outfits) => handle_outfits(&ctx.api),
        Some(Commands::Remove { id, yes }) => handle_remove(&mut ctx.api, id, yes),
        Some(Commands::Stats) | None => handle_stats(&ctx),
    }
}

fn init_tracing(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("garb=debug")
    } else {
        EnvFilter::from_default_env()
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn init_context() -> AppContext {
    let data_dir = match std::env::var_os("GARB_HOME") {
        Some(dir) => PathBuf::from(dir),
        None => ProjectDirs::from("com", "garb", "garb")
            .expect("Could not determine data dir")
            .data_dir()
            .to_path_buf(),
    };
    let store = FileStore::new(data_dir);
    AppContext {
        data_dir: store.root().to_path_buf(),
        api: GarbApi::new(store),
    }
}

fn handle_add(
    api: &mut GarbApi<FileStore>,
    name: Option<String>,
    category: String,
    color: Option<String>,
    style: Option<String>,
    image: Option<PathBuf>,
) -> Result<()> {
    let category: Category = category.parse()?;
    let image = image.map(|path| encode_image(&path)).transpose()?;

    let result = api.add_item(ItemDraft {
        name,
        category: Some(category),
        color,
        style,
        image,
    })?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_list(
    api: &GarbApi<FileStore>,
    category: Option<String>,
    search: Option<String>,
) -> Result<()> {
    let category = category.map(|c| c.parse::<Category>()).transpose()?;
    let result = api.list_items(ItemFilter { category, search })?;
    print_messages(&result.messages);
    print_items(&result.items);
    Ok(())
}

fn handle_suggest(
    api: &mut GarbApi<FileStore>,
    plans: Vec<String>,
    weather: String,
    no_wait: bool,
) -> Result<()> {
    let weather: Weather = weather.parse()?;
    let day_plans = plans.join(" ");

    let result = api.suggest(&day_plans, weather)?;
    if result.outfits.is_empty() {
        print_messages(&result.messages);
        return Ok(());
    }

    if !no_wait {
        println!("{}", "Styling your looks...".dimmed());
        std::thread::sleep(REVEAL_DELAY);
    }

    print_messages(&result.messages);
    let mut outfits = result.outfits;
    print_outfits(&outfits);

    prompt_save(api, &mut outfits)
}

/// Blocking save prompt after a generated batch: the batch is never
/// persisted, so saving happens here or not at all.
fn prompt_save(api: &mut GarbApi<FileStore>, outfits: &mut [garb::model::Outfit]) -> Result<()> {
    print!("Save outfits by number (e.g. 1 3), or press Enter to skip: ");
    io::stdout().flush().map_err(GarbError::Io)?;

    let mut input = String::new();
    io::stdin().read_line(&mut input).map_err(GarbError::Io)?;

    for token in input.split_whitespace() {
        match token.parse::<usize>() {
            Ok(n) if (1..=outfits.len()).contains(&n) => {
                let result = api.save_outfit(&mut outfits[n - 1])?;
                print_messages(&result.messages);
            }
            _ => println!(
                "{}",
                format!("Skipping '{}': not an outfit number.", token).yellow()
            ),
        }
    }
    Ok(())
}

fn handle_outfits(api: &GarbApi<FileStore>) -> Result<()> {
    let result = api.saved_outfits()?;
    print_messages(&result.messages);
    print_saved_outfits(&result.outfits);
    Ok(())
}

fn handle_remove(api: &mut GarbApi<FileStore>, id: i64, yes: bool) -> Result<()> {
    let result = api.remove_outfit(id, yes)?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_stats(ctx: &AppContext) -> Result<()> {
    let result = ctx.api.stats()?;
    if let Some(stats) = &result.stats {
        print_stats(stats);
    }
    println!(
        "{}",
        format!("Data: {}", ctx.data_dir.display()).dimmed()
    );
    Ok(())
}
