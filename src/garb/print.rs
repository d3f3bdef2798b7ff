use chrono::{NaiveDate, Utc};
use colored::Colorize;
use garb::api::{CmdMessage, MessageLevel, WardrobeStats};
use garb::model::{Outfit, WardrobeItem};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

const NAME_WIDTH: usize = 32;
const BAR_WIDTH: usize = 20;

pub(crate) fn print_messages(messages: &[CmdMessage]) {
    for message in messages {
        match message.level {
            MessageLevel::Info => println!("{}", message.content.dimmed()),
            MessageLevel::Success => println!("{}", message.content.green()),
            MessageLevel::Warning => println!("{}", message.content.yellow()),
            MessageLevel::Error => println!("{}", message.content.red()),
        }
    }
}

pub(crate) fn print_items(items: &[WardrobeItem]) {
    for item in items {
        let name = pad_to_width(&item.name, NAME_WIDTH);
        let tags = item.tags.join(", ");
        println!(
            "  {}  {:<12} {}",
            name,
            item.category_name.cyan(),
            format!("[{}]", tags).dimmed()
        );
    }
}

/// Generated batch: numbered so the save prompt can refer to outfits.
pub(crate) fn print_outfits(outfits: &[Outfit]) {
    for (i, outfit) in outfits.iter().enumerate() {
        println!(
            "\n{}. {} {}  {}",
            i + 1,
            outfit.name.bold(),
            stars(outfit.rating).yellow(),
            format!("({})", outfit.occasion).cyan()
        );
        let names: Vec<&str> = outfit.items.iter().map(|item| item.name.as_str()).collect();
        println!("   {}", names.join(" + "));
        println!("   {}", outfit.description.dimmed());
    }
    println!();
}

pub(crate) fn print_saved_outfits(outfits: &[Outfit]) {
    for outfit in outfits {
        let date = outfit
            .created_at
            .map(format_date)
            .unwrap_or_default();
        println!(
            "{}  {} {}  {}  {}",
            outfit.id.to_string().dimmed(),
            outfit.name.bold(),
            stars(outfit.rating).yellow(),
            format!("({})", outfit.occasion).cyan(),
            date.dimmed()
        );
        let names: Vec<&str> = outfit.items.iter().map(|item| item.name.as_str()).collect();
        println!("   {}", names.join(" + "));
    }
}

pub(crate) fn print_stats(stats: &WardrobeStats) {
    println!(
        "Closet: {}   Saved outfits: {}",
        stats.item_count.to_string().bold(),
        stats.outfit_count.to_string().bold()
    );
    let filled = stats.progress as usize * BAR_WIDTH / 100;
    let bar = format!(
        "{}{}",
        "█".repeat(filled),
        "░".repeat(BAR_WIDTH - filled)
    );
    println!("[{}] {}%", bar.green(), stats.progress);
    println!("{}", stats.progress_text.dimmed());
}

fn stars(rating: u8) -> String {
    "★".repeat(rating as usize)
}

/// Relative day display for saved outfits, matching the app's tiers.
fn format_date(date: NaiveDate) -> String {
    let today = Utc::now().date_naive();
    match (today - date).num_days() {
        0 => "Today".to_string(),
        1 => "Yesterday".to_string(),
        n if (2..7).contains(&n) => format!("{} days ago", n),
        _ => date.format("%b %e, %Y").to_string(),
    }
}

fn pad_to_width(s: &str, width: usize) -> String {
    let truncated = truncate_to_width(s, width);
    let padding = width.saturating_sub(truncated.width());
    format!("{}{}", truncated, " ".repeat(padding))
}

fn truncate_to_width(s: &str, max_width: usize) -> String {
    if s.width() <= max_width {
        return s.to_string();
    }
    let mut result = String::new();
    let mut current_width = 0;
    for c in s.chars() {
        let char_width = c.width().unwrap_or(0);
        if current_width + char_width > max_width.saturating_sub(1) {
            result.push('…');
            return result;
        }
        result.push(c);
        current_width += char_width;
    }
    result
}
