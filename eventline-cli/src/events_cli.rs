//! Catalog commands: listing, category filter, search, featured, detail

use anyhow::{Context, Result};
use chrono::NaiveDate;
use tabled::{
    settings::{object::Rows, Alignment, Modify, Style},
    Table, Tabled,
};

use eventline_core::catalog::query::local_today;
use eventline_core::{Event, EventCatalog, EventId, EventSession, EventlineConfig};

/// Table row for event listings
#[derive(Tabled)]
struct EventRow {
    #[tabled(rename = "ID")]
    id: String,
    #[tabled(rename = "Name")]
    name: String,
    #[tabled(rename = "Category")]
    category: String,
    #[tabled(rename = "When")]
    when: String,
    #[tabled(rename = "Spots")]
    spots: u32,
}

impl From<&Event> for EventRow {
    fn from(event: &Event) -> Self {
        Self {
            id: event.id.to_string(),
            name: event.name.clone(),
            category: event.category.clone(),
            when: event.time_range_label(),
            spots: event.spots_remaining,
        }
    }
}

async fn load_catalog(config: &EventlineConfig) -> Result<EventCatalog> {
    let session = EventSession::start(config).await?;
    Ok(session.catalog().clone())
}

fn results_label(count: usize) -> String {
    format!("{count} result{} found", if count == 1 { "" } else { "s" })
}

fn print_events(events: &[&Event], json_output: bool, empty_message: &str) -> Result<()> {
    if json_output {
        println!("{}", serde_json::to_string_pretty(events)?);
        return Ok(());
    }

    println!("{}", results_label(events.len()));
    if events.is_empty() {
        println!("\n{empty_message}");
        return Ok(());
    }

    let rows: Vec<EventRow> = events.iter().copied().map(EventRow::from).collect();
    let table = Table::new(&rows)
        .with(Style::rounded())
        .with(Modify::new(Rows::first()).with(Alignment::center()))
        .to_string();
    println!("\n{table}");
    Ok(())
}

pub async fn list(config: &EventlineConfig, category: Option<&str>, json_output: bool) -> Result<()> {
    let catalog = load_catalog(config).await?;

    let events: Vec<&Event> = match category {
        Some(category) => catalog.by_category(category),
        None => catalog.events().iter().collect(),
    };

    print_events(&events, json_output, "No events found")
}

pub async fn search(config: &EventlineConfig, query: &str, json_output: bool) -> Result<()> {
    let catalog = load_catalog(config).await?;
    let results = catalog.suggestions(query);

    if json_output {
        println!("{}", serde_json::to_string_pretty(&results)?);
        return Ok(());
    }

    if results.is_empty() {
        println!("No matching events.");
        return Ok(());
    }

    for event in results {
        println!("{} ({}) - {}", event.name, event.id, event.category);
    }
    Ok(())
}

pub async fn featured(
    config: &EventlineConfig,
    date: Option<NaiveDate>,
    json_output: bool,
) -> Result<()> {
    let catalog = load_catalog(config).await?;
    let day = date.unwrap_or_else(local_today);
    let picks = catalog.featured(day);

    if json_output {
        println!("{}", serde_json::to_string_pretty(&picks)?);
        return Ok(());
    }

    println!("Featured events for {day}:\n");
    if picks.is_empty() {
        println!("No events available.");
    }
    for event in picks {
        println!(
            "  {} - {} ({} spots)",
            event.name, event.category, event.spots_remaining
        );
    }
    Ok(())
}

pub async fn categories(config: &EventlineConfig) -> Result<()> {
    let catalog = load_catalog(config).await?;
    for category in catalog.categories() {
        println!("{category}");
    }
    Ok(())
}

pub async fn show(config: &EventlineConfig, id: &EventId, json_output: bool) -> Result<()> {
    let catalog = load_catalog(config).await?;
    let event = catalog
        .find(id)
        .with_context(|| format!("Event '{id}' not found in catalog"))?;

    if json_output {
        println!("{}", serde_json::to_string_pretty(event)?);
        return Ok(());
    }

    println!();
    println!("{}", event.name);
    if event.is_on(local_today()) {
        println!("Happening today");
    }
    println!();
    if !event.description.is_empty() {
        println!("{}", event.description);
        println!();
    }
    println!("When:     {}", event.time_range_label());
    println!("Category: {}", event.category);
    println!("Spots:    {}", event.spots_remaining);
    if event.registration_open() {
        println!("\nRegister with: eventline register --event {} --name <NAME> --email <EMAIL>", event.id);
    } else {
        println!("\nRegistration closed: no spots remaining");
    }
    Ok(())
}
