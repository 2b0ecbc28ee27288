use anyhow::Result;
use std::io::Write;

use crate::catalog::{CatalogStats, CategoryFilter, WorkshopCatalog};
use crate::workshop::Workshop;

pub mod console;
pub mod list;
pub mod stats;

pub fn show_how_to_use() -> Result<()> {
    println!("🎓 Workshop Console - Catalog and Enrollment Management");
    println!();
    println!("To get started:");
    println!("  🖥️  workshop-console console  # Open the interactive admin console");
    println!("  📚 workshop-console list     # Browse the workshop catalog");
    println!("  📊 workshop-console stats    # See seats and status totals");
    println!();
    println!("💡 Inside the console, type 'help' for the full command list.");
    Ok(())
}

/// One catalog row, shared by `list` and the interactive console.
pub(crate) fn write_workshop_line<W: Write>(out: &mut W, workshop: &Workshop) -> std::io::Result<()> {
    let seats = workshop.available_seats();
    let seats_note = if workshop.status.is_active() {
        if seats > 0 {
            format!("{} seats free", seats)
        } else {
            "full".to_string()
        }
    } else {
        "canceled".to_string()
    };

    writeln!(
        out,
        "  {:<38} [{}] {} · {} {} · {} · {}/{} enrolled ({})",
        format!("{}  {}", workshop.id, workshop.title),
        workshop.status,
        if workshop.category.is_empty() {
            "uncategorized"
        } else {
            workshop.category.as_str()
        },
        workshop.date,
        workshop.time.format("%H:%M"),
        if workshop.location.is_empty() {
            "location TBC"
        } else {
            workshop.location.as_str()
        },
        workshop.enrolled,
        workshop.capacity,
        seats_note,
    )
}

pub(crate) fn write_catalog<W: Write>(
    out: &mut W,
    catalog: &WorkshopCatalog,
    filter: &CategoryFilter,
) -> std::io::Result<()> {
    let label = match filter {
        CategoryFilter::All => "all".to_string(),
        CategoryFilter::Category(c) => c.clone(),
    };
    writeln!(out, "📚 WORKSHOP CATALOG (filter: {})", label)?;

    let visible = catalog.list(filter);
    if visible.is_empty() {
        writeln!(out, "  (no workshops match)")?;
    }
    for workshop in visible {
        write_workshop_line(out, workshop)?;
    }
    Ok(())
}

pub(crate) fn write_stats<W: Write>(out: &mut W, stats: &CatalogStats) -> std::io::Result<()> {
    writeln!(out, "📊 CATALOG OVERVIEW")?;
    writeln!(out, "   Active workshops:  {}", stats.active)?;
    writeln!(out, "   Available seats:   {}", stats.available_seats)?;
    writeln!(out, "   Canceled:          {}", stats.canceled)?;
    writeln!(out, "   Total workshops:   {}", stats.total)?;
    Ok(())
}
