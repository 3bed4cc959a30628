//! Terminal rendering of the cabinet: list table, shelves of bottles and the
//! detail card. Everything returns a `String` so callers decide where it goes.

use crate::config::Config;
use crate::models::Prescription;
use crate::utils::chunk;
use crate::utils::colors::{color_for_quantity, color_for_status, colorize_flag, paint, CYAN};
use crate::utils::formatting::{bold, center, pad_right, truncate};
use crate::utils::table::{Column, Table};

pub fn render_table(list: &[Prescription], cfg: &Config) -> String {
    if list.is_empty() {
        return "The cabinet is empty.\n".to_string();
    }

    let name_w = list.iter().map(|p| p.name.len()).max().unwrap_or(4).max(4);
    let cat_w = list.iter().map(|p| p.category.len()).max().unwrap_or(8).max(8);

    let mut table = Table::new(vec![
        Column::new("ID", 3),
        Column::new("NAME", name_w),
        Column::new("QTY", 4),
        Column::new("REFILLS", 7),
        Column::new("CATEGORY", cat_w),
        Column::new("STATUS", 8),
        Column::new("FILLED", 10),
        Column::new("AUTO-REFILL", 12),
    ]);

    for p in list {
        let qty_color = color_for_quantity(p.quantity, p.active, cfg.low_quantity_threshold);
        table.add_row(vec![
            p.id.clone(),
            p.name.clone(),
            paint(&p.quantity.to_string(), qty_color),
            p.refills.to_string(),
            p.category.clone(),
            paint(p.status_str(), color_for_status(p.active)),
            p.date_filled.format(&cfg.date_format).to_string(),
            colorize_flag(p.auto_refill_str(), p.auto_refill),
        ]);
    }

    table.render()
}

/// Bottles grouped into shelves of `cfg.shelf_size`.
pub fn render_cabinet(list: &[Prescription], cfg: &Config) -> String {
    if list.is_empty() {
        return "The cabinet is empty.\n".to_string();
    }

    let inner = cfg.label_width.saturating_sub(2);
    let shelf_w = (cfg.label_width + 1) * cfg.shelf_size.min(list.len());
    let mut out = String::new();

    for shelf in chunk(list, cfg.shelf_size) {
        let bottles: Vec<[String; 6]> = shelf.iter().map(|p| bottle(p, inner, cfg)).collect();
        for line in 0..6 {
            let row: Vec<&str> = bottles.iter().map(|b| b[line].as_str()).collect();
            out.push_str(row.join(" ").trim_end());
            out.push('\n');
        }
        out.push_str(&"▀".repeat(shelf_w));
        out.push_str("\n\n");
    }
    out
}

fn bottle(p: &Prescription, inner: usize, cfg: &Config) -> [String; 6] {
    let low = p.is_low(cfg.low_quantity_threshold);
    let qty = format!("{} left", p.quantity);
    let qty = if low {
        paint(&qty, color_for_quantity(p.quantity, p.active, cfg.low_quantity_threshold))
    } else {
        qty
    };

    [
        format!(" {} ", center("▄▄▄▄", inner)),
        format!("╭{}╮", "─".repeat(inner)),
        format!("│{}│", center(&bold(&truncate(&p.name, inner)), inner)),
        format!("│{}│", center(&format!("#{}", p.id), inner)),
        format!("│{}│", center(&qty, inner)),
        format!("╰{}╯", center(&paint(p.status_str(), color_for_status(p.active)), inner)
            .replace(' ', "─")),
    ]
}

pub fn render_detail(p: &Prescription, cfg: &Config) -> String {
    let label_w = 14;
    let wrap_w = (cfg.label_width * 2).max(30);
    let mut out = format!("{}\n", bold(&paint(&p.name, CYAN)));
    out.push_str("View and manage prescription details\n\n");

    let mut field = |label: &str, value: String| {
        let mut lines = textwrap::wrap(&value, wrap_w).into_iter();
        let first = lines.next().map(|l| l.into_owned()).unwrap_or_default();
        out.push_str(&format!("{} {}\n", pad_right(&format!("{label}:"), label_w), first));
        for rest in lines {
            out.push_str(&format!("{} {}\n", " ".repeat(label_w), rest));
        }
    };

    let qty_color = color_for_quantity(p.quantity, p.active, cfg.low_quantity_threshold);
    field("Quantity", paint(&p.quantity.to_string(), qty_color));
    field("Date Filled", p.date_filled.format(&cfg.date_format).to_string());
    field("Refills", p.refills.to_string());
    field("Category", p.category.clone());
    field("Status", paint(p.status_str(), color_for_status(p.active)));
    field("Instructions", p.instructions.clone());
    field("Auto-refill", colorize_flag(p.auto_refill_str(), p.auto_refill));
    field("Notify Refill", colorize_flag(p.notify_refill_str(), p.notify_refill));

    out
}

pub fn render_categories(categories: &[String], selected: &str) -> String {
    let mut out = String::new();
    for c in categories {
        let marker = if c == selected { "*" } else { " " };
        out.push_str(&format!("{marker} {c}\n"));
    }
    out
}
