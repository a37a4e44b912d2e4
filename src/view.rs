// src/view.rs
use std::fmt::Write;

use crate::dtos::product::{HealthResponse, StatsResponse};
use crate::models::{Category, Draft, ProductId, Totals};
use crate::state::ViewState;

#[derive(Debug, Clone, PartialEq)]
pub enum DraftField {
    Name(String),
    Category(Category),
    Quantity(String),
    Price(String),
}

#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    List,
    Refresh,
    Set(DraftField),
    ShowDraft,
    Submit,
    Remove(ProductId),
    Dismiss,
    Stats,
    Health,
    Help,
    Quit,
}

pub const HELP: &str = "\
commands:
  list                      show products and totals
  refresh                   reload products from the service
  set <field> <value>       edit the draft (name, category, quantity, price)
  draft                     show the draft
  submit                    add the draft as a new product
  rm <id>                   delete a product (asks for confirmation)
  dismiss                   clear the error message
  stats                     server-side totals
  health                    service health
  help                      this text
  quit                      exit";

pub fn parse_command(line: &str) -> Result<Command, String> {
    let line = line.trim();
    let (verb, rest) = match line.split_once(char::is_whitespace) {
        Some((verb, rest)) => (verb, rest.trim()),
        None => (line, ""),
    };

    let command = match verb.to_ascii_lowercase().as_str() {
        "list" | "ls" => Command::List,
        "refresh" | "reload" => Command::Refresh,
        "draft" => Command::ShowDraft,
        "submit" | "add" => Command::Submit,
        "dismiss" => Command::Dismiss,
        "stats" => Command::Stats,
        "health" => Command::Health,
        "help" | "?" => Command::Help,
        "quit" | "exit" | "q" => Command::Quit,
        "rm" | "delete" => {
            let id = rest
                .parse::<ProductId>()
                .map_err(|_| format!("expected a product id, got '{rest}'"))?;
            Command::Remove(id)
        }
        "set" => Command::Set(parse_field(rest)?),
        "" => return Err("empty command".to_string()),
        other => return Err(format!("unknown command '{other}'")),
    };
    Ok(command)
}

fn parse_field(rest: &str) -> Result<DraftField, String> {
    let (field, value) = rest.split_once(char::is_whitespace).unwrap_or((rest, ""));
    let value = value.trim().to_string();
    match field.to_ascii_lowercase().as_str() {
        "name" => Ok(DraftField::Name(value)),
        "category" => value.parse().map(DraftField::Category),
        "quantity" | "qty" => Ok(DraftField::Quantity(value)),
        "price" => Ok(DraftField::Price(value)),
        other => Err(format!("unknown draft field '{other}'")),
    }
}

pub fn apply_field(draft: &mut Draft, field: DraftField) {
    match field {
        DraftField::Name(name) => draft.name = name,
        DraftField::Category(category) => draft.category = category,
        DraftField::Quantity(quantity) => draft.quantity = quantity,
        DraftField::Price(price) => draft.price = price,
    }
}

pub fn render(state: &ViewState) -> String {
    let mut out = String::new();

    if let Some(error) = &state.error {
        let _ = writeln!(out, "!! {error}  (type 'dismiss' to clear)");
    }
    if state.loading {
        let _ = writeln!(out, "loading...");
    }

    if state.products.is_empty() {
        let _ = writeln!(out, "No products yet.");
    } else {
        let _ = writeln!(
            out,
            "{:>6}  {:<24} {:<12} {:>8} {:>10} {:>12}  {}",
            "ID", "NAME", "CATEGORY", "QTY", "PRICE", "VALUE", "CREATED"
        );
        for p in &state.products {
            let created = p
                .created_at_utc()
                .map(|dt| dt.format("%Y-%m-%d").to_string())
                .unwrap_or_else(|| "-".to_string());
            let _ = writeln!(
                out,
                "{:>6}  {:<24} {:<12} {:>8} {:>10.2} {:>12.2}  {}",
                p.id,
                p.name,
                p.category,
                p.quantity,
                p.price,
                p.value(),
                created
            );
        }
    }

    out.push_str(&render_totals(&state.totals));
    out
}

pub fn render_totals(totals: &Totals) -> String {
    format!(
        "products: {}  quantity: {}  value: {:.2}\n",
        totals.count, totals.quantity, totals.value
    )
}

pub fn render_draft(draft: &Draft) -> String {
    format!(
        "draft: name='{}' category={} quantity={} (-> {}) price={} (-> {:.2})\n",
        draft.name,
        draft.category,
        draft.quantity,
        draft.quantity_value(),
        draft.price,
        draft.price_value()
    )
}

pub fn render_stats(stats: &StatsResponse, local: &Totals) -> String {
    let mut out = format!(
        "server: products: {}  quantity: {}  value: {:.2}",
        stats.total_products, stats.total_quantity, stats.total_inventory_value
    );
    if let Some(db) = &stats.database_type {
        let _ = write!(out, "  ({db})");
    }
    out.push('\n');
    out.push_str("local:  ");
    out.push_str(&render_totals(local));
    out
}

pub fn render_health(health: &HealthResponse) -> String {
    let mut out = format!("service: {}", health.status);
    if let Some(db) = &health.database {
        let _ = write!(out, "  database: {db}");
    }
    if let Some(ts) = &health.timestamp {
        let _ = write!(out, "  at {ts}");
    }
    out.push('\n');
    out
}
