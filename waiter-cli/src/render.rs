//! Plain-text rendering for terminal output

use std::fmt::Write;

use rust_decimal::{Decimal, RoundingStrategy};
use waiter_client::composer::MenuCatalog;
use waiter_client::{DiningTable, OrderSummary};

/// Format an amount as whole rupiah, e.g. `Rp 22000`
pub fn format_rupiah(amount: Decimal) -> String {
    format!(
        "Rp {}",
        amount.round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero)
    )
}

pub fn render_menu(catalog: &MenuCatalog) -> String {
    let mut out = String::new();
    for item in catalog.items() {
        let marker = if item.selected { "[x]" } else { "[ ]" };
        let _ = write!(out, "{} {} ({})", marker, item.name, format_rupiah(item.price));
        if item.selected {
            let _ = write!(out, " x{}", item.quantity);
        }
        let _ = writeln!(out, "  <{}>", item.id);

        for option in &item.options {
            let marker = if option.selected { "[x]" } else { "[ ]" };
            let _ = write!(out, "      {} {}", marker, option.name);
            if option.extra_price > Decimal::ZERO {
                let _ = write!(out, " (+{})", option.extra_price.normalize());
            }
            if !option.available {
                let _ = write!(out, " (unavailable)");
            }
            if option.selected {
                let _ = write!(out, " x{}", option.quantity);
            }
            let _ = writeln!(out, "  <{}>", option.id);
        }
    }
    out
}

pub fn render_tables(tables: &[DiningTable]) -> String {
    tables
        .iter()
        .map(|t| format!("Table #{}  <{}>\n", t.number, t.id))
        .collect()
}

/// Orders grouped by table; lines are listed for expanded orders only
pub fn render_status<'a>(
    groups: &[(&'a str, Vec<&'a OrderSummary>)],
    is_expanded: impl Fn(&str) -> bool,
) -> String {
    let mut out = String::new();
    for (table, orders) in groups {
        let _ = writeln!(out, "Table {}", table);
        for order in orders {
            let sign = if is_expanded(&order.id) { "-" } else { "+" };
            let _ = writeln!(
                out,
                "  {} {} [{}] {}",
                sign, order.waiter_name, order.status, order.id
            );
            if !is_expanded(&order.id) {
                continue;
            }
            for line in &order.items {
                let _ = writeln!(out, "      {} (x{})", line.food_name, line.quantity);
                for option in &line.options {
                    let _ = writeln!(out, "        - {} (x{})", option.name, option.quantity);
                }
            }
            if let Some(remark) = &order.remark {
                let _ = writeln!(out, "      Remark: {}", remark);
            }
        }
    }
    out
}
