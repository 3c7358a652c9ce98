use anyhow::Context;
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing_subscriber::EnvFilter;

use shoplist::config::AppConfig;
use shoplist::models::{ProductSummary, ShoppingItem, Suggestions};
use shoplist::services::catalog::Catalog;
use shoplist::services::command;
use shoplist::services::interpreter::Interpreter;
use shoplist::services::store::memory::MemoryListStore;
use shoplist::state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let _ = dotenvy::dotenv();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .with_writer(std::io::stderr)
        .init();

    let config = AppConfig::from_env()?;
    let catalog = Catalog::load(config.catalog_path.as_deref()).context("failed to load catalog")?;

    tracing::info!(
        products = catalog.len(),
        empty_add_policy = config.empty_add_policy.as_str(),
        "shopping list ready"
    );

    let state = AppState {
        config,
        interpreter: Interpreter::default(),
        catalog,
        store: Box::new(MemoryListStore::new()),
    };

    println!("Say something like \"add milk\", \"remove bread\" or \"find yogurt under $3\".");
    println!("Console commands: :list, :done <n>, :del <n>, :suggest, :quit");

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    while let Some(line) = lines.next_line().await.context("failed to read stdin")? {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        match line {
            ":quit" | ":q" => break,
            ":list" => match state.store.all().await {
                Ok(items) => print_items(&items),
                Err(e) => tracing::error!(error = %e, "failed to list items"),
            },
            ":suggest" => match command::suggestions(&state).await {
                Ok(s) => print_suggestions(&s),
                Err(e) => tracing::error!(error = %e, "failed to build suggestions"),
            },
            _ if line.starts_with(":done ") || line.starts_with(":del ") => {
                run_position_command(&state, line).await
            }
            _ if line.starts_with(':') => println!("unknown console command {line}"),
            _ => match command::process_command(&state, line).await {
                Ok(outcome) => {
                    println!("{}", outcome.message);
                    print_products(&outcome.results);
                }
                Err(e) => {
                    tracing::error!(error = %e, "failed to process command");
                    println!("Sorry, I could not process that command.");
                }
            },
        }
    }

    Ok(())
}

/// `:done <n>` and `:del <n>`, where `n` is the number `:list` shows.
async fn run_position_command(state: &AppState, line: &str) {
    let (cmd, arg) = line.split_once(' ').unwrap_or((line, ""));
    let Ok(position) = arg.trim().parse::<usize>() else {
        println!("usage: {cmd} <n>, where n is the item number from :list");
        return;
    };

    let result = if cmd == ":done" {
        command::toggle_item(state, position).await
    } else {
        command::delete_item(state, position).await
    };

    match result {
        Ok(Some(item)) if cmd == ":del" => println!("Deleted {}", item.name),
        Ok(Some(item)) if item.completed => println!("Checked off {}", item.name),
        Ok(Some(item)) => println!("Unchecked {}", item.name),
        Ok(None) => println!("No item number {position} on your list"),
        Err(e) => tracing::error!(error = %e, "failed to update item"),
    }
}

fn print_items(items: &[ShoppingItem]) {
    if items.is_empty() {
        println!("Your shopping list is empty.");
        return;
    }
    for (n, item) in items.iter().enumerate() {
        let mark = if item.completed { "x" } else { " " };
        println!(
            "{:>2}. [{mark}] {} x{} ({})",
            n + 1,
            item.name,
            item.quantity,
            item.category
        );
    }
}

fn print_products(products: &[ProductSummary]) {
    for p in products {
        let price = p
            .price
            .map(|v| format!("${v:.2}"))
            .unwrap_or_else(|| "-".to_string());
        let brand = p.brand.as_deref().unwrap_or("-");
        println!("  {} | {} | {} | {}", p.name, brand, p.category, price);
    }
}

fn print_suggestions(s: &Suggestions) {
    println!("Recommended for you:");
    print_products(&s.recommendations);
    println!("Seasonal picks:");
    print_products(&s.seasonal);
    for sub in &s.substitutes {
        println!("Alternatives for {}:", sub.for_item);
        print_products(&sub.alternatives);
    }
}
