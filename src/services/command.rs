use serde::Serialize;

use crate::config::EmptyItemPolicy;
use crate::models::{Intent, NewItem, ProductSummary, SearchQuery, ShoppingItem, Suggestions};
use crate::state::AppState;

#[derive(Debug, Clone, Serialize)]
pub struct CommandOutcome {
    pub message: String,
    pub intent: Intent,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub item: Option<ShoppingItem>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub results: Vec<ProductSummary>,
}

impl CommandOutcome {
    fn message(intent: Intent, message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            intent,
            item: None,
            results: Vec::new(),
        }
    }
}

/// Interpret one utterance and carry it out: adds and removes go to the list
/// store, searches only touch the catalog.
pub async fn process_command(state: &AppState, command: &str) -> anyhow::Result<CommandOutcome> {
    let intent = state.interpreter.interpret(command);

    tracing::info!(intent = intent.kind(), command, "processing command");

    let outcome = match &intent {
        Intent::Search(query) => search(state, query, intent.clone()),

        Intent::Add { name, .. }
            if name.is_empty() && state.config.empty_add_policy == EmptyItemPolicy::Reject =>
        {
            CommandOutcome::message(intent.clone(), "Please specify which item to add")
        }

        Intent::Add {
            name,
            quantity,
            category,
        } => {
            let new_item = NewItem::from_voice(name, *quantity, *category, command);
            let item = state.store.insert(new_item).await?;
            tracing::info!(
                id = %item.id,
                name = %item.name,
                quantity = item.quantity,
                category = %item.category,
                "added item"
            );
            CommandOutcome {
                message: format!("Added {} to your shopping list", item.name),
                intent: intent.clone(),
                item: Some(item),
                results: Vec::new(),
            }
        }

        Intent::Remove { name } if name.is_empty() => {
            CommandOutcome::message(intent.clone(), "Please specify which item to remove")
        }

        Intent::Remove { name } => match state.store.remove_first_matching(name).await? {
            Some(item) => {
                tracing::info!(id = %item.id, name = %item.name, "removed item");
                CommandOutcome {
                    message: format!("Removed {} from your shopping list", item.name),
                    intent: intent.clone(),
                    item: Some(item),
                    results: Vec::new(),
                }
            }
            None => CommandOutcome::message(
                intent.clone(),
                format!("Could not find {name} in your shopping list"),
            ),
        },

        Intent::Unknown => {
            CommandOutcome::message(intent.clone(), "Sorry, I could not understand that command")
        }
    };

    Ok(outcome)
}

fn search(state: &AppState, query: &SearchQuery, intent: Intent) -> CommandOutcome {
    let results: Vec<ProductSummary> = state
        .catalog
        .search(query)
        .into_iter()
        .map(ProductSummary::from)
        .collect();

    tracing::info!(
        query = %query.query,
        brand = ?query.brand,
        min_price = ?query.min_price,
        max_price = ?query.max_price,
        hits = results.len(),
        "catalog search"
    );

    CommandOutcome {
        message: format!("Found {} results", results.len()),
        intent,
        item: None,
        results,
    }
}

/// Catalog suggestions based on what was most recently touched on the list.
pub async fn suggestions(state: &AppState) -> anyhow::Result<Suggestions> {
    let recent = state.store.recent(state.config.suggestion_window).await?;
    Ok(state.catalog.suggest(recent.iter().map(|i| i.name.as_str())))
}

/// Item at a 1-based position in the list as `all()` orders it.
async fn item_at(state: &AppState, position: usize) -> anyhow::Result<Option<ShoppingItem>> {
    let items = state.store.all().await?;
    Ok(position.checked_sub(1).and_then(|i| items.into_iter().nth(i)))
}

/// Check or uncheck the item at `position` (1-based, newest first).
pub async fn toggle_item(
    state: &AppState,
    position: usize,
) -> anyhow::Result<Option<ShoppingItem>> {
    let Some(item) = item_at(state, position).await? else {
        return Ok(None);
    };
    let toggled = state.store.toggle_completed(&item.id).await?;
    if let Some(item) = &toggled {
        tracing::info!(id = %item.id, name = %item.name, completed = item.completed, "toggled item");
    }
    Ok(toggled)
}

/// Delete the item at `position` (1-based, newest first).
pub async fn delete_item(
    state: &AppState,
    position: usize,
) -> anyhow::Result<Option<ShoppingItem>> {
    let Some(item) = item_at(state, position).await? else {
        return Ok(None);
    };
    let deleted = state.store.delete(&item.id).await?;
    if let Some(item) = &deleted {
        tracing::info!(id = %item.id, name = %item.name, "deleted item");
    }
    Ok(deleted)
}
