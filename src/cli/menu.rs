//! `canteen menu`: print the product catalog.

use anyhow::{Context, Result};
use canteen_core::{FixtureStore, Locale, Money, ProductFilter, SessionContext};
use serde::Serialize;

/// One product as printed by the command.
#[derive(Debug, Serialize)]
pub struct MenuEntry {
    pub id: &'static str,
    pub name: &'static str,
    pub category: &'static str,
    pub category_name: &'static str,
    pub price: Money,
}

/// Products matching the optional category and name query.
pub fn entries(
    store: &FixtureStore,
    session: &SessionContext,
    category: Option<&str>,
    search: Option<&str>,
) -> Result<Vec<MenuEntry>> {
    if let Some(id) = category {
        store.category(id)?;
    }
    let filter = ProductFilter::new(session.locale())
        .with_category(category)
        .with_query(search.unwrap_or_default());

    filter
        .apply(store.products())
        .into_iter()
        .map(|product| {
            let category = store.category(product.category)?;
            Ok(MenuEntry {
                id: product.id,
                name: session.product_name(product),
                category: category.id,
                category_name: session.category_name(category),
                price: product.price,
            })
        })
        .collect()
}

pub fn run(
    store: &FixtureStore,
    locale: Locale,
    category: Option<&str>,
    search: Option<&str>,
    json: bool,
) -> Result<()> {
    let session = SessionContext::new().with_locale(locale);
    let entries = entries(store, &session, category, search)?;

    if json {
        let text = serde_json::to_string_pretty(&entries).context("Failed to encode menu")?;
        println!("{text}");
        return Ok(());
    }

    if entries.is_empty() {
        println!("{}", session.t("noProducts"));
        return Ok(());
    }
    for entry in &entries {
        println!(
            "{:>3}  {:<24} {:>7}  {}",
            entry.id, entry.name, entry.price, entry.category_name
        );
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_filter() {
        let store = FixtureStore::load();
        let session = SessionContext::new();
        let list = entries(&store, &session, Some("pizza-pasta"), None).unwrap();
        let ids: Vec<_> = list.iter().map(|e| e.id).collect();
        assert_eq!(ids, vec!["7", "8", "14"]);
        assert!(list.iter().all(|e| e.category_name == "Pizza & Pasta"));
    }

    #[test]
    fn test_localized_search() {
        let store = FixtureStore::load();
        let session = SessionContext::new().with_locale(Locale::Fr);
        let list = entries(&store, &session, None, Some("POULET")).unwrap();
        assert_eq!(list.len(), 1);
        assert_eq!(list[0].name, "Poulet grillé");
    }

    #[test]
    fn test_unknown_category_is_an_error() {
        let store = FixtureStore::load();
        let err = entries(&store, &SessionContext::new(), Some("soups"), None).unwrap_err();
        assert!(err.to_string().contains("soups"));
    }
}
