//! Product filtering for the menu screens.

use crate::fixtures::{FixtureStore, LocalizedName, Product};
use crate::i18n::Locale;

/// Number of products shown under "Suggestions for you".
pub const HOME_SUGGESTIONS: usize = 5;

/// Which localized names a text query is matched against.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NameMatch {
    /// Only the name in this locale.
    Locale(Locale),
    /// Any of the three localized names.
    AnyLocale,
}

/// Combined category and text filter.
#[derive(Debug, Clone, Copy)]
pub struct ProductFilter<'a> {
    pub category: Option<&'a str>,
    pub query: &'a str,
    pub names: NameMatch,
}

impl<'a> ProductFilter<'a> {
    /// No category restriction, no query, matching names in `locale`.
    pub fn new(locale: Locale) -> Self {
        Self {
            category: None,
            query: "",
            names: NameMatch::Locale(locale),
        }
    }

    #[must_use]
    pub fn with_category(mut self, category: Option<&'a str>) -> Self {
        self.category = category;
        self
    }

    #[must_use]
    pub fn with_query(mut self, query: &'a str) -> Self {
        self.query = query;
        self
    }

    #[must_use]
    pub fn with_names(mut self, names: NameMatch) -> Self {
        self.names = names;
        self
    }

    pub fn matches(&self, product: &Product) -> bool {
        let category_ok = self.category.is_none_or(|id| product.category == id);
        category_ok && name_matches(&product.name, self.query, self.names)
    }

    pub fn apply<'p>(&self, products: &'p [Product]) -> Vec<&'p Product> {
        products.iter().filter(|p| self.matches(p)).collect()
    }
}

/// Products whose category field equals `category_id`.
pub fn by_category<'p>(products: &'p [Product], category_id: &str) -> Vec<&'p Product> {
    products
        .iter()
        .filter(|p| p.category == category_id)
        .collect()
}

/// Products whose name in `locale` contains `query`, ignoring case.
pub fn search<'p>(products: &'p [Product], query: &str, locale: Locale) -> Vec<&'p Product> {
    products
        .iter()
        .filter(|p| name_matches(&p.name, query, NameMatch::Locale(locale)))
        .collect()
}

/// The student home screen's suggestion strip.
pub fn home_suggestions(store: &FixtureStore) -> &[Product] {
    let products = store.products();
    &products[..HOME_SUGGESTIONS.min(products.len())]
}

/// Case-insensitive substring match; an empty query matches everything.
pub fn contains_ignore_case(haystack: &str, query: &str) -> bool {
    query.is_empty() || haystack.to_lowercase().contains(&query.to_lowercase())
}

fn name_matches(name: &LocalizedName, query: &str, names: NameMatch) -> bool {
    match names {
        NameMatch::Locale(locale) => contains_ignore_case(name.get(locale), query),
        NameMatch::AnyLocale => name.all().iter().any(|n| contains_ignore_case(n, query)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_by_category_only_returns_that_category() {
        let store = FixtureStore::load();
        for category in store.categories() {
            let found = by_category(store.products(), category.id);
            assert!(found.iter().all(|p| p.category == category.id));
        }
        let pizzas = by_category(store.products(), "pizza-pasta");
        assert_eq!(pizzas.len(), 3);
        assert!(by_category(store.products(), "soups").is_empty());
    }

    #[test]
    fn test_search_is_case_insensitive() {
        let store = FixtureStore::load();
        let found = search(store.products(), "PIZZA", Locale::En);
        let ids: Vec<_> = found.iter().map(|p| p.id).collect();
        assert_eq!(ids, vec!["7", "14"]);
    }

    #[test]
    fn test_search_uses_locale_name() {
        let store = FixtureStore::load();
        // "Poulet" only appears in the French name
        assert!(search(store.products(), "poulet", Locale::En).is_empty());
        let found = search(store.products(), "poulet", Locale::Fr);
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].id, "9");

        let found = search(store.products(), "بيتزا", Locale::Ar);
        assert_eq!(found.len(), 2);
    }

    #[test]
    fn test_search_results_contain_query() {
        let store = FixtureStore::load();
        for locale in Locale::ALL {
            for query in ["a", "ch", "E"] {
                for product in search(store.products(), query, locale) {
                    assert!(product
                        .name
                        .get(locale)
                        .to_lowercase()
                        .contains(&query.to_lowercase()));
                }
            }
        }
    }

    #[test]
    fn test_empty_query_matches_all() {
        let store = FixtureStore::load();
        assert_eq!(search(store.products(), "", Locale::Ar).len(), 15);
    }

    #[test]
    fn test_combined_filter() {
        let store = FixtureStore::load();
        let filter = ProductFilter::new(Locale::En)
            .with_category(Some("sandwiches"))
            .with_query("club");
        let found = filter.apply(store.products());
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].id, "15");
    }

    #[test]
    fn test_any_locale_match() {
        let store = FixtureStore::load();
        let filter = ProductFilter::new(Locale::En)
            .with_query("frites")
            .with_names(NameMatch::AnyLocale);
        let found = filter.apply(store.products());
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].name.en, "French Fries");
    }

    #[test]
    fn test_home_suggestions() {
        let store = FixtureStore::load();
        let suggestions = home_suggestions(&store);
        assert_eq!(suggestions.len(), HOME_SUGGESTIONS);
        assert_eq!(suggestions[0].id, "1");
    }
}
