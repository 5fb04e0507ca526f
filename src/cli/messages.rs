//! `canteen messages`: dump the message catalog for one locale.

use anyhow::{Context, Result};
use canteen_core::i18n::MESSAGE_KEYS;
use canteen_core::{translate, Locale};
use std::collections::BTreeMap;

/// Every catalog key with its text in `locale`, sorted by key.
pub fn catalog(locale: Locale) -> BTreeMap<&'static str, &'static str> {
    MESSAGE_KEYS
        .iter()
        .map(|&key| (key, translate(locale, key)))
        .collect()
}

pub fn run(locale: Locale, json: bool) -> Result<()> {
    let catalog = catalog(locale);
    if json {
        let text = serde_json::to_string_pretty(&catalog).context("Failed to encode messages")?;
        println!("{text}");
    } else {
        for (key, text) in catalog {
            println!("{key} = {text}");
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_covers_every_key() {
        let ar = catalog(Locale::Ar);
        assert_eq!(ar.len(), MESSAGE_KEYS.len());
        assert_eq!(ar.get("fillAllFields"), Some(&"يرجى ملء جميع الحقول"));
        assert!(ar.values().all(|text| !text.is_empty()));
    }
}
