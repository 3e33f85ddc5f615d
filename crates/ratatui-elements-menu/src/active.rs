use std::collections::HashMap;

use crate::registry::ItemRecord;

/// Picks the item the selection should land on after an external
/// default-active change or a registry mutation.
///
/// Priority: the candidate if it is registered, else the current selection
/// if it still is, else the configured default. `None` means no registered
/// item matched; whether that clears the selection is the controller's call
/// (it keeps the old selection when the menu just collapsed).
pub fn resolve<'a>(
    items: &'a HashMap<String, ItemRecord>,
    candidate: &str,
    current: Option<&str>,
    default_active: &str,
) -> Option<&'a ItemRecord> {
    items
        .get(candidate)
        .or_else(|| current.and_then(|c| items.get(c)))
        .or_else(|| items.get(default_active))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn items(indices: &[&str]) -> HashMap<String, ItemRecord> {
        indices
            .iter()
            .map(|i| {
                (
                    i.to_string(),
                    ItemRecord::new(*i, vec![i.to_string()]),
                )
            })
            .collect()
    }

    #[test]
    fn candidate_wins_when_registered() {
        let items = items(&["a", "b"]);
        let hit = resolve(&items, "a", Some("b"), "b").unwrap();
        assert_eq!(hit.index, "a");
    }

    #[test]
    fn falls_back_to_current_then_default() {
        let items = items(&["b", "c"]);
        assert_eq!(resolve(&items, "a", Some("b"), "c").unwrap().index, "b");
        assert_eq!(resolve(&items, "a", Some("x"), "c").unwrap().index, "c");
        assert_eq!(resolve(&items, "a", None, "c").unwrap().index, "c");
    }

    #[test]
    fn removing_an_inactive_item_keeps_the_current_selection() {
        let mut items = items(&["a", "b", "c"]);
        items.remove("a");
        assert_eq!(resolve(&items, "b", Some("b"), "b").unwrap().index, "b");
    }

    #[test]
    fn empty_registry_resolves_to_none() {
        let items = HashMap::new();
        assert!(resolve(&items, "a", Some("b"), "c").is_none());
    }
}
