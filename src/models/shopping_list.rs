use indexmap::IndexMap;

use super::Ingredient;

/// Insertion-ordered ingredient collection with case-insensitive uniqueness.
///
/// Entries are keyed by their lower-cased name, so the list can never hold two
/// ingredients whose names differ only in case. The spelling of whichever
/// entry arrived first is the one that stays.
#[derive(Debug, Clone, Default)]
pub struct ShoppingList {
    items: IndexMap<String, Ingredient>,
}

impl ShoppingList {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append every incoming ingredient that is not already on the list.
    /// Duplicates inside the batch collapse to their first occurrence.
    /// Existing entries keep their position and spelling.
    ///
    /// Returns how many ingredients were actually appended.
    pub fn add_batch(&mut self, incoming: impl IntoIterator<Item = Ingredient>) -> usize {
        let mut added = 0;

        for ingredient in incoming {
            let key = ingredient.key();
            if !self.items.contains_key(&key) {
                self.items.insert(key, ingredient);
                added += 1;
            }
        }

        added
    }

    /// Drop every entry whose name equals `name` exactly (case-sensitive).
    /// Removing a name that is not present is a no-op.
    ///
    /// Returns whether anything was removed.
    pub fn remove(&mut self, name: &str) -> bool {
        let before = self.items.len();
        self.items.retain(|_, item| item.name != name);
        self.items.len() != before
    }

    pub fn clear(&mut self) {
        self.items.clear();
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Ingredient> {
        self.items.values()
    }

    pub fn get(&self, index: usize) -> Option<&Ingredient> {
        self.items.get_index(index).map(|(_, item)| item)
    }

    /// Plain-text rendering handed to the print spooler.
    pub fn to_text(&self) -> String {
        let mut output = String::from("What to buy:\n\n");

        for item in self.iter() {
            output.push_str(&format!("  - {}\n", item.name));
        }

        output
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::*;

    fn list_of(names: &[&str]) -> ShoppingList {
        let mut list = ShoppingList::new();
        list.add_batch(names.iter().copied().map(Ingredient::new));
        list
    }

    fn names(list: &ShoppingList) -> Vec<&str> {
        list.iter().map(|item| item.name.as_str()).collect()
    }

    #[rstest]
    #[case(&["Lime"], &["Lime", "lime", "Soda"], &["Lime", "Soda"])]
    #[case(&[], &["Gin", "gin", "GIN"], &["Gin"])]
    #[case(&["Salt", "Lime"], &["LIME", "salt"], &["Salt", "Lime"])]
    #[case(&["Salt"], &[], &["Salt"])]
    fn test_add_batch_dedupes_case_insensitively(
        #[case] existing: &[&str],
        #[case] incoming: &[&str],
        #[case] expected: &[&str],
    ) {
        let mut list = list_of(existing);
        list.add_batch(incoming.iter().copied().map(Ingredient::new));

        assert_eq!(names(&list), expected);
    }

    #[test]
    fn test_add_batch_never_reorders_existing_entries() {
        let mut list = list_of(&["Tequila", "Lime", "Salt"]);
        list.add_batch([Ingredient::new("lime"), Ingredient::new("Soda")]);

        assert_eq!(names(&list), vec!["Tequila", "Lime", "Salt", "Soda"]);
    }

    #[test]
    fn test_add_batch_reports_appended_count() {
        let mut list = list_of(&["Lime"]);

        assert_eq!(
            list.add_batch([Ingredient::new("lime"), Ingredient::new("Soda")]),
            1
        );
        assert_eq!(list.add_batch([Ingredient::new("SODA")]), 0);
    }

    #[test]
    fn test_no_case_insensitive_duplicates_ever() {
        let mut list = list_of(&["Lime", "Salt"]);
        list.add_batch(["LIME", "salt", "Lime", "Sugar", "sugar"].map(Ingredient::new));

        let mut keys: Vec<_> = list.iter().map(Ingredient::key).collect();
        keys.sort();
        keys.dedup();
        assert_eq!(keys.len(), list.len());
    }

    #[test]
    fn test_remove_is_case_sensitive() {
        let mut list = list_of(&["Lime", "Salt"]);

        assert!(!list.remove("lime"));
        assert_eq!(list.len(), 2);

        assert!(list.remove("Lime"));
        assert_eq!(names(&list), vec!["Salt"]);
    }

    #[test]
    fn test_remove_is_idempotent() {
        let mut list = list_of(&["Lime", "Salt"]);

        assert!(list.remove("Salt"));
        assert!(!list.remove("Salt"));
        assert_eq!(names(&list), vec!["Lime"]);
    }

    #[test]
    fn test_remove_preserves_remaining_order() {
        let mut list = list_of(&["Tequila", "Lime", "Salt"]);
        list.remove("Lime");

        assert_eq!(names(&list), vec!["Tequila", "Salt"]);
    }

    #[test]
    fn test_clear_empties_unconditionally() {
        let mut list = list_of(&["Lime", "Salt"]);
        list.clear();
        assert!(list.is_empty());

        let mut empty = ShoppingList::new();
        empty.clear();
        assert!(empty.is_empty());
    }

    #[test]
    fn test_get_by_index_follows_insertion_order() {
        let list = list_of(&["Tequila", "Lime"]);

        assert_eq!(list.get(0).map(|i| i.name.as_str()), Some("Tequila"));
        assert_eq!(list.get(1).map(|i| i.name.as_str()), Some("Lime"));
        assert_eq!(list.get(2), None);
    }

    #[test]
    fn test_to_text_lists_every_entry() {
        let list = list_of(&["Tequila", "Lime"]);
        let text = list.to_text();

        assert!(text.starts_with("What to buy:"));
        assert!(text.contains("  - Tequila\n"));
        assert!(text.contains("  - Lime\n"));
    }
}
