//! Clue catalog
//!
//! Binary search tree of every clue discovered so far, kept in byte-wise
//! lexicographic order. Inserting a clue that is already there does nothing.

use std::cmp::Ordering;

#[derive(Debug)]
struct ClueNode {
    clue: String,
    left: Option<Box<ClueNode>>,
    right: Option<Box<ClueNode>>,
}

impl ClueNode {
    fn new(clue: &str) -> Self {
        Self {
            clue: clue.to_string(),
            left: None,
            right: None,
        }
    }
}

/// Sorted, duplicate-free set of clues
#[derive(Debug, Default)]
pub struct ClueCatalog {
    root: Option<Box<ClueNode>>,
    len: usize,
}

impl ClueCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a clue. Returns `false` if it was already catalogued.
    pub fn insert(&mut self, clue: &str) -> bool {
        let mut slot = &mut self.root;
        while let Some(node) = slot {
            slot = match clue.cmp(node.clue.as_str()) {
                Ordering::Less => &mut node.left,
                Ordering::Greater => &mut node.right,
                Ordering::Equal => return false,
            };
        }
        *slot = Some(Box::new(ClueNode::new(clue)));
        self.len += 1;
        true
    }

    /// Find a clue by exact text
    pub fn lookup(&self, clue: &str) -> Option<&str> {
        let mut current = self.root.as_deref();
        while let Some(node) = current {
            current = match clue.cmp(node.clue.as_str()) {
                Ordering::Less => node.left.as_deref(),
                Ordering::Greater => node.right.as_deref(),
                Ordering::Equal => return Some(&node.clue),
            };
        }
        None
    }

    pub fn contains(&self, clue: &str) -> bool {
        self.lookup(clue).is_some()
    }

    /// Walk the clues in ascending order
    pub fn inorder(&self) -> InOrder<'_> {
        InOrder::new(self.root.as_deref())
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }
}

impl Drop for ClueCatalog {
    fn drop(&mut self) {
        // Unlink nodes one at a time so a lopsided tree can't blow the stack.
        let mut pending: Vec<Box<ClueNode>> = self.root.take().into_iter().collect();
        while let Some(mut node) = pending.pop() {
            pending.extend(node.left.take());
            pending.extend(node.right.take());
        }
    }
}

/// Lazy in-order traversal of a [`ClueCatalog`]
pub struct InOrder<'a> {
    stack: Vec<&'a ClueNode>,
}

impl<'a> InOrder<'a> {
    fn new(root: Option<&'a ClueNode>) -> Self {
        let mut iter = Self { stack: Vec::new() };
        iter.push_left_spine(root);
        iter
    }

    fn push_left_spine(&mut self, mut node: Option<&'a ClueNode>) {
        while let Some(n) = node {
            self.stack.push(n);
            node = n.left.as_deref();
        }
    }
}

impl<'a> Iterator for InOrder<'a> {
    type Item = &'a str;

    fn next(&mut self) -> Option<&'a str> {
        let node = self.stack.pop()?;
        self.push_left_spine(node.right.as_deref());
        Some(&node.clue)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn catalog_of(clues: &[&str]) -> ClueCatalog {
        let mut catalog = ClueCatalog::new();
        for clue in clues {
            catalog.insert(clue);
        }
        catalog
    }

    #[test]
    fn test_inorder_is_sorted() {
        let catalog = catalog_of(&[
            "Taça de vinho quebrada",
            "Carta anônima",
            "Pegadas na lama",
            "Faca com resíduos",
            "Veneno para ratos",
            "Livro com páginas rasgadas",
        ]);
        let clues: Vec<&str> = catalog.inorder().collect();
        assert_eq!(
            clues,
            vec![
                "Carta anônima",
                "Faca com resíduos",
                "Livro com páginas rasgadas",
                "Pegadas na lama",
                "Taça de vinho quebrada",
                "Veneno para ratos",
            ]
        );
    }

    #[test]
    fn test_strictly_ascending_for_any_insertion_order() {
        let words = ["m", "c", "x", "a", "e", "z", "b", "y", "n", "mm", "M", "ç"];
        // Rotate the insertion order through every starting point
        for shift in 0..words.len() {
            let mut catalog = ClueCatalog::new();
            for i in 0..words.len() {
                catalog.insert(words[(i + shift) % words.len()]);
            }
            let clues: Vec<&str> = catalog.inorder().collect();
            assert_eq!(clues.len(), words.len());
            assert!(clues.windows(2).all(|w| w[0] < w[1]), "not ascending: {:?}", clues);
        }
    }

    #[test]
    fn test_duplicate_insert_is_noop() {
        let mut catalog = catalog_of(&["Carta anônima", "Pegadas na lama"]);
        let before: Vec<String> = catalog.inorder().map(String::from).collect();

        assert!(!catalog.insert("Carta anônima"));
        assert_eq!(catalog.len(), 2);

        let after: Vec<String> = catalog.inorder().map(String::from).collect();
        assert_eq!(before, after);
    }

    #[test]
    fn test_byte_order_not_case_folded() {
        let catalog = catalog_of(&["carta", "Carta", "Zebra"]);
        let clues: Vec<&str> = catalog.inorder().collect();
        assert_eq!(clues, vec!["Carta", "Zebra", "carta"]);
    }

    #[test]
    fn test_lookup() {
        let catalog = catalog_of(&["Faca com resíduos", "Carta anônima", "Veneno para ratos"]);
        assert_eq!(catalog.lookup("Carta anônima"), Some("Carta anônima"));
        assert!(catalog.contains("Veneno para ratos"));
        assert!(!catalog.contains("Carta"));
        assert!(!catalog.contains("carta anônima"));
    }

    #[test]
    fn test_empty_catalog() {
        let catalog = ClueCatalog::new();
        assert!(catalog.is_empty());
        assert_eq!(catalog.inorder().next(), None);
        assert_eq!(catalog.lookup(""), None);
    }

    #[test]
    fn test_empty_string_is_a_valid_key() {
        let mut catalog = catalog_of(&["b"]);
        assert!(catalog.insert(""));
        assert!(!catalog.insert(""));
        assert!(catalog.contains(""));
        assert_eq!(catalog.inorder().collect::<Vec<_>>(), vec!["", "b"]);
    }

    #[test]
    fn test_inorder_is_restartable() {
        let catalog = catalog_of(&["c", "a", "b"]);
        let first: Vec<&str> = catalog.inorder().collect();
        let second: Vec<&str> = catalog.inorder().collect();
        assert_eq!(first, second);
    }

    #[test]
    fn test_degenerate_tree_drops() {
        let mut catalog = ClueCatalog::new();
        for i in 0..5_000 {
            catalog.insert(&format!("{:08}", i));
        }
        assert_eq!(catalog.len(), 5_000);
        assert!(catalog.contains("00004999"));
        drop(catalog);
    }
}

#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;
    use std::collections::BTreeSet;

    // Small alphabet with a couple of multibyte letters, so repeats and
    // shared prefixes are common
    fn arb_clue() -> impl Strategy<Value = String> {
        "[abcAé ]{0,6}"
    }

    proptest! {
        #[test]
        fn inorder_matches_sorted_set(clues in prop::collection::vec(arb_clue(), 0..60)) {
            let mut catalog = ClueCatalog::new();
            let mut expected = BTreeSet::new();
            for clue in &clues {
                prop_assert_eq!(catalog.insert(clue), expected.insert(clue.as_str()));
            }

            let walked: Vec<&str> = catalog.inorder().collect();
            prop_assert!(walked.windows(2).all(|w| w[0] < w[1]));
            prop_assert_eq!(walked, expected.into_iter().collect::<Vec<_>>());
            prop_assert_eq!(catalog.len(), catalog.inorder().count());
        }

        #[test]
        fn reinserting_a_known_clue_changes_nothing(
            clues in prop::collection::vec(arb_clue(), 1..60),
            pick in any::<prop::sample::Index>(),
        ) {
            let mut catalog = ClueCatalog::new();
            for clue in &clues {
                catalog.insert(clue);
            }
            let before: Vec<String> = catalog.inorder().map(String::from).collect();

            prop_assert!(!catalog.insert(pick.get::<String>(&clues)));
            let after: Vec<String> = catalog.inorder().map(String::from).collect();
            prop_assert_eq!(before, after);
            prop_assert!(catalog.contains(pick.get::<String>(&clues)));
        }
    }
}
