use crate::catalog::ProductId;
use std::collections::HashSet;

/// Client-side favorite marks. Not persisted.
#[derive(Debug, Clone, Default)]
pub struct Favorites {
    ids: HashSet<ProductId>,
}

impl Favorites {
    pub fn new() -> Self {
        Self::default()
    }

    /// Flip membership of `id`; returns whether it is now a favorite.
    pub fn toggle(&mut self, id: &ProductId) -> bool {
        if self.ids.remove(id) {
            false
        } else {
            self.ids.insert(id.clone());
            true
        }
    }

    pub fn contains(&self, id: &ProductId) -> bool {
        self.ids.contains(id)
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &ProductId> {
        self.ids.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_double_toggle_restores_membership() {
        let mut favorites = Favorites::new();
        let id = ProductId::new("7");

        assert!(favorites.toggle(&id));
        assert!(favorites.contains(&id));
        assert!(!favorites.toggle(&id));
        assert!(!favorites.contains(&id));
        assert!(favorites.is_empty());

        let other = ProductId::new("8");
        favorites.toggle(&other);
        favorites.toggle(&id);
        favorites.toggle(&id);
        assert_eq!(favorites.len(), 1);
        assert!(favorites.contains(&other));
    }
}
