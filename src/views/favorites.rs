use std::collections::HashSet;

/// Outcome of toggling a favorite
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FavoriteChange {
    Added,
    Removed,
}

impl FavoriteChange {
    pub fn notice(&self) -> &'static str {
        match self {
            FavoriteChange::Added => "Added to favorites",
            FavoriteChange::Removed => "Removed from favorites",
        }
    }
}

/// Event ids the user has marked as favorite
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FavoriteSet {
    ids: HashSet<String>,
}

impl FavoriteSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contains(&self, event_id: &str) -> bool {
        self.ids.contains(event_id)
    }

    pub fn toggle(&mut self, event_id: &str) -> FavoriteChange {
        if self.ids.remove(event_id) {
            FavoriteChange::Removed
        } else {
            self.ids.insert(event_id.to_string());
            FavoriteChange::Added
        }
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }
}

impl<S: Into<String>> FromIterator<S> for FavoriteSet {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self {
            ids: iter.into_iter().map(Into::into).collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toggle_adds_then_removes() {
        let mut favorites = FavoriteSet::new();

        assert_eq!(favorites.toggle("3"), FavoriteChange::Added);
        assert!(favorites.contains("3"));
        assert_eq!(favorites.toggle("3"), FavoriteChange::Removed);
        assert!(favorites.is_empty());
    }

    #[test]
    fn test_notices() {
        assert_eq!(FavoriteChange::Added.notice(), "Added to favorites");
        assert_eq!(FavoriteChange::Removed.notice(), "Removed from favorites");
    }

    #[test]
    fn test_collect_dedupes() {
        let favorites: FavoriteSet = ["1", "2", "1"].into_iter().collect();
        assert_eq!(favorites.len(), 2);
    }
}
