use std::collections::BTreeSet;

/// A set of selected facet values.
///
/// An empty selection means "no filter on this facet", not "exclude everything".
#[derive(Debug, Clone, PartialEq, Eq)]
#[derive(serde::Serialize, serde::Deserialize)]
pub struct Selection<T: Ord> {
    values: BTreeSet<T>,
}

impl<T: Ord> Default for Selection<T> {
    fn default() -> Self {
        Self {
            values: BTreeSet::new(),
        }
    }
}

impl<T: Ord> Selection<T> {
    /// Remove the value if present, otherwise add it.
    ///
    /// Returns true if the value is selected afterwards.
    pub fn toggle(&mut self, value: T) -> bool {
        if self.values.remove(&value) {
            false
        } else {
            self.values.insert(value);
            true
        }
    }

    /// Consuming variant of [`Selection::toggle`].
    pub fn toggled(mut self, value: T) -> Self {
        self.toggle(value);
        self
    }

    pub fn contains(&self, value: &T) -> bool {
        self.values.contains(value)
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn clear(&mut self) {
        self.values.clear();
    }

    pub fn iter(&self) -> impl Iterator<Item = &T> {
        self.values.iter()
    }
}

impl<T: Ord> FromIterator<T> for Selection<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self {
            values: iter.into_iter().collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    #[test]
    fn toggle_adds_then_removes() {
        // given
        let mut selection = Selection::<String>::default();

        // when
        let added = selection.toggle("ST".to_string());

        // then
        assert!(added);
        assert!(selection.contains(&"ST".to_string()));

        // when
        let added = selection.toggle("ST".to_string());

        // then
        assert!(!added);
        assert!(selection.is_empty());
    }

    #[rstest]
    #[case(vec![], "ST")]
    #[case(vec!["ST"], "ST")]
    #[case(vec!["Microchip", "TI"], "ST")]
    #[case(vec!["Microchip", "ST", "TI"], "TI")]
    fn double_toggle_restores_selection(#[case] initial: Vec<&str>, #[case] value: &str) {
        // given
        let selection: Selection<String> = initial.into_iter().map(str::to_string).collect();

        // when
        let result = selection
            .clone()
            .toggled(value.to_string())
            .toggled(value.to_string());

        // then
        assert_eq!(result, selection);
    }

    #[test]
    fn order_of_toggles_is_irrelevant() {
        let first = Selection::default()
            .toggled("a")
            .toggled("b");
        let second = Selection::default()
            .toggled("b")
            .toggled("a");

        assert_eq!(first, second);
    }
}
