// Copyright (C) 2026  Caprica Software Limited
//
// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU General Public License as published by
// the Free Software Foundation, either version 3 of the License, or
// (at your option) any later version.
//
// This program is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
// GNU General Public License for more details.
//
// You should have received a copy of the GNU General Public License
// along with this program.  If not, see <https://www.gnu.org/licenses/>.

//! Filter and sort state, and the derived song view.
//!
//! The derived view is a pure function of the catalog, the filter state and
//! the sort state. It is recomputed whenever either state changes and is never
//! mutated on its own.

use std::{cmp::Ordering, collections::BTreeSet, fmt, str::FromStr, sync::Arc};

use feruca::Collator;

use crate::model::{Category, Song, catalog::Catalog};

/// The set of categories currently shown.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct FilterState {
    selected: BTreeSet<Category>,
}

impl Default for FilterState {
    fn default() -> Self {
        Self::from_categories([Category::Standalone, Category::Collab])
    }
}

impl FilterState {
    pub(crate) fn from_categories(categories: impl IntoIterator<Item = Category>) -> Self {
        Self {
            selected: categories.into_iter().collect(),
        }
    }

    /// Builds a filter from free-text labels, ignoring unknown ones.
    pub(crate) fn from_labels<S: AsRef<str>>(labels: &[S]) -> Self {
        Self::from_categories(labels.iter().filter_map(|l| Category::from_label(l.as_ref())))
    }

    /// Adds the category if absent, removes it otherwise.
    pub(crate) fn toggle(&mut self, category: Category) {
        if !self.selected.insert(category) {
            self.selected.remove(&category);
        }
    }

    pub(crate) fn is_empty(&self) -> bool {
        self.selected.is_empty()
    }

    pub(crate) fn contains(&self, category: Category) -> bool {
        self.selected.contains(&category)
    }

    pub(crate) fn matches(&self, song: &Song) -> bool {
        song.category().is_some_and(|c| self.contains(c))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum SortCriterion {
    Date,
    Length,
    Name,
}

impl SortCriterion {
    pub(crate) const ALL: [SortCriterion; 3] =
        [SortCriterion::Date, SortCriterion::Length, SortCriterion::Name];

    pub(crate) fn label(&self) -> &'static str {
        match self {
            SortCriterion::Date => "Release Date",
            SortCriterion::Length => "Length",
            SortCriterion::Name => "Name",
        }
    }
}

impl FromStr for SortCriterion {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "date" => Ok(SortCriterion::Date),
            "length" => Ok(SortCriterion::Length),
            "name" => Ok(SortCriterion::Name),
            other => Err(format!("unrecognized sort criterion {:?}", other)),
        }
    }
}

impl fmt::Display for SortCriterion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let key = match self {
            SortCriterion::Date => "date",
            SortCriterion::Length => "length",
            SortCriterion::Name => "name",
        };
        f.write_str(key)
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub(crate) enum SortDirection {
    #[default]
    Ascending,
    Descending,
}

impl SortDirection {
    pub(crate) fn toggled(self) -> Self {
        match self {
            SortDirection::Ascending => SortDirection::Descending,
            SortDirection::Descending => SortDirection::Ascending,
        }
    }
}

/// Sort criterion and direction. A `None` criterion leaves the catalog order
/// untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct SortState {
    pub(crate) criterion: Option<SortCriterion>,
    pub(crate) direction: SortDirection,
}

impl Default for SortState {
    fn default() -> Self {
        Self {
            criterion: Some(SortCriterion::Date),
            direction: SortDirection::Ascending,
        }
    }
}

impl SortState {
    /// Orders `songs` in place.
    ///
    /// Dates compare newest first before the direction is applied, so the
    /// ascending direction lists the most recent release at the top.
    /// Descending is the exact reverse of ascending, ties included.
    pub(crate) fn apply(&self, songs: &mut [Arc<Song>]) {
        let Some(criterion) = self.criterion else {
            return;
        };

        let mut collator = Collator::default();
        songs.sort_by(|a, b| compare(criterion, a, b, &mut collator));

        if self.direction == SortDirection::Descending {
            songs.reverse();
        }
    }
}

fn compare(criterion: SortCriterion, a: &Song, b: &Song, collator: &mut Collator) -> Ordering {
    match criterion {
        SortCriterion::Date => b.release_date.cmp(&a.release_date),
        SortCriterion::Length => a.length.total_cmp(&b.length),
        SortCriterion::Name => collator.collate(a.name.as_str(), b.name.as_str()),
    }
}

/// Filters and orders the catalog.
pub(crate) fn derive_view(catalog: &Catalog, filter: &FilterState, sort: &SortState) -> Vec<Arc<Song>> {
    let mut songs: Vec<Arc<Song>> = catalog
        .songs()
        .iter()
        .filter(|s| filter.matches(s))
        .cloned()
        .collect();

    sort.apply(&mut songs);
    songs
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;
    use crate::model::tests::song;

    fn scenario_catalog() -> Catalog {
        Catalog::from_songs(vec![
            song("A", (2020, 1, 1), 120.0, "standalone"),
            song("B", (2021, 1, 1), 90.0, "short"),
            song("C", (2019, 1, 1), 200.0, "collab"),
        ])
        .unwrap()
    }

    fn names(view: &[Arc<Song>]) -> Vec<&str> {
        view.iter().map(|s| s.name.as_str()).collect()
    }

    fn sort(criterion: SortCriterion, direction: SortDirection) -> SortState {
        SortState {
            criterion: Some(criterion),
            direction,
        }
    }

    #[test]
    fn test_defaults() {
        let filter = FilterState::default();
        assert!(filter.contains(Category::Standalone));
        assert!(filter.contains(Category::Collab));
        assert!(!filter.contains(Category::Short));

        let sort = SortState::default();
        assert_eq!(sort.criterion, Some(SortCriterion::Date));
        assert_eq!(sort.direction, SortDirection::Ascending);
    }

    #[test]
    fn test_default_view_is_newest_first_without_shorts() {
        let view = derive_view(&scenario_catalog(), &FilterState::default(), &SortState::default());
        assert_eq!(names(&view), vec!["A", "C"]);
    }

    #[test]
    fn test_length_ascending() {
        let view = derive_view(
            &scenario_catalog(),
            &FilterState::default(),
            &sort(SortCriterion::Length, SortDirection::Ascending),
        );
        assert_eq!(names(&view), vec!["A", "C"]);
    }

    #[test]
    fn test_toggling_direction_reverses_sequence() {
        let catalog = scenario_catalog();
        let filter = FilterState::from_categories(Category::ALL);

        for criterion in SortCriterion::ALL {
            let asc = derive_view(&catalog, &filter, &sort(criterion, SortDirection::Ascending));
            let mut desc = derive_view(&catalog, &filter, &sort(criterion, SortDirection::Descending));
            desc.reverse();
            assert_eq!(names(&asc), names(&desc), "criterion {}", criterion);
        }
    }

    #[test]
    fn test_date_descending_is_oldest_first() {
        let view = derive_view(
            &scenario_catalog(),
            &FilterState::from_categories(Category::ALL),
            &sort(SortCriterion::Date, SortDirection::Descending),
        );
        assert_eq!(names(&view), vec!["C", "A", "B"]);
    }

    #[test]
    fn test_filter_matches_category_case_insensitively() {
        let catalog = Catalog::from_songs(vec![
            song("A", (2020, 1, 1), 1.0, "Standalone"),
            song("B", (2020, 1, 1), 1.0, "SHORT"),
            song("C", (2020, 1, 1), 1.0, "collab"),
            song("D", (2020, 1, 1), 1.0, "remix"),
        ])
        .unwrap();

        let filter = FilterState::from_labels(&["short", "STANDALONE"]);
        let unsorted = SortState {
            criterion: None,
            direction: SortDirection::Ascending,
        };

        let view = derive_view(&catalog, &filter, &unsorted);
        assert_eq!(names(&view), vec!["A", "B"]);
    }

    #[test]
    fn test_empty_filter_yields_empty_view() {
        let filter = FilterState::from_categories([]);
        let view = derive_view(&scenario_catalog(), &filter, &SortState::default());
        assert!(view.is_empty());
    }

    #[test]
    fn test_unknown_criterion_keeps_catalog_order() {
        assert!("popularity".parse::<SortCriterion>().is_err());

        let unsorted = SortState {
            criterion: None,
            direction: SortDirection::Descending,
        };
        let view = derive_view(&scenario_catalog(), &FilterState::from_categories(Category::ALL), &unsorted);
        assert_eq!(names(&view), vec!["A", "B", "C"]);
    }

    #[test]
    fn test_name_sort_ignores_case_and_reverses_ties() {
        let mut a1 = song("apple", (2020, 1, 1), 1.0, "collab");
        let mut a2 = song("apple", (2021, 1, 1), 1.0, "collab");
        a1.hash = "first".to_string();
        a2.hash = "second".to_string();

        let catalog = Catalog::from_songs(vec![
            song("Banana", (2020, 1, 1), 1.0, "collab"),
            a1,
            song("cherry", (2020, 1, 1), 1.0, "collab"),
            a2,
        ])
        .unwrap();
        let filter = FilterState::default();

        let asc = derive_view(&catalog, &filter, &sort(SortCriterion::Name, SortDirection::Ascending));
        assert_eq!(names(&asc), vec!["apple", "apple", "Banana", "cherry"]);
        assert_eq!(asc[0].hash, "first");

        let desc = derive_view(&catalog, &filter, &sort(SortCriterion::Name, SortDirection::Descending));
        assert_eq!(names(&desc), vec!["cherry", "Banana", "apple", "apple"]);
        assert_eq!(desc[2].hash, "second");
        assert_eq!(desc[3].hash, "first");
    }

    #[test]
    fn test_length_descending_is_non_increasing() {
        let catalog = Catalog::from_songs(vec![
            song("A", (2020, 1, 1), 30.0, "collab"),
            song("B", (2020, 1, 1), 300.5, "collab"),
            song("C", (2020, 1, 1), 150.0, "standalone"),
            song("D", (2020, 1, 1), 30.0, "standalone"),
        ])
        .unwrap();

        let view = derive_view(
            &catalog,
            &FilterState::default(),
            &sort(SortCriterion::Length, SortDirection::Descending),
        );
        assert!(view.windows(2).all(|w| w[0].length >= w[1].length));
    }

    fn collate(a: &str, b: &str) -> Ordering {
        Collator::default().collate(a, b)
    }

    #[test]
    fn test_collate() {
        assert_eq!(collate("apple", "Banana"), Ordering::Less);
        assert_eq!(collate("Zebra", "apple"), Ordering::Greater);
        assert_eq!(collate("a", "A"), Ordering::Less);
        assert_eq!(collate("same", "same"), Ordering::Equal);
        assert_eq!(collate("ab", "abc"), Ordering::Less);
    }

    #[test]
    fn test_collate_accented_letters_sort_with_their_base_letter() {
        assert_eq!(collate("Éclair", "Zebra"), Ordering::Less);
        assert_eq!(collate("émoi", "fable"), Ordering::Less);
        assert_eq!(collate("Ångström", "Bravo"), Ordering::Less);
        assert_eq!(collate("resume", "résumé"), Ordering::Less);
    }

    #[test]
    fn test_name_sort_places_accented_names_alphabetically() {
        let catalog = Catalog::from_songs(vec![
            song("Zebra", (2020, 1, 1), 1.0, "collab"),
            song("Éclair", (2020, 1, 1), 1.0, "collab"),
            song("fable", (2020, 1, 1), 1.0, "collab"),
            song("émoi", (2020, 1, 1), 1.0, "collab"),
        ])
        .unwrap();

        let view = derive_view(
            &catalog,
            &FilterState::default(),
            &sort(SortCriterion::Name, SortDirection::Ascending),
        );
        assert_eq!(names(&view), vec!["Éclair", "émoi", "fable", "Zebra"]);
    }

    fn catalog_strategy() -> impl Strategy<Value = Catalog> {
        let song_type = prop_oneof![
            Just("standalone"),
            Just("Collab"),
            Just("SHORT"),
            Just("remix"),
        ];
        let entry = (
            "[a-zA-ZéÉèçÅø ]{0,8}",
            (2000i32..2030, 1u32..=12, 1u32..=28),
            0.0f64..10_000.0,
            song_type,
        );

        prop::collection::vec(entry, 0..24).prop_map(|entries| {
            let songs = entries
                .into_iter()
                .enumerate()
                .map(|(i, (name, date, length, song_type))| {
                    let mut s = song(&name, date, length, song_type);
                    s.hash = format!("song-{}", i);
                    s
                })
                .collect();
            Catalog::from_songs(songs).unwrap()
        })
    }

    fn filter_strategy() -> impl Strategy<Value = FilterState> {
        prop::collection::btree_set(prop::sample::select(Category::ALL.to_vec()), 0..=3)
            .prop_map(|selected| FilterState::from_categories(selected))
    }

    fn criterion_strategy() -> impl Strategy<Value = SortCriterion> {
        prop::sample::select(SortCriterion::ALL.to_vec())
    }

    fn hashes(view: &[Arc<Song>]) -> Vec<String> {
        view.iter().map(|s| s.hash.clone()).collect()
    }

    proptest! {
        #![proptest_config(ProptestConfig { cases: 64, .. ProptestConfig::default() })]

        #[test]
        fn view_holds_exactly_the_songs_of_selected_categories(
            catalog in catalog_strategy(),
            filter in filter_strategy(),
        ) {
            let unsorted = SortState { criterion: None, direction: SortDirection::Ascending };
            let view = derive_view(&catalog, &filter, &unsorted);

            let expected: Vec<String> = catalog
                .songs()
                .iter()
                .filter(|s| s.category().is_some_and(|c| filter.contains(c)))
                .map(|s| s.hash.clone())
                .collect();
            prop_assert_eq!(hashes(&view), expected);
        }

        #[test]
        fn sorting_keeps_the_same_songs(
            catalog in catalog_strategy(),
            filter in filter_strategy(),
            criterion in criterion_strategy(),
        ) {
            let unsorted = SortState { criterion: None, direction: SortDirection::Ascending };
            let mut expected = hashes(&derive_view(&catalog, &filter, &unsorted));
            let mut sorted = hashes(&derive_view(&catalog, &filter, &sort(criterion, SortDirection::Descending)));

            expected.sort();
            sorted.sort();
            prop_assert_eq!(sorted, expected);
        }

        #[test]
        fn ascending_view_is_non_decreasing(
            catalog in catalog_strategy(),
            criterion in criterion_strategy(),
        ) {
            let filter = FilterState::from_categories(Category::ALL);
            let view = derive_view(&catalog, &filter, &sort(criterion, SortDirection::Ascending));

            let mut collator = Collator::default();
            for pair in view.windows(2) {
                prop_assert_ne!(compare(criterion, &pair[0], &pair[1], &mut collator), Ordering::Greater);
            }
        }

        #[test]
        fn descending_view_is_exact_reverse_of_ascending(
            catalog in catalog_strategy(),
            filter in filter_strategy(),
            criterion in criterion_strategy(),
        ) {
            let asc = hashes(&derive_view(&catalog, &filter, &sort(criterion, SortDirection::Ascending)));
            let mut desc = hashes(&derive_view(&catalog, &filter, &sort(criterion, SortDirection::Descending)));

            desc.reverse();
            prop_assert_eq!(asc, desc);
        }

        #[test]
        fn length_descending_is_non_increasing(catalog in catalog_strategy()) {
            let filter = FilterState::from_categories(Category::ALL);
            let view = derive_view(&catalog, &filter, &sort(SortCriterion::Length, SortDirection::Descending));

            prop_assert!(view.windows(2).all(|w| w[0].length >= w[1].length));
        }
    }
}
