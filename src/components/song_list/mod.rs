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

//! Song list section.
//!
//! The section owns the filter and sort state and is the only place they
//! change. Whenever either changes the visible songs are derived again from
//! the catalog and handed to an [`AnimatedList`], which fades cards in and out
//! as songs enter or leave the view. The section also hosts the category
//! filter and the sort menu, which notify it of changes through the event
//! channel.

mod event;
mod render;

use std::{
    path::PathBuf,
    sync::Arc,
    time::{Duration, Instant},
};

use ratatui::widgets::ListState;

use crate::{
    components::{SortMenu, TypeFilter},
    model::{
        Song,
        catalog::Catalog,
        view::{FilterState, SortCriterion, SortDirection, SortState, derive_view},
    },
    transition::{AnimatedList, Keyed, Phase},
};

impl Keyed for Arc<Song> {
    type Key = String;

    fn key(&self) -> Self::Key {
        self.hash.clone()
    }
}

pub(crate) struct SongListSection {
    catalog: Arc<Catalog>,
    filter: FilterState,
    sort: SortState,
    list: AnimatedList<Arc<Song>>,
    selected: Option<String>,
    list_state: ListState,
    covers_dir: PathBuf,

    pub(crate) type_filter: TypeFilter,
    pub(crate) sort_menu: SortMenu,
}

impl SongListSection {
    pub(crate) fn new(
        catalog: Arc<Catalog>,
        filter: FilterState,
        sort: SortState,
        covers_dir: PathBuf,
        transition: Duration,
    ) -> Self {
        let songs = derive_view(&catalog, &filter, &sort);
        let selected = songs.first().map(Keyed::key);

        Self {
            type_filter: TypeFilter::new(filter.clone()),
            sort_menu: SortMenu::new(sort.criterion, sort.direction),
            list: AnimatedList::new(songs, transition),
            catalog,
            filter,
            sort,
            selected,
            list_state: ListState::default(),
            covers_dir,
        }
    }

    pub(crate) fn sort(&self) -> &SortState {
        &self.sort
    }

    pub(crate) fn catalog_len(&self) -> usize {
        self.catalog.len()
    }

    pub(crate) fn set_filter(&mut self, filter: FilterState, now: Instant) {
        if self.filter != filter {
            self.filter = filter;
            self.refresh(now);
        }
    }

    pub(crate) fn set_sort_criterion(&mut self, criterion: Option<SortCriterion>, now: Instant) {
        if self.sort.criterion != criterion {
            self.sort.criterion = criterion;
            self.refresh(now);
        }
    }

    pub(crate) fn set_sort_direction(&mut self, direction: SortDirection, now: Instant) {
        if self.sort.direction != direction {
            self.sort.direction = direction;
            self.refresh(now);
        }
    }

    /// Advances the list transitions. Returns true if an entry settled or
    /// was detached.
    pub(crate) fn tick(&mut self, now: Instant) -> bool {
        self.list.tick(now)
    }

    pub(crate) fn is_animating(&self) -> bool {
        self.list.is_animating()
    }

    /// Songs in the current derived view, in display order. Entries still
    /// fading out are not included.
    pub(crate) fn visible_songs(&self) -> Vec<Arc<Song>> {
        self.list
            .entries()
            .iter()
            .filter(|e| e.phase() != Phase::Exiting)
            .map(|e| Arc::clone(e.item()))
            .collect()
    }

    pub(crate) fn selected_song(&self) -> Option<Arc<Song>> {
        let key = self.selected.as_ref()?;
        self.list
            .entries()
            .iter()
            .find(|e| e.key() == key && e.phase() != Phase::Exiting)
            .map(|e| Arc::clone(e.item()))
    }

    fn refresh(&mut self, now: Instant) {
        let songs = derive_view(&self.catalog, &self.filter, &self.sort);
        log::debug!(
            "View recomputed: {} of {} songs, sort {:?}",
            songs.len(),
            self.catalog.len(),
            self.sort
        );

        let result = self.list.reconcile(songs, now);
        if !result.is_empty() {
            log::debug!(
                "Reconciled list: {} entering, {} moved, {} exiting",
                result.entered.len(),
                result.moved.len(),
                result.exited.len()
            );
        }

        if self.selected_song().is_none() {
            self.selected = self.selectable_keys().first().cloned();
        }
    }

    fn selectable_keys(&self) -> Vec<String> {
        self.list
            .entries()
            .iter()
            .filter(|e| e.phase() != Phase::Exiting)
            .map(|e| e.key().clone())
            .collect()
    }

    fn selected_position(&self, keys: &[String]) -> Option<usize> {
        let selected = self.selected.as_ref()?;
        keys.iter().position(|k| k == selected)
    }

    pub(crate) fn select_next(&mut self) {
        let keys = self.selectable_keys();
        if keys.is_empty() {
            return;
        }
        let i = match self.selected_position(&keys) {
            Some(i) if i + 1 < keys.len() => i + 1,
            Some(_) => 0,
            None => 0,
        };
        self.selected = Some(keys[i].clone());
    }

    pub(crate) fn select_previous(&mut self) {
        let keys = self.selectable_keys();
        if keys.is_empty() {
            return;
        }
        let i = match self.selected_position(&keys) {
            Some(0) => keys.len() - 1,
            Some(i) => i - 1,
            None => 0,
        };
        self.selected = Some(keys[i].clone());
    }

    pub(crate) fn select_first(&mut self) {
        self.selected = self.selectable_keys().first().cloned();
    }

    pub(crate) fn select_last(&mut self) {
        self.selected = self.selectable_keys().last().cloned();
    }
}
