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

//! Keyed list reconciliation.
//!
//! [`AnimatedList`] keeps the entries currently on screen. Reconciling it
//! against a new ordered sequence keeps entries whose key is still present,
//! fades in new keys and fades out removed keys. A removed entry stays in the
//! list at its previous position, after the nearest surviving entry that
//! preceded it, until its fade-out completes.

use std::{
    collections::{HashMap, HashSet},
    hash::Hash,
    time::{Duration, Instant},
};

use crate::transition::{Continuation, Fade, TransitionHandle, Transitions};

/// Items with a stable identity across list updates.
pub(crate) trait Keyed {
    type Key: Clone + Eq + Hash;

    fn key(&self) -> Self::Key;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Phase {
    Entering,
    Steady,
    Exiting,
}

pub(crate) struct Entry<T: Keyed> {
    key: T::Key,
    item: T,
    phase: Phase,
    handle: Option<TransitionHandle>,
}

impl<T: Keyed> Entry<T> {
    pub(crate) fn item(&self) -> &T {
        &self.item
    }

    pub(crate) fn key(&self) -> &T::Key {
        &self.key
    }

    pub(crate) fn phase(&self) -> Phase {
        self.phase
    }
}

/// What a call to [`AnimatedList::reconcile`] changed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Reconciliation<K> {
    pub(crate) entered: Vec<K>,
    pub(crate) moved: Vec<K>,
    pub(crate) exited: Vec<K>,
}

impl<K> Reconciliation<K> {
    pub(crate) fn is_empty(&self) -> bool {
        self.entered.is_empty() && self.moved.is_empty() && self.exited.is_empty()
    }
}

pub(crate) struct AnimatedList<T: Keyed> {
    entries: Vec<Entry<T>>,
    transitions: Transitions<T::Key>,
}

impl<T: Keyed> AnimatedList<T> {
    /// Creates a list already showing `items`. The initial items do not fade
    /// in.
    pub(crate) fn new(items: Vec<T>, duration: Duration) -> Self {
        let entries = items
            .into_iter()
            .map(|item| Entry {
                key: item.key(),
                item,
                phase: Phase::Steady,
                handle: None,
            })
            .collect();

        Self {
            entries,
            transitions: Transitions::new(duration),
        }
    }

    pub(crate) fn entries(&self) -> &[Entry<T>] {
        &self.entries
    }

    pub(crate) fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// True while any entry is still fading.
    pub(crate) fn is_animating(&self) -> bool {
        !self.transitions.is_idle()
    }

    /// Opacity of an entry at `now`, from 0.0 (invisible) to 1.0.
    pub(crate) fn opacity(&self, entry: &Entry<T>, now: Instant) -> f32 {
        match (entry.phase, entry.handle) {
            (Phase::Steady, _) | (_, None) => 1.0,
            (_, Some(handle)) => self.transitions.opacity(handle, now),
        }
    }

    /// Replaces the list contents with `next`, starting transitions for keys
    /// that appear or disappear.
    pub(crate) fn reconcile(&mut self, next: Vec<T>, now: Instant) -> Reconciliation<T::Key> {
        let next_keys: HashSet<T::Key> = next.iter().map(Keyed::key).collect();

        let mut entered = vec![];
        let mut exited = vec![];

        // Split the current entries into survivors and departures, recording
        // for each departure the surviving key it follows
        let mut survivors: HashMap<T::Key, Entry<T>> = HashMap::new();
        let mut kept_before: Vec<T::Key> = vec![];
        let mut departures: HashMap<Option<T::Key>, Vec<Entry<T>>> = HashMap::new();
        let mut anchor: Option<T::Key> = None;

        for mut entry in std::mem::take(&mut self.entries) {
            if next_keys.contains(&entry.key) {
                anchor = Some(entry.key.clone());
                if entry.phase != Phase::Exiting {
                    kept_before.push(entry.key.clone());
                }
                survivors.insert(entry.key.clone(), entry);
            } else {
                if entry.phase != Phase::Exiting {
                    self.begin(&mut entry, Fade::Out, now);
                    exited.push(entry.key.clone());
                }
                departures.entry(anchor.clone()).or_default().push(entry);
            }
        }

        let mut kept_after: Vec<T::Key> = vec![];
        let mut entries = departures.remove(&None).unwrap_or_default();

        for item in next {
            let key = item.key();

            let entry = match survivors.remove(&key) {
                Some(mut entry) => {
                    entry.item = item;
                    if entry.phase == Phase::Exiting {
                        self.begin(&mut entry, Fade::In, now);
                        entered.push(key.clone());
                    } else {
                        kept_after.push(key.clone());
                    }
                    entry
                }
                None => {
                    let mut entry = Entry {
                        key: key.clone(),
                        item,
                        phase: Phase::Steady,
                        handle: None,
                    };
                    self.begin(&mut entry, Fade::In, now);
                    entered.push(key.clone());
                    entry
                }
            };

            entries.push(entry);
            if let Some(trailing) = departures.remove(&Some(key)) {
                entries.extend(trailing);
            }
        }

        self.entries = entries;

        let moved = kept_after
            .iter()
            .enumerate()
            .filter(|(i, key)| kept_before.get(*i) != Some(*key))
            .map(|(_, key)| key.clone())
            .collect();

        Reconciliation { entered, moved, exited }
    }

    /// Runs the continuations of every transition finished by `now`. Returns
    /// true if any entry changed phase or was removed.
    pub(crate) fn tick(&mut self, now: Instant) -> bool {
        let finished = self.transitions.poll(now);
        let changed = !finished.is_empty();

        for continuation in finished {
            match continuation {
                Continuation::Settle(key) => {
                    if let Some(entry) = self
                        .entries
                        .iter_mut()
                        .find(|e| e.key == key && e.phase == Phase::Entering)
                    {
                        entry.phase = Phase::Steady;
                        entry.handle = None;
                    }
                }
                Continuation::Detach(key) => {
                    self.entries
                        .retain(|e| !(e.key == key && e.phase == Phase::Exiting));
                }
            }
        }

        changed
    }

    // Replaces any in-flight transition on the entry with a new fade.
    fn begin(&mut self, entry: &mut Entry<T>, fade: Fade, now: Instant) {
        if let Some(handle) = entry.handle.take() {
            self.transitions.cancel(handle);
        }

        let (phase, continuation) = match fade {
            Fade::In => (Phase::Entering, Continuation::Settle(entry.key.clone())),
            Fade::Out => (Phase::Exiting, Continuation::Detach(entry.key.clone())),
        };

        entry.phase = phase;
        entry.handle = Some(self.transitions.start(fade, now, continuation));
    }
}
