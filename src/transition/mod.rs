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

//! Fade transitions for list entries.
//!
//! Starting a transition returns immediately with a [`TransitionHandle`].
//! Transitions advance with wall-clock time and are driven by the tick loop:
//! [`Transitions::poll`] hands back the [`Continuation`] of every transition
//! that has finished, and the owner performs the follow-up (settling an
//! entry, or detaching it from the list). A handle can be cancelled at any
//! point, in which case its continuation never runs.

mod list;

pub(crate) use list::{AnimatedList, Keyed, Phase};

use std::time::{Duration, Instant};

/// The fade used when entries appear and disappear.
pub(crate) const DEFAULT_TRANSITION: Duration = Duration::from_millis(150);

/// Identifies a running transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub(crate) struct TransitionHandle(u64);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Fade {
    In,
    Out,
}

/// Follow-up work to run once a transition completes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum Continuation<K> {
    /// The entry has finished appearing.
    Settle(K),
    /// The entry has finished disappearing and can be removed.
    Detach(K),
}

struct Running<K> {
    handle: TransitionHandle,
    fade: Fade,
    started: Instant,
    continuation: Continuation<K>,
}

pub(crate) struct Transitions<K> {
    duration: Duration,
    next_id: u64,
    running: Vec<Running<K>>,
}

impl<K> Transitions<K> {
    pub(crate) fn new(duration: Duration) -> Self {
        Self {
            duration,
            next_id: 0,
            running: vec![],
        }
    }

    pub(crate) fn start(&mut self, fade: Fade, now: Instant, continuation: Continuation<K>) -> TransitionHandle {
        let handle = TransitionHandle(self.next_id);
        self.next_id += 1;

        self.running.push(Running {
            handle,
            fade,
            started: now,
            continuation,
        });

        handle
    }

    /// Stops a transition without running its continuation. Returns `false`
    /// if the transition had already finished or been cancelled.
    pub(crate) fn cancel(&mut self, handle: TransitionHandle) -> bool {
        let before = self.running.len();
        self.running.retain(|r| r.handle != handle);
        self.running.len() != before
    }

    /// Current opacity of a running transition, or full opacity if it is no
    /// longer running.
    pub(crate) fn opacity(&self, handle: TransitionHandle, now: Instant) -> f32 {
        let Some(running) = self.running.iter().find(|r| r.handle == handle) else {
            return 1.0;
        };

        let eased = ease_out(self.progress(running.started, now));
        match running.fade {
            Fade::In => eased,
            Fade::Out => 1.0 - eased,
        }
    }

    /// Removes every transition that has completed by `now` and returns their
    /// continuations, oldest first.
    pub(crate) fn poll(&mut self, now: Instant) -> Vec<Continuation<K>> {
        let duration = self.duration;
        let (finished, running): (Vec<_>, Vec<_>) = std::mem::take(&mut self.running)
            .into_iter()
            .partition(|r| now.saturating_duration_since(r.started) >= duration);

        self.running = running;
        finished.into_iter().map(|r| r.continuation).collect()
    }

    pub(crate) fn is_idle(&self) -> bool {
        self.running.is_empty()
    }

    fn progress(&self, started: Instant, now: Instant) -> f32 {
        if self.duration.is_zero() {
            return 1.0;
        }
        let elapsed = now.saturating_duration_since(started);
        (elapsed.as_secs_f32() / self.duration.as_secs_f32()).clamp(0.0, 1.0)
    }
}

/// The CSS `ease-out` timing curve, `cubic-bezier(0, 0, 0.58, 1)`.
///
/// The curve is parametric, so the parameter matching `t` on the time axis is
/// found by bisection before evaluating the progress axis.
pub(crate) fn ease_out(t: f32) -> f32 {
    const X1: f32 = 0.0;
    const Y1: f32 = 0.0;
    const X2: f32 = 0.58;
    const Y2: f32 = 1.0;

    fn bezier(s: f32, p1: f32, p2: f32) -> f32 {
        let u = 1.0 - s;
        3.0 * u * u * s * p1 + 3.0 * u * s * s * p2 + s * s * s
    }

    let t = t.clamp(0.0, 1.0);
    let (mut lo, mut hi) = (0.0_f32, 1.0_f32);
    for _ in 0..24 {
        let mid = (lo + hi) / 2.0;
        if bezier(mid, X1, X2) < t {
            lo = mid;
        } else {
            hi = mid;
        }
    }

    bezier((lo + hi) / 2.0, Y1, Y2)
}
