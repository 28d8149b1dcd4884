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

//! Asynchronous application task processing.
//!
//! This module implements the command pattern used to offload tasks such as
//! potentially slow media probing from the main UI thread. It provides a
//! dedicated worker loop that translates [`AppTask`] requests into probe
//! operations and sends the results back to the application via
//! [`AppEvent`]s.
//!
//! Only actions that may block, or may take more than a trivial amount of time
//! to process, should be implemented as tasks. Other actions are likely more
//! suited to events.
//!
//! Every probe is identified by a [`ProbeTicket`]. The main thread keeps the
//! tickets it is still waiting for in [`PendingProbes`]; a result arriving for
//! a ticket that has since been cancelled is simply dropped.

mod handlers;
pub(crate) mod probe;

use std::{
    collections::BTreeMap,
    path::{Path, PathBuf},
    sync::mpsc::{Receiver, Sender},
    thread,
    time::Duration,
};

use crate::{config::AppConfig, events::AppEvent};

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub(crate) struct ProbeTicket(pub(crate) u64);

#[derive(Debug)]
pub(crate) enum AppTask {
    Probe { ticket: ProbeTicket, path: PathBuf },
}

/// Spawns a background thread to process application tasks.
///
/// # Arguments
///
/// * `config` - The application configuration.
/// * `task_rx` - The receiving end of the task channel.
/// * `event_tx` - The sending end of the channel for sending results.
pub(crate) fn spawn_task_worker(
    config: &AppConfig,
    task_rx: Receiver<AppTask>,
    event_tx: Sender<AppEvent>,
) {
    let probe_timeout = Duration::from_secs(config.probe_timeout_secs);

    thread::spawn(move || {
        while let Ok(task) = task_rx.recv() {
            let ctx = TaskContext {
                event_tx: &event_tx,
                probe_timeout,
            };

            if let Err(e) = handle_task(task, &ctx) {
                let _ = event_tx.send(AppEvent::Error(e.to_string()));
            }
        }
    });
}

/// Bundles shared resources required by task handlers to simplify resource
/// passing when invoking those handler functions.
struct TaskContext<'a> {
    event_tx: &'a Sender<AppEvent>,
    probe_timeout: Duration,
}

/// Orchestrates the execution of a single task.
fn handle_task(task: AppTask, ctx: &TaskContext) -> anyhow::Result<()> {
    match task {
        AppTask::Probe { ticket, path } => handlers::probe_media(ctx, ticket, path),
    }
}

/// Probes that have been requested but whose results have not yet been
/// accepted, in request order.
#[derive(Debug, Default)]
pub(crate) struct PendingProbes {
    next_ticket: u64,
    pending: BTreeMap<ProbeTicket, PathBuf>,
}

impl PendingProbes {
    /// Registers a new probe for `path` and returns its ticket.
    pub(crate) fn begin(&mut self, path: &Path) -> ProbeTicket {
        let ticket = ProbeTicket(self.next_ticket);
        self.next_ticket += 1;
        self.pending.insert(ticket, path.to_path_buf());
        ticket
    }

    /// Forgets every outstanding probe of a file, matched by file name or by
    /// full path, so that its results will be discarded. Returns how many
    /// probes were cancelled.
    pub(crate) fn cancel_named(&mut self, name: &str) -> usize {
        let before = self.pending.len();
        self.pending.retain(|_, path| {
            let file_name_matches = path.file_name().is_some_and(|f| f == name);
            !(file_name_matches || path.as_os_str() == name)
        });
        before - self.pending.len()
    }

    /// Forgets every outstanding probe, returning how many were cancelled.
    pub(crate) fn cancel_all(&mut self) -> usize {
        let count = self.pending.len();
        self.pending.clear();
        count
    }

    /// Accepts the result for `ticket`, returning the probed path, or `None`
    /// when the probe was cancelled (or never requested).
    pub(crate) fn complete(&mut self, ticket: ProbeTicket) -> Option<PathBuf> {
        self.pending.remove(&ticket)
    }

    pub(crate) fn paths(&self) -> impl Iterator<Item = &Path> {
        self.pending.values().map(PathBuf::as_path)
    }

    pub(crate) fn len(&self) -> usize {
        self.pending.len()
    }

    pub(crate) fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tickets_are_unique_and_ordered() {
        let mut probes = PendingProbes::default();
        let first = probes.begin(Path::new("a.mp4"));
        let second = probes.begin(Path::new("b.mp4"));

        assert_ne!(first, second);
        assert!(first < second);
        assert_eq!(
            probes.paths().collect::<Vec<_>>(),
            vec![Path::new("a.mp4"), Path::new("b.mp4")]
        );
    }

    #[test]
    fn completed_ticket_returns_its_path_once() {
        let mut probes = PendingProbes::default();
        let ticket = probes.begin(Path::new("a.mp4"));

        assert_eq!(probes.complete(ticket), Some(PathBuf::from("a.mp4")));
        assert_eq!(probes.complete(ticket), None);
        assert!(probes.is_empty());
    }

    #[test]
    fn cancelled_probe_results_are_dropped() {
        let mut probes = PendingProbes::default();
        let cancelled = probes.begin(Path::new("/videos/a.mp4"));
        let kept = probes.begin(Path::new("/videos/b.mp4"));

        assert_eq!(probes.cancel_named("a.mp4"), 1);
        assert_eq!(probes.cancel_named("a.mp4"), 0);

        assert_eq!(probes.complete(cancelled), None);
        assert_eq!(probes.complete(kept), Some(PathBuf::from("/videos/b.mp4")));
    }

    #[test]
    fn cancel_named_matches_full_paths() {
        let mut probes = PendingProbes::default();
        probes.begin(Path::new("/videos/a.mp4"));
        probes.begin(Path::new("/other/a.mp4"));

        assert_eq!(probes.cancel_named("/other/a.mp4"), 1);
        assert_eq!(probes.len(), 1);
    }

    #[test]
    fn cancel_all_drops_everything_but_keeps_ticket_sequence() {
        let mut probes = PendingProbes::default();
        let first = probes.begin(Path::new("a.mp4"));
        probes.begin(Path::new("b.mp4"));

        assert_eq!(probes.cancel_all(), 2);
        assert_eq!(probes.len(), 0);
        assert_eq!(probes.complete(first), None);

        let next = probes.begin(Path::new("c.mp4"));
        assert!(next > first);
    }
}
