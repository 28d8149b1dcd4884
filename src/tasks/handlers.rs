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

use anyhow::Result;
use std::path::PathBuf;
use tracing::debug;

use crate::{
    events::AppEvent,
    tasks::{ProbeTicket, TaskContext, probe},
};

pub(super) fn probe_media(ctx: &TaskContext, ticket: ProbeTicket, path: PathBuf) -> Result<()> {
    debug!(?ticket, path = %path.display(), "probing");
    let result = probe::probe_file(&path, ctx.probe_timeout);
    ctx.event_tx.send(AppEvent::ProbeFinished { ticket, result })?;

    Ok(())
}
