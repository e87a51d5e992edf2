use std::sync::Arc;
use tracing::{debug, warn};

use sifir_core::Clock;
use sifir_core::model::{EntryId, GameMode, HallOfFameEntry};
use storage::repository::HallOfFameRepository;

use crate::error::HallOfFameError;
use crate::session::SessionResult;

/// Rank entries for display: filter by exact mode, best score ratio
/// first, more recent date breaking ties, at most `n` results.
///
/// Pure over its input so ranking is testable without any storage. The
/// stored sequence is never reordered; every call computes fresh.
#[must_use]
pub fn rank(entries: &[HallOfFameEntry], mode: GameMode, n: usize) -> Vec<HallOfFameEntry> {
    let mut ranked: Vec<HallOfFameEntry> = entries
        .iter()
        .filter(|e| e.mode() == mode)
        .cloned()
        .collect();
    ranked.sort_by(|a, b| {
        b.ratio()
            .total_cmp(&a.ratio())
            .then_with(|| b.date().cmp(&a.date()))
    });
    ranked.truncate(n);
    ranked
}

/// Process-wide hall-of-fame store.
///
/// Owns the in-memory entry sequence and a persistence adapter. Loads
/// once at startup and rewrites the whole sequence after every append;
/// both directions degrade gracefully when storage misbehaves.
pub struct HallOfFameService {
    entries: Vec<HallOfFameEntry>,
    repo: Arc<dyn HallOfFameRepository>,
    clock: Clock,
}

impl HallOfFameService {
    /// Open the hall of fame, loading persisted entries.
    ///
    /// A failed or corrupt load is not fatal: the condition is logged and
    /// the hall of fame starts empty.
    #[must_use]
    pub fn open(repo: Arc<dyn HallOfFameRepository>, clock: Clock) -> Self {
        let entries = match repo.load() {
            Ok(entries) => entries,
            Err(err) => {
                warn!(%err, "hall of fame load failed, starting empty");
                Vec::new()
            }
        };

        Self {
            entries,
            repo,
            clock,
        }
    }

    /// Entries in stored (append) order.
    #[must_use]
    pub fn entries(&self) -> &[HallOfFameEntry] {
        &self.entries
    }

    /// Top `n` entries for the given mode. See [`rank`].
    #[must_use]
    pub fn top_n(&self, mode: GameMode, n: usize) -> Vec<HallOfFameEntry> {
        rank(&self.entries, mode, n)
    }

    /// Append a finished session's result under the given player name.
    ///
    /// The entry is stamped with a fresh id and today's date, kept in
    /// memory, and the full sequence is rewritten to storage best-effort:
    /// a failed save is logged but the appended entry stays visible.
    ///
    /// # Errors
    ///
    /// Returns `HallOfFameError::Entry` when the name is empty or too
    /// long. Validation happens before anything is appended.
    pub fn append(
        &mut self,
        name: &str,
        result: &SessionResult,
    ) -> Result<&HallOfFameEntry, HallOfFameError> {
        let entry = HallOfFameEntry::new(
            EntryId::random(),
            name,
            result.score,
            result.total,
            result.mode,
            result.difficulty,
            result.selected_sifir,
            self.clock.today(),
        )?;

        debug!(name = entry.name(), score = entry.score(), total = entry.total(), mode = %entry.mode(), "appending hall of fame entry");
        let idx = self.entries.len();
        self.entries.push(entry);

        if let Err(err) = self.repo.save(&self.entries) {
            warn!(%err, "hall of fame save failed, entry kept in memory only");
        }

        Ok(&self.entries[idx])
    }
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//
