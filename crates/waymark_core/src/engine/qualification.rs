//! Qualification pipeline: gate, smooth, merge, rank.
//!
//! One `update` call runs the full pipeline over the current note set:
//! per-note qualify predicate, sticky-window smoothing via the stability
//! map, then union → sort(desc createdAt) → dedupe → truncate. Local and
//! shared notes flow through one candidate shape so the predicate exists
//! exactly once.

use crate::geo;
use crate::model::note::{Note, NoteId, SharedNote};
use crate::model::sample::{HeadingSample, PositionSample};
use std::collections::{HashMap, HashSet};

/// Grace period after a note last qualified during which it stays visible.
pub const STICKY_WINDOW_MS: i64 = 1_000;

/// Maximum number of notes in one display set.
pub const MAX_DISPLAY: usize = 2;

/// Tunable engine parameters. Defaults match the product constants; tests
/// may tighten them.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EngineConfig {
    /// Unlock radius applied to local notes, meters.
    pub default_radius_m: f64,
    /// Heading tolerance applied to local notes, degrees.
    pub default_tolerance_deg: f64,
    /// Sticky window length, milliseconds.
    pub sticky_window_ms: i64,
    /// Display set size cap.
    pub max_display: usize,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            default_radius_m: crate::model::note::DEFAULT_UNLOCK_RADIUS_M,
            default_tolerance_deg: crate::model::note::DEFAULT_UNLOCK_TOLERANCE_DEG,
            sticky_window_ms: STICKY_WINDOW_MS,
            max_display: MAX_DISPLAY,
        }
    }
}

/// Identity of a revealable note across both origins.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum RevealId {
    /// Locally created note, keyed by its store id.
    Local(NoteId),
    /// Session-scoped shared note, keyed by its decode-time id.
    Shared(String),
}

/// One entry of the display set handed to the overlay.
///
/// Ephemeral and read-only for consumers: fully replaced on every `update`,
/// never diffed incrementally.
#[derive(Debug, Clone, PartialEq)]
pub struct RevealedNote {
    pub id: RevealId,
    pub text: String,
    pub lat: f64,
    pub lon: f64,
    pub heading: Option<f64>,
    pub created_at: i64,
}

/// Unified view of a local or shared note with its effective unlock
/// parameters resolved.
struct Candidate<'a> {
    id: RevealId,
    text: &'a str,
    lat: f64,
    lon: f64,
    heading: Option<f64>,
    created_at: i64,
    radius_m: f64,
    tolerance_deg: f64,
}

impl<'a> Candidate<'a> {
    fn local(note: &'a Note, config: &EngineConfig) -> Self {
        Self {
            id: RevealId::Local(note.id),
            text: &note.text,
            lat: note.lat,
            lon: note.lon,
            heading: note.heading,
            created_at: note.created_at,
            radius_m: config.default_radius_m,
            tolerance_deg: config.default_tolerance_deg,
        }
    }

    fn shared(shared: &'a SharedNote) -> Self {
        Self {
            id: RevealId::Shared(shared.id.clone()),
            text: &shared.text,
            lat: shared.lat,
            lon: shared.lon,
            heading: shared.heading,
            created_at: shared.created_at,
            radius_m: shared.unlock_radius_m,
            tolerance_deg: shared.unlock_tolerance_deg,
        }
    }

    fn to_revealed(&self) -> RevealedNote {
        RevealedNote {
            id: self.id.clone(),
            text: self.text.to_string(),
            lat: self.lat,
            lon: self.lon,
            heading: self.heading,
            created_at: self.created_at,
        }
    }
}

/// Stateful reveal decision engine.
///
/// Single-threaded by design: `update` is synchronous, performs no I/O and
/// mutates only the stability map. In a multi-threaded host the whole
/// engine must sit behind one mutex, since one `update` reads and writes
/// the stability map non-atomically.
pub struct QualificationEngine {
    config: EngineConfig,
    /// noteId -> last instant the note freshly qualified, epoch ms.
    /// Grows only with distinct ids seen this session; the sticky-window
    /// check at read time makes stale entries inert, so no eviction runs.
    stability: HashMap<RevealId, i64>,
}

impl Default for QualificationEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl QualificationEngine {
    pub fn new() -> Self {
        Self::with_config(EngineConfig::default())
    }

    pub fn with_config(config: EngineConfig) -> Self {
        Self {
            config,
            stability: HashMap::new(),
        }
    }

    /// Recomputes the display set for one sensor sample.
    ///
    /// Returns at most `max_display` notes, newest `created_at` first,
    /// deduplicated by id. Without a position fix the result is empty
    /// regardless of any sticky state; stale notes are never shown blind.
    pub fn update(
        &mut self,
        now_ms: i64,
        position: Option<PositionSample>,
        heading: HeadingSample,
        local_notes: &[Note],
        shared_note: Option<&SharedNote>,
    ) -> Vec<RevealedNote> {
        let position = match position {
            Some(position) => position,
            None => return Vec::new(),
        };

        let locals: Vec<Candidate<'_>> = local_notes
            .iter()
            .map(|note| Candidate::local(note, &self.config))
            .collect();
        let shared: Option<Candidate<'_>> = shared_note.map(Candidate::shared);

        // Fresh qualification refreshes stability before the sticky reads,
        // so a freshly qualifying note is also sticky in the same call.
        let mut fresh_local = Vec::new();
        for candidate in &locals {
            if qualifies(position, heading, candidate) {
                self.touch(candidate.id.clone(), now_ms);
                fresh_local.push(candidate);
            }
        }
        let sticky_local: Vec<&Candidate<'_>> = locals
            .iter()
            .filter(|candidate| self.is_sticky(&candidate.id, now_ms))
            .collect();

        let mut fresh_shared = Vec::new();
        let mut sticky_shared = Vec::new();
        if let Some(candidate) = &shared {
            if qualifies(position, heading, candidate) {
                self.touch(candidate.id.clone(), now_ms);
                fresh_shared.push(candidate);
            }
            if self.is_sticky(&candidate.id, now_ms) {
                sticky_shared.push(candidate);
            }
        }

        // Union order matters for ties: stable sort keeps it, dedupe keeps
        // the first occurrence, truncation keeps the newest survivors.
        let mut merged: Vec<&Candidate<'_>> = fresh_local;
        merged.extend(sticky_local);
        merged.extend(fresh_shared);
        merged.extend(sticky_shared);
        merged.sort_by(|a, b| b.created_at.cmp(&a.created_at));

        let mut seen: HashSet<&RevealId> = HashSet::new();
        let mut display = Vec::new();
        for candidate in merged {
            if display.len() == self.config.max_display {
                break;
            }
            if seen.insert(&candidate.id) {
                display.push(candidate.to_revealed());
            }
        }
        display
    }

    /// Marks a note as freshly qualified. Monotonic: a stored timestamp is
    /// never moved backward, even if `now_ms` regresses between calls.
    fn touch(&mut self, id: RevealId, now_ms: i64) {
        let slot = self.stability.entry(id).or_insert(now_ms);
        if *slot < now_ms {
            *slot = now_ms;
        }
    }

    fn is_sticky(&self, id: &RevealId, now_ms: i64) -> bool {
        self.stability
            .get(id)
            .is_some_and(|last| now_ms - last <= self.config.sticky_window_ms)
    }
}

/// Instantaneous qualify predicate against a candidate's effective unlock
/// parameters. Total over all inputs: non-finite coordinates or an unknown
/// heading on either side yield `false`, never an error.
fn qualifies(position: PositionSample, heading: HeadingSample, candidate: &Candidate<'_>) -> bool {
    if !candidate.lat.is_finite() || !candidate.lon.is_finite() {
        return false;
    }

    let distance = geo::distance_meters(position.lat, position.lon, candidate.lat, candidate.lon);
    // Inclusive boundary; a NaN distance fails the comparison.
    if !(distance <= candidate.radius_m) {
        return false;
    }

    match (heading.degrees, candidate.heading) {
        (Some(live), Some(stored)) => {
            geo::heading_difference_deg(live, stored) <= candidate.tolerance_deg
        }
        _ => false,
    }
}
