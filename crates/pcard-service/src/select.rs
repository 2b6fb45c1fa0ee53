//! Activity selection rules.
//!
//! Three independent rules, each a single left-to-right scan over the
//! activity list, first match wins. The rules are NOT eliminative: an
//! entry taken by one rule is not removed before the others run. The
//! predicates are mutually exclusive for well-formed data, but a
//! malformed entry (say, named "Spotify" and also typed custom-status)
//! would satisfy two rules and be displayed twice. Upstream behaves the
//! same way, so this stays unguarded.

use pcard_entity::{ActivityEntry, MusicLine, OtherActivity, SelectedActivities};

/// Placeholder title for music entries with no song title.
const UNKNOWN_SONG: &str = "Unknown Song";
/// Placeholder artist for music entries with no artist.
const UNKNOWN_ARTIST: &str = "Unknown Artist";

/// Select at most one custom status, one music entry, and one other
/// activity from the list. Deterministic for a fixed input sequence.
pub fn select(activities: &[ActivityEntry]) -> SelectedActivities {
    let custom_status = activities
        .iter()
        .find(|a| a.is_custom_status())
        .and_then(|a| a.state.clone());

    let music = activities.iter().find(|a| a.is_music()).map(|a| MusicLine {
        title: a.title.clone().unwrap_or_else(|| UNKNOWN_SONG.to_string()),
        artist: a.artist.clone().unwrap_or_else(|| UNKNOWN_ARTIST.to_string()),
    });

    let other = activities
        .iter()
        .find(|a| !a.is_custom_status() && !a.is_music())
        .map(|a| OtherActivity {
            name: a.name.clone().unwrap_or_default(),
            details: a.details.clone(),
            state: a.state.clone(),
        });

    SelectedActivities {
        custom_status,
        music,
        other,
    }
}
