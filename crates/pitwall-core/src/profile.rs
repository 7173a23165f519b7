//! The profile aggregate: four observable stores sharing one update callback.

use std::collections::BTreeMap;
use std::sync::{Arc, PoisonError, RwLock};

use serde::{Deserialize, Serialize};

use crate::alliance::Alliance;
use crate::datapoints::{FieldValue, TeamDataPoint, TeamEntry, TimDataPoint, TimEntry};
use crate::schedule::MatchSchedule;

/// Shared mutation callback invoked by every store in a [`Profile`].
///
/// Side-effect-only (typically an autosave request); callers must never
/// assume it is synchronous with storage.
pub type OnUpdate = Arc<dyn Fn() + Send + Sync>;

/// Team data keyed by team number.
pub type TeamDataMap = BTreeMap<String, TeamEntry>;

/// Team-in-match data keyed by match number, then team number.
pub type TimDataMap = BTreeMap<String, BTreeMap<String, TimEntry>>;

fn noop() -> OnUpdate {
    Arc::new(|| {})
}

/// Per-profile UI cursor: current alliance, match pointer, page index.
/// Carries no merge-significant data.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProfileSettings {
    #[serde(default)]
    pub alliance: Option<Alliance>,
    #[serde(default = "default_match_number")]
    pub match_number: String,
    #[serde(default)]
    pub page: i64,
}

fn default_match_number() -> String {
    "1".to_owned()
}

impl Default for ProfileSettings {
    fn default() -> Self {
        Self {
            alliance: None,
            match_number: default_match_number(),
            page: 0,
        }
    }
}

/// A mutable cell that invokes the profile-wide update callback on every
/// write.
///
/// Reads return a snapshot clone; writes are last-writer-wins. The callback
/// runs after the write lock is released, so it may read the store again.
pub struct Observable<T> {
    value: RwLock<T>,
    on_update: OnUpdate,
}

impl<T: std::fmt::Debug> std::fmt::Debug for Observable<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Observable")
            .field("value", &self.value)
            .finish_non_exhaustive()
    }
}

impl<T: Clone> Observable<T> {
    fn new(initial: T, on_update: OnUpdate) -> Self {
        Self {
            value: RwLock::new(initial),
            on_update,
        }
    }

    /// Snapshot of the current value.
    #[must_use]
    pub fn get(&self) -> T {
        self.value
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Read through a borrow without cloning.
    pub fn with<R>(&self, f: impl FnOnce(&T) -> R) -> R {
        f(&self.value.read().unwrap_or_else(PoisonError::into_inner))
    }

    /// Replace the value and fire the update callback.
    pub fn set(&self, value: T) {
        {
            let mut guard = self.value.write().unwrap_or_else(PoisonError::into_inner);
            *guard = value;
        }
        (self.on_update)();
    }

    /// Mutate in place under the write lock, then fire the callback once.
    pub fn update(&self, f: impl FnOnce(&mut T)) {
        {
            let mut guard = self.value.write().unwrap_or_else(PoisonError::into_inner);
            f(&mut guard);
        }
        (self.on_update)();
    }
}

/// Reactive map of team-level records.
#[derive(Debug)]
pub struct TeamData {
    inner: Observable<TeamDataMap>,
}

impl TeamData {
    fn new(initial: TeamDataMap, on_update: OnUpdate) -> Self {
        Self {
            inner: Observable::new(initial, on_update),
        }
    }

    /// Snapshot of the whole map.
    #[must_use]
    pub fn get(&self) -> TeamDataMap {
        self.inner.get()
    }

    /// Replace the whole map. Fires the update callback once.
    pub fn replace(&self, data: TeamDataMap) {
        self.inner.set(data);
    }

    /// Read one data point for one team; absent teams read as defaults.
    #[must_use]
    pub fn value(&self, team: &str, point: &TeamDataPoint) -> FieldValue {
        self.inner.with(|map| {
            map.get(team)
                .map_or_else(|| (point.get)(&TeamEntry::default()), |entry| (point.get)(entry))
        })
    }

    /// Set one data point for one team, creating a default entry if needed.
    pub fn set_value(&self, team: &str, point: &TeamDataPoint, value: FieldValue) {
        self.inner.update(|map| {
            let entry = map.entry(team.to_owned()).or_default();
            (point.set)(entry, value);
        });
    }
}

/// Reactive map of team-in-match records.
#[derive(Debug)]
pub struct TimData {
    inner: Observable<TimDataMap>,
}

impl TimData {
    fn new(initial: TimDataMap, on_update: OnUpdate) -> Self {
        Self {
            inner: Observable::new(initial, on_update),
        }
    }

    /// Snapshot of the whole map.
    #[must_use]
    pub fn get(&self) -> TimDataMap {
        self.inner.get()
    }

    /// Replace the whole map. Fires the update callback once.
    pub fn replace(&self, data: TimDataMap) {
        self.inner.set(data);
    }

    /// Read one data point for one team in one match; absent entries read as
    /// defaults.
    #[must_use]
    pub fn value(&self, match_number: &str, team: &str, point: &TimDataPoint) -> FieldValue {
        self.inner.with(|map| {
            map.get(match_number)
                .and_then(|teams| teams.get(team))
                .map_or_else(|| (point.get)(&TimEntry::default()), |entry| (point.get)(entry))
        })
    }

    /// Set one data point for one team in one match, creating intermediate
    /// entries if needed.
    pub fn set_value(&self, match_number: &str, team: &str, point: &TimDataPoint, value: FieldValue) {
        self.inner.update(|map| {
            let entry = map
                .entry(match_number.to_owned())
                .or_default()
                .entry(team.to_owned())
                .or_default();
            (point.set)(entry, value);
        });
    }
}

/// A named bundle of settings, match schedule, team data, and team-in-match
/// data.
///
/// Each store is independently mutable and independently readable, but all
/// four share one `on_update` callback invoked on every mutation. A profile
/// lives for one UI session or one pipeline run, then is handed to its
/// persistence or export sink.
#[derive(Debug)]
pub struct Profile {
    pub settings: Observable<ProfileSettings>,
    pub schedule: Observable<MatchSchedule>,
    pub team_data: TeamData,
    pub tim_data: TimData,
}

impl Profile {
    #[must_use]
    pub fn new(
        settings: ProfileSettings,
        schedule: MatchSchedule,
        team_data: TeamDataMap,
        tim_data: TimDataMap,
        on_update: OnUpdate,
    ) -> Self {
        Self {
            settings: Observable::new(settings, Arc::clone(&on_update)),
            schedule: Observable::new(schedule, Arc::clone(&on_update)),
            team_data: TeamData::new(team_data, Arc::clone(&on_update)),
            tim_data: TimData::new(tim_data, on_update),
        }
    }

    /// An empty profile with a no-op update callback.
    #[must_use]
    pub fn empty() -> Self {
        Self::new(
            ProfileSettings::default(),
            MatchSchedule::default(),
            TeamDataMap::default(),
            TimDataMap::default(),
            noop(),
        )
    }
}

impl Default for Profile {
    fn default() -> Self {
        Self::empty()
    }
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicUsize, Ordering};

    use pretty_assertions::assert_eq;

    use super::*;
    use crate::datapoints::{team_data_point, tim_data_point};

    fn counted_profile() -> (Profile, Arc<AtomicUsize>) {
        let updates = Arc::new(AtomicUsize::new(0));
        let counter = Arc::clone(&updates);
        let profile = Profile::new(
            ProfileSettings::default(),
            MatchSchedule::default(),
            TeamDataMap::default(),
            TimDataMap::default(),
            Arc::new(move || {
                counter.fetch_add(1, Ordering::SeqCst);
            }),
        );
        (profile, updates)
    }

    #[test]
    fn every_store_fires_the_shared_callback() {
        let (profile, updates) = counted_profile();

        profile.settings.set(ProfileSettings {
            alliance: Some(Alliance::Red),
            ..ProfileSettings::default()
        });
        profile.schedule.set(MatchSchedule::new());
        profile.team_data.replace(TeamDataMap::new());
        profile.tim_data.replace(TimDataMap::new());

        assert_eq!(updates.load(Ordering::SeqCst), 4);
    }

    #[test]
    fn set_value_creates_missing_entries() {
        let (profile, updates) = counted_profile();
        let strengths = team_data_point("strengths").unwrap();

        profile
            .team_data
            .set_value("1678", strengths, FieldValue::Str("fast cycles".into()));

        assert_eq!(
            profile.team_data.value("1678", strengths),
            FieldValue::Str("fast cycles".into())
        );
        assert_eq!(updates.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn absent_tim_entry_reads_as_default() {
        let (profile, _) = counted_profile();
        let rating = tim_data_point("defense_rating").unwrap();
        assert_eq!(profile.tim_data.value("3", "118", rating), FieldValue::Int(0));
    }

    #[test]
    fn tim_set_value_nests_under_match_then_team() {
        let (profile, _) = counted_profile();
        let rating = tim_data_point("defense_rating").unwrap();

        profile.tim_data.set_value("3", "118", rating, FieldValue::Int(5));

        let data = profile.tim_data.get();
        assert_eq!(data["3"]["118"].defense_rating, 5);
    }
}
