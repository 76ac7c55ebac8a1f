//! Power plant save/load.
//!
//! ## Format
//!
//! JSON keyed by the field names the game has always used (`money`,
//! `prestigeLevel`, `totalMoneyEarned`, `generators.<id>.{count,cost}`,
//! `lastSave`), so saves written before `version` existed still load.
//!
//! ## Recovery
//!
//! Loading never fails because of the blob's content. Each field is
//! validated on its own; anything missing or out of range takes its default
//! and is reported in [`LoadSource::Recovered`]. Only a failing store
//! surfaces an error.

use std::collections::{BTreeMap, HashMap};

use serde::Serialize;
use serde_json::Value;
use tracing::{debug, info, warn};

use super::catalog::GeneratorKind;
use super::logic::recompute_aggregates;
use super::state::{EconomyState, STARTING_CURRENCY};
use crate::config::SimConfig;
use crate::error::StorageError;

/// Current save format version. Increment when fields are added.
const SAVE_VERSION: u32 = 1;

// ── Blob store boundary ───────────────────────────────────────

/// Opaque key-value storage for save blobs.
pub trait BlobStore {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError>;
    fn set(&mut self, key: &str, blob: &str) -> Result<(), StorageError>;
}

/// In-process store. Used on the host and when localStorage is unavailable.
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: HashMap<String, String>,
}

impl BlobStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self.entries.get(key).cloned())
    }

    fn set(&mut self, key: &str, blob: &str) -> Result<(), StorageError> {
        self.entries.insert(key.to_string(), blob.to_string());
        Ok(())
    }
}

/// `window.localStorage`. Only exists on wasm32.
#[cfg(target_arch = "wasm32")]
pub struct LocalStorage {
    storage: web_sys::Storage,
}

#[cfg(target_arch = "wasm32")]
impl LocalStorage {
    pub fn open() -> Result<Self, StorageError> {
        let window =
            web_sys::window().ok_or_else(|| StorageError::Unavailable("no window".into()))?;
        match window.local_storage() {
            Ok(Some(storage)) => Ok(Self { storage }),
            Ok(None) => Err(StorageError::Unavailable("localStorage is disabled".into())),
            Err(e) => Err(StorageError::Unavailable(format!("{e:?}"))),
        }
    }
}

#[cfg(target_arch = "wasm32")]
impl BlobStore for LocalStorage {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        self.storage.get_item(key).map_err(|e| StorageError::Read {
            key: key.to_string(),
            reason: format!("{e:?}"),
        })
    }

    fn set(&mut self, key: &str, blob: &str) -> Result<(), StorageError> {
        self.storage.set_item(key, blob).map_err(|e| StorageError::Write {
            key: key.to_string(),
            reason: format!("{e:?}"),
        })
    }
}

/// The best store the platform offers: localStorage in the browser, memory elsewhere.
pub fn open_default_store() -> Box<dyn BlobStore> {
    #[cfg(target_arch = "wasm32")]
    {
        match LocalStorage::open() {
            Ok(store) => return Box::new(store),
            Err(e) => warn!(error = %e, "falling back to in-memory saves"),
        }
    }
    Box::new(MemoryStore::default())
}

// ── Serialized form ───────────────────────────────────────────

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct SaveData {
    version: u32,
    money: f64,
    prestige_level: u64,
    total_money_earned: f64,
    generators: BTreeMap<&'static str, HoldingSave>,
    /// Wall-clock ms since the Unix epoch.
    last_save: f64,
}

#[derive(Serialize)]
struct HoldingSave {
    count: u32,
    cost: f64,
}

fn extract_save(state: &EconomyState, now_ms: f64) -> SaveData {
    SaveData {
        version: SAVE_VERSION,
        money: state.currency,
        prestige_level: state.prestige_level,
        total_money_earned: state.lifetime_earned,
        generators: state
            .holdings
            .iter()
            .map(|h| {
                (
                    h.kind.id(),
                    HoldingSave {
                        count: h.count,
                        cost: h.cost,
                    },
                )
            })
            .collect(),
        last_save: now_ms,
    }
}

// ── Load results ──────────────────────────────────────────────

/// Where a loaded state came from.
#[derive(Clone, Debug, PartialEq)]
pub enum LoadSource {
    /// No save existed.
    Fresh,
    /// Every field was present and valid.
    Restored,
    /// The save was damaged; the listed fields fell back to defaults.
    Recovered { defaulted: Vec<String> },
}

/// Currency credited for time spent away.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct OfflineReport {
    pub seconds_away: f64,
    /// `seconds_away` clipped to the offline cap.
    pub credited_seconds: f64,
    pub earnings: f64,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Loaded {
    pub state: EconomyState,
    pub source: LoadSource,
    pub offline: Option<OfflineReport>,
}

// ── Save slot ─────────────────────────────────────────────────

/// One save slot in a blob store.
pub struct SaveSlot {
    store: Box<dyn BlobStore>,
    key: String,
    offline_cap_secs: f64,
}

impl SaveSlot {
    pub fn new(store: Box<dyn BlobStore>, config: &SimConfig) -> Self {
        Self {
            store,
            key: config.save_key.clone(),
            offline_cap_secs: config.offline_cap_secs,
        }
    }

    /// Overwrite the slot with `state`, stamped with `now_ms`.
    pub fn save(&mut self, state: &EconomyState, now_ms: f64) -> Result<(), StorageError> {
        let json = serde_json::to_string(&extract_save(state, now_ms))?;
        self.store.set(&self.key, &json)?;
        debug!(key = %self.key, bytes = json.len(), "saved");
        Ok(())
    }

    /// Read the slot and credit offline time up to `now_ms`.
    pub fn load(&self, now_ms: f64) -> Result<Loaded, StorageError> {
        let Some(json) = self.store.get(&self.key)? else {
            info!(key = %self.key, "no save found, starting fresh");
            return Ok(Loaded {
                state: EconomyState::new(),
                source: LoadSource::Fresh,
                offline: None,
            });
        };

        let mut defaulted = Vec::new();
        let (mut state, last_save) = match serde_json::from_str::<Value>(&json) {
            Ok(value) if value.is_object() => apply_save(&value, &mut defaulted),
            Ok(_) | Err(_) => {
                warn!(key = %self.key, "save is not a JSON object, every field defaulted");
                defaulted.extend(all_field_paths());
                (EconomyState::new(), None)
            }
        };

        let offline =
            last_save.map(|saved_at| apply_offline(&mut state, saved_at, now_ms, self.offline_cap_secs));
        recompute_aggregates(&mut state);

        let source = if defaulted.is_empty() {
            LoadSource::Restored
        } else {
            warn!(fields = ?defaulted, "save recovered with defaults");
            LoadSource::Recovered { defaulted }
        };
        info!(
            currency = state.currency,
            prestige_level = state.prestige_level,
            "save loaded"
        );
        Ok(Loaded {
            state,
            source,
            offline,
        })
    }
}

fn all_field_paths() -> Vec<String> {
    let mut paths: Vec<String> = ["money", "prestigeLevel", "totalMoneyEarned"]
        .iter()
        .map(|s| s.to_string())
        .collect();
    for kind in GeneratorKind::all() {
        paths.push(format!("generators.{}.count", kind.id()));
        paths.push(format!("generators.{}.cost", kind.id()));
    }
    paths.push("lastSave".into());
    paths
}

// ── Field recovery ────────────────────────────────────────────

/// Finite and non-negative.
fn non_negative(value: Option<&Value>) -> Option<f64> {
    value?.as_f64().filter(|v| v.is_finite() && *v >= 0.0)
}

/// A non-negative integer, written either as `3` or `3.0`.
fn whole_number(value: Option<&Value>) -> Option<u64> {
    let value = value?;
    value.as_u64().or_else(|| {
        value
            .as_f64()
            .filter(|f| f.is_finite() && *f >= 0.0 && f.fract() == 0.0 && *f < u64::MAX as f64)
            .map(|f| f as u64)
    })
}

/// Rebuild state from a parsed save object. Returns the state and the save timestamp.
fn apply_save(save: &Value, defaulted: &mut Vec<String>) -> (EconomyState, Option<f64>) {
    let mut state = EconomyState::new();

    let mut field = |path: String, ok: bool| {
        if !ok {
            defaulted.push(path);
        }
    };

    let money = non_negative(save.get("money"));
    field("money".into(), money.is_some());
    state.currency = money.unwrap_or(STARTING_CURRENCY);

    let level = whole_number(save.get("prestigeLevel"));
    field("prestigeLevel".into(), level.is_some());
    state.prestige_level = level.unwrap_or(0);
    state.prestige_multiplier = EconomyState::multiplier_for_level(state.prestige_level);

    let lifetime = non_negative(save.get("totalMoneyEarned"));
    field("totalMoneyEarned".into(), lifetime.is_some());
    state.lifetime_earned = lifetime.unwrap_or(0.0);

    let generators = save.get("generators");
    for holding in &mut state.holdings {
        let kind = holding.kind;
        let entry = generators.and_then(|g| g.get(kind.id()));

        let count = whole_number(entry.and_then(|e| e.get("count")))
            .and_then(|c| u32::try_from(c).ok());
        field(format!("generators.{}.count", kind.id()), count.is_some());
        holding.count = count.unwrap_or(0);

        let cost = non_negative(entry.and_then(|e| e.get("cost")))
            .filter(|c| *c >= kind.base_cost() && c.fract() == 0.0);
        field(format!("generators.{}.cost", kind.id()), cost.is_some());
        holding.cost = cost.unwrap_or_else(|| kind.base_cost());
    }

    if let Some(map) = generators.and_then(Value::as_object) {
        for id in map.keys().filter(|id| GeneratorKind::from_id(id).is_none()) {
            debug!(id = %id, "ignoring unknown generator in save");
        }
    }

    let last_save = save
        .get("lastSave")
        .and_then(Value::as_f64)
        .filter(|t| t.is_finite() && *t > 0.0);
    field("lastSave".into(), last_save.is_some());

    match save.get("version").and_then(Value::as_u64) {
        None => debug!("legacy save without version"),
        Some(v) if v > u64::from(SAVE_VERSION) => {
            warn!(saved = v, current = SAVE_VERSION, "save written by a newer version")
        }
        Some(_) => {}
    }

    (state, last_save)
}

/// Credit income for the time between `saved_at_ms` and `now_ms`, capped.
/// Only currency grows; lifetime earnings (prestige progress) do not.
pub fn apply_offline(
    state: &mut EconomyState,
    saved_at_ms: f64,
    now_ms: f64,
    cap_secs: f64,
) -> OfflineReport {
    let seconds_away = ((now_ms - saved_at_ms) / 1000.0).max(0.0);
    let credited_seconds = seconds_away.min(cap_secs);
    recompute_aggregates(state);
    let earnings = state.income * credited_seconds;
    state.currency += earnings;
    if earnings > 0.0 {
        info!(seconds_away, credited_seconds, earnings, "offline earnings credited");
    }
    OfflineReport {
        seconds_away,
        credited_seconds,
        earnings,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::plant::logic::buy;

    const NOW: f64 = 1_700_000_000_000.0;

    fn slot() -> SaveSlot {
        SaveSlot::new(Box::new(MemoryStore::default()), &SimConfig::default())
    }

    fn slot_with(json: &str) -> SaveSlot {
        let mut store = MemoryStore::default();
        store.set("powerPlantSavePC", json).unwrap();
        SaveSlot::new(Box::new(store), &SimConfig::default())
    }

    fn defaulted(loaded: &Loaded) -> Vec<String> {
        match &loaded.source {
            LoadSource::Recovered { defaulted } => defaulted.clone(),
            _ => Vec::new(),
        }
    }

    /// Store whose every call fails.
    struct BrokenStore;

    impl BlobStore for BrokenStore {
        fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
            Err(StorageError::Read {
                key: key.into(),
                reason: "SecurityError".into(),
            })
        }

        fn set(&mut self, key: &str, _blob: &str) -> Result<(), StorageError> {
            Err(StorageError::Write {
                key: key.into(),
                reason: "QuotaExceededError".into(),
            })
        }
    }

    #[test]
    fn missing_save_is_fresh_not_error() {
        let loaded = slot().load(NOW).unwrap();
        assert_eq!(loaded.source, LoadSource::Fresh);
        assert_eq!(loaded.state, EconomyState::new());
        assert_eq!(loaded.offline, None);
    }

    #[test]
    fn save_and_load_roundtrip() {
        let mut original = EconomyState::new();
        original.currency = 1e6;
        buy(&mut original, GeneratorKind::Solar);
        buy(&mut original, GeneratorKind::Solar);
        buy(&mut original, GeneratorKind::Nuclear);
        original.lifetime_earned = 123_456.5;
        original.prestige_level = 3;
        original.prestige_multiplier = EconomyState::multiplier_for_level(3);
        recompute_aggregates(&mut original);

        let mut slot = slot();
        slot.save(&original, NOW).unwrap();
        let loaded = slot.load(NOW).unwrap();

        assert_eq!(loaded.source, LoadSource::Restored);
        assert_eq!(loaded.state, original);
        let offline = loaded.offline.unwrap();
        assert!((offline.earnings - 0.0).abs() < f64::EPSILON);
    }

    #[test]
    fn save_overwrites_previous_blob() {
        let mut slot = slot();
        let mut state = EconomyState::new();
        slot.save(&state, NOW).unwrap();
        state.currency = 42.0;
        slot.save(&state, NOW).unwrap();
        slot.save(&state, NOW).unwrap();
        assert!((slot.load(NOW).unwrap().state.currency - 42.0).abs() < f64::EPSILON);
    }

    #[test]
    fn saved_json_uses_legacy_field_names() {
        let mut store = MemoryStore::default();
        let state = EconomyState::new();
        let json = serde_json::to_string(&extract_save(&state, NOW)).unwrap();
        store.set("k", &json).unwrap();
        let value: Value = serde_json::from_str(&store.get("k").unwrap().unwrap()).unwrap();
        for key in ["version", "money", "prestigeLevel", "totalMoneyEarned", "generators", "lastSave"] {
            assert!(value.get(key).is_some(), "missing {}", key);
        }
        assert_eq!(value["generators"]["fusion"]["cost"], 20_000.0);
        assert_eq!(value["generators"]["solar"]["count"], 0);
    }

    #[test]
    fn legacy_blob_without_version_loads() {
        let json = r#"{
            "money": 250.5,
            "prestigeLevel": 2,
            "totalMoneyEarned": 8000,
            "generators": {
                "solar": {"count": 4, "cost": 14},
                "wind": {"count": 1, "cost": 114},
                "coal": {"count": 0, "cost": 500},
                "nuclear": {"count": 0, "cost": 3000},
                "fusion": {"count": 0, "cost": 20000}
            },
            "lastSave": 1700000000000
        }"#;
        let loaded = slot_with(json).load(NOW).unwrap();
        assert_eq!(loaded.source, LoadSource::Restored);
        let s = &loaded.state;
        assert!((s.currency - 250.5).abs() < 1e-9);
        assert_eq!(s.prestige_level, 2);
        assert!((s.prestige_multiplier - 1.5).abs() < f64::EPSILON);
        assert_eq!(s.holding(GeneratorKind::Solar).count, 4);
        assert!((s.holding(GeneratorKind::Wind).cost - 114.0).abs() < f64::EPSILON);
        // (4*2 + 8) * 1.5
        assert!((s.income - 24.0).abs() < 1e-9);
    }

    #[test]
    fn garbage_blob_defaults_everything() {
        for junk in ["{not json", "[1, 2, 3]", "\"money\"", "null", ""] {
            let loaded = slot_with(junk).load(NOW).unwrap();
            assert_eq!(loaded.state, EconomyState::new(), "blob: {:?}", junk);
            assert_eq!(loaded.offline, None);
            assert_eq!(defaulted(&loaded).len(), all_field_paths().len());
        }
    }

    #[test]
    fn each_missing_field_defaults_independently() {
        let json = r#"{
            "prestigeLevel": 4,
            "generators": { "coal": {"count": 3} },
            "lastSave": 1700000000000
        }"#;
        let loaded = slot_with(json).load(NOW).unwrap();
        let s = &loaded.state;
        assert!((s.currency - 10.0).abs() < f64::EPSILON);
        assert_eq!(s.prestige_level, 4);
        assert!((s.lifetime_earned - 0.0).abs() < f64::EPSILON);
        assert_eq!(s.holding(GeneratorKind::Coal).count, 3);
        assert!((s.holding(GeneratorKind::Coal).cost - 500.0).abs() < f64::EPSILON);
        assert_eq!(s.holding(GeneratorKind::Solar).count, 0);

        let fields = defaulted(&loaded);
        assert!(fields.contains(&"money".to_string()));
        assert!(fields.contains(&"totalMoneyEarned".to_string()));
        assert!(fields.contains(&"generators.coal.cost".to_string()));
        assert!(fields.contains(&"generators.solar.count".to_string()));
        assert!(!fields.contains(&"prestigeLevel".to_string()));
        assert!(!fields.contains(&"generators.coal.count".to_string()));
        assert!(!fields.contains(&"lastSave".to_string()));
    }

    #[test]
    fn invalid_values_default() {
        let json = r#"{
            "money": -5,
            "prestigeLevel": 1.5,
            "totalMoneyEarned": "lots",
            "generators": {
                "solar": {"count": -1, "cost": 3},
                "wind": {"count": 2.0, "cost": 130.5},
                "nuclear": {"count": 99999999999, "cost": 3000},
                "fusion": "broken"
            },
            "lastSave": "yesterday"
        }"#;
        let loaded = slot_with(json).load(NOW).unwrap();
        let s = &loaded.state;
        assert!((s.currency - 10.0).abs() < f64::EPSILON);
        assert_eq!(s.prestige_level, 0);
        assert!((s.lifetime_earned - 0.0).abs() < f64::EPSILON);
        assert_eq!(s.holding(GeneratorKind::Solar).count, 0);
        assert!((s.holding(GeneratorKind::Solar).cost - 10.0).abs() < f64::EPSILON);
        assert_eq!(s.holding(GeneratorKind::Wind).count, 2);
        assert!((s.holding(GeneratorKind::Wind).cost - 100.0).abs() < f64::EPSILON);
        assert_eq!(s.holding(GeneratorKind::Nuclear).count, 0);
        assert_eq!(s.holding(GeneratorKind::Fusion).count, 0);
        assert_eq!(loaded.offline, None);
        assert!(defaulted(&loaded).contains(&"lastSave".to_string()));
    }

    #[test]
    fn zero_last_save_credits_nothing() {
        let json = r#"{
            "money": 0,
            "generators": { "solar": {"count": 1, "cost": 11} },
            "lastSave": 0
        }"#;
        let loaded = slot_with(json).load(NOW).unwrap();
        assert_eq!(loaded.offline, None);
        assert!((loaded.state.currency - 0.0).abs() < f64::EPSILON);
        assert!(defaulted(&loaded).contains(&"lastSave".to_string()));
    }

    #[test]
    fn saturated_prestige_level_survives_another_prestige() {
        use crate::plant::prestige::do_prestige;

        let json = r#"{"prestigeLevel": 18446744073709551615, "totalMoneyEarned": 100000}"#;
        let mut state = slot_with(json).load(NOW).unwrap().state;
        assert_eq!(state.prestige_level, u64::MAX);
        assert_eq!(do_prestige(&mut state), Some(1));
        assert_eq!(state.prestige_level, u64::MAX);
        assert!(state.prestige_multiplier > 1.0);
    }

    #[test]
    fn saturated_count_refuses_purchase() {
        let json = r#"{"money": 100, "generators": {"solar": {"count": 4294967295, "cost": 10}}}"#;
        let mut state = slot_with(json).load(NOW).unwrap().state;
        assert_eq!(state.holding(GeneratorKind::Solar).count, u32::MAX);
        assert!(!buy(&mut state, GeneratorKind::Solar));
        assert!((state.currency - 100.0).abs() < f64::EPSILON);
    }

    #[test]
    fn zero_money_is_kept() {
        let loaded = slot_with(r#"{"money": 0}"#).load(NOW).unwrap();
        assert!((loaded.state.currency - 0.0).abs() < f64::EPSILON);
    }

    #[test]
    fn unknown_fields_and_generators_ignored() {
        let json = r#"{
            "version": 1,
            "money": 20,
            "generators": { "geothermal": {"count": 9, "cost": 1} },
            "futureField": true
        }"#;
        let loaded = slot_with(json).load(NOW).unwrap();
        assert!((loaded.state.currency - 20.0).abs() < f64::EPSILON);
        assert!(loaded.state.holdings.iter().all(|h| h.count == 0));
    }

    #[test]
    fn newer_version_still_loads() {
        let loaded = slot_with(r#"{"version": 99, "money": 77}"#).load(NOW).unwrap();
        assert!((loaded.state.currency - 77.0).abs() < f64::EPSILON);
    }

    #[test]
    fn offline_accrual_is_capped_at_one_hour() {
        let mut state = EconomyState::new();
        state.currency = 0.0;
        state.holding_mut(GeneratorKind::Solar).count = 5; // 10/s

        let mut slot = slot();
        slot.save(&state, NOW).unwrap();
        let loaded = slot.load(NOW + 10_000.0 * 1000.0).unwrap();

        let offline = loaded.offline.unwrap();
        assert!((offline.seconds_away - 10_000.0).abs() < 1e-6);
        assert!((offline.credited_seconds - 3_600.0).abs() < 1e-6);
        assert!((offline.earnings - 36_000.0).abs() < 1e-6);
        assert!((loaded.state.currency - 36_000.0).abs() < 1e-6);
    }

    #[test]
    fn offline_accrual_below_cap_is_linear() {
        let mut state = EconomyState::new();
        state.holding_mut(GeneratorKind::Wind).count = 1; // 8/s
        let mut slot = slot();
        slot.save(&state, NOW).unwrap();
        let loaded = slot.load(NOW + 60_000.0).unwrap();
        assert!((loaded.state.currency - (10.0 + 480.0)).abs() < 1e-6);
    }

    #[test]
    fn offline_accrual_skips_lifetime_earned() {
        let mut state = EconomyState::new();
        state.holding_mut(GeneratorKind::Fusion).count = 10;
        state.lifetime_earned = 5.0;
        let mut slot = slot();
        slot.save(&state, NOW).unwrap();
        let loaded = slot.load(NOW + 3_600_000.0).unwrap();
        assert!(loaded.state.currency > 1e6);
        assert!((loaded.state.lifetime_earned - 5.0).abs() < f64::EPSILON);
    }

    #[test]
    fn offline_accrual_uses_prestige_multiplier() {
        let mut state = EconomyState::new();
        state.currency = 0.0;
        state.prestige_level = 4; // x2
        state.holding_mut(GeneratorKind::Solar).count = 1;
        let mut slot = slot();
        slot.save(&state, NOW).unwrap();
        let loaded = slot.load(NOW + 10_000.0).unwrap();
        assert!((loaded.state.currency - 40.0).abs() < 1e-9);
    }

    #[test]
    fn clock_moved_backwards_credits_nothing() {
        let mut state = EconomyState::new();
        state.holding_mut(GeneratorKind::Solar).count = 5;
        let mut slot = slot();
        slot.save(&state, NOW).unwrap();
        let loaded = slot.load(NOW - 86_400_000.0).unwrap();
        let offline = loaded.offline.unwrap();
        assert!((offline.seconds_away - 0.0).abs() < f64::EPSILON);
        assert!((loaded.state.currency - 10.0).abs() < f64::EPSILON);
    }

    #[test]
    fn custom_offline_cap() {
        let config = SimConfig {
            offline_cap_secs: 60.0,
            ..SimConfig::default()
        };
        let mut slot = SaveSlot::new(Box::new(MemoryStore::default()), &config);
        let mut state = EconomyState::new();
        state.currency = 0.0;
        state.holding_mut(GeneratorKind::Solar).count = 1;
        slot.save(&state, NOW).unwrap();
        let loaded = slot.load(NOW + 3_600_000.0).unwrap();
        assert!((loaded.state.currency - 120.0).abs() < 1e-9);
    }

    #[test]
    fn broken_store_surfaces_errors() {
        let mut slot = SaveSlot::new(Box::new(BrokenStore), &SimConfig::default());
        assert!(matches!(
            slot.save(&EconomyState::new(), NOW),
            Err(StorageError::Write { .. })
        ));
        assert!(matches!(slot.load(NOW), Err(StorageError::Read { .. })));
    }

    #[test]
    fn apply_offline_without_income_reports_zero() {
        let mut state = EconomyState::new();
        let report = apply_offline(&mut state, NOW, NOW + 5_000.0, 3_600.0);
        assert!((report.earnings - 0.0).abs() < f64::EPSILON);
        assert!((report.credited_seconds - 5.0).abs() < 1e-9);
        assert!((state.currency - 10.0).abs() < f64::EPSILON);
    }
}
