//! Candidate ground-motion records and the database that holds them.

use std::collections::HashMap;

use serde::Serialize;

/// One recorded ground motion: identity, scalar metadata, and its unscaled
/// IM values keyed by IM name.
///
/// Records are immutable; scale-dependent quantities are derived per
/// selection run and held in the engine's run-scoped snapshot.
#[derive(Debug, Clone, Serialize)]
pub struct GroundMotionRecord {
    database_name: String,
    gm_id: String,
    event_id: String,
    magnitude: f64,
    rupture_distance_km: f64,
    vs30: f64,
    min_usable_frequency_hz: f64,
    raw_im: HashMap<String, f64>,
}

impl GroundMotionRecord {
    /// Creates a record.
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        database_name: impl Into<String>,
        gm_id: impl Into<String>,
        event_id: impl Into<String>,
        magnitude: f64,
        rupture_distance_km: f64,
        vs30: f64,
        min_usable_frequency_hz: f64,
        raw_im: HashMap<String, f64>,
    ) -> Self {
        Self {
            database_name: database_name.into(),
            gm_id: gm_id.into(),
            event_id: event_id.into(),
            magnitude,
            rupture_distance_km,
            vs30,
            min_usable_frequency_hz,
            raw_im,
        }
    }

    /// Returns the name of the source database.
    pub fn database_name(&self) -> &str {
        &self.database_name
    }

    /// Returns the ground-motion identifier within its database.
    pub fn gm_id(&self) -> &str {
        &self.gm_id
    }

    /// Returns the identifier of the causative event.
    pub fn event_id(&self) -> &str {
        &self.event_id
    }

    /// Returns the event magnitude.
    pub fn magnitude(&self) -> f64 {
        self.magnitude
    }

    /// Returns the source-to-site rupture distance in kilometres.
    pub fn rupture_distance_km(&self) -> f64 {
        self.rupture_distance_km
    }

    /// Returns the site's 30 m shear-wave velocity.
    pub fn vs30(&self) -> f64 {
        self.vs30
    }

    /// Returns the lowest usable frequency of the record in hertz.
    pub fn min_usable_frequency_hz(&self) -> f64 {
        self.min_usable_frequency_hz
    }

    /// Returns the unscaled value of the named IM, if present.
    pub fn raw_im(&self, name: &str) -> Option<f64> {
        self.raw_im.get(name).copied()
    }

    /// Returns the full unscaled IM map.
    pub fn raw_ims(&self) -> &HashMap<String, f64> {
        &self.raw_im
    }
}

/// An ordered, read-only collection of candidate ground motions.
#[derive(Debug, Clone, Default, Serialize)]
pub struct GroundMotionDatabase {
    records: Vec<GroundMotionRecord>,
}

impl GroundMotionDatabase {
    /// Creates a database from an ordered record sequence.
    pub fn new(records: Vec<GroundMotionRecord>) -> Self {
        Self { records }
    }

    /// Returns the number of records.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Returns true when the database holds no records.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Returns the record at `index`.
    pub fn get(&self, index: usize) -> Option<&GroundMotionRecord> {
        self.records.get(index)
    }

    /// Iterates records in database order.
    pub fn iter(&self) -> impl Iterator<Item = &GroundMotionRecord> {
        self.records.iter()
    }
}
