use chrono::{DateTime, Local};
use crate::teams::TeamPair;
use super::error::HistoryError;
use super::record::TeamRecord;
use super::storage::Storage;

/// Storage key holding the serialized record list
pub const HISTORY_KEY: &str = "teamRecords";

/// Display format for `TeamRecord::created_at`
pub const DATE_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Saved splits, newest first, mirrored to storage after every change
#[derive(Debug)]
pub struct History<S: Storage> {
    storage: S,
    records: Vec<TeamRecord>,
    last_id: u64,
}

impl<S: Storage> History<S> {
    /// Reads the saved list. Missing or unreadable data starts an empty history.
    pub fn load(storage: S) -> Self {
        let records = match storage.get(HISTORY_KEY) {
            Ok(Some(raw)) => match serde_json::from_str::<Vec<TeamRecord>>(&raw) {
                Ok(records) => records,
                Err(e) => {
                    log::warn!("Discarding unreadable team history: {}", e);
                    Vec::new()
                }
            },
            Ok(None) => Vec::new(),
            Err(e) => {
                log::warn!("Could not read team history, starting empty: {}", e);
                Vec::new()
            }
        };

        let last_id = records
            .iter()
            .filter_map(|r| r.id.parse::<u64>().ok())
            .max()
            .unwrap_or(0);

        log::info!("Loaded {} team records", records.len());
        Self { storage, records, last_id }
    }

    pub fn records(&self) -> &[TeamRecord] {
        &self.records
    }

    pub fn get(&self, id: &str) -> Option<&TeamRecord> {
        self.records.iter().find(|r| r.id == id)
    }

    #[cfg(test)]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    #[cfg(test)]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    #[cfg(test)]
    pub fn storage(&self) -> &S {
        &self.storage
    }

    #[cfg(test)]
    pub fn into_storage(self) -> S {
        self.storage
    }

    /// Records a split as the newest entry and saves the whole list
    pub fn append(&mut self, teams: TeamPair, now: DateTime<Local>) -> Result<&TeamRecord, HistoryError> {
        let id = self.next_id(&now);
        let record = TeamRecord {
            id: id.to_string(),
            created_at: now.format(DATE_FORMAT).to_string(),
            team_a: teams.team_a,
            team_b: teams.team_b,
        };

        let mut updated = Vec::with_capacity(self.records.len() + 1);
        updated.push(record);
        updated.extend(self.records.iter().cloned());
        self.persist(&updated)?;

        self.records = updated;
        self.last_id = id;
        log::info!("Saved team record {} ({} total)", id, self.records.len());
        Ok(&self.records[0])
    }

    /// Removes the record with `id`. Returns false when there was none.
    pub fn delete(&mut self, id: &str) -> Result<bool, HistoryError> {
        if self.get(id).is_none() {
            return Ok(false);
        }

        let updated: Vec<TeamRecord> = self.records.iter().filter(|r| r.id != id).cloned().collect();
        self.persist(&updated)?;

        self.records = updated;
        log::info!("Deleted team record {}", id);
        Ok(true)
    }

    /// Drops every record and removes the stored key entirely
    pub fn clear(&mut self) -> Result<(), HistoryError> {
        self.storage.remove(HISTORY_KEY)?;
        self.records.clear();
        log::info!("Cleared team history");
        Ok(())
    }

    // Millisecond timestamp, bumped past the last id when the clock hasn't moved
    fn next_id(&self, now: &DateTime<Local>) -> u64 {
        let millis = u64::try_from(now.timestamp_millis()).unwrap_or(0);
        if millis > self.last_id {
            millis
        } else {
            self.last_id + 1
        }
    }

    fn persist(&mut self, records: &[TeamRecord]) -> Result<(), HistoryError> {
        let json = serde_json::to_string(records)?;
        self.storage.set(HISTORY_KEY, &json)?;
        Ok(())
    }
}
