//! In-memory record store backing a list page
//!
//! Collections are seeded once when a page loads and then changed only by
//! local create/update/delete actions. Nothing is persisted.

use crate::core::error::{ConsoleError, RecordError, ValidationError};
use crate::core::events::{Notification, NotificationBus, NotificationKind};
use crate::core::record::Record;
use indexmap::IndexMap;
use validator::Validate;

/// Insertion-ordered collection of records keyed by id
#[derive(Debug, Clone)]
pub struct RecordStore<T> {
    records: IndexMap<String, T>,
    bus: Option<NotificationBus>,
}

impl<T> Default for RecordStore<T> {
    fn default() -> Self {
        Self {
            records: IndexMap::new(),
            bus: None,
        }
    }
}

impl<T: Record + Validate> RecordStore<T> {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed a store. A later record with a repeated id replaces the earlier one.
    pub fn seeded(records: impl IntoIterator<Item = T>) -> Self {
        let mut store = Self::new();
        store.replace_all(records);
        store
    }

    /// Report action outcomes on this bus
    pub fn with_notifications(mut self, bus: NotificationBus) -> Self {
        self.bus = Some(bus);
        self
    }

    pub fn attach_notifications(&mut self, bus: NotificationBus) {
        self.bus = Some(bus);
    }

    pub fn get(&self, id: &str) -> Option<&T> {
        self.records.get(id)
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Records in source order
    pub fn iter(&self) -> impl Iterator<Item = &T> {
        self.records.values()
    }

    /// Get all records (unfiltered, unsorted)
    pub fn list_all(&self) -> Vec<T> {
        self.records.values().cloned().collect()
    }

    /// Swap the whole collection
    pub fn replace_all(&mut self, records: impl IntoIterator<Item = T>) {
        self.records = records
            .into_iter()
            .map(|record| (record.id().to_string(), record))
            .collect();
    }

    /// Add a record submitted from a create dialog
    pub fn create(&mut self, record: T) -> Result<T, ConsoleError> {
        let result = self.try_create(record);
        self.report(result, |resource, id| NotificationKind::RecordCreated { resource, id })
    }

    /// Replace an existing record with an edited version
    pub fn update(&mut self, record: T) -> Result<T, ConsoleError> {
        let result = self.try_update(record);
        self.report(result, |resource, id| NotificationKind::RecordUpdated { resource, id })
    }

    /// Remove a record, keeping the order of the others
    pub fn delete(&mut self, id: &str) -> Result<T, ConsoleError> {
        let result: Result<T, ConsoleError> = self
            .records
            .shift_remove(id)
            .ok_or_else(|| not_found::<T>(id).into());
        self.report(result, |resource, id| NotificationKind::RecordDeleted { resource, id })
    }

    /// Apply a change to a copy of one record and store it if it still validates
    pub fn modify<F>(&mut self, id: &str, change: F) -> Result<T, ConsoleError>
    where
        F: FnOnce(&mut T),
    {
        self.try_modify(id, |record| {
            change(record);
            Ok(())
        })
    }

    /// Like [`modify`](Self::modify), for changes that may refuse the record's
    /// current state
    pub fn try_modify<F>(&mut self, id: &str, change: F) -> Result<T, ConsoleError>
    where
        F: FnOnce(&mut T) -> Result<(), RecordError>,
    {
        let changed: Result<T, ConsoleError> = match self.records.get(id).cloned() {
            Some(mut record) => change(&mut record)
                .and_then(|()| {
                    if record.id() == id {
                        Ok(record)
                    } else {
                        Err(RecordError::IdChanged {
                            resource: T::resource_name().to_string(),
                            id: id.to_string(),
                            new_id: record.id().to_string(),
                        })
                    }
                })
                .map_err(Into::into),
            None => Err(not_found::<T>(id).into()),
        };

        match changed {
            Ok(record) => self.update(record),
            Err(error) => self.report(Err(error), |resource, id| NotificationKind::RecordUpdated { resource, id }),
        }
    }

    fn try_create(&mut self, record: T) -> Result<T, ConsoleError> {
        validate(&record)?;

        if self.records.contains_key(record.id()) {
            return Err(RecordError::AlreadyExists {
                resource: T::resource_name().to_string(),
                id: record.id().to_string(),
            }
            .into());
        }

        self.records.insert(record.id().to_string(), record.clone());
        Ok(record)
    }

    fn try_update(&mut self, record: T) -> Result<T, ConsoleError> {
        validate(&record)?;

        let slot = self
            .records
            .get_mut(record.id())
            .ok_or_else(|| not_found::<T>(record.id()))?;
        *slot = record.clone();
        Ok(record)
    }

    fn report<F>(&self, result: Result<T, ConsoleError>, kind: F) -> Result<T, ConsoleError>
    where
        F: FnOnce(String, String) -> NotificationKind,
    {
        match &result {
            Ok(record) => {
                tracing::info!(resource = T::resource_name(), id = record.id(), "record action applied");
                if let Some(bus) = &self.bus {
                    bus.publish(Notification::success(kind(
                        T::resource_name().to_string(),
                        record.id().to_string(),
                    )));
                }
            }
            Err(error) => {
                tracing::info!(resource = T::resource_name(), error = %error, "record action rejected");
                if let Some(bus) = &self.bus {
                    bus.failure(error);
                }
            }
        }
        result
    }
}

fn validate<T: Record + Validate>(record: &T) -> Result<(), ConsoleError> {
    record
        .validate()
        .map_err(|errors| ValidationError::from_validator(T::resource_name(), &errors).into())
}

fn not_found<T: Record>(id: &str) -> RecordError {
    RecordError::NotFound {
        resource: T::resource_name().to_string(),
        id: id.to_string(),
    }
}
