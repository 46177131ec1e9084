//! Household profile repository
//!
//! The whole profile lives in `profile.json`. Mutations go through
//! [`ProfileRepository::update`], which swaps in a complete new profile under
//! the write lock so concurrent edits cannot interleave.

use std::path::PathBuf;
use std::sync::RwLock;

use crate::engine::validate_goals;
use crate::error::GaugeError;
use crate::models::HouseholdProfile;

use super::file_io::{read_json, write_json_atomic};

/// Repository for the persisted household profile
pub struct ProfileRepository {
    path: PathBuf,
    data: RwLock<HouseholdProfile>,
}

fn poisoned<E: std::fmt::Display>(e: E) -> GaugeError {
    GaugeError::Storage(format!("Profile lock poisoned: {}", e))
}

impl ProfileRepository {
    pub fn new(path: PathBuf) -> Self {
        Self {
            path,
            data: RwLock::new(HouseholdProfile::default()),
        }
    }

    /// Load the profile from disk
    ///
    /// Goals are not validated here, so a hand-edited invalid goal can still
    /// be edited or removed. Use [`ProfileRepository::get_validated`] before
    /// handing the profile to the engine.
    pub fn load(&self) -> Result<(), GaugeError> {
        let profile: HouseholdProfile = read_json(&self.path)?;
        *self.data.write().map_err(poisoned)? = profile;
        Ok(())
    }

    /// Save the profile to disk
    pub fn save(&self) -> Result<(), GaugeError> {
        let data = self.data.read().map_err(poisoned)?;
        write_json_atomic(&self.path, &*data)
    }

    /// A copy of the current profile
    pub fn get(&self) -> Result<HouseholdProfile, GaugeError> {
        Ok(self.data.read().map_err(poisoned)?.clone())
    }

    /// A copy of the current profile, failing if any goal is invalid
    pub fn get_validated(&self) -> Result<HouseholdProfile, GaugeError> {
        let profile = self.get()?;
        validate_goals(&profile.goals)?;
        Ok(profile)
    }

    /// Replace the profile with the result of `f`
    ///
    /// `f` receives a copy of the current profile and returns the new one plus
    /// a value for the caller. If `f` fails, nothing changes.
    pub fn update<F, R>(&self, f: F) -> Result<R, GaugeError>
    where
        F: FnOnce(HouseholdProfile) -> Result<(HouseholdProfile, R), GaugeError>,
    {
        let mut data = self.data.write().map_err(poisoned)?;
        let (next, result) = f(data.clone())?;
        *data = next;
        Ok(result)
    }

    pub fn path(&self) -> &PathBuf {
        &self.path
    }
}
