//! Profile service
//!
//! Edits to the non-goal parts of the household profile: the monthly
//! snapshot, savings strategies, lifestyle optimizations and claimed
//! subsidies.

use crate::audit::{AuditEntry, EntityType};
use crate::error::{GaugeError, GaugeResult};
use crate::models::{
    normalize_category, ClaimedSubsidy, FinancialSnapshot, LifestyleOptimization, Strategy,
};
use crate::storage::Storage;

const SNAPSHOT_ID: &str = "snapshot";

fn finite(what: &str, amount: f64) -> GaugeResult<f64> {
    if amount.is_finite() {
        Ok(amount)
    } else {
        Err(GaugeError::Validation(format!(
            "{} must be a finite number",
            what
        )))
    }
}

fn non_empty(what: &str, value: &str) -> GaugeResult<String> {
    let value = value.trim();
    if value.is_empty() {
        return Err(GaugeError::Validation(format!("{} cannot be empty", what)));
    }
    Ok(value.to_string())
}

/// Service for snapshot, strategy, optimization and subsidy edits
pub struct ProfileService<'a> {
    storage: &'a Storage,
}

impl<'a> ProfileService<'a> {
    pub fn new(storage: &'a Storage) -> Self {
        Self { storage }
    }

    /// Current snapshot
    pub fn snapshot(&self) -> GaugeResult<FinancialSnapshot> {
        Ok(self.storage.profile.get()?.snapshot)
    }

    /// Set one snapshot field by name
    pub fn set_snapshot_field(&self, field: &str, value: f64) -> GaugeResult<FinancialSnapshot> {
        let value = finite(field, value)?;
        let (before, after) = self.storage.profile.update(|mut profile| {
            let before = profile.snapshot;
            profile
                .snapshot
                .set_field(field, value)
                .map_err(GaugeError::Validation)?;
            let after = profile.snapshot;
            Ok((profile, (before, after)))
        })?;

        self.save_snapshot_change(before, after)
    }

    /// Replace the whole snapshot
    pub fn replace_snapshot(&self, snapshot: FinancialSnapshot) -> GaugeResult<FinancialSnapshot> {
        for (name, value) in snapshot.fields() {
            finite(name, value)?;
        }
        let before = self.storage.profile.update(|mut profile| {
            let before = profile.snapshot;
            profile.snapshot = snapshot;
            Ok((profile, before))
        })?;

        self.save_snapshot_change(before, snapshot)
    }

    fn save_snapshot_change(
        &self,
        before: FinancialSnapshot,
        after: FinancialSnapshot,
    ) -> GaugeResult<FinancialSnapshot> {
        self.storage.profile.save()?;
        if before != after {
            self.storage
                .log_update(EntityType::Snapshot, SNAPSHOT_ID, None, &before, &after)?;
        }
        Ok(after)
    }

    /// Add a savings strategy; labels are unique (case-insensitive)
    pub fn add_strategy(&self, label: &str, monthly_amount: f64) -> GaugeResult<Strategy> {
        let label = non_empty("Strategy label", label)?;
        let strategy = Strategy::new(label, finite("Monthly amount", monthly_amount)?);

        self.storage.profile.update(|mut profile| {
            if profile
                .strategies
                .iter()
                .any(|s| s.matches_label(&strategy.label))
            {
                return Err(GaugeError::Duplicate {
                    entity_type: "Strategy",
                    identifier: strategy.label.clone(),
                });
            }
            profile.strategies.push(strategy.clone());
            Ok((profile, ()))
        })?;
        self.storage.profile.save()?;

        self.storage.log_create(
            EntityType::Strategy,
            strategy.label.clone(),
            Some(strategy.label.clone()),
            &strategy,
        )?;

        Ok(strategy)
    }

    /// Remove the strategy with `label`
    pub fn remove_strategy(&self, label: &str) -> GaugeResult<Strategy> {
        let removed = self.storage.profile.update(|mut profile| {
            let index = profile
                .strategies
                .iter()
                .position(|s| s.matches_label(label))
                .ok_or_else(|| GaugeError::strategy_not_found(label))?;
            let removed = profile.strategies.remove(index);
            Ok((profile, removed))
        })?;
        self.storage.profile.save()?;

        self.storage.log_delete(
            EntityType::Strategy,
            removed.label.clone(),
            Some(removed.label.clone()),
            &removed,
        )?;

        Ok(removed)
    }

    pub fn strategies(&self) -> GaugeResult<Vec<Strategy>> {
        Ok(self.storage.profile.get()?.strategies)
    }

    /// Record an accepted lifestyle optimization
    ///
    /// The category is stored normalized. Several optimizations for the same
    /// category are summed by the allocator.
    pub fn add_optimization(
        &self,
        category: &str,
        monthly_savings: f64,
    ) -> GaugeResult<LifestyleOptimization> {
        let category = normalize_category(&non_empty("Optimization category", category)?);
        let optimization =
            LifestyleOptimization::new(category, finite("Monthly savings", monthly_savings)?);

        self.storage.profile.update(|mut profile| {
            profile.optimizations.push(optimization.clone());
            Ok((profile, ()))
        })?;
        self.storage.profile.save()?;

        self.storage.log_create(
            EntityType::Optimization,
            optimization.category.clone(),
            None,
            &optimization,
        )?;

        Ok(optimization)
    }

    /// Drop every recorded optimization, returning how many were removed
    pub fn clear_optimizations(&self) -> GaugeResult<usize> {
        let removed = self.storage.profile.update(|mut profile| {
            let removed = std::mem::take(&mut profile.optimizations);
            Ok((profile, removed))
        })?;
        if removed.is_empty() {
            return Ok(0);
        }
        self.storage.profile.save()?;

        let entries: Vec<AuditEntry> = removed
            .iter()
            .map(|o| AuditEntry::delete(EntityType::Optimization, o.category.clone(), None, o))
            .collect();
        self.storage.audit().log_batch(&entries)?;

        Ok(removed.len())
    }

    pub fn optimizations(&self) -> GaugeResult<Vec<LifestyleOptimization>> {
        Ok(self.storage.profile.get()?.optimizations)
    }

    /// Record a claimed subsidy; names are unique (case-insensitive)
    pub fn add_subsidy(&self, name: &str, monthly_benefit: f64) -> GaugeResult<ClaimedSubsidy> {
        let name = non_empty("Subsidy name", name)?;
        let subsidy = ClaimedSubsidy::new(name, finite("Monthly benefit", monthly_benefit)?);

        self.storage.profile.update(|mut profile| {
            if profile
                .claimed_subsidies
                .iter()
                .any(|s| s.name.eq_ignore_ascii_case(&subsidy.name))
            {
                return Err(GaugeError::Duplicate {
                    entity_type: "Subsidy",
                    identifier: subsidy.name.clone(),
                });
            }
            profile.claimed_subsidies.push(subsidy.clone());
            Ok((profile, ()))
        })?;
        self.storage.profile.save()?;

        self.storage.log_create(
            EntityType::Subsidy,
            subsidy.name.clone(),
            Some(subsidy.name.clone()),
            &subsidy,
        )?;

        Ok(subsidy)
    }

    /// Remove the claimed subsidy called `name`
    pub fn remove_subsidy(&self, name: &str) -> GaugeResult<ClaimedSubsidy> {
        let removed = self.storage.profile.update(|mut profile| {
            let index = profile
                .claimed_subsidies
                .iter()
                .position(|s| s.name.eq_ignore_ascii_case(name.trim()))
                .ok_or_else(|| GaugeError::subsidy_not_found(name))?;
            let removed = profile.claimed_subsidies.remove(index);
            Ok((profile, removed))
        })?;
        self.storage.profile.save()?;

        self.storage.log_delete(
            EntityType::Subsidy,
            removed.name.clone(),
            Some(removed.name.clone()),
            &removed,
        )?;

        Ok(removed)
    }

    pub fn subsidies(&self) -> GaugeResult<Vec<ClaimedSubsidy>> {
        Ok(self.storage.profile.get()?.claimed_subsidies)
    }
}
