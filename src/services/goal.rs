//! Goal service
//!
//! The mutation boundary for savings goals. Goals are validated here, get
//! their id and creation time here, and are written back as a whole new goal
//! list so concurrent edits cannot lose each other's changes.

use crate::audit::EntityType;
use crate::engine::validate_goal;
use crate::error::{GaugeError, GaugeResult};
use crate::models::{Goal, GoalCategory, GoalId};
use crate::storage::Storage;

/// Replacement values for every editable goal field
#[derive(Debug, Clone, PartialEq)]
pub struct GoalUpdate {
    pub name: String,
    pub target_amount: f64,
    pub deadline_months: u32,
    pub category: GoalCategory,
}

impl GoalUpdate {
    /// Start from the goal's current values
    pub fn from_goal(goal: &Goal) -> Self {
        Self {
            name: goal.name.clone(),
            target_amount: goal.target_amount,
            deadline_months: goal.deadline_months,
            category: goal.category,
        }
    }
}

/// Service for goal management
pub struct GoalService<'a> {
    storage: &'a Storage,
}

fn validated(goal: Goal) -> GaugeResult<Goal> {
    validate_goal(&goal)?;
    Ok(goal)
}

impl<'a> GoalService<'a> {
    pub fn new(storage: &'a Storage) -> Self {
        Self { storage }
    }

    /// Create a goal with a fresh id and creation time
    pub fn create(
        &self,
        name: &str,
        target_amount: f64,
        deadline_months: u32,
        category: GoalCategory,
    ) -> GaugeResult<Goal> {
        let goal = validated(Goal::new(name.trim(), target_amount, deadline_months, category))?;

        self.storage.profile.update(|mut profile| {
            if profile.goals.iter().any(|g| g.matches_name(&goal.name)) {
                return Err(GaugeError::Duplicate {
                    entity_type: "Goal",
                    identifier: goal.name.clone(),
                });
            }
            profile.goals.push(goal.clone());
            Ok((profile, ()))
        })?;
        self.storage.profile.save()?;

        self.storage.log_create(
            EntityType::Goal,
            goal.id.to_string(),
            Some(goal.name.clone()),
            &goal,
        )?;

        Ok(goal)
    }

    /// Replace every editable field of goal `id`, keeping id and creation time
    pub fn edit(&self, id: GoalId, update: GoalUpdate) -> GaugeResult<Goal> {
        let (before, after) = self.storage.profile.update(|mut profile| {
            let index = profile
                .goals
                .iter()
                .position(|g| g.id == id)
                .ok_or_else(|| GaugeError::goal_not_found(id.to_string()))?;

            let before = profile.goals[index].clone();
            let after = validated(Goal {
                name: update.name.trim().to_string(),
                target_amount: update.target_amount,
                deadline_months: update.deadline_months,
                category: update.category,
                ..before.clone()
            })?;

            if profile
                .goals
                .iter()
                .any(|g| g.id != id && g.matches_name(&after.name))
            {
                return Err(GaugeError::Duplicate {
                    entity_type: "Goal",
                    identifier: after.name.clone(),
                });
            }

            profile.goals[index] = after.clone();
            Ok((profile, (before, after)))
        })?;
        self.storage.profile.save()?;

        self.storage.log_update(
            EntityType::Goal,
            id.to_string(),
            Some(after.name.clone()),
            &before,
            &after,
        )?;

        Ok(after)
    }

    /// Remove goal `id`
    pub fn delete(&self, id: GoalId) -> GaugeResult<Goal> {
        let removed = self.storage.profile.update(|mut profile| {
            let index = profile
                .goals
                .iter()
                .position(|g| g.id == id)
                .ok_or_else(|| GaugeError::goal_not_found(id.to_string()))?;
            let removed = profile.goals.remove(index);
            Ok((profile, removed))
        })?;
        self.storage.profile.save()?;

        self.storage.log_delete(
            EntityType::Goal,
            id.to_string(),
            Some(removed.name.clone()),
            &removed,
        )?;

        Ok(removed)
    }

    /// Find a goal by name (case-insensitive), full id or short id
    pub fn find(&self, identifier: &str) -> GaugeResult<Option<Goal>> {
        let goals = self.list()?;

        if let Some(goal) = goals.iter().find(|g| g.matches_name(identifier)) {
            return Ok(Some(goal.clone()));
        }

        if let Ok(id) = identifier.parse::<GoalId>() {
            if let Some(goal) = goals.iter().find(|g| g.id == id) {
                return Ok(Some(goal.clone()));
            }
        }

        Ok(goals.into_iter().find(|g| g.id.matches_short(identifier)))
    }

    /// Find a goal or fail with `NotFound`
    pub fn require(&self, identifier: &str) -> GaugeResult<Goal> {
        self.find(identifier)?
            .ok_or_else(|| GaugeError::goal_not_found(identifier))
    }

    /// All goals in creation order
    pub fn list(&self) -> GaugeResult<Vec<Goal>> {
        Ok(self.storage.profile.get()?.goals)
    }
}
