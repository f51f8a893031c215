//! In-Memory Action Plan Repository
//!
//! Keeps plans in a `BTreeMap` keyed by id so reads come back ordered.
//! Used by tests and the demo host.

use async_trait::async_trait;
use std::collections::BTreeMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::domain::action_plan::ActionPlan;
use crate::domain::foundation::{ActionPlanId, DomainError, ErrorCode};
use crate::ports::{action_plan_not_found, ActionPlanRepository};

#[derive(Debug)]
struct Inner {
    plans: BTreeMap<ActionPlanId, ActionPlan>,
    next_id: ActionPlanId,
}

/// In-memory store for action plans.
#[derive(Debug, Clone)]
pub struct InMemoryActionPlanRepository {
    inner: Arc<RwLock<Inner>>,
}

impl InMemoryActionPlanRepository {
    /// Create an empty repository. The first id handed out is 1.
    pub fn new() -> Self {
        Self {
            inner: Arc::new(RwLock::new(Inner {
                plans: BTreeMap::new(),
                next_id: ActionPlanId::FIRST,
            })),
        }
    }

    /// Create a repository holding existing plans.
    ///
    /// The id counter continues after the highest seeded id.
    pub fn with_plans(plans: impl IntoIterator<Item = ActionPlan>) -> Self {
        let plans: BTreeMap<ActionPlanId, ActionPlan> =
            plans.into_iter().map(|plan| (plan.id, plan)).collect();
        let next_id = plans
            .keys()
            .next_back()
            .map(|id| id.next())
            .unwrap_or(ActionPlanId::FIRST);

        Self {
            inner: Arc::new(RwLock::new(Inner { plans, next_id })),
        }
    }

    /// Number of stored plans.
    pub async fn len(&self) -> usize {
        self.inner.read().await.plans.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.inner.read().await.plans.is_empty()
    }
}

impl Default for InMemoryActionPlanRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ActionPlanRepository for InMemoryActionPlanRepository {
    async fn next_id(&self) -> Result<ActionPlanId, DomainError> {
        let mut inner = self.inner.write().await;
        let id = inner.next_id;
        inner.next_id = id.next();
        Ok(id)
    }

    async fn save(&self, plan: &ActionPlan) -> Result<(), DomainError> {
        let mut inner = self.inner.write().await;
        if inner.plans.contains_key(&plan.id) {
            return Err(DomainError::new(
                ErrorCode::DuplicateActionPlan,
                format!("Action plan {} already exists", plan.id),
            )
            .with_detail("id", plan.id.to_string()));
        }
        // Plans saved under an id that was never reserved still retire it.
        if plan.id >= inner.next_id {
            inner.next_id = plan.id.next();
        }
        inner.plans.insert(plan.id, plan.clone());
        Ok(())
    }

    async fn update(&self, plan: &ActionPlan) -> Result<(), DomainError> {
        let mut inner = self.inner.write().await;
        match inner.plans.get_mut(&plan.id) {
            Some(stored) => {
                *stored = plan.clone();
                Ok(())
            }
            None => Err(action_plan_not_found(plan.id)),
        }
    }

    async fn find_by_id(&self, id: ActionPlanId) -> Result<Option<ActionPlan>, DomainError> {
        Ok(self.inner.read().await.plans.get(&id).cloned())
    }

    async fn find_all(&self) -> Result<Vec<ActionPlan>, DomainError> {
        Ok(self.inner.read().await.plans.values().cloned().collect())
    }

    async fn delete(&self, id: ActionPlanId) -> Result<(), DomainError> {
        let mut inner = self.inner.write().await;
        inner
            .plans
            .remove(&id)
            .map(|_| ())
            .ok_or_else(|| action_plan_not_found(id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::action_plan::PlanStatus;
    use crate::domain::foundation::Percentage;
    use chrono::NaiveDate;

    fn plan(id: u64) -> ActionPlan {
        ActionPlan {
            id: ActionPlanId::new(id),
            offense: "Preço médio abaixo".to_string(),
            cause: "Descontos excessivos".to_string(),
            action: "Revisar política de descontos".to_string(),
            execution_plan: "Aprovação do gerente".to_string(),
            owner: "pedro-oliveira".to_string(),
            start_date: NaiveDate::from_ymd_opt(2024, 10, 1).unwrap(),
            deadline: NaiveDate::from_ymd_opt(2024, 12, 1).unwrap(),
            status: PlanStatus::ToStart,
            progress: Percentage::ZERO,
        }
    }

    #[tokio::test]
    async fn ids_start_at_one_and_increase() {
        let repo = InMemoryActionPlanRepository::new();
        assert_eq!(repo.next_id().await.unwrap(), ActionPlanId::new(1));
        assert_eq!(repo.next_id().await.unwrap(), ActionPlanId::new(2));
    }

    #[tokio::test]
    async fn seeded_repository_continues_after_highest_id() {
        let repo = InMemoryActionPlanRepository::with_plans(vec![plan(1), plan(3)]);
        assert_eq!(repo.next_id().await.unwrap(), ActionPlanId::new(4));
    }

    #[tokio::test]
    async fn deleted_ids_are_not_reused() {
        let repo = InMemoryActionPlanRepository::new();
        let id = repo.next_id().await.unwrap();
        repo.save(&plan(id.value())).await.unwrap();
        repo.delete(id).await.unwrap();

        assert_ne!(repo.next_id().await.unwrap(), id);
    }

    #[tokio::test]
    async fn save_rejects_duplicate_id() {
        let repo = InMemoryActionPlanRepository::new();
        repo.save(&plan(1)).await.unwrap();

        let err = repo.save(&plan(1)).await.unwrap_err();
        assert_eq!(err.code, ErrorCode::DuplicateActionPlan);
    }

    #[tokio::test]
    async fn save_of_unreserved_id_advances_counter() {
        let repo = InMemoryActionPlanRepository::new();
        repo.save(&plan(5)).await.unwrap();
        assert_eq!(repo.next_id().await.unwrap(), ActionPlanId::new(6));
    }

    #[tokio::test]
    async fn update_replaces_stored_plan() {
        let repo = InMemoryActionPlanRepository::with_plans(vec![plan(1)]);
        let mut changed = plan(1);
        changed.status = PlanStatus::InProgress;

        repo.update(&changed).await.unwrap();

        let stored = repo.find_by_id(ActionPlanId::new(1)).await.unwrap().unwrap();
        assert_eq!(stored.status, PlanStatus::InProgress);
    }

    #[tokio::test]
    async fn update_of_missing_plan_is_not_found() {
        let repo = InMemoryActionPlanRepository::new();
        let err = repo.update(&plan(9)).await.unwrap_err();
        assert_eq!(err.code, ErrorCode::ActionPlanNotFound);
    }

    #[tokio::test]
    async fn find_all_is_ordered_by_id() {
        let repo = InMemoryActionPlanRepository::with_plans(vec![plan(3), plan(1), plan(2)]);
        let ids: Vec<u64> = repo
            .find_all()
            .await
            .unwrap()
            .iter()
            .map(|p| p.id.value())
            .collect();
        assert_eq!(ids, vec![1, 2, 3]);
    }

    #[tokio::test]
    async fn delete_of_missing_plan_is_not_found() {
        let repo = InMemoryActionPlanRepository::new();
        let err = repo.delete(ActionPlanId::new(1)).await.unwrap_err();
        assert_eq!(err.code, ErrorCode::ActionPlanNotFound);
        assert!(repo.is_empty().await);
    }
}
