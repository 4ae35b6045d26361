//! Onboarding sessions
//!
//! One session per prospective customer: the pinned catalog snapshot
//! (inside the engine), the cart, submitted business/survey data and the
//! payment lifecycle. Sessions live in a concurrent map and are dropped
//! when the flow ends; nothing here persists across restarts except the
//! business profile, which goes through [`ProfileStore`].

use std::sync::Arc;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use dashmap::DashMap;
use shared::error::{AppError, AppResult, ErrorCode};
use shared::models::{BusinessDetails, Catalog, PaymentState, SurveyAnswers};
use uuid::Uuid;

use crate::selection::{DiscountPolicy, SelectionEngine};

/// State of one onboarding flow
#[derive(Debug, Clone)]
pub struct OnboardingSession {
    pub id: Uuid,
    pub created_at: DateTime<Utc>,
    /// Cart over the catalog snapshot pinned at session creation
    pub engine: SelectionEngine,
    pub business: Option<BusinessDetails>,
    pub survey: Option<SurveyAnswers>,
    pub payment: PaymentState,
}

impl OnboardingSession {
    fn new(catalog: Arc<Catalog>, policy: DiscountPolicy) -> Self {
        Self {
            id: Uuid::new_v4(),
            created_at: Utc::now(),
            engine: SelectionEngine::new(catalog, policy),
            business: None,
            survey: None,
            payment: PaymentState::Pending,
        }
    }

    /// Version of the catalog this session prices against
    pub fn catalog_version(&self) -> u32 {
        self.engine.catalog().version
    }

    /// Reject mutation once the session is paid history
    pub fn ensure_mutable(&self) -> AppResult<()> {
        if self.payment.is_paid() {
            return Err(AppError::new(ErrorCode::SessionAlreadyPaid));
        }
        Ok(())
    }
}

/// Concurrent session registry
#[derive(Debug, Default)]
pub struct SessionManager {
    sessions: DashMap<Uuid, OnboardingSession>,
}

impl SessionManager {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a session pinned to the given catalog snapshot
    pub fn create(&self, catalog: Arc<Catalog>, policy: DiscountPolicy) -> Uuid {
        let session = OnboardingSession::new(catalog, policy);
        let id = session.id;
        self.sessions.insert(id, session);
        tracing::info!(session_id = %id, "Onboarding session created");
        id
    }

    /// Read from a session without mutating it
    pub fn read<T>(
        &self,
        id: Uuid,
        f: impl FnOnce(&OnboardingSession) -> T,
    ) -> AppResult<T> {
        let session = self
            .sessions
            .get(&id)
            .ok_or_else(|| AppError::new(ErrorCode::SessionNotFound))?;
        Ok(f(&session))
    }

    /// Mutate a session under its map entry
    ///
    /// The closure's error leaves the session in its last valid state; the
    /// engine guarantees its operations are all-or-nothing.
    pub fn update<T>(
        &self,
        id: Uuid,
        f: impl FnOnce(&mut OnboardingSession) -> AppResult<T>,
    ) -> AppResult<T> {
        let mut session = self
            .sessions
            .get_mut(&id)
            .ok_or_else(|| AppError::new(ErrorCode::SessionNotFound))?;
        f(&mut session)
    }

    /// Drop a session; returns whether it existed
    pub fn remove(&self, id: Uuid) -> bool {
        self.sessions.remove(&id).is_some()
    }

    pub fn count(&self) -> usize {
        self.sessions.len()
    }
}

// =============================================================================
// Profile persistence seam
// =============================================================================

/// Persistent store for submitted business profiles
///
/// The onboarding flow records the profile when business details are
/// accepted; the store's internals are not the core's concern.
#[async_trait]
pub trait ProfileStore: Send + Sync {
    async fn save(&self, session_id: Uuid, details: &BusinessDetails) -> AppResult<()>;
}

/// In-memory profile store
#[derive(Debug, Default)]
pub struct InMemoryProfileStore {
    profiles: DashMap<Uuid, BusinessDetails>,
}

impl InMemoryProfileStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, session_id: Uuid) -> Option<BusinessDetails> {
        self.profiles.get(&session_id).map(|p| p.value().clone())
    }

    pub fn count(&self) -> usize {
        self.profiles.len()
    }
}

#[async_trait]
impl ProfileStore for InMemoryProfileStore {
    async fn save(&self, session_id: Uuid, details: &BusinessDetails) -> AppResult<()> {
        self.profiles.insert(session_id, details.clone());
        tracing::debug!(session_id = %session_id, "Business profile recorded");
        Ok(())
    }
}
