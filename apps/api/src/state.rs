use std::sync::Arc;

use crate::catalog::Catalog;
use crate::coaching::{AnswerScorer, IdeaGenerator, QuestionGenerator};
use crate::profile::session::{IdentityProvider, SessionRegistry};
use crate::profile::store::ProfileStore;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    /// Static reference data, validated at startup and never mutated.
    pub catalog: Arc<Catalog>,
    /// Live profile records, one per active session.
    pub sessions: SessionRegistry,
    /// Persistence gateway. Default: `PgProfileStore`.
    pub store: Arc<dyn ProfileStore>,
    /// Session identity issuance. Default: `AnonymousIdentity`.
    pub identity: Arc<dyn IdentityProvider>,
    /// Pluggable coaching backends. Defaults are fixed-table implementations;
    /// swap for model-backed ones without touching handlers.
    pub question_generator: Arc<dyn QuestionGenerator>,
    pub answer_scorer: Arc<dyn AnswerScorer>,
    pub idea_generator: Arc<dyn IdeaGenerator>,
}
