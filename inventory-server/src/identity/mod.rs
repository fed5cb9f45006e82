//! Actor identity extraction
//!
//! Authorization is enforced by an upstream collaborator before requests
//! reach this server; handlers only need the actor identity for audit
//! attribution. The extractor checks request extensions first (populated by
//! whatever auth middleware fronts the deployment) and falls back to the
//! `x-actor-id` / `x-actor-role` headers.

use axum::{extract::FromRequestParts, http::request::Parts};
use shared::Actor;

use crate::security_log;
use crate::utils::AppError;

const ACTOR_ID_HEADER: &str = "x-actor-id";
const ACTOR_ROLE_HEADER: &str = "x-actor-role";

/// Extractor wrapper around [`Actor`] for mutating handlers
#[derive(Debug, Clone)]
pub struct CurrentActor(pub Actor);

impl<S> FromRequestParts<S> for CurrentActor
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        // Check if already extracted (from middleware)
        if let Some(actor) = parts.extensions.get::<Actor>() {
            return Ok(CurrentActor(actor.clone()));
        }

        let id_header = parts
            .headers
            .get(ACTOR_ID_HEADER)
            .and_then(|h| h.to_str().ok());

        let Some(raw_id) = id_header else {
            security_log!("WARN", "actor_missing", uri = format!("{:?}", parts.uri));
            return Err(AppError::unauthorized());
        };

        let id: i64 = raw_id
            .parse()
            .map_err(|_| AppError::invalid(format!("Malformed {} header", ACTOR_ID_HEADER)))?;

        let role = parts
            .headers
            .get(ACTOR_ROLE_HEADER)
            .and_then(|h| h.to_str().ok())
            .unwrap_or("staff")
            .to_string();

        let actor = Actor::new(id, role);

        // Store in extensions for potential reuse
        parts.extensions.insert(actor.clone());

        Ok(CurrentActor(actor))
    }
}
