//! Claim and question handlers

use axum::{
    extract::State,
    http::StatusCode,
    Json,
};

use core_kernel::{ClaimRequestId, QuestionId};
use domain_claims::{ContactExchange, VerificationQuestion};

use crate::extract::{AppJson, AppPath};
use crate::dto::claims::{AnswerQuestionRequest, AskQuestionRequest, RejectResponse};
use crate::handlers::validated;
use crate::{error::ApiError, AppState};

/// Verifies a claim and returns the exchanged contact details
pub async fn verify_claim(
    State(state): State<AppState>,
    AppPath(id): AppPath<ClaimRequestId>,
) -> Result<Json<ContactExchange>, ApiError> {
    Ok(Json(state.engine.verify_claim(id)?))
}

/// Rejects a claim
pub async fn reject_claim(
    State(state): State<AppState>,
    AppPath(id): AppPath<ClaimRequestId>,
) -> Result<Json<RejectResponse>, ApiError> {
    Ok(Json(state.engine.reject_claim(id)?.into()))
}

/// Sends a verification question to the claimant
pub async fn ask_question(
    State(state): State<AppState>,
    AppPath(id): AppPath<ClaimRequestId>,
    AppJson(request): AppJson<AskQuestionRequest>,
) -> Result<(StatusCode, Json<VerificationQuestion>), ApiError> {
    let request = validated(request)?;
    let question = state.engine.ask_question(id, request.question)?;
    Ok((StatusCode::CREATED, Json(question)))
}

/// Lists the questions on a claim
pub async fn list_questions(
    State(state): State<AppState>,
    AppPath(id): AppPath<ClaimRequestId>,
) -> Result<Json<Vec<VerificationQuestion>>, ApiError> {
    Ok(Json(state.engine.questions_for(id)?))
}

/// Records the claimant's answer
pub async fn answer_question(
    State(state): State<AppState>,
    AppPath(id): AppPath<QuestionId>,
    AppJson(request): AppJson<AnswerQuestionRequest>,
) -> Result<Json<VerificationQuestion>, ApiError> {
    let request = validated(request)?;
    Ok(Json(state.engine.answer_question(id, request.answer)?))
}
