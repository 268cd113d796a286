//! Frequency request creation and the approve/reject transition.

use clinic_core::error::CoreError;
use clinic_core::patient::validate_frequency;
use clinic_core::requests::{
    normalize_admin_response, validate_admin_response, validate_decision, validate_reason,
    Decision,
};
use clinic_core::types::DbId;
use sqlx::PgPool;

use super::{events, resolve_professional, WorkflowResult};
use crate::models::frequency_request::{
    CreateFrequencyRequest, FrequencyRequest, NewFrequencyRequest,
};
use crate::repositories::{ActivityRepo, FrequencyRequestRepo, PatientRepo};

/// File a new `pending` frequency request against a patient.
///
/// A frequency request must name a professional: either the one given or
/// the patient's assigned professional.
pub async fn create(
    pool: &PgPool,
    input: &CreateFrequencyRequest,
) -> WorkflowResult<FrequencyRequest> {
    validate_reason(&input.reason)?;
    validate_frequency(&input.requested_frequency)?;
    if let Some(current) = &input.current_frequency {
        validate_frequency(current)?;
    }

    let patient = PatientRepo::find_by_id(pool, input.patient_id)
        .await?
        .ok_or(CoreError::NotFound {
            entity: "patient",
            id: input.patient_id,
        })?;
    let professional =
        resolve_professional(pool, input.professional_id.or(patient.professional_id))
            .await?
            .ok_or_else(|| {
                CoreError::Validation("A frequency request requires a professional".into())
            })?;

    let new_request = NewFrequencyRequest {
        patient_id: patient.id,
        patient_name: patient.name,
        professional_id: Some(professional.id),
        professional_name: professional.name,
        current_frequency: input
            .current_frequency
            .clone()
            .or(patient.session_frequency),
        requested_frequency: input.requested_frequency.clone(),
        reason: input.reason.trim().to_string(),
    };
    let request = FrequencyRequestRepo::create(pool, &new_request).await?;

    tracing::info!(
        request_id = request.id,
        patient_id = request.patient_id,
        requested_frequency = %request.requested_frequency,
        "Frequency request created",
    );

    Ok(request)
}

/// Apply a decision to a pending frequency request.
///
/// Approval sets the patient's session frequency in the same transaction.
pub async fn decide(
    pool: &PgPool,
    request_id: DbId,
    decision: Decision,
    admin_response: Option<&str>,
    decided_by: Option<DbId>,
) -> WorkflowResult<FrequencyRequest> {
    validate_admin_response(admin_response)?;
    let admin_response = normalize_admin_response(admin_response);

    let mut tx = pool.begin().await?;

    let request = FrequencyRequestRepo::find_for_update(&mut tx, request_id)
        .await?
        .ok_or(CoreError::NotFound {
            entity: "frequency_request",
            id: request_id,
        })?;
    validate_decision(&request.status, decision)?;

    let decided = FrequencyRequestRepo::mark_decided(
        &mut tx,
        request_id,
        decision.as_str(),
        admin_response.as_deref(),
        decided_by,
    )
    .await?;

    if decision.is_approval()
        && !PatientRepo::set_session_frequency(
            &mut tx,
            request.patient_id,
            &request.requested_frequency,
        )
        .await?
    {
        return Err(CoreError::NotFound {
            entity: "patient",
            id: request.patient_id,
        }
        .into());
    }

    tx.commit().await?;

    tracing::info!(
        request_id,
        patient_id = decided.patient_id,
        decision = decision.as_str(),
        decided_by = ?decided_by,
        "Frequency request decided",
    );

    ActivityRepo::record(pool, &events::frequency_request_decided(&decided, decision)).await;

    Ok(decided)
}
