//! Status request creation and the approve/reject transition.

use clinic_core::error::CoreError;
use clinic_core::patient::{validate_status, STATUS_ALTA};
use clinic_core::requests::{
    normalize_admin_response, validate_admin_response, validate_decision, validate_reason,
    validate_request_type, Decision,
};
use clinic_core::types::DbId;
use sqlx::PgPool;

use super::{events, resolve_professional, WorkflowResult};
use crate::models::status_request::{CreateStatusRequest, NewStatusRequest, StatusRequest};
use crate::repositories::{ActivityRepo, PatientRepo, StatusRequestRepo};

/// File a new `pending` status request against a patient.
///
/// The patient row is left untouched. `current_status` defaults to the
/// patient's status and `professional_id` to the assigned professional;
/// both name columns are snapshots taken now. Requesting `alta` appends a
/// `discharge_requested` activity.
pub async fn create(pool: &PgPool, input: &CreateStatusRequest) -> WorkflowResult<StatusRequest> {
    validate_reason(&input.reason)?;
    validate_status(&input.requested_status)?;
    if let Some(current) = &input.current_status {
        validate_status(current)?;
    }
    if let Some(request_type) = &input.request_type {
        validate_request_type(request_type)?;
    }

    let patient = PatientRepo::find_by_id(pool, input.patient_id)
        .await?
        .ok_or(CoreError::NotFound {
            entity: "patient",
            id: input.patient_id,
        })?;
    let professional =
        resolve_professional(pool, input.professional_id.or(patient.professional_id)).await?;

    let new_request = NewStatusRequest {
        patient_id: patient.id,
        patient_name: patient.name,
        professional_id: professional.as_ref().map(|p| p.id),
        professional_name: professional.map(|p| p.name),
        current_status: input.current_status.clone().unwrap_or(patient.status),
        requested_status: input.requested_status.clone(),
        reason: input.reason.trim().to_string(),
        request_type: input.request_type.clone(),
    };
    let request = StatusRequestRepo::create(pool, &new_request).await?;

    tracing::info!(
        request_id = request.id,
        patient_id = request.patient_id,
        requested_status = %request.requested_status,
        "Status request created",
    );

    if request.requested_status == STATUS_ALTA {
        ActivityRepo::record(pool, &events::discharge_requested(&request)).await;
    }

    Ok(request)
}

/// Apply a decision to a pending status request.
///
/// The request row is locked for the duration of the transaction. Approval
/// sets the patient's status in the same transaction; both writes commit
/// together or not at all. The decision activity is appended after commit.
pub async fn decide(
    pool: &PgPool,
    request_id: DbId,
    decision: Decision,
    admin_response: Option<&str>,
    decided_by: Option<DbId>,
) -> WorkflowResult<StatusRequest> {
    validate_admin_response(admin_response)?;
    let admin_response = normalize_admin_response(admin_response);

    let mut tx = pool.begin().await?;

    let request = StatusRequestRepo::find_for_update(&mut tx, request_id)
        .await?
        .ok_or(CoreError::NotFound {
            entity: "status_request",
            id: request_id,
        })?;
    validate_decision(&request.status, decision)?;

    let decided = StatusRequestRepo::mark_decided(
        &mut tx,
        request_id,
        decision.as_str(),
        admin_response.as_deref(),
        decided_by,
    )
    .await?;

    if decision.is_approval()
        && !PatientRepo::set_status(&mut tx, request.patient_id, &request.requested_status).await?
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
        "Status request decided",
    );

    ActivityRepo::record(pool, &events::status_request_decided(&decided, decision)).await;

    Ok(decided)
}
