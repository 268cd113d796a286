//! Builders for the activities emitted by write paths.

use clinic_core::activity::{
    frequency_decision_type, status_decision_type, ACTIVITY_APPOINTMENT_COMPLETED,
    ACTIVITY_DISCHARGE_REQUESTED, ACTIVITY_NEW_PATIENT, ACTIVITY_POST_PUBLISHED,
};
use clinic_core::requests::Decision;
use serde_json::json;

use crate::models::activity::CreateActivity;
use crate::models::appointment::Appointment;
use crate::models::frequency_request::FrequencyRequest;
use crate::models::patient::Patient;
use crate::models::post::Post;
use crate::models::status_request::StatusRequest;

pub fn new_patient(patient: &Patient) -> CreateActivity {
    CreateActivity {
        activity_type: ACTIVITY_NEW_PATIENT.to_string(),
        title: "New patient".to_string(),
        description: format!("{} was registered", patient.name),
        metadata: Some(json!({ "patientName": patient.name })),
        patient_id: Some(patient.id),
        professional_id: patient.professional_id,
    }
}

pub fn post_published(post: &Post) -> CreateActivity {
    CreateActivity {
        activity_type: ACTIVITY_POST_PUBLISHED.to_string(),
        title: "Post published".to_string(),
        description: post.title.clone(),
        metadata: Some(json!({ "postId": post.id, "slug": post.slug })),
        patient_id: None,
        professional_id: post.author_id,
    }
}

pub fn appointment_completed(appointment: &Appointment) -> CreateActivity {
    let patient_name = appointment.patient_name.as_deref().unwrap_or_default();
    CreateActivity {
        activity_type: ACTIVITY_APPOINTMENT_COMPLETED.to_string(),
        title: "Appointment completed".to_string(),
        description: format!("Session with {patient_name} was completed"),
        metadata: Some(json!({
            "appointmentId": appointment.id,
            "scheduledAt": appointment.scheduled_at,
        })),
        patient_id: Some(appointment.patient_id),
        professional_id: appointment.professional_id,
    }
}

pub fn discharge_requested(request: &StatusRequest) -> CreateActivity {
    CreateActivity {
        activity_type: ACTIVITY_DISCHARGE_REQUESTED.to_string(),
        title: "Discharge requested".to_string(),
        description: format!("Discharge requested for {}", request.patient_name),
        metadata: Some(json!({
            "requestId": request.id,
            "reason": request.reason,
        })),
        patient_id: Some(request.patient_id),
        professional_id: request.professional_id,
    }
}

/// Activity for a decided status request.
pub fn status_request_decided(request: &StatusRequest, decision: Decision) -> CreateActivity {
    let verb = decision.as_str();
    CreateActivity {
        activity_type: status_decision_type(decision).to_string(),
        title: format!("Status request {verb}"),
        description: format!(
            "{}: {} -> {} {verb}",
            request.patient_name, request.current_status, request.requested_status
        ),
        metadata: Some(json!({
            "requestId": request.id,
            "currentStatus": request.current_status,
            "requestedStatus": request.requested_status,
            "decidedBy": request.decided_by,
        })),
        patient_id: Some(request.patient_id),
        professional_id: request.professional_id,
    }
}

/// Activity for a decided frequency request.
pub fn frequency_request_decided(request: &FrequencyRequest, decision: Decision) -> CreateActivity {
    let verb = decision.as_str();
    let current = request.current_frequency.as_deref().unwrap_or("none");
    CreateActivity {
        activity_type: frequency_decision_type(decision).to_string(),
        title: format!("Frequency request {verb}"),
        description: format!(
            "{}: {current} -> {} {verb}",
            request.patient_name, request.requested_frequency
        ),
        metadata: Some(json!({
            "requestId": request.id,
            "currentFrequency": request.current_frequency,
            "requestedFrequency": request.requested_frequency,
            "decidedBy": request.decided_by,
        })),
        patient_id: Some(request.patient_id),
        professional_id: request.professional_id,
    }
}
