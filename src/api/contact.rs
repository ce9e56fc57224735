// Contact form endpoints

use crate::api::routes::AppState;
use crate::domain::ContactForm;
use crate::email::{templates, EmailMessage};
use crate::errors::{AppError, Result};
use crate::observability::MetricsRecorder;
use axum::{
    extract::{rejection::JsonRejection, State},
    Json,
};
use serde::Serialize;

// ============================================================================
// Request/Response Types
// ============================================================================

#[derive(Debug, Serialize)]
pub struct SubmitResponse {
    pub success: bool,
    pub message: String,
}

#[derive(Debug, Serialize)]
pub struct InfoResponse {
    pub success: bool,
    pub data: ContactInfo,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactInfo {
    pub address: Address,
    pub phone: String,
    pub email: String,
    pub business_hours: BusinessHours,
    pub response_time: String,
    pub support_availability: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Address {
    pub street: String,
    pub suite: String,
    pub city: String,
    pub state: String,
    pub zip_code: String,
    pub country: String,
}

#[derive(Debug, Serialize)]
pub struct BusinessHours {
    pub monday: String,
    pub tuesday: String,
    pub wednesday: String,
    pub thursday: String,
    pub friday: String,
    pub saturday: String,
    pub sunday: String,
}

// ============================================================================
// Handlers
// ============================================================================

/// POST /api/contact/submit
///
/// Validate a contact form submission and dispatch the notification and
/// confirmation emails. Sits behind the rate limiting middleware.
pub async fn submit(
    State(state): State<AppState>,
    payload: std::result::Result<Json<ContactForm>, JsonRejection>,
) -> Result<Json<SubmitResponse>> {
    let Json(form) = payload.map_err(|rejection| AppError::BadRequest(rejection.body_text()))?;

    if let Err(errors) = form.validate() {
        MetricsRecorder::record_contact_submission("invalid");
        return Err(AppError::Validation(errors));
    }

    let form = form.sanitized();
    let submitted_at = chrono::Utc::now();

    let notification = templates::admin_notification(&form, submitted_at, &state.config.email.admin);
    dispatch(&state, "admin_notification", &notification).await?;

    let confirmation = templates::user_confirmation(&form);
    dispatch(&state, "user_confirmation", &confirmation).await?;

    let preview: String = form.message.chars().take(50).collect();
    tracing::info!(
        name = %form.name,
        email = %form.email,
        message = %preview,
        "New contact form submission"
    );
    MetricsRecorder::record_contact_submission("accepted");

    Ok(Json(SubmitResponse {
        success: true,
        message: "Thank you for your message! We will get back to you within 24 hours.".to_string(),
    }))
}

/// GET /api/contact/info
///
/// Static company contact information for the marketing site
pub async fn info() -> Json<InfoResponse> {
    Json(InfoResponse {
        success: true,
        data: company_contact_info(),
    })
}

async fn dispatch(state: &AppState, template: &str, message: &EmailMessage) -> Result<()> {
    match state.mailer.send(message).await {
        Ok(()) => {
            MetricsRecorder::record_email(template, "success");
            Ok(())
        }
        Err(e) => {
            MetricsRecorder::record_email(template, "failure");
            MetricsRecorder::record_contact_submission("email_failure");
            Err(e)
        }
    }
}

fn company_contact_info() -> ContactInfo {
    ContactInfo {
        address: Address {
            street: "1234 Innovation Hub".to_string(),
            suite: "Suite 500, Tech District".to_string(),
            city: "Hydrabad".to_string(),
            state: "CA".to_string(),
            zip_code: "94105".to_string(),
            country: "India".to_string(),
        },
        phone: "+91 9988135799".to_string(),
        email: "hello@pitchzy.com".to_string(),
        business_hours: BusinessHours {
            monday: "9:00 AM - 6:00 PM PST".to_string(),
            tuesday: "9:00 AM - 6:00 PM PST".to_string(),
            wednesday: "9:00 AM - 6:00 PM PST".to_string(),
            thursday: "9:00 AM - 6:00 PM PST".to_string(),
            friday: "9:00 AM - 6:00 PM PST".to_string(),
            saturday: "10:00 AM - 4:00 PM PST".to_string(),
            sunday: "Closed".to_string(),
        },
        response_time: "24 hours".to_string(),
        support_availability: "24/7".to_string(),
    }
}
