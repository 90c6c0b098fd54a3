use std::future::Future;

use chrono::{DateTime, Utc};
use gloo_net::http::Request;
use log::{error, info};
use serde::Serialize;
use thiserror::Error;

use crate::config::EmailJsConfig;
use crate::contact::form::{ContactForm, FormError, Outcome, TemplateParams};

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum EmailError {
    #[error("could not encode request: {0}")]
    Encode(String),
    #[error("network error: {0}")]
    Network(String),
    #[error("email service answered {status}: {body}")]
    Rejected { status: u16, body: String },
}

/// Hands a filled-in template to a transactional email service.
/// One attempt per call; no retries.
#[allow(async_fn_in_trait)]
pub trait EmailSender {
    async fn send(&self, params: &TemplateParams) -> Result<(), EmailError>;
}

#[derive(Serialize)]
struct SendRequest<'a> {
    service_id: &'a str,
    template_id: &'a str,
    user_id: &'a str,
    template_params: &'a TemplateParams,
}

/// Sends through the EmailJS REST API.
#[derive(Debug, Clone, PartialEq)]
pub struct EmailJsClient {
    config: EmailJsConfig,
}

impl EmailJsClient {
    pub fn new(config: EmailJsConfig) -> Self {
        Self { config }
    }
}

impl EmailSender for EmailJsClient {
    async fn send(&self, params: &TemplateParams) -> Result<(), EmailError> {
        let body = SendRequest {
            service_id: self.config.service_id,
            template_id: self.config.template_id,
            user_id: self.config.public_key,
            template_params: params,
        };
        let request = Request::post(self.config.endpoint)
            .json(&body)
            .map_err(|e| EmailError::Encode(e.to_string()))?;
        let response = request
            .send()
            .await
            .map_err(|e| EmailError::Network(e.to_string()))?;
        if response.ok() {
            return Ok(());
        }
        let status = response.status();
        let body = response.text().await.unwrap_or_default();
        Err(EmailError::Rejected { status, body })
    }
}

/// Validates the form and, only if it may be sent, returns the future that
/// performs the single delivery attempt. Invalid forms never reach `sender`.
pub fn start_submission<S>(
    form: &ContactForm,
    sender: S,
    submitted_at: DateTime<Utc>,
) -> Result<impl Future<Output = Outcome>, FormError>
where
    S: EmailSender,
{
    let params = form.prepare(submitted_at)?;
    info!(
        "Sending contact message (subject: {}, {} chars)",
        params.subject,
        params.message.len()
    );
    Ok(async move {
        match sender.send(&params).await {
            Ok(()) => {
                info!("Contact message delivered");
                Outcome::Sent
            }
            Err(err) => {
                error!("Contact message failed: {}", err);
                Outcome::Failed
            }
        }
    })
}
