//! Form body extractor for `/refine` that never rejects a submission.
//!
//! Accepts `application/x-www-form-urlencoded` (or no content type) and `multipart/form-data`.
//! Pairs are folded in order into a [`PromptForm`], so a repeated field keeps its last value
//! and unknown fields are ignored. An unreadable body yields whatever fields were read before
//! the error.

use axum::{
    async_trait,
    body::Bytes,
    extract::{FromRequest, Multipart, Request},
    http::header,
};
use std::convert::Infallible;
use tracing::warn;

use refinery::PromptForm;

/// The submitted form, folded last-wins.
pub(crate) struct SubmittedForm(pub(crate) PromptForm);

fn is_multipart(req: &Request) -> bool {
    req.headers()
        .get(header::CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .map(|ct| ct.trim_start().to_ascii_lowercase().starts_with("multipart/form-data"))
        .unwrap_or(false)
}

async fn read_multipart(mut multipart: Multipart) -> PromptForm {
    let mut form = PromptForm::default();
    loop {
        match multipart.next_field().await {
            Ok(Some(field)) => {
                let Some(name) = field.name().map(str::to_owned) else {
                    continue;
                };
                match field.text().await {
                    Ok(value) => form.set(&name, value),
                    Err(e) => {
                        warn!(field = %name, "multipart field unreadable: {}", e);
                        break;
                    }
                }
            }
            Ok(None) => break,
            Err(e) => {
                warn!("multipart body unreadable: {}", e);
                break;
            }
        }
    }
    form
}

#[async_trait]
impl<S> FromRequest<S> for SubmittedForm
where
    S: Send + Sync,
{
    type Rejection = Infallible;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        if is_multipart(&req) {
            return Ok(match Multipart::from_request(req, state).await {
                Ok(multipart) => Self(read_multipart(multipart).await),
                Err(e) => {
                    warn!("multipart body rejected: {}", e);
                    Self(PromptForm::default())
                }
            });
        }
        let form = match Bytes::from_request(req, state).await {
            Ok(body) => url::form_urlencoded::parse(&body).collect(),
            Err(e) => {
                warn!("form body unreadable: {}", e);
                PromptForm::default()
            }
        };
        Ok(Self(form))
    }
}
