use actix_web::dev::Payload;
use actix_web::http::header::CONTENT_TYPE;
use actix_web::web::Bytes;
use actix_web::{FromRequest, HttpRequest, ResponseError};
use campgrounds::CampgroundFields;
use futures_util::future::LocalBoxFuture;

use crate::fault::{Fault, FaultKind};
use crate::request_body::parse_body;
use crate::schema::validate_campground;

/// Validation gate for routes that write a campground.
///
/// As an extractor it runs before the handler body: the whole payload is read,
/// parsed and checked against the campground schema, and on any failure a
/// `VALIDATION_FAILED` fault is returned so the handler never runs.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidCampground(pub CampgroundFields);

impl ValidCampground {
    /// Unwraps the validated fields
    pub fn into_inner(self) -> CampgroundFields {
        self.0
    }
}

impl FromRequest for ValidCampground {
    type Error = Fault;
    type Future = LocalBoxFuture<'static, Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, payload: &mut Payload) -> Self::Future {
        let content_type = req
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|h| h.to_str().ok())
            .unwrap_or_default()
            .to_string();
        let body = Bytes::from_request(req, payload);

        Box::pin(async move {
            let bytes = body.await.map_err(|e| {
                let status = e.as_response_error().status_code();
                Fault::new(FaultKind::Unclassified, status, e.to_string())
            })?;

            let payload = parse_body(&content_type, &bytes)?;
            match validate_campground(&payload) {
                Ok(fields) => Ok(ValidCampground(fields)),
                Err(errors) => {
                    log::debug!("Rejected campground payload: {:?}", errors);
                    Err(Fault::validation_failed(errors.iter().map(|e| e.to_string())))
                }
            }
        })
    }
}
