use std::future::{Ready, ready};
use std::task::{Context, Poll};

use actix_service::{Service, Transform};
use actix_web::body::EitherBody;
use actix_web::dev::{ServiceRequest, ServiceResponse};
use actix_web::http::header;
use actix_web::{Error, ResponseError};
use futures_util::future::LocalBoxFuture;

use crate::domain::error::ApiError;

const JSON_MIME: &str = "application/json";

/// True if the `Accept` header is absent or any listed media range covers
/// `application/json`. Range parameters (`;q=...`) are ignored.
fn accepts_json(req: &ServiceRequest) -> bool {
    let Some(value) = req.headers().get(header::ACCEPT) else {
        return true;
    };
    let Ok(value) = value.to_str() else {
        return false;
    };

    value.split(',').any(|range| {
        let media = range.split(';').next().unwrap_or("").trim();
        media.eq_ignore_ascii_case(JSON_MIME)
            || media.eq_ignore_ascii_case("application/*")
            || media == "*/*"
    })
}

/// True if the request declares an `application/json` payload.
fn declares_json(req: &ServiceRequest) -> bool {
    req.headers()
        .get(header::CONTENT_TYPE)
        .and_then(|value| value.to_str().ok())
        .map(|value| {
            value
                .split(';')
                .next()
                .unwrap_or("")
                .trim()
                .eq_ignore_ascii_case(JSON_MIME)
        })
        .unwrap_or(false)
}

/// Rejects requests whose `Accept` header rules out JSON before any handler
/// logic runs. The 406 body is itself JSON, whatever the client asked for.
pub struct AcceptJson;

impl<S, B> Transform<S, ServiceRequest> for AcceptJson
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type InitError = ();
    type Transform = AcceptJsonService<S>;
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(AcceptJsonService { service }))
    }
}

pub struct AcceptJsonService<S> {
    service: S,
}

impl<S, B> Service<ServiceRequest> for AcceptJsonService<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type Future = LocalBoxFuture<'static, Result<Self::Response, Self::Error>>;

    fn poll_ready(&self, cx: &mut Context<'_>) -> Poll<Result<(), Self::Error>> {
        self.service.poll_ready(cx)
    }

    fn call(&self, req: ServiceRequest) -> Self::Future {
        if !accepts_json(&req) {
            let res = req
                .into_response(ApiError::NotAcceptable.error_response())
                .map_into_right_body();
            return Box::pin(async move { Ok(res) });
        }

        let fut = self.service.call(req);
        Box::pin(async move {
            let res = fut.await?;
            Ok(res.map_into_left_body())
        })
    }
}

/// Rejects write requests whose declared payload type is not JSON. Applied
/// to the create and update routes only.
pub struct RequireJson;

impl<S, B> Transform<S, ServiceRequest> for RequireJson
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type InitError = ();
    type Transform = RequireJsonService<S>;
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(RequireJsonService { service }))
    }
}

pub struct RequireJsonService<S> {
    service: S,
}

impl<S, B> Service<ServiceRequest> for RequireJsonService<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type Future = LocalBoxFuture<'static, Result<Self::Response, Self::Error>>;

    fn poll_ready(&self, cx: &mut Context<'_>) -> Poll<Result<(), Self::Error>> {
        self.service.poll_ready(cx)
    }

    fn call(&self, req: ServiceRequest) -> Self::Future {
        if !declares_json(&req) {
            let res = req
                .into_response(ApiError::UnsupportedMediaType.error_response())
                .map_into_right_body();
            return Box::pin(async move { Ok(res) });
        }

        let fut = self.service.call(req);
        Box::pin(async move {
            let res = fut.await?;
            Ok(res.map_into_left_body())
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::test::TestRequest;

    fn with_accept(value: &str) -> ServiceRequest {
        TestRequest::default()
            .insert_header((header::ACCEPT, value))
            .to_srv_request()
    }

    #[test]
    fn missing_accept_header_passes() {
        assert!(accepts_json(&TestRequest::default().to_srv_request()));
    }

    #[test]
    fn json_and_wildcard_ranges_pass() {
        assert!(accepts_json(&with_accept("application/json")));
        assert!(accepts_json(&with_accept("application/*")));
        assert!(accepts_json(&with_accept("*/*")));
        assert!(accepts_json(&with_accept("text/html, application/json;q=0.9")));
    }

    #[test]
    fn non_json_ranges_fail() {
        assert!(!accepts_json(&with_accept("application/xml")));
        assert!(!accepts_json(&with_accept("text/html, text/plain")));
    }

    #[test]
    fn content_type_must_be_json() {
        let req = TestRequest::default()
            .insert_header((header::CONTENT_TYPE, "application/json; charset=utf-8"))
            .to_srv_request();
        assert!(declares_json(&req));

        let req = TestRequest::default()
            .insert_header((header::CONTENT_TYPE, "text/plain"))
            .to_srv_request();
        assert!(!declares_json(&req));

        assert!(!declares_json(&TestRequest::default().to_srv_request()));
    }
}
