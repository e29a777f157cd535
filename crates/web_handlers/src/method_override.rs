use actix_web::{
    Error,
    dev::{Service, ServiceRequest, ServiceResponse, Transform, forward_ready},
    http::Method,
    web,
};
use std::collections::HashMap;
use std::future::{Ready, ready};

/// Query parameter naming the method an HTML form really means
pub const METHOD_OVERRIDE_PARAM: &str = "_method";

/// Middleware that lets HTML forms reach `PUT` and `DELETE` routes.
///
/// Browsers only submit `GET` and `POST`, so a `POST` to
/// `/campgrounds/{id}?_method=PUT` is re-dispatched as `PUT`. It has to wrap
/// the whole app so the rewrite happens before routing.
pub struct MethodOverride;

impl<S, B> Transform<S, ServiceRequest> for MethodOverride
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = Error;
    type InitError = ();
    type Transform = MethodOverrideService<S>;
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(MethodOverrideService { service }))
    }
}

/// Service that implements the method override logic
pub struct MethodOverrideService<S> {
    service: S,
}

impl<S, B> Service<ServiceRequest> for MethodOverrideService<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = Error;
    type Future = S::Future;

    forward_ready!(service);

    fn call(&self, mut req: ServiceRequest) -> Self::Future {
        if *req.method() == Method::POST {
            if let Some(method) = override_method(req.query_string()) {
                log::debug!("Overriding POST {} as {}", req.path(), method);
                req.head_mut().method = method;
            }
        }

        self.service.call(req)
    }
}

/// Reads `_method` from a query string, accepting only methods forms cannot send
pub fn override_method(query: &str) -> Option<Method> {
    let params = web::Query::<HashMap<String, String>>::from_query(query).ok()?;
    let method = params.get(METHOD_OVERRIDE_PARAM)?;

    match method.to_ascii_uppercase().as_str() {
        "PUT" => Some(Method::PUT),
        "PATCH" => Some(Method::PATCH),
        "DELETE" => Some(Method::DELETE),
        _ => None,
    }
}
