use std::error;

use crate::response_handler::transform;
use crate::service::process_generate_thumb;
use crate::BUCKET_REPOSITORY;
use http_body_util::{combinators::BoxBody, BodyExt, Full};
use hyper::body::Bytes;
use hyper::{Method, Request, Response, StatusCode};
use tracing::instrument;

#[instrument(skip(req))]
pub async fn router(
    req: Request<hyper::body::Incoming>,
) -> Result<Response<BoxBody<Bytes, hyper::Error>>, Box<dyn error::Error + Send + Sync>> {
    match (req.method(), req.uri().path()) {
        (&Method::GET, "/private/status") =>
            Ok(Response::new(full("OK"))),
        (&Method::GET, "/") => {
            let no_content = Response::builder().status(StatusCode::NO_CONTENT).body(full(Bytes::new()))?;
            Ok(no_content)
        }
        // Any method: the batch is idempotent for already-thumbnailed entries.
        (_, "/generate-thumb") => {
            let resp = transform(process_generate_thumb(req.uri().query(), &*BUCKET_REPOSITORY).await);
            resp
        }
        _ => {
            let mut not_found = Response::new(full("Endpoint not found"));
            *not_found.status_mut() = StatusCode::NOT_FOUND;
            Ok(not_found)
        }
    }
}

pub fn full<T: Into<Bytes>>(chunk: T) -> BoxBody<Bytes, hyper::Error> {
    Full::new(chunk.into())
        .map_err(|never| match never {})
        .boxed()
}
