use crate::domain::error::ErrorResponse::{
    BucketListError, BucketReadError, BucketWriteError, ImageDecodeError, ImageEncodeError,
    ImageResizeError, MissingFolderParam,
};
use crate::router::full;
use http_body_util::combinators::BoxBody;
use hyper::body::Bytes;
use hyper::{Response, StatusCode};
use std::error;
use std::fmt::{Display, Formatter};

#[derive(Debug)]
pub enum ErrorResponse
where
    ErrorResponse: error::Error,
{
    MissingFolderParam {},
    BucketListError { prefix: String },
    BucketReadError { key: String },
    BucketWriteError { key: String },
    ImageDecodeError { key: String },
    ImageResizeError { key: String },
    ImageEncodeError { key: String },
}

impl Display for ErrorResponse {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            MissingFolderParam {} => write!(f, "Missing folder parameter."),
            BucketListError { prefix } => write!(f, "Bucket listing failed for {prefix}."),
            BucketReadError { key } => write!(f, "Object could not be read at {key}."),
            BucketWriteError { key } => write!(f, "Object could not be written at {key}."),
            ImageDecodeError { key } => write!(f, "Image could not be decoded at {key}."),
            ImageResizeError { key } => write!(f, "Image could not be resized at {key}."),
            ImageEncodeError { key } => write!(f, "Image could not be encoded at {key}."),
        }
    }
}

impl ErrorResponse {
    pub fn handle(&self) -> hyper::http::Result<Response<BoxBody<Bytes, hyper::Error>>> {
        match self {
            MissingFolderParam {} => error_response(
                StatusCode::BAD_REQUEST,
                String::from("Missing folder parameter"),
            ),
            _ => error_response(
                StatusCode::INTERNAL_SERVER_ERROR,
                String::from("Internal Server Error"),
            ),
        }
    }
}

impl error::Error for ErrorResponse {}

fn error_response(
    status_code: StatusCode,
    message: String,
) -> hyper::http::Result<Response<BoxBody<Bytes, hyper::Error>>> {
    Response::builder().status(status_code).body(full(message))
}
