use crate::router::full;
use crate::service::InternalResponse;
use http_body_util::combinators::BoxBody;
use hyper::body::Bytes;
use hyper::{Response, StatusCode};
use std::error;
use tracing::instrument;

const CONTENT_TYPE_HEADER_NAME: &str = "content-type";
const JSON_CONTENT_TYPE: &str = "application/json";

pub type ResultResponse =
    Result<Response<BoxBody<Bytes, hyper::Error>>, Box<dyn error::Error + Send + Sync>>;

#[instrument(skip(response))]
pub fn transform(response: InternalResponse) -> ResultResponse {
    match response {
        Ok(batch) => {
            let body = serde_json::to_string(&batch)?;
            Ok(Response::builder()
                .status(StatusCode::OK)
                .header(CONTENT_TYPE_HEADER_NAME, JSON_CONTENT_TYPE)
                .body(full(body))?)
        }
        Err(e) => Ok(e.handle()?),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::error::ErrorResponse::{BucketListError, MissingFolderParam};
    use crate::domain::{ThumbnailBatch, ThumbnailKind, ThumbnailRecord};
    use http_body_util::BodyExt;

    async fn body_string(response: Response<BoxBody<Bytes, hyper::Error>>) -> String {
        let collected = response.into_body().collect().await.unwrap();
        String::from_utf8(collected.to_bytes().to_vec()).unwrap()
    }

    #[tokio::test]
    async fn success_is_json_with_original_shape() {
        let batch = ThumbnailBatch {
            success: true,
            thumbnails: vec![ThumbnailRecord {
                original: "photos/a.png".to_string(),
                thumbnail: "photos_thumb/a.jpg".to_string(),
                kind: ThumbnailKind::Image,
            }],
            thumb_folder: "photos_thumb".to_string(),
        };

        let response = transform(Ok(batch)).unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            response.headers().get(CONTENT_TYPE_HEADER_NAME).unwrap(),
            JSON_CONTENT_TYPE
        );

        let json: serde_json::Value = serde_json::from_str(&body_string(response).await).unwrap();
        assert_eq!(json["success"], true);
        assert_eq!(json["thumbFolder"], "photos_thumb");
        assert_eq!(json["thumbnails"][0]["type"], "image");
    }

    #[tokio::test]
    async fn missing_param_is_bad_request() {
        let response = transform(Err(MissingFolderParam {})).unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(body_string(response).await, "Missing folder parameter");
    }

    #[tokio::test]
    async fn structural_failure_is_internal_server_error() {
        let response = transform(Err(BucketListError { prefix: "photos/".to_string() })).unwrap();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body_string(response).await, "Internal Server Error");
    }
}
