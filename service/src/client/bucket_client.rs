use lazy_static::lazy_static;
use serde::Deserialize;
use tracing::info;

const STORAGE_API_URL: &str = "https://storage.googleapis.com";
const BUCKET_NAME: &str = "media-store_europe-west1";

lazy_static! {
    static ref BUCKET_CLIENT: reqwest::Client = bucket_client();
}

#[derive(Debug, Deserialize)]
pub struct ListedObject {
    pub name: String,
}

#[derive(Debug, Deserialize)]
struct ListObjectsResponse {
    #[serde(default)]
    items: Vec<ListedObject>,
}

/// Non-recursive listing via the JSON API; the delimiter rolls deeper keys
/// up into prefixes, which we never request.
pub async fn bucket_list(prefix: &str, delimiter: &str) -> Result<Vec<ListedObject>, reqwest::Error> {
    let url = format!("{STORAGE_API_URL}/storage/v1/b/{BUCKET_NAME}/o");
    let resp = BUCKET_CLIENT
        .get(&url)
        .query(&[("prefix", prefix), ("delimiter", delimiter)])
        .send()
        .await?
        .error_for_status()?;
    let listing: ListObjectsResponse = resp.json().await?;
    Ok(listing.items)
}

/// Only 404 counts as absent; any other non-2xx status is a transport
/// failure, same split as `bucket_get`.
pub async fn bucket_head(key: &str) -> Result<bool, reqwest::Error> {
    let url = format!("{STORAGE_API_URL}/{BUCKET_NAME}/{key}");
    let resp = BUCKET_CLIENT.head(&url).send().await?;
    if resp.status() == reqwest::StatusCode::NOT_FOUND {
        return Ok(false);
    }
    resp.error_for_status()?;
    Ok(true)
}

pub async fn bucket_get(key: &str) -> Result<Option<Vec<u8>>, reqwest::Error> {
    let url = format!("{STORAGE_API_URL}/{BUCKET_NAME}/{key}");
    let resp = BUCKET_CLIENT.get(&url).send().await?;
    if resp.status() == reqwest::StatusCode::NOT_FOUND {
        return Ok(None);
    }
    let resp = resp.error_for_status()?;
    resp.bytes().await.map(|d| Some(d.to_vec()))
}

pub async fn bucket_put(key: &str, bytes: Vec<u8>) -> Result<(), reqwest::Error> {
    let url = format!("{STORAGE_API_URL}/upload/storage/v1/b/{BUCKET_NAME}/o");
    BUCKET_CLIENT
        .post(&url)
        .query(&[("uploadType", "media"), ("name", key)])
        .header("content-type", "image/jpeg")
        .body(bytes)
        .send()
        .await?
        .error_for_status()?;
    Ok(())
}

fn bucket_client() -> reqwest::Client {
    info!("Initializing bucket client.");
    reqwest::Client::builder()
        .https_only(true)
        .use_rustls_tls()
        .build()
        .unwrap()
}
