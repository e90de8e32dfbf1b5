use crate::client::bucket_client::{bucket_get, bucket_head, bucket_list, bucket_put};
use crate::domain::error::ErrorResponse;
use crate::domain::error::ErrorResponse::{BucketListError, BucketReadError, BucketWriteError};
use crate::domain::ObjectEntry;
use crate::repository::ObjectRepository;
use tracing::{error, instrument};

#[derive(Debug)]
pub struct BucketRepository {}

impl ObjectRepository for BucketRepository {
    #[instrument(skip(self))]
    async fn list_objects(
        &self,
        prefix: &str,
        delimiter: &str,
    ) -> Result<Vec<ObjectEntry>, ErrorResponse> {
        let listed = bucket_list(prefix, delimiter).await.map_err(|_| {
            error!("Could not list bucket at {prefix}");
            BucketListError { prefix: prefix.to_string() }
        })?;
        Ok(listed
            .into_iter()
            .map(|object| ObjectEntry { key: object.name })
            .collect())
    }

    #[instrument(skip(self))]
    async fn object_exists(&self, key: &str) -> Result<bool, ErrorResponse> {
        bucket_head(key).await.map_err(|_| {
            error!("Could not check object at {key}");
            BucketReadError { key: key.to_string() }
        })
    }

    #[instrument(skip(self))]
    async fn read_object(&self, key: &str) -> Result<Option<Vec<u8>>, ErrorResponse> {
        bucket_get(key).await.map_err(|_| {
            error!("Could not read object at {key}");
            BucketReadError { key: key.to_string() }
        })
    }

    #[instrument(skip(self, bytes))]
    async fn write_object(&self, key: &str, bytes: Vec<u8>) -> Result<(), ErrorResponse> {
        bucket_put(key, bytes).await.map_err(|_| {
            error!("Could not write object at {key}");
            BucketWriteError { key: key.to_string() }
        })
    }
}
