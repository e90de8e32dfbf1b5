use crate::domain::error::ErrorResponse;
use crate::domain::ObjectEntry;

pub(crate) mod bucket_repository;

/// Storage seam for the batch handler. The bucket is the only durable
/// record; "does a thumbnail exist" is always a live check against it.
pub trait ObjectRepository {
    async fn list_objects(
        &self,
        prefix: &str,
        delimiter: &str,
    ) -> Result<Vec<ObjectEntry>, ErrorResponse>;

    async fn object_exists(&self, key: &str) -> Result<bool, ErrorResponse>;

    /// `Ok(None)` is an object absent at read time, not a failure.
    async fn read_object(&self, key: &str) -> Result<Option<Vec<u8>>, ErrorResponse>;

    async fn write_object(&self, key: &str, bytes: Vec<u8>) -> Result<(), ErrorResponse>;
}
