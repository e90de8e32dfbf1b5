pub(crate) use crate::domain::error::ErrorResponse;
use crate::domain::query::decode_folder;
use crate::domain::{thumb_name, ThumbnailBatch, ThumbnailKind, ThumbnailRecord};
use crate::image_service::{is_supported_image, make_thumbnail};
use crate::repository::ObjectRepository;
use std::time::Instant;
use tracing::{debug, error, instrument};

pub type InternalResponse = Result<ThumbnailBatch, ErrorResponse>;

/// One pass over the direct children of `<folder>/`: thumbnail every
/// supported image that does not already have one under `<folder>_thumb/`.
/// Per-item codec and write failures are contained; listing and transport
/// failures abort the batch.
#[instrument(skip(repository))]
pub async fn process_generate_thumb<R: ObjectRepository>(
    opt_query: Option<&str>,
    repository: &R,
) -> InternalResponse {
    let process_timer: Instant = Instant::now();

    debug!("Processing query parameters");
    let folder = decode_folder(opt_query)?;
    let thumb_folder = format!("{folder}_thumb");

    let entries = repository.list_objects(&format!("{folder}/"), "/").await?;
    debug!("Listed {} entries under {folder}/", entries.len());

    let mut thumbnails: Vec<ThumbnailRecord> = Vec::new();
    for entry in entries {
        let thumb_key = format!("{}/{}", thumb_folder, thumb_name(entry.name()));

        if repository.object_exists(&thumb_key).await? {
            thumbnails.push(ThumbnailRecord {
                original: entry.key.clone(),
                thumbnail: thumb_key,
                kind: ThumbnailKind::Existing,
            });
            continue;
        }

        let Some(bytes) = repository.read_object(&entry.key).await? else {
            debug!("Original vanished before fetch: {}", entry.key);
            continue;
        };

        if !is_supported_image(&entry.extension()) {
            continue;
        }

        let thumb = match make_thumbnail(&bytes, &entry.key) {
            Ok(thumb) => thumb,
            Err(e) => {
                error!("Thumbnail generation failed for {}: {e}", entry.key);
                continue;
            }
        };
        match repository.write_object(&thumb_key, thumb).await {
            Ok(()) => thumbnails.push(ThumbnailRecord {
                original: entry.key.clone(),
                thumbnail: thumb_key,
                kind: ThumbnailKind::Image,
            }),
            Err(e) => error!("Thumbnail write failed for {}: {e}", entry.key),
        }
    }

    debug!(
        "Batch done in {} ms: {} results under {thumb_folder}",
        process_timer.elapsed().as_millis(),
        thumbnails.len()
    );
    Ok(ThumbnailBatch {
        success: true,
        thumbnails,
        thumb_folder,
    })
}
