pub(crate) mod bucket_client;
