use std::net::SocketAddr;
use hyper::server::conn::http1;
use hyper::service::service_fn;
use hyper_util::rt::TokioIo;
use lazy_static::lazy_static;
use tokio::net::TcpListener;
use tracing::info;
use crate::logging::logger_setup;
use crate::repository::bucket_repository::BucketRepository;
use crate::router::router;

mod service;
mod router;
mod logging;
mod response_handler;
mod image_service;
mod client;
mod repository;
mod domain;

lazy_static! {
    static ref BUCKET_REPOSITORY: BucketRepository = BucketRepository {};
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    logger_setup();

    let addr = SocketAddr::from(([0, 0, 0, 0], 8080));

    info!("Attempting to start server at {addr}");
    let listener = TcpListener::bind(addr).await?;
    info!("Server started at {addr}");

    loop {
        let (stream, _) = listener.accept().await?;

        let io = TokioIo::new(stream);

        tokio::task::spawn(async move {
            if let Err(err) = http1::Builder::new()
                .serve_connection(io, service_fn(router))
                .await
            {
                eprintln!("Error serving connection: {:?}", err);
            }
        });
    }
}
