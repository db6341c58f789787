//! The HTTP/1 transport adapter: owns the socket, turns each connection into
//! a `hyper` service, and converts to/from the plain `http::Request<Vec<u8>>`
//! / `http::Response<Vec<u8>>` the protocol core speaks (spec.md §9's
//! "ambient mutable module state" note: this is the only place that knows
//! about sockets).

use std::{convert::Infallible, net::SocketAddr};

use bytes::Bytes;
use http::{Request, Response};
use http_body_util::{BodyExt, Full};
use hyper::{body::Incoming, server::conn::http1, service::service_fn};
use hyper_util::rt::TokioIo;
use ldp_core::{controller, LdpError, ServerContext};
use tokio::net::TcpListener;
use tracing::{error, info};

use crate::problem;

/// Accept connections on `addr` until a `SIGINT` (`ctrl-c`) arrives, driving
/// each one through [`dispatch`].
pub async fn serve(addr: SocketAddr, ctx: ServerContext) -> std::io::Result<()> {
    let listener = TcpListener::bind(addr).await?;
    info!(%addr, "listening");

    loop {
        tokio::select! {
            accepted = listener.accept() => {
                let (stream, peer) = accepted?;
                let io = TokioIo::new(stream);
                let conn_ctx = ctx.clone();

                tokio::spawn(async move {
                    let service = service_fn(move |req| dispatch(conn_ctx.clone(), req));
                    if let Err(err) = http1::Builder::new().serve_connection(io, service).await {
                        error!(%peer, error = %err, "connection error");
                    }
                });
            }
            _ = tokio::signal::ctrl_c() => {
                info!("shutdown signal received");
                return Ok(());
            }
        }
    }
}

#[tracing::instrument(skip_all, fields(method = %req.method(), path = req.uri().path()))]
async fn dispatch(
    ctx: ServerContext,
    req: Request<Incoming>,
) -> Result<Response<Full<Bytes>>, Infallible> {
    let (parts, body) = req.into_parts();
    let body_bytes = match body.collect().await {
        Ok(collected) => collected.to_bytes().to_vec(),
        Err(err) => {
            return Ok(to_full(problem::response_for(&LdpError::BadRequest(
                err.to_string(),
            ))))
        }
    };

    let request = Request::from_parts(parts, body_bytes);
    let response = match controller::handle(&ctx, request).await {
        Ok(response) => response,
        Err(err) => {
            tracing::debug!(error = %err, "request failed");
            problem::response_for(&err)
        }
    };
    Ok(to_full(response))
}

fn to_full(response: Response<Vec<u8>>) -> Response<Full<Bytes>> {
    response.map(|body| Full::new(Bytes::from(body)))
}
