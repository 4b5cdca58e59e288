use std::{io, net::SocketAddr};
use thiserror::Error;
use tracing::error;

pub const EXIT_FAILURE: u8 = 1;

#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("Failed to bind {addr}: {source}")]
    Bind {
        addr: SocketAddr,
        #[source]
        source: io::Error,
    },

    #[error("HTTP server stopped with an error: {0}")]
    Serve(#[from] io::Error),
}

/// Maps the outcome of a run to the process exit code.
///
/// Failures always exit with [`EXIT_FAILURE`]. In debug mode the error is
/// handed back so `main` returns it and the runtime prints its full chain.
pub fn exit_code(result: Result<(), ServiceError>, debug: bool) -> Result<u8, ServiceError> {
    match result {
        Ok(()) => Ok(0),
        Err(e) => {
            error!("{}", e);
            if debug {
                Err(e)
            } else {
                Ok(EXIT_FAILURE)
            }
        }
    }
}
