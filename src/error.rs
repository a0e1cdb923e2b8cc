use thiserror::Error;

#[derive(Debug, Clone, Error, PartialEq)]
pub enum CompletionError {
    /// network, timeout or tls failure, or a body that is not json
    #[error("request failed: {0}")]
    Transport(String),
    /// json came back without any choices; carries the server error or the fallback text
    #[error("{0}")]
    Protocol(String),
}

pub fn error<T>(prefix: &str, err: CompletionError) -> Result<T, CompletionError> {
    log::error!("{}: {}", prefix, err);
    Err(err)
}
