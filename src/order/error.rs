use thiserror::Error;

#[derive(Debug, Error)]
pub enum OrderError {
    #[error("order endpoint unreachable: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("order endpoint answered {0}")]
    Status(reqwest::StatusCode),

    #[error("could not open {url}: {source}")]
    OpenLink {
        url: String,
        #[source]
        source: std::io::Error,
    },

    #[error("could not start order submission: {0}")]
    Worker(#[source] std::io::Error),

    #[error("order submission was dropped before it finished")]
    Abandoned,
}
