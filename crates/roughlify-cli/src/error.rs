#[derive(Debug, thiserror::Error)]
pub(crate) enum CliError {
    #[error("{path}: {source}")]
    Read {
        path: String,
        source: std::io::Error,
    },

    #[error("failed to fetch {url}: {source}")]
    Fetch {
        url: String,
        source: reqwest::Error,
    },

    #[error("failed to fetch {url} (status: {status})")]
    Status {
        url: String,
        status: reqwest::StatusCode,
    },

    #[error("Content of {0} is empty")]
    Empty(String),

    #[error("invalid config file {path}: {source}")]
    Config {
        path: String,
        source: roughlify::Error,
    },

    #[error("failed to write {path}: {source}")]
    Write {
        path: String,
        source: std::io::Error,
    },
}
