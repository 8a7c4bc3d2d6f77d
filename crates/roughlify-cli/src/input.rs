//! Input acquisition: a local file or an `http(s)` URL.

use crate::error::CliError;
use url::Url;

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum Source {
    File(String),
    Remote(Url),
}

impl Source {
    pub(crate) fn classify(input: &str) -> Self {
        match Url::parse(input) {
            Ok(url) if matches!(url.scheme(), "http" | "https") => Source::Remote(url),
            _ => Source::File(input.to_string()),
        }
    }

    /// File name the output is derived from: the path itself for files, the last path segment
    /// of a URL (`index.html` when there is none).
    pub(crate) fn file_name(&self) -> String {
        match self {
            Source::File(path) => path.clone(),
            Source::Remote(url) => url
                .path_segments()
                .and_then(|mut segments| segments.next_back())
                .filter(|name| !name.is_empty())
                .unwrap_or("index.html")
                .to_string(),
        }
    }

    /// Reads the whole content. Empty content is an error.
    pub(crate) fn read(&self) -> Result<String, CliError> {
        let raw = match self {
            Source::File(path) => {
                tracing::info!("Opening {path}");
                std::fs::read_to_string(path).map_err(|source| CliError::Read {
                    path: path.clone(),
                    source,
                })?
            }
            Source::Remote(url) => {
                tracing::info!("Fetching {url}");
                fetch(url)?
            }
        };
        if raw.is_empty() {
            return Err(CliError::Empty(self.file_name()));
        }
        Ok(raw)
    }
}

fn fetch(url: &Url) -> Result<String, CliError> {
    let fetch_error = |source| CliError::Fetch {
        url: url.to_string(),
        source,
    };
    let response = reqwest::blocking::get(url.clone()).map_err(fetch_error)?;
    if !response.status().is_success() {
        return Err(CliError::Status {
            url: url.to_string(),
            status: response.status(),
        });
    }
    response.text().map_err(fetch_error)
}
