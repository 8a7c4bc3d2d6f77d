pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("SVG parse error: {0}")]
    XmlParse(#[from] roxmltree::Error),

    #[error("no <svg> element found in input")]
    NoDrawableRoot,

    #[error("invalid style options JSON: {0}")]
    OptionsJson(#[from] serde_json::Error),
}
