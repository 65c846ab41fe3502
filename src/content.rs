use rust_embed::Embed;
use serde::de::DeserializeOwned;
use thiserror::Error;

/// Site content that is compiled into the binary (and the wasm bundle, since the
/// gallery and skills grid filter on the client).
#[derive(Embed)]
#[folder = "content"]
pub struct Content;

#[derive(Error, Debug)]
pub enum ContentError {
    #[error("content file not found: {0}")]
    NotFound(String),
    #[error("couldn't parse content file {name}: {source}")]
    Parse {
        name: String,
        #[source]
        source: serde_json::Error,
    },
}

pub fn load_json<T: DeserializeOwned>(name: &str) -> Result<T, ContentError> {
    let file = Content::get(name).ok_or_else(|| ContentError::NotFound(name.to_string()))?;
    serde_json::from_slice(&file.data).map_err(|source| ContentError::Parse {
        name: name.to_string(),
        source,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_file() {
        let res = load_json::<Vec<String>>("nope.json");
        assert!(matches!(res, Err(ContentError::NotFound(name)) if name == "nope.json"));
    }

    #[test]
    fn test_embedded_files_listed() {
        let names = Content::iter().collect::<Vec<_>>();
        assert!(names.iter().any(|n| n == "projects.json"));
        assert!(names.iter().any(|n| n == "skills.json"));
    }
}
