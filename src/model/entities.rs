use std::{fmt::Display, ops::Deref};

use serde::Deserialize;

/// The name of a file matched by a search.
#[derive(Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct FileName(pub String);

impl Deref for FileName {
    type Target = String;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl Display for FileName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// The path of a file within its repository.
#[derive(Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct FilePath(pub String);

impl Deref for FilePath {
    type Target = String;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl Display for FilePath {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// The name of a repository.
#[derive(Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct RepositoryName(pub String);

impl Deref for RepositoryName {
    type Target = String;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl Display for RepositoryName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Deserialize, Debug, Clone, PartialEq, Eq)]
struct RepositoryRef {
    name: RepositoryName,
}

/// A file matched by a code search.
#[derive(Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct ResultItem {
    /// The name of the matched file.
    #[serde(rename = "fileName")]
    file_name: FileName,

    /// The path of the matched file within its repository.
    path: FilePath,

    /// The repository holding the matched file.
    repository: RepositoryRef,
}

impl ResultItem {
    /// Creates a new `ResultItem` instance.
    pub fn new(file_name: &str, path: &str, repository_name: &str) -> Self {
        Self {
            file_name: FileName(file_name.to_string()),
            path: FilePath(path.to_string()),
            repository: RepositoryRef {
                name: RepositoryName(repository_name.to_string()),
            },
        }
    }

    /// Retrieves the file name.
    pub fn file_name(&self) -> &FileName {
        &self.file_name
    }

    /// Retrieves the file path.
    pub fn path(&self) -> &FilePath {
        &self.path
    }

    /// Retrieves the name of the repository holding the file.
    pub fn repository_name(&self) -> &RepositoryName {
        &self.repository.name
    }
}

impl Display for ResultItem {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "File: {}, Repository: {}",
            self.path, self.repository.name
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn result_item_deserializes_from_wire_shape() {
        let json = r#"{
            "fileName": "catalog-info.yaml",
            "path": "/catalog-info.yaml",
            "repository": { "name": "repository-1" }
        }"#;

        let item: ResultItem = serde_json::from_str(json).unwrap();

        assert_eq!(
            ResultItem::new("catalog-info.yaml", "/catalog-info.yaml", "repository-1"),
            item
        );
        assert_eq!("catalog-info.yaml", item.file_name().as_str());
        assert_eq!("/catalog-info.yaml", item.path().as_str());
        assert_eq!("repository-1", item.repository_name().as_str());
    }
}
