use std::fmt::Display;

use super::HostConfig;

/// A code search being made to the search API
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchRequest {
    /// The target host and its authorization material.
    pub(crate) host_config: HostConfig,

    /// The organization to search in.
    pub(crate) organization: String,

    /// The project to search in.
    pub(crate) project: String,

    /// The repository to search in, all repositories when absent or empty.
    pub(crate) repository: Option<String>,

    /// The file path filter.
    pub(crate) path: String,
}

impl SearchRequest {
    /// Creates a new `SearchRequest` with the given host config, organization, project,
    /// optional repository and path filter.
    pub fn new(
        host_config: HostConfig,
        organization: &str,
        project: &str,
        repository: Option<&str>,
        path: &str,
    ) -> Self {
        Self {
            host_config,
            organization: organization.to_string(),
            project: project.to_string(),
            repository: repository.map(|repository| repository.to_string()),
            path: path.to_string(),
        }
    }

    /// Retrieves the host config.
    pub fn host_config(&self) -> &HostConfig {
        &self.host_config
    }

    /// Retrieves the organization.
    pub fn organization(&self) -> &str {
        &self.organization
    }

    /// Retrieves the project.
    pub fn project(&self) -> &str {
        &self.project
    }

    /// Composes the search expression combining the path and repository filters.
    pub(crate) fn search_text(&self) -> String {
        let repository = match self.repository.as_deref() {
            Some(repository) if !repository.is_empty() => repository,
            _ => "*",
        };

        format!("path:{} repo:{repository}", self.path)
    }

    /// Creates a dummy `SearchRequest` for testing purposes.
    #[cfg(test)]
    pub(crate) fn dummy() -> Self {
        Self::new(
            HostConfig::dummy(),
            "org-1",
            "project-1",
            Some("repository-1"),
            "catalog-info.yaml",
        )
    }
}

impl Display for SearchRequest {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "SearchRequest: organization={}, project={}, repository={:?}, path={}",
            self.organization, self.project, self.repository, self.path
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn search_text_with_repository() {
        let request = SearchRequest::dummy();

        assert_eq!(
            "path:catalog-info.yaml repo:repository-1",
            request.search_text()
        );
    }

    #[test]
    fn search_text_without_repository_uses_wildcard() {
        let request = SearchRequest::new(
            HostConfig::dummy(),
            "org-1",
            "project-1",
            None,
            "catalog-info.yaml",
        );

        assert_eq!("path:catalog-info.yaml repo:*", request.search_text());
    }

    #[test]
    fn search_text_with_empty_repository_uses_wildcard() {
        let request = SearchRequest::new(
            HostConfig::dummy(),
            "org-1",
            "project-1",
            Some(""),
            "catalog-info.yaml",
        );

        assert_eq!("path:catalog-info.yaml repo:*", request.search_text());
    }
}
