//! CLI runner - executes commands

use crate::cli::commands::{Cli, Commands, ScopeArgs};
use crate::config::PagerConfig;
use crate::error::{Error, Result, ResultExt};
use crate::pagination::{ListQuery, ListResponse, Paginator};
use crate::sort::SortField;
use crate::store::MemoryStore;
use crate::types::Todo;
use std::path::Path;
use std::sync::Arc;

/// CLI runner
pub struct Runner {
    cli: Cli,
}

impl Runner {
    /// Create a new runner
    pub fn new(cli: Cli) -> Self {
        Self { cli }
    }

    /// Run the CLI command
    pub async fn run(&self) -> Result<()> {
        match &self.cli.command {
            Commands::List {
                scope,
                after,
                before,
            } => {
                let query = ListQuery {
                    after: after.clone(),
                    before: before.clone(),
                    ..list_query(scope)
                };
                let output = self.list(&scope.shop, &query).await?;
                println!("{output}");
                Ok(())
            }
            Commands::Walk { scope } => {
                for line in self.walk(scope).await? {
                    println!("{line}");
                }
                Ok(())
            }
            Commands::Sorts => {
                for field in SortField::ALL {
                    println!("{field}");
                }
                Ok(())
            }
        }
    }

    /// Fetch one page and render the list response as JSON
    ///
    /// Pagination failures are rendered as an error response rather than
    /// returned, the way the list endpoint reports them.
    pub async fn list(&self, shop_id: &str, query: &ListQuery) -> Result<String> {
        let paginator = self.paginator().await?;
        let response = ListResponse::from_result(paginator.list(shop_id, query).await);
        if let Some(error) = &response.error {
            tracing::warn!("Listing todos for shop {} failed: {}", shop_id, error);
        }
        Ok(serde_json::to_string_pretty(&response)?)
    }

    /// Follow `endCursor` from the first page, one JSON line per page
    pub async fn walk(&self, scope: &ScopeArgs) -> Result<Vec<String>> {
        let paginator = self.paginator().await?;
        let mut query = list_query(scope);
        let mut lines = Vec::new();

        loop {
            let page = paginator.list(&scope.shop, &query).await?;
            let next = page.end_cursor.clone().filter(|_| page.has_next);
            lines.push(serde_json::to_string(&ListResponse::success(page))?);

            match next {
                Some(cursor) => query.after = Some(cursor),
                None => break,
            }
        }

        if self.cli.verbose {
            tracing::info!("Walked {} page(s) for shop {}", lines.len(), scope.shop);
        }
        Ok(lines)
    }

    async fn paginator(&self) -> Result<Paginator> {
        let config = match &self.cli.config {
            Some(path) => PagerConfig::from_file(path)?,
            None => PagerConfig::default(),
        }
        .with_env_overrides()?;

        let data = self
            .cli
            .data
            .as_deref()
            .ok_or_else(|| Error::config("--data is required"))?;
        let store = load_store(data)?;

        if self.cli.verbose {
            tracing::info!(
                "Loaded {} todo(s) from {} (default limit {}, max {})",
                store.len().await,
                data.display(),
                config.default_limit,
                config.max_limit
            );
        }

        Ok(Paginator::new(Arc::new(store), config))
    }
}

fn list_query(scope: &ScopeArgs) -> ListQuery {
    ListQuery {
        sort: scope.sort.clone(),
        search: scope.search.clone(),
        limit: scope.limit,
        ..Default::default()
    }
}

/// Load a JSON array of todos into a fresh store
pub fn load_store(path: &Path) -> Result<MemoryStore> {
    if !path.exists() {
        return Err(Error::FileNotFound {
            path: path.display().to_string(),
        });
    }
    let contents = std::fs::read_to_string(path)?;
    let todos: Vec<Todo> = serde_json::from_str(&contents)
        .with_context(|| format!("Failed to parse todos from {}", path.display()))?;
    Ok(MemoryStore::from_todos(todos))
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;
    use serde_json::{json, Value};
    use std::io::Write;

    fn data_file() -> tempfile::NamedTempFile {
        let todos = json!([
            {"id": "a", "shopifyId": "s1", "title": "a", "createdAt": "2024-01-01T00:00:00Z", "updatedAt": "2024-01-01T00:00:00Z"},
            {"id": "b", "shopifyId": "s1", "title": "b", "createdAt": "2024-01-02T00:00:00Z", "updatedAt": "2024-01-02T00:00:00Z"},
            {"id": "c", "shopifyId": "s1", "title": "c", "createdAt": "2024-01-03T00:00:00Z", "updatedAt": "2024-01-03T00:00:00Z"},
            {"id": "z", "shopifyId": "s2", "title": "z", "createdAt": "2024-01-04T00:00:00Z", "updatedAt": "2024-01-04T00:00:00Z"}
        ]);
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "{todos}").unwrap();
        file
    }

    fn runner(args: &[&str]) -> Runner {
        Runner::new(Cli::try_parse_from(args).unwrap())
    }

    #[tokio::test]
    async fn test_list_renders_response() {
        let file = data_file();
        let path = file.path().to_str().unwrap();
        let runner = runner(&["todo-pager", "--data", path, "sorts"]);

        let query = ListQuery {
            sort: Some("title".to_string()),
            ..Default::default()
        };
        let output = runner.list("s1", &query).await.unwrap();
        let output: Value = serde_json::from_str(&output).unwrap();
        assert_eq!(output["data"][0]["id"], "a");
        assert_eq!(output["data"][1]["id"], "b");
        assert_eq!(output["pageInfo"]["hasNext"], true);
        assert_eq!(output["pageInfo"]["hasPre"], false);
    }

    #[tokio::test]
    async fn test_list_renders_errors() {
        let file = data_file();
        let path = file.path().to_str().unwrap();
        let runner = runner(&["todo-pager", "--data", path, "sorts"]);

        let query = ListQuery {
            sort: Some("-priority".to_string()),
            ..Default::default()
        };
        let output = runner.list("s1", &query).await.unwrap();
        let output: Value = serde_json::from_str(&output).unwrap();
        assert_eq!(output["data"], json!([]));
        assert_eq!(output["errorKind"], "invalid_sort_field");
    }

    #[tokio::test]
    async fn test_walk_visits_every_page() {
        let file = data_file();
        let path = file.path().to_str().unwrap();
        let cli = Cli::try_parse_from([
            "todo-pager",
            "--data",
            path,
            "walk",
            "--shop",
            "s1",
            "--sort",
            "-title",
            "--limit",
            "2",
        ])
        .unwrap();
        let Commands::Walk { scope } = &cli.command else {
            panic!("Expected walk command");
        };
        let scope = scope.clone();
        let runner = Runner::new(cli);

        let lines = runner.walk(&scope).await.unwrap();
        assert_eq!(lines.len(), 2);

        let first: Value = serde_json::from_str(&lines[0]).unwrap();
        let second: Value = serde_json::from_str(&lines[1]).unwrap();
        assert_eq!(first["data"][0]["id"], "c");
        assert_eq!(second["data"][0]["id"], "a");
        assert_eq!(second["pageInfo"]["hasNext"], false);
        assert_eq!(second["pageInfo"]["hasPre"], true);
    }

    #[tokio::test]
    async fn test_missing_data_file() {
        let runner = runner(&["todo-pager", "--data", "/nonexistent/todos.json", "sorts"]);
        let err = runner.list("s1", &ListQuery::default()).await.unwrap_err();
        assert!(matches!(err, Error::FileNotFound { .. }));
    }

    #[tokio::test]
    async fn test_list_without_data_is_config_error() {
        let runner = runner(&["todo-pager", "sorts"]);
        let err = runner.list("s1", &ListQuery::default()).await.unwrap_err();
        assert!(matches!(err, Error::Config { .. }));

        let scope = ScopeArgs {
            shop: "s1".to_string(),
            sort: None,
            search: None,
            limit: None,
        };
        assert!(runner.walk(&scope).await.is_err());
    }

    #[test]
    fn test_before_and_after_conflict() {
        let result = Cli::try_parse_from([
            "todo-pager",
            "list",
            "--shop",
            "s1",
            "--after",
            "a",
            "--before",
            "b",
        ]);
        assert!(result.is_err());
    }
}
