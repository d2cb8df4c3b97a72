use super::types::{Article, Category, NewsPayload};
use serde_json::Value;
use thiserror::Error;

/// Document-level shape failures.
///
/// Category- and article-level problems never produce an error; they are
/// recovered during validation and only logged.
#[derive(Debug, Error)]
pub enum ValidationError {
    #[error("Expected a JSON object of categories, found {found}")]
    NotAMapping { found: &'static str },
}

/// Validates a parsed news document.
///
/// - The top level must be an object; anything else is rejected.
/// - `{}` yields an empty payload (the "no data" case), not an error.
/// - A category whose value is `null`, `[]` or any other non-array value
///   becomes a category without articles.
/// - Articles must be objects with string `url` and `title`; anything else is
///   skipped. The URL itself is not checked here.
///
/// Category order follows the key order of the source document.
pub fn validate(raw: Value) -> Result<NewsPayload, ValidationError> {
    let entries = match raw {
        Value::Object(entries) => entries,
        other => {
            return Err(ValidationError::NotAMapping {
                found: json_kind(&other),
            })
        }
    };

    let mut categories = Vec::with_capacity(entries.len());
    let mut skipped = 0usize;

    for (name, value) in entries {
        let articles = match value {
            Value::Null => Vec::new(),
            Value::Array(items) => {
                let total = items.len();
                let articles: Vec<Article> = items.iter().filter_map(parse_article).collect();
                let dropped = total - articles.len();
                if dropped > 0 {
                    tracing::warn!(
                        category = %name,
                        skipped = dropped,
                        "Articles without a string url/title skipped"
                    );
                    skipped += dropped;
                }
                articles
            }
            other => {
                tracing::warn!(
                    category = %name,
                    found = json_kind(&other),
                    "Category value is not an array, rendering it without articles"
                );
                Vec::new()
            }
        };
        categories.push(Category { name, articles });
    }

    let payload = NewsPayload::new(categories);
    tracing::debug!(
        categories = payload.len(),
        articles = payload.article_count(),
        skipped = skipped,
        "Validated news payload"
    );
    Ok(payload)
}

fn parse_article(item: &Value) -> Option<Article> {
    let url = item.get("url")?.as_str()?;
    let title = item.get("title")?.as_str()?;
    Some(Article {
        url: url.to_owned(),
        title: title.to_owned(),
    })
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
