/// A single news item as sent by the backend.
///
/// `url` is kept verbatim; it is not guaranteed to parse.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Article {
    pub url: String,
    pub title: String,
}

/// A named group of articles, in source order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Category {
    pub name: String,
    pub articles: Vec<Article>,
}

impl Category {
    pub fn new(name: impl Into<String>, articles: Vec<Article>) -> Self {
        Self {
            name: name.into(),
            articles,
        }
    }
}

/// Validated news document: categories in the order the backend returned them.
///
/// An empty payload (no categories at all) is the distinguished "no data"
/// case; a category with no articles is not.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NewsPayload {
    categories: Vec<Category>,
}

impl NewsPayload {
    pub fn new(categories: Vec<Category>) -> Self {
        Self { categories }
    }

    pub fn categories(&self) -> &[Category] {
        &self.categories
    }

    pub fn is_empty(&self) -> bool {
        self.categories.is_empty()
    }

    pub fn len(&self) -> usize {
        self.categories.len()
    }

    pub fn article_count(&self) -> usize {
        self.categories.iter().map(|c| c.articles.len()).sum()
    }
}
