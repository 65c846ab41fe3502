use std::{collections::HashSet, fmt, sync::LazyLock};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::content::{load_json, ContentError};

static CATALOG: LazyLock<Catalog> = LazyLock::new(|| {
    Catalog::load().expect("Embedded project catalog should be valid")
});

/// The project catalog compiled into the site.
pub fn catalog() -> &'static Catalog {
    &CATALOG
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Category {
    Frontend,
    Backend,
    #[serde(rename = "Full Stack")]
    FullStack,
    #[serde(rename = "AI/ML")]
    AiMl,
}

impl Category {
    pub const ALL: [Category; 4] = [
        Category::Frontend,
        Category::Backend,
        Category::FullStack,
        Category::AiMl,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Category::Frontend => "Frontend",
            Category::Backend => "Backend",
            Category::FullStack => "Full Stack",
            Category::AiMl => "AI/ML",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Gallery filter: either every project or a single category.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum CategoryFilter {
    #[default]
    All,
    Only(Category),
}

impl CategoryFilter {
    /// Filter pills in display order.
    pub fn options() -> impl Iterator<Item = CategoryFilter> {
        std::iter::once(CategoryFilter::All).chain(Category::ALL.into_iter().map(Self::Only))
    }

    pub fn label(self) -> &'static str {
        match self {
            CategoryFilter::All => "All",
            CategoryFilter::Only(c) => c.label(),
        }
    }

    pub fn matches(self, category: Category) -> bool {
        match self {
            CategoryFilter::All => true,
            CategoryFilter::Only(c) => c == category,
        }
    }
}

impl From<Category> for CategoryFilter {
    fn from(value: Category) -> Self {
        Self::Only(value)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectRecord {
    pub title: String,
    pub description: String,
    pub technologies: Vec<String>,
    pub category: Category,
    pub github_link: String,
    #[serde(default)]
    pub live_link: Option<String>,
    #[serde(default)]
    pub image_url: Option<String>,
}

/// What to draw in a project's image slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Thumbnail<'a> {
    Image(&'a str),
    Glyph(char),
}

impl Thumbnail<'_> {
    /// A finished image with no intrinsic size never decoded. This catches
    /// errors that fired before any `error` listener was attached.
    pub fn is_broken(complete: bool, natural_width: u32) -> bool {
        complete && natural_width == 0
    }
}

impl ProjectRecord {
    /// Falls back to the title's first character when there is no image, or
    /// when the browser reported that the image failed to load.
    pub fn thumbnail(&self, load_failed: bool) -> Thumbnail<'_> {
        match self.image_url.as_deref() {
            Some(url) if !load_failed && !url.is_empty() => Thumbnail::Image(url),
            _ => Thumbnail::Glyph(self.fallback_glyph()),
        }
    }

    pub fn fallback_glyph(&self) -> char {
        self.title.chars().next().unwrap_or('?')
    }

    pub fn live_demo(&self) -> Option<&str> {
        self.live_link.as_deref().filter(|s| !s.is_empty())
    }
}

#[derive(Error, Debug)]
pub enum CatalogError {
    #[error("Project title must not be empty")]
    EmptyTitle,
    #[error("Duplicate project title: {0}")]
    DuplicateTitle(String),
    #[error(transparent)]
    Content(#[from] ContentError),
}

/// Fixed, ordered list of projects. Built once and never mutated.
#[derive(Debug, Clone)]
pub struct Catalog {
    projects: Vec<ProjectRecord>,
}

impl Catalog {
    pub fn new(projects: Vec<ProjectRecord>) -> Result<Self, CatalogError> {
        let mut seen = HashSet::new();
        for p in &projects {
            if p.title.trim().is_empty() {
                return Err(CatalogError::EmptyTitle);
            }
            if !seen.insert(p.title.as_str()) {
                return Err(CatalogError::DuplicateTitle(p.title.clone()));
            }
        }
        Ok(Self { projects })
    }

    pub fn load() -> Result<Self, CatalogError> {
        let projects = load_json::<Vec<ProjectRecord>>("projects.json")?;
        Self::new(projects)
    }

    pub fn projects(&self) -> &[ProjectRecord] {
        &self.projects
    }

    pub fn len(&self) -> usize {
        self.projects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.projects.is_empty()
    }

    pub fn get(&self, title: &str) -> Option<&ProjectRecord> {
        self.projects.iter().find(|p| p.title == title)
    }

    /// Records matching `filter`, in catalog order.
    pub fn filter_by_category(&self, filter: CategoryFilter) -> Vec<&ProjectRecord> {
        self.projects
            .iter()
            .filter(|p| filter.matches(p.category))
            .collect()
    }
}
