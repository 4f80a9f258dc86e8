use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::sync::LazyLock;
use thiserror::Error;

static CATALOG_JSON: &str = include_str!("../data/projects.json");

pub static CATALOG: LazyLock<Catalog> = LazyLock::new(|| {
    Catalog::from_json(CATALOG_JSON).expect("embedded project catalog should be valid")
});

fn placeholder_url() -> String {
    "#".to_string()
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Project {
    pub id: u32,
    pub title: String,
    pub description: String,
    pub technologies: Vec<String>,
    pub category: String,
    pub color: String,
    #[serde(default = "placeholder_url")]
    pub live_url: String,
    #[serde(default = "placeholder_url")]
    pub github_url: String,
}

impl Project {
    /// Short word shown large on the card header.
    pub fn badge(&self) -> &str {
        self.category.split(' ').next().unwrap_or_default()
    }

    /// The first `n` technologies and how many were left out.
    pub fn tech_preview(&self, n: usize) -> (&[String], usize) {
        let shown = n.min(self.technologies.len());
        (&self.technologies[..shown], self.technologies.len() - shown)
    }
}

#[derive(Error, Debug)]
pub enum CatalogError {
    #[error("couldn't parse project catalog: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("duplicate project id {0}")]
    DuplicateId(u32),
}

#[derive(Debug, Clone, PartialEq)]
pub struct Catalog {
    projects: Vec<Project>,
}

impl Catalog {
    pub fn new(projects: Vec<Project>) -> Result<Self, CatalogError> {
        let mut seen = HashSet::new();
        if let Some(p) = projects.iter().find(|p| !seen.insert(p.id)) {
            return Err(CatalogError::DuplicateId(p.id));
        }
        Ok(Self { projects })
    }

    pub fn from_json(json: &str) -> Result<Self, CatalogError> {
        Self::new(serde_json::from_str(json)?)
    }

    pub fn projects(&self) -> &[Project] {
        &self.projects
    }

    /// `All` followed by each distinct category in order of first appearance.
    pub fn categories(&self) -> Vec<Category> {
        let mut seen = HashSet::new();
        std::iter::once(Category::All)
            .chain(
                self.projects
                    .iter()
                    .filter(|p| seen.insert(p.category.as_str()))
                    .map(|p| Category::Named(p.category.clone())),
            )
            .collect()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub enum Category {
    #[default]
    All,
    Named(String),
}

impl Category {
    pub fn label(&self) -> &str {
        match self {
            Category::All => "All",
            Category::Named(s) => s.as_str(),
        }
    }

    pub fn matches(&self, project: &Project) -> bool {
        match self {
            Category::All => true,
            Category::Named(s) => *s == project.category,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ProjectFilterStore<'a> {
    catalog: &'a Catalog,
    selected: Category,
}

impl<'a> ProjectFilterStore<'a> {
    pub fn new(catalog: &'a Catalog) -> Self {
        Self {
            catalog,
            selected: Category::All,
        }
    }

    pub fn selected(&self) -> &Category {
        &self.selected
    }

    pub fn set_category(&mut self, category: Category) {
        self.selected = category;
    }

    pub fn categories(&self) -> Vec<Category> {
        self.catalog.categories()
    }

    /// Catalog entries in the selected category, in catalog order.
    pub fn visible_projects(&self) -> Vec<&'a Project> {
        self.catalog
            .projects()
            .iter()
            .filter(|p| self.selected.matches(p))
            .collect()
    }
}

impl ProjectFilterStore<'static> {
    pub fn embedded() -> Self {
        Self::new(&*CATALOG)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn project(id: u32, category: &str) -> Project {
        Project {
            id,
            title: format!("Project {id}"),
            description: String::new(),
            technologies: vec!["Rust".to_string()],
            category: category.to_string(),
            color: "#000000".to_string(),
            live_url: placeholder_url(),
            github_url: placeholder_url(),
        }
    }

    fn catalog() -> Catalog {
        Catalog::new(vec![
            project(1, "Web"),
            project(2, "Game"),
            project(3, "Web"),
            project(4, "Tool"),
            project(5, "Game"),
        ])
        .unwrap()
    }

    fn ids(projects: &[&Project]) -> Vec<u32> {
        projects.iter().map(|p| p.id).collect()
    }

    #[test]
    fn test_embedded_catalog() {
        let catalog = &*CATALOG;
        assert_eq!(catalog.projects().len(), 6);
        let labels = catalog
            .categories()
            .iter()
            .map(|c| c.label().to_string())
            .collect::<Vec<_>>();
        assert_eq!(
            labels,
            vec![
                "All",
                "Web Application",
                "Dashboard",
                "Portfolio",
                "Mobile App",
                "AI Application",
                "VR/AR"
            ]
        );
        assert!(catalog.projects().iter().all(|p| p.live_url == "#"));
    }

    #[test]
    fn test_duplicate_ids_rejected() {
        let res = Catalog::new(vec![project(1, "Web"), project(1, "Game")]);
        assert!(matches!(res, Err(CatalogError::DuplicateId(1))));
    }

    #[test]
    fn test_bad_json_rejected() {
        assert!(matches!(
            Catalog::from_json("[{\"id\": 1}]"),
            Err(CatalogError::Parse(_))
        ));
    }

    #[test]
    fn test_categories_first_appearance() {
        let labels = catalog()
            .categories()
            .into_iter()
            .map(|c| c.label().to_string())
            .collect::<Vec<_>>();
        assert_eq!(labels, vec!["All", "Web", "Game", "Tool"]);
    }

    #[test]
    fn test_filter_preserves_order() {
        let catalog = catalog();
        let mut store = ProjectFilterStore::new(&catalog);
        assert_eq!(store.selected(), &Category::All);
        assert_eq!(ids(&store.visible_projects()), vec![1, 2, 3, 4, 5]);

        store.set_category(Category::Named("Game".to_string()));
        assert_eq!(ids(&store.visible_projects()), vec![2, 5]);

        store.set_category(Category::Named("Web".to_string()));
        assert_eq!(ids(&store.visible_projects()), vec![1, 3]);

        store.set_category(Category::Named("Nothing".to_string()));
        assert!(store.visible_projects().is_empty());
        assert_eq!(catalog.projects().len(), 5);
    }

    #[test]
    fn test_every_category_is_a_subsequence() {
        let catalog = catalog();
        let mut store = ProjectFilterStore::new(&catalog);
        for category in catalog.categories() {
            store.set_category(category.clone());
            let visible = store.visible_projects();
            assert!(visible.iter().all(|p| category.matches(p)));

            let mut rest = catalog.projects().iter();
            assert!(visible
                .iter()
                .all(|v| rest.any(|p| std::ptr::eq(p, *v))));
        }
    }

    #[test]
    fn test_set_category_idempotent() {
        let catalog = catalog();
        let mut store = ProjectFilterStore::new(&catalog);
        store.set_category(Category::Named("Tool".to_string()));
        let first = ids(&store.visible_projects());
        store.set_category(Category::Named("Tool".to_string()));
        assert_eq!(ids(&store.visible_projects()), first);
    }

    #[test]
    fn test_tech_preview_and_badge() {
        let catalog = &*CATALOG;
        let p = &catalog.projects()[0];
        let (shown, more) = p.tech_preview(3);
        assert_eq!(shown, &p.technologies[..3]);
        assert_eq!(more, 2);
        assert_eq!(p.badge(), "Web");

        let (shown, more) = p.tech_preview(10);
        assert_eq!(shown.len(), 5);
        assert_eq!(more, 0);
    }
}
