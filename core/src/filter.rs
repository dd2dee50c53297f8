//! Project category filter

use std::fmt;
use std::str::FromStr;

use crate::content::Project;
use crate::error::Error;

/// Category selectable above the project grid
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash)]
pub enum Category {
    #[default]
    All,
    Website,
    Dashboard,
    Portfolio,
}

impl Category {
    /// Every category in button order.
    pub const ALL: [Category; 4] = [
        Category::All,
        Category::Website,
        Category::Dashboard,
        Category::Portfolio,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Category::All => "All",
            Category::Website => "Website",
            Category::Dashboard => "Dashboard",
            Category::Portfolio => "Portfolio",
        }
    }

    /// Membership test: `All` admits everything, otherwise the label must
    /// appear verbatim in the project's categories.
    pub fn admits(&self, project: &Project) -> bool {
        match self {
            Category::All => true,
            other => project.has_category(other.label()),
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Category {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Category::ALL
            .into_iter()
            .find(|c| c.label() == s)
            .ok_or_else(|| Error::UnknownCategory(s.to_string()))
    }
}

/// Projects visible under `category`, in list order.
pub fn filter_projects(projects: &[Project], category: Category) -> Vec<&Project> {
    projects.iter().filter(|p| category.admits(p)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::PROJECTS;

    fn project(id: u32, categories: &'static [&'static str]) -> Project {
        Project {
            id,
            title: "t",
            description: "d",
            image: "i",
            categories,
            technologies: &[],
            repository: None,
            live: None,
        }
    }

    #[test]
    fn test_all_returns_everything() {
        let visible = filter_projects(PROJECTS, Category::All);
        assert_eq!(visible.len(), PROJECTS.len());
    }

    #[test]
    fn test_dashboard_selects_single_project() {
        let visible = filter_projects(PROJECTS, Category::Dashboard);
        assert_eq!(visible.len(), 1);
        assert_eq!(visible[0].title, "Women Empowerment");
    }

    #[test]
    fn test_website_is_case_sensitive() {
        let visible = filter_projects(PROJECTS, Category::Website);
        let ids: Vec<u32> = visible.iter().map(|p| p.id).collect();
        assert_eq!(ids, vec![2]);
    }

    #[test]
    fn test_filter_preserves_order() {
        let projects = [
            project(3, &["Portfolio"]),
            project(1, &["Website"]),
            project(2, &["Portfolio", "Website"]),
        ];
        let ids: Vec<u32> = filter_projects(&projects, Category::Portfolio)
            .iter()
            .map(|p| p.id)
            .collect();
        assert_eq!(ids, vec![3, 2]);
    }

    #[test]
    fn test_filter_can_be_empty() {
        let projects = [project(1, &["Website"])];
        assert!(filter_projects(&projects, Category::Dashboard).is_empty());
    }

    #[test]
    fn test_filter_is_idempotent() {
        for category in Category::ALL {
            let once = filter_projects(PROJECTS, category);
            let again = filter_projects(PROJECTS, category);
            assert_eq!(once, again);
        }
    }

    #[test]
    fn test_parse_category() {
        assert_eq!("Dashboard".parse::<Category>().unwrap(), Category::Dashboard);
        assert_eq!(Category::Portfolio.to_string(), "Portfolio");
        assert!(matches!(
            "Blog".parse::<Category>(),
            Err(Error::UnknownCategory(s)) if s == "Blog"
        ));
    }
}
