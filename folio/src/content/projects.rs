use std::fmt;

use crate::assets::AssetId;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Category {
    UiUx,
    React,
    Photography,
    Writing,
    VideoEditing,
}

impl Category {
    pub fn label(self) -> &'static str {
        match self {
            Category::UiUx => "UI/UX",
            Category::React => "React",
            Category::Photography => "Photography",
            Category::Writing => "Writing",
            Category::VideoEditing => "Video Editing",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

// portfolio selector
//
// the tabs are always shown in the order of CategoryFilter::all()
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum CategoryFilter {
    #[default]
    All,
    Only(Category),
}

impl CategoryFilter {
    pub fn all() -> Vec<Self> {
        vec![
            CategoryFilter::All,
            CategoryFilter::Only(Category::UiUx),
            CategoryFilter::Only(Category::React),
            CategoryFilter::Only(Category::Photography),
            CategoryFilter::Only(Category::Writing),
            CategoryFilter::Only(Category::VideoEditing),
        ]
    }

    pub fn label(self) -> &'static str {
        match self {
            CategoryFilter::All => "All",
            CategoryFilter::Only(category) => category.label(),
        }
    }

    pub fn matches(self, category: Category) -> bool {
        match self {
            CategoryFilter::All => true,
            CategoryFilter::Only(wanted) => wanted == category,
        }
    }
}

impl From<Category> for CategoryFilter {
    fn from(value: Category) -> Self {
        CategoryFilter::Only(value)
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Project {
    pub id: u32,
    pub title: &'static str,
    pub category: Category,
    pub description: &'static str,
    pub image: AssetId,
    pub tags: &'static [&'static str],
}

/// Keeps the relative order of `projects`; `All` returns every entry.
pub fn filter_projects(filter: CategoryFilter, projects: &[Project]) -> Vec<&Project> {
    projects.iter().filter(|p| filter.matches(p.category)).collect()
}

const REACT_CODE_IMAGE: &str = "https://images.unsplash.com/photo-1591267990439-bc68529677c3?crop=entropy&cs=tinysrgb&fit=max&fm=jpg&q=80&w=1080";

pub static PROJECTS: &[Project] = &[
    Project {
        id: 1,
        title: "E-Commerce Dashboard",
        category: Category::UiUx,
        description: "Modern analytics dashboard with real-time data visualization",
        image: AssetId::Remote(
            "https://images.unsplash.com/photo-1757310998437-b2e8a7bd2e97?crop=entropy&cs=tinysrgb&fit=max&fm=jpg&q=80&w=1080",
        ),
        tags: &["Figma", "Design System", "Dashboard"],
    },
    Project {
        id: 2,
        title: "Portfolio Web App",
        category: Category::React,
        description: "Interactive React portfolio with smooth animations",
        image: AssetId::Remote(REACT_CODE_IMAGE),
        tags: &["React", "TypeScript", "Tailwind"],
    },
    Project {
        id: 3,
        title: "Live Event Visuals",
        category: Category::Photography,
        description: "Dynamic live concert and event photography with dramatic lighting",
        image: AssetId::Bundled("live-event.png"),
        tags: &["Sony A7III", "Event Photography", "Live Concert"],
    },
    Project {
        id: 4,
        title: "Design Thinking Blog",
        category: Category::Writing,
        description: "In-depth articles on UX design methodology and practices",
        image: AssetId::Remote(
            "https://images.unsplash.com/photo-1669139660221-19454e55751e?crop=entropy&cs=tinysrgb&fit=max&fm=jpg&q=80&w=1080",
        ),
        tags: &["UX Writing", "Medium", "Tutorial"],
    },
    Project {
        id: 5,
        title: "Task Management App",
        category: Category::UiUx,
        description: "Simple and intuitive to-do list app with drag & drop functionality",
        image: AssetId::Remote(
            "https://images.unsplash.com/photo-1657032633395-1cb34612f86d?crop=entropy&cs=tinysrgb&fit=max&fm=jpg&q=80&w=1080",
        ),
        tags: &["Mobile", "Figma", "Productivity"],
    },
    Project {
        id: 6,
        title: "React Component Library",
        category: Category::React,
        description: "Reusable component library with Storybook documentation",
        image: AssetId::Remote(REACT_CODE_IMAGE),
        tags: &["React", "Components", "Storybook"],
    },
    Project {
        id: 7,
        title: "Brand Promo Video",
        category: Category::VideoEditing,
        description: "Dynamic promotional video with motion graphics and color grading",
        image: AssetId::Remote(
            "https://images.unsplash.com/photo-1695218716405-5b813000e994?crop=entropy&cs=tinysrgb&fit=max&fm=jpg&q=80&w=1080",
        ),
        tags: &["Premiere Pro", "After Effects", "Motion Graphics"],
    },
];

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    fn ids(projects: &[&Project]) -> Vec<u32> {
        projects.iter().map(|p| p.id).collect()
    }

    #[test]
    fn all_returns_everything_in_order() {
        let filtered = filter_projects(CategoryFilter::All, PROJECTS);

        assert_eq!(ids(&filtered), vec![1, 2, 3, 4, 5, 6, 7]);
    }

    #[test]
    fn each_category_keeps_only_its_projects_in_order() {
        for filter in CategoryFilter::all() {
            let CategoryFilter::Only(category) = filter else {
                continue;
            };

            let filtered = filter_projects(filter, PROJECTS);
            assert!(filtered.iter().all(|p| p.category == category));

            let expected: Vec<u32> = PROJECTS
                .iter()
                .filter(|p| p.category == category)
                .map(|p| p.id)
                .collect();
            assert_eq!(ids(&filtered), expected, "{category}");
        }
    }

    #[test]
    fn photography_is_the_single_live_event_project() {
        let filtered = filter_projects(Category::Photography.into(), PROJECTS);

        assert_eq!(ids(&filtered), vec![3]);
        assert_eq!(filtered[0].title, "Live Event Visuals");
    }

    #[test]
    fn filters_other_lists_too() {
        let list = [PROJECTS[4].clone(), PROJECTS[0].clone(), PROJECTS[1].clone()];

        let filtered = filter_projects(Category::UiUx.into(), &list);
        assert_eq!(ids(&filtered), vec![5, 1]);

        assert!(filter_projects(Category::Writing.into(), &list).is_empty());
        assert!(filter_projects(CategoryFilter::All, &[]).is_empty());
    }

    #[test]
    fn project_ids_are_unique() {
        let unique: HashSet<u32> = PROJECTS.iter().map(|p| p.id).collect();

        assert_eq!(unique.len(), PROJECTS.len());
    }

    #[test]
    fn tabs_start_with_all() {
        let labels: Vec<&str> = CategoryFilter::all().into_iter().map(|f| f.label()).collect();

        assert_eq!(
            labels,
            vec!["All", "UI/UX", "React", "Photography", "Writing", "Video Editing"]
        );
    }
}
