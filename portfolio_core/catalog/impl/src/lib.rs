use std::sync::Arc;

use portfolio_core_catalog_contracts::CatalogService;
use portfolio_models::catalog::{Catalog, Experience, Profile, Project, SkillCategory};

#[derive(Debug, Clone)]
pub struct CatalogServiceImpl {
    catalog: Arc<Catalog>,
}

impl CatalogServiceImpl {
    pub fn new(catalog: impl Into<Arc<Catalog>>) -> Self {
        Self {
            catalog: catalog.into(),
        }
    }
}

impl CatalogService for CatalogServiceImpl {
    fn get_about(&self) -> Profile {
        self.catalog.about.clone()
    }

    fn get_skills(&self) -> Vec<SkillCategory> {
        self.catalog.skills.clone()
    }

    fn get_projects(&self) -> Vec<Project> {
        self.catalog.projects.clone()
    }

    fn get_experience(&self) -> Vec<Experience> {
        self.catalog.experience.clone()
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn catalog() -> Catalog {
        Catalog {
            about: Profile {
                name: "Ada Lovelace".into(),
                location: "London, UK".into(),
                role: "Analyst".into(),
                bio: "Wrote the first program.".into(),
                email: "ada@example.com".into(),
                linkedin: "https://linkedin.com/in/ada".into(),
                github: "https://github.com/ada".into(),
            },
            skills: vec![
                SkillCategory {
                    category: "Languages".into(),
                    items: vec!["Note G".into()],
                },
                SkillCategory {
                    category: "Machines".into(),
                    items: vec!["Analytical Engine".into(), "Difference Engine".into()],
                },
            ],
            projects: vec![Project {
                title: "Bernoulli numbers".into(),
                description: "Computes Bernoulli numbers.".into(),
                tech_used: vec!["Analytical Engine".into()],
                github_link: "https://github.com/ada/bernoulli".into(),
            }],
            experience: vec![Experience {
                company: "Babbage & Co".into(),
                role: "Translator".into(),
                location: "London".into(),
                start_date: "1842".into(),
                end_date: "1843".into(),
                responsibilities: vec!["Annotated Menabrea's memoir.".into()],
            }],
        }
    }

    #[test]
    fn returns_catalog_unchanged() {
        // Arrange
        let expected = catalog();
        let sut = CatalogServiceImpl::new(expected.clone());

        // Act
        let about = sut.get_about();
        let skills = sut.get_skills();
        let projects = sut.get_projects();
        let experience = sut.get_experience();

        // Assert
        assert_eq!(about, expected.about);
        assert_eq!(skills, expected.skills);
        assert_eq!(projects, expected.projects);
        assert_eq!(experience, expected.experience);
    }

    #[test]
    fn clones_share_catalog() {
        let sut = CatalogServiceImpl::new(catalog());
        let clone = sut.clone();
        assert!(Arc::ptr_eq(&sut.catalog, &clone.catalog));
    }
}
