use portfolio_models::catalog::{Experience, Profile, Project, SkillCategory};

/// Read-only access to the portfolio data.
#[cfg_attr(feature = "mock", mockall::automock)]
pub trait CatalogService: Send + Sync + 'static {
    fn get_about(&self) -> Profile;

    /// Returns the skill categories in display order.
    fn get_skills(&self) -> Vec<SkillCategory>;

    fn get_projects(&self) -> Vec<Project>;

    fn get_experience(&self) -> Vec<Experience>;
}

#[cfg(feature = "mock")]
impl MockCatalogService {
    pub fn with_get_about(mut self, result: Profile) -> Self {
        self.expect_get_about().once().return_const(result);
        self
    }

    pub fn with_get_skills(mut self, result: Vec<SkillCategory>) -> Self {
        self.expect_get_skills().once().return_const(result);
        self
    }

    pub fn with_get_projects(mut self, result: Vec<Project>) -> Self {
        self.expect_get_projects().once().return_const(result);
        self
    }

    pub fn with_get_experience(mut self, result: Vec<Experience>) -> Self {
        self.expect_get_experience().once().return_const(result);
        self
    }
}
