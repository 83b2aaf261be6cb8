use portfolio_models::catalog::SkillCategory;
use serde::{ser::SerializeMap, Serialize, Serializer};

/// Skill categories rendered as a JSON object, keeping the configured
/// category order.
#[derive(Debug, Clone)]
pub struct ApiSkills(pub Vec<SkillCategory>);

impl Serialize for ApiSkills {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut map = serializer.serialize_map(Some(self.0.len()))?;
        for SkillCategory { category, items } in &self.0 {
            map.serialize_entry(category, items)?;
        }
        map.end()
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct ApiIndex {
    pub endpoints: &'static [&'static str],
    pub message: String,
}
