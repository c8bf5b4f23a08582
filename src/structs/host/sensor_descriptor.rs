#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct SensorDescriptor {
    pub name: String,
    pub languages: Vec<String>,
    pub rule_repositories: Vec<String>,
}
