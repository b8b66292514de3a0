use serde::Deserialize;

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Fighter {
    pub name: String,
    /// Multi-line text portrait. May be empty.
    #[serde(default)]
    pub art: String,
}

impl Fighter {
    pub fn new(name: impl Into<String>, art: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            art: art.into(),
        }
    }
}
