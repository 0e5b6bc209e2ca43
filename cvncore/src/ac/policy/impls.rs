use std::fmt;
use super::PermissionKey;

// qualifier grants are recorded under this field of a permission
const ACCESS_FIELD: &str = "Access";

impl PermissionKey {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            field: ACCESS_FIELD.to_string(),
        }
    }

    pub fn with_field(mut self, field: impl Into<String>) -> Self {
        self.field = field.into();
        self
    }
}

impl From<&str> for PermissionKey {
    fn from(name: &str) -> Self {
        Self::new(name)
    }
}

impl fmt::Display for PermissionKey {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}/{}", self.name, self.field)
    }
}
