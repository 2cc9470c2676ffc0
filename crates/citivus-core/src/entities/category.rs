use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// A taxonomy label. Referenced by blog posts; never owns content.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct Category {
    #[schemars(length(min = 1))]
    pub name: String,
}
