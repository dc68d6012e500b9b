//! Mixin-on attribute toggler

use serde::{Deserialize, Serialize};

/// Mixin-on configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MixinOnConfig {
    /// Activation event name
    pub on: String,
    /// Mixin names applied on activation
    pub mixins: Vec<String>,
}

/// Applies a set of mixins to an entity's mixin attribute when the
/// configured event fires.
///
/// The component itself only decides the attribute value; writing it to
/// the entity is the host's job.
#[derive(Debug, Clone)]
pub struct MixinOn {
    config: MixinOnConfig,
}

impl MixinOn {
    /// Create the toggler
    pub fn new(on: impl Into<String>, mixins: Vec<String>) -> Self {
        Self {
            config: MixinOnConfig {
                on: on.into(),
                mixins,
            },
        }
    }

    /// Create from a config
    pub fn from_config(config: MixinOnConfig) -> Self {
        Self { config }
    }

    /// The configuration
    pub fn config(&self) -> &MixinOnConfig {
        &self.config
    }

    /// On a matching event, the space-joined mixin list to assign to
    /// the entity's mixin attribute; None otherwise
    pub fn handle_event(&self, event: &str) -> Option<String> {
        if event == self.config.on {
            Some(self.config.mixins.join(" "))
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_matching_event_joins_mixins() {
        let mixin = MixinOn::new("hover", vec!["glow".to_string(), "big".to_string()]);
        assert_eq!(mixin.handle_event("hover"), Some("glow big".to_string()));
    }

    #[test]
    fn test_non_matching_event_is_ignored() {
        let mixin = MixinOn::new("hover", vec!["glow".to_string()]);
        assert_eq!(mixin.handle_event("click"), None);
    }

    #[test]
    fn test_empty_mixin_list() {
        let mixin = MixinOn::new("hover", Vec::new());
        assert_eq!(mixin.handle_event("hover"), Some(String::new()));
    }
}
