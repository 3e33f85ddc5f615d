//! Global configuration shared across components.
//!
//! A [`GlobalConfig`] holds app-wide defaults. A [`ConfigScope`] wraps a
//! parent config with partial [`ConfigOverrides`] and resolves outside-in:
//! each field falls through to the parent unless the scope overrides it.
//! Scopes nest by resolving the parent scope first.

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ComponentSize {
    Large,
    #[default]
    Default,
    Small,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ButtonConfig {
    pub auto_insert_space: bool,
}

impl Default for ButtonConfig {
    fn default() -> Self {
        Self {
            auto_insert_space: true,
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct GlobalConfig {
    pub size: ComponentSize,
    pub button: ButtonConfig,
}

impl GlobalConfig {
    /// Returns a new config with `overrides` applied over `self`.
    pub fn apply(&self, overrides: &ConfigOverrides) -> GlobalConfig {
        GlobalConfig {
            size: overrides.size.unwrap_or(self.size),
            button: overrides.button.clone().unwrap_or_else(|| self.button.clone()),
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ConfigOverrides {
    pub size: Option<ComponentSize>,
    pub button: Option<ButtonConfig>,
}

pub struct ConfigScope<'a> {
    parent: &'a GlobalConfig,
    overrides: ConfigOverrides,
}

impl<'a> ConfigScope<'a> {
    pub fn new(parent: &'a GlobalConfig) -> Self {
        Self {
            parent,
            overrides: ConfigOverrides::default(),
        }
    }

    pub fn with(parent: &'a GlobalConfig, overrides: ConfigOverrides) -> Self {
        Self { parent, overrides }
    }

    pub fn size(&self) -> ComponentSize {
        self.overrides.size.unwrap_or(self.parent.size)
    }

    pub fn button(&self) -> &ButtonConfig {
        self.overrides.button.as_ref().unwrap_or(&self.parent.button)
    }

    /// Collapses the scope chain into an owned config, for handing to a
    /// nested scope.
    pub fn resolve(&self) -> GlobalConfig {
        self.parent.apply(&self.overrides)
    }
}
