//! Conversion options shared by the emitter pipeline and the CLI.
//!
//! Options are plain data. Every pipeline stage that needs them receives a
//! `&ConvertOptions` explicitly; nothing reads configuration from globals.

use serde::{Deserialize, Serialize};

/// Default entry name treated as the constructor in an instance table.
pub const DEFAULT_CONSTRUCTOR_KEY: &str = "init";

/// Default global object that unqualified namespaces hang off.
pub const DEFAULT_GLOBAL_OBJECT: &str = "window";

/// Layout convention for per-instance data initializers.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TargetDialect {
    /// `this.member = value;` statements inside the constructor body (ES2015 classes).
    #[default]
    InlineFields,
    /// `member = value;` field declarations beside the constructor (ES2022 class fields).
    DeclaredFields,
}

impl TargetDialect {
    /// Map a script target or dialect name to a dialect.
    ///
    /// Matching ignores case, `-`, `_` and whitespace, so `ES2015`, `es-2015`
    /// and `es2015` are equivalent.
    pub fn from_target_name(value: &str) -> Option<Self> {
        let mut normalized = String::with_capacity(value.len());
        for ch in value.chars() {
            if ch == '-' || ch == '_' || ch.is_whitespace() {
                continue;
            }
            normalized.push(ch.to_ascii_lowercase());
        }

        match normalized.as_str() {
            "es6" | "es2015" | "es2016" | "inline" | "inlinefields" => Some(Self::InlineFields),
            "es2017" | "es2018" | "es2019" | "es2020" | "es2021" | "es2022" | "esnext"
            | "declared" | "declaredfields" => Some(Self::DeclaredFields),
            _ => None,
        }
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::InlineFields => "inline",
            Self::DeclaredFields => "declared",
        }
    }
}

/// Options consumed by one conversion run.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ConvertOptions {
    /// Instance-table key whose function becomes the class constructor.
    pub constructor_key: String,
    /// Whether the class extends a superclass.
    pub extended: bool,
    /// Dotted namespace of the superclass, e.g. `app.base.Component`.
    pub extended_namespace: Option<String>,
    /// Where instance data initializers are placed.
    pub target: TargetDialect,
    /// Identifier of the global namespace root.
    pub global_object: String,
}

impl Default for ConvertOptions {
    fn default() -> Self {
        Self {
            constructor_key: DEFAULT_CONSTRUCTOR_KEY.to_string(),
            extended: false,
            extended_namespace: None,
            target: TargetDialect::default(),
            global_object: DEFAULT_GLOBAL_OBJECT.to_string(),
        }
    }
}

impl ConvertOptions {
    pub fn with_target(mut self, target: TargetDialect) -> Self {
        self.target = target;
        self
    }

    pub fn with_constructor_key(mut self, key: impl Into<String>) -> Self {
        self.constructor_key = key.into();
        self
    }

    /// Request a superclass living at the dotted `namespace`.
    pub fn with_extends(mut self, namespace: impl Into<String>) -> Self {
        self.extended = true;
        self.extended_namespace = Some(namespace.into());
        self
    }

    /// Request a superclass without naming it. Conversion leaves the class
    /// unextended and reports a warning.
    pub fn with_unnamed_extends(mut self) -> Self {
        self.extended = true;
        self.extended_namespace = None;
        self
    }

    pub fn with_global_object(mut self, name: impl Into<String>) -> Self {
        self.global_object = name.into();
        self
    }

    /// The extended namespace, treating an empty string as absent.
    pub fn extended_namespace(&self) -> Option<&str> {
        self.extended_namespace
            .as_deref()
            .filter(|namespace| !namespace.is_empty())
    }
}

#[cfg(test)]
#[path = "../tests/common.rs"]
mod tests;
