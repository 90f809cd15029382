use std::collections::BTreeMap;

use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Icon {
    pub path: String,
}

/// Alternative action shown while a modifier key is held.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Modifier {
    pub subtitle: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub arg: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub valid: Option<bool>,
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    pub variables: BTreeMap<String, String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AlfredItem {
    pub title: String,
    pub subtitle: String,
    pub valid: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub arg: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub uid: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub icon: Option<Icon>,
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    pub variables: BTreeMap<String, String>,
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    pub mods: BTreeMap<String, Modifier>,
}

impl AlfredItem {
    pub fn new(title: impl Into<String>, subtitle: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            subtitle: subtitle.into(),
            valid: true,
            arg: None,
            uid: None,
            icon: None,
            variables: BTreeMap::new(),
            mods: BTreeMap::new(),
        }
    }

    /// A row that only informs and cannot be actioned.
    pub fn info(title: impl Into<String>, subtitle: impl Into<String>) -> Self {
        Self::new(title, subtitle)
            .invalid()
            .icon(super::WORKFLOW_ICON)
    }

    pub fn invalid(mut self) -> Self {
        self.valid = false;
        self
    }

    pub fn arg(mut self, arg: impl Into<String>) -> Self {
        self.arg = Some(arg.into());
        self
    }

    pub fn uid(mut self, uid: impl Into<String>) -> Self {
        self.uid = Some(uid.into());
        self
    }

    pub fn icon(mut self, path: impl Into<String>) -> Self {
        self.icon = Some(Icon { path: path.into() });
        self
    }

    pub fn variable(mut self, key: &str, value: impl Into<String>) -> Self {
        self.variables.insert(key.to_string(), value.into());
        self
    }

    pub fn modifier(mut self, key: &str, modifier: Modifier) -> Self {
        self.mods.insert(key.to_string(), modifier);
        self
    }
}

/// The document an Alfred Script Filter prints.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ScriptFilter {
    pub items: Vec<AlfredItem>,
}

impl ScriptFilter {
    pub fn new(items: Vec<AlfredItem>) -> Self {
        Self { items }
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }
}
