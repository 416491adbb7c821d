use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// One menu entry as described by the parent process.
///
/// Every field is optional on the wire. A node with children renders as a
/// submenu and is never clickable itself; a node without children is a leaf.
///
/// Decoding is lenient per field: a value of the wrong type (including
/// `null`) reads as that field's default, and a node that is not an object
/// reads as an empty leaf.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MenuNode {
    /// Display text.
    pub title: String,
    /// Protocol id reported back in `clicked`.
    pub id: String,
    /// Render as a separator line. Takes precedence over everything else.
    pub separator: bool,
    /// Whether the entry can be activated.
    pub enabled: bool,
    /// Render the leaf with a check mark.
    pub checked: bool,
    /// Submenu entries.
    #[serde(rename = "items")]
    pub children: Vec<MenuNode>,
}

impl Default for MenuNode {
    fn default() -> Self {
        Self {
            title: String::new(),
            id: String::new(),
            separator: false,
            enabled: true,
            checked: false,
            children: Vec::new(),
        }
    }
}

impl<'de> Deserialize<'de> for MenuNode {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        Value::deserialize(deserializer).map(|value| Self::from_value(&value))
    }
}

impl MenuNode {
    /// A clickable leaf with the given title and id.
    pub fn leaf(title: impl Into<String>, id: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            id: id.into(),
            ..Self::default()
        }
    }

    /// A separator line.
    pub fn separator() -> Self {
        Self {
            separator: true,
            ..Self::default()
        }
    }

    /// A submenu containing `children`.
    pub fn submenu(title: impl Into<String>, children: Vec<MenuNode>) -> Self {
        Self {
            title: title.into(),
            children,
            ..Self::default()
        }
    }

    /// True when this node renders as a submenu.
    pub fn is_submenu(&self) -> bool {
        !self.separator && !self.children.is_empty()
    }

    /// Read a node from raw JSON, defaulting every missing or mistyped field.
    pub fn from_value(value: &Value) -> Self {
        let text = |key: &str| {
            value
                .get(key)
                .and_then(Value::as_str)
                .unwrap_or_default()
                .to_string()
        };
        let flag = |key: &str, default: bool| {
            value.get(key).and_then(Value::as_bool).unwrap_or(default)
        };

        Self {
            title: text("title"),
            id: text("id"),
            separator: flag("separator", false),
            enabled: flag("enabled", true),
            checked: flag("checked", false),
            children: Self::list_from_value(value.get("items")),
        }
    }

    /// Read a node list. Anything but an array is an empty list.
    pub fn list_from_value(value: Option<&Value>) -> Vec<Self> {
        value
            .and_then(Value::as_array)
            .map(|items| items.iter().map(Self::from_value).collect())
            .unwrap_or_default()
    }
}
