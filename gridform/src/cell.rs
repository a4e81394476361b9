use serde::{Deserialize, Serialize};

/// The value held by a single grid cell.
///
/// A cell's shape is fixed when the grid is configured: cells in selectable
/// columns hold a `Flag`, cells in input columns hold `Text`. The shape never
/// changes afterwards, only the contained value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum CellValue {
    /// Selected-flag of a cell in a selectable column.
    Flag(bool),

    /// Free text of a cell in an input column.
    Text(String),
}

impl CellValue {
    /// Try to get this value as a selected-flag.
    pub fn as_flag(&self) -> Option<bool> {
        match self {
            Self::Flag(flag) => Some(*flag),
            Self::Text(_) => None,
        }
    }

    /// Try to get this value as text.
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(text) => Some(text),
            Self::Flag(_) => None,
        }
    }

    /// Whether this cell is a marked selectable cell.
    pub fn is_selected(&self) -> bool {
        matches!(self, Self::Flag(true))
    }

    /// Whether this cell holds its unselected/empty default.
    pub fn is_default(&self) -> bool {
        match self {
            Self::Flag(flag) => !flag,
            Self::Text(text) => text.is_empty(),
        }
    }

    /// Get the shape name of this value for diagnostics.
    pub fn shape_name(&self) -> &'static str {
        match self {
            Self::Flag(_) => "Flag",
            Self::Text(_) => "Text",
        }
    }

    /// Whether `other` has the same shape as this value.
    pub fn same_shape(&self, other: &Self) -> bool {
        matches!(
            (self, other),
            (Self::Flag(_), Self::Flag(_)) | (Self::Text(_), Self::Text(_))
        )
    }
}

impl From<bool> for CellValue {
    fn from(flag: bool) -> Self {
        Self::Flag(flag)
    }
}

impl From<String> for CellValue {
    fn from(text: String) -> Self {
        Self::Text(text)
    }
}

impl From<&str> for CellValue {
    fn from(text: &str) -> Self {
        Self::Text(text.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accessors() {
        assert_eq!(CellValue::Flag(true).as_flag(), Some(true));
        assert_eq!(CellValue::Flag(true).as_text(), None);
        assert_eq!(CellValue::Text("hi".into()).as_text(), Some("hi"));
        assert_eq!(CellValue::Text("hi".into()).as_flag(), None);
    }

    #[test]
    fn defaults() {
        assert!(CellValue::Flag(false).is_default());
        assert!(!CellValue::Flag(true).is_default());
        assert!(CellValue::Text(String::new()).is_default());
        assert!(!CellValue::Text("x".into()).is_default());
    }

    #[test]
    fn shape_check() {
        let flag = CellValue::Flag(false);
        let text = CellValue::Text(String::new());
        assert!(flag.same_shape(&CellValue::Flag(true)));
        assert!(text.same_shape(&CellValue::Text("a".into())));
        assert!(!flag.same_shape(&text));
    }

    #[test]
    fn untagged_json_round_trip() {
        let flag = CellValue::Flag(true);
        let text = CellValue::Text("lifting".into());

        let flag_json = serde_json::to_string(&flag).unwrap();
        let text_json = serde_json::to_string(&text).unwrap();
        assert_eq!(flag_json, "true");
        assert_eq!(text_json, "\"lifting\"");

        assert_eq!(serde_json::from_str::<CellValue>(&flag_json).unwrap(), flag);
        assert_eq!(serde_json::from_str::<CellValue>(&text_json).unwrap(), text);
    }
}
