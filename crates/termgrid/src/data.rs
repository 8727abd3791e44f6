//! Render input: option record, column list, and row forest.

use serde_json::Value;

use crate::column::Column;
use crate::error::GridError;
use crate::options::GridOptions;

/// One render invocation's input snapshot.
///
/// Rows are JSON objects; a row's `subs` key may hold an ordered array of
/// child rows, forming a tree. The snapshot is consumed by
/// [`render`](crate::render()); derived state never leaks back into
/// caller-owned data.
#[derive(Clone, Debug, Default)]
pub struct GridData {
    pub options: GridOptions,
    pub columns: Vec<Column>,
    pub rows: Vec<Value>,
}

impl GridData {
    /// New snapshot with default options.
    pub fn new(columns: Vec<Column>, rows: Vec<Value>) -> Self {
        GridData {
            options: GridOptions::default(),
            columns,
            rows,
        }
    }

    /// Replace the options.
    pub fn options(mut self, options: GridOptions) -> Self {
        self.options = options;
        self
    }

    /// Builds a snapshot from an untyped `{option?, columns?, rows?}`
    /// document.
    ///
    /// Non-array `columns`/`rows` (and a non-object document) are treated
    /// as empty rather than failing; a malformed column entry or option
    /// object is an error. Columns without a `name` take their `id` as
    /// the display label.
    pub fn from_value(value: Value) -> Result<Self, GridError> {
        let mut data = GridData::default();
        let Value::Object(mut map) = value else {
            return Ok(data);
        };
        if let Some(options) = map.remove("options").or_else(|| map.remove("option")) {
            data.options = serde_json::from_value(options)?;
        }
        if let Some(Value::Array(entries)) = map.remove("columns") {
            data.columns = entries
                .into_iter()
                .map(|entry| {
                    let mut column: Column = serde_json::from_value(entry)
                        .map_err(|err| GridError::InvalidColumn(err.to_string()))?;
                    if column.name.is_empty() {
                        column.name = column.id.clone();
                    }
                    Ok(column)
                })
                .collect::<Result<_, GridError>>()?;
        }
        if let Some(Value::Array(rows)) = map.remove("rows") {
            data.rows = rows;
        }
        Ok(data)
    }

    /// Parses a JSON document and builds a snapshot from it.
    pub fn from_json(json: &str) -> Result<Self, GridError> {
        Self::from_value(serde_json::from_str(json)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn from_value_full_document() {
        let data = GridData::from_value(json!({
            "option": {"padding": 0, "sortField": "age"},
            "columns": [{"id": "name"}, {"id": "age", "type": "number"}],
            "rows": [{"name": "Bob", "age": 30}]
        }))
        .unwrap();
        assert_eq!(data.options.padding, 0);
        assert_eq!(data.options.sort_field.as_deref(), Some("age"));
        assert_eq!(data.columns.len(), 2);
        assert_eq!(data.columns[0].name, "name");
        assert_eq!(data.columns[1].kind.as_deref(), Some("number"));
        assert_eq!(data.rows.len(), 1);
    }

    #[test]
    fn from_value_coerces_non_arrays_to_empty() {
        let data = GridData::from_value(json!({
            "columns": "not an array",
            "rows": 5
        }))
        .unwrap();
        assert!(data.columns.is_empty());
        assert!(data.rows.is_empty());
    }

    #[test]
    fn from_value_non_object_document() {
        let data = GridData::from_value(json!([1, 2, 3])).unwrap();
        assert!(data.columns.is_empty());
        assert!(data.rows.is_empty());
    }

    #[test]
    fn from_value_rejects_malformed_column() {
        let err = GridData::from_value(json!({
            "columns": [{"id": "a", "maxWidth": "wide"}]
        }))
        .unwrap_err();
        assert!(matches!(err, GridError::InvalidColumn(_)));
    }

    #[test]
    fn from_json_parses_document() {
        let data = GridData::from_json(r#"{"columns": [{"id": "x"}], "rows": []}"#).unwrap();
        assert_eq!(data.columns.len(), 1);
        assert!(GridData::from_json("not json").is_err());
    }
}
