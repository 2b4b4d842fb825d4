use crate::field_type::FieldType;

/// Defines a column of a census file.
///
/// A column is matched against the file header by position and text. When it is bound to a
/// field name the column's cells are converted to its [FieldType] and made available on the
/// parsed row under that name. Unbound columns are only checked for presence.
///
/// # Examples
/// ```
/// use census_analyser::column::Column;
/// use census_analyser::field_type::FieldType;
/// let column = Column::new("Population", FieldType::Integer)
///     .with_field("population");
/// assert_eq!(column.field(), Some("population"));
/// ```
#[derive(Clone, Debug)]
pub struct Column {
    header: String,
    field: Option<String>,
    field_type: FieldType,
}

impl Column {
    /// Create a new unbound [Column]
    ///
    /// # Arguments
    /// * `header` - the header text the file must carry at this position
    /// * `field_type` - the type cells of this column must convert to
    pub fn new(header: &str, field_type: FieldType) -> Column {
        Column {
            header: header.to_string(),
            field: None,
            field_type,
        }
    }

    /// Get the header text for this column.
    pub fn header(&self) -> &str {
        &self.header
    }

    /// Get the field name this column is bound to, if any.
    pub fn field(&self) -> Option<&str> {
        self.field.as_deref()
    }

    /// Get the [FieldType] for this column.
    pub fn field_type(&self) -> FieldType {
        self.field_type
    }

    /// Bind this column to a field name
    pub fn with_field(mut self, field: &str) -> Column {
        self.field = Some(field.to_string());
        self
    }
}
