use std::borrow::Cow;
use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::{ModelError, RecordField, RecordId};

/// One member row as served by the members endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    pub id: RecordId,
    pub name: String,
    pub email: String,
    pub role: String,
}

impl Record {
    pub fn new(
        id: RecordId,
        name: impl Into<String>,
        email: impl Into<String>,
        role: impl Into<String>,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            email: email.into(),
            role: role.into(),
        }
    }

    /// String representation of a field, as searched and displayed.
    pub fn field_text(&self, field: RecordField) -> Cow<'_, str> {
        match field {
            RecordField::Id => Cow::Owned(self.id.to_string()),
            RecordField::Name => Cow::Borrowed(&self.name),
            RecordField::Email => Cow::Borrowed(&self.email),
            RecordField::Role => Cow::Borrowed(&self.role),
        }
    }

    /// Overwrite an editable field.
    ///
    /// Returns `false` (and leaves the record untouched) for the id column.
    pub fn set_field(&mut self, field: RecordField, value: impl Into<String>) -> bool {
        let slot = match field {
            RecordField::Id => return false,
            RecordField::Name => &mut self.name,
            RecordField::Email => &mut self.email,
            RecordField::Role => &mut self.role,
        };
        *slot = value.into();
        true
    }
}

/// Check that no two records share an id.
pub fn ensure_unique_ids(records: &[Record]) -> Result<(), ModelError> {
    let mut seen = HashSet::with_capacity(records.len());
    for record in records {
        if !seen.insert(record.id) {
            return Err(ModelError::DuplicateId(record.id));
        }
    }
    Ok(())
}
