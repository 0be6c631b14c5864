/// A column of a member record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum RecordField {
    Id,
    Name,
    Email,
    Role,
}

impl RecordField {
    /// Every field, in display order.
    pub const ALL: [Self; 4] = [Self::Id, Self::Name, Self::Email, Self::Role];

    /// Fields an operator may change while a row is in edit mode.
    pub const EDITABLE: [Self; 3] = [Self::Name, Self::Email, Self::Role];

    /// Column header label.
    pub fn label(self) -> &'static str {
        match self {
            Self::Id => "ID",
            Self::Name => "Name",
            Self::Email => "Email",
            Self::Role => "Role",
        }
    }

    pub fn is_editable(self) -> bool {
        !matches!(self, Self::Id)
    }
}
