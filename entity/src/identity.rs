use crate::users;
use sea_orm::{EntityName, IdenStatic};
use serde::{Deserialize, Serialize};

/// Where the user identities referenced by instructors, learners and
/// enrollments live.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum IdentityProvider {
    /// The catalog owns a `users` table and creates it with the schema.
    #[default]
    Local,
    /// Identities are stored in a table owned by another service in the same
    /// database. The column must hold UUIDs.
    External { table: String, id_column: String },
}

impl IdentityProvider {
    pub fn table(&self) -> String {
        match self {
            Self::Local => users::Entity.table_name().to_owned(),
            Self::External { table, .. } => table.clone(),
        }
    }

    pub fn id_column(&self) -> String {
        match self {
            Self::Local => users::Column::Id.as_str().to_owned(),
            Self::External { id_column, .. } => id_column.clone(),
        }
    }

    #[inline]
    pub fn is_local(&self) -> bool {
        matches!(self, Self::Local)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn local_points_at_users_table() {
        let identity = IdentityProvider::Local;
        assert_eq!(identity.table(), "users");
        assert_eq!(identity.id_column(), "id");
    }

    #[test]
    fn external_uses_configured_names() {
        let identity = IdentityProvider::External {
            table: "auth_user".to_owned(),
            id_column: "uuid".to_owned(),
        };
        assert_eq!(identity.table(), "auth_user");
        assert_eq!(identity.id_column(), "uuid");
        assert!(!identity.is_local());
    }
}
