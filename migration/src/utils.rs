use entity::IdentityProvider;
use sea_orm_migration::prelude::*;

/// Foreign key from `table.column` to the identity table. Identities removed
/// by the provider take the referencing rows with them.
pub(crate) fn identity_foreign_key<T, C>(
    identity: &IdentityProvider,
    name: &str,
    table: T,
    column: C,
) -> ForeignKeyCreateStatement
where
    T: IntoIden + 'static,
    C: IntoIden + 'static,
{
    ForeignKey::create()
        .name(name)
        .from(table, column)
        .to(
            Alias::new(identity.table()),
            Alias::new(identity.id_column()),
        )
        .on_delete(ForeignKeyAction::Cascade)
        .to_owned()
}
