use crate::error::{Error, Result};
use sea_orm::{ActiveValue, DbErr, DeleteResult, Value};
use std::fmt::Display;

pub fn set_option<T>(value: Option<T>) -> ActiveValue<T>
where
    T: Into<Value>,
{
    match value {
        Some(value) => ActiveValue::Set(value),
        None => ActiveValue::NotSet,
    }
}

/// An update that matched no row comes back as one of two errors depending on
/// whether the backend supports `RETURNING`.
pub fn updated<T>(
    res: std::result::Result<T, DbErr>,
    entity: &'static str,
    id: impl Display,
) -> Result<T> {
    match res {
        Err(DbErr::RecordNotUpdated | DbErr::RecordNotFound(_)) => {
            Err(Error::not_found(entity, id))
        }
        res => Ok(res?),
    }
}

pub fn deleted(res: DeleteResult, entity: &'static str, id: impl Display) -> Result {
    if res.rows_affected == 0 {
        return Err(Error::not_found(entity, id));
    }

    Ok(())
}
