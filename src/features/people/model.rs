use crate::domain::{NewPerson, Person, ValidationError};
use serde::{Deserialize, Serialize};

/// Row shape of the `people` table.
#[derive(sqlx::FromRow, Debug, Clone, PartialEq, Eq)]
pub struct DbPerson {
    pub id: i64,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub ip_address: String,
}

impl From<DbPerson> for Person {
    fn from(row: DbPerson) -> Self {
        Person {
            id: row.id,
            first_name: row.first_name,
            last_name: row.last_name,
            email: row.email,
            ip_address: row.ip_address,
        }
    }
}

/// Request body for create and update.
///
/// Every field is optional at the JSON level so that a missing field is
/// reported by name instead of as a generic decode failure. Unknown members,
/// a client supplied `id` included, are ignored: ids come from the database.
#[derive(Deserialize, Debug, Default)]
pub struct PersonPayload {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub email: Option<String>,
    pub ip_address: Option<String>,
}

impl TryFrom<PersonPayload> for NewPerson {
    type Error = ValidationError;

    fn try_from(payload: PersonPayload) -> Result<Self, Self::Error> {
        NewPerson::new(
            payload.first_name,
            payload.last_name,
            payload.email,
            payload.ip_address,
        )
    }
}

#[derive(Serialize, Debug)]
pub struct DataResponse<T: Serialize> {
    pub data: T,
}

#[derive(Serialize, Debug)]
pub struct MessageResponse {
    pub message: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
}

impl MessageResponse {
    pub fn success() -> Self {
        Self {
            message: "Success",
            id: None,
        }
    }

    pub fn created(id: i64) -> Self {
        Self {
            message: "Success",
            id: Some(id),
        }
    }
}
