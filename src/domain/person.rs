use derive_more::derive::Display;
use once_cell::sync::Lazy;
use regex::Regex;
use serde::Serialize;
use std::net::IpAddr;
use thiserror::Error;

// dot-atom local part (no leading, trailing or doubled dots), at least one dot in the domain
static EMAIL_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[A-Za-z0-9!#$%&'*+/=?^_`{|}~-]+(?:\.[A-Za-z0-9!#$%&'*+/=?^_`{|}~-]+)*@[A-Za-z0-9](?:[A-Za-z0-9-]*[A-Za-z0-9])?(?:\.[A-Za-z0-9](?:[A-Za-z0-9-]*[A-Za-z0-9])?)+$")
        .expect("email pattern is valid")
});

/// A stored person record, as served to clients.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Display)]
#[display("{} {} <{}>", first_name, last_name, email)]
pub struct Person {
    pub id: i64,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub ip_address: String,
}

/// The four writable fields of a person, already checked for presence and format.
///
/// Only [`NewPerson::new`] builds one, so anything handed to the repository
/// has passed validation.
#[derive(Debug, Clone, PartialEq, Eq, Display)]
#[display("{} {} <{}>", first_name, last_name, email)]
pub struct NewPerson {
    first_name: String,
    last_name: String,
    email: String,
    ip_address: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("{field}: field is required")]
    Required { field: &'static str },

    #[error("email: '{value}' is not a valid email address")]
    InvalidEmail { value: String },

    #[error("ip_address: '{value}' is not a valid IP address")]
    InvalidIp { value: String },
}

impl NewPerson {
    pub fn new(
        first_name: Option<String>,
        last_name: Option<String>,
        email: Option<String>,
        ip_address: Option<String>,
    ) -> Result<Self, ValidationError> {
        let first_name = required("first_name", first_name)?;
        let last_name = required("last_name", last_name)?;
        let email = required("email", email)?;
        let ip_address = required("ip_address", ip_address)?;

        if !is_valid_email(&email) {
            return Err(ValidationError::InvalidEmail { value: email });
        }

        if !is_valid_ip(&ip_address) {
            return Err(ValidationError::InvalidIp { value: ip_address });
        }

        Ok(Self {
            first_name,
            last_name,
            email,
            ip_address,
        })
    }

    pub fn first_name(&self) -> &str {
        &self.first_name
    }

    pub fn last_name(&self) -> &str {
        &self.last_name
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn ip_address(&self) -> &str {
        &self.ip_address
    }

    pub fn with_id(self, id: i64) -> Person {
        Person {
            id,
            first_name: self.first_name,
            last_name: self.last_name,
            email: self.email,
            ip_address: self.ip_address,
        }
    }
}

fn required(field: &'static str, value: Option<String>) -> Result<String, ValidationError> {
    match value {
        Some(v) if !v.is_empty() => Ok(v),
        _ => Err(ValidationError::Required { field }),
    }
}

pub fn is_valid_email(value: &str) -> bool {
    EMAIL_RE.is_match(value)
}

pub fn is_valid_ip(value: &str) -> bool {
    value.parse::<IpAddr>().is_ok()
}
