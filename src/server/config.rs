use std::str::FromStr;

use crate::server::{
    error::{config::ConfigError, AppError},
    service::bee::policy::{
        BeeCreationPolicy, DEFAULT_REQUIRED_END_HOUR, DEFAULT_REQUIRED_PAY,
        DEFAULT_REQUIRED_START_HOUR,
    },
};

const DEFAULT_BIND_ADDR: &str = "0.0.0.0:8080";

pub struct Config {
    pub database_url: String,
    pub bind_addr: String,

    pub bee_required_start_hour: i32,
    pub bee_required_end_hour: i32,
    pub bee_required_pay: i32,
}

impl Config {
    pub fn from_env() -> Result<Self, AppError> {
        Ok(Self {
            database_url: std::env::var("DATABASE_URL")
                .map_err(|_| ConfigError::MissingEnvVar("DATABASE_URL".to_string()))?,
            bind_addr: std::env::var("BIND_ADDR").unwrap_or_else(|_| DEFAULT_BIND_ADDR.to_string()),
            bee_required_start_hour: hour_var(
                "BEE_REQUIRED_START_HOUR",
                DEFAULT_REQUIRED_START_HOUR,
            )?,
            bee_required_end_hour: hour_var("BEE_REQUIRED_END_HOUR", DEFAULT_REQUIRED_END_HOUR)?,
            bee_required_pay: parsed_var("BEE_REQUIRED_PAY", DEFAULT_REQUIRED_PAY)?,
        })
    }

    pub fn bee_policy(&self) -> BeeCreationPolicy {
        BeeCreationPolicy {
            required_start_hour: self.bee_required_start_hour,
            required_end_hour: self.bee_required_end_hour,
            required_pay: self.bee_required_pay,
        }
    }
}

/// Reads an optional variable, falling back to `default` when unset.
fn parsed_var<T>(name: &str, default: T) -> Result<T, ConfigError>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    match std::env::var(name) {
        Ok(value) => parse_value(name, &value),
        Err(_) => Ok(default),
    }
}

fn parse_value<T>(name: &str, value: &str) -> Result<T, ConfigError>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    value.parse::<T>().map_err(|e| ConfigError::InvalidValue {
        name: name.to_string(),
        value: value.to_string(),
        reason: e.to_string(),
    })
}

/// Reads an optional hour of the day, which must lie within 0..=23.
fn hour_var(name: &str, default: i32) -> Result<i32, ConfigError> {
    let hour = parsed_var(name, default)?;
    check_hour(name, hour)
}

fn check_hour(name: &str, hour: i32) -> Result<i32, ConfigError> {
    if !(0..=23).contains(&hour) {
        return Err(ConfigError::InvalidValue {
            name: name.to_string(),
            value: hour.to_string(),
            reason: "hour must be between 0 and 23".to_string(),
        });
    }

    Ok(hour)
}
