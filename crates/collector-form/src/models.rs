//! Form Models
//!
//! Data structures exchanged with the backend and the geography service.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize};

use crate::error::FieldNameError;

/// Recyclable item category (matches backend `/itemTypes`)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ItemCategory {
    #[serde(deserialize_with = "numeric_id")]
    pub id: u32,
    pub title: String,
    #[serde(rename = "imageURL")]
    pub image_url: String,
}

/// Accept ids sent either as JSON numbers or as numeric strings
fn numeric_id<'de, D>(deserializer: D) -> Result<u32, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum RawId {
        Number(u32),
        Text(String),
    }

    match RawId::deserialize(deserializer)? {
        RawId::Number(id) => Ok(id),
        RawId::Text(text) => text.trim().parse().map_err(serde::de::Error::custom),
    }
}

/// Country subdivision record from `/localidades/estados`
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct StateRecord {
    pub sigla: String,
}

/// Locality record from `/localidades/estados/{uf}/municipios`
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct CityRecord {
    pub nome: String,
}

/// Geographic point
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Coordinate {
    pub latitude: f64,
    pub longitude: f64,
}

impl Coordinate {
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self { latitude, longitude }
    }
}

impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({:.6}, {:.6})", self.latitude, self.longitude)
    }
}

/// Text inputs of the "Dados" fieldset
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldName {
    Name,
    Email,
    Whatsapp,
}

impl FieldName {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Email => "email",
            Self::Whatsapp => "whatsapp",
        }
    }
}

impl FromStr for FieldName {
    type Err = FieldNameError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "name" => Ok(Self::Name),
            "email" => Ok(Self::Email),
            "whatsapp" => Ok(Self::Whatsapp),
            other => Err(FieldNameError(other.to_string())),
        }
    }
}

/// Contact fields, merged one field at a time
#[derive(Debug, Clone, PartialEq, Default)]
pub struct FormFields {
    pub name: String,
    pub email: String,
    pub whatsapp: String,
}

impl FormFields {
    pub fn set(&mut self, field: FieldName, value: String) {
        match field {
            FieldName::Name => self.name = value,
            FieldName::Email => self.email = value,
            FieldName::Whatsapp => self.whatsapp = value,
        }
    }

    pub fn get(&self, field: FieldName) -> &str {
        match field {
            FieldName::Name => &self.name,
            FieldName::Email => &self.email,
            FieldName::Whatsapp => &self.whatsapp,
        }
    }
}

/// Body of `POST /collectorPoints`
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CollectorPointPayload {
    pub name: String,
    pub email: String,
    pub whatsapp: String,
    pub uf: String,
    pub city: String,
    pub latitude: f64,
    pub longitude: f64,
    pub items: Vec<u32>,
}
