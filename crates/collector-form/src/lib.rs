//! Collector Point Form Core
//!
//! Platform-independent state for the collector point registration form:
//! - models: data exchanged with the backend and the geography service
//! - selection: toggle-membership set of item categories
//! - cascade: UF -> city request tracking
//! - state: form session state, events and effects
//! - error: error kinds surfaced by fetches and the geolocation lookup

pub mod cascade;
pub mod error;
pub mod models;
pub mod selection;
pub mod state;

pub use cascade::{LocalityCascade, LocalityTicket};
pub use error::{ApiError, FieldNameError, GeolocationError};
pub use models::{
    CityRecord, CollectorPointPayload, Coordinate, FieldName, FormFields, ItemCategory, StateRecord,
};
pub use selection::SelectedItems;
pub use state::{FetchStatus, FormEffect, FormEvent, FormState, SubmissionStatus, UNSELECTED};
