//! Form Session State
//!
//! `FormState` is owned by one form session. Views read it; every change
//! goes through [`FormState::apply`], which returns the side effects the
//! caller must perform. Effect results come back as further events.

use crate::cascade::{LocalityCascade, LocalityTicket};
use crate::error::{ApiError, GeolocationError};
use crate::models::{CollectorPointPayload, Coordinate, FieldName, FormFields, ItemCategory};
use crate::selection::SelectedItems;

/// Value of the UF and city selects before a choice is made
pub const UNSELECTED: &str = "0";

/// Progress of one read request
#[derive(Debug, Clone, PartialEq, Default)]
pub enum FetchStatus {
    #[default]
    Idle,
    Loading,
    Loaded,
    Failed(ApiError),
}

impl FetchStatus {
    pub fn is_loading(&self) -> bool {
        matches!(self, Self::Loading)
    }

    pub fn error(&self) -> Option<&ApiError> {
        match self {
            Self::Failed(err) => Some(err),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default)]
pub enum SubmissionStatus {
    #[default]
    Idle,
    Submitting,
    Submitted,
    Failed(ApiError),
}

/// Inputs to the form: user interactions and completed side effects
#[derive(Debug, Clone, PartialEq)]
pub enum FormEvent {
    ItemCategoriesLoaded(Result<Vec<ItemCategory>, ApiError>),
    SubdivisionsLoaded(Result<Vec<String>, ApiError>),
    LocalitiesLoaded {
        ticket: LocalityTicket,
        result: Result<Vec<String>, ApiError>,
    },
    PositionResolved(Result<Coordinate, GeolocationError>),
    FieldChanged { field: FieldName, value: String },
    SubdivisionSelected(String),
    LocalitySelected(String),
    MapClicked(Coordinate),
    ItemToggled(u32),
    Submitted,
    SubmissionFinished(Result<(), ApiError>),
}

/// Work requested by a transition
#[derive(Debug, Clone, PartialEq)]
pub enum FormEffect {
    FetchItemCategories,
    FetchSubdivisions,
    ProbeGeolocation,
    FetchLocalities(LocalityTicket),
    CreateCollectorPoint(CollectorPointPayload),
    NavigateHome,
}

#[derive(Debug, Clone)]
pub struct FormState {
    fields: FormFields,
    item_categories: Vec<ItemCategory>,
    subdivisions: Vec<String>,
    localities: Vec<String>,
    selected_uf: String,
    selected_city: String,
    initial_position: Coordinate,
    selected_position: Option<Coordinate>,
    selected_items: SelectedItems,
    cascade: LocalityCascade,
    item_status: FetchStatus,
    subdivision_status: FetchStatus,
    locality_status: FetchStatus,
    geolocation_error: Option<GeolocationError>,
    submission: SubmissionStatus,
}

impl FormState {
    /// Fresh state centered on `default_center` until geolocation answers
    pub fn new(default_center: Coordinate) -> Self {
        Self {
            fields: FormFields::default(),
            item_categories: Vec::new(),
            subdivisions: Vec::new(),
            localities: Vec::new(),
            selected_uf: UNSELECTED.to_string(),
            selected_city: UNSELECTED.to_string(),
            initial_position: default_center,
            selected_position: None,
            selected_items: SelectedItems::new(),
            cascade: LocalityCascade::new(),
            item_status: FetchStatus::Idle,
            subdivision_status: FetchStatus::Idle,
            locality_status: FetchStatus::Idle,
            geolocation_error: None,
            submission: SubmissionStatus::Idle,
        }
    }

    /// State for a newly mounted form plus its startup work.
    /// The three startup effects are independent and may resolve in any order.
    pub fn mount(default_center: Coordinate) -> (Self, Vec<FormEffect>) {
        let mut state = Self::new(default_center);
        state.item_status = FetchStatus::Loading;
        state.subdivision_status = FetchStatus::Loading;
        let effects = vec![
            FormEffect::FetchItemCategories,
            FormEffect::FetchSubdivisions,
            FormEffect::ProbeGeolocation,
        ];
        (state, effects)
    }

    pub fn apply(&mut self, event: FormEvent) -> Vec<FormEffect> {
        match event {
            FormEvent::ItemCategoriesLoaded(result) => {
                self.item_status = match result {
                    Ok(items) => {
                        log::info!("[FORM] Loaded {} item categories", items.len());
                        self.item_categories = items;
                        FetchStatus::Loaded
                    }
                    Err(err) => {
                        log::error!("[FORM] Failed to load item categories: {}", err);
                        FetchStatus::Failed(err)
                    }
                };
                Vec::new()
            }
            FormEvent::SubdivisionsLoaded(result) => {
                self.subdivision_status = match result {
                    Ok(codes) => {
                        log::info!("[FORM] Loaded {} UFs", codes.len());
                        self.subdivisions = codes;
                        FetchStatus::Loaded
                    }
                    Err(err) => {
                        log::error!("[FORM] Failed to load UFs: {}", err);
                        FetchStatus::Failed(err)
                    }
                };
                Vec::new()
            }
            FormEvent::LocalitiesLoaded { ticket, result } => {
                if ticket.uf != self.selected_uf || !self.cascade.complete(&ticket) {
                    log::debug!("[FORM] Discarding stale city list for UF {}", ticket.uf);
                    return Vec::new();
                }
                self.locality_status = match result {
                    Ok(names) => {
                        log::info!("[FORM] Loaded {} cities for UF {}", names.len(), ticket.uf);
                        self.localities = names;
                        FetchStatus::Loaded
                    }
                    Err(err) => {
                        log::error!("[FORM] Failed to load cities for UF {}: {}", ticket.uf, err);
                        FetchStatus::Failed(err)
                    }
                };
                Vec::new()
            }
            FormEvent::PositionResolved(result) => {
                match result {
                    Ok(position) => {
                        log::info!("[FORM] Map centered on device position {}", position);
                        self.initial_position = position;
                        self.geolocation_error = None;
                    }
                    Err(err) => {
                        log::warn!("[FORM] Keeping default map center: {}", err);
                        self.geolocation_error = Some(err);
                    }
                }
                Vec::new()
            }
            FormEvent::FieldChanged { field, value } => {
                self.fields.set(field, value);
                Vec::new()
            }
            FormEvent::SubdivisionSelected(uf) => self.select_subdivision(uf),
            FormEvent::LocalitySelected(city) => {
                self.selected_city = city;
                Vec::new()
            }
            FormEvent::MapClicked(position) => {
                self.selected_position = Some(position);
                Vec::new()
            }
            FormEvent::ItemToggled(id) => {
                self.selected_items.toggle(id);
                Vec::new()
            }
            FormEvent::Submitted => self.submit(),
            FormEvent::SubmissionFinished(result) => match result {
                Ok(()) => {
                    log::info!("[FORM] Collector point created");
                    self.submission = SubmissionStatus::Submitted;
                    vec![FormEffect::NavigateHome]
                }
                Err(err) => {
                    log::error!("[FORM] Collector point submission failed: {}", err);
                    self.submission = SubmissionStatus::Failed(err);
                    Vec::new()
                }
            },
        }
    }

    /// The city selection is left as is; the user re-selects it.
    fn select_subdivision(&mut self, uf: String) -> Vec<FormEffect> {
        self.selected_uf = uf;
        if self.selected_uf == UNSELECTED {
            self.cascade.invalidate();
            if self.locality_status.is_loading() {
                self.locality_status = FetchStatus::Idle;
            }
            return Vec::new();
        }
        let ticket = self.cascade.begin(&self.selected_uf);
        self.locality_status = FetchStatus::Loading;
        vec![FormEffect::FetchLocalities(ticket)]
    }

    fn submit(&mut self) -> Vec<FormEffect> {
        if self.submission == SubmissionStatus::Submitting {
            log::warn!("[FORM] Submission already in flight");
            return Vec::new();
        }
        self.submission = SubmissionStatus::Submitting;
        vec![FormEffect::CreateCollectorPoint(self.payload())]
    }

    /// Snapshot of the current selection as the write request body
    pub fn payload(&self) -> CollectorPointPayload {
        CollectorPointPayload {
            name: self.fields.name.clone(),
            email: self.fields.email.clone(),
            whatsapp: self.fields.whatsapp.clone(),
            uf: self.selected_uf.clone(),
            city: self.selected_city.clone(),
            latitude: self.selected_position().latitude,
            longitude: self.selected_position().longitude,
            items: self.selected_items.to_vec(),
        }
    }

    pub fn fields(&self) -> &FormFields {
        &self.fields
    }

    pub fn item_categories(&self) -> &[ItemCategory] {
        &self.item_categories
    }

    pub fn subdivisions(&self) -> &[String] {
        &self.subdivisions
    }

    pub fn localities(&self) -> &[String] {
        &self.localities
    }

    pub fn selected_uf(&self) -> &str {
        &self.selected_uf
    }

    pub fn selected_city(&self) -> &str {
        &self.selected_city
    }

    pub fn initial_position(&self) -> Coordinate {
        self.initial_position
    }

    /// Map-selected point sent with the payload; (0, 0) before any click
    pub fn selected_position(&self) -> Coordinate {
        self.selected_position.unwrap_or_default()
    }

    /// Where the map marker sits: the clicked point, or the map center until then
    pub fn marker_position(&self) -> Coordinate {
        self.selected_position.unwrap_or(self.initial_position)
    }

    pub fn selected_items(&self) -> &SelectedItems {
        &self.selected_items
    }

    pub fn item_status(&self) -> &FetchStatus {
        &self.item_status
    }

    pub fn subdivision_status(&self) -> &FetchStatus {
        &self.subdivision_status
    }

    pub fn locality_status(&self) -> &FetchStatus {
        &self.locality_status
    }

    pub fn geolocation_error(&self) -> Option<&GeolocationError> {
        self.geolocation_error.as_ref()
    }

    pub fn submission(&self) -> &SubmissionStatus {
        &self.submission
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::CityRecord;

    const DEFAULT_CENTER: Coordinate = Coordinate { latitude: -30.140719, longitude: -51.130112 };

    fn mounted() -> FormState {
        FormState::mount(DEFAULT_CENTER).0
    }

    fn fetch_ticket(effects: &[FormEffect]) -> LocalityTicket {
        match effects {
            [FormEffect::FetchLocalities(ticket)] => ticket.clone(),
            other => panic!("expected one locality fetch, got {:?}", other),
        }
    }

    fn cities(json: &str) -> Vec<String> {
        let records: Vec<CityRecord> = serde_json::from_str(json).unwrap();
        records.into_iter().map(|c| c.nome).collect()
    }

    #[test]
    fn test_mount_requests_reference_data_and_position() {
        let (state, effects) = FormState::mount(DEFAULT_CENTER);
        assert_eq!(
            effects,
            vec![
                FormEffect::FetchItemCategories,
                FormEffect::FetchSubdivisions,
                FormEffect::ProbeGeolocation,
            ]
        );
        assert!(state.item_status().is_loading());
        assert!(state.subdivision_status().is_loading());
        assert_eq!(state.selected_uf(), UNSELECTED);
        assert_eq!(state.selected_city(), UNSELECTED);
        assert_eq!(state.initial_position(), DEFAULT_CENTER);
    }

    #[test]
    fn test_reference_data_failure_keeps_lists_empty() {
        let mut state = mounted();
        let err = ApiError::Network("connection refused".to_string());
        state.apply(FormEvent::ItemCategoriesLoaded(Err(err.clone())));
        state.apply(FormEvent::SubdivisionsLoaded(Ok(vec!["RS".to_string(), "SC".to_string()])));

        assert!(state.item_categories().is_empty());
        assert_eq!(state.item_status().error(), Some(&err));
        assert_eq!(state.subdivisions(), &["RS".to_string(), "SC".to_string()]);
        assert_eq!(state.subdivision_status(), &FetchStatus::Loaded);
    }

    #[test]
    fn test_selecting_uf_issues_one_fetch_for_it() {
        let mut state = mounted();
        let effects = state.apply(FormEvent::SubdivisionSelected("RS".to_string()));
        let ticket = fetch_ticket(&effects);
        assert_eq!(ticket.uf, "RS");
        assert!(state.locality_status().is_loading());
    }

    #[test]
    fn test_rs_then_unselected_keeps_city_list() {
        let mut state = mounted();
        let ticket = fetch_ticket(&state.apply(FormEvent::SubdivisionSelected("RS".to_string())));
        state.apply(FormEvent::LocalitiesLoaded {
            ticket,
            result: Ok(cities(r#"[{"nome":"Porto Alegre"},{"nome":"Canoas"}]"#)),
        });
        assert_eq!(state.localities(), &["Porto Alegre".to_string(), "Canoas".to_string()]);

        let effects = state.apply(FormEvent::SubdivisionSelected(UNSELECTED.to_string()));
        assert!(effects.is_empty());
        assert_eq!(state.localities(), &["Porto Alegre".to_string(), "Canoas".to_string()]);
        assert_eq!(state.selected_uf(), UNSELECTED);
    }

    #[test]
    fn test_city_selection_survives_uf_change() {
        let mut state = mounted();
        let ticket = fetch_ticket(&state.apply(FormEvent::SubdivisionSelected("RS".to_string())));
        state.apply(FormEvent::LocalitiesLoaded { ticket, result: Ok(vec!["Canoas".to_string()]) });
        state.apply(FormEvent::LocalitySelected("Canoas".to_string()));

        let ticket = fetch_ticket(&state.apply(FormEvent::SubdivisionSelected("SC".to_string())));
        assert_eq!(state.selected_city(), "Canoas");
        state.apply(FormEvent::LocalitiesLoaded { ticket, result: Ok(vec!["Joinville".to_string()]) });
        assert_eq!(state.selected_city(), "Canoas");
        assert_eq!(state.localities(), &["Joinville".to_string()]);
    }

    #[test]
    fn test_stale_city_response_is_discarded() {
        let mut state = mounted();
        let rs = fetch_ticket(&state.apply(FormEvent::SubdivisionSelected("RS".to_string())));
        let sc = fetch_ticket(&state.apply(FormEvent::SubdivisionSelected("SC".to_string())));

        state.apply(FormEvent::LocalitiesLoaded { ticket: sc, result: Ok(vec!["Joinville".to_string()]) });
        state.apply(FormEvent::LocalitiesLoaded { ticket: rs, result: Ok(vec!["Canoas".to_string()]) });

        assert_eq!(state.localities(), &["Joinville".to_string()]);
        assert_eq!(state.locality_status(), &FetchStatus::Loaded);
    }

    #[test]
    fn test_response_after_unselect_is_discarded() {
        let mut state = mounted();
        let rs = fetch_ticket(&state.apply(FormEvent::SubdivisionSelected("RS".to_string())));
        state.apply(FormEvent::SubdivisionSelected(UNSELECTED.to_string()));
        assert_eq!(state.locality_status(), &FetchStatus::Idle);

        state.apply(FormEvent::LocalitiesLoaded { ticket: rs, result: Ok(vec!["Canoas".to_string()]) });
        assert!(state.localities().is_empty());
    }

    #[test]
    fn test_city_fetch_failure_is_recorded() {
        let mut state = mounted();
        let ticket = fetch_ticket(&state.apply(FormEvent::SubdivisionSelected("RS".to_string())));
        let err = ApiError::MalformedResponse("expected array".to_string());
        state.apply(FormEvent::LocalitiesLoaded { ticket, result: Err(err.clone()) });
        assert_eq!(state.locality_status().error(), Some(&err));
        assert!(state.localities().is_empty());
    }

    #[test]
    fn test_geolocation_only_moves_initial_position() {
        let mut state = mounted();
        let device = Coordinate::new(-29.9, -51.2);
        state.apply(FormEvent::PositionResolved(Ok(device)));
        assert_eq!(state.initial_position(), device);
        assert_eq!(state.selected_position(), Coordinate::default());
        assert_eq!(state.payload().latitude, 0.0);
    }

    #[test]
    fn test_marker_follows_center_until_first_click() {
        let mut state = mounted();
        assert_eq!(state.marker_position(), DEFAULT_CENTER);

        let device = Coordinate::new(-29.9, -51.2);
        state.apply(FormEvent::PositionResolved(Ok(device)));
        assert_eq!(state.marker_position(), device);
        assert_eq!(state.payload().latitude, 0.0);
        assert_eq!(state.payload().longitude, 0.0);

        let clicked = Coordinate::new(-30.05, -51.17);
        state.apply(FormEvent::MapClicked(clicked));
        state.apply(FormEvent::PositionResolved(Ok(Coordinate::new(-28.0, -50.0))));
        assert_eq!(state.marker_position(), clicked);
        assert_eq!(state.selected_position(), clicked);
    }

    #[test]
    fn test_geolocation_failure_keeps_default_center() {
        let mut state = mounted();
        state.apply(FormEvent::PositionResolved(Err(GeolocationError::PermissionDenied)));
        assert_eq!(state.initial_position(), DEFAULT_CENTER);
        assert_eq!(state.geolocation_error(), Some(&GeolocationError::PermissionDenied));
    }

    #[test]
    fn test_map_click_does_not_touch_uf_or_city() {
        let mut state = mounted();
        state.apply(FormEvent::LocalitySelected("Canoas".to_string()));
        let effects = state.apply(FormEvent::MapClicked(Coordinate::new(-30.05, -51.17)));
        assert!(effects.is_empty());
        assert_eq!(state.selected_position(), Coordinate::new(-30.05, -51.17));
        assert_eq!(state.selected_city(), "Canoas");
        assert_eq!(state.selected_uf(), UNSELECTED);
    }

    #[test]
    fn test_item_toggle_sequence() {
        let mut state = mounted();
        for id in [3, 5, 3] {
            state.apply(FormEvent::ItemToggled(id));
        }
        assert_eq!(state.selected_items().as_slice(), &[5]);
    }

    #[test]
    fn test_submit_builds_exact_payload() {
        let mut state = mounted();
        state.apply(FormEvent::PositionResolved(Ok(Coordinate::new(-29.0, -50.0))));
        for (field, value) in [
            (FieldName::Name, "Eco Ponto"),
            (FieldName::Email, "a@b.com"),
            (FieldName::Whatsapp, "5551999999"),
        ] {
            state.apply(FormEvent::FieldChanged { field, value: value.to_string() });
        }
        let ticket = fetch_ticket(&state.apply(FormEvent::SubdivisionSelected("RS".to_string())));
        state.apply(FormEvent::LocalitiesLoaded { ticket, result: Ok(vec!["Canoas".to_string()]) });
        state.apply(FormEvent::LocalitySelected("Canoas".to_string()));
        state.apply(FormEvent::MapClicked(Coordinate::new(-30.05, -51.17)));
        state.apply(FormEvent::ItemToggled(1));
        state.apply(FormEvent::ItemToggled(4));

        let effects = state.apply(FormEvent::Submitted);
        let payload = match effects.as_slice() {
            [FormEffect::CreateCollectorPoint(payload)] => payload,
            other => panic!("expected one write, got {:?}", other),
        };
        assert_eq!(
            serde_json::to_value(payload).unwrap(),
            serde_json::json!({
                "name": "Eco Ponto",
                "email": "a@b.com",
                "whatsapp": "5551999999",
                "uf": "RS",
                "city": "Canoas",
                "latitude": -30.05,
                "longitude": -51.17,
                "items": [1, 4]
            })
        );
        assert_eq!(state.submission(), &SubmissionStatus::Submitting);
    }

    #[test]
    fn test_submit_while_in_flight_is_ignored() {
        let mut state = mounted();
        assert_eq!(state.apply(FormEvent::Submitted).len(), 1);
        assert!(state.apply(FormEvent::Submitted).is_empty());
    }

    #[test]
    fn test_successful_submission_navigates_home() {
        let mut state = mounted();
        state.apply(FormEvent::Submitted);
        let effects = state.apply(FormEvent::SubmissionFinished(Ok(())));
        assert_eq!(effects, vec![FormEffect::NavigateHome]);
        assert_eq!(state.submission(), &SubmissionStatus::Submitted);
    }

    #[test]
    fn test_failed_submission_can_be_retried() {
        let mut state = mounted();
        state.apply(FormEvent::Submitted);
        let err = ApiError::Rejected { status: 400, message: "bad request".to_string() };
        let effects = state.apply(FormEvent::SubmissionFinished(Err(err.clone())));
        assert!(effects.is_empty());
        assert_eq!(state.submission(), &SubmissionStatus::Failed(err));
        assert_eq!(state.apply(FormEvent::Submitted).len(), 1);
    }
}
