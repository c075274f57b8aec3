//! Public operations over the portal: fetch, interpret, degrade.

use std::sync::Arc;

use ecourts_api::types::{
    CaseDetailsKey, CaseResult, CauseList, CauseListDocument, CauseListMetadata, LocationEntry,
    SearchType, PDF_MIME_TYPE,
};
use ecourts_api::{
    CaseDetailsForm, CauseListForm, Client, CnrSearchForm, CourtComplexForm, CourtForm,
    DistrictForm, Endpoint, PortalConfig,
};

use crate::clock::{Clock, SystemClock};
use crate::error::EcourtsError;
use crate::{case_status, cause_list, location, validation};

/// Facade over the portal transport and the interpreters.
///
/// Each operation comes in two forms. The `try_` form returns the failure
/// (invalid input, transport error, unexpected content). The plain form
/// never fails: it logs the error with `tracing::warn!` and returns the
/// "no data" value for that operation (an empty list, `None`, an empty
/// cause list, or the built-in state list for [`PortalClient::fetch_states`]).
///
/// The client is `Send + Sync`; clones share the connection pool and the
/// portal session cookie.
#[derive(Clone)]
pub struct PortalClient {
    inner: Client,
    clock: Arc<dyn Clock>,
}

impl PortalClient {
    /// Creates a client for the production portal using the system clock.
    pub fn new() -> Result<Self, EcourtsError> {
        Ok(Self::from_client(Client::new()?))
    }

    pub fn with_config(config: PortalConfig) -> Result<Self, EcourtsError> {
        Ok(Self::from_client(Client::with_config(config)?))
    }

    /// Creates a client with a custom base URL. Used for testing.
    pub fn with_base_url(base_url: &str) -> Result<Self, EcourtsError> {
        Ok(Self::from_client(Client::with_base_url(base_url)?))
    }

    pub fn from_client(inner: Client) -> Self {
        Self {
            inner,
            clock: Arc::new(SystemClock),
        }
    }

    /// Replaces the clock used for hearing classification and `fetched_at`.
    pub fn with_clock(mut self, clock: impl Clock + 'static) -> Self {
        self.clock = Arc::new(clock);
        self
    }

    // -- Location hierarchy --

    pub async fn try_fetch_states(&self) -> Result<Vec<LocationEntry>, EcourtsError> {
        let resp = self.inner.get(Endpoint::CauseListPage).await?;
        let states = location::resolve_states(&resp.text());
        tracing::debug!(count = states.len(), "resolved states");
        Ok(states)
    }

    /// All states. Falls back to the built-in list when the portal cannot be
    /// reached or lists none.
    pub async fn fetch_states(&self) -> Vec<LocationEntry> {
        self.try_fetch_states().await.unwrap_or_else(|e| {
            tracing::warn!("Error fetching states: {}", e);
            location::default_states()
        })
    }

    pub async fn try_fetch_districts(
        &self,
        state_code: &str,
    ) -> Result<Vec<LocationEntry>, EcourtsError> {
        let form = DistrictForm::new(&validation::validate_code("state code", state_code)?);
        let resp = self.inner.post_form(Endpoint::Districts, &form).await?;
        let districts = location::resolve_districts(&resp.text());
        tracing::debug!(count = districts.len(), state_code, "resolved districts");
        Ok(districts)
    }

    pub async fn fetch_districts(&self, state_code: &str) -> Vec<LocationEntry> {
        self.try_fetch_districts(state_code)
            .await
            .unwrap_or_else(|e| {
                tracing::warn!("Error fetching districts: {}", e);
                Vec::new()
            })
    }

    pub async fn try_fetch_court_complexes(
        &self,
        state_code: &str,
        district_code: &str,
    ) -> Result<Vec<LocationEntry>, EcourtsError> {
        let form = CourtComplexForm::new(
            &validation::validate_code("state code", state_code)?,
            &validation::validate_code("district code", district_code)?,
        );
        let resp = self.inner.post_form(Endpoint::CourtComplexes, &form).await?;
        let complexes = location::resolve_complexes(&resp.text());
        tracing::debug!(count = complexes.len(), district_code, "resolved court complexes");
        Ok(complexes)
    }

    pub async fn fetch_court_complexes(
        &self,
        state_code: &str,
        district_code: &str,
    ) -> Vec<LocationEntry> {
        self.try_fetch_court_complexes(state_code, district_code)
            .await
            .unwrap_or_else(|e| {
                tracing::warn!("Error fetching court complexes: {}", e);
                Vec::new()
            })
    }

    pub async fn try_fetch_courts(
        &self,
        state_code: &str,
        district_code: &str,
        complex_code: &str,
    ) -> Result<Vec<LocationEntry>, EcourtsError> {
        let form = CourtForm::new(
            &validation::validate_code("state code", state_code)?,
            &validation::validate_code("district code", district_code)?,
            &validation::validate_code("court complex code", complex_code)?,
        );
        let resp = self.inner.post_form(Endpoint::Courts, &form).await?;
        let courts = location::resolve_courts(&resp.text());
        tracing::debug!(count = courts.len(), complex_code, "resolved courts");
        Ok(courts)
    }

    pub async fn fetch_courts(
        &self,
        state_code: &str,
        district_code: &str,
        complex_code: &str,
    ) -> Vec<LocationEntry> {
        self.try_fetch_courts(state_code, district_code, complex_code)
            .await
            .unwrap_or_else(|e| {
                tracing::warn!("Error fetching courts: {}", e);
                Vec::new()
            })
    }

    // -- Case search --

    pub async fn try_search_by_record_number(
        &self,
        record_number: &str,
        state_code: Option<&str>,
        district_code: Option<&str>,
    ) -> Result<CaseResult, EcourtsError> {
        let cnr = validation::validate_cnr(record_number)?;
        let mut form = CnrSearchForm::new(&cnr);
        if let Some(state_code) = validation::validate_optional_code("state code", state_code)? {
            form = form.with_state_code(&state_code);
        }
        if let Some(district_code) =
            validation::validate_optional_code("district code", district_code)?
        {
            form = form.with_district_code(&district_code);
        }
        let resp = self.inner.post_form(Endpoint::CaseByCnr, &form).await?;
        Ok(case_status::interpret(
            &resp.text(),
            &cnr,
            SearchType::Cnr,
            self.clock.today(),
        ))
    }

    /// Looks a case up by its record number. `None` when the lookup could
    /// not be made; a result with `found == false` when it was made but the
    /// case is not listed today or tomorrow.
    pub async fn search_by_record_number(
        &self,
        record_number: &str,
        state_code: Option<&str>,
        district_code: Option<&str>,
    ) -> Option<CaseResult> {
        self.try_search_by_record_number(record_number, state_code, district_code)
            .await
            .inspect_err(|e| tracing::warn!("Error searching case by CNR: {}", e))
            .ok()
    }

    pub async fn try_search_by_case_details(
        &self,
        state_code: &str,
        district_code: &str,
        court_code: &str,
        case_type: &str,
        case_number: &str,
        case_year: &str,
    ) -> Result<CaseResult, EcourtsError> {
        let key = CaseDetailsKey::new(
            &validation::validate_case_field("case type", case_type)?,
            &validation::validate_case_field("case number", case_number)?,
            &validation::validate_case_year(case_year)?,
        );
        let form = CaseDetailsForm::new(
            &validation::validate_code("state code", state_code)?,
            &validation::validate_code("district code", district_code)?,
            &validation::validate_code("court code", court_code)?,
            &key.case_type,
            &key.case_number,
            &key.case_year,
        );
        let resp = self.inner.post_form(Endpoint::CaseByDetails, &form).await?;
        let mut result = case_status::interpret(
            &resp.text(),
            &key.case_id(),
            SearchType::Details,
            self.clock.today(),
        );
        result.case_details = Some(key);
        Ok(result)
    }

    pub async fn search_by_case_details(
        &self,
        state_code: &str,
        district_code: &str,
        court_code: &str,
        case_type: &str,
        case_number: &str,
        case_year: &str,
    ) -> Option<CaseResult> {
        self.try_search_by_case_details(
            state_code,
            district_code,
            court_code,
            case_type,
            case_number,
            case_year,
        )
        .await
        .inspect_err(|e| tracing::warn!("Error searching case by details: {}", e))
        .ok()
    }

    // -- Cause lists --

    pub async fn try_fetch_cause_list(
        &self,
        state_code: &str,
        district_code: &str,
        complex_code: &str,
        court_code: Option<&str>,
        date: &str,
    ) -> Result<CauseList, EcourtsError> {
        let form = cause_list_form(state_code, district_code, complex_code, court_code, date)?;
        let resp = self.inner.post_form(Endpoint::CauseList, &form).await?;
        let list = cause_list::interpret(&resp.text());
        Ok(list.with_metadata(self.metadata(&form)))
    }

    /// The cause list for a court complex (or one court) on `date`
    /// (`dd-mm-yyyy`). Metadata is always attached; on failure the list is empty.
    pub async fn fetch_cause_list(
        &self,
        state_code: &str,
        district_code: &str,
        complex_code: &str,
        court_code: Option<&str>,
        date: &str,
    ) -> CauseList {
        self.try_fetch_cause_list(state_code, district_code, complex_code, court_code, date)
            .await
            .unwrap_or_else(|e| {
                tracing::warn!("Error fetching cause list: {}", e);
                let form =
                    requested_form(state_code, district_code, complex_code, court_code, date);
                CauseList::default().with_metadata(self.metadata(&form))
            })
    }

    pub async fn try_download_cause_list_document(
        &self,
        state_code: &str,
        district_code: &str,
        complex_code: &str,
        court_code: Option<&str>,
        date: &str,
    ) -> Result<CauseListDocument, EcourtsError> {
        let form = cause_list_form(state_code, district_code, complex_code, court_code, date)?;
        let resp = self
            .inner
            .post_form(Endpoint::CauseListDocument, &form)
            .await?;
        if !resp.is_document() {
            return Err(EcourtsError::UnexpectedContent(format!(
                "expected {} but got {} (status {})",
                PDF_MIME_TYPE,
                resp.content_type.as_deref().unwrap_or("no content type"),
                resp.status
            )));
        }
        tracing::debug!(bytes = resp.body.len(), "downloaded cause list document");
        Ok(CauseListDocument {
            file_name: form.document_file_name(),
            content_type: PDF_MIME_TYPE.to_string(),
            bytes: resp.body,
        })
    }

    /// The PDF rendition of a cause list, when the portal serves one.
    /// Storing it is up to the caller.
    pub async fn download_cause_list_document(
        &self,
        state_code: &str,
        district_code: &str,
        complex_code: &str,
        court_code: Option<&str>,
        date: &str,
    ) -> Option<CauseListDocument> {
        self.try_download_cause_list_document(
            state_code,
            district_code,
            complex_code,
            court_code,
            date,
        )
        .await
        .inspect_err(|e| tracing::warn!("Error downloading cause list document: {}", e))
        .ok()
    }

    fn metadata(&self, form: &CauseListForm) -> CauseListMetadata {
        CauseListMetadata {
            state_code: form.state_code.clone(),
            district_code: form.district_code.clone(),
            court_complex_code: form.court_complex_code.clone(),
            court_code: form.court_code.clone(),
            date: form.date.clone(),
            fetched_at: self.clock.now(),
        }
    }
}

fn cause_list_form(
    state_code: &str,
    district_code: &str,
    complex_code: &str,
    court_code: Option<&str>,
    date: &str,
) -> Result<CauseListForm, EcourtsError> {
    let state_code = validation::validate_code("state code", state_code)?;
    let district_code = validation::validate_code("district code", district_code)?;
    let complex_code = validation::validate_code("court complex code", complex_code)?;
    let court_code = validation::validate_optional_code("court code", court_code)?;
    let date = validation::validate_cause_list_date(date)?;
    Ok(requested_form(
        &state_code,
        &district_code,
        &complex_code,
        court_code.as_deref(),
        &date,
    ))
}

/// The cause-list request as the caller asked for it: trimmed, with a blank
/// court code treated as absent. Validated input passes through unchanged.
fn requested_form(
    state_code: &str,
    district_code: &str,
    complex_code: &str,
    court_code: Option<&str>,
    date: &str,
) -> CauseListForm {
    let form = CauseListForm::new(
        state_code.trim(),
        district_code.trim(),
        complex_code.trim(),
        date.trim(),
    );
    match court_code.map(str::trim).filter(|code| !code.is_empty()) {
        Some(court_code) => form.with_court_code(court_code),
        None => form,
    }
}
