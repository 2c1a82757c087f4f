//! Employee directory: filterable, searchable list with two-step delete

use shared::models::{Employee, EmployeeType};

use super::ViewError;
use crate::api::EmployeeApi;
use crate::client::HttpClient;

const FETCH_FAILED_BANNER: &str = "Something went wrong while fetching employee data.";
const DELETE_FAILED_BANNER: &str = "Failed to delete employee.";

/// Confirmation prompt shown before a delete
pub const DELETE_PROMPT: &str = "Are you sure you want to delete this employee?";

/// Notice shown after a successful delete
pub const DELETED_NOTICE: &str = "Employee deleted successfully";

/// Directory filter selection
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DirectoryFilter {
    #[default]
    All,
    Type(EmployeeType),
    /// Server-side upcoming-retirement list
    UpcomingRetirement,
}

impl DirectoryFilter {
    /// Options in display order
    pub const OPTIONS: [DirectoryFilter; 6] = [
        DirectoryFilter::All,
        DirectoryFilter::Type(EmployeeType::FullTime),
        DirectoryFilter::Type(EmployeeType::PartTime),
        DirectoryFilter::Type(EmployeeType::Contract),
        DirectoryFilter::Type(EmployeeType::Seasonal),
        DirectoryFilter::UpcomingRetirement,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            DirectoryFilter::All => "All Employees",
            DirectoryFilter::Type(t) => t.label(),
            DirectoryFilter::UpcomingRetirement => "Upcoming Retirement",
        }
    }
}

/// A delete the user asked for but has not confirmed yet
#[derive(Debug, PartialEq, Eq)]
pub struct PendingDelete {
    id: String,
    name: String,
}

impl PendingDelete {
    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn prompt(&self) -> &'static str {
        DELETE_PROMPT
    }
}

/// Directory screen state
#[derive(Debug)]
pub struct EmployeeDirectory<C> {
    api: EmployeeApi<C>,
    filter: DirectoryFilter,
    search: String,
    employees: Vec<Employee>,
    error: Option<ViewError>,
    notice: Option<String>,
}

impl<C: HttpClient> EmployeeDirectory<C> {
    pub fn new(api: EmployeeApi<C>) -> Self {
        Self {
            api,
            filter: DirectoryFilter::default(),
            search: String::new(),
            employees: Vec::new(),
            error: None,
            notice: None,
        }
    }

    pub fn api(&self) -> &EmployeeApi<C> {
        &self.api
    }

    pub fn filter(&self) -> DirectoryFilter {
        self.filter
    }

    pub fn search(&self) -> &str {
        &self.search
    }

    pub fn error(&self) -> Option<&ViewError> {
        self.error.as_ref()
    }

    pub fn notice(&self) -> Option<&str> {
        self.notice.as_deref()
    }

    pub fn title(&self) -> &'static str {
        match self.filter {
            DirectoryFilter::UpcomingRetirement => "Employees with Upcoming Retirements",
            _ => "Employee Directory",
        }
    }

    /// Fetch the list for the current filter
    pub async fn load(&mut self) -> Result<(), ViewError> {
        let result = match self.filter {
            DirectoryFilter::All => self.api.list(None).await,
            DirectoryFilter::Type(t) => self.api.list(Some(t)).await,
            DirectoryFilter::UpcomingRetirement => self.api.upcoming_retirements().await,
        };

        match result {
            Ok(employees) => {
                self.employees = employees;
                self.error = None;
                Ok(())
            }
            Err(e) => {
                let err = ViewError::from_client(&e, FETCH_FAILED_BANNER);
                self.employees.clear();
                self.error = Some(err.clone());
                Err(err)
            }
        }
    }

    /// Change the filter and refetch
    pub async fn set_filter(&mut self, filter: DirectoryFilter) -> Result<(), ViewError> {
        self.filter = filter;
        self.load().await
    }

    pub fn set_search(&mut self, term: impl Into<String>) {
        self.search = term.into();
    }

    /// Loaded employees whose "first last" contains the search term (case-insensitive)
    pub fn visible(&self) -> Vec<&Employee> {
        let needle = self.search.trim().to_lowercase();
        self.employees
            .iter()
            .filter(|e| needle.is_empty() || e.full_name().to_lowercase().contains(&needle))
            .collect()
    }

    /// First step of a delete; `None` when the id is not in the current list
    pub fn request_delete(&self, id: &str) -> Option<PendingDelete> {
        self.employees
            .iter()
            .find(|e| e.id == id)
            .map(|e| PendingDelete {
                id: e.id.clone(),
                name: e.full_name(),
            })
    }

    /// Second step: issue the delete, then refetch the list
    pub async fn confirm_delete(&mut self, pending: PendingDelete) -> Result<Employee, ViewError> {
        self.notice = None;
        let removed = match self.api.delete(&pending.id).await {
            Ok(removed) => removed,
            Err(e) => {
                let err = ViewError::from_client(&e, DELETE_FAILED_BANNER);
                self.error = Some(err.clone());
                return Err(err);
            }
        };

        self.notice = Some(DELETED_NOTICE.to_string());
        if let Err(e) = self.load().await {
            tracing::warn!(error = %e, "Refetch after delete failed");
        }
        Ok(removed)
    }

    /// Abandon a delete request
    pub fn cancel_delete(&mut self, pending: PendingDelete) {
        tracing::debug!(id = %pending.id, "Delete cancelled");
    }
}
