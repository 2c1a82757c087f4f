//! Employee Repository

use super::{BaseRepository, RepoError, RepoResult};
use crate::db::models::{EMPLOYEE_TABLE, EmployeeId, EmployeeRecord, NewEmployee};
use surrealdb::engine::local::Db;
use surrealdb::{RecordId, Surreal};

/// Parse an employee identifier.
///
/// Accepts `employee:<key>` or a bare `<key>`. Anything else, including
/// ids of other tables, yields `None`.
pub fn parse_employee_id(id: &str) -> Option<EmployeeId> {
    match id.parse::<RecordId>() {
        Ok(thing) => (thing.table() == EMPLOYEE_TABLE).then_some(thing),
        Err(_) if !id.is_empty() && !id.contains(':') => {
            Some(RecordId::from_table_key(EMPLOYEE_TABLE, id))
        }
        Err(_) => None,
    }
}

fn not_found(id: &str) -> RepoError {
    RepoError::NotFound(format!("Employee {} not found", id))
}

#[derive(Clone, Debug)]
pub struct EmployeeRepository {
    base: BaseRepository,
}

impl EmployeeRepository {
    pub fn new(db: Surreal<Db>) -> Self {
        Self {
            base: BaseRepository::new(db),
        }
    }

    /// Find all employees in insertion order, optionally by employee type
    pub async fn find_all(&self, employee_type: Option<&str>) -> RepoResult<Vec<EmployeeRecord>> {
        let mut result = match employee_type {
            Some(employee_type) => {
                self.base
                    .db()
                    .query(
                        "SELECT * FROM employee WHERE employee_type = $employee_type ORDER BY created_at",
                    )
                    .bind(("employee_type", employee_type.to_string()))
                    .await?
            }
            None => {
                self.base
                    .db()
                    .query("SELECT * FROM employee ORDER BY created_at")
                    .await?
            }
        };
        let employees: Vec<EmployeeRecord> = result.take(0)?;
        Ok(employees)
    }

    /// Find employee by id
    pub async fn find_by_id(&self, id: &str) -> RepoResult<Option<EmployeeRecord>> {
        let Some(thing) = parse_employee_id(id) else {
            return Ok(None);
        };
        let emp: Option<EmployeeRecord> = self.base.db().select(thing).await?;
        Ok(emp)
    }

    /// Find employee by id, failing with NotFound when absent
    pub async fn get(&self, id: &str) -> RepoResult<EmployeeRecord> {
        self.find_by_id(id).await?.ok_or_else(|| not_found(id))
    }

    /// Insert a new employee (active)
    pub async fn insert(&self, data: NewEmployee) -> RepoResult<EmployeeRecord> {
        let mut result = self
            .base
            .db()
            .query(
                r#"CREATE employee SET
                    first_name = $first_name,
                    last_name = $last_name,
                    age = $age,
                    date_of_joining = $date_of_joining,
                    title = $title,
                    department = $department,
                    employee_type = $employee_type,
                    current_status = true
                RETURN AFTER"#,
            )
            .bind(("first_name", data.first_name))
            .bind(("last_name", data.last_name))
            .bind(("age", data.age))
            .bind(("date_of_joining", data.date_of_joining.to_string()))
            .bind(("title", data.title))
            .bind(("department", data.department))
            .bind(("employee_type", data.employee_type))
            .await?;

        let created: Option<EmployeeRecord> = result.take(0)?;
        created.ok_or_else(|| RepoError::Unexpected("CREATE returned no record".to_string()))
    }

    /// Apply the provided fields; absent fields keep their stored value
    pub async fn update_fields(
        &self,
        id: &str,
        title: Option<String>,
        department: Option<String>,
        current_status: Option<bool>,
    ) -> RepoResult<EmployeeRecord> {
        let existing = self.get(id).await?;

        let mut result = self
            .base
            .db()
            .query(
                r#"UPDATE $thing SET
                    title = IF $has_title THEN $title ELSE title END,
                    department = IF $has_department THEN $department ELSE department END,
                    current_status = IF $has_current_status THEN $current_status ELSE current_status END
                RETURN AFTER"#,
            )
            .bind(("thing", existing.id))
            .bind(("has_title", title.is_some()))
            .bind(("title", title))
            .bind(("has_department", department.is_some()))
            .bind(("department", department))
            .bind(("has_current_status", current_status.is_some()))
            .bind(("current_status", current_status))
            .await?;

        result
            .take::<Option<EmployeeRecord>>(0)?
            .ok_or_else(|| not_found(id))
    }

    /// Hard delete an employee whose status is inactive, in a single statement.
    ///
    /// Returns `None` when nothing was removed: the record is missing or active.
    pub async fn delete_inactive(&self, id: &str) -> RepoResult<Option<EmployeeRecord>> {
        let Some(thing) = parse_employee_id(id) else {
            return Ok(None);
        };
        let mut result = self
            .base
            .db()
            .query("DELETE $thing WHERE current_status = false RETURN BEFORE")
            .bind(("thing", thing))
            .await?;
        let removed: Vec<EmployeeRecord> = result.take(0)?;
        Ok(removed.into_iter().next())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_employee_id() {
        let full = parse_employee_id("employee:abc123").unwrap();
        assert_eq!(full.table(), "employee");
        assert_eq!(full.to_string(), "employee:abc123");

        let bare = parse_employee_id("abc123").unwrap();
        assert_eq!(bare.to_string(), full.to_string());

        assert!(parse_employee_id("role:abc123").is_none());
        assert!(parse_employee_id("").is_none());
        assert!(parse_employee_id("employee:").is_none());
    }
}
