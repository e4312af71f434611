use std::sync::Arc;

use roster_store::{InMemoryOrderedStore, OrderedStore, StoreError};
use tracing::{debug, error, warn};

use crate::error::{EmployeeError, EmployeeResult};
use crate::model::{Employee, EmployeeId, EmployeeList, EmployeeUpdateRequest};
use crate::validation::{parse_cursor, parse_id, validate_new, validate_update};

/// Page size used when the client sends none, or one that does not parse.
pub const DEFAULT_PAGE_SIZE: usize = 10;

/// Page size rules applied to list requests.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PageSizing {
    /// Used when `num_records` is missing, unparsable, or not positive.
    pub default: usize,
    /// Largest accepted `num_records`. `None` accepts any size.
    ///
    /// Oversized requests are rejected, never shortened: a page shorter
    /// than requested must only ever mean the scan reached the tail.
    pub max: Option<usize>,
}

impl Default for PageSizing {
    fn default() -> Self {
        Self {
            default: DEFAULT_PAGE_SIZE,
            max: None,
        }
    }
}

impl PageSizing {
    /// Resolve a raw `num_records` value to a page size.
    pub fn resolve(&self, raw: Option<&str>) -> EmployeeResult<usize> {
        let requested = raw
            .and_then(|s| s.trim().parse::<i64>().ok())
            .filter(|n| *n > 0)
            .and_then(|n| usize::try_from(n).ok());
        match (requested, self.max) {
            (Some(n), Some(max)) if n > max => Err(EmployeeError::InvalidPageSize),
            (Some(n), _) => Ok(n),
            (None, _) => Ok(self.default.max(1)),
        }
    }
}

/// CRUD operations on employee records.
///
/// Holds the only handle to the store. Every store call is a single atomic
/// operation; `update` is a read followed by a write and is not atomic as a
/// whole.
pub struct EmployeeService {
    store: Arc<dyn OrderedStore<EmployeeId, Employee>>,
    sizing: PageSizing,
}

impl EmployeeService {
    /// A service over a fresh in-memory store.
    pub fn in_memory() -> Self {
        Self::new(Arc::new(InMemoryOrderedStore::new()))
    }

    pub fn new(store: Arc<dyn OrderedStore<EmployeeId, Employee>>) -> Self {
        Self {
            store,
            sizing: PageSizing::default(),
        }
    }

    pub fn with_page_sizing(mut self, sizing: PageSizing) -> Self {
        self.sizing = sizing;
        self
    }

    pub fn page_sizing(&self) -> PageSizing {
        self.sizing
    }

    /// Number of stored employees.
    pub fn count(&self) -> usize {
        self.store.len()
    }

    /// Validate and insert a new employee.
    pub fn create(&self, employee: Employee) -> EmployeeResult<()> {
        debug!(
            id = employee.id,
            name = %employee.name,
            position = %employee.position,
            salary = employee.salary,
            "create request received"
        );

        if let Err(e) = validate_new(&employee) {
            warn!(id = employee.id, error = %e, "rejected employee");
            return Err(e);
        }

        let id = employee.id;
        self.store.set(id, employee).map_err(|e| match e {
            StoreError::KeyAlreadyPresent => {
                warn!(id, "employee already exists");
                EmployeeError::AlreadyExists
            }
            other => {
                error!(id, error = %other, "error adding employee");
                EmployeeError::AddFailed
            }
        })?;

        debug!(id, "employee created");
        Ok(())
    }

    /// Fetch one employee by its raw id.
    pub fn get(&self, id: Option<&str>) -> EmployeeResult<Employee> {
        debug!(id = ?id, "get request received");
        let id = parse_id(id).inspect_err(|_| warn!(id = ?id, "invalid employee id"))?;

        self.store.get(&id).ok_or_else(|| {
            warn!(id, "employee not found");
            EmployeeError::NotFound
        })
    }

    /// Fetch the next page of employees after `last_eval_id`.
    pub fn list(
        &self,
        last_eval_id: Option<&str>,
        num_records: Option<&str>,
    ) -> EmployeeResult<EmployeeList> {
        debug!(last_eval_id = ?last_eval_id, num_records = ?num_records, "list request received");

        let cursor = parse_cursor(last_eval_id)
            .inspect_err(|_| warn!(last_eval_id = ?last_eval_id, "invalid last evaluated id"))?;
        let limit = self.sizing.resolve(num_records).inspect_err(|_| {
            warn!(num_records = ?num_records, max = ?self.sizing.max, "page size above limit")
        })?;

        let page = self.store.page(cursor.as_ref(), limit).map_err(|e| match e {
            StoreError::InvalidCursor => {
                warn!(last_eval_id = ?cursor, "unknown last evaluated id");
                EmployeeError::InvalidLastEvalId
            }
            other => {
                error!(error = %other, "error getting employees");
                EmployeeError::ListFailed
            }
        })?;

        let last_eval_id = page.last_evaluated_key.unwrap_or_default();
        let employees = page.into_values();
        debug!(count = employees.len(), limit, last_eval_id, "page served");

        Ok(EmployeeList {
            employees,
            last_eval_id,
        })
    }

    /// Apply a partial update to an existing employee.
    pub fn update(&self, id: Option<&str>, update: EmployeeUpdateRequest) -> EmployeeResult<()> {
        debug!(
            id = ?id,
            position = %update.position,
            salary = update.salary,
            "update request received"
        );

        let id = parse_id(id).inspect_err(|_| warn!(id = ?id, "invalid employee id"))?;
        validate_update(&update).inspect_err(|e| warn!(id, error = %e, "rejected update"))?;

        let mut current = self.store.get(&id).ok_or_else(|| {
            warn!(id, "employee not found");
            EmployeeError::NotFound
        })?;
        current.apply(&update);

        // The record may have been deleted since the read above.
        self.store.update(&id, current).map_err(|e| match e {
            StoreError::KeyAbsent => {
                warn!(id, "employee not found");
                EmployeeError::NotFound
            }
            other => {
                error!(id, error = %other, "error updating employee");
                EmployeeError::UpdateFailed
            }
        })?;

        debug!(id, "employee updated");
        Ok(())
    }

    /// Remove an employee.
    pub fn delete(&self, id: Option<&str>) -> EmployeeResult<()> {
        debug!(id = ?id, "delete request received");
        let id = parse_id(id).inspect_err(|_| warn!(id = ?id, "invalid employee id"))?;

        self.store.delete(&id).map_err(|e| match e {
            StoreError::KeyAbsent => {
                warn!(id, "employee not found");
                EmployeeError::NotFound
            }
            other => {
                error!(id, error = %other, "error deleting employee");
                EmployeeError::DeleteFailed
            }
        })?;

        debug!(id, "employee deleted");
        Ok(())
    }
}

impl Default for EmployeeService {
    fn default() -> Self {
        Self::in_memory()
    }
}

impl std::fmt::Debug for EmployeeService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EmployeeService")
            .field("employee_count", &self.store.len())
            .field("sizing", &self.sizing)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn emp(id: EmployeeId) -> Employee {
        Employee::new(id, format!("name-{id}"), "Engineer", 1000.0 + id as f64)
    }

    fn seeded(ids: impl IntoIterator<Item = EmployeeId>) -> EmployeeService {
        let svc = EmployeeService::in_memory();
        for id in ids {
            svc.create(emp(id)).unwrap();
        }
        svc
    }

    fn ids(list: &EmployeeList) -> Vec<EmployeeId> {
        list.employees.iter().map(|e| e.id).collect()
    }

    // -----------------------------------------------------------------------
    // create / get
    // -----------------------------------------------------------------------

    #[test]
    fn create_and_get() {
        let svc = seeded([1]);
        assert_eq!(svc.get(Some("1")).unwrap(), emp(1));
        assert_eq!(svc.count(), 1);
    }

    #[test]
    fn create_duplicate_is_conflict() {
        let svc = seeded([1]);
        assert_eq!(svc.create(emp(1)), Err(EmployeeError::AlreadyExists));
    }

    #[test]
    fn create_invalid_is_rejected_before_store() {
        let svc = EmployeeService::in_memory();
        let mut e = emp(1);
        e.salary = 0.0;
        assert_eq!(svc.create(e), Err(EmployeeError::InvalidSalary));
        assert_eq!(svc.count(), 0);
    }

    #[test]
    fn get_errors() {
        let svc = seeded([1]);
        assert_eq!(svc.get(Some("2")), Err(EmployeeError::NotFound));
        assert_eq!(svc.get(Some("two")), Err(EmployeeError::InvalidId));
        assert_eq!(svc.get(None), Err(EmployeeError::InvalidId));
    }

    // -----------------------------------------------------------------------
    // list
    // -----------------------------------------------------------------------

    #[test]
    fn list_defaults_to_ten() {
        let svc = seeded(1..=15);
        let page = svc.list(None, None).unwrap();
        assert_eq!(ids(&page), (1..=10).collect::<Vec<_>>());
        assert_eq!(page.last_eval_id, 10);

        let rest = svc.list(Some("10"), Some("garbage")).unwrap();
        assert_eq!(ids(&rest), (11..=15).collect::<Vec<_>>());
        assert_eq!(rest.last_eval_id, 0);
    }

    #[test]
    fn list_empty_store() {
        let svc = EmployeeService::in_memory();
        let page = svc.list(None, Some("5")).unwrap();
        assert!(page.employees.is_empty());
        assert_eq!(page.last_eval_id, 0);
    }

    #[test]
    fn list_from_cursor() {
        let svc = seeded([2, 3, 4]);
        let page = svc.list(Some("2"), Some("3")).unwrap();
        assert_eq!(ids(&page), vec![3, 4]);
        assert_eq!(page.last_eval_id, 0);
    }

    #[test]
    fn list_cursor_zero_starts_over() {
        let svc = seeded([4]);
        let page = svc.list(Some("0"), Some("1")).unwrap();
        assert_eq!(ids(&page), vec![4]);
        assert_eq!(page.last_eval_id, 4);
    }

    #[test]
    fn list_bad_cursor() {
        let svc = seeded([1, 2]);
        assert_eq!(svc.list(Some("9"), None), Err(EmployeeError::InvalidLastEvalId));
        assert_eq!(svc.list(Some("nine"), None), Err(EmployeeError::InvalidLastEvalId));
    }

    #[test]
    fn page_sizing_resolution() {
        let sizing = PageSizing {
            default: 10,
            max: Some(50),
        };
        assert_eq!(sizing.resolve(None), Ok(10));
        assert_eq!(sizing.resolve(Some("")), Ok(10));
        assert_eq!(sizing.resolve(Some("abc")), Ok(10));
        assert_eq!(sizing.resolve(Some("0")), Ok(10));
        assert_eq!(sizing.resolve(Some("-4")), Ok(10));
        assert_eq!(sizing.resolve(Some("3")), Ok(3));
        assert_eq!(sizing.resolve(Some("50")), Ok(50));
        assert_eq!(sizing.resolve(Some("500")), Err(EmployeeError::InvalidPageSize));
    }

    #[test]
    fn default_sizing_has_no_cap() {
        let sizing = PageSizing::default();
        assert_eq!(sizing.max, None);
        assert_eq!(sizing.resolve(Some("5000")), Ok(5000));
    }

    #[test]
    fn large_page_is_never_shortened() {
        let svc = seeded(1..=1200);
        let page = svc.list(None, Some("5000")).unwrap();
        assert_eq!(page.employees.len(), 1200);
        // short page and end of data agree
        assert_eq!(page.last_eval_id, 0);

        let page = svc.list(None, Some("1200")).unwrap();
        assert_eq!(page.employees.len(), 1200);
        assert_eq!(page.last_eval_id, 1200);
    }

    #[test]
    fn oversized_request_is_rejected_with_cap() {
        let svc = seeded(1..=8).with_page_sizing(PageSizing {
            default: 2,
            max: Some(5),
        });
        assert_eq!(svc.list(None, None).unwrap().employees.len(), 2);
        assert_eq!(svc.list(None, Some("5")).unwrap().employees.len(), 5);
        assert_eq!(svc.list(None, Some("100")), Err(EmployeeError::InvalidPageSize));
    }

    // -----------------------------------------------------------------------
    // update
    // -----------------------------------------------------------------------

    #[test]
    fn update_keeps_position_in_order() {
        let svc = seeded([1, 2, 3]);
        svc.update(
            Some("2"),
            EmployeeUpdateRequest {
                position: "Manager".into(),
                salary: 0.0,
            },
        )
        .unwrap();

        let got = svc.get(Some("2")).unwrap();
        assert_eq!(got.position, "Manager");
        assert_eq!(got.salary, emp(2).salary);
        assert_eq!(ids(&svc.list(None, None).unwrap()), vec![1, 2, 3]);
    }

    #[test]
    fn update_errors() {
        let svc = seeded([1]);
        let raise = EmployeeUpdateRequest {
            position: String::new(),
            salary: 10.0,
        };
        assert_eq!(svc.update(Some("5"), raise.clone()), Err(EmployeeError::NotFound));
        assert_eq!(svc.update(None, raise.clone()), Err(EmployeeError::InvalidId));
        assert_eq!(
            svc.update(Some("1"), EmployeeUpdateRequest::default()),
            Err(EmployeeError::InvalidUpdate)
        );
    }

    // -----------------------------------------------------------------------
    // delete
    // -----------------------------------------------------------------------

    #[test]
    fn delete_then_missing() {
        let svc = seeded([1, 2]);
        svc.delete(Some("1")).unwrap();
        assert_eq!(svc.get(Some("1")), Err(EmployeeError::NotFound));
        assert_eq!(svc.delete(Some("1")), Err(EmployeeError::NotFound));
        assert_eq!(svc.delete(Some("x")), Err(EmployeeError::InvalidId));
        assert_eq!(ids(&svc.list(None, None).unwrap()), vec![2]);
    }

    #[test]
    fn recreated_employee_moves_to_tail() {
        let svc = seeded([1, 2, 3]);
        svc.delete(Some("1")).unwrap();
        svc.create(emp(1)).unwrap();
        assert_eq!(ids(&svc.list(None, None).unwrap()), vec![2, 3, 1]);
    }
}
