use crate::db::pool::DbPool;
use crate::db::store::{EMPLOYEES_KEY, load_list, save_list};
use crate::errors::{AppError, AppResult};
use crate::models::Employee;

/// In-memory employee list mirrored to the `employees` storage key.
///
/// Order is insertion order; positions shown to the user are 1-based
/// indexes into this list.
#[derive(Debug, Default, Clone)]
pub struct EmployeeDirectory {
    employees: Vec<Employee>,
}

impl EmployeeDirectory {
    pub fn new(employees: Vec<Employee>) -> Self {
        Self { employees }
    }

    pub fn load(pool: &DbPool) -> AppResult<Self> {
        Ok(Self::new(load_list(pool, EMPLOYEES_KEY)?))
    }

    /// Overwrite the stored list with the current contents.
    pub fn persist(&self, pool: &DbPool) -> AppResult<()> {
        save_list(pool, EMPLOYEES_KEY, &self.employees)
    }

    pub fn all(&self) -> &[Employee] {
        &self.employees
    }

    pub fn len(&self) -> usize {
        self.employees.len()
    }

    pub fn is_empty(&self) -> bool {
        self.employees.is_empty()
    }

    pub fn lookup(&self, token: &str) -> Option<&Employee> {
        self.employees.iter().find(|e| e.token == token)
    }

    pub fn contains(&self, token: &str) -> bool {
        self.lookup(token).is_some()
    }

    pub fn get(&self, index: usize) -> AppResult<&Employee> {
        self.employees
            .get(index)
            .ok_or(AppError::InvalidIndex(index + 1))
    }

    /// Append a new employee. The token must not be in use.
    pub fn add(&mut self, name: &str, token: &str, hourly_rate: f64) -> AppResult<&Employee> {
        let employee = validate(name, token, hourly_rate)?;

        if self.contains(&employee.token) {
            return Err(AppError::DuplicateToken(employee.token));
        }

        self.employees.push(employee);
        let last = self.employees.len() - 1;
        Ok(&self.employees[last])
    }

    /// Replace the employee at `index` keeping its position.
    /// The uniqueness check ignores the record being edited.
    pub fn update(
        &mut self,
        index: usize,
        name: &str,
        token: &str,
        hourly_rate: f64,
    ) -> AppResult<&Employee> {
        if index >= self.employees.len() {
            return Err(AppError::InvalidIndex(index + 1));
        }

        let employee = validate(name, token, hourly_rate)?;

        let clash = self
            .employees
            .iter()
            .enumerate()
            .any(|(i, e)| i != index && e.token == employee.token);
        if clash {
            return Err(AppError::DuplicateToken(employee.token));
        }

        self.employees[index] = employee;
        Ok(&self.employees[index])
    }

    /// Remove the employee at `index` and hand it back so its fields can be
    /// re-submitted. Nothing is re-added unless the caller does so.
    pub fn take_for_edit(&mut self, index: usize) -> AppResult<Employee> {
        self.delete(index)
    }

    pub fn delete(&mut self, index: usize) -> AppResult<Employee> {
        if index >= self.employees.len() {
            return Err(AppError::InvalidIndex(index + 1));
        }
        Ok(self.employees.remove(index))
    }
}

fn validate(name: &str, token: &str, hourly_rate: f64) -> AppResult<Employee> {
    let name = name.trim();
    let token = token.trim();

    if name.is_empty() {
        return Err(AppError::EmptyField("name"));
    }
    if token.is_empty() {
        return Err(AppError::EmptyField("token"));
    }
    if !hourly_rate.is_finite() || hourly_rate < 0.0 {
        return Err(AppError::InvalidRate(hourly_rate.to_string()));
    }

    Ok(Employee::new(name, token, hourly_rate))
}
