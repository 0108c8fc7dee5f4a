use std::collections::BTreeSet;

use strum_macros::Display;

use crate::model::{BankAccount, Batch, Employee};

/// User actions that reach the backend. At most one of each kind may be
/// in flight; the set of pending kinds drives the loading indicators.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Display)]
#[strum(serialize_all = "snake_case")]
pub enum Action {
    Load,
    AddBatch,
    RenameBatch,
    DeleteBatch,
    InitiatePayment,
    AddEmployee,
    DeleteEmployee,
    AssignEmployee,
    UnassignEmployee,
    BulkUpload,
}

/// Entity a confirmation prompt will act on once confirmed.
#[derive(Debug, Clone, PartialEq, Display)]
#[strum(serialize_all = "snake_case")]
pub enum ConfirmTarget {
    DeleteBatch(Batch),
    DeleteEmployee(Employee),
}

impl ConfirmTarget {
    pub fn entity_id(&self) -> u64 {
        match self {
            ConfirmTarget::DeleteBatch(batch) => batch.id,
            ConfirmTarget::DeleteEmployee(employee) => employee.id,
        }
    }

    /// Same action kind on the same entity id.
    pub fn same_entity(&self, other: &ConfirmTarget) -> bool {
        std::mem::discriminant(self) == std::mem::discriminant(other)
            && self.entity_id() == other.entity_id()
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ConfirmPrompt {
    pub title: String,
    pub message: String,
    pub target: Option<ConfirmTarget>,
}

impl ConfirmPrompt {
    pub fn delete_batch(batch: Batch, assigned: usize) -> Self {
        Self {
            title: format!("Delete Batch: {}", batch.name),
            message: format!(
                "Are you sure you want to permanently delete the batch \"{}\"? This action will unassign {} employee(s).",
                batch.name, assigned
            ),
            target: Some(ConfirmTarget::DeleteBatch(batch)),
        }
    }

    pub fn delete_employee(employee: Employee) -> Self {
        Self {
            title: format!("Delete Employee: {}", employee.name),
            message: format!(
                "Are you sure you want to permanently delete the employee \"{}\"? This cannot be undone.",
                employee.name
            ),
            target: Some(ConfirmTarget::DeleteEmployee(employee)),
        }
    }

    pub fn is_open(&self) -> bool {
        self.target.is_some()
    }

    /// Close the prompt if it still asks about `target`; a prompt opened
    /// for something else in the meantime stays.
    pub fn close_for(&mut self, target: &ConfirmTarget) {
        if self.target.as_ref().is_some_and(|t| t.same_entity(target)) {
            *self = ConfirmPrompt::default();
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct DashboardState {
    pub batches: Vec<Batch>,
    pub employees: Vec<Employee>,
    pub bank_accounts: Vec<BankAccount>,
    pub error: Option<String>,
    pub pending: BTreeSet<Action>,
    pub prompt: ConfirmPrompt,
    /// Batch selected in the payment dialog; `None` means closed.
    pub payment_batch: Option<Batch>,
    /// Batch open in the edit dialog; `None` means closed.
    pub edit_batch: Option<Batch>,
}

impl DashboardState {
    pub fn is_loading(&self) -> bool {
        self.pending.contains(&Action::Load) || self.pending.contains(&Action::BulkUpload)
    }

    pub fn batch(&self, batch_id: u64) -> Option<&Batch> {
        self.batches.iter().find(|b| b.id == batch_id)
    }

    pub fn employee(&self, employee_id: u64) -> Option<&Employee> {
        self.employees.iter().find(|e| e.id == employee_id)
    }

    pub fn employees_in_batch(&self, batch_id: u64) -> impl Iterator<Item = &Employee> {
        self.employees.iter().filter(move |e| e.is_assigned_to(batch_id))
    }

    pub fn assigned_count(&self, batch_id: u64) -> usize {
        self.employees_in_batch(batch_id).count()
    }

    /// Swap in freshly fetched collections, newest batch first.
    pub fn replace_all(
        &mut self,
        mut batches: Vec<Batch>,
        employees: Vec<Employee>,
        bank_accounts: Vec<BankAccount>,
    ) {
        batches.sort_by(|a, b| b.id.cmp(&a.id));
        self.batches = batches;
        self.employees = employees;
        self.bank_accounts = bank_accounts;
    }

    pub fn insert_batch(&mut self, batch: Batch) {
        self.batches.retain(|b| b.id != batch.id);
        self.batches.insert(0, batch);
    }

    /// No-op when the batch is no longer cached, e.g. deleted meanwhile.
    pub fn replace_batch(&mut self, batch: Batch) {
        if let Some(slot) = self.batches.iter_mut().find(|b| b.id == batch.id) {
            *slot = batch;
        }
    }

    /// Mirrors the backend cascade: employees of the batch become unassigned.
    pub fn remove_batch(&mut self, batch_id: u64) {
        self.batches.retain(|b| b.id != batch_id);
        for employee in self.employees.iter_mut().filter(|e| e.is_assigned_to(batch_id)) {
            employee.batch_id = None;
        }
    }

    pub fn insert_employee(&mut self, employee: Employee) {
        self.employees.retain(|e| e.id != employee.id);
        self.employees.insert(0, employee);
    }

    pub fn replace_employee(&mut self, employee: Employee) {
        if let Some(slot) = self.employees.iter_mut().find(|e| e.id == employee.id) {
            *slot = employee;
        }
    }

    pub fn remove_employee(&mut self, employee_id: u64) {
        self.employees.retain(|e| e.id != employee_id);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::employee;

    fn batch(id: u64, name: &str) -> Batch {
        Batch {
            id,
            name: name.to_string(),
            status: None,
        }
    }

    fn state() -> DashboardState {
        let mut state = DashboardState::default();
        state.replace_all(
            vec![batch(3, "Sales"), batch(5, "Engineering"), batch(4, "Ops")],
            vec![
                employee(11, "Asha", 10.0, Some(5)),
                employee(12, "Ravi", 20.0, Some(5)),
                employee(13, "Meera", 30.0, Some(3)),
                employee(14, "Kiran", 40.0, None),
            ],
            vec![],
        );
        state
    }

    #[test]
    fn fetched_batches_are_newest_first() {
        let ids: Vec<u64> = state().batches.iter().map(|b| b.id).collect();
        assert_eq!(ids, [5, 4, 3]);
    }

    #[test]
    fn new_batch_is_prepended() {
        let mut state = DashboardState::default();
        state.batches = vec![batch(5, "Q3 Engineering")];

        state.insert_batch(batch(6, "Q4 Marketing Team"));

        let ids: Vec<u64> = state.batches.iter().map(|b| b.id).collect();
        assert_eq!(ids, [6, 5]);
        assert_eq!(state.batches[0].name, "Q4 Marketing Team");
    }

    #[test]
    fn replace_keeps_position_and_neighbours() {
        let mut state = state();
        let before = state.batches.clone();

        state.replace_batch(batch(4, "Operations"));

        assert_eq!(state.batches.len(), before.len());
        assert_eq!(state.batches[1].name, "Operations");
        assert_eq!(state.batches[0], before[0]);
        assert_eq!(state.batches[2], before[2]);
    }

    #[test]
    fn removing_a_batch_unassigns_its_employees() {
        let mut state = state();
        assert_eq!(state.assigned_count(5), 2);

        state.remove_batch(5);

        assert!(state.batch(5).is_none());
        assert_eq!(state.employee(11).unwrap().batch_id, None);
        assert_eq!(state.employee(12).unwrap().batch_id, None);
        assert_eq!(state.employee(13).unwrap().batch_id, Some(3));
        assert_eq!(state.assigned_count(5), 0);
    }

    #[test]
    fn reinserted_employee_appears_exactly_once() {
        let mut state = state();

        state.insert_employee(employee(12, "Ravi", 25.0, Some(5)));

        assert_eq!(state.employees.iter().filter(|e| e.id == 12).count(), 1);
        assert_eq!(state.employees[0].id, 12);
        assert_eq!(state.employees[0].salary_amount, 25.0);
    }

    #[test]
    fn update_of_an_uncached_entity_changes_nothing() {
        let mut state = state();
        let employees = state.employees.clone();
        let batches = state.batches.clone();

        state.replace_employee(employee(99, "Late arrival", 1.0, None));
        state.replace_batch(batch(42, "Deleted meanwhile"));

        assert_eq!(state.employees, employees);
        assert_eq!(state.batches, batches);
    }

    #[test]
    fn loading_tracks_load_and_upload() {
        let mut state = state();
        assert!(!state.is_loading());
        state.pending.insert(Action::AddBatch);
        assert!(!state.is_loading());
        state.pending.insert(Action::BulkUpload);
        assert!(state.is_loading());
    }

    #[test]
    fn prompt_messages_name_the_target() {
        let prompt = ConfirmPrompt::delete_batch(batch(5, "Engineering"), 2);
        assert_eq!(prompt.title, "Delete Batch: Engineering");
        assert!(prompt.message.contains("This action will unassign 2 employee(s)."));
        assert_eq!(prompt.target.as_ref().unwrap().to_string(), "delete_batch");
        assert!(prompt.is_open());

        let prompt = ConfirmPrompt::delete_employee(employee(11, "Asha", 1.0, None));
        assert_eq!(prompt.title, "Delete Employee: Asha");
        assert!(prompt.message.ends_with("This cannot be undone."));
        assert_eq!(prompt.target.as_ref().unwrap().entity_id(), 11);
    }

    #[test]
    fn prompt_closes_only_for_its_own_target() {
        let asha = employee(11, "Asha", 1.0, None);
        let mut prompt = ConfirmPrompt::delete_employee(asha.clone());

        prompt.close_for(&ConfirmTarget::DeleteEmployee(employee(12, "Ravi", 1.0, None)));
        assert!(prompt.is_open());
        prompt.close_for(&ConfirmTarget::DeleteBatch(batch(11, "Same id, other kind")));
        assert!(prompt.is_open());

        prompt.close_for(&ConfirmTarget::DeleteEmployee(asha));
        assert!(!prompt.is_open());
    }
}
