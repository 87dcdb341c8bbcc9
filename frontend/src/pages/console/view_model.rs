use super::repository::ConsoleRepository;
use crate::{
    api::{ApiClient, ApiError, AttendanceFilter},
    state::{
        console::{
            ConsoleState, Followup, Submission, MSG_ATTENDANCE_FAILED,
            MSG_CREATE_EMPLOYEE_FAILED, MSG_DASHBOARD_FAILED, MSG_DELETE_EMPLOYEE_FAILED,
            MSG_EMPLOYEES_FAILED, MSG_SAVE_ATTENDANCE_FAILED,
        },
        toast::ToastTimer,
    },
};
use leptos::*;
use std::{future::Future, rc::Rc};

#[derive(Clone)]
pub struct ConsoleViewModel {
    pub state: RwSignal<ConsoleState>,
    repository: ConsoleRepository,
    toast_timer: ToastTimer,
}

fn log_failure(context: &str, err: &ApiError) {
    match err.status {
        Some(status) => log::error!("{} ({}): {}", context, status, err.message),
        None => log::error!("{}: {}", context, err.message),
    }
}

impl ConsoleViewModel {
    pub fn new(repository: ConsoleRepository) -> Self {
        Self {
            state: create_rw_signal(ConsoleState::default()),
            repository,
            toast_timer: ToastTimer::new(),
        }
    }

    fn apply<T>(&self, f: impl FnOnce(&mut ConsoleState) -> T) -> Option<T> {
        self.state.try_update(f)
    }

    fn followups(&self, f: impl FnOnce(&mut ConsoleState) -> Vec<Followup>) -> Vec<Followup> {
        self.apply(f).unwrap_or_default()
    }

    pub async fn load_employees(&self) -> Vec<Followup> {
        self.apply(ConsoleState::begin_employees_load);
        match self.repository.fetch_employees().await {
            Ok(employees) => self.followups(|state| state.employees_loaded(employees)),
            Err(err) => {
                log_failure("Failed to load employees", &err);
                let message = err.user_message(MSG_EMPLOYEES_FAILED);
                self.followups(|state| state.employees_failed(message))
            }
        }
    }

    pub async fn load_dashboard(&self) -> Vec<Followup> {
        self.apply(ConsoleState::begin_dashboard_load);
        match self.repository.fetch_dashboard().await {
            Ok(snapshot) => {
                self.apply(|state| state.dashboard_loaded(snapshot));
                Vec::new()
            }
            Err(err) => {
                log_failure("Failed to load dashboard", &err);
                let message = err.user_message(MSG_DASHBOARD_FAILED);
                self.followups(|state| state.dashboard_failed(message))
            }
        }
    }

    /// Responses are applied in completion order; a slow response for an
    /// earlier selection can overwrite a newer one.
    pub async fn load_attendance(
        &self,
        employee_id: String,
        filter: AttendanceFilter,
    ) -> Vec<Followup> {
        self.apply(ConsoleState::begin_attendance_load);
        match self
            .repository
            .fetch_attendance(&employee_id, filter)
            .await
        {
            Ok(listing) => {
                self.apply(|state| state.attendance_loaded(listing));
                Vec::new()
            }
            Err(err) => {
                log_failure(&format!("Failed to load attendance for {}", employee_id), &err);
                let message = err.user_message(MSG_ATTENDANCE_FAILED);
                self.followups(|state| state.attendance_failed(message))
            }
        }
    }

    pub async fn create_employee(&self) -> Vec<Followup> {
        let payload = match self.apply(ConsoleState::begin_employee_submit) {
            Some(Submission::Send(payload)) => payload,
            Some(Submission::Skip(followups)) => return followups,
            None => return Vec::new(),
        };
        match self.repository.add_employee(payload).await {
            Ok(created) => self.followups(|state| state.employee_created(created)),
            Err(err) => {
                log_failure("Failed to add employee", &err);
                let message = err.user_message(MSG_CREATE_EMPLOYEE_FAILED);
                self.followups(|state| state.employee_create_failed(message))
            }
        }
    }

    pub async fn delete_confirmed(&self) -> Vec<Followup> {
        let Some(employee_id) = self.apply(ConsoleState::confirm_delete).flatten() else {
            return Vec::new();
        };
        match self.repository.remove_employee(&employee_id).await {
            Ok(()) => self.followups(|state| state.employee_deleted(&employee_id)),
            Err(err) => {
                log_failure(&format!("Failed to delete employee {}", employee_id), &err);
                let message = err.user_message(MSG_DELETE_EMPLOYEE_FAILED);
                self.followups(|state| state.employee_delete_failed(message))
            }
        }
    }

    pub async fn mark_attendance(&self) -> Vec<Followup> {
        let (employee_id, payload) = match self.apply(ConsoleState::begin_attendance_submit) {
            Some(Submission::Send(request)) => request,
            Some(Submission::Skip(followups)) => return followups,
            None => return Vec::new(),
        };
        match self
            .repository
            .mark_attendance(&employee_id, payload)
            .await
        {
            Ok(_) => self.followups(|state| state.attendance_saved(&employee_id)),
            Err(err) => {
                log_failure(&format!("Failed to save attendance for {}", employee_id), &err);
                let message = err.user_message(MSG_SAVE_ATTENDANCE_FAILED);
                self.followups(|state| state.attendance_save_failed(message))
            }
        }
    }

    /// Shows `message` and restarts the auto-clear timer.
    pub fn notify(&self, message: impl Into<String>) {
        let message = message.into();
        let Some(ticket) = self.apply(|state| state.notify(message)) else {
            return;
        };
        let state = self.state;
        self.toast_timer.schedule(ticket, move |ticket| {
            state.try_update(|state| state.expire_toast(ticket));
        });
    }

    pub fn run(&self, followups: Vec<Followup>) {
        for followup in followups {
            match followup {
                Followup::Notify(message) => self.notify(message),
                Followup::RefreshDashboard => self.spawn(|vm| async move { vm.load_dashboard().await }),
                Followup::LoadAttendance {
                    employee_id,
                    filter,
                } => self.spawn(move |vm| async move { vm.load_attendance(employee_id, filter).await }),
            }
        }
    }

    /// Runs `task` in the background and then its follow-ups.
    pub fn spawn<F, Fut>(&self, task: F)
    where
        F: FnOnce(ConsoleViewModel) -> Fut,
        Fut: Future<Output = Vec<Followup>> + 'static,
    {
        let vm = self.clone();
        let future = task(self.clone());
        spawn_local(async move {
            let followups = future.await;
            vm.run(followups);
        });
    }

    /// Applies a synchronous transition and runs what it returns.
    pub fn dispatch(&self, transition: impl FnOnce(&mut ConsoleState) -> Vec<Followup>) {
        let followups = self.followups(transition);
        self.run(followups);
    }

    pub fn start(&self) {
        self.spawn(|vm| async move { vm.load_employees().await });
        self.spawn(|vm| async move { vm.load_dashboard().await });
    }

    pub fn dispose(&self) {
        self.toast_timer.cancel();
    }
}

pub fn use_console_view_model() -> ConsoleViewModel {
    if let Some(existing) = use_context::<ConsoleViewModel>() {
        return existing;
    }
    let api = use_context::<ApiClient>().unwrap_or_else(ApiClient::new);
    let vm = ConsoleViewModel::new(ConsoleRepository::new_with_client(Rc::new(api)));
    provide_context(vm.clone());

    let for_cleanup = vm.clone();
    on_cleanup(move || for_cleanup.dispose());
    vm
}
