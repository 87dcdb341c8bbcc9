use super::{
    components::{
        attendance_form::AttendanceForm, attendance_records::AttendanceRecords,
        dashboard::DashboardPanel, delete_dialog::EmployeeDeleteDialog,
        detail_modal::EmployeeDetailModal,
        employee_form::EmployeeForm, employee_list::EmployeeList, toast::Toast,
    },
    layout::{ConsoleFrame, PanelsGrid},
    view_model::use_console_view_model,
};
use crate::api::Employee;
use leptos::*;

#[component]
pub fn ConsolePage() -> impl IntoView {
    view! { <ConsolePanel /> }
}

#[component]
pub fn ConsolePanel() -> impl IntoView {
    let vm = use_console_view_model();
    let state = vm.state;
    vm.start();

    let on_refresh_employees = {
        let vm = vm.clone();
        Callback::new(move |_: ()| vm.spawn(|vm| async move { vm.load_employees().await }))
    };
    let on_refresh_dashboard = {
        let vm = vm.clone();
        Callback::new(move |_: ()| vm.spawn(|vm| async move { vm.load_dashboard().await }))
    };
    let on_create_employee = {
        let vm = vm.clone();
        Callback::new(move |_: ()| vm.spawn(|vm| async move { vm.create_employee().await }))
    };
    let on_view_employee = {
        let vm = vm.clone();
        Callback::new(move |employee: Employee| {
            vm.dispatch(move |s| s.view_employee(employee))
        })
    };
    let on_request_delete = Callback::new(move |employee_id: String| {
        state.update(|s| s.request_delete(employee_id))
    });
    let on_select_employee = {
        let vm = vm.clone();
        Callback::new(move |employee_id: String| {
            vm.dispatch(move |s| s.select_employee(employee_id))
        })
    };
    let on_mark_attendance = {
        let vm = vm.clone();
        Callback::new(move |_: ()| vm.spawn(|vm| async move { vm.mark_attendance().await }))
    };
    let on_refresh_attendance = {
        let vm = vm.clone();
        Callback::new(move |_: ()| vm.dispatch(|s| s.refresh_attendance()))
    };
    let on_apply_filter = {
        let vm = vm.clone();
        Callback::new(move |_: ()| vm.dispatch(|s| s.apply_filter()))
    };
    let on_confirm_delete = {
        let vm = vm.clone();
        Callback::new(move |_: ()| vm.spawn(|vm| async move { vm.delete_confirmed().await }))
    };
    let on_cancel_delete = Callback::new(move |_: ()| state.update(|s| s.cancel_delete()));
    let on_close_modal = Callback::new(move |_: ()| state.update(|s| s.close_employee_modal()));

    view! {
        <ConsoleFrame>
            <DashboardPanel state=state on_refresh=on_refresh_dashboard />
            <PanelsGrid>
                <EmployeeForm state=state on_submit=on_create_employee />
                <AttendanceForm
                    state=state
                    on_select=on_select_employee
                    on_submit=on_mark_attendance
                />
            </PanelsGrid>
            <EmployeeList
                state=state
                on_refresh=on_refresh_employees
                on_view=on_view_employee
                on_delete=on_request_delete
            />
            <AttendanceRecords
                state=state
                on_refresh=on_refresh_attendance
                on_apply=on_apply_filter
            />
            <EmployeeDetailModal state=state on_close=on_close_modal />
            <EmployeeDeleteDialog
                state=state
                on_confirm=on_confirm_delete
                on_cancel=on_cancel_delete
            />
            <Toast state=state />
        </ConsoleFrame>
    }
}
