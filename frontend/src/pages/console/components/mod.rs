pub mod attendance_form;
pub mod attendance_records;
pub mod dashboard;
pub mod delete_dialog;
pub mod detail_modal;
pub mod employee_form;
pub mod employee_list;
pub mod toast;
