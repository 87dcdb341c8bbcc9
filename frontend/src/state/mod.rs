pub mod console;
pub mod forms;
pub mod toast;
