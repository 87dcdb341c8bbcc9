pub mod console;

pub use console::ConsolePage;
