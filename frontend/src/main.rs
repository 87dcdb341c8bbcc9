fn main() {
    #[cfg(target_arch = "wasm32")]
    hrms_console::run();
}
