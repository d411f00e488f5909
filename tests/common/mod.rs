use global_checkout::interfaces::cli::{Menu, MenuExit};

/// Drives the menu with `input` and returns how it stopped plus its full transcript.
pub fn run_menu(input: &str) -> (MenuExit, String) {
    let mut menu = Menu::new(input.as_bytes(), Vec::new());
    let exit = menu.run().expect("menu failed");
    let transcript = String::from_utf8(menu.into_output()).expect("menu wrote invalid UTF-8");
    (exit, transcript)
}
