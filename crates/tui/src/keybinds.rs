pub struct Keybinds;

impl Default for Keybinds {
    fn default() -> Self {
        Self
    }
}

impl Keybinds {
    pub fn help_text(&self) -> String {
        r#"Keyboard Shortcuts:

Create site:
  Type          Enter the site name
  Enter         Register the site
  Esc           Quit

Credentials:
  Tab / Shift+Tab  Move between upload fields
  Enter         Sign and upload the image
  Esc           Register another site

General:
  F1            Toggle this help
  Ctrl + Q      Quit
"#
        .to_string()
    }
}
