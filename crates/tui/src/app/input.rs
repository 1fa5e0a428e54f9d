use super::*;

impl App {
    pub fn handle_event(&mut self, event: Event) -> Result<bool> {
        match event {
            Event::Key(key) if key.kind == KeyEventKind::Press => self.handle_key_event(key),
            _ => Ok(false),
        }
    }

    fn handle_key_event(&mut self, key: KeyEvent) -> Result<bool> {
        if key.code == KeyCode::Char('q') && key.modifiers.contains(KeyModifiers::CONTROL) {
            return Ok(true);
        }

        if key.code == KeyCode::F(1) {
            self.state.show_help = !self.state.show_help;
            return Ok(false);
        }

        if self.state.show_help {
            if key.code == KeyCode::Esc {
                self.state.show_help = false;
            }
            return Ok(false);
        }

        match self.state.view {
            View::Create => self.handle_create_key(key),
            View::Result => self.handle_result_key(key),
        }
    }

    fn handle_create_key(&mut self, key: KeyEvent) -> Result<bool> {
        match key.code {
            KeyCode::Enter => {
                self.create();
                return Ok(false);
            }
            KeyCode::Esc => {
                self.should_quit = true;
                return Ok(true);
            }
            _ => {}
        }

        let field = &mut self.state.create_name;
        match key.code {
            KeyCode::Char(c) => field.handle_char(c),
            KeyCode::Backspace => field.handle_backspace(),
            KeyCode::Left => field.move_left(),
            KeyCode::Right => field.move_right(),
            _ => {}
        }
        Ok(false)
    }

    fn handle_result_key(&mut self, key: KeyEvent) -> Result<bool> {
        match key.code {
            KeyCode::Enter => {
                self.upload();
                return Ok(false);
            }
            KeyCode::Esc => {
                self.reset();
                return Ok(false);
            }
            _ => {}
        }

        let form = &mut self.state.upload;
        match key.code {
            KeyCode::Tab => form.focus = form.focus.next(),
            KeyCode::BackTab => form.focus = form.focus.previous(),
            KeyCode::Char(c) => form.focused_mut().handle_char(c),
            KeyCode::Backspace => form.focused_mut().handle_backspace(),
            KeyCode::Left => form.focused_mut().move_left(),
            KeyCode::Right => form.focused_mut().move_right(),
            _ => {}
        }
        Ok(false)
    }
}
