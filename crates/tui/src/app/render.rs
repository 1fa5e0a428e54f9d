use super::*;
use ratatui::layout::{Constraint, Direction, Layout};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph, Wrap};

const TITLE: &str = " pdiff ";
const STATUS_HEIGHT: u16 = 3;

impl App {
    pub fn render(&self, frame: &mut Frame) {
        render(frame, &self.state, &self.keybinds);
    }
}

/// Draws one frame from `state`. Which view is shown depends only on
/// [`SessionState::view`].
pub fn render(frame: &mut Frame, state: &SessionState, keybinds: &Keybinds) {
    let area = frame.area();

    let [main, status] = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(1), Constraint::Length(STATUS_HEIGHT)])
        .areas(area);

    match state.view {
        View::Create => render_create(frame, main, state),
        View::Result => render_result(frame, main, state),
    }
    render_status(frame, status, state);

    if state.show_help {
        render_help(frame, area, keybinds);
    }
}

fn field_line<'a>(label: &'a str, field: &'a TextField, focused: bool) -> Line<'a> {
    let label_style = if focused {
        Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::Gray)
    };
    let mut spans = vec![
        Span::styled(format!("  {label:<12}"), label_style),
        Span::raw(field.value()),
    ];
    if focused {
        spans.push(Span::styled("_", Style::default().add_modifier(Modifier::SLOW_BLINK)));
    }
    Line::from(spans)
}

fn render_create(frame: &mut Frame, area: Rect, state: &SessionState) {
    let lines = vec![
        Line::raw(""),
        Line::raw("  Register a site to receive its upload key and secret."),
        Line::raw(""),
        field_line("Site name:", &state.create_name, true),
        Line::raw(""),
        Line::styled(
            "  [Enter] create   [Esc] quit   [F1] help",
            Style::default().fg(Color::DarkGray),
        ),
    ];

    let paragraph = Paragraph::new(lines).block(
        Block::default()
            .borders(Borders::ALL)
            .title(format!("{TITLE}- create site ")),
    );
    frame.render_widget(paragraph, area);
}

fn render_result(frame: &mut Frame, area: Rect, state: &SessionState) {
    let value_style = Style::default().fg(Color::Yellow);
    let focus = state.upload.focus;

    let lines = vec![
        Line::raw(""),
        Line::from(vec![Span::raw("  Site:       "), Span::styled(&state.site, value_style)]),
        Line::from(vec![Span::raw("  Key:        "), Span::styled(&state.key, value_style)]),
        Line::from(vec![Span::raw("  Secret:     "), Span::styled(&state.secret, value_style)]),
        Line::raw(""),
        Line::styled(
            "  Keep the secret private: it signs every image upload.",
            Style::default().fg(Color::DarkGray),
        ),
        Line::raw(""),
        Line::styled("  Upload image", Style::default().add_modifier(Modifier::BOLD)),
        field_line("Image file:", &state.upload.image_path, focus == UploadField::ImagePath),
        field_line("Group:", &state.upload.group, focus == UploadField::Group),
        field_line("Id:", &state.upload.id, focus == UploadField::Id),
        Line::raw(""),
        Line::styled(
            "  [Tab] next field   [Enter] upload   [Esc] new site   [F1] help",
            Style::default().fg(Color::DarkGray),
        ),
    ];

    let paragraph = Paragraph::new(lines)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(format!("{TITLE}- credentials ")),
        )
        .wrap(Wrap { trim: false });
    frame.render_widget(paragraph, area);
}

fn render_status(frame: &mut Frame, area: Rect, state: &SessionState) {
    let line = if let Some(ref error) = state.error {
        Line::styled(format!(" {error}"), Style::default().fg(Color::Red))
    } else if state.pending > 0 {
        Line::styled(
            format!(" Creating site... ({} in flight)", state.pending),
            Style::default().fg(Color::Yellow),
        )
    } else if state.view == View::Create {
        Line::raw(" Ready")
    } else if state.uploading {
        Line::styled(" Uploading image...", Style::default().fg(Color::Yellow))
    } else if let Some(ref status) = state.last_upload {
        Line::styled(format!(" {status}"), Style::default().fg(Color::Green))
    } else {
        Line::raw(" Ready")
    };

    let paragraph = Paragraph::new(line).block(Block::default().borders(Borders::ALL));
    frame.render_widget(paragraph, area);
}

fn render_help(frame: &mut Frame, area: Rect, keybinds: &Keybinds) {
    let width = area.width.min(60);
    let height = area.height.min(20);
    let popup = Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    };

    let paragraph = Paragraph::new(keybinds.help_text())
        .block(Block::default().borders(Borders::ALL).title(" Help "));
    frame.render_widget(Clear, popup);
    frame.render_widget(paragraph, popup);
}
