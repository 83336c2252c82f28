use crate::contact::Field;
use crate::ui::app::{App, Focus};
use crate::ui::dialog::DialogState;
use crate::ui::footer::Footer;
use crate::ui::form::FormState;
use crate::ui::header::Header;
use crate::ui::layout::{body_panes, centered_rect_by_size, layout_regions};
use crate::ui::theme::{
    ACCENT, ACTIVE_HIGHLIGHT, FOCUS_BORDER, GLOBAL_BORDER, HEADER_SEPARATOR, HEADER_TEXT,
    POPUP_BORDER, STATUS_ERROR,
};
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, List, ListItem, ListState, Paragraph};
use ratatui::Frame;

const DIALOG_WIDTH: u16 = 60;
const LABEL_WIDTH: usize = 10;
const SEARCH_PLACEHOLDER: &str = "Search Address Book";

pub fn draw(frame: &mut Frame<'_>, app: &App) {
    let area = frame.area();
    let (header, body, footer) = layout_regions(area);
    let visible = app.visible_contacts();

    let header_widget = Header::new(
        app.contacts().len(),
        visible.len(),
        app.is_busy(),
        app.spinner_frame(),
    );
    frame.render_widget(header_widget.widget(), header);

    frame.render_widget(Clear, body);
    let (search_area, list_area, detail_area) = body_panes(body);
    draw_search(frame, app, search_area);

    let items: Vec<ListItem> = visible
        .iter()
        .map(|contact| ListItem::new(Line::from(contact.name.clone())))
        .collect();
    let empty = items.is_empty();
    let list = List::new(items)
        .block(pane_block("Contacts", app.focus() == Focus::List))
        .highlight_style(Style::default().bg(ACTIVE_HIGHLIGHT).fg(ACCENT))
        .highlight_symbol("▸ ");
    let mut list_state = ListState::default().with_selected((!empty).then_some(app.highlight()));
    frame.render_stateful_widget(list, list_area, &mut list_state);
    if empty {
        let message = if app.is_loading() {
            "Loading..."
        } else if app.contacts().is_empty() {
            "No contacts yet. Press a to add one."
        } else {
            "No contacts match the search."
        };
        let inner = inset(list_area);
        frame.render_widget(
            Paragraph::new(message).style(Style::default().fg(HEADER_SEPARATOR)),
            inner,
        );
    }

    draw_detail(frame, app, detail_area);

    let footer_widget = Footer::new(hints(app), app.notice());
    frame.render_widget(footer_widget.widget(footer), footer);

    match app.dialog() {
        DialogState::Hidden => {}
        DialogState::Add(form) => draw_form(
            frame,
            body,
            "Add Address",
            "Add a new address",
            form,
        ),
        DialogState::Edit(form) => draw_form(
            frame,
            body,
            "Edit Address",
            "Make changes below to the data about this address",
            form,
        ),
        DialogState::ConfirmDelete => draw_confirm(frame, app, body),
    }
}

fn draw_search(frame: &mut Frame<'_>, app: &App, area: Rect) {
    let focused = app.focus() == Focus::Search && !app.dialog().is_visible();
    let line = if app.search_text().is_empty() {
        Line::from(Span::styled(
            SEARCH_PLACEHOLDER,
            Style::default().fg(HEADER_SEPARATOR),
        ))
    } else {
        Line::from(Span::styled(
            app.search_text().to_string(),
            Style::default().fg(HEADER_TEXT),
        ))
    };
    frame.render_widget(
        Paragraph::new(line).block(pane_block("Search", focused)),
        area,
    );

    if focused && area.width > 2 && area.height > 2 {
        let offset = app.search_text().chars().count() as u16;
        let x = area.x + 1 + offset.min(area.width.saturating_sub(3));
        frame.set_cursor_position((x, area.y + 1));
    }
}

fn draw_detail(frame: &mut Frame<'_>, app: &App, area: Rect) {
    let lines = match app.selected() {
        Some(contact) => vec![
            Line::from(Span::styled(
                contact.name.clone(),
                Style::default().fg(ACCENT).add_modifier(Modifier::BOLD),
            )),
            Line::from(""),
            Line::from(Span::styled(
                contact.address.clone(),
                Style::default().fg(HEADER_TEXT),
            )),
            Line::from(Span::styled(
                contact.locality(),
                Style::default().fg(HEADER_TEXT),
            )),
            Line::from(""),
            Line::from(Span::styled(
                "e: Edit  d: Delete",
                Style::default().fg(HEADER_SEPARATOR),
            )),
        ],
        None => vec![Line::from(Span::styled(
            "Select a contact to see its address.",
            Style::default().fg(HEADER_SEPARATOR),
        ))],
    };
    frame.render_widget(Paragraph::new(lines).block(pane_block("Details", false)), area);
}

fn draw_form(frame: &mut Frame<'_>, body: Rect, title: &str, description: &str, form: &FormState) {
    let mut lines = vec![
        Line::from(Span::styled(
            format!(" {}", description),
            Style::default().fg(HEADER_SEPARATOR),
        )),
        Line::from(""),
    ];
    let mut cursor_row = 0usize;

    for field in Field::ALL {
        let focused = field == form.focused;
        if focused {
            cursor_row = lines.len();
        }
        let label_style = if focused {
            Style::default().fg(ACCENT)
        } else {
            Style::default().fg(HEADER_TEXT)
        };
        let mut line = Line::from(vec![
            Span::styled(
                format!(" {:>width$}: ", field.label(), width = LABEL_WIDTH),
                label_style,
            ),
            Span::styled(
                form.draft.get(field).to_string(),
                Style::default().fg(HEADER_TEXT),
            ),
        ]);
        if focused {
            line = line.style(Style::default().bg(ACTIVE_HIGHLIGHT));
        }
        lines.push(line);

        if let Some(error) = form.error_for(field) {
            lines.push(Line::from(Span::styled(
                format!(" {:>width$}  {}", "", error, width = LABEL_WIDTH),
                Style::default().fg(STATUS_ERROR),
            )));
        }
    }

    lines.push(Line::from(""));
    if let Some(error) = &form.submit_error {
        lines.push(Line::from(Span::styled(
            format!(" {}", error),
            Style::default().fg(STATUS_ERROR),
        )));
    }
    if form.is_submitting() {
        lines.push(Line::from(Span::styled(
            " Saving...",
            Style::default().fg(ACCENT),
        )));
    }
    lines.push(Line::from(Span::styled(
        " Tab: Next field  Enter: Save  Esc: Cancel",
        Style::default().fg(HEADER_SEPARATOR),
    )));

    let height = lines.len().saturating_add(2) as u16;
    let area = centered_rect_by_size(body, DIALOG_WIDTH, height);
    frame.render_widget(Clear, area);
    frame.render_widget(Paragraph::new(lines).block(popup_block(title)), area);

    let value_len = form.draft.get(form.focused).chars().count() as u16;
    let prefix = (LABEL_WIDTH + 3) as u16;
    let y = area.y + 1 + cursor_row as u16;
    if !form.is_submitting() && y < area.y + area.height.saturating_sub(1) {
        let max_x = area.x + area.width.saturating_sub(2);
        let x = (area.x + 1 + prefix + value_len).min(max_x);
        frame.set_cursor_position((x, y));
    }
}

fn draw_confirm(frame: &mut Frame<'_>, app: &App, body: Rect) {
    let name = app
        .selected()
        .map(|contact| contact.name.clone())
        .unwrap_or_default();
    let lines = vec![
        Line::from(Span::styled(
            " Are you sure you want to delete this address?",
            Style::default().fg(HEADER_TEXT),
        )),
        Line::from(Span::styled(
            format!(" {}", name),
            Style::default().fg(ACCENT).add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(Span::styled(
            " y: Delete  n: Cancel",
            Style::default().fg(HEADER_SEPARATOR),
        )),
    ];
    let height = lines.len().saturating_add(2) as u16;
    let area = centered_rect_by_size(body, DIALOG_WIDTH, height);
    frame.render_widget(Clear, area);
    frame.render_widget(
        Paragraph::new(lines).block(popup_block("Delete Address")),
        area,
    );
}

fn hints(app: &App) -> &'static str {
    match app.dialog() {
        DialogState::Add(_) | DialogState::Edit(_) => "Tab: Next │ Enter: Save │ Esc: Cancel",
        DialogState::ConfirmDelete => "y: Delete │ n: Cancel",
        DialogState::Hidden => match app.focus() {
            Focus::Search => "Type to filter │ Enter/Esc: Done",
            Focus::List => {
                "/: Search │ ↑↓: Move │ Enter: Select │ a: Add │ e: Edit │ d: Delete │ r: Reload │ q: Quit"
            }
        },
    }
}

fn pane_block(title: &str, focused: bool) -> Block<'static> {
    let border = if focused { FOCUS_BORDER } else { GLOBAL_BORDER };
    Block::default()
        .title(Span::styled(title.to_string(), Style::default().fg(HEADER_TEXT)))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border))
}

fn popup_block(title: &str) -> Block<'static> {
    Block::default()
        .title(Span::styled(title.to_string(), Style::default().fg(ACCENT)))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(POPUP_BORDER))
}

fn inset(area: Rect) -> Rect {
    Rect {
        x: area.x.saturating_add(1),
        y: area.y.saturating_add(1),
        width: area.width.saturating_sub(2),
        height: area.height.saturating_sub(2),
    }
}
