use account_ledger::{parse_amount, Account, InputError, LedgerStore};
use anyhow::Result;
use crossterm::{
    event::{self, Event, KeyCode, KeyModifiers},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    backend::CrosstermBackend,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Cell, Paragraph, Row, Table, TableState},
    Frame, Terminal,
};
use std::io;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Name,
    Balance,
    Threshold,
}

impl Field {
    pub fn next(&self) -> Self {
        match self {
            Field::Name => Field::Balance,
            Field::Balance => Field::Threshold,
            Field::Threshold => Field::Name,
        }
    }

    pub fn previous(&self) -> Self {
        match self {
            Field::Name => Field::Threshold,
            Field::Balance => Field::Name,
            Field::Threshold => Field::Balance,
        }
    }

    pub fn title(&self) -> &str {
        match self {
            Field::Name => "Name",
            Field::Balance => "Balance",
            Field::Threshold => "Min balance",
        }
    }
}

pub struct App {
    pub store: LedgerStore,
    pub name_input: String,
    pub balance_input: String,
    pub threshold_input: String,
    pub focus: Field,
    pub state: TableState,
    pub input_error: Option<InputError>,
}

impl App {
    pub fn new(store: LedgerStore) -> Self {
        let mut state = TableState::default();
        if !store.filtered_accounts().is_empty() {
            state.select(Some(0));
        }

        Self {
            store,
            name_input: String::new(),
            balance_input: String::new(),
            threshold_input: String::new(),
            focus: Field::Name,
            state,
            input_error: None,
        }
    }

    /// The rows currently on screen: the store's filtered view.
    pub fn visible_accounts(&self) -> Vec<Account> {
        self.store.filtered_accounts()
    }

    pub fn focus_next(&mut self) {
        self.focus = self.focus.next();
    }

    pub fn focus_previous(&mut self) {
        self.focus = self.focus.previous();
    }

    fn focused_input_mut(&mut self) -> &mut String {
        match self.focus {
            Field::Name => &mut self.name_input,
            Field::Balance => &mut self.balance_input,
            Field::Threshold => &mut self.threshold_input,
        }
    }

    pub fn push_char(&mut self, c: char) {
        self.focused_input_mut().push(c);
        if self.focus == Field::Threshold {
            self.apply_threshold();
        }
    }

    pub fn pop_char(&mut self) {
        self.focused_input_mut().pop();
        if self.focus == Field::Threshold {
            self.apply_threshold();
        }
    }

    /// Re-parse the threshold buffer and push it into the store.
    ///
    /// An unparseable buffer leaves the previous threshold in effect and
    /// surfaces the error instead.
    fn apply_threshold(&mut self) {
        match parse_amount("min balance", &self.threshold_input) {
            Ok(threshold) => {
                self.store.set_filter_threshold(threshold);
                self.input_error = None;
                self.reset_selection();
            }
            Err(err) => self.input_error = Some(err),
        }
    }

    /// Commit the form as a new account.
    ///
    /// The balance buffer must parse first; if it doesn't, the store is not
    /// touched and the error is shown. On success the pending record is
    /// staged, committed, and the form buffers are cleared.
    pub fn save_account(&mut self) {
        let balance = match parse_amount("balance", &self.balance_input) {
            Ok(balance) => balance,
            Err(err) => {
                self.input_error = Some(err);
                return;
            }
        };

        self.store.set_pending_name(self.name_input.clone());
        self.store.set_pending_balance(balance);
        self.store.commit_pending_account();

        self.name_input.clear();
        self.balance_input.clear();
        self.input_error = None;
        self.reset_selection();
    }

    fn reset_selection(&mut self) {
        if self.visible_accounts().is_empty() {
            self.state.select(None);
        } else {
            self.state.select(Some(0));
        }
    }

    pub fn next(&mut self) {
        let len = self.visible_accounts().len();
        if len == 0 {
            return;
        }
        let i = match self.state.selected() {
            Some(i) => {
                if i >= len - 1 {
                    0
                } else {
                    i + 1
                }
            }
            None => 0,
        };
        self.state.select(Some(i));
    }

    pub fn previous(&mut self) {
        let len = self.visible_accounts().len();
        if len == 0 {
            return;
        }
        let i = match self.state.selected() {
            Some(i) => {
                if i == 0 {
                    len - 1
                } else {
                    i - 1
                }
            }
            None => 0,
        };
        self.state.select(Some(i));
    }
}

pub fn run_ui(app: &mut App) -> Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run the app
    let res = run_app(&mut terminal, app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        println!("Error: {:?}", err);
    }

    Ok(())
}

fn run_app<B: ratatui::backend::Backend>(
    terminal: &mut Terminal<B>,
    app: &mut App,
) -> io::Result<()> {
    loop {
        terminal.draw(|f| ui(f, app))?;

        if let Event::Key(key) = event::read()? {
            match key.code {
                KeyCode::Esc => return Ok(()),
                KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                    return Ok(())
                }
                KeyCode::Enter => app.save_account(),
                KeyCode::Tab => app.focus_next(),
                KeyCode::BackTab => app.focus_previous(),
                KeyCode::Backspace => app.pop_char(),
                KeyCode::Down => app.next(),
                KeyCode::Up => app.previous(),
                KeyCode::Char(c) => app.push_char(c),
                _ => {}
            }
        }
    }
}

fn ui(f: &mut Frame, app: &mut App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header with totals
            Constraint::Min(0),    // Content area
            Constraint::Length(3), // Status bar
        ])
        .split(f.size());

    render_header(f, chunks[0], app);

    let content_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(60), // Account list
            Constraint::Percentage(40), // Add-account form
        ])
        .split(chunks[1]);

    render_table(f, content_chunks[0], app);
    render_form(f, content_chunks[1], app);

    render_status_bar(f, chunks[2], app);
}

fn render_header(f: &mut Frame, area: Rect, app: &App) {
    let shown = app.visible_accounts().len();
    let total = app.store.accounts().len();

    let header_spans = vec![
        Span::styled(
            "Account Ledger",
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        ),
        Span::raw("  |  "),
        Span::styled(
            format!("Accounts: {}/{}", shown, total),
            Style::default().fg(Color::White),
        ),
        Span::raw("  |  "),
        Span::styled(
            format!("Total balance: {:.2}", app.store.total_balance()),
            Style::default().fg(Color::Green),
        ),
    ];

    let header = Paragraph::new(vec![Line::from(header_spans)]).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Cyan)),
    );

    f.render_widget(header, area);
}

fn render_table(f: &mut Frame, area: Rect, app: &mut App) {
    let header_cells = ["Name", "Balance"].iter().map(|h| {
        Cell::from(*h).style(
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        )
    });

    let header = Row::new(header_cells)
        .style(Style::default().bg(Color::DarkGray))
        .height(1);

    let accounts = app.visible_accounts();
    let rows = accounts.iter().map(|acc| {
        let color = if acc.is_overdrawn() {
            Color::Red
        } else {
            Color::Green
        };

        let cells = vec![
            Cell::from(acc.name.clone()),
            Cell::from(format!("{:.2}", acc.balance)).style(Style::default().fg(color)),
        ];

        Row::new(cells).height(1)
    });

    let title = if app.store.filter_threshold() != 0.0 {
        format!(" Accounts (balance >= {:.2}) ", app.store.filter_threshold())
    } else {
        " Accounts ".to_string()
    };

    let table = Table::new(rows, [Constraint::Min(24), Constraint::Length(14)])
        .header(header)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::White))
                .title(title),
        )
        .highlight_style(
            Style::default()
                .bg(Color::DarkGray)
                .add_modifier(Modifier::BOLD),
        )
        .highlight_symbol("→ ");

    f.render_stateful_widget(table, area, &mut app.state);
}

fn render_form(f: &mut Frame, area: Rect, app: &App) {
    let fields = [
        (Field::Name, app.name_input.as_str()),
        (Field::Balance, app.balance_input.as_str()),
        (Field::Threshold, app.threshold_input.as_str()),
    ];

    let mut content = vec![Line::from("")];
    for (field, buffer) in fields {
        let focused = field == app.focus;
        let label_style = if focused {
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::Cyan)
        };

        let mut spans = vec![
            Span::raw("  "),
            Span::styled(format!("{:<12}", field.title()), label_style),
            Span::raw(buffer.to_string()),
        ];
        if focused {
            spans.push(Span::styled("▏", Style::default().fg(Color::Yellow)));
        }

        content.push(Line::from(spans));
        content.push(Line::from(""));
    }

    content.push(Line::from(vec![
        Span::raw("  "),
        Span::styled(
            "Enter saves the account, Tab moves between fields",
            Style::default()
                .fg(Color::DarkGray)
                .add_modifier(Modifier::ITALIC),
        ),
    ]));

    let form = Paragraph::new(content).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::White))
            .title(" Add Account "),
    );

    f.render_widget(form, area);
}

fn render_status_bar(f: &mut Frame, area: Rect, app: &App) {
    let selected = app.state.selected().map(|i| i + 1).unwrap_or(0);
    let total = app.visible_accounts().len();

    let mut status_spans = vec![Span::styled(
        format!(" Row: {}/{} ", selected, total),
        Style::default().fg(Color::Cyan),
    )];

    if let Some(err) = &app.input_error {
        status_spans.push(Span::raw(" | "));
        status_spans.push(Span::styled(
            err.to_string(),
            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
        ));
    }

    status_spans.push(Span::raw(" | "));
    status_spans.push(Span::styled("Tab", Style::default().fg(Color::Yellow)));
    status_spans.push(Span::raw(" Field | "));
    status_spans.push(Span::styled("Enter", Style::default().fg(Color::Yellow)));
    status_spans.push(Span::raw(" Save | "));
    status_spans.push(Span::styled("↑/↓", Style::default().fg(Color::Yellow)));
    status_spans.push(Span::raw(" Nav | "));
    status_spans.push(Span::styled("Esc", Style::default().fg(Color::Red)));
    status_spans.push(Span::raw(" Quit"));

    let status_bar = Paragraph::new(vec![Line::from(status_spans)]).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::White)),
    );

    f.render_widget(status_bar, area);
}

#[cfg(test)]
mod tests {
    use super::*;

    fn type_into(app: &mut App, field: Field, text: &str) {
        app.focus = field;
        for c in text.chars() {
            app.push_char(c);
        }
    }

    #[test]
    fn test_save_account_commits_and_clears_form() {
        let mut app = App::new(LedgerStore::demo());
        type_into(&mut app, Field::Name, "New Person");
        type_into(&mut app, Field::Balance, "500");

        app.save_account();

        assert_eq!(app.store.accounts().len(), 5);
        assert_eq!(app.store.accounts()[0].name, "New Person");
        assert_eq!(app.store.accounts()[0].balance, 500.0);
        assert_eq!(app.store.total_balance(), 3250.0);
        assert!(app.name_input.is_empty());
        assert!(app.balance_input.is_empty());
        assert!(app.input_error.is_none());
    }

    #[test]
    fn test_save_account_rejects_unparseable_balance() {
        let mut app = App::new(LedgerStore::demo());
        type_into(&mut app, Field::Name, "New Person");
        type_into(&mut app, Field::Balance, "50x");

        app.save_account();

        // Store untouched, error surfaced, form kept for correction
        assert_eq!(app.store.accounts().len(), 4);
        assert_eq!(app.store.pending().name, "");
        assert!(app.input_error.is_some());
        assert_eq!(app.name_input, "New Person");
        assert_eq!(app.balance_input, "50x");
    }

    #[test]
    fn test_save_account_with_empty_form_commits_defaults() {
        let mut app = App::new(LedgerStore::demo());
        app.save_account();

        assert_eq!(app.store.accounts().len(), 5);
        assert_eq!(app.store.accounts()[0], Account::default());
    }

    #[test]
    fn test_threshold_editing_filters_live() {
        let mut app = App::new(LedgerStore::demo());
        type_into(&mut app, Field::Threshold, "700");

        assert_eq!(app.store.filter_threshold(), 700.0);
        let visible = app.visible_accounts();
        assert_eq!(visible.len(), 2);
        assert_eq!(visible[0].name, "Barbara Rabson");
        assert_eq!(visible[1].name, "Irma Diloway");
    }

    #[test]
    fn test_unparseable_threshold_keeps_previous_value() {
        let mut app = App::new(LedgerStore::demo());
        type_into(&mut app, Field::Threshold, "700");
        assert_eq!(app.store.filter_threshold(), 700.0);

        app.push_char('x');

        assert_eq!(app.store.filter_threshold(), 700.0);
        assert!(app.input_error.is_some());

        // Deleting the bad character recovers
        app.pop_char();
        assert!(app.input_error.is_none());
        assert_eq!(app.store.filter_threshold(), 700.0);
    }

    #[test]
    fn test_clearing_threshold_resets_to_zero() {
        let mut app = App::new(LedgerStore::demo());
        type_into(&mut app, Field::Threshold, "700");
        app.pop_char();
        app.pop_char();
        app.pop_char();

        assert_eq!(app.store.filter_threshold(), 0.0);
        assert_eq!(app.visible_accounts().len(), 4);
    }

    #[test]
    fn test_selection_wraps_over_visible_rows() {
        let mut app = App::new(LedgerStore::demo());
        assert_eq!(app.state.selected(), Some(0));

        app.previous();
        assert_eq!(app.state.selected(), Some(3));

        app.next();
        assert_eq!(app.state.selected(), Some(0));
    }

    #[test]
    fn test_selection_cleared_when_filter_empties_the_view() {
        let mut app = App::new(LedgerStore::demo());
        type_into(&mut app, Field::Threshold, "99999");

        assert!(app.visible_accounts().is_empty());
        assert_eq!(app.state.selected(), None);

        app.next();
        assert_eq!(app.state.selected(), None);
    }

    #[test]
    fn test_focus_cycles_through_all_fields() {
        let mut app = App::new(LedgerStore::demo());
        assert_eq!(app.focus, Field::Name);

        app.focus_next();
        assert_eq!(app.focus, Field::Balance);
        app.focus_next();
        assert_eq!(app.focus, Field::Threshold);
        app.focus_next();
        assert_eq!(app.focus, Field::Name);

        app.focus_previous();
        assert_eq!(app.focus, Field::Threshold);
    }
}
