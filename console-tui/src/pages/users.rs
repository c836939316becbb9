use console_lib::model::{PlatformUser, UserRole};
use console_lib::query::Dataset;
use console_lib::stats::users_per_role;
use console_term::text::TextAlign;
use console_term::{Buffer, Rect, Style};
use console_widgets::content::{Content, Span, Tone};
use console_widgets::draw;
use console_widgets::filter_bar::{FilterOption, SelectFilter};
use console_widgets::stat_card::{StatCard, StatVariant};
use console_widgets::table::Column;
use console_widgets::theme::Theme;
use console_widgets::toast::{Notifier, Toast};
use console_widgets::validation::Validator;
use crossterm::event::{KeyCode, KeyEvent};

use super::form::TextField;
use super::list::ListPage;
use super::{Action, Screen, centered, date, date_time, render_cards};

fn role_tone(role: UserRole) -> Tone {
    match role {
        UserRole::PlatformAdmin => Tone::Destructive,
        UserRole::Support => Tone::Primary,
        UserRole::Finance => Tone::Accent,
    }
}

fn role_variant(role: UserRole) -> StatVariant {
    match role {
        UserRole::PlatformAdmin => StatVariant::Destructive,
        UserRole::Support => StatVariant::Default,
        UserRole::Finance => StatVariant::Accent,
    }
}

fn columns() -> Vec<Column<PlatformUser>> {
    vec![
        Column::new("name", "User", |u: &PlatformUser| {
            Content::from(Span::new(u.name.clone()).bold()).then(Span::new(u.email.clone()).muted())
        })
        .sortable()
        .flex(3),
        Column::new("role", "Role", |u: &PlatformUser| {
            Content::from(Span::new(u.role.label()).tone(role_tone(u.role)))
        })
        .sortable()
        .fixed(16),
        Column::new("is_active", "Status", |u: &PlatformUser| {
            if u.is_active {
                Content::from(Span::new("Active").tone(Tone::Primary))
            } else {
                Content::from(Span::new("Inactive").muted())
            }
        })
        .fixed(10),
        Column::new("last_login", "Last Login", |u: &PlatformUser| {
            Content::from(Span::new(date_time(&u.last_login)).muted())
        })
        .sortable()
        .fixed(22),
        Column::new("created_at", "Created", |u: &PlatformUser| {
            Content::from(Span::new(date(&u.created_at)).muted())
        })
        .sortable()
        .fixed(14),
    ]
}

/// The "Add New Admin User" dialog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AddUserForm {
    pub name: TextField,
    pub email: TextField,
    pub role: Option<UserRole>,
    /// 0 name, 1 email, 2 role.
    pub focus: usize,
}

impl Default for AddUserForm {
    fn default() -> Self {
        Self {
            name: TextField::new("Full Name", "Enter full name"),
            email: TextField::new("Email", "admin@example.com"),
            role: None,
            focus: 0,
        }
    }
}

impl AddUserForm {
    fn cycle_role(&mut self) {
        let roles = UserRole::ALL;
        self.role = Some(match self.role.and_then(|r| roles.iter().position(|x| *x == r)) {
            Some(i) => roles[(i + 1) % roles.len()],
            None => roles[0],
        });
    }

    fn submit(&self, notifier: &dyn Notifier) -> bool {
        let role = self.role.map(|r| r.as_str()).unwrap_or_default();
        let result = Validator::new()
            .field("name", &self.name.value)
            .required("Name is required")
            .min_length(2, "Name must be at least 2 characters")
            .max_length(80, "Name must be at most 80 characters")
            .field("email", &self.email.value)
            .required("Email is required")
            .email("Enter a valid email address")
            .field("role", role)
            .required("Select a role")
            .validate();
        match result.first_error() {
            Some(error) => {
                log::warn!("Add user rejected: {}", error.message);
                notifier.notify(Toast::error("Could not create user").description(error.message.clone()));
                false
            }
            None => {
                log::info!("Created admin user {}", self.email.value);
                notifier.notify(Toast::success("User created successfully"));
                true
            }
        }
    }

    fn render(&self, buf: &mut Buffer, area: Rect, theme: &dyn Theme) {
        let rect = centered(area, 50, 11);
        buf.fill(rect, &Style::new().background(theme.color("surface")));
        let inner = draw::border(
            buf,
            rect,
            Some("Add New Admin User"),
            Style::new().foreground(theme.color("border")),
        )
        .shrink(0, 1, 0, 1);
        let (name, rest) = inner.split_top(TextField::HEIGHT);
        self.name.render(buf, name, self.focus == 0, theme);
        let (email, rest) = rest.split_top(TextField::HEIGHT);
        self.email.render(buf, email, self.focus == 1, theme);
        let (role_label, rest) = rest.split_top(1);
        let (role_row, rest) = rest.split_top(1);
        let label_style = if self.focus == 2 {
            Style::new().foreground(theme.color("primary")).bold()
        } else {
            Style::new().foreground(theme.color("muted"))
        };
        draw::text(buf, role_label, "Role (space to change)", TextAlign::Left, label_style);
        let role = self.role.map(UserRole::label).unwrap_or("Select role");
        draw::text(buf, role_row, role, TextAlign::Left, Style::new());
        let (_, hint) = rest.split_top(1);
        draw::text(
            buf,
            hint,
            "Tab next field · Enter create · Esc cancel",
            TextAlign::Left,
            Style::new().foreground(theme.color("muted")),
        );
    }
}

pub struct UsersPage {
    list: ListPage<PlatformUser>,
    role_cards: Vec<StatCard>,
    pub add_form: Option<AddUserForm>,
}

impl UsersPage {
    pub fn new(users: Vec<PlatformUser>, page_size: usize) -> Self {
        let role_cards = users_per_role(&users)
            .into_iter()
            .map(|(role, count)| {
                StatCard::new(role.label(), format!("{} users", count))
                    .icon("◎")
                    .variant(role_variant(role))
            })
            .collect();
        let role = SelectFilter::new(
            "role",
            "Role",
            UserRole::ALL
                .iter()
                .map(|r| FilterOption::new(r.as_str(), r.label()))
                .collect(),
        );
        let list = ListPage::new(Dataset::new(users), columns(), page_size)
            .filter(role)
            .search_placeholder("Search users...")
            .empty_message("No users found.")
            .action("n", "Add User");
        Self {
            list,
            role_cards,
            add_form: None,
        }
    }

    pub fn list(&self) -> &ListPage<PlatformUser> {
        &self.list
    }

    fn handle_form_key(&mut self, key: &KeyEvent, notifier: &dyn Notifier) {
        let Some(form) = self.add_form.as_mut() else { return };
        match key.code {
            KeyCode::Esc => self.add_form = None,
            KeyCode::Tab => form.focus = (form.focus + 1) % 3,
            KeyCode::BackTab => form.focus = (form.focus + 2) % 3,
            KeyCode::Enter => {
                if form.submit(notifier) {
                    self.add_form = None;
                }
            }
            _ => match form.focus {
                0 => {
                    form.name.handle_key(key);
                }
                1 => {
                    form.email.handle_key(key);
                }
                _ => {
                    if key.code == KeyCode::Char(' ') {
                        form.cycle_role();
                    }
                }
            },
        }
    }
}

impl Screen for UsersPage {
    fn title(&self) -> &str {
        "Users & Roles"
    }

    fn subtitle(&self) -> &str {
        "Manage platform admin users and their permissions"
    }

    fn render(&self, buf: &mut Buffer, area: Rect, theme: &dyn Theme) {
        let used = render_cards(buf, area, &self.role_cards, theme);
        let (_, rest) = area.split_top(used + 1);
        self.list.render(buf, rest, theme);
        if let Some(form) = &self.add_form {
            form.render(buf, area, theme);
        }
    }

    fn handle_key(&mut self, key: &KeyEvent, notifier: &dyn Notifier) -> Option<Action> {
        if self.add_form.is_some() {
            self.handle_form_key(key, notifier);
            return None;
        }
        if self.list.handle_key(key) {
            return None;
        }
        if key.code == KeyCode::Char('n') {
            self.add_form = Some(AddUserForm::default());
        }
        None
    }

    fn handle_click(&mut self, area: Rect, x: u16, y: u16, _: &dyn Notifier) -> Option<Action> {
        if self.add_form.is_none() {
            let used = self.role_cards.iter().map(StatCard::height).max().unwrap_or(0);
            let (_, rest) = area.split_top(used + 1);
            self.list.handle_click(rest, x, y);
        }
        None
    }

    fn captures_input(&self) -> bool {
        self.add_form.is_some() || self.list.state().search_focused
    }
}
