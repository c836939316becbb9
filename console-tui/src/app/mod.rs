//! Application shell: routing, global keybinds, chrome and toasts.
//!
//! [`App`] owns every screen and routes input to the active one. Screens ask
//! for anything beyond their own state through [`Action`]s, which the app
//! applies here.

mod event_loop;
pub mod notifications;
mod route;
mod sidebar;

pub use event_loop::run;
pub use route::Route;
pub use sidebar::{Sidebar, SidebarHit};

use console_lib::MockData;
use console_term::text::TextAlign;
use console_term::{Buffer, Rect, Style};
use console_widgets::content::{Content, Span, Tone};
use console_widgets::draw;
use console_widgets::keybinds::Keybinds;
use console_widgets::theme::{DefaultTheme, Theme};
use console_widgets::toast::{Notifier, ToastQueue};
use crossterm::event::{Event, KeyCode, KeyEvent, KeyEventKind, MouseButton, MouseEvent, MouseEventKind};

use crate::config::{ConsoleConfig, PlatformSettings};
use crate::error::AppError;
use crate::pages::audit_logs::AuditLogsPage;
use crate::pages::dashboard::DashboardPage;
use crate::pages::invoices::InvoicesPage;
use crate::pages::login::LoginPage;
use crate::pages::messages::MessagesPage;
use crate::pages::observability::ObservabilityPage;
use crate::pages::settings::SettingsPage;
use crate::pages::support::SupportPage;
use crate::pages::templates::TemplatesPage;
use crate::pages::tenants::TenantsPage;
use crate::pages::users::UsersPage;
use crate::pages::{Action, Screen};
use crate::settings::SettingsProvider;

const TOP_BAR_HEIGHT: u16 = 1;
/// Title, subtitle and a blank row.
const HEADER_HEIGHT: u16 = 3;

/// Global commands bound in [`default_keybinds`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Quit,
    ToggleSidebar,
    Logout,
    Go(Route),
    NextRoute,
    PrevRoute,
    ToggleNotifications,
}

const NAV_KEYS: [&str; 10] = [
    "alt+1", "alt+2", "alt+3", "alt+4", "alt+5", "alt+6", "alt+7", "alt+8", "alt+9", "alt+0",
];

pub fn default_keybinds() -> Result<Keybinds<Command>, AppError> {
    let mut keybinds = Keybinds::new();
    let mut bind = |combo: &'static str, command: Command| {
        keybinds
            .bind_str(combo, command)
            .map_err(|source| AppError::Keybind { combo, source })
    };
    bind("ctrl+q", Command::Quit)?;
    bind("ctrl+b", Command::ToggleSidebar)?;
    bind("ctrl+l", Command::Logout)?;
    bind("ctrl+n", Command::NextRoute)?;
    bind("ctrl+p", Command::PrevRoute)?;
    bind("ctrl+o", Command::ToggleNotifications)?;
    for (combo, route) in NAV_KEYS.into_iter().zip(Route::NAV) {
        bind(combo, Command::Go(route))?;
    }
    Ok(keybinds)
}

/// One screen per route.
pub struct Pages {
    pub login: LoginPage,
    pub dashboard: DashboardPage,
    pub tenants: TenantsPage,
    pub users: UsersPage,
    pub templates: TemplatesPage,
    pub invoices: InvoicesPage,
    pub messages: MessagesPage,
    pub audit_logs: AuditLogsPage,
    pub observability: ObservabilityPage,
    pub settings: SettingsPage,
    pub support: SupportPage,
}

impl Pages {
    pub fn new(data: MockData, platform: PlatformSettings, page_size: usize) -> Self {
        let tenant_names = data.tenants.iter().map(|t| t.name.clone()).collect();
        Self {
            login: LoginPage::new(),
            dashboard: DashboardPage::new(&data.dashboard),
            observability: ObservabilityPage::new(
                &data.dashboard.metrics,
                &data.dashboard.webhook_failures_by_hour,
                &data.dashboard.queue_length,
                data.webhook_failures,
                data.errors,
                page_size,
            ),
            tenants: TenantsPage::new(data.tenants, page_size),
            users: UsersPage::new(data.users, page_size),
            templates: TemplatesPage::new(data.templates, page_size),
            invoices: InvoicesPage::new(data.invoices, page_size),
            messages: MessagesPage::new(data.messages, page_size),
            audit_logs: AuditLogsPage::new(data.audit_logs, page_size),
            settings: SettingsPage::new(platform),
            support: SupportPage::new(tenant_names),
        }
    }

    pub fn screen(&self, route: Route) -> &dyn Screen {
        match route {
            Route::Login => &self.login,
            Route::Dashboard => &self.dashboard,
            Route::Tenants => &self.tenants,
            Route::Users => &self.users,
            Route::Templates => &self.templates,
            Route::Invoices => &self.invoices,
            Route::Messages => &self.messages,
            Route::AuditLogs => &self.audit_logs,
            Route::Observability => &self.observability,
            Route::Settings => &self.settings,
            Route::SupportTools => &self.support,
        }
    }

    pub fn screen_mut(&mut self, route: Route) -> &mut dyn Screen {
        match route {
            Route::Login => &mut self.login,
            Route::Dashboard => &mut self.dashboard,
            Route::Tenants => &mut self.tenants,
            Route::Users => &mut self.users,
            Route::Templates => &mut self.templates,
            Route::Invoices => &mut self.invoices,
            Route::Messages => &mut self.messages,
            Route::AuditLogs => &mut self.audit_logs,
            Route::Observability => &mut self.observability,
            Route::Settings => &mut self.settings,
            Route::SupportTools => &mut self.support,
        }
    }
}

/// Screen regions for one frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AppLayout {
    pub sidebar: Rect,
    pub top_bar: Rect,
    pub header: Rect,
    pub body: Rect,
}

pub struct App {
    pub pages: Pages,
    route: Route,
    sidebar: Sidebar,
    toasts: ToastQueue,
    keybinds: Keybinds<Command>,
    theme: DefaultTheme,
    settings: SettingsProvider,
    config: ConsoleConfig,
    platform: PlatformSettings,
    impersonating: Option<String>,
    notifications_open: bool,
    quit: bool,
}

impl App {
    pub fn new(
        data: MockData,
        settings: SettingsProvider,
        config: ConsoleConfig,
        platform: PlatformSettings,
    ) -> Result<Self, AppError> {
        Ok(Self {
            pages: Pages::new(data, platform.clone(), config.page_size()),
            route: Route::Login,
            sidebar: Sidebar::new(config.sidebar_collapsed),
            toasts: ToastQueue::new(),
            keybinds: default_keybinds()?,
            theme: DefaultTheme::default(),
            settings,
            config,
            platform,
            impersonating: None,
            notifications_open: false,
            quit: false,
        })
    }

    pub fn route(&self) -> Route {
        self.route
    }

    pub fn is_authenticated(&self) -> bool {
        self.route != Route::Login
    }

    pub fn should_quit(&self) -> bool {
        self.quit
    }

    pub fn tick_rate(&self) -> std::time::Duration {
        self.config.tick_rate()
    }

    pub fn toasts(&self) -> &ToastQueue {
        &self.toasts
    }

    pub fn config(&self) -> &ConsoleConfig {
        &self.config
    }

    pub fn platform(&self) -> &PlatformSettings {
        &self.platform
    }

    pub fn impersonating(&self) -> Option<&str> {
        self.impersonating.as_deref()
    }

    pub fn notifications_open(&self) -> bool {
        self.notifications_open
    }

    pub fn sidebar(&self) -> &Sidebar {
        &self.sidebar
    }

    /// Expire toasts. Returns true if the frame changed.
    pub fn tick(&self) -> bool {
        self.toasts.prune()
    }

    pub fn navigate(&mut self, route: Route) {
        if !self.is_authenticated() || route == Route::Login || route == self.route {
            return;
        }
        log::info!("Navigate {} -> {}", self.route, route);
        self.route = route;
    }

    fn logout(&mut self) {
        log::info!("Logged out");
        self.route = Route::Login;
        self.impersonating = None;
        self.notifications_open = false;
        self.pages.support.set_impersonating(None);
        self.pages.login.reset();
    }

    async fn toggle_sidebar(&mut self) -> Result<(), AppError> {
        self.sidebar.toggle();
        self.config.sidebar_collapsed = self.sidebar.collapsed;
        self.config.save(&self.settings).await?;
        Ok(())
    }

    pub async fn apply(&mut self, action: Action) -> Result<(), AppError> {
        match action {
            Action::Navigate(route) => self.navigate(route),
            Action::LoggedIn => {
                log::info!("Logged in");
                self.route = Route::Dashboard;
            }
            Action::SaveSettings(settings) => {
                settings.save(&self.settings).await?;
                self.platform = settings;
            }
            Action::Impersonate(tenant) => {
                match &tenant {
                    Some(name) => log::info!("Impersonating {}", name),
                    None => log::info!("Impersonation ended"),
                }
                self.pages.support.set_impersonating(tenant.clone());
                self.impersonating = tenant;
            }
        }
        Ok(())
    }

    async fn run_command(&mut self, command: Command) -> Result<(), AppError> {
        match command {
            Command::Quit => {
                log::info!("Quit requested");
                self.quit = true;
            }
            Command::ToggleSidebar => self.toggle_sidebar().await?,
            Command::Logout => self.logout(),
            Command::Go(route) => self.navigate(route),
            Command::NextRoute => self.navigate(self.route.step(true)),
            Command::PrevRoute => self.navigate(self.route.step(false)),
            Command::ToggleNotifications => self.notifications_open = !self.notifications_open,
        }
        Ok(())
    }

    pub async fn handle_key(&mut self, key: &KeyEvent) -> Result<(), AppError> {
        let command = self.keybinds.lookup(key);
        if command == Some(Command::Quit) {
            return self.run_command(Command::Quit).await;
        }
        let screen = self.pages.screen(self.route);
        let global = self.is_authenticated() && !screen.captures_input();
        if let Some(command) = command.filter(|_| global) {
            return self.run_command(command).await;
        }
        // The popover swallows keys until dismissed.
        if self.notifications_open {
            if key.code == KeyCode::Esc {
                self.notifications_open = false;
            }
            return Ok(());
        }
        let notifier: &dyn Notifier = &self.toasts;
        let action = self.pages.screen_mut(self.route).handle_key(key, notifier);
        if let Some(action) = action {
            self.apply(action).await?;
        }
        Ok(())
    }

    pub async fn handle_click(&mut self, area: Rect, x: u16, y: u16) -> Result<(), AppError> {
        let layout = self.layout(area);
        if self.is_authenticated() {
            match self.sidebar.hit(layout.sidebar, x, y) {
                Some(SidebarHit::Route(route)) => {
                    self.navigate(route);
                    return Ok(());
                }
                Some(SidebarHit::Toggle) => return self.toggle_sidebar().await,
                None => {}
            }
        }
        let notifier: &dyn Notifier = &self.toasts;
        let action = self
            .pages
            .screen_mut(self.route)
            .handle_click(layout.body, x, y, notifier);
        if let Some(action) = action {
            self.apply(action).await?;
        }
        Ok(())
    }

    /// Handle one terminal event inside a frame of size `area`. Returns true
    /// if the frame should be redrawn.
    pub async fn handle_event(&mut self, event: Event, area: Rect) -> Result<bool, AppError> {
        match event {
            Event::Key(key) if key.kind == KeyEventKind::Press => {
                log::debug!("Key {:?} {:?} on {}", key.code, key.modifiers, self.route);
                self.handle_key(&key).await?;
                Ok(true)
            }
            Event::Mouse(MouseEvent {
                kind: MouseEventKind::Down(MouseButton::Left),
                column,
                row,
                ..
            }) => {
                self.handle_click(area, column, row).await?;
                Ok(true)
            }
            Event::Resize(..) => Ok(true),
            _ => Ok(false),
        }
    }

    pub fn layout(&self, area: Rect) -> AppLayout {
        if !self.is_authenticated() {
            return AppLayout {
                sidebar: Rect::default(),
                top_bar: Rect::default(),
                header: Rect::default(),
                body: area,
            };
        }
        let (sidebar, main) = area.split_left(self.sidebar.width());
        let main = main.shrink(0, 2, 0, 2);
        let (top_bar, rest) = main.split_top(TOP_BAR_HEIGHT);
        let (_, rest) = rest.split_top(1);
        let (header, body) = rest.split_top(HEADER_HEIGHT);
        AppLayout {
            sidebar,
            top_bar,
            header,
            body,
        }
    }

    fn render_top_bar(&self, buf: &mut Buffer, area: Rect) {
        if let Some(tenant) = &self.impersonating {
            let banner = Content::from(Span::new(format!("Impersonating: {}", tenant)).tone(Tone::Warning).bold())
                .then(Span::new("Read-only mode active").muted());
            draw::content(buf, area, &banner, TextAlign::Left, Style::new(), &self.theme);
        }
        let user = Content::from(Span::new("Admin User").bold()).then(Span::new("PLATFORM_ADMIN").tone(Tone::Accent));
        let used = draw::content(buf, area, &user, TextAlign::Right, Style::new(), &self.theme);
        draw::content(
            buf,
            area.shrink(0, used.saturating_add(3), 0, 0),
            &notifications::bell(),
            TextAlign::Right,
            Style::new(),
            &self.theme,
        );
    }

    fn render_header(&self, buf: &mut Buffer, area: Rect, screen: &dyn Screen) {
        let (title, rest) = area.split_top(1);
        let (subtitle, _) = rest.split_top(1);
        draw::text(
            buf,
            title,
            screen.title(),
            TextAlign::Left,
            Style::new().foreground(self.theme.color("text")).bold(),
        );
        draw::text(
            buf,
            subtitle,
            screen.subtitle(),
            TextAlign::Left,
            Style::new().foreground(self.theme.color("muted")),
        );
    }

    pub fn render(&self, buf: &mut Buffer) {
        let area = buf.area();
        buf.fill(area, &Style::new().background(self.theme.color("background")));
        let layout = self.layout(area);
        let screen = self.pages.screen(self.route);
        if self.is_authenticated() {
            self.sidebar.render(buf, layout.sidebar, self.route, &self.theme);
            self.render_top_bar(buf, layout.top_bar);
            self.render_header(buf, layout.header, screen);
        }
        screen.render(buf, layout.body, &self.theme);
        if self.is_authenticated() && self.notifications_open {
            notifications::render_popover(buf, layout.body, &self.theme);
        }
        self.toasts.render(buf, area.shrink(0, 1, 1, 0), &self.theme);
    }
}
