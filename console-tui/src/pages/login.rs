use console_term::text::TextAlign;
use console_term::{Buffer, Rect, Style};
use console_widgets::content::{Content, Span, Tone};
use console_widgets::draw;
use console_widgets::theme::Theme;
use console_widgets::toast::{Notifier, Toast};
use console_widgets::validation::Validator;
use crossterm::event::{KeyCode, KeyEvent};

use super::form::TextField;
use super::{Action, Screen, centered};

pub const OTP_LEN: usize = 6;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoginStep {
    Credentials,
    Mfa,
}

pub fn is_valid_otp(code: &str) -> bool {
    code.len() == OTP_LEN && code.chars().all(|c| c.is_ascii_digit())
}

pub struct LoginPage {
    pub step: LoginStep,
    pub email: TextField,
    pub password: TextField,
    pub otp: TextField,
    /// 0 email, 1 password.
    pub focus: usize,
    error: Option<String>,
}

impl Default for LoginPage {
    fn default() -> Self {
        Self::new()
    }
}

impl LoginPage {
    pub fn new() -> Self {
        Self {
            step: LoginStep::Credentials,
            email: TextField::new("Email", "admin@bizgrow360.com"),
            password: TextField::new("Password", "••••••••").masked(),
            otp: TextField::new("Verification Code", "000000").max_len(OTP_LEN),
            focus: 0,
            error: None,
        }
    }

    /// Back to an empty credentials form, e.g. after logout.
    pub fn reset(&mut self) {
        *self = Self::new();
    }

    fn submit_credentials(&mut self, notifier: &dyn Notifier) {
        let result = Validator::new()
            .field("email", &self.email.value)
            .required("Email is required")
            .email("Enter a valid email address")
            .field("password", &self.password.value)
            .required("Password is required")
            .validate();
        if let Some(error) = result.first_error() {
            log::warn!("Login rejected: {}", error.message);
            self.error = Some(error.message.clone());
            return;
        }
        log::info!("Credentials accepted for {}", self.email.value);
        self.error = None;
        self.step = LoginStep::Mfa;
        notifier.notify(Toast::info("OTP Sent").description("Check your authenticator app for the verification code."));
    }

    fn submit_otp(&mut self, notifier: &dyn Notifier) -> Option<Action> {
        let result = Validator::new()
            .field("otp", &self.otp.value)
            .rule(is_valid_otp, "Please enter a valid 6-digit code.")
            .validate();
        if let Some(error) = result.first_error() {
            log::warn!("OTP rejected");
            notifier.notify(Toast::error("Invalid OTP").description(error.message.clone()));
            return None;
        }
        log::info!("Login successful for {}", self.email.value);
        notifier.notify(Toast::success("Login successful").description("Welcome to BizGrow360 Admin Panel"));
        Some(Action::LoggedIn)
    }

    fn render_button(buf: &mut Buffer, area: Rect, label: &str, theme: &dyn Theme) {
        buf.fill(area, &Style::new().background(theme.color("primary")));
        draw::text(
            buf,
            area,
            label,
            TextAlign::Center,
            Style::new().foreground(theme.color("background")).bold(),
        );
    }
}

impl Screen for LoginPage {
    fn title(&self) -> &str {
        "BizGrow360"
    }

    fn subtitle(&self) -> &str {
        match self.step {
            LoginStep::Credentials => "Sign in to the Super Admin Panel",
            LoginStep::Mfa => "Enter your verification code",
        }
    }

    fn render(&self, buf: &mut Buffer, area: Rect, theme: &dyn Theme) {
        let card = centered(area, 48, 16);
        buf.fill(card, &Style::new().background(theme.color("surface")));
        let inner = draw::border(buf, card, None, Style::new().foreground(theme.color("border"))).shrink(1, 2, 1, 2);

        let (logo, rest) = inner.split_top(1);
        let (subtitle, rest) = rest.split_top(2);
        let title = Content::from(Span::new("◆ BizGrow360").tone(Tone::Primary).bold());
        draw::content(buf, logo, &title, TextAlign::Center, Style::new(), theme);
        draw::text(
            buf,
            subtitle,
            self.subtitle(),
            TextAlign::Center,
            Style::new().foreground(theme.color("muted")),
        );

        let rest = match self.step {
            LoginStep::Credentials => {
                let (email, rest) = rest.split_top(TextField::HEIGHT + 1);
                self.email.render(buf, email, self.focus == 0, theme);
                let (password, rest) = rest.split_top(TextField::HEIGHT + 1);
                self.password.render(buf, password, self.focus == 1, theme);
                let (button, rest) = rest.split_top(1);
                Self::render_button(buf, button, "Sign In", theme);
                rest
            }
            LoginStep::Mfa => {
                let (otp, rest) = rest.split_top(TextField::HEIGHT);
                self.otp.render(buf, otp, true, theme);
                let (help, rest) = rest.split_top(2);
                draw::text(
                    buf,
                    help,
                    "Enter the 6-digit code from your authenticator app",
                    TextAlign::Center,
                    Style::new().foreground(theme.color("muted")),
                );
                let (button, rest) = rest.split_top(1);
                Self::render_button(buf, button, "Verify", theme);
                let (back, rest) = rest.split_top(1);
                draw::text(
                    buf,
                    back,
                    "Esc Back to Login",
                    TextAlign::Center,
                    Style::new().foreground(theme.color("muted")),
                );
                rest
            }
        };

        if let Some(error) = &self.error {
            let (_, row) = rest.split_top(1);
            let line = Content::from(Span::new(error.clone()).tone(Tone::Destructive));
            draw::content(buf, row, &line, TextAlign::Center, Style::new(), theme);
        }
    }

    fn handle_key(&mut self, key: &KeyEvent, notifier: &dyn Notifier) -> Option<Action> {
        match self.step {
            LoginStep::Credentials => match key.code {
                KeyCode::Tab | KeyCode::BackTab | KeyCode::Up | KeyCode::Down => self.focus = 1 - self.focus.min(1),
                KeyCode::Enter if self.focus == 0 => self.focus = 1,
                KeyCode::Enter => self.submit_credentials(notifier),
                _ => {
                    let field = if self.focus == 0 { &mut self.email } else { &mut self.password };
                    field.handle_key(key);
                }
            },
            LoginStep::Mfa => match key.code {
                KeyCode::Enter => return self.submit_otp(notifier),
                KeyCode::Esc => {
                    self.step = LoginStep::Credentials;
                    self.otp.clear();
                }
                KeyCode::Char(c) if !c.is_ascii_digit() => {}
                _ => {
                    self.otp.handle_key(key);
                }
            },
        }
        None
    }

    fn captures_input(&self) -> bool {
        true
    }
}
