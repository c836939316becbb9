use console_term::{Buffer, Rect};
use console_widgets::badge::StatusBadge;
use console_widgets::content::Tone;
use console_widgets::keybinds::{Key, KeyCombo, KeybindError, Keybinds, Modifiers};
use console_widgets::stat_card::{StatCard, Trend};
use console_widgets::theme::{DefaultTheme, Theme};
use console_widgets::toast::{Notifier, Toast, ToastLevel, ToastQueue};
use console_widgets::validation::Validator;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

#[test]
fn test_badge_known_statuses() {
    let badge = StatusBadge::new("overdue");
    assert_eq!(badge.label, "Overdue");
    assert_eq!(badge.tone, Tone::Destructive);
    assert_eq!(StatusBadge::new("delivered").tone, Tone::Success);
    assert_eq!(StatusBadge::new("onboarding").label, "Onboarding");
}

#[test]
fn test_badge_unknown_status_is_muted_raw_text() {
    let badge = StatusBadge::new("archived");
    assert_eq!(badge.label, "archived");
    assert_eq!(badge.tone, Tone::Muted);
}

#[test]
fn test_stat_card_change_text() {
    let up = StatCard::new("Total Tenants", "1,284").change(12.0, "from last month");
    assert_eq!(up.change_text().as_deref(), Some("+12%"));
    assert_eq!(up.trend(), Some(Trend::Up));

    let down = StatCard::new("Messages Today", "12,847").change(-3.0, "from yesterday");
    assert_eq!(down.change_text().as_deref(), Some("-3%"));
    assert_eq!(down.trend(), Some(Trend::Down));

    let flat = StatCard::new("Queue", "0").change(0.0, "");
    assert_eq!(flat.change_text().as_deref(), Some("0%"));
    assert_eq!(flat.trend(), Some(Trend::Flat));

    assert_eq!(StatCard::new("Failed", "47").trend(), None);
}

#[test]
fn test_stat_card_renders_value_and_trend() {
    let card = StatCard::new("Active Users", "8,432").change(8.0, "from last month");
    let mut buf = Buffer::new(40, card.height());
    card.render(&mut buf, Rect::new(0, 0, 40, card.height()), &DefaultTheme::dark());
    assert!(buf.row_text(1).contains("Active Users"));
    assert!(buf.row_text(2).contains("8,432"));
    assert!(buf.row_text(3).contains("+8% from last month"));
}

#[test]
fn test_theme_resolves_tones() {
    let theme = DefaultTheme::dark();
    assert!(theme.resolve("destructive").is_some());
    assert!(theme.resolve("danger").is_some());
    assert!(theme.resolve("nope").is_none());
    assert_eq!(theme.color("nope"), theme.color("text"));
    assert_eq!(theme.tone(Tone::Muted), theme.color("muted"));
}

#[test]
fn test_keybind_parsing() {
    let quit: KeyCombo = "ctrl+q".parse().unwrap();
    assert_eq!(quit, KeyCombo::key(Key::Char('q')).ctrl());

    let back: KeyCombo = "shift+tab".parse().unwrap();
    assert_eq!(back.key, Key::Tab);
    assert!(back.modifiers.shift);

    assert_eq!("]".parse::<KeyCombo>().unwrap(), KeyCombo::key(Key::Char(']')));
    assert_eq!("F5".parse::<KeyCombo>().unwrap().key, Key::F(5));
    assert_eq!("+".parse::<KeyCombo>().unwrap().key, Key::Char('+'));
}

#[test]
fn test_keybind_parse_errors() {
    assert_eq!("".parse::<KeyCombo>(), Err(KeybindError::Empty));
    assert_eq!(
        "hyper+x".parse::<KeyCombo>(),
        Err(KeybindError::UnknownModifier("hyper".into()))
    );
    assert_eq!(
        "ctrl+banana".parse::<KeyCombo>(),
        Err(KeybindError::UnknownKey("banana".into()))
    );
}

#[test]
fn test_keybind_from_crossterm_event() {
    let event = KeyEvent::new(KeyCode::Char('q'), KeyModifiers::CONTROL);
    let combo = KeyCombo::from_event(&event).unwrap();
    assert_eq!(combo.to_string(), "ctrl+q");

    let question = KeyEvent::new(KeyCode::Char('?'), KeyModifiers::SHIFT);
    assert_eq!(
        KeyCombo::from_event(&question),
        Some(KeyCombo::new(Key::Char('?'), Modifiers::NONE))
    );

    let mut binds = Keybinds::new();
    binds.bind_str("ctrl+q", "quit").unwrap();
    assert_eq!(binds.lookup(&event), Some("quit"));
}

#[derive(Default)]
struct Captured(std::sync::Mutex<Vec<Toast>>);

impl Notifier for Captured {
    fn notify(&self, toast: Toast) {
        self.0.lock().unwrap().push(toast);
    }
}

#[test]
fn test_notifier_is_injectable() {
    fn approve(notifier: &dyn Notifier) {
        notifier.notify(Toast::success("Template approved"));
    }
    let captured = Captured::default();
    approve(&captured);
    let toasts = captured.0.lock().unwrap();
    assert_eq!(toasts.len(), 1);
    assert_eq!(toasts[0].level, ToastLevel::Success);
}

#[test]
fn test_toast_queue_renders_bottom_right() {
    let queue = ToastQueue::new();
    queue.notify(
        Toast::info("Impersonation Started")
            .description("You are now viewing as Acme Corp (read-only mode)"),
    );
    let mut buf = Buffer::new(60, 10);
    let area = buf.area();
    queue.render(&mut buf, area, &DefaultTheme::dark());
    assert!(buf.row_text(7).contains("Impersonation Started"));
    assert!(buf.row_text(8).contains("You are now viewing as"));
}

#[test]
fn test_validator_reports_first_failure_per_field() {
    let result = Validator::new()
        .field("email", "")
        .required("Email is required")
        .email("Please enter a valid email")
        .field("otp", "12a")
        .pattern(r"^\d{6}$", "Enter the 6-digit code")
        .validate();

    assert!(result.is_invalid());
    assert_eq!(result.errors().len(), 2);
    assert_eq!(result.error_for("email"), Some("Email is required"));
    assert_eq!(result.error_for("otp"), Some("Enter the 6-digit code"));
}

#[test]
fn test_validator_accepts_valid_input() {
    let result = Validator::new()
        .field("email", "admin@bizgrow360.com")
        .required("Email is required")
        .email("Please enter a valid email")
        .field("otp", "123456")
        .pattern(r"^\d{6}$", "Enter the 6-digit code")
        .validate();
    assert!(result.is_valid());
}

#[test]
fn test_invalid_pattern_fails_closed() {
    let result = Validator::new()
        .field("x", "anything")
        .pattern("(", "bad pattern")
        .validate();
    assert_eq!(result.error_for("x"), Some("bad pattern"));
}
