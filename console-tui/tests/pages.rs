use std::sync::Mutex;

use console_lib::MockData;
use console_tui::config::PlatformSettings;
use console_tui::pages::login::{LoginPage, LoginStep, is_valid_otp};
use console_tui::pages::messages::{MessageTab, MessagesPage};
use console_tui::pages::settings::{Field, SettingsPage, SettingsTab, fields};
use console_tui::pages::support::{SupportFocus, SupportPage};
use console_tui::pages::templates::TemplatesPage;
use console_tui::pages::tenants::TenantsPage;
use console_tui::pages::{Action, Screen};
use console_widgets::toast::{Notifier, Toast, ToastLevel};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

#[derive(Default)]
struct Captured(Mutex<Vec<Toast>>);

impl Notifier for Captured {
    fn notify(&self, toast: Toast) {
        self.0.lock().unwrap().push(toast);
    }
}

impl Captured {
    fn titles(&self) -> Vec<String> {
        self.0.lock().unwrap().iter().map(|t| t.title.clone()).collect()
    }

    fn last(&self) -> Option<Toast> {
        self.0.lock().unwrap().last().cloned()
    }
}

fn key(code: KeyCode) -> KeyEvent {
    KeyEvent::new(code, KeyModifiers::NONE)
}

fn press(screen: &mut dyn Screen, notifier: &Captured, code: KeyCode) -> Option<Action> {
    screen.handle_key(&key(code), notifier)
}

fn type_text(screen: &mut dyn Screen, notifier: &Captured, text: &str) {
    for c in text.chars() {
        press(screen, notifier, KeyCode::Char(c));
    }
}

fn data() -> MockData {
    MockData::load().unwrap()
}

fn names(page: &TenantsPage) -> Vec<String> {
    page.list().results().rows().iter().map(|t| t.name.clone()).collect()
}

#[test]
fn test_tenants_default_sort_is_newest_first() {
    let page = TenantsPage::new(data().tenants, 10);
    assert_eq!(page.list().results().total_count(), 5);
    assert_eq!(names(&page)[0], "LocalBiz Store");
    assert_eq!(names(&page)[4], "MegaMart");
}

#[test]
fn test_tenants_search_and_filter_reset_page() {
    let toasts = Captured::default();
    let mut page = TenantsPage::new(data().tenants, 2);
    assert_eq!(page.list().results().total_pages(), 3);

    press(&mut page, &toasts, KeyCode::Char(']'));
    assert_eq!(page.list().state().page, 2);

    // First status option is "active".
    press(&mut page, &toasts, KeyCode::Char('f'));
    assert_eq!(page.list().state().page, 1);
    assert_eq!(page.list().state().filter_value("status"), Some("active"));
    assert_eq!(page.list().results().total_count(), 3);

    press(&mut page, &toasts, KeyCode::Char('x'));
    assert_eq!(page.list().results().total_count(), 5);

    press(&mut page, &toasts, KeyCode::Char('/'));
    type_text(&mut page, &toasts, "ACME");
    press(&mut page, &toasts, KeyCode::Enter);
    assert_eq!(names(&page), vec!["Acme Corporation".to_string()]);
    assert!(toasts.titles().is_empty());
}

#[test]
fn test_tenants_empty_search_has_no_rows() {
    let toasts = Captured::default();
    let mut page = TenantsPage::new(data().tenants, 10);
    press(&mut page, &toasts, KeyCode::Char('/'));
    type_text(&mut page, &toasts, "zzz-nothing");
    assert!(page.list().results().is_empty());
    assert_eq!(page.list().current(), None);
}

#[test]
fn test_tenants_header_sort_toggles() {
    let toasts = Captured::default();
    let mut page = TenantsPage::new(data().tenants, 10);
    // Column 1 is the tenant name.
    press(&mut page, &toasts, KeyCode::Char('1'));
    assert_eq!(names(&page)[0], "Acme Corporation");
    press(&mut page, &toasts, KeyCode::Char('1'));
    assert_eq!(names(&page)[0], "TechStart Inc");
}

#[test]
fn test_tenants_impersonate_current_row() {
    let toasts = Captured::default();
    let mut page = TenantsPage::new(data().tenants, 10);
    let action = press(&mut page, &toasts, KeyCode::Char('i'));
    assert_eq!(action, Some(Action::Impersonate(Some("LocalBiz Store".into()))));
    assert_eq!(toasts.titles(), vec!["Impersonation Started".to_string()]);
}

#[test]
fn test_templates_review_only_pending() {
    let toasts = Captured::default();
    let mut page = TemplatesPage::new(data().templates, 10);

    // order_confirmation is already approved.
    press(&mut page, &toasts, KeyCode::Char('y'));
    assert!(toasts.titles().is_empty());
    press(&mut page, &toasts, KeyCode::Char('t'));
    assert_eq!(toasts.titles(), vec!["Test message sent".to_string()]);

    press(&mut page, &toasts, KeyCode::Char('j'));
    press(&mut page, &toasts, KeyCode::Char('t'));
    assert_eq!(toasts.titles().len(), 1);

    press(&mut page, &toasts, KeyCode::Enter);
    assert_eq!(page.preview.as_ref().map(|t| t.name.as_str()), Some("payment_reminder"));
    press(&mut page, &toasts, KeyCode::Char('r'));
    assert_eq!(toasts.last().map(|t| t.level), Some(ToastLevel::Error));
    assert!(page.preview.is_none());
}

#[test]
fn test_messages_tabs_scope_and_selection() {
    let toasts = Captured::default();
    let mut page = MessagesPage::new(data().messages, 10);
    assert_eq!(page.tab(), MessageTab::All);
    assert_eq!(page.list().results().total_count(), 5);
    assert!(!page.list().is_selectable());

    page.set_tab(MessageTab::Failed);
    assert_eq!(page.list().results().total_count(), 2);
    assert!(page.list().is_selectable());

    press(&mut page, &toasts, KeyCode::Char(' '));
    assert_eq!(page.list().selected().len(), 1);
    press(&mut page, &toasts, KeyCode::Char('R'));
    assert_eq!(toasts.titles(), vec!["Retrying 1 messages...".to_string()]);
    assert!(page.list().selected().is_empty());

    press(&mut page, &toasts, KeyCode::Char('t'));
    assert_eq!(page.tab(), MessageTab::All);
    assert_eq!(page.list().results().total_count(), 5);
}

#[test]
fn test_messages_retry_skips_delivered() {
    let toasts = Captured::default();
    let mut page = MessagesPage::new(data().messages, 10);
    // Unsorted, so the delivered message comes first.
    assert_eq!(page.list().current().map(|m| m.id.as_str()), Some("1"));
    press(&mut page, &toasts, KeyCode::Char('r'));
    assert!(toasts.titles().is_empty());

    page.set_tab(MessageTab::Queued);
    press(&mut page, &toasts, KeyCode::Char('r'));
    assert_eq!(toasts.titles(), vec!["Message queued for retry".to_string()]);
}

#[test]
fn test_login_flow() {
    let toasts = Captured::default();
    let mut page = LoginPage::new();

    press(&mut page, &toasts, KeyCode::Enter);
    press(&mut page, &toasts, KeyCode::Enter);
    assert_eq!(page.step, LoginStep::Credentials);

    page.focus = 0;
    type_text(&mut page, &toasts, "admin@bizgrow360.com");
    press(&mut page, &toasts, KeyCode::Enter);
    type_text(&mut page, &toasts, "secret");
    press(&mut page, &toasts, KeyCode::Enter);
    assert_eq!(page.step, LoginStep::Mfa);
    assert_eq!(toasts.titles(), vec!["OTP Sent".to_string()]);

    type_text(&mut page, &toasts, "12ab3");
    assert_eq!(page.otp.value, "123");
    assert_eq!(press(&mut page, &toasts, KeyCode::Enter), None);
    assert_eq!(toasts.last().map(|t| t.title), Some("Invalid OTP".to_string()));

    type_text(&mut page, &toasts, "4567");
    assert_eq!(page.otp.value, "123456");
    assert_eq!(press(&mut page, &toasts, KeyCode::Enter), Some(Action::LoggedIn));
}

#[test]
fn test_login_rejects_bad_email() {
    let toasts = Captured::default();
    let mut page = LoginPage::new();
    type_text(&mut page, &toasts, "not-an-email");
    page.focus = 1;
    type_text(&mut page, &toasts, "pw");
    press(&mut page, &toasts, KeyCode::Enter);
    assert_eq!(page.step, LoginStep::Credentials);
    assert!(toasts.titles().is_empty());
}

#[test]
fn test_otp_validation() {
    assert!(is_valid_otp("000000"));
    assert!(!is_valid_otp("12345"));
    assert!(!is_valid_otp("12345a"));
    assert!(!is_valid_otp("1234567"));
}

#[test]
fn test_settings_backup_fields_follow_toggle() {
    let mut settings = PlatformSettings::default();
    assert!(fields(SettingsTab::General, &settings).contains(&Field::BackupTime));
    settings.auto_backup = false;
    assert!(!fields(SettingsTab::General, &settings).contains(&Field::BackupTime));
}

#[test]
fn test_settings_save_and_revert() {
    let toasts = Captured::default();
    let mut page = SettingsPage::new(PlatformSettings::default());

    for _ in 0..4 {
        press(&mut page, &toasts, KeyCode::Down);
    }
    assert_eq!(page.current_field(), Some(Field::AutoBackup));
    press(&mut page, &toasts, KeyCode::Char(' '));
    assert!(!page.draft.auto_backup);
    assert!(page.is_dirty());

    press(&mut page, &toasts, KeyCode::Char('u'));
    assert!(!page.is_dirty());

    press(&mut page, &toasts, KeyCode::Tab);
    assert_eq!(page.tab(), SettingsTab::Security);
    press(&mut page, &toasts, KeyCode::Char(' '));
    let action = press(&mut page, &toasts, KeyCode::Char('s'));
    match action {
        Some(Action::SaveSettings(saved)) => assert!(!saved.mfa_required),
        other => panic!("expected save, got {:?}", other),
    }
    assert!(!page.is_dirty());
}

#[test]
fn test_settings_rejects_invalid_email() {
    let toasts = Captured::default();
    let mut page = SettingsPage::new(PlatformSettings::default());
    page.draft.support_email = "support".into();
    assert_eq!(press(&mut page, &toasts, KeyCode::Char('s')), None);
    assert_eq!(toasts.titles(), vec!["Settings not saved".to_string()]);
    assert!(page.is_dirty());
}

#[test]
fn test_support_impersonation_needs_tenant_and_reason() {
    let toasts = Captured::default();
    let mut page = SupportPage::new(vec!["Acme Corporation".into(), "MegaMart".into()]);

    assert_eq!(press(&mut page, &toasts, KeyCode::Enter), None);
    assert_eq!(toasts.titles(), vec!["Missing information".to_string()]);

    press(&mut page, &toasts, KeyCode::Char(' '));
    assert_eq!(page.tenant, Some(0));
    press(&mut page, &toasts, KeyCode::Tab);
    assert_eq!(page.focus, SupportFocus::Reason);
    type_text(&mut page, &toasts, "ticket 42");
    let action = press(&mut page, &toasts, KeyCode::Enter);
    assert_eq!(action, Some(Action::Impersonate(Some("Acme Corporation".into()))));
    assert_eq!(page.impersonating.as_deref(), Some("Acme Corporation"));

    let action = press(&mut page, &toasts, KeyCode::Char('x'));
    assert_eq!(action, Some(Action::Impersonate(None)));
    assert_eq!(press(&mut page, &toasts, KeyCode::Char('x')), None);
}

#[test]
fn test_support_clear_queue_needs_confirmation() {
    let toasts = Captured::default();
    let mut page = SupportPage::new(Vec::new());
    press(&mut page, &toasts, KeyCode::Char('c'));
    assert!(page.confirm_clear);
    assert!(page.captures_input());
    press(&mut page, &toasts, KeyCode::Esc);
    assert!(!page.confirm_clear);
    assert!(toasts.titles().is_empty());

    press(&mut page, &toasts, KeyCode::Char('c'));
    press(&mut page, &toasts, KeyCode::Char('y'));
    assert_eq!(toasts.titles(), vec!["Message queue cleared".to_string()]);
}
