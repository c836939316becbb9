use console_lib::MockData;
use console_term::{Buffer, Rect};
use console_tui::App;
use console_tui::app::Route;
use console_tui::config::{ConsoleConfig, PlatformSettings};
use console_tui::settings::SettingsProvider;
use crossterm::event::{Event, KeyCode, KeyEvent, KeyModifiers};

const AREA: Rect = Rect::from_size(140, 48);

fn app_with(settings: SettingsProvider) -> App {
    App::new(
        MockData::load().unwrap(),
        settings,
        ConsoleConfig::default(),
        PlatformSettings::default(),
    )
    .unwrap()
}

async fn send(app: &mut App, code: KeyCode, modifiers: KeyModifiers) {
    app.handle_event(Event::Key(KeyEvent::new(code, modifiers)), AREA)
        .await
        .unwrap();
}

async fn type_text(app: &mut App, text: &str) {
    for c in text.chars() {
        send(app, KeyCode::Char(c), KeyModifiers::NONE).await;
    }
}

async fn log_in(app: &mut App) {
    type_text(app, "admin@bizgrow360.com").await;
    send(app, KeyCode::Enter, KeyModifiers::NONE).await;
    type_text(app, "password").await;
    send(app, KeyCode::Enter, KeyModifiers::NONE).await;
    type_text(app, "123456").await;
    send(app, KeyCode::Enter, KeyModifiers::NONE).await;
}

fn screen_text(app: &App) -> String {
    let mut buf = Buffer::new(AREA.width, AREA.height);
    app.render(&mut buf);
    (0..buf.height())
        .map(|y| buf.row_text(y))
        .collect::<Vec<_>>()
        .join("\n")
}

#[tokio::test]
async fn test_starts_at_login_and_ignores_navigation() {
    let mut app = app_with(SettingsProvider::in_memory());
    assert_eq!(app.route(), Route::Login);
    send(&mut app, KeyCode::Char('2'), KeyModifiers::ALT).await;
    assert_eq!(app.route(), Route::Login);
    assert!(screen_text(&app).contains("BizGrow360"));
}

#[tokio::test]
async fn test_login_then_navigate() {
    let mut app = app_with(SettingsProvider::in_memory());
    log_in(&mut app).await;
    assert_eq!(app.route(), Route::Dashboard);
    assert!(screen_text(&app).contains("Platform Dashboard"));

    send(&mut app, KeyCode::Char('2'), KeyModifiers::ALT).await;
    assert_eq!(app.route(), Route::Tenants);
    send(&mut app, KeyCode::Char('n'), KeyModifiers::CONTROL).await;
    assert_eq!(app.route(), Route::Users);
    send(&mut app, KeyCode::Char('p'), KeyModifiers::CONTROL).await;
    send(&mut app, KeyCode::Char('p'), KeyModifiers::CONTROL).await;
    assert_eq!(app.route(), Route::Dashboard);
    send(&mut app, KeyCode::Char('0'), KeyModifiers::ALT).await;
    assert_eq!(app.route(), Route::SupportTools);
}

#[tokio::test]
async fn test_impersonation_shows_banner_and_clears_on_logout() {
    let mut app = app_with(SettingsProvider::in_memory());
    log_in(&mut app).await;
    send(&mut app, KeyCode::Char('2'), KeyModifiers::ALT).await;
    send(&mut app, KeyCode::Char('i'), KeyModifiers::NONE).await;
    assert_eq!(app.impersonating(), Some("LocalBiz Store"));
    assert!(screen_text(&app).contains("Impersonating: LocalBiz Store"));

    send(&mut app, KeyCode::Char('l'), KeyModifiers::CONTROL).await;
    assert_eq!(app.route(), Route::Login);
    assert_eq!(app.impersonating(), None);
}

#[tokio::test]
async fn test_sidebar_toggle_is_persisted() {
    let settings = SettingsProvider::in_memory();
    let mut app = app_with(settings.clone());
    log_in(&mut app).await;
    assert!(!app.sidebar().collapsed);

    send(&mut app, KeyCode::Char('b'), KeyModifiers::CONTROL).await;
    assert!(app.sidebar().collapsed);
    let config = ConsoleConfig::load(&settings).await.unwrap();
    assert!(config.sidebar_collapsed);
}

#[tokio::test]
async fn test_saved_settings_reach_the_provider() {
    let settings = SettingsProvider::in_memory();
    let mut app = app_with(settings.clone());
    log_in(&mut app).await;
    send(&mut app, KeyCode::Char('9'), KeyModifiers::ALT).await;
    assert_eq!(app.route(), Route::Settings);

    send(&mut app, KeyCode::Tab, KeyModifiers::NONE).await;
    send(&mut app, KeyCode::Char(' '), KeyModifiers::NONE).await;
    send(&mut app, KeyCode::Char('s'), KeyModifiers::NONE).await;

    assert!(!app.platform().mfa_required);
    let stored = PlatformSettings::load(&settings).await.unwrap();
    assert!(!stored.mfa_required);
    assert!(!app.toasts().is_empty());
}

#[tokio::test]
async fn test_quit_works_everywhere() {
    let mut app = app_with(SettingsProvider::in_memory());
    send(&mut app, KeyCode::Char('q'), KeyModifiers::CONTROL).await;
    assert!(app.should_quit());
}

#[tokio::test]
async fn test_notifications_popover_opens_and_swallows_keys() {
    let mut app = app_with(SettingsProvider::in_memory());
    log_in(&mut app).await;
    assert!(!screen_text(&app).contains("Webhook Failures Spike"));

    send(&mut app, KeyCode::Char('o'), KeyModifiers::CONTROL).await;
    assert!(app.notifications_open());
    let text = screen_text(&app);
    assert!(text.contains("Notifications"));
    assert!(text.contains("Webhook Failures Spike"));
    assert!(text.contains("Acme Corp completed onboarding"));
    assert!(text.contains("3 templates awaiting review"));

    // Screen keys are ignored until the popover closes.
    send(&mut app, KeyCode::Char('j'), KeyModifiers::NONE).await;
    send(&mut app, KeyCode::Esc, KeyModifiers::NONE).await;
    assert!(!app.notifications_open());
    assert!(!screen_text(&app).contains("Webhook Failures Spike"));

    send(&mut app, KeyCode::Char('o'), KeyModifiers::CONTROL).await;
    send(&mut app, KeyCode::Char('o'), KeyModifiers::CONTROL).await;
    assert!(!app.notifications_open());
}
