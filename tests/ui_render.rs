//! Full-frame render tests using a vt100 virtual terminal.

mod vt100_backend;

use std::time::Duration;

use insta::assert_snapshot;
use ratatui::Terminal;

use gatekeep_engine::{App, FieldKind, Focus, FormSettings, UiOptions};
use gatekeep_tui::draw;

use vt100_backend::VT100Backend;

const WIDTH: u16 = 80;
const HEIGHT: u16 = 24;

/// Smallest screen that fits the whole card: one column of margin each side.
const CARD_WIDTH: u16 = 58;
const CARD_HEIGHT: u16 = 17;

fn render(app: &App) -> (String, (u16, u16)) {
    render_sized(app, WIDTH, HEIGHT)
}

fn render_sized(app: &App, width: u16, height: u16) -> (String, (u16, u16)) {
    let backend = VT100Backend::new(width, height);
    let mut terminal = Terminal::new(backend).expect("failed to create terminal");
    terminal
        .draw(|frame| draw(frame, app))
        .expect("failed to draw");
    let backend = terminal.backend();
    (backend.contents(), backend.cursor())
}

fn screen(app: &App) -> String {
    render(app).0
}

/// The card-sized frame with numbered rows and trailing blanks trimmed.
fn card_frame(app: &App) -> String {
    let (contents, _) = render_sized(app, CARD_WIDTH, CARD_HEIGHT);
    contents
        .lines()
        .enumerate()
        .map(|(row, line)| format!("{row:02}|{}", line.trim_end()))
        .collect::<Vec<_>>()
        .join("\n")
}

fn fill(app: &mut App, focus: Focus, text: &str) {
    app.set_focus(focus);
    app.focused_input_mut()
        .expect("focus is on a field")
        .set_text(text);
}

fn logged_in_app() -> App {
    let mut app = App::new(FormSettings::default(), UiOptions::default());
    fill(&mut app, Focus::Email, "user@x.com");
    fill(&mut app, Focus::Password, "Aa1!aa");
    app.set_focus(Focus::Submit);
    app
}

#[test]
fn idle_form_shows_original_captions() {
    let app = App::new(FormSettings::default(), UiOptions::default());
    assert_snapshot!(card_frame(&app), @r"
    00| ╭────────────────────── Gatekeep ──────────────────────╮
    01| │                                                      │
    02| │  Email address                                       │
    03| │  ╭────────────────────────────────────────────────╮  │
    04| │  │ ❯                                              │  │
    05| │  ╰────────────────────────────────────────────────╯  │
    06| │                                                      │
    07| │  Your password                                       │
    08| │  ╭────────────────────────────────────────────────╮  │
    09| │  │ ❯                                              │  │
    10| │  ╰────────────────────────────────────────────────╯  │
    11| │                                                      │
    12| │                         Log-in                       │
    13| │                                                      │
    14| │       Tab/Enter next  Shift+Tab back  Esc quit       │
    15| │                                                      │
    16| ╰──────────────────────────────────────────────────────╯
    ");
}

#[test]
fn cursor_follows_focused_field_text() {
    let mut app = App::new(FormSettings::default(), UiOptions::default());
    fill(&mut app, Focus::Email, "user@x.com");
    let (screen, (col, row)) = render(&app);

    let (line_index, line) = screen
        .lines()
        .enumerate()
        .find(|(_, line)| line.contains("user@x.com"))
        .expect("email text rendered");
    let byte_start = line.find("user@x.com").expect("email text present");
    let text_col = line[..byte_start].chars().count() + "user@x.com".len();

    assert_eq!(usize::from(row), line_index);
    assert_eq!(usize::from(col), text_col);
}

#[test]
fn password_is_masked() {
    let mut app = App::new(FormSettings::default(), UiOptions::default());
    fill(&mut app, Focus::Password, "Aa1!aa");
    let screen = screen(&app);

    assert!(!screen.contains("Aa1!aa"), "{screen}");
    assert!(screen.contains("••••••"), "{screen}");
}

#[test]
fn ascii_mode_masks_with_asterisks() {
    let options = UiOptions {
        ascii_only: true,
        ..UiOptions::default()
    };
    let mut app = App::new(FormSettings::default(), options);
    fill(&mut app, Focus::Password, "Aa1!aa");
    let screen = screen(&app);

    assert!(screen.contains("******"), "{screen}");
    assert!(screen.contains("> "), "{screen}");
}

#[test]
fn error_captions_render_after_blur() {
    let mut app = App::new(FormSettings::default(), UiOptions::default());
    fill(&mut app, Focus::Email, "a@b");
    fill(&mut app, Focus::Password, "short");
    app.set_focus(Focus::Submit);
    let screen = screen(&app);

    assert!(screen.contains("Invalid email"), "{screen}");
    assert!(screen.contains("Invalid password"), "{screen}");
    assert!(!screen.contains("Email address"), "{screen}");
}

#[test]
fn invalid_form_frame() {
    let mut app = App::new(FormSettings::default(), UiOptions::default());
    fill(&mut app, Focus::Email, "a@b");
    fill(&mut app, Focus::Password, "short");
    app.set_focus(Focus::Submit);
    assert_snapshot!(card_frame(&app), @r"
    00| ╭────────────────────── Gatekeep ──────────────────────╮
    01| │                                                      │
    02| │  Invalid email ✗                                     │
    03| │  ╭────────────────────────────────────────────────╮  │
    04| │  │ ❯ a@b                                          │  │
    05| │  ╰────────────────────────────────────────────────╯  │
    06| │                                                      │
    07| │  Invalid password ✗                                  │
    08| │  ╭────────────────────────────────────────────────╮  │
    09| │  │ ❯ •••••                                        │  │
    10| │  ╰────────────────────────────────────────────────╯  │
    11| │                                                      │
    12| │                      ▸  Log-in                       │
    13| │                                                      │
    14| │           Enter log in  Tab next  Esc quit           │
    15| │                                                      │
    16| ╰──────────────────────────────────────────────────────╯
    ");
}

#[test]
fn valid_captions_render_after_blur() {
    let app = logged_in_app();
    let screen = screen(&app);

    assert!(screen.contains("Email ✓"), "{screen}");
    assert!(screen.contains("Password ✓"), "{screen}");
}

#[tokio::test(start_paused = true)]
async fn authenticating_then_notification() {
    let mut app = logged_in_app();
    app.trigger();

    let screen_busy = screen(&app);
    assert!(screen_busy.contains("Authenticating..."), "{screen_busy}");
    assert!(screen_busy.contains("Email address"), "{screen_busy}");
    assert!(!screen_busy.contains("user@x.com"), "{screen_busy}");

    tokio::time::sleep(Duration::from_millis(5001)).await;
    app.tick();

    let screen_done = screen(&app);
    assert!(screen_done.contains("Log-in"), "{screen_done}");
    assert!(screen_done.contains("Logged in"), "{screen_done}");
    assert!(
        screen_done.contains("Hello user@x.com you are logged in with"),
        "{screen_done}"
    );
    assert!(screen_done.contains("Password: Aa1!aa"), "{screen_done}");

    app.dismiss_notification();
    let screen_dismissed = screen(&app);
    assert!(!screen_dismissed.contains("Logged in"), "{screen_dismissed}");
}

#[tokio::test(start_paused = true)]
async fn notification_frame() {
    let mut app = logged_in_app();
    app.trigger();
    tokio::time::sleep(Duration::from_millis(5001)).await;
    app.tick();

    assert_snapshot!(card_frame(&app), @r"
    00| ╭────────────────────── Gatekeep ──────────────────────╮
    01| │                                                      │
    02| │  Email address                                       │
    03| │  ╭────────────────────────────────────────────────╮  │
    04| │  │ ❯╭ Logged in ──────────────────────────────╮   │  │
    05| │  ╰──│                                         │───╯  │
    06| │     │ Hello user@x.com you are logged in with │      │
    07| │  You│ Password: Aa1!aa                        │      │
    08| │  ╭──│                                         │───╮  │
    09| │  │ ❯│ Enter/Esc dismiss                       │   │  │
    10| │  ╰──│                                         │───╯  │
    11| │     ╰─────────────────────────────────────────╯      │
    12| │                      ▸  Log-in                       │
    13| │                                                      │
    14| │           Enter log in  Tab next  Esc quit           │
    15| │                                                      │
    16| ╰──────────────────────────────────────────────────────╯
    ");
}

#[test]
fn narrow_terminal_does_not_panic() {
    let app = logged_in_app();
    let backend = VT100Backend::new(20, 8);
    let mut terminal = Terminal::new(backend).expect("failed to create terminal");
    terminal
        .draw(|frame| draw(frame, &app))
        .expect("failed to draw");
    assert_eq!(app.held(FieldKind::Email), Some("user@x.com"));
}
