//! Browser tests for the mobile menu: the embedded script must apply the same
//! transitions the server renders.
//!
//! Run with: `cargo test --test browser_menu -- --ignored`

use headless_chrome::{Browser, LaunchOptions, Tab};
use std::path::PathBuf;
use std::process::Command;
use std::sync::{Arc, OnceLock};

// ---------------------------------------------------------------------------
// Setup helpers
// ---------------------------------------------------------------------------

fn generated_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests/browser/generated")
}

fn ensure_site_built() {
    static BUILT: OnceLock<()> = OnceLock::new();
    BUILT.get_or_init(|| {
        let bin = env!("CARGO_BIN_EXE_headless-pages");
        let root = PathBuf::from(env!("CARGO_MANIFEST_DIR"));

        let output_dir = generated_dir();
        if output_dir.exists() {
            std::fs::remove_dir_all(&output_dir).expect("failed to clean output dir");
        }

        let status = Command::new(bin)
            .args([
                "generate",
                "--source",
                root.join("fixtures/content").to_str().unwrap(),
                "--output",
                output_dir.to_str().unwrap(),
            ])
            .status()
            .expect("failed to run headless-pages");
        assert!(status.success(), "site generation failed");
    });
}

fn browser() -> &'static Browser {
    static B: OnceLock<Browser> = OnceLock::new();
    B.get_or_init(|| {
        // Narrow enough that the desktop menu is hidden and the menu button shows.
        Browser::new(LaunchOptions {
            window_size: Some((800, 900)),
            ..Default::default()
        })
        .expect("failed to launch Chrome")
    })
}

fn load_index() -> Arc<Tab> {
    ensure_site_built();
    let tab = browser().new_tab().unwrap();
    let file = generated_dir().join("index.html");
    assert!(file.exists(), "missing: {}", file.display());

    tab.navigate_to(&format!("file://{}", file.display()))
        .unwrap()
        .wait_until_navigated()
        .unwrap();
    // Keep followed links from leaving the page; the menu handler still runs.
    eval(
        &tab,
        "document.addEventListener('click', e => e.preventDefault(), true); true",
    );
    tab
}

fn eval(tab: &Tab, js: &str) -> serde_json::Value {
    tab.evaluate(js, false)
        .expect("failed to evaluate JS")
        .value
        .expect("no value returned")
}

fn click(tab: &Tab, selector: &str) {
    eval(
        tab,
        &format!("document.querySelector('{selector}').click(); true"),
    );
}

fn menu_state(tab: &Tab) -> String {
    eval(
        tab,
        "document.querySelector('.navbar').getAttribute('data-menu-state')",
    )
    .as_str()
    .unwrap()
    .to_string()
}

fn panel_display(tab: &Tab) -> String {
    eval(
        tab,
        "getComputedStyle(document.querySelector('.mobile-menu')).display",
    )
    .as_str()
    .unwrap()
    .to_string()
}

fn expanded(tab: &Tab) -> String {
    eval(
        tab,
        "document.querySelector('.menu-open').getAttribute('aria-expanded')",
    )
    .as_str()
    .unwrap()
    .to_string()
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[test]
#[ignore]
fn menu_starts_closed_and_hidden() {
    let tab = load_index();
    assert_eq!(menu_state(&tab), "closed");
    assert_eq!(panel_display(&tab), "none");
    assert_eq!(expanded(&tab), "false");
}

#[test]
#[ignore]
fn menu_button_opens_panel() {
    let tab = load_index();
    click(&tab, ".menu-open");
    assert_eq!(menu_state(&tab), "open");
    assert_eq!(panel_display(&tab), "block");
    assert_eq!(expanded(&tab), "true");
}

#[test]
#[ignore]
fn close_button_closes_panel() {
    let tab = load_index();
    click(&tab, ".menu-open");
    click(&tab, ".menu-close");
    assert_eq!(menu_state(&tab), "closed");
    assert_eq!(panel_display(&tab), "none");
    assert_eq!(expanded(&tab), "false");
}

#[test]
#[ignore]
fn following_a_link_closes_panel() {
    let tab = load_index();
    click(&tab, ".menu-open");
    click(&tab, ".mobile-nav-link");
    assert_eq!(menu_state(&tab), "closed");
}

#[test]
#[ignore]
fn close_while_closed_is_noop() {
    let tab = load_index();
    click(&tab, ".menu-close");
    assert_eq!(menu_state(&tab), "closed");
}

#[test]
#[ignore]
fn overlay_click_keeps_panel_open() {
    let tab = load_index();
    click(&tab, ".menu-open");
    click(&tab, ".menu-overlay");
    assert_eq!(menu_state(&tab), "open");
}

#[test]
#[ignore]
fn escape_closes_panel() {
    let tab = load_index();
    click(&tab, ".menu-open");
    eval(
        &tab,
        "document.dispatchEvent(new KeyboardEvent('keydown', {key: 'Escape'})); true",
    );
    assert_eq!(menu_state(&tab), "closed");
}
