// Host-side tests for the web frontend constants.
// The main crate is wasm-only, so we include the pure-Rust module directly.

#![allow(dead_code)]
mod constants {
    include!("../src/constants.rs");
}

use constants::*;

#[test]
fn dom_ids_are_distinct_and_non_empty() {
    let ids = [
        CANVAS_ID,
        MODAL_ID,
        MODAL_TITLE_ID,
        MODAL_DESC_ID,
        MODAL_CLOSE_ID,
    ];
    for (i, a) in ids.iter().enumerate() {
        assert!(!a.is_empty());
        assert!(!a.contains(' '), "id {a:?} must not contain spaces");
        for b in &ids[i + 1..] {
            assert_ne!(a, b);
        }
    }
}

#[test]
fn index_html_carries_every_dom_hook() {
    let html = include_str!("../index.html");
    for id in [
        CANVAS_ID,
        MODAL_ID,
        MODAL_TITLE_ID,
        MODAL_DESC_ID,
        MODAL_CLOSE_ID,
    ] {
        assert!(
            html.contains(&format!("id=\"{id}\"")),
            "index.html is missing #{id}"
        );
    }
    assert!(html.contains(HIDDEN_CLASS));
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn colours_are_normalized() {
    for c in CLEAR_RGB.iter().chain(PARTICLE_RGBA.iter()) {
        assert!((0.0..=1.0).contains(c));
    }
    // Particles are drawn translucent
    assert!(PARTICLE_RGBA[3] < 1.0);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn cursor_styles_differ() {
    assert_ne!(CURSOR_DEFAULT, CURSOR_HOVER);
    assert!(FPS_LOG_INTERVAL_FRAMES > 0);
}
