//! Application state: which screen is visible and what it owns

use std::time::Instant;

use bep_core::{ContentBundle, SignalInfo, SignalKind};
use bep_playback::{Animator, Playback};

use crate::ui;

/// Top-level application state
pub struct BepApp {
    content: ContentBundle,
    screen: Screen,
}

/// The two screens of the playground
pub enum Screen {
    Front,
    Detail(DetailScreen),
}

/// State owned by a visible detail screen. Dropping it tears the animator
/// down with it, so no tick can outlive the screen.
pub struct DetailScreen {
    pub kind: SignalKind,
    pub info: SignalInfo,
    pub animator: Animator,
}

impl DetailScreen {
    fn new(kind: SignalKind, content: &ContentBundle) -> Self {
        let info = match content.info(kind.code()) {
            Some(info) => info.clone(),
            None => {
                tracing::debug!(code = kind.code(), "no content record, showing blanks");
                SignalInfo::default()
            }
        };

        DetailScreen {
            kind,
            info,
            animator: Animator::new(Playback::for_kind(kind)),
        }
    }
}

impl BepApp {
    pub fn new(content: ContentBundle) -> Self {
        BepApp {
            content,
            screen: Screen::Front,
        }
    }

    pub fn screen(&self) -> &Screen {
        &self.screen
    }

    /// Present the detail screen for a signal
    pub fn open_detail(&mut self, kind: SignalKind) {
        tracing::info!(signal = %kind, "opening detail screen");
        self.screen = Screen::Detail(DetailScreen::new(kind, &self.content));
    }

    /// Dismiss the detail screen and return to the front page
    pub fn close_detail(&mut self) {
        self.screen = Screen::Front;
    }
}

impl eframe::App for BepApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        match &mut self.screen {
            Screen::Front => {
                if let Some(kind) = ui::front_screen(ctx, &self.content) {
                    self.open_detail(kind);
                }
            }
            Screen::Detail(detail) => {
                let now = Instant::now();
                if detail.animator.is_running() {
                    detail.animator.poll(now);
                } else {
                    // The screen just became visible: start and fire once
                    detail.animator.start(now);
                }

                let back = ui::detail_screen(ctx, detail);

                // Wake up again when the next tick is due
                ctx.request_repaint_after(detail.animator.interval());

                if back {
                    self.close_detail();
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bep_core::catalog;

    #[test]
    fn test_open_detail_initializes_playback() {
        let mut app = BepApp::new(ContentBundle::default());
        app.open_detail(SignalKind::Emg);

        match app.screen() {
            Screen::Detail(detail) => {
                assert_eq!(detail.kind, SignalKind::Emg);
                assert_eq!(
                    detail.animator.playback().points(),
                    catalog::points(SignalKind::Emg)
                );
                assert!(detail.animator.playback().drawn().is_empty());
                assert!(!detail.animator.is_running());
            }
            Screen::Front => panic!("expected the detail screen"),
        }
    }

    #[test]
    fn test_close_detail_returns_to_front() {
        let mut app = BepApp::new(ContentBundle::default());
        app.open_detail(SignalKind::Ecg);
        app.close_detail();
        assert!(matches!(app.screen(), Screen::Front));
    }

    #[test]
    fn test_missing_content_record_degrades_to_blanks() {
        let mut app = BepApp::new(ContentBundle::default());
        app.open_detail(SignalKind::Eog);

        match app.screen() {
            Screen::Detail(detail) => {
                assert!(detail.info.detail_1.is_empty());
                assert!(detail.info.brief_intro.is_empty());
            }
            Screen::Front => panic!("expected the detail screen"),
        }
    }
}
