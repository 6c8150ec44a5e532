// SPDX-License-Identifier: GPL-3.0-or-later
// src/app/app.rs
//
// COSMIC application wiring and main app struct.

use std::sync::{Arc, Mutex};

use cosmic::app::Core;
use cosmic::iced::keyboard::{self, Key, Modifiers};
use cosmic::iced::{Size, Subscription};
use cosmic::{Action, ApplicationExt, Element, Task};

use super::message::AppMessage;
use super::model::{AppModel, Outcome};
use super::navigator::Command;
use super::tool::ToolKind;
use super::view;
use crate::config::AppConfig;
use crate::constant::{BBOX_TITLE, PATCH_TITLE, WINDOW_SIZE};

/// Error that ended the session, handed back to `main` after the window
/// closes.
pub type FatalSlot = Arc<Mutex<Option<anyhow::Error>>>;

/// Flags passed from `main` into the application.
#[derive(Debug, Clone)]
pub struct Flags {
    /// Model with the first image already on display.
    pub model: AppModel,
    pub fatal: FatalSlot,
}

/// Open the annotation window and block until it closes.
pub fn run(flags: Flags) -> cosmic::iced::Result {
    let settings = cosmic::app::Settings::default().size(Size::new(WINDOW_SIZE, WINDOW_SIZE));
    cosmic::app::run::<CropperApp>(settings, flags)
}

/// Key and mouse bindings, printed before the first image is shown.
pub fn print_instructions(kind: ToolKind) {
    println!("Instructions:");
    match kind {
        ToolKind::BoundingBox => {
            println!("Press 'd' (next), 'a' (previous), 'q' (quit), 's' (save bounding boxes)");
            println!("Left click (set corners), right click (cancel drawing), middle click (remove box)\n");
        }
        ToolKind::Patch { .. } => {
            println!("Press 'd' (next), 'a' (previous), 'q' (quit), 's' (save patches)");
            println!("Left click (add square), middle click (remove square)\n");
        }
    }
}

/// Main application type.
pub struct CropperApp {
    core: Core,
    pub model: AppModel,
    pub config: AppConfig,
    fatal: FatalSlot,
}

impl cosmic::Application for CropperApp {
    type Executor = cosmic::SingleThreadExecutor;
    type Flags = Flags;
    type Message = AppMessage;

    const APP_ID: &'static str = "io.github.cropmark.Cropmark";

    fn core(&self) -> &Core {
        &self.core
    }

    fn core_mut(&mut self) -> &mut Core {
        &mut self.core
    }

    fn init(core: Core, flags: Self::Flags) -> (Self, Task<Action<Self::Message>>) {
        let config = AppConfig::load(Self::APP_ID);
        let Flags { model, fatal } = flags;
        let title = match model.kind {
            ToolKind::BoundingBox => BBOX_TITLE,
            ToolKind::Patch { .. } => PATCH_TITLE,
        };

        let mut app = Self {
            core,
            model,
            config,
            fatal,
        };
        app.set_header_title(title.to_string());

        (app, Task::none())
    }

    fn update(&mut self, message: Self::Message) -> Task<Action<Self::Message>> {
        match message {
            AppMessage::Pointer(event) => self.model.pointer(event),
            AppMessage::PointerLeft => self.model.pointer_left(),
            AppMessage::Command(command) => match self.model.apply(command) {
                Ok(Outcome::Continue) => {}
                Ok(Outcome::Quit) => {
                    log::info!("Quit requested");
                    return cosmic::iced::exit();
                }
                Err(e) => {
                    log::error!("Ending session: {e:#}");
                    if let Ok(mut slot) = self.fatal.lock() {
                        *slot = Some(e);
                    }
                    return cosmic::iced::exit();
                }
            },
        }
        Task::none()
    }

    fn view(&self) -> Element<'_, Self::Message> {
        view::canvas::view(&self.model, &self.config)
    }

    fn footer(&self) -> Option<Element<'_, Self::Message>> {
        Some(view::footer::view(&self.model))
    }

    fn subscription(&self) -> Subscription<Self::Message> {
        keyboard::on_key_press(handle_key_press)
    }
}

/// Map raw key presses into navigation commands.
fn handle_key_press(key: Key, modifiers: Modifiers) -> Option<AppMessage> {
    // Ignore key presses when command-style modifiers are pressed.
    if modifiers.command() || modifiers.alt() || modifiers.logo() || modifiers.control() {
        return None;
    }

    match key.as_ref() {
        Key::Character(ch) => Command::from_key(ch).map(AppMessage::Command),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use cosmic::iced::keyboard::key::Named;

    #[test]
    fn command_keys_are_mapped() {
        let msg = handle_key_press(Key::Character("d".into()), Modifiers::empty());
        assert!(matches!(msg, Some(AppMessage::Command(Command::Next))));

        let msg = handle_key_press(Key::Character("q".into()), Modifiers::empty());
        assert!(matches!(msg, Some(AppMessage::Command(Command::Quit))));
    }

    #[test]
    fn other_keys_and_modified_keys_are_ignored() {
        assert!(handle_key_press(Key::Character("x".into()), Modifiers::empty()).is_none());
        assert!(handle_key_press(Key::Named(Named::Enter), Modifiers::empty()).is_none());
        assert!(handle_key_press(Key::Character("s".into()), Modifiers::CTRL).is_none());
    }
}
