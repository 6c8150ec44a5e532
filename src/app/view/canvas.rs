// SPDX-License-Identifier: GPL-3.0-or-later
// src/app/view/canvas.rs
//
// Render the center canvas area with the current image and its regions.

use cosmic::iced::{ContentFit, Length};
use cosmic::iced_widget::stack;
use cosmic::widget::image;
use cosmic::Element;

use super::region_overlay;
use crate::app::{AppMessage, AppModel};
use crate::config::AppConfig;

/// Render the center canvas area with the current image.
pub fn view<'a>(model: &'a AppModel, config: &'a AppConfig) -> Element<'a, AppMessage> {
    let picture = image(model.image.handle.clone())
        .width(Length::Fill)
        .height(Length::Fill)
        .content_fit(ContentFit::Contain);

    stack![picture, region_overlay(&model.session, config)].into()
}
