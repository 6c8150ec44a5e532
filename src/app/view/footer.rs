// SPDX-License-Identifier: GPL-3.0-or-later
// src/app/view/footer.rs
//
// Status line: position in the image list, region count, last result.

use cosmic::iced::Length;
use cosmic::widget::{container, row, text};
use cosmic::Element;

use crate::app::{AppMessage, AppModel};

pub fn view(model: &AppModel) -> Element<'_, AppMessage> {
    let name = model
        .navigator
        .current()
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();

    let position = format!(
        "{} ({}/{})",
        name,
        model.navigator.index() + 1,
        model.navigator.len()
    );
    let regions = format!("{} region(s)", model.region_count());
    let status = model
        .status
        .as_deref()
        .unwrap_or("d: next  a: previous  s: save  q: quit")
        .to_string();

    container(
        row()
            .push(text(position))
            .push(text(regions))
            .push(text(status))
            .spacing(16),
    )
    .width(Length::Fill)
    .padding(8)
    .into()
}
