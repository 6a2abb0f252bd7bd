use eframe::egui;

/// The outcome of waiting on a window for a key.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum KeyPress {
    /// A key producing a character was pressed.
    Char(char),
    /// A key without a character (arrows, escape, ...) was pressed.
    Other,
    /// The window was closed before any key was pressed.
    #[default]
    None,
}

impl KeyPress {
    /// Whether this press is the given character.
    pub fn is_char(&self, c: char) -> bool {
        matches!(self, KeyPress::Char(k) if *k == c)
    }
}

/// Extract the first key press from the events of one frame.
///
/// A character typed in the frame wins over a bare key event, as a printable key
/// produces both.
pub fn key_press_from_events(events: &[egui::Event]) -> Option<KeyPress> {
    let typed = events.iter().find_map(|event| match event {
        egui::Event::Text(text) => text.chars().next(),
        _ => None,
    });
    if let Some(c) = typed {
        return Some(KeyPress::Char(c));
    }

    events
        .iter()
        .any(|event| {
            matches!(
                event,
                egui::Event::Key {
                    pressed: true,
                    repeat: false,
                    ..
                }
            )
        })
        .then_some(KeyPress::Other)
}

/// Poll the context of the current viewport for a key press.
pub fn poll_key_press(ctx: &egui::Context) -> Option<KeyPress> {
    let press = ctx.input(|i| key_press_from_events(&i.events));
    if let Some(press) = press {
        log::info!("{:?} key pressed", press);
    }
    press
}
