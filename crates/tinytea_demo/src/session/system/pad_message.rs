use bevy::prelude::*;
use tinytea_padding::pad_with_policy;
use tinytea_report::{BlockHex, BlockWords, PaddingSummary};

use crate::session::{
    settings::Settings,
    state::{SelectedMessage, Session},
};

/// Pads the selected message into whole blocks and opens the session.
pub(crate) fn pad_message(
    mut commands: Commands,
    settings: Res<Settings>,
    selected: Option<Res<SelectedMessage>>,
    mut exit: MessageWriter<AppExit>,
) {
    let Some(selected) = selected else {
        trace!("No message selected, nothing to pad");
        return;
    };

    let buffer =
        match pad_with_policy(&selected.text, settings.max_input_len, settings.truncation) {
            Ok(buffer) => buffer,
            Err(err) => {
                error!("Failed to pad option {}: {}", selected.option, err);
                exit.write(AppExit::error());
                return;
            }
        };

    let summary = PaddingSummary {
        original_len: selected.text.len(),
        padded_len: buffer.len(),
    };

    info!("{}", summary);

    info!("=== ORIGINAL BLOCKS (64 bits each) ===");

    for (index, block) in buffer.blocks().enumerate() {
        info!(
            "Block {} (64 bits): {}\n{}",
            index + 1,
            BlockHex(block),
            BlockWords::from(block)
        );
    }

    commands.insert_resource(Session::new(selected.text.clone(), buffer));
}
