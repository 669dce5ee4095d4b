mod decrypt_blocks;
mod encrypt_blocks;
mod initialize_settings;
mod pad_message;
mod select_message;
mod verify_round_trip;

pub(crate) use decrypt_blocks::decrypt_blocks;
pub(crate) use encrypt_blocks::encrypt_blocks;
pub(crate) use initialize_settings::initialize_settings;
pub(crate) use pad_message::pad_message;
pub(crate) use select_message::select_message;
pub(crate) use verify_round_trip::verify_round_trip;
