use bevy::{app::PluginGroupBuilder, prelude::*};

use crate::session::DemoSessionPlugin;

pub mod session;

pub struct DemoPlugins;

impl PluginGroup for DemoPlugins {
    fn build(self) -> PluginGroupBuilder {
        PluginGroupBuilder::start::<Self>().add(DemoSessionPlugin)
    }
}
