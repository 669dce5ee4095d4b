use bevy::{app::ScheduleRunnerPlugin, log::LogPlugin, prelude::*};
use tinytea_demo::DemoPlugins;

const N_THREADS: usize = 2;

fn main() -> AppExit {
    App::new()
        .add_plugins((
            MinimalPlugins
                .set(TaskPoolPlugin {
                    task_pool_options: TaskPoolOptions::with_num_threads(N_THREADS),
                })
                .set(ScheduleRunnerPlugin::run_once()),
            LogPlugin::default(),
            DemoPlugins,
        ))
        .run()
}
