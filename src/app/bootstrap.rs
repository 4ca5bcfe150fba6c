use std::path::PathBuf;

use crate::config::{load_app_config, AppConfig};
use crate::ui::ThemeMode;

pub(super) struct AppBootstrap {
    pub(super) image_path: Option<PathBuf>,
    pub(super) theme_mode: ThemeMode,
}

#[derive(Debug, Default, PartialEq, Eq)]
pub(super) struct StartupArgs {
    pub(super) image_path: Option<PathBuf>,
    pub(super) theme_override: Option<ThemeMode>,
}

impl StartupArgs {
    pub(super) fn from_env() -> Self {
        Self::parse(std::env::args().skip(1))
    }

    fn parse<I: IntoIterator<Item = String>>(args: I) -> Self {
        let mut parsed = Self::default();
        for argument in args {
            match argument.as_str() {
                "--dark" => parsed.theme_override = Some(ThemeMode::Dark),
                "--light" => parsed.theme_override = Some(ThemeMode::Light),
                other if !other.starts_with("--") && parsed.image_path.is_none() => {
                    parsed.image_path = Some(PathBuf::from(other));
                }
                other => tracing::warn!(argument = other, "ignoring unrecognized argument"),
            }
        }
        parsed
    }
}

pub(super) fn bootstrap_app_runtime() -> AppBootstrap {
    bootstrap_with(StartupArgs::from_env(), load_app_config())
}

fn bootstrap_with(args: StartupArgs, config: AppConfig) -> AppBootstrap {
    let theme_mode = args.theme_override.or(config.theme).unwrap_or_default();
    let image_path = args.image_path.or(config.image);
    tracing::info!(?theme_mode, ?image_path, "resolved startup configuration");
    AppBootstrap {
        image_path,
        theme_mode,
    }
}
