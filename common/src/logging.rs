use std::str::FromStr;

use anyhow::Result;
use once_cell::sync::OnceCell;
use tracing_subscriber::{prelude::*, EnvFilter};

static INITIALIZED: OnceCell<()> = OnceCell::new();

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, serde::Deserialize, serde::Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Mode {
    #[default]
    Default,
    Json,
    Pretty,
    Compact,
}

/// Installs the global tracing subscriber. Calling this more than once is a
/// no-op, the mode and level of the first call win.
pub fn init(level: &str, mode: Mode) -> Result<()> {
    INITIALIZED.get_or_try_init::<_, anyhow::Error>(|| {
        let env_filter = EnvFilter::from_str(level)?;

        let subscriber = tracing_subscriber::fmt()
            .with_line_number(true)
            .with_file(true)
            .with_env_filter(env_filter);

        match mode {
            Mode::Default => subscriber.finish().try_init()?,
            Mode::Json => subscriber.json().finish().try_init()?,
            Mode::Pretty => subscriber.pretty().finish().try_init()?,
            Mode::Compact => subscriber.compact().finish().try_init()?,
        }

        Ok(())
    })?;

    Ok(())
}
