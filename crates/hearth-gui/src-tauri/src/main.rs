mod commands;
mod state;

use anyhow::Context;
use hearth_core::config::HearthConfig;
use hearth_core::logging::env_filter;
use tracing::{
  error,
  info,
  warn
};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::prelude::*;
use tracing_subscriber::fmt;

const LOG_FILE_PREFIX: &str =
  "hearth.log";

/// Stderr plus, when a log directory is
/// configured, a daily rolling file.
/// The returned guard flushes the file
/// writer on drop.
fn init_tracing(
  config: &HearthConfig
) -> Option<WorkerGuard> {
  let filter =
    env_filter(&config.logging.filter)
      .unwrap_or_else(|_| {
        tracing_subscriber::EnvFilter::new(
          "info"
        )
      });

  let (file_layer, guard) =
    match config.logging.directory.as_ref()
    {
      | Some(dir) => {
        let appender =
          tracing_appender::rolling::daily(
            dir,
            LOG_FILE_PREFIX
          );
        let (writer, guard) =
          tracing_appender::non_blocking(
            appender
          );
        (
          Some(
            fmt::layer()
              .with_ansi(false)
              .with_target(true)
              .with_writer(writer)
          ),
          Some(guard)
        )
      }
      | None => (None, None)
    };

  let _ =
    tracing_subscriber::registry()
      .with(filter)
      .with(
        fmt::layer()
          .with_target(true)
          .with_line_number(true)
      )
      .with(file_layer)
      .try_init();

  guard
}

fn main() {
  let loaded = HearthConfig::load(None);
  let config = match &loaded {
    | Ok(config) => config.clone(),
    | Err(_) => HearthConfig::default()
  };
  let _log_guard = init_tracing(&config);

  if let Err(err) = &loaded {
    warn!(error = %err, "invalid config; continuing with defaults");
  }

  info!(
    api_base = %config.salat.api_base,
    method = config.salat.method,
    "starting Hearth GUI backend"
  );

  let state =
    match state::AppState::new(config)
      .context(
        "failed to initialize app \
         state"
      ) {
      | Ok(state) => state,
      | Err(err) => {
        error!(error = %err, "initialization failed");
        std::process::exit(1);
      }
    };

  tauri::Builder::default()
    .setup(|app| {
      install_signal_handlers(
        app.handle().clone()
      );
      Ok(())
    })
    .manage(state)
    .invoke_handler(
      tauri::generate_handler![
        commands::salat::salat_timings,
        commands::common::app_config,
        commands::common::ui_log,
      ]
    )
    .run(tauri::generate_context!())
    .expect(
      "error while running Hearth GUI \
       backend"
    );
}

fn install_signal_handlers(
  app_handle: tauri::AppHandle
) {
  tauri::async_runtime::spawn(
    async move {
      wait_for_shutdown_signal().await;
      warn!(
        "received shutdown signal; \
         exiting application"
      );
      app_handle.exit(0);
    }
  );
}

#[cfg(unix)]
async fn wait_for_shutdown_signal() {
  use tokio::signal::unix::{
    SignalKind,
    signal
  };

  let mut sigint = match signal(
    SignalKind::interrupt()
  ) {
    | Ok(stream) => stream,
    | Err(error) => {
      error!(
        %error,
        "failed to register SIGINT \
         handler; falling back to \
         ctrl_c"
      );
      let _ =
        tokio::signal::ctrl_c().await;
      return;
    }
  };

  let mut sigterm = match signal(
    SignalKind::terminate()
  ) {
    | Ok(stream) => stream,
    | Err(error) => {
      error!(
        %error,
        "failed to register SIGTERM \
         handler; falling back to \
         ctrl_c"
      );
      let _ =
        tokio::signal::ctrl_c().await;
      return;
    }
  };

  tokio::select! {
    _ = sigint.recv() => {}
    _ = sigterm.recv() => {}
  }
}

#[cfg(not(unix))]
async fn wait_for_shutdown_signal() {
  if let Err(error) =
    tokio::signal::ctrl_c().await
  {
    error!(
      %error,
      "failed waiting for ctrl_c \
       signal"
    );
  }
}
