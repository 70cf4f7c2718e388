//! # Kiosk CLI Library
//!
//! The interactive shell around `kiosk-core`. `main.rs` only parses flags and
//! calls [`run`]; everything else lives here so it can be tested.
//!
//! ## Module Organization
//! ```text
//! kiosk_cli/
//! ├── lib.rs          ◄─── You are here (logging setup & run)
//! ├── config.rs       ◄─── Flags, KIOSK_* variables, catalog file
//! ├── state.rs        ◄─── Arc<Mutex<Store>> handle
//! ├── menu.rs         ◄─── Menu options 0-5
//! ├── render.rs       ◄─── Store results → printed text
//! └── shell.rs        ◄─── The read/dispatch/print loop
//! ```

pub mod config;
pub mod menu;
pub mod render;
pub mod shell;
pub mod state;

use std::io;

use tracing::info;
use tracing_subscriber::EnvFilter;

pub use config::{Args, ConfigError, ShellConfig};
use render::Renderer;
use shell::Shell;
use state::StoreState;

/// Filter used when `RUST_LOG` is unset.
///
/// Store errors are already printed on stdout, so only anomalies reach stderr.
pub(crate) const DEFAULT_LOG_FILTER: &str = "warn";

/// Runs the interactive store on stdin/stdout.
///
/// ## Startup Sequence
/// 1. Initialize tracing (stderr, so the menu on stdout stays clean)
/// 2. Resolve configuration: flags > `KIOSK_*` > defaults
/// 3. Open the store (catalog file or built-in catalog)
/// 4. Loop until exit or end of input
pub fn run(args: Args) -> anyhow::Result<()> {
    init_tracing();

    let config = ShellConfig::from_env()?.with_args(&args);
    info!(?config, "configuration loaded");

    let store = config.build_store()?;
    info!(
        products = store.list_products().len(),
        balance = %store.view_balance(),
        "store opened"
    );

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut shell = Shell::new(
        stdin.lock(),
        stdout.lock(),
        StoreState::new(store),
        Renderer::new(config.currency_symbol.clone()),
    );
    shell.run(&config.store_name)?;

    Ok(())
}

/// Initializes the tracing subscriber for structured logging.
///
/// ## Log Levels
/// - `RUST_LOG=debug` - Show every store operation
/// - `RUST_LOG=kiosk_core=debug` - Store internals only
/// - Default: WARN (anomalies such as a poisoned store lock)
fn init_tracing() {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

#[cfg(test)]
mod tests {
    use super::*;
    use kiosk_core::ProductCode;
    use std::io::{Cursor, Write};
    use std::sync::{Arc, Mutex};
    use std::thread;

    /// In-memory log destination for a scoped subscriber.
    #[derive(Clone, Default)]
    struct LogSink(Arc<Mutex<Vec<u8>>>);

    impl Write for LogSink {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    impl LogSink {
        fn contents(&self) -> String {
            String::from_utf8(self.0.lock().unwrap().clone()).unwrap()
        }
    }

    /// Runs `f` with the default filter, returning whatever it logged.
    fn logged_by_default<F: FnOnce()>(f: F) -> String {
        let sink = LogSink::default();
        let writer = sink.clone();
        let subscriber = tracing_subscriber::fmt()
            .with_env_filter(EnvFilter::new(DEFAULT_LOG_FILTER))
            .with_writer(move || writer.clone())
            .with_ansi(false)
            .finish();

        tracing::subscriber::with_default(subscriber, f);
        sink.contents()
    }

    #[test]
    fn test_user_errors_stay_off_stderr_by_default() {
        // Bad code, unknown code, empty checkout, unaffordable checkout.
        let input = "2\nabc\n2\n42\n4\n2\n4\n20\n4\n0\n";
        let mut output = Vec::new();

        let logs = logged_by_default(|| {
            let mut shell = Shell::new(
                Cursor::new(input),
                &mut output,
                StoreState::default(),
                Renderer::new("€"),
            );
            shell.run("Test Store").unwrap();
        });

        let out = String::from_utf8(output).unwrap();
        assert!(out.contains("Error: please enter valid numbers."));
        assert!(out.contains("Error: Product with code 42 does not exist in the catalog."));
        assert!(out.contains("Error: The cart is empty. Add products before checking out."));
        assert!(out.contains("Error: Insufficient balance."));
        assert_eq!(logs, "");
    }

    #[test]
    fn test_poisoned_lock_is_logged() {
        let state = StoreState::default();
        let poisoner = state.clone();
        let _ = thread::spawn(move || {
            poisoner.with_store_mut(|_| panic!("holder panicked"));
        })
        .join();

        let logs = logged_by_default(|| {
            let added = state.with_store_mut(|s| s.add_to_cart(ProductCode::new(1), 1));
            assert_eq!(added.unwrap().quantity_in_cart, 1);
        });

        assert!(logs.contains("WARN"));
        assert!(logs.contains("store lock poisoned"));
        assert!(!state.with_store(|s| s.is_cart_empty()));
    }
}
