use std::fs::OpenOptions;
use std::io::{self, Write};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use env_logger::{Builder, Env, Target};

use crate::config::LogSettings;

/// Install the global logger. `RUST_LOG` wins over the configured level.
///
/// With `log.file` set, records go to that file. Otherwise they go to stderr
/// through the returned gate, which the runtime holds while the alternate
/// screen is up so nothing draws over the TUI.
pub fn init(settings: &LogSettings) -> StderrGate {
    let gate = StderrGate::default();
    let mut builder = Builder::from_env(Env::default().default_filter_or(settings.level.as_str()));

    let file = settings.file.as_ref().and_then(|path| {
        OpenOptions::new()
            .create(true)
            .append(true)
            .open(path)
            .inspect_err(|err| eprintln!("charsel: cannot open log file {}: {err}", path.display()))
            .ok()
    });
    match file {
        Some(file) => builder.target(Target::Pipe(Box::new(file))),
        None => builder.target(Target::Pipe(Box::new(gate.clone()))),
    };

    let _ = builder.try_init();
    gate
}

/// Stderr writer that buffers while held and writes the backlog on release.
#[derive(Clone, Default)]
pub struct StderrGate {
    state: Arc<Mutex<GateState>>,
}

#[derive(Default)]
struct GateState {
    held: bool,
    pending: Vec<u8>,
}

impl StderrGate {
    pub fn hold(&self) {
        self.lock().held = true;
    }

    /// Stop buffering and write whatever was logged while held to stderr.
    pub fn release(&self) {
        let _ = self.release_into(&mut io::stderr());
    }

    fn release_into(&self, out: &mut impl Write) -> io::Result<()> {
        let pending = {
            let mut state = self.lock();
            state.held = false;
            std::mem::take(&mut state.pending)
        };
        out.write_all(&pending)?;
        out.flush()
    }

    fn lock(&self) -> MutexGuard<'_, GateState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl Write for StderrGate {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        let mut state = self.lock();
        if state.held {
            state.pending.extend_from_slice(buf);
            Ok(buf.len())
        } else {
            io::stderr().write(buf)
        }
    }

    fn flush(&mut self) -> io::Result<()> {
        if self.lock().held {
            Ok(())
        } else {
            io::stderr().flush()
        }
    }
}
