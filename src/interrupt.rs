use crate::error::{Seq2GifError, Result};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

/// Something the pipeline polls between units of work. Returns
/// `Err(UserAbort)` once the run should stop.
pub trait Interrupt {
    fn check(&self) -> Result<()>;
}

/// Shared "stop now" flag, set from the Ctrl-C handler and polled by the
/// pipeline between frames.
#[derive(Debug, Clone, Default)]
pub struct InterruptFlag(Arc<AtomicBool>);

impl InterruptFlag {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn trigger(&self) {
        self.0.store(true, Ordering::SeqCst);
    }

    pub fn is_triggered(&self) -> bool {
        self.0.load(Ordering::SeqCst)
    }

    /// `Err(UserAbort)` once the flag is set.
    pub fn check(&self) -> Result<()> {
        if self.is_triggered() {
            return Err(Seq2GifError::UserAbort);
        }
        Ok(())
    }

    /// Routes Ctrl-C to this flag. Can only be done once per process.
    pub fn install_ctrlc_handler(&self) -> std::result::Result<(), ctrlc::Error> {
        let flag = self.clone();
        ctrlc::set_handler(move || flag.trigger())
    }
}

impl Interrupt for InterruptFlag {
    fn check(&self) -> Result<()> {
        InterruptFlag::check(self)
    }
}
