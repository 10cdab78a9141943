//! # Context
//!
//! Owner of the default [`SharedData`] and the default font, plus the
//! currently active pair. A process-wide instance is created on first access;
//! hosts that prefer explicit state can build their own [`Context`] per thread.
//!
//! The context holds only a weak reference to a user-installed font, so a
//! font the host drops is never kept alive (and never forms a cycle) here.

use std::sync::{Arc, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard, Weak};

use once_cell::sync::Lazy;

use crate::error::{DrawError, contract_violation};
use crate::font::{Font, GridFont};
use crate::shared_data::SharedData;

#[derive(Debug)]
pub struct Context {
    shared_data: Arc<SharedData>,
    active_shared_data: Option<Arc<SharedData>>,
    default_font: Arc<dyn Font>,
    active_font: Option<Weak<dyn Font>>,
}

impl Default for Context {
    fn default() -> Self {
        Self::new()
    }
}

impl Context {
    pub fn new() -> Self {
        Self::with_defaults(SharedData::default(), Arc::new(GridFont::default()))
    }

    pub fn with_defaults(shared_data: SharedData, default_font: Arc<dyn Font>) -> Self {
        Self {
            shared_data: Arc::new(shared_data),
            active_shared_data: None,
            default_font,
            active_font: None,
        }
    }

    /// The active tables: the installed override, or the context's own.
    pub fn shared_data(&self) -> Arc<SharedData> {
        self.active_shared_data
            .as_ref()
            .unwrap_or(&self.shared_data)
            .clone()
    }

    pub fn default_shared_data(&self) -> &Arc<SharedData> {
        &self.shared_data
    }

    /// Installs `shared_data` as active; `None` reverts to the default tables.
    pub fn set_shared_data(&mut self, shared_data: Option<Arc<SharedData>>) {
        self.active_shared_data = shared_data;
    }

    /// The active font. A user font that has since been dropped is a
    /// contract violation; release builds fall back to the default font.
    pub fn font(&self) -> Arc<dyn Font> {
        match &self.active_font {
            None => self.default_font.clone(),
            Some(weak) => match weak.upgrade() {
                Some(font) => font,
                None => {
                    contract_violation(DrawError::ActiveFontDropped);
                    self.default_font.clone()
                }
            },
        }
    }

    pub fn default_font(&self) -> &Arc<dyn Font> {
        &self.default_font
    }

    /// Makes `font` active. The caller keeps ownership.
    pub fn set_font(&mut self, font: &Arc<dyn Font>) {
        self.active_font = Some(Arc::downgrade(font));
    }

    pub fn reset_font(&mut self) {
        self.active_font = None;
    }
}

static CONTEXT: Lazy<RwLock<Context>> = Lazy::new(|| {
    tracing::debug!("global drawing context created");
    RwLock::new(Context::new())
});

/// Read access to the process-wide context.
pub fn context() -> RwLockReadGuard<'static, Context> {
    CONTEXT.read().unwrap_or_else(PoisonError::into_inner)
}

/// Write access to the process-wide context. Serialise mutation externally,
/// conventionally during startup.
pub fn context_mut() -> RwLockWriteGuard<'static, Context> {
    CONTEXT.write().unwrap_or_else(PoisonError::into_inner)
}

/// Restores the process-wide context to its freshly constructed state.
pub fn reset_global() {
    *context_mut() = Context::new();
}
