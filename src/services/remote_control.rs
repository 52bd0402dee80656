use crate::{CatalogError, Command};

/// The invoker: triggers whichever command is currently bound without
/// knowing its concrete type.
#[derive(Default)]
pub struct RemoteControl {
    command: Option<Box<dyn Command>>,
}

impl RemoteControl {
    pub fn new() -> Self {
        Self::default()
    }

    /// Binds `command`, discarding any previous binding.
    pub fn set_command(&mut self, command: impl Command + 'static) {
        self.set_boxed_command(Box::new(command));
    }

    pub fn set_boxed_command(&mut self, command: Box<dyn Command>) {
        if self.command.replace(command).is_some() {
            tracing::debug!("replaced bound command");
        }
    }

    /// Executes the bound command.
    ///
    /// Returns [`CatalogError::NoCommandBound`] if nothing has been bound yet.
    pub fn press_button(&self) -> Result<(), CatalogError> {
        match &self.command {
            Some(command) => {
                tracing::debug!("executing bound command");
                command.execute()
            }
            None => {
                tracing::warn!("button pressed with no command bound");
                Err(CatalogError::NoCommandBound)
            }
        }
    }

    pub fn has_command(&self) -> bool {
        self.command.is_some()
    }
}
