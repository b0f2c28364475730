//! Command-class registry.
//!
//! The catalog is the dispatch table behind frame decoding: a map from
//! command-class id to a class descriptor, and within each class a map from
//! command id to a decoder. It is built once from declarative registration
//! tables at startup and treated as read-only afterwards, so decode calls on
//! any thread can share it without synchronization.

use std::collections::HashMap;

use crate::classes::builtin_classes;
use crate::decoded::DecodedFrame;
use crate::error::DecodeError;

/// A decoder capability: turns the frame bytes at an offset into a typed
/// decoded frame. The offset points at the class id byte; the decoder reads
/// its own header and body and reports the bytes it consumed.
pub type Decoder = fn(&[u8], usize) -> Result<DecodedFrame, DecodeError>;

/// Declarative registration row for one command within a class.
///
/// Registration tables are static arrays of these, one table per command
/// class, assembled into a [`CommandCatalog`] at startup.
#[derive(Debug, Clone, Copy)]
pub struct CommandSpec {
    /// Command identifier within the class.
    pub id: u8,
    /// Human-readable command name.
    pub name: &'static str,
    /// Decoder invoked for frames carrying this command.
    pub decoder: Decoder,
    /// Command id of the report this command solicits, if any. Used by
    /// higher layers for request/response correlation; not interpreted here.
    pub response_id: Option<u8>,
}

/// Descriptor for one command within a registered class.
#[derive(Debug, Clone, Copy)]
pub struct CommandDescriptor {
    /// Command identifier within the class.
    pub id: u8,
    /// Human-readable command name.
    pub name: &'static str,
    /// Decoder invoked for frames carrying this command.
    pub decoder: Decoder,
    /// Command id of the report this command solicits, if any.
    pub response_id: Option<u8>,
}

/// Descriptor for one registered command class.
#[derive(Debug, Clone)]
pub struct CommandClassDescriptor {
    /// Command class identifier.
    pub id: u8,
    /// Human-readable class name, e.g. "Switch Binary".
    pub name: &'static str,
    commands: HashMap<u8, CommandDescriptor>,
}

impl CommandClassDescriptor {
    /// Build a class descriptor from a declarative registration table.
    pub fn from_table(id: u8, name: &'static str, table: &[CommandSpec]) -> Self {
        let commands = table
            .iter()
            .map(|spec| {
                (
                    spec.id,
                    CommandDescriptor {
                        id: spec.id,
                        name: spec.name,
                        decoder: spec.decoder,
                        response_id: spec.response_id,
                    },
                )
            })
            .collect();
        CommandClassDescriptor { id, name, commands }
    }

    /// Look up a command within this class.
    pub fn command(&self, command_id: u8) -> Option<&CommandDescriptor> {
        self.commands.get(&command_id)
    }

    /// Number of commands registered in this class.
    pub fn command_count(&self) -> usize {
        self.commands.len()
    }
}

/// Registry mapping command-class ids to class descriptors.
///
/// Absence is not an error anywhere in this API: a live mesh routinely
/// carries classes this agent has no decoder for, and lookups simply return
/// `None` so the caller falls back to the raw capture path.
#[derive(Debug, Clone, Default)]
pub struct CommandCatalog {
    classes: HashMap<u8, CommandClassDescriptor>,
}

impl CommandCatalog {
    /// Create an empty catalog.
    pub fn new() -> Self {
        CommandCatalog::default()
    }

    /// Create a catalog preloaded with the built-in command classes.
    pub fn with_builtin_classes() -> Self {
        let mut catalog = CommandCatalog::new();
        for class in builtin_classes() {
            catalog.register_class(class);
        }
        catalog
    }

    /// Add or replace the class entry keyed by the descriptor's id.
    ///
    /// Registration takes `&mut self`: build the catalog fully during
    /// startup, then share it immutably. A reader can therefore never
    /// observe a partially-constructed descriptor.
    pub fn register_class(&mut self, descriptor: CommandClassDescriptor) {
        if let Some(previous) = self.classes.insert(descriptor.id, descriptor) {
            log::debug!(
                "replaced command class 0x{:02X} ({})",
                previous.id,
                previous.name
            );
        }
    }

    /// Look up a registered command class.
    pub fn lookup_class(&self, class_id: u8) -> Option<&CommandClassDescriptor> {
        self.classes.get(&class_id)
    }

    /// Look up a command within a registered class.
    ///
    /// Returns `None` for an unknown class or for an unknown command within
    /// a known class.
    pub fn lookup_command(&self, class_id: u8, command_id: u8) -> Option<&CommandDescriptor> {
        self.lookup_class(class_id)
            .and_then(|class| class.command(command_id))
    }

    /// Number of registered command classes.
    pub fn class_count(&self) -> usize {
        self.classes.len()
    }
}
