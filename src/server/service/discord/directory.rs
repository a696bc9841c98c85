//! In-memory record of the ids Discord assigned to our slash commands.
//!
//! Discord renders `</name:id>` as a clickable command mention, which needs the id
//! from registration. The directory is filled at startup from the guild's current
//! command list and replaced whenever commands are registered again. When an id is
//! unknown the plain `/name` form is used instead.

use serenity::all::CommandId;
use std::{collections::HashMap, sync::Arc};
use tokio::sync::RwLock;

use super::RegisteredCommand;

#[derive(Clone, Default)]
pub struct CommandDirectory {
    ids: Arc<RwLock<HashMap<String, CommandId>>>,
}

impl CommandDirectory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces all known ids with the given registration result.
    pub async fn replace(&self, commands: &[RegisteredCommand]) {
        let mut ids = self.ids.write().await;
        ids.clear();
        ids.extend(
            commands
                .iter()
                .map(|command| (command.name.clone(), command.id)),
        );
    }

    pub async fn id_of(&self, name: &str) -> Option<CommandId> {
        self.ids.read().await.get(name).copied()
    }

    /// Text Discord renders as a mention of the named command.
    pub async fn mention(&self, name: &str) -> String {
        match self.id_of(name).await {
            Some(id) => format!("</{}:{}>", name, id),
            None => format!("/{}", name),
        }
    }

    pub async fn len(&self) -> usize {
        self.ids.read().await.len()
    }
}
