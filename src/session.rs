use std::path::PathBuf;

use crate::apis::GeminiClient;
use crate::history::HistoryStore;
use crate::prompt::StyleTag;

/// Everything one interactive session owns: the API client, the current
/// style selection, where images land on disk, and the in-memory gallery.
/// Created once in `main`, handed by reference to the command handlers, and
/// dropped (gallery included) when the loop exits.
pub struct Session {
    pub client: GeminiClient,
    pub style: StyleTag,
    pub out_dir: PathBuf,
    pub history: HistoryStore,
}

impl Session {
    pub fn new(client: GeminiClient, style: StyleTag, out_dir: PathBuf) -> Self {
        Self {
            client,
            style,
            out_dir,
            history: HistoryStore::new(),
        }
    }
}
