//! # API Facade
//!
//! The API layer is a **thin facade** over the command layer and the single entry point for
//! every triage operation, whatever the UI.
//!
//! ## Role and Responsibilities
//!
//! The API facade:
//! - **Owns the session**: the loaded [`Task`] and whether it has unsaved changes
//! - **Dispatches** to the command functions, handing them the task and the configured
//!   collaborators (extension groups, trash directory, favorite mark, media probe)
//! - **Returns structured types** (`Result<CmdResult>`)
//!
//! ## Sessions
//!
//! At most one task is loaded at a time. Every task operation issued with no task loaded is
//! a no-op returning an info message ("No task loaded"), never an error. Commands that change
//! the task flag the session unsaved; [`TriageApi::save_task`] clears the flag.
//!
//! ## Generic Over TaskStore
//!
//! `TriageApi<S: TaskStore>` is generic over the record store:
//! - Production: `TriageApi<FileStore>`
//! - Testing: `TriageApi<InMemoryStore>`
//!
//! ## Testing Strategy
//!
//! API tests verify dispatch and session bookkeeping. Command logic is tested in the command
//! modules.

use crate::commands::{self, CmdMessage, CmdResult, create::CreateOptions};
use crate::config::{ExtensionGroups, TriageConfig};
use crate::error::Result;
use crate::metadata::{ImageHeaderProbe, MediaProbe};
use crate::store::TaskStore;
use crate::task::Task;
use std::path::{Path, PathBuf};

struct Session {
    task: Task,
    unsaved: bool,
}

/// The main API facade for triage operations.
pub struct TriageApi<S: TaskStore> {
    store: S,
    config: TriageConfig,
    groups: ExtensionGroups,
    trash_dir: PathBuf,
    probe: Box<dyn MediaProbe>,
    session: Option<Session>,
}

impl<S: TaskStore> TriageApi<S> {
    pub fn new(store: S, config: TriageConfig, trash_dir: PathBuf) -> Self {
        let groups = config.extension_groups();
        Self {
            store,
            config,
            groups,
            trash_dir,
            probe: Box::new(ImageHeaderProbe),
            session: None,
        }
    }

    pub fn with_probe(mut self, probe: impl MediaProbe + 'static) -> Self {
        self.probe = Box::new(probe);
        self
    }

    pub fn config(&self) -> &TriageConfig {
        &self.config
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn trash_dir(&self) -> &Path {
        &self.trash_dir
    }

    pub fn task(&self) -> Option<&Task> {
        self.session.as_ref().map(|s| &s.task)
    }

    pub fn has_task(&self) -> bool {
        self.session.is_some()
    }

    pub fn is_unsaved(&self) -> bool {
        self.session.as_ref().is_some_and(|s| s.unsaved)
    }

    // --- Session ---

    pub fn create_task(&mut self, root: &Path, options: &CreateOptions) -> Result<CmdResult> {
        let (task, result) = commands::create::run(root, options, &self.groups)?;
        Ok(self.replace_session(task, result))
    }

    pub fn open_task(&mut self, path: &Path) -> Result<CmdResult> {
        let (task, result) = commands::open::run(&self.store, path, &self.groups)?;
        Ok(self.replace_session(task, result))
    }

    pub fn save_task(&mut self) -> Result<CmdResult> {
        let Some(session) = self.session.as_mut() else {
            return Ok(commands::no_task());
        };
        let result = commands::save::run(&mut self.store, &session.task)?;
        session.unsaved = false;
        Ok(result)
    }

    pub fn save_task_as(&mut self, path: &Path) -> Result<CmdResult> {
        let Some(session) = self.session.as_mut() else {
            return Ok(commands::no_task());
        };
        let result = commands::save::run_as(&mut self.store, &mut session.task, path)?;
        session.unsaved = false;
        Ok(result)
    }

    /// Unloads the task. Unsaved changes are dropped with a warning.
    pub fn close_task(&mut self) -> CmdResult {
        match self.session.take() {
            None => commands::no_task(),
            Some(session) if session.unsaved => CmdResult::default()
                .with_message(CmdMessage::warning("Task closed with unsaved changes")),
            Some(_) => CmdResult::default().with_message(CmdMessage::info("Task closed")),
        }
    }

    fn replace_session(&mut self, task: Task, mut result: CmdResult) -> CmdResult {
        if self.is_unsaved() {
            result.add_message(CmdMessage::warning(
                "Previous task had unsaved changes; they were discarded",
            ));
        }
        self.session = Some(Session {
            task,
            unsaved: result.modified,
        });
        result
    }

    /// Runs `f` on the loaded task, recording whether it changed anything.
    fn apply<F>(&mut self, f: F) -> Result<CmdResult>
    where
        F: FnOnce(&mut Task) -> Result<CmdResult>,
    {
        let Some(session) = self.session.as_mut() else {
            return Ok(commands::no_task());
        };
        let result = f(&mut session.task)?;
        if result.modified {
            session.unsaved = true;
        }
        Ok(result)
    }

    // --- Traversal ---

    pub fn next(&mut self) -> Result<CmdResult> {
        self.apply(|task| Ok(commands::navigate::next(task)))
    }

    pub fn previous(&mut self) -> Result<CmdResult> {
        self.apply(|task| Ok(commands::navigate::previous(task)))
    }

    pub fn discard(&mut self) -> Result<CmdResult> {
        let trash_dir = self.trash_dir.clone();
        self.apply(|task| commands::discard::run(task, &trash_dir))
    }

    pub fn relocate(&mut self, category: &str) -> Result<CmdResult> {
        self.apply(|task| commands::relocate::run(task, category))
    }

    pub fn rename(&mut self, new_stem: &str) -> Result<CmdResult> {
        self.apply(|task| commands::rename::run(task, new_stem))
    }

    pub fn rename_random(&mut self) -> Result<CmdResult> {
        let len = self.config.random_name_length;
        self.apply(|task| commands::rename::random(task, len))
    }

    pub fn toggle_favorite(&mut self) -> Result<CmdResult> {
        let mark = self.config.favorite_mark.clone();
        self.apply(|task| commands::rename::toggle_favorite(task, &mark))
    }

    pub fn shuffle(&mut self) -> Result<CmdResult> {
        self.apply(|task| Ok(commands::shuffle::run(task)))
    }

    // --- Categories ---

    pub fn add_category(&mut self, name: Option<&str>, path: &Path) -> Result<CmdResult> {
        self.apply(|task| commands::categories::add(task, name, path))
    }

    pub fn categories_from_dir(&mut self, dir: &Path) -> Result<CmdResult> {
        self.apply(|task| commands::categories::from_dir(task, dir))
    }

    pub fn remove_category(&mut self, name: &str, path: &Path) -> Result<CmdResult> {
        self.apply(|task| commands::categories::remove(task, name, path))
    }

    pub fn clear_categories(&mut self) -> Result<CmdResult> {
        self.apply(|task| Ok(commands::categories::clear(task)))
    }

    pub fn list_categories(&self, filter: &str) -> CmdResult {
        match self.task() {
            Some(task) => commands::categories::list(task, filter),
            None => commands::no_task(),
        }
    }

    // --- Inspection ---

    pub fn status(&self) -> CmdResult {
        match self.task() {
            Some(task) => commands::status::run(task),
            None => commands::no_task(),
        }
    }

    pub fn show_current(&mut self) -> Result<CmdResult> {
        let Some(session) = self.session.as_mut() else {
            return Ok(commands::no_task());
        };
        commands::status::show(&mut session.task, self.probe.as_ref())
    }

    pub fn show_config(&self) -> CmdResult {
        CmdResult {
            config: Some(self.config.clone()),
            ..Default::default()
        }
    }

    // --- Task-independent ---

    pub fn collect_favorites(
        &self,
        root: &Path,
        dest: &Path,
        create_subdirs: bool,
    ) -> Result<CmdResult> {
        commands::favorites::run(root, dest, &self.config.favorite_mark, create_subdirs)
    }
}
