//! Command dispatch: parse, initialize, run one command, save.
//!
//! - [`run`]: Main dispatch logic (called by `main.rs`)
//! - `handle_*()`: Per-command handlers that call the API and print the result

use super::render::{
    print_categories, print_config, print_file_info, print_json, print_messages,
    print_notable_messages, print_paths, print_position, print_status,
};
use super::setup::{CategoryCommands, Cli, Commands, RenameArgs};
use anyhow::{Context, Result, bail};
use clap::Parser;
use std::path::{Path, PathBuf};
use triageapp::api::TriageApi;
use triageapp::commands::CmdResult;
use triageapp::commands::create::CreateOptions;
use triageapp::init::{AppDirs, initialize};
use triageapp::store::fs::FileStore;

struct AppContext {
    api: TriageApi<FileStore>,
    dirs: AppDirs,
    task_path: Option<PathBuf>,
}

impl AppContext {
    fn task_path(&self) -> Result<&Path> {
        self.task_path
            .as_deref()
            .context("No task file given; pass --task or set TRIAGE_TASK")
    }

    /// Opens the task, runs `f` against the API and saves if anything changed.
    fn with_task<F>(&mut self, f: F) -> Result<CmdResult>
    where
        F: FnOnce(&mut TriageApi<FileStore>) -> triageapp::error::Result<CmdResult>,
    {
        let path = self.task_path()?.to_path_buf();
        tracing::debug!(task = %path.display(), "opening task");
        let opened = self
            .api
            .open_task(&path)
            .with_context(|| format!("Could not open task {}", path.display()))?;
        print_notable_messages(&opened.messages);

        let result = f(&mut self.api)?;

        if self.api.is_unsaved() {
            self.api.save_task()?;
        }
        Ok(result)
    }
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let ctx = initialize(cli.config.as_deref())?;
    let mut ctx = AppContext {
        api: ctx.api,
        dirs: ctx.dirs,
        task_path: cli.task,
    };

    match cli.command {
        Some(Commands::New {
            root,
            ext,
            local,
            shuffle,
            force,
        }) => handle_new(&mut ctx, &root, ext, !local, shuffle, force),
        Some(Commands::Show { json }) => handle_show(&mut ctx, json),
        Some(Commands::Status { json }) => handle_status(&mut ctx, json),
        Some(Commands::Next) => handle_traversal(&mut ctx, |api| api.next()),
        Some(Commands::Back) => handle_traversal(&mut ctx, |api| api.previous()),
        Some(Commands::Move { category }) => {
            handle_traversal(&mut ctx, |api| api.relocate(&category))
        }
        Some(Commands::Trash) => handle_traversal(&mut ctx, |api| api.discard()),
        Some(Commands::Rename(args)) => handle_rename(&mut ctx, args),
        Some(Commands::Fav) => handle_simple(&mut ctx, |api| api.toggle_favorite()),
        Some(Commands::Shuffle) => handle_traversal(&mut ctx, |api| api.shuffle()),
        Some(Commands::Category { action }) => handle_category(&mut ctx, action),
        Some(Commands::Favorites {
            root,
            dest,
            subdirs,
        }) => handle_favorites(&ctx, &root, &dest, subdirs),
        Some(Commands::Config) => handle_config(&ctx),
        None => handle_status(&mut ctx, false),
    }
}

/// Logs go to stderr so stdout stays parseable (`--json`).
fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default_level));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

fn handle_new(
    ctx: &mut AppContext,
    root: &Path,
    extensions: Vec<String>,
    recursive: bool,
    shuffle: bool,
    force: bool,
) -> Result<()> {
    let path = ctx.task_path()?.to_path_buf();
    if path.exists() && !force {
        bail!(
            "Task file {} already exists; use --force to replace it",
            path.display()
        );
    }

    let options = CreateOptions {
        extensions,
        recursive,
        shuffle,
    };
    let result = ctx.api.create_task(root, &options)?;
    print_messages(&result.messages);

    let saved = ctx.api.save_task_as(&path)?;
    print_messages(&saved.messages);
    print_position(&status_of(&ctx.api)?);
    Ok(())
}

fn handle_show(ctx: &mut AppContext, json: bool) -> Result<()> {
    let result = ctx.with_task(|api| api.show_current())?;
    match result.file_info {
        Some(info) if json => print_json(&info)?,
        Some(info) => print_file_info(&info),
        None => print_messages(&result.messages),
    }
    Ok(())
}

fn handle_status(ctx: &mut AppContext, json: bool) -> Result<()> {
    let result = ctx.with_task(|api| Ok(api.status()))?;
    let status = result
        .status
        .context("Task status unavailable")?;
    if json {
        print_json(&status)?;
    } else {
        print_status(&status);
    }
    Ok(())
}

/// Commands that move through the queue: print their messages, then where we are now.
fn handle_traversal<F>(ctx: &mut AppContext, f: F) -> Result<()>
where
    F: FnOnce(&mut TriageApi<FileStore>) -> triageapp::error::Result<CmdResult>,
{
    let result = ctx.with_task(f)?;
    print_messages(&result.messages);
    print_position(&status_of(&ctx.api)?);
    Ok(())
}

fn handle_simple<F>(ctx: &mut AppContext, f: F) -> Result<()>
where
    F: FnOnce(&mut TriageApi<FileStore>) -> triageapp::error::Result<CmdResult>,
{
    let result = ctx.with_task(f)?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_rename(ctx: &mut AppContext, args: RenameArgs) -> Result<()> {
    match (args.name, args.random) {
        (_, true) => handle_simple(ctx, |api| api.rename_random()),
        (Some(name), false) => handle_simple(ctx, |api| api.rename(&name)),
        (None, false) => bail!("Give a new name or --random"),
    }
}

fn handle_category(ctx: &mut AppContext, action: CategoryCommands) -> Result<()> {
    match action {
        CategoryCommands::Add { path, name } => {
            handle_simple(ctx, |api| api.add_category(name.as_deref(), &path))
        }
        CategoryCommands::Remove { name, path } => {
            handle_simple(ctx, |api| api.remove_category(&name, &path))
        }
        CategoryCommands::Clear => handle_simple(ctx, |api| api.clear_categories()),
        CategoryCommands::FromDir { dir } => {
            let result = ctx.with_task(|api| api.categories_from_dir(&dir))?;
            print_messages(&result.messages);
            print_categories(&result.listed_categories);
            Ok(())
        }
        CategoryCommands::List { filter, json } => {
            let result = ctx.with_task(|api| Ok(api.list_categories(&filter)))?;
            if json {
                print_json(&result.listed_categories)?;
            } else {
                print_categories(&result.listed_categories);
            }
            Ok(())
        }
    }
}

fn handle_favorites(ctx: &AppContext, root: &Path, dest: &Path, subdirs: bool) -> Result<()> {
    let result = ctx.api.collect_favorites(root, dest, subdirs)?;
    print_messages(&result.messages);
    print_paths(&result.paths);
    Ok(())
}

fn handle_config(ctx: &AppContext) -> Result<()> {
    let result = ctx.api.show_config();
    let config = result.config.context("Configuration unavailable")?;
    print_config(&config, ctx.api.trash_dir(), &ctx.dirs.config_dir);
    Ok(())
}

fn status_of(api: &TriageApi<FileStore>) -> Result<triageapp::commands::TaskStatus> {
    api.status().status.context("No task loaded")
}
