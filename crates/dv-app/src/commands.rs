//! Command implementations

use std::path::Path;
use std::sync::Arc;

use anyhow::{bail, Context, Result};

use dv_core::events::events::{LoadFailed, VisualizationDeleted, VisualizationSaved};
use dv_core::layout::adapt_visualization_axes;
use dv_core::model::AxisId;
use dv_core::{validate_layout, HistoryEngine, Settings, Visualization};
use dv_data::FileSource;
use dv_store::selectors::{current_name, series_setup_items};
use dv_store::{Action, AppState, EditingSession, SaveDetails, Store};

use crate::navigation::NavigationLog;

/// Check a visualization document without touching the store
pub fn run_validate(file: &Path) -> Result<()> {
    let text = std::fs::read_to_string(file)
        .with_context(|| format!("failed to read {}", file.display()))?;
    let mut visualization: Visualization = serde_json::from_str(&text)
        .with_context(|| format!("invalid visualization {}", file.display()))?;
    adapt_visualization_axes(&mut visualization);

    match validate_layout(&visualization.layout()) {
        Ok(()) => {
            println!("{}: valid {} layout", file.display(), visualization.vis_type);
            Ok(())
        }
        Err(error) => bail!("{}: {}", file.display(), error),
    }
}

/// Editing session over the JSON store plus the trail of its navigations
pub struct App {
    pub session: EditingSession,
    pub navigation: Arc<NavigationLog>,
}

/// Session over the JSON store with settings already received
pub async fn open_app(store_dir: &Path, settings: Settings) -> Result<App> {
    let api = FileSource::new(store_dir)
        .await
        .with_context(|| format!("failed to open store {}", store_dir.display()))?;

    let store = Arc::new(Store::new());
    store.dispatch_all([
        Action::ReceivedSettings(settings.clone()),
        Action::ClearUi(settings),
    ]);

    let events = store.events();
    events.subscribe_fn::<LoadFailed, _>(|event| {
        tracing::warn!("Load failed: {}", event.error);
    });
    events.subscribe_fn::<VisualizationSaved, _>(|event| {
        tracing::info!("Saved {} (copy: {})", event.uid, event.as_copy);
    });
    events.subscribe_fn::<VisualizationDeleted, _>(|event| {
        tracing::info!("Deleted {} ({})", event.id, event.name);
    });

    let history = Arc::new(HistoryEngine::new());
    let navigation = Arc::new(NavigationLog::new());
    history.add_subscriber(navigation.clone());

    Ok(App {
        session: EditingSession::new(store, Arc::new(api), history),
        navigation,
    })
}

pub async fn run_open(app: &App, id: &str) -> Result<()> {
    app.session.open(id);
    app.session.load(id, &[]).await?;
    print_state(app);
    Ok(())
}

pub async fn run_rename(app: &App, id: &str, details: SaveDetails) -> Result<()> {
    let session = &app.session;
    session.load(id, &[]).await?;
    session.rename(&details);
    session.save(&details, false).await?;
    print_state(app);
    Ok(())
}

pub async fn run_save_as(app: &App, id: &str, details: SaveDetails) -> Result<()> {
    let session = &app.session;
    session.load(id, &[]).await?;
    let uid = session.save(&details, true).await?;
    println!("Saved copy as {uid}");

    session.load(&uid, &[]).await?;
    print_state(app);
    Ok(())
}

pub async fn run_delete(app: &App, id: &str) -> Result<()> {
    let session = &app.session;
    session.load(id, &[]).await?;
    let result = session.delete().await;
    print_snackbar(&session.store().snapshot());
    if let Err(error) = result {
        bail!("delete failed: {error}");
    }
    Ok(())
}

fn print_state(app: &App) {
    let state = app.session.store().snapshot();

    if let Some(current) = state.current.as_deref() {
        println!("Name:     {}", current_name(&state).unwrap_or("(untitled)"));
        if let Some(id) = &current.id {
            println!("Id:       {id}");
        }
        if let Some(description) = current.description.as_deref().filter(|d| !d.is_empty()) {
            println!("About:    {description}");
        }
        println!("Type:     {}", current.vis_type);
        for axis in AxisId::ALL {
            let dims: Vec<_> = current
                .axis(axis)
                .iter()
                .map(|dim| format!("{} ({} items)", dim.dimension, dim.items().len()))
                .collect();
            println!("{:<9} {}", format!("{}:", axis.label()), dims.join(", "));
        }
        for item in series_setup_items(&state) {
            println!(
                "  series {} on axis {}",
                item.name.as_deref().unwrap_or(&item.dimension_item),
                item.axis
            );
        }
    }

    println!("State:    {:?}", state.visualization_state());
    let trail: Vec<_> = app
        .navigation
        .visited()
        .into_iter()
        .map(|location| location.pathname)
        .collect();
    println!("Location: {}", app.session.history().location().pathname);
    if !trail.is_empty() {
        println!("Visited:  {}", trail.join(" -> "));
    }
    print_snackbar(&state);
}

fn print_snackbar(state: &AppState) {
    if let Some(snackbar) = &state.snackbar {
        println!("[{:?}] {}", snackbar.variant, snackbar.message);
    }
}
