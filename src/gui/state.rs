use crate::api::DataClient;
use crate::controller::{Controller, ControllerState, SubmitOutcome};
use crate::dom::Page;
use crate::renderer::Renderer;
use log::{debug, error, info};
use std::sync::mpsc::{channel, Receiver, Sender};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    PageReady,
    Submit { email: String, activity: String },
    Unregister { activity: String, email: String },
}

/// What the window needs after each handled command.
#[derive(Debug, Clone)]
pub struct Snapshot {
    pub page: Page,
    pub state: ControllerState,
    pub form_cleared: bool,
}

pub struct AppState {
    pub page: Page,
    pub controller_state: ControllerState,
    pub email: String,
    pub selected_activity: String,
    pub worker_alive: bool,
    commands: Sender<Command>,
    snapshots: Receiver<Snapshot>,
}

impl AppState {
    /// Starts the controller worker and asks it for the first load.
    pub fn spawn<C>(client: C, repaint: impl Fn() + Send + 'static) -> Self
    where
        C: DataClient + 'static,
    {
        let (commands, command_rx) = channel();
        let (snapshot_tx, snapshots) = channel();

        std::thread::spawn(move || {
            let controller = Controller::new(client, Page::new());
            run_controller(controller, command_rx, snapshot_tx, repaint);
        });

        let mut state = AppState {
            page: Page::new(),
            controller_state: ControllerState::Loading,
            email: String::new(),
            selected_activity: String::new(),
            worker_alive: true,
            commands,
            snapshots,
        };
        state.send(Command::PageReady);
        state
    }

    pub fn submit(&mut self) {
        self.controller_state = ControllerState::Submitting;
        self.send(Command::Submit {
            email: self.email.clone(),
            activity: self.selected_activity.clone(),
        });
    }

    pub fn unregister(&mut self, activity: String, email: String) {
        self.controller_state = ControllerState::Submitting;
        self.send(Command::Unregister { activity, email });
    }

    pub fn is_busy(&self) -> bool {
        matches!(
            self.controller_state,
            ControllerState::Loading | ControllerState::Submitting
        )
    }

    pub fn apply_snapshots(&mut self) {
        while let Ok(snapshot) = self.snapshots.try_recv() {
            self.apply(snapshot);
        }
    }

    fn apply(&mut self, snapshot: Snapshot) {
        if snapshot.form_cleared {
            self.email.clear();
            self.selected_activity.clear();
        }
        let still_listed = snapshot
            .page
            .activity_select()
            .children()
            .iter()
            .any(|option| option.value() == self.selected_activity);
        if !still_listed {
            self.selected_activity.clear();
        }
        self.page = snapshot.page;
        self.controller_state = snapshot.state;
    }

    fn send(&mut self, command: Command) {
        if let Err(e) = self.commands.send(command) {
            error!("Controller worker is gone, dropping {:?}", e.0);
            self.worker_alive = false;
        }
    }
}

/// Handles commands one at a time until the window drops its sender.
pub fn run_controller<C, R>(
    mut controller: Controller<C, R>,
    commands: Receiver<Command>,
    snapshots: Sender<Snapshot>,
    repaint: impl Fn(),
) where
    C: DataClient,
    R: Renderer,
{
    let rt = match tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
    {
        Ok(rt) => rt,
        Err(e) => {
            error!("Failed to build controller runtime: {}", e);
            return;
        }
    };
    info!("Controller worker started");

    while let Ok(command) = commands.recv() {
        debug!("Handling {:?}", command);
        let form_cleared = rt.block_on(handle_command(&mut controller, command));
        let snapshot = Snapshot {
            page: controller.page().clone(),
            state: controller.state(),
            form_cleared,
        };
        if snapshots.send(snapshot).is_err() {
            break;
        }
        repaint();
    }

    info!("Controller worker stopped");
}

async fn handle_command<C, R>(controller: &mut Controller<C, R>, command: Command) -> bool
where
    C: DataClient,
    R: Renderer,
{
    match command {
        Command::PageReady => {
            controller.on_page_ready().await;
            false
        }
        Command::Submit { email, activity } => {
            controller.page_mut().set_form_values(&email, &activity);
            controller.on_submit().await == SubmitOutcome::Accepted
        }
        Command::Unregister { activity, email } => {
            controller.on_unregister(&activity, &email).await;
            false
        }
    }
}
