//! Terminal shell: wires the session machine, operator directory, floor
//! state and connectivity together, and drives the built-in demo session.

use std::path::Path;
use std::time::Duration;

use anyhow::{Result, anyhow, bail};
use tokio::sync::mpsc;
use tokio::time::sleep;

use crate::config::TerminalConfig;
use crate::connectivity::{ConnectivityMonitor, ConnectivitySignal};
use crate::debounce::Debouncer;
use crate::error::{AuthError, TerminalError};
use crate::floor::{Job, JobBoard, Machine, apply_slider_change, compute_progress};
use crate::navigation::{Destination, resolve_selection};
use crate::session::{Operator, OperatorDirectory, Role, Session};
use crate::ui::{self, ProgressView};

// PIN of the seeded demo operator.
const DEMO_PIN: &str = "1234";

/// One terminal instance: a single session against a shared floor.
pub struct Terminal {
    pub config: TerminalConfig,
    pub directory: OperatorDirectory,
    pub session: Session,
    pub machines: Vec<Machine>,
    pub board: JobBoard,
    pub connectivity: ConnectivityMonitor,
}

impl Terminal {
    pub fn new(
        config: TerminalConfig,
        directory: OperatorDirectory,
        machines: Vec<Machine>,
        board: JobBoard,
    ) -> Self {
        Self {
            config,
            directory,
            session: Session::new(),
            machines,
            board,
            connectivity: ConnectivityMonitor::default(),
        }
    }

    /// Build a terminal from config: operators come from the configured seed
    /// file when it exists, otherwise from the built-in seed data.
    pub fn from_config(config: TerminalConfig) -> Result<Self, TerminalError> {
        let path = Path::new(&config.operators_file);
        let directory = if path.exists() {
            OperatorDirectory::load(path)?
        } else {
            seed_directory()
        };
        let (machines, board) = seed_floor()?;
        Ok(Self::new(config, directory, machines, board))
    }

    /// Authenticate and bind a machine context in one step.
    ///
    /// After the session transition succeeds, the machine is resolved from
    /// the operator's assignments, then the explicit request, then the first
    /// machine on the floor; with no machine at all the session stays
    /// unbound (the shell lands on the dashboard instead).
    pub fn login(&mut self, pin: &str, machine: Option<&str>) -> Result<Operator, AuthError> {
        let operator = self.session.login(pin, &self.directory)?;

        let selection = resolve_selection(&operator.id, &self.machines, machine);
        if let Destination::Operator { machine_id } =
            Destination::operator(selection.as_deref(), &self.machines)
        {
            self.session.bind_machine(machine_id);
        }
        Ok(operator)
    }

    pub fn logout(&mut self) {
        self.session.logout();
    }

    /// One line per machine, with its active job and progress when present.
    pub fn status_lines(&self) -> Result<Vec<String>, TerminalError> {
        let mut lines = Vec::with_capacity(self.machines.len());
        for machine in &self.machines {
            let active = self.board.active_for(&machine.id);
            let line = match active {
                Some(job) => {
                    let percent = compute_progress(Some(job))?;
                    format!(
                        "{:<10} {:<16} {:<12} {} at {percent}%",
                        machine.id, machine.name, machine.status, job.product_name
                    )
                }
                None => format!(
                    "{:<10} {:<16} {:<12} no active job",
                    machine.id, machine.name, machine.status
                ),
            };
            lines.push(line);
        }
        Ok(lines)
    }

    /// Scripted operator session: login, bind, a debounced slider drag, an
    /// offline stretch, and an explicit completion.
    pub async fn run_demo(&mut self, machine: Option<&str>) -> Result<()> {
        let operator = self.login(DEMO_PIN, machine)?;
        ui::print_login_ok(&operator);

        let machine_id = self
            .session
            .machine_id()
            .map(str::to_owned)
            .ok_or_else(|| anyhow!("no machine available to bind"))?;

        let Some(active) = self.board.active_for(&machine_id).cloned() else {
            bail!("no active job on {machine_id}");
        };

        let view = ProgressView::start(&active);
        view.update(compute_progress(Some(&active))?);

        // The slider feeds the debouncer; only the settled position reaches
        // the update path.
        let (tx, mut rx) = mpsc::unbounded_channel();
        let debouncer = Debouncer::spawn(
            Duration::from_millis(self.config.debounce_ms),
            move |percent| {
                let _ = tx.send(percent);
            },
        );

        for percent in [25, 40, 60] {
            debouncer.send(percent);
            sleep(Duration::from_millis(self.config.debounce_ms / 3)).await;
        }

        let settled = rx.recv().await.ok_or_else(|| anyhow!("debouncer closed"))?;
        apply_slider_change(Some(&active), settled, |update| self.board.apply(update));
        drop(debouncer);

        let refreshed = self.board.get(&active.id).cloned();
        view.update(compute_progress(refreshed.as_ref())?);

        // Connection drops; the update path is unchanged, the store decides
        // about queuing. The shell only surfaces the banner.
        self.connectivity.set_online(false);
        if !self.connectivity.is_online() {
            ui::print_offline_banner();
        }
        apply_slider_change(refreshed.as_ref(), 100, |update| self.board.apply(update));
        self.connectivity.set_online(true);

        let refreshed = self.board.get(&active.id).cloned();
        view.update(compute_progress(refreshed.as_ref())?);

        self.board.complete(&active.id, Some("Demo run".into()));
        let job = self
            .board
            .get(&active.id)
            .cloned()
            .ok_or_else(|| anyhow!("job vanished from the board"))?;
        view.complete(&job);

        for event in self.board.events() {
            println!(
                "  [{}] {}: {}",
                event.machine_id, event.event_type, event.description
            );
        }

        self.logout();
        Ok(())
    }
}

/// Built-in operator seed, used when no seed file is configured.
pub fn seed_directory() -> OperatorDirectory {
    OperatorDirectory::new(vec![
        Operator {
            id: "op-1".into(),
            name: "Marta Ruiz".into(),
            role: Role::Operator,
            pin: "1234".into(),
            avatar: None,
        },
        Operator {
            id: "op-2".into(),
            name: "Luis Ferreyra".into(),
            role: Role::Supervisor,
            pin: "2468".into(),
            avatar: None,
        },
        Operator {
            id: "op-3".into(),
            name: "Ana Sosa".into(),
            role: Role::Admin,
            pin: "9000".into(),
            avatar: None,
        },
    ])
}

/// Built-in floor seed: two machines, one job running on the first.
pub fn seed_floor() -> Result<(Vec<Machine>, JobBoard), TerminalError> {
    let mut press = Machine::new("m-press", "Conformer A");
    press.operator_ids = vec!["op-1".into(), "op-2".into()];
    let mut welder = Machine::new("m-weld", "Welding Bay");
    welder.operator_ids = vec!["op-1".into()];

    let running = Job::new("PRJ-seed-1", "Roof panel", 200, "units")?.assign_to("m-press");
    let running_id = running.id.clone();
    let queued = Job::new("PRJ-seed-1", "Wall frame", 80, "units")?.assign_to("m-weld");

    let mut board = JobBoard::new(vec![running, queued]);
    board.start(&running_id);

    Ok((vec![press, welder], board))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::floor::{EventType, JobStatus};

    fn terminal() -> Terminal {
        let (machines, board) = seed_floor().unwrap();
        Terminal::new(TerminalConfig::default(), seed_directory(), machines, board)
    }

    #[test]
    fn login_binds_fallback_machine() {
        let mut terminal = terminal();
        let operator = terminal.login("1234", None).unwrap();
        assert_eq!(operator.id, "op-1");
        // op-1 works two machines, so the first-machine fallback applies.
        assert_eq!(terminal.session.machine_id(), Some("m-press"));
    }

    #[test]
    fn login_honors_explicit_machine() {
        let mut terminal = terminal();
        terminal.login("1234", Some("m-weld")).unwrap();
        assert_eq!(terminal.session.machine_id(), Some("m-weld"));
    }

    #[test]
    fn single_assignment_overrides_explicit_request() {
        let mut terminal = terminal();
        // op-2 is only assigned to the press.
        terminal.login("2468", Some("m-weld")).unwrap();
        assert_eq!(terminal.session.machine_id(), Some("m-press"));
    }

    #[test]
    fn failed_login_reports_kind_and_stays_unauthenticated() {
        let mut terminal = terminal();
        assert_eq!(
            terminal.login("12", None).unwrap_err(),
            AuthError::InvalidPinFormat
        );
        assert_eq!(
            terminal.login("0001", None).unwrap_err(),
            AuthError::NoMatchingOperator
        );
        assert!(!terminal.session.is_authenticated());
    }

    #[test]
    fn status_lists_every_machine() {
        let terminal = terminal();
        let lines = terminal.status_lines().unwrap();
        assert_eq!(lines.len(), 2);
        assert!(lines[0].contains("Roof panel at 0%"));
        assert!(lines[1].contains("no active job"));
    }

    #[tokio::test]
    async fn demo_completes_the_running_job() {
        let mut terminal = terminal();
        // Short debounce keeps the scripted drag quick under test.
        terminal.config.debounce_ms = 30;

        terminal.run_demo(None).await.unwrap();

        let job = terminal.board.active_for("m-press");
        assert!(job.is_none(), "job should no longer be active");
        let completed = terminal
            .board
            .jobs()
            .iter()
            .find(|j| j.product_name == "Roof panel")
            .unwrap();
        assert_eq!(completed.status, JobStatus::Completed);
        assert_eq!(completed.completed_quantity, 200);
        assert_eq!(completed.operator_notes.as_deref(), Some("Demo run"));

        let events = terminal.board.events();
        assert!(events.iter().any(|e| e.event_type == EventType::JobComplete));
        assert!(!terminal.session.is_authenticated());
    }

    #[tokio::test]
    async fn demo_fails_without_any_machine() {
        let mut terminal = terminal();
        terminal.machines.clear();
        terminal.config.debounce_ms = 30;

        let result = terminal.run_demo(None).await;
        assert!(result.is_err());
        // Login itself succeeded; only the binding was impossible.
        assert!(terminal.session.is_authenticated());
    }
}
