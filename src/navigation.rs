//! Navigation targets and machine binding for the operator terminal.
//!
//! The machine collection is always passed in by the caller, never read from
//! a global store, so fallback resolution stays deterministic and testable.

use std::fmt;

use crate::floor::{EventType, Machine, MachineStatus, Severity};

pub const DEFAULT_SETTINGS_TAB: &str = "general";

/// Named application areas the terminal can jump to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Destination {
    Dashboard,
    Operator { machine_id: String },
    Projects,
    Orders,
    Inventory,
    Clients,
    Settings { tab: String },
    Login,
}

impl Destination {
    /// Resolve the operator-terminal destination for a machine context.
    ///
    /// An explicit machine id wins; otherwise the first machine in the
    /// supplied collection (its natural order, an upstream-data choice, not
    /// a ranking). With nothing to resolve, degrade to the dashboard rather
    /// than fail.
    pub fn operator(explicit: Option<&str>, machines: &[Machine]) -> Self {
        let target = explicit
            .map(str::to_owned)
            .or_else(|| machines.first().map(|m| m.id.clone()));
        match target {
            Some(machine_id) => Destination::Operator { machine_id },
            None => Destination::Dashboard,
        }
    }

    /// Settings destination; the tab defaults to [`DEFAULT_SETTINGS_TAB`].
    pub fn settings(tab: Option<&str>) -> Self {
        Destination::Settings {
            tab: tab.unwrap_or(DEFAULT_SETTINGS_TAB).to_string(),
        }
    }
}

impl fmt::Display for Destination {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Destination::Dashboard => write!(f, "/"),
            Destination::Operator { machine_id } => write!(f, "/operator/{machine_id}"),
            Destination::Projects => write!(f, "/projects"),
            Destination::Orders => write!(f, "/orders"),
            Destination::Inventory => write!(f, "/inventory"),
            Destination::Clients => write!(f, "/clients"),
            Destination::Settings { tab } => write!(f, "/settings/{tab}"),
            Destination::Login => write!(f, "/login"),
        }
    }
}

/// Which machine an operator's terminal should select.
///
/// An operator assigned to exactly one machine is bound to it outright;
/// with zero or several assignments the explicitly requested id (e.g. from
/// the route) is used; otherwise nothing is selected.
pub fn resolve_selection(
    operator_id: &str,
    machines: &[Machine],
    initial: Option<&str>,
) -> Option<String> {
    let mut assigned = machines
        .iter()
        .filter(|m| m.operator_ids.iter().any(|id| id == operator_id));
    if let (Some(only), None) = (assigned.next(), assigned.next()) {
        return Some(only.id.clone());
    }
    initial.map(str::to_owned)
}

/// Side effect of leaving a running station: it is paused and the pause is
/// logged, so production counters never keep ticking on an unmanned machine.
#[derive(Debug, Clone, PartialEq)]
pub struct StationPause {
    pub machine_id: String,
    pub status: MachineStatus,
    pub reason: String,
    pub event_type: EventType,
    pub severity: Severity,
    pub event_description: String,
}

/// Outcome of switching the terminal to another station. The shell applies
/// the pause effect through its own stores; the core only describes it.
#[derive(Debug, Clone, PartialEq)]
pub struct MachineSwitch {
    pub selected: String,
    pub pause: Option<StationPause>,
}

pub fn switch_machine(machines: &[Machine], current: Option<&str>, next: &str) -> MachineSwitch {
    let pause = current
        .and_then(|id| machines.iter().find(|m| m.id == id))
        .filter(|m| m.is_running())
        .map(|m| StationPause {
            machine_id: m.id.clone(),
            status: MachineStatus::Idle,
            reason: "Automatic station change".to_string(),
            event_type: EventType::StageComplete,
            severity: Severity::Info,
            event_description: "Automatic pause on station change".to_string(),
        });

    MachineSwitch {
        selected: next.to_string(),
        pause,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn machines() -> Vec<Machine> {
        let mut press = Machine::new("m-1", "Press A");
        press.operator_ids = vec!["u-1".into(), "u-2".into()];
        let mut welder = Machine::new("m-2", "Welder");
        welder.operator_ids = vec!["u-2".into()];
        vec![press, welder]
    }

    #[test]
    fn explicit_machine_id_wins() {
        let dest = Destination::operator(Some("m-2"), &machines());
        assert_eq!(
            dest,
            Destination::Operator {
                machine_id: "m-2".into()
            }
        );
    }

    #[test]
    fn falls_back_to_first_machine() {
        let dest = Destination::operator(None, &machines());
        assert_eq!(
            dest,
            Destination::Operator {
                machine_id: "m-1".into()
            }
        );
    }

    #[test]
    fn degrades_to_dashboard_with_no_machines() {
        assert_eq!(Destination::operator(None, &[]), Destination::Dashboard);
    }

    #[test]
    fn explicit_id_used_even_with_empty_collection() {
        let dest = Destination::operator(Some("m-9"), &[]);
        assert_eq!(
            dest,
            Destination::Operator {
                machine_id: "m-9".into()
            }
        );
    }

    #[test]
    fn settings_tab_defaults_to_general() {
        assert_eq!(
            Destination::settings(None),
            Destination::Settings {
                tab: "general".into()
            }
        );
        assert_eq!(
            Destination::settings(Some("machines")),
            Destination::Settings {
                tab: "machines".into()
            }
        );
    }

    #[test]
    fn destinations_render_route_paths() {
        assert_eq!(Destination::Dashboard.to_string(), "/");
        assert_eq!(
            Destination::Operator {
                machine_id: "m-1".into()
            }
            .to_string(),
            "/operator/m-1"
        );
        assert_eq!(Destination::settings(None).to_string(), "/settings/general");
        assert_eq!(Destination::Login.to_string(), "/login");
        assert_eq!(Destination::Projects.to_string(), "/projects");
        assert_eq!(Destination::Orders.to_string(), "/orders");
        assert_eq!(Destination::Inventory.to_string(), "/inventory");
        assert_eq!(Destination::Clients.to_string(), "/clients");
    }

    #[test]
    fn single_assignment_binds_that_machine() {
        // u-1 is only assigned to the press; route hint is ignored.
        let selected = resolve_selection("u-1", &machines(), Some("m-2"));
        assert_eq!(selected.as_deref(), Some("m-1"));
    }

    #[test]
    fn multiple_assignments_defer_to_initial_id() {
        let selected = resolve_selection("u-2", &machines(), Some("m-2"));
        assert_eq!(selected.as_deref(), Some("m-2"));
    }

    #[test]
    fn no_assignment_and_no_initial_selects_nothing() {
        assert_eq!(resolve_selection("u-9", &machines(), None), None);
    }

    #[test]
    fn switching_away_from_running_station_pauses_it() {
        let mut floor = machines();
        floor[0].status = MachineStatus::Running;

        let switch = switch_machine(&floor, Some("m-1"), "m-2");
        assert_eq!(switch.selected, "m-2");
        let pause = switch.pause.unwrap();
        assert_eq!(pause.machine_id, "m-1");
        assert_eq!(pause.status, MachineStatus::Idle);
        assert_eq!(pause.event_type, EventType::StageComplete);
        assert_eq!(pause.severity, Severity::Info);
    }

    #[test]
    fn switching_from_idle_station_has_no_side_effect() {
        let switch = switch_machine(&machines(), Some("m-1"), "m-2");
        assert_eq!(switch.selected, "m-2");
        assert!(switch.pause.is_none());
    }

    #[test]
    fn switching_with_no_current_station_just_selects() {
        let switch = switch_machine(&machines(), None, "m-1");
        assert_eq!(switch.selected, "m-1");
        assert!(switch.pause.is_none());
    }
}
