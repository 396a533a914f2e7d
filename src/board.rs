//! Board State Machine
//!
//! In-memory model of the kanban board: the ordered task list, the single
//! active drag pointer, and the drag lifecycle transitions. Transitions are
//! pure and synchronous; any remote-observable effect is returned as a
//! [`StatusChange`] for the caller to forward to the optimistic layer.

use crate::models::{Lead, Stage};

/// Fixed pipeline column
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Column {
    pub id: Stage,
    pub title: &'static str,
}

/// Static column configuration for this deployment
pub fn columns() -> [Column; 4] {
    [
        Column { id: Stage::New, title: Stage::New.title() },
        Column { id: Stage::Contacted, title: Stage::Contacted.title() },
        Column { id: Stage::Proposal, title: Stage::Proposal.title() },
        Column { id: Stage::Closed, title: Stage::Closed.title() },
    ]
}

/// Board-local projection of a lead
#[derive(Debug, Clone, PartialEq)]
pub struct Task {
    pub id: String,
    pub column_id: Stage,
    pub content: String,
    pub company_name: String,
    pub value: f64,
    pub tags: Vec<String>,
}

/// Map the fetched lead list into board tasks, preserving order
pub fn tasks_from_leads(leads: &[Lead]) -> Vec<Task> {
    leads
        .iter()
        .map(|lead| Task {
            id: lead.id.clone(),
            column_id: lead.status,
            content: if lead.contact_name.is_empty() {
                "No Contact".to_string()
            } else {
                lead.contact_name.clone()
            },
            company_name: lead.company_name.clone(),
            value: lead.value,
            tags: lead.tags.clone(),
        })
        .collect()
}

/// At most one task is dragging at any time
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum DragState {
    #[default]
    Idle,
    Dragging(String),
}

/// Entity under the pointer during a drag gesture
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DragTarget {
    Card(String),
    Column(Stage),
}

/// Remote-observable outcome of a transition: the dragged lead crossed a
/// column boundary and its status must be persisted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusChange {
    pub lead_id: String,
    pub status: Stage,
}

/// Array-move: remove from `from`, insert at `to`, everything else keeps
/// its relative order.
pub fn array_move<T>(items: &mut Vec<T>, from: usize, to: usize) {
    if from == to || from >= items.len() || to >= items.len() {
        return;
    }
    let item = items.remove(from);
    items.insert(to, item);
}

#[derive(Debug, Clone, Default)]
pub struct BoardState {
    pub tasks: Vec<Task>,
    drag: DragState,
}

impl BoardState {
    pub fn new() -> BoardState {
        BoardState::default()
    }

    /// Replace the task list from the authoritative lead list.
    /// Local intra-column ordering from interrupted gestures is discarded;
    /// only column membership is persisted remotely.
    pub fn sync_from_leads(&mut self, leads: &[Lead]) {
        self.tasks = tasks_from_leads(leads);
    }

    pub fn active_task_id(&self) -> Option<&str> {
        match &self.drag {
            DragState::Idle => None,
            DragState::Dragging(id) => Some(id),
        }
    }

    /// Tasks of one column in current display order
    pub fn column_tasks(&self, column_id: Stage) -> Vec<Task> {
        self.tasks
            .iter()
            .filter(|t| t.column_id == column_id)
            .cloned()
            .collect()
    }

    fn index_of(&self, task_id: &str) -> Option<usize> {
        self.tasks.iter().position(|t| t.id == task_id)
    }

    /// Pick up a task. No-op (returns false) if another drag is already
    /// active or the id does not resolve to a task.
    pub fn drag_start(&mut self, task_id: &str) -> bool {
        if self.drag != DragState::Idle {
            return false;
        }
        if self.index_of(task_id).is_none() {
            return false;
        }
        self.drag = DragState::Dragging(task_id.to_string());
        true
    }

    /// Hover transition: live-preview reorder and column reassignment.
    /// Crossing a column boundary returns the status write to issue.
    pub fn drag_over(&mut self, target: &DragTarget) -> Option<StatusChange> {
        let active_id = match &self.drag {
            DragState::Dragging(id) => id.clone(),
            DragState::Idle => return None,
        };

        match target {
            DragTarget::Card(over_id) => {
                if *over_id == active_id {
                    return None;
                }
                let active_idx = self.index_of(&active_id)?;
                let over_idx = self.index_of(over_id)?;
                let over_column = self.tasks[over_idx].column_id;

                if self.tasks[active_idx].column_id != over_column {
                    self.tasks[active_idx].column_id = over_column;
                    array_move(&mut self.tasks, active_idx, over_idx);
                    Some(StatusChange { lead_id: active_id, status: over_column })
                } else {
                    // Same-column reorder is purely local
                    array_move(&mut self.tasks, active_idx, over_idx);
                    None
                }
            }
            DragTarget::Column(column_id) => {
                let active_idx = self.index_of(&active_id)?;
                if self.tasks[active_idx].column_id != *column_id {
                    self.tasks[active_idx].column_id = *column_id;
                    Some(StatusChange { lead_id: active_id, status: *column_id })
                } else {
                    None
                }
            }
        }
    }

    /// Drop transition. Clears the drag pointer unconditionally, then
    /// performs the final reorder and persists the resting column if the
    /// hover transitions missed it (e.g. a drop with no hover events).
    pub fn drag_end(&mut self, over: Option<&DragTarget>) -> Option<StatusChange> {
        let active_id = match std::mem::take(&mut self.drag) {
            DragState::Dragging(id) => id,
            DragState::Idle => return None,
        };

        match over? {
            DragTarget::Card(over_id) => {
                if *over_id == active_id {
                    return None;
                }
                let active_idx = self.index_of(&active_id)?;
                let over_idx = self.index_of(over_id)?;
                let over_column = self.tasks[over_idx].column_id;
                array_move(&mut self.tasks, active_idx, over_idx);

                let dropped_idx = self.index_of(&active_id)?;
                if self.tasks[dropped_idx].column_id != over_column {
                    self.tasks[dropped_idx].column_id = over_column;
                    Some(StatusChange { lead_id: active_id, status: over_column })
                } else {
                    None
                }
            }
            DragTarget::Column(column_id) => {
                let active_idx = self.index_of(&active_id)?;
                if self.tasks[active_idx].column_id != *column_id {
                    self.tasks[active_idx].column_id = *column_id;
                    Some(StatusChange { lead_id: active_id, status: *column_id })
                } else {
                    None
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_task(id: &str, column_id: Stage) -> Task {
        Task {
            id: id.to_string(),
            column_id,
            content: format!("Contact {}", id),
            company_name: format!("Company {}", id),
            value: 100.0,
            tags: vec![],
        }
    }

    fn board(tasks: Vec<Task>) -> BoardState {
        BoardState { tasks, drag: DragState::Idle }
    }

    fn ids(board: &BoardState) -> Vec<&str> {
        board.tasks.iter().map(|t| t.id.as_str()).collect()
    }

    #[test]
    fn test_array_move_semantics() {
        let mut v = vec!["a", "b", "c", "d", "e"];
        array_move(&mut v, 1, 3);
        assert_eq!(v, vec!["a", "c", "d", "b", "e"]);

        let mut v = vec!["a", "b", "c"];
        array_move(&mut v, 2, 0);
        assert_eq!(v, vec!["c", "a", "b"]);

        // Out-of-range indices leave the list untouched
        let mut v = vec!["a", "b"];
        array_move(&mut v, 0, 5);
        assert_eq!(v, vec!["a", "b"]);
    }

    #[test]
    fn test_single_drag_pointer() {
        let mut b = board(vec![make_task("t1", Stage::New), make_task("t2", Stage::New)]);
        assert!(b.drag_start("t1"));
        // Second pick-up while dragging is a no-op
        assert!(!b.drag_start("t2"));
        assert_eq!(b.active_task_id(), Some("t1"));
    }

    #[test]
    fn test_drag_start_unknown_task() {
        let mut b = board(vec![make_task("t1", Stage::New)]);
        assert!(!b.drag_start("gone"));
        assert_eq!(b.active_task_id(), None);
    }

    #[test]
    fn test_cross_column_hover_moves_and_persists() {
        let mut b = board(vec![
            make_task("t1", Stage::New),
            make_task("t2", Stage::Contacted),
            make_task("t3", Stage::Contacted),
        ]);
        b.drag_start("t1");

        let change = b.drag_over(&DragTarget::Card("t2".to_string()));
        assert_eq!(
            change,
            Some(StatusChange { lead_id: "t1".to_string(), status: Stage::Contacted })
        );
        let t1 = b.tasks.iter().find(|t| t.id == "t1").unwrap();
        assert_eq!(t1.column_id, Stage::Contacted);
        // Repositioned adjacent to the hovered card
        assert_eq!(ids(&b), vec!["t2", "t1", "t3"]);
    }

    #[test]
    fn test_same_column_hover_reorders_without_remote_call() {
        let mut b = board(vec![
            make_task("t1", Stage::New),
            make_task("t2", Stage::New),
            make_task("t3", Stage::New),
        ]);
        b.drag_start("t1");

        assert_eq!(b.drag_over(&DragTarget::Card("t3".to_string())), None);
        assert_eq!(ids(&b), vec!["t2", "t3", "t1"]);
        assert!(b.tasks.iter().all(|t| t.column_id == Stage::New));
    }

    #[test]
    fn test_hover_over_empty_column() {
        let mut b = board(vec![make_task("t1", Stage::New)]);
        b.drag_start("t1");

        let change = b.drag_over(&DragTarget::Column(Stage::Closed));
        assert_eq!(
            change,
            Some(StatusChange { lead_id: "t1".to_string(), status: Stage::Closed })
        );
        assert_eq!(b.tasks[0].column_id, Stage::Closed);

        // Hovering the column it already sits in changes nothing
        assert_eq!(b.drag_over(&DragTarget::Column(Stage::Closed)), None);
    }

    #[test]
    fn test_hover_self_is_noop() {
        let mut b = board(vec![make_task("t1", Stage::New), make_task("t2", Stage::New)]);
        b.drag_start("t1");
        assert_eq!(b.drag_over(&DragTarget::Card("t1".to_string())), None);
        assert_eq!(ids(&b), vec!["t1", "t2"]);
    }

    #[test]
    fn test_hover_without_active_drag_is_noop() {
        let mut b = board(vec![make_task("t1", Stage::New), make_task("t2", Stage::Contacted)]);
        assert_eq!(b.drag_over(&DragTarget::Card("t2".to_string())), None);
        assert_eq!(b.tasks[0].column_id, Stage::New);
    }

    #[test]
    fn test_drag_end_clears_pointer_on_cancel() {
        let mut b = board(vec![make_task("t1", Stage::New)]);
        b.drag_start("t1");
        assert_eq!(b.drag_end(None), None);
        assert_eq!(b.active_task_id(), None);
        // List untouched by the cancel
        assert_eq!(ids(&b), vec!["t1"]);
    }

    #[test]
    fn test_drag_end_final_column_check() {
        // Drop with no intervening hover events: columns still differ at
        // drop time, so drag_end must issue the status write itself.
        let mut b = board(vec![
            make_task("t1", Stage::New),
            make_task("t2", Stage::Proposal),
        ]);
        b.drag_start("t1");

        let change = b.drag_end(Some(&DragTarget::Card("t2".to_string())));
        assert_eq!(
            change,
            Some(StatusChange { lead_id: "t1".to_string(), status: Stage::Proposal })
        );
        assert_eq!(b.active_task_id(), None);
        assert_eq!(ids(&b), vec!["t2", "t1"]);
        assert_eq!(b.tasks[1].column_id, Stage::Proposal);
    }

    #[test]
    fn test_drag_end_after_hover_issues_nothing() {
        let mut b = board(vec![
            make_task("t1", Stage::New),
            make_task("t2", Stage::Contacted),
        ]);
        b.drag_start("t1");

        // Hover already crossed the boundary and issued the write
        assert!(b.drag_over(&DragTarget::Card("t2".to_string())).is_some());
        // The final drop sees equal columns and only reorders
        assert_eq!(b.drag_end(Some(&DragTarget::Card("t2".to_string()))), None);
        assert_eq!(b.active_task_id(), None);
    }

    #[test]
    fn test_drop_directly_on_empty_column() {
        let mut b = board(vec![make_task("t1", Stage::New)]);
        b.drag_start("t1");

        let change = b.drag_end(Some(&DragTarget::Column(Stage::Closed)));
        assert_eq!(
            change,
            Some(StatusChange { lead_id: "t1".to_string(), status: Stage::Closed })
        );
        assert_eq!(b.column_tasks(Stage::Closed).len(), 1);
    }

    #[test]
    fn test_drop_on_self_is_noop() {
        let mut b = board(vec![make_task("t1", Stage::New)]);
        b.drag_start("t1");
        assert_eq!(b.drag_end(Some(&DragTarget::Card("t1".to_string()))), None);
        assert_eq!(b.active_task_id(), None);
    }

    #[test]
    fn test_unknown_over_id_is_safe() {
        // A target that no longer resolves locally (e.g. deleted while the
        // gesture was in flight) must not lose the dragged card.
        let mut b = board(vec![make_task("t1", Stage::New)]);
        b.drag_start("t1");
        assert_eq!(b.drag_over(&DragTarget::Card("gone".to_string())), None);
        assert_eq!(b.drag_end(Some(&DragTarget::Card("gone".to_string()))), None);
        assert_eq!(ids(&b), vec!["t1"]);
    }

    #[test]
    fn test_column_membership_always_valid() {
        let mut b = board(vec![
            make_task("t1", Stage::New),
            make_task("t2", Stage::Contacted),
        ]);
        b.drag_start("t1");
        b.drag_over(&DragTarget::Card("t2".to_string()));
        b.drag_end(Some(&DragTarget::Column(Stage::Closed)));

        let known: Vec<Stage> = columns().iter().map(|c| c.id).collect();
        assert!(b.tasks.iter().all(|t| known.contains(&t.column_id)));
    }

    #[test]
    fn test_tasks_from_leads_mapping() {
        use crate::models::{Lead, LeadInput, Timestamp};
        let input = LeadInput {
            company_name: "Acme".to_string(),
            contact_name: String::new(),
            email: "x@y.z".to_string(),
            value: 900.0,
            status: Stage::Proposal,
            tags: vec!["q3".to_string()],
        };
        let lead = Lead::provisional(&input, "u1", Timestamp { seconds: 5, nanoseconds: 0 });

        let tasks = tasks_from_leads(&[lead]);
        assert_eq!(tasks.len(), 1);
        assert_eq!(tasks[0].content, "No Contact");
        assert_eq!(tasks[0].column_id, Stage::Proposal);
        assert_eq!(tasks[0].company_name, "Acme");
    }
}
