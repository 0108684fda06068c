use crate::actions::{self, Action};
use crate::shell::Shell;

pub struct State {
    pub shell: Shell,
    action_queue: Vec<Action>,
}

impl State {
    pub fn new(shell: Shell) -> Self {
        Self {
            shell,
            action_queue: Vec::new(),
        }
    }

    pub fn dispatch(&mut self, action: Action) {
        self.action_queue.push(action);
    }

    pub fn flush_actions(&mut self) {
        let actions = std::mem::take(&mut self.action_queue);
        for action in actions {
            actions::update(&mut self.shell, action);
        }
    }

    pub fn has_pending_actions(&self) -> bool {
        !self.action_queue.is_empty()
    }
}
