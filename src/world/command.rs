use crossbeam_channel::{bounded, Receiver, Sender};

/// Mutations requested by producer contexts, applied when the engine drains
/// the queue at the start of a frame. Both carry no payload beyond
/// "triggered"; the pick itself happens at drain time against the current
/// crosshair.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WorldCommand {
    RemoveAtCrosshair,
    AddAboveCrosshair,
}

/// Bounded queue between producer contexts and the render loop.
///
/// This is the extension point for input handlers and future background
/// workers: producers push, the frame drains. Neither side ever blocks the
/// other.
pub struct CommandQueue {
    sender: Sender<WorldCommand>,
    receiver: Receiver<WorldCommand>,
}

impl CommandQueue {
    pub fn new(capacity: usize) -> Self {
        let (sender, receiver) = bounded(capacity);
        Self { sender, receiver }
    }

    pub fn sender(&self) -> CommandSender {
        CommandSender {
            sender: self.sender.clone(),
        }
    }

    /// Everything queued since the last drain, oldest first, without
    /// blocking.
    pub fn drain(&self) -> Vec<WorldCommand> {
        let mut commands = Vec::new();
        while let Ok(command) = self.receiver.try_recv() {
            commands.push(command);
        }
        commands
    }
}

/// Cloneable producer handle. A full queue drops the command instead of
/// stalling the producer against the render loop.
#[derive(Clone)]
pub struct CommandSender {
    sender: Sender<WorldCommand>,
}

impl CommandSender {
    /// Returns whether the command was accepted.
    pub fn send(&self, command: WorldCommand) -> bool {
        self.sender.try_send(command).is_ok()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_drain_preserves_send_order() {
        let queue = CommandQueue::new(8);
        let sender = queue.sender();
        assert!(sender.send(WorldCommand::RemoveAtCrosshair));
        assert!(sender.send(WorldCommand::AddAboveCrosshair));

        assert_eq!(
            queue.drain(),
            vec![
                WorldCommand::RemoveAtCrosshair,
                WorldCommand::AddAboveCrosshair
            ]
        );
        assert!(queue.drain().is_empty());
    }

    #[test]
    fn test_full_queue_drops_instead_of_blocking() {
        let queue = CommandQueue::new(2);
        let sender = queue.sender();
        assert!(sender.send(WorldCommand::AddAboveCrosshair));
        assert!(sender.send(WorldCommand::AddAboveCrosshair));
        assert!(!sender.send(WorldCommand::AddAboveCrosshair));

        assert_eq!(queue.drain().len(), 2);
    }
}
