use super::types::KanaEvent;

pub type Listener = Box<dyn FnMut(&KanaEvent) + Send>;

/// Handle returned by [`KanaProvider::on`](crate::KanaProvider::on).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ListenerId(u64);

/// Synchronous listener registry. Listeners run in registration order.
#[derive(Default)]
pub(crate) struct Emitter {
    listeners: Vec<(ListenerId, Listener)>,
    next_id: u64,
}

impl Emitter {
    pub(crate) fn on(&mut self, listener: Listener) -> ListenerId {
        let id = ListenerId(self.next_id);
        self.next_id += 1;
        self.listeners.push((id, listener));
        id
    }

    pub(crate) fn remove(&mut self, id: ListenerId) -> bool {
        let before = self.listeners.len();
        self.listeners.retain(|(lid, _)| *lid != id);
        self.listeners.len() != before
    }

    pub(crate) fn emit(&mut self, event: &KanaEvent) {
        for (_, listener) in &mut self.listeners {
            listener(event);
        }
    }

    pub(crate) fn len(&self) -> usize {
        self.listeners.len()
    }
}
